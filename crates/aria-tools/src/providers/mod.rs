//! Provider seams consumed by the built-in tools.

mod mail;
mod search;
mod weather;

pub use mail::{Mailer, SmtpMailer};
pub use search::{DuckDuckGoProvider, SearchProvider, SearchResult, search_provider_from_config};
pub use weather::{WeatherProvider, WttrWeatherProvider};
