//! Outbound mail interface and SMTP implementation.

use aria_config::EmailConfig;
use aria_protocol::ToolError;
use async_trait::async_trait;
use lettre::message::header::ContentType;
use lettre::transport::smtp::authentication::Credentials;
use lettre::{AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor};
use log::info;

/// Provider for outbound plain-text email.
#[async_trait]
pub trait Mailer: Send + Sync {
    /// Submit one message to the relay.
    async fn send(&self, to: &str, subject: &str, body: &str) -> Result<(), ToolError>;
}

/// Mailer submitting through an SMTP relay over STARTTLS.
pub struct SmtpMailer {
    transport: AsyncSmtpTransport<Tokio1Executor>,
    from: String,
}

impl SmtpMailer {
    /// Create a mailer from the email config section.
    ///
    /// Missing credentials are a tool-level failure, never a startup
    /// abort; wiring layers that hit this leave the mailer seam empty.
    pub fn from_config(config: &EmailConfig) -> Result<Self, ToolError> {
        let (user, password) = config.credentials().ok_or_else(|| {
            ToolError::CredentialMissing("GMAIL_USER / GMAIL_APP_PASSWORD not set".to_string())
        })?;

        let transport = AsyncSmtpTransport::<Tokio1Executor>::starttls_relay(&config.smtp_host)
            .map_err(|err| ToolError::ExecutionFailed(err.to_string()))?
            .credentials(Credentials::new(user.to_string(), password.to_string()))
            .build();

        Ok(Self {
            transport,
            from: user.to_string(),
        })
    }
}

#[async_trait]
impl Mailer for SmtpMailer {
    async fn send(&self, to: &str, subject: &str, body: &str) -> Result<(), ToolError> {
        let message = Message::builder()
            .from(
                self.from
                    .parse()
                    .map_err(|_| ToolError::ExecutionFailed("invalid sender address".to_string()))?,
            )
            .to(to.parse().map_err(|_| {
                ToolError::InvalidArguments(format!("invalid recipient address: {to}"))
            })?)
            .subject(subject)
            .header(ContentType::TEXT_PLAIN)
            .body(body.to_string())
            .map_err(|err| ToolError::ExecutionFailed(err.to_string()))?;

        self.transport
            .send(message)
            .await
            .map_err(|err| ToolError::ExecutionFailed(err.to_string()))?;
        info!("sent email (to={to}, subject_len={})", subject.len());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::SmtpMailer;
    use aria_config::EmailConfig;
    use aria_protocol::ToolError;

    #[test]
    fn missing_credentials_surface_as_credential_missing() {
        let err = SmtpMailer::from_config(&EmailConfig::default())
            .err()
            .expect("err");
        assert!(matches!(err, ToolError::CredentialMissing(_)));
    }

    #[tokio::test]
    async fn configured_credentials_build_a_mailer() {
        let config = EmailConfig {
            user: Some("me@example.com".to_string()),
            app_password: Some("app-pass".to_string()),
            ..EmailConfig::default()
        };
        assert!(SmtpMailer::from_config(&config).is_ok());
    }
}
