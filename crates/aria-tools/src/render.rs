//! Natural-language rendering of tool failures.
//!
//! The conversational layer never surfaces an error object to the
//! user; it speaks a short fallback line instead.

use aria_protocol::ToolError;

/// Render a tool failure as a user-facing fallback line.
pub fn render_tool_error(tool_name: &str, err: &ToolError) -> String {
    match err {
        ToolError::CredentialMissing(_) => match tool_name {
            "send_email" => "Sorry, email isn't set up right now.".to_string(),
            _ => format!("Sorry, {} isn't set up right now.", describe(tool_name)),
        },
        ToolError::InvalidArguments(_) => {
            format!("Sorry, I didn't catch what you need for {}.", describe(tool_name))
        }
        ToolError::ToolNotFound(name) => {
            format!("Sorry, I don't know how to do \"{name}\".")
        }
        ToolError::ExecutionFailed(_) => {
            format!("Sorry, I couldn't {} right now.", describe(tool_name))
        }
    }
}

fn describe(tool_name: &str) -> &str {
    match tool_name {
        "get_weather" => "fetch the weather",
        "web_search" => "search the web",
        "send_email" => "send that email",
        other => other,
    }
}

#[cfg(test)]
mod tests {
    use super::render_tool_error;
    use aria_protocol::ToolError;
    use pretty_assertions::assert_eq;

    #[test]
    fn execution_failures_become_sorry_lines() {
        let err = ToolError::ExecutionFailed("status 503".to_string());
        assert_eq!(
            render_tool_error("get_weather", &err),
            "Sorry, I couldn't fetch the weather right now."
        );
        assert_eq!(
            render_tool_error("web_search", &err),
            "Sorry, I couldn't search the web right now."
        );
    }

    #[test]
    fn credential_failures_name_the_capability() {
        let err = ToolError::CredentialMissing("GMAIL_USER".to_string());
        assert_eq!(
            render_tool_error("send_email", &err),
            "Sorry, email isn't set up right now."
        );
    }
}
