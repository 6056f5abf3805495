//! Built-in email dispatch tool.

use crate::builtins::utils::parse_args;
use crate::{Tool, ToolContext};
use aria_protocol::ToolError;
use async_trait::async_trait;
use serde::Deserialize;
use serde_json::{Value, json};

/// Tool sending a plain-text email through the configured relay.
#[derive(Debug, Default)]
pub struct SendEmailTool;

/// Arguments for SendEmailTool.
#[derive(Debug, Deserialize)]
struct SendEmailArgs {
    to: String,
    subject: String,
    body: String,
}

#[async_trait]
impl Tool for SendEmailTool {
    fn name(&self) -> &str {
        "send_email"
    }

    fn description(&self) -> &str {
        "Send an email to a recipient on the user's behalf"
    }

    fn args_schema(&self) -> Value {
        json!({
            "type": "object",
            "properties": {
                "to": {
                    "type": "string",
                    "description": "Recipient email address."
                },
                "subject": {
                    "type": "string",
                    "description": "Email subject line."
                },
                "body": {
                    "type": "string",
                    "description": "Plain-text email body."
                }
            },
            "required": ["to", "subject", "body"]
        })
    }

    async fn call(&self, ctx: &ToolContext, args: Value) -> Result<String, ToolError> {
        let input: SendEmailArgs = parse_args(args)?;
        if input.to.trim().is_empty() {
            return Err(ToolError::InvalidArguments(
                "recipient cannot be empty".to_string(),
            ));
        }
        let mailer = ctx.services.mailer.as_ref().ok_or_else(|| {
            ToolError::CredentialMissing("email credentials not configured".to_string())
        })?;
        mailer.send(&input.to, &input.subject, &input.body).await?;
        Ok(format!("Email sent to {}.", input.to))
    }
}

#[cfg(test)]
mod tests {
    use super::SendEmailTool;
    use crate::providers::Mailer;
    use crate::{Tool, ToolContext, ToolServices};
    use aria_protocol::ToolError;
    use async_trait::async_trait;
    use parking_lot::Mutex;
    use pretty_assertions::assert_eq;
    use serde_json::json;
    use std::sync::Arc;

    #[derive(Default)]
    struct RecordingMailer {
        sent: Mutex<Vec<(String, String, String)>>,
    }

    #[async_trait]
    impl Mailer for RecordingMailer {
        async fn send(&self, to: &str, subject: &str, body: &str) -> Result<(), ToolError> {
            self.sent
                .lock()
                .push((to.to_string(), subject.to_string(), body.to_string()));
            Ok(())
        }
    }

    #[tokio::test]
    async fn missing_mailer_is_a_credential_failure() {
        let err = SendEmailTool
            .call(
                &ToolContext::default(),
                json!({"to": "a@b.c", "subject": "hi", "body": "text"}),
            )
            .await
            .err()
            .expect("err");
        assert!(matches!(err, ToolError::CredentialMissing(_)));
    }

    #[tokio::test]
    async fn sends_through_the_configured_mailer() {
        let mailer = Arc::new(RecordingMailer::default());
        let ctx = ToolContext::new(ToolServices {
            mailer: Some(mailer.clone()),
            ..ToolServices::default()
        });

        let text = SendEmailTool
            .call(
                &ctx,
                json!({"to": "a@b.c", "subject": "hello", "body": "text"}),
            )
            .await
            .expect("result");
        assert_eq!(text, "Email sent to a@b.c.");
        assert_eq!(
            mailer.sent.lock().clone(),
            vec![(
                "a@b.c".to_string(),
                "hello".to_string(),
                "text".to_string()
            )]
        );
    }
}
