//! SQS queue transport built on the AWS SDK.

use async_trait::async_trait;
use aws_sdk_sqs::Client;
use aws_sdk_sqs::error::DisplayErrorContext;
use aws_sdk_sqs::types::SendMessageBatchRequestEntry;
use tracing::debug;

use crate::core::config::OutputConfig;
use crate::core::models::TransportMessage;
use crate::errors::StreamError;
use crate::output::QueueTransport;

/// Handle to one SQS queue. Connection pooling and retries live in the SDK
/// client.
pub struct SqsQueue {
    client: Client,
    queue_url: String,
    queue_name: String,
}

impl SqsQueue {
    pub fn new(client: Client, queue_url: impl Into<String>, queue_name: impl Into<String>) -> Self {
        Self {
            client,
            queue_url: queue_url.into(),
            queue_name: queue_name.into(),
        }
    }

    /// Builds a queue handle using the ambient AWS environment configuration.
    pub async fn from_config(config: &OutputConfig) -> Self {
        let shared_config = aws_config::from_env().load().await;

        Self::new(
            Client::new(&shared_config),
            config.queue_url.clone(),
            config.queue_name.clone(),
        )
    }

    fn dispatch_error(&self, message: String) -> StreamError {
        StreamError::Dispatch {
            queue: self.queue_name.clone(),
            message,
        }
    }
}

#[async_trait]
impl QueueTransport for SqsQueue {
    fn name(&self) -> &str {
        &self.queue_name
    }

    async fn send_batch(&self, messages: Vec<TransportMessage>) -> Result<(), StreamError> {
        let mut entries = Vec::with_capacity(messages.len());

        for (index, message) in messages.into_iter().enumerate() {
            let mut entry = SendMessageBatchRequestEntry::builder()
                .id(index.to_string())
                .message_body(message.body)
                .set_message_group_id(message.group_id)
                .set_message_deduplication_id(message.deduplication_id);

            if let Some(delay) = message.delay_seconds {
                entry = entry.delay_seconds(delay);
            }

            entries.push(
                entry
                    .build()
                    .map_err(|e| self.dispatch_error(format!("invalid batch entry: {e}")))?,
            );
        }

        debug!(
            "sending batch of {} messages to queue {}",
            entries.len(),
            self.queue_name
        );

        let response = self
            .client
            .send_message_batch()
            .queue_url(&self.queue_url)
            .set_entries(Some(entries))
            .send()
            .await
            .map_err(|e| self.dispatch_error(DisplayErrorContext(e).to_string()))?;

        let failed = response.failed();
        if !failed.is_empty() {
            return Err(self.dispatch_error(format!(
                "{} of the batch entries were rejected",
                failed.len()
            )));
        }

        Ok(())
    }
}
