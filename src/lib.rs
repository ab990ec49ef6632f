/// Batched message output for AWS SQS.
///
/// This crate delivers application messages to a size- and count-limited SQS
/// queue: batches are split into `SendMessageBatch`-sized chunks, per-message
/// delivery options (delay, FIFO group id, deduplication id) are read from
/// each message's attribute map, and partial failures across sub-batches are
/// aggregated into one composite error instead of aborting the call.
///
/// # Example
///
/// ```no_run
/// use sqs_output::core::config::OutputConfig;
/// use sqs_output::core::models::Message;
/// use sqs_output::output::{ATTRIBUTE_MESSAGE_GROUP_ID, SqsOutput};
/// use sqs_output::sqs::SqsQueue;
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     // Set up structured logging
///     sqs_output::setup_logging();
///
///     let config = OutputConfig::from_env()?;
///     let queue = SqsQueue::from_config(&config).await;
///     let output = SqsOutput::new(queue, config.fifo.clone());
///
///     let message = Message::new(r#"{"orderId":42}"#)
///         .with_attribute(ATTRIBUTE_MESSAGE_GROUP_ID, "order-42");
///
///     output.write_one(&message).await?;
///
///     Ok(())
/// }
/// ```
// Module declarations
pub mod core;
pub mod errors;
pub mod output;
pub mod sqs;

/// Configure structured logging with JSON format for AWS environments.
///
/// Sets up tracing-subscriber with a JSON formatter suitable for `CloudWatch`
/// Logs integration. Call once at process start.
pub fn setup_logging() {
    use tracing_subscriber::prelude::*;
    let fmt_layer = tracing_subscriber::fmt::layer().json().with_target(true);

    tracing_subscriber::registry().with(fmt_layer).init();
}
