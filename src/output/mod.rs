//! Batched message output to a size- and count-limited queue.
//!
//! `SqsOutput` takes an arbitrarily sized batch of writable messages, splits
//! it into transport-sized chunks, builds a wire envelope per message and
//! dispatches each chunk in order. Per-message and per-chunk failures are
//! collected and surfaced together after every chunk has been attempted; a
//! failed chunk never blocks its siblings.

mod attributes;
mod chunk;

pub use attributes::{
    ATTRIBUTE_DELAY_SECONDS, ATTRIBUTE_MESSAGE_DEDUPLICATION_ID, ATTRIBUTE_MESSAGE_GROUP_ID,
    extract_delivery_options,
};
pub use chunk::chunk;

use async_trait::async_trait;
use tracing::{debug, warn};

use crate::core::config::FifoConfig;
use crate::core::models::{TransportMessage, WritableMessage};
use crate::errors::{ErrorList, StreamError};

/// Maximum number of messages SQS accepts in one `SendMessageBatch` call.
pub const MAX_BATCH_SIZE: usize = 10;
/// Maximum SQS message payload in bytes.
pub const MAX_MESSAGE_SIZE: usize = 256 * 1024;

/// The queue service seam. A failed send reports the whole sub-batch as one
/// error; per-item responses are the transport's concern.
#[async_trait]
pub trait QueueTransport: Send + Sync {
    fn name(&self) -> &str;

    async fn send_batch(&self, messages: Vec<TransportMessage>) -> Result<(), StreamError>;
}

/// Batched output over a queue transport.
///
/// Holds no mutable state; concurrent `write` calls on the same instance only
/// share the transport handle and configuration.
pub struct SqsOutput<Q> {
    queue: Q,
    fifo: FifoConfig,
}

impl<Q: QueueTransport> SqsOutput<Q> {
    pub fn new(queue: Q, fifo: FifoConfig) -> Self {
        Self { queue, fifo }
    }

    pub fn queue(&self) -> &Q {
        &self.queue
    }

    /// Largest single-message payload the transport accepts, in bytes.
    /// Advertised to upstream batching logic; not enforced here — oversized
    /// payloads surface as dispatch errors.
    #[must_use]
    pub fn max_message_size(&self) -> usize {
        MAX_MESSAGE_SIZE
    }

    /// Largest message count per dispatch call.
    #[must_use]
    pub fn max_batch_size(&self) -> usize {
        MAX_BATCH_SIZE
    }

    pub async fn write_one<M: WritableMessage>(&self, message: &M) -> Result<(), StreamError> {
        self.write(std::slice::from_ref(message)).await
    }

    /// Writes `batch` to the queue in sub-batches of at most
    /// [`MAX_BATCH_SIZE`] messages, sequentially and in input order.
    ///
    /// Returns `Ok(())` only if every message built and every attempted
    /// dispatch succeeded. Otherwise returns a single [`StreamError::Write`]
    /// whose [`ErrorList`] carries every underlying build and dispatch
    /// failure, in order.
    pub async fn write<M: WritableMessage>(&self, batch: &[M]) -> Result<(), StreamError> {
        let mut errors = ErrorList::new();

        for sub_batch in chunk(batch, MAX_BATCH_SIZE) {
            let messages = self.build_transport_messages(sub_batch, &mut errors);

            if messages.is_empty() {
                debug!(
                    "skipping dispatch of a sub-batch with no buildable messages for queue {}",
                    self.queue.name()
                );
                continue;
            }

            if let Err(error) = self.queue.send_batch(messages).await {
                errors.push(error);
            }
        }

        errors.into_result()
    }

    fn build_transport_messages<M: WritableMessage>(
        &self,
        sub_batch: &[M],
        errors: &mut ErrorList,
    ) -> Vec<TransportMessage> {
        let mut messages = Vec::with_capacity(sub_batch.len());

        for message in sub_batch {
            match self.build_transport_message(message) {
                Ok(built) => messages.push(built),
                Err(error) => errors.push(error),
            }
        }

        messages
    }

    fn build_transport_message<M: WritableMessage>(
        &self,
        message: &M,
    ) -> Result<TransportMessage, StreamError> {
        let options = extract_delivery_options(message.attributes())?;

        let group_id = options.group_id.filter(|id| !id.is_empty());
        let deduplication_id = options.deduplication_id.filter(|id| !id.is_empty());

        if self.fifo.content_based_deduplication && deduplication_id.is_none() {
            warn!(
                "writing message to queue {} (which is configured to use content based deduplication) without message deduplication id",
                self.queue.name()
            );
        }

        let body = message.marshal_to_string()?;

        Ok(TransportMessage {
            body,
            delay_seconds: (options.delay_seconds != 0).then_some(options.delay_seconds),
            group_id,
            deduplication_id,
        })
    }
}
