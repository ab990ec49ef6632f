use std::env;

/// FIFO queue behavior flags, mirroring the queue's own configuration.
#[derive(Debug, Clone, Default)]
pub struct FifoConfig {
    pub enabled: bool,
    pub content_based_deduplication: bool,
}

#[derive(Debug, Clone)]
pub struct OutputConfig {
    pub queue_url: String,
    pub queue_name: String,
    pub fifo: FifoConfig,
}

impl OutputConfig {
    pub fn from_env() -> Result<Self, String> {
        Ok(Self {
            queue_url: env::var("SQS_QUEUE_URL").map_err(|e| format!("SQS_QUEUE_URL: {e}"))?,
            queue_name: env::var("SQS_QUEUE_NAME").map_err(|e| format!("SQS_QUEUE_NAME: {e}"))?,
            fifo: FifoConfig {
                enabled: env_flag("SQS_FIFO_ENABLED"),
                content_based_deduplication: env_flag("SQS_CONTENT_BASED_DEDUPLICATION"),
            },
        })
    }
}

fn env_flag(name: &str) -> bool {
    env::var(name).is_ok_and(|value| parse_flag(&value))
}

fn parse_flag(value: &str) -> bool {
    matches!(
        value.trim().to_ascii_lowercase().as_str(),
        "1" | "true" | "yes" | "on"
    )
}
