use std::fmt;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum StreamError {
    #[error("the type of the {key} attribute with value {value} should be castable to {expected}")]
    AttributeCast {
        key: &'static str,
        value: String,
        expected: &'static str,
    },

    #[error("failed to marshal message body: {0}")]
    Marshal(String),

    #[error("failed to dispatch batch to queue {queue}: {message}")]
    Dispatch { queue: String, message: String },

    #[error("there were errors on writing to the stream: {0}")]
    Write(#[source] ErrorList),
}

impl From<serde_json::Error> for StreamError {
    fn from(error: serde_json::Error) -> Self {
        StreamError::Marshal(error.to_string())
    }
}

/// Ordered collection of independent failures gathered over one write call.
///
/// Every underlying error is kept, in the order it occurred, so callers can
/// inspect each failure instead of parsing a flattened message.
#[derive(Debug, Default)]
pub struct ErrorList {
    errors: Vec<StreamError>,
}

impl ErrorList {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, error: StreamError) {
        self.errors.push(error);
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.errors.len()
    }

    #[must_use]
    pub fn errors(&self) -> &[StreamError] {
        &self.errors
    }

    /// Collapses the list into `Ok(())` when nothing failed, or a single
    /// `StreamError::Write` carrying every collected error otherwise.
    pub fn into_result(self) -> Result<(), StreamError> {
        if self.errors.is_empty() {
            Ok(())
        } else {
            Err(StreamError::Write(self))
        }
    }
}

impl fmt::Display for ErrorList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.errors.as_slice() {
            [] => write!(f, "no errors"),
            [single] => write!(f, "{single}"),
            many => {
                write!(f, "{} errors occurred:", many.len())?;
                for (index, error) in many.iter().enumerate() {
                    write!(f, " [{}] {error}", index + 1)?;
                }
                Ok(())
            }
        }
    }
}

impl std::error::Error for ErrorList {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.errors
            .first()
            .map(|error| error as &(dyn std::error::Error + 'static))
    }
}
