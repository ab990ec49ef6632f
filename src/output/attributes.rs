//! Extraction of per-message delivery options from the attribute map.

use std::collections::HashMap;

use crate::core::models::{AttributeValue, DeliveryOptions};
use crate::errors::StreamError;

/// Attribute holding the per-message delay in seconds.
pub const ATTRIBUTE_DELAY_SECONDS: &str = "sqsDelaySeconds";
/// Attribute holding the FIFO message group id.
pub const ATTRIBUTE_MESSAGE_GROUP_ID: &str = "sqsMessageGroupId";
/// Attribute holding the explicit deduplication id.
pub const ATTRIBUTE_MESSAGE_DEDUPLICATION_ID: &str = "sqsMessageDeduplicationId";

/// Reads the recognized delivery attributes out of `attributes`.
///
/// Absent keys leave the corresponding option at its zero value; a present
/// but non-coercible value fails with an error naming the key, the offending
/// value and the expected type. Unrecognized keys are ignored.
pub fn extract_delivery_options(
    attributes: &HashMap<String, AttributeValue>,
) -> Result<DeliveryOptions, StreamError> {
    let mut options = DeliveryOptions::default();

    if let Some(value) = attributes.get(ATTRIBUTE_DELAY_SECONDS) {
        options.delay_seconds = value
            .coerce_i32()
            .ok_or_else(|| cast_error(ATTRIBUTE_DELAY_SECONDS, value, "int32"))?;
    }

    if let Some(value) = attributes.get(ATTRIBUTE_MESSAGE_GROUP_ID) {
        options.group_id = Some(
            value
                .coerce_string()
                .ok_or_else(|| cast_error(ATTRIBUTE_MESSAGE_GROUP_ID, value, "string"))?,
        );
    }

    if let Some(value) = attributes.get(ATTRIBUTE_MESSAGE_DEDUPLICATION_ID) {
        options.deduplication_id = Some(
            value
                .coerce_string()
                .ok_or_else(|| cast_error(ATTRIBUTE_MESSAGE_DEDUPLICATION_ID, value, "string"))?,
        );
    }

    Ok(options)
}

fn cast_error(key: &'static str, value: &AttributeValue, expected: &'static str) -> StreamError {
    StreamError::AttributeCast {
        key,
        value: value.to_string(),
        expected,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn absent_keys_leave_the_defaults() {
        let options = extract_delivery_options(&HashMap::new()).unwrap();

        assert_eq!(options, DeliveryOptions::default());
    }

    #[test]
    fn recognized_attributes_are_extracted() {
        let attributes = HashMap::from([
            (ATTRIBUTE_DELAY_SECONDS.to_string(), AttributeValue::Int(45)),
            (
                ATTRIBUTE_MESSAGE_GROUP_ID.to_string(),
                AttributeValue::from("group-1"),
            ),
            (
                ATTRIBUTE_MESSAGE_DEDUPLICATION_ID.to_string(),
                AttributeValue::from("dedup-1"),
            ),
        ]);

        let options = extract_delivery_options(&attributes).unwrap();

        assert_eq!(options.delay_seconds, 45);
        assert_eq!(options.group_id.as_deref(), Some("group-1"));
        assert_eq!(options.deduplication_id.as_deref(), Some("dedup-1"));
    }

    #[test]
    fn numeric_string_delay_is_coerced() {
        let attributes = HashMap::from([(
            ATTRIBUTE_DELAY_SECONDS.to_string(),
            AttributeValue::from("30"),
        )]);

        let options = extract_delivery_options(&attributes).unwrap();

        assert_eq!(options.delay_seconds, 30);
    }

    #[test]
    fn non_numeric_delay_names_key_value_and_expected_type() {
        let attributes = HashMap::from([(
            ATTRIBUTE_DELAY_SECONDS.to_string(),
            AttributeValue::from("soon"),
        )]);

        let error = extract_delivery_options(&attributes).unwrap_err();

        let rendered = error.to_string();
        assert!(rendered.contains(ATTRIBUTE_DELAY_SECONDS), "{rendered}");
        assert!(rendered.contains("soon"), "{rendered}");
        assert!(rendered.contains("int32"), "{rendered}");
    }

    #[test]
    fn integer_group_id_is_stringified() {
        let attributes = HashMap::from([(
            ATTRIBUTE_MESSAGE_GROUP_ID.to_string(),
            AttributeValue::Int(7),
        )]);

        let options = extract_delivery_options(&attributes).unwrap();

        assert_eq!(options.group_id.as_deref(), Some("7"));
    }

    #[test]
    fn unrecognized_keys_are_ignored() {
        let attributes = HashMap::from([(
            "traceId".to_string(),
            AttributeValue::from("abc-123"),
        )]);

        let options = extract_delivery_options(&attributes).unwrap();

        assert_eq!(options, DeliveryOptions::default());
    }
}
