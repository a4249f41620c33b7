use serde::{Deserialize, Serialize};

// ============================================================================
// Wire DTOs
// ============================================================================

/// One entry of a listing response. The platform returns more fields per
/// resource; the selector only needs the name, everything else is ignored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResourceSummary {
    pub name: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl ResourceSummary {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: None,
        }
    }
}

/// Record format block of a detail response.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RecordFormat {
    /// Schema of the resource's records, kept as raw JSON.
    #[serde(default)]
    pub schema: serde_json::Value,
}

/// Detail response for a stream or dataset.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ResourceDetail {
    #[serde(default)]
    pub format: RecordFormat,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

impl ResourceDetail {
    /// Serialize `format.schema` to the JSON string published on the event
    /// channel. Field order of the wire schema is preserved.
    pub fn schema_payload(&self) -> Result<String, String> {
        serde_json::to_string(&self.format.schema)
            .map_err(|e| format!("Failed to serialize schema: {}", e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_schema_payload_keeps_field_order() {
        let detail: ResourceDetail = serde_json::from_str(
            r#"{ "format": { "schema": {"type":"record","fields":[]} } }"#,
        )
        .unwrap();
        assert_eq!(
            detail.schema_payload().unwrap(),
            r#"{"type":"record","fields":[]}"#
        );
    }

    #[test]
    fn test_detail_tolerates_unknown_fields() {
        let detail: ResourceDetail = serde_json::from_str(
            r#"{ "name": "events", "type": "stream", "ttl": 9000,
                 "format": { "schema": {"type":"record","fields":[]}, "name": "avro" } }"#,
        )
        .unwrap();
        assert_eq!(detail.name.as_deref(), Some("events"));
        assert_eq!(detail.schema_payload().unwrap(), r#"{"type":"record","fields":[]}"#);
    }

    #[test]
    fn test_missing_format_defaults_to_null_schema() {
        let detail: ResourceDetail = serde_json::from_str(r#"{ "name": "bare" }"#).unwrap();
        assert_eq!(detail.schema_payload().unwrap(), "null");
    }

    #[test]
    fn test_summary_needs_only_name() {
        let list: Vec<ResourceSummary> =
            serde_json::from_str(r#"[ {"name": "a"}, {"name": "b", "description": "second"} ]"#)
                .unwrap();
        assert_eq!(list.len(), 2);
        assert_eq!(list[1].description.as_deref(), Some("second"));
    }
}
