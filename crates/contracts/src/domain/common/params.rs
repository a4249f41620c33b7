use serde::{Deserialize, Serialize};

/// Parameters of a "list resources in namespace" request.
///
/// The listing call is filtered by namespace and nothing else.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListParams {
    pub namespace: String,
}

impl ListParams {
    pub fn new(namespace: impl Into<String>) -> Self {
        Self {
            namespace: namespace.into(),
        }
    }
}

/// Parameters of a "get resource detail" request.
///
/// Carries the namespace plus exactly one of the id fields, depending on the
/// resource kind (`ResourceKind::detail_params` enforces this).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DetailParams {
    pub namespace: String,

    #[serde(rename = "streamId", default, skip_serializing_if = "Option::is_none")]
    pub stream_id: Option<String>,

    #[serde(rename = "datasetId", default, skip_serializing_if = "Option::is_none")]
    pub dataset_id: Option<String>,
}

impl DetailParams {
    pub fn new(namespace: impl Into<String>) -> Self {
        Self {
            namespace: namespace.into(),
            stream_id: None,
            dataset_id: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::common::ResourceKind;

    #[test]
    fn test_list_params_carry_namespace_only() {
        let query = serde_qs::to_string(&ListParams::new("demo")).unwrap();
        assert_eq!(query, "namespace=demo");
    }

    #[test]
    fn test_stream_detail_params_wire_shape() {
        let params = ResourceKind::Stream.detail_params("demo", "X");
        let query = serde_qs::to_string(&params).unwrap();
        assert_eq!(query, "namespace=demo&streamId=X");
    }

    #[test]
    fn test_dataset_detail_params_wire_shape() {
        let params = ResourceKind::Dataset.detail_params("demo", "X");
        let query = serde_qs::to_string(&params).unwrap();
        assert_eq!(query, "namespace=demo&datasetId=X");
    }

    #[test]
    fn test_detail_params_round_trip() {
        let params = ResourceKind::Dataset.detail_params("demo", "purchases");
        let query = serde_qs::to_string(&params).unwrap();
        let back: DetailParams = serde_qs::from_str(&query).unwrap();
        assert_eq!(back, params);
    }
}
