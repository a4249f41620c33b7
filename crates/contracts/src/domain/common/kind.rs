use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::params::DetailParams;

// ============================================================================
// Resource kind
// ============================================================================

/// Вид ресурса платформы, который выбирает виджет
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResourceKind {
    Stream,
    Dataset,
}

impl ResourceKind {
    /// Lowercase wire/attribute name, matches the `dataset_type` attribute values.
    pub fn as_str(&self) -> &'static str {
        match self {
            ResourceKind::Stream => "stream",
            ResourceKind::Dataset => "dataset",
        }
    }

    /// Human label for form captions.
    pub fn label(&self) -> &'static str {
        match self {
            ResourceKind::Stream => "Stream",
            ResourceKind::Dataset => "Dataset",
        }
    }

    /// Name of the id field the detail request carries for this kind.
    pub fn id_field(&self) -> &'static str {
        match self {
            ResourceKind::Stream => "streamId",
            ResourceKind::Dataset => "datasetId",
        }
    }

    /// Build detail-request parameters for the given selection.
    ///
    /// Exactly one of the id fields is populated, with the selected
    /// resource's name.
    pub fn detail_params(&self, namespace: &str, name: &str) -> DetailParams {
        let mut params = DetailParams::new(namespace);
        match self {
            ResourceKind::Stream => params.stream_id = Some(name.to_string()),
            ResourceKind::Dataset => params.dataset_id = Some(name.to_string()),
        }
        params
    }
}

impl FromStr for ResourceKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "stream" => Ok(ResourceKind::Stream),
            "dataset" => Ok(ResourceKind::Dataset),
            other => Err(format!(
                "Unknown resource kind '{}': expected \"stream\" or \"dataset\"",
                other
            )),
        }
    }
}

impl fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
