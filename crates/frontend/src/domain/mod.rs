pub mod a001_stream;
pub mod a002_dataset;

use contracts::domain::common::{
    DetailParams, ListParams, ResourceDetail, ResourceKind, ResourceSummary,
};
use web_sys::AbortSignal;

/// List the resources of `kind` in a namespace.
///
/// Kind dispatch lives here, so UI code holds a [`ResourceKind`] chosen once
/// at construction and never branches on attribute strings.
pub async fn list_resources(
    kind: ResourceKind,
    params: &ListParams,
) -> Result<Vec<ResourceSummary>, String> {
    match kind {
        ResourceKind::Stream => a001_stream::api::list(params).await,
        ResourceKind::Dataset => a002_dataset::api::list(params).await,
    }
}

/// Fetch the detail of the resource named in `params`.
pub async fn fetch_detail(
    kind: ResourceKind,
    params: &DetailParams,
    abort: Option<&AbortSignal>,
) -> Result<ResourceDetail, String> {
    match kind {
        ResourceKind::Stream => a001_stream::api::get(params, abort).await,
        ResourceKind::Dataset => a002_dataset::api::get(params, abort).await,
    }
}
