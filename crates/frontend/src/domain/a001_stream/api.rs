//! REST client for stream resources.

use contracts::domain::common::{DetailParams, ListParams, ResourceDetail, ResourceSummary};
use gloo_net::http::Request;
use web_sys::AbortSignal;

use crate::shared::api_utils::api_url;

pub(crate) fn list_path(params: &ListParams) -> String {
    format!(
        "/v3/namespaces/{}/streams",
        urlencoding::encode(&params.namespace)
    )
}

pub(crate) fn detail_path(params: &DetailParams) -> Result<String, String> {
    let stream_id = params
        .stream_id
        .as_deref()
        .ok_or_else(|| "Detail params are missing streamId".to_string())?;
    Ok(format!(
        "/v3/namespaces/{}/streams/{}",
        urlencoding::encode(&params.namespace),
        urlencoding::encode(stream_id)
    ))
}

/// List the streams of a namespace.
pub async fn list(params: &ListParams) -> Result<Vec<ResourceSummary>, String> {
    let response = Request::get(&api_url(&list_path(params)))
        .send()
        .await
        .map_err(|e| format!("Request failed: {}", e))?;

    if !response.ok() {
        return Err(format!("HTTP error: {}", response.status()));
    }

    response
        .json()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))
}

/// Fetch one stream's detail. `abort` cancels the request mid-flight.
pub async fn get(
    params: &DetailParams,
    abort: Option<&AbortSignal>,
) -> Result<ResourceDetail, String> {
    let response = Request::get(&api_url(&detail_path(params)?))
        .abort_signal(abort)
        .send()
        .await
        .map_err(|e| format!("Request failed: {}", e))?;

    if !response.ok() {
        return Err(format!("HTTP error: {}", response.status()));
    }

    response
        .json()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))
}
