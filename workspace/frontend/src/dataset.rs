use common::AssetRecord;
use gloo_net::http::Request;

use crate::settings;

/// Fetches the full asset dataset from its fixed static path.
///
/// One shot, no retry: a transport error or non-success status maps to a
/// single user-visible error string.
pub async fn fetch_assets() -> Result<Vec<AssetRecord>, String> {
    let path = settings::get_settings().dataset_path;
    log::debug!("GET {}", path);

    let response = Request::get(&path).send().await.map_err(|e| {
        let error_msg = format!("Request failed: {}", e);
        log::error!("GET {} - {}", path, error_msg);
        error_msg
    })?;

    if !response.ok() {
        let error_msg = format!("HTTP error: {}", response.status());
        log::error!("GET {} - {}", path, error_msg);
        return Err(error_msg);
    }

    log::trace!("GET {} - Response received, parsing JSON", path);
    let records: Vec<AssetRecord> = response.json().await.map_err(|e| {
        let error_msg = format!("Failed to parse response: {}", e);
        log::error!("GET {} - {}", path, error_msg);
        error_msg
    })?;

    log::info!("GET {} - Loaded {} asset records", path, records.len());
    Ok(records)
}
