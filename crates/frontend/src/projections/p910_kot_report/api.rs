use contracts::projections::p910_kot_report::dto::{KotItemsRequest, KotItemsResponse};
use contracts::projections::p910_kot_report::range::ReportDateRange;
use gloo_net::http::Request;

use crate::shared::api_utils::api_url;

const API_PATH: &str = "/api/kot/items";

/// Path with the range query; bare path when either bound is empty
pub fn kot_items_path(range: &ReportDateRange) -> Result<String, String> {
    let request = KotItemsRequest::for_range(&range.start, &range.end);
    if request.is_unbounded() {
        return Ok(API_PATH.to_string());
    }
    let query =
        serde_qs::to_string(&request).map_err(|e| format!("Failed to encode query: {}", e))?;
    Ok(format!("{}?{}", API_PATH, query))
}

/// Получить агрегаты KOT за период
pub async fn fetch_kot_items(range: &ReportDateRange) -> Result<KotItemsResponse, String> {
    let url = api_url(&kot_items_path(range)?);
    log::debug!("GET {}", url);

    let response = Request::get(&url)
        .send()
        .await
        .map_err(|e| format!("Request failed: {}", e))?;

    if !response.ok() {
        return Err(format!("HTTP error: {}", response.status()));
    }

    let data: KotItemsResponse = response
        .json()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))?;

    log::debug!("Received {} KOT items", data.items.len());
    Ok(data)
}
