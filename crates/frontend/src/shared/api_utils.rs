//! API utilities for frontend-backend communication
//!
//! Provides helper functions for constructing API URLs.

use crate::config::{config, ApiConfig};

/// Get the base URL for API requests
///
/// Uses `api.base_url` from the configuration when set; otherwise builds it
/// from the current window location and `api.port`.
///
/// # Returns
/// - API base URL like "http://192.168.1.40:5000"
/// - Empty string if neither is available (requests become same-origin)
pub fn api_base() -> String {
    let api = &config().api;
    if !api.base_url.is_empty() {
        return api.base_url.clone();
    }
    let window = match web_sys::window() {
        Some(w) => w,
        None => return String::new(),
    };
    let location = window.location();
    let protocol = location.protocol().unwrap_or_else(|_| "http:".to_string());
    let hostname = location
        .hostname()
        .unwrap_or_else(|_| "127.0.0.1".to_string());
    location_base(api, &protocol, &hostname)
}

fn location_base(api: &ApiConfig, protocol: &str, hostname: &str) -> String {
    format!("{}//{}:{}", protocol, hostname, api.port)
}

/// Build a full API URL from a path
///
/// # Example
/// ```rust,ignore
/// let url = api_url("/api/kot/items");
/// ```
pub fn api_url(path: &str) -> String {
    format!("{}{}", api_base(), path)
}
