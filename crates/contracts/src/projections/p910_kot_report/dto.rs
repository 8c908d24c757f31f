use serde::{Deserialize, Serialize};

/// Aggregated KOT line: total quantity of one menu item on one date (P910)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct KotItemDto {
    /// ISO date, naive timestamp or RFC 3339 timestamp
    #[serde(default)]
    pub date: String,
    #[serde(default)]
    pub item_name: String,
    #[serde(default)]
    pub total_quantity: f64,
}

/// Query for `GET /api/kot/items`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct KotItemsRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_date: Option<String>,
}

impl KotItemsRequest {
    /// Both bounds are sent together or not at all; the server returns
    /// every date when the query is empty.
    pub fn for_range(start_date: &str, end_date: &str) -> Self {
        if start_date.is_empty() || end_date.is_empty() {
            return Self::default();
        }
        Self {
            start_date: Some(start_date.to_string()),
            end_date: Some(end_date.to_string()),
        }
    }

    pub fn is_unbounded(&self) -> bool {
        self.start_date.is_none() && self.end_date.is_none()
    }
}

/// Response of `GET /api/kot/items`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct KotItemsResponse {
    #[serde(default)]
    pub items: Vec<KotItemDto>,
}
