use db::models::listing::ServiceListing;
use serde::{Deserialize, Serialize};

/// Listing form fields. Create and edit share the same shape; edits never
/// touch status or offers.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListingForm {
    pub title: String,
    pub description: String,
    pub category: String,
    pub budget: i64,
    pub timeline: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CategoryQuery {
    pub category: Option<String>,
}

/// The signed-in client's own listings plus the numbers the dashboard
/// header shows.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardResponse {
    pub listings: Vec<ServiceListing>,
    pub stats: DashboardStats,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardStats {
    pub active_listings: usize,
    pub received_offers: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub average_offer_price: Option<i64>,
}
