use serde::Deserialize;
use uuid::Uuid;

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OfferRequest {
    pub listing_id: Uuid,
    pub proposal: String,
    pub price: i64,
    pub timeline: String,
    #[serde(default)]
    pub examples: Vec<String>,
}
