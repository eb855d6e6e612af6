use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ListingStatus {
    Open,
    Closed,
    InProgress,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OfferStatus {
    Pending,
    Accepted,
    Rejected,
}

/// A company's bid against a listing. Offers live embedded in their parent
/// listing record instead of under their own keys.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Offer {
    pub id: Uuid,
    pub company_id: Uuid,
    pub company_name: String,
    pub listing_id: Uuid,
    pub proposal: String,
    pub price: i64,
    pub timeline: String,
    pub examples: Vec<String>,
    pub status: OfferStatus,
    pub created_at: DateTime<Utc>,
}

/// A client-posted request for a service, stored at `listing:<id>`. The
/// owner's `client-listings:<clientId>` index holds the listing id.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceListing {
    pub id: Uuid,
    pub client_id: Uuid,
    pub title: String,
    pub description: String,
    pub category: String,
    pub budget: i64,
    pub timeline: String,
    pub status: ListingStatus,
    pub offers: Vec<Offer>,
    pub created_at: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

impl ServiceListing {
    pub fn new(
        client_id: Uuid,
        title: String,
        description: String,
        category: String,
        budget: i64,
        timeline: String,
        now: DateTime<Utc>,
    ) -> Self {
        ServiceListing {
            id: Uuid::new_v4(),
            client_id,
            title,
            description,
            category,
            budget,
            timeline,
            status: ListingStatus::Open,
            offers: Vec::new(),
            created_at: now,
            updated_at: None,
        }
    }

    pub fn is_open(&self) -> bool {
        self.status == ListingStatus::Open
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fresh_listing_is_open_with_no_offers() {
        let listing = ServiceListing::new(
            Uuid::new_v4(),
            "Website Redesign".to_string(),
            "d".repeat(60),
            "Web Design & Entwicklung".to_string(),
            5000,
            "2-4 Wochen".to_string(),
            Utc::now(),
        );
        assert_eq!(listing.status, ListingStatus::Open);
        assert!(listing.offers.is_empty());
        assert!(listing.updated_at.is_none());
    }

    #[test]
    fn status_wire_format() {
        assert_eq!(
            serde_json::to_string(&ListingStatus::InProgress).unwrap(),
            "\"in_progress\""
        );
        assert_eq!(
            serde_json::to_string(&OfferStatus::Pending).unwrap(),
            "\"pending\""
        );
    }
}
