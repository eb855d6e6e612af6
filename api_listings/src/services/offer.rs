use chrono::{DateTime, Utc};
use common::{
    error::{AppError, Res},
    format,
};
use db::models::{
    listing::{Offer, OfferStatus, ServiceListing},
    profile::UserProfile,
};
use uuid::Uuid;

use crate::dtos::offer::OfferRequest;

/// Offer form rules. First failing rule wins; the messages mirror the ones
/// shown in the web client.
pub fn validate_offer(req: &OfferRequest) -> Res<()> {
    if req.proposal.trim().is_empty() {
        return Err(AppError::BadRequest(
            "Projektvorschlag ist erforderlich".to_string(),
        ));
    }
    if req.proposal.chars().count() < 100 {
        return Err(AppError::BadRequest(
            "Projektvorschlag muss mindestens 100 Zeichen lang sein".to_string(),
        ));
    }
    if req.price < 1 {
        return Err(AppError::BadRequest(
            "Preis muss eine positive Zahl sein".to_string(),
        ));
    }
    if req.timeline.trim().is_empty() {
        return Err(AppError::BadRequest(
            "Liefertermin ist erforderlich".to_string(),
        ));
    }
    for url in &req.examples {
        if !url.trim().is_empty() && !format::is_valid_url(url.trim()) {
            return Err(AppError::BadRequest(format!("Ungültige URL: {}", url)));
        }
    }
    Ok(())
}

/// Only company profiles may bid on listings.
pub fn ensure_company(profile: &UserProfile) -> Res<()> {
    if !profile.is_company() {
        return Err(AppError::Forbidden(
            "Nur Firmen können Offerten einreichen".to_string(),
        ));
    }
    Ok(())
}

/// Builds the pending offer and appends it to the listing. The company name
/// is denormalized into the offer so the browse view needs no extra lookup.
pub fn append_offer(
    listing: &mut ServiceListing,
    profile: &UserProfile,
    company_id: Uuid,
    req: OfferRequest,
    now: DateTime<Utc>,
) -> Offer {
    let offer = Offer {
        id: Uuid::new_v4(),
        company_id,
        company_name: profile.company_name.clone().unwrap_or_default(),
        listing_id: listing.id,
        proposal: req.proposal,
        price: req.price,
        timeline: req.timeline,
        examples: req
            .examples
            .into_iter()
            .map(|url| url.trim().to_string())
            .filter(|url| !url.is_empty())
            .collect(),
        status: OfferStatus::Pending,
        created_at: now,
    };
    listing.offers.push(offer.clone());
    offer
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(listing_id: Uuid) -> OfferRequest {
        OfferRequest {
            listing_id,
            proposal: "p".repeat(120),
            price: 4500,
            timeline: "2-4 Wochen".to_string(),
            examples: vec!["https://acme.ch/portfolio".to_string()],
        }
    }

    fn open_listing() -> ServiceListing {
        ServiceListing::new(
            Uuid::new_v4(),
            "Logo".to_string(),
            "d".repeat(60),
            "Grafikdesign".to_string(),
            2000,
            "1-2 Wochen".to_string(),
            Utc::now(),
        )
    }

    #[test]
    fn rejects_short_proposal_and_bad_portfolio_url() {
        let mut req = request(Uuid::new_v4());
        req.proposal = "zu kurz".to_string();
        assert!(validate_offer(&req).is_err());

        let mut req = request(Uuid::new_v4());
        req.examples = vec!["keine-url".to_string()];
        let err = validate_offer(&req).unwrap_err();
        assert!(err.to_string().contains("Ungültige URL"));
    }

    #[test]
    fn individual_profile_cannot_submit() {
        let profile = UserProfile::individual(
            Uuid::new_v4(),
            "h@m.ch".to_string(),
            "Hans".to_string(),
            Utc::now(),
        );
        assert!(ensure_company(&profile).is_err());
    }

    #[test]
    fn appended_offer_is_pending_and_carries_company_name() {
        let mut listing = open_listing();
        let company_id = Uuid::new_v4();
        let profile = UserProfile::company(
            company_id,
            "a@b.ch".to_string(),
            "Acme AG".to_string(),
            Utc::now(),
        );

        let req = request(listing.id);
        let offer = append_offer(&mut listing, &profile, company_id, req, Utc::now());

        assert_eq!(listing.offers.len(), 1);
        assert_eq!(offer.status, OfferStatus::Pending);
        assert_eq!(offer.company_name, "Acme AG");
        assert_eq!(offer.listing_id, listing.id);
        assert_eq!(offer.examples, vec!["https://acme.ch/portfolio"]);
    }
}
