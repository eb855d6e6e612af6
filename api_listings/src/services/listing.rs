use chrono::{DateTime, Utc};
use common::error::{AppError, Res};
use db::models::listing::ServiceListing;
use uuid::Uuid;

use crate::dtos::listing::{DashboardStats, ListingForm};

/// Listing form rules. First failing rule wins; the messages mirror the
/// ones shown in the web client.
pub fn validate_listing(form: &ListingForm) -> Res<()> {
    if form.title.trim().is_empty() {
        return Err(AppError::BadRequest("Titel ist erforderlich".to_string()));
    }
    if form.title.chars().count() > 100 {
        return Err(AppError::BadRequest(
            "Titel darf maximal 100 Zeichen lang sein".to_string(),
        ));
    }
    if form.description.trim().is_empty() {
        return Err(AppError::BadRequest(
            "Beschreibung ist erforderlich".to_string(),
        ));
    }
    if form.description.chars().count() < 50 {
        return Err(AppError::BadRequest(
            "Beschreibung muss mindestens 50 Zeichen lang sein".to_string(),
        ));
    }
    if form.category.is_empty() {
        return Err(AppError::BadRequest(
            "Kategorie ist erforderlich".to_string(),
        ));
    }
    if form.budget < 1 {
        return Err(AppError::BadRequest(
            "Budget muss eine positive Zahl sein".to_string(),
        ));
    }
    if form.timeline.trim().is_empty() {
        return Err(AppError::BadRequest(
            "Zeitrahmen ist erforderlich".to_string(),
        ));
    }
    Ok(())
}

/// Owner check for edit and delete. Non-owners get 403 and the stored
/// record stays untouched.
pub fn ensure_owner(listing: &ServiceListing, user_id: Uuid) -> Res<()> {
    if listing.client_id != user_id {
        return Err(AppError::Forbidden(
            "Sie können nur Ihre eigenen Inserate bearbeiten".to_string(),
        ));
    }
    Ok(())
}

/// Replaces the form fields of an existing listing, preserving offers,
/// status and creation date.
pub fn apply_update(
    mut listing: ServiceListing,
    form: ListingForm,
    now: DateTime<Utc>,
) -> ServiceListing {
    listing.title = form.title;
    listing.description = form.description;
    listing.category = form.category;
    listing.budget = form.budget;
    listing.timeline = form.timeline;
    listing.updated_at = Some(now);
    listing
}

pub fn dashboard_stats(listings: &[ServiceListing]) -> DashboardStats {
    let active_listings = listings.iter().filter(|l| l.is_open()).count();
    let received_offers = listings.iter().map(|l| l.offers.len()).sum::<usize>();
    let average_offer_price = if received_offers > 0 {
        let total: i64 = listings
            .iter()
            .flat_map(|l| l.offers.iter())
            .map(|offer| offer.price)
            .sum();
        Some((total as f64 / received_offers as f64).round() as i64)
    } else {
        None
    };

    DashboardStats {
        active_listings,
        received_offers,
        average_offer_price,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use db::models::listing::{ListingStatus, Offer, OfferStatus};

    fn form() -> ListingForm {
        ListingForm {
            title: "Website Redesign".to_string(),
            description: "d".repeat(60),
            category: "Web Design & Entwicklung".to_string(),
            budget: 5000,
            timeline: "2-4 Wochen".to_string(),
        }
    }

    fn listing(client_id: Uuid) -> ServiceListing {
        let f = form();
        ServiceListing::new(
            client_id,
            f.title,
            f.description,
            f.category,
            f.budget,
            f.timeline,
            Utc::now(),
        )
    }

    fn offer(listing_id: Uuid, price: i64) -> Offer {
        Offer {
            id: Uuid::new_v4(),
            company_id: Uuid::new_v4(),
            company_name: "Acme AG".to_string(),
            listing_id,
            proposal: "p".repeat(120),
            price,
            timeline: "1-2 Wochen".to_string(),
            examples: vec![],
            status: OfferStatus::Pending,
            created_at: Utc::now(),
        }
    }

    #[test]
    fn accepts_valid_form() {
        assert!(validate_listing(&form()).is_ok());
    }

    #[test]
    fn rejects_long_title_short_description_and_bad_budget() {
        let mut f = form();
        f.title = "t".repeat(101);
        assert!(validate_listing(&f).is_err());

        let mut f = form();
        f.description = "zu kurz".to_string();
        assert!(validate_listing(&f).is_err());

        let mut f = form();
        f.budget = 0;
        assert!(validate_listing(&f).is_err());
    }

    #[test]
    fn non_owner_cannot_pass_owner_check() {
        let owner = Uuid::new_v4();
        let listing = listing(owner);
        assert!(ensure_owner(&listing, owner).is_ok());
        assert!(ensure_owner(&listing, Uuid::new_v4()).is_err());
    }

    #[test]
    fn update_preserves_offers_and_status() {
        let owner = Uuid::new_v4();
        let mut listing = listing(owner);
        listing.offers.push(offer(listing.id, 4000));
        let created_at = listing.created_at;

        let mut f = form();
        f.title = "Neuer Titel".to_string();
        let updated = apply_update(listing, f, Utc::now());

        assert_eq!(updated.title, "Neuer Titel");
        assert_eq!(updated.offers.len(), 1);
        assert_eq!(updated.status, ListingStatus::Open);
        assert_eq!(updated.created_at, created_at);
        assert!(updated.updated_at.is_some());
    }

    #[test]
    fn stats_average_the_offer_prices() {
        let owner = Uuid::new_v4();
        let mut a = listing(owner);
        a.offers.push(offer(a.id, 4000));
        a.offers.push(offer(a.id, 5000));
        let mut b = listing(owner);
        b.status = ListingStatus::Closed;
        b.offers.push(offer(b.id, 3000));

        let stats = dashboard_stats(&[a, b]);
        assert_eq!(stats.active_listings, 1);
        assert_eq!(stats.received_offers, 3);
        assert_eq!(stats.average_offer_price, Some(4000));
    }

    #[test]
    fn stats_without_offers_have_no_average() {
        let stats = dashboard_stats(&[listing(Uuid::new_v4())]);
        assert_eq!(stats.received_offers, 0);
        assert_eq!(stats.average_offer_price, None);
    }
}
