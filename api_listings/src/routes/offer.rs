use actix_web::{HttpRequest, Responder, post, web};
use chrono::Utc;
use common::error::{AppError, Res};
use common::http::Success;
use common::jwt;
use sqlx::PgPool;
use std::sync::Arc;

use crate::dtos::offer::OfferRequest;
use crate::services;

/// Submits an offer against a listing. Only company profiles may bid; the
/// offer is appended to the listing record with status `pending`.
///
/// # Output
/// - Success: 201 Created with the stored offer
/// - Error: 401 without a valid token, 404 for unknown listing or missing
///   profile, 403 for non-company profiles, 400 on validation failure
#[post("/offers")]
pub async fn post_offer(
    req: HttpRequest,
    body: web::Json<OfferRequest>,
    pool: web::Data<Arc<PgPool>>,
) -> Res<impl Responder> {
    let claims = jwt::require_claims(&req)?;
    let pg_pool: &PgPool = &**pool;

    let body = body.into_inner();
    services::offer::validate_offer(&body)?;

    let mut listing = db::listing::get(pg_pool, body.listing_id)
        .await?
        .ok_or_else(|| AppError::NotFound("Inserat nicht gefunden".to_string()))?;

    let profile = db::profile::get(pg_pool, claims.user_id)
        .await?
        .ok_or_else(|| AppError::NotFound("Profil nicht gefunden".to_string()))?;
    services::offer::ensure_company(&profile)?;

    let offer = services::offer::append_offer(
        &mut listing,
        &profile,
        claims.user_id,
        body,
        Utc::now(),
    );
    db::listing::put(pg_pool, &listing).await?;
    Success::created(offer)
}
