use actix_web::{HttpRequest, Responder, delete, get, post, put, web};
use chrono::Utc;
use common::error::{AppError, Res};
use common::http::Success;
use common::jwt;
use db::models::listing::ServiceListing;
use sqlx::PgPool;
use std::sync::Arc;
use uuid::Uuid;

use crate::dtos::listing::{CategoryQuery, DashboardResponse, ListingForm};
use crate::services;

/// Creates a listing owned by the caller.
///
/// # Output
/// - Success: 201 Created with the stored listing; `status` starts at
///   `open` and `offers` empty, and the id is appended to the caller's
///   listing index
/// - Error: 401 without a valid token, 400 on validation failure
#[post("/listings")]
pub async fn post_listing(
    req: HttpRequest,
    form: web::Json<ListingForm>,
    pool: web::Data<Arc<PgPool>>,
) -> Res<impl Responder> {
    let claims = jwt::require_claims(&req)?;
    let pg_pool: &PgPool = &**pool;

    let form = form.into_inner();
    services::listing::validate_listing(&form)?;

    let listing = ServiceListing::new(
        claims.user_id,
        form.title,
        form.description,
        form.category,
        form.budget,
        form.timeline,
        Utc::now(),
    );
    db::listing::insert(pg_pool, &listing).await?;
    Success::created(listing)
}

/// Open listings for the public browse view, newest first. `?category=`
/// narrows the result; `all` (or no parameter) returns everything.
#[get("/listings")]
pub async fn get_listings(
    query: web::Query<CategoryQuery>,
    pool: web::Data<Arc<PgPool>>,
) -> Res<impl Responder> {
    let pg_pool: &PgPool = &**pool;
    let listings = db::listing::list_open(pg_pool, query.category.as_deref()).await?;
    Success::ok(listings)
}

/// The caller's own listings (open or not) plus dashboard stats.
#[get("/my-listings")]
pub async fn get_my_listings(
    req: HttpRequest,
    pool: web::Data<Arc<PgPool>>,
) -> Res<impl Responder> {
    let claims = jwt::require_claims(&req)?;
    let pg_pool: &PgPool = &**pool;

    let listings = db::listing::list_for_client(pg_pool, claims.user_id).await?;
    let stats = services::listing::dashboard_stats(&listings);
    Success::ok(DashboardResponse { listings, stats })
}

/// Fetches a single listing with its embedded offers. Public.
#[get("/listings/{id}")]
pub async fn get_listing(
    path: web::Path<Uuid>,
    pool: web::Data<Arc<PgPool>>,
) -> Res<impl Responder> {
    let pg_pool: &PgPool = &**pool;
    let listing = db::listing::get(pg_pool, path.into_inner())
        .await?
        .ok_or_else(|| AppError::NotFound("Inserat nicht gefunden".to_string()))?;
    Success::ok(listing)
}

/// Replaces the form fields of the caller's own listing. Offers, status and
/// creation date are preserved.
#[put("/listings/{id}")]
pub async fn put_listing(
    req: HttpRequest,
    path: web::Path<Uuid>,
    form: web::Json<ListingForm>,
    pool: web::Data<Arc<PgPool>>,
) -> Res<impl Responder> {
    let claims = jwt::require_claims(&req)?;
    let pg_pool: &PgPool = &**pool;

    let form = form.into_inner();
    services::listing::validate_listing(&form)?;

    let listing = db::listing::get(pg_pool, path.into_inner())
        .await?
        .ok_or_else(|| AppError::NotFound("Inserat nicht gefunden".to_string()))?;
    services::listing::ensure_owner(&listing, claims.user_id)?;

    let updated = services::listing::apply_update(listing, form, Utc::now());
    db::listing::put(pg_pool, &updated).await?;
    Success::ok(updated)
}

/// Deletes the caller's own listing and drops it from the listing index.
#[delete("/listings/{id}")]
pub async fn delete_listing(
    req: HttpRequest,
    path: web::Path<Uuid>,
    pool: web::Data<Arc<PgPool>>,
) -> Res<impl Responder> {
    let claims = jwt::require_claims(&req)?;
    let pg_pool: &PgPool = &**pool;

    let listing = db::listing::get(pg_pool, path.into_inner())
        .await?
        .ok_or_else(|| AppError::NotFound("Inserat nicht gefunden".to_string()))?;
    services::listing::ensure_owner(&listing, claims.user_id)?;

    db::listing::delete(pg_pool, &listing).await?;
    Success::ok(serde_json::json!({ "message": "Inserat erfolgreich gelöscht" }))
}
