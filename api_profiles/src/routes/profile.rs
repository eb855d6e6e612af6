use actix_web::{HttpRequest, Responder, get, post, put, web};
use chrono::Utc;
use common::error::{AppError, Res};
use common::http::Success;
use common::jwt;
use sqlx::PgPool;
use std::sync::Arc;
use uuid::Uuid;

use crate::dtos::profile::{CategoryQuery, ConvertToCompanyRequest, ProfileUpdateRequest};
use crate::services;

/// Fetches a profile by user id. Public, no token required.
#[get("/profile/{user_id}")]
pub async fn get_profile(
    path: web::Path<Uuid>,
    pool: web::Data<Arc<PgPool>>,
) -> Res<impl Responder> {
    let pg_pool: &PgPool = &**pool;
    let profile = db::profile::get(pg_pool, path.into_inner())
        .await?
        .ok_or_else(|| AppError::NotFound("Profil nicht gefunden".to_string()))?;
    Success::ok(profile)
}

/// Merges the submitted fields into the caller's own profile.
///
/// # Output
/// - Success: the updated profile
/// - Error: 401 without a valid token, 404 if no profile exists,
///   400 when the merged result fails validation
#[put("/profile")]
pub async fn put_profile(
    req: HttpRequest,
    body: web::Json<ProfileUpdateRequest>,
    pool: web::Data<Arc<PgPool>>,
) -> Res<impl Responder> {
    let claims = jwt::require_claims(&req)?;
    let pg_pool: &PgPool = &**pool;

    let profile = db::profile::get(pg_pool, claims.user_id)
        .await?
        .ok_or_else(|| AppError::NotFound("Profil nicht gefunden".to_string()))?;

    let updated = services::profile::apply_update(profile, body.into_inner(), Utc::now())?;
    db::profile::put(pg_pool, &updated).await?;
    Success::ok(updated)
}

/// One-way conversion of an individual account into a company account.
/// A second attempt on an already-company profile is rejected with 400.
#[post("/convert-to-company")]
pub async fn post_convert_to_company(
    req: HttpRequest,
    body: web::Json<ConvertToCompanyRequest>,
    pool: web::Data<Arc<PgPool>>,
) -> Res<impl Responder> {
    let claims = jwt::require_claims(&req)?;
    let pg_pool: &PgPool = &**pool;

    if body.company_name.trim().is_empty() {
        return Err(AppError::BadRequest(
            "Firmenname ist erforderlich".to_string(),
        ));
    }

    let profile = db::profile::get(pg_pool, claims.user_id)
        .await?
        .ok_or_else(|| AppError::NotFound("Profil nicht gefunden".to_string()))?;

    let converted = profile.convert_to_company(&body.company_name, Utc::now())?;
    db::profile::put(pg_pool, &converted).await?;
    Success::ok(converted)
}

/// Lists company profiles for the public browse view, best rating first.
/// `?category=` narrows the result; `all` (or no parameter) returns every
/// company.
#[get("/companies")]
pub async fn get_companies(
    query: web::Query<CategoryQuery>,
    pool: web::Data<Arc<PgPool>>,
) -> Res<impl Responder> {
    let pg_pool: &PgPool = &**pool;
    let companies = db::profile::list_companies(pg_pool, query.category.as_deref()).await?;
    Success::ok(companies)
}
