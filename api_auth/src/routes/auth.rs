use actix_web::{Responder, post, web};
use common::env_config::Config;
use common::error::{AppError, Res};
use common::http::Success;
use common::jwt::{self, ClaimsSpec};
use sqlx::PgPool;
use std::sync::Arc;

use crate::dtos::auth::{AuthResponse, LoginRequest, SignupRequest};
use crate::services;

/// Registers a new user and creates the matching profile record.
///
/// # Input
/// - `req`: JSON payload with email, password, name and accountType
/// - `pool`: Database connection pool
/// - `config`: Application configuration
///
/// # Output
/// - Success: 201 Created with a token and the public user object
/// - Error: 400 Bad Request on validation failure or duplicate email
#[post("/signup")]
pub async fn post_signup(
    req: web::Json<SignupRequest>,
    pool: web::Data<Arc<PgPool>>,
    config: web::Data<Arc<Config>>,
) -> Res<impl Responder> {
    let pg_pool: &PgPool = &**pool;
    services::auth::validate_signup(&req)?;

    let email_exists = db::user::exists_by_email(pg_pool, &req.email).await?;
    if email_exists {
        return Err(AppError::BadRequest(
            "E-Mail-Adresse wird bereits verwendet".to_string(),
        ));
    }

    let user = services::user::create_user(pg_pool, &req).await?;
    let token = jwt::generate_jwt(
        ClaimsSpec {
            user_id: user.id,
            email: user.email.clone(),
        },
        &config.jwt_config,
    )?;
    Success::created(AuthResponse {
        token,
        user: user.public(),
    })
}

/// Authenticates a user with email and password.
///
/// # Input
/// - `login_data`: JSON payload containing email and password
/// - `config`: Application configuration for JWT generation
/// - `pool`: Database connection pool
///
/// # Output
/// - Success: Returns an auth response with JWT token and user details
/// - Error: Returns 401 Unauthorized for invalid credentials
#[post("/login")]
pub async fn post_login(
    login_data: web::Json<LoginRequest>,
    config: web::Data<Arc<Config>>,
    pool: web::Data<Arc<PgPool>>,
) -> Res<impl Responder> {
    let pg_pool: &PgPool = &**pool;
    let user = services::auth::authenticate_user(pg_pool, &login_data).await?;
    let token = jwt::generate_jwt(
        ClaimsSpec {
            user_id: user.id,
            email: user.email.clone(),
        },
        &config.jwt_config,
    )?;
    Success::ok(AuthResponse {
        token,
        user: user.public(),
    })
}
