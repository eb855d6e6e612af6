use chrono::Utc;
use common::error::{AppError, Res};
use db::models::{
    profile::UserProfile,
    user::{AccountType, AuthUser},
};
use sqlx::PgPool;
use uuid::Uuid;

use crate::{dtos::auth::SignupRequest, services};

/// Creates the auth user plus the matching profile record. Company signups
/// get a company profile seeded with the given name, zero rating and no
/// completed jobs; individual signups get a bare display-name profile.
pub async fn create_user(pool: &PgPool, req: &SignupRequest) -> Res<AuthUser> {
    let account_type: AccountType = req
        .account_type
        .parse()
        .map_err(|_| AppError::BadRequest("Ungültiger Kontotyp".to_string()))?;

    let now = Utc::now();
    let user = AuthUser {
        id: Uuid::new_v4(),
        email: req.email.trim().to_lowercase(),
        name: req.name.trim().to_string(),
        account_type,
        password_hash: services::auth::hash_password(&req.password)?,
        created_at: now,
    };

    db::user::insert(pool, &user).await?;

    let profile = match account_type {
        AccountType::Company => {
            UserProfile::company(user.id, user.email.clone(), user.name.clone(), now)
        }
        AccountType::Individual => {
            UserProfile::individual(user.id, user.email.clone(), user.name.clone(), now)
        }
    };
    db::profile::put(pool, &profile).await?;

    Ok(user)
}
