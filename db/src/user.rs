use common::error::Res;
use sqlx::PgPool;
use uuid::Uuid;

use crate::{kv, models::user::AuthUser};

fn user_key(user_id: Uuid) -> String {
    format!("user:{}", user_id)
}

fn email_key(email: &str) -> String {
    format!("user-email:{}", email.to_lowercase())
}

pub async fn exists_by_email(pool: &PgPool, email: &str) -> Res<bool> {
    let id: Option<Uuid> = kv::get(pool, &email_key(email)).await?;
    Ok(id.is_some())
}

pub async fn get_by_email(pool: &PgPool, email: &str) -> Res<Option<AuthUser>> {
    let id: Option<Uuid> = kv::get(pool, &email_key(email)).await?;
    match id {
        Some(id) => kv::get(pool, &user_key(id)).await,
        None => Ok(None),
    }
}

pub async fn get_by_id(pool: &PgPool, user_id: Uuid) -> Res<Option<AuthUser>> {
    kv::get(pool, &user_key(user_id)).await
}

pub async fn insert(pool: &PgPool, user: &AuthUser) -> Res<()> {
    kv::set(pool, &user_key(user.id), user).await?;
    kv::set(pool, &email_key(&user.email), &user.id).await?;
    Ok(())
}
