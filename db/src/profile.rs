use common::error::Res;
use sqlx::{Executor, PgPool, Postgres};
use uuid::Uuid;

use crate::{kv, models::profile::UserProfile};

fn profile_key(user_id: Uuid) -> String {
    format!("profile:{}", user_id)
}

pub async fn get<'e, E: Executor<'e, Database = Postgres>>(
    executor: E,
    user_id: Uuid,
) -> Res<Option<UserProfile>> {
    kv::get(executor, &profile_key(user_id)).await
}

pub async fn put<'e, E: Executor<'e, Database = Postgres>>(
    executor: E,
    profile: &UserProfile,
) -> Res<()> {
    kv::set(executor, &profile_key(profile.user_id), profile).await
}

/// Company profiles only, optionally narrowed to a category, best rating
/// first. `category=all` means no filter, matching the original client.
pub async fn list_companies(pool: &PgPool, category: Option<&str>) -> Res<Vec<UserProfile>> {
    let profiles: Vec<UserProfile> = kv::get_by_prefix(pool, "profile:").await?;

    let mut companies: Vec<UserProfile> = profiles
        .into_iter()
        .filter(|profile| profile.is_company())
        .filter(|profile| match category {
            Some(cat) if cat != "all" => profile.category.as_deref() == Some(cat),
            _ => true,
        })
        .collect();

    companies.sort_by(|a, b| {
        let ra = a.rating.unwrap_or(0.0);
        let rb = b.rating.unwrap_or(0.0);
        rb.partial_cmp(&ra).unwrap_or(std::cmp::Ordering::Equal)
    });

    Ok(companies)
}
