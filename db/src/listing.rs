use common::error::Res;
use sqlx::{Executor, PgPool, Postgres};
use uuid::Uuid;

use crate::{kv, models::listing::ServiceListing};

fn listing_key(listing_id: Uuid) -> String {
    format!("listing:{}", listing_id)
}

fn client_index_key(client_id: Uuid) -> String {
    format!("client-listings:{}", client_id)
}

pub async fn get<'e, E: Executor<'e, Database = Postgres>>(
    executor: E,
    listing_id: Uuid,
) -> Res<Option<ServiceListing>> {
    kv::get(executor, &listing_key(listing_id)).await
}

pub async fn put<'e, E: Executor<'e, Database = Postgres>>(
    executor: E,
    listing: &ServiceListing,
) -> Res<()> {
    kv::set(executor, &listing_key(listing.id), listing).await
}

/// Appends a listing id to an owner's index array.
fn push_index_entry(mut index: Vec<Uuid>, listing_id: Uuid) -> Vec<Uuid> {
    index.push(listing_id);
    index
}

/// Drops a listing id from an owner's index array.
fn prune_index_entry(mut index: Vec<Uuid>, listing_id: Uuid) -> Vec<Uuid> {
    index.retain(|id| *id != listing_id);
    index
}

/// Stores a new listing and appends its id to the owner's index.
pub async fn insert(pool: &PgPool, listing: &ServiceListing) -> Res<()> {
    put(pool, listing).await?;

    let index_key = client_index_key(listing.client_id);
    let index: Vec<Uuid> = kv::get(pool, &index_key).await?.unwrap_or_default();
    kv::set(pool, &index_key, &push_index_entry(index, listing.id)).await
}

/// Deletes a listing and drops its id from the owner's index.
pub async fn delete(pool: &PgPool, listing: &ServiceListing) -> Res<()> {
    kv::del(pool, &listing_key(listing.id)).await?;

    let index_key = client_index_key(listing.client_id);
    let index: Vec<Uuid> = kv::get(pool, &index_key).await?.unwrap_or_default();
    kv::set(pool, &index_key, &prune_index_entry(index, listing.id)).await
}

/// Open listings for the public browse view, optionally narrowed to a
/// category, newest first.
pub async fn list_open(pool: &PgPool, category: Option<&str>) -> Res<Vec<ServiceListing>> {
    let listings: Vec<ServiceListing> = kv::get_by_prefix(pool, "listing:").await?;

    let mut open: Vec<ServiceListing> = listings
        .into_iter()
        .filter(|listing| listing.is_open())
        .filter(|listing| match category {
            Some(cat) if cat != "all" => listing.category == cat,
            _ => true,
        })
        .collect();

    open.sort_by(|a, b| b.created_at.cmp(&a.created_at));
    Ok(open)
}

/// All of one client's listings, resolved through the index, newest first.
/// Ids whose record has vanished are skipped.
pub async fn list_for_client(pool: &PgPool, client_id: Uuid) -> Res<Vec<ServiceListing>> {
    let index: Vec<Uuid> = kv::get(pool, &client_index_key(client_id))
        .await?
        .unwrap_or_default();

    let mut listings = Vec::with_capacity(index.len());
    for id in index {
        if let Some(listing) = get(pool, id).await? {
            listings.push(listing);
        }
    }

    listings.sort_by(|a, b| b.created_at.cmp(&a.created_at));
    Ok(listings)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_listing_lands_at_the_end_of_the_index() {
        let existing = Uuid::new_v4();
        let added = Uuid::new_v4();
        let index = push_index_entry(vec![existing], added);
        assert_eq!(index, vec![existing, added]);
    }

    #[test]
    fn deleted_listing_is_dropped_from_the_index() {
        let keep = Uuid::new_v4();
        let remove = Uuid::new_v4();
        let index = prune_index_entry(vec![keep, remove], remove);
        assert_eq!(index, vec![keep]);
    }

    #[test]
    fn pruning_an_unknown_id_leaves_the_index_alone() {
        let keep = Uuid::new_v4();
        let index = prune_index_entry(vec![keep], Uuid::new_v4());
        assert_eq!(index, vec![keep]);
    }
}
