//! Resource Commands
//!
//! Generic list/create/update/delete for any `Resource`, plus the lookup
//! loaders behind foreign-key columns.

use shkola_api::domain::{Classes, EntityId, Rooms, Students, Subjects, Teachers};
use shkola_api::lookup::Lookup;
use shkola_api::{ApiResult, Reference, Resource, ResourceClient};

use super::HttpTransport;

fn client<R: Resource>() -> ResourceClient<R, HttpTransport> {
    ResourceClient::new(HttpTransport::default())
}

// ========================
// CRUD
// ========================

pub async fn list<R: Resource>(filter: &R::Filter) -> ApiResult<Vec<R::Record>> {
    client::<R>().list(filter).await
}

pub async fn create<R: Resource>(payload: &R::Payload) -> ApiResult<Option<R::Record>> {
    client::<R>().create(payload).await
}

pub async fn update<R: Resource>(id: EntityId, payload: &R::Payload) -> ApiResult<Option<R::Record>> {
    client::<R>().update(id, payload).await
}

pub async fn delete<R: Resource>(id: EntityId) -> ApiResult<bool> {
    client::<R>().delete(id).await
}

// ========================
// Lookups
// ========================

async fn lookup_of<R: Resource>() -> ApiResult<Lookup> {
    let records = list::<R>(&R::Filter::default()).await?;
    Ok(Lookup::from_records(&records))
}

/// Fetch the full id → name table for one referenced resource
pub async fn load_lookup(reference: Reference) -> ApiResult<Lookup> {
    match reference {
        Reference::Class => lookup_of::<Classes>().await,
        Reference::Subject => lookup_of::<Subjects>().await,
        Reference::Room => lookup_of::<Rooms>().await,
        Reference::Teacher => lookup_of::<Teachers>().await,
        Reference::Student => lookup_of::<Students>().await,
    }
}
