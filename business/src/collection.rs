//! Generic collection/record caches and the commands that fill them.
//!
//! ## Why this file exists
//! Fetching and deleting records are side effects (network IO). Side effects
//! must **not** run during rendering, so the caches here are plain
//! [`Compute`] values and every request is an explicitly dispatched
//! [`Command`]. One generic implementation serves all entity families; the
//! per-entity spelling (resource, identifier parameter) comes from the
//! [`Entity`] trait.
//!
//! ## Delete semantics
//! A successful delete invalidates `CollectionCache<E>` so index views
//! refetch, and pushes an informational notice. A failed delete pushes an
//! error notice and leaves the cache untouched: the stale rows stay visible
//! until the next successful refetch. There is no retry and no optimistic
//! removal.

use std::marker::PhantomData;

use campusdesk_states::{Command, Compute, QueryStatus, StateCtx, Updater};
use log::{error, info};

use crate::{BusinessConfig, Entity, Notices, api};

/// Cache of an entity family's "list all" query.
#[derive(Debug)]
pub struct CollectionCache<E: Entity> {
    pub status: QueryStatus<Vec<E>>,
}

impl<E: Entity> CollectionCache<E> {
    pub fn success(rows: Vec<E>) -> Self {
        Self {
            status: QueryStatus::Success(rows),
        }
    }

    /// The cached rows, if the last fetch succeeded.
    pub fn rows(&self) -> Option<&[E]> {
        self.status.value().map(Vec::as_slice)
    }
}

impl<E: Entity> Default for CollectionCache<E> {
    fn default() -> Self {
        Self {
            status: QueryStatus::Idle,
        }
    }
}

impl<E: Entity> Compute for CollectionCache<E> {}

/// Cache of a single record fetched by its identifier (detail/edit views).
///
/// `id` is the identifier the last fetch was issued for, kept alongside the
/// status so a non-success entry still says which record it belongs to.
#[derive(Debug)]
pub struct RecordCache<E: Entity> {
    pub id: Option<String>,
    pub status: QueryStatus<E>,
}

impl<E: Entity> RecordCache<E> {
    pub fn success(record: E) -> Self {
        Self {
            id: Some(record.id_value()),
            status: QueryStatus::Success(record),
        }
    }

    /// Whether this entry was fetched for the given identifier.
    pub fn is_for(&self, id: &str) -> bool {
        self.id.as_deref() == Some(id)
    }
}

impl<E: Entity> Default for RecordCache<E> {
    fn default() -> Self {
        Self {
            id: None,
            status: QueryStatus::Idle,
        }
    }
}

impl<E: Entity> Compute for RecordCache<E> {}

/// GET `{api}{resource}/all` into `CollectionCache<E>`.
pub struct FetchCollection<E: Entity> {
    _marker: PhantomData<E>,
}

impl<E: Entity> FetchCollection<E> {
    pub fn new() -> Self {
        Self {
            _marker: PhantomData,
        }
    }
}

impl<E: Entity> Default for FetchCollection<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E: Entity> Command for FetchCollection<E> {
    fn run(self: Box<Self>, ctx: &StateCtx, updater: Updater) {
        let config = ctx.state::<BusinessConfig>();
        let url = format!("{}{}/all", config.api_url(), E::KIND.resource());

        info!("fetching collection {}", E::KIND.collection_key());
        updater.set(CollectionCache::<E> {
            status: QueryStatus::Pending,
        });

        ehttp::fetch(ehttp::Request::get(&url), move |result| {
            let status = match result {
                Ok(response) if response.status == 200 => {
                    match api::parse_json::<Vec<E>>(&response) {
                        Ok(rows) => {
                            info!("fetched {} {} records", rows.len(), E::KIND);
                            QueryStatus::Success(rows)
                        }
                        Err(err) => {
                            error!("collection fetch for {}: {err:#}", E::KIND);
                            QueryStatus::Error(format!("Parse error: {err}"))
                        }
                    }
                }
                Ok(response) => {
                    let message = api::status_error(&response);
                    error!("collection fetch for {}: {message}", E::KIND);
                    QueryStatus::Error(message)
                }
                Err(err) => {
                    error!("collection fetch for {}: {err}", E::KIND);
                    QueryStatus::Error(err)
                }
            };
            updater.set(CollectionCache::<E> { status });
        });
    }
}

/// GET `{api}{resource}?{id_param}={id}` into `RecordCache<E>`.
pub struct FetchRecord<E: Entity> {
    id: String,
    _marker: PhantomData<E>,
}

impl<E: Entity> FetchRecord<E> {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            _marker: PhantomData,
        }
    }
}

impl<E: Entity> Command for FetchRecord<E> {
    fn run(self: Box<Self>, ctx: &StateCtx, updater: Updater) {
        let config = ctx.state::<BusinessConfig>();
        let url = format!(
            "{}{}?{}={}",
            config.api_url(),
            E::KIND.resource(),
            E::id_param(),
            self.id
        );

        info!("fetching {} {}", E::KIND, self.id);
        let id = self.id;
        updater.set(RecordCache::<E> {
            id: Some(id.clone()),
            status: QueryStatus::Pending,
        });

        ehttp::fetch(ehttp::Request::get(&url), move |result| {
            let status = match result {
                Ok(response) if response.status == 200 => {
                    match api::parse_json::<E>(&response) {
                        Ok(record) => QueryStatus::Success(record),
                        Err(err) => {
                            error!("record fetch for {}: {err:#}", E::KIND);
                            QueryStatus::Error(format!("Parse error: {err}"))
                        }
                    }
                }
                Ok(response) => QueryStatus::Error(api::status_error(&response)),
                Err(err) => QueryStatus::Error(err),
            };
            updater.set(RecordCache::<E> {
                id: Some(id),
                status,
            });
        });
    }
}

/// DELETE `{api}{resource}?{id_param}={id}`.
pub struct DeleteRecord<E: Entity> {
    id: String,
    _marker: PhantomData<E>,
}

impl<E: Entity> DeleteRecord<E> {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            _marker: PhantomData,
        }
    }

    /// The identifier this command will delete, as `(param, value)`.
    pub fn target(&self) -> (&'static str, &str) {
        (E::id_param(), &self.id)
    }
}

impl<E: Entity> Command for DeleteRecord<E> {
    fn run(self: Box<Self>, ctx: &StateCtx, updater: Updater) {
        let config = ctx.state::<BusinessConfig>();
        let url = format!(
            "{}{}?{}={}",
            config.api_url(),
            E::KIND.resource(),
            E::id_param(),
            self.id
        );

        info!("deleting {} {}", E::KIND, self.id);
        let id = self.id;

        ehttp::fetch(api::delete_request(&url), move |result| match result {
            Ok(response) if response.ok => {
                info!("deleted {} {}", E::KIND, id);
                updater.update::<Notices>(move |notices| {
                    notices.info(format!("{} with id {} deleted", E::KIND, id));
                });
                updater.invalidate::<CollectionCache<E>>();
            }
            Ok(response) => {
                let message = api::status_error(&response);
                error!("delete for {}: {message}", E::KIND);
                updater.update::<Notices>(move |notices| {
                    notices.error(format!("Failed to delete {}: {message}", E::KIND));
                });
            }
            Err(err) => {
                error!("delete for {}: {err}", E::KIND);
                updater.update::<Notices>(move |notices| {
                    notices.error(format!("Failed to delete {}: {err}", E::KIND));
                });
            }
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{MenuItemReview, Organization};

    #[test]
    fn test_delete_target_uses_designated_identifier() {
        let delete = DeleteRecord::<Organization>::new("AS");
        assert_eq!(delete.target(), ("orgCode", "AS"));

        let delete = DeleteRecord::<MenuItemReview>::new("6");
        assert_eq!(delete.target(), ("id", "6"));
    }

    #[test]
    fn test_record_cache_tracks_the_fetched_identifier() {
        let cache = RecordCache::<Organization>::default();
        assert!(cache.status.is_idle());
        assert!(!cache.is_for("AS"));

        let cache = RecordCache::<Organization> {
            id: Some("AS".to_owned()),
            status: QueryStatus::Error("API returned status: 500".to_owned()),
        };
        assert!(cache.is_for("AS"));
        assert!(!cache.is_for("ZPR"), "an error entry belongs only to its own id");
    }

    #[test]
    fn test_collection_cache_default_is_idle() {
        let cache = CollectionCache::<Organization>::default();
        assert!(cache.status.is_idle());
        assert!(cache.rows().is_none());
    }
}
