//! # Model Resource
//!
//! [`ModelResource`] exposes any [`Model`] as a [`Resource`]. Each verb is a direct relay to
//! one or two model calls:
//!
//! - **list** → `find_and_count_all`, then decorates every row with `edit`/`show` links.
//! - **new** → `build` (no I/O).
//! - **edit** → `find`; a missing entity is a `404 Not Found`.
//! - **create** → `create`, answering with the new id.
//! - **update** → `find`, then `update_attributes` on the found record.
//! - **show** → `find`.
//!
//! Model failures are passed through as [`ResourceError::Model`] without translation.
//! Nothing is retried, and the two calls of `update` do not run in a transaction.

use crate::base::{ResourceBase, ViewEngine};
use crate::error::{HttpError, ResourceError};
use crate::model::{FindOptions, Model, Record};
use crate::registration::Registration;
use crate::resource::{ListResult, Resource};
use async_trait::async_trait;
use tracing::{debug, info, instrument, warn};

/// A [`Resource`] backed by a [`Model`].
///
/// Holds no mutable state; every verb is independent.
pub struct ModelResource<M, V> {
    base: ResourceBase<V>,
    model: M,
}

impl<M: Model, V: ViewEngine> ModelResource<M, V> {
    /// Binds `model` as the resource called `name`.
    pub fn new(model: M, name: impl Into<String>, view_engine: V) -> Self {
        Self {
            base: ResourceBase::new(name, view_engine),
            model,
        }
    }

    /// Mounts the resource under `path`; see [`ResourceBase::with_mount_path`].
    pub fn with_mount_path(mut self, path: impl Into<String>) -> Self {
        self.base = self.base.with_mount_path(path);
        self
    }

    /// A registration descriptor for a composition root.
    ///
    /// `model_name` defaults to `name` capitalized (`"project"` → `"Project"`).
    pub fn registration(name: &str, model_name: Option<&str>) -> Registration<M, V>
    where
        M: 'static,
        V: 'static,
    {
        Registration::new(name, model_name)
    }

    pub fn base(&self) -> &ResourceBase<V> {
        &self.base
    }

    pub fn model(&self) -> &M {
        &self.model
    }

    pub fn view_engine(&self) -> &V {
        self.base.view_engine()
    }

    pub fn edit_link(&self, id: &<M::Record as Record>::Id) -> String {
        self.base.edit_link(id)
    }

    pub fn show_link(&self, id: &<M::Record as Record>::Id) -> String {
        self.base.show_link(id)
    }
}

#[async_trait]
impl<M, V> Resource for ModelResource<M, V>
where
    M: Model,
    V: ViewEngine,
{
    type Id = <M::Record as Record>::Id;
    type Record = M::Record;
    type Params = M::Params;
    type Error = ResourceError<M::Error>;

    fn name(&self) -> &str {
        self.base.name()
    }

    #[instrument(skip(self))]
    async fn list(
        &self,
        limit: usize,
        offset: usize,
    ) -> Result<ListResult<M::Record>, Self::Error> {
        let found = self
            .model
            .find_and_count_all(FindOptions { limit, offset })
            .await
            .map_err(|e| {
                warn!(error = %e, "find_and_count_all failed");
                ResourceError::Model(e)
            })?;

        let rows = found
            .rows
            .into_iter()
            .map(|mut row| {
                let id = row.id();
                let edit = self.base.edit_link(&id);
                let show = self.base.show_link(&id);
                let links = row.links_mut();
                links.insert("edit".to_string(), edit);
                links.insert("show".to_string(), show);
                row
            })
            .collect::<Vec<_>>();

        debug!(rows = rows.len(), count = found.count, "Listed");
        Ok(ListResult {
            rows,
            count: found.count,
            limit,
            offset,
        })
    }

    fn new_record(&self) -> M::Record {
        self.model.build()
    }

    #[instrument(skip(self))]
    async fn edit(&self, id: Self::Id) -> Result<(), Self::Error> {
        match self.model.find(id).await.map_err(ResourceError::Model)? {
            Some(_) => Ok(()),
            None => {
                warn!("Not found");
                Err(HttpError::not_found().into())
            }
        }
    }

    #[instrument(skip(self))]
    async fn create(&self, params: M::Params) -> Result<Self::Id, Self::Error> {
        let record = self.model.create(params).await.map_err(|e| {
            warn!(error = %e, "Create failed");
            ResourceError::Model(e)
        })?;
        let id = record.id();
        info!(%id, "Created");
        Ok(id)
    }

    #[instrument(skip(self))]
    async fn update(&self, id: Self::Id, params: M::Params) -> Result<M::Record, Self::Error> {
        let Some(record) = self
            .model
            .find(id.clone())
            .await
            .map_err(ResourceError::Model)?
        else {
            warn!("Update target missing");
            return Err(ResourceError::Missing(format!("{} {}", self.base.name(), id)));
        };

        let updated = self
            .model
            .update_attributes(record, params)
            .await
            .map_err(|e| {
                warn!(error = %e, "Update failed");
                ResourceError::Model(e)
            })?;
        info!(%id, "Updated");
        Ok(updated)
    }

    #[instrument(skip(self))]
    async fn show(&self, id: Self::Id) -> Result<Option<M::Record>, Self::Error> {
        let record = self.model.find(id).await.map_err(ResourceError::Model)?;
        debug!(found = record.is_some(), "Show");
        Ok(record)
    }
}
