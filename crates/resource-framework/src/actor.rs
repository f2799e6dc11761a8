//! # In-Memory Store Actor
//!
//! `StoreActor` is a [`Model`](crate::Model) backend that needs no database. It owns the rows
//! of one entity type and processes requests sequentially in its own tokio task, so the
//! store needs no locking.
//!
//! # Usage Pattern
//!
//! 1.  **Create**: `StoreActor::new()` returns the actor (server) and a [`StoreModel`] (client).
//! 2.  **Run**: spawn `actor.run()` in a background task.
//! 3.  **Use**: hand the `StoreModel` to a [`ModelResource`](crate::ModelResource).
//!
//! The actor stops once every `StoreModel` clone is dropped.
//!
//! # Operations
//!
//! * **FindAndCountAll**: rows in ascending id order, skipping `offset`, taking `limit`;
//!   `count` is the number of stored rows.
//! * **Find**: a clone of the row, or `None`.
//! * **Create**: generates an id with the caller's generator, calls
//!   [`Entity::from_params`], stores and returns the row. Duplicate ids are rejected.
//! * **UpdateAttributes**: calls [`Entity::apply`] on the stored row and returns it, or
//!   `NotFound` when the row is gone.

use crate::client::StoreModel;
use crate::entity::Entity;
use crate::error::StoreError;
use crate::message::StoreRequest;
use crate::model::FindAndCount;
use std::collections::BTreeMap;
use tokio::sync::mpsc;
use tracing::{debug, info, warn};

/// The actor that owns the rows of one entity type.
pub struct StoreActor<T: Entity> {
    receiver: mpsc::Receiver<StoreRequest<T>>,
    store: BTreeMap<T::Id, T>,
    next_id_fn: Box<dyn Fn() -> T::Id + Send + Sync>,
}

impl<T: Entity> StoreActor<T> {
    /// Creates a new `StoreActor` and its associated [`StoreModel`].
    ///
    /// # Arguments
    ///
    /// * `buffer_size` - The capacity of the MPSC channel. If the channel is full,
    ///   calls to the model will wait until there is space.
    /// * `next_id_fn` - Generates the id of every created row.
    pub fn new(
        buffer_size: usize,
        next_id_fn: impl Fn() -> T::Id + Send + Sync + 'static,
    ) -> (Self, StoreModel<T>) {
        let (sender, receiver) = mpsc::channel(buffer_size);
        let actor = Self {
            receiver,
            store: BTreeMap::new(),
            next_id_fn: Box::new(next_id_fn),
        };
        (actor, StoreModel::new(sender))
    }

    /// Runs the actor's event loop, processing messages until the channel closes.
    pub async fn run(mut self) {
        // Extract just the type name (e.g. "Project" instead of "resource_sample::model::project::Project")
        let entity_type = std::any::type_name::<T>()
            .split("::")
            .last()
            .unwrap_or("Unknown");
        info!(entity_type, "Store started");

        while let Some(msg) = self.receiver.recv().await {
            match msg {
                StoreRequest::FindAndCountAll {
                    options,
                    respond_to,
                } => {
                    let rows: Vec<T> = self
                        .store
                        .values()
                        .skip(options.offset)
                        .take(options.limit)
                        .cloned()
                        .collect();
                    debug!(entity_type, ?options, rows = rows.len(), "FindAndCountAll");
                    let _ = respond_to.send(Ok(FindAndCount {
                        rows,
                        count: self.store.len(),
                    }));
                }
                StoreRequest::Find { id, respond_to } => {
                    let item = self.store.get(&id).cloned();
                    debug!(entity_type, %id, found = item.is_some(), "Find");
                    let _ = respond_to.send(Ok(item));
                }
                StoreRequest::Create { params, respond_to } => {
                    debug!(entity_type, ?params, "Create");
                    let id = (self.next_id_fn)();
                    if self.store.contains_key(&id) {
                        warn!(entity_type, %id, "Duplicate id");
                        let _ = respond_to
                            .send(Err(StoreError::Rejected(format!("duplicate id {}", id))));
                        continue;
                    }

                    match T::from_params(id.clone(), params) {
                        Ok(item) => {
                            self.store.insert(id.clone(), item.clone());
                            info!(entity_type, %id, size = self.store.len(), "Created");
                            let _ = respond_to.send(Ok(item));
                        }
                        Err(e) => {
                            warn!(entity_type, error = %e, "Create failed");
                            let _ = respond_to.send(Err(StoreError::Rejected(e)));
                        }
                    }
                }
                StoreRequest::UpdateAttributes {
                    id,
                    params,
                    respond_to,
                } => {
                    debug!(entity_type, %id, ?params, "UpdateAttributes");
                    if let Some(item) = self.store.get_mut(&id) {
                        // Apply to a copy so a rejected update leaves the row intact.
                        let mut updated = item.clone();
                        if let Err(e) = updated.apply(params) {
                            warn!(entity_type, %id, error = %e, "Update failed");
                            let _ = respond_to.send(Err(StoreError::Rejected(e)));
                            continue;
                        }
                        *item = updated.clone();
                        info!(entity_type, %id, "Updated");
                        let _ = respond_to.send(Ok(updated));
                    } else {
                        warn!(entity_type, %id, "Not found");
                        let _ = respond_to.send(Err(StoreError::NotFound(id.to_string())));
                    }
                }
            }
        }

        info!(entity_type, size = self.store.len(), "Shutdown");
    }
}
