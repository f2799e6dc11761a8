//! # Project Store
//!
//! Factory for the in-memory store that persists [`Project`]s.
//!
//! ## Usage
//!
//! ```rust
//! use resource_framework::{Model, ResourceConfig};
//! use resource_sample::model::ProjectParams;
//! use resource_sample::project_store;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let (actor, model) = project_store::new(&ResourceConfig::default());
//!     tokio::spawn(actor.run());
//!
//!     let project = model.create(ProjectParams::named("Apollo")).await?;
//!     assert_eq!(project.id.0, 1);
//!     Ok(())
//! }
//! ```
//!
//! Ids are sequential, starting at 1.

use crate::model::{Project, ProjectId};
use resource_framework::{ResourceConfig, StoreActor, StoreModel};
use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::Arc;

/// Creates a new Project store and its model.
pub fn new(config: &ResourceConfig) -> (StoreActor<Project>, StoreModel<Project>) {
    let project_id_counter = Arc::new(AtomicU32::new(1));
    let next_project_id = move || ProjectId(project_id_counter.fetch_add(1, Ordering::SeqCst));

    StoreActor::new(config.store_buffer, next_project_id)
}
