//! # System Lifecycle & Composition
//!
//! [`ProjectSystem`] is the composition root of the sample: it starts the project store,
//! resolves the resource's registration against it, and shuts everything down again.
//!
//! ## Wiring
//!
//! ```rust,ignore
//! let registration = ProjectResource::registration("project", None);
//! // registration.type_name()  == "Project"      -> the project store's model
//! // registration.dependency() == "view_engine"  -> TextViews
//! let projects = registration.build(model, TextViews);
//! ```
//!
//! ## Graceful Shutdown
//!
//! 1. **Drop the resource** - drops the last `StoreModel`, closing the channel
//! 2. **Store detects closure** - `receiver.recv()` returns `None`
//! 3. **Await completion** - the store task logs its final size and exits

use crate::model::Project;
use crate::project_store;
use crate::views::TextViews;
use resource_framework::{ModelResource, ResourceConfig, StoreModel};
use tokio::task::{JoinError, JoinHandle};
use tracing::{debug, info};

/// The project resource as wired by [`ProjectSystem`].
pub type ProjectResource = ModelResource<StoreModel<Project>, TextViews>;

/// Errors from running the sample system.
#[derive(Debug, thiserror::Error)]
pub enum SystemError {
    #[error("Store task failed: {0}")]
    Store(#[from] JoinError),
}

/// Owns the running project store and the resource that exposes it.
pub struct ProjectSystem {
    pub projects: ProjectResource,
    handle: JoinHandle<()>,
}

impl ProjectSystem {
    /// Starts the store and builds the `project` resource on top of it.
    pub fn new(config: &ResourceConfig) -> Self {
        let registration = ProjectResource::registration("project", None);
        debug!(
            type_name = registration.type_name(),
            dependency = registration.dependency(),
            "Resolving registration"
        );

        let (actor, model) = project_store::new(config);
        let handle = tokio::spawn(actor.run());

        let projects = registration
            .build(model, TextViews)
            .with_mount_path(config.mount_path.clone());
        info!(mount_path = %config.mount_path, "Project resource ready");

        Self { projects, handle }
    }

    /// Drops the resource and waits for the store to finish.
    pub async fn shutdown(self) -> Result<(), SystemError> {
        info!("Shutting down system...");
        drop(self.projects);
        self.handle.await?;
        info!("System shutdown complete");
        Ok(())
    }
}
