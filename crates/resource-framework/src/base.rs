//! # Resource Base
//!
//! Data every resource carries regardless of its backing store: the entity name, the view
//! engine it renders with, and the path it is mounted under. Link generation lives here so
//! that every resource produces URLs the same way.

use crate::error::HttpError;
use std::fmt::Display;

/// Renders a named view with a set of locals.
///
/// The resource layer only holds on to the engine; templates are resolved by the host.
pub trait ViewEngine: Send + Sync {
    fn render(&self, view: &str, locals: &serde_json::Value) -> Result<String, HttpError>;
}

/// Name, view engine and mount path of a resource.
#[derive(Debug, Clone)]
pub struct ResourceBase<V> {
    name: String,
    mount_path: String,
    view_engine: V,
}

impl<V: ViewEngine> ResourceBase<V> {
    /// Creates a base mounted at the root (`/{name}`).
    pub fn new(name: impl Into<String>, view_engine: V) -> Self {
        Self {
            name: name.into(),
            mount_path: String::new(),
            view_engine,
        }
    }

    /// Mounts the resource under `path` (e.g. `/api` gives `/api/{name}`).
    pub fn with_mount_path(mut self, path: impl Into<String>) -> Self {
        let path = path.into();
        self.mount_path = path.trim_end_matches('/').to_string();
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn view_engine(&self) -> &V {
        &self.view_engine
    }

    /// `{mount}/{name}`
    pub fn list_link(&self) -> String {
        format!("{}/{}", self.mount_path, self.name)
    }

    /// `{mount}/{name}/new`
    pub fn new_link(&self) -> String {
        format!("{}/new", self.list_link())
    }

    /// `{mount}/{name}/{id}`
    pub fn show_link(&self, id: impl Display) -> String {
        format!("{}/{}", self.list_link(), id)
    }

    /// `{mount}/{name}/{id}/edit`
    pub fn edit_link(&self, id: impl Display) -> String {
        format!("{}/edit", self.show_link(id))
    }
}
