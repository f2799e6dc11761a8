//! Data structures implementing the [`Entity`](resource_framework::Entity) trait.

pub mod project;

pub use project::*;
