//! # Resource Sample
//!
//! A `project` resource served from the in-memory store. This library exposes the
//! application's modules for integration testing.

pub mod lifecycle;
pub mod model;
pub mod project_store;
pub mod views;
