//! # Resource Framework
//!
//! This crate exposes data models as RESTful resources. A [`ModelResource`] maps the
//! resource verbs (list, new, edit, create, update, show) onto calls against a [`Model`],
//! decorating results with pagination metadata and hyperlinks.
//!
//! ## Architecture Overview
//!
//! The crate separates concerns into three layers:
//!
//! 1. **Resource Layer** ([`Resource`], [`ResourceBase`]) - the verb set a host routes onto,
//!    plus link generation and the HTTP error type
//! 2. **Adapter Layer** ([`ModelResource`]) - relays every verb to the model
//! 3. **Model Layer** ([`Model`], [`Record`]) - persistence, supplied by an ORM or by the
//!    in-memory [`StoreActor`]
//!
//! The adapter holds no state of its own. Every verb is one or two model calls, and model
//! failures come back unchanged inside [`ResourceError::Model`].
//!
//! ## Example
//!
//! ```rust
//! use resource_framework::mock::MockViews;
//! use resource_framework::{Entity, Links, ModelResource, Record, Resource, StoreActor};
//!
//! #[derive(Clone, Debug)]
//! struct Note { id: u32, text: String, links: Links }
//!
//! impl Record for Note {
//!     type Id = u32;
//!     fn id(&self) -> u32 { self.id }
//!     fn links_mut(&mut self) -> &mut Links { &mut self.links }
//! }
//!
//! impl Entity for Note {
//!     type Params = String;
//!     fn from_params(id: u32, text: String) -> Result<Self, String> {
//!         Ok(Self { id, text, links: Links::new() })
//!     }
//!     fn blank() -> Self { Self { id: 0, text: String::new(), links: Links::new() } }
//!     fn apply(&mut self, text: String) -> Result<(), String> { self.text = text; Ok(()) }
//! }
//!
//! #[tokio::main]
//! async fn main() {
//!     // 1. Start the store
//!     let counter = std::sync::atomic::AtomicU32::new(1);
//!     let (actor, model) = StoreActor::<Note>::new(10, move || {
//!         counter.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
//!     });
//!     tokio::spawn(actor.run());
//!
//!     // 2. Expose it as a resource
//!     let notes = ModelResource::new(model, "note", MockViews::default());
//!
//!     // 3. Use the verbs
//!     let id = notes.create("hello".to_string()).await.unwrap();
//!     let page = notes.list(10, 0).await.unwrap();
//!     assert_eq!(page.rows[0].links["show"], "/note/1");
//!     assert_eq!(notes.show(id).await.unwrap().unwrap().text, "hello");
//! }
//! ```
//!
//! ## Testing
//!
//! [`mock::MockModel`] scripts model responses and records every call, so each verb can be
//! checked for exactly what it forwards. See the [`mock`] module.

pub mod actor;
pub mod adapter;
pub mod base;
pub mod client;
pub mod config;
pub mod entity;
pub mod error;
pub mod message;
pub mod mock;
pub mod model;
pub mod registration;
pub mod resource;
pub mod tracing;

// Re-export core types for convenience
pub use actor::StoreActor;
pub use adapter::ModelResource;
pub use base::{ResourceBase, ViewEngine};
pub use client::StoreModel;
pub use config::ResourceConfig;
pub use entity::Entity;
pub use error::{ConfigError, HttpError, ResourceError, StoreError};
pub use message::{Response, StoreRequest};
pub use model::{FindAndCount, FindOptions, Links, Model, Record};
pub use registration::{Registration, VIEW_ENGINE};
pub use resource::{ListResult, Resource};
