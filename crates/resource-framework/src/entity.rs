//! # Entity Trait
//!
//! The contract a record type must satisfy to live in a [`StoreActor`](crate::actor::StoreActor).
//!
//! [`Record`] already gives the store an id and a link set. `Entity` adds the three things
//! the store cannot do generically:
//! - build a row from creation params ([`Entity::from_params`])
//! - build an empty, unsaved row ([`Entity::blank`])
//! - apply update params to an existing row ([`Entity::apply`])
//!
//! Validation belongs in `from_params` and `apply`: returning `Err` rejects the request and
//! leaves the store untouched.

use crate::model::Record;
use std::fmt::Debug;

/// A record type managed by a [`StoreActor`](crate::actor::StoreActor).
pub trait Entity: Record {
    /// Attribute map used for both creation and updates.
    type Params: Clone + Send + Sync + Debug + 'static;

    /// Construct the full entity from the id and payload.
    fn from_params(id: Self::Id, params: Self::Params) -> Result<Self, String>;

    /// An empty entity that has not been stored yet.
    fn blank() -> Self;

    /// Called when an update request is received.
    fn apply(&mut self, params: Self::Params) -> Result<(), String>;
}
