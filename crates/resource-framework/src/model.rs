//! # Model Contract
//!
//! The ORM-side half of a resource. A [`Model`] is the persistence access object for one
//! entity type; a [`Record`] is a single row it hands back.
//!
//! The resource layer never looks inside a record beyond its id and its link set, so any
//! row shape works as long as it implements [`Record`].

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt::{Debug, Display};
use std::hash::Hash;

/// Link name (`edit`, `show`, ...) to URL.
pub type Links = BTreeMap<String, String>;

/// A single entity row as returned by a [`Model`].
pub trait Record: Clone + Send + Sync + Debug + 'static {
    /// The unique identifier for this record (e.g. `u32`, `String`).
    type Id: Eq + Ord + Hash + Clone + Send + Sync + Display + Debug + 'static;

    fn id(&self) -> Self::Id;

    /// Hyperlinks decorating this record.
    fn links_mut(&mut self) -> &mut Links;
}

/// Window passed to [`Model::find_and_count_all`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FindOptions {
    pub limit: usize,
    pub offset: usize,
}

/// Result of [`Model::find_and_count_all`]: one page of rows plus the total row count.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FindAndCount<R> {
    pub rows: Vec<R>,
    pub count: usize,
}

/// Persistence access object for one entity type.
///
/// # Instance updates
/// ORMs usually expose `update_attributes` on the instance. Records here are plain data
/// without a connection, so the model takes the found record back instead.
#[async_trait]
pub trait Model: Send + Sync {
    type Record: Record;

    /// Attribute map used for both `create` and `update_attributes`.
    type Params: Send + Sync + Debug + 'static;

    type Error: std::error::Error + Send + Sync + 'static;

    /// Fetches up to `limit` rows starting at `offset`, together with the total count.
    async fn find_and_count_all(
        &self,
        options: FindOptions,
    ) -> Result<FindAndCount<Self::Record>, Self::Error>;

    /// Looks up a record by id. `Ok(None)` when absent.
    async fn find(
        &self,
        id: <Self::Record as Record>::Id,
    ) -> Result<Option<Self::Record>, Self::Error>;

    /// Persists a new record built from `params`.
    async fn create(&self, params: Self::Params) -> Result<Self::Record, Self::Error>;

    /// Builds a fresh, unpersisted record. Performs no I/O.
    fn build(&self) -> Self::Record;

    /// Applies `params` to a previously found record and persists it.
    async fn update_attributes(
        &self,
        record: Self::Record,
        params: Self::Params,
    ) -> Result<Self::Record, Self::Error>;
}
