//! # Resource Trait
//!
//! The verb set a hosting framework routes HTTP requests onto:
//!
//! | verb | typical route | returns |
//! |------|---------------|---------|
//! | `list` | `GET /name` | one page of records |
//! | `new_record` | `GET /name/new` | an unsaved record for a form |
//! | `edit` | `GET /name/:id/edit` | nothing, or 404 |
//! | `create` | `POST /name` | the new id |
//! | `update` | `PUT /name/:id` | the updated record |
//! | `show` | `GET /name/:id` | the record, if any |
//!
//! Routing itself is left to the host.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// One page of records returned by [`Resource::list`].
///
/// `limit` and `offset` always echo the values the page was requested with.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ListResult<R> {
    pub rows: Vec<R>,
    pub count: usize,
    pub limit: usize,
    pub offset: usize,
}

/// CRUD-style verbs on a named entity collection.
#[async_trait]
pub trait Resource: Send + Sync {
    type Id: Send + 'static;
    type Record: Send + 'static;
    type Params: Send + 'static;
    type Error: std::error::Error + Send + Sync + 'static;

    /// The entity name the resource is mounted as.
    fn name(&self) -> &str;

    async fn list(
        &self,
        limit: usize,
        offset: usize,
    ) -> Result<ListResult<Self::Record>, Self::Error>;

    /// A fresh unsaved record (the `new` verb).
    fn new_record(&self) -> Self::Record;

    async fn edit(&self, id: Self::Id) -> Result<(), Self::Error>;

    async fn create(&self, params: Self::Params) -> Result<Self::Id, Self::Error>;

    async fn update(&self, id: Self::Id, params: Self::Params)
        -> Result<Self::Record, Self::Error>;

    async fn show(&self, id: Self::Id) -> Result<Option<Self::Record>, Self::Error>;
}
