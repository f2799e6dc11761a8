//! # Store Model
//!
//! The client half of the [`StoreActor`](crate::actor::StoreActor). It implements
//! [`Model`], so a store can back a [`ModelResource`](crate::ModelResource) directly.

use crate::entity::Entity;
use crate::error::StoreError;
use crate::message::StoreRequest;
use crate::model::{FindAndCount, FindOptions, Model};
use async_trait::async_trait;
use tokio::sync::{mpsc, oneshot};

/// A [`Model`] backed by a [`StoreActor`](crate::actor::StoreActor).
///
/// Holds only a sender, so cloning is inexpensive.
#[derive(Clone)]
pub struct StoreModel<T: Entity> {
    sender: mpsc::Sender<StoreRequest<T>>,
}

impl<T: Entity> StoreModel<T> {
    pub fn new(sender: mpsc::Sender<StoreRequest<T>>) -> Self {
        Self { sender }
    }

    async fn request<R: Send>(
        &self,
        make: impl FnOnce(oneshot::Sender<Result<R, StoreError>>) -> StoreRequest<T> + Send,
    ) -> Result<R, StoreError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(make(respond_to))
            .await
            .map_err(|_| StoreError::Closed)?;
        response.await.map_err(|_| StoreError::Dropped)?
    }
}

#[async_trait]
impl<T: Entity> Model for StoreModel<T> {
    type Record = T;
    type Params = T::Params;
    type Error = StoreError;

    async fn find_and_count_all(
        &self,
        options: FindOptions,
    ) -> Result<FindAndCount<T>, StoreError> {
        self.request(|respond_to| StoreRequest::FindAndCountAll {
            options,
            respond_to,
        })
        .await
    }

    async fn find(&self, id: T::Id) -> Result<Option<T>, StoreError> {
        self.request(|respond_to| StoreRequest::Find { id, respond_to })
            .await
    }

    async fn create(&self, params: T::Params) -> Result<T, StoreError> {
        self.request(|respond_to| StoreRequest::Create { params, respond_to })
            .await
    }

    fn build(&self) -> T {
        T::blank()
    }

    async fn update_attributes(&self, record: T, params: T::Params) -> Result<T, StoreError> {
        let id = record.id();
        self.request(|respond_to| StoreRequest::UpdateAttributes {
            id,
            params,
            respond_to,
        })
        .await
    }
}
