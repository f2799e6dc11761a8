//! # Store Messages
//!
//! This module defines the message types exchanged between
//! [`StoreModel`](crate::client::StoreModel) and [`StoreActor`](crate::actor::StoreActor).

use crate::entity::Entity;
use crate::error::StoreError;
use crate::model::{FindAndCount, FindOptions};
use tokio::sync::oneshot;

/// Type alias for the one-shot response channel used by the store.
pub type Response<T> = oneshot::Sender<Result<T, StoreError>>;

/// Request sent to the store actor.
///
/// One variant per persisting [`Model`](crate::Model) call; `build` never reaches the actor
/// because it performs no I/O.
#[derive(Debug)]
pub enum StoreRequest<T: Entity> {
    FindAndCountAll {
        options: FindOptions,
        respond_to: Response<FindAndCount<T>>,
    },
    Find {
        id: T::Id,
        respond_to: Response<Option<T>>,
    },
    Create {
        params: T::Params,
        respond_to: Response<T>,
    },
    UpdateAttributes {
        id: T::Id,
        params: T::Params,
        respond_to: Response<T>,
    },
}
