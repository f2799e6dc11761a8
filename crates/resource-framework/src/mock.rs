//! # Mock Model & Testing Guide
//!
//! `MockModel<R, P>` implements [`Model`] entirely in memory. You queue the responses the
//! model should give, run the resource verb under test, then inspect which calls were made.
//!
//! ## When to use the mock vs the store
//!
//! | Feature | MockModel | StoreModel |
//! |---------|-----------|------------|
//! | **Speed** | Instant | Fast (spawns a tokio task) |
//! | **Call inspection** | Every call and argument recorded | None |
//! | **State** | None (scripted responses) | Real in-memory rows |
//! | **Error Injection** | Easy (`return_err`) | Only validation failures |
//!
//! ## Example
//!
//! ```rust
//! use resource_framework::mock::{MockModel, MockViews, ModelCall};
//! use resource_framework::{Links, ModelResource, Record, Resource};
//!
//! #[derive(Clone, Debug, PartialEq)]
//! struct Row { id: u32, links: Links }
//!
//! impl Record for Row {
//!     type Id = u32;
//!     fn id(&self) -> u32 { self.id }
//!     fn links_mut(&mut self) -> &mut Links { &mut self.links }
//! }
//!
//! #[tokio::main]
//! async fn main() {
//!     let mock = MockModel::<Row, String>::new();
//!     mock.expect_find().return_ok(Some(Row { id: 9, links: Links::new() }));
//!
//!     let resource = ModelResource::new(mock.clone(), "row", MockViews::default());
//!     let row = resource.show(9).await.unwrap();
//!
//!     assert_eq!(row.map(|r| r.id), Some(9));
//!     assert_eq!(mock.calls(), vec![ModelCall::Find(9)]);
//!     mock.verify();
//! }
//! ```
//!
//! Expectations are consumed in FIFO order. A call that does not match the next queued
//! expectation panics, which fails the test at the offending call.

use crate::base::ViewEngine;
use crate::error::HttpError;
use crate::model::{FindAndCount, FindOptions, Model, Record};
use async_trait::async_trait;
use std::collections::VecDeque;
use std::fmt::Debug;
use std::sync::{Arc, Mutex};

/// Error returned by a [`MockModel`] when told to fail.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{0}")]
pub struct MockError(pub String);

impl MockError {
    pub fn new(message: impl Into<String>) -> Self {
        Self(message.into())
    }
}

/// A call received by a [`MockModel`], with its arguments.
#[derive(Debug, Clone, PartialEq)]
pub enum ModelCall<I, P> {
    FindAndCountAll(FindOptions),
    Find(I),
    Create(P),
    Build,
    UpdateAttributes { id: I, params: P },
}

enum Expectation<R: Record> {
    FindAndCountAll(Result<FindAndCount<R>, MockError>),
    Find(Result<Option<R>, MockError>),
    Create(Result<R, MockError>),
    Build(R),
    UpdateAttributes(Result<R, MockError>),
}

impl<R: Record> Expectation<R> {
    fn label(&self) -> &'static str {
        match self {
            Expectation::FindAndCountAll(_) => "find_and_count_all",
            Expectation::Find(_) => "find",
            Expectation::Create(_) => "create",
            Expectation::Build(_) => "build",
            Expectation::UpdateAttributes(_) => "update_attributes",
        }
    }
}

struct MockState<R: Record, P> {
    expectations: VecDeque<Expectation<R>>,
    calls: Vec<ModelCall<R::Id, P>>,
}

/// A scripted [`Model`] that records every call it receives.
///
/// Cloning shares the script and the call log, so a test can keep one handle while the
/// resource under test owns another.
pub struct MockModel<R: Record, P> {
    state: Arc<Mutex<MockState<R, P>>>,
}

impl<R: Record, P> Clone for MockModel<R, P> {
    fn clone(&self) -> Self {
        Self {
            state: self.state.clone(),
        }
    }
}

impl<R: Record, P: Clone> Default for MockModel<R, P> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Record, P: Clone> MockModel<R, P> {
    /// Creates a mock with no expectations.
    pub fn new() -> Self {
        Self {
            state: Arc::new(Mutex::new(MockState {
                expectations: VecDeque::new(),
                calls: Vec::new(),
            })),
        }
    }

    /// Expects a `find_and_count_all` call.
    pub fn expect_find_and_count_all(&self) -> ExpectationBuilder<R, P, FindAndCount<R>> {
        self.builder(Expectation::FindAndCountAll)
    }

    /// Expects a `find` call.
    pub fn expect_find(&self) -> ExpectationBuilder<R, P, Option<R>> {
        self.builder(Expectation::Find)
    }

    /// Expects a `create` call.
    pub fn expect_create(&self) -> ExpectationBuilder<R, P, R> {
        self.builder(Expectation::Create)
    }

    /// Expects an `update_attributes` call.
    pub fn expect_update_attributes(&self) -> ExpectationBuilder<R, P, R> {
        self.builder(Expectation::UpdateAttributes)
    }

    /// Expects a `build` call returning `record`.
    pub fn expect_build(&self, record: R) {
        let mut state = self.state.lock().unwrap();
        state.expectations.push_back(Expectation::Build(record));
    }

    /// Every call received so far, oldest first.
    pub fn calls(&self) -> Vec<ModelCall<R::Id, P>> {
        self.state.lock().unwrap().calls.clone()
    }

    /// Verifies that all expectations were met.
    pub fn verify(&self) {
        let state = self.state.lock().unwrap();
        if !state.expectations.is_empty() {
            panic!(
                "Not all expectations were met. {} remaining",
                state.expectations.len()
            );
        }
    }

    fn builder<T>(
        &self,
        wrap: fn(Result<T, MockError>) -> Expectation<R>,
    ) -> ExpectationBuilder<R, P, T> {
        ExpectationBuilder {
            state: self.state.clone(),
            wrap,
        }
    }

    fn next(&self, call: ModelCall<R::Id, P>) -> Expectation<R>
    where
        P: Debug,
    {
        let mut state = self.state.lock().unwrap();
        let expectation = state.expectations.pop_front();
        match expectation {
            Some(expectation) => {
                state.calls.push(call);
                expectation
            }
            None => panic!("Unexpected call with no expectation left: {:?}", call),
        }
    }
}

/// Builder queuing the response of one expected call.
pub struct ExpectationBuilder<R: Record, P, T> {
    state: Arc<Mutex<MockState<R, P>>>,
    wrap: fn(Result<T, MockError>) -> Expectation<R>,
}

impl<R: Record, P, T> ExpectationBuilder<R, P, T> {
    /// Sets the expectation to return a successful result.
    pub fn return_ok(self, value: T) {
        let mut state = self.state.lock().unwrap();
        state.expectations.push_back((self.wrap)(Ok(value)));
    }

    /// Sets the expectation to return an error.
    pub fn return_err(self, error: MockError) {
        let mut state = self.state.lock().unwrap();
        state.expectations.push_back((self.wrap)(Err(error)));
    }
}

fn mismatch<R: Record>(wanted: &str, got: Expectation<R>) -> ! {
    panic!(
        "Expectation mismatch: called {} but {} was expected",
        wanted,
        got.label()
    )
}

#[async_trait]
impl<R, P> Model for MockModel<R, P>
where
    R: Record,
    P: Clone + Send + Sync + Debug + 'static,
{
    type Record = R;
    type Params = P;
    type Error = MockError;

    async fn find_and_count_all(
        &self,
        options: FindOptions,
    ) -> Result<FindAndCount<R>, MockError> {
        match self.next(ModelCall::FindAndCountAll(options)) {
            Expectation::FindAndCountAll(response) => response,
            other => mismatch("find_and_count_all", other),
        }
    }

    async fn find(&self, id: R::Id) -> Result<Option<R>, MockError> {
        match self.next(ModelCall::Find(id)) {
            Expectation::Find(response) => response,
            other => mismatch("find", other),
        }
    }

    async fn create(&self, params: P) -> Result<R, MockError> {
        match self.next(ModelCall::Create(params)) {
            Expectation::Create(response) => response,
            other => mismatch("create", other),
        }
    }

    fn build(&self) -> R {
        match self.next(ModelCall::Build) {
            Expectation::Build(record) => record,
            other => mismatch("build", other),
        }
    }

    async fn update_attributes(&self, record: R, params: P) -> Result<R, MockError> {
        let call = ModelCall::UpdateAttributes {
            id: record.id(),
            params,
        };
        match self.next(call) {
            Expectation::UpdateAttributes(response) => response,
            other => mismatch("update_attributes", other),
        }
    }
}

/// A [`ViewEngine`] that records what it was asked to render.
#[derive(Debug, Clone, Default)]
pub struct MockViews {
    rendered: Arc<Mutex<Vec<String>>>,
}

impl MockViews {
    /// Names of the views rendered so far.
    pub fn rendered(&self) -> Vec<String> {
        self.rendered.lock().unwrap().clone()
    }
}

impl ViewEngine for MockViews {
    fn render(&self, view: &str, locals: &serde_json::Value) -> Result<String, HttpError> {
        self.rendered.lock().unwrap().push(view.to_string());
        Ok(format!("{}: {}", view, locals))
    }
}
