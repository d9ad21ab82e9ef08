//! # Mock Framework
//!
//! Utilities for testing clients without a network.
//!
//! [`MockTransport`] implements [`Transport`] from a queue of scripted
//! expectations. Each incoming request pops the next expectation, is checked
//! against it, and receives the scripted response.

use crate::framework::{ClientError, ResourceRequest, Transport};
use async_trait::async_trait;
use serde_json::Value;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

// =============================================================================
// EXPECTATION BUILDER API
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq)]
enum Verb {
    List,
    Create,
    Update,
    Delete,
}

impl Verb {
    fn of(request: &ResourceRequest) -> Self {
        match request {
            ResourceRequest::List { .. } => Verb::List,
            ResourceRequest::Create { .. } => Verb::Create,
            ResourceRequest::Update { .. } => Verb::Update,
            ResourceRequest::Delete { .. } => Verb::Delete,
        }
    }
}

/// Represents an expected request and the response to hand back.
struct Expectation {
    verb: Verb,
    url: String,
    response: Result<Value, ClientError>,
}

/// A scripted transport with expectation tracking for fluent testing.
///
/// # Example
/// ```ignore
/// let mock = Arc::new(MockTransport::new());
/// mock.expect_list("https://fakestoreapi.com/products").return_ok(json!([]));
///
/// let client: ResourceClient<Product> = ResourceClient::new(url, mock.clone());
/// // Use client in tests...
/// mock.verify(); // Ensures all expectations were met
/// ```
#[derive(Default)]
pub struct MockTransport {
    expectations: Arc<Mutex<VecDeque<Expectation>>>,
    requests: Mutex<Vec<ResourceRequest>>,
    fallback: Option<ClientError>,
}

impl MockTransport {
    /// Creates a new mock with no expectations. Any request is a test failure.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a mock that answers every request with `error`.
    pub fn failing(error: ClientError) -> Self {
        Self {
            fallback: Some(error),
            ..Self::default()
        }
    }

    /// Expects a `GET` on the collection URL.
    pub fn expect_list(&self, url: impl Into<String>) -> ExpectationBuilder {
        self.expect(Verb::List, url)
    }

    /// Expects a `POST` on the collection URL.
    pub fn expect_create(&self, url: impl Into<String>) -> ExpectationBuilder {
        self.expect(Verb::Create, url)
    }

    /// Expects a `PUT` on an item URL.
    pub fn expect_update(&self, url: impl Into<String>) -> ExpectationBuilder {
        self.expect(Verb::Update, url)
    }

    /// Expects a `DELETE` on an item URL.
    pub fn expect_delete(&self, url: impl Into<String>) -> ExpectationBuilder {
        self.expect(Verb::Delete, url)
    }

    fn expect(&self, verb: Verb, url: impl Into<String>) -> ExpectationBuilder {
        ExpectationBuilder {
            verb,
            url: url.into(),
            expectations: self.expectations.clone(),
        }
    }

    /// Every request received so far, in arrival order.
    pub fn requests(&self) -> Vec<ResourceRequest> {
        self.requests.lock().unwrap().clone()
    }

    /// Verifies that all expectations were met.
    pub fn verify(&self) {
        let exps = self.expectations.lock().unwrap();
        if !exps.is_empty() {
            panic!("Not all expectations were met. {} remaining", exps.len());
        }
    }
}

#[async_trait]
impl Transport for MockTransport {
    async fn send(&self, request: ResourceRequest) -> Result<Value, ClientError> {
        self.requests.lock().unwrap().push(request.clone());

        let expectation = self.expectations.lock().unwrap().pop_front();
        match (expectation, &self.fallback) {
            (Some(exp), _) => {
                assert_eq!(exp.verb, Verb::of(&request), "Unexpected verb for {}", request.url());
                assert_eq!(exp.url, request.url(), "Unexpected URL");
                exp.response
            }
            (None, Some(error)) => Err(error.clone()),
            (None, None) => panic!("Unexpected request: {} {}", request.verb(), request.url()),
        }
    }
}

/// Builder returned by the `expect_*` methods.
pub struct ExpectationBuilder {
    verb: Verb,
    url: String,
    expectations: Arc<Mutex<VecDeque<Expectation>>>,
}

impl ExpectationBuilder {
    /// Sets the expectation to return a successful body.
    pub fn return_ok(self, body: Value) {
        self.push(Ok(body));
    }

    /// Sets the expectation to return an error.
    pub fn return_err(self, error: ClientError) {
        self.push(Err(error));
    }

    fn push(self, response: Result<Value, ClientError>) {
        let mut exps = self.expectations.lock().unwrap();
        exps.push_back(Expectation {
            verb: self.verb,
            url: self.url,
            response,
        });
    }
}
