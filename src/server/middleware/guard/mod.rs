//! Request guard pipeline.
//!
//! A guard inspects an incoming request and either adds derived values to the
//! [`GuardContext`] or rejects the request with a [`GuardError`]. Controllers compose
//! guards into a [`Pipeline`] in the order they must run; the first rejection stops the
//! pipeline and becomes the response.
//!
//! ```rust,ignore
//! let ctx = Pipeline::new()
//!     .with(MethodGuard::new(Method::POST))
//!     .with(BodyGuard)
//!     .with(RequiredFieldsGuard::new(["rating", "text"]))
//!     .run(request)?;
//! ```

pub mod body;
pub mod boolean;
pub mod limit;
pub mod method;
pub mod pagination;
pub mod required;
pub mod secret;

use axum::{
    body::Bytes,
    extract::{FromRequest, Request},
    http::{header, Method},
};
use serde_json::{Map, Value};

use crate::server::error::{guard::GuardError, AppError};

pub use body::BodyGuard;
pub use boolean::BooleanGuard;
pub use limit::LimitGuard;
pub use method::MethodGuard;
pub use pagination::{Pagination, PaginationGuard, SortKey};
pub use required::RequiredFieldsGuard;
pub use secret::SharedSecretGuard;

/// Normalized key-value view of request input.
pub type RequestData = Map<String, Value>;

/// Raw request input handed to a pipeline.
#[derive(Debug, Clone)]
pub struct GuardRequest {
    pub method: Method,
    pub query: Option<String>,
    pub content_type: Option<String>,
    pub body: Bytes,
}

impl GuardRequest {
    pub fn new(method: Method) -> Self {
        Self {
            method,
            query: None,
            content_type: None,
            body: Bytes::new(),
        }
    }

    pub fn with_query(mut self, query: impl Into<String>) -> Self {
        self.query = Some(query.into());
        self
    }

    pub fn with_content_type(mut self, content_type: impl Into<String>) -> Self {
        self.content_type = Some(content_type.into());
        self
    }

    pub fn with_body(mut self, body: impl Into<Bytes>) -> Self {
        self.body = body.into();
        self
    }
}

impl<S> FromRequest<S> for GuardRequest
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let method = req.method().clone();
        let query = req.uri().query().map(str::to_owned);
        let content_type = req
            .headers()
            .get(header::CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .map(str::to_owned);

        let body = Bytes::from_request(req, state).await?;

        Ok(Self {
            method,
            query,
            content_type,
            body,
        })
    }
}

/// Values accumulated while a request moves through the pipeline.
#[derive(Debug, Clone)]
pub struct GuardContext {
    pub method: Method,
    pub content_type: Option<String>,
    pub body: Bytes,
    /// Decoded query string, available regardless of method.
    pub query: RequestData,
    /// Verb-agnostic input, filled by [`MethodGuard`] and replaced by [`BodyGuard`].
    pub data: RequestData,
    /// Coerced booleans in the order their guard listed them.
    pub flags: Vec<(String, bool)>,
    pub pagination: Option<Pagination>,
    pub limit: Option<u64>,
}

impl GuardContext {
    pub fn from_request(request: GuardRequest) -> Self {
        let query = request
            .query
            .as_deref()
            .map(|query| body::decode_form(query.as_bytes()))
            .unwrap_or_default();

        Self {
            method: request.method,
            content_type: request.content_type,
            body: request.body,
            query,
            data: RequestData::new(),
            flags: Vec::new(),
            pagination: None,
            limit: None,
        }
    }

    pub fn field(&self, name: &str) -> Option<&Value> {
        self.data.get(name)
    }

    /// Looks up a boolean produced by a [`BooleanGuard`].
    pub fn flag(&self, name: &str) -> Option<bool> {
        self.flags
            .iter()
            .find(|(field, _)| field == name)
            .map(|(_, value)| *value)
    }

    /// True when the request declared a URL-encoded form body.
    pub fn is_form(&self) -> bool {
        self.content_type
            .as_deref()
            .and_then(|value| value.split(';').next())
            .map(|mime| {
                mime.trim()
                    .eq_ignore_ascii_case("application/x-www-form-urlencoded")
            })
            .unwrap_or(false)
    }
}

/// A single validate-or-transform step.
pub trait Guard: Send + Sync {
    fn check(&self, ctx: &mut GuardContext) -> Result<(), GuardError>;
}

/// Ordered list of guards run against one request.
#[derive(Default)]
pub struct Pipeline {
    guards: Vec<Box<dyn Guard>>,
}

impl Pipeline {
    pub fn new() -> Self {
        Self { guards: Vec::new() }
    }

    /// Appends a guard; guards run in the order they were added.
    pub fn with<G: Guard + 'static>(mut self, guard: G) -> Self {
        self.guards.push(Box::new(guard));
        self
    }

    /// Runs every guard in order, stopping at the first rejection.
    ///
    /// # Returns
    /// - `Ok(GuardContext)` - All guards passed; the context holds their derived values
    /// - `Err(GuardError)` - The first guard that rejected the request
    pub fn run(&self, request: GuardRequest) -> Result<GuardContext, GuardError> {
        let mut ctx = GuardContext::from_request(request);

        for guard in &self.guards {
            if let Err(err) = guard.check(&mut ctx) {
                tracing::debug!("Request rejected by guard: {}", err);
                return Err(err);
            }
        }

        Ok(ctx)
    }
}
