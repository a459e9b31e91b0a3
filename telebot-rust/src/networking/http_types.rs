use async_trait::async_trait;
use std::collections::HashMap;

/// Parameter name to its values; every value becomes its own `key=value` pair.
pub type QueryParams = HashMap<String, Vec<String>>;

#[derive(Clone, Debug, Default)]
pub struct RequestArgs {
    pub url: String,
    pub timeout_ms: u64,
}

pub struct Response {
    pub status_code: u16,
    pub data: Option<Vec<u8>>,
    pub error: Option<String>,
}

#[derive(PartialEq, Clone, Copy, Debug)]
#[allow(clippy::upper_case_acronyms)]
pub enum HttpMethod {
    GET,
    POST,
}

impl std::fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            HttpMethod::GET => write!(f, "GET"),
            HttpMethod::POST => write!(f, "POST"),
        }
    }
}

/// Sends one request and reports what came back. Implementations never
/// retry; a transport failure is reported through `Response::error`.
#[async_trait]
pub trait NetworkProvider: Sync + Send {
    async fn send(&self, method: &HttpMethod, args: &RequestArgs) -> Response;
}

/// Fluent construction of [`QueryParams`].
#[derive(Default, Debug, Clone)]
pub struct QueryParamsBuilder {
    inner: QueryParams,
}

impl QueryParamsBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn param(mut self, key: &str, value: impl ToString) -> Self {
        self.inner
            .entry(key.to_string())
            .or_default()
            .push(value.to_string());
        self
    }

    #[must_use]
    pub fn params<I, V>(mut self, key: &str, values: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: ToString,
    {
        let entry = self.inner.entry(key.to_string()).or_default();
        entry.extend(values.into_iter().map(|v| v.to_string()));
        self
    }

    #[must_use]
    pub fn build(self) -> QueryParams {
        self.inner
    }
}
