//! Minimal PostgREST client for the hosted store.
//!
//! Every request is table-scoped: `table("projects")` starts a query, filter and
//! ordering methods append PostgREST query parameters, and one terminal method
//! (`fetch`, `insert`, `update`, `delete`) sends it. Rows come back as JSON
//! arrays and are decoded straight into the caller's row type.

use std::fmt;

use reqwest::{
    header::{HeaderMap, HeaderValue, AUTHORIZATION, CONTENT_RANGE},
    Client, Method, StatusCode,
};
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use tracing::{debug, instrument};
use url::Url;

use crate::{errors::AppError, settings::parse_store_url};

const REST_PATH: &str = "rest/v1/";
const RETURN_REPRESENTATION: &str = "return=representation";
const COUNT_EXACT: &str = "count=exact";

#[derive(Clone)]
pub struct RestClient {
    client: Client,
    rest_root: Url,
}

impl fmt::Debug for RestClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RestClient")
            .field("rest_root", &self.rest_root.as_str())
            .finish()
    }
}

impl RestClient {
    pub fn new(base_url: &str, api_key: &str) -> Result<Self, AppError> {
        let mut base = parse_store_url(base_url).map_err(AppError::StoreUnavailable)?;
        if !base.path().ends_with('/') {
            let path = format!("{}/", base.path());
            base.set_path(&path);
        }
        let rest_root = base
            .join(REST_PATH)
            .map_err(|e| AppError::StoreUnavailable(format!("Invalid store URL: {}", e)))?;

        let mut headers = HeaderMap::new();
        let key = HeaderValue::from_str(api_key.trim())
            .map_err(|_| AppError::StoreUnavailable("Store key is not a valid header value".into()))?;
        let bearer = HeaderValue::from_str(&format!("Bearer {}", api_key.trim()))
            .map_err(|_| AppError::StoreUnavailable("Store key is not a valid header value".into()))?;
        headers.insert("apikey", key);
        headers.insert(AUTHORIZATION, bearer);

        let client = Client::builder()
            .default_headers(headers)
            .user_agent(concat!("portfolio-api/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(RestClient { client, rest_root })
    }

    pub fn table(&self, name: &str) -> TableQuery<'_> {
        TableQuery {
            client: self,
            table: name.to_string(),
            params: Vec::new(),
        }
    }

    fn table_url(&self, table: &str) -> Result<Url, RestError> {
        self.rest_root
            .join(table)
            .map_err(|e| RestError::InvalidUrl(e.to_string()))
    }
}

pub struct TableQuery<'a> {
    client: &'a RestClient,
    table: String,
    params: Vec<(String, String)>,
}

impl<'a> TableQuery<'a> {
    pub fn select(mut self, columns: &str) -> Self {
        self.params.push(("select".into(), columns.into()));
        self
    }

    pub fn eq(mut self, column: &str, value: impl fmt::Display) -> Self {
        self.params.push((column.into(), format!("eq.{}", value)));
        self
    }

    pub fn order(mut self, column: &str, descending: bool) -> Self {
        let direction = if descending { "desc" } else { "asc" };
        self.params.push(("order".into(), format!("{}.{}", column, direction)));
        self
    }

    pub fn limit(mut self, count: usize) -> Self {
        self.params.push(("limit".into(), count.to_string()));
        self
    }

    #[cfg(test)]
    fn params(&self) -> &[(String, String)] {
        &self.params
    }

    #[instrument(skip(self), fields(table = %self.table))]
    pub async fn fetch<T: DeserializeOwned>(self) -> Result<Vec<T>, RestError> {
        self.execute(Method::GET, None::<&()>).await
    }

    #[instrument(skip(self, body), fields(table = %self.table))]
    pub async fn insert<B, T>(self, body: &B) -> Result<Vec<T>, RestError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        self.execute(Method::POST, Some(body)).await
    }

    #[instrument(skip(self, body), fields(table = %self.table))]
    pub async fn update<B, T>(self, body: &B) -> Result<Vec<T>, RestError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        self.execute(Method::PATCH, Some(body)).await
    }

    #[instrument(skip(self), fields(table = %self.table))]
    pub async fn delete<T: DeserializeOwned>(self) -> Result<Vec<T>, RestError> {
        self.execute(Method::DELETE, None::<&()>).await
    }

    /// Exact row count from the `Content-Range` total of a HEAD request.
    /// Not subject to the server's `max-rows` cap.
    #[instrument(skip(self), fields(table = %self.table))]
    pub async fn count(self) -> Result<i64, RestError> {
        let url = self.client.table_url(&self.table)?;
        let response = self.client.client
            .head(url)
            .query(&self.params)
            .header("Prefer", COUNT_EXACT)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(RestError::Rejected(PostgrestError::from_response(status, &[])));
        }

        let range = response
            .headers()
            .get(CONTENT_RANGE)
            .and_then(|v| v.to_str().ok())
            .unwrap_or_default();

        parse_range_total(range).ok_or_else(|| RestError::MissingCount(range.to_string()))
    }

    async fn execute<B, T>(self, method: Method, body: Option<&B>) -> Result<Vec<T>, RestError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let url = self.client.table_url(&self.table)?;
        let mut request = self.client.client
            .request(method.clone(), url)
            .query(&self.params);

        if method != Method::GET {
            request = request.header("Prefer", RETURN_REPRESENTATION);
        }
        if let Some(body) = body {
            request = request.json(body);
        }

        let response = request.send().await?;
        let status = response.status();
        let bytes = response.bytes().await?;

        if !status.is_success() {
            return Err(RestError::Rejected(PostgrestError::from_response(status, &bytes)));
        }
        if bytes.is_empty() {
            return Ok(Vec::new());
        }

        serde_json::from_slice(&bytes).map_err(|e| {
            debug!("Failed to parse store response: {}", String::from_utf8_lossy(&bytes));
            RestError::Decode(e)
        })
    }
}

/// Total from a `Content-Range` value such as `0-24/3573` or `*/0`.
fn parse_range_total(range: &str) -> Option<i64> {
    range.rsplit_once('/')?.1.trim().parse().ok()
}

/// Error body PostgREST returns for rejected requests.
#[derive(Debug, Deserialize)]
pub struct PostgrestError {
    #[serde(skip)]
    pub status: u16,
    #[serde(default)]
    pub code: Option<String>,
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub details: Option<String>,
    #[serde(default)]
    pub hint: Option<String>,
}

impl PostgrestError {
    fn from_response(status: StatusCode, bytes: &[u8]) -> Self {
        let mut err = serde_json::from_slice::<PostgrestError>(bytes).unwrap_or_else(|_| PostgrestError {
            status: 0,
            code: None,
            message: String::from_utf8_lossy(bytes).into_owned(),
            details: None,
            hint: None,
        });
        err.status = status.as_u16();
        err
    }

    /// Unique, foreign-key, not-null and check violations (SQLSTATE class 23).
    pub fn is_integrity_violation(&self) -> bool {
        self.code.as_deref().is_some_and(|code| code.starts_with("23"))
    }
}

impl fmt::Display for PostgrestError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "HTTP {}", self.status)?;
        if let Some(code) = &self.code {
            write!(f, " [{}]", code)?;
        }
        write!(f, ": {}", self.message)?;
        if let Some(details) = &self.details {
            write!(f, " ({})", details)?;
        }
        Ok(())
    }
}

#[derive(Debug)]
pub enum RestError {
    Transport(reqwest::Error),
    Decode(serde_json::Error),
    Rejected(PostgrestError),
    InvalidUrl(String),
    MissingCount(String),
}

impl fmt::Display for RestError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RestError::Transport(e) => write!(f, "Store request error: {}", e),
            RestError::Decode(e) => write!(f, "Malformed store response: {}", e),
            RestError::Rejected(e) => write!(f, "Store rejected request: {}", e),
            RestError::InvalidUrl(e) => write!(f, "Invalid store URL: {}", e),
            RestError::MissingCount(range) => write!(f, "Store returned no row count (Content-Range: {:?})", range),
        }
    }
}

impl RestError {
    pub fn is_integrity_violation(&self) -> bool {
        matches!(self, RestError::Rejected(e) if e.is_integrity_violation())
    }
}

impl From<reqwest::Error> for RestError {
    fn from(err: reqwest::Error) -> Self {
        RestError::Transport(err)
    }
}

impl From<RestError> for AppError {
    fn from(err: RestError) -> Self {
        AppError::StoreUnavailable(err.to_string())
    }
}
