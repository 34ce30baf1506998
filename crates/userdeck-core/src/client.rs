use futures::future::BoxFuture;
use tracing::debug;

use crate::error::FetchError;
use crate::user::{decode_users, UserRecord};

/// Anything that can produce the user collection in one shot.
pub trait UserSource: Send + Sync {
    fn fetch_users(&self) -> BoxFuture<'static, Result<Vec<UserRecord>, FetchError>>;
}

/// HTTP source for the directory endpoint. No timeout is configured, so a
/// hanging server keeps the request pending for as long as the transport allows.
#[derive(Clone)]
pub struct DirectoryClient {
    http: reqwest::Client,
    endpoint: String,
}

impl DirectoryClient {
    pub fn new(endpoint: impl Into<String>, user_agent: &str) -> anyhow::Result<Self> {
        let http = reqwest::Client::builder().user_agent(user_agent).build()?;
        Ok(Self { http, endpoint: endpoint.into() })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    pub async fn fetch(&self) -> Result<Vec<UserRecord>, FetchError> {
        debug!("GET {}", self.endpoint);
        let response = self.http.get(&self.endpoint).send().await.map_err(|e| FetchError::network(&e))?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Http { status: status.as_u16() });
        }

        let body = response.bytes().await.map_err(|e| FetchError::network(&e))?;
        decode_users(&body)
    }
}

impl UserSource for DirectoryClient {
    fn fetch_users(&self) -> BoxFuture<'static, Result<Vec<UserRecord>, FetchError>> {
        let client = self.clone();
        Box::pin(async move { client.fetch().await })
    }
}
