//! Course catalog search backed by the Coursera API.

mod client;
mod types;

use anyhow::{Context, Result};
use async_trait::async_trait;

use crate::config::CatalogSettings;

pub use client::CourseraClient;
pub use types::{AccessToken, CourseRecord};

/// Per-topic course lookup used by the session.
#[async_trait]
pub trait CourseSearch: Send + Sync {
    async fn search(&self, topic: &str) -> Vec<CourseRecord>;
}

/// A client paired with the token obtained for this run.
///
/// The token is never refreshed; once it expires every search comes back empty.
#[derive(Debug, Clone)]
pub struct AuthenticatedCatalog {
    client: CourseraClient,
    token: AccessToken,
    limit: u32,
}

impl AuthenticatedCatalog {
    pub fn new(client: CourseraClient, token: AccessToken, limit: u32) -> Self {
        Self {
            client,
            token,
            limit,
        }
    }

    /// Builds a client and performs the token exchange with the configured credentials.
    pub async fn connect(settings: &CatalogSettings) -> Result<Self> {
        let client = CourseraClient::new(settings)?;
        let token = client
            .authenticate(&settings.app_key, &settings.app_secret)
            .await
            .context("Failed to obtain Coursera access token.")?;
        Ok(Self::new(client, token, settings.course_limit))
    }
}

#[async_trait]
impl CourseSearch for AuthenticatedCatalog {
    async fn search(&self, topic: &str) -> Vec<CourseRecord> {
        self.client.search(topic, &self.token, self.limit).await
    }
}
