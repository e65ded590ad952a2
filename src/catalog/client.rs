use std::time::Duration;

use anyhow::{Context, Result, anyhow};
use reqwest::{Client, StatusCode};

use crate::config::CatalogSettings;

use super::types::{AccessToken, CourseRecord, SearchResponse, TokenResponse};

const SEARCH_PATH: &str = "/api/courses.v1";
const SEARCH_FIELDS: &str = "name,slug";

#[derive(Debug, Clone)]
pub struct CourseraClient {
    http: Client,
    token_url: String,
    api_base_url: String,
    site_url: String,
}

impl CourseraClient {
    pub fn new(settings: &CatalogSettings) -> Result<Self> {
        let api_base_url = settings.api_base_url.trim_end_matches('/').to_string();
        if api_base_url.is_empty() {
            return Err(anyhow!("Coursera API base URL cannot be empty"));
        }

        let mut builder = Client::builder().user_agent(settings.user_agent.clone());
        if let Some(secs) = settings.timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }
        let http = builder
            .build()
            .context("Failed to build Coursera HTTP client")?;

        Ok(Self {
            http,
            token_url: settings.token_url.clone(),
            api_base_url,
            site_url: settings.site_url.trim_end_matches('/').to_string(),
        })
    }

    /// Exchanges the application key and secret for a bearer token.
    ///
    /// Failures are logged here and returned; nothing can be searched without a token.
    pub async fn authenticate(&self, app_key: &str, app_secret: &str) -> Result<AccessToken> {
        let result = self.request_token(app_key, app_secret).await;
        if let Err(err) = &result {
            tracing::error!(error = %format!("{err:#}"), "Error obtaining Coursera access token");
        }
        result
    }

    /// Keyword search for `topic`. Never fails: errors are logged and yield no courses.
    pub async fn search(&self, topic: &str, token: &AccessToken, limit: u32) -> Vec<CourseRecord> {
        match self.request_courses(topic, token, limit).await {
            Ok(courses) => {
                tracing::debug!(topic, count = courses.len(), "fetched Coursera courses");
                courses
            }
            Err(err) => {
                tracing::error!(topic, error = %format!("{err:#}"), "Error fetching Coursera courses");
                Vec::new()
            }
        }
    }

    async fn request_token(&self, app_key: &str, app_secret: &str) -> Result<AccessToken> {
        let response = self
            .http
            .post(&self.token_url)
            .basic_auth(app_key, Some(app_secret))
            .form(&[("grant_type", "client_credentials")])
            .send()
            .await
            .context("Failed to send request to Coursera token endpoint")?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(status_error("Coursera token endpoint", status, &body));
        }

        let payload = response
            .json::<TokenResponse>()
            .await
            .context("Failed to parse Coursera token response JSON")?;

        payload
            .access_token
            .filter(|token| !token.trim().is_empty())
            .map(AccessToken::new)
            .ok_or_else(|| anyhow!("Coursera token response did not include an access_token"))
    }

    async fn request_courses(
        &self,
        topic: &str,
        token: &AccessToken,
        limit: u32,
    ) -> Result<Vec<CourseRecord>> {
        let url = format!("{}{}", self.api_base_url, SEARCH_PATH);
        let limit = limit.to_string();

        let response = self
            .http
            .get(&url)
            .bearer_auth(token.secret())
            .query(&[
                ("q", "search"),
                ("query", topic),
                ("limit", limit.as_str()),
                ("fields", SEARCH_FIELDS),
            ])
            .send()
            .await
            .context("Failed to send request to Coursera search endpoint")?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(status_error("Coursera search endpoint", status, &body));
        }

        let payload = response
            .json::<SearchResponse>()
            .await
            .context("Failed to parse Coursera search response JSON")?;

        let courses = payload
            .elements
            .into_iter()
            .filter_map(|element| match (element.name, element.slug) {
                (Some(name), Some(slug)) => Some(CourseRecord {
                    name,
                    url: self.course_url(&slug),
                }),
                _ => {
                    tracing::debug!(topic, "skipping course without name or slug");
                    None
                }
            })
            .collect();

        Ok(courses)
    }

    fn course_url(&self, slug: &str) -> String {
        format!("{}/learn/{}", self.site_url, slug)
    }
}

fn status_error(endpoint: &str, status: StatusCode, body: &str) -> anyhow::Error {
    let body = body.trim();
    match status {
        StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => anyhow!(
            "{endpoint} rejected the credentials (status {status}). Response content: {body}"
        ),
        StatusCode::TOO_MANY_REQUESTS => {
            anyhow!("{endpoint} is rate limiting requests (status {status}). Response content: {body}")
        }
        _ if body.is_empty() => anyhow!("{endpoint} returned status {status}"),
        _ => anyhow!("{endpoint} returned status {status}. Response content: {body}"),
    }
}
