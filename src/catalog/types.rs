use std::fmt;

use serde::Deserialize;

/// Bearer credential issued by the catalog's token endpoint.
#[derive(Clone, PartialEq, Eq)]
pub struct AccessToken(String);

impl AccessToken {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn secret(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for AccessToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("AccessToken(***)")
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CourseRecord {
    pub name: String,
    pub url: String,
}

#[derive(Debug, Deserialize)]
pub(super) struct TokenResponse {
    pub access_token: Option<String>,
}

#[derive(Debug, Deserialize)]
pub(super) struct SearchResponse {
    #[serde(default)]
    pub elements: Vec<CourseElement>,
}

#[derive(Debug, Deserialize)]
pub(super) struct CourseElement {
    pub name: Option<String>,
    pub slug: Option<String>,
}
