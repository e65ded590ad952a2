use anyhow::Result;

use super::types::{CatalogSettings, Config, LlmSettings, SessionSettings};

#[derive(Debug)]
pub struct ConfigBuilder {
    pub(super) llm: LlmSettings,
    pub(super) catalog: CatalogSettings,
    pub(super) session: SessionSettings,
}

impl ConfigBuilder {
    pub fn new() -> Self {
        Self {
            llm: LlmSettings::default(),
            catalog: CatalogSettings::default(),
            session: SessionSettings::default(),
        }
    }

    pub fn with_llm<F>(mut self, update: F) -> Self
    where
        F: FnOnce(&mut LlmSettings),
    {
        update(&mut self.llm);
        self
    }

    pub fn with_catalog<F>(mut self, update: F) -> Self
    where
        F: FnOnce(&mut CatalogSettings),
    {
        update(&mut self.catalog);
        self
    }

    pub fn with_session<F>(mut self, update: F) -> Self
    where
        F: FnOnce(&mut SessionSettings),
    {
        update(&mut self.session);
        self
    }

    pub fn build(self) -> Result<Config> {
        Ok(Config {
            llm: self.llm,
            catalog: self.catalog,
            session: self.session,
        })
    }
}

impl Default for ConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}
