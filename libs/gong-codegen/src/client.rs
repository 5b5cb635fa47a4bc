// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! Generated-client handle
//!
//! A [`GongClient`] is a typed view over a generated source tree: a
//! fresh [`OpenApiConfig`] value built per initialization call, plus a
//! map of the modules discovered under the output directory. Nothing is
//! mutated globally; each initialization constructs its own config.

use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;

use async_trait::async_trait;
use camino::{Utf8Path, Utf8PathBuf};

use crate::error::CodegenError;
use crate::generate::{module_files, ENTRY_FILE};

/// Asynchronous credential provider producing an `Authorization` value
#[async_trait]
pub trait TokenProvider: Send + Sync {
    async fn token(&self) -> String;
}

/// Bearer token formed from a Gong API key / access key pair
pub struct KeyPairToken {
    api_key: String,
    access_key: String,
}

impl KeyPairToken {
    pub fn new(api_key: impl Into<String>, access_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            access_key: access_key.into(),
        }
    }
}

#[async_trait]
impl TokenProvider for KeyPairToken {
    async fn token(&self) -> String {
        format!("Bearer {}:{}", self.api_key, self.access_key)
    }
}

/// Per-initialization client configuration
#[derive(Clone)]
pub struct OpenApiConfig {
    /// Base URL for API requests
    pub base: String,
    /// Whether requests carry credentials
    pub with_credentials: bool,
    token: Option<Arc<dyn TokenProvider>>,
}

impl OpenApiConfig {
    pub fn new(base: impl Into<String>) -> Self {
        Self {
            base: base.into(),
            with_credentials: false,
            token: None,
        }
    }

    /// Install a credential provider and enable credential mode
    pub fn set_token(&mut self, provider: Arc<dyn TokenProvider>) {
        self.with_credentials = true;
        self.token = Some(provider);
    }

    /// The installed credential provider, if any
    pub fn token_provider(&self) -> Option<&Arc<dyn TokenProvider>> {
        self.token.as_ref()
    }

    /// Resolve the credential, if a provider is installed
    pub async fn token(&self) -> Option<String> {
        match &self.token {
            Some(provider) => Some(provider.token().await),
            None => None,
        }
    }
}

impl fmt::Debug for OpenApiConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OpenApiConfig")
            .field("base", &self.base)
            .field("with_credentials", &self.with_credentials)
            .field("token", &self.token.as_ref().map(|_| "<provider>"))
            .finish()
    }
}

/// Kind of a discovered generated module
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ModuleKind {
    Core,
    Service,
    Model,
}

/// A module discovered under the generated tree
#[derive(Clone, Debug)]
pub struct GeneratedModule {
    pub kind: ModuleKind,
    pub path: Utf8PathBuf,
}

/// Handle over a generated client tree
#[derive(Debug)]
pub struct GongClient {
    output_dir: Utf8PathBuf,
    config: OpenApiConfig,
    modules: BTreeMap<String, GeneratedModule>,
}

impl GongClient {
    /// Load a handle from a generated output directory.
    ///
    /// Requires the aggregating entry file to exist; the `core`,
    /// `services` and `models` subdirectories are scanned for modules
    /// (missing subdirectories are fine).
    pub fn load(output_dir: &Utf8Path, config: OpenApiConfig) -> Result<Self, CodegenError> {
        let entry = output_dir.join(ENTRY_FILE);
        if !entry.is_file() {
            return Err(CodegenError::Initialization(format!(
                "no generated client entry at {entry}"
            )));
        }

        let mut modules = BTreeMap::new();
        let kinds = [
            ("core", ModuleKind::Core),
            ("services", ModuleKind::Service),
            ("models", ModuleKind::Model),
        ];
        for (subdir, kind) in kinds {
            let dir = output_dir.join(subdir);
            for name in module_files(&dir).map_err(|e| {
                CodegenError::Initialization(format!("failed to scan {dir}: {e}"))
            })? {
                let path = dir.join(format!("{name}.rs"));
                modules.insert(name, GeneratedModule { kind, path });
            }
        }

        Ok(Self {
            output_dir: output_dir.to_path_buf(),
            config,
            modules,
        })
    }

    pub fn output_dir(&self) -> &Utf8Path {
        &self.output_dir
    }

    pub fn config(&self) -> &OpenApiConfig {
        &self.config
    }

    pub fn config_mut(&mut self) -> &mut OpenApiConfig {
        &mut self.config
    }

    /// All discovered modules, keyed by name
    pub fn modules(&self) -> impl Iterator<Item = (&str, &GeneratedModule)> {
        self.modules.iter().map(|(name, m)| (name.as_str(), m))
    }

    pub fn module(&self, name: &str) -> Option<&GeneratedModule> {
        self.modules.get(name)
    }

    /// Names of discovered service modules
    pub fn services(&self) -> Vec<&str> {
        self.modules_of(ModuleKind::Service)
    }

    /// Names of discovered model modules
    pub fn models(&self) -> Vec<&str> {
        self.modules_of(ModuleKind::Model)
    }

    fn modules_of(&self, kind: ModuleKind) -> Vec<&str> {
        self.modules
            .iter()
            .filter(|(_, m)| m.kind == kind)
            .map(|(name, _)| name.as_str())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn key_pair_token_is_bearer_with_colon_separator() {
        let provider = KeyPairToken::new("k1", "k2");
        assert_eq!(provider.token().await, "Bearer k1:k2");
    }

    #[tokio::test]
    async fn config_without_provider_has_no_token() {
        let config = OpenApiConfig::new("https://app.gong.io");
        assert!(!config.with_credentials);
        assert!(config.token_provider().is_none());
        assert_eq!(config.token().await, None);
    }

    #[tokio::test]
    async fn set_token_enables_credential_mode() {
        let mut config = OpenApiConfig::new("https://app.gong.io");
        config.set_token(Arc::new(KeyPairToken::new("a", "b")));
        assert!(config.with_credentials);
        assert_eq!(config.token().await.as_deref(), Some("Bearer a:b"));
    }
}
