// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! Spec fetcher
//!
//! Downloads the Gong OpenAPI specification document and persists it to
//! disk. Every call re-downloads unconditionally; deciding whether a
//! cached copy suffices is the initializer's job, not this module's.

use async_trait::async_trait;
use camino::{Utf8Path, Utf8PathBuf};
use serde_json::Value;
use tracing::info;

use crate::config::GONG_SPEC_URL;
use crate::error::CodegenError;

/// Source of the API specification document.
///
/// The production implementation is [`GongSpecSource`]; tests substitute
/// their own.
#[async_trait]
pub trait SpecSource: Send + Sync {
    /// Retrieve the specification document
    async fn fetch(&self) -> Result<Value, CodegenError>;
}

/// Fetches the specification from the fixed Gong endpoint
#[derive(Clone, Default)]
pub struct GongSpecSource {
    client: reqwest::Client,
}

impl GongSpecSource {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl SpecSource for GongSpecSource {
    async fn fetch(&self) -> Result<Value, CodegenError> {
        let response = self
            .client
            .get(GONG_SPEC_URL)
            .header(reqwest::header::ACCEPT, "application/json")
            .send()
            .await?
            .error_for_status()?;

        let spec = response.json::<Value>().await?;
        Ok(spec)
    }
}

/// Serialize the specification as pretty-printed JSON and write it to
/// `path`, creating missing parent directories. An existing file is
/// overwritten unconditionally.
pub fn persist_spec(spec: &Value, path: &Utf8Path) -> Result<(), CodegenError> {
    if let Some(parent) = path.parent()
        && !parent.as_str().is_empty()
    {
        std::fs::create_dir_all(parent)?;
    }

    let text = serde_json::to_string_pretty(spec)?;
    std::fs::write(path, text)?;
    info!("Saved API specification to {path}");
    Ok(())
}

/// Download the specification and persist it to `path`. Returns the path
/// written. This is the entry point external callers use.
pub async fn fetch_and_persist(
    source: &dyn SpecSource,
    path: &Utf8Path,
) -> Result<Utf8PathBuf, CodegenError> {
    info!("Downloading Gong API specification...");
    let spec = source.fetch().await?;
    persist_spec(&spec, path)?;
    Ok(path.to_path_buf())
}
