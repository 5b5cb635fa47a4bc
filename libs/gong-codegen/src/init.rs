// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! Client initializer
//!
//! Orchestrates fetch and generation conditionally (cached artifacts are
//! reused unless `regenerate` is set), then loads the generated tree and
//! wires credentials into a fresh [`OpenApiConfig`].
//!
//! Every call reloads and reconfigures independently; concurrent calls
//! targeting the same paths are not coordinated and must be serialized
//! by the caller.

use std::sync::Arc;

use tracing::info;

use crate::client::{GongClient, KeyPairToken, OpenApiConfig};
use crate::config::ClientOptions;
use crate::error::CodegenError;
use crate::fetch::{fetch_and_persist, GongSpecSource, SpecSource};
use crate::generate::{generate_client, ProgenitorGenerator, SpecGenerator, ENTRY_FILE};

/// Initialize the Gong API client with the production fetcher and
/// generator.
///
/// # Example
///
/// ```no_run
/// # async fn run() -> Result<(), gong_codegen::CodegenError> {
/// use gong_codegen::{init_gong_client, ClientOptions};
///
/// let client = init_gong_client(ClientOptions {
///     api_key: Some("key".to_string()),
///     access_key: Some("secret".to_string()),
///     ..Default::default()
/// })
/// .await?;
///
/// assert_eq!(client.config().base, "https://app.gong.io");
/// # Ok(())
/// # }
/// ```
pub async fn init_gong_client(options: ClientOptions) -> Result<GongClient, CodegenError> {
    init_gong_client_with(options, &GongSpecSource::new(), &ProgenitorGenerator).await
}

/// Initialize the Gong API client with injected collaborators.
///
/// Credential wiring activates only when both `api_key` and `access_key`
/// resolve; one without the other silently leaves credential mode off.
pub async fn init_gong_client_with(
    options: ClientOptions,
    source: &dyn SpecSource,
    generator: &dyn SpecGenerator,
) -> Result<GongClient, CodegenError> {
    let resolved = options.resolve();

    let entry = resolved.output_dir.join(ENTRY_FILE);
    let needs_generate = resolved.regenerate || !entry.is_file();

    if needs_generate {
        let needs_fetch = resolved.regenerate || !resolved.spec_file.is_file();
        if needs_fetch {
            fetch_and_persist(source, &resolved.spec_file).await?;
        }
        generate_client(source, generator, &resolved.spec_file, &resolved.output_dir).await?;
    }

    let mut config = OpenApiConfig::new(resolved.base_url);
    if let (Some(api_key), Some(access_key)) = (resolved.api_key, resolved.access_key) {
        config.set_token(Arc::new(KeyPairToken::new(api_key, access_key)));
    }

    let client = GongClient::load(&resolved.output_dir, config)?;
    info!("Initialized Gong API client from {}", client.output_dir());
    Ok(client)
}
