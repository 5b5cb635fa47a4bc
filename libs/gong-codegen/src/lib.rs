// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! Gong API client codegen toolkit
//!
//! Downloads the Gong OpenAPI specification, generates a typed client
//! from it with Progenitor, and hands back a configured client handle.
//! Three pieces, composed linearly:
//!
//! 1. [`fetch`] - download the specification document and persist it.
//! 2. [`generate`] - run the code generator and write an aggregating
//!    entry module over its output.
//! 3. [`init`] - decide whether cached artifacts suffice, regenerate if
//!    not, and wire base URL and credentials into the handle.
//!
//! The spec file and generated directory act as an implicit filesystem
//! cache: presence is the only staleness signal, and `regenerate`
//! forces a refresh.
//!
//! ## Basic usage
//!
//! ```no_run
//! # async fn run() -> Result<(), gong_codegen::CodegenError> {
//! use gong_codegen::{init_gong_client, ClientOptions};
//!
//! // Uses GONG_* environment variables for anything left unset.
//! let client = init_gong_client(ClientOptions::default()).await?;
//! println!("services: {:?}", client.services());
//! # Ok(())
//! # }
//! ```
//!
//! ## Advanced usage
//!
//! Each stage can also be driven on its own:
//!
//! ```no_run
//! # async fn run() -> Result<(), gong_codegen::CodegenError> {
//! use camino::Utf8Path;
//! use gong_codegen::{
//!     fetch_and_persist, generate_client, init_gong_client, ClientOptions, GongSpecSource,
//!     ProgenitorGenerator,
//! };
//!
//! let source = GongSpecSource::new();
//! let spec = Utf8Path::new("custom-gong-api.json");
//! let out = Utf8Path::new("custom-client");
//!
//! fetch_and_persist(&source, spec).await?;
//! generate_client(&source, &ProgenitorGenerator, spec, out).await?;
//!
//! let client = init_gong_client(ClientOptions {
//!     base_url: Some("https://eu.gong.io".to_string()),
//!     api_key: Some("key".to_string()),
//!     access_key: Some("secret".to_string()),
//!     spec_file: Some(spec.to_path_buf()),
//!     output_dir: Some(out.to_path_buf()),
//!     regenerate: false, // already generated above
//! })
//! .await?;
//!
//! assert!(client.config().with_credentials);
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod config;
pub mod error;
pub mod fetch;
pub mod generate;
pub mod init;

pub use client::{
    GeneratedModule, GongClient, KeyPairToken, ModuleKind, OpenApiConfig, TokenProvider,
};
pub use config::ClientOptions;
pub use error::CodegenError;
pub use fetch::{fetch_and_persist, persist_spec, GongSpecSource, SpecSource};
pub use generate::{generate_client, write_entry_file, ProgenitorGenerator, SpecGenerator};
pub use init::{init_gong_client, init_gong_client_with};
