// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! Error types for gong-codegen

use thiserror::Error;

/// Errors that can occur while fetching the spec, generating the client,
/// or initializing the generated client handle
#[derive(Error, Debug)]
pub enum CodegenError {
    /// Transport failure or non-2xx status while downloading the spec
    #[error("Error downloading API spec: {0}")]
    Network(#[from] reqwest::Error),

    /// Filesystem read/write failure
    #[error("Error saving API spec: {0}")]
    Io(#[from] std::io::Error),

    /// The spec file is not valid JSON
    #[error("Error parsing API spec: {0}")]
    Parse(#[from] serde_json::Error),

    /// The external code generator failed
    #[error("Error generating API client: {0}")]
    Generation(String),

    /// Loading or configuring the generated client failed
    #[error("Error initializing API client: {0}")]
    Initialization(String),
}
