// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! Client configuration
//!
//! Every field of [`ClientOptions`] is independently optional. Resolution
//! order per field: explicit option, then the matching `GONG_*` environment
//! variable, then a hardcoded default.

use camino::Utf8PathBuf;
use serde::{Deserialize, Serialize};

/// Endpoint serving the Gong OpenAPI specification document
pub const GONG_SPEC_URL: &str =
    "https://gong.app.gong.io/ajax/settings/api/documentation/specs?version=";

/// Default base URL for Gong API requests
pub const DEFAULT_BASE_URL: &str = "https://app.gong.io";

/// Default path for the persisted specification document
pub const DEFAULT_SPEC_FILE: &str = "gong-openapi.json";

/// Default directory for generated client sources
pub const DEFAULT_OUTPUT_DIR: &str = "src/generated";

/// Options accepted by the client initializer
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ClientOptions {
    /// Base URL for Gong API requests
    pub base_url: Option<String>,
    /// API key half of the credential pair
    pub api_key: Option<String>,
    /// Access key half of the credential pair
    pub access_key: Option<String>,
    /// Where the specification document is (or will be) persisted
    pub spec_file: Option<Utf8PathBuf>,
    /// Where generated client sources are (or will be) written
    pub output_dir: Option<Utf8PathBuf>,
    /// Force a fresh download and regeneration even when cached
    /// artifacts exist
    pub regenerate: bool,
}

/// Options after environment/default resolution
#[derive(Clone, Debug)]
pub struct ResolvedOptions {
    pub base_url: String,
    pub api_key: Option<String>,
    pub access_key: Option<String>,
    pub spec_file: Utf8PathBuf,
    pub output_dir: Utf8PathBuf,
    pub regenerate: bool,
}

impl ClientOptions {
    /// Resolve each field against the environment and hardcoded defaults
    pub fn resolve(self) -> ResolvedOptions {
        let base_url = self
            .base_url
            .or_else(|| std::env::var("GONG_BASE_URL").ok())
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());

        let api_key = self.api_key.or_else(|| std::env::var("GONG_API_KEY").ok());
        let access_key = self
            .access_key
            .or_else(|| std::env::var("GONG_ACCESS_KEY").ok());

        let spec_file = self
            .spec_file
            .or_else(|| std::env::var("GONG_SPEC_FILE").ok().map(Utf8PathBuf::from))
            .unwrap_or_else(|| Utf8PathBuf::from(DEFAULT_SPEC_FILE));

        let output_dir = self
            .output_dir
            .or_else(|| std::env::var("GONG_OUTPUT_DIR").ok().map(Utf8PathBuf::from))
            .unwrap_or_else(|| Utf8PathBuf::from(DEFAULT_OUTPUT_DIR));

        ResolvedOptions {
            base_url,
            api_key,
            access_key,
            spec_file,
            output_dir,
            regenerate: self.regenerate,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    #[serial]
    fn defaults_apply_when_nothing_is_set() {
        for var in [
            "GONG_BASE_URL",
            "GONG_API_KEY",
            "GONG_ACCESS_KEY",
            "GONG_SPEC_FILE",
            "GONG_OUTPUT_DIR",
        ] {
            unsafe { std::env::remove_var(var) };
        }

        let resolved = ClientOptions::default().resolve();
        assert_eq!(resolved.base_url, DEFAULT_BASE_URL);
        assert_eq!(resolved.api_key, None);
        assert_eq!(resolved.access_key, None);
        assert_eq!(resolved.spec_file, Utf8PathBuf::from(DEFAULT_SPEC_FILE));
        assert_eq!(resolved.output_dir, Utf8PathBuf::from(DEFAULT_OUTPUT_DIR));
        assert!(!resolved.regenerate);
    }

    #[test]
    #[serial]
    fn environment_overrides_defaults() {
        unsafe {
            std::env::set_var("GONG_BASE_URL", "https://env.example.com");
            std::env::set_var("GONG_API_KEY", "env-api");
            std::env::set_var("GONG_ACCESS_KEY", "env-access");
            std::env::set_var("GONG_SPEC_FILE", "/tmp/env-spec.json");
            std::env::set_var("GONG_OUTPUT_DIR", "/tmp/env-out");
        }

        let resolved = ClientOptions::default().resolve();
        assert_eq!(resolved.base_url, "https://env.example.com");
        assert_eq!(resolved.api_key.as_deref(), Some("env-api"));
        assert_eq!(resolved.access_key.as_deref(), Some("env-access"));
        assert_eq!(resolved.spec_file, Utf8PathBuf::from("/tmp/env-spec.json"));
        assert_eq!(resolved.output_dir, Utf8PathBuf::from("/tmp/env-out"));

        for var in [
            "GONG_BASE_URL",
            "GONG_API_KEY",
            "GONG_ACCESS_KEY",
            "GONG_SPEC_FILE",
            "GONG_OUTPUT_DIR",
        ] {
            unsafe { std::env::remove_var(var) };
        }
    }

    #[test]
    #[serial]
    fn explicit_options_override_environment() {
        unsafe { std::env::set_var("GONG_BASE_URL", "https://env.example.com") };

        let resolved = ClientOptions {
            base_url: Some("https://explicit.example.com".to_string()),
            ..Default::default()
        }
        .resolve();
        assert_eq!(resolved.base_url, "https://explicit.example.com");

        unsafe { std::env::remove_var("GONG_BASE_URL") };
    }
}
