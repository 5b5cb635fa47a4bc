// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! Client generator
//!
//! Turns a persisted specification document into a client source tree
//! under an output directory, then writes one aggregating `mod.rs` entry
//! file re-exporting everything the generator produced.
//!
//! The code generator itself is a black box behind [`SpecGenerator`]:
//! only its side effect (a source tree under the output directory) is
//! part of this module's contract.

use async_trait::async_trait;
use camino::{Utf8Path, Utf8PathBuf};
use progenitor::GenerationSettings;
use serde_json::Value;
use tracing::info;

use crate::error::CodegenError;
use crate::fetch::{fetch_and_persist, SpecSource};

/// File name of the aggregating entry module
pub const ENTRY_FILE: &str = "mod.rs";

/// External code generator: specification document in, source tree under
/// `output_dir` out.
#[async_trait]
pub trait SpecGenerator: Send + Sync {
    async fn generate(&self, spec: &Value, output_dir: &Utf8Path) -> Result<(), CodegenError>;
}

/// Progenitor-backed generator. Emits the typed client (types and
/// builder-style methods together, as Progenitor does) into
/// `<output_dir>/core/client.rs`.
pub struct ProgenitorGenerator;

#[async_trait]
impl SpecGenerator for ProgenitorGenerator {
    async fn generate(&self, spec: &Value, output_dir: &Utf8Path) -> Result<(), CodegenError> {
        let openapi: openapiv3::OpenAPI = serde_json::from_value(spec.clone())
            .map_err(|e| CodegenError::Generation(format!("invalid OpenAPI document: {e}")))?;

        let mut settings = GenerationSettings::default();
        settings
            .with_interface(progenitor::InterfaceStyle::Builder)
            .with_tag(progenitor::TagStyle::Merged);

        let tokens = progenitor::Generator::new(&settings)
            .generate_tokens(&openapi)
            .map_err(|e| CodegenError::Generation(e.to_string()))?;
        let formatted = rustfmt_wrapper::rustfmt(tokens.to_string())
            .map_err(|e| CodegenError::Generation(e.to_string()))?;

        let core_dir = output_dir.join("core");
        std::fs::create_dir_all(&core_dir)?;
        std::fs::write(core_dir.join("client.rs"), formatted)?;
        Ok(())
    }
}

/// Generate the client from `spec_file` into `output_dir`.
///
/// Falls back to downloading the specification when `spec_file` is
/// missing (the one place generation and fetching are coupled). Leaves
/// whatever partial output the generator produced on failure; there is
/// no cleanup or rollback.
pub async fn generate_client(
    source: &dyn SpecSource,
    generator: &dyn SpecGenerator,
    spec_file: &Utf8Path,
    output_dir: &Utf8Path,
) -> Result<(), CodegenError> {
    if !spec_file.exists() {
        info!("Spec file {spec_file} not found, downloading");
        fetch_and_persist(source, spec_file).await?;
    }

    std::fs::create_dir_all(output_dir)?;

    let raw = std::fs::read_to_string(spec_file)?;
    let spec: Value = serde_json::from_str(&raw)?;

    info!("Generating client from {spec_file} into {output_dir}");
    generator.generate(&spec, output_dir).await?;

    write_entry_file(output_dir)?;
    info!("Generated client in {output_dir}");
    Ok(())
}

/// List the stems of `.rs` files directly under `dir`, sorted
/// lexicographically. A missing directory yields an empty list.
pub(crate) fn module_files(dir: &Utf8Path) -> Result<Vec<String>, CodegenError> {
    let mut names = Vec::new();
    if !dir.is_dir() {
        return Ok(names);
    }

    for entry in dir.read_dir_utf8()? {
        let entry = entry?;
        let path = entry.path();
        if entry.file_type()?.is_file()
            && path.extension() == Some("rs")
            && let Some(stem) = path.file_stem()
            && stem != "mod"
        {
            names.push(stem.to_string());
        }
    }

    names.sort();
    Ok(names)
}

/// Write the aggregating entry module for a generated tree.
///
/// Re-exports the fixed `core/client.rs` module plus every module found
/// directly under the `services` and `models` subdirectories
/// (sibling-level only, never recursive). Subdirectories that do not
/// exist are skipped.
pub fn write_entry_file(output_dir: &Utf8Path) -> Result<Utf8PathBuf, CodegenError> {
    let mut content = String::from("// @generated by gong-codegen; do not edit.\n\n");
    content.push_str("#[path = \"core/client.rs\"]\npub mod client;\npub use client::*;\n");

    for subdir in ["services", "models"] {
        for name in module_files(&output_dir.join(subdir))? {
            content.push_str(&format!(
                "\n#[path = \"{subdir}/{name}.rs\"]\npub mod {name};\npub use {name}::*;\n"
            ));
        }
    }

    let entry = output_dir.join(ENTRY_FILE);
    std::fs::write(&entry, content)?;
    Ok(entry)
}
