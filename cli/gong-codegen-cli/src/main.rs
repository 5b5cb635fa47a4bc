// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! gong-codegen - download the Gong OpenAPI spec and generate a typed client

use anyhow::Result;
use camino::Utf8PathBuf;
use clap::{Parser, Subcommand};
use gong_codegen::config::{DEFAULT_OUTPUT_DIR, DEFAULT_SPEC_FILE};
use gong_codegen::{fetch_and_persist, generate_client, GongSpecSource, ProgenitorGenerator};
use std::process::ExitCode;

#[derive(Parser)]
#[command(
    name = "gong-codegen",
    version,
    about = "Fetch the Gong OpenAPI specification and generate a typed client"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Download the Gong API specification
    Fetch {
        /// Where to write the specification
        #[arg(default_value = DEFAULT_SPEC_FILE, env = "GONG_SPEC_FILE")]
        spec_file: Utf8PathBuf,
    },

    /// Generate the typed client from a specification file
    ///
    /// Downloads the specification first if the file is missing.
    Generate {
        /// Specification file to read
        #[arg(default_value = DEFAULT_SPEC_FILE, env = "GONG_SPEC_FILE")]
        spec_file: Utf8PathBuf,

        /// Directory to write generated sources into
        #[arg(default_value = DEFAULT_OUTPUT_DIR, env = "GONG_OUTPUT_DIR")]
        output_dir: Utf8PathBuf,
    },
}

async fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Fetch { spec_file } => {
            let source = GongSpecSource::new();
            let written = fetch_and_persist(&source, &spec_file).await?;
            println!("{written}");
        }
        Commands::Generate {
            spec_file,
            output_dir,
        } => {
            let source = GongSpecSource::new();
            generate_client(&source, &ProgenitorGenerator, &spec_file, &output_dir).await?;
            println!("{output_dir}");
        }
    }
    Ok(())
}

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("gong_codegen=info")),
        )
        .init();

    let cli = Cli::parse();
    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{e:#}");
            ExitCode::FAILURE
        }
    }
}
