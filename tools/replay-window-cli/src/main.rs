// Copyright 2025 - Nym Technologies SA <contact@nymtech.net>
// SPDX-License-Identifier: Apache-2.0

use clap::Parser;

pub(crate) mod cli;
pub(crate) mod render;

fn main() -> anyhow::Result<()> {
    setup_tracing();

    let args = cli::Cli::parse();
    args.execute()
}

fn setup_tracing() {
    use tracing_subscriber::filter::{EnvFilter, LevelFilter};

    let filter = if std::env::var("RUST_LOG").is_ok() {
        EnvFilter::from_default_env()
    } else {
        // stay quiet by default so the table remains the only stdout output
        EnvFilter::builder()
            .with_default_directive(LevelFilter::WARN.into())
            .parse_lossy("")
    };

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(filter)
        .init();
}
