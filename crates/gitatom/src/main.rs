// Copyright (c) 2026 - present The gitatom developers
// SPDX-License-Identifier: MIT

//! gitatom: Atom feed of the latest commits in a git repository

use clap::Parser;
use gitatom::Config;
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    let config = Config::parse();

    // stdout carries the feed, so logs go to stderr
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive(config.log_level().into()))
        .with_writer(std::io::stderr)
        .init();

    gitatom::run(&config, std::io::stdout().lock())
}
