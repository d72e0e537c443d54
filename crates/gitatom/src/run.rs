// Copyright (c) 2026 - present The gitatom developers
// SPDX-License-Identifier: MIT

//! Command execution
//!
//! Turns a parsed [`Config`] into either an Atom feed or a commit listing.

use std::io::Write;

use anyhow::{Context, Result};
use gitatom_feed::{FeedBuilder, FeedSource, FixedTimestamp};
use gitatom_git::{DiffSource, GitRepo, GitShow, RepositoryAccess};
use tracing::{debug, info};

use crate::adapter::CommitFeed;
use crate::config::{Command, Config};
use crate::hosted::HostedProjectFeed;

/// Run the command described by `config`, writing to `stdout`
///
/// # Errors
///
/// Returns an error if the configuration is invalid, the repository cannot
/// be read, a diff cannot be produced, or the output cannot be written.
pub fn run<W: Write>(config: &Config, stdout: W) -> Result<()> {
    config.validate()?;

    let repo = GitRepo::discover(&config.repo)
        .with_context(|| format!("Failed to open repository at {}", config.repo.display()))?;
    info!(path = %repo.path().display(), "Opened repository");

    let heads = resolve_heads(&repo, &config.start_heads())?;
    let diffs = GitShow::new(repo.command_dir().to_path_buf());
    let feed = configure_feed(CommitFeed::new(repo, diffs), config, heads)?;

    match &config.command {
        Some(Command::List { json, .. }) => list_commits(&feed, *json, stdout),
        None => match config.project_path()? {
            Some(project) => {
                let hosted = HostedProjectFeed::new(
                    feed,
                    config.host.as_str(),
                    project.owner,
                    project.repository,
                );
                emit(&hosted, config, stdout)
            }
            None => emit(&feed, config, stdout),
        },
    }
}

fn resolve_heads(repo: &GitRepo, names: &[String]) -> Result<Option<Vec<String>>> {
    if names.is_empty() {
        return Ok(None);
    }
    let ids = names
        .iter()
        .map(|name| {
            let id = repo
                .resolve_ref(name)
                .with_context(|| format!("Failed to resolve {name}"))?;
            debug!(name = %name, id = %id, "Resolved head");
            Ok(id)
        })
        .collect::<Result<Vec<_>>>()?;
    Ok(Some(ids))
}

fn configure_feed<R, D>(
    mut feed: CommitFeed<R, D>,
    config: &Config,
    heads: Option<Vec<String>>,
) -> Result<CommitFeed<R, D>>
where
    R: RepositoryAccess,
    D: DiffSource,
{
    feed = feed.with_max_count(config.max_count);
    if let Some(heads) = heads {
        feed = feed.with_heads(heads);
    }
    if let Some(title) = &config.title {
        feed = feed.with_title(title.as_str());
    }
    if let Some(id) = &config.id {
        feed = feed.with_feed_id(id.as_str());
    }
    if let Some(link) = &config.link {
        feed = feed.with_link(link.as_str());
    }
    if let Some(updated) = &config.updated {
        let updated = FixedTimestamp::parse_rfc3339(updated)
            .context("Invalid --updated value")?;
        feed = feed.with_updated(updated);
    }
    Ok(feed)
}

fn list_commits<R, D, W>(feed: &CommitFeed<R, D>, json: bool, mut stdout: W) -> Result<()>
where
    R: RepositoryAccess,
    D: DiffSource,
    W: Write,
{
    let commits = feed.select_commits()?;
    for commit in &commits {
        if json {
            serde_json::to_writer(&mut stdout, commit)?;
            writeln!(stdout)?;
        } else {
            writeln!(stdout, "{}", commit.id)?;
        }
    }
    stdout.flush()?;
    Ok(())
}

fn emit<S, W>(source: &S, config: &Config, stdout: W) -> Result<()>
where
    S: FeedSource,
    S::Error: std::error::Error + Send + Sync + 'static,
    W: Write,
{
    let builder = FeedBuilder::new(source);
    match &config.output {
        Some(path) => {
            let document = builder.build()?;
            std::fs::write(path, document)
                .with_context(|| format!("Failed to write {}", path.display()))?;
            info!(path = %path.display(), "Wrote feed");
        }
        None => builder.write_to(stdout)?,
    }
    Ok(())
}
