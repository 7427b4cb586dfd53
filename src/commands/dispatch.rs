//! Configuration resolution and command dispatch for waypath
use std::time::Instant;

use crate::cli::Cli;
use crate::commands;
use waypath_core::config::Config;
use waypath_core::error::Result;
use waypath_core::graph::ExhaustedPolicy;

pub fn run(cli: &Cli, start: Instant) -> Result<()> {
    let config = resolve_config(cli)?;

    tracing::debug!(
        locations = %config.locations.display(),
        connections = %config.connections.display(),
        algorithms = ?config.algorithms,
        on_exhausted = ?config.on_exhausted,
        elapsed = ?start.elapsed(),
        "resolve_config"
    );

    commands::search::execute(cli, &config, start)
}

/// Load the config file, then apply command-line overrides on top
fn resolve_config(cli: &Cli) -> Result<Config> {
    let mut config = Config::load(cli.config.as_deref())?;
    apply_overrides(cli, &mut config);
    Ok(config)
}

fn apply_overrides(cli: &Cli, config: &mut Config) {
    if let Some(locations) = &cli.locations {
        config.locations = locations.clone();
    }
    if let Some(connections) = &cli.connections {
        config.connections = connections.clone();
    }
    if !cli.algorithms.is_empty() {
        config.algorithms = cli.algorithms.clone();
    }
    if cli.allow_partial {
        config.on_exhausted = ExhaustedPolicy::LastExpanded;
    }
}
