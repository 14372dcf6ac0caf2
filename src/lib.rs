//! demoapp - composes planet message providers into one console entry point
//!
//! The library exposes the layers for integration testing; the `demoapp`
//! binary wires them to standard output.

pub mod domain;
pub mod application;
pub mod infrastructure;
pub mod planets;

use std::path::Path;

use application::errors::AppError;
use application::services::Aggregator;
use domain::traits::OutputSink;
use infrastructure::config::Config;

/// Defaults unless a config path is given explicitly; a given path must load
pub fn load_config(path: Option<&Path>) -> Result<Config, AppError> {
    match path {
        Some(path) => {
            tracing::info!("Loading layout from {}", path.display());
            Ok(Config::load(path)?)
        }
        None => Ok(Config::default()),
    }
}

/// Build the standard aggregator for `config` and write its output to `sink`
pub fn run(config: &Config, sink: &mut dyn OutputSink) -> Result<(), AppError> {
    let aggregator = Aggregator::standard(&config.layout);

    for provider in aggregator.providers() {
        tracing::debug!(
            "Provider planet {} ({} stage)",
            provider.planet().as_str(),
            provider.stage().as_str()
        );
    }

    aggregator.run(sink)
}
