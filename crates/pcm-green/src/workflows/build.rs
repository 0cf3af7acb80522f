use std::path::Path;

use thiserror::Error;
use tracing::{info, instrument};

use crate::dispatch::config::{ConfigLoadError, GreenConfig};
use crate::dispatch::error::GreenError;
use crate::dispatch::factory::HandleFactory;
use crate::dispatch::handle::{GreenHandle, GreensFunction};
use crate::dispatch::selector::resolve;

#[derive(Debug, Error)]
pub enum WorkflowError {
    #[error("Configuration error: {source}")]
    Config {
        #[from]
        source: ConfigLoadError,
    },

    #[error("Green's function construction failed: {source}")]
    Green {
        #[from]
        source: GreenError,
    },
}

/// Resolves the names in `config` and builds the corresponding handle.
#[instrument(skip_all, name = "build_green")]
pub fn build_green(config: &GreenConfig) -> Result<GreenHandle, GreenError> {
    let (family_id, strategy_id) = config.selection()?;
    let green = resolve(family_id, strategy_id, &config.parameters, &HandleFactory)?;
    info!(
        kernel = green.kernel_name(),
        strategy = green.strategy_name(),
        "Green's function ready."
    );
    Ok(green)
}

/// Reads a TOML configuration from `path` and builds the handle it describes.
#[instrument(skip_all, name = "load_green")]
pub fn load_green(path: &Path) -> Result<GreenHandle, WorkflowError> {
    let config = GreenConfig::load(path)?;
    Ok(build_green(&config)?)
}
