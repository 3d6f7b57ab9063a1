// src/config/validate.rs

use crate::config::model::ConfigFile;
use crate::errors::{PlandagError, Result};

/// Run semantic validation over a deserialized [`ConfigFile`].
pub fn validate_config(cfg: &ConfigFile) -> Result<()> {
    validate_simulation(cfg)?;
    Ok(())
}

fn validate_simulation(cfg: &ConfigFile) -> Result<()> {
    if cfg.simulation.workers == 0 {
        return Err(PlandagError::ConfigError(
            "[simulation].workers must be >= 1 (got 0)".to_string(),
        ));
    }

    Ok(())
}
