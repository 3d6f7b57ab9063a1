// src/config/model.rs

use serde::Deserialize;

/// Top-level configuration as read from a TOML file.
///
/// ```toml
/// [simulation]
/// workers = 5
/// base_duration = 60
/// ```
///
/// All sections are optional and have reasonable defaults.
#[derive(Debug, Clone, Deserialize, Default)]
pub struct ConfigFile {
    /// Worker-pool and duration settings from `[simulation]`.
    #[serde(default)]
    pub simulation: SimulationSection,
}

/// `[simulation]` section.
///
/// The only options the tool recognises: they affect the worker-pool size
/// and the duration formula's base, nothing else.
#[derive(Debug, Clone, Deserialize)]
pub struct SimulationSection {
    /// Number of simulated workers.
    #[serde(default = "default_workers")]
    pub workers: usize,

    /// Base number of ticks added to every task's letter index.
    #[serde(default = "default_base_duration")]
    pub base_duration: u64,
}

fn default_workers() -> usize {
    5
}

fn default_base_duration() -> u64 {
    60
}

impl Default for SimulationSection {
    fn default() -> Self {
        Self {
            workers: default_workers(),
            base_duration: default_base_duration(),
        }
    }
}
