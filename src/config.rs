use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::engine::constants::{
    DEFAULT_ALLOWED_VARIANCE, DEFAULT_ALTERNATIVES_LIMIT, DEFAULT_SUGGESTION_LIMIT,
};
use crate::error::{Result, SwapError};

/// Runtime knobs for the swap workflow.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SwapConfig {
    /// Similar foods offered when a swap opens.
    #[serde(default = "default_suggestion_limit")]
    pub suggestion_limit: usize,

    /// Alternatives proposed when a candidate breaks the coach targets.
    #[serde(default = "default_alternatives_limit")]
    pub alternatives_limit: usize,

    /// Relative deviation allowed from coach targets (0.15 = ±15%).
    #[serde(default = "default_allowed_variance")]
    pub allowed_variance: f64,
}

fn default_suggestion_limit() -> usize {
    DEFAULT_SUGGESTION_LIMIT
}

fn default_alternatives_limit() -> usize {
    DEFAULT_ALTERNATIVES_LIMIT
}

fn default_allowed_variance() -> f64 {
    DEFAULT_ALLOWED_VARIANCE
}

impl Default for SwapConfig {
    fn default() -> Self {
        Self {
            suggestion_limit: DEFAULT_SUGGESTION_LIMIT,
            alternatives_limit: DEFAULT_ALTERNATIVES_LIMIT,
            allowed_variance: DEFAULT_ALLOWED_VARIANCE,
        }
    }
}

impl SwapConfig {
    /// Load a JSON config file. A missing file yields the defaults.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            info!("Config file {} not found, using defaults", path.display());
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)?;
        let config: Self = serde_json::from_str(&content)?;
        config.validate()?;
        debug!("Loaded config from {}: {:?}", path.display(), config);
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.suggestion_limit == 0 {
            return Err(SwapError::InvalidInput(
                "suggestion_limit must be positive".to_string(),
            ));
        }
        if !(0.0..1.0).contains(&self.allowed_variance) {
            return Err(SwapError::InvalidInput(format!(
                "allowed_variance must be in [0, 1), got {}",
                self.allowed_variance
            )));
        }
        Ok(())
    }
}
