pub mod bottleneck_config;
pub mod cascade_config;
pub mod defaults;
pub mod observability_config;
pub mod risk_config;
pub mod taxonomy_config;

pub use bottleneck_config::BottleneckConfig;
pub use cascade_config::CascadeConfig;
pub use observability_config::ObservabilityConfig;
pub use risk_config::RiskConfig;
pub use taxonomy_config::TaxonomyConfig;

use serde::{Deserialize, Serialize};

use crate::errors::{EngineError, EngineResult};

/// Top-level engine configuration. Every section falls back to its defaults.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    pub taxonomy: TaxonomyConfig,
    pub cascade: CascadeConfig,
    pub bottleneck: BottleneckConfig,
    pub risk: RiskConfig,
    pub observability: ObservabilityConfig,
}

impl EngineConfig {
    /// Parse from TOML. An empty string yields all defaults.
    pub fn from_toml(toml_str: &str) -> EngineResult<Self> {
        let config: Self = toml::from_str(toml_str).map_err(|e| EngineError::InvalidConfig {
            reason: e.to_string(),
        })?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_toml(&self) -> EngineResult<String> {
        toml::to_string(self).map_err(|e| EngineError::InvalidConfig {
            reason: e.to_string(),
        })
    }

    /// Reject values outside their meaningful ranges.
    pub fn validate(&self) -> EngineResult<()> {
        self.taxonomy.validate()?;
        self.cascade.validate()?;
        self.bottleneck.validate()?;
        self.risk.validate()?;
        Ok(())
    }
}

pub(crate) fn ensure(condition: bool, reason: impl FnOnce() -> String) -> EngineResult<()> {
    if condition {
        Ok(())
    } else {
        Err(EngineError::InvalidConfig { reason: reason() })
    }
}
