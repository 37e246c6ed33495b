//! Configuration for schema estimation

use serde::{Deserialize, Serialize};

/// Configuration for schema estimation
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EstimateConfig {
    /// Maximum number of documents to ingest (0 = all)
    pub sample_size: usize,
}

impl EstimateConfig {
    /// Create a new configuration with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a builder for custom configuration
    pub fn builder() -> EstimateConfigBuilder {
        EstimateConfigBuilder::default()
    }
}

/// Builder for [`EstimateConfig`]
#[derive(Debug, Default)]
pub struct EstimateConfigBuilder {
    config: EstimateConfig,
}

impl EstimateConfigBuilder {
    /// Set the sample size (0 = all documents)
    pub fn sample_size(mut self, size: usize) -> Self {
        self.config.sample_size = size;
        self
    }

    /// Build the configuration
    pub fn build(self) -> EstimateConfig {
        self.config
    }
}
