use anyhow::{Result, bail};
use graph::EndpointPolicy;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub log: LogConfig,
    pub pipeline: PipelineConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    pub bind_addr: String,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    Pretty,
    Json,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogConfig {
    pub format: LogFormat,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PipelineConfig {
    pub endpoint_policy: EndpointPolicy,
    /// Entity name rendered when classification yields no entities
    pub default_entity: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            server: ServerConfig {
                bind_addr: "0.0.0.0:8000".to_string(),
            },
            log: LogConfig {
                format: LogFormat::Pretty,
            },
            pipeline: PipelineConfig::default(),
        }
    }
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            endpoint_policy: EndpointPolicy::Reject,
            default_entity: codegen::DEFAULT_ENTITY.to_string(),
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Defaults overlaid with `OMNI_*` variables resolved through `lookup`.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(addr) = lookup("OMNI_BIND_ADDR") {
            config.server.bind_addr = addr;
        }

        if let Some(format) = lookup("OMNI_LOG_FORMAT") {
            config.log.format = match format.to_lowercase().as_str() {
                "pretty" => LogFormat::Pretty,
                "json" => LogFormat::Json,
                other => bail!("OMNI_LOG_FORMAT must be 'pretty' or 'json', got '{}'", other),
            };
        }

        if let Some(policy) = lookup("OMNI_ENDPOINT_POLICY") {
            config.pipeline.endpoint_policy = match policy.to_lowercase().as_str() {
                "reject" => EndpointPolicy::Reject,
                "materialize" => EndpointPolicy::Materialize,
                other => bail!(
                    "OMNI_ENDPOINT_POLICY must be 'reject' or 'materialize', got '{}'",
                    other
                ),
            };
        }

        if let Some(name) = lookup("OMNI_DEFAULT_ENTITY") {
            if name.trim().is_empty() {
                bail!("OMNI_DEFAULT_ENTITY must not be empty");
            }
            config.pipeline.default_entity = name;
        }

        Ok(config)
    }
}
