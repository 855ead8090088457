use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::env;
use std::path::Path;

/// Name of the configuration file looked up in the working directory when no
/// explicit `--config` path is given.
pub const CONFIG_FILE_NAME: &str = "argoform.toml";

/// Main argoform configuration loaded from argoform.toml.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ArgoformConfig {
    /// Defaults for the convert command
    #[serde(default)]
    pub convert: ConvertConfig,
}

/// File-supplied defaults for `argoform convert`. Every field is optional;
/// CLI flags take precedence over anything set here.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ConvertConfig {
    /// Container image the workflow tasks run in
    pub image: Option<String>,

    /// Pipeline to convert
    pub pipeline: Option<String>,

    /// Dependency list, same syntax as --dependencies
    pub dependencies: Option<String>,

    /// Parameter overrides, same syntax as --params
    pub params: Option<String>,

    /// Host project identifier used in generateName
    pub package_name: Option<String>,

    /// Host-framework CLI invoked inside the container
    pub runner: Option<String>,

    /// Pipeline names registered by the host project
    #[serde(default)]
    pub pipelines: Vec<String>,
}

pub struct ConfigLoader;

impl ConfigLoader {
    /// Load config from the working directory (./argoform.toml).
    /// Environment variables override config file values.
    pub fn load_from_working_dir() -> crate::Result<ArgoformConfig> {
        let config_file = Self::load_from_file(Path::new(CONFIG_FILE_NAME))?;
        let mut config = config_file.unwrap_or_default();
        Self::apply_env_overrides(&mut config);
        Ok(config)
    }

    /// Load config from an explicit file path, with env overrides applied.
    pub fn load_from_path(path: &Path) -> crate::Result<ArgoformConfig> {
        let mut config = Self::load_from_file(path)?
            .with_context(|| format!("config file {} does not exist", path.display()))?;
        Self::apply_env_overrides(&mut config);
        Ok(config)
    }

    /// Load config from a specific file path.
    /// Returns Ok(None) if the file doesn't exist.
    pub fn load_from_file(path: &Path) -> crate::Result<Option<ArgoformConfig>> {
        if !path.exists() {
            return Ok(None);
        }

        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;

        let config: ArgoformConfig = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file {}", path.display()))?;

        Ok(Some(config))
    }

    /// Apply environment variable overrides to the configuration.
    /// Environment variables take precedence over config file values.
    fn apply_env_overrides(config: &mut ArgoformConfig) {
        if let Ok(image) = env::var("ARGOFORM_IMAGE") {
            config.convert.image = Some(image);
        }

        if let Ok(pipeline) = env::var("ARGOFORM_PIPELINE") {
            config.convert.pipeline = Some(pipeline);
        }

        if let Ok(dependencies) = env::var("ARGOFORM_DEPENDENCIES") {
            config.convert.dependencies = Some(dependencies);
        }

        if let Ok(params) = env::var("ARGOFORM_PARAMS") {
            config.convert.params = Some(params);
        }

        if let Ok(package_name) = env::var("ARGOFORM_PACKAGE_NAME") {
            config.convert.package_name = Some(package_name);
        }

        if let Ok(runner) = env::var("ARGOFORM_RUNNER") {
            config.convert.runner = Some(runner);
        }
    }

    /// Get documentation for supported environment variables
    pub fn env_var_documentation() -> &'static [&'static str] {
        &[
            "ARGOFORM_IMAGE - Override container image",
            "ARGOFORM_PIPELINE - Override pipeline name",
            "ARGOFORM_DEPENDENCIES - Override dependency list",
            "ARGOFORM_PARAMS - Override parameter overlay",
            "ARGOFORM_PACKAGE_NAME - Override host package identifier",
            "ARGOFORM_RUNNER - Override host-framework CLI name",
        ]
    }
}
