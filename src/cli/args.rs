use clap::Args;
use std::path::PathBuf;

/// Demo image used when neither the CLI nor the config file supplies one.
pub const DEFAULT_IMAGE: &str = "docker/whalesay:latest";

/// Host project identifier used in `generateName` unless overridden.
pub const DEFAULT_PACKAGE_NAME: &str = "pipelines";

/// Host-framework CLI invoked inside the container unless overridden.
pub const DEFAULT_RUNNER: &str = "pipeline";

#[derive(Args)]
pub struct ConvertArgs {
    /// Container image to run pipeline tasks in (default: docker/whalesay:latest)
    #[arg(value_name = "IMAGE")]
    pub image: Option<String>,

    /// Pipeline to convert (default: __default__)
    #[arg(long, short = 'p', value_name = "NAME")]
    pub pipeline: Option<String>,

    /// Where to write the manifest; `-` means standard output
    #[arg(long, short = 'o', default_value = "-", value_name = "FILE")]
    pub output: PathBuf,

    /// Task dependency list, e.g. `dp:,ds:dp` (empty value = no dependency)
    #[arg(long, short = 'd', value_name = "LIST")]
    pub dependencies: Option<String>,

    /// Manifest field overrides, e.g. `spec.arguments.parameters:...` or `foo.bar:1`
    #[arg(long, value_name = "LIST")]
    pub params: Option<String>,

    /// Config file supplying defaults for the flags above (default: ./argoform.toml)
    #[arg(long, short = 'c', value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Host project identifier used in the generateName prefix
    #[arg(long, value_name = "NAME")]
    pub package_name: Option<String>,

    /// Host-framework CLI invoked inside the container (`<runner> run --pipeline ...`)
    #[arg(long, value_name = "CMD")]
    pub runner: Option<String>,
}
