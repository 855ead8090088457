pub mod config;
pub mod dependencies;
pub mod entries;
pub mod error;
pub mod manifest;
pub mod merge;
pub mod params;
pub mod registry;

pub use config::{ArgoformConfig, ConfigLoader, ConvertConfig};
pub use dependencies::parse_dependencies;
pub use error::ConvertError;
pub use manifest::{build_manifest, ManifestRequest, DAG_TEMPLATE, RUN_TEMPLATE};
pub use merge::merge_mapping;
pub use params::parse_params;
pub use registry::{PipelineRegistry, DEFAULT_PIPELINE};
