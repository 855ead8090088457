use std::collections::BTreeSet;

use crate::core::error::ConvertError;

/// Name of the pipeline assembled by the host project when none is requested
/// explicitly.
pub const DEFAULT_PIPELINE: &str = "__default__";

/// Set of pipeline names the host project has registered.
///
/// The registry is an existence check only; pipeline contents are opaque to
/// this tool. The default pipeline is always a member.
#[derive(Debug, Clone)]
pub struct PipelineRegistry {
    names: BTreeSet<String>,
}

impl PipelineRegistry {
    pub fn new<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut names: BTreeSet<String> = names.into_iter().map(Into::into).collect();
        names.insert(DEFAULT_PIPELINE.to_string());
        PipelineRegistry { names }
    }

    pub fn contains(&self, name: &str) -> bool {
        self.names.contains(name)
    }

    /// Error unless `name` is registered.
    pub fn ensure_registered(&self, name: &str) -> Result<(), ConvertError> {
        if self.contains(name) {
            Ok(())
        } else {
            Err(ConvertError::UnknownPipeline(name.to_string()))
        }
    }
}

impl Default for PipelineRegistry {
    fn default() -> Self {
        PipelineRegistry::new(Vec::<String>::new())
    }
}
