use thiserror::Error;

/// Failures produced while turning CLI input into a workflow manifest.
///
/// Every variant reflects a caller-input defect, so none are retried; they
/// propagate to the top level before any output is written.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConvertError {
    #[error(
        "Failed to find the pipeline named '{0}'. It needs to be generated \
         and returned by the 'register_pipelines' function."
    )]
    UnknownPipeline(String),

    #[error(
        "Invalid format of `{option}` option: Item `{entry}` must contain \
         a key and a value separated by `:`."
    )]
    MalformedEntry { option: String, entry: String },

    #[error("Invalid format of `{option}` option: Parameter key cannot be an empty string.")]
    EmptyKey { option: String },
}
