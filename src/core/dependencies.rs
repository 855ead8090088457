use indexmap::IndexMap;

use crate::core::entries::split_entries;
use crate::core::error::ConvertError;

const OPTION_NAME: &str = "dependencies";

/// Parse a flat `--dependencies` string into task name -> dependency
/// expression, keeping first-insertion order for stable manifest output.
///
/// The value stays an opaque string handed to Argo's `depends` field; an
/// empty value means the task depends on nothing. Repeated names keep their
/// original position and take the last value, matching ordinary mapping
/// insertion semantics.
pub fn parse_dependencies(raw: &str) -> Result<IndexMap<String, Option<String>>, ConvertError> {
    let mut result = IndexMap::new();
    for (name, expression) in split_entries(OPTION_NAME, raw)? {
        let depends = if expression.is_empty() {
            None
        } else {
            Some(expression)
        };
        result.insert(name, depends);
    }
    Ok(result)
}
