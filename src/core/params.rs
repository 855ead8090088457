use serde_yaml::{Mapping, Value};

use crate::core::entries::split_entries;
use crate::core::error::ConvertError;

const OPTION_NAME: &str = "params";

/// Parse a flat `--params` override string into a nested mapping.
///
/// Keys are dotted paths (`resources.limits.cpu:2`); each entry descends the
/// path from the root, creating intermediate mappings as needed, and sets the
/// leaf to the coerced value. Later entries overwrite earlier ones along the
/// same path. An empty input yields an empty mapping.
pub fn parse_params(raw: &str) -> Result<Mapping, ConvertError> {
    let mut result = Mapping::new();
    for (key, value) in split_entries(OPTION_NAME, raw)? {
        let path: Vec<&str> = key.split('.').collect();
        set_nested_value(&mut result, &path, coerce_scalar(&value));
    }
    Ok(result)
}

/// Coerce a raw override value to the narrowest scalar it parses as.
///
/// Integral floats demote to integers (`"0"` -> 0, `"678."` -> 678), genuine
/// fractions stay floats (`"1e-2"` -> 0.01), and anything that is not a
/// number is kept as the trimmed string, the empty string included.
fn coerce_scalar(raw: &str) -> Value {
    match raw.parse::<f64>() {
        Ok(parsed)
            if parsed.is_finite()
                && parsed.fract() == 0.0
                && (i64::MIN as f64..=i64::MAX as f64).contains(&parsed) =>
        {
            Value::from(parsed as i64)
        }
        Ok(parsed) => Value::from(parsed),
        Err(_) => Value::from(raw),
    }
}

/// Walk `path` down `mapping`, creating mappings along the way, and set the
/// leaf to `value`. A non-mapping value sitting on an intermediate segment is
/// replaced by a fresh mapping.
fn set_nested_value(mapping: &mut Mapping, path: &[&str], value: Value) {
    match path {
        [] => {}
        [leaf] => {
            mapping.insert(Value::from(*leaf), value);
        }
        [head, rest @ ..] => {
            let slot = mapping
                .entry(Value::from(*head))
                .or_insert_with(|| Value::Mapping(Mapping::new()));
            if !slot.is_mapping() {
                *slot = Value::Mapping(Mapping::new());
            }
            if let Value::Mapping(child) = slot {
                set_nested_value(child, rest, value);
            }
        }
    }
}
