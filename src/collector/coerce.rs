use std::num::{ParseFloatError, ParseIntError};

use super::types::CoercionRule;

/// The literal RouterOS uses for a set boolean.
pub const TRUE_TOKEN: &str = "true";

/// A raw value that does not match its property's numeric rule.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CoercionError {
    #[error("invalid integer {raw:?}: {source}")]
    Integer { raw: String, source: ParseIntError },

    #[error("invalid float {raw:?}: {source}")]
    Float { raw: String, source: ParseFloatError },
}

/// Converts one raw reply value.
///
/// `Ok(None)` means the value is absent or empty and nothing should be
/// emitted. `"0"` is a value, not an absence.
pub fn coerce(rule: CoercionRule, raw: Option<&str>) -> Result<Option<f64>, CoercionError> {
    let raw = match raw {
        Some(raw) if !raw.is_empty() => raw,
        _ => return Ok(None),
    };

    let value = match rule {
        CoercionRule::Boolean => {
            if raw == TRUE_TOKEN {
                1.0
            } else {
                0.0
            }
        }
        CoercionRule::Integer => raw.parse::<i64>().map_err(|source| CoercionError::Integer {
            raw: raw.to_string(),
            source,
        })? as f64,
        CoercionRule::Float => raw.parse::<f64>().map_err(|source| CoercionError::Float {
            raw: raw.to_string(),
            source,
        })?,
    };

    Ok(Some(value))
}
