//! Raw string to typed [`Value`] coercion.

use cli_engine_core::{ArgumentType, Value};
use thiserror::Error;

/// A raw string could not be coerced to its declared type.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("value {raw:?} is not valid for type {expected:?}")]
pub struct ValueError {
    /// The raw string that failed to parse.
    pub raw: String,
    /// The type the field declared.
    pub expected: ArgumentType,
}

/// Converts one raw string into a typed [`Value`] for the expected type.
///
/// Rules, in precedence order:
///
/// 1. `None` with an empty raw string → [`Value::Absent`].
/// 2. `String` with a non-empty raw string → the string verbatim.
/// 3. `Boolean` against the case-sensitive literals `true`/`True` and
///    `false`/`False`; other literals fall through to the numeric attempt.
/// 4. Otherwise the raw string is parsed as a base-10 float: `Float`
///    returns it as-is, `Integer` truncates toward zero. Inherited
///    coercion rule: `"3.9"` parses as `Integer(3)`, and integer range is
///    subject to float precision.
/// 5. Anything else fails with a [`ValueError`].
///
/// # Examples
///
/// ```
/// use cli_engine_core::{ArgumentType, Value};
/// use cli_engine_dispatch::parse_value;
///
/// assert_eq!(parse_value("7", ArgumentType::Integer), Ok(Value::Integer(7)));
/// assert_eq!(parse_value("3.9", ArgumentType::Integer), Ok(Value::Integer(3)));
/// assert_eq!(parse_value("True", ArgumentType::Boolean), Ok(Value::Boolean(true)));
/// assert!(parse_value("yes", ArgumentType::Boolean).is_err());
/// ```
pub fn parse_value(raw: &str, expected: ArgumentType) -> Result<Value, ValueError> {
    match expected {
        ArgumentType::None if raw.is_empty() => return Ok(Value::Absent),
        ArgumentType::String if !raw.is_empty() => return Ok(Value::String(raw.to_string())),
        ArgumentType::Boolean => match raw {
            "true" | "True" => return Ok(Value::Boolean(true)),
            "false" | "False" => return Ok(Value::Boolean(false)),
            _ => {}
        },
        _ => {}
    }

    let invalid = || ValueError {
        raw: raw.to_string(),
        expected,
    };

    let parsed: f64 = raw.parse().map_err(|_| invalid())?;
    match expected {
        ArgumentType::Float => Ok(Value::Float(parsed)),
        ArgumentType::Integer => Ok(Value::Integer(parsed.trunc() as i64)),
        _ => Err(invalid()),
    }
}
