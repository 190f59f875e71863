//! Field coercion: raw text tokens to typed numeric values.
//!
//! This is the only place that knows about the `"NA"` sentinel. Everything
//! downstream sees `Option<f64>` / `Option<i64>`.

use std::fmt;


/// Source text meaning "no value" in a nullable numeric field. Case-sensitive.
pub const ABSENT_SENTINEL: &str = "NA";

/// Numeric kind a field is declared as.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NumericKind {
    Integer,
    Decimal,
}

impl fmt::Display for NumericKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NumericKind::Integer => write!(f, "integer"),
            NumericKind::Decimal => write!(f, "decimal"),
        }
    }
}

/// Outcome of a successful coercion.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Coerced {
    Integer(i64),
    Decimal(f64),
    Absent,
}

impl Coerced {
    /// The integer value; `None` for a decimal or an absent value.
    pub fn integer(self) -> Option<i64> {
        match self {
            Coerced::Integer(v) => Some(v),
            Coerced::Decimal(_) | Coerced::Absent => None,
        }
    }

    /// The value as a decimal; `None` only when absent.
    pub fn decimal(self) -> Option<f64> {
        match self {
            Coerced::Decimal(v) => Some(v),
            Coerced::Integer(v) => Some(v as f64),
            Coerced::Absent => None,
        }
    }
}

/// A token that is neither a valid number of the declared kind nor the
/// sentinel of a nullable field.
///
/// Carries no record context; the mapper attaches that.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CoercionError {
    pub field: &'static str,
    pub kind: NumericKind,
    pub token: String,
}

impl fmt::Display for CoercionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "field `{}` expected {} but got {:?}",
            self.field, self.kind, self.token
        )
    }
}

impl std::error::Error for CoercionError {}

/// Coerce `token` into `kind`.
///
/// A nullable field whose token is exactly [`ABSENT_SENTINEL`] yields
/// [`Coerced::Absent`]. Anything else must parse; decimals must also be
/// finite (`inf`/`NaN` are rejected).
pub fn coerce(
    field: &'static str,
    token: &str,
    kind: NumericKind,
    nullable: bool,
) -> Result<Coerced, CoercionError> {
    if nullable && token == ABSENT_SENTINEL {
        return Ok(Coerced::Absent);
    }

    match kind {
        NumericKind::Integer => integer(field, token).map(Coerced::Integer),
        NumericKind::Decimal => decimal(field, token).map(Coerced::Decimal),
    }
}

fn invalid(field: &'static str, kind: NumericKind, token: &str) -> CoercionError {
    CoercionError {
        field,
        kind,
        token: token.to_string(),
    }
}

/// Decimal token. Surrounding whitespace is not accepted.
fn decimal(field: &'static str, token: &str) -> Result<f64, CoercionError> {
    match token.parse::<f64>() {
        Ok(v) if v.is_finite() => Ok(v),
        _ => Err(invalid(field, NumericKind::Decimal, token)),
    }
}

/// Integer token.
///
/// Accepts an integral decimal rendering (`"12.0"`), which is how some
/// exporters emit counting stats.
fn integer(field: &'static str, token: &str) -> Result<i64, CoercionError> {
    if let Ok(v) = token.parse::<i64>() {
        return Ok(v);
    }
    match token.parse::<f64>() {
        Ok(v) if v.is_finite() && v.fract() == 0.0 && v.abs() < i64::MAX as f64 => Ok(v as i64),
        _ => Err(invalid(field, NumericKind::Integer, token)),
    }
}

/// Required integer field.
pub fn required_integer(field: &'static str, token: &str) -> Result<i64, CoercionError> {
    coerce(field, token, NumericKind::Integer, false)?
        .integer()
        .ok_or_else(|| invalid(field, NumericKind::Integer, token))
}

/// Required decimal field.
pub fn required_decimal(field: &'static str, token: &str) -> Result<f64, CoercionError> {
    coerce(field, token, NumericKind::Decimal, false)?
        .decimal()
        .ok_or_else(|| invalid(field, NumericKind::Decimal, token))
}

/// Nullable decimal field: `"NA"` becomes `None`.
pub fn optional_decimal(field: &'static str, token: &str) -> Result<Option<f64>, CoercionError> {
    Ok(coerce(field, token, NumericKind::Decimal, true)?.decimal())
}
