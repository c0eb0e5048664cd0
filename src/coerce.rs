//! Coercion of raw environment text (or already-typed defaults) into values
//!
//! Each kind owns one coercion function with the signature
//! `Option<Value> -> Result<Option<Value>, CoerceError>`. Absence is handled
//! explicitly at the top of every function, and inputs that already carry the
//! correct shape pass through unchanged instead of being re-parsed, so the
//! table is safe to apply to typed defaults as well as env text.

use std::fmt;

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};

/// The closed set of supported value kinds.
///
/// Selecting a kind selects one row of the coercion table. There is no
/// open-ended dispatch; an unsupported kind is unrepresentable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Kind {
    /// Lossless conversion to text; never fails on a non-absent input
    #[default]
    String,
    /// Interned identifier
    Symbol,
    /// 64-bit signed integer
    Integer,
    /// Recognizes `1 t true y yes on` / `0 f false n no off`, case-insensitive
    Boolean,
    /// Absolute point in time, ISO 8601 / RFC 3339 text, normalized to UTC
    Timestamp,
    /// Calendar date, `YYYY-MM-DD`
    Date,
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Kind::String => "string",
            Kind::Symbol => "symbol",
            Kind::Integer => "integer",
            Kind::Boolean => "boolean",
            Kind::Timestamp => "timestamp",
            Kind::Date => "date",
        })
    }
}

/// An interned-identifier value, the symbol counterpart of plain text.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Symbol(Box<str>);

impl Symbol {
    pub fn new(name: impl Into<Box<str>>) -> Self {
        Self(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Symbol {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

/// A typed value, either fed into a coercion (as a default) or produced by one.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Text(String),
    Symbol(Symbol),
    Integer(i64),
    Boolean(bool),
    Timestamp(DateTime<Utc>),
    Date(NaiveDate),
}

impl Value {
    /// Name of this value's shape, for coercion diagnostics
    pub fn shape(&self) -> &'static str {
        match self {
            Value::Text(_) => "text",
            Value::Symbol(_) => "symbol",
            Value::Integer(_) => "integer",
            Value::Boolean(_) => "boolean",
            Value::Timestamp(_) => "timestamp",
            Value::Date(_) => "date",
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            Value::Text(text) => Some(text),
            _ => None,
        }
    }

    pub fn into_text(self) -> Option<String> {
        match self {
            Value::Text(text) => Some(text),
            _ => None,
        }
    }

    pub fn as_symbol(&self) -> Option<&Symbol> {
        match self {
            Value::Symbol(symbol) => Some(symbol),
            _ => None,
        }
    }

    pub fn as_integer(&self) -> Option<i64> {
        match self {
            Value::Integer(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_boolean(&self) -> Option<bool> {
        match self {
            Value::Boolean(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_timestamp(&self) -> Option<DateTime<Utc>> {
        match self {
            Value::Timestamp(instant) => Some(*instant),
            _ => None,
        }
    }

    pub fn as_date(&self) -> Option<NaiveDate> {
        match self {
            Value::Date(date) => Some(*date),
            _ => None,
        }
    }
}

impl From<&str> for Value {
    fn from(text: &str) -> Self {
        Value::Text(text.to_string())
    }
}

impl From<String> for Value {
    fn from(text: String) -> Self {
        Value::Text(text)
    }
}

impl From<Symbol> for Value {
    fn from(symbol: Symbol) -> Self {
        Value::Symbol(symbol)
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Value::Integer(n)
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Boolean(b)
    }
}

impl From<DateTime<Utc>> for Value {
    fn from(instant: DateTime<Utc>) -> Self {
        Value::Timestamp(instant)
    }
}

impl From<NaiveDate> for Value {
    fn from(date: NaiveDate) -> Self {
        Value::Date(date)
    }
}

/// Diagnostic produced by a failed coercion.
///
/// Wrapped into [`EnvError::Coerce`](crate::EnvError::Coerce) by the
/// resolver, which adds the variable name and requested kind.
#[derive(Debug, thiserror::Error)]
#[error("{message}")]
pub struct CoerceError {
    message: String,
}

impl CoerceError {
    fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    fn wrong_shape(value: &Value, kind: Kind) -> Self {
        Self::new(format!("cannot coerce a {} value to {}", value.shape(), kind))
    }
}

impl Kind {
    /// Apply this kind's coercion to an optional raw or default value.
    ///
    /// Absence stays absence for every kind; enforcement of presence is
    /// the resolver's job, not the coercion table's.
    pub fn coerce(self, value: Option<Value>) -> Result<Option<Value>, CoerceError> {
        let Some(value) = value else {
            return Ok(None);
        };
        let coerced = match self {
            Kind::String => coerce_string(value),
            Kind::Symbol => coerce_symbol(value)?,
            Kind::Integer => coerce_integer(value)?,
            Kind::Boolean => coerce_boolean(value)?,
            Kind::Timestamp => coerce_timestamp(value)?,
            Kind::Date => coerce_date(value)?,
        };
        Ok(Some(coerced))
    }
}

/// Lossless text rendering of any value. Infallible.
fn coerce_string(value: Value) -> Value {
    let text = match value {
        Value::Text(text) => text,
        Value::Symbol(symbol) => symbol.to_string(),
        Value::Integer(n) => n.to_string(),
        Value::Boolean(b) => b.to_string(),
        Value::Timestamp(instant) => instant.to_rfc3339(),
        Value::Date(date) => date.to_string(),
    };
    Value::Text(text)
}

fn coerce_symbol(value: Value) -> Result<Value, CoerceError> {
    match value {
        Value::Symbol(_) => Ok(value),
        Value::Text(text) => Ok(Value::Symbol(Symbol::new(text))),
        other => Err(CoerceError::wrong_shape(&other, Kind::Symbol)),
    }
}

fn coerce_integer(value: Value) -> Result<Value, CoerceError> {
    match value {
        Value::Integer(_) => Ok(value),
        Value::Text(text) => text
            .trim()
            .parse::<i64>()
            .map(Value::Integer)
            .map_err(|e| CoerceError::new(format!("invalid integer '{text}': {e}"))),
        other => Err(CoerceError::wrong_shape(&other, Kind::Integer)),
    }
}

fn coerce_boolean(value: Value) -> Result<Value, CoerceError> {
    match value {
        Value::Boolean(_) => Ok(value),
        Value::Text(text) => match text.to_ascii_lowercase().as_str() {
            "1" | "t" | "true" | "y" | "yes" | "on" => Ok(Value::Boolean(true)),
            "0" | "f" | "false" | "n" | "no" | "off" => Ok(Value::Boolean(false)),
            _ => Err(CoerceError::new(format!(
                "'{text}' is not a recognized boolean token"
            ))),
        },
        other => Err(CoerceError::wrong_shape(&other, Kind::Boolean)),
    }
}

fn coerce_timestamp(value: Value) -> Result<Value, CoerceError> {
    match value {
        Value::Timestamp(_) => Ok(value),
        Value::Text(text) => parse_timestamp(&text)
            .map(Value::Timestamp)
            .map_err(|e| CoerceError::new(format!("invalid timestamp '{text}': {e}"))),
        other => Err(CoerceError::wrong_shape(&other, Kind::Timestamp)),
    }
}

/// RFC 3339 first; zone-less `YYYY-MM-DD[T ]HH:MM:SS[.frac]` is read as UTC.
fn parse_timestamp(text: &str) -> Result<DateTime<Utc>, chrono::ParseError> {
    match DateTime::parse_from_rfc3339(text) {
        Ok(instant) => Ok(instant.with_timezone(&Utc)),
        Err(rfc3339_err) => ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"]
            .iter()
            .find_map(|format| NaiveDateTime::parse_from_str(text, format).ok())
            .map(|naive| naive.and_utc())
            .ok_or(rfc3339_err),
    }
}

fn coerce_date(value: Value) -> Result<Value, CoerceError> {
    match value {
        Value::Date(_) => Ok(value),
        Value::Text(text) => text
            .trim()
            .parse::<NaiveDate>()
            .map(Value::Date)
            .map_err(|e| CoerceError::new(format!("invalid date '{text}': {e}"))),
        other => Err(CoerceError::wrong_shape(&other, Kind::Date)),
    }
}
