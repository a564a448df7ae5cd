use std::collections::HashMap;
use std::path::Path;

use anyhow::Context;

use crate::foundation::error::{SubpressError, SubpressResult};

/// A single configuration value.
///
/// Scalar coercion is ordered and exclusive: an all-digit string becomes
/// [`Value::Int`], a `digits.digits` string becomes [`Value::Float`], the
/// literals `True`/`False` become [`Value::Bool`], anything else stays a raw
/// trimmed [`Value::Str`]. Bracketed blocks become [`Value::List`].
#[derive(Clone, Debug, PartialEq)]
pub enum Value {
    Int(i64),
    Float(f64),
    Bool(bool),
    Str(String),
    List(Vec<String>),
}

impl Value {
    fn type_name(&self) -> &'static str {
        match self {
            Value::Int(_) => "int",
            Value::Float(_) => "float",
            Value::Bool(_) => "bool",
            Value::Str(_) => "string",
            Value::List(_) => "list",
        }
    }
}

/// Parsed configuration: a flat mapping from setting name to [`Value`].
///
/// Built once at startup from a single `config.txt`, immutable afterwards.
/// Every painter receives it by shared reference. The file format is one
/// directive per line:
///
/// ```text
/// key = value
/// key = {
/// entry one
/// entry two
/// }
/// ```
///
/// Blank lines are skipped everywhere; lines inside a `{`/`}` block are
/// trimmed and stored in order; the last assignment to a name wins.
#[derive(Clone, Debug, Default)]
pub struct ConfigStore {
    entries: HashMap<String, Value>,
}

impl ConfigStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Construct a store pre-seeded with a `font_name` default supplied by
    /// the bootstrapper. A `font_name` directive in the parsed file wins.
    pub fn with_default_font(font_path: impl Into<String>) -> Self {
        let mut entries = HashMap::new();
        entries.insert("font_name".to_string(), Value::Str(font_path.into()));
        Self { entries }
    }

    /// Parse a configuration file, merging its directives into this store.
    pub fn parse(&mut self, path: &Path) -> SubpressResult<()> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("read config file '{}'", path.display()))?;
        self.parse_str(&text)
    }

    /// Parse configuration text. See the type docs for the format.
    pub fn parse_str(&mut self, text: &str) -> SubpressResult<()> {
        let mut block: Option<(String, Vec<String>)> = None;

        for (idx, raw) in text.lines().enumerate() {
            let line = raw.trim();
            if line.is_empty() {
                continue;
            }

            if let Some((name, values)) = block.as_mut() {
                if line == "}" {
                    let name = std::mem::take(name);
                    let values = std::mem::take(values);
                    self.entries.insert(name, Value::List(values));
                    block = None;
                } else {
                    values.push(line.to_string());
                }
                continue;
            }

            let Some((name, value)) = raw.split_once('=') else {
                return Err(SubpressError::config(format!(
                    "line {} has no '=' separator: '{line}'",
                    idx + 1
                )));
            };
            let name = name.trim().to_string();
            let value = value.trim();

            if value == "{" {
                block = Some((name, Vec::new()));
            } else {
                self.entries.insert(name, coerce_scalar(value));
            }
        }

        if let Some((name, _)) = block {
            return Err(SubpressError::config(format!(
                "unterminated '{{' block for key '{name}'"
            )));
        }
        Ok(())
    }

    pub fn contains(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    fn get(&self, key: &str) -> SubpressResult<&Value> {
        self.entries
            .get(key)
            .ok_or_else(|| SubpressError::config(format!("config key not found: '{key}'")))
    }

    pub fn get_int(&self, key: &str) -> SubpressResult<i64> {
        match self.get(key)? {
            Value::Int(v) => Ok(*v),
            other => Err(type_mismatch(key, "int", other)),
        }
    }

    /// Integer accessor narrowed to `u32`, for pixel dimensions.
    pub fn get_u32(&self, key: &str) -> SubpressResult<u32> {
        let v = self.get_int(key)?;
        u32::try_from(v)
            .map_err(|_| SubpressError::config(format!("config key '{key}' does not fit u32: {v}")))
    }

    pub fn get_float(&self, key: &str) -> SubpressResult<f64> {
        match self.get(key)? {
            Value::Float(v) => Ok(*v),
            other => Err(type_mismatch(key, "float", other)),
        }
    }

    pub fn get_bool(&self, key: &str) -> SubpressResult<bool> {
        match self.get(key)? {
            Value::Bool(v) => Ok(*v),
            other => Err(type_mismatch(key, "bool", other)),
        }
    }

    pub fn get_str(&self, key: &str) -> SubpressResult<&str> {
        match self.get(key)? {
            Value::Str(v) => Ok(v.as_str()),
            other => Err(type_mismatch(key, "string", other)),
        }
    }

    pub fn get_list(&self, key: &str) -> SubpressResult<&[String]> {
        match self.get(key)? {
            Value::List(v) => Ok(v.as_slice()),
            other => Err(type_mismatch(key, "list", other)),
        }
    }
}

fn type_mismatch(key: &str, expected: &str, got: &Value) -> SubpressError {
    SubpressError::config(format!(
        "config key '{key}' has type {}, expected {expected}",
        got.type_name()
    ))
}

fn coerce_scalar(value: &str) -> Value {
    if is_all_digits(value)
        && let Ok(v) = value.parse::<i64>()
    {
        return Value::Int(v);
    }
    if let Some((int_part, frac_part)) = value.split_once('.')
        && is_all_digits(int_part)
        && is_all_digits(frac_part)
        && let Ok(v) = value.parse::<f64>()
    {
        return Value::Float(v);
    }
    match value {
        "True" => Value::Bool(true),
        "False" => Value::Bool(false),
        _ => Value::Str(value.to_string()),
    }
}

fn is_all_digits(s: &str) -> bool {
    !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit())
}

#[cfg(test)]
#[path = "../../tests/unit/config/store.rs"]
mod tests;
