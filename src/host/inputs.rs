//! Typed access to the loosely typed option values the host sends.

use serde_json::{Map, Value};

use crate::utils::{ConvertError, ConvertResult};

/// Named option values for one node execution.
#[derive(Debug, Clone, Default)]
pub struct NodeInputs {
    values: Map<String, Value>,
}

impl NodeInputs {
    /// Accepts a JSON object; anything else is a host error.
    pub fn from_value(value: Value) -> ConvertResult<Self> {
        match value {
            Value::Object(values) => Ok(Self { values }),
            other => Err(ConvertError::host(format!(
                "Node inputs must be a JSON object, got {}",
                kind_name(&other)
            ))),
        }
    }

    pub fn from_json(json: &str) -> ConvertResult<Self> {
        Self::from_value(serde_json::from_str(json)?)
    }

    pub fn get(&self, name: &str) -> Option<&Value> {
        self.values.get(name).filter(|v| !v.is_null())
    }

    pub fn required_str(&self, name: &str) -> ConvertResult<&str> {
        self.optional_str(name)?.ok_or_else(|| missing(name))
    }

    /// Empty strings count as absent.
    pub fn optional_str(&self, name: &str) -> ConvertResult<Option<&str>> {
        match self.get(name) {
            None => Ok(None),
            Some(Value::String(s)) if s.trim().is_empty() => Ok(None),
            Some(Value::String(s)) => Ok(Some(s.as_str())),
            Some(other) => Err(wrong_type(name, "a string", other)),
        }
    }

    /// The raw value as text for messages: strings trimmed, anything else as JSON.
    /// Blank strings count as absent.
    pub fn display(&self, name: &str) -> Option<String> {
        match self.get(name)? {
            Value::String(s) if s.trim().is_empty() => None,
            Value::String(s) => Some(s.trim().to_string()),
            other => Some(other.to_string()),
        }
    }

    /// Accepts JSON integers, integral floats and numeric strings.
    pub fn required_u32(&self, name: &str) -> ConvertResult<u32> {
        let value = self.get(name).ok_or_else(|| missing(name))?;
        to_u32(value).ok_or_else(|| wrong_type(name, "a non-negative integer", value))
    }

    /// Accepts a JSON array or a comma-separated string.
    pub fn optional_u32_list(&self, name: &str) -> ConvertResult<Option<Vec<u32>>> {
        let value = match self.get(name) {
            None => return Ok(None),
            Some(v) => v,
        };
        let expected = "a list of non-negative integers";
        match value {
            Value::Array(items) => items
                .iter()
                .map(|item| to_u32(item).ok_or_else(|| wrong_type(name, expected, value)))
                .collect::<ConvertResult<Vec<_>>>()
                .map(Some),
            Value::String(s) if s.trim().is_empty() => Ok(None),
            Value::String(s) => s
                .split(',')
                .map(|part| part.trim().parse::<u32>().map_err(|_| wrong_type(name, expected, value)))
                .collect::<ConvertResult<Vec<_>>>()
                .map(Some),
            other => Err(wrong_type(name, expected, other)),
        }
    }

    pub fn optional_bool(&self, name: &str) -> ConvertResult<Option<bool>> {
        match self.get(name) {
            None => Ok(None),
            Some(Value::Bool(b)) => Ok(Some(*b)),
            Some(value @ Value::String(s)) => match s.trim().to_lowercase().as_str() {
                "true" | "yes" | "1" => Ok(Some(true)),
                "false" | "no" | "0" | "" => Ok(Some(false)),
                _ => Err(wrong_type(name, "a boolean", value)),
            },
            Some(Value::Number(n)) if n.as_u64() == Some(0) => Ok(Some(false)),
            Some(Value::Number(n)) if n.as_u64() == Some(1) => Ok(Some(true)),
            Some(other) => Err(wrong_type(name, "a boolean", other)),
        }
    }
}

fn to_u32(value: &Value) -> Option<u32> {
    match value {
        Value::Number(n) => n
            .as_u64()
            .or_else(|| n.as_f64().filter(|f| *f >= 0.0 && f.fract() == 0.0).map(|f| f as u64))
            .and_then(|n| u32::try_from(n).ok()),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

fn missing(name: &str) -> ConvertError {
    ConvertError::settings(format!("Missing required input: {name}"))
}

fn wrong_type(name: &str, expected: &str, got: &Value) -> ConvertError {
    ConvertError::settings(format!("Input '{name}' must be {expected}, got {got}"))
}

fn kind_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
