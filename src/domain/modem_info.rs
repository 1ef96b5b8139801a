// Modem info domain models
use crate::domain::field_schema::{AccessMode, FieldRule, SIM_MISSING};
use serde::Deserialize;
use serde_json::{Map, Value};
use std::collections::HashMap;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ExtractError {
    #[error("modem_info record {index} has no `{field}` field")]
    MissingField { index: usize, field: &'static str },
}

/// Render a JSON value the way modem_ctrl consumers expect to see it.
///
/// Strings are taken verbatim. Everything else keeps the historical display
/// spelling: `True`/`False`/`None`, `[1, 2]`, `{'band': 'n78'}`.
pub fn stringify(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => display_repr(other),
    }
}

fn display_repr(value: &Value) -> String {
    match value {
        Value::Null => "None".to_string(),
        Value::Bool(true) => "True".to_string(),
        Value::Bool(false) => "False".to_string(),
        Value::Number(n) => n.to_string(),
        Value::String(s) => quote(s),
        Value::Array(items) => {
            let items: Vec<String> = items.iter().map(display_repr).collect();
            format!("[{}]", items.join(", "))
        }
        Value::Object(map) => {
            let entries: Vec<String> = map
                .iter()
                .map(|(k, v)| format!("{}: {}", quote(k), display_repr(v)))
                .collect();
            format!("{{{}}}", entries.join(", "))
        }
    }
}

// Single quotes unless the text has one and no double quote
fn quote(text: &str) -> String {
    let delimiter = if text.contains('\'') && !text.contains('"') {
        '"'
    } else {
        '\''
    };
    let mut quoted = String::with_capacity(text.len() + 2);
    quoted.push(delimiter);
    for c in text.chars() {
        match c {
            '\\' => quoted.push_str("\\\\"),
            '\n' => quoted.push_str("\\n"),
            '\r' => quoted.push_str("\\r"),
            '\t' => quoted.push_str("\\t"),
            c if c == delimiter => {
                quoted.push('\\');
                quoted.push(c);
            }
            c => quoted.push(c),
        }
    }
    quoted.push(delimiter);
    quoted
}

/// One entry of the `modem_info` array
#[derive(Debug, Clone, Copy)]
pub struct FieldRecord<'a> {
    index: usize,
    fields: Option<&'a Map<String, Value>>,
}

impl<'a> FieldRecord<'a> {
    pub fn new(index: usize, raw: &'a Value) -> Self {
        Self {
            index,
            fields: raw.as_object(),
        }
    }

    /// Read a field according to the rule's access mode.
    ///
    /// A strict rule never yields `Ok(None)`.
    pub fn read(&self, rule: &FieldRule) -> Result<Option<&'a Value>, ExtractError> {
        let value = self.fields.and_then(|fields| fields.get(rule.name));
        match (value, rule.access) {
            (None, AccessMode::Strict) => Err(ExtractError::MissingField {
                index: self.index,
                field: rule.name,
            }),
            (value, _) => Ok(value),
        }
    }

    pub fn read_string(&self, rule: &FieldRule) -> Result<String, ExtractError> {
        Ok(self.read(rule)?.map(stringify).unwrap_or_default())
    }
}

/// Scalar fields picked out of the response, values trimmed
#[derive(Debug, Clone, Default)]
pub struct ExtractedFields {
    values: HashMap<&'static str, String>,
}

impl ExtractedFields {
    pub fn insert(&mut self, rule: &'static FieldRule, value: String) {
        self.values.insert(rule.name, value);
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.values.get(key).map(String::as_str)
    }

    /// Look up a scalar by its rule. Defaulted rules fall back to `marker`
    /// and never yield `None`; optional ones leave absence to the caller.
    pub fn read<'a>(&'a self, rule: &FieldRule, marker: &'a str) -> Option<&'a str> {
        let value = self.get(rule.name);
        match rule.access {
            AccessMode::Defaulted => Some(value.unwrap_or(marker)),
            AccessMode::Strict | AccessMode::Optional => value,
        }
    }

    pub fn read_string(&self, rule: &FieldRule, marker: &str) -> String {
        self.read(rule, marker).unwrap_or_default().to_string()
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProgressField {
    pub name: String,
    pub value: String,
    pub min_value: String,
    pub max_value: String,
    pub unit: String,
}

/// Cell Information progress bars in source order
#[derive(Debug, Clone, Default)]
pub struct ProgressFields {
    entries: Vec<ProgressField>,
}

impl ProgressFields {
    /// Add a field. A repeated name overwrites the earlier entry in place.
    pub fn insert(&mut self, field: ProgressField) {
        match self.entries.iter_mut().find(|entry| entry.name == field.name) {
            Some(existing) => *existing = field,
            None => self.entries.push(field),
        }
    }

    pub fn get(&self, index: usize) -> Option<&ProgressField> {
        self.entries.get(index)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }
}

/// Fallback strings for values the modem did not report
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Markers {
    #[serde(default = "default_unknown_marker")]
    pub unknown: String,
    #[serde(default = "default_no_sim_marker")]
    pub no_sim: String,
}

fn default_unknown_marker() -> String {
    "-".to_string()
}

fn default_no_sim_marker() -> String {
    "无SIM卡".to_string()
}

impl Default for Markers {
    fn default() -> Self {
        Self {
            unknown: default_unknown_marker(),
            no_sim: default_no_sim_marker(),
        }
    }
}

impl Markers {
    pub fn select(&self, sim_status: Option<&str>) -> &str {
        if sim_status == Some(SIM_MISSING) {
            &self.no_sim
        } else {
            &self.unknown
        }
    }
}
