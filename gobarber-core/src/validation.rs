//! Form schemas and per-field error reporting.
//!
//! A [`Schema`] checks every field and every rule (no early abort) and
//! reports at most one message per field. When several rules of a field
//! fail, the last one wins.

use std::collections::BTreeMap;
use std::fmt;
use std::sync::LazyLock;

use regex::Regex;

static EMAIL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").unwrap_or_else(|e| panic!("invalid email regex: {e}"))
});

/// Raw values of a submitted form, keyed by field name.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormData {
    values: BTreeMap<String, String>,
}

impl FormData {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, field: &str, value: impl Into<String>) -> Self {
        self.values.insert(field.to_string(), value.into());
        self
    }

    pub fn set(&mut self, field: &str, value: impl Into<String>) {
        self.values.insert(field.to_string(), value.into());
    }

    pub fn get(&self, field: &str) -> Option<&str> {
        self.values.get(field).map(String::as_str)
    }

    /// The field value, or an empty string when it was not submitted.
    pub fn value(&self, field: &str) -> String {
        self.get(field).unwrap_or_default().to_string()
    }
}

/// Field name → message for every field that failed validation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrors(BTreeMap<String, String>);

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, field: &str, message: &str) {
        self.0.insert(field.to_string(), message.to_string());
    }

    pub fn get(&self, field: &str) -> Option<&str> {
        self.0.get(field).map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn clear(&mut self) {
        self.0.clear();
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl fmt::Display for FieldErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parts: Vec<_> = self.iter().map(|(field, msg)| format!("{field}: {msg}")).collect();
        write!(f, "{}", parts.join("; "))
    }
}

#[derive(Debug, Clone)]
enum Rule {
    /// Fails on a missing or empty value.
    Required(String),
    /// Fails on a non-empty value that is not an e-mail address.
    Email(String),
    /// Fails on a present value shorter than `n` characters.
    Min(usize, String),
}

impl Rule {
    fn check(&self, value: Option<&str>) -> Option<&str> {
        match self {
            Rule::Required(msg) => match value {
                Some(v) if !v.is_empty() => None,
                _ => Some(msg.as_str()),
            },
            Rule::Email(msg) => match value {
                Some(v) if !v.is_empty() && !EMAIL_RE.is_match(v) => Some(msg.as_str()),
                _ => None,
            },
            Rule::Min(n, msg) => match value {
                Some(v) if v.chars().count() < *n => Some(msg.as_str()),
                _ => None,
            },
        }
    }
}

/// Rules for one form field.
#[derive(Debug, Clone)]
pub struct Field {
    name: String,
    rules: Vec<Rule>,
}

impl Field {
    pub fn new(name: &str) -> Self {
        Field {
            name: name.to_string(),
            rules: Vec::new(),
        }
    }

    pub fn required(mut self, message: &str) -> Self {
        self.rules.push(Rule::Required(message.to_string()));
        self
    }

    pub fn email(mut self, message: &str) -> Self {
        self.rules.push(Rule::Email(message.to_string()));
        self
    }

    pub fn min(mut self, len: usize, message: &str) -> Self {
        self.rules.push(Rule::Min(len, message.to_string()));
        self
    }
}

#[derive(Debug, Clone, Default)]
pub struct Schema {
    fields: Vec<Field>,
}

impl Schema {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn field(mut self, field: Field) -> Self {
        self.fields.push(field);
        self
    }

    pub fn validate(&self, data: &FormData) -> Result<(), FieldErrors> {
        let mut errors = FieldErrors::new();

        for field in &self.fields {
            let value = data.get(&field.name);
            for rule in &field.rules {
                if let Some(message) = rule.check(value) {
                    errors.insert(&field.name, message);
                }
            }
        }

        if errors.is_empty() { Ok(()) } else { Err(errors) }
    }
}
