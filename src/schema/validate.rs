//! Raw document validation against a schema

use serde::Serialize;
use serde_yaml::{Mapping, Value};
use std::fmt;

use super::fields::{Field, FieldType, Schema};
use super::{Kind, Reference};
use crate::helpers::parse_date;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Error,
    Warning,
}

/// A data-quality finding on one entry
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Issue {
    pub kind: Kind,
    pub slug: Option<String>,
    /// Field path inside the entry, empty for the entry itself
    pub path: String,
    pub severity: Severity,
    pub message: String,
}

impl fmt::Display for Issue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let level = match self.severity {
            Severity::Error => "error",
            Severity::Warning => "warning",
        };
        write!(f, "{}: {}", level, self.kind)?;
        if let Some(slug) = &self.slug {
            write!(f, "/{}", slug)?;
        }
        if !self.path.is_empty() {
            write!(f, " `{}`", self.path)?;
        }
        write!(f, ": {}", self.message)
    }
}

/// Outcome of validating one raw entry
#[derive(Debug, Default)]
pub struct Validation {
    pub issues: Vec<Issue>,
    /// Relationship values found in the entry, keyed by field path
    pub references: Vec<(String, Reference)>,
}

impl Validation {
    pub fn has_errors(&self) -> bool {
        self.issues.iter().any(|i| i.severity == Severity::Error)
    }
}

struct Walker<'a> {
    kind: Kind,
    slug: Option<&'a str>,
    out: Validation,
}

impl Walker<'_> {
    fn issue(&mut self, path: &str, severity: Severity, message: String) {
        self.out.issues.push(Issue {
            kind: self.kind,
            slug: self.slug.map(str::to_string),
            path: path.to_string(),
            severity,
            message,
        });
    }

    fn mapping(&mut self, path: &str, fields: &[Field], map: &Mapping) {
        for key in map.keys() {
            let Some(name) = key.as_str() else {
                self.issue(path, Severity::Error, format!("non-string key {:?}", key));
                continue;
            };
            if !fields.iter().any(|f| f.name == name) {
                self.issue(
                    &join(path, name),
                    Severity::Warning,
                    "field is not part of the schema".to_string(),
                );
            }
        }

        for field in fields {
            if let Some(value) = map.get(field.name) {
                self.value(&join(path, field.name), &field.ty, value);
            }
        }
    }

    fn value(&mut self, path: &str, ty: &FieldType, value: &Value) {
        // Null is how the authoring tool stores an emptied field.
        if value.is_null() {
            return;
        }

        match ty {
            FieldType::Slug
            | FieldType::Text
            | FieldType::Image
            | FieldType::File
            | FieldType::Markdoc => {
                if !value.is_string() {
                    self.mismatch(path, "text", value);
                }
            }
            FieldType::Url => match value.as_str() {
                Some(url) if !url.is_empty() && !looks_like_url(url) => self.issue(
                    path,
                    Severity::Warning,
                    format!("`{}` does not look like a URL", url),
                ),
                Some(_) => {}
                None => self.mismatch(path, "a URL", value),
            },
            FieldType::Date => match value.as_str() {
                Some(s) if parse_date(s).is_none() => self.issue(
                    path,
                    Severity::Error,
                    format!("`{}` is not a YYYY-MM-DD date", s),
                ),
                Some(_) => {}
                None => self.mismatch(path, "a date", value),
            },
            FieldType::Number => {
                if !value.is_number() {
                    self.mismatch(path, "a number", value);
                }
            }
            FieldType::Checkbox { .. } => {
                if !value.is_bool() {
                    self.mismatch(path, "true or false", value);
                }
            }
            FieldType::Select { options, .. } => match value.as_str() {
                Some(s) if !options.contains(&s) => self.issue(
                    path,
                    Severity::Error,
                    format!("`{}` is not one of: {}", s, options.join(", ")),
                ),
                Some(_) => {}
                None => self.mismatch(path, "an option", value),
            },
            FieldType::Object(fields) => match value.as_mapping() {
                Some(map) => self.mapping(path, fields, map),
                None => self.mismatch(path, "an object", value),
            },
            FieldType::Array(item) => match value.as_sequence() {
                Some(items) => {
                    for (i, v) in items.iter().enumerate() {
                        self.value(&format!("{}[{}]", path, i), item, v);
                    }
                }
                None => self.mismatch(path, "a list", value),
            },
            FieldType::Relationship(target) => match value.as_str() {
                Some(s) => {
                    if let Some(reference) = Reference::new(*target, Some(s)) {
                        self.out.references.push((path.to_string(), reference));
                    }
                }
                None => self.mismatch(path, "a slug", value),
            },
        }
    }

    fn mismatch(&mut self, path: &str, expected: &str, value: &Value) {
        self.issue(
            path,
            Severity::Error,
            format!("expected {}, found {}", expected, describe(value)),
        );
    }
}

/// Check a raw entry against its schema and collect its relationship values.
///
/// Referential integrity is not checked here: the returned references are
/// validated lazily by whoever resolves them.
pub fn validate(schema: &Schema, slug: Option<&str>, doc: &Value) -> Validation {
    let mut walker = Walker {
        kind: schema.kind,
        slug,
        out: Validation::default(),
    };

    match doc {
        Value::Mapping(map) => walker.mapping("", &schema.fields, map),
        Value::Null => {}
        other => walker.mismatch("", "a mapping", other),
    }

    walker.out
}

fn join(path: &str, name: &str) -> String {
    if path.is_empty() {
        name.to_string()
    } else {
        format!("{}.{}", path, name)
    }
}

fn looks_like_url(s: &str) -> bool {
    ["http://", "https://", "mailto:", "tel:", "/"]
        .iter()
        .any(|prefix| s.starts_with(prefix))
}

fn describe(value: &Value) -> &'static str {
    match value {
        Value::Null => "nothing",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "text",
        Value::Sequence(_) => "a list",
        Value::Mapping(_) => "an object",
        Value::Tagged(_) => "a tagged value",
    }
}
