//! Field descriptors and the builders used to declare schemas

use serde_yaml::Value;

use super::Kind;

/// The type of a single schema field
#[derive(Debug, Clone, PartialEq)]
pub enum FieldType {
    /// Title-like text the entry slug is derived from
    Slug,
    Text,
    Url,
    Image,
    File,
    /// `YYYY-MM-DD`
    Date,
    Number,
    Checkbox {
        default: bool,
    },
    Select {
        options: &'static [&'static str],
        default: &'static str,
    },
    /// Rich text, stored next to the entry as a `.mdoc` file
    Markdoc,
    Object(Vec<Field>),
    Array(Box<FieldType>),
    /// Slug reference into another collection
    Relationship(Kind),
}

/// A named field
#[derive(Debug, Clone, PartialEq)]
pub struct Field {
    pub name: &'static str,
    pub ty: FieldType,
    /// Default for free text fields (checkbox and select carry their own)
    pub text_default: Option<&'static str>,
}

impl Field {
    fn new(name: &'static str, ty: FieldType) -> Self {
        Self {
            name,
            ty,
            text_default: None,
        }
    }

    pub fn with_default(mut self, value: &'static str) -> Self {
        self.text_default = Some(value);
        self
    }

    /// The value the authoring tool writes when the author leaves this field alone
    pub fn default_value(&self) -> Option<Value> {
        match &self.ty {
            FieldType::Checkbox { default } => Some(Value::Bool(*default)),
            FieldType::Select { default, .. } => Some(Value::String(default.to_string())),
            _ => self.text_default.map(|v| Value::String(v.to_string())),
        }
    }
}

pub fn slug(name: &'static str) -> Field {
    Field::new(name, FieldType::Slug)
}

pub fn text(name: &'static str) -> Field {
    Field::new(name, FieldType::Text)
}

pub fn url(name: &'static str) -> Field {
    Field::new(name, FieldType::Url)
}

pub fn image(name: &'static str) -> Field {
    Field::new(name, FieldType::Image)
}

pub fn file(name: &'static str) -> Field {
    Field::new(name, FieldType::File)
}

pub fn date(name: &'static str) -> Field {
    Field::new(name, FieldType::Date)
}

pub fn number(name: &'static str) -> Field {
    Field::new(name, FieldType::Number)
}

pub fn checkbox(name: &'static str, default: bool) -> Field {
    Field::new(name, FieldType::Checkbox { default })
}

pub fn select(
    name: &'static str,
    options: &'static [&'static str],
    default: &'static str,
) -> Field {
    Field::new(name, FieldType::Select { options, default })
}

pub fn markdoc(name: &'static str) -> Field {
    Field::new(name, FieldType::Markdoc)
}

pub fn object(name: &'static str, fields: Vec<Field>) -> Field {
    Field::new(name, FieldType::Object(fields))
}

pub fn array(name: &'static str, item: FieldType) -> Field {
    Field::new(name, FieldType::Array(Box::new(item)))
}

pub fn relationship(name: &'static str, target: Kind) -> Field {
    Field::new(name, FieldType::Relationship(target))
}

/// A relationship field found somewhere in a schema
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RelationshipField {
    /// Dotted path, `[]` marks a list level (e.g. `linked_partners[].partner`)
    pub path: String,
    pub target: Kind,
    /// Whether the field holds an ordered list of slugs
    pub many: bool,
}

/// The field set of one kind
#[derive(Debug, Clone)]
pub struct Schema {
    pub kind: Kind,
    pub fields: Vec<Field>,
}

impl Schema {
    pub fn new(kind: Kind, fields: Vec<Field>) -> Self {
        Self { kind, fields }
    }

    /// Look up a top-level field
    pub fn field(&self, name: &str) -> Option<&Field> {
        self.fields.iter().find(|f| f.name == name)
    }

    /// Names of markdoc fields stored beside the entry
    pub fn markdoc_fields(&self) -> Vec<&'static str> {
        self.fields
            .iter()
            .filter(|f| f.ty == FieldType::Markdoc)
            .map(|f| f.name)
            .collect()
    }

    /// Every relationship declared by this schema, nested ones included
    pub fn relationships(&self) -> Vec<RelationshipField> {
        let mut out = Vec::new();
        for field in &self.fields {
            collect_relationships(field.name.to_string(), &field.ty, false, &mut out);
        }
        out
    }
}

fn collect_relationships(
    path: String,
    ty: &FieldType,
    many: bool,
    out: &mut Vec<RelationshipField>,
) {
    match ty {
        FieldType::Relationship(target) => out.push(RelationshipField {
            path,
            target: *target,
            many,
        }),
        FieldType::Object(fields) => {
            for field in fields {
                collect_relationships(format!("{}.{}", path, field.name), &field.ty, many, out);
            }
        }
        FieldType::Array(item) => collect_relationships(format!("{}[]", path), item, true, out),
        _ => {}
    }
}
