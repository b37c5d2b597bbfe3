//! Whole-site content check

use serde::Serialize;
use std::collections::{HashMap, HashSet};
use std::error::Error as _;

use super::reader::ContentReader;
use crate::error::{ContentError, Result};
use crate::schema::{schema_for, validate, Issue, Kind, Severity};

/// Findings across every entry and singleton
#[derive(Debug, Default, Serialize)]
pub struct AuditReport {
    pub checked: usize,
    pub issues: Vec<Issue>,
}

impl AuditReport {
    pub fn errors(&self) -> usize {
        self.count(Severity::Error)
    }

    pub fn warnings(&self) -> usize {
        self.count(Severity::Warning)
    }

    pub fn has_errors(&self) -> bool {
        self.errors() > 0
    }

    fn count(&self, severity: Severity) -> usize {
        self.issues.iter().filter(|i| i.severity == severity).count()
    }
}

/// Validate all content against the schemas.
///
/// Besides per-field checks this reports relationship values that name no
/// existing entry and slugs that no longer match their slug field. Only a
/// failure to list a collection aborts the run; unreadable entries become
/// issues.
pub async fn audit<R: ContentReader>(reader: &R) -> Result<AuditReport> {
    let mut known: HashMap<Kind, HashSet<String>> = HashMap::new();
    for kind in Kind::COLLECTIONS {
        let slugs = reader.list_slugs(kind).await?;
        known.insert(kind, slugs.into_iter().collect());
    }

    let mut report = AuditReport::default();

    for kind in Kind::COLLECTIONS {
        let mut slugs: Vec<&String> = known[&kind].iter().collect();
        slugs.sort();

        for slug in slugs {
            report.checked += 1;
            match reader.read_raw(kind, slug).await {
                Ok(Some(doc)) => {
                    check_document(&mut report, &known, kind, Some(slug), &doc);
                }
                Ok(None) => {}
                Err(e) => report.issues.push(fault(kind, Some(slug), &e)),
            }
        }
    }

    for kind in Kind::SINGLETONS {
        match reader.read_singleton_raw(kind).await {
            Ok(Some(doc)) => {
                report.checked += 1;
                check_document(&mut report, &known, kind, None, &doc);
            }
            Ok(None) => {
                tracing::debug!("Singleton {} is not present", kind);
            }
            Err(e) => report.issues.push(fault(kind, None, &e)),
        }
    }

    Ok(report)
}

fn check_document(
    report: &mut AuditReport,
    known: &HashMap<Kind, HashSet<String>>,
    kind: Kind,
    slug: Option<&str>,
    doc: &serde_yaml::Value,
) {
    let validation = validate(schema_for(kind), slug, doc);
    report.issues.extend(validation.issues);

    for (path, reference) in validation.references {
        let exists = known
            .get(&reference.kind)
            .map(|slugs| slugs.contains(&reference.slug))
            .unwrap_or(false);
        if !exists {
            report.issues.push(Issue {
                kind,
                slug: slug.map(str::to_string),
                path,
                severity: Severity::Error,
                message: format!("references missing {}", reference),
            });
        }
    }

    if let (Some(slug), Some(field)) = (slug, kind.slug_field()) {
        match doc.get(field).and_then(|v| v.as_str()) {
            Some(value) if !value.trim().is_empty() => {
                let derived = slug::slugify(value);
                if derived != slug {
                    report.issues.push(Issue {
                        kind,
                        slug: Some(slug.to_string()),
                        path: field.to_string(),
                        severity: Severity::Warning,
                        message: format!("slug differs from `{}` derived from the {}", derived, field),
                    });
                }
            }
            _ => report.issues.push(Issue {
                kind,
                slug: Some(slug.to_string()),
                path: field.to_string(),
                severity: Severity::Error,
                message: "required field is missing".to_string(),
            }),
        }
    }
}

fn fault(kind: Kind, slug: Option<&str>, err: &ContentError) -> Issue {
    let mut message = err.to_string();
    if let Some(source) = err.source() {
        message.push_str(&format!(": {}", source));
    }
    Issue {
        kind,
        slug: slug.map(str::to_string),
        path: String::new(),
        severity: Severity::Error,
        message,
    }
}
