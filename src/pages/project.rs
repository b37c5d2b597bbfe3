//! Project index and detail pages

use serde::Serialize;

use super::{non_empty, Pages};
use crate::content::models::{
    Activity, Author, GalleryImage, LinkedPartner, Partner, Project, ProjectStatus, TimelinePhase,
};
use crate::content::{ContentReader, Entry};
use crate::error::Result;
use crate::helpers::{display_date, format_file_size};
use crate::metrics::{normalize, NormalizedMetrics};
use crate::query::{facet_values, Listable};
use crate::resolve::{resolve_linked, resolve_one, AuthorSummary, PartnerSummary};

/// Rich-text sections of a project report, in reading order
const SECTIONS: [(&str, &str); 6] = [
    ("background", "Background"),
    ("objectives", "Objectives"),
    ("methodology", "Methodology"),
    ("key_findings", "Key Findings"),
    ("conclusions", "Conclusions"),
    ("recommendations", "Recommendations"),
];

/// A project as shown on listings and the home page
#[derive(Debug, Clone, Serialize)]
pub struct ProjectCard {
    pub slug: String,
    pub title: String,
    pub summary: String,
    pub status: ProjectStatus,
    /// District, or the free-text location when no district is set
    pub district: Option<String>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    pub hero_image: Option<String>,
    pub featured: bool,
    pub impact_metrics: NormalizedMetrics,
}

impl ProjectCard {
    pub fn new(slug: &str, project: &Project) -> Self {
        Self {
            slug: slug.to_string(),
            title: project.title.clone(),
            summary: project.summary.clone().unwrap_or_default(),
            status: project.status,
            district: non_empty(&project.district).or_else(|| non_empty(&project.location)),
            start_date: non_empty(&project.start_date),
            end_date: non_empty(&project.end_date),
            hero_image: non_empty(&project.hero_image),
            featured: project.featured,
            impact_metrics: normalize(&project.impact_metrics),
        }
    }

    /// Shown in the featured strip of the index
    pub fn is_highlighted(&self) -> bool {
        matches!(self.status.as_str(), "published" | "ongoing")
    }
}

impl From<&Entry<Project>> for ProjectCard {
    fn from(e: &Entry<Project>) -> Self {
        Self::new(&e.slug, &e.entry)
    }
}

impl Listable for ProjectCard {
    const FILTERS: &'static [&'static str] = &["status", "district"];

    fn search_texts(&self) -> Vec<&str> {
        vec![self.title.as_str(), self.summary.as_str()]
    }

    fn field_value(&self, field: &str) -> Option<&str> {
        match field {
            "status" => Some(self.status.as_str()),
            "district" => self.district.as_deref(),
            _ => None,
        }
    }

    fn sort_date(&self) -> Option<&str> {
        self.start_date.as_deref()
    }
}

#[derive(Debug, Serialize)]
pub struct ProjectIndex {
    pub cards: Vec<ProjectCard>,
    pub districts: Vec<String>,
    pub featured: Vec<ProjectCard>,
}

#[derive(Debug, Serialize)]
pub struct ProjectSection {
    pub key: &'static str,
    pub title: &'static str,
    pub html: String,
}

#[derive(Debug, Serialize)]
pub struct DocumentLink {
    pub name: String,
    pub url: String,
    pub file_type: Option<String>,
    pub size: String,
}

#[derive(Debug, Serialize)]
pub struct ProjectDetail {
    #[serde(flatten)]
    pub card: ProjectCard,
    pub country: Option<String>,
    pub region: Option<String>,
    pub start_display: String,
    pub end_display: String,
    pub executive_summary: Option<String>,
    pub sections: Vec<ProjectSection>,
    pub contact_person: Option<AuthorSummary>,
    pub partners: Vec<PartnerSummary>,
    pub activities: Vec<Activity>,
    pub timeline: Vec<TimelinePhase>,
    pub gallery: Vec<GalleryImage>,
    pub documents: Vec<DocumentLink>,
}

impl<R: ContentReader> Pages<'_, R> {
    pub async fn project_index(&self) -> Result<ProjectIndex> {
        let entries = self.reader.list_all::<Project>().await?;
        let cards: Vec<ProjectCard> = entries.iter().map(ProjectCard::from).collect();

        let districts = facet_values(&cards, "district");
        let featured = cards
            .iter()
            .filter(|c| c.is_highlighted())
            .take(self.config.listing.featured)
            .cloned()
            .collect();

        Ok(ProjectIndex {
            cards,
            districts,
            featured,
        })
    }

    pub async fn project_detail(&self, slug: &str) -> Result<Option<ProjectDetail>> {
        let Some(project) = self.reader.read_one::<Project>(slug).await? else {
            return Ok(None);
        };

        let contact_person = resolve_one::<Author, _>(self.reader, project.contact_person.as_deref());
        let links: Vec<LinkedPartner> = project.linked_partners.iter().flatten().cloned().collect();
        let partners = resolve_linked::<Partner, _, _, _>(self.reader, links, |l| l.partner.as_deref());
        let (contact_person, partners) = futures::join!(contact_person, partners);

        let partners = partners
            .into_iter()
            .map(|(link, entry)| PartnerSummary::from(&entry).with_role(link.role))
            .collect();

        let sections = SECTIONS
            .iter()
            .filter_map(|&(key, title)| {
                let html = self.markdown.render_field(section_source(&project, key))?;
                Some(ProjectSection { key, title, html })
            })
            .collect();

        let documents = project
            .documents
            .iter()
            .filter_map(|doc| {
                let url = non_empty(&doc.file).or_else(|| non_empty(&doc.url))?;
                Some(DocumentLink {
                    name: doc.name.clone().unwrap_or_else(|| "Document".to_string()),
                    url,
                    file_type: non_empty(&doc.file_type),
                    size: format_file_size(doc.size),
                })
            })
            .collect();

        let card = ProjectCard::new(slug, &project);
        Ok(Some(ProjectDetail {
            start_display: display_date(card.start_date.as_deref()),
            end_display: display_date(card.end_date.as_deref()),
            card,
            country: non_empty(&project.country),
            region: non_empty(&project.region),
            executive_summary: non_empty(&project.executive_summary),
            sections,
            contact_person: contact_person.map(|a| AuthorSummary::from(&a)),
            partners,
            activities: project.activities,
            timeline: project.timeline,
            gallery: project.gallery,
            documents,
        }))
    }
}

fn section_source<'a>(project: &'a Project, key: &str) -> Option<&'a str> {
    let field = match key {
        "background" => &project.background,
        "objectives" => &project.objectives,
        "methodology" => &project.methodology,
        "key_findings" => &project.key_findings,
        "conclusions" => &project.conclusions,
        "recommendations" => &project.recommendations,
        _ => return None,
    };
    field.as_deref()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SiteConfig;
    use crate::content::MemoryStore;
    use crate::query::{query, ListQuery, ALL};
    use crate::schema::Kind;

    fn store() -> MemoryStore {
        let mut store = MemoryStore::new();
        store
            .insert_yaml(Kind::Partner, "wwf", "name: WWF\nrole: Donor\nwebsite: https://wwf.org\n")
            .unwrap();
        store
            .insert_yaml(Kind::Author, "jane-doe", "full_name: Jane Doe\n")
            .unwrap();
        store
            .insert_yaml(
                Kind::Project,
                "a",
                r#"
title: Kigali Greenbelt
status: ongoing
district: Kigali
impact_metrics:
  - label: Trees
    value: 1200
  - label: Hectares
    value: 0
"#,
            )
            .unwrap();
        store
            .insert_yaml(
                Kind::Project,
                "b",
                "title: Huye Hills\nstatus: completed\nlocation: Huye\n",
            )
            .unwrap();
        store
            .insert_yaml(Kind::Project, "c", "title: Nyungwe Edge\nstatus: ongoing\n")
            .unwrap();
        store
            .insert_yaml(Kind::Project, "d", "title: Gishwati\nstatus: ongoing\n")
            .unwrap();
        store
            .insert_yaml(
                Kind::Project,
                "detailed",
                r#"
title: Detailed
start_date: "2023-02-01"
contact_person: jane-doe
background: "Degraded **hills**."
methodology: "   "
linked_partners:
  - partner: wwf
    role: Funding
  - null
  - partner: ghost
    role: Unknown
documents:
  - name: Report
    file: /files/report.pdf
    type: PDF
    size: 2048
  - name: Orphan
"#,
            )
            .unwrap();
        store
    }

    #[tokio::test]
    async fn test_project_index() {
        let store = store();
        let config = SiteConfig::default();
        let pages = Pages::new(&store, &config);

        let index = pages.project_index().await.unwrap();
        assert_eq!(index.cards.len(), 5);
        assert_eq!(index.districts, vec!["Kigali", "Huye"]);

        let featured: Vec<&str> = index.featured.iter().map(|c| c.slug.as_str()).collect();
        assert_eq!(featured, vec!["a", "c"]);

        let a = &index.cards[0];
        assert_eq!(a.impact_metrics.trees_planted(), Some(1200.0));
        assert_eq!(a.impact_metrics.hectares_restored(), Some(0.0));

        let ongoing = query(&index.cards, &ListQuery::new().filter("status", "ongoing"));
        assert_eq!(ongoing.shown(), 3);

        let kigali = query(
            &index.cards,
            &ListQuery::new().filter("status", "ongoing").filter("district", "Kigali"),
        );
        let slugs: Vec<&str> = kigali.items.iter().map(|c| c.slug.as_str()).collect();
        assert_eq!(slugs, vec!["a"]);

        let everything = query(&index.cards, &ListQuery::new().filter("district", ALL));
        assert_eq!(everything.shown(), 5);
    }

    #[tokio::test]
    async fn test_project_detail() {
        let store = store();
        let config = SiteConfig::default();
        let pages = Pages::new(&store, &config);

        let detail = pages.project_detail("detailed").await.unwrap().unwrap();
        assert_eq!(detail.card.status, ProjectStatus::Draft);
        assert_eq!(detail.country.as_deref(), Some("Rwanda"));
        assert_eq!(detail.start_display, "February 1, 2023");
        assert_eq!(detail.contact_person.unwrap().full_name, "Jane Doe");

        assert_eq!(detail.partners.len(), 1);
        assert_eq!(detail.partners[0].name, "WWF");
        assert_eq!(detail.partners[0].role.as_deref(), Some("Funding"));

        assert_eq!(detail.sections.len(), 1);
        assert_eq!(detail.sections[0].key, "background");
        assert!(detail.sections[0].html.contains("<strong>hills</strong>"));

        assert_eq!(detail.documents.len(), 1);
        assert_eq!(detail.documents[0].size, "2 KB");
        assert_eq!(detail.documents[0].file_type.as_deref(), Some("PDF"));

        assert!(pages.project_detail("ghost").await.unwrap().is_none());
    }
}
