//! Service (program) index and detail pages

use serde::Serialize;

use super::{non_empty, Pages};
use crate::content::models::{GalleryImage, Program};
use crate::content::{ContentReader, Entry};
use crate::error::Result;
use crate::query::Listable;

#[derive(Debug, Clone, Serialize)]
pub struct ServiceCard {
    pub slug: String,
    pub title: String,
    pub short_description: String,
    pub cover_image: Option<String>,
    pub icon: Option<String>,
    pub beneficiaries: Option<String>,
    pub date_created: Option<String>,
}

impl From<&Entry<Program>> for ServiceCard {
    fn from(e: &Entry<Program>) -> Self {
        let program = &e.entry;
        Self {
            slug: e.slug.clone(),
            title: program.title.clone(),
            short_description: program.short_description.clone().unwrap_or_default(),
            cover_image: non_empty(&program.cover_image),
            icon: non_empty(&program.icon),
            beneficiaries: non_empty(&program.beneficiaries),
            date_created: non_empty(&program.date_created),
        }
    }
}

impl Listable for ServiceCard {
    const FILTERS: &'static [&'static str] = &[];

    fn search_texts(&self) -> Vec<&str> {
        [self.title.as_str(), self.short_description.as_str()]
            .into_iter()
            .chain(self.beneficiaries.as_deref())
            .collect()
    }

    fn field_value(&self, _field: &str) -> Option<&str> {
        None
    }

    fn sort_date(&self) -> Option<&str> {
        self.date_created.as_deref()
    }
}

#[derive(Debug, Serialize)]
pub struct ServiceIndex {
    pub cards: Vec<ServiceCard>,
    pub featured: Vec<ServiceCard>,
}

#[derive(Debug, Serialize)]
pub struct ServiceDetail {
    #[serde(flatten)]
    pub card: ServiceCard,
    pub description_html: Option<String>,
    pub goals_html: Option<String>,
    pub gallery: Vec<GalleryImage>,
    pub date_updated: Option<String>,
}

impl<R: ContentReader> Pages<'_, R> {
    pub async fn service_index(&self) -> Result<ServiceIndex> {
        let entries = self.reader.list_all::<Program>().await?;
        let cards: Vec<ServiceCard> = entries.iter().map(ServiceCard::from).collect();
        let featured = cards
            .iter()
            .take(self.config.listing.featured)
            .cloned()
            .collect();
        Ok(ServiceIndex { cards, featured })
    }

    pub async fn service_detail(&self, slug: &str) -> Result<Option<ServiceDetail>> {
        let Some(program) = self.reader.read_one::<Program>(slug).await? else {
            return Ok(None);
        };

        let entry = Entry {
            slug: slug.to_string(),
            entry: program,
        };
        let card = ServiceCard::from(&entry);
        let program = entry.entry;

        Ok(Some(ServiceDetail {
            card,
            description_html: self.markdown.render_field(program.description.as_deref()),
            goals_html: self.markdown.render_field(program.goals.as_deref()),
            date_updated: non_empty(&program.date_updated),
            gallery: program
                .gallery
                .into_iter()
                .filter(|item| item.image.is_some())
                .collect(),
        }))
    }
}
