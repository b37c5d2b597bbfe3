//! Static detail paths, one per collection entry with a page

use super::Pages;
use crate::content::ContentReader;
use crate::error::Result;
use crate::helpers::url_for;
use crate::schema::Kind;

/// Route prefix of the detail pages of a kind
pub fn detail_route(kind: Kind) -> Option<&'static str> {
    match kind {
        Kind::Blog => Some("blog"),
        Kind::Project => Some("project"),
        Kind::Program => Some("services"),
        _ => None,
    }
}

impl<R: ContentReader> Pages<'_, R> {
    /// Detail page paths of one kind; kinds without detail pages have none
    pub async fn static_paths(&self, kind: Kind) -> Result<Vec<String>> {
        let Some(route) = detail_route(kind) else {
            return Ok(Vec::new());
        };

        let slugs = self.reader.list_slugs(kind).await?;
        Ok(slugs
            .iter()
            .map(|slug| url_for(self.config, &format!("{}/{}", route, slug)))
            .collect())
    }

    /// Detail page paths of every kind
    pub async fn all_paths(&self) -> Result<Vec<String>> {
        let mut paths = Vec::new();
        for kind in [Kind::Blog, Kind::Project, Kind::Program] {
            paths.extend(self.static_paths(kind).await?);
        }
        Ok(paths)
    }
}
