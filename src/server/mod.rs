//! Read-only JSON API over the page data

use anyhow::Result;
use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::trace::TraceLayer;

use crate::error::ContentError;
use crate::pages::{
    AboutPage, BlogDetail, ContactPage, HomePage, ProjectDetail, ServiceDetail, SiteChrome,
};
use crate::query::{query, ListQuery, Listable, SortKey};
use crate::Site;

/// Server state
struct ServerState {
    site: Site,
}

type SharedState = Arc<ServerState>;

/// Errors surfaced to API clients
#[derive(Debug)]
enum ApiError {
    NotFound(String),
    Content(ContentError),
}

impl From<ContentError> for ApiError {
    fn from(e: ContentError) -> Self {
        ApiError::Content(e)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ApiError::NotFound(what) => (StatusCode::NOT_FOUND, format!("Not found: {}", what)),
            ApiError::Content(e) => {
                tracing::error!("Content store fault: {:?}", e);
                (StatusCode::INTERNAL_SERVER_ERROR, e.to_string())
            }
        };
        (status, Json(json!({ "error": message }))).into_response()
    }
}

type ApiResult<T> = std::result::Result<Json<T>, ApiError>;

fn found<T>(page: Option<T>, what: &str) -> ApiResult<T> {
    page.map(Json).ok_or_else(|| ApiError::NotFound(what.to_string()))
}

/// Listing query string: `?search=&sort=` plus any named filters
#[derive(Debug, Default, Deserialize)]
struct ListParams {
    search: Option<String>,
    sort: Option<String>,
    #[serde(flatten)]
    filters: std::collections::HashMap<String, String>,
}

impl ListParams {
    fn to_query<T: Listable>(&self, default_sort: &str) -> ListQuery {
        let mut q = ListQuery::new()
            .search(self.search.as_deref().unwrap_or_default())
            .sort(SortKey::parse(self.sort.as_deref().unwrap_or(default_sort)));
        // Filters in a fixed order so listings do not depend on hash order.
        for field in T::FILTERS {
            if let Some(value) = self.filters.get(*field) {
                q = q.filter(field, value);
            }
        }
        q
    }
}

#[derive(Serialize)]
struct ListingResponse<'a, T> {
    summary: String,
    shown: usize,
    total: usize,
    items: Vec<&'a T>,
    facets: Value,
}

fn listing<'a, T: Listable + Serialize>(
    items: &'a [T],
    q: &ListQuery,
    facets: Value,
) -> Json<Value> {
    let listing = query(items, q);
    let body = ListingResponse {
        summary: listing.summary(),
        shown: listing.shown(),
        total: listing.total,
        items: listing.items,
        facets,
    };
    Json(serde_json::to_value(body).unwrap_or(Value::Null))
}

/// Build the API router
pub fn router(site: Site) -> Router {
    let state = Arc::new(ServerState { site });

    Router::new()
        .route("/api/chrome", get(chrome_handler))
        .route("/api/home", get(home_handler))
        .route("/api/about", get(about_handler))
        .route("/api/contact", get(contact_handler))
        .route("/api/blogs", get(blogs_handler))
        .route("/api/blogs/:slug", get(blog_handler))
        .route("/api/projects", get(projects_handler))
        .route("/api/projects/:slug", get(project_handler))
        .route("/api/services", get(services_handler))
        .route("/api/services/:slug", get(service_handler))
        .route("/api/paths", get(paths_handler))
        .fallback(fallback_handler)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Start the API server
pub async fn start(site: Site, ip: &str, port: u16) -> Result<()> {
    // Parse address - handle "localhost" specially
    let bind_ip = if ip == "localhost" { "127.0.0.1" } else { ip };
    let addr: SocketAddr = format!("{}:{}", bind_ip, port).parse()?;

    println!("API running at http://{}:{}/api", ip, port);
    println!("Press Ctrl+C to stop.");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, router(site)).await?;

    Ok(())
}

async fn chrome_handler(State(state): State<SharedState>) -> ApiResult<SiteChrome> {
    Ok(Json(state.site.pages().site_chrome().await?))
}

async fn home_handler(State(state): State<SharedState>) -> ApiResult<HomePage> {
    found(state.site.pages().home_page().await?, "home page")
}

async fn about_handler(State(state): State<SharedState>) -> ApiResult<AboutPage> {
    found(state.site.pages().about_page().await?, "about page")
}

async fn contact_handler(State(state): State<SharedState>) -> ApiResult<ContactPage> {
    Ok(Json(state.site.pages().contact_page().await?))
}

async fn blogs_handler(
    State(state): State<SharedState>,
    Query(params): Query<ListParams>,
) -> Result<Json<Value>, ApiError> {
    let index = state.site.pages().blog_index().await?;
    let q = params.to_query::<crate::pages::BlogCard>(&state.site.config.listing.blog_sort);
    Ok(listing(
        &index.cards,
        &q,
        json!({ "category": index.categories }),
    ))
}

async fn blog_handler(
    State(state): State<SharedState>,
    Path(slug): Path<String>,
) -> ApiResult<BlogDetail> {
    found(state.site.pages().blog_detail(&slug).await?, &slug)
}

async fn projects_handler(
    State(state): State<SharedState>,
    Query(params): Query<ListParams>,
) -> Result<Json<Value>, ApiError> {
    let index = state.site.pages().project_index().await?;
    let q = params.to_query::<crate::pages::ProjectCard>("");
    let mut response = listing(&index.cards, &q, json!({ "district": index.districts }));
    if let Value::Object(body) = &mut response.0 {
        body.insert(
            "featured".to_string(),
            serde_json::to_value(&index.featured).unwrap_or(Value::Null),
        );
    }
    Ok(response)
}

async fn project_handler(
    State(state): State<SharedState>,
    Path(slug): Path<String>,
) -> ApiResult<ProjectDetail> {
    found(state.site.pages().project_detail(&slug).await?, &slug)
}

async fn services_handler(
    State(state): State<SharedState>,
    Query(params): Query<ListParams>,
) -> Result<Json<Value>, ApiError> {
    let index = state.site.pages().service_index().await?;
    let q = params.to_query::<crate::pages::ServiceCard>("");
    let mut response = listing(&index.cards, &q, json!({}));
    if let Value::Object(body) = &mut response.0 {
        body.insert(
            "featured".to_string(),
            serde_json::to_value(&index.featured).unwrap_or(Value::Null),
        );
    }
    Ok(response)
}

async fn service_handler(
    State(state): State<SharedState>,
    Path(slug): Path<String>,
) -> ApiResult<ServiceDetail> {
    found(state.site.pages().service_detail(&slug).await?, &slug)
}

async fn paths_handler(State(state): State<SharedState>) -> ApiResult<Vec<String>> {
    Ok(Json(state.site.pages().all_paths().await?))
}

async fn fallback_handler() -> Response {
    ApiError::NotFound("route".to_string()).into_response()
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::Uri;
    use std::fs;
    use tempfile::TempDir;

    fn state() -> (TempDir, SharedState) {
        let tmp = TempDir::new().unwrap();
        let content = tmp.path().join("content");
        fs::create_dir_all(content.join("blogs/forest-growth")).unwrap();
        fs::create_dir_all(content.join("blogs/draft")).unwrap();
        fs::create_dir_all(content.join("projects")).unwrap();
        fs::write(
            content.join("blogs/forest-growth/index.yaml"),
            "title: Forest Growth\nstatus: published\ncategory: Stories\n",
        )
        .unwrap();
        fs::write(content.join("blogs/draft/index.yaml"), "title: Draft\n").unwrap();
        fs::write(
            content.join("projects/a.yaml"),
            "title: A\nstatus: ongoing\ndistrict: Kigali\n",
        )
        .unwrap();
        fs::write(
            content.join("projects/b.yaml"),
            "title: B\nstatus: completed\ndistrict: Huye\n",
        )
        .unwrap();
        let site = Site::new(tmp.path()).unwrap();
        (tmp, Arc::new(ServerState { site }))
    }

    fn params(uri: &str) -> Query<ListParams> {
        Query::try_from_uri(&uri.parse::<Uri>().unwrap()).unwrap()
    }

    #[tokio::test]
    async fn test_blog_endpoints() {
        let (_tmp, state) = state();

        let Json(body) = blogs_handler(State(state.clone()), params("/api/blogs?search=forest"))
            .await
            .unwrap();
        assert_eq!(body["summary"], "1 of 2");
        assert_eq!(body["items"][0]["slug"], "forest-growth");
        assert_eq!(body["facets"]["category"][0], "Stories");

        let detail = blog_handler(State(state.clone()), Path("forest-growth".to_string())).await;
        assert!(detail.is_ok());

        let err = blog_handler(State(state), Path("draft".to_string()))
            .await
            .unwrap_err();
        assert!(matches!(&err, ApiError::NotFound(slug) if slug == "draft"));
        assert_eq!(err.into_response().status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_project_filters() {
        let (_tmp, state) = state();

        let Json(body) = projects_handler(State(state.clone()), params("/api/projects?status=ongoing"))
            .await
            .unwrap();
        assert_eq!(body["shown"], 1);
        assert_eq!(body["items"][0]["slug"], "a");
        assert!(body["featured"].is_array());

        let Json(body) = projects_handler(
            State(state.clone()),
            params("/api/projects?district=all&colour=red"),
        )
        .await
        .unwrap();
        assert_eq!(body["shown"], 2);

        let err = home_handler(State(state)).await.unwrap_err();
        assert_eq!(err.into_response().status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_chrome_and_paths() {
        let (_tmp, state) = state();

        let Json(chrome) = chrome_handler(State(state.clone())).await.unwrap();
        assert_eq!(chrome.header.site_name, "Forest4Life");

        let Json(paths) = paths_handler(State(state)).await.unwrap();
        assert_eq!(
            paths,
            vec!["/blog/draft", "/blog/forest-growth", "/project/a", "/project/b"]
        );

        assert_eq!(fallback_handler().await.status(), StatusCode::NOT_FOUND);
    }
}
