use std::net::SocketAddr;
use std::str::FromStr;
use std::sync::Arc;

use anyhow::{Context, Result};
use axum::extract::{Path, Query, State};
use axum::http::{StatusCode, Uri};
use axum::response::{Html, IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Form, Json, Router};
use serde::{Deserialize, Serialize};
use tower_http::cors::{Any, CorsLayer};
use tracing::{debug, info, warn};

use crate::catalog::{Catalog, SolutionRecord};
use crate::config::Config;
use crate::contact::{endpoint_from_config, ContactForm, SubmissionEndpoint, SubmissionOutcome};
use crate::finder::{Facet, FacetOptions, FilterState, TierFilter};
use crate::navigation::Page;
use crate::render::{render_contact_result, render_not_found, render_page, PageView};
use crate::session::{Action, Effect, Session};

#[derive(Clone)]
struct AppState {
    config: Arc<Config>,
    catalog: &'static Catalog,
    contact: Arc<dyn SubmissionEndpoint>,
}

#[derive(Debug, Serialize)]
struct ApiResponse<T: Serialize> {
    ok: bool,
    data: T,
}

#[derive(Debug, Serialize)]
struct ApiErrorBody {
    ok: bool,
    error: String,
}

#[derive(Debug)]
struct ApiError {
    status: StatusCode,
    message: String,
}

impl ApiError {
    fn bad_request(message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            message: message.into(),
        }
    }

    fn not_found(message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::NOT_FOUND,
            message: message.into(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = Json(ApiErrorBody {
            ok: false,
            error: self.message,
        });
        (self.status, body).into_response()
    }
}

type ApiResult<T> = std::result::Result<Json<ApiResponse<T>>, ApiError>;

/// Query parameters understood by the Solutions page. `need` and `open` are
/// the carried parameters of the entry transition.
#[derive(Debug, Clone, Default, Deserialize)]
struct SiteQuery {
    q: Option<String>,
    tier: Option<String>,
    industry: Option<String>,
    need: Option<String>,
    open: Option<String>,
    media: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
struct SolutionsQuery {
    q: Option<String>,
    tier: Option<String>,
    industry: Option<String>,
    need: Option<String>,
}

#[derive(Debug, Deserialize)]
struct SessionRequest {
    #[serde(default)]
    session: Option<Session>,
    action: Action,
}

#[derive(Debug, Serialize)]
struct HealthResponse {
    status: &'static str,
    version: &'static str,
}

#[derive(Debug, Serialize)]
struct SolutionsResponse {
    count: usize,
    solutions: Vec<SolutionRecord>,
}

#[derive(Debug, Serialize)]
struct SessionResponse {
    session: Session,
    effects: Vec<Effect>,
    visible: Vec<String>,
}

pub fn router(config: Config) -> Result<Router> {
    let contact: Arc<dyn SubmissionEndpoint> = Arc::from(endpoint_from_config(&config.contact)?);
    let state = AppState {
        config: Arc::new(config),
        catalog: Catalog::shared(),
        contact,
    };

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Ok(Router::new()
        .route("/", get(index))
        .route("/health", get(health))
        .route("/contact", get(contact_page).post(submit_contact))
        .route("/:page", get(site_page))
        .route("/api/config", get(show_config))
        .route("/api/options", get(options))
        .route("/api/solutions", get(list_solutions))
        .route("/api/solutions/:id", get(show_solution))
        .route("/api/session", post(session_action))
        .fallback(not_found)
        .layer(cors)
        .with_state(state))
}

pub async fn run_server(config: Config, bind: SocketAddr) -> Result<()> {
    let app = router(config)?;
    let listener = tokio::net::TcpListener::bind(bind)
        .await
        .with_context(|| format!("failed binding {bind}"))?;
    info!("site listening on http://{bind}");
    axum::serve(listener, app).await?;
    Ok(())
}

/// Replays a page request as session transitions, starting from a fresh
/// session on the home page.
fn session_for(catalog: &Catalog, page: Page, query: SiteQuery) -> Session {
    let mut session = Session::new(catalog, Page::Home);
    if page != Page::Solutions {
        session.dispatch(catalog, Action::Navigate { page });
        return session;
    }

    session.dispatch(
        catalog,
        Action::PickNeed {
            need: query.need.unwrap_or_default(),
        },
    );
    if let Some(text) = query.q {
        session.dispatch(catalog, Action::SetQuery { query: text });
    }
    if let Some(raw) = query.tier {
        match TierFilter::from_str(&raw) {
            Ok(tier) => {
                session.dispatch(catalog, Action::SetTier { tier });
            }
            Err(err) => debug!("ignoring tier filter: {err}"),
        }
    }
    if let Some(industry) = query.industry {
        session.dispatch(
            catalog,
            Action::SetIndustry {
                industry: Facet::from(industry),
            },
        );
    }
    if let Some(id) = query.open {
        session.dispatch(catalog, Action::OpenSolution { id });
        if let Some(position) = query.media.and_then(|m| m.trim().parse::<usize>().ok()) {
            session.dispatch(catalog, Action::SeekMedia { position });
        }
    }
    session
}

fn render(state: &AppState, page: Page, query: SiteQuery) -> Html<String> {
    let session = session_for(state.catalog, page, query);
    Html(render_page(&PageView {
        site: &state.config.site,
        catalog: state.catalog,
        session: &session,
    }))
}

async fn index(State(state): State<AppState>, Query(query): Query<SiteQuery>) -> Html<String> {
    render(&state, state.config.site.initial_page, query)
}

async fn contact_page(State(state): State<AppState>) -> Html<String> {
    render(&state, Page::Contact, SiteQuery::default())
}

async fn site_page(
    State(state): State<AppState>,
    Path(slug): Path<String>,
    Query(query): Query<SiteQuery>,
) -> Response {
    match Page::from_str(&slug) {
        Ok(page) => render(&state, page, query).into_response(),
        Err(err) => {
            debug!("{err}");
            page_not_found(&state, &format!("/{slug}"))
        }
    }
}

async fn not_found(State(state): State<AppState>, uri: Uri) -> Response {
    page_not_found(&state, uri.path())
}

fn page_not_found(state: &AppState, path: &str) -> Response {
    (
        StatusCode::NOT_FOUND,
        Html(render_not_found(&state.config.site, path)),
    )
        .into_response()
}

async fn submit_contact(
    State(state): State<AppState>,
    Form(form): Form<ContactForm>,
) -> Html<String> {
    let outcome = match state.contact.submit(&form).await {
        Ok(outcome) => outcome,
        Err(err) => {
            warn!("contact submission failed: {err:#}");
            SubmissionOutcome::Rejected {
                reason: "the submission endpoint could not be reached".to_string(),
            }
        }
    };
    Html(render_contact_result(&state.config.site, &outcome))
}

async fn health() -> Json<ApiResponse<HealthResponse>> {
    ok(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
    })
}

async fn show_config(State(state): State<AppState>) -> Json<ApiResponse<Config>> {
    ok(state.config.as_ref().clone())
}

async fn options() -> Json<ApiResponse<FacetOptions>> {
    ok(FacetOptions::standard())
}

async fn list_solutions(
    State(state): State<AppState>,
    Query(query): Query<SolutionsQuery>,
) -> ApiResult<SolutionsResponse> {
    let tier = query
        .tier
        .as_deref()
        .map(TierFilter::from_str)
        .transpose()
        .map_err(|err| ApiError::bad_request(err.to_string()))?
        .unwrap_or_default();
    let filters = FilterState {
        query: query.q.unwrap_or_default(),
        tier,
        industry: Facet::from(query.industry),
        need: Facet::from(query.need),
    };
    let solutions: Vec<SolutionRecord> = crate::finder::filter(state.catalog.records(), &filters)
        .into_iter()
        .cloned()
        .collect();
    Ok(ok(SolutionsResponse {
        count: solutions.len(),
        solutions,
    }))
}

async fn show_solution(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<SolutionRecord> {
    state
        .catalog
        .by_id(&id)
        .cloned()
        .map(ok)
        .ok_or_else(|| ApiError::not_found(format!("unknown solution id: {id}")))
}

async fn session_action(
    State(state): State<AppState>,
    Json(request): Json<SessionRequest>,
) -> ApiResult<SessionResponse> {
    let catalog = state.catalog;
    let mut session = match request.session {
        Some(snapshot) => Session::restore(snapshot, catalog),
        None => Session::new(catalog, state.config.site.initial_page),
    };
    let effects = session.dispatch(catalog, request.action);
    let visible = session
        .visible(catalog)
        .iter()
        .map(|record| record.id.clone())
        .collect();
    Ok(ok(SessionResponse {
        session,
        effects,
        visible,
    }))
}

fn ok<T: Serialize>(data: T) -> Json<ApiResponse<T>> {
    Json(ApiResponse { ok: true, data })
}

#[cfg(test)]
mod tests {
    use axum::body::{to_bytes, Body};
    use axum::http::{header, Method, Request};
    use serde_json::{json, Value};
    use tower::ServiceExt;

    use super::*;

    fn app() -> Router {
        router(Config::default()).expect("router builds")
    }

    async fn send(request: Request<Body>) -> (StatusCode, String) {
        let response = app().oneshot(request).await.expect("response");
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("body");
        (status, String::from_utf8_lossy(&bytes).to_string())
    }

    async fn get(uri: &str) -> (StatusCode, String) {
        send(Request::builder().uri(uri).body(Body::empty()).expect("request")).await
    }

    async fn get_json(uri: &str) -> (StatusCode, Value) {
        let (status, body) = get(uri).await;
        (status, serde_json::from_str(&body).expect("json body"))
    }

    #[test]
    fn page_query_replays_carried_entry() {
        let session = session_for(
            Catalog::shared(),
            Page::Solutions,
            SiteQuery {
                need: Some("Reminders".to_string()),
                ..SiteQuery::default()
            },
        );
        assert_eq!(session.filters, FilterState::seeded(Some("Reminders")));
        assert!(!session.viewer.is_open());

        let session = session_for(
            Catalog::shared(),
            Page::Solutions,
            SiteQuery {
                open: Some("ai-receptionist".to_string()),
                media: Some("2".to_string()),
                tier: Some("bogus".to_string()),
                ..SiteQuery::default()
            },
        );
        assert_eq!(session.viewer.open_id(), Some("ai-receptionist"));
        assert_eq!(session.viewer.carousel().index(), Some(2));
        assert_eq!(session.filters.tier, TierFilter::All);
        assert_eq!(session.listeners.active_count(), 1);
    }

    #[test]
    fn other_pages_ignore_finder_params() {
        let session = session_for(
            Catalog::shared(),
            Page::About,
            SiteQuery {
                open: Some("ai-receptionist".to_string()),
                ..SiteQuery::default()
            },
        );
        assert_eq!(session.page(), Page::About);
        assert!(!session.viewer.is_open());
    }

    #[tokio::test]
    async fn health_answers() {
        let (status, body) = get_json("/health").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["ok"], true);
        assert_eq!(body["data"]["status"], "ok");
    }

    #[tokio::test]
    async fn home_page_renders() {
        let (status, body) = get("/").await;
        assert_eq!(status, StatusCode::OK);
        assert!(body.contains("What are you trying to fix right now?"));
    }

    #[tokio::test]
    async fn need_link_filters_finder() {
        let (status, body) = get("/solutions?need=Missed%20Calls").await;
        assert_eq!(status, StatusCode::OK);
        assert!(body.contains("Showing <strong>1</strong> solutions"));
        assert!(body.contains("Missed-Call Recovery System"));
        assert!(body.contains(r#"<a class="pill pill-active" href="/solutions?need=Missed%20Calls">Missed Calls</a>"#));
    }

    #[tokio::test]
    async fn open_link_renders_modal_with_escape_hook() {
        let (status, body) = get("/solutions?open=whatsapp-busy-pack").await;
        assert_eq!(status, StatusCode::OK);
        assert!(body.contains("modal-card"));
        assert!(body.contains("MINI SOLUTION"));
        assert!(body.contains("<script>"));
    }

    #[tokio::test]
    async fn unknown_page_is_404_html() {
        let (status, body) = get("/pricing").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert!(body.contains("Page not found"));

        let (status, _) = get("/a/b/c").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn api_lists_filtered_solutions() {
        let (status, body) = get_json("/api/solutions?tier=Mini").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["data"]["count"], 2);
        assert_eq!(body["data"]["solutions"][0]["id"], "whatsapp-busy-pack");
        assert_eq!(body["data"]["solutions"][1]["id"], "sheets-airtable-tracker");

        let (status, body) = get_json("/api/solutions?q=WhatsApp").await;
        assert_eq!(status, StatusCode::OK);
        let ids: Vec<&str> = body["data"]["solutions"]
            .as_array()
            .expect("array")
            .iter()
            .filter_map(|s| s["id"].as_str())
            .collect();
        assert!(ids.contains(&"missed-call-recovery"));
        assert!(ids.contains(&"whatsapp-busy-pack"));
        assert!(!ids.contains(&"sheets-airtable-tracker"));
    }

    #[tokio::test]
    async fn api_rejects_unknown_tier() {
        let (status, body) = get_json("/api/solutions?tier=Mega").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["ok"], false);
    }

    #[tokio::test]
    async fn api_solution_lookup() {
        let (status, body) = get_json("/api/solutions/patient-checkins").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["data"]["tier"], "Major");

        let (status, body) = get_json("/api/solutions/nope").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["error"], "unknown solution id: nope");
    }

    #[tokio::test]
    async fn api_options_lists_facets() {
        let (status, body) = get_json("/api/options").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["data"]["tiers"], json!(["All", "Major", "Mini"]));
    }

    #[tokio::test]
    async fn session_endpoint_round_trips() {
        let request = Request::builder()
            .method(Method::POST)
            .uri("/api/session")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(
                json!({"action": {"type": "pick_need", "need": "Reminders"}}).to_string(),
            ))
            .expect("request");
        let (status, body) = send(request).await;
        assert_eq!(status, StatusCode::OK);
        let body: Value = serde_json::from_str(&body).expect("json");
        assert_eq!(body["data"]["effects"], json!([{"type": "scroll_to_top"}]));
        assert_eq!(body["data"]["visible"], json!(["reminders-confirmations"]));

        let snapshot = body["data"]["session"].clone();
        let request = Request::builder()
            .method(Method::POST)
            .uri("/api/session")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(
                json!({"session": snapshot, "action": {"type": "reset_filters"}}).to_string(),
            ))
            .expect("request");
        let (status, body) = send(request).await;
        assert_eq!(status, StatusCode::OK);
        let body: Value = serde_json::from_str(&body).expect("json");
        assert_eq!(body["data"]["visible"].as_array().map(Vec::len), Some(6));
        assert_eq!(body["data"]["session"]["navigation"]["current_page"], "solutions");
    }

    #[tokio::test]
    async fn contact_form_without_backend_reports_placeholder() {
        let request = Request::builder()
            .method(Method::POST)
            .uri("/contact")
            .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
            .body(Body::from("name=Dana&industry=Dentist&problem=Missed+calls"))
            .expect("request");
        let (status, body) = send(request).await;
        assert_eq!(status, StatusCode::OK);
        assert!(body.contains("Form not connected yet"));

        let (status, body) = get("/contact").await;
        assert_eq!(status, StatusCode::OK);
        assert!(body.contains(r#"action="/contact""#));
    }
}
