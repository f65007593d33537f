//! HTTP surface: roadmap, lesson pages and the goal form.

use std::net::SocketAddr;
use std::sync::Arc;

use axum::Router;
use axum::extract::{Form, Path, RawQuery, State};
use axum::http::{StatusCode, Uri};
use axum::response::{Html, IntoResponse, Response};
use axum::routing::get;
use lesson_core::model::{Goal, GoalDraft};
use lesson_core::navigation::NavigationContext;
use serde::Deserialize;
use services::{Clock, GoalService, GoalServiceError, LessonCatalog, LessonService, SiteLinks};
use storage::repository::Storage;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;
use ui::vm::{GoalFormVm, NoticeVm};

#[derive(Clone)]
pub struct AppState {
    pub lessons: LessonService,
    pub goals: GoalService,
}

impl AppState {
    /// Served links, goals kept in `storage`.
    #[must_use]
    pub fn new(catalog: Arc<LessonCatalog>, storage: &Storage, clock: Clock) -> Self {
        Self {
            lessons: LessonService::new(catalog, SiteLinks::served()),
            goals: GoalService::new(clock, Arc::clone(&storage.goals)),
        }
    }
}

type SharedState = Arc<AppState>;

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(roadmap))
        .route("/lessons/{id}", get(lesson))
        .route("/goals", get(goal_page).post(create_goal))
        .route("/healthz", get(|| async { "ok" }))
        .fallback(fallback)
        .layer(TraceLayer::new_for_http())
        .with_state(Arc::new(state))
}

/// Bind `addr` and serve until Ctrl-C.
///
/// # Errors
///
/// Returns an I/O error if the address cannot be bound.
pub async fn serve(addr: SocketAddr, state: AppState) -> std::io::Result<()> {
    let listener = TcpListener::bind(addr).await?;
    tracing::info!(%addr, "serving lessons");
    axum::serve(listener, router(state))
        .with_graceful_shutdown(shutdown_signal())
        .await
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::warn!(error = %err, "ctrl-c handler failed");
    }
}

fn navigation(query: Option<&str>) -> NavigationContext {
    query.map_or_else(NavigationContext::none, NavigationContext::from_query)
}

// ─── LESSONS ───────────────────────────────────────────────────────────────

async fn roadmap(State(state): State<SharedState>, RawQuery(query): RawQuery) -> Html<String> {
    let nav = navigation(query.as_deref());
    Html(ui::render_roadmap_page(&state.lessons.roadmap_page(&nav)))
}

async fn lesson(
    State(state): State<SharedState>,
    Path(id): Path<String>,
    RawQuery(query): RawQuery,
) -> Response {
    let nav = navigation(query.as_deref());
    match state.lessons.page(&id, nav.clone()) {
        Ok(page) => Html(ui::render_lesson_page(&page)).into_response(),
        Err(err) => {
            tracing::debug!(%err, "lesson lookup failed");
            let back = state.lessons.links().return_href(&nav);
            (
                StatusCode::NOT_FOUND,
                Html(ui::render_not_found(&id, &back)),
            )
                .into_response()
        }
    }
}

async fn fallback(State(state): State<SharedState>, uri: Uri) -> Response {
    let nav = navigation(uri.query());
    let back = state.lessons.links().return_href(&nav);
    (
        StatusCode::NOT_FOUND,
        Html(ui::render_not_found(uri.path(), &back)),
    )
        .into_response()
}

// ─── GOALS ─────────────────────────────────────────────────────────────────

/// Fields posted by the goal form. Every field is optional on the wire so
/// that validation messages come from `GoalDraft`.
#[derive(Debug, Default, Deserialize)]
pub struct GoalFormInput {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub target_amount: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub linked_category: String,
    #[serde(default)]
    pub from: String,
}

impl GoalFormInput {
    fn nav(&self) -> NavigationContext {
        NavigationContext::from_token(Some(self.from.as_str()))
    }

    fn draft(&self) -> Result<GoalDraft, NoticeVm> {
        let target = self.target_amount.trim();
        let target_amount = if target.is_empty() {
            None
        } else {
            let cleaned: String = target.chars().filter(|c| !matches!(c, '$' | ',')).collect();
            Some(cleaned.parse::<f64>().map_err(|_| {
                NoticeVm::invalid("Target amount must be a number.")
            })?)
        };
        Ok(GoalDraft {
            name: self.name.clone(),
            target_amount,
            description: non_blank(&self.description),
            linked_category: non_blank(&self.linked_category),
        })
    }
}

fn non_blank(value: &str) -> Option<String> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_owned())
}

fn goal_form(
    state: &AppState,
    nav: &NavigationContext,
    input: Option<&GoalFormInput>,
    notice: Option<NoticeVm>,
) -> GoalFormVm {
    let links = state.lessons.links();
    GoalFormVm {
        action: links.goal_action.clone().unwrap_or_else(|| "/goals".to_owned()),
        from: nav.token().map(str::to_owned),
        name: input.map(|i| i.name.clone()).unwrap_or_default(),
        category: input.map(|i| i.linked_category.clone()).unwrap_or_default(),
        return_href: links.return_href(nav),
        notice,
    }
}

async fn saved_goals(state: &AppState) -> Vec<Goal> {
    match state.goals.list_goals().await {
        Ok(goals) => goals,
        Err(err) => {
            tracing::warn!(error = %err, "could not list goals");
            Vec::new()
        }
    }
}

async fn goal_page(State(state): State<SharedState>, RawQuery(query): RawQuery) -> Html<String> {
    let nav = navigation(query.as_deref());
    let goals = saved_goals(&state).await;
    Html(ui::render_goal_page(goal_form(&state, &nav, None, None), &goals))
}

async fn create_goal(
    State(state): State<SharedState>,
    Form(input): Form<GoalFormInput>,
) -> Response {
    let nav = input.nav();

    let draft = match input.draft() {
        Ok(draft) => draft,
        Err(notice) => {
            let goals = saved_goals(&state).await;
            let form = goal_form(&state, &nav, Some(&input), Some(notice));
            return (
                StatusCode::UNPROCESSABLE_ENTITY,
                Html(ui::render_goal_page(form, &goals)),
            )
                .into_response();
        }
    };

    let (status, form) = match state.goals.create_goal(draft).await {
        Ok(goal) => (
            StatusCode::CREATED,
            goal_form(&state, &nav, None, Some(NoticeVm::saved(goal.name()))),
        ),
        Err(GoalServiceError::Goal(err)) => (
            StatusCode::UNPROCESSABLE_ENTITY,
            goal_form(
                &state,
                &nav,
                Some(&input),
                Some(NoticeVm::invalid(capitalize(&err.to_string()))),
            ),
        ),
        Err(_) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            goal_form(&state, &nav, Some(&input), Some(NoticeVm::save_failed())),
        ),
    };

    let goals = saved_goals(&state).await;
    (status, Html(ui::render_goal_page(form, &goals))).into_response()
}

fn capitalize(message: &str) -> String {
    let mut chars = message.chars();
    match chars.next() {
        Some(first) => format!("{}{}.", first.to_uppercase(), chars.as_str()),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn state_serves_lessons_with_goal_form() {
        let catalog = Arc::new(LessonCatalog::builtin().unwrap());
        let state = AppState::new(catalog, &Storage::in_memory(), Clock::default_clock());
        assert_eq!(state.lessons.links(), &SiteLinks::served());
        assert!(state.lessons.catalog().get("debt-payoff").is_some());
    }

    #[test]
    fn blank_optional_fields_become_none() {
        let input = GoalFormInput {
            name: "Trip".into(),
            target_amount: " $1,500 ".into(),
            description: "  ".into(),
            ..GoalFormInput::default()
        };
        let draft = input.draft().unwrap();
        assert_eq!(draft.target_amount, Some(1_500.0));
        assert_eq!(draft.description, None);
        assert_eq!(draft.linked_category, None);
    }

    #[test]
    fn unparseable_target_is_rejected() {
        let input = GoalFormInput {
            name: "Trip".into(),
            target_amount: "lots".into(),
            ..GoalFormInput::default()
        };
        assert!(input.draft().is_err());
    }

    #[test]
    fn empty_token_means_no_navigation() {
        let input = GoalFormInput::default();
        assert!(!input.nav().is_present());
    }

    #[test]
    fn messages_are_sentence_cased() {
        assert_eq!(capitalize("goal name cannot be empty"), "Goal name cannot be empty.");
        assert_eq!(capitalize(""), "");
    }
}
