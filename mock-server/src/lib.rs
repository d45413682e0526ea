use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::{header, StatusCode},
    response::IntoResponse,
    routing::get,
    Json, Router,
};
use serde::{Deserialize, Serialize};
use tokio::net::TcpListener;

/// Prefix every route is mounted under, matching the client's default base URL.
pub const API_PREFIX: &str = "/api/v1";

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Exercise {
    pub id: u64,
    pub name: String,
    pub body_part: String,
    pub equipment: String,
    pub video_path: String,
}

/// Paginated collection body for `GET /exercises`.
#[derive(Debug, Serialize, Deserialize)]
pub struct ExercisePage {
    pub items: Vec<Exercise>,
    pub total: usize,
    pub limit: usize,
    pub offset: usize,
}

/// Bounded match list for `GET /search`; no total count.
#[derive(Debug, Serialize, Deserialize)]
pub struct SearchResults {
    pub items: Vec<Exercise>,
}

#[derive(Debug, Deserialize)]
pub struct ListQuery {
    #[serde(default = "default_list_limit")]
    pub limit: usize,
    #[serde(default)]
    pub offset: usize,
}

#[derive(Debug, Deserialize)]
pub struct SearchQuery {
    #[serde(default)]
    pub search: String,
    #[serde(default = "default_search_limit")]
    pub limit: usize,
}

fn default_list_limit() -> usize {
    20
}

fn default_search_limit() -> usize {
    50
}

pub type Db = Arc<Vec<Exercise>>;

pub fn app() -> Router {
    app_with(seed())
}

pub fn app_with(exercises: Vec<Exercise>) -> Router {
    let db: Db = Arc::new(exercises);
    let api = Router::new()
        .route("/exercises", get(list_exercises))
        .route("/exercises/{id}", get(get_exercise))
        .route("/search", get(search_exercises))
        .route("/videos/{*path}", get(stream_video))
        .with_state(db);
    Router::new().nest(API_PREFIX, api)
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    run_with(listener, seed()).await
}

/// Serve `exercises` instead of the seeded catalogue.
pub async fn run_with(listener: TcpListener, exercises: Vec<Exercise>) -> Result<(), std::io::Error> {
    axum::serve(listener, app_with(exercises)).await
}

/// Fixed catalogue served by `app()`.
pub fn seed() -> Vec<Exercise> {
    [
        (1, "Bodyweight Dips", "chest", "body weight", "branded/male-Bodyweight-dips-side.mp4"),
        (2, "Barbell Back Squat", "legs", "barbell", "branded/male-Barbell-back-squat-side.mp4"),
        (3, "Push Up", "chest", "body weight", "branded/male-Bodyweight-push-up-front.mp4"),
        (4, "Goblet Squat", "legs", "kettlebell", "branded/female-Kettlebell-goblet-squat-front.mp4"),
        (5, "Pull Up", "back", "body weight", "branded/male-Bodyweight-pull-up-front.mp4"),
    ]
    .into_iter()
    .map(|(id, name, body_part, equipment, video)| Exercise {
        id,
        name: name.to_string(),
        body_part: body_part.to_string(),
        equipment: equipment.to_string(),
        video_path: format!("/media/videos/{video}"),
    })
    .collect()
}

async fn list_exercises(State(db): State<Db>, Query(query): Query<ListQuery>) -> Json<ExercisePage> {
    let items = db
        .iter()
        .skip(query.offset)
        .take(query.limit)
        .cloned()
        .collect();
    Json(ExercisePage {
        items,
        total: db.len(),
        limit: query.limit,
        offset: query.offset,
    })
}

async fn search_exercises(
    State(db): State<Db>,
    Query(query): Query<SearchQuery>,
) -> Json<SearchResults> {
    let needle = query.search.to_lowercase();
    let items = db
        .iter()
        .filter(|e| e.name.to_lowercase().contains(&needle))
        .take(query.limit)
        .cloned()
        .collect();
    Json(SearchResults { items })
}

async fn get_exercise(
    State(db): State<Db>,
    Path(id): Path<u64>,
) -> Result<Json<Exercise>, StatusCode> {
    db.iter()
        .find(|e| e.id == id)
        .cloned()
        .map(Json)
        .ok_or(StatusCode::NOT_FOUND)
}

async fn stream_video(State(db): State<Db>, Path(path): Path<String>) -> impl IntoResponse {
    let known = db
        .iter()
        .any(|e| e.video_path.strip_prefix("/media/videos/") == Some(path.as_str()));
    if !known {
        return StatusCode::NOT_FOUND.into_response();
    }
    ([(header::CONTENT_TYPE, "video/mp4")], path).into_response()
}
