use crate::calendar::{parse_iso, yesterday};
use crate::calendar_view::CalendarMonth;
use crate::errors::AppError;
use crate::leaderboard::LeaderboardEntry;
use crate::models::{
    ChallengeSummary, CheckInRequest, CreateChallengeRequest, JoinRequest, MonthQuery,
    StatsResponse, TodayResponse, ViewerQuery,
};
use crate::state::AppState;
use crate::store::ParticipantSummary;
use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use chrono::Datelike;

pub async fn get_today(State(state): State<AppState>) -> Json<TodayResponse> {
    let today = state.today();
    Json(TodayResponse {
        today,
        yesterday: yesterday(today),
    })
}

pub async fn list_challenges(
    State(state): State<AppState>,
    Query(query): Query<ViewerQuery>,
) -> Json<Vec<ChallengeSummary>> {
    let store = state.store.lock().await;
    let viewer = query.username.as_deref();
    Json(
        store
            .challenges()
            .iter()
            .map(|challenge| ChallengeSummary::from_challenge(challenge, viewer))
            .collect(),
    )
}

pub async fn create_challenge(
    State(state): State<AppState>,
    Json(payload): Json<CreateChallengeRequest>,
) -> Result<(StatusCode, Json<ChallengeSummary>), AppError> {
    let today = state.today();
    let mut store = state.store.lock().await;
    let challenge =
        store.create_challenge(&payload.creator, &payload.name, &payload.description, today)?;
    let summary = ChallengeSummary::from_challenge(challenge, Some(payload.creator.trim()));
    Ok((StatusCode::CREATED, Json(summary)))
}

pub async fn get_challenge(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Query(query): Query<ViewerQuery>,
) -> Result<Json<ChallengeSummary>, AppError> {
    let store = state.store.lock().await;
    let challenge = store.challenge(&id)?;
    Ok(Json(ChallengeSummary::from_challenge(
        challenge,
        query.username.as_deref(),
    )))
}

pub async fn join_challenge(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(payload): Json<JoinRequest>,
) -> Result<Json<StatsResponse>, AppError> {
    let today = state.today();
    let mut store = state.store.lock().await;
    let participant = store.join_challenge(&id, &payload.username)?;
    Ok(Json(StatsResponse::new(
        participant.username().to_string(),
        None,
        participant.stats(today),
    )))
}

pub async fn check_in(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(payload): Json<CheckInRequest>,
) -> Result<Json<StatsResponse>, AppError> {
    apply_check_in(&state, &id, payload, CheckInAction::Add).await
}

pub async fn undo_check_in(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(payload): Json<CheckInRequest>,
) -> Result<Json<StatsResponse>, AppError> {
    apply_check_in(&state, &id, payload, CheckInAction::Remove).await
}

pub async fn get_leaderboard(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Vec<LeaderboardEntry>>, AppError> {
    let today = state.today();
    let store = state.store.lock().await;
    Ok(Json(store.ranked_participants(&id, today)?))
}

pub async fn get_participant(
    State(state): State<AppState>,
    Path((id, username)): Path<(String, String)>,
) -> Result<Json<ParticipantSummary>, AppError> {
    let today = state.today();
    let store = state.store.lock().await;
    Ok(Json(store.participant_summary(&id, &username, today)?))
}

pub async fn get_calendar(
    State(state): State<AppState>,
    Path((id, username)): Path<(String, String)>,
    Query(query): Query<MonthQuery>,
) -> Result<Json<CalendarMonth>, AppError> {
    let today = state.today();
    let year = query.year.unwrap_or_else(|| today.year());
    let month = query.month.unwrap_or_else(|| today.month());
    let store = state.store.lock().await;
    Ok(Json(
        store.participant_calendar(&id, &username, year, month, today)?,
    ))
}

#[derive(Debug, Clone, Copy)]
enum CheckInAction {
    Add,
    Remove,
}

async fn apply_check_in(
    state: &AppState,
    id: &str,
    payload: CheckInRequest,
    action: CheckInAction,
) -> Result<Json<StatsResponse>, AppError> {
    let today = state.today();
    let date = parse_iso(&payload.date)?;
    state.ensure_in_window(date, today)?;

    let mut store = state.store.lock().await;
    let stats = match action {
        CheckInAction::Add => store.add_check_in(id, &payload.username, &payload.date, today)?,
        CheckInAction::Remove => {
            store.remove_check_in(id, &payload.username, &payload.date, today)?
        }
    };

    Ok(Json(StatsResponse::new(payload.username, Some(date), stats)))
}
