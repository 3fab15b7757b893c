use axum::Json;
use axum::extract::State;
use serde::{Deserialize, Serialize};

use crate::gateway::Destination;
use crate::notify::event::TournamentEvent;

use super::state::AppState;

#[derive(Debug, Serialize)]
pub struct StatusResponse {
    pub status: String,
}

fn scheduled(status: &str) -> Json<StatusResponse> {
    Json(StatusResponse {
        status: status.to_string(),
    })
}

/// Root liveness endpoint; the frontend probes this once at boot.
pub async fn root() -> &'static str {
    "tournament notification service"
}

#[derive(Debug, Deserialize)]
pub struct TeamAssignRequest {
    pub player_name: String,
    pub team_id: String,
}

pub async fn assign_team(
    State(state): State<AppState>,
    Json(request): Json<TeamAssignRequest>,
) -> Json<StatusResponse> {
    state.dispatcher.notify(TournamentEvent::TeamAssignment {
        player: request.player_name,
        team_id: request.team_id,
    });
    scheduled("DM scheduled")
}

#[derive(Debug, Deserialize)]
pub struct MatchScheduledRequest {
    pub schedule: String,
}

pub async fn match_scheduled(
    State(state): State<AppState>,
    Json(request): Json<MatchScheduledRequest>,
) -> Json<StatusResponse> {
    state.dispatcher.notify(TournamentEvent::MatchScheduled {
        schedule: request.schedule,
    });
    scheduled("announcement scheduled")
}

#[derive(Debug, Deserialize)]
pub struct NotifyModeratorRequest {
    pub dispute_id: String,
}

pub async fn notify_moderator(
    State(state): State<AppState>,
    Json(request): Json<NotifyModeratorRequest>,
) -> Json<StatusResponse> {
    let moderator = state.dispatcher.moderator().to_string();
    state.dispatcher.notify(TournamentEvent::DisputeOpened {
        dispute_id: request.dispute_id,
        moderator,
    });
    scheduled("moderator notification scheduled")
}

#[derive(Debug, Deserialize)]
pub struct DisputeResolvedRequest {
    pub match_id: String,
    pub status: String,
}

pub async fn dispute_resolved(
    State(state): State<AppState>,
    Json(request): Json<DisputeResolvedRequest>,
) -> Json<StatusResponse> {
    state.dispatcher.notify(TournamentEvent::DisputeResolved {
        match_id: request.match_id,
        status: request.status,
    });
    scheduled("announcement scheduled")
}

#[derive(Debug, Deserialize)]
pub struct SendRequest {
    pub destination: Option<String>,
    pub message: String,
}

/// Raw pass-through for callers that already rendered their own message.
/// Destination defaults to the tournament channel.
pub async fn send(
    State(state): State<AppState>,
    Json(request): Json<SendRequest>,
) -> Json<StatusResponse> {
    let destination = request
        .destination
        .map(Destination::Channel)
        .unwrap_or_else(|| state.dispatcher.default_destination());
    state.dispatcher.send_message(destination, request.message);
    scheduled("message scheduled")
}
