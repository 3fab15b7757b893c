use crate::gateway::Destination;
use crate::notify::template::{self, TemplateError};

/// Tournament domain events that produce a notification. Each variant maps
/// to exactly one template and one destination scope.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TournamentEvent {
    TeamAssignment { player: String, team_id: String },
    MatchScheduled { schedule: String },
    DisputeOpened { dispute_id: String, moderator: String },
    DisputeResolved { match_id: String, status: String },
}

impl TournamentEvent {
    pub fn name(&self) -> &'static str {
        match self {
            TournamentEvent::TeamAssignment { .. } => "team_assignment",
            TournamentEvent::MatchScheduled { .. } => "match_scheduled",
            TournamentEvent::DisputeOpened { .. } => "dispute_opened",
            TournamentEvent::DisputeResolved { .. } => "dispute_resolved",
        }
    }

    pub fn render(&self) -> Result<String, TemplateError> {
        match self {
            TournamentEvent::TeamAssignment { player, team_id } => {
                template::TEAM_ASSIGNMENT.render(&[("player", player), ("teamId", team_id)])
            }
            TournamentEvent::MatchScheduled { schedule } => {
                template::MATCH_SCHEDULED.render(&[("schedule", schedule)])
            }
            TournamentEvent::DisputeOpened { dispute_id, .. } => {
                template::DISPUTE_OPENED.render(&[("disputeId", dispute_id)])
            }
            TournamentEvent::DisputeResolved { match_id, status } => {
                template::DISPUTE_RESOLVED.render(&[("matchId", match_id), ("status", status)])
            }
        }
    }

    /// Team assignments and dispute reviews go out as DMs; schedule and
    /// resolution announcements go to the tournament channel.
    pub fn destination(&self, tournament_channel: &str) -> Destination {
        match self {
            TournamentEvent::TeamAssignment { player, .. } => {
                Destination::Direct(player.clone())
            }
            TournamentEvent::MatchScheduled { .. } => {
                Destination::Channel(tournament_channel.to_string())
            }
            TournamentEvent::DisputeOpened { moderator, .. } => {
                Destination::Direct(moderator.clone())
            }
            TournamentEvent::DisputeResolved { .. } => {
                Destination::Channel(tournament_channel.to_string())
            }
        }
    }
}
