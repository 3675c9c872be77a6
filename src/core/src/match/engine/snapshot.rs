use crate::r#match::{Ball, MatchPlayer, MatchStage, PlayerRole, PlayerSide, Team, Tuning};
use crate::shared::Vector2D;
use serde::Serialize;

/// Read-only view of a frame for renderers and logs.
#[derive(Debug, Clone, Serialize)]
pub struct MatchSnapshot {
    pub stage: MatchStage,
    pub time_ms: f64,
    pub kickoff_team: PlayerSide,
    pub debug: bool,
    pub followed: Option<u32>,
    pub ball: BallSnapshot,
    pub teams: Vec<TeamSnapshot>,
}

#[derive(Debug, Clone, Serialize)]
pub struct BallSnapshot {
    pub position: Vector2D,
    pub velocity: Vector2D,
    pub radius: f32,
    pub in_goal: bool,
}

impl From<&Ball> for BallSnapshot {
    fn from(ball: &Ball) -> Self {
        BallSnapshot {
            position: ball.position,
            velocity: ball.velocity,
            radius: ball.radius,
            in_goal: ball.in_goal(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct TeamSnapshot {
    pub name: String,
    pub color: String,
    pub side: PlayerSide,
    pub team_id: u32,
    pub score: u32,
    pub in_possession: bool,
    pub players: Vec<PlayerSnapshot>,
}

impl TeamSnapshot {
    pub fn new(team: &Team, tuning: &Tuning) -> Self {
        TeamSnapshot {
            name: team.name().to_string(),
            color: team.color().to_string(),
            side: team.side(),
            team_id: team.team_id(),
            score: team.score(),
            in_possession: team.in_possession(),
            players: team
                .players()
                .iter()
                .map(|p| PlayerSnapshot::new(p, tuning))
                .collect(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct PlayerSnapshot {
    pub index: u32,
    pub role: PlayerRole,
    pub mode: String,
    pub position: Vector2D,
    pub velocity: Vector2D,
    pub facing: f32,
    pub radius: f32,
    pub waypoint: Option<Vector2D>,
    pub is_dribbling: bool,
    pub ranges: Vec<f32>,
}

impl PlayerSnapshot {
    pub fn new(player: &MatchPlayer, tuning: &Tuning) -> Self {
        PlayerSnapshot {
            index: player.index,
            role: player.role(),
            mode: player.state.to_string(),
            position: player.position,
            velocity: player.velocity,
            facing: player.facing,
            radius: player.radius,
            waypoint: player.next_waypoint,
            is_dribbling: player.is_dribbling,
            ranges: player.role().debug_ranges(tuning),
        }
    }
}
