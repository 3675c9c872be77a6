use crate::r#match::player::state::{PlayerMatchState, PlayerRole, PlayerState};
use crate::r#match::{MovableEntity, PlayerTickContext, SteeringController};
use crate::shared::{calculate_angle, wrap_angle, Facing, Vector2D};
use log::trace;
use serde::Serialize;

pub const PLAYER_RADIUS: f32 = 10.0;
pub const MAX_STAMINA: f32 = 100.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum PlayerSide {
    Left,
    Right,
}

impl PlayerSide {
    pub fn opposite(self) -> PlayerSide {
        match self {
            PlayerSide::Left => PlayerSide::Right,
            PlayerSide::Right => PlayerSide::Left,
        }
    }

    pub fn team_id(self) -> u32 {
        match self {
            PlayerSide::Left => 1,
            PlayerSide::Right => 2,
        }
    }

    /// +1 when the side attacks towards growing x.
    pub fn attack_direction(self) -> f32 {
        match self {
            PlayerSide::Left => 1.0,
            PlayerSide::Right => -1.0,
        }
    }

    pub fn initial_facing(self) -> f32 {
        match self {
            PlayerSide::Left => Facing::RIGHT,
            PlayerSide::Right => Facing::LEFT,
        }
    }
}

#[derive(Debug, Clone)]
pub struct MatchPlayer {
    pub index: u32,
    pub side: PlayerSide,
    pub position: Vector2D,
    pub velocity: Vector2D,
    pub facing: f32,
    pub next_waypoint: Option<Vector2D>,
    pub stamina: f32,
    pub mass: Vector2D,
    pub radius: f32,
    pub state: PlayerState,
    pub in_state_time: u64,
    pub is_dribbling: bool,
    /// Formation slot assigned by the last formation reset.
    pub home_position: Vector2D,
    initial_position: Option<Vector2D>,
}

impl MatchPlayer {
    pub fn new(index: u32, side: PlayerSide, role: PlayerRole) -> Self {
        MatchPlayer {
            index,
            side,
            position: Vector2D::zero(),
            velocity: Vector2D::zero(),
            facing: side.initial_facing(),
            next_waypoint: None,
            stamina: MAX_STAMINA,
            mass: Vector2D::one().scale(20.0),
            radius: PLAYER_RADIUS,
            state: PlayerState::default_for(role),
            in_state_time: 0,
            is_dribbling: false,
            home_position: Vector2D::zero(),
            initial_position: None,
        }
    }

    pub fn goalkeeper(index: u32, side: PlayerSide) -> Self {
        Self::new(index, side, PlayerRole::Goalkeeper)
    }

    pub fn defender(index: u32, side: PlayerSide) -> Self {
        Self::new(index, side, PlayerRole::Defender)
    }

    pub fn midfielder(index: u32, side: PlayerSide) -> Self {
        Self::new(index, side, PlayerRole::Midfielder)
    }

    pub fn forward(index: u32, side: PlayerSide) -> Self {
        Self::new(index, side, PlayerRole::Forward)
    }

    pub fn role(&self) -> PlayerRole {
        self.state.role()
    }

    pub fn initial_position(&self) -> Option<Vector2D> {
        self.initial_position
    }

    pub fn update(&mut self, ctx: &mut PlayerTickContext<'_>) {
        SteeringController::process(self, ctx);
        PlayerMatchState::process(self, ctx);
    }

    pub fn set_next_waypoint(&mut self, waypoint: Vector2D) {
        self.next_waypoint = Some(waypoint);
    }

    pub fn clear_next_waypoint(&mut self) {
        self.next_waypoint = None;
    }

    pub fn update_facing(&mut self, direction: f32) {
        if direction.is_finite() {
            self.facing = wrap_angle(direction);
        }
    }

    pub fn point_towards(&mut self, target: Vector2D) {
        self.update_facing(calculate_angle(self.position, target));
    }

    pub fn distance_from(&self, point: Vector2D) -> f32 {
        self.position.distance(point)
    }

    pub fn is_point_over_me(&self, point: Vector2D) -> bool {
        self.distance_from(point) <= self.radius
    }

    pub fn change_state(&mut self, state: PlayerState) {
        if self.state != state {
            trace!("player #{} {} -> {}", self.index, self.state, state);
            self.state = state;
            self.in_state_time = 0;
        }
    }

    pub fn set_default_state(&mut self) {
        self.state = PlayerState::default_for(self.role());
        self.in_state_time = 0;
    }

    /// Places the player on its formation slot and drops any movement intent.
    pub fn reset_to(&mut self, home: Vector2D) {
        self.set_position(home);
        self.home_position = home;
        self.stop();
        self.clear_next_waypoint();
        self.is_dribbling = false;
        self.set_default_state();
    }
}

impl MovableEntity for MatchPlayer {
    fn position(&self) -> Vector2D {
        self.position
    }

    fn velocity(&self) -> Vector2D {
        self.velocity
    }

    fn set_position(&mut self, position: Vector2D) {
        if self.initial_position.is_none() {
            self.initial_position = Some(position);
        }
        self.position = position;
    }

    fn set_velocity(&mut self, velocity: Vector2D) {
        self.velocity = velocity;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::PI;

    #[test]
    fn test_initial_position_is_latched_once() {
        let mut player = MatchPlayer::midfielder(3, PlayerSide::Left);
        assert_eq!(player.initial_position(), None);

        player.set_position(Vector2D::new(10.0, 20.0));
        player.set_position(Vector2D::new(30.0, 40.0));

        assert_eq!(player.initial_position(), Some(Vector2D::new(10.0, 20.0)));
        assert_eq!(player.position, Vector2D::new(30.0, 40.0));
    }

    #[test]
    fn test_facing_is_wrapped() {
        let mut player = MatchPlayer::forward(1, PlayerSide::Right);
        assert_eq!(player.facing, PI);

        player.update_facing(-PI / 2.0);
        assert!((player.facing - 3.0 * PI / 2.0).abs() < 1e-5);

        player.update_facing(f32::NAN);
        assert!((player.facing - 3.0 * PI / 2.0).abs() < 1e-5);
    }

    #[test]
    fn test_point_over_me_uses_radius() {
        let mut player = MatchPlayer::defender(1, PlayerSide::Left);
        player.set_position(Vector2D::new(100.0, 100.0));

        assert!(player.is_point_over_me(Vector2D::new(110.0, 100.0)));
        assert!(!player.is_point_over_me(Vector2D::new(110.1, 100.0)));
    }

    #[test]
    fn test_reset_to_clears_movement() {
        let mut player = MatchPlayer::goalkeeper(1, PlayerSide::Left);
        player.velocity = Vector2D::new(1.0, 1.0);
        player.set_next_waypoint(Vector2D::new(5.0, 5.0));
        player.in_state_time = 40;

        player.reset_to(Vector2D::new(70.0, 322.5));

        assert!(player.velocity.is_zero());
        assert_eq!(player.next_waypoint, None);
        assert_eq!(player.home_position, Vector2D::new(70.0, 322.5));
        assert_eq!(player.in_state_time, 0);
    }

    #[test]
    fn test_side_helpers() {
        assert_eq!(PlayerSide::Left.opposite(), PlayerSide::Right);
        assert_eq!(PlayerSide::Left.team_id(), 1);
        assert_eq!(PlayerSide::Right.team_id(), 2);
        assert_eq!(PlayerSide::Right.attack_direction(), -1.0);
    }
}
