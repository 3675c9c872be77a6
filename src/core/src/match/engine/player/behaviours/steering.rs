use crate::r#match::{
    DribbleDetector, MatchObjectsPositions, MatchPlayer, MovableEntity, PlayerTickContext,
    BALL_IS_CLOSE_RANGE, DRIBBLE_KICK_FORCE,
};
use crate::shared::{calculate_angle, Vector2D};

const SEEK_SPEED: f32 = 60.0;
const SLOW_DOWN_DISTANCE: f32 = 50.0;
const SLOW_DOWN_SPEED: f32 = 30.0;

const AVOIDANCE_DISTANCE: f32 = 60.0;
/// Degrees.
const AVOIDANCE_ROTATION: f32 = 60.0;
const AVOIDANCE_SPEED: f32 = 60.0;

/// Movement core every player runs before its role logic: facing, dribble
/// detection, waypoint steering, corridor avoidance and separation.
pub struct SteeringController;

impl SteeringController {
    pub fn process(player: &mut MatchPlayer, ctx: &mut PlayerTickContext<'_>) {
        Self::update_facing(player, ctx.ball.position);

        player.is_dribbling = DribbleDetector::new(ctx.tuning).is_dribbling(
            player.position,
            player.facing,
            ctx.ball.position,
        );

        if let Some(waypoint) = player.next_waypoint {
            if player.position.rounded_eq(waypoint) {
                player.stop();
                player.clear_next_waypoint();
            } else {
                let dt_seconds = ctx.dt_seconds();

                let desired = Self::seek(player.position, waypoint, dt_seconds);
                Self::apply_steering_force(player, desired);
                Self::avoid_others(player, waypoint, ctx.positions, dt_seconds);
                Self::carry_ball(player, waypoint, ctx);
            }
        }

        Self::move_unless_blocked(player, ctx.positions);
    }

    fn update_facing(player: &mut MatchPlayer, ball: Vector2D) {
        if player.next_waypoint.is_none() {
            player.point_towards(ball);
        } else {
            player.update_facing(player.velocity.y.atan2(player.velocity.x));
        }
    }

    /// Desired velocity towards `target`, braking inside the slow-down radius.
    pub fn seek(position: Vector2D, target: Vector2D, dt_seconds: f32) -> Vector2D {
        let direction = (target - position).normalize_or_zero();
        let mut desired = direction.scale(SEEK_SPEED * dt_seconds);

        if position.distance(target) < SLOW_DOWN_DISTANCE && desired.magnitude() > 0.0 {
            desired += desired
                .reflect(desired.normalize())
                .scale(SLOW_DOWN_SPEED * dt_seconds);
        }

        desired
    }

    pub fn apply_steering_force(player: &mut MatchPlayer, desired: Vector2D) {
        let steering = (desired - player.velocity) / player.mass;
        let velocity = player.velocity + steering;

        if velocity.is_finite() {
            player.velocity = velocity;
        }
    }

    fn avoid_others(
        player: &mut MatchPlayer,
        waypoint: Vector2D,
        positions: &MatchObjectsPositions,
        dt_seconds: f32,
    ) {
        let nearby: Vec<Vector2D> = positions
            .others_within(player.index, player.position, AVOIDANCE_DISTANCE)
            .map(|other| other.position)
            .collect();

        if nearby.is_empty() {
            return;
        }

        let collision_radius = player.radius - 2.0;
        let Some(lines) = Self::corridor_lines(player.position, waypoint, collision_radius) else {
            return;
        };

        // each side of the corridor deflects at most once
        for (start, end) in lines {
            let blocked = nearby
                .iter()
                .any(|other| distance_to_segment(*other, start, end) <= collision_radius);

            if blocked {
                Self::deflect(player, dt_seconds);
            }
        }
    }

    /// The two edges of the strip swept by the player on its way to `end`.
    pub fn corridor_lines(
        start: Vector2D,
        end: Vector2D,
        half_width: f32,
    ) -> Option<[(Vector2D, Vector2D); 2]> {
        let travel = end - start;
        let length = travel.magnitude();

        if !length.is_finite() || length <= f32::EPSILON {
            return None;
        }

        let normal = Vector2D::new(-travel.y, travel.x).scale(half_width / length);

        Some([(start + normal, end + normal), (start - normal, end - normal)])
    }

    fn deflect(player: &mut MatchPlayer, dt_seconds: f32) {
        if player.velocity.magnitude() <= 0.0 {
            return;
        }

        let desired = player
            .velocity
            .rotate(AVOIDANCE_ROTATION)
            .normalize()
            .scale(AVOIDANCE_SPEED * dt_seconds);

        Self::apply_steering_force(player, desired);
    }

    fn carry_ball(player: &MatchPlayer, waypoint: Vector2D, ctx: &mut PlayerTickContext<'_>) {
        if !player.is_dribbling {
            return;
        }

        if player.distance_from(ctx.ball.position) < ctx.tuning.read(&BALL_IS_CLOSE_RANGE) {
            let direction = calculate_angle(player.position, waypoint);
            let force = ctx.tuning.read(&DRIBBLE_KICK_FORCE);

            ctx.ball.kick(Vector2D::from_direction(direction, force));
        }
    }

    fn move_unless_blocked(player: &mut MatchPlayer, positions: &MatchObjectsPositions) {
        if !player.velocity.is_finite() {
            return;
        }

        let candidate = player.position + player.velocity;

        if !Self::is_move_blocked(player, candidate, positions) {
            player.position = candidate;
        }
    }

    pub fn is_move_blocked(
        player: &MatchPlayer,
        candidate: Vector2D,
        positions: &MatchObjectsPositions,
    ) -> bool {
        positions
            .others(player.index)
            .any(|other| candidate.distance(other.position) < player.radius + other.radius)
    }
}

fn distance_to_segment(point: Vector2D, start: Vector2D, end: Vector2D) -> f32 {
    let segment = end - start;
    let to_point = point - start;

    let t = (to_point.dot(segment) / segment.dot(segment)).clamp(0.0, 1.0);
    let closest = start + segment.scale(t);

    (closest - point).magnitude()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::r#match::{
        Ball, MatchConfig, MatchField, MatchStage, PlayerPosition, PlayerSide, Tuning,
    };

    fn player_at(index: u32, x: f32, y: f32) -> MatchPlayer {
        let mut player = MatchPlayer::midfielder(index, PlayerSide::Left);
        player.set_position(Vector2D::new(x, y));
        player
    }

    fn positions_of(players: &[&MatchPlayer]) -> MatchObjectsPositions {
        MatchObjectsPositions {
            items: players.iter().map(|p| PlayerPosition::from(*p)).collect(),
        }
    }

    fn run(player: &mut MatchPlayer, ball: &mut Ball, positions: &MatchObjectsPositions) {
        let field = MatchField::from_config(&MatchConfig::default());
        let tuning = Tuning::new();

        let mut ctx = PlayerTickContext {
            dt: 16.0,
            stage: MatchStage::Game,
            ball,
            positions,
            field: &field,
            tuning: &tuning,
        };

        SteeringController::process(player, &mut ctx);
    }

    #[test]
    fn test_arrival_uses_rounded_equality() {
        let mut player = player_at(1, 10.4, 9.6);
        player.velocity = Vector2D::new(1.0, 1.0);
        player.set_next_waypoint(Vector2D::new(10.0, 10.0));

        let positions = positions_of(&[&player]);
        let mut ball = Ball::new(Vector2D::new(800.0, 500.0));

        run(&mut player, &mut ball, &positions);

        assert_eq!(player.next_waypoint, None);
        assert_eq!(player.velocity.x, 0.0);
        assert_eq!(player.velocity.y, 0.0);
        assert_eq!(player.position.x, 10.4);
        assert_eq!(player.position.y, 9.6);
    }

    #[test]
    fn test_seek_moves_player_towards_waypoint() {
        let mut player = player_at(1, 100.0, 100.0);
        player.set_next_waypoint(Vector2D::new(500.0, 100.0));

        let positions = positions_of(&[&player]);
        let mut ball = Ball::new(Vector2D::new(800.0, 500.0));

        run(&mut player, &mut ball, &positions);

        assert!((player.velocity.x - 0.048).abs() < 1e-5);
        assert!(player.position.x > 100.0);
        assert_eq!(player.position.y, 100.0);
    }

    #[test]
    fn test_seek_brakes_near_target() {
        let far = SteeringController::seek(Vector2D::zero(), Vector2D::new(100.0, 0.0), 0.016);
        let near = SteeringController::seek(Vector2D::zero(), Vector2D::new(40.0, 0.0), 0.016);

        assert!((far.x - 0.96).abs() < 1e-5);
        assert!(near.x < far.x);
        assert!(near.x > 0.0);
    }

    #[test]
    fn test_overlapping_move_is_rejected() {
        let mut player = player_at(1, 100.0, 100.0);
        player.velocity = Vector2D::new(2.0, 0.0);
        player.set_next_waypoint(Vector2D::new(500.0, 100.0));
        let blocker = player_at(2, 121.0, 100.0);

        let positions = positions_of(&[&player, &blocker]);
        let mut ball = Ball::new(Vector2D::new(800.0, 500.0));

        run(&mut player, &mut ball, &positions);

        assert_eq!(player.position.x, 100.0);
        assert_eq!(player.position.y, 100.0);
    }

    #[test]
    fn test_player_in_corridor_deflects_velocity() {
        let mut player = player_at(1, 100.0, 100.0);
        player.velocity = Vector2D::new(2.0, 0.0);
        player.set_next_waypoint(Vector2D::new(500.0, 100.0));
        let other = player_at(2, 150.0, 102.0);

        let positions = positions_of(&[&player, &other]);
        let mut ball = Ball::new(Vector2D::new(800.0, 500.0));

        run(&mut player, &mut ball, &positions);

        assert!(player.velocity.y > 0.0);
    }

    #[test]
    fn test_standing_player_is_not_deflected() {
        let mut player = player_at(1, 100.0, 100.0);
        let waypoint = Vector2D::new(500.0, 100.0);
        let other = player_at(2, 150.0, 102.0);

        let positions = positions_of(&[&player, &other]);

        SteeringController::avoid_others(&mut player, waypoint, &positions, 0.016);

        assert!(player.velocity.is_zero());
        assert!(player.velocity.is_finite());
    }

    #[test]
    fn test_corridor_lines_skip_zero_travel() {
        let point = Vector2D::new(5.0, 5.0);
        assert!(SteeringController::corridor_lines(point, point, 8.0).is_none());

        let lines =
            SteeringController::corridor_lines(Vector2D::zero(), Vector2D::new(10.0, 0.0), 8.0);
        let [(left_start, _), (right_start, _)] = lines.unwrap();
        assert_eq!(left_start.y, 8.0);
        assert_eq!(right_start.y, -8.0);
    }

    #[test]
    fn test_dribbling_player_carries_ball_to_waypoint() {
        let mut player = player_at(1, 100.0, 100.0);
        player.velocity = Vector2D::new(1.0, 0.0);
        player.set_next_waypoint(Vector2D::new(200.0, 100.0));

        let positions = positions_of(&[&player]);
        let mut ball = Ball::new(Vector2D::new(115.0, 100.0));

        run(&mut player, &mut ball, &positions);

        assert!(player.is_dribbling);
        assert!((ball.velocity.x - 1.0).abs() < 1e-5);
        assert!(ball.velocity.y.abs() < 1e-5);
    }

    #[test]
    fn test_idle_player_faces_ball() {
        let mut player = player_at(1, 100.0, 100.0);
        let positions = positions_of(&[&player]);
        let mut ball = Ball::new(Vector2D::new(100.0, 200.0));

        run(&mut player, &mut ball, &positions);

        assert!((player.facing - std::f32::consts::FRAC_PI_2).abs() < 1e-5);
    }
}
