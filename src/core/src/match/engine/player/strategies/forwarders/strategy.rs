use crate::r#match::forwarders::ForwardState;
use crate::r#match::{
    MatchPlayer, PlayerState, PlayerTickContext, DISTANCE_TILL_SHOOT, MOVE_TOWARDS_BALL_DISTANCE,
};
use crate::shared::{calculate_angle, Vector2D};
use log::debug;

const SHOT_FORCE: f32 = 4.0;
/// Distance the target is pushed towards goal per frame while dribbling.
const DRIBBLE_ADVANCE: f32 = 1.0;

pub struct ForwardStrategy;

impl ForwardStrategy {
    pub fn process(player: &mut MatchPlayer, ctx: &mut PlayerTickContext<'_>) {
        let goal = ctx.field.goal_entry_line(player.side.opposite()).center();

        if player.distance_from(goal) < ctx.tuning.read(&DISTANCE_TILL_SHOOT) {
            player.change_state(PlayerState::Forward(ForwardState::Shooting));
            Self::shoot_at_goal(player, goal, ctx);
        } else if player.distance_from(ctx.ball.position)
            < ctx.tuning.read(&MOVE_TOWARDS_BALL_DISTANCE)
        {
            player.change_state(PlayerState::Forward(ForwardState::ChasingBall));
            Self::move_towards_ball(player, goal, ctx);
        } else {
            player.change_state(PlayerState::Forward(ForwardState::Positioning));

            if Self::should_pass(player) {
                debug!("forward #{} looking for a pass", player.index);
            }
        }
    }

    fn shoot_at_goal(player: &MatchPlayer, goal: Vector2D, ctx: &mut PlayerTickContext<'_>) {
        let direction = calculate_angle(player.position, goal);

        debug!("forward #{} shoots at {}", player.index, goal);
        ctx.ball.kick(Vector2D::from_direction(direction, SHOT_FORCE));
    }

    fn move_towards_ball(player: &mut MatchPlayer, goal: Vector2D, ctx: &PlayerTickContext<'_>) {
        if !player.is_dribbling {
            player.set_next_waypoint(ctx.ball.position);
            return;
        }

        if let Some(waypoint) = player.next_waypoint {
            let direction = calculate_angle(player.position, goal);
            player.set_next_waypoint(waypoint + Vector2D::from_direction(direction, DRIBBLE_ADVANCE));
        }
    }

    /// Passing is not modelled; forwards never give the ball away.
    fn should_pass(_player: &MatchPlayer) -> bool {
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::r#match::{
        Ball, MatchConfig, MatchField, MatchObjectsPositions, MatchStage, MovableEntity,
        PlayerSide, Tuning,
    };

    fn process(player: &mut MatchPlayer, ball: &mut Ball, tuning: &Tuning) {
        let field = MatchField::from_config(&MatchConfig::default());
        let positions = MatchObjectsPositions::default();

        let mut ctx = PlayerTickContext {
            dt: 16.0,
            stage: MatchStage::Game,
            ball,
            positions: &positions,
            field: &field,
            tuning,
        };

        ForwardStrategy::process(player, &mut ctx);
    }

    fn forward_at(side: PlayerSide, x: f32, y: f32) -> MatchPlayer {
        let mut forward = MatchPlayer::forward(10, side);
        forward.set_position(Vector2D::new(x, y));
        forward
    }

    #[test]
    fn test_shoots_when_close_to_goal() {
        let mut forward = forward_at(PlayerSide::Left, 840.0, 322.5);
        let mut ball = Ball::new(Vector2D::new(400.0, 300.0));

        process(&mut forward, &mut ball, &Tuning::new());

        assert_eq!(forward.state, PlayerState::Forward(ForwardState::Shooting));
        assert!((ball.velocity.x - 4.0).abs() < 1e-4);
        assert!(ball.velocity.y.abs() < 1e-4);
    }

    #[test]
    fn test_right_side_shoots_at_left_goal() {
        let mut forward = forward_at(PlayerSide::Right, 100.0, 322.5);
        let mut ball = Ball::new(Vector2D::new(400.0, 300.0));

        process(&mut forward, &mut ball, &Tuning::new());

        assert!((ball.velocity.x + 4.0).abs() < 1e-4);
    }

    #[test]
    fn test_shoot_distance_is_tunable() {
        let mut forward = forward_at(PlayerSide::Left, 840.0, 322.5);
        let mut ball = Ball::new(Vector2D::new(400.0, 300.0));

        process(&mut forward, &mut ball, &Tuning::new().with("distanceTillShoot", 20.0));

        assert_ne!(forward.state, PlayerState::Forward(ForwardState::Shooting));
        assert_eq!(ball.velocity.x, 0.0);
    }

    #[test]
    fn test_chases_nearby_ball() {
        let mut forward = forward_at(PlayerSide::Left, 500.0, 300.0);
        let mut ball = Ball::new(Vector2D::new(550.0, 320.0));

        process(&mut forward, &mut ball, &Tuning::new());

        assert_eq!(forward.state, PlayerState::Forward(ForwardState::ChasingBall));
        assert_eq!(forward.next_waypoint, Some(Vector2D::new(550.0, 320.0)));
    }

    #[test]
    fn test_dribbling_pushes_waypoint_towards_goal() {
        let mut forward = forward_at(PlayerSide::Left, 500.0, 322.5);
        forward.is_dribbling = true;
        forward.set_next_waypoint(Vector2D::new(520.0, 322.5));
        let mut ball = Ball::new(Vector2D::new(515.0, 322.5));

        process(&mut forward, &mut ball, &Tuning::new());

        let waypoint = forward.next_waypoint.unwrap();
        assert!((waypoint.x - 521.0).abs() < 1e-4);
        assert!((waypoint.y - 322.5).abs() < 1e-4);
    }

    #[test]
    fn test_far_forward_holds_position() {
        let mut forward = forward_at(PlayerSide::Left, 200.0, 100.0);
        let mut ball = Ball::new(Vector2D::new(600.0, 500.0));

        process(&mut forward, &mut ball, &Tuning::new());

        assert_eq!(forward.state, PlayerState::Forward(ForwardState::Positioning));
        assert_eq!(forward.next_waypoint, None);
    }
}
