use crate::r#match::defenders::DefenderState;
use crate::r#match::{MatchPlayer, PlayerState, PlayerTickContext};
use crate::shared::Vector2D;

/// How far a defender drifts vertically from its slot while shadowing the ball.
const SHADOW_SPAN: f32 = 40.0;

pub struct DefenderStrategy;

impl DefenderStrategy {
    pub fn process(player: &mut MatchPlayer, ctx: &mut PlayerTickContext<'_>) {
        let ball = ctx.ball.position;

        let mode = DefenderState::from_ball_distance(player.distance_from(ball));
        player.change_state(PlayerState::Defender(mode));

        match mode {
            DefenderState::WatchingFar => {
                if player.in_state_time == 0 {
                    player.set_next_waypoint(player.home_position);
                }
            }
            DefenderState::Watching => {
                let home = player.home_position;
                let y = ball.y.clamp(home.y - SHADOW_SPAN, home.y + SHADOW_SPAN);

                player.set_next_waypoint(Vector2D::new(home.x, y));
            }
            DefenderState::Defensive => player.set_next_waypoint(ball),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::r#match::{
        Ball, MatchConfig, MatchField, MatchObjectsPositions, MatchStage, PlayerSide, Tuning,
    };

    fn process(player: &mut MatchPlayer, ball: &mut Ball) {
        let field = MatchField::from_config(&MatchConfig::default());
        let tuning = Tuning::new();
        let positions = MatchObjectsPositions::default();

        let mut ctx = PlayerTickContext {
            dt: 16.0,
            stage: MatchStage::Game,
            ball,
            positions: &positions,
            field: &field,
            tuning: &tuning,
        };

        DefenderStrategy::process(player, &mut ctx);
    }

    fn defender() -> MatchPlayer {
        let mut defender = MatchPlayer::defender(2, PlayerSide::Left);
        defender.reset_to(Vector2D::new(150.0, 200.0));
        defender
    }

    #[test]
    fn test_far_ball_returns_to_slot() {
        let mut defender = defender();
        defender.position = Vector2D::new(180.0, 230.0);
        let mut ball = Ball::new(Vector2D::new(700.0, 400.0));

        process(&mut defender, &mut ball);

        assert_eq!(defender.next_waypoint, Some(Vector2D::new(150.0, 200.0)));
    }

    #[test]
    fn test_watching_holds_line_and_shadows_ball() {
        let mut defender = defender();
        let mut ball = Ball::new(Vector2D::new(350.0, 400.0));

        process(&mut defender, &mut ball);

        assert_eq!(defender.state, PlayerState::Defender(DefenderState::Watching));
        assert_eq!(defender.next_waypoint, Some(Vector2D::new(150.0, 240.0)));
    }

    #[test]
    fn test_close_ball_is_attacked() {
        let mut defender = defender();
        let mut ball = Ball::new(Vector2D::new(200.0, 250.0));

        process(&mut defender, &mut ball);

        assert_eq!(defender.state, PlayerState::Defender(DefenderState::Defensive));
        assert_eq!(defender.next_waypoint, Some(Vector2D::new(200.0, 250.0)));
    }
}
