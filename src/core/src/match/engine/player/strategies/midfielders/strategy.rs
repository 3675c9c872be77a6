use crate::r#match::midfielders::MidfielderState;
use crate::r#match::{MatchPlayer, PlayerState, PlayerTickContext};

pub struct MidfielderStrategy;

impl MidfielderStrategy {
    /// Midfielders only track their mode. None of the modes moves the player
    /// yet, so waypoints come from kickoff scripting or debug input.
    pub fn process(player: &mut MatchPlayer, ctx: &mut PlayerTickContext<'_>) {
        let mode = MidfielderState::from_ball_distance(player.distance_from(ctx.ball.position));
        player.change_state(PlayerState::Midfielder(mode));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::r#match::{
        Ball, MatchConfig, MatchField, MatchObjectsPositions, MatchStage, MovableEntity,
        PlayerSide, Tuning,
    };
    use crate::shared::Vector2D;

    #[test]
    fn test_modes_follow_ball_distance_without_moving() {
        let field = MatchField::from_config(&MatchConfig::default());
        let tuning = Tuning::new();
        let positions = MatchObjectsPositions::default();

        let mut player = MatchPlayer::midfielder(4, PlayerSide::Left);
        player.set_position(Vector2D::new(250.0, 300.0));

        for (ball_x, expected) in [
            (700.0, MidfielderState::WatchingFar),
            (450.0, MidfielderState::Watching),
            (300.0, MidfielderState::OnTheOffence),
        ] {
            let mut ball = Ball::new(Vector2D::new(ball_x, 300.0));
            let mut ctx = PlayerTickContext {
                dt: 16.0,
                stage: MatchStage::Game,
                ball: &mut ball,
                positions: &positions,
                field: &field,
                tuning: &tuning,
            };

            MidfielderStrategy::process(&mut player, &mut ctx);

            assert_eq!(player.state, PlayerState::Midfielder(expected));
            assert_eq!(player.next_waypoint, None);
        }
    }
}
