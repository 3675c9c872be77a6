use crate::r#match::goalkeepers::GoalkeeperState;
use crate::r#match::{MatchPlayer, PlayerState, PlayerTickContext};
use crate::shared::{calculate_angle, Vector2D};

/// How far inside the goalkeeper box the keeper stays while shadowing the ball.
const BOX_INSET: f32 = 10.0;
const ALERT_LERP: f32 = 0.1;
const CLEARANCE_FORCE: f32 = 4.0;

pub struct GoalkeeperStrategy;

impl GoalkeeperStrategy {
    pub fn process(player: &mut MatchPlayer, ctx: &mut PlayerTickContext<'_>) {
        let ball = ctx.ball.position;

        // keeper always watches the ball, whatever it is walking to
        player.point_towards(ball);

        let mode = GoalkeeperState::from_ball_distance(player.distance_from(ball));
        player.change_state(PlayerState::Goalkeeper(mode));

        match mode {
            GoalkeeperState::WatchingFar => Self::watch_from_far(player, ctx),
            GoalkeeperState::Watching => Self::watch_ball(player, ctx),
            GoalkeeperState::Alert => Self::alert(player, ctx),
            GoalkeeperState::Defensive => Self::defend(player, ctx),
        }
    }

    /// Back to the centre of the box, once per entry into the mode.
    fn watch_from_far(player: &mut MatchPlayer, ctx: &PlayerTickContext<'_>) {
        if player.in_state_time > 0 {
            return;
        }

        let center = ctx.field.goalkeeper_box(player.side).center();
        player.set_next_waypoint(center);
    }

    fn watch_ball(player: &mut MatchPlayer, ctx: &PlayerTickContext<'_>) {
        let area = ctx.field.goalkeeper_box(player.side);
        let top = area.top() + BOX_INSET;
        let bottom = area.bottom() - BOX_INSET;

        let y = ctx.ball.position.y.max(top).min(bottom);

        player.set_next_waypoint(Vector2D::new(player.position.x, y));
    }

    /// Stand on the line between the goal mouth and the ball.
    fn alert(player: &mut MatchPlayer, ctx: &PlayerTickContext<'_>) {
        let goal_center = ctx.field.goal_entry_line(player.side).center();
        let waypoint = goal_center.lerp(ctx.ball.position, ALERT_LERP);

        player.set_next_waypoint(waypoint);
    }

    fn defend(player: &mut MatchPlayer, ctx: &mut PlayerTickContext<'_>) {
        if player.is_dribbling {
            let target = ctx.field.goal_entry_line(player.side.opposite()).center();
            let direction = calculate_angle(player.position, target);

            ctx.ball.kick(Vector2D::from_direction(direction, CLEARANCE_FORCE));
        } else {
            player.set_next_waypoint(ctx.ball.position);
        }
    }
}
