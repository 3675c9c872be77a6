use crate::r#match::defenders::{DefenderState, DefenderStrategy};
use crate::r#match::forwarders::{ForwardState, ForwardStrategy};
use crate::r#match::goalkeepers::{GoalkeeperState, GoalkeeperStrategy};
use crate::r#match::midfielders::{MidfielderState, MidfielderStrategy};
use crate::r#match::{
    defenders, goalkeepers, midfielders, MatchPlayer, MatchStage, PlayerTickContext, Tuning,
    MID_OFFENCE_RANGE, MOVE_TOWARDS_BALL_DISTANCE,
};
use serde::Serialize;
use std::fmt::{Display, Formatter};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum PlayerRole {
    Goalkeeper,
    Defender,
    Midfielder,
    Forward,
}

impl PlayerRole {
    /// Goalkeepers also position themselves during kickoff; outfield roles
    /// only take decisions once play is running.
    pub fn acts_in(self, stage: MatchStage) -> bool {
        match self {
            PlayerRole::Goalkeeper => stage.is_live(),
            _ => stage == MatchStage::Game,
        }
    }

    /// Mode radii drawn around a hovered player, outermost first.
    pub fn debug_ranges(self, tuning: &Tuning) -> Vec<f32> {
        match self {
            PlayerRole::Goalkeeper => vec![
                goalkeepers::WATCHING_FAR_RANGE,
                goalkeepers::WATCHING_RANGE,
                goalkeepers::ALERT_RANGE,
            ],
            PlayerRole::Defender => vec![defenders::WATCHING_FAR_RANGE, defenders::WATCHING_RANGE],
            PlayerRole::Midfielder => vec![
                midfielders::WATCHING_FAR_RANGE,
                midfielders::WATCHING_RANGE,
                tuning.read(&MID_OFFENCE_RANGE),
            ],
            PlayerRole::Forward => vec![tuning.read(&MOVE_TOWARDS_BALL_DISTANCE)],
        }
    }
}

impl Display for PlayerRole {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            PlayerRole::Goalkeeper => write!(f, "Goalkeeper"),
            PlayerRole::Defender => write!(f, "Defender"),
            PlayerRole::Midfielder => write!(f, "Midfielder"),
            PlayerRole::Forward => write!(f, "Forward"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayerState {
    Goalkeeper(GoalkeeperState),
    Defender(DefenderState),
    Midfielder(MidfielderState),
    Forward(ForwardState),
}

impl PlayerState {
    pub fn default_for(role: PlayerRole) -> Self {
        match role {
            PlayerRole::Goalkeeper => PlayerState::Goalkeeper(GoalkeeperState::WatchingFar),
            PlayerRole::Defender => PlayerState::Defender(DefenderState::WatchingFar),
            PlayerRole::Midfielder => PlayerState::Midfielder(MidfielderState::WatchingFar),
            PlayerRole::Forward => PlayerState::Forward(ForwardState::Positioning),
        }
    }

    pub fn role(&self) -> PlayerRole {
        match self {
            PlayerState::Goalkeeper(_) => PlayerRole::Goalkeeper,
            PlayerState::Defender(_) => PlayerRole::Defender,
            PlayerState::Midfielder(_) => PlayerRole::Midfielder,
            PlayerState::Forward(_) => PlayerRole::Forward,
        }
    }
}

/// Mode label as shown in debug overlays, e.g. `WATCHING_FAR`.
impl Display for PlayerState {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        match self {
            PlayerState::Goalkeeper(state) => write!(f, "{}", state),
            PlayerState::Defender(state) => write!(f, "{}", state),
            PlayerState::Midfielder(state) => write!(f, "{}", state),
            PlayerState::Forward(state) => write!(f, "{}", state),
        }
    }
}

pub struct PlayerMatchState;

impl PlayerMatchState {
    pub fn process(player: &mut MatchPlayer, ctx: &mut PlayerTickContext<'_>) {
        if !player.role().acts_in(ctx.stage) {
            return;
        }

        match player.state {
            PlayerState::Goalkeeper(_) => GoalkeeperStrategy::process(player, ctx),
            PlayerState::Defender(_) => DefenderStrategy::process(player, ctx),
            PlayerState::Midfielder(_) => MidfielderStrategy::process(player, ctx),
            PlayerState::Forward(_) => ForwardStrategy::process(player, ctx),
        }

        player.in_state_time += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_states_match_roles() {
        for role in [
            PlayerRole::Goalkeeper,
            PlayerRole::Defender,
            PlayerRole::Midfielder,
            PlayerRole::Forward,
        ] {
            assert_eq!(PlayerState::default_for(role).role(), role);
        }
    }

    #[test]
    fn test_only_goalkeeper_acts_during_kickoff() {
        assert!(PlayerRole::Goalkeeper.acts_in(MatchStage::Kickoff));
        assert!(!PlayerRole::Forward.acts_in(MatchStage::Kickoff));
        assert!(PlayerRole::Forward.acts_in(MatchStage::Game));
        assert!(!PlayerRole::Goalkeeper.acts_in(MatchStage::Goal));
    }

    #[test]
    fn test_midfielder_ranges_read_offence_knob() {
        let tuning = Tuning::new().with("midOffenceRange", 120.0);

        assert_eq!(
            PlayerRole::Midfielder.debug_ranges(&tuning),
            vec![300.0, 150.0, 120.0]
        );
        assert_eq!(PlayerRole::Goalkeeper.debug_ranges(&tuning).len(), 3);
    }

    #[test]
    fn test_state_label() {
        let state = PlayerState::Goalkeeper(GoalkeeperState::WatchingFar);
        assert_eq!(state.to_string(), "WATCHING_FAR");
    }
}
