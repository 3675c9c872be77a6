use crate::r#match::PlayerSide;
use log::debug;
use serde::Serialize;
use std::fmt::{Display, Formatter};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum MatchStage {
    Kickoff,
    Game,
    Goal,
    GameOver,
}

impl MatchStage {
    /// Stages in which players take decisions and collide with walls.
    pub fn is_live(self) -> bool {
        matches!(self, MatchStage::Kickoff | MatchStage::Game)
    }
}

impl Display for MatchStage {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            MatchStage::Kickoff => "KICKOFF",
            MatchStage::Game => "GAME",
            MatchStage::Goal => "GOAL",
            MatchStage::GameOver => "GAME_OVER",
        };
        write!(f, "{}", label)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScheduledEvent {
    /// First kickoff step: the striker pair walks up to the ball.
    KickoffPositions,
    KickoffAdvance,
    StartGame,
    ResetAfterGoal { scoring: PlayerSide },
}

#[derive(Debug, Clone)]
struct PendingEvent {
    at: f64,
    seq: u64,
    event: ScheduledEvent,
}

/// Match stage plus the timed transitions waiting on the match clock.
pub struct StateManager {
    current_stage: MatchStage,
    pending: Vec<PendingEvent>,
    next_seq: u64,
}

impl Default for StateManager {
    fn default() -> Self {
        Self::new()
    }
}

impl StateManager {
    pub fn new() -> Self {
        StateManager {
            current_stage: MatchStage::Kickoff,
            pending: Vec::new(),
            next_seq: 0,
        }
    }

    pub fn current(&self) -> MatchStage {
        self.current_stage
    }

    pub fn set(&mut self, stage: MatchStage) {
        if self.current_stage != stage {
            debug!("match stage {} -> {}", self.current_stage, stage);
        }
        self.current_stage = stage;
    }

    pub fn schedule(&mut self, at: f64, event: ScheduledEvent) {
        self.pending.push(PendingEvent {
            at,
            seq: self.next_seq,
            event,
        });
        self.next_seq += 1;
    }

    /// Removes and returns the earliest event due at `now`. Events sharing a
    /// due time come out in scheduling order.
    pub fn pop_due(&mut self, now: f64) -> Option<ScheduledEvent> {
        let (idx, _) = self
            .pending
            .iter()
            .enumerate()
            .filter(|(_, pending)| pending.at <= now)
            .min_by(|(_, a), (_, b)| a.at.total_cmp(&b.at).then(a.seq.cmp(&b.seq)))?;

        Some(self.pending.remove(idx).event)
    }

    pub fn clear_pending(&mut self) {
        self.pending.clear();
    }

    pub fn pending_count(&self) -> usize {
        self.pending.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_state_manager_new() {
        let state_manager = StateManager::new();
        assert_eq!(state_manager.current(), MatchStage::Kickoff);
        assert_eq!(state_manager.pending_count(), 0);
    }

    #[test]
    fn test_events_wait_for_their_time() {
        let mut state_manager = StateManager::new();
        state_manager.schedule(1000.0, ScheduledEvent::StartGame);

        assert_eq!(state_manager.pop_due(999.0), None);
        assert_eq!(state_manager.pop_due(1000.0), Some(ScheduledEvent::StartGame));
        assert_eq!(state_manager.pop_due(5000.0), None);
    }

    #[test]
    fn test_events_fire_in_time_then_schedule_order() {
        let mut state_manager = StateManager::new();
        state_manager.schedule(300.0, ScheduledEvent::StartGame);
        state_manager.schedule(100.0, ScheduledEvent::KickoffAdvance);
        state_manager.schedule(100.0, ScheduledEvent::KickoffPositions);

        assert_eq!(
            state_manager.pop_due(500.0),
            Some(ScheduledEvent::KickoffAdvance)
        );
        assert_eq!(
            state_manager.pop_due(500.0),
            Some(ScheduledEvent::KickoffPositions)
        );
        assert_eq!(state_manager.pop_due(500.0), Some(ScheduledEvent::StartGame));
    }

    #[test]
    fn test_clear_pending() {
        let mut state_manager = StateManager::new();
        state_manager.schedule(0.0, ScheduledEvent::StartGame);
        state_manager.clear_pending();

        assert_eq!(state_manager.pop_due(10.0), None);
    }

    #[test]
    fn test_live_stages() {
        assert!(MatchStage::Kickoff.is_live());
        assert!(MatchStage::Game.is_live());
        assert!(!MatchStage::Goal.is_live());
        assert!(!MatchStage::GameOver.is_live());
    }
}
