use crate::r#match::{MatchPlayer, PlayerSide};

/// Hands out player indices unique across both teams of a match.
#[derive(Debug, Clone)]
pub struct PlayerIndex {
    next: u32,
}

impl Default for PlayerIndex {
    fn default() -> Self {
        Self::new()
    }
}

impl PlayerIndex {
    pub fn new() -> Self {
        PlayerIndex { next: 1 }
    }

    pub fn next_index(&mut self) -> u32 {
        let index = self.next;
        self.next += 1;
        index
    }
}

impl Iterator for PlayerIndex {
    type Item = u32;

    fn next(&mut self) -> Option<u32> {
        Some(self.next_index())
    }
}

/// Squad-level brain of a team. It picks the ten outfield players; the team
/// adds the goalkeeper itself.
pub trait TeamController {
    fn players(&mut self, side: PlayerSide, index: &mut PlayerIndex) -> Vec<MatchPlayer>;

    fn update(&mut self, _dt: f32) {}
}

/// Plain 4-4-2 with no squad-level intent.
#[derive(Debug, Default)]
pub struct StandardController;

impl StandardController {
    pub fn new() -> Self {
        StandardController
    }
}

impl TeamController for StandardController {
    fn players(&mut self, side: PlayerSide, index: &mut PlayerIndex) -> Vec<MatchPlayer> {
        let mut players = Vec::with_capacity(10);

        players.extend(index.by_ref().take(4).map(|i| MatchPlayer::defender(i, side)));
        players.extend(index.by_ref().take(4).map(|i| MatchPlayer::midfielder(i, side)));
        players.extend(index.by_ref().take(2).map(|i| MatchPlayer::forward(i, side)));

        players
    }
}
