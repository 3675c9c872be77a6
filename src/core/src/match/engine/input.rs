use crate::shared::Vector2D;
use serde::{Deserialize, Serialize};

/// Debug input gathered by the host for one frame.
#[derive(Debug, Clone, Default)]
pub struct InputIntent {
    /// Pointer clicks in field coordinates, oldest first.
    pub clicks: Vec<Vector2D>,
    /// The debug kick key was released this frame.
    pub kick_key: bool,
}

impl InputIntent {
    pub fn new() -> Self {
        InputIntent::default()
    }

    pub fn click(mut self, point: Vector2D) -> Self {
        self.clicks.push(point);
        self
    }

    pub fn kick(mut self) -> Self {
        self.kick_key = true;
        self
    }

    pub fn is_empty(&self) -> bool {
        self.clicks.is_empty() && !self.kick_key
    }
}

/// Debug switches owned by the engine. They only change how input is handled
/// and what the overlays show, never the simulation itself.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DebugControls {
    pub enabled: bool,
    /// A click selects a player, later clicks send it somewhere.
    pub click_follow: bool,
    /// A click kicks the ball towards the pointer.
    pub click_kick: bool,
    pub followed: Option<u32>,
}

impl Default for DebugControls {
    fn default() -> Self {
        DebugControls {
            enabled: true,
            click_follow: true,
            click_kick: false,
            followed: None,
        }
    }
}

impl DebugControls {
    pub fn toggle(&mut self) {
        self.enabled = !self.enabled;
    }

    pub fn unfollow(&mut self) {
        self.followed = None;
    }
}
