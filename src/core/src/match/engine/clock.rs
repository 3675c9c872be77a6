use std::time::Instant;

/// Frame time reported while paused, so single steps still move things a little.
pub const PAUSED_DELTA_MS: f32 = 0.1;

/// Wall-clock source for interactive stepping. The simulation itself only
/// ever sees the `dt` this hands out.
#[derive(Debug, Clone)]
pub struct FrameClock {
    last_update: Instant,
    paused: bool,
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::new()
    }
}

impl FrameClock {
    pub fn new() -> Self {
        FrameClock {
            last_update: Instant::now(),
            paused: false,
        }
    }

    pub fn pause(&mut self) {
        self.paused = true;
    }

    pub fn resume(&mut self) {
        self.paused = false;
        self.last_update = Instant::now();
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    /// Milliseconds since the last [`FrameClock::mark`].
    pub fn delta(&self) -> f32 {
        if self.paused {
            return PAUSED_DELTA_MS;
        }

        self.last_update.elapsed().as_secs_f32() * 1000.0
    }

    pub fn mark(&mut self) {
        self.last_update = Instant::now();
    }
}
