use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Named numeric knobs read by the simulation.
///
/// The core only ever reads from it. An absent or non-finite value falls back
/// to the knob's default; present values are clamped into the knob's range.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Tuning {
    overrides: HashMap<String, f32>,
}

impl Tuning {
    pub fn new() -> Self {
        Tuning::default()
    }

    pub fn with(mut self, name: &str, value: f32) -> Self {
        self.set(name, value);
        self
    }

    pub fn set(&mut self, name: &str, value: f32) {
        self.overrides.insert(name.to_string(), value);
    }

    /// An inverted or NaN `range` ignores the override.
    pub fn get(&self, name: &str, default: f32, range: (f32, f32)) -> f32 {
        if range.0.is_nan() || range.1.is_nan() || range.0 > range.1 {
            return default;
        }

        match self.overrides.get(name) {
            Some(value) if value.is_finite() => value.clamp(range.0, range.1),
            _ => default,
        }
    }

    pub fn read(&self, knob: &TuningKnob) -> f32 {
        self.get(knob.name, knob.default, knob.range)
    }
}

#[derive(Debug, Clone, Copy)]
pub struct TuningKnob {
    pub name: &'static str,
    pub default: f32,
    pub range: (f32, f32),
}

impl TuningKnob {
    pub const fn new(name: &'static str, default: f32, range: (f32, f32)) -> Self {
        TuningKnob {
            name,
            default,
            range,
        }
    }
}

/// Total width of the dribble cone, degrees.
pub const DRIBBLE_ANGLE: TuningKnob = TuningKnob::new("dribbleAngle", 90.0, (15.0, 180.0));
pub const BALL_IS_CLOSE_RANGE: TuningKnob = TuningKnob::new("ballIsCloseRange", 23.0, (1.0, 100.0));
pub const DRIBBLE_KICK_FORCE: TuningKnob = TuningKnob::new("dribbleKickForce", 1.0, (1.0, 10.0));
pub const DISTANCE_TILL_SHOOT: TuningKnob =
    TuningKnob::new("distanceTillShoot", 75.0, (10.0, 100.0));
pub const MOVE_TOWARDS_BALL_DISTANCE: TuningKnob =
    TuningKnob::new("moveTowardsBallDistance", 100.0, (10.0, 100.0));
pub const MID_OFFENCE_RANGE: TuningKnob = TuningKnob::new("midOffenceRange", 80.0, (10.0, 140.0));
