use crate::r#match::Tuning;
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MatchConfig {
    /// Size of the display surface the field is laid out on.
    pub width: f32,
    pub height: f32,
    pub field: FieldConfig,
    pub formation: FormationConfig,
    pub tuning: Tuning,
}

impl Default for MatchConfig {
    fn default() -> Self {
        MatchConfig {
            width: 940.0,
            height: 645.0,
            field: FieldConfig::default(),
            formation: FormationConfig::default(),
            tuning: Tuning::default(),
        }
    }
}

impl MatchConfig {
    pub fn with_size(width: f32, height: f32) -> Self {
        MatchConfig {
            width,
            height,
            ..MatchConfig::default()
        }
    }

    pub fn with_tuning(mut self, tuning: Tuning) -> Self {
        self.tuning = tuning;
        self
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let values = [
            ("width", self.width),
            ("height", self.height),
            ("field.offset", self.field.offset),
            ("field.goal_line_height", self.field.goal_line_height),
            ("field.goal_line_depth", self.field.goal_line_depth),
            ("field.goal_depth", self.field.goal_depth),
        ];

        for (name, value) in values {
            if !value.is_finite() || value < 0.0 {
                return Err(ConfigError::InvalidValue(name, value));
            }
        }

        let inner_width = self.width - self.field.offset * 2.0;
        let inner_height = self.height - self.field.offset * 2.0;

        if inner_width <= 0.0 || inner_height <= 0.0 {
            return Err(ConfigError::FieldTooSmall {
                width: self.width,
                height: self.height,
                offset: self.field.offset,
            });
        }

        if self.field.goal_line_height > inner_height {
            return Err(ConfigError::InvalidValue(
                "field.goal_line_height",
                self.field.goal_line_height,
            ));
        }

        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FieldConfig {
    /// Margin between the surface edge and the field perimeter.
    pub offset: f32,
    /// Height of the goalkeeper box.
    pub goal_line_height: f32,
    /// Depth of the goalkeeper box.
    pub goal_line_depth: f32,
    /// Depth of the goal behind the goal line.
    pub goal_depth: f32,
}

impl Default for FieldConfig {
    fn default() -> Self {
        FieldConfig {
            offset: 50.0,
            goal_line_height: 150.0,
            goal_line_depth: 50.0,
            goal_depth: 30.0,
        }
    }
}

/// Distances from a team's own goal line used for the kickoff formation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FormationConfig {
    pub goalkeeper_start_offset: f32,
    pub defender_line: f32,
    pub midfielder_line: f32,
    pub forward_line: f32,
}

impl Default for FormationConfig {
    fn default() -> Self {
        FormationConfig {
            goalkeeper_start_offset: 20.0,
            defender_line: 100.0,
            midfielder_line: 200.0,
            forward_line: 300.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum ConfigError {
    InvalidValue(&'static str, f32),
    FieldTooSmall { width: f32, height: f32, offset: f32 },
}

impl Display for ConfigError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::InvalidValue(name, value) => {
                write!(f, "invalid value for {}: {}", name, value)
            }
            ConfigError::FieldTooSmall {
                width,
                height,
                offset,
            } => write!(
                f,
                "surface {}x{} leaves no playing field with offset {}",
                width, height, offset
            ),
        }
    }
}

impl Error for ConfigError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        assert_eq!(MatchConfig::default().validate(), Ok(()));
    }

    #[test]
    fn test_offset_larger_than_surface_is_rejected() {
        let mut config = MatchConfig::with_size(80.0, 80.0);
        config.field.offset = 50.0;

        assert!(matches!(
            config.validate(),
            Err(ConfigError::FieldTooSmall { .. })
        ));
    }

    #[test]
    fn test_negative_value_is_rejected() {
        let mut config = MatchConfig::default();
        config.field.goal_depth = -1.0;

        assert_eq!(
            config.validate(),
            Err(ConfigError::InvalidValue("field.goal_depth", -1.0))
        );
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let config: MatchConfig =
            serde_json::from_str(r#"{"width": 1000.0, "tuning": {"distanceTillShoot": 50.0}}"#)
                .unwrap();

        assert_eq!(config.width, 1000.0);
        assert_eq!(config.height, 645.0);
        assert_eq!(config.field, FieldConfig::default());
        assert_eq!(config.tuning.get("distanceTillShoot", 75.0, (10.0, 100.0)), 50.0);
    }
}
