use crate::r#match::{FieldConfig, MatchConfig, PlayerSide};
use crate::shared::{Rect, Vector2D};

/// Vertical segment of a goal line, the span a ball must fit inside to score.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GoalLine {
    pub top: Vector2D,
    pub bottom: Vector2D,
}

impl GoalLine {
    pub fn center(&self) -> Vector2D {
        self.top.middle_point(self.bottom)
    }

    pub fn x(&self) -> f32 {
        self.top.x
    }
}

#[derive(Debug, Clone)]
pub struct MatchField {
    pub width: f32,
    pub height: f32,
    config: FieldConfig,
}

impl MatchField {
    pub fn new(width: f32, height: f32, config: FieldConfig) -> Self {
        MatchField {
            width,
            height,
            config,
        }
    }

    pub fn from_config(config: &MatchConfig) -> Self {
        MatchField::new(config.width, config.height, config.field.clone())
    }

    pub fn offset(&self) -> f32 {
        self.config.offset
    }

    pub fn game_width(&self) -> f32 {
        self.width - 2.0 * self.config.offset
    }

    pub fn game_height(&self) -> f32 {
        self.height - 2.0 * self.config.offset
    }

    pub fn center(&self) -> Vector2D {
        Vector2D::new(self.width / 2.0, self.height / 2.0)
    }

    /// Playing area: the surface inset by the offset on every edge.
    pub fn bounds(&self) -> Rect {
        Rect::new(
            self.config.offset,
            self.config.offset,
            self.game_width(),
            self.game_height(),
        )
    }

    fn goal_line_y(&self) -> f32 {
        self.height / 2.0 - self.config.goal_line_height / 2.0
    }

    /// Goal mouth is two thirds of the goalkeeper box height.
    fn goal_height(&self) -> f32 {
        self.config.goal_line_height / 1.5
    }

    fn goal_y(&self) -> f32 {
        self.height / 2.0 - self.goal_height() / 2.0
    }

    pub fn goalkeeper_box(&self, side: PlayerSide) -> Rect {
        let x = match side {
            PlayerSide::Left => self.config.offset,
            PlayerSide::Right => self.width - self.config.offset - self.config.goal_line_depth,
        };

        Rect::new(
            x,
            self.goal_line_y(),
            self.config.goal_line_depth,
            self.config.goal_line_height,
        )
    }

    /// The net behind the goal line.
    pub fn goal_rect(&self, side: PlayerSide) -> Rect {
        let x = match side {
            PlayerSide::Left => self.config.offset - self.config.goal_depth,
            PlayerSide::Right => self.width - self.config.offset,
        };

        Rect::new(x, self.goal_y(), self.config.goal_depth, self.goal_height())
    }

    pub fn goal_entry_line(&self, side: PlayerSide) -> GoalLine {
        let x = match side {
            PlayerSide::Left => self.config.offset,
            PlayerSide::Right => self.width - self.config.offset,
        };
        let top = self.goal_y();

        GoalLine {
            top: Vector2D::new(x, top),
            bottom: Vector2D::new(x, top + self.goal_height()),
        }
    }
}
