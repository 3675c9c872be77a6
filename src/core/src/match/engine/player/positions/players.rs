use crate::r#match::{MatchPlayer, PlayerSide, Team};
use crate::shared::Vector2D;

#[derive(Debug, Clone, Copy)]
pub struct PlayerPosition {
    pub index: u32,
    pub side: PlayerSide,
    pub position: Vector2D,
    pub radius: f32,
}

impl From<&MatchPlayer> for PlayerPosition {
    fn from(player: &MatchPlayer) -> Self {
        PlayerPosition {
            index: player.index,
            side: player.side,
            position: player.position,
            radius: player.radius,
        }
    }
}

/// Current positions of every player on the field, kept in step with the
/// players as they move during a frame.
#[derive(Debug, Default)]
pub struct MatchObjectsPositions {
    pub items: Vec<PlayerPosition>,
}

impl MatchObjectsPositions {
    pub fn from_teams(teams: &[Team]) -> Self {
        MatchObjectsPositions {
            items: teams
                .iter()
                .flat_map(|team| team.players().iter())
                .map(PlayerPosition::from)
                .collect(),
        }
    }

    pub fn others(&self, index: u32) -> impl Iterator<Item = &PlayerPosition> {
        self.items.iter().filter(move |p| p.index != index)
    }

    pub fn others_within(
        &self,
        index: u32,
        point: Vector2D,
        distance: f32,
    ) -> impl Iterator<Item = &PlayerPosition> {
        self.others(index)
            .filter(move |p| p.position.distance(point) < distance)
    }

    pub fn position(&self, index: u32) -> Option<Vector2D> {
        self.items
            .iter()
            .find(|p| p.index == index)
            .map(|p| p.position)
    }

    pub fn update(&mut self, index: u32, position: Vector2D) {
        if let Some(item) = self.items.iter_mut().find(|p| p.index == index) {
            item.position = position;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn positions() -> MatchObjectsPositions {
        MatchObjectsPositions {
            items: vec![
                PlayerPosition {
                    index: 1,
                    side: PlayerSide::Left,
                    position: Vector2D::new(0.0, 0.0),
                    radius: 10.0,
                },
                PlayerPosition {
                    index: 2,
                    side: PlayerSide::Left,
                    position: Vector2D::new(30.0, 0.0),
                    radius: 10.0,
                },
                PlayerPosition {
                    index: 3,
                    side: PlayerSide::Right,
                    position: Vector2D::new(100.0, 0.0),
                    radius: 10.0,
                },
            ],
        }
    }

    #[test]
    fn test_others_excludes_self() {
        let positions = positions();
        let others: Vec<u32> = positions.others(2).map(|p| p.index).collect();

        assert_eq!(others, vec![1, 3]);
    }

    #[test]
    fn test_others_within_distance() {
        let positions = positions();
        let near: Vec<u32> = positions
            .others_within(1, Vector2D::zero(), 60.0)
            .map(|p| p.index)
            .collect();

        assert_eq!(near, vec![2]);
    }

    #[test]
    fn test_update_moves_entry() {
        let mut positions = positions();
        positions.update(3, Vector2D::new(50.0, 5.0));

        assert_eq!(positions.position(3), Some(Vector2D::new(50.0, 5.0)));
        assert_eq!(positions.position(9), None);
    }
}
