use crate::r#match::team::{PlayerIndex, StandardController, TeamController, TeamError};
use crate::r#match::{
    Ball, FormationConfig, MatchField, MatchObjectsPositions, MatchPlayer, MatchStage,
    MovableEntity, PlayerRole, PlayerSide, PlayerTickContext, Tuning,
};
use crate::shared::{calculate_points, CoinSide, Vector2D};
use itertools::Itertools;
use log::{debug, warn};

/// Outfield players a controller must supply.
pub const OUTFIELD_PLAYERS: usize = 10;

pub const LEFT_TEAM_COLOR: &str = "#ff8500";
pub const RIGHT_TEAM_COLOR: &str = "#0021ff";

/// Everything needed to build one team, before sides are known.
pub struct TeamSetup {
    pub name: String,
    pub color: String,
    pub controller: Box<dyn TeamController>,
}

impl TeamSetup {
    pub fn new(name: &str, color: &str, controller: Box<dyn TeamController>) -> Self {
        TeamSetup {
            name: name.to_string(),
            color: color.to_string(),
            controller,
        }
    }

    pub fn standard(name: &str, color: &str) -> Self {
        Self::new(name, color, Box::new(StandardController::new()))
    }
}

pub struct Team {
    name: String,
    color: String,
    side: PlayerSide,
    coin_side: CoinSide,
    score: u32,
    players: Vec<MatchPlayer>,
    controller: Box<dyn TeamController>,
}

impl Team {
    pub fn new(
        setup: TeamSetup,
        side: PlayerSide,
        coin_side: CoinSide,
        index: &mut PlayerIndex,
    ) -> Result<Self, TeamError> {
        let TeamSetup {
            name,
            color,
            mut controller,
        } = setup;

        let goalkeeper = MatchPlayer::goalkeeper(index.next_index(), side);
        let supplied = controller.players(side, index);

        if supplied.len() != OUTFIELD_PLAYERS {
            return Err(TeamError::InvalidRosterSize {
                expected: OUTFIELD_PLAYERS,
                actual: supplied.len(),
            });
        }

        if let Some(keeper) = supplied
            .iter()
            .find(|p| p.role() == PlayerRole::Goalkeeper)
        {
            return Err(TeamError::GoalkeeperSupplied {
                index: keeper.index,
            });
        }

        if let Some(index) = std::iter::once(goalkeeper.index)
            .chain(supplied.iter().map(|p| p.index))
            .duplicates()
            .next()
        {
            return Err(TeamError::DuplicateIndex { index });
        }

        let roles = supplied.iter().map(|p| p.role()).counts();
        let line_up = (
            roles.get(&PlayerRole::Defender).copied().unwrap_or(0),
            roles.get(&PlayerRole::Midfielder).copied().unwrap_or(0),
            roles.get(&PlayerRole::Forward).copied().unwrap_or(0),
        );

        if line_up != (4, 4, 2) {
            warn!(
                "team {} lines up {}-{}-{} instead of 4-4-2",
                name, line_up.0, line_up.1, line_up.2
            );
        }

        let mut players = Vec::with_capacity(OUTFIELD_PLAYERS + 1);
        players.push(goalkeeper);
        players.extend(supplied.into_iter().map(|mut p| {
            p.side = side;
            p
        }));

        debug!("team {} ({}) plays {:?} on {}", name, color, side, coin_side);

        Ok(Team {
            name,
            color,
            side,
            coin_side,
            score: 0,
            players,
            controller,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn color(&self) -> &str {
        &self.color
    }

    pub fn side(&self) -> PlayerSide {
        self.side
    }

    pub fn team_id(&self) -> u32 {
        self.side.team_id()
    }

    pub fn coin_side(&self) -> CoinSide {
        self.coin_side
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn increase_score(&mut self) {
        self.score += 1;
    }

    pub fn players(&self) -> &[MatchPlayer] {
        &self.players
    }

    pub fn players_mut(&mut self) -> &mut [MatchPlayer] {
        &mut self.players
    }

    pub fn goalkeeper(&self) -> &MatchPlayer {
        &self.players[0]
    }

    pub fn defenders(&self) -> impl Iterator<Item = &MatchPlayer> {
        self.players_with(PlayerRole::Defender)
    }

    pub fn midfielders(&self) -> impl Iterator<Item = &MatchPlayer> {
        self.players_with(PlayerRole::Midfielder)
    }

    pub fn forwards(&self) -> impl Iterator<Item = &MatchPlayer> {
        self.players_with(PlayerRole::Forward)
    }

    fn players_with(&self, role: PlayerRole) -> impl Iterator<Item = &MatchPlayer> {
        self.players.iter().filter(move |p| p.role() == role)
    }

    pub fn in_possession(&self) -> bool {
        self.players.iter().any(|p| p.is_dribbling)
    }

    /// The pair that walks up to the ball at kickoff.
    pub fn last_two_players(&mut self) -> &mut [MatchPlayer] {
        let start = self.players.len().saturating_sub(2);
        &mut self.players[start..]
    }

    pub fn set_facing(&mut self, facing: f32) {
        self.players
            .iter_mut()
            .for_each(|p| p.update_facing(facing));
    }

    /// Lines the team up in its half: goalkeeper in front of goal, then
    /// defenders, midfielders and forwards on lines evenly spread down the field.
    pub fn reset_players(&mut self, field: &MatchField, formation: &FormationConfig) {
        let offset = field.offset();
        let line_x = |distance: f32| match self.side {
            PlayerSide::Left => offset + distance,
            PlayerSide::Right => field.width - offset - distance,
        };

        let keeper_home = Vector2D::new(
            line_x(formation.goalkeeper_start_offset),
            field.height / 2.0,
        );
        let lines = [
            (PlayerRole::Defender, line_x(formation.defender_line)),
            (PlayerRole::Midfielder, line_x(formation.midfielder_line)),
            (PlayerRole::Forward, line_x(formation.forward_line)),
        ];

        for player in self
            .players
            .iter_mut()
            .filter(|p| p.role() == PlayerRole::Goalkeeper)
        {
            player.reset_to(keeper_home);
        }

        for (role, x) in lines {
            let count = self.players.iter().filter(|p| p.role() == role).count();
            let slots = calculate_points(field.game_height(), count);

            for (player, y) in self
                .players
                .iter_mut()
                .filter(|p| p.role() == role)
                .zip(slots)
            {
                player.reset_to(Vector2D::new(x, y + offset));
            }
        }

        self.set_facing(self.side.initial_facing());
    }

    pub fn stop_players(&mut self) {
        for player in self.players.iter_mut() {
            player.stop();
            player.clear_next_waypoint();
        }
    }

    /// Controller first, then every player in roster order. Positions are
    /// refreshed after each player so later players see where earlier ones went.
    pub fn update(
        &mut self,
        dt: f32,
        stage: MatchStage,
        ball: &mut Ball,
        positions: &mut MatchObjectsPositions,
        field: &MatchField,
        tuning: &Tuning,
    ) {
        self.controller.update(dt);

        for player in self.players.iter_mut() {
            {
                let mut ctx = PlayerTickContext {
                    dt,
                    stage,
                    ball: &mut *ball,
                    positions: &*positions,
                    field,
                    tuning,
                };

                player.update(&mut ctx);
            }

            positions.update(player.index, player.position);
        }
    }
}
