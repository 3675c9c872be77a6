use crate::r#match::team::{PlayerIndex, Team, TeamError, TeamSetup};
use crate::r#match::{
    Ball, BallSnapshot, DebugControls, FrameClock, GoalLine, InputIntent, MatchConfig, MatchField,
    MatchObjectsPositions, MatchPlayer, MatchSnapshot, MatchStage, MovableEntity, PlayerSide,
    ScheduledEvent, StateManager, TeamSnapshot,
};
use crate::shared::{calculate_angle, CoinSide, Vector2D};
use itertools::Itertools;
use log::{debug, info};

pub const GOAL_RESET_DELAY_MS: f64 = 2000.0;
pub const KICKOFF_START_DELAY_MS: f64 = 1000.0;
pub const KICKOFF_ADVANCE_DELAY_MS: f64 = 1000.0;
pub const KICKOFF_START_GAME_DELAY_MS: f64 = 3000.0;

const DEBUG_KICK_FORCE: f32 = 10.0;
const CLICK_KICK_DIVISOR: f32 = 20.0;

pub struct MatchTime {
    /// Milliseconds of simulated time since the engine was built.
    pub time: f64,
}

impl Default for MatchTime {
    fn default() -> Self {
        Self::new()
    }
}

impl MatchTime {
    pub fn new() -> Self {
        MatchTime { time: 0.0 }
    }

    #[inline]
    pub fn increment(&mut self, val: f64) -> f64 {
        self.time += val;
        self.time
    }
}

pub struct MatchEngine {
    config: MatchConfig,
    field: MatchField,
    teams: [Team; 2],
    ball: Ball,
    state: StateManager,
    time: MatchTime,
    kickoff_team: PlayerSide,
    debug: DebugControls,
    clock: FrameClock,
}

impl MatchEngine {
    /// Builds both teams (left takes `left_coin`, right the other face) and
    /// lines them up. Play starts with [`MatchEngine::init`].
    pub fn new(
        config: MatchConfig,
        left: TeamSetup,
        right: TeamSetup,
        left_coin: CoinSide,
    ) -> Result<Self, TeamError> {
        let mut index = PlayerIndex::new();

        let left = Team::new(left, PlayerSide::Left, left_coin, &mut index)?;
        let right = Team::new(right, PlayerSide::Right, left_coin.opposite(), &mut index)?;

        if let Some(index) = left
            .players()
            .iter()
            .chain(right.players())
            .map(|p| p.index)
            .duplicates()
            .next()
        {
            return Err(TeamError::DuplicateIndex { index });
        }

        let field = MatchField::from_config(&config);
        let ball = Ball::with_coord(config.width, config.height);

        let mut engine = MatchEngine {
            config,
            field,
            teams: [left, right],
            ball,
            state: StateManager::new(),
            time: MatchTime::new(),
            kickoff_team: PlayerSide::Left,
            debug: DebugControls::default(),
            clock: FrameClock::new(),
        };

        engine.reset_formation();

        Ok(engine)
    }

    /// Centres the ball, picks the kickoff team from the toss and schedules
    /// the kickoff sequence.
    pub fn init(&mut self, toss: CoinSide) {
        self.ball.center_on(self.field.center());
        self.ball.stop();
        self.reset_formation();

        self.kickoff_team = if self.teams[0].coin_side() == toss {
            PlayerSide::Left
        } else {
            PlayerSide::Right
        };

        info!(
            "coin shows {}, {} kicks off",
            toss,
            self.team(self.kickoff_team).name()
        );

        self.state.set(MatchStage::Kickoff);
        self.state.schedule(
            self.time.time + KICKOFF_START_DELAY_MS,
            ScheduledEvent::KickoffPositions,
        );
    }

    /// Advances the match by `dt` milliseconds.
    pub fn update(&mut self, dt: f32) {
        self.time.increment(dt as f64);
        self.process_scheduled_events();

        self.ball.update(dt);

        if self.state.current().is_live() {
            self.handle_boundary_collision_for_ball();
            self.update_teams(dt);
        }
    }

    pub fn update_with_input(&mut self, dt: f32, input: &InputIntent) {
        self.handle_input(input);
        self.update(dt);
    }

    /// One interactive frame using the wall clock, or the nominal paused delta.
    pub fn step(&mut self) {
        let dt = self.clock.delta();
        self.update(dt);
        self.clock.mark();
    }

    pub fn pause(&mut self) {
        self.clock.pause();
    }

    pub fn resume(&mut self) {
        self.clock.resume();
    }

    pub fn is_paused(&self) -> bool {
        self.clock.is_paused()
    }

    pub fn finish(&mut self) {
        self.state.clear_pending();
        self.state.set(MatchStage::GameOver);

        let (left, right) = self.debug_score();
        info!("full time {}-{}", left, right);
    }

    pub fn config(&self) -> &MatchConfig {
        &self.config
    }

    pub fn field(&self) -> &MatchField {
        &self.field
    }

    pub fn teams(&self) -> &[Team; 2] {
        &self.teams
    }

    pub fn team(&self, side: PlayerSide) -> &Team {
        match side {
            PlayerSide::Left => &self.teams[0],
            PlayerSide::Right => &self.teams[1],
        }
    }

    fn team_mut(&mut self, side: PlayerSide) -> &mut Team {
        match side {
            PlayerSide::Left => &mut self.teams[0],
            PlayerSide::Right => &mut self.teams[1],
        }
    }

    pub fn players(&self) -> impl Iterator<Item = &MatchPlayer> {
        self.teams.iter().flat_map(|team| team.players().iter())
    }

    pub fn player_mut(&mut self, index: u32) -> Option<&mut MatchPlayer> {
        self.teams
            .iter_mut()
            .flat_map(|team| team.players_mut().iter_mut())
            .find(|p| p.index == index)
    }

    /// The player drawn under `point`, if any.
    pub fn player_at(&self, point: Vector2D) -> Option<&MatchPlayer> {
        self.players().find(|p| p.is_point_over_me(point))
    }

    pub fn ball(&self) -> &Ball {
        &self.ball
    }

    pub fn ball_mut(&mut self) -> &mut Ball {
        &mut self.ball
    }

    pub fn stage(&self) -> MatchStage {
        self.state.current()
    }

    pub fn kickoff_team(&self) -> PlayerSide {
        self.kickoff_team
    }

    pub fn time(&self) -> f64 {
        self.time.time
    }

    pub fn debug_score(&self) -> (u32, u32) {
        (self.teams[0].score(), self.teams[1].score())
    }

    pub fn debug(&self) -> &DebugControls {
        &self.debug
    }

    pub fn debug_mut(&mut self) -> &mut DebugControls {
        &mut self.debug
    }

    pub fn snapshot(&self) -> MatchSnapshot {
        MatchSnapshot {
            stage: self.state.current(),
            time_ms: self.time.time,
            kickoff_team: self.kickoff_team,
            debug: self.debug.enabled,
            followed: self.debug.followed,
            ball: BallSnapshot::from(&self.ball),
            teams: self
                .teams
                .iter()
                .map(|team| TeamSnapshot::new(team, &self.config.tuning))
                .collect(),
        }
    }

    fn update_teams(&mut self, dt: f32) {
        let stage = self.state.current();
        let mut positions = MatchObjectsPositions::from_teams(&self.teams);

        for team in self.teams.iter_mut() {
            team.update(
                dt,
                stage,
                &mut self.ball,
                &mut positions,
                &self.field,
                &self.config.tuning,
            );
        }
    }

    fn process_scheduled_events(&mut self) {
        while let Some(event) = self.state.pop_due(self.time.time) {
            debug!("{:.0}ms: {:?}", self.time.time, event);

            match event {
                ScheduledEvent::KickoffPositions => self.set_kickoff_positions(),
                ScheduledEvent::KickoffAdvance => self.advance_kickoff(),
                ScheduledEvent::StartGame => self.start_game(),
                ScheduledEvent::ResetAfterGoal { scoring } => self.reset_after_goal(scoring),
            }
        }
    }

    fn handle_boundary_collision_for_ball(&mut self) {
        let bounds = self.field.bounds();
        let radius = self.ball.radius;

        if self.ball.position.x - radius <= bounds.left() {
            let mouth = self.field.goal_entry_line(PlayerSide::Left);

            if self.ball_fits(&mouth) {
                self.handle_goal(PlayerSide::Right);
            } else {
                self.ball.position.x = bounds.left() + radius;
                self.ball.velocity.x *= -1.0;
            }
        }

        if self.ball.position.x + radius >= bounds.right() {
            let mouth = self.field.goal_entry_line(PlayerSide::Right);

            if self.ball_fits(&mouth) {
                self.handle_goal(PlayerSide::Left);
            } else {
                self.ball.position.x = bounds.right() - radius;
                self.ball.velocity.x *= -1.0;
            }
        }

        if self.ball.position.y - radius <= bounds.top() {
            self.ball.position.y = bounds.top() + radius;
            self.ball.velocity.y *= -1.0;
        }

        if self.ball.position.y + radius >= bounds.bottom() {
            self.ball.position.y = bounds.bottom() - radius;
            self.ball.velocity.y *= -1.0;
        }
    }

    /// The ball's whole vertical span lies strictly inside the goal mouth.
    fn ball_fits(&self, mouth: &GoalLine) -> bool {
        let top = self.ball.position.y - self.ball.radius;
        let bottom = self.ball.position.y + self.ball.radius;

        top > mouth.top.y && bottom < mouth.bottom.y
    }

    fn handle_goal(&mut self, scoring: PlayerSide) {
        if self.state.current() == MatchStage::Goal {
            return;
        }

        self.ball.set_in_goal(true);
        self.state.clear_pending();
        self.state.set(MatchStage::Goal);
        self.team_mut(scoring).increase_score();

        let (left, right) = self.debug_score();
        info!(
            "GOAL! {} scores, {}-{}",
            self.team(scoring).name(),
            left,
            right
        );

        self.state.schedule(
            self.time.time + GOAL_RESET_DELAY_MS,
            ScheduledEvent::ResetAfterGoal { scoring },
        );
    }

    fn reset_after_goal(&mut self, scoring: PlayerSide) {
        self.ball.center_on(self.field.center());
        self.ball.set_in_goal(false);
        self.ball.stop();

        self.reset_formation();

        self.kickoff_team = scoring.opposite();
        self.state.set(MatchStage::Kickoff);
        self.set_kickoff_positions();
    }

    /// Formation lines for both teams; also stops everyone and drops waypoints.
    fn reset_formation(&mut self) {
        for team in self.teams.iter_mut() {
            team.reset_players(&self.field, &self.config.formation);
            team.stop_players();
        }
    }

    /// The kickoff pair's first player walks up to the ball.
    fn set_kickoff_positions(&mut self) {
        let center = self.field.center();
        let side = self.kickoff_team;
        let dx = -side.attack_direction();

        if let [first, _] = self.team_mut(side).last_two_players() {
            first.set_next_waypoint(center + Vector2D::new(5.0 * dx, -20.0));
        }

        self.state.schedule(
            self.time.time + KICKOFF_ADVANCE_DELAY_MS,
            ScheduledEvent::KickoffAdvance,
        );
    }

    /// Second kickoff player takes its spot; everyone but the keeper steps
    /// forward.
    fn advance_kickoff(&mut self) {
        let center = self.field.center();
        let side = self.kickoff_team;
        let forward = side.attack_direction();

        let team = self.team_mut(side);

        if let [_, second] = team.last_two_players() {
            second.set_next_waypoint(center + Vector2D::new(-50.0 * forward, 40.0));
        }

        let players = team.players_mut();
        let end = players.len().saturating_sub(2);

        if end > 1 {
            for player in players[1..end].iter_mut() {
                let target = player.position() + Vector2D::new(50.0 * forward, 0.0);
                player.set_next_waypoint(target);
            }
        }

        self.state.schedule(
            self.time.time + KICKOFF_START_GAME_DELAY_MS,
            ScheduledEvent::StartGame,
        );
    }

    fn start_game(&mut self) {
        if self.state.current() != MatchStage::Kickoff {
            return;
        }

        info!("kickoff by {}", self.team(self.kickoff_team).name());
        self.state.set(MatchStage::Game);
    }

    fn handle_input(&mut self, input: &InputIntent) {
        if !self.debug.enabled {
            return;
        }

        for click in input.clicks.iter().copied() {
            if self.debug.click_kick {
                let strength = self.ball.position.distance(click) / CLICK_KICK_DIVISOR;
                let direction = calculate_angle(self.ball.position, click);

                self.ball.kick(Vector2D::from_direction(direction, strength));
            }

            if self.debug.click_follow {
                self.follow_click(click);
            }
        }

        if input.kick_key {
            self.debug_kick();
        }
    }

    fn follow_click(&mut self, click: Vector2D) {
        match self.debug.followed {
            Some(index) => {
                if let Some(player) = self.player_mut(index) {
                    player.set_next_waypoint(click);
                }
            }
            None => {
                self.debug.followed = self.player_at(click).map(|p| p.index);

                if let Some(index) = self.debug.followed {
                    debug!("following player #{}", index);
                }
            }
        }
    }

    /// Hard kick along the followed player's facing, if it has the ball.
    fn debug_kick(&mut self) {
        if !self.debug.click_follow {
            return;
        }

        let Some(index) = self.debug.followed else {
            return;
        };

        let facing = self
            .players()
            .find(|p| p.index == index && p.is_dribbling)
            .map(|p| p.facing);

        if let Some(facing) = facing {
            self.ball.kick(Vector2D::from_direction(facing, DEBUG_KICK_FORCE));
        }
    }
}
