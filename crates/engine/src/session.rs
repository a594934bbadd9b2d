//! Game session - the single owner of the current state.
//!
//! The timer and the input handler both go through `&mut GameSession`, and
//! each call replaces the state with one complete transition. A tick and a key
//! press handled in the same loop turn therefore always see each other's
//! result, never a stale copy.

use std::time::Instant;

use tracing::{debug, info};

use crate::config::GameConfig;
use crate::core::{Frame, GameState, SpawnPolicy};
use crate::ticker::Ticker;
use crate::transition;
use crate::types::{GameAction, InputEvent};

#[derive(Debug, Clone)]
pub struct GameSession {
    config: GameConfig,
    state: GameState,
    spawner: SpawnPolicy,
    ticker: Ticker,
    /// Set by a soft drop; swallows the next timer tick so the piece does not
    /// descend twice in one interval.
    skip_next_tick: bool,
    transitions: u64,
}

impl GameSession {
    pub fn new(config: GameConfig) -> Self {
        Self::with_start(config, Instant::now())
    }

    /// Create a session whose timer starts at `now`
    pub fn with_start(config: GameConfig, now: Instant) -> Self {
        let state = config.initial_state();
        let spawner = config.spawn_policy();
        let ticker = Ticker::new(config.tick_interval(), now);
        info!(
            width = config.grid_width,
            height = config.grid_height,
            tick_ms = config.tick_ms,
            seed = config.seed,
            "session started"
        );

        Self {
            config,
            state,
            spawner,
            ticker,
            skip_next_tick: false,
            transitions: 0,
        }
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn score(&self) -> u32 {
        self.state.score()
    }

    pub fn ticker(&self) -> &Ticker {
        &self.ticker
    }

    /// Number of transitions applied in the current game (skipped ticks
    /// excluded). Reset by [`restart`](Self::restart).
    pub fn transitions(&self) -> u64 {
        self.transitions
    }

    pub fn frame(&self) -> Frame {
        self.state.frame()
    }

    /// The moving piece already overlaps locked blocks, i.e. the stack
    /// reached the spawn row.
    pub fn is_topped_out(&self) -> bool {
        self.state.collides()
    }

    /// Timer transition. Returns false when the tick was swallowed after a
    /// soft drop.
    pub fn tick(&mut self) -> bool {
        if self.skip_next_tick {
            self.skip_next_tick = false;
            debug!("tick skipped after soft drop");
            return false;
        }
        let next = transition::tick(&self.state, &mut self.spawner);
        self.replace(next);
        true
    }

    /// Player transition.
    pub fn handle_input(&mut self, action: GameAction) {
        if action == GameAction::SoftDrop && self.state.moving().is_some() {
            self.skip_next_tick = true;
        }
        let next = transition::apply_action(&self.state, action);
        self.replace(next);
    }

    /// Dispatch any event to [`tick`](Self::tick) or
    /// [`handle_input`](Self::handle_input).
    pub fn apply(&mut self, event: InputEvent) {
        match event {
            InputEvent::Tick => {
                self.tick();
            }
            InputEvent::Action(action) => self.handle_input(action),
        }
    }

    /// Fire a tick if the timer is due. Returns true when the timer fired.
    pub fn poll_timer(&mut self, now: Instant) -> bool {
        if !self.ticker.poll(now) {
            return false;
        }
        self.tick();
        true
    }

    /// Stop the timer; no further ticks fire from [`poll_timer`](Self::poll_timer).
    pub fn stop(&mut self) {
        self.ticker.stop();
        info!(score = self.state.score(), "session stopped");
    }

    /// Start over on an empty grid. The spawn sequence continues.
    pub fn restart(&mut self, now: Instant) {
        info!(score = self.state.score(), "session restarted");
        self.state = self.config.initial_state();
        self.skip_next_tick = false;
        self.transitions = 0;
        self.ticker.reset(now);
    }

    fn replace(&mut self, next: GameState) {
        self.state = next;
        self.transitions += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    use crate::core::SpawnColumn;
    use crate::types::{Cell, Orientation, ShapeId};

    fn o_only() -> GameConfig {
        GameConfig {
            allowed_shapes: vec![ShapeId::O],
            allowed_orientations: vec![Orientation::R0],
            ..GameConfig::default()
        }
    }

    #[test]
    fn first_tick_spawns_at_spawn_column() {
        let mut session = GameSession::new(o_only());
        assert!(session.state().moving().is_none());

        assert!(session.tick());

        let piece = session.state().moving().copied().unwrap();
        assert_eq!(piece.position, Cell::new(8, 0));
        assert_eq!(piece.shape, ShapeId::O);
    }

    #[test]
    fn soft_drop_swallows_next_tick() {
        let mut session = GameSession::new(o_only());
        session.tick();

        session.handle_input(GameAction::SoftDrop);
        assert_eq!(session.state().moving().unwrap().position.row, 1);

        assert!(!session.tick());
        assert_eq!(session.state().moving().unwrap().position.row, 1);

        assert!(session.tick());
        assert_eq!(session.state().moving().unwrap().position.row, 2);
    }

    #[test]
    fn soft_drop_without_piece_does_not_skip() {
        let mut session = GameSession::new(o_only());
        session.handle_input(GameAction::SoftDrop);
        assert!(session.tick());
        assert!(session.state().moving().is_some());
    }

    #[test]
    fn shifts_do_not_skip_ticks() {
        let mut session = GameSession::new(o_only());
        session.tick();
        session.handle_input(GameAction::ShiftLeft);
        assert!(session.tick());
        assert_eq!(session.state().moving().unwrap().position, Cell::new(7, 1));
    }

    #[test]
    fn poll_timer_follows_interval() {
        let t0 = Instant::now();
        let mut session = GameSession::with_start(o_only(), t0);

        assert!(!session.poll_timer(t0 + Duration::from_millis(100)));
        assert!(session.state().moving().is_none());

        assert!(session.poll_timer(t0 + Duration::from_millis(300)));
        assert!(session.state().moving().is_some());
    }

    #[test]
    fn stop_halts_timer() {
        let t0 = Instant::now();
        let mut session = GameSession::with_start(o_only(), t0);
        session.stop();
        assert!(!session.poll_timer(t0 + Duration::from_secs(5)));
        assert_eq!(session.transitions(), 0);
    }

    #[test]
    fn piece_falls_to_floor_and_locks() {
        let mut session = GameSession::new(GameConfig {
            grid_height: 6,
            ..o_only()
        });
        // spawn + 4 descents (rows 1..=4) + lock
        for _ in 0..6 {
            session.tick();
        }
        assert!(session.state().moving().is_none());
        assert!(session.state().locked().contains(Cell::new(8, 5)));
        assert!(session.state().locked().contains(Cell::new(9, 4)));
    }

    #[test]
    fn stacking_to_the_top_reports_top_out() {
        let mut session = GameSession::new(GameConfig {
            grid_height: 4,
            ..o_only()
        });
        // Two O pieces fill rows 0..=3 of columns 8-9.
        for _ in 0..20 {
            session.tick();
            if session.is_topped_out() {
                break;
            }
        }
        assert!(session.is_topped_out());
    }

    #[test]
    fn restart_clears_grid_and_score() {
        let mut session = GameSession::new(GameConfig {
            grid_height: 4,
            spawn_column: SpawnColumn::Fixed(0),
            ..o_only()
        });
        for _ in 0..4 {
            session.tick();
        }
        assert!(!session.state().locked().is_empty());

        session.restart(Instant::now());
        assert!(session.state().locked().is_empty());
        assert!(session.state().moving().is_none());
        assert_eq!(session.score(), 0);
        assert_eq!(session.transitions(), 0);
    }

    #[test]
    fn transitions_count_ticks_and_inputs() {
        let mut session = GameSession::new(o_only());
        session.tick();
        session.handle_input(GameAction::ShiftLeft);
        session.handle_input(GameAction::SoftDrop);
        // Swallowed by the soft drop.
        session.tick();
        assert_eq!(session.transitions(), 3);

        session.restart(Instant::now());
        session.tick();
        assert_eq!(session.transitions(), 1);
    }
}
