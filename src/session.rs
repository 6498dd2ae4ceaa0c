//! Session glue between a presentation layer and the simulation
//!
//! Maps key presses onto engine calls, owns the start menu, and turns
//! wall-clock time into fixed ticks.

use std::time::Duration;

use crate::highscores::HighScores;
use crate::settings::Settings;
use crate::sim::{
    Direction, DirectionSource, FrameSnapshot, GameEvent, MazeError, SeededSource, SimulationEngine,
};

/// Which screen the player is looking at
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    /// Title screen, waiting for a start signal
    Menu,
    /// A game is in progress (or showing its game-over overlay)
    Playing,
}

/// Keys the platform layer reports
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Up,
    Down,
    Left,
    Right,
    /// Enter / Space / the start button
    Start,
    Other(char),
}

impl Key {
    pub fn direction(&self) -> Option<Direction> {
        match self {
            Key::Up => Some(Direction::Up),
            Key::Down => Some(Direction::Down),
            Key::Left => Some(Direction::Left),
            Key::Right => Some(Direction::Right),
            Key::Start | Key::Other(_) => None,
        }
    }
}

/// Result of one `Session::advance` call
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FrameUpdate {
    /// Ticks run; redraw when non-zero
    pub ticks_run: u32,
    pub events: Vec<GameEvent>,
}

/// A running game plus the bits of state around it
pub struct Session<S = SeededSource> {
    engine: SimulationEngine<S>,
    screen: Screen,
    accumulator: Duration,
    tick_interval: Duration,
    max_substeps: u32,
    high_scores: HighScores,
    /// Leaderboard rank of the most recently finished game
    last_rank: Option<usize>,
}

impl Session<SeededSource> {
    /// Session on the built-in maze, seeded from settings
    pub fn new(settings: &Settings) -> Result<Self, MazeError> {
        let engine = SimulationEngine::new(settings.resolve_seed())?;
        Ok(Self::with_engine(engine, settings))
    }
}

impl<S: DirectionSource> Session<S> {
    pub fn with_engine(engine: SimulationEngine<S>, settings: &Settings) -> Self {
        Self {
            engine,
            screen: Screen::Menu,
            accumulator: Duration::ZERO,
            tick_interval: settings.tick_interval(),
            max_substeps: settings.max_substeps.max(1),
            high_scores: HighScores::new(),
            last_rank: None,
        }
    }

    pub fn engine(&self) -> &SimulationEngine<S> {
        &self.engine
    }

    pub fn screen(&self) -> Screen {
        self.screen
    }

    pub fn high_scores(&self) -> &HighScores {
        &self.high_scores
    }

    pub fn last_rank(&self) -> Option<usize> {
        self.last_rank
    }

    pub fn snapshot(&self) -> FrameSnapshot {
        self.engine.snapshot()
    }

    /// Leave the menu and begin play
    pub fn start(&mut self) {
        if self.screen == Screen::Menu {
            self.screen = Screen::Playing;
            self.accumulator = Duration::ZERO;
            log::info!("Game started");
        }
    }

    /// Feed a key press.
    ///
    /// On the menu only `Start` does anything. After a game over any key
    /// restarts, and a direction key then also steers the new game.
    pub fn handle_key(&mut self, key: Key) {
        if self.screen == Screen::Menu {
            if key == Key::Start {
                self.start();
            }
            return;
        }

        if self.engine.is_game_over() {
            self.engine.restart();
            self.accumulator = Duration::ZERO;
            self.last_rank = None;
        }

        if let Some(direction) = key.direction() {
            let _ = self.engine.request_direction(direction);
        }
    }

    /// Run as many whole ticks as `elapsed` covers, up to the substep cap.
    ///
    /// Leftover time carries into the next call. Nothing runs on the menu or
    /// once the game is over.
    pub fn advance(&mut self, elapsed: Duration) -> FrameUpdate {
        let mut update = FrameUpdate::default();
        if self.screen == Screen::Menu || self.engine.is_game_over() {
            return update;
        }

        // Don't let a long stall queue up more than one frame's worth of ticks
        let budget = self.tick_interval * self.max_substeps;
        self.accumulator = (self.accumulator + elapsed).min(budget);

        while self.accumulator >= self.tick_interval && update.ticks_run < self.max_substeps {
            let events = self.engine.step();
            self.accumulator -= self.tick_interval;
            update.ticks_run += 1;

            if let Some(GameEvent::GameOver { score }) =
                events.iter().find(|e| matches!(e, GameEvent::GameOver { .. })).copied()
            {
                self.last_rank = self.high_scores.add_score(score, self.engine.ticks());
                self.accumulator = Duration::ZERO;
                update.events.extend(events);
                break;
            }
            update.events.extend(events);
        }

        update
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::ScriptedSource;

    fn settings() -> Settings {
        Settings {
            seed: Some(1),
            ..Default::default()
        }
    }

    /// Blue always heads left toward the player; three catches end the game
    fn doomed() -> Session<ScriptedSource> {
        let engine =
            SimulationEngine::from_layout(&["XXXXXX", "XPb  X", "XXXXXX"], ScriptedSource::new(vec![2])).unwrap();
        Session::with_engine(engine, &settings())
    }

    #[test]
    fn test_menu_ignores_ticks_and_direction_keys() {
        let mut session = Session::new(&settings()).unwrap();
        let before = session.snapshot();
        session.handle_key(Key::Left);
        assert_eq!(session.advance(Duration::from_secs(1)).ticks_run, 0);
        assert_eq!(session.snapshot(), before);
        assert_eq!(session.screen(), Screen::Menu);

        session.handle_key(Key::Start);
        assert_eq!(session.screen(), Screen::Playing);
    }

    #[test]
    fn test_fixed_timestep_accumulates() {
        let mut session = Session::new(&settings()).unwrap();
        session.start();

        assert_eq!(session.advance(Duration::from_millis(30)).ticks_run, 0);
        assert_eq!(session.advance(Duration::from_millis(30)).ticks_run, 1);
        assert_eq!(session.advance(Duration::from_millis(90)).ticks_run, 2);
        assert_eq!(session.engine().ticks(), 3);
    }

    #[test]
    fn test_long_stall_is_capped() {
        let mut session = Session::new(&settings()).unwrap();
        session.start();
        let update = session.advance(Duration::from_secs(10));
        assert_eq!(update.ticks_run, crate::consts::MAX_SUBSTEPS);
        // The stall does not spill into the next frame beyond the cap
        assert_eq!(session.advance(Duration::ZERO).ticks_run, 0);
    }

    #[test]
    fn test_direction_key_reaches_engine() {
        let mut session = Session::new(&settings()).unwrap();
        session.start();
        session.handle_key(Key::Left);
        assert_eq!(session.engine().player().direction(), Direction::Left);
    }

    #[test]
    fn test_game_over_records_score_and_any_key_restarts() {
        let mut session = doomed();
        session.start();

        let mut all_events = Vec::new();
        for _ in 0..10 {
            all_events.extend(session.advance(Duration::from_millis(50)).events);
        }
        assert!(session.engine().is_game_over());
        assert!(all_events.iter().any(|e| matches!(e, GameEvent::GameOver { score: 0 })));
        // A zero score never makes the table
        assert_eq!(session.last_rank(), None);
        assert_eq!(session.advance(Duration::from_secs(1)).ticks_run, 0);

        session.handle_key(Key::Other('q'));
        assert!(!session.engine().is_game_over());
        assert_eq!(session.engine().lives(), 3);
        assert_eq!(session.advance(Duration::from_millis(50)).ticks_run, 1);
    }

    #[test]
    fn test_restart_key_also_steers() {
        let mut session = doomed();
        session.start();
        while !session.engine().is_game_over() {
            let _ = session.advance(Duration::from_millis(50));
        }
        session.handle_key(Key::Right);
        assert!(!session.engine().is_game_over());
        assert_eq!(session.engine().player().direction(), Direction::Right);
    }
}
