//! Simulation engine state
//!
//! The engine exclusively owns the maze, the player and every adversary.
//! `tick.rs` holds the per-tick update; this file covers construction,
//! input, resets and the frame snapshot.

use serde::{Deserialize, Serialize};

use super::entity::{Direction, Entity};
use super::maze::{AdversaryKind, MazeError, MazeState};
use super::snapshot::{AdversaryView, EntityView, FrameSnapshot};
use super::wander::{DirectionSource, SeededSource, random_direction};
use crate::consts::STARTING_LIVES;

/// Game lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Ticks advance the simulation
    Running,
    /// Lives exhausted; frozen until `restart`
    GameOver,
}

/// Something the presentation layer may want to react to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    PickupConsumed { score: u32 },
    LifeLost { lives: u8, by: AdversaryKind },
    GameOver { score: u32 },
    MazeReloaded,
}

/// A roaming adversary
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Adversary {
    pub kind: AdversaryKind,
    pub body: Entity,
}

/// Owner of all simulation state
#[derive(Debug, Clone)]
pub struct SimulationEngine<S = SeededSource> {
    pub(super) maze: MazeState,
    pub(super) player: Entity,
    pub(super) adversaries: Vec<Adversary>,
    pub(super) source: S,
    pub(super) score: u32,
    pub(super) lives: u8,
    pub(super) phase: GamePhase,
    /// Ticks since the last restart
    pub(super) ticks: u64,
}

impl SimulationEngine<SeededSource> {
    /// Engine on the built-in maze with a seeded random source
    pub fn new(seed: u64) -> Result<Self, MazeError> {
        let source = SeededSource::new(seed);
        log::info!("Simulation engine seeded with {}", source.seed());
        Ok(Self::with_source(MazeState::builtin()?, source))
    }
}

impl<S: DirectionSource> SimulationEngine<S> {
    /// Engine on any parsed maze with an injected random source
    pub fn with_source(maze: MazeState, mut source: S) -> Self {
        let player = Entity::new(maze.player_start(), Direction::Right);
        let adversaries = maze
            .adversary_starts()
            .iter()
            .map(|&(kind, origin)| {
                let mut body = Entity::new(origin, Direction::Up);
                body.set_direction(random_direction(&mut source));
                Adversary { kind, body }
            })
            .collect();

        Self {
            maze,
            player,
            adversaries,
            source,
            score: 0,
            lives: STARTING_LIVES,
            phase: GamePhase::Running,
            ticks: 0,
        }
    }

    /// Parse a layout and build an engine on it
    pub fn from_layout<L: AsRef<str>>(lines: &[L], source: S) -> Result<Self, MazeError> {
        Ok(Self::with_source(MazeState::load(lines)?, source))
    }

    pub fn maze(&self) -> &MazeState {
        &self.maze
    }

    pub fn player(&self) -> &Entity {
        &self.player
    }

    pub fn adversaries(&self) -> &[Adversary] {
        &self.adversaries
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn lives(&self) -> u8 {
        self.lives
    }

    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    pub fn is_game_over(&self) -> bool {
        self.phase == GamePhase::GameOver
    }

    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    /// Player input: turn if the first step that way is clear.
    ///
    /// A turn into a wall leaves the player exactly as it was. Ignored while
    /// the game is over. Returns whether the turn was taken.
    pub fn request_direction(&mut self, direction: Direction) -> bool {
        if self.is_game_over() {
            return false;
        }
        let maze = &self.maze;
        self.player
            .update_direction(direction, |r| maze.overlaps_wall(r) || maze.leaves_board(r))
    }

    /// Start a fresh game: full maze, start positions, zero score, full lives
    pub fn restart(&mut self) {
        self.maze.reload();
        self.reset_positions();
        self.score = 0;
        self.lives = STARTING_LIVES;
        self.phase = GamePhase::Running;
        self.ticks = 0;
        log::info!("Game restarted");
    }

    /// Everyone back to their start. The player stops; adversaries get a fresh random facing.
    pub fn reset_positions(&mut self) {
        self.player.reset();
        for adversary in &mut self.adversaries {
            adversary.body.reset();
            adversary.body.set_direction(random_direction(&mut self.source));
        }
    }

    /// Read-only view for rendering
    pub fn snapshot(&self) -> FrameSnapshot {
        FrameSnapshot {
            player: EntityView::from(&self.player),
            adversaries: self
                .adversaries
                .iter()
                .map(|a| AdversaryView {
                    kind: a.kind,
                    body: EntityView::from(&a.body),
                })
                .collect(),
            walls: self.maze.walls().to_vec(),
            pickups: self.maze.pickups().to_vec(),
            score: self.score,
            lives: self.lives,
            game_over: self.is_game_over(),
        }
    }
}
