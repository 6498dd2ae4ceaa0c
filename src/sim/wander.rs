//! Adversary direction policy
//!
//! Adversaries re-pick a direction whenever they sit exactly on a tile, and
//! again whenever a move bumps into a wall. Randomness comes from a
//! `DirectionSource` so tests can script the choices.

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use super::entity::{Direction, Entity};
use super::maze::MazeState;

/// Source of uniform choices among `len` candidates
pub trait DirectionSource {
    /// Returns an index in `0..len`. `len` is never zero.
    fn pick(&mut self, len: usize) -> usize;
}

/// PCG32-backed source, reproducible from its seed
#[derive(Debug, Clone)]
pub struct SeededSource {
    seed: u64,
    rng: Pcg32,
}

impl SeededSource {
    pub fn new(seed: u64) -> Self {
        Self {
            seed,
            rng: Pcg32::seed_from_u64(seed),
        }
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }
}

impl DirectionSource for SeededSource {
    fn pick(&mut self, len: usize) -> usize {
        self.rng.random_range(0..len)
    }
}

/// Replays a fixed sequence, wrapping around at the end.
///
/// Each value is reduced modulo the candidate count.
#[derive(Debug, Clone)]
pub struct ScriptedSource {
    script: Vec<usize>,
    cursor: usize,
}

impl ScriptedSource {
    pub fn new(script: impl Into<Vec<usize>>) -> Self {
        Self {
            script: script.into(),
            cursor: 0,
        }
    }

    /// How many picks have been drawn so far
    pub fn draws(&self) -> usize {
        self.cursor
    }
}

impl DirectionSource for ScriptedSource {
    fn pick(&mut self, len: usize) -> usize {
        if self.script.is_empty() {
            return 0;
        }
        let value = self.script[self.cursor % self.script.len()];
        self.cursor += 1;
        value % len
    }
}

/// A uniformly random facing, used at spawn and after a reset
pub fn random_direction(source: &mut impl DirectionSource) -> Direction {
    Direction::ALL[source.pick(Direction::ALL.len())]
}

/// Directions whose neighbouring tile (measured from the entity's top-left pixel) is not a wall
pub fn open_directions(entity: &Entity, maze: &MazeState) -> Vec<Direction> {
    Direction::ALL
        .into_iter()
        .filter(|d| !maze.is_wall_at(entity.pos() + d.tile_offset()))
        .collect()
}

/// Direction choice for a tile-aligned adversary.
///
/// Never reverses while another opening exists. In a dead end it takes the
/// first open direction in `Direction::ALL` order, which may be the reverse.
/// Fully enclosed, it keeps its current facing.
pub fn pick_at_tile(entity: &Entity, maze: &MazeState, source: &mut impl DirectionSource) -> Direction {
    let open = open_directions(entity, maze);
    let reverse = entity.direction().opposite();
    let candidates: Vec<Direction> = open.iter().copied().filter(|d| *d != reverse).collect();

    if !candidates.is_empty() {
        return candidates[source.pick(candidates.len())];
    }
    open.first().copied().unwrap_or(entity.direction())
}

/// Direction choice after a bumped move has been undone.
///
/// Any open direction is allowed, reverse included. `None` leaves the
/// adversary facing the obstruction.
pub fn pick_after_bump(entity: &Entity, maze: &MazeState, source: &mut impl DirectionSource) -> Option<Direction> {
    let open = open_directions(entity, maze);
    if open.is_empty() {
        return None;
    }
    Some(open[source.pick(open.len())])
}
