//! Fixed-step simulation tick
//!
//! One call advances the game by exactly one tick. Order within a tick:
//! player move, adversary collisions and moves, pickup consumption, maze
//! exhaustion.

use super::entity::Entity;
use super::maze::MazeState;
use super::state::{GameEvent, GamePhase, SimulationEngine};
use super::wander::{DirectionSource, pick_after_bump, pick_at_tile};
use crate::consts::PICKUP_REWARD;

impl<S: DirectionSource> SimulationEngine<S> {
    /// Advance the game by one tick. Does nothing once the game is over.
    ///
    /// The maze reloads when this tick eats the last pickup, so a layout with
    /// no pickups at all never reloads.
    pub fn step(&mut self) -> Vec<GameEvent> {
        let mut events = Vec::new();
        if self.phase == GamePhase::GameOver {
            return events;
        }
        self.ticks += 1;

        // Player: move, undo on any wall hit
        self.player.advance();
        let bounds = self.player.bounds();
        if self.maze.overlaps_wall(&bounds) || self.maze.leaves_board(&bounds) {
            self.player.undo_advance();
        }

        // Adversaries. A catch ends adversary processing for this tick.
        for index in 0..self.adversaries.len() {
            let adversary = &self.adversaries[index];
            if adversary.body.bounds().overlaps(&self.player.bounds()) {
                let by = adversary.kind;
                self.lives = self.lives.saturating_sub(1);
                events.push(GameEvent::LifeLost { lives: self.lives, by });

                if self.lives == 0 {
                    self.phase = GamePhase::GameOver;
                    events.push(GameEvent::GameOver { score: self.score });
                    log::info!("Game over with score {} after {} ticks", self.score, self.ticks);
                    return events;
                }

                log::debug!("Caught by {:?}, {} lives left", by, self.lives);
                self.reset_positions();
                break;
            }

            wander(&mut self.adversaries[index].body, &self.maze, &mut self.source);
        }

        // Pickups: at most one per tick
        if let Some(pickup) = self.maze.consume_overlapping(&self.player.bounds()) {
            self.score = self.score.saturating_add(PICKUP_REWARD);
            events.push(GameEvent::PickupConsumed { score: self.score });
            log::trace!("Pickup at {:?} eaten, score {}", pickup.pos, self.score);

            if self.maze.pickups().is_empty() {
                self.maze.reload();
                self.reset_positions();
                events.push(GameEvent::MazeReloaded);
                log::info!("Maze cleared at score {}, reloading", self.score);
            }
        }

        events
    }
}

/// One adversary move: re-pick on a tile, step, and back off from walls or the side edges
fn wander(body: &mut Entity, maze: &MazeState, source: &mut impl DirectionSource) {
    if body.is_tile_aligned() {
        let direction = pick_at_tile(body, maze, source);
        body.set_direction(direction);
    }

    body.advance();

    let bounds = body.bounds();
    if maze.overlaps_wall(&bounds) || maze.touches_side_bounds(&bounds) {
        body.undo_advance();
        if let Some(direction) = pick_after_bump(body, maze, source) {
            body.set_direction(direction);
        }
    }
}
