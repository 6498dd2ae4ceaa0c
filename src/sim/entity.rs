//! Shared actor record for the player and every adversary
//!
//! Player and adversaries are the same type; what differs is the policy that
//! picks their direction (keyboard input vs. `wander`).

use glam::IVec2;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::collision::Rect;
use crate::consts::{ENTITY_SPEED, TILE_SIZE};

/// Facing direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// Candidate order for adversary picks and the dead-end fallback
    pub const ALL: [Direction; 4] = [Direction::Up, Direction::Down, Direction::Left, Direction::Right];

    pub fn opposite(&self) -> Direction {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }

    /// Unit step on the grid (y grows down)
    pub fn unit(&self) -> IVec2 {
        match self {
            Direction::Up => IVec2::NEG_Y,
            Direction::Down => IVec2::Y,
            Direction::Left => IVec2::NEG_X,
            Direction::Right => IVec2::X,
        }
    }

    /// Per-tick velocity for an entity facing this way
    pub fn velocity(&self) -> IVec2 {
        self.unit() * ENTITY_SPEED
    }

    /// Offset to the neighbouring tile
    pub fn tile_offset(&self) -> IVec2 {
        self.unit() * TILE_SIZE
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DirectionError {
    #[error("invalid direction {0:?}, expected one of U, D, L, R")]
    Invalid(char),
}

impl TryFrom<char> for Direction {
    type Error = DirectionError;

    fn try_from(c: char) -> Result<Self, Self::Error> {
        match c.to_ascii_uppercase() {
            'U' => Ok(Direction::Up),
            'D' => Ok(Direction::Down),
            'L' => Ok(Direction::Left),
            'R' => Ok(Direction::Right),
            _ => Err(DirectionError::Invalid(c)),
        }
    }
}

/// A moving tile-sized actor
///
/// Direction and velocity only change together, so a facing with a stale
/// velocity is never observable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entity {
    pos: IVec2,
    size: IVec2,
    direction: Direction,
    vel: IVec2,
    /// Start position restored by `reset`
    origin: IVec2,
}

impl Entity {
    /// A stationary entity at its origin
    pub fn new(origin: IVec2, direction: Direction) -> Self {
        Self {
            pos: origin,
            size: IVec2::splat(TILE_SIZE),
            direction,
            vel: IVec2::ZERO,
            origin,
        }
    }

    pub fn pos(&self) -> IVec2 {
        self.pos
    }

    pub fn size(&self) -> IVec2 {
        self.size
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn vel(&self) -> IVec2 {
        self.vel
    }

    pub fn origin(&self) -> IVec2 {
        self.origin
    }

    pub fn bounds(&self) -> Rect {
        Rect::new(self.pos, self.size)
    }

    /// Face a direction without moving
    pub fn set_direction(&mut self, direction: Direction) {
        self.direction = direction;
        self.vel = direction.velocity();
    }

    /// Try to turn by taking one full step in the new direction.
    ///
    /// If the step ends blocked, position, direction and velocity all revert,
    /// so turning into a wall is a no-op. Returns whether the turn was taken.
    pub fn update_direction(&mut self, direction: Direction, is_blocked: impl Fn(&Rect) -> bool) -> bool {
        let (prev_pos, prev_direction, prev_vel) = (self.pos, self.direction, self.vel);

        self.set_direction(direction);
        self.advance();

        if is_blocked(&self.bounds()) {
            self.pos = prev_pos;
            self.direction = prev_direction;
            self.vel = prev_vel;
            return false;
        }
        true
    }

    /// Move by the current velocity
    #[inline]
    pub fn advance(&mut self) {
        self.pos += self.vel;
    }

    /// Exactly reverse the last `advance`
    #[inline]
    pub fn undo_advance(&mut self) {
        self.pos -= self.vel;
    }

    /// Return to origin and stop. Facing is kept.
    pub fn reset(&mut self) {
        self.pos = self.origin;
        self.vel = IVec2::ZERO;
    }

    /// Sitting exactly on a grid intersection
    pub fn is_tile_aligned(&self) -> bool {
        self.pos.x.rem_euclid(TILE_SIZE) == 0 && self.pos.y.rem_euclid(TILE_SIZE) == 0
    }
}
