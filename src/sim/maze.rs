//! Static maze layout and the pickup set
//!
//! The layout is parsed once into a tile grid. Walls never change after load;
//! the pickup set shrinks as the player eats and is refilled from the initial
//! set by `reload`.

use glam::IVec2;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::collision::Rect;
use crate::consts::{PICKUP_INSET, PICKUP_SIZE, TILE_SIZE};

/// The built-in layout.
///
/// `X` wall, ` ` pickup, `O` empty, `P` player start,
/// `b`/`o`/`p`/`r` adversary starts.
pub const LAYOUT: [&str; 21] = [
    "XXXXXXXXXXXXXXXXXXX",
    "X        X        X",
    "X XX XXX X XXX XX X",
    "X                 X",
    "X XX X XXXXX X XX X",
    "X    X       X    X",
    "XXXX XXXX XXXX XXXX",
    "OOOX X       X XOOO",
    "XXXX X XXrXX X XXXX",
    "O       bpo       O",
    "XXXX X XXXXX X XXXX",
    "OOOX X       X XOOO",
    "XXXX X XXXXX X XXXX",
    "X        X        X",
    "X XX XXX X XXX XX X",
    "X  X     P     X  X",
    "XX X X XXXXX X X XX",
    "X    X   X   X    X",
    "X XXXXXX X XXXXXX X",
    "X                 X",
    "XXXXXXXXXXXXXXXXXXX",
];

/// Adversary identity, one per start marker
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AdversaryKind {
    Blue,
    Orange,
    Pink,
    Red,
}

impl AdversaryKind {
    pub const ALL: [AdversaryKind; 4] = [
        AdversaryKind::Blue,
        AdversaryKind::Orange,
        AdversaryKind::Pink,
        AdversaryKind::Red,
    ];

    pub fn marker(&self) -> char {
        match self {
            AdversaryKind::Blue => 'b',
            AdversaryKind::Orange => 'o',
            AdversaryKind::Pink => 'p',
            AdversaryKind::Red => 'r',
        }
    }
}

/// What a single grid cell holds at load time
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tile {
    Wall,
    Pickup,
    Empty,
    PlayerStart,
    AdversaryStart(AdversaryKind),
}

impl Tile {
    pub fn from_char(c: char) -> Option<Self> {
        match c {
            'X' => Some(Tile::Wall),
            ' ' => Some(Tile::Pickup),
            'O' => Some(Tile::Empty),
            'P' => Some(Tile::PlayerStart),
            _ => AdversaryKind::ALL
                .into_iter()
                .find(|kind| kind.marker() == c)
                .map(Tile::AdversaryStart),
        }
    }
}

/// Layout configuration errors. All of them are fatal: there is no default maze.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MazeError {
    #[error("maze layout has no rows")]
    Empty,
    #[error("row {row} is {found} tiles wide, expected {expected}")]
    RaggedRow {
        row: usize,
        expected: usize,
        found: usize,
    },
    #[error("unknown tile {tile:?} at row {row}, column {column}")]
    UnknownTile { row: usize, column: usize, tile: char },
    #[error("maze layout has no player start marker")]
    MissingPlayerStart,
    #[error("second player start at {second:?}, first was at {first:?}")]
    DuplicatePlayerStart { first: IVec2, second: IVec2 },
    #[error("adversary marker for {kind:?} appears more than once")]
    DuplicateAdversary { kind: AdversaryKind },
}

/// Parsed maze: wall grid, pickups and start positions
#[derive(Debug, Clone)]
pub struct MazeState {
    rows: usize,
    columns: usize,
    /// Row-major tile grid
    tiles: Vec<Tile>,
    walls: Vec<Rect>,
    initial_pickups: Vec<Rect>,
    pickups: Vec<Rect>,
    player_start: IVec2,
    adversary_starts: Vec<(AdversaryKind, IVec2)>,
}

impl MazeState {
    /// Parse the built-in layout
    pub fn builtin() -> Result<Self, MazeError> {
        Self::load(&LAYOUT)
    }

    /// Parse a fixed-width character grid
    pub fn load<S: AsRef<str>>(lines: &[S]) -> Result<Self, MazeError> {
        let columns = lines.first().ok_or(MazeError::Empty)?.as_ref().chars().count();
        if columns == 0 {
            return Err(MazeError::Empty);
        }

        let mut tiles = Vec::with_capacity(lines.len() * columns);
        let mut walls = Vec::new();
        let mut pickups = Vec::new();
        let mut player_start: Option<IVec2> = None;
        let mut adversary_starts: Vec<(AdversaryKind, IVec2)> = Vec::new();

        for (row, line) in lines.iter().enumerate() {
            let line = line.as_ref();
            let found = line.chars().count();
            if found != columns {
                return Err(MazeError::RaggedRow {
                    row,
                    expected: columns,
                    found,
                });
            }

            for (column, c) in line.chars().enumerate() {
                let tile = Tile::from_char(c).ok_or(MazeError::UnknownTile { row, column, tile: c })?;
                let origin = IVec2::new(column as i32 * TILE_SIZE, row as i32 * TILE_SIZE);

                match tile {
                    Tile::Wall => walls.push(Rect::square(origin, TILE_SIZE)),
                    Tile::Pickup => pickups.push(Rect::square(
                        origin + IVec2::splat(PICKUP_INSET),
                        PICKUP_SIZE,
                    )),
                    Tile::Empty => {}
                    Tile::PlayerStart => {
                        if let Some(first) = player_start {
                            return Err(MazeError::DuplicatePlayerStart { first, second: origin });
                        }
                        player_start = Some(origin);
                    }
                    Tile::AdversaryStart(kind) => {
                        if adversary_starts.iter().any(|(k, _)| *k == kind) {
                            return Err(MazeError::DuplicateAdversary { kind });
                        }
                        adversary_starts.push((kind, origin));
                    }
                }
                tiles.push(tile);
            }
        }

        let player_start = player_start.ok_or(MazeError::MissingPlayerStart)?;

        Ok(Self {
            rows: lines.len(),
            columns,
            tiles,
            walls,
            initial_pickups: pickups.clone(),
            pickups,
            player_start,
            adversary_starts,
        })
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn columns(&self) -> usize {
        self.columns
    }

    /// Board width in pixels
    pub fn width(&self) -> i32 {
        self.columns as i32 * TILE_SIZE
    }

    /// Board height in pixels
    pub fn height(&self) -> i32 {
        self.rows as i32 * TILE_SIZE
    }

    pub fn tile(&self, row: usize, column: usize) -> Option<Tile> {
        if row >= self.rows || column >= self.columns {
            return None;
        }
        Some(self.tiles[row * self.columns + column])
    }

    pub fn walls(&self) -> &[Rect] {
        &self.walls
    }

    /// Pickups not yet eaten
    pub fn pickups(&self) -> &[Rect] {
        &self.pickups
    }

    /// The full pickup set as it was at load
    pub fn initial_pickups(&self) -> &[Rect] {
        &self.initial_pickups
    }

    pub fn player_start(&self) -> IVec2 {
        self.player_start
    }

    pub fn adversary_starts(&self) -> &[(AdversaryKind, IVec2)] {
        &self.adversary_starts
    }

    /// Whether the tile containing this pixel is a wall. Pixels off the grid are open.
    pub fn is_wall_at(&self, point: IVec2) -> bool {
        if point.x < 0 || point.y < 0 {
            return false;
        }
        let column = (point.x / TILE_SIZE) as usize;
        let row = (point.y / TILE_SIZE) as usize;
        matches!(self.tile(row, column), Some(Tile::Wall))
    }

    /// Whether a box overlaps any wall tile
    pub fn overlaps_wall(&self, rect: &Rect) -> bool {
        if rect.size.x <= 0 || rect.size.y <= 0 {
            return false;
        }
        // Only the tiles the box covers can overlap it
        let first_col = rect.left().div_euclid(TILE_SIZE).max(0);
        let last_col = (rect.right() - 1).div_euclid(TILE_SIZE).min(self.columns as i32 - 1);
        let first_row = rect.top().div_euclid(TILE_SIZE).max(0);
        let last_row = (rect.bottom() - 1).div_euclid(TILE_SIZE).min(self.rows as i32 - 1);

        (first_row..=last_row).any(|row| {
            (first_col..=last_col)
                .any(|col| matches!(self.tile(row as usize, col as usize), Some(Tile::Wall)))
        })
    }

    /// Adversary side-bound test: touching or crossing the left/right board edge
    pub fn touches_side_bounds(&self, rect: &Rect) -> bool {
        rect.left() <= 0 || rect.right() >= self.width()
    }

    /// Whether any part of the box lies outside the board
    pub fn leaves_board(&self, rect: &Rect) -> bool {
        rect.left() < 0 || rect.top() < 0 || rect.right() > self.width() || rect.bottom() > self.height()
    }

    /// Remove one pickup overlapping the box, if any
    pub fn consume_overlapping(&mut self, rect: &Rect) -> Option<Rect> {
        let index = self.pickups.iter().position(|p| p.overlaps(rect))?;
        Some(self.pickups.remove(index))
    }

    /// Refill the pickup set. Walls are untouched.
    pub fn reload(&mut self) {
        self.pickups.clone_from(&self.initial_pickups);
    }
}
