//! Read-only frame view handed to the renderer

use glam::IVec2;
use serde::{Deserialize, Serialize};

use super::collision::Rect;
use super::entity::{Direction, Entity};
use super::maze::AdversaryKind;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntityView {
    pub pos: IVec2,
    pub size: IVec2,
    pub facing: Direction,
}

impl From<&Entity> for EntityView {
    fn from(entity: &Entity) -> Self {
        Self {
            pos: entity.pos(),
            size: entity.size(),
            facing: entity.direction(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdversaryView {
    pub kind: AdversaryKind,
    pub body: EntityView,
}

/// Everything needed to draw one frame
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FrameSnapshot {
    pub player: EntityView,
    pub adversaries: Vec<AdversaryView>,
    pub walls: Vec<Rect>,
    pub pickups: Vec<Rect>,
    pub score: u32,
    pub lives: u8,
    pub game_over: bool,
}

impl FrameSnapshot {
    /// HUD line shown while playing
    pub fn hud_text(&self) -> String {
        format!("x{} Score: {}", self.lives, self.score)
    }
}
