//! Animation keys and per-character playback state.
//!
//! A sprite sheet is identified by an [`AnimationKey`]: which [`Action`] it
//! shows and, for directional sheets, which way the character faces. Each
//! animated entity carries an [`AnimationCursor`] that counts simulation
//! ticks since its current `(action, facing)` pair became active.

use std::fmt;

use bevy_ecs::prelude::Component;
use serde::Serialize;

use crate::components::rigidbody::RigidBody;
use crate::error::AssetError;
use crate::resources::sheetcatalog::SheetCatalog;

/// Number of simulation ticks each frame stays on screen.
pub const ANIMATION_DELAY: u64 = 4;

/// Horizontal facing of a character or frame set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Facing {
    Left,
    Right,
}

impl Facing {
    pub fn as_str(self) -> &'static str {
        match self {
            Facing::Left => "left",
            Facing::Right => "right",
        }
    }
}

/// Animated actions a character sheet can contain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Action {
    Idle,
    Run,
    Jump,
    Fall,
    DoubleJump,
    WallJump,
    Hit,
}

impl Action {
    pub const ALL: [Action; 7] = [
        Action::Idle,
        Action::Run,
        Action::Jump,
        Action::Fall,
        Action::DoubleJump,
        Action::WallJump,
        Action::Hit,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Action::Idle => "idle",
            Action::Run => "run",
            Action::Jump => "jump",
            Action::Fall => "fall",
            Action::DoubleJump => "double_jump",
            Action::WallJump => "wall_jump",
            Action::Hit => "hit",
        }
    }

    /// Parse a sheet file stem such as `"run"`, `"Double Jump (32x32)"` or
    /// `"WallJump"`.
    ///
    /// Matching ignores case, any parenthesized size suffix, and the
    /// separators `' '`, `'_'` and `'-'`.
    pub fn from_sheet_name(stem: &str) -> Option<Action> {
        let base = stem.split('(').next().unwrap_or(stem);
        let normalized: String = base
            .chars()
            .filter(|c| !matches!(c, ' ' | '_' | '-'))
            .flat_map(char::to_lowercase)
            .collect();
        Action::ALL
            .into_iter()
            .find(|action| action.as_str().replace('_', "") == normalized)
    }
}

/// Composite catalog key. `facing` is `None` for undirected sheets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct AnimationKey {
    pub action: Action,
    pub facing: Option<Facing>,
}

impl AnimationKey {
    pub const fn directed(action: Action, facing: Facing) -> Self {
        Self {
            action,
            facing: Some(facing),
        }
    }

    pub const fn undirected(action: Action) -> Self {
        Self {
            action,
            facing: None,
        }
    }
}

impl fmt::Display for AnimationKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.facing {
            Some(facing) => write!(f, "{}_{}", self.action.as_str(), facing.as_str()),
            None => f.write_str(self.action.as_str()),
        }
    }
}

/// Playback state owned by each animated character.
///
/// `elapsed_ticks` grows by one per tick while the `(action, facing)` pair
/// stays the same and drops back to zero on any transition.
#[derive(Debug, Clone, Component)]
pub struct AnimationCursor {
    pub action: Action,
    pub facing: Facing,
    pub elapsed_ticks: u64,
}

/// Every key [`AnimationCursor::follow`] can select.
pub const CHARACTER_KEYS: [AnimationKey; 4] = [
    AnimationKey::directed(Action::Idle, Facing::Left),
    AnimationKey::directed(Action::Idle, Facing::Right),
    AnimationKey::directed(Action::Run, Facing::Left),
    AnimationKey::directed(Action::Run, Facing::Right),
];

impl Default for AnimationCursor {
    fn default() -> Self {
        Self::new(Action::Idle, Facing::Left)
    }
}

impl AnimationCursor {
    pub fn new(action: Action, facing: Facing) -> Self {
        Self {
            action,
            facing,
            elapsed_ticks: 0,
        }
    }

    /// Catalog key for the current state.
    pub fn key(&self) -> AnimationKey {
        AnimationKey::directed(self.action, self.facing)
    }

    /// Move to `(action, facing)`. Returns true and rewinds when the state
    /// actually changes.
    pub fn transition(&mut self, action: Action, facing: Facing) -> bool {
        if self.action == action && self.facing == facing {
            return false;
        }
        self.action = action;
        self.facing = facing;
        self.elapsed_ticks = 0;
        true
    }

    /// Derive the state from the body's horizontal velocity and transition
    /// to it.
    ///
    /// Zero velocity keeps the current facing.
    pub fn follow(&mut self, body: &RigidBody) -> bool {
        if !body.is_moving_horizontally() {
            return self.transition(Action::Idle, self.facing);
        }
        let facing = if body.velocity.x > 0.0 {
            Facing::Right
        } else {
            Facing::Left
        };
        self.transition(Action::Run, facing)
    }

    /// Frame shown for a set of `frame_count` frames.
    pub fn frame_index(&self, frame_count: usize) -> usize {
        if frame_count == 0 {
            return 0;
        }
        ((self.elapsed_ticks / ANIMATION_DELAY) % frame_count as u64) as usize
    }

    /// Look up the current key and return the frame to display.
    pub fn select_frame(&self, catalog: &SheetCatalog) -> Result<usize, AssetError> {
        let frame_count = catalog.frame_count(self.key())?;
        Ok(self.frame_index(frame_count))
    }

    /// Count one simulation tick.
    pub fn advance(&mut self) {
        self.elapsed_ticks = self.elapsed_ticks.wrapping_add(1);
    }
}
