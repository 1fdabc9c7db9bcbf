use cv_core::{ItemId, MessageId, MotionCode};

use crate::verb::Verb;

/// Verb and object carried between lines while the player is asked to
/// finish a command.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TurnContext {
    /// Verb waiting for an object.
    pub verb: Option<Verb>,
    /// Object waiting for a verb.
    pub object: Option<ItemId>,
    /// Unrecognized lines since the last arrival.
    pub trouble: u32,
    /// Motion that brought the player here; forced rooms travel on with it.
    pub last_motion: Option<MotionCode>,
}

impl TurnContext {
    /// Forget the pending verb and object.
    pub fn clear(&mut self) {
        self.verb = None;
        self.object = None;
    }
}

/// Counters and flags about the player that outlive a single turn.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PlayerState {
    /// The current room is dark.
    pub dark: bool,
    /// How many times WEST has been typed.
    pub west_count: u32,
    /// How many times LOOK has been used.
    pub detail_count: u32,
}

/// Typing WEST this many times earns the abbreviation tip.
pub(crate) const WEST_TIP_AT: u32 = 10;
/// LOOK warns about limited detail this many times.
pub(crate) const DETAIL_WARNINGS: u32 = 3;

/// A hint offered after repeated confusion in a known trouble spot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Hint {
    /// Trying to catch the bird while holding the rod.
    Bird,
    /// Stuck in front of the snake.
    Snake,
    /// Standing at the locked grate.
    Grate,
}

impl Hint {
    /// Question asked before giving the hint.
    pub fn question(self) -> MessageId {
        match self {
            Self::Bird => MessageId(18),
            Self::Snake => MessageId(20),
            Self::Grate => MessageId(62),
        }
    }

    /// The hint itself.
    pub fn answer(self) -> MessageId {
        match self {
            Self::Bird => MessageId(19),
            Self::Snake => MessageId(21),
            Self::Grate => MessageId(63),
        }
    }
}
