//! Rooms and the travel edges leading out of them.

use serde::{Deserialize, Serialize};

use crate::ids::{LocationId, MotionCode};
use crate::sequence::ForcedSequence;
use crate::text::TextBlock;

/// Where a travel edge leads.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Destination {
    /// Straight to a room.
    Room(LocationId),
    /// Through a forced sequence resolved at travel time.
    Sequence(ForcedSequence),
}

/// One row of the travel table: a destination and the motions that reach it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TravelEdge {
    /// Where the edge leads.
    pub destination: Destination,
    /// Motion codes that select this edge. [`MotionCode::ANY`] matches any.
    pub motions: Vec<MotionCode>,
}

impl TravelEdge {
    /// Whether a motion selects this edge.
    pub fn accepts(&self, motion: MotionCode) -> bool {
        self.motions
            .iter()
            .any(|&m| m == motion || m == MotionCode::ANY)
    }
}

/// Lighting and control behaviour of a room.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Condition {
    /// Needs a light source to see.
    #[default]
    Dark,
    /// Always lit.
    Lit,
    /// The player is carried straight through to the next room.
    Forced,
}

impl Condition {
    /// Decode the numeric condition code used by the data tables.
    pub fn from_code(code: u8) -> Self {
        match code {
            2 => Self::Forced,
            c if c % 2 == 1 => Self::Lit,
            _ => Self::Dark,
        }
    }
}

/// A room: its texts, condition and ordered exits.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Location {
    /// Full description, shown on first visit and on LOOK.
    pub long: Option<TextBlock>,
    /// Abbreviated description for repeat visits.
    pub short: Option<TextBlock>,
    /// Lighting and control behaviour.
    pub condition: Condition,
    /// Exits in table order. The first matching edge wins.
    pub travel: Vec<TravelEdge>,
}

impl Location {
    /// True if the room is lit on its own.
    pub fn is_lit(&self) -> bool {
        self.condition == Condition::Lit
    }

    /// True if the player passes straight through the room.
    pub fn is_forced(&self) -> bool {
        self.condition == Condition::Forced
    }

    /// First edge accepting `motion`, in table order.
    pub fn exit_for(&self, motion: MotionCode) -> Option<&TravelEdge> {
        self.travel.iter().find(|edge| edge.accepts(motion))
    }

    /// The text to show: long when asked for or when there is no short form.
    pub fn description(&self, want_long: bool) -> Option<&TextBlock> {
        match (&self.short, want_long) {
            (Some(short), false) => Some(short),
            _ => self.long.as_ref(),
        }
    }
}
