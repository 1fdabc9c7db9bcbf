use cv_core::MessageId;

/// Actions named by verb words.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Verb {
    /// Pick something up.
    Take,
    /// Put something down.
    Drop,
    /// Recognized, but does nothing useful.
    Dummy,
    /// Open with the keys.
    Unlock,
    /// Do nothing at all.
    Nothing,
    /// Close with the keys.
    Lock,
    /// Turn the lamp on.
    Light,
    /// Turn the lamp off.
    Extinguish,
    /// Strike or wave something.
    Strike,
    /// Calm, sing, shake and the like.
    Calm,
    /// Go somewhere without saying where.
    Walk,
    /// Fight.
    Attack,
    /// Empty a container.
    Pour,
    /// Eat.
    Eat,
    /// Drink.
    Drink,
    /// Rub.
    Rub,
}

impl Verb {
    /// Decode a verb code from the vocabulary.
    pub fn from_code(code: u16) -> Option<Self> {
        Some(match code {
            1 => Self::Take,
            2 => Self::Drop,
            3 => Self::Dummy,
            4 => Self::Unlock,
            5 => Self::Nothing,
            6 => Self::Lock,
            7 => Self::Light,
            8 => Self::Extinguish,
            9 => Self::Strike,
            10 => Self::Calm,
            11 => Self::Walk,
            12 => Self::Attack,
            13 => Self::Pour,
            14 => Self::Eat,
            15 => Self::Drink,
            16 => Self::Rub,
            _ => return None,
        })
    }

    /// The message given when the verb cannot be applied.
    pub fn default_message(self) -> Option<MessageId> {
        let raw = match self {
            Self::Take => 24,
            Self::Drop => 29,
            Self::Unlock | Self::Lock => 31,
            Self::Light | Self::Extinguish => 38,
            Self::Strike | Self::Calm => 42,
            Self::Walk => 43,
            Self::Attack => 46,
            Self::Pour => 77,
            Self::Eat => 71,
            Self::Drink => 73,
            Self::Rub => 75,
            Self::Dummy | Self::Nothing => return None,
        };
        Some(MessageId(raw))
    }
}
