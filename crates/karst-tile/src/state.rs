//! Tile state flags and their polarity traits.

use karst_grid::CellCodec;
use std::fmt;
use std::ops::{Add, AddAssign, Sub, SubAssign};

/// One polarity of one tile flag.
///
/// Each of the eight flags has a set and an unset name; applying a
/// trait to a [`TileState`] drives the flag to that polarity, so bulk
/// zone operations can paint traits with plain `+=` / `-=` arithmetic.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TileTrait {
    /// Blocks movement.
    Solid,
    /// Admits movement.
    Open,
    /// Blocks sight.
    Opaque,
    /// Admits sight.
    Transparent,
    /// Currently visible.
    Seen,
    /// Not currently visible.
    Unseen,
    /// Visited at some point.
    Explored,
    /// Never visited.
    Unexplored,
    /// Wet.
    Damp,
    /// Not wet.
    Dry,
    /// Hot.
    Warm,
    /// Not hot.
    Cold,
    /// Scented.
    Smelly,
    /// Unscented.
    Odorless,
    /// Poisonous.
    Toxic,
    /// Harmless.
    Safe,
}

impl TileTrait {
    /// The flag bit this trait drives.
    const fn bit(self) -> u8 {
        match self {
            Self::Solid | Self::Open => TileState::SOLID,
            Self::Opaque | Self::Transparent => TileState::OPAQUE,
            Self::Seen | Self::Unseen => TileState::SEEN,
            Self::Explored | Self::Unexplored => TileState::EXPLORED,
            Self::Damp | Self::Dry => TileState::DAMP,
            Self::Warm | Self::Cold => TileState::WARM,
            Self::Smelly | Self::Odorless => TileState::SMELLY,
            Self::Toxic | Self::Safe => TileState::TOXIC,
        }
    }

    /// Whether this is the set polarity of its flag.
    const fn sets(self) -> bool {
        matches!(
            self,
            Self::Solid
                | Self::Opaque
                | Self::Seen
                | Self::Explored
                | Self::Damp
                | Self::Warm
                | Self::Smelly
                | Self::Toxic
        )
    }

    /// The opposite polarity of the same flag.
    pub const fn opposite(self) -> Self {
        match self {
            Self::Solid => Self::Open,
            Self::Open => Self::Solid,
            Self::Opaque => Self::Transparent,
            Self::Transparent => Self::Opaque,
            Self::Seen => Self::Unseen,
            Self::Unseen => Self::Seen,
            Self::Explored => Self::Unexplored,
            Self::Unexplored => Self::Explored,
            Self::Damp => Self::Dry,
            Self::Dry => Self::Damp,
            Self::Warm => Self::Cold,
            Self::Cold => Self::Warm,
            Self::Smelly => Self::Odorless,
            Self::Odorless => Self::Smelly,
            Self::Toxic => Self::Safe,
            Self::Safe => Self::Toxic,
        }
    }
}

/// Eight tile flags packed into one byte.
///
/// The default state is fully unset: open, transparent, unseen,
/// unexplored, dry, cold, odorless, safe.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct TileState(u8);

impl TileState {
    const SOLID: u8 = 1 << 0;
    const OPAQUE: u8 = 1 << 1;
    const SEEN: u8 = 1 << 2;
    const EXPLORED: u8 = 1 << 3;
    const DAMP: u8 = 1 << 4;
    const WARM: u8 = 1 << 5;
    const SMELLY: u8 = 1 << 6;
    const TOXIC: u8 = 1 << 7;

    /// Build a state from a sequence of traits, applied in order.
    pub fn of<I: IntoIterator<Item = TileTrait>>(traits: I) -> Self {
        let mut state = Self::default();
        for tile_trait in traits {
            state += tile_trait;
        }
        state
    }

    /// Whether the state matches `tile_trait`'s polarity.
    pub const fn contains(self, tile_trait: TileTrait) -> bool {
        (self.0 & tile_trait.bit() != 0) == tile_trait.sets()
    }

    /// Drive the trait's flag to its polarity.
    pub fn apply(&mut self, tile_trait: TileTrait) {
        if tile_trait.sets() {
            self.0 |= tile_trait.bit();
        } else {
            self.0 &= !tile_trait.bit();
        }
    }

    /// Blocks movement.
    pub const fn solid(self) -> bool {
        self.0 & Self::SOLID != 0
    }

    /// Blocks sight.
    pub const fn opaque(self) -> bool {
        self.0 & Self::OPAQUE != 0
    }

    /// Currently visible.
    pub const fn seen(self) -> bool {
        self.0 & Self::SEEN != 0
    }

    /// Visited at some point.
    pub const fn explored(self) -> bool {
        self.0 & Self::EXPLORED != 0
    }

    /// Wet.
    pub const fn damp(self) -> bool {
        self.0 & Self::DAMP != 0
    }

    /// Hot.
    pub const fn warm(self) -> bool {
        self.0 & Self::WARM != 0
    }

    /// Scented.
    pub const fn smelly(self) -> bool {
        self.0 & Self::SMELLY != 0
    }

    /// Poisonous.
    pub const fn toxic(self) -> bool {
        self.0 & Self::TOXIC != 0
    }
}

impl AddAssign<TileTrait> for TileState {
    fn add_assign(&mut self, tile_trait: TileTrait) {
        self.apply(tile_trait);
    }
}

impl SubAssign<TileTrait> for TileState {
    fn sub_assign(&mut self, tile_trait: TileTrait) {
        self.apply(tile_trait.opposite());
    }
}

impl Add<TileTrait> for TileState {
    type Output = Self;

    fn add(mut self, tile_trait: TileTrait) -> Self {
        self += tile_trait;
        self
    }
}

impl Sub<TileTrait> for TileState {
    type Output = Self;

    fn sub(mut self, tile_trait: TileTrait) -> Self {
        self -= tile_trait;
        self
    }
}

impl fmt::Display for TileState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let names = [
            if self.solid() { "Solid" } else { "Open" },
            if self.opaque() { "Opaque" } else { "Transparent" },
            if self.seen() { "Seen" } else { "Unseen" },
            if self.explored() { "Explored" } else { "Unexplored" },
            if self.damp() { "Damp" } else { "Dry" },
            if self.warm() { "Warm" } else { "Cold" },
            if self.smelly() { "Smelly" } else { "Odorless" },
            if self.toxic() { "Toxic" } else { "Safe" },
        ];
        write!(f, "[{}]", names.join(", "))
    }
}

impl CellCodec for TileState {
    const BYTE_LEN: usize = 1;

    fn encode(&self, buf: &mut [u8]) {
        buf[0] = self.0;
    }

    fn decode(buf: &[u8]) -> Self {
        Self(buf[0])
    }
}
