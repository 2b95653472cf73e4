/// Identifier of an entry in the [`SpriteStore`](crate::resources::spritestore::SpriteStore).
///
/// The discriminant is the index into the sprite table. `None` is the null
/// entry: no texture, zero size.
#[repr(u8)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum SpriteId {
    #[default]
    None = 0,
    Player,
    Rock,
    MineralRock,
    Spike,
}

impl SpriteId {
    /// Number of entries in the sprite table.
    pub const COUNT: usize = 5;

    /// Every id in table order.
    pub const ALL: [SpriteId; Self::COUNT] = [
        SpriteId::None,
        SpriteId::Player,
        SpriteId::Rock,
        SpriteId::MineralRock,
        SpriteId::Spike,
    ];

    /// Map a raw table index to an id. Anything out of range is `None`.
    pub fn from_index(index: usize) -> Self {
        Self::ALL.get(index).copied().unwrap_or(SpriteId::None)
    }

    pub fn index(self) -> usize {
        self as usize
    }
}
