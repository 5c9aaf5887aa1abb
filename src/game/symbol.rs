use serde::{Deserialize, Serialize};

/// One face of a tile. Every symbol of the active alphabet sits on exactly two tiles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Symbol {
    HeartEyes,
    WinkingTongue,
    Cold,
    Hot,
    Cowboy,
    GrinningCat,
    NinjaCat,
    StuntCat,
    SeeNoEvil,
    AstroCat,
    Angel,
    Burger,
    Pizza,
    Burrito,
    Watermelon,
    Melon,
    Strawberry,
    Mushroom,
}

impl Symbol {
    /// Full alphabet, in board-template order.
    pub const ALL: [Symbol; 18] = [
        Symbol::HeartEyes,
        Symbol::WinkingTongue,
        Symbol::Cold,
        Symbol::Hot,
        Symbol::Cowboy,
        Symbol::GrinningCat,
        Symbol::NinjaCat,
        Symbol::StuntCat,
        Symbol::SeeNoEvil,
        Symbol::AstroCat,
        Symbol::Angel,
        Symbol::Burger,
        Symbol::Pizza,
        Symbol::Burrito,
        Symbol::Watermelon,
        Symbol::Melon,
        Symbol::Strawberry,
        Symbol::Mushroom,
    ];

    pub fn glyph(self) -> &'static str {
        match self {
            Symbol::HeartEyes => "😍",
            Symbol::WinkingTongue => "😜",
            Symbol::Cold => "🥶",
            Symbol::Hot => "🥵",
            Symbol::Cowboy => "🤠",
            Symbol::GrinningCat => "😸",
            Symbol::NinjaCat => "🐱‍👤",
            Symbol::StuntCat => "🐱‍🏍",
            Symbol::SeeNoEvil => "🙈",
            Symbol::AstroCat => "🐱‍🚀",
            Symbol::Angel => "👼",
            Symbol::Burger => "🍔",
            Symbol::Pizza => "🍕",
            Symbol::Burrito => "🌯",
            Symbol::Watermelon => "🍉",
            Symbol::Melon => "🍈",
            Symbol::Strawberry => "🍓",
            Symbol::Mushroom => "🍄",
        }
    }
}

/// First `pairs` symbols of the full alphabet, clamped to its size.
pub fn alphabet(pairs: usize) -> &'static [Symbol] {
    &Symbol::ALL[..pairs.min(Symbol::ALL.len())]
}
