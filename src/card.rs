//! Card types.

use core::fmt;

/// Card suit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Suit {
    /// Spades.
    Spades,
    /// Clubs.
    Clubs,
    /// Hearts.
    Hearts,
    /// Diamonds.
    Diamonds,
}

impl Suit {
    /// All suits in deck population order.
    pub const ALL: [Self; 4] = [Self::Spades, Self::Clubs, Self::Hearts, Self::Diamonds];

    /// Returns the suit glyph.
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Self::Spades => '\u{2660}',
            Self::Clubs => '\u{2663}',
            Self::Hearts => '\u{2665}',
            Self::Diamonds => '\u{2666}',
        }
    }
}

/// Card rank, ordered from ace to king.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Rank {
    /// Ace.
    Ace,
    /// Two.
    Two,
    /// Three.
    Three,
    /// Four.
    Four,
    /// Five.
    Five,
    /// Six.
    Six,
    /// Seven.
    Seven,
    /// Eight.
    Eight,
    /// Nine.
    Nine,
    /// Ten.
    Ten,
    /// Jack.
    Jack,
    /// Queen.
    Queen,
    /// King.
    King,
}

impl Rank {
    /// All ranks in deck population order.
    pub const ALL: [Self; 13] = [
        Self::Ace,
        Self::Two,
        Self::Three,
        Self::Four,
        Self::Five,
        Self::Six,
        Self::Seven,
        Self::Eight,
        Self::Nine,
        Self::Ten,
        Self::Jack,
        Self::Queen,
        Self::King,
    ];

    /// Returns the point value of the rank. Aces count 1 here; the hand
    /// total decides whether one of them is promoted.
    #[must_use]
    pub const fn points(self) -> u8 {
        match self {
            Self::Ace => 1,
            Self::Two => 2,
            Self::Three => 3,
            Self::Four => 4,
            Self::Five => 5,
            Self::Six => 6,
            Self::Seven => 7,
            Self::Eight => 8,
            Self::Nine => 9,
            Self::Ten | Self::Jack | Self::Queen | Self::King => 10,
        }
    }

    /// Returns the rank glyph.
    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::Ace => "A",
            Self::Two => "2",
            Self::Three => "3",
            Self::Four => "4",
            Self::Five => "5",
            Self::Six => "6",
            Self::Seven => "7",
            Self::Eight => "8",
            Self::Nine => "9",
            Self::Ten => "10",
            Self::Jack => "J",
            Self::Queen => "Q",
            Self::King => "K",
        }
    }
}

/// A playing card.
///
/// Rank and suit are fixed at construction; only the orientation changes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Card {
    rank: Rank,
    suit: Suit,
    face_up: bool,
}

impl Card {
    /// Creates a new face-up card.
    #[must_use]
    pub const fn new(rank: Rank, suit: Suit) -> Self {
        Self {
            rank,
            suit,
            face_up: true,
        }
    }

    /// Creates a new face-down card.
    #[must_use]
    pub const fn face_down(rank: Rank, suit: Suit) -> Self {
        Self {
            rank,
            suit,
            face_up: false,
        }
    }

    /// Returns the rank of the card.
    #[must_use]
    pub const fn rank(&self) -> Rank {
        self.rank
    }

    /// Returns the suit of the card.
    #[must_use]
    pub const fn suit(&self) -> Suit {
        self.suit
    }

    /// Returns whether the card is face up.
    #[must_use]
    pub const fn is_face_up(&self) -> bool {
        self.face_up
    }

    /// Turns the card over.
    pub const fn flip(&mut self) {
        self.face_up = !self.face_up;
    }

    /// Returns the point value of the card, or `None` while it is face down.
    #[must_use]
    pub const fn value(&self) -> Option<u8> {
        if self.face_up {
            Some(self.rank.points())
        } else {
            None
        }
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.face_up {
            write!(f, "{}{}", self.rank.symbol(), self.suit.symbol())
        } else {
            f.write_str("\u{25ae}\u{25ae}")
        }
    }
}

/// Number of cards per deck.
pub const DECK_SIZE: usize = Rank::ALL.len() * Suit::ALL.len();
