//! Hand representation and the ace rule.

use core::fmt;

use crate::card::{Card, Rank};

/// Highest total that is not a bust.
pub const BLACKJACK: u8 = 21;

/// Computes the total of a set of cards.
///
/// Every ace counts 1, and if the hand holds at least one ace and the raw sum
/// is at most 11, a single ace is promoted by adding 10. Returns `None` when
/// any card is face down. An empty slice totals 0.
#[must_use]
pub fn evaluate(cards: &[Card]) -> Option<u8> {
    let mut total: u8 = 0;
    let mut has_ace = false;

    for card in cards {
        total = total.saturating_add(card.value()?);
        if card.rank() == Rank::Ace {
            has_ace = true;
        }
    }

    if has_ace && total <= 11 {
        total += 10;
    }

    Some(total)
}

/// The cards held by one participant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Hand {
    /// Display label.
    name: String,
    /// Cards in deal order.
    cards: Vec<Card>,
}

impl Hand {
    /// Creates a new empty hand.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            cards: Vec::new(),
        }
    }

    /// Returns the display label.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Adds a card to the hand.
    pub fn add(&mut self, card: Card) {
        self.cards.push(card);
    }

    /// Returns the cards in the hand.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Discards every card.
    pub fn clear(&mut self) {
        self.cards.clear();
    }

    /// Turns over the first card. Returns `false` if the hand is empty.
    pub fn flip_first(&mut self) -> bool {
        self.cards.first_mut().map(Card::flip).is_some()
    }

    /// Returns the total, or `None` while any card is face down.
    #[must_use]
    pub fn total(&self) -> Option<u8> {
        evaluate(&self.cards)
    }

    /// Returns whether the total is known and over 21.
    #[must_use]
    pub fn is_busted(&self) -> bool {
        self.total().is_some_and(|total| total > BLACKJACK)
    }

    /// Returns the number of cards in the hand.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the hand is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}

impl fmt::Display for Hand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:\t", self.name)?;
        if self.cards.is_empty() {
            return f.write_str("<empty>");
        }

        for (index, card) in self.cards.iter().enumerate() {
            if index > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{card}")?;
        }

        if let Some(total) = self.total() {
            write!(f, " ({total})")?;
        }
        Ok(())
    }
}
