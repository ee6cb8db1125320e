//! A single replenishing deck.

use std::collections::VecDeque;

use rand::SeedableRng;
use rand::seq::SliceRandom;
use rand_chacha::ChaCha8Rng;
use tracing::{debug, info};

use crate::card::{Card, DECK_SIZE, Rank, Suit};
use crate::hand::Hand;

/// An ordered deck of cards dealt from the front.
///
/// When a deal finds the deck empty, a fresh 52-card set is built and
/// shuffled before the deal continues. Discarded cards are never returned.
///
/// ```
/// use tablejack::{DECK_SIZE, Deck, Hand};
///
/// let mut deck = Deck::shuffled(7);
/// let mut alice = Hand::new("Alice");
/// let mut dealer = Hand::new("Dealer");
///
/// deck.deal(&mut [&mut alice, &mut dealer], 2);
/// assert_eq!(alice.len(), 2);
/// assert_eq!(deck.len(), DECK_SIZE - 4);
/// ```
#[derive(Debug, Clone)]
pub struct Deck {
    cards: VecDeque<Card>,
    rng: ChaCha8Rng,
    replenished: usize,
}

impl Deck {
    /// Creates an empty deck whose shuffles are driven by `seed`.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            cards: VecDeque::with_capacity(DECK_SIZE),
            rng: ChaCha8Rng::seed_from_u64(seed),
            replenished: 0,
        }
    }

    /// Creates a populated and shuffled deck.
    #[must_use]
    pub fn shuffled(seed: u64) -> Self {
        let mut deck = Self::new(seed);
        deck.populate();
        deck.shuffle();
        deck
    }

    /// Clears the deck and refills it with the 52 standard cards, face up.
    pub fn populate(&mut self) {
        self.cards.clear();
        for suit in Suit::ALL {
            for rank in Rank::ALL {
                self.cards.push_back(Card::new(rank, suit));
            }
        }
        debug!(cards = self.cards.len(), "deck populated");
    }

    /// Randomly permutes the remaining cards.
    pub fn shuffle(&mut self) {
        self.cards.make_contiguous().shuffle(&mut self.rng);
    }

    /// Repopulates and reshuffles the deck.
    pub fn replenish(&mut self) {
        self.populate();
        self.shuffle();
        self.replenished += 1;
        info!(generation = self.replenished, "deck replenished and shuffled");
    }

    /// Removes the front card, replenishing first if the deck is empty.
    ///
    /// Returns the card and whether a replenishment happened.
    pub fn draw(&mut self) -> (Card, bool) {
        let mut replenished = false;
        loop {
            if let Some(card) = self.cards.pop_front() {
                return (card, replenished);
            }
            self.replenish();
            replenished = true;
        }
    }

    /// Deals `per_hand` rounds of one card to each recipient in order.
    ///
    /// Returns how many times the deck was replenished during the deal.
    pub fn deal(&mut self, recipients: &mut [&mut Hand], per_hand: usize) -> usize {
        let mut replenishments = 0;
        for _ in 0..per_hand {
            for hand in recipients.iter_mut() {
                let (card, replenished) = self.draw();
                if replenished {
                    replenishments += 1;
                }
                debug!(to = hand.name(), card = %card, "dealt");
                hand.add(card);
            }
        }
        replenishments
    }

    /// Returns the number of cards remaining.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the deck is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Returns the remaining cards, front first.
    pub fn cards(&self) -> impl ExactSizeIterator<Item = &Card> {
        self.cards.iter()
    }

    /// Replaces the remaining cards. The first card given is dealt first.
    pub fn set_cards(&mut self, cards: impl IntoIterator<Item = Card>) {
        self.cards = cards.into_iter().collect();
    }

    /// Returns how many times the deck has been replenished.
    #[must_use]
    pub const fn replenish_count(&self) -> usize {
        self.replenished
    }
}
