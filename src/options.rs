//! Table configuration options.

/// Most players a table seats.
pub const MAX_PLAYERS: u8 = 7;

/// Configuration options for a blackjack table.
///
/// Use the builder pattern to customize options:
///
/// ```
/// use tablejack::TableOptions;
///
/// let options = TableOptions::default()
///     .with_starting_capital(250)
///     .with_max_players(4)
///     .with_reshuffle_below(10);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TableOptions {
    /// Capital each player starts with.
    pub starting_capital: usize,
    /// Dealer hits while the total is below this value.
    pub dealer_stands_on: u8,
    /// Maximum number of seated players, from 1 to [`MAX_PLAYERS`].
    /// Values outside that range are clamped when players join.
    pub max_players: u8,
    /// Cards remaining below which the deck is replenished before a deal.
    /// 0 to disable.
    pub reshuffle_below: usize,
}

impl Default for TableOptions {
    fn default() -> Self {
        Self {
            starting_capital: 100,
            dealer_stands_on: 17,
            max_players: MAX_PLAYERS,
            reshuffle_below: 0,
        }
    }
}

impl TableOptions {
    /// Sets the starting capital.
    ///
    /// # Example
    ///
    /// ```
    /// use tablejack::TableOptions;
    ///
    /// let options = TableOptions::default().with_starting_capital(500);
    /// assert_eq!(options.starting_capital, 500);
    /// ```
    #[must_use]
    pub const fn with_starting_capital(mut self, capital: usize) -> Self {
        self.starting_capital = capital;
        self
    }

    /// Sets the total the dealer stands on.
    ///
    /// # Example
    ///
    /// ```
    /// use tablejack::TableOptions;
    ///
    /// let options = TableOptions::default().with_dealer_stands_on(16);
    /// assert_eq!(options.dealer_stands_on, 16);
    /// ```
    #[must_use]
    pub const fn with_dealer_stands_on(mut self, total: u8) -> Self {
        self.dealer_stands_on = total;
        self
    }

    /// Sets the maximum number of seated players, clamped to
    /// `1..=MAX_PLAYERS`.
    ///
    /// # Example
    ///
    /// ```
    /// use tablejack::{MAX_PLAYERS, TableOptions};
    ///
    /// assert_eq!(TableOptions::default().with_max_players(4).max_players, 4);
    /// assert_eq!(TableOptions::default().with_max_players(0).max_players, 1);
    /// assert_eq!(TableOptions::default().with_max_players(12).max_players, MAX_PLAYERS);
    /// ```
    #[must_use]
    pub const fn with_max_players(mut self, players: u8) -> Self {
        self.max_players = if players == 0 {
            1
        } else if players > MAX_PLAYERS {
            MAX_PLAYERS
        } else {
            players
        };
        self
    }

    /// Sets the low-deck threshold checked before each initial deal.
    ///
    /// # Example
    ///
    /// ```
    /// use tablejack::TableOptions;
    ///
    /// let options = TableOptions::default().with_reshuffle_below(10);
    /// assert_eq!(options.reshuffle_below, 10);
    /// ```
    #[must_use]
    pub const fn with_reshuffle_below(mut self, cards: usize) -> Self {
        self.reshuffle_below = cards;
        self
    }
}
