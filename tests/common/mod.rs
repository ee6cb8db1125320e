//! Shared helpers for integration tests.

#![allow(dead_code)]

use std::collections::VecDeque;

use tablejack::{Card, PromptError, Prompter, Rank, Suit, TableEvent};

pub const fn card(rank: Rank, suit: Suit) -> Card {
    Card::new(rank, suit)
}

/// Cards of the given ranks, cycling through the suits so repeats stay unique.
pub fn cards(ranks: &[Rank]) -> Vec<Card> {
    ranks
        .iter()
        .enumerate()
        .map(|(index, &rank)| Card::new(rank, Suit::ALL[index % Suit::ALL.len()]))
        .collect()
}

/// Answers questions from queued scripts and records every event it is told.
#[derive(Debug, Default)]
pub struct ScriptedPrompter {
    pub hits: VecDeque<bool>,
    pub bets: VecDeque<usize>,
    pub numbers: VecDeque<usize>,
    pub events: Vec<String>,
    pub questions: Vec<String>,
}

impl ScriptedPrompter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_bets(mut self, bets: &[usize]) -> Self {
        self.bets.extend(bets);
        self
    }

    pub fn with_hits(mut self, hits: &[bool]) -> Self {
        self.hits.extend(hits);
        self
    }

    pub fn saw(&self, needle: &str) -> bool {
        self.events.iter().any(|event| event.contains(needle))
    }
}

impl Prompter for ScriptedPrompter {
    fn ask_yes_no(&mut self, question: &str) -> Result<bool, PromptError> {
        self.questions.push(question.to_owned());
        self.hits.pop_front().ok_or(PromptError::Closed)
    }

    fn ask_number(
        &mut self,
        question: &str,
        _low: usize,
        _high: usize,
    ) -> Result<usize, PromptError> {
        self.questions.push(question.to_owned());
        self.numbers.pop_front().ok_or(PromptError::Closed)
    }

    fn ask_bet(&mut self, question: &str, _capital: usize) -> Result<usize, PromptError> {
        self.questions.push(question.to_owned());
        self.bets.pop_front().ok_or(PromptError::Closed)
    }

    fn notify(&mut self, event: &TableEvent<'_>) {
        self.events.push(event.to_string());
    }
}
