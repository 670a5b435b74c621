use crate::core::config::PuzzleConfig;
use crate::core::state::{Bank, PuzzleState};

/// A bank is safe when its missionaries, if any, are not outnumbered.
#[inline]
pub fn bank_is_safe(bank: Bank) -> bool {
    bank.missionaries == 0 || bank.missionaries >= bank.cannibals
}

/// Both starting-bank counts lie in `0..=population`.
#[inline]
pub fn counts_in_range(config: &PuzzleConfig, s: &PuzzleState) -> bool {
    let range = 0..=config.population;
    range.contains(&s.missionaries) && range.contains(&s.cannibals)
}

/// True iff the counts are in range and neither bank violates the safety rule.
pub fn is_valid(config: &PuzzleConfig, s: &PuzzleState) -> bool {
    counts_in_range(config, s)
        && bank_is_safe(s.start_bank())
        && bank_is_safe(s.far_bank(config))
}
