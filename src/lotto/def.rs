use console::style;
use serde::{Deserialize, Serialize};
use std::fmt::Display;

use crate::round::Phase;

/// Smallest pickable number.
pub const MIN_NUMBER: u8 = 1;
/// Largest pickable number.
pub const MAX_NUMBER: u8 = 45;
/// Numbers on one ticket.
pub const TICKET_SIZE: usize = 6;
/// Fixed cost of one ticket.
pub const UNIT_PRICE: u64 = 1000;

/// One purchased ticket: six unique numbers, stored sorted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Lotto {
    pub(crate) numbers: [u8; TICKET_SIZE],
}

impl Display for Lotto {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let picks = self
            .numbers
            .iter()
            .map(|n| format!("{n:2}"))
            .collect::<Vec<_>>()
            .join(" ");
        write!(f, "{}", style(picks).yellow().bold())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LottoError {
    EmptyInput,
    NotANumber(String),
    InvalidNumberCount(usize),
    NumberOutOfRange(u32),
    DuplicateNumber,
    BonusDuplicate(u8),
    InvalidPurchaseAmount(u64),
    BundleFull(usize),
    InvalidPhase(Phase),
}

impl Display for LottoError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyInput => write!(f, "A required field is empty"),
            Self::NotANumber(raw) => write!(f, "`{raw}` is not a whole number"),
            Self::InvalidNumberCount(count) => {
                write!(f, "Invalid number of picks: expected {TICKET_SIZE}, got {count}")
            }
            Self::NumberOutOfRange(number) => {
                write!(f, "Number {number} is out of range ({MIN_NUMBER}-{MAX_NUMBER})")
            }
            Self::DuplicateNumber => write!(f, "Duplicate numbers found"),
            Self::BonusDuplicate(bonus) => {
                write!(f, "Bonus number {bonus} repeats one of the winning numbers")
            }
            Self::InvalidPurchaseAmount(amount) => {
                write!(f, "Purchase amount {amount} is not a positive multiple of {UNIT_PRICE}")
            }
            Self::BundleFull(capacity) => {
                write!(f, "Bundle already holds the {capacity} paid tickets")
            }
            Self::InvalidPhase(phase) => {
                write!(f, "Operation not allowed while the round is {phase}")
            }
        }
    }
}

impl std::error::Error for LottoError {}

impl Lotto {
    /// Build a ticket from six numbers, sorting them in place.
    pub fn new(mut numbers: impl AsMut<[u8]>) -> Result<Self, LottoError> {
        let numbers = numbers.as_mut();
        let count = numbers.len();
        if count != TICKET_SIZE {
            return Err(LottoError::InvalidNumberCount(count));
        }

        for &number in numbers.iter() {
            if number < MIN_NUMBER || number > MAX_NUMBER {
                return Err(LottoError::NumberOutOfRange(u32::from(number)));
            }
        }

        numbers.sort_unstable();
        if numbers.windows(2).any(|w| w[0] == w[1]) {
            return Err(LottoError::DuplicateNumber);
        }

        let numbers: [u8; TICKET_SIZE] = numbers
            .try_into()
            .map_err(|_e| LottoError::InvalidNumberCount(count))?;

        Ok(Self { numbers })
    }

    /// The six picks, ascending.
    pub fn numbers(&self) -> [u8; TICKET_SIZE] {
        self.numbers
    }
}

/// The drawn numbers of a round: a full ticket plus a distinct bonus.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WinningLotto {
    pub(crate) numbers: Lotto,
    pub(crate) bonus: u8,
}

impl Display for WinningLotto {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.numbers, style(self.bonus).cyan().bold())
    }
}

impl WinningLotto {
    pub fn new(numbers: Lotto, bonus: u8) -> Result<Self, LottoError> {
        if bonus < MIN_NUMBER || bonus > MAX_NUMBER {
            return Err(LottoError::NumberOutOfRange(u32::from(bonus)));
        }
        if numbers.contains(bonus) {
            return Err(LottoError::BonusDuplicate(bonus));
        }
        Ok(Self { numbers, bonus })
    }

    pub fn numbers(&self) -> &Lotto {
        &self.numbers
    }

    pub fn bonus(&self) -> u8 {
        self.bonus
    }
}

/// Prize tier of one ticket.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Rank {
    First,
    Second,
    Third,
    Fourth,
    Fifth,
    NoWin,
}

impl Rank {
    /// All tiers in winning order, `NoWin` last.
    pub const ALL: [Self; 6] = [
        Self::First,
        Self::Second,
        Self::Third,
        Self::Fourth,
        Self::Fifth,
        Self::NoWin,
    ];

    /// get the prize amount
    pub fn prize_amount(&self) -> u64 {
        match self {
            Self::First => 2_000_000_000,
            Self::Second => 30_000_000,
            Self::Third => 1_500_000,
            Self::Fourth => 50_000,
            Self::Fifth => 5_000,
            Self::NoWin => 0,
        }
    }

    /// get the prize description
    pub fn description(&self) -> &'static str {
        match self {
            Self::First => "#1",
            Self::Second => "#2",
            Self::Third => "#3",
            Self::Fourth => "#4",
            Self::Fifth => "#5",
            Self::NoWin => "#0",
        }
    }
}
