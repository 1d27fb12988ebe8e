use std::fmt::Display;

use crate::lotto::{Lotto, LottoError, Rank, UNIT_PRICE, WinningLotto};
use crate::prize::{RankTally, yield_rate};

/// Lifecycle of one round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    #[default]
    Idle,
    Purchasing,
    Purchased,
    ResultInput,
    ResultComputed,
}

impl Display for Phase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::Idle => "idle",
            Self::Purchasing => "purchasing",
            Self::Purchased => "purchased",
            Self::ResultInput => "entering winning numbers",
            Self::ResultComputed => "results computed",
        };
        write!(f, "{name}")
    }
}

/// Everything the adapter needs to render a finished round.
#[derive(Debug, Clone, PartialEq)]
pub struct RoundResult {
    /// One rank per ticket, in bundle order.
    pub ranks: Vec<Rank>,
    pub tally: RankTally,
    pub total_prize: u64,
    pub yield_rate: f64,
}

/// Rank a bundle against a draw and aggregate its prize, independent of
/// any round state.
pub fn compute_results(tickets: &[Lotto], winning: &WinningLotto) -> (RankTally, u64) {
    let tally = RankTally::from_ranks(&Lotto::rank_all(tickets, winning));
    let total_prize = tally.total_prize();
    (tally, total_prize)
}

/// Owned state for one purchase/draw round.
///
/// The round walks Idle → Purchasing → Purchased → ResultInput →
/// ResultComputed; `reset` returns it to Idle from anywhere. A failed
/// validation leaves the round untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LottoRound {
    cash: u64,
    tickets: Vec<Lotto>,
    winning: Option<WinningLotto>,
    phase: Phase,
}

impl LottoRound {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn cash(&self) -> u64 {
        self.cash
    }

    pub fn tickets(&self) -> &[Lotto] {
        &self.tickets
    }

    pub fn winning(&self) -> Option<&WinningLotto> {
        self.winning.as_ref()
    }

    /// Number of tickets the committed cash pays for.
    pub fn paid_ticket_count(&self) -> usize {
        (self.cash / UNIT_PRICE) as usize
    }

    /// Commit a purchase amount and open the round.
    ///
    /// The amount must be a positive multiple of the unit price; no upper
    /// bound applies. Returns the number of tickets it pays for.
    pub fn purchase(&mut self, cash: u64) -> Result<usize, LottoError> {
        if self.phase != Phase::Idle {
            return Err(LottoError::InvalidPhase(self.phase));
        }
        if cash == 0 || cash % UNIT_PRICE != 0 {
            return Err(LottoError::InvalidPurchaseAmount(cash));
        }

        self.cash = cash;
        self.phase = Phase::Purchasing;
        log::debug!(
            "purchase committed: {cash} buys {} tickets",
            self.paid_ticket_count()
        );
        Ok(self.paid_ticket_count())
    }

    /// Append tickets to the bundle.
    ///
    /// Duplicate tickets across the bundle are allowed; only the paid
    /// count bounds it. The bundle finalizes once it is full.
    pub fn add_tickets(&mut self, tickets: Vec<Lotto>) -> Result<(), LottoError> {
        if self.phase != Phase::Purchasing {
            return Err(LottoError::InvalidPhase(self.phase));
        }
        let capacity = self.paid_ticket_count();
        if self.tickets.len() + tickets.len() > capacity {
            return Err(LottoError::BundleFull(capacity));
        }

        self.tickets.extend(tickets);
        if self.tickets.len() == capacity {
            self.phase = Phase::Purchased;
        }
        Ok(())
    }

    /// Abandon an in-flight purchase, dropping cash and staged tickets.
    pub fn cancel_purchase(&mut self) -> Result<(), LottoError> {
        if self.phase != Phase::Purchasing {
            return Err(LottoError::InvalidPhase(self.phase));
        }
        self.cash = 0;
        self.tickets.clear();
        self.phase = Phase::Idle;
        Ok(())
    }

    /// Fix the winning numbers for this round.
    pub fn set_winning_numbers(&mut self, winning: WinningLotto) -> Result<(), LottoError> {
        if self.phase != Phase::Purchased {
            return Err(LottoError::InvalidPhase(self.phase));
        }
        self.winning = Some(winning);
        self.phase = Phase::ResultInput;
        Ok(())
    }

    /// Rank the bundle and aggregate the prize. Repeatable once computed.
    pub fn results(&mut self) -> Result<RoundResult, LottoError> {
        if self.phase != Phase::ResultInput && self.phase != Phase::ResultComputed {
            return Err(LottoError::InvalidPhase(self.phase));
        }
        let Some(winning) = &self.winning else {
            return Err(LottoError::InvalidPhase(self.phase));
        };

        let ranks = Lotto::rank_all(&self.tickets, winning);
        let tally = RankTally::from_ranks(&ranks);
        let total_prize = tally.total_prize();
        // cash is at least one unit price past purchase, so the spend
        // guard cannot trip here.
        let yield_rate = yield_rate(total_prize, self.cash).unwrap_or_default();

        self.phase = Phase::ResultComputed;
        log::debug!("round computed: total prize {total_prize}, yield {yield_rate:.2}");
        Ok(RoundResult {
            ranks,
            tally,
            total_prize,
            yield_rate,
        })
    }

    /// Clear the round back to its initial state. Idempotent.
    pub fn reset(&mut self) {
        self.cash = 0;
        self.tickets.clear();
        self.winning = None;
        self.phase = Phase::Idle;
    }
}
