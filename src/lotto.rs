pub mod check;
pub mod def;
pub mod generate;

pub use def::{
    Lotto, LottoError, MAX_NUMBER, MIN_NUMBER, Rank, TICKET_SIZE, UNIT_PRICE, WinningLotto,
};
