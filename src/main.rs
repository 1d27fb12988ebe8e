#![warn(clippy::all, rust_2018_idioms)]

use lotto::lotto::{Lotto, WinningLotto};
use lotto::round::LottoRound;

fn main() -> anyhow::Result<()> {
    env_logger::Builder::new()
        .filter_level(log::LevelFilter::Info)
        .init();

    let mut round = LottoRound::new();

    let count = round.purchase(14_000)?;
    log::info!("Bought {count} tickets");

    round.add_tickets(Lotto::generate_multiple(count))?;
    for ticket in round.tickets() {
        log::info!("Ticket: {ticket}");
    }

    let winning = WinningLotto::generate_random();
    log::info!("Winning numbers: {winning}");
    round.set_winning_numbers(winning)?;

    let result = round.results()?;
    for (rank, count) in result.tally.iter() {
        log::info!("{}: {count}", rank.description());
    }
    log::info!("Total prize: {}", result.total_prize);
    log::info!("Yield: {:.2}", result.yield_rate);

    round.reset();
    Ok(())
}
