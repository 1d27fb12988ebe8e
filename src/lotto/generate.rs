use std::collections::HashSet;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::lotto::def::{Lotto, MAX_NUMBER, MIN_NUMBER, TICKET_SIZE, WinningLotto};

/// Draw unique numbers until a full ticket is assembled.
fn fill_ticket(rng: &mut impl Rng) -> Lotto {
    loop {
        let mut picks = HashSet::new();
        while picks.len() < TICKET_SIZE {
            picks.insert(rng.gen_range(MIN_NUMBER..=MAX_NUMBER));
        }

        let mut picks: Vec<u8> = picks.into_iter().collect();
        picks.sort_unstable();

        // Validate through the constructor; retry if it rejects.
        if let Ok(ticket) = Lotto::new(&mut picks[..]) {
            return ticket;
        }
    }
}

impl Lotto {
    /// Generate a random ticket
    pub fn generate_random() -> Self {
        fill_ticket(&mut rand::thread_rng())
    }

    /// Generate a random ticket with a specific seed
    pub fn generate_with_seed(seed: u64) -> Self {
        fill_ticket(&mut StdRng::seed_from_u64(seed))
    }

    /// Generate multiple random tickets
    pub fn generate_multiple(count: usize) -> Vec<Self> {
        let mut rng = rand::thread_rng();
        (0..count).map(|_| fill_ticket(&mut rng)).collect()
    }
}

impl WinningLotto {
    /// Generate a random draw, bonus distinct from the six numbers.
    pub fn generate_random() -> Self {
        let mut rng = rand::thread_rng();
        loop {
            let numbers = fill_ticket(&mut rng);
            let bonus = rng.gen_range(MIN_NUMBER..=MAX_NUMBER);
            if let Ok(winning) = Self::new(numbers, bonus) {
                return winning;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generator_with_seed_is_reproducible() {
        let ticket1 = Lotto::generate_with_seed(12345);
        let ticket2 = Lotto::generate_with_seed(12345);

        // Numbers are stored sorted, so equality compares the sets.
        assert_eq!(ticket1, ticket2);
    }

    #[test]
    fn test_generated_tickets_hold_the_invariants() {
        for seed in 0..50 {
            let ticket = Lotto::generate_with_seed(seed);
            let numbers = ticket.numbers();

            assert!(numbers.iter().all(|&n| (1..=45).contains(&n)));
            assert!(numbers.windows(2).all(|w| w[0] < w[1]), "sorted and unique");
        }
    }

    #[test]
    fn test_generate_multiple_count() {
        let tickets = Lotto::generate_multiple(14);
        assert_eq!(tickets.len(), 14);
    }

    #[test]
    fn test_generated_draw_has_distinct_bonus() {
        for _ in 0..20 {
            let winning = WinningLotto::generate_random();
            assert!(!winning.numbers().contains(winning.bonus()));
        }
    }
}
