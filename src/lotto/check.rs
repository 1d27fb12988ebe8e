use crate::lotto::{Lotto, Rank, WinningLotto};

impl Lotto {
    /// Count how many of this ticket's numbers appear in another set
    ///
    /// # Parameters
    /// * `other` - The set to intersect with, usually the winning numbers
    ///
    /// # Returns
    /// The size of the intersection, 0 to 6
    pub fn match_count(&self, other: &Self) -> usize {
        self.numbers
            .iter()
            .filter(|&n| other.numbers.contains(n))
            .count()
    }

    /// Membership test for a single number.
    pub fn contains(&self, number: u8) -> bool {
        self.numbers.contains(&number)
    }

    /// Determine the prize tier against a winning draw.
    pub fn rank(&self, winning: &WinningLotto) -> Rank {
        let matches = self.match_count(&winning.numbers);
        let bonus_match = self.contains(winning.bonus);

        match (matches, bonus_match) {
            (6, _) => Rank::First,
            (5, true) => Rank::Second,
            (5, false) => Rank::Third,
            (4, _) => Rank::Fourth,
            (3, _) => Rank::Fifth,
            _ => Rank::NoWin,
        }
    }

    /// Rank every ticket in a bundle, preserving ticket order.
    pub fn rank_all(tickets: &[Self], winning: &WinningLotto) -> Vec<Rank> {
        tickets.iter().map(|ticket| ticket.rank(winning)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lotto::LottoError;

    fn create_test_ticket(numbers: [u8; 6]) -> Lotto {
        let mut numbers = numbers;
        Lotto::new(&mut numbers[..]).unwrap()
    }

    fn create_test_draw(numbers: [u8; 6], bonus: u8) -> WinningLotto {
        WinningLotto::new(create_test_ticket(numbers), bonus).unwrap()
    }

    #[test]
    fn test_first_prize() {
        let winning = create_test_draw([1, 2, 3, 4, 5, 6], 7);
        let ticket = create_test_ticket([1, 2, 3, 4, 5, 6]);

        let result = ticket.rank(&winning);
        assert_eq!(result, Rank::First);
        assert_eq!(result.prize_amount(), 2_000_000_000);
    }

    #[test]
    fn test_second_prize_five_matches_with_bonus() {
        let winning = create_test_draw([1, 2, 3, 4, 5, 6], 7);
        let ticket = create_test_ticket([1, 2, 3, 4, 5, 7]);

        let result = ticket.rank(&winning);
        assert_eq!(result, Rank::Second);
        assert_eq!(result.prize_amount(), 30_000_000);
    }

    #[test]
    fn test_third_prize_five_matches_without_bonus() {
        let winning = create_test_draw([1, 2, 3, 4, 5, 6], 8);
        let ticket = create_test_ticket([1, 2, 3, 4, 5, 7]);

        let result = ticket.rank(&winning);
        assert_eq!(result, Rank::Third);
        assert_eq!(result.prize_amount(), 1_500_000);
    }

    #[test]
    fn test_fourth_prize() {
        let winning = create_test_draw([1, 2, 3, 4, 5, 6], 7);
        let ticket = create_test_ticket([1, 2, 3, 4, 10, 11]);

        let result = ticket.rank(&winning);
        assert_eq!(result, Rank::Fourth);
        assert_eq!(result.prize_amount(), 50_000);
    }

    #[test]
    fn test_fifth_prize() {
        let winning = create_test_draw([1, 2, 3, 4, 5, 6], 7);
        let ticket = create_test_ticket([1, 2, 3, 10, 11, 12]);

        let result = ticket.rank(&winning);
        assert_eq!(result, Rank::Fifth);
        assert_eq!(result.prize_amount(), 5_000);
    }

    #[test]
    fn test_no_win_two_matches() {
        let winning = create_test_draw([1, 2, 3, 4, 5, 6], 7);
        let ticket = create_test_ticket([1, 2, 10, 11, 12, 13]);

        let result = ticket.rank(&winning);
        assert_eq!(result, Rank::NoWin);
        assert_eq!(result.prize_amount(), 0);
    }

    #[test]
    fn test_bonus_does_not_promote_below_five_matches() {
        // 4 matches + bonus is still fourth prize
        let winning = create_test_draw([1, 2, 3, 4, 5, 6], 7);
        let ticket = create_test_ticket([1, 2, 3, 4, 7, 11]);

        assert_eq!(ticket.rank(&winning), Rank::Fourth);
    }

    #[test]
    fn test_match_count_against_self_is_six() {
        let ticket = create_test_ticket([3, 11, 19, 27, 35, 43]);
        assert_eq!(ticket.match_count(&ticket), 6);
    }

    #[test]
    fn test_rank_is_order_independent() {
        let winning = create_test_draw([6, 5, 4, 3, 2, 1], 7);
        let shuffled = create_test_ticket([7, 5, 3, 1, 2, 4]);
        let sorted = create_test_ticket([1, 2, 3, 4, 5, 7]);

        assert_eq!(shuffled, sorted);
        assert_eq!(shuffled.rank(&winning), sorted.rank(&winning));
        assert_eq!(shuffled.rank(&winning), Rank::Second);
    }

    #[test]
    fn test_rank_all_preserves_order_and_skips_nothing() {
        let winning = create_test_draw([1, 2, 3, 4, 5, 6], 7);
        let tickets = vec![
            create_test_ticket([1, 2, 3, 4, 5, 6]),
            create_test_ticket([10, 11, 12, 13, 14, 15]),
            create_test_ticket([1, 2, 3, 4, 5, 7]),
        ];

        let ranks = Lotto::rank_all(&tickets, &winning);
        assert_eq!(ranks, vec![Rank::First, Rank::NoWin, Rank::Second]);
    }

    #[test]
    fn test_ticket_creation_valid() {
        let mut numbers = [45, 1, 22, 8, 13, 30];
        let ticket = Lotto::new(&mut numbers[..]).unwrap();
        assert_eq!(ticket.numbers(), [1, 8, 13, 22, 30, 45]);
    }

    #[test]
    fn test_ticket_creation_invalid_count() {
        let mut numbers = [1, 2, 3, 4, 5];
        assert_eq!(
            Lotto::new(&mut numbers[..]),
            Err(LottoError::InvalidNumberCount(5))
        );

        let mut numbers = [1, 2, 3, 4, 5, 6, 7];
        assert_eq!(
            Lotto::new(&mut numbers[..]),
            Err(LottoError::InvalidNumberCount(7))
        );
    }

    #[test]
    fn test_ticket_creation_out_of_range() {
        let mut numbers = [1, 2, 3, 4, 5, 46];
        assert_eq!(
            Lotto::new(&mut numbers[..]),
            Err(LottoError::NumberOutOfRange(46))
        );

        let mut numbers = [0, 2, 3, 4, 5, 6];
        assert_eq!(
            Lotto::new(&mut numbers[..]),
            Err(LottoError::NumberOutOfRange(0))
        );
    }

    #[test]
    fn test_ticket_creation_duplicate() {
        let mut numbers = [1, 2, 2, 4, 5, 6];
        assert_eq!(
            Lotto::new(&mut numbers[..]),
            Err(LottoError::DuplicateNumber)
        );
    }

    #[test]
    fn test_draw_rejects_bonus_among_numbers() {
        let numbers = create_test_ticket([1, 2, 3, 4, 5, 6]);
        assert_eq!(
            WinningLotto::new(numbers, 6),
            Err(LottoError::BonusDuplicate(6))
        );
    }

    #[test]
    fn test_draw_rejects_bonus_out_of_range() {
        let numbers = create_test_ticket([1, 2, 3, 4, 5, 6]);
        assert_eq!(
            WinningLotto::new(numbers, 46),
            Err(LottoError::NumberOutOfRange(46))
        );
    }
}
