use crate::lotto::{Lotto, LottoError, WinningLotto};

/// Parse one numeric field; blankness has already been ruled out.
fn parse_number(raw: &str) -> Result<u8, LottoError> {
    let raw = raw.trim();
    let value: u32 = raw
        .parse()
        .map_err(|_e| LottoError::NotANumber(raw.to_owned()))?;
    u8::try_from(value).map_err(|_e| LottoError::NumberOutOfRange(value))
}

/// Blank-field check across all fields, ahead of any numeric parsing.
fn ensure_filled<S: AsRef<str>>(fields: &[S]) -> Result<(), LottoError> {
    if fields.iter().any(|field| field.as_ref().trim().is_empty()) {
        return Err(LottoError::EmptyInput);
    }
    Ok(())
}

fn to_numbers<S: AsRef<str>>(fields: &[S]) -> Result<Vec<u8>, LottoError> {
    fields
        .iter()
        .map(|field| parse_number(field.as_ref()))
        .collect()
}

/// Validate one manually entered ticket: blank check first, then numeric
/// parsing, then the ticket invariants.
pub fn parse_ticket_numbers<S: AsRef<str>>(fields: &[S]) -> Result<Lotto, LottoError> {
    ensure_filled(fields)?;
    let mut numbers = to_numbers(fields)?;
    Lotto::new(&mut numbers[..])
}

/// Validate the winning-number entry: six numbers plus a distinct bonus.
pub fn parse_winning_input<S: AsRef<str>>(
    fields: &[S],
    bonus_field: &str,
) -> Result<WinningLotto, LottoError> {
    ensure_filled(fields)?;
    if bonus_field.trim().is_empty() {
        return Err(LottoError::EmptyInput);
    }

    let mut numbers = to_numbers(fields)?;
    let bonus = parse_number(bonus_field)?;
    let numbers = Lotto::new(&mut numbers[..])?;
    WinningLotto::new(numbers, bonus)
}

/// Parse a purchase amount; the unit-price rules are checked by
/// `LottoRound::purchase`.
pub fn parse_purchase_amount(raw: &str) -> Result<u64, LottoError> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Err(LottoError::EmptyInput);
    }
    raw.parse()
        .map_err(|_e| LottoError::NotANumber(raw.to_owned()))
}
