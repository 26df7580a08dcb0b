//! Time → words: the one piece of real logic in the clock.
//!
//! `resolve` is a total, pure function from a 24-hour wall time to the
//! ordered list of words to light. Minutes are floored to the nearest
//! multiple of five, so :00–:04 all read as the hour, :05–:09 as "five
//! past", and so on — the clock deliberately lags rather than rounds.

use crate::grid::Word;

// ── Helpers ──────────────────────────────────────────────────────────

/// 24-hour → 12-hour, with 0 and 12 both reading as twelve.
pub fn hour12(hour24: u32) -> u32 {
    match hour24 % 12 {
        0 => 12,
        h => h,
    }
}

/// Floor a minute to its five-minute bucket.
pub fn round_to_five(minute: u32) -> u32 {
    (minute % 60) / 5 * 5
}

/// Numeral 1–12 as a grid word. The numerals 5 and 10 have distinct
/// hour-role tokens; every other numeral is the same word in both roles.
fn numeral(n: u32, hour_form: bool) -> Word {
    match n {
        1 => Word::One,
        2 => Word::Two,
        3 => Word::Three,
        4 => Word::Four,
        5 if hour_form => Word::FiveHour,
        5 => Word::Five,
        6 => Word::Six,
        7 => Word::Seven,
        8 => Word::Eight,
        9 => Word::Nine,
        10 if hour_form => Word::TenHour,
        10 => Word::Ten,
        11 => Word::Eleven,
        12 => Word::Twelve,
        _ => unreachable!("numeral {n} outside 1..=12"),
    }
}

// ── Resolver ─────────────────────────────────────────────────────────

/// One resolved tick: computed fresh each minute, discarded after
/// rendering.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ResolvedTime {
    /// Hour in 1–12 form.
    pub hour12: u32,
    /// Minute floored to a multiple of five.
    pub minute: u32,
    /// Words in display-phrase order. Rendering only cares about set
    /// membership; the order is for humans reading the logs.
    pub words: Vec<Word>,
}

/// Map a wall-clock time to the words to illuminate.
///
/// Total over all of `u32 × u32`: inputs are reduced mod 24 / mod 60, so
/// a confused caller gets a wrapped time rather than a panic.
pub fn resolve(hour24: u32, minute: u32) -> ResolvedTime {
    let hour = hour12(hour24 % 24);
    let minute = round_to_five(minute);

    // Past the half-hour the phrase names the upcoming hour.
    let next_hour = hour % 12 + 1;
    let to_hour = numeral(next_hour, matches!(next_hour, 5 | 10));

    let words = match minute {
        0 => vec![numeral(hour, true), Word::Oclock],
        5 => vec![Word::Five, Word::Past, numeral(hour, false)],
        10 => vec![Word::Ten, Word::Past, numeral(hour, false)],
        15 => vec![Word::Quarter, Word::Past, numeral(hour, false)],
        20 => vec![Word::Twenty, Word::Past, numeral(hour, false)],
        25 => vec![Word::Twenty, Word::Five, Word::Past, numeral(hour, false)],
        30 => vec![Word::Half, Word::Past, numeral(hour, false)],
        35 => vec![Word::Twenty, Word::Five, Word::To, to_hour],
        40 => vec![Word::Twenty, Word::To, to_hour],
        45 => vec![Word::Quarter, Word::To, to_hour],
        50 => vec![Word::Ten, Word::To, to_hour],
        55 => vec![Word::Five, Word::To, to_hour],
        _ => unreachable!("minute {minute} is floored to a multiple of five"),
    };

    ResolvedTime {
        hour12: hour,
        minute,
        words,
    }
}

// ── Tests ────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[test]
    fn rounding_is_idempotent_over_the_full_minute_range() {
        for minute in 0..60 {
            let once = round_to_five(minute);
            assert_eq!(round_to_five(once), once);
            assert_eq!(once % 5, 0);
            assert!(once <= minute);
        }
    }

    #[rstest]
    #[case(0, 12)]
    #[case(1, 1)]
    #[case(11, 11)]
    #[case(12, 12)]
    #[case(13, 1)]
    #[case(23, 11)]
    fn hour12_wraps_correctly(#[case] hour24: u32, #[case] expected: u32) {
        assert_eq!(hour12(hour24), expected);
    }

    #[test]
    fn resolve_is_nonempty_for_every_minute_of_the_day() {
        for hour24 in 0..24 {
            for minute in 0..60 {
                let resolved = resolve(hour24, minute);
                assert!(!resolved.words.is_empty(), "{hour24}:{minute} resolved empty");
                assert!((1..=12).contains(&resolved.hour12));
                // Every word must have somewhere to light up.
                for word in &resolved.words {
                    assert!(!word.cells().is_empty(), "{word:?} maps to no cells");
                }
            }
        }
    }

    #[rstest]
    // On the hour: hour numeral in hour form, then OCLOCK.
    #[case(15, 0, vec![Word::Three, Word::Oclock])]
    #[case(0, 3, vec![Word::Twelve, Word::Oclock])]
    #[case(17, 2, vec![Word::FiveHour, Word::Oclock])]
    #[case(22, 0, vec![Word::TenHour, Word::Oclock])]
    // Past the hour: minute words first, hour numeral in minute form.
    #[case(9, 5, vec![Word::Five, Word::Past, Word::Nine])]
    #[case(10, 14, vec![Word::Ten, Word::Past, Word::Ten])]
    #[case(6, 15, vec![Word::Quarter, Word::Past, Word::Six])]
    #[case(13, 22, vec![Word::Twenty, Word::Past, Word::One])]
    #[case(8, 25, vec![Word::Twenty, Word::Five, Word::Past, Word::Eight])]
    #[case(12, 30, vec![Word::Half, Word::Past, Word::Twelve])]
    // To the next hour: hour form only when the next hour is 5 or 10.
    #[case(4, 37, vec![Word::Twenty, Word::Five, Word::To, Word::FiveHour])]
    #[case(4, 40, vec![Word::Twenty, Word::To, Word::FiveHour])]
    #[case(14, 47, vec![Word::Quarter, Word::To, Word::Three])]
    #[case(9, 50, vec![Word::Ten, Word::To, Word::TenHour])]
    #[case(23, 55, vec![Word::Five, Word::To, Word::Twelve])]
    #[case(11, 59, vec![Word::Five, Word::To, Word::Twelve])]
    fn resolve_matches_phrase_templates(
        #[case] hour24: u32,
        #[case] minute: u32,
        #[case] expected: Vec<Word>,
    ) {
        assert_eq!(resolve(hour24, minute).words, expected);
    }

    #[test]
    fn resolve_records_the_rounded_minute() {
        let resolved = resolve(14, 47);
        assert_eq!(resolved.minute, 45);
        assert_eq!(resolved.hour12, 2);
    }

    #[test]
    fn resolve_wraps_out_of_range_inputs_instead_of_panicking() {
        assert_eq!(resolve(24, 60).words, resolve(0, 0).words);
        assert_eq!(resolve(27, 65).words, resolve(3, 5).words);
    }
}
