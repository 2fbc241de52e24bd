//! Display helpers shared by the console views.

use chrono::NaiveDate;

/// Format a date as `dd/mm/yyyy`.
///
/// # Examples
/// ```
/// use chrono::NaiveDate;
/// use practice_admin::domain::format_date;
///
/// let date = NaiveDate::from_ymd_opt(2026, 3, 7).expect("valid date");
/// assert_eq!(format_date(date), "07/03/2026");
/// ```
#[must_use]
pub fn format_date(date: NaiveDate) -> String {
    date.format("%d/%m/%Y").to_string()
}

/// Format an amount in cents as South African rand, grouping thousands with
/// spaces and using a decimal comma.
///
/// # Examples
/// ```
/// use practice_admin::domain::format_currency;
///
/// assert_eq!(format_currency(123_456), "R 1 234,56");
/// assert_eq!(format_currency(-5), "-R 0,05");
/// ```
#[must_use]
pub fn format_currency(cents: i64) -> String {
    let sign = if cents < 0 { "-" } else { "" };
    let magnitude = cents.unsigned_abs();
    let rands = magnitude.checked_div(CENTS_PER_RAND).unwrap_or_default();
    let fraction = magnitude.checked_rem(CENTS_PER_RAND).unwrap_or_default();
    format!("{sign}R {},{fraction:02}", group_thousands(rands))
}

const CENTS_PER_RAND: u64 = 100;

/// Digits of `value` in groups of three separated by spaces.
fn group_thousands(value: u64) -> String {
    let digits: Vec<char> = value.to_string().chars().collect();
    let mut groups: Vec<String> = digits
        .rchunks(3)
        .map(|chunk| chunk.iter().collect())
        .collect();
    groups.reverse();
    groups.join(" ")
}

/// Upper-case first letters of each space-separated word.
///
/// # Examples
/// ```
/// use practice_admin::domain::initials;
///
/// assert_eq!(initials("John Smith"), "JS");
/// ```
#[must_use]
pub fn initials(name: &str) -> String {
    name.split_whitespace()
        .filter_map(|word| word.chars().next())
        .flat_map(char::to_uppercase)
        .collect()
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case(0, "R 0,00")]
    #[case(99, "R 0,99")]
    #[case(100_000, "R 1 000,00")]
    #[case(123_456_789, "R 1 234 567,89")]
    #[case(-250_000, "-R 2 500,00")]
    fn currency_groups_thousands(#[case] cents: i64, #[case] expected: &str) {
        assert_eq!(format_currency(cents), expected);
    }

    #[rstest]
    #[case(0, "0")]
    #[case(999, "999")]
    #[case(1_000, "1 000")]
    #[case(12_345_678, "12 345 678")]
    #[case(u64::MAX, "18 446 744 073 709 551 615")]
    fn thousands_are_grouped_from_the_right(#[case] value: u64, #[case] expected: &str) {
        assert_eq!(group_thousands(value), expected);
    }

    #[test]
    fn most_negative_amount_is_formatted() {
        assert_eq!(format_currency(i64::MIN), "-R 92 233 720 368 547 758,08");
    }

    #[rstest]
    #[case("Adrian Stefan", "AS")]
    #[case("mary ann lee", "MAL")]
    #[case("  Cher ", "C")]
    #[case("", "")]
    fn initials_take_each_word(#[case] name: &str, #[case] expected: &str) {
        assert_eq!(initials(name), expected);
    }

    #[test]
    fn dates_are_day_first() {
        let date = NaiveDate::from_ymd_opt(2024, 12, 31).expect("valid date");
        assert_eq!(format_date(date), "31/12/2024");
    }
}
