//! Contact detail formatting for generated people.
//!
//! Generated names come from `fake` and may contain apostrophes, hyphens or
//! accents. Email local parts keep only lowercase ASCII alphanumerics so every
//! generated address is deliverable-looking.

use rand::Rng;
use rand::seq::IndexedRandom;

/// Domain used for generated email addresses.
pub const EXAMPLE_EMAIL_DOMAIN: &str = "example.com";

/// Street names used for generated addresses.
const STREETS: [&str; 5] = ["Main", "Oak", "Maple", "Pine", "Cedar"];

/// City used for generated addresses.
const CITY: &str = "Cape Town";

/// Builds `first.last@example.com` from a person's name parts.
///
/// # Examples
///
/// ```
/// use example_data::email_for;
///
/// assert_eq!(email_for("Ada", "Lovelace"), "ada.lovelace@example.com");
/// assert_eq!(email_for("Seán", "O'Brien"), "sen.obrien@example.com");
/// ```
#[must_use]
pub fn email_for(first: &str, last: &str) -> String {
    format!(
        "{}.{}@{EXAMPLE_EMAIL_DOMAIN}",
        email_local_part(first),
        email_local_part(last)
    )
}

fn email_local_part(part: &str) -> String {
    part.chars()
        .filter(char::is_ascii_alphanumeric)
        .map(|c| c.to_ascii_lowercase())
        .collect()
}

/// Draws a South African number in `+27 ddd dddd` form.
pub(crate) fn phone_number<R: Rng + ?Sized>(rng: &mut R) -> String {
    let exchange: u16 = rng.random_range(100..=999);
    let line: u16 = rng.random_range(1000..=9999);
    format!("+27 {exchange} {line}")
}

/// Draws a street address such as `42 Oak St, Cape Town`.
pub(crate) fn street_address<R: Rng + ?Sized>(rng: &mut R) -> String {
    let number: u8 = rng.random_range(1..=100);
    let street = STREETS.choose(rng).copied().unwrap_or("Main");
    format!("{number} {street} St, {CITY}")
}

#[cfg(test)]
mod tests {
    //! Covers email normalisation and phone/address shapes.

    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case("Ada", "Lovelace", "ada.lovelace@example.com")]
    #[case("Mary-Jane", "Watson", "maryjane.watson@example.com")]
    #[case("Patrick", "O'Conner", "patrick.oconner@example.com")]
    #[case("ZOE", "SMITH", "zoe.smith@example.com")]
    fn builds_lowercase_ascii_emails(#[case] first: &str, #[case] last: &str, #[case] expected: &str) {
        assert_eq!(email_for(first, last), expected);
    }

    #[test]
    fn phone_numbers_use_south_african_format() {
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        for _ in 0..50 {
            let phone = phone_number(&mut rng);
            let digits: Vec<&str> = phone.split(' ').collect();
            assert_eq!(digits.first().copied(), Some("+27"), "{phone}");
            assert_eq!(digits.get(1).map(|d| d.len()), Some(3), "{phone}");
            assert_eq!(digits.get(2).map(|d| d.len()), Some(4), "{phone}");
        }
    }

    #[test]
    fn addresses_name_a_known_street() {
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        for _ in 0..50 {
            let address = street_address(&mut rng);
            assert!(address.ends_with(" St, Cape Town"), "{address}");
            assert!(
                STREETS.iter().any(|street| address.contains(street)),
                "{address}"
            );
        }
    }
}
