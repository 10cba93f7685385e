/// Replaces each uppercase letter A-Z with its two-digit code (A=10 .. Z=35).
/// Decimal digits are kept as they are. Any other character, lowercase
/// letters included, passes through unchanged and will poison the mod-97
/// reduction of its chunk; callers wanting case-insensitive input must
/// uppercase before calling.
pub fn numeric_transliterate(input: &str) -> String {
    let mut out = String::with_capacity(input.len() * 2);
    for ch in input.chars() {
        if ch.is_ascii_uppercase() {
            let value = ch as u32 - 'A' as u32 + 10;
            out.push_str(&value.to_string());
        } else {
            out.push(ch);
        }
    }
    out
}

/// Incremental mod-97 reduction of an arbitrarily long digit string: the
/// first nine digits, then chunks of seven, each chunk prefixed with the
/// zero-padded two-digit remainder carried from the one before. Equivalent to
/// reducing the whole string as one big integer. A chunk that fails to parse
/// as a number counts as zero, so garbage input degrades to a bogus remainder
/// instead of a failure.
pub fn mod97(numeric: &str) -> u32 {
    let digits: Vec<char> = numeric.chars().collect();
    let mut remainder: u32 = 0;
    let mut position = 0usize;

    loop {
        let step = if position == 0 { 9 } else { 7 };
        let end = (position + step).min(digits.len());
        let chunk: String = digits[position..end].iter().collect();
        let combined = format!("{:02}{}", remainder, chunk);
        remainder = combined
            .parse::<u64>()
            .map(|value| (value % 97) as u32)
            .unwrap_or(0);
        position += step;

        if position >= digits.len() {
            break;
        }
    }

    remainder
}

/// ISO 7064 check digits for `bban` under `country_iso`: rearrange as
/// `bban + country + "00"`, transliterate, reduce, and return `98 - r` as a
/// zero-padded two-digit string.
pub fn check_digits(country_iso: &str, bban: &str) -> String {
    let rearranged = format!("{}{}00", bban, country_iso);
    let remainder = mod97(&numeric_transliterate(&rearranged));
    format!("{:02}", 98 - remainder)
}

#[cfg(test)]
mod tests {
    use super::*;

    // Straight digit-at-a-time reduction, the textbook form of ISO 7064.
    fn mod97_digitwise(numeric: &str) -> u32 {
        let mut remainder: u32 = 0;
        for ch in numeric.chars() {
            if let Some(digit) = ch.to_digit(10) {
                remainder = (remainder * 10 + digit) % 97;
            }
        }
        remainder
    }

    #[test]
    fn transliteration_maps_letters_only() {
        assert_eq!(numeric_transliterate("GB82WEST"), "16118232142829");
        assert_eq!(numeric_transliterate("0123"), "0123");
        assert_eq!(numeric_transliterate(""), "");
    }

    #[test]
    fn lowercase_passes_through() {
        assert_eq!(numeric_transliterate("aB"), "a11");
    }

    #[test]
    fn chunked_reduction_matches_digitwise() {
        use rand::{Rng, SeedableRng};
        let mut rng = rand_chacha::ChaCha8Rng::seed_from_u64(97);
        let long: String = (0..400)
            .map(|_| char::from(b'0' + rng.gen_range(0..10u8)))
            .collect();
        assert_eq!(mod97(&long), mod97_digitwise(&long));
        assert_eq!(mod97("3214282912345698765432161182"), 1);
    }

    #[test]
    fn short_and_empty_input() {
        assert_eq!(mod97(""), 0);
        assert_eq!(mod97("5"), 5);
        assert_eq!(mod97("97"), 0);
        assert_eq!(mod97("98"), 1);
    }

    #[test]
    fn known_check_digits() {
        assert_eq!(check_digits("DE", "370400440532013000"), "89");
        assert_eq!(check_digits("GB", "NWBK60161331926819"), "29");
    }

    #[test]
    fn check_digits_are_stable() {
        let first = check_digits("BE", "539007547034");
        let second = check_digits("BE", "539007547034");
        assert_eq!(first, second);
    }
}
