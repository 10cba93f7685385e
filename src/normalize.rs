/// Removes every whitespace character anywhere in the string. Case and all
/// other characters pass through untouched.
pub fn strip_whitespace(input: &str) -> String {
    input.chars().filter(|ch| !ch.is_whitespace()).collect()
}

/// Drops the four-character header (two-letter country code plus either the
/// literal placeholder `pp` or two decimal digits) when the string has that
/// shape and at least one character follows it. Anything else passes through
/// unchanged; a malformed header is not an error here.
pub fn strip_country_and_checksum(input: &str) -> String {
    let trimmed = input.trim();
    let chars: Vec<char> = trimmed.chars().collect();

    let header_matches = chars.len() > 4
        && chars[0].is_ascii_uppercase()
        && chars[1].is_ascii_uppercase()
        && ((chars[2] == 'p' && chars[3] == 'p')
            || (chars[2].is_ascii_digit() && chars[3].is_ascii_digit()));

    if header_matches {
        chars[4..].iter().collect()
    } else {
        trimmed.to_string()
    }
}
