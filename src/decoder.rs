use serde::{Deserialize, Serialize};

use crate::checksum;
use crate::layout::{role_span, Role};
use crate::normalize::{strip_country_and_checksum, strip_whitespace};
use crate::registry;

/// Decodes one raw IBAN string against the country rule table. Every method
/// is a pure query over the original input; nothing is cached between calls
/// and no method panics, whatever the input looks like.
pub struct IbanDecoder {
    raw: String,
}

/// Every accessor's answer for one input, in a single serializable record.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DecodedIban {
    pub country_iso: String,
    pub country_name: Option<String>,
    pub bank_code: Option<String>,
    pub branch_code: Option<String>,
    pub account_number: Option<String>,
    pub account_type: Option<String>,
    pub owner_number: Option<String>,
    pub checksum_from_input: String,
    pub computed_checksum: String,
    pub checksum_valid: bool,
    pub length_valid: bool,
    pub valid: bool,
}

impl IbanDecoder {
    pub fn new(iban: impl Into<String>) -> Self {
        Self { raw: iban.into() }
    }

    /// Whitespace-free BBAN: the input with all whitespace removed and the
    /// four-character header stripped when present.
    fn filtered(&self) -> String {
        strip_country_and_checksum(&strip_whitespace(&self.raw))
    }

    /// Slices the field for `role` out of the BBAN. Scans the registry in
    /// table order: entries whose rule does not start with the raw input's
    /// first two characters are skipped, as are matching entries whose rule
    /// never uses the role letter. The returned span runs from the role's
    /// first to its last rule position and is truncated at the end of a
    /// too-short body.
    fn extract(&self, role: Role) -> Option<String> {
        let body: Vec<char> = self.filtered().chars().collect();
        let mut prefix = self.raw.chars();
        let first = prefix.next()?;
        let second = prefix.next()?;

        for definition in registry::COUNTRY_DEFINITIONS {
            let mut rule = definition.layout_rule.chars();
            if rule.next() != Some(first) || rule.next() != Some(second) {
                continue;
            }

            let rule_body = strip_country_and_checksum(&strip_whitespace(definition.layout_rule));
            let (start, end) = match role_span(&rule_body, role) {
                Some(span) => span,
                None => continue,
            };

            if start >= body.len() {
                return None;
            }
            let end = end.min(body.len() - 1);
            return Some(body[start..=end].iter().collect());
        }

        None
    }

    /// First two characters of the whitespace-stripped input, unvalidated.
    pub fn country_iso(&self) -> String {
        strip_whitespace(&self.raw).chars().take(2).collect()
    }

    /// Display name of the first registry entry sharing the input's
    /// two-letter prefix. Territories that reuse another country's rule
    /// resolve to the owning country's name.
    pub fn country_name(&self) -> Option<&'static str> {
        registry::lookup_by_prefix(&self.raw).map(|definition| definition.name)
    }

    pub fn bank_code(&self) -> Option<String> {
        self.extract(Role::BankCode)
    }

    pub fn branch_code(&self) -> Option<String> {
        self.extract(Role::BranchCode)
    }

    pub fn account_number(&self) -> Option<String> {
        self.extract(Role::AccountNumber)
    }

    pub fn account_type(&self) -> Option<String> {
        self.extract(Role::AccountType)
    }

    pub fn owner_number(&self) -> Option<String> {
        self.extract(Role::OwnerNumber)
    }

    /// Characters three and four of the whitespace-stripped input, exactly as
    /// given. Shorter inputs yield a shorter (possibly empty) string.
    pub fn checksum_from_input(&self) -> String {
        strip_whitespace(&self.raw).chars().skip(2).take(2).collect()
    }

    /// Check digits this IBAN's body should carry, derived from scratch via
    /// the ISO 7064 rearrangement.
    pub fn compute_checksum(&self) -> String {
        checksum::check_digits(&self.country_iso(), &self.filtered())
    }

    /// The mod-97 self-check (header moved to the end must reduce to 1) and
    /// an exact match between the stated and the freshly computed check
    /// digits. Both have to hold.
    pub fn is_checksum_valid(&self) -> bool {
        let stripped = strip_whitespace(&self.raw);
        let header: String = stripped.chars().take(4).collect();
        let rearranged = format!("{}{}", strip_country_and_checksum(&stripped), header);
        let remainder = checksum::mod97(&checksum::numeric_transliterate(&rearranged));

        remainder == 1 && self.checksum_from_input() == self.compute_checksum()
    }

    /// Whitespace-stripped length equals the matched entry's declared total
    /// length. `false` when no entry matches the prefix.
    pub fn check_length_is_valid(&self) -> bool {
        match registry::lookup_by_prefix(&self.raw) {
            Some(definition) => {
                strip_whitespace(&self.raw).chars().count() == definition.total_length
            }
            None => false,
        }
    }

    pub fn is_valid(&self) -> bool {
        self.is_checksum_valid() && self.check_length_is_valid()
    }

    /// Runs every query once and bundles the answers.
    pub fn decode(&self) -> DecodedIban {
        if self.country_name().is_none() {
            log::debug!("no layout rule registered for prefix {:?}", self.country_iso());
        }

        DecodedIban {
            country_iso: self.country_iso(),
            country_name: self.country_name().map(str::to_string),
            bank_code: self.bank_code(),
            branch_code: self.branch_code(),
            account_number: self.account_number(),
            account_type: self.account_type(),
            owner_number: self.owner_number(),
            checksum_from_input: self.checksum_from_input(),
            computed_checksum: self.compute_checksum(),
            checksum_valid: self.is_checksum_valid(),
            length_valid: self.check_length_is_valid(),
            valid: self.is_valid(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn german_sample_fields() {
        let decoder = IbanDecoder::new("DE89 3704 0044 0532 0130 00");
        assert_eq!(decoder.country_iso(), "DE");
        assert_eq!(decoder.country_name(), Some("Germany"));
        assert_eq!(decoder.bank_code().as_deref(), Some("37040044"));
        assert_eq!(decoder.account_number().as_deref(), Some("0532013000"));
        assert_eq!(decoder.branch_code(), None);
        assert_eq!(decoder.account_type(), None);
        assert_eq!(decoder.owner_number(), None);
        assert_eq!(decoder.checksum_from_input(), "89");
        assert_eq!(decoder.compute_checksum(), "89");
        assert!(decoder.check_length_is_valid());
        assert!(decoder.is_checksum_valid());
        assert!(decoder.is_valid());
    }

    #[test]
    fn french_sample_fields() {
        let decoder = IbanDecoder::new("FR14 2004 1010 0505 0001 3M02 606");
        assert_eq!(decoder.country_name(), Some("France"));
        assert_eq!(decoder.bank_code().as_deref(), Some("20041"));
        assert_eq!(decoder.branch_code().as_deref(), Some("01005"));
        assert_eq!(decoder.account_number().as_deref(), Some("0500013M026"));
        assert!(decoder.is_valid());
    }

    #[test]
    fn uk_sample_fields() {
        let decoder = IbanDecoder::new("GB29 NWBK 6016 1331 9268 19");
        assert_eq!(decoder.bank_code().as_deref(), Some("NWBK"));
        assert_eq!(decoder.branch_code().as_deref(), Some("601613"));
        assert_eq!(decoder.account_number().as_deref(), Some("31926819"));
        assert!(decoder.is_valid());
    }

    #[test]
    fn body_mutations_break_the_checksum() {
        let valid = "DE89370400440532013000";
        for position in [4usize, 9, 13, 18, 21] {
            let mut chars: Vec<char> = valid.chars().collect();
            let digit = chars[position].to_digit(10).unwrap();
            chars[position] = char::from_digit((digit + 1) % 10, 10).unwrap();
            let mutated: String = chars.into_iter().collect();
            let decoder = IbanDecoder::new(mutated.clone());
            assert!(!decoder.is_checksum_valid(), "mutation at {position}: {mutated}");
            assert!(!decoder.is_valid());
        }
    }

    #[test]
    fn compute_checksum_is_idempotent() {
        let decoder = IbanDecoder::new("BE62 5100 0754 7061");
        assert_eq!(decoder.compute_checksum(), decoder.compute_checksum());
    }

    #[test]
    fn unknown_country_answers_nothing() {
        let decoder = IbanDecoder::new("ZZ12 3456 7890");
        assert_eq!(decoder.country_name(), None);
        assert_eq!(decoder.bank_code(), None);
        assert_eq!(decoder.account_number(), None);
        assert!(!decoder.check_length_is_valid());
        assert!(!decoder.is_valid());
    }

    #[test]
    fn empty_and_short_inputs_do_not_panic() {
        for input in ["", " ", "D", "DE", "DE8", "DE89"] {
            let decoder = IbanDecoder::new(input);
            let _ = decoder.decode();
            assert!(!decoder.is_checksum_valid());
            assert!(!decoder.is_valid());
        }
        assert_eq!(IbanDecoder::new("").country_iso(), "");
        assert_eq!(IbanDecoder::new("DE8").checksum_from_input(), "8");
    }

    #[test]
    fn truncated_body_yields_truncated_span() {
        // Header of correct shape but a body far shorter than the rule: the
        // bank code span is cut off at the end of the body instead of
        // reaching out of bounds.
        let decoder = IbanDecoder::new("DE89370400");
        assert_eq!(decoder.bank_code().as_deref(), Some("370400"));
        assert!(!decoder.is_valid());
    }

    #[test]
    fn spanish_control_digits_sit_inside_the_account_span() {
        // ESpp bbbb ssss KKkk kkkk kkkk: k first appears after KK, so the
        // account span excludes them while the control span is its own.
        let decoder = IbanDecoder::new("ES80 2310 0001 1800 0001 2345");
        assert_eq!(decoder.bank_code().as_deref(), Some("2310"));
        assert_eq!(decoder.branch_code().as_deref(), Some("0001"));
        assert_eq!(decoder.account_number().as_deref(), Some("0000012345"));
        assert!(decoder.is_valid());
    }

    #[test]
    fn decode_bundles_every_answer() {
        let decoded = IbanDecoder::new("DE89 3704 0044 0532 0130 00").decode();
        assert_eq!(decoded.country_iso, "DE");
        assert_eq!(decoded.country_name.as_deref(), Some("Germany"));
        assert_eq!(decoded.bank_code.as_deref(), Some("37040044"));
        assert_eq!(decoded.checksum_from_input, decoded.computed_checksum);
        assert!(decoded.valid && decoded.checksum_valid && decoded.length_valid);

        let json = serde_json::to_string(&decoded).unwrap();
        let back: DecodedIban = serde_json::from_str(&json).unwrap();
        assert_eq!(back.bank_code, decoded.bank_code);
    }
}
