//! Rule-table-driven IBAN decoding and validation.
//!
//! A static per-country table pairs each supported country or territory with
//! its exact IBAN length and a layout rule describing what every BBAN
//! position means (bank code, branch code, account number, ...). The decoder
//! matches an input against that table to slice out named fields, and checks
//! declared length plus the ISO 7064 mod-97 checksum.

mod checksum;
mod decoder;
mod layout;
mod normalize;
mod registry;

pub use checksum::{check_digits, mod97, numeric_transliterate};
pub use decoder::{DecodedIban, IbanDecoder};
pub use layout::{role_span, Role};
pub use normalize::{strip_country_and_checksum, strip_whitespace};
pub use registry::{lookup_by_prefix, CountryDefinition, COUNTRY_DEFINITIONS};
