use std::sync::LazyLock;

use memchr::memchr;

use crate::enums::RuleKind;
use crate::pattern::{CompiledPattern, MatchFlags, compile};
use crate::types::PatternSource;

pub const DIGITS_PATTERN: PatternSource = r"[0-9]+";

pub const PHONE_NUMBER_PATTERN: PatternSource = r"(?:(?:\+|00)[0-9]{1,3}[ -]?)?[0-9]{10}";

/// Coarse mailbox shape, not an RFC 5322 validator.
pub const EMAIL_PATTERN: PatternSource = r"[A-Za-z0-9._%+-]+@(?:[A-Za-z0-9-]+\.)+[A-Za-z]{2,}";

/// Two state letters, 1-2 district digits, optional 1-2 series letters and a
/// 4-digit number, with optional space or dash separators between groups.
pub const INDIA_VEHICLE_PLATE_PATTERN: PatternSource =
    r"[A-Z]{2}[ -]?[0-9]{1,2}(?:[ -]?[A-Z]{1,2})?[ -]?[0-9]{4}";

static DIGITS: LazyLock<CompiledPattern> =
    LazyLock::new(|| compile_builtin("digits", DIGITS_PATTERN));
static PHONE_NUMBER: LazyLock<CompiledPattern> =
    LazyLock::new(|| compile_builtin("phone-number", PHONE_NUMBER_PATTERN));
static EMAIL: LazyLock<CompiledPattern> = LazyLock::new(|| compile_builtin("email", EMAIL_PATTERN));
static INDIA_VEHICLE_PLATE: LazyLock<CompiledPattern> =
    LazyLock::new(|| compile_builtin("india-vehicle-plate", INDIA_VEHICLE_PLATE_PATTERN));

// A built-in pattern that fails to compile is a programming error; abort at
// first use rather than degrade into false negatives.
fn compile_builtin(name: &str, pattern: &str) -> CompiledPattern {
    match compile(pattern, MatchFlags::default()) {
        Ok(compiled) => compiled,
        Err(err) => panic!("built-in rule '{name}' has an invalid pattern: {err}"),
    }
}

pub(crate) fn compiled(kind: RuleKind) -> &'static CompiledPattern {
    match kind {
        RuleKind::Digits => &DIGITS,
        RuleKind::PhoneNumber => &PHONE_NUMBER,
        RuleKind::Email => &EMAIL,
        RuleKind::IndiaVehiclePlate => &INDIA_VEHICLE_PLATE,
    }
}

/// `true` iff `text` is non-empty and every byte is an ASCII decimal digit.
pub fn is_digits(text: &str) -> bool {
    // a byte scan answers this rule without the regex engine
    !text.is_empty() && text.bytes().all(|b| b.is_ascii_digit())
}

pub fn is_phone_number(text: &str) -> bool {
    // shortest accepted form is ten bare digits
    if text.len() < 10 {
        return false;
    }

    PHONE_NUMBER.is_full_match(text)
}

/// Coarse shape check; see [`EMAIL_PATTERN`].
pub fn is_email(text: &str) -> bool {
    if memchr(b'@', text.as_bytes()).is_none() {
        return false;
    }

    EMAIL.is_full_match(text)
}

pub fn is_india_vehicle_plate(text: &str) -> bool {
    INDIA_VEHICLE_PLATE.is_full_match(text)
}
