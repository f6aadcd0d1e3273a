pub mod enums;
pub mod errors;
mod pattern;
mod rules;
pub mod types;

pub use enums::RuleKind;
pub use errors::{Error, Result};
pub use pattern::{CompiledPattern, MatchFlags, PatternError, PatternResult, compile};
pub use rules::{
    DIGITS_PATTERN, EMAIL_PATTERN, INDIA_VEHICLE_PLATE_PATTERN, PHONE_NUMBER_PATTERN, Rule,
    RuleConfig, RuleSet, RuleSetError, RuleSetResult, is_digits, is_email, is_india_vehicle_plate,
    is_phone_number,
};
