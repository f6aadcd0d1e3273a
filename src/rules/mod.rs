mod builtin;
mod config;
mod error;
mod rule;
mod set;

pub use builtin::{
    DIGITS_PATTERN, EMAIL_PATTERN, INDIA_VEHICLE_PLATE_PATTERN, PHONE_NUMBER_PATTERN, is_digits,
    is_email, is_india_vehicle_plate, is_phone_number,
};
pub use config::RuleConfig;
pub use error::{RuleSetError, RuleSetResult};
pub use rule::Rule;
pub use set::RuleSet;
