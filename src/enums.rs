use crate::rules;

#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub enum RuleKind {
    Digits = 0,
    PhoneNumber = 1,
    Email = 2,
    IndiaVehiclePlate = 3,
}

impl RuleKind {
    pub const ALL: [RuleKind; 4] = [
        RuleKind::Digits,
        RuleKind::PhoneNumber,
        RuleKind::Email,
        RuleKind::IndiaVehiclePlate,
    ];

    pub fn name(self) -> &'static str {
        match self {
            RuleKind::Digits => "digits",
            RuleKind::PhoneNumber => "phone-number",
            RuleKind::Email => "email",
            RuleKind::IndiaVehiclePlate => "india-vehicle-plate",
        }
    }

    pub fn pattern(self) -> &'static str {
        match self {
            RuleKind::Digits => rules::DIGITS_PATTERN,
            RuleKind::PhoneNumber => rules::PHONE_NUMBER_PATTERN,
            RuleKind::Email => rules::EMAIL_PATTERN,
            RuleKind::IndiaVehiclePlate => rules::INDIA_VEHICLE_PLATE_PATTERN,
        }
    }

    pub fn matches(self, text: &str) -> bool {
        match self {
            RuleKind::Digits => rules::is_digits(text),
            RuleKind::PhoneNumber => rules::is_phone_number(text),
            RuleKind::Email => rules::is_email(text),
            RuleKind::IndiaVehiclePlate => rules::is_india_vehicle_plate(text),
        }
    }
}
