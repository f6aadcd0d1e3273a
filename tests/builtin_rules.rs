use textvet::{RuleKind, is_digits, is_email, is_india_vehicle_plate, is_phone_number};

#[test]
fn digits_accepts_only_non_empty_ascii_digit_strings() {
    assert!(is_digits("1237"));
    assert!(is_digits("0"));
    assert!(!is_digits(""));
    assert!(!is_digits("12a7"));
    assert!(!is_digits("12 37"));
    assert!(!is_digits("-12"));
}

#[test]
fn phone_number_accepts_ten_bare_digits() {
    assert!(is_phone_number("9876543210"));
}

#[test]
fn phone_number_accepts_international_prefixes() {
    assert!(is_phone_number("+919876543210"));
    assert!(is_phone_number("+91 9876543210"));
    assert!(is_phone_number("+91-9876543210"));
    assert!(is_phone_number("00919876543210"));
}

#[test]
fn phone_number_rejects_wrong_lengths() {
    assert!(!is_phone_number(""));
    assert!(!is_phone_number("12345"));
    assert!(!is_phone_number("98765432101"));
    assert!(!is_phone_number("987654321"));
}

#[test]
fn phone_number_rejects_bare_prefix_markers() {
    assert!(!is_phone_number("9876543210x"));
    assert!(!is_phone_number("++919876543210"));
}

#[test]
fn email_accepts_common_mailbox_shapes() {
    assert!(is_email("user@example.com"));
    assert!(is_email("a.b+c@mail.co.in"));
    assert!(is_email("first_last%tag@sub.example.org"));
}

#[test]
fn email_is_case_insensitive() {
    assert!(is_email("USER@EXAMPLE.COM"));
}

#[test]
fn email_rejects_malformed_input() {
    assert!(!is_email(""));
    assert!(!is_email("not-an-email"));
    assert!(!is_email("user@.com"));
    assert!(!is_email("@example.com"));
    assert!(!is_email("user@com"));
    assert!(!is_email("user@example.c"));
}

#[test]
fn india_vehicle_plate_accepts_documented_shapes() {
    assert!(is_india_vehicle_plate("KA 05 AB 1234"));
    assert!(is_india_vehicle_plate("KA-05-1234"));
    assert!(is_india_vehicle_plate("DL 7 C 1234"));
    assert!(is_india_vehicle_plate("MH12DE1433"));
}

#[test]
fn india_vehicle_plate_is_case_insensitive() {
    assert!(is_india_vehicle_plate("ka 05 ab 1234"));
}

#[test]
fn india_vehicle_plate_rejects_other_text() {
    assert!(!is_india_vehicle_plate(""));
    assert!(!is_india_vehicle_plate("INVALID"));
    assert!(!is_india_vehicle_plate("K 05 AB 1234"));
    assert!(!is_india_vehicle_plate("KA 05 AB 123"));
}

#[test]
fn predicates_are_idempotent() {
    for _ in 0..2 {
        assert!(is_digits("1237"));
        assert!(is_phone_number("9876543210"));
        assert!(is_email("user@example.com"));
        assert!(is_india_vehicle_plate("KA 05 AB 1234"));
    }
}

#[test]
fn rule_kind_dispatch_agrees_with_the_predicates() {
    assert!(RuleKind::Digits.matches("1237"));
    assert!(RuleKind::PhoneNumber.matches("9876543210"));
    assert!(RuleKind::Email.matches("user@example.com"));
    assert!(RuleKind::IndiaVehiclePlate.matches("KA 05 AB 1234"));

    for kind in RuleKind::ALL {
        assert!(!kind.matches(""));
        assert!(!kind.matches("!!definitely not valid!!"));
    }
}
