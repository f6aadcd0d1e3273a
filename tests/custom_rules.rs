use textvet::{MatchFlags, PatternError, Rule};

#[test]
fn builds_and_matches_a_caller_defined_rule() {
    let rule = Rule::new("postcode", "[0-9]{6}", MatchFlags::empty()).expect("rule should build");
    assert_eq!(rule.name(), "postcode");
    assert_eq!(rule.pattern(), "[0-9]{6}");
    assert!(rule.is_match("560001"));
    assert!(!rule.is_match("5600"));
    assert!(!rule.is_match(""));
}

#[test]
fn rule_construction_fails_fast_on_a_bad_pattern() {
    let err = Rule::new("broken", "(", MatchFlags::default()).expect_err("bad pattern should fail");
    match err {
        PatternError::InvalidSyntax { pattern, .. } => assert_eq!(pattern, "("),
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn rule_flags_control_matching() {
    let sensitive = Rule::new("code", "[a-z]{2}", MatchFlags::empty()).expect("rule should build");
    assert!(!sensitive.is_match("AB"));

    let insensitive =
        Rule::new("code", "[a-z]{2}", MatchFlags::CASE_INSENSITIVE).expect("rule should build");
    assert!(insensitive.is_match("AB"));
    assert_eq!(insensitive.flags(), MatchFlags::CASE_INSENSITIVE);
}
