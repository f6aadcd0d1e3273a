pub type RuleName = String;
pub type PatternSource = &'static str;
