use regex::Regex;

// `re` is anchored by the compiler, so `is_match` is a whole-string test.
#[tracing::instrument(level = "trace", skip(re, text), fields(text_len = text.len() as u64))]
pub(crate) fn full_match(re: &Regex, text: &str) -> bool {
    if text.is_empty() {
        return false;
    }

    re.is_match(text)
}
