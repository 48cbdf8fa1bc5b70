/// Fixed set of bytes that delimit words. Anything outside this set is word
/// content.
pub const SEPARATORS: &[u8] = b";:/?~\\.,><'[]{}()!@#$%^&-_+=*\" \t\r\n";

pub fn is_separator(byte: u8) -> bool {
    SEPARATORS.contains(&byte)
}

/// Splits a fragment into words: maximal runs of non-separator bytes.
/// Empty tokens between adjacent separators are discarded.
pub fn tokenize(fragment: &[u8]) -> Vec<String> {
    fragment
        .split(|byte| is_separator(*byte))
        .filter(|token| !token.is_empty())
        .map(|token| String::from_utf8_lossy(token).into_owned())
        .collect()
}
