use std::borrow::Cow;

/// Left-pad `input` with `'0'` up to `width` characters. Inputs already at or
/// beyond `width` are returned untouched; nothing is ever truncated.
pub fn pad_left(input: &str, width: usize) -> Cow<'_, str> {
    let len = input.chars().count();
    if len >= width {
        return Cow::Borrowed(input);
    }
    let mut padded = String::with_capacity(width);
    padded.extend(std::iter::repeat('0').take(width - len));
    padded.push_str(input);
    Cow::Owned(padded)
}

/// True for a non-empty string made only of the ASCII digits `0-9`.
pub fn is_digits_only(input: &str) -> bool {
    !input.is_empty() && input.bytes().all(|b| b.is_ascii_digit())
}

/// Parse a digits-only string as a number. Callers only pass strings that
/// already passed the structural check, so overflow means "not a number".
pub fn parse_digits(input: &str) -> Option<u32> {
    if !is_digits_only(input) {
        return None;
    }
    input.parse::<u32>().ok()
}
