//! Phone number masking.
//!
//! Numbers are rendered as `+D DDD DDD DDD`: one country-code digit followed by
//! three groups of three. Input may be partial or contain any non-digit noise;
//! only ASCII digits are kept and anything past the tenth digit is dropped.

/// Number of digits in a complete phone number
pub const PHONE_DIGITS: usize = 10;

/// Length of a complete formatted number, e.g. `+1 234 567 890`
pub const PHONE_FORMATTED_LEN: usize = 14;

/// Group sizes after the leading `+`
const GROUPS: [usize; 4] = [1, 3, 3, 3];

/// Keep only ASCII digits
pub fn strip_non_digits(input: &str) -> String {
    input.chars().filter(char::is_ascii_digit).collect()
}

/// Format whatever digits are present into the `+D DDD DDD DDD` mask.
///
/// Partial input yields a partial mask (`"1234"` -> `"+1 234"`); input with no
/// digits yields an empty string.
pub fn format_phone_number(input: &str) -> String {
    let digits: Vec<char> = input
        .chars()
        .filter(char::is_ascii_digit)
        .take(PHONE_DIGITS)
        .collect();

    if digits.is_empty() {
        return String::new();
    }

    let mut formatted = String::with_capacity(PHONE_FORMATTED_LEN);
    formatted.push('+');

    let mut rest = digits.as_slice();
    for (i, size) in GROUPS.iter().enumerate() {
        if rest.is_empty() {
            break;
        }
        if i > 0 {
            formatted.push(' ');
        }
        let (group, tail) = rest.split_at((*size).min(rest.len()));
        formatted.extend(group);
        rest = tail;
    }

    formatted
}

/// Whether `input` holds exactly one complete number
pub fn is_complete(input: &str) -> bool {
    strip_non_digits(input).len() == PHONE_DIGITS
}

/// Remove the last typed digit and re-mask
pub fn pop_digit(formatted: &str) -> String {
    let mut digits = strip_non_digits(formatted);
    digits.pop();
    format_phone_number(&digits)
}

/// Append a digit and re-mask; non-digits and digits past the limit are ignored
pub fn push_digit(formatted: &str, c: char) -> String {
    let mut digits = strip_non_digits(formatted);
    if c.is_ascii_digit() && digits.len() < PHONE_DIGITS {
        digits.push(c);
    }
    format_phone_number(&digits)
}
