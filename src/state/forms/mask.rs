//! Input masks applied while typing

/// Digits a US phone number holds
pub const PHONE_DIGITS: usize = 10;

/// Format up to ten digits as `(000) 000-0000`, filling as far as typed.
///
/// Non-digit characters are dropped and digits past the tenth are ignored.
pub fn mask_phone(input: &str) -> String {
    let digits: Vec<char> = input
        .chars()
        .filter(char::is_ascii_digit)
        .take(PHONE_DIGITS)
        .collect();

    let mut masked = String::with_capacity(14);
    for (i, digit) in digits.iter().enumerate() {
        match i {
            0 => masked.push('('),
            3 => masked.push_str(") "),
            6 => masked.push('-'),
            _ => {}
        }
        masked.push(*digit);
    }
    masked
}
