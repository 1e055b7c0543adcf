/// Upper-cases `input` when the flag is present and true, lower-cases it
/// otherwise. An absent flag behaves the same as `Some(false)`.
pub fn format_string(input: &str, uppercase: Option<bool>) -> String {
    if uppercase.unwrap_or(false) {
        input.to_uppercase()
    } else {
        input.to_lowercase()
    }
}
