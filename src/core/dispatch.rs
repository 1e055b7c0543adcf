use crate::domain::model::Value;

/// Exhaustive two-way branch: character count for text, doubling for numbers.
pub fn process_value(value: &Value) -> f64 {
    match value {
        Value::Text(text) => text.chars().count() as f64,
        Value::Number(number) => number * 2.0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_counts_characters() {
        assert_eq!(process_value(&Value::Text("hello".to_string())), 5.0);
    }

    #[test]
    fn test_number_doubles() {
        assert_eq!(process_value(&Value::Number(10.0)), 20.0);
    }
}
