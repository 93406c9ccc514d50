use std::collections::HashMap;

/// Fixed source sequence for the derived-sequence examples.
pub const NUMBERS: [i64; 5] = [1, 2, 3, 4, 5];

pub fn add(a: i64, b: i64) -> i64 {
    a + b
}

/// Every element doubled, order preserved.
pub fn doubled(numbers: &[i64]) -> Vec<i64> {
    numbers.iter().map(|n| n * 2).collect()
}

/// Even elements only, order preserved.
pub fn evens(numbers: &[i64]) -> Vec<i64> {
    numbers.iter().copied().filter(|n| n % 2 == 0).collect()
}

/// Fixed illustrative configuration mapping. Constructed once, never
/// consumed by other logic.
pub fn sample_config() -> HashMap<String, serde_json::Value> {
    let mut config = HashMap::new();
    config.insert(
        "name".to_string(),
        serde_json::Value::String("Prism".to_string()),
    );
    config.insert(
        "version".to_string(),
        serde_json::Value::String("0.1.0".to_string()),
    );
    config.insert("enabled".to_string(), serde_json::Value::Bool(true));
    config.insert("count".to_string(), serde_json::Value::Number(42.into()));
    config
}
