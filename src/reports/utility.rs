/// Computes the arithmetic mean of a slice of values. Returns 0.0 for empty
/// input; callers that need to distinguish "no data" guard before calling.
pub fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    values.iter().sum::<f64>() / values.len() as f64
}
