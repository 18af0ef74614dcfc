//! Numeric assertions for summary values
//!
//! Used by the session analysis tests, where text logs round angles and
//! rates to a few decimals.

/// Assert two floats are within `epsilon` of each other
pub fn assert_float_eq(a: f64, b: f64, epsilon: f64) {
    assert!(
        (a - b).abs() < epsilon,
        "Expected {} to be within {} of {}",
        a,
        epsilon,
        b
    );
}
