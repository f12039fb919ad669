// ABOUTME: Half-up rounding helpers shared by every calculator
// ABOUTME: Rounds ties towards positive infinity so -2.5 becomes -2 and 2.5 becomes 3
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FitTracker

/// Round to the nearest integer, ties towards positive infinity
#[must_use]
pub fn round_half_up(value: f64) -> f64 {
    (value + 0.5).floor()
}

/// [`round_half_up`] as whole kcal or grams
#[must_use]
pub fn round_to_i32(value: f64) -> i32 {
    round_half_up(value) as i32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ties_round_up() {
        assert_eq!(round_to_i32(2.5), 3);
        assert_eq!(round_to_i32(-2.5), -2);
        assert_eq!(round_to_i32(429.99), 430);
        assert_eq!(round_to_i32(-0.4), 0);
    }
}
