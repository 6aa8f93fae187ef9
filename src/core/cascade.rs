//! Staggered reveal delays.

/// Entrance delay for each of `count` items.
///
/// Item `i` waits `i * increment_ms`, capped at `max_delay_ms`. An increment of
/// zero reveals the whole group at once.
pub fn assign_cascade_delays(count: usize, increment_ms: u32, max_delay_ms: u32) -> Vec<u32> {
    (0..count).map(|i| cascade_delay(i, increment_ms, max_delay_ms)).collect()
}

/// Delay of the item at `index`.
pub fn cascade_delay(index: usize, increment_ms: u32, max_delay_ms: u32) -> u32 {
    let index = u32::try_from(index).unwrap_or(u32::MAX);
    index.saturating_mul(increment_ms).min(max_delay_ms)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clamped_at_max() {
        assert_eq!(assign_cascade_delays(5, 100, 250), vec![0, 100, 200, 250, 250]);
    }

    #[test]
    fn test_empty() {
        assert!(assign_cascade_delays(0, 100, 250).is_empty());
    }

    #[test]
    fn test_zero_increment_is_simultaneous() {
        assert_eq!(assign_cascade_delays(4, 0, 250), vec![0, 0, 0, 0]);
    }

    #[test]
    fn test_no_overflow() {
        assert_eq!(cascade_delay(usize::MAX, u32::MAX, 1_000), 1_000);
        assert_eq!(cascade_delay(3, u32::MAX, u32::MAX), u32::MAX);
    }

    #[test]
    fn test_non_decreasing() {
        let delays = assign_cascade_delays(20, 70, 900);
        assert!(delays.windows(2).all(|w| w[0] <= w[1]));
        assert_eq!(delays.last(), Some(&900));
    }
}
