//! Scoring rules: exponential line-clear bonus and gravity speed-up.
//!
//! Clearing `n` rows in one lock scores `5^n`, so simultaneous clears beat
//! sequential ones (1+1 rows -> 5+5 = 10, one double -> 25). Every accepted
//! down-move is worth one extra point; the game loop accounts for those.

use crate::types::{LINE_SCORE_BASE, MIN_FALL_INTERVAL_MS, SPEED_UP_STEP_MS};

/// Points awarded per accepted down-move, manual or automatic.
pub const DOWN_MOVE_SCORE: u32 = 1;

/// Bonus for clearing `lines` rows in a single lock event.
pub fn line_clear_score(lines: usize) -> u32 {
    if lines == 0 {
        return 0;
    }
    LINE_SCORE_BASE.pow(lines as u32)
}

/// Fall interval after one clear event: one fixed step faster, floored.
///
/// The step applies once per clear event, not once per line.
pub fn next_fall_interval(current_ms: u32) -> u32 {
    current_ms
        .saturating_sub(SPEED_UP_STEP_MS)
        .max(MIN_FALL_INTERVAL_MS)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::BASE_FALL_INTERVAL_MS;

    #[test]
    fn exponential_line_bonus() {
        assert_eq!(line_clear_score(0), 0);
        assert_eq!(line_clear_score(1), 5);
        assert_eq!(line_clear_score(2), 25);
        assert_eq!(line_clear_score(3), 125);
        assert_eq!(line_clear_score(4), 625);
    }

    #[test]
    fn simultaneous_beats_sequential() {
        assert!(line_clear_score(2) > 2 * line_clear_score(1));
        assert!(line_clear_score(4) > 4 * line_clear_score(1));
    }

    #[test]
    fn fall_interval_steps_down_to_floor() {
        let mut interval = BASE_FALL_INTERVAL_MS;
        for _ in 0..1000 {
            interval = next_fall_interval(interval);
        }
        assert_eq!(interval, MIN_FALL_INTERVAL_MS);

        // One step from base.
        assert_eq!(
            next_fall_interval(BASE_FALL_INTERVAL_MS),
            BASE_FALL_INTERVAL_MS - SPEED_UP_STEP_MS
        );
        // Never below the floor.
        assert_eq!(next_fall_interval(MIN_FALL_INTERVAL_MS), MIN_FALL_INTERVAL_MS);
        assert_eq!(next_fall_interval(0), MIN_FALL_INTERVAL_MS);
    }
}
