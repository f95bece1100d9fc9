//! Stage cursor

/// Follow-mode progress cursor
///
/// Index of the next waypoint not yet reached; waypoints `0..number` have
/// been reached. Equals the waypoint count once the tour is complete.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Stage {
    number: usize,
}

impl Stage {
    /// Create a stage at the start of a tour
    pub const fn new() -> Self {
        Self { number: 0 }
    }

    /// Current stage number
    pub fn number(&self) -> usize {
        self.number
    }

    /// Move on past the waypoint just reached
    pub fn advance(&mut self) {
        self.number += 1;
    }

    /// Check if every one of `waypoint_count` waypoints has been reached
    pub fn is_complete(&self, waypoint_count: usize) -> bool {
        self.number >= waypoint_count
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stage_advance() {
        let mut stage = Stage::new();
        assert_eq!(stage.number(), 0);

        stage.advance();
        stage.advance();
        assert_eq!(stage.number(), 2);
        assert!(stage.is_complete(2));
        assert!(!stage.is_complete(3));

        assert_ne!(stage, Stage::default());
    }
}
