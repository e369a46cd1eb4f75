//! Session statistics
//!
//! Wins, losses, and streaks accumulated across rounds. In-memory only; the
//! counters reset when the process exits.

use super::round::GuessOutcome;

/// Win/loss totals and streaks for the current session
///
/// Updated only through [`SessionStats::record`], which observes the outcome
/// of each guess. `Won`/`Lost` outcomes are produced exactly once per round
/// by the state machine, so a transition can never be double-counted.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct SessionStats {
    pub wins: u32,
    pub losses: u32,
    pub current_streak: u32,
    pub best_streak: u32,
}

impl SessionStats {
    /// Observe a guess outcome, updating totals on Won/Lost transitions
    pub fn record(&mut self, outcome: GuessOutcome) {
        match outcome {
            GuessOutcome::Won => {
                self.wins += 1;
                self.current_streak += 1;
                self.best_streak = self.best_streak.max(self.current_streak);
            }
            GuessOutcome::Lost => {
                self.losses += 1;
                self.current_streak = 0;
            }
            GuessOutcome::Hit | GuessOutcome::Miss | GuessOutcome::Ignored => {}
        }
    }

    /// Total rounds completed this session
    #[must_use]
    pub const fn rounds(&self) -> u32 {
        self.wins + self.losses
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::round::Round;

    #[test]
    fn win_advances_streak() {
        let mut stats = SessionStats::default();
        stats.record(GuessOutcome::Won);
        stats.record(GuessOutcome::Won);

        assert_eq!(stats.wins, 2);
        assert_eq!(stats.losses, 0);
        assert_eq!(stats.current_streak, 2);
        assert_eq!(stats.best_streak, 2);
    }

    #[test]
    fn loss_resets_streak_keeps_best() {
        let mut stats = SessionStats::default();
        stats.record(GuessOutcome::Won);
        stats.record(GuessOutcome::Won);
        stats.record(GuessOutcome::Won);
        stats.record(GuessOutcome::Lost);

        assert_eq!(stats.wins, 3);
        assert_eq!(stats.losses, 1);
        assert_eq!(stats.current_streak, 0);
        assert_eq!(stats.best_streak, 3);

        stats.record(GuessOutcome::Won);
        assert_eq!(stats.current_streak, 1);
        assert_eq!(stats.best_streak, 3);
    }

    #[test]
    fn mid_round_outcomes_do_not_count() {
        let mut stats = SessionStats::default();
        stats.record(GuessOutcome::Hit);
        stats.record(GuessOutcome::Miss);
        stats.record(GuessOutcome::Ignored);

        assert_eq!(stats, SessionStats::default());
    }

    #[test]
    fn observing_a_full_round_counts_once() {
        let mut stats = SessionStats::default();
        let mut round = Round::new("CAT");

        for letter in ['X', 'C', 'A', 'T', 'T', 'Z'] {
            stats.record(round.guess(letter));
        }

        assert_eq!(stats.wins, 1);
        assert_eq!(stats.losses, 0);
        assert_eq!(stats.rounds(), 1);
    }
}
