//! End-of-run score tiers

use serde::Serialize;

/// Message tier shown on the game-over screen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ScoreTier {
    Master,
    Great,
    Good,
    NotBad,
    TryAgain,
}

/// Thresholds, highest first. The first one met wins.
const TIERS: [(u64, ScoreTier); 4] = [
    (50, ScoreTier::Master),
    (30, ScoreTier::Great),
    (15, ScoreTier::Good),
    (5, ScoreTier::NotBad),
];

impl ScoreTier {
    pub fn for_score(score: u64) -> Self {
        TIERS
            .iter()
            .find(|(threshold, _)| score >= *threshold)
            .map(|(_, tier)| *tier)
            .unwrap_or(ScoreTier::TryAgain)
    }

    pub fn message(&self) -> &'static str {
        match self {
            ScoreTier::Master => "Amazing! You're a balloon catching master! 🎈",
            ScoreTier::Great => "Great job! You caught so many balloons! 🌟",
            ScoreTier::Good => "Good effort! Keep practicing! 👍",
            ScoreTier::NotBad => "Not bad for a start! Try again! 😊",
            ScoreTier::TryAgain => "Better luck next time!",
        }
    }
}

/// What the host shows when a run ends
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RunSummary {
    pub final_score: u64,
    pub tier: ScoreTier,
}

impl RunSummary {
    pub fn new(final_score: u64) -> Self {
        Self {
            final_score,
            tier: ScoreTier::for_score(final_score),
        }
    }

    pub fn message(&self) -> &'static str {
        self.tier.message()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tier_thresholds() {
        assert_eq!(ScoreTier::for_score(0), ScoreTier::TryAgain);
        assert_eq!(ScoreTier::for_score(4), ScoreTier::TryAgain);
        assert_eq!(ScoreTier::for_score(5), ScoreTier::NotBad);
        assert_eq!(ScoreTier::for_score(14), ScoreTier::NotBad);
        assert_eq!(ScoreTier::for_score(15), ScoreTier::Good);
        assert_eq!(ScoreTier::for_score(30), ScoreTier::Great);
        assert_eq!(ScoreTier::for_score(49), ScoreTier::Great);
        assert_eq!(ScoreTier::for_score(50), ScoreTier::Master);
        assert_eq!(ScoreTier::for_score(10_000), ScoreTier::Master);
    }

    #[test]
    fn test_summary_message() {
        let summary = RunSummary::new(3);
        assert_eq!(summary.message(), "Better luck next time!");
    }
}
