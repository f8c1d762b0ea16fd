use serde::{Deserialize, Serialize};

/// Display band for a score. Purely a presentation helper: nothing in the
/// scoring contract depends on it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScoreBand {
    High,
    Amber,
    Neutral,
    Low,
}

impl ScoreBand {
    pub fn from_score(score: u32) -> Self {
        match score {
            s if s >= 80 => ScoreBand::High,
            s if s >= 60 => ScoreBand::Amber,
            s if s >= 40 => ScoreBand::Neutral,
            _ => ScoreBand::Low,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_band_boundaries() {
        assert_eq!(ScoreBand::from_score(100), ScoreBand::High);
        assert_eq!(ScoreBand::from_score(80), ScoreBand::High);
        assert_eq!(ScoreBand::from_score(79), ScoreBand::Amber);
        assert_eq!(ScoreBand::from_score(60), ScoreBand::Amber);
        assert_eq!(ScoreBand::from_score(59), ScoreBand::Neutral);
        assert_eq!(ScoreBand::from_score(40), ScoreBand::Neutral);
        assert_eq!(ScoreBand::from_score(39), ScoreBand::Low);
        assert_eq!(ScoreBand::from_score(0), ScoreBand::Low);
    }
}
