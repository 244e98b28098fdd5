use std::fmt::{Display, Formatter};

use serde::Serialize;

/// How a match ended from the tracked players' side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, strum_macros::Display)]
#[strum(serialize_all = "UPPERCASE")]
pub enum Outcome {
    Won,
    Lost,
    /// Round counts tied or were missing.
    #[strum(serialize = "-")]
    Unresolved,
}

impl From<Option<bool>> for Outcome {
    fn from(match_won: Option<bool>) -> Self {
        match match_won {
            Some(true) => Outcome::Won,
            Some(false) => Outcome::Lost,
            None => Outcome::Unresolved,
        }
    }
}

/// A score pair ordered for display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DisplayScore(pub u32, pub u32);

impl Display for DisplayScore {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} - {}", self.0, self.1)
    }
}

/// Order a raw score pair for display: higher first on a win, lower first on
/// a loss. Unresolved outcomes keep the pair as reported.
pub fn display_score(score: [u32; 2], match_won: Option<bool>) -> DisplayScore {
    let [a, b] = score;
    match Outcome::from(match_won) {
        Outcome::Won => DisplayScore(a.max(b), a.min(b)),
        Outcome::Lost => DisplayScore(a.min(b), a.max(b)),
        Outcome::Unresolved => DisplayScore(a, b),
    }
}
