//! Supply/borrow action and its rate preference.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::error::DomainError;
use super::money::Rate;

/// What a user does with an asset on a lending venue.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Action {
    /// Lend the asset out; higher rates are better.
    Supply,
    /// Take a loan in the asset; lower rates are better.
    Borrow,
}

impl Action {
    /// Both actions, in display order.
    pub const ALL: [Action; 2] = [Action::Supply, Action::Borrow];

    /// Returns true if `candidate` strictly beats `incumbent` for this action.
    ///
    /// Strict comparison keeps the first-seen entry on ties.
    #[must_use]
    pub fn prefers(&self, candidate: Rate, incumbent: Rate) -> bool {
        match self {
            Action::Supply => candidate > incumbent,
            Action::Borrow => candidate < incumbent,
        }
    }

    /// Returns true if `held` is at least as good as `best` for this action.
    #[must_use]
    pub fn is_at_least_as_good(&self, held: Rate, best: Rate) -> bool {
        match self {
            Action::Supply => held >= best,
            Action::Borrow => held <= best,
        }
    }

    /// Lowercase name used in text and config.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Action::Supply => "supply",
            Action::Borrow => "borrow",
        }
    }

    /// Past tense used in user-facing messages.
    #[must_use]
    pub fn past_tense(&self) -> &'static str {
        match self {
            Action::Supply => "supplied",
            Action::Borrow => "borrowed",
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Action {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "supply" => Ok(Action::Supply),
            "borrow" => Ok(Action::Borrow),
            _ => Err(DomainError::UnknownAction {
                input: s.to_string(),
            }),
        }
    }
}
