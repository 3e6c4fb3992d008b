//! User id value object
//!
//! Ids are positive integers handed out in sign-up order. The store writes
//! them as JSON numbers, except as submission keys where they are strings.

use std::fmt;
use std::num::ParseIntError;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(u64);

impl UserId {
    /// First id handed out by an empty store
    pub const FIRST: UserId = UserId(1);

    pub const fn new(raw: u64) -> Self {
        Self(raw)
    }

    pub const fn get(self) -> u64 {
        self.0
    }

    /// The id that follows this one, or `None` past `u64::MAX`
    pub const fn next(self) -> Option<Self> {
        match self.0.checked_add(1) {
            Some(raw) => Some(Self(raw)),
            None => None,
        }
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for UserId {
    type Err = ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim().parse().map(Self)
    }
}

impl From<u64> for UserId {
    fn from(raw: u64) -> Self {
        Self(raw)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn next_increments() {
        assert_eq!(UserId::FIRST.next(), Some(UserId::new(2)));
    }

    #[test]
    fn next_stops_at_max() {
        assert_eq!(UserId::new(u64::MAX).next(), None);
    }

    #[test]
    fn parses_string_keys() {
        assert_eq!("7".parse::<UserId>().unwrap(), UserId::new(7));
        assert_eq!(" 12 ".parse::<UserId>().unwrap(), UserId::new(12));
        assert!("seven".parse::<UserId>().is_err());
        assert!("-1".parse::<UserId>().is_err());
    }

    #[test]
    fn serializes_as_plain_number() {
        assert_eq!(serde_json::to_string(&UserId::new(3)).unwrap(), "3");
    }
}
