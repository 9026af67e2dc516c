// SPDX-FileCopyrightText: 2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

/// Error type for all fallible operations in the calendar core.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Returned when an event title is empty after trimming; nothing is stored.
    #[error("event title must not be empty")]
    EmptyTitle,

    /// Returned when a calendar-system name is neither "persian" nor "gregorian".
    #[error("unknown calendar system: {0:?}")]
    UnknownCalendarSystem(String),

    /// Returned when a date key is not three dash-separated integers.
    #[error("invalid date key: {0:?}")]
    InvalidDateKey(String),

    /// Persisting or restoring a state blob failed.
    #[error("storage: {0}")]
    Storage(#[from] std::io::Error),

    /// Encoding the event mapping failed.
    #[error("serialize: {0}")]
    Serialize(#[from] serde_json::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_empty_title() {
        assert_eq!(Error::EmptyTitle.to_string(), "event title must not be empty");
    }

    #[test]
    fn display_unknown_system() {
        let e = Error::UnknownCalendarSystem("julian".into());
        assert_eq!(e.to_string(), "unknown calendar system: \"julian\"");
    }

    #[test]
    fn display_invalid_key() {
        let e = Error::InvalidDateKey("1403-01".into());
        assert_eq!(e.to_string(), "invalid date key: \"1403-01\"");
    }
}
