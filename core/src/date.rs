// SPDX-FileCopyrightText: 2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::fmt;
use std::str::FromStr;

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::error::Error;
use crate::jalali::{to_gregorian, to_persian};
use crate::system::CalendarSystem;

/// A date in the proleptic Gregorian calendar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct GregorianDate {
    pub year: i32,

    /// Month of the year, 1 through 12.
    pub month: u32,

    /// Day of the month, 1 through 31.
    pub day: u32,
}

impl GregorianDate {
    pub fn new(year: i32, month: u32, day: u32) -> Self {
        Self { year, month, day }
    }

    /// The key this day's events are stored under when the Gregorian
    /// system is active.
    pub fn key(&self) -> DateKey {
        DateKey::new(self.year, self.month, self.day)
    }
}

impl From<NaiveDate> for GregorianDate {
    fn from(date: NaiveDate) -> Self {
        Self::new(date.year(), date.month(), date.day())
    }
}

/// A date in the solar Hijri (Jalali) calendar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PersianDate {
    pub year: i32,

    /// Month of the year, 1 through 12 (Farvardin through Esfand).
    pub month: u32,

    /// Day of the month, 1 through 31.
    pub day: u32,
}

impl PersianDate {
    pub fn new(year: i32, month: u32, day: u32) -> Self {
        Self { year, month, day }
    }

    /// The key this day's events are stored under when the Persian
    /// system is active.
    pub fn key(&self) -> DateKey {
        DateKey::new(self.year, self.month, self.day)
    }
}

/// A date tagged with the calendar system it is expressed in.
///
/// Lets navigation and grid code handle "the current date in the active
/// system" through one surface instead of branching per system.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CalendarDate {
    Persian(PersianDate),
    Gregorian(GregorianDate),
}

impl CalendarDate {
    pub fn system(&self) -> CalendarSystem {
        match self {
            CalendarDate::Persian(_) => CalendarSystem::Persian,
            CalendarDate::Gregorian(_) => CalendarSystem::Gregorian,
        }
    }

    pub fn year(&self) -> i32 {
        match self {
            CalendarDate::Persian(p) => p.year,
            CalendarDate::Gregorian(g) => g.year,
        }
    }

    pub fn month(&self) -> u32 {
        match self {
            CalendarDate::Persian(p) => p.month,
            CalendarDate::Gregorian(g) => g.month,
        }
    }

    pub fn day(&self) -> u32 {
        match self {
            CalendarDate::Persian(p) => p.day,
            CalendarDate::Gregorian(g) => g.day,
        }
    }

    /// The key built from this date's own fields.
    pub fn key(&self) -> DateKey {
        match self {
            CalendarDate::Persian(p) => p.key(),
            CalendarDate::Gregorian(g) => g.key(),
        }
    }

    /// The same physical day expressed in the other calendar system.
    pub fn to_other(&self) -> CalendarDate {
        match self {
            CalendarDate::Persian(p) => CalendarDate::Gregorian(to_gregorian(*p)),
            CalendarDate::Gregorian(g) => CalendarDate::Persian(to_persian(*g)),
        }
    }
}

/// Identifier a day's events are stored and looked up under.
///
/// Format is `"{year}-{month}-{day}"` with no zero padding, the fields
/// taken from whichever calendar system produced the key. The same
/// physical day therefore has two distinct keys, one per system; events
/// created under one are not visible under the other.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DateKey(String);

impl DateKey {
    pub fn new(year: i32, month: u32, day: u32) -> Self {
        Self(format!("{year}-{month}-{day}"))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for DateKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for DateKey {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parts: Vec<&str> = s.split('-').collect();
        let [year, month, day] = parts.as_slice() else {
            return Err(Error::InvalidDateKey(s.to_owned()));
        };
        match (year.parse(), month.parse(), day.parse()) {
            // rebuild to strip any zero padding
            (Ok(year), Ok(month), Ok(day)) => Ok(Self::new(year, month, day)),
            _ => Err(Error::InvalidDateKey(s.to_owned())),
        }
    }
}
