// SPDX-FileCopyrightText: 2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::date::{CalendarDate, GregorianDate, PersianDate};
use crate::error::Error;
use crate::jalali::{
    days_in_gregorian_month, days_in_persian_month, first_weekday_of_gregorian_month,
    first_weekday_of_persian_month,
};

const PERSIAN_MONTHS: [&str; 12] = [
    "Farvardin",
    "Ordibehesht",
    "Khordad",
    "Tir",
    "Mordad",
    "Shahrivar",
    "Mehr",
    "Aban",
    "Azar",
    "Dey",
    "Bahman",
    "Esfand",
];

const GREGORIAN_MONTHS: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// One of the two calendar systems a date can be expressed in.
///
/// All month-metadata queries go through this type, so navigation and
/// grid code never branch on the system themselves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[cfg_attr(feature = "clap", derive(clap::ValueEnum))]
pub enum CalendarSystem {
    /// Solar Hijri (Jalali); weeks start on Saturday.
    Persian,

    /// Gregorian; weeks start on Sunday.
    Gregorian,
}

impl CalendarSystem {
    /// The other calendar system.
    pub fn other(self) -> Self {
        match self {
            CalendarSystem::Persian => CalendarSystem::Gregorian,
            CalendarSystem::Gregorian => CalendarSystem::Persian,
        }
    }

    /// Number of days in the given month of this system.
    pub fn days_in_month(self, year: i32, month: u32) -> u32 {
        match self {
            CalendarSystem::Persian => days_in_persian_month(year, month),
            CalendarSystem::Gregorian => days_in_gregorian_month(year, month),
        }
    }

    /// Weekday of day 1 of the given month, 0 through 6 counted from this
    /// system's week start.
    pub fn first_weekday(self, year: i32, month: u32) -> u32 {
        match self {
            CalendarSystem::Persian => first_weekday_of_persian_month(year, month),
            CalendarSystem::Gregorian => first_weekday_of_gregorian_month(year, month),
        }
    }

    /// Builds a date expressed in this system.
    pub fn date(self, year: i32, month: u32, day: u32) -> CalendarDate {
        match self {
            CalendarSystem::Persian => CalendarDate::Persian(PersianDate::new(year, month, day)),
            CalendarSystem::Gregorian => {
                CalendarDate::Gregorian(GregorianDate::new(year, month, day))
            }
        }
    }

    /// English name of the given month (transliterated for Persian).
    pub fn month_name(self, month: u32) -> &'static str {
        let names = match self {
            CalendarSystem::Persian => &PERSIAN_MONTHS,
            CalendarSystem::Gregorian => &GREGORIAN_MONTHS,
        };
        names[month as usize - 1]
    }

    /// Weekday header names starting from this system's week start.
    pub fn weekday_names(self) -> [&'static str; 7] {
        match self {
            CalendarSystem::Persian => ["Sat", "Sun", "Mon", "Tue", "Wed", "Thu", "Fri"],
            CalendarSystem::Gregorian => ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"],
        }
    }

    /// The name persisted under the `calendarType` preference.
    pub fn as_str(self) -> &'static str {
        match self {
            CalendarSystem::Persian => "persian",
            CalendarSystem::Gregorian => "gregorian",
        }
    }
}

impl fmt::Display for CalendarSystem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CalendarSystem {
    type Err = Error;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "persian" => Ok(CalendarSystem::Persian),
            "gregorian" => Ok(CalendarSystem::Gregorian),
            _ => Err(Error::UnknownCalendarSystem(value.to_owned())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_trips_through_str() {
        for system in [CalendarSystem::Persian, CalendarSystem::Gregorian] {
            assert_eq!(system.as_str().parse::<CalendarSystem>().unwrap(), system);
        }
        assert!("julian".parse::<CalendarSystem>().is_err());
    }

    #[test]
    fn month_metadata_dispatches_per_system() {
        assert_eq!(CalendarSystem::Persian.days_in_month(1403, 1), 31);
        assert_eq!(CalendarSystem::Persian.days_in_month(1402, 12), 29);
        assert_eq!(CalendarSystem::Gregorian.days_in_month(2024, 2), 29);
        assert_eq!(CalendarSystem::Persian.first_weekday(1403, 1), 4);
        assert_eq!(CalendarSystem::Gregorian.first_weekday(2024, 1), 1);
    }

    #[test]
    fn month_names() {
        assert_eq!(CalendarSystem::Persian.month_name(1), "Farvardin");
        assert_eq!(CalendarSystem::Persian.month_name(12), "Esfand");
        assert_eq!(CalendarSystem::Gregorian.month_name(8), "August");
    }

    #[test]
    fn weeks_start_one_day_apart() {
        assert_eq!(CalendarSystem::Persian.weekday_names()[0], "Sat");
        assert_eq!(CalendarSystem::Gregorian.weekday_names()[0], "Sun");
    }
}
