// SPDX-FileCopyrightText: 2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use crate::date::{CalendarDate, GregorianDate, PersianDate};
use crate::jalali::{to_gregorian, to_persian};
use crate::system::CalendarSystem;

/// Where to move the displayed month.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    PrevYear,
    PrevMonth,
    Today,
    NextMonth,
    NextYear,
}

/// The current date, held in both calendar systems at once.
///
/// Exactly one representation is the source of truth per operation; the
/// other is always re-derived through the converter, never edited on its
/// own. All transitions are total, there is no failure path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CalendarState {
    active: CalendarSystem,
    gregorian: GregorianDate,
    persian: PersianDate,
}

impl CalendarState {
    /// Starts on `today` with the given system active.
    pub fn new(active: CalendarSystem, today: GregorianDate) -> Self {
        Self {
            active,
            gregorian: today,
            persian: to_persian(today),
        }
    }

    pub fn active_system(&self) -> CalendarSystem {
        self.active
    }

    pub fn gregorian(&self) -> GregorianDate {
        self.gregorian
    }

    pub fn persian(&self) -> PersianDate {
        self.persian
    }

    /// The current date in the active system.
    pub fn current(&self) -> CalendarDate {
        self.date_in(self.active)
    }

    /// The current date expressed in `system`.
    pub fn date_in(&self, system: CalendarSystem) -> CalendarDate {
        match system {
            CalendarSystem::Persian => CalendarDate::Persian(self.persian),
            CalendarSystem::Gregorian => CalendarDate::Gregorian(self.gregorian),
        }
    }

    /// Moves the displayed month. `today` is read only for
    /// [`Direction::Today`], which sets both representations from it no
    /// matter which system is active.
    pub fn navigate(&mut self, direction: Direction, today: GregorianDate) {
        match direction {
            Direction::Today => self.set_current(CalendarDate::Gregorian(today)),
            Direction::PrevYear => self.step(-1, 0),
            Direction::NextYear => self.step(1, 0),
            Direction::PrevMonth => self.step(0, -1),
            Direction::NextMonth => self.step(0, 1),
        }
    }

    /// Makes `system` the active one. A same-system switch changes
    /// nothing; otherwise the newly-active representation is recomputed
    /// from the previously-active one. Returns whether the tag changed.
    pub fn switch(&mut self, system: CalendarSystem) -> bool {
        if system == self.active {
            return false;
        }
        let previous = self.current();
        self.active = system;
        self.set_current(previous.to_other());
        true
    }

    /// Steps the active representation by whole years or months, rolling
    /// months over year boundaries. Navigation lands on day 1 of the
    /// target month, so every step stays valid in both systems without
    /// clamping.
    fn step(&mut self, years: i32, months: i32) {
        let current = self.current();
        let mut year = current.year() + years;
        let mut month = current.month() as i32 + months;
        if month < 1 {
            month = 12;
            year -= 1;
        } else if month > 12 {
            month = 1;
            year += 1;
        }
        self.set_current(self.active.date(year, month as u32, 1));
    }

    /// Stores `date` into its own representation and re-derives the other.
    fn set_current(&mut self, date: CalendarDate) {
        match date {
            CalendarDate::Gregorian(g) => {
                self.gregorian = g;
                self.persian = to_persian(g);
            }
            CalendarDate::Persian(p) => {
                self.persian = p;
                self.gregorian = to_gregorian(p);
            }
        }
    }
}
