// SPDX-FileCopyrightText: 2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Taqvim core: a calendar that shows dates in the solar Hijri (Jalali)
//! and Gregorian systems, keeps both representations of the current date
//! in sync while the user navigates, and attaches events to days.

mod app;
mod config;
mod date;
mod error;
mod event;
mod grid;
mod i18n;
mod jalali;
mod state;
mod storage;
mod system;
mod timer;

pub use crate::app::Taqvim;
pub use crate::config::{APP_NAME, Config};
pub use crate::date::{CalendarDate, DateKey, GregorianDate, PersianDate};
pub use crate::error::Error;
pub use crate::event::{Event, EventStore};
pub use crate::grid::{DayCell, GridCell, month_cells};
pub use crate::i18n::StringTable;
pub use crate::jalali::{
    days_in_gregorian_month, days_in_persian_month, first_weekday_of_gregorian_month,
    first_weekday_of_persian_month, is_leap_gregorian_year, is_leap_persian_year, to_gregorian,
    to_persian,
};
pub use crate::state::{CalendarState, Direction};
pub use crate::storage::{FileStore, MemoryStore, SharedStorage, Storage, keys};
pub use crate::system::CalendarSystem;
pub use crate::timer::{Deferred, LONG_PRESS_DELAY};
