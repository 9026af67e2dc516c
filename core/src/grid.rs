// SPDX-FileCopyrightText: 2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use crate::date::{CalendarDate, DateKey};
use crate::event::EventStore;
use crate::system::CalendarSystem;

/// One slot of a month grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GridCell {
    /// Leading filler before day 1, aligning the first row to weekdays.
    Blank,

    Day(DayCell),
}

/// A day of the displayed month with everything the renderer needs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DayCell {
    /// Day number in the displayed system, 1-based.
    pub day: u32,

    /// Key this day's events are stored under.
    pub key: DateKey,

    pub has_events: bool,

    pub is_today: bool,

    /// The same physical day's number in the other calendar system, when
    /// the secondary calendar is shown.
    pub secondary_day: Option<u32>,
}

/// Lazily yields the cells of one month: `first_weekday` blanks, then day
/// cells 1 through `days_in_month`.
///
/// The sequence is rebuilt in full after every navigation or switch, and
/// secondary day numbers are converted cell by cell rather than cached.
/// `today` may be given in either system; it is compared in the grid's.
pub fn month_cells(
    system: CalendarSystem,
    year: i32,
    month: u32,
    today: CalendarDate,
    events: &EventStore,
    show_secondary: bool,
) -> impl Iterator<Item = GridCell> + '_ {
    let blanks = system.first_weekday(year, month);
    let days = system.days_in_month(year, month);
    let today = if today.system() == system {
        today
    } else {
        today.to_other()
    };

    let blanks = (0..blanks).map(|_| GridCell::Blank);
    let days = (1..=days).map(move |day| {
        let date = system.date(year, month, day);
        let key = date.key();
        GridCell::Day(DayCell {
            day,
            has_events: events.has_events(&key),
            is_today: date == today,
            secondary_day: show_secondary.then(|| date.to_other().day()),
            key,
        })
    });
    blanks.chain(days)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::date::GregorianDate;
    use crate::event::EventStore;
    use crate::storage::MemoryStore;

    fn empty_events() -> EventStore {
        EventStore::load(MemoryStore::new().shared())
    }

    fn today() -> CalendarDate {
        CalendarDate::Gregorian(GregorianDate::new(2024, 3, 25))
    }

    #[test]
    fn farvardin_1403_has_four_blanks_then_31_days() {
        let events = empty_events();
        let cells: Vec<GridCell> =
            month_cells(CalendarSystem::Persian, 1403, 1, today(), &events, false).collect();

        assert_eq!(cells.len(), 4 + 31);
        assert!(cells[..4].iter().all(|c| *c == GridCell::Blank));
        let GridCell::Day(first) = &cells[4] else {
            panic!("expected a day cell after the blanks");
        };
        assert_eq!(first.day, 1);
        assert_eq!(first.key.as_str(), "1403-1-1");
        let GridCell::Day(last) = &cells[34] else {
            panic!("expected the last day cell");
        };
        assert_eq!(last.day, 31);
    }

    #[test]
    fn secondary_day_numbers_come_from_the_other_system() {
        let events = empty_events();
        let cells: Vec<GridCell> =
            month_cells(CalendarSystem::Persian, 1403, 1, today(), &events, true).collect();

        // Farvardin 1, 1403 is March 20, 2024.
        let GridCell::Day(first) = &cells[4] else {
            panic!("expected a day cell");
        };
        assert_eq!(first.secondary_day, Some(20));

        // Farvardin 13 crosses into April.
        let GridCell::Day(sizdah) = &cells[4 + 12] else {
            panic!("expected a day cell");
        };
        assert_eq!(sizdah.secondary_day, Some(1));
    }

    #[test]
    fn secondary_days_are_omitted_when_disabled() {
        let events = empty_events();
        let has_secondary = month_cells(CalendarSystem::Persian, 1403, 1, today(), &events, false)
            .any(|cell| matches!(cell, GridCell::Day(d) if d.secondary_day.is_some()));
        assert!(!has_secondary);
    }

    #[test]
    fn event_days_are_flagged() {
        let mut events = empty_events();
        let key = DateKey::new(1403, 1, 13);
        events.add(&key, "Sizdah Bedar", "").unwrap();

        let flagged: Vec<u32> =
            month_cells(CalendarSystem::Persian, 1403, 1, today(), &events, false)
                .filter_map(|cell| match cell {
                    GridCell::Day(d) if d.has_events => Some(d.day),
                    _ => None,
                })
                .collect();
        assert_eq!(flagged, [13]);
    }

    #[test]
    fn today_is_marked_in_either_system() {
        let events = empty_events();

        // 2024-03-25 is Farvardin 6, 1403.
        let marked: Vec<u32> =
            month_cells(CalendarSystem::Persian, 1403, 1, today(), &events, false)
                .filter_map(|cell| match cell {
                    GridCell::Day(d) if d.is_today => Some(d.day),
                    _ => None,
                })
                .collect();
        assert_eq!(marked, [6]);

        let marked: Vec<u32> =
            month_cells(CalendarSystem::Gregorian, 2024, 3, today(), &events, false)
                .filter_map(|cell| match cell {
                    GridCell::Day(d) if d.is_today => Some(d.day),
                    _ => None,
                })
                .collect();
        assert_eq!(marked, [25]);
    }

    #[test]
    fn gregorian_grid_shape() {
        let events = empty_events();
        let cells: Vec<GridCell> =
            month_cells(CalendarSystem::Gregorian, 2024, 3, today(), &events, false).collect();

        // March 2024 started on a Friday.
        assert_eq!(cells.len(), 5 + 31);
        assert!(cells[..5].iter().all(|c| *c == GridCell::Blank));
    }
}
