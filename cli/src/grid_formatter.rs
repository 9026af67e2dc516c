// SPDX-FileCopyrightText: 2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::io;

use colored::Colorize;
use taqvim_core::{CalendarDate, CalendarSystem, DayCell, GridCell};

/// Renders the month grid the way the day-grid model orders it: leading
/// blanks, then the days, seven columns per row.
#[derive(Debug)]
pub struct GridFormatter {
    system: CalendarSystem,
    secondary: bool,
}

impl GridFormatter {
    pub fn new(system: CalendarSystem) -> Self {
        Self {
            system,
            secondary: false,
        }
    }

    /// Also prints each day's number in the other calendar system.
    pub fn with_secondary(mut self, secondary: bool) -> Self {
        self.secondary = secondary;
        self
    }

    /// Writes the header, the weekday row, and the week rows.
    pub fn write(
        &self,
        w: &mut impl io::Write,
        current: &CalendarDate,
        cells: impl Iterator<Item = GridCell>,
    ) -> io::Result<()> {
        let width = self.cell_width();
        let title = format!(
            "{} {}",
            self.system.month_name(current.month()),
            current.year()
        );
        writeln!(w, "{:^total$}", title, total = width * 7)?;

        for name in self.system.weekday_names() {
            write!(w, "{name:>width$}")?;
        }
        writeln!(w)?;

        let mut column = 0;
        for cell in cells {
            match cell {
                GridCell::Blank => write!(w, "{:width$}", "")?,
                GridCell::Day(day) => write!(w, "{}", self.format_day(&day))?,
            }
            column += 1;
            if column % 7 == 0 {
                writeln!(w)?;
            }
        }
        if column % 7 != 0 {
            writeln!(w)?;
        }
        Ok(())
    }

    fn cell_width(&self) -> usize {
        if self.secondary { 8 } else { 5 }
    }

    fn format_day(&self, cell: &DayCell) -> String {
        let mut text = match (self.secondary, cell.secondary_day) {
            (true, Some(secondary)) => format!("{:>4}/{:<2}", cell.day, secondary),
            (true, None) => format!("{:>4}   ", cell.day),
            (false, _) => format!("{:>4}", cell.day),
        };
        text.push(if cell.has_events { '*' } else { ' ' });

        // pad before coloring so escape codes do not break the columns
        if cell.is_today {
            text.bold().underline().to_string()
        } else {
            text
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use taqvim_core::{DateKey, EventStore, GregorianDate, MemoryStore, month_cells};

    fn render(system: CalendarSystem, year: i32, month: u32, secondary: bool) -> String {
        colored::control::set_override(false);
        let events = {
            let mut events = EventStore::load(MemoryStore::new().shared());
            events
                .add(&DateKey::new(1403, 1, 13), "Sizdah Bedar", "")
                .unwrap();
            events
        };
        let today = CalendarDate::Gregorian(GregorianDate::new(2024, 3, 25));
        let cells = month_cells(system, year, month, today, &events, secondary);

        let mut out = Vec::new();
        let current = system.date(year, month, 1);
        GridFormatter::new(system)
            .with_secondary(secondary)
            .write(&mut out, &current, cells)
            .unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn renders_header_and_weekday_row() {
        let text = render(CalendarSystem::Persian, 1403, 1, false);
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines[0].trim(), "Farvardin 1403");
        assert_eq!(
            lines[1].split_whitespace().collect::<Vec<_>>(),
            ["Sat", "Sun", "Mon", "Tue", "Wed", "Thu", "Fri"]
        );
    }

    #[test]
    fn lays_out_five_week_rows_for_farvardin_1403() {
        let text = render(CalendarSystem::Persian, 1403, 1, false);
        let lines: Vec<&str> = text.lines().collect();

        // 4 blanks + 31 days = 35 cells, exactly five full rows
        assert_eq!(lines.len(), 2 + 5);
        // the month starts on Wednesday: four empty columns, then 1..=3
        assert_eq!(&lines[2][..20], "                    ");
        assert_eq!(lines[2].split_whitespace().collect::<Vec<_>>(), ["1", "2", "3"]);
        assert_eq!(lines[3].split_whitespace().next(), Some("4"));
    }

    #[test]
    fn marks_event_days() {
        let text = render(CalendarSystem::Persian, 1403, 1, false);
        assert!(text.contains("13*"), "missing event marker: {text}");
        assert!(!text.contains("14*"));
    }

    #[test]
    fn prints_secondary_day_numbers_when_enabled() {
        let text = render(CalendarSystem::Persian, 1403, 1, true);
        // Farvardin 1 is March 20; Farvardin 13 is April 1
        assert!(text.contains("1/20"), "missing secondary day: {text}");
        assert!(text.contains("13/1 *"), "missing secondary day: {text}");
    }
}
