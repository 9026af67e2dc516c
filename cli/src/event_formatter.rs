// SPDX-FileCopyrightText: 2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::io;

use colored::Colorize;
use taqvim_core::{DateKey, Event, StringTable};

/// Renders a day's event list, oldest first.
///
/// Labels come from the UI string table when one is loaded, with built-in
/// English fallbacks per string.
#[derive(Debug, Default)]
pub struct EventFormatter {
    strings: StringTable,
}

impl EventFormatter {
    pub fn new(strings: StringTable) -> Self {
        Self { strings }
    }

    pub fn write(&self, w: &mut impl io::Write, key: &DateKey, events: &[Event]) -> io::Result<()> {
        if events.is_empty() {
            let label = self.strings.get_or("noEvents", "No events on");
            writeln!(w, "{label} {key}")?;
            return Ok(());
        }

        let label = self.strings.get_or("eventsOn", "Events on");
        writeln!(w, "{label} {key}:")?;
        for event in events {
            writeln!(w, "- {}  [{}]", event.title.bold(), event.id)?;
            if !event.description.is_empty() {
                writeln!(w, "    {}", event.description)?;
            }
        }
        Ok(())
    }
}
