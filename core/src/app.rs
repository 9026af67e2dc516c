// SPDX-FileCopyrightText: 2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use chrono::{Local, NaiveDate};

use crate::config::Config;
use crate::date::{CalendarDate, DateKey, GregorianDate};
use crate::error::Error;
use crate::event::{Event, EventStore};
use crate::grid::{GridCell, month_cells};
use crate::state::{CalendarState, Direction};
use crate::storage::{FileStore, MemoryStore, SharedStorage, Storage, keys};
use crate::system::CalendarSystem;

/// Calendar application core.
///
/// The single owner of the calendar state, the event store, and the
/// persisted preferences; nothing outside this controller mutates them.
/// Preference changes and event mutations are written through to storage
/// as they happen.
#[derive(Debug)]
pub struct Taqvim {
    now: NaiveDate,
    state: CalendarState,
    events: EventStore,
    show_secondary: bool,
    lang: String,
    theme: String,
    store: SharedStorage,
}

impl Taqvim {
    /// Creates the controller from configuration, restoring persisted
    /// preferences and events.
    pub fn new(mut config: Config) -> Result<Self, Error> {
        config.normalize()?;
        let store: SharedStorage = match &config.state_dir {
            Some(dir) => {
                tracing::debug!(path = %dir.display(), "opening state directory");
                FileStore::open(dir)?.shared()
            }
            None => MemoryStore::new().shared(),
        };
        Self::with_storage(store)
    }

    /// Creates the controller over an explicit storage backend.
    pub fn with_storage(store: SharedStorage) -> Result<Self, Error> {
        let active = store
            .borrow()
            .get(keys::CALENDAR_TYPE)
            .and_then(|value| value.parse().ok())
            .unwrap_or(CalendarSystem::Persian);
        let show_secondary = store.borrow().get(keys::SHOW_SECONDARY).as_deref() != Some("false");
        let lang = store
            .borrow()
            .get(keys::LANG)
            .unwrap_or_else(|| "fa".to_owned());
        let theme = store
            .borrow()
            .get(keys::THEME)
            .unwrap_or_else(|| "light".to_owned());

        let now = Local::now().date_naive();
        let events = EventStore::load(store.clone());
        let state = CalendarState::new(active, now.into());

        tracing::debug!(%active, show_secondary, %lang, %theme, "calendar state restored");
        Ok(Self {
            now,
            state,
            events,
            show_secondary,
            lang,
            theme,
            store,
        })
    }

    /// Today according to the clock read at startup (or the last refresh).
    pub fn now(&self) -> NaiveDate {
        self.now
    }

    /// Re-reads the clock; `Today` navigation and grid highlighting
    /// follow it.
    pub fn refresh_now(&mut self) {
        self.now = Local::now().date_naive();
    }

    pub fn active_system(&self) -> CalendarSystem {
        self.state.active_system()
    }

    pub fn show_secondary_calendar(&self) -> bool {
        self.show_secondary
    }

    pub fn lang(&self) -> &str {
        &self.lang
    }

    pub fn theme(&self) -> &str {
        &self.theme
    }

    /// The current date expressed in `system`.
    pub fn current_date(&self, system: CalendarSystem) -> CalendarDate {
        self.state.date_in(system)
    }

    /// Key of today's date in the active system, for the daily events
    /// panel.
    pub fn today_key(&self) -> DateKey {
        let today = CalendarDate::Gregorian(GregorianDate::from(self.now));
        match self.state.active_system() {
            CalendarSystem::Gregorian => today.key(),
            CalendarSystem::Persian => today.to_other().key(),
        }
    }

    /// Cells of the displayed month in the active system, lazily built.
    pub fn day_grid(&self) -> impl Iterator<Item = GridCell> + '_ {
        let current = self.state.current();
        month_cells(
            self.state.active_system(),
            current.year(),
            current.month(),
            CalendarDate::Gregorian(GregorianDate::from(self.now)),
            &self.events,
            self.show_secondary,
        )
    }

    /// The events stored under `key`, oldest first.
    pub fn events_for_date(&self, key: &DateKey) -> &[Event] {
        self.events.events(key)
    }

    /// Adds an event to the day identified by `key`.
    pub fn add_event(
        &mut self,
        key: &DateKey,
        title: &str,
        description: &str,
    ) -> Result<Event, Error> {
        self.events.add(key, title, description)
    }

    /// Deletes the event with `id` from the day identified by `key`.
    pub fn delete_event(&mut self, key: &DateKey, id: &str) -> Result<(), Error> {
        self.events.remove(key, id)
    }

    /// Moves the displayed month.
    pub fn navigate(&mut self, direction: Direction) {
        self.state.navigate(direction, self.now.into());
    }

    /// Switches the active calendar system and persists the choice.
    pub fn switch_calendar(&mut self, system: CalendarSystem) -> Result<(), Error> {
        if self.state.switch(system) {
            self.persist_pref(keys::CALENDAR_TYPE, system.as_str())?;
        }
        Ok(())
    }

    /// Shows or hides the other system's day numbers in the grid.
    pub fn set_show_secondary(&mut self, show: bool) -> Result<(), Error> {
        self.show_secondary = show;
        self.persist_pref(keys::SHOW_SECONDARY, if show { "true" } else { "false" })
    }

    /// Stores the language preference; only collaborators interpret it.
    pub fn set_lang(&mut self, lang: &str) -> Result<(), Error> {
        self.lang = lang.to_owned();
        self.persist_pref(keys::LANG, lang)
    }

    /// Stores the theme preference; only collaborators interpret it.
    pub fn set_theme(&mut self, theme: &str) -> Result<(), Error> {
        self.theme = theme.to_owned();
        self.persist_pref(keys::THEME, theme)
    }

    fn persist_pref(&mut self, key: &'static str, value: &str) -> Result<(), Error> {
        tracing::debug!(key, value, "preference saved");
        self.store.borrow_mut().set(key, value)?;
        Ok(())
    }
}
