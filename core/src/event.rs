// SPDX-FileCopyrightText: 2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::date::DateKey;
use crate::error::Error;
use crate::storage::{SharedStorage, Storage, keys};

/// A single event attached to a calendar day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Event {
    /// Opaque unique identifier, assigned at creation.
    pub id: String,

    /// Title as entered, trimmed; never empty.
    pub title: String,

    /// Free-form details; empty when the user gave none.
    #[serde(default)]
    pub description: String,
}

/// Events keyed by the day they were created under, in insertion order.
///
/// Keys come from whichever calendar system was active at creation, so
/// the same physical day maps to different keys in the two systems and a
/// lookup only matches the creating system's key. A day with no events
/// holds no entry at all; empty lists are never kept. Every mutation
/// rewrites the whole mapping to storage before returning.
#[derive(Debug)]
pub struct EventStore {
    events: BTreeMap<DateKey, Vec<Event>>,
    store: SharedStorage,
}

impl EventStore {
    /// Restores the mapping from storage. A missing or unreadable blob
    /// yields an empty store, never an error.
    pub fn load(store: SharedStorage) -> Self {
        let events = match store.borrow().get(keys::EVENTS) {
            Some(blob) => match serde_json::from_str(&blob) {
                Ok(events) => events,
                Err(err) => {
                    tracing::warn!(%err, "stored events unreadable, starting empty");
                    BTreeMap::new()
                }
            },
            None => BTreeMap::new(),
        };
        Self { events, store }
    }

    /// Appends a new event under `key` and persists the mapping.
    ///
    /// The title is trimmed first; an empty result is rejected without
    /// touching the store.
    pub fn add(&mut self, key: &DateKey, title: &str, description: &str) -> Result<Event, Error> {
        let title = title.trim();
        if title.is_empty() {
            return Err(Error::EmptyTitle);
        }

        let event = Event {
            id: Uuid::new_v4().to_string(),
            title: title.to_owned(),
            description: description.trim().to_owned(),
        };
        self.events
            .entry(key.clone())
            .or_default()
            .push(event.clone());
        self.persist()?;

        tracing::debug!(key = %key, id = %event.id, "event added");
        Ok(event)
    }

    /// Removes the event with `id` under `key` and persists the mapping.
    /// Unknown keys and ids are silent no-ops.
    pub fn remove(&mut self, key: &DateKey, id: &str) -> Result<(), Error> {
        let Some(list) = self.events.get_mut(key) else {
            return Ok(());
        };
        let before = list.len();
        list.retain(|event| event.id != id);
        if list.len() == before {
            return Ok(());
        }
        if list.is_empty() {
            self.events.remove(key);
        }

        tracing::debug!(key = %key, id, "event removed");
        self.persist()
    }

    /// The events stored under `key`, oldest first.
    pub fn events(&self, key: &DateKey) -> &[Event] {
        self.events.get(key).map_or(&[], Vec::as_slice)
    }

    /// Whether any event is stored under `key`.
    pub fn has_events(&self, key: &DateKey) -> bool {
        self.events.contains_key(key)
    }

    fn persist(&mut self) -> Result<(), Error> {
        let blob = serde_json::to_string(&self.events)?;
        self.store.borrow_mut().set(keys::EVENTS, &blob)?;
        Ok(())
    }
}
