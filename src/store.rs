// File: src/store.rs
use crate::model::Event;
use chrono::NaiveDate;
use std::collections::HashMap;
use uuid::Uuid;

/// In-memory collection of confirmed events, bucketed by start day.
#[derive(Debug, Clone, Default)]
pub struct EventBook {
    pub days: HashMap<NaiveDate, Vec<Event>>,
    pub index: HashMap<String, NaiveDate>,
}

impl EventBook {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_events(events: impl IntoIterator<Item = Event>) -> Self {
        let mut book = Self::new();
        for event in events {
            book.add(event);
        }
        book
    }

    /// Stores an event, giving it a fresh id when it has none.
    /// An event whose id is already present replaces the stored one.
    pub fn add(&mut self, mut event: Event) -> Event {
        if event.id.is_empty() {
            event.id = Uuid::new_v4().to_string();
        }
        if self.index.contains_key(&event.id) {
            log::warn!("Event {} already stored, replacing it", event.id);
            self.remove_entry(&event.id);
        }
        let day = event.start_date();
        self.index.insert(event.id.clone(), day);
        self.days.entry(day).or_default().push(event.clone());
        event
    }

    /// Replaces the stored event with the same id. Returns false if there
    /// was none, in which case nothing is stored.
    pub fn update(&mut self, event: Event) -> bool {
        if self.remove_entry(&event.id).is_none() {
            return false;
        }
        let day = event.start_date();
        self.index.insert(event.id.clone(), day);
        self.days.entry(day).or_default().push(event);
        true
    }

    pub fn delete(&mut self, id: &str) -> Option<Event> {
        self.remove_entry(id)
    }

    pub fn get(&self, id: &str) -> Option<&Event> {
        let day = self.index.get(id)?;
        self.days.get(day)?.iter().find(|e| e.id == id)
    }

    /// Events starting on `date`, earliest first.
    pub fn events_on(&self, date: NaiveDate) -> Vec<&Event> {
        let mut events: Vec<&Event> = self
            .days
            .get(&date)
            .map(|list| list.iter().collect())
            .unwrap_or_default();
        events.sort_by_key(|e| e.start_time);
        events
    }

    /// Stored events that overlap `event`, ignoring the event's own entry.
    pub fn conflicts<'a>(&'a self, event: &'a Event) -> impl Iterator<Item = &'a Event> + 'a {
        self.iter()
            .filter(move |existing| existing.id != event.id && event.overlaps(existing))
    }

    pub fn has_conflict(&self, event: &Event) -> bool {
        self.conflicts(event).next().is_some()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Event> {
        self.days.values().flatten()
    }

    pub fn len(&self) -> usize {
        self.index.len()
    }

    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }

    pub fn clear(&mut self) {
        self.days.clear();
        self.index.clear();
    }

    fn remove_entry(&mut self, id: &str) -> Option<Event> {
        let day = self.index.remove(id)?;
        let list = self.days.get_mut(&day)?;
        let idx = list.iter().position(|e| e.id == id)?;
        let removed = list.remove(idx);
        if list.is_empty() {
            self.days.remove(&day);
        }
        Some(removed)
    }
}
