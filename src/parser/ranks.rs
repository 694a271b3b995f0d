// File: src/parser/ranks.rs
// Ordered vocabularies used by the extractors. Each entry carries an explicit
// rank; lower ranks are tried first and win ties.
use strum::{Display, EnumIter, IntoEnumIterator, IntoStaticStr};

pub trait Ranked: Copy {
    fn rank(self) -> u8;
}

/// Every variant of `T`, lowest rank first.
pub fn by_rank<T: Ranked + IntoEnumIterator>() -> Vec<T> {
    let mut all: Vec<T> = T::iter().collect();
    all.sort_by_key(|v| v.rank());
    all
}

/// Words that introduce a participant name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, IntoStaticStr, Display)]
#[strum(serialize_all = "lowercase")]
pub enum TriggerPreposition {
    With,
    And,
    For,
}

impl Ranked for TriggerPreposition {
    fn rank(self) -> u8 {
        match self {
            TriggerPreposition::With => 0,
            TriggerPreposition::And => 1,
            TriggerPreposition::For => 2,
        }
    }
}

/// Words that introduce a place.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, IntoStaticStr, Display)]
#[strum(serialize_all = "lowercase")]
pub enum LocativePreposition {
    At,
    In,
    On,
}

impl Ranked for LocativePreposition {
    fn rank(self) -> u8 {
        match self {
            LocativePreposition::At => 0,
            LocativePreposition::In => 1,
            LocativePreposition::On => 2,
        }
    }
}

/// Event types recognized in the text and used as the title's head word.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, IntoStaticStr, Display)]
#[strum(serialize_all = "lowercase")]
pub enum EventKeyword {
    Meeting,
    Call,
    Conference,
    Appointment,
    Lunch,
    Dinner,
    Breakfast,
    Coffee,
    Interview,
    Session,
    Review,
    Party,
    Celebration,
    Event,
    Presentation,
    Webinar,
    Workshop,
}

impl Ranked for EventKeyword {
    fn rank(self) -> u8 {
        match self {
            EventKeyword::Meeting => 0,
            EventKeyword::Call => 1,
            EventKeyword::Conference => 2,
            EventKeyword::Appointment => 3,
            EventKeyword::Lunch => 4,
            EventKeyword::Dinner => 5,
            EventKeyword::Breakfast => 6,
            EventKeyword::Coffee => 7,
            EventKeyword::Interview => 8,
            EventKeyword::Session => 9,
            EventKeyword::Review => 10,
            EventKeyword::Party => 11,
            EventKeyword::Celebration => 12,
            EventKeyword::Event => 13,
            EventKeyword::Presentation => 14,
            EventKeyword::Webinar => 15,
            EventKeyword::Workshop => 16,
        }
    }
}
