//! Vocabulary lookup tables for onboarding fields
//!
//! Forward tables map frontend values to backend values. Reverse tables are
//! declared by hand and are deliberately not exact inverses:
//! - `ageRange`: forward never produces `45_54`, yet reverse maps it to `35-44`
//! - `gamePreferences`: `role_playing_adventure` and `simulation` both map to
//!   `simulation`, so reverse can only restore `simulation`

use once_cell::sync::Lazy;
use serde_json::Value;
use std::collections::HashMap;

use crate::domain::entities::onboarding::OnboardingField;

/// Translation direction of a table
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Frontend vocabulary to backend vocabulary
    Forward,
    /// Backend vocabulary to frontend vocabulary
    Reverse,
}

/// Immutable lookup table for one field in one direction
#[derive(Debug)]
pub struct FieldTable {
    field: OnboardingField,
    direction: Direction,
    entries: HashMap<&'static str, &'static str>,
}

impl FieldTable {
    fn new(
        field: OnboardingField,
        direction: Direction,
        pairs: &[(&'static str, &'static str)],
    ) -> Self {
        let entries: HashMap<_, _> = pairs.iter().copied().collect();
        debug_assert_eq!(entries.len(), pairs.len(), "duplicate key in {field} table");
        Self {
            field,
            direction,
            entries,
        }
    }

    pub fn field(&self) -> OnboardingField {
        self.field
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// Mapped value for `value`, if the table declares one
    pub fn lookup(&self, value: &str) -> Option<&'static str> {
        self.entries.get(value).copied()
    }

    /// Translate `value`, returning it unchanged when the table has no entry
    pub fn translate(&self, value: &str) -> String {
        match self.lookup(value) {
            Some(mapped) => mapped.to_string(),
            None => {
                tracing::trace!(
                    field = %self.field,
                    direction = ?self.direction,
                    value,
                    "No mapping, passing value through"
                );
                value.to_string()
            }
        }
    }

    /// Translate a raw JSON answer; only strings are looked up
    pub fn translate_value(&self, value: &Value) -> Value {
        match value {
            Value::String(s) => Value::String(self.translate(s)),
            other => other.clone(),
        }
    }

    /// Number of declared entries
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Declared entries, in no particular order
    pub fn entries(&self) -> impl Iterator<Item = (&'static str, &'static str)> + '_ {
        self.entries.iter().map(|(k, v)| (*k, *v))
    }
}

pub static AGE_RANGE_FORWARD: Lazy<FieldTable> = Lazy::new(|| {
    FieldTable::new(
        OnboardingField::AgeRange,
        Direction::Forward,
        &[
            ("Under 18", "under_18"),
            ("18-24", "18_24"),
            ("25-34", "25_34"),
            ("35-44", "35_44"),
            ("45+", "55_plus"),
        ],
    )
});

pub static GENDER_FORWARD: Lazy<FieldTable> = Lazy::new(|| {
    FieldTable::new(
        OnboardingField::Gender,
        Direction::Forward,
        &[
            ("Male", "male"),
            ("Female", "female"),
            ("Other", "other"),
            ("Prefer not to say", "prefer_not_to_say"),
        ],
    )
});

pub static GAME_PREFERENCES_FORWARD: Lazy<FieldTable> = Lazy::new(|| {
    FieldTable::new(
        OnboardingField::GamePreferences,
        Direction::Forward,
        &[
            ("puzzle_brain", "puzzle"),
            ("strategy", "strategy"),
            ("arcade", "arcade"),
            ("simulation", "simulation"),
            ("card_casino", "casino"),
            ("sports_racing", "action"),
            ("word_trivia", "trivia"),
            ("role_playing_adventure", "simulation"),
        ],
    )
});

pub static GAME_STYLE_FORWARD: Lazy<FieldTable> = Lazy::new(|| {
    FieldTable::new(
        OnboardingField::GameStyle,
        Direction::Forward,
        &[
            ("quick_casual", "casual"),
            ("medium_sessions", "competitive"),
            ("deeper_strategic", "educational"),
        ],
    )
});

// Both vocabularies agree on habits and goals.
pub static GAME_HABIT_FORWARD: Lazy<FieldTable> = Lazy::new(|| {
    FieldTable::new(
        OnboardingField::GameHabit,
        Direction::Forward,
        &[
            ("daily", "daily"),
            ("few_times_week", "few_times_week"),
            ("weekly", "weekly"),
            ("occasionally", "occasionally"),
            ("rarely", "rarely"),
        ],
    )
});

pub static PRIMARY_GOAL_FORWARD: Lazy<FieldTable> = Lazy::new(|| {
    FieldTable::new(
        OnboardingField::PrimaryGoal,
        Direction::Forward,
        &[
            ("earn_money", "earn_money"),
            ("save_money", "save_money"),
            ("have_fun", "have_fun"),
            ("learn_skills", "learn_skills"),
            ("pass_time", "pass_time"),
            ("compete", "compete"),
            ("socialize", "socialize"),
        ],
    )
});

pub static AGE_RANGE_REVERSE: Lazy<FieldTable> = Lazy::new(|| {
    FieldTable::new(
        OnboardingField::AgeRange,
        Direction::Reverse,
        &[
            ("under_18", "Under 18"),
            ("18_24", "18-24"),
            ("25_34", "25-34"),
            ("35_44", "35-44"),
            ("45_54", "35-44"),
            ("55_plus", "45+"),
        ],
    )
});

pub static GENDER_REVERSE: Lazy<FieldTable> = Lazy::new(|| {
    FieldTable::new(
        OnboardingField::Gender,
        Direction::Reverse,
        &[
            ("male", "Male"),
            ("female", "Female"),
            ("other", "Other"),
            ("prefer_not_to_say", "Prefer not to say"),
        ],
    )
});

pub static GAME_PREFERENCES_REVERSE: Lazy<FieldTable> = Lazy::new(|| {
    FieldTable::new(
        OnboardingField::GamePreferences,
        Direction::Reverse,
        &[
            ("puzzle", "puzzle_brain"),
            ("strategy", "strategy"),
            ("arcade", "arcade"),
            ("simulation", "simulation"),
            ("casino", "card_casino"),
            ("action", "sports_racing"),
            ("trivia", "word_trivia"),
        ],
    )
});

pub static GAME_STYLE_REVERSE: Lazy<FieldTable> = Lazy::new(|| {
    FieldTable::new(
        OnboardingField::GameStyle,
        Direction::Reverse,
        &[
            ("casual", "quick_casual"),
            ("competitive", "medium_sessions"),
            ("educational", "deeper_strategic"),
        ],
    )
});

/// Forward table for `field`
pub fn forward_table(field: OnboardingField) -> &'static FieldTable {
    match field {
        OnboardingField::AgeRange => &*AGE_RANGE_FORWARD,
        OnboardingField::Gender => &*GENDER_FORWARD,
        OnboardingField::GamePreferences => &*GAME_PREFERENCES_FORWARD,
        OnboardingField::GameStyle => &*GAME_STYLE_FORWARD,
        OnboardingField::GameHabit => &*GAME_HABIT_FORWARD,
        OnboardingField::PrimaryGoal => &*PRIMARY_GOAL_FORWARD,
    }
}

/// Reverse table for `field`; habits and goals have none
pub fn reverse_table(field: OnboardingField) -> Option<&'static FieldTable> {
    match field {
        OnboardingField::AgeRange => Some(&*AGE_RANGE_REVERSE),
        OnboardingField::Gender => Some(&*GENDER_REVERSE),
        OnboardingField::GamePreferences => Some(&*GAME_PREFERENCES_REVERSE),
        OnboardingField::GameStyle => Some(&*GAME_STYLE_REVERSE),
        OnboardingField::GameHabit | OnboardingField::PrimaryGoal => None,
    }
}
