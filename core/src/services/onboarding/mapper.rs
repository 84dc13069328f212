//! Field translation between frontend and backend onboarding vocabularies

use serde_json::Value;

use crate::domain::entities::onboarding::{list_from_value, BackendOnboarding, FrontendOnboarding};

use super::tables::{
    FieldTable, AGE_RANGE_FORWARD, AGE_RANGE_REVERSE, GAME_HABIT_FORWARD,
    GAME_PREFERENCES_FORWARD, GAME_PREFERENCES_REVERSE, GAME_STYLE_FORWARD, GAME_STYLE_REVERSE,
    GENDER_FORWARD, GENDER_REVERSE, PRIMARY_GOAL_FORWARD,
};

pub fn map_age_range(value: &str) -> String {
    AGE_RANGE_FORWARD.translate(value)
}

pub fn map_gender(value: &str) -> String {
    GENDER_FORWARD.translate(value)
}

/// Translate each preference, keeping order and length
pub fn map_game_preferences(values: &[String]) -> Vec<String> {
    values
        .iter()
        .map(|value| GAME_PREFERENCES_FORWARD.translate(value))
        .collect()
}

/// Translate raw JSON preferences; non-string elements pass through untouched
pub fn map_game_preference_values(values: &[Value]) -> Vec<Value> {
    translate_all(&GAME_PREFERENCES_FORWARD, values)
}

/// Translate preferences held as untyped JSON; a non-list yields an empty list
pub fn map_game_preferences_value(value: &Value) -> Vec<Value> {
    map_game_preference_values(&list_from_value(value))
}

pub fn map_game_style(value: &str) -> String {
    GAME_STYLE_FORWARD.translate(value)
}

pub fn map_game_habit(value: &str) -> String {
    GAME_HABIT_FORWARD.translate(value)
}

pub fn map_primary_goal(value: &str) -> String {
    PRIMARY_GOAL_FORWARD.translate(value)
}

pub fn reverse_age_range(value: &str) -> String {
    AGE_RANGE_REVERSE.translate(value)
}

pub fn reverse_gender(value: &str) -> String {
    GENDER_REVERSE.translate(value)
}

pub fn reverse_game_preferences(values: &[String]) -> Vec<String> {
    values
        .iter()
        .map(|value| GAME_PREFERENCES_REVERSE.translate(value))
        .collect()
}

pub fn reverse_game_preference_values(values: &[Value]) -> Vec<Value> {
    translate_all(&GAME_PREFERENCES_REVERSE, values)
}

pub fn reverse_game_style(value: &str) -> String {
    GAME_STYLE_REVERSE.translate(value)
}

fn translate_all(table: &FieldTable, values: &[Value]) -> Vec<Value> {
    values.iter().map(|value| table.translate_value(value)).collect()
}

/// Translate a frontend onboarding record into backend vocabulary
///
/// Only keys present in `data` appear in the result. Answers that are not
/// strings, and `dailyEarningGoal`, are copied as-is.
pub fn map_onboarding_data(data: &FrontendOnboarding) -> BackendOnboarding {
    BackendOnboarding {
        age_range: data.age_range.as_ref().map(|v| AGE_RANGE_FORWARD.translate_value(v)),
        gender: data.gender.as_ref().map(|v| GENDER_FORWARD.translate_value(v)),
        game_preferences: data.game_preferences.as_deref().map(map_game_preference_values),
        game_style: data.game_style.as_ref().map(|v| GAME_STYLE_FORWARD.translate_value(v)),
        game_habit: data.game_habit.as_ref().map(|v| GAME_HABIT_FORWARD.translate_value(v)),
        primary_goal: data.primary_goal.as_ref().map(|v| PRIMARY_GOAL_FORWARD.translate_value(v)),
        daily_earning_goal: data.daily_earning_goal.clone(),
    }
}

/// Translate a stored backend onboarding record back into frontend vocabulary
///
/// Habits and goals share one vocabulary and are copied unchanged.
pub fn map_backend_to_frontend(data: &BackendOnboarding) -> FrontendOnboarding {
    FrontendOnboarding {
        age_range: data.age_range.as_ref().map(|v| AGE_RANGE_REVERSE.translate_value(v)),
        gender: data.gender.as_ref().map(|v| GENDER_REVERSE.translate_value(v)),
        game_preferences: data.game_preferences.as_deref().map(reverse_game_preference_values),
        game_style: data.game_style.as_ref().map(|v| GAME_STYLE_REVERSE.translate_value(v)),
        game_habit: data.game_habit.clone(),
        primary_goal: data.primary_goal.clone(),
        daily_earning_goal: data.daily_earning_goal.clone(),
    }
}
