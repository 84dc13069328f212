//! Onboarding survey translation
//!
//! Stateless, synchronous translation of onboarding answers between the
//! frontend vocabulary and the backend vocabulary:
//! - Per-field translate functions with identity fallback
//! - Whole-record translation in both directions
//! - The lookup tables behind them

mod mapper;
pub mod tables;

#[cfg(test)]
mod tests;

pub use mapper::{
    map_age_range, map_backend_to_frontend, map_game_habit, map_game_preference_values,
    map_game_preferences, map_game_preferences_value, map_game_style, map_gender,
    map_onboarding_data, map_primary_goal, reverse_age_range, reverse_game_preference_values,
    reverse_game_preferences, reverse_game_style, reverse_gender,
};
pub use tables::{forward_table, reverse_table, Direction, FieldTable};
