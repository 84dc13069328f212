//! Onboarding survey records in frontend and backend vocabulary.
//!
//! Both records carry the same optional keys. Absent keys stay absent through
//! serialisation, and a `null` survey answer is treated as absent. Upstream data
//! is not validated: answers are held as raw JSON so values of any type pass
//! through untouched, and a `gamePreferences` value that is not a list becomes
//! an empty list.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// One of the survey attributes that is subject to vocabulary translation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OnboardingField {
    AgeRange,
    Gender,
    GamePreferences,
    GameStyle,
    GameHabit,
    PrimaryGoal,
}

impl OnboardingField {
    /// Every translatable field, in record order
    pub const ALL: [OnboardingField; 6] = [
        OnboardingField::AgeRange,
        OnboardingField::Gender,
        OnboardingField::GamePreferences,
        OnboardingField::GameStyle,
        OnboardingField::GameHabit,
        OnboardingField::PrimaryGoal,
    ];

    /// JSON key of this field in both record shapes
    pub fn key(&self) -> &'static str {
        match self {
            OnboardingField::AgeRange => "ageRange",
            OnboardingField::Gender => "gender",
            OnboardingField::GamePreferences => "gamePreferences",
            OnboardingField::GameStyle => "gameStyle",
            OnboardingField::GameHabit => "gameHabit",
            OnboardingField::PrimaryGoal => "primaryGoal",
        }
    }
}

impl std::fmt::Display for OnboardingField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.key())
    }
}

impl std::str::FromStr for OnboardingField {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|field| field.key() == s)
            .ok_or_else(|| format!("Unknown onboarding field: {}", s))
    }
}

/// Onboarding answers as sent by the frontend
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FrontendOnboarding {
    #[serde(default, deserialize_with = "answer", skip_serializing_if = "Option::is_none")]
    pub age_range: Option<Value>,

    #[serde(default, deserialize_with = "answer", skip_serializing_if = "Option::is_none")]
    pub gender: Option<Value>,

    #[serde(default, deserialize_with = "answer_list", skip_serializing_if = "Option::is_none")]
    pub game_preferences: Option<Vec<Value>>,

    #[serde(default, deserialize_with = "answer", skip_serializing_if = "Option::is_none")]
    pub game_style: Option<Value>,

    #[serde(default, deserialize_with = "answer", skip_serializing_if = "Option::is_none")]
    pub game_habit: Option<Value>,

    #[serde(default, deserialize_with = "answer", skip_serializing_if = "Option::is_none")]
    pub primary_goal: Option<Value>,

    /// Copied verbatim; zero and `null` are both kept
    #[serde(default, deserialize_with = "present_value", skip_serializing_if = "Option::is_none")]
    pub daily_earning_goal: Option<Value>,
}

/// Onboarding answers in the vocabulary stored by the backend
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BackendOnboarding {
    #[serde(default, deserialize_with = "answer", skip_serializing_if = "Option::is_none")]
    pub age_range: Option<Value>,

    #[serde(default, deserialize_with = "answer", skip_serializing_if = "Option::is_none")]
    pub gender: Option<Value>,

    #[serde(default, deserialize_with = "answer_list", skip_serializing_if = "Option::is_none")]
    pub game_preferences: Option<Vec<Value>>,

    #[serde(default, deserialize_with = "answer", skip_serializing_if = "Option::is_none")]
    pub game_style: Option<Value>,

    #[serde(default, deserialize_with = "answer", skip_serializing_if = "Option::is_none")]
    pub game_habit: Option<Value>,

    #[serde(default, deserialize_with = "answer", skip_serializing_if = "Option::is_none")]
    pub primary_goal: Option<Value>,

    #[serde(default, deserialize_with = "present_value", skip_serializing_if = "Option::is_none")]
    pub daily_earning_goal: Option<Value>,
}

/// Elements of a JSON list, or an empty list for any other value
pub fn list_from_value(value: &Value) -> Vec<Value> {
    match value {
        Value::Array(items) => items.clone(),
        _ => Vec::new(),
    }
}

// A `null` answer is read as "not answered" and stays absent.
fn answer<'de, D>(deserializer: D) -> Result<Option<Value>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(match value {
        Value::Null => None,
        other => Some(other),
    })
}

// `"gamePreferences": null` is intentionally absent rather than `[]`, matching
// the other answers; only a present non-list value collapses to `[]`.
fn answer_list<'de, D>(deserializer: D) -> Result<Option<Vec<Value>>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(match value {
        Value::Null => None,
        other => Some(list_from_value(&other)),
    })
}

fn present_value<'de, D>(deserializer: D) -> Result<Option<Value>, D::Error>
where
    D: Deserializer<'de>,
{
    Value::deserialize(deserializer).map(Some)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_field_keys_round_trip() {
        for field in OnboardingField::ALL {
            assert_eq!(field.key().parse::<OnboardingField>().unwrap(), field);
        }
        assert!("dailyEarningGoal".parse::<OnboardingField>().is_err());
    }

    #[test]
    fn test_absent_keys_stay_absent() {
        let record: FrontendOnboarding = serde_json::from_value(json!({})).unwrap();
        assert_eq!(record, FrontendOnboarding::default());
        assert_eq!(serde_json::to_value(&record).unwrap(), json!({}));
    }

    #[test]
    fn test_camel_case_keys() {
        let record: FrontendOnboarding = serde_json::from_value(json!({
            "ageRange": "18-24",
            "gameStyle": "quick_casual",
            "dailyEarningGoal": 12.5,
        }))
        .unwrap();

        assert_eq!(record.age_range, Some(json!("18-24")));
        assert_eq!(record.game_style, Some(json!("quick_casual")));
        assert_eq!(record.daily_earning_goal, Some(json!(12.5)));
    }

    #[test]
    fn test_daily_earning_goal_zero_and_null_are_present() {
        let record: BackendOnboarding =
            serde_json::from_value(json!({ "dailyEarningGoal": 0 })).unwrap();
        assert_eq!(record.daily_earning_goal, Some(json!(0)));
        assert_eq!(
            serde_json::to_value(&record).unwrap(),
            json!({ "dailyEarningGoal": 0 })
        );

        let record: BackendOnboarding =
            serde_json::from_value(json!({ "dailyEarningGoal": null })).unwrap();
        assert_eq!(record.daily_earning_goal, Some(Value::Null));
    }

    #[test]
    fn test_null_answers_are_absent() {
        let record: FrontendOnboarding = serde_json::from_value(json!({
            "gender": null,
            "gamePreferences": null,
        }))
        .unwrap();
        assert_eq!(record, FrontendOnboarding::default());
    }

    #[test]
    fn test_non_list_preferences_become_empty() {
        let record: FrontendOnboarding =
            serde_json::from_value(json!({ "gamePreferences": "not-an-array" })).unwrap();
        assert_eq!(record.game_preferences, Some(Vec::new()));

        let record: FrontendOnboarding =
            serde_json::from_value(json!({ "gamePreferences": { "a": 1 } })).unwrap();
        assert_eq!(record.game_preferences, Some(Vec::new()));
    }

    #[test]
    fn test_non_string_answers_keep_their_type() {
        let payload = json!({
            "gender": 7,
            "gameHabit": true,
            "gamePreferences": ["arcade", 3, null],
        });
        let record: FrontendOnboarding = serde_json::from_value(payload.clone()).unwrap();

        assert_eq!(record.gender, Some(json!(7)));
        assert_eq!(record.game_habit, Some(json!(true)));
        assert_eq!(
            record.game_preferences,
            Some(vec![json!("arcade"), json!(3), Value::Null])
        );
        assert_eq!(serde_json::to_value(&record).unwrap(), payload);
    }

    #[test]
    fn test_unknown_keys_are_dropped() {
        let record: FrontendOnboarding =
            serde_json::from_value(json!({ "favouriteColour": "blue", "gender": "Male" })).unwrap();
        assert_eq!(
            serde_json::to_value(&record).unwrap(),
            json!({ "gender": "Male" })
        );
    }
}
