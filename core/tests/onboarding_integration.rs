//! Integration tests for onboarding translation over JSON payloads

#[cfg(test)]
mod tests {
    use serde_json::{json, Value};

    use ob_core::domain::entities::{BackendOnboarding, FrontendOnboarding, OnboardingField};
    use ob_core::services::onboarding::{
        forward_table, map_backend_to_frontend, map_onboarding_data,
    };

    fn forward(payload: Value) -> Value {
        let record: FrontendOnboarding = serde_json::from_value(payload).unwrap();
        serde_json::to_value(map_onboarding_data(&record)).unwrap()
    }

    fn reverse(payload: Value) -> Value {
        let record: BackendOnboarding = serde_json::from_value(payload).unwrap();
        serde_json::to_value(map_backend_to_frontend(&record)).unwrap()
    }

    #[test]
    fn test_empty_payload() {
        assert_eq!(forward(json!({})), json!({}));
        assert_eq!(reverse(json!({})), json!({}));
    }

    #[test]
    fn test_zero_daily_earning_goal() {
        assert_eq!(
            forward(json!({ "dailyEarningGoal": 0 })),
            json!({ "dailyEarningGoal": 0 })
        );
        assert_eq!(
            reverse(json!({ "dailyEarningGoal": 0 })),
            json!({ "dailyEarningGoal": 0 })
        );
    }

    #[test]
    fn test_preferences_with_unknown_value() {
        assert_eq!(
            forward(json!({ "gamePreferences": ["puzzle_brain", "unknown_x"] })),
            json!({ "gamePreferences": ["puzzle", "unknown_x"] })
        );
    }

    #[test]
    fn test_preferences_not_an_array() {
        assert_eq!(
            forward(json!({ "gamePreferences": "not-an-array" })),
            json!({ "gamePreferences": [] })
        );
    }

    #[test]
    fn test_non_string_answers_come_back_as_sent() {
        let payload = json!({
            "gender": 7,
            "gameHabit": true,
            "gamePreferences": ["arcade", 3, null],
        });
        assert_eq!(forward(payload.clone()), payload);
        assert_eq!(reverse(payload.clone()), payload);
    }

    #[test]
    fn test_gender_and_goal() {
        assert_eq!(
            forward(json!({ "gender": "Male", "primaryGoal": "save_money" })),
            json!({ "gender": "male", "primaryGoal": "save_money" })
        );
    }

    #[test]
    fn test_age_range_round_trip_is_lossy_by_design() {
        assert_eq!(
            reverse(forward(json!({ "ageRange": "45+" }))),
            json!({ "ageRange": "45+" })
        );
        assert_eq!(
            reverse(json!({ "ageRange": "45_54" })),
            json!({ "ageRange": "35-44" })
        );
    }

    #[test]
    fn test_full_payload_both_directions() {
        let frontend = json!({
            "ageRange": "18-24",
            "gender": "Prefer not to say",
            "gamePreferences": ["card_casino", "sports_racing", "word_trivia"],
            "gameStyle": "deeper_strategic",
            "gameHabit": "occasionally",
            "primaryGoal": "learn_skills",
            "dailyEarningGoal": 2.5
        });
        let backend = json!({
            "ageRange": "18_24",
            "gender": "prefer_not_to_say",
            "gamePreferences": ["casino", "action", "trivia"],
            "gameStyle": "educational",
            "gameHabit": "occasionally",
            "primaryGoal": "learn_skills",
            "dailyEarningGoal": 2.5
        });

        assert_eq!(forward(frontend.clone()), backend);
        assert_eq!(reverse(backend), frontend);
    }

    #[test]
    fn test_every_forward_entry_via_payload() {
        for field in OnboardingField::ALL {
            for (from, to) in forward_table(field).entries() {
                let input = if field == OnboardingField::GamePreferences {
                    json!({ field.key(): [from] })
                } else {
                    json!({ field.key(): from })
                };
                let expected = if field == OnboardingField::GamePreferences {
                    json!({ field.key(): [to] })
                } else {
                    json!({ field.key(): to })
                };
                assert_eq!(forward(input), expected, "{field}: {from}");
            }
        }
    }

    #[test]
    fn test_translation_is_safe_across_threads() {
        let handles: Vec<_> = (0..8)
            .map(|_| {
                std::thread::spawn(|| {
                    forward(json!({ "gender": "Female", "gameStyle": "quick_casual" }))
                })
            })
            .collect();

        for handle in handles {
            assert_eq!(
                handle.join().unwrap(),
                json!({ "gender": "female", "gameStyle": "casual" })
            );
        }
    }
}
