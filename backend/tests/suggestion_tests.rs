//! Suggestion contract tests
//!
//! Tests for the external suggestion contract including:
//! - Strict shape validation of parsed responses
//! - Catalog membership of every suggested plant
//! - Required-field enforcement during deserialization

use proptest::prelude::*;
use shared::{
    validate_suggestions, CareInstructions, Plant, RoomConditions, SuggestedPlant,
    SUGGESTION_COUNT,
};

fn plant(id: i64, name: &str) -> Plant {
    Plant {
        id,
        name: name.to_string(),
        image_url: format!("/assets/plants/{}.jpg", id),
        environment: "Indoor".to_string(),
        water: "Weekly".to_string(),
        sunlight: "Bright indirect".to_string(),
        soil: "Well-drained".to_string(),
        benefits: "Air purifying".to_string(),
    }
}

fn catalog() -> Vec<Plant> {
    vec![
        plant(1, "Snake Plant"),
        plant(2, "Golden Pothos"),
        plant(3, "ZZ Plant"),
        plant(4, "Spider Plant"),
        plant(5, "Peace Lily"),
        plant(6, "Aloe Vera"),
        plant(7, "Calathea"),
        plant(8, "Monstera"),
    ]
}

fn suggestion(name: &str) -> SuggestedPlant {
    SuggestedPlant {
        plant_name: name.to_string(),
        description: "A friendly green roommate.".to_string(),
        care_instructions: CareInstructions {
            watering: "Weekly".to_string(),
            sunlight: "Bright indirect light".to_string(),
            fertilizer: "Monthly in the growing season".to_string(),
        },
        reasoning: "Fits the stated room conditions.".to_string(),
    }
}

// ============================================================================
// Unit Tests
// ============================================================================

#[cfg(test)]
mod unit_tests {
    use super::*;

    /// A well-formed response of three catalog plants passes validation
    #[test]
    fn test_three_catalog_plants_pass() {
        let suggestions = vec![
            suggestion("Snake Plant"),
            suggestion("ZZ Plant"),
            suggestion("Calathea"),
        ];
        assert!(validate_suggestions(&suggestions, &catalog()).is_ok());
    }

    /// A plant outside the catalog fails the whole response
    #[test]
    fn test_unknown_plant_fails_whole_response() {
        let suggestions = vec![
            suggestion("Snake Plant"),
            suggestion("ZZ Plant"),
            suggestion("Venus Flytrap"),
        ];
        assert!(validate_suggestions(&suggestions, &catalog()).is_err());
    }

    /// The service JSON contract is camelCase with a nested care record
    #[test]
    fn test_wire_format_round_trip() {
        let json = r#"{
            "plantName": "Peace Lily",
            "description": "Forgiving and elegant.",
            "careInstructions": {
                "watering": "Weekly, droops when thirsty",
                "sunlight": "Low to bright indirect",
                "fertilizer": "Every 6 weeks in summer"
            },
            "reasoning": "Handles low light and a weekly watering rhythm."
        }"#;

        let parsed: SuggestedPlant = serde_json::from_str(json).unwrap();
        assert_eq!(parsed.plant_name, "Peace Lily");
        assert_eq!(parsed.care_instructions.fertilizer, "Every 6 weeks in summer");

        let emitted = serde_json::to_value(&parsed).unwrap();
        assert!(emitted.get("plantName").is_some());
        assert!(emitted.get("careInstructions").is_some());
    }

    /// A response object missing careInstructions does not deserialize
    #[test]
    fn test_missing_care_instructions_fails_deserialization() {
        let json = r#"{
            "plantName": "Peace Lily",
            "description": "Forgiving and elegant.",
            "reasoning": "Handles low light."
        }"#;
        assert!(serde_json::from_str::<SuggestedPlant>(json).is_err());
    }

    /// A non-array payload does not deserialize as a suggestion list
    #[test]
    fn test_non_array_payload_fails_deserialization() {
        let json = r#"{"plants": []}"#;
        assert!(serde_json::from_str::<Vec<SuggestedPlant>>(json).is_err());
    }

    /// Room condition sentinels travel as null, not as extra categories
    #[test]
    fn test_room_conditions_no_preference_is_null() {
        let json = r#"{
            "sunlight": "bright_indirect",
            "soil": null,
            "fertilizer_available": null,
            "special_requirement": null,
            "max_watering_interval_days": 14,
            "space": "small"
        }"#;

        let conditions: RoomConditions = serde_json::from_str(json).unwrap();
        assert!(conditions.soil.is_none());
        assert!(conditions.fertilizer_available.is_none());
        assert!(conditions.special_requirement.is_none());
    }
}

// ============================================================================
// Property Tests
// ============================================================================

#[cfg(test)]
mod property_tests {
    use super::*;

    /// Strategy picking indexes of three distinct catalog plants
    fn pick_three_strategy() -> impl Strategy<Value = Vec<usize>> {
        Just((0..catalog().len()).collect::<Vec<_>>())
            .prop_shuffle()
            .prop_map(|order| order.into_iter().take(SUGGESTION_COUNT).collect())
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(100))]

        /// Any three catalog names validate, regardless of which three
        #[test]
        fn prop_any_three_catalog_plants_validate(picks in pick_three_strategy()) {
            let catalog = catalog();
            let suggestions: Vec<_> = picks
                .iter()
                .map(|&i| suggestion(&catalog[i].name))
                .collect();

            prop_assert!(validate_suggestions(&suggestions, &catalog).is_ok());
        }

        /// Any count other than three is rejected
        #[test]
        fn prop_wrong_count_is_rejected(count in 0usize..=8) {
            prop_assume!(count != SUGGESTION_COUNT);

            let suggestions: Vec<_> = (0..count).map(|_| suggestion("Snake Plant")).collect();
            prop_assert!(validate_suggestions(&suggestions, &catalog()).is_err());
        }
    }
}
