//! Tests for profile domain models including Focus and Timeline.

use chrono::Utc;

use crate::profiles::{Focus, NewUserProfile, Timeline, UserProfile};

// ==================== Serialization Tests ====================

#[test]
fn test_focus_serialization() {
    assert_eq!(serde_json::to_string(&Focus::Home).unwrap(), "\"home\"");
    assert_eq!(
        serde_json::to_string(&Focus::Retirement).unwrap(),
        "\"retirement\""
    );
    assert_eq!(
        serde_json::to_string(&Focus::Emergency).unwrap(),
        "\"emergency\""
    );
}

#[test]
fn test_timeline_serialization() {
    assert_eq!(serde_json::to_string(&Timeline::Short).unwrap(), "\"short\"");
    assert_eq!(
        serde_json::to_string(&Timeline::Medium).unwrap(),
        "\"medium\""
    );
    assert_eq!(serde_json::to_string(&Timeline::Long).unwrap(), "\"long\"");
}

#[test]
fn test_timeline_labels() {
    assert_eq!(Timeline::Short.label(), "1-3 Years");
    assert_eq!(Timeline::Medium.label(), "5 Years");
    assert_eq!(Timeline::Long.label(), "10+ Years");
}

#[test]
fn test_profile_wire_shape_is_snake_case() {
    let profile = NewUserProfile {
        primary_focus: Focus::Home,
        target_amount: 100_000.0,
        timeline: Timeline::Medium,
    }
    .into_profile(Utc::now());

    let json = serde_json::to_value(&profile).unwrap();
    // Keys shared with the UI must keep their stored names.
    assert!(json.get("user_id").is_some());
    assert_eq!(json["primary_focus"], "home");
    assert_eq!(json["target_amount"], 100_000.0);
    assert_eq!(json["timeline"], "medium");
    assert!(json.get("created_at").is_some());
    assert!(json.get("updated_at").is_some());
}

#[test]
fn test_profile_deserializes_from_stored_shape() {
    let raw = r#"{
        "user_id": "user_1700000000000",
        "primary_focus": "emergency",
        "target_amount": 50000,
        "timeline": "short",
        "created_at": "2024-01-15T10:30:00Z",
        "updated_at": "2024-01-15T10:30:00Z"
    }"#;

    let profile: UserProfile = serde_json::from_str(raw).unwrap();
    assert_eq!(profile.primary_focus, Focus::Emergency);
    assert_eq!(profile.target_amount, 50_000.0);
    assert_eq!(profile.timeline, Timeline::Short);
}

// ==================== Validation Tests ====================

#[test]
fn test_validate_accepts_bounds() {
    for amount in [10_000.0, 100_000.0, 1_000_000.0] {
        let input = NewUserProfile {
            primary_focus: Focus::Home,
            target_amount: amount,
            timeline: Timeline::Short,
        };
        assert!(input.validate().is_ok(), "amount {amount} should be valid");
    }
}

#[test]
fn test_validate_rejects_out_of_range() {
    for amount in [0.0, 9_999.0, 1_000_001.0, -10_000.0] {
        let input = NewUserProfile {
            primary_focus: Focus::Home,
            target_amount: amount,
            timeline: Timeline::Short,
        };
        assert!(input.validate().is_err(), "amount {amount} should fail");
    }
}

#[test]
fn test_validate_rejects_off_step_amount() {
    let input = NewUserProfile {
        primary_focus: Focus::Retirement,
        target_amount: 15_000.0,
        timeline: Timeline::Long,
    };
    assert!(input.validate().is_err());
}

#[test]
fn test_into_profile_sets_identity_and_timestamps() {
    let now = Utc::now();
    let profile = NewUserProfile {
        primary_focus: Focus::Retirement,
        target_amount: 200_000.0,
        timeline: Timeline::Long,
    }
    .into_profile(now);

    assert!(profile.user_id.starts_with("user_"));
    assert_eq!(profile.created_at, now);
    assert_eq!(profile.updated_at, now);
}
