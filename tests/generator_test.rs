use moodcast::api;
use moodcast::config::TrackerConfig;
use moodcast::cycle::curve;
use moodcast::cycle::generator::{generate, generate_with};
use moodcast::AppState;
use rand::rngs::StdRng;
use rand::SeedableRng;

#[test]
fn test_series_covers_every_charted_day() {
    let points = generate(30);
    assert_eq!(points.len(), 30, "Series should span the whole chart");
    for (i, point) in points.iter().enumerate() {
        assert_eq!(point.day, i as u32 + 1, "Days should run 1..=30 in order");
    }
}

#[test]
fn test_every_value_stays_on_the_mood_scale() {
    let points = generate(30);
    for point in &points {
        assert!(
            (1.0..=10.0).contains(&point.predicted),
            "Predicted {} out of range on day {}",
            point.predicted,
            point.day
        );
        if let Some(actual) = point.actual {
            assert!(
                (1.0..=10.0).contains(&actual),
                "Actual {} out of range on day {}",
                actual,
                point.day
            );
        }
    }
}

#[test]
fn test_values_carry_one_decimal() {
    let points = generate(30);
    for point in &points {
        let scaled = point.predicted * 10.0;
        assert!(
            (scaled - scaled.round()).abs() < 1e-3,
            "Predicted {} on day {} is not one-decimal",
            point.predicted,
            point.day
        );
    }
}

#[test]
fn test_actual_samples_exist_only_before_day_fifteen() {
    let points = generate(30);
    for point in &points {
        assert_eq!(
            point.actual.is_some(),
            point.day < 15,
            "Sample presence wrong on day {}",
            point.day
        );
    }
}

#[test]
fn test_seeded_generation_is_reproducible() {
    let mut a = StdRng::seed_from_u64(1234);
    let mut b = StdRng::seed_from_u64(1234);
    let first = generate_with(30, &mut a);
    let second = generate_with(30, &mut b);
    assert_eq!(first, second, "Same seed should give the same series");

    let mut c = StdRng::seed_from_u64(5678);
    let third = generate_with(30, &mut c);
    assert_ne!(first, third, "Different seeds should perturb differently");
}

#[test]
fn test_dip_shows_up_in_the_late_window() {
    // The late-cycle drop puts day 25 well below day 24
    assert!((curve::predicted_mood(24) - 3.0).abs() < 1e-6);
    assert!((curve::predicted_mood(25) - 1.1).abs() < 1e-6);
    assert!((curve::predicted_mood(11) - 9.0).abs() < 1e-6);
}

#[test]
fn test_series_payload_carries_today_and_reference() {
    let state = AppState::with_config(TrackerConfig::default());
    let series = api::cycle_series(&state);
    assert_eq!(series.points.len(), 30);
    assert_eq!(series.today, 26, "Default cycle day should be 26");
    assert_eq!(series.reference_cycle_days, 28);
    assert!(!series.caption.is_empty());

    api::set_cycle_day(&state, 8);
    assert_eq!(api::cycle_series(&state).today, 8);
}
