use moodcast::api;
use moodcast::config::TrackerConfig;
use moodcast::journal::EntryKind;
use moodcast::state::view::Tab;
use moodcast::AppState;

fn state() -> AppState {
    AppState::with_config(TrackerConfig::default())
}

#[test]
fn test_fresh_state_lands_on_home() {
    let state = state();
    let view = api::view_state(&state);
    assert_eq!(view.active_tab, Tab::Home);
    assert!(!view.modal_open);
    assert!(view.draft.text.is_empty());
    assert_eq!(view.draft.mood.get(), 5, "Draft mood should default to 5");
    assert!(!view.is_pending());
}

#[test]
fn test_tab_switching_is_exclusive() {
    let state = state();
    api::select_tab(&state, Tab::Trends);
    assert_eq!(api::view_state(&state).active_tab, Tab::Trends);
    api::select_tab(&state, Tab::Timeline);
    assert_eq!(api::view_state(&state).active_tab, Tab::Timeline);
}

#[test]
fn test_reopening_the_modal_shows_a_clean_draft() {
    let state = state();
    api::open_entry_modal(&state);
    api::set_draft_text(&state, "grumbled at the alarm".to_string());
    api::set_draft_mood(&state, 2);
    api::close_entry_modal(&state);

    api::open_entry_modal(&state);
    let view = api::view_state(&state);
    assert!(view.modal_open);
    assert_eq!(view.draft.text, "");
    assert_eq!(view.draft.mood.get(), 5);
}

#[test]
fn test_draft_mood_clamps_out_of_range_input() {
    let state = state();
    api::set_draft_mood(&state, 0);
    assert_eq!(api::view_state(&state).draft.mood.get(), 1);
    api::set_draft_mood(&state, 42);
    assert_eq!(api::view_state(&state).draft.mood.get(), 10);
}

#[test]
fn test_cycle_day_clamps_onto_the_chart() {
    let state = state();
    api::set_cycle_day(&state, 0);
    assert_eq!(state.cycle_day(), 1);
    api::set_cycle_day(&state, 99);
    assert_eq!(state.cycle_day(), 30);
}

#[test]
fn test_seeded_journal_reads_newest_first() {
    let state = state();
    let entries = api::entries(&state);
    assert_eq!(entries.len(), 2, "App ships with two sample entries");
    assert_eq!(entries[0].kind, EntryKind::Chat);
    assert_eq!(entries[0].mood.get(), 3);
    assert_eq!(entries[1].kind, EntryKind::Manual);
    assert_eq!(entries[1].mood.get(), 4);
    assert!(entries[0].date > entries[1].date);
}

#[test]
fn test_dashboard_follows_the_phase() {
    let state = state();
    let summary = api::dashboard(&state);
    assert_eq!(summary.cycle_day, 26);
    assert!(summary.outlook.high_variance);
    assert_eq!(summary.outlook.badge, "LOW");
    assert_eq!(summary.outlook.alert_level, "4 (Alert)");

    api::set_cycle_day(&state, 12);
    let summary = api::dashboard(&state);
    assert!(!summary.outlook.high_variance);
    assert_eq!(summary.outlook.badge, "HIGH");
    assert_eq!(summary.outlook.alert_level, "1 (Safe)");
}

#[test]
fn test_journal_stats_cover_the_seeds() {
    let state = state();
    let stats = api::journal_stats(&state);
    assert_eq!(stats.entry_count, 2);
    assert_eq!(stats.manual_count, 1);
    assert_eq!(stats.chat_count, 1);
    assert!((stats.average_mood - 3.5).abs() < 1e-6);
    assert_eq!(stats.recent_moods, vec![4, 3]);
    assert_eq!(stats.tag_counts.get("period"), Some(&1));
}

#[test]
fn test_key_factors_are_ranked() {
    let factors = api::key_factors();
    assert_eq!(factors.len(), 2);
    assert!(factors[0].weight > factors[1].weight);
    assert_eq!(factors[0].factor, "Rainy days");
}

#[test]
fn test_metrics_count_state_transitions() {
    let state = state();
    let before = api::metrics(&state).state_transitions;
    api::select_tab(&state, Tab::Trends);
    api::open_entry_modal(&state);
    api::set_draft_mood(&state, 7);
    let after = api::metrics(&state).state_transitions;
    assert_eq!(after - before, 3);
}
