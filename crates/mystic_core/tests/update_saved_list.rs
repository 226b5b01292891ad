use std::sync::Once;

use mystic_core::{update, AppState, CallKind, Effect, Msg, SavedPrediction};

fn init_logging() {
    static INIT: Once = Once::new();
    INIT.call_once(mystic_logging::initialize_for_tests);
}

fn saved_entry(id: &str) -> SavedPrediction {
    SavedPrediction {
        id: id.to_string(),
        sign: "Leo".to_string(),
        category: "career".to_string(),
        text: "Great day".to_string(),
        saved_at: Some("2024-01-01 10:00".to_string()),
    }
}

#[test]
fn opening_saved_view_fetches_the_list() {
    init_logging();
    let state = AppState::new();

    let (state, effects) = update(state, Msg::SavedViewOpened);

    assert_eq!(effects, vec![Effect::FetchSavedList]);
    assert_eq!(state.view().in_flight, Some(CallKind::FetchSavedList));
}

#[test]
fn fetched_list_replaces_the_cached_one() {
    init_logging();
    let state = AppState::new();
    let (state, _) = update(state, Msg::SavedViewOpened);

    let (state, _) = update(
        state,
        Msg::SavedListFetched(Ok(vec![saved_entry("1"), saved_entry("2")])),
    );
    let view = state.view();

    assert_eq!(view.saved.len(), 2);
    assert!(!view.saved_stale);
    assert_eq!(view.in_flight, None);
}

#[test]
fn empty_list_is_a_valid_state_not_an_error() {
    init_logging();
    let state = AppState::new();
    let (state, _) = update(state, Msg::SavedViewOpened);

    let (state, _) = update(state, Msg::SavedListFetched(Ok(Vec::new())));
    let view = state.view();

    assert!(view.saved.is_empty());
    assert_eq!(view.error, None);
}

#[test]
fn failed_list_fetch_keeps_previous_entries() {
    init_logging();
    let state = AppState::new();
    let (state, _) = update(state, Msg::SavedViewOpened);
    let (state, _) = update(state, Msg::SavedListFetched(Ok(vec![saved_entry("1")])));

    let (state, _) = update(state, Msg::SavedViewOpened);
    let (state, _) = update(
        state,
        Msg::SavedListFetched(Err("service error (status 500): down".to_string())),
    );
    let view = state.view();

    assert_eq!(view.saved, vec![saved_entry("1")]);
    assert_eq!(view.error, Some("service error (status 500): down".to_string()));
}

#[test]
fn delete_success_refetches_instead_of_removing_locally() {
    init_logging();
    let state = AppState::new();
    let (state, _) = update(state, Msg::SavedViewOpened);
    let (state, _) = update(
        state,
        Msg::SavedListFetched(Ok(vec![saved_entry("1"), saved_entry("2")])),
    );

    let (state, effects) = update(
        state,
        Msg::DeleteClicked {
            id: "1".to_string(),
        },
    );
    assert_eq!(
        effects,
        vec![Effect::DeleteSaved {
            id: "1".to_string(),
        }]
    );

    let (state, effects) = update(state, Msg::DeleteCompleted(Ok(())));
    let view = state.view();

    assert_eq!(effects, vec![Effect::FetchSavedList]);
    // The cached list is untouched until the re-fetch lands.
    assert_eq!(view.saved.len(), 2);
    assert!(view.saved_stale);
}

#[test]
fn delete_failure_leaves_list_unchanged_and_surfaces_error() {
    init_logging();
    let state = AppState::new();
    let (state, _) = update(state, Msg::SavedViewOpened);
    let (state, _) = update(state, Msg::SavedListFetched(Ok(vec![saved_entry("42")])));

    let (state, _) = update(
        state,
        Msg::DeleteClicked {
            id: "42".to_string(),
        },
    );
    let (state, effects) = update(
        state,
        Msg::DeleteCompleted(Err("service error (status 404): not found".to_string())),
    );
    let view = state.view();

    assert!(effects.is_empty());
    assert_eq!(view.saved, vec![saved_entry("42")]);
    assert_eq!(
        view.error,
        Some("service error (status 404): not found".to_string())
    );
}
