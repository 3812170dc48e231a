use std::sync::Once;

use contact_core::{
    update, AppState, Effect, Msg, RequestFailure, ERR_FIELDS_REQUIRED, ERR_INVALID_EMAIL,
    ERR_SUBMIT_FAILED,
};

fn init_logging() {
    static INIT: Once = Once::new();
    INIT.call_once(client_logging::initialize_for_tests);
}

fn fill_form(state: AppState, name: &str, email: &str) -> AppState {
    let (state, _) = update(state, Msg::NameChanged(name.to_string()));
    let (state, _) = update(state, Msg::EmailChanged(email.to_string()));
    state
}

fn failure() -> RequestFailure {
    RequestFailure {
        message: "connection refused".to_string(),
    }
}

#[test]
fn blank_fields_are_rejected_without_effects() {
    init_logging();
    for (name, email) in [("", ""), ("Alice", ""), ("", "alice@example.com"), ("   ", "\t")] {
        let state = fill_form(AppState::new(), name, email);
        let (next, effects) = update(state, Msg::SubmitClicked);

        assert_eq!(next.view().error_message, ERR_FIELDS_REQUIRED);
        assert!(!next.view().submitting);
        assert!(effects.is_empty(), "no create for ({name:?}, {email:?})");
    }
}

#[test]
fn email_without_at_sign_is_rejected_without_effects() {
    init_logging();
    let state = fill_form(AppState::new(), "Alice", "alice.example.com");
    let (next, effects) = update(state, Msg::SubmitClicked);

    assert_eq!(next.view().error_message, ERR_INVALID_EMAIL);
    assert!(!next.view().submitting);
    assert!(effects.is_empty());
}

#[test]
fn valid_submission_emits_create_and_sets_submitting() {
    init_logging();
    let state = fill_form(AppState::new(), "Alice", "alice@example.com");
    let (next, effects) = update(state, Msg::SubmitClicked);

    let view = next.view();
    assert!(view.submitting);
    assert_eq!(view.error_message, "");
    assert_eq!(
        effects,
        vec![Effect::CreateContact {
            name: "Alice".to_string(),
            email: "alice@example.com".to_string(),
        }]
    );
}

#[test]
fn submission_sends_values_untrimmed() {
    init_logging();
    // Trimming is only used for the emptiness check; the create effect
    // carries the values exactly as typed.
    let state = fill_form(AppState::new(), " Alice ", " alice@example.com ");
    let (_next, effects) = update(state, Msg::SubmitClicked);

    assert_eq!(
        effects,
        vec![Effect::CreateContact {
            name: " Alice ".to_string(),
            email: " alice@example.com ".to_string(),
        }]
    );
}

#[test]
fn successful_create_clears_form_and_refreshes_once() {
    init_logging();
    let state = fill_form(AppState::new(), "Alice", "alice@example.com");
    let (state, _) = update(state, Msg::SubmitClicked);
    let (next, effects) = update(state, Msg::SubmitCompleted { result: Ok(()) });

    let view = next.view();
    assert_eq!(view.name_input, "");
    assert_eq!(view.email_input, "");
    assert_eq!(view.error_message, "");
    assert!(!view.submitting);
    assert_eq!(effects, vec![Effect::RefreshContacts]);
}

#[test]
fn failed_create_preserves_fields_and_sets_error() {
    init_logging();
    let state = fill_form(AppState::new(), "Alice", "alice@example.com");
    let (state, _) = update(state, Msg::SubmitClicked);
    let (next, effects) = update(
        state,
        Msg::SubmitCompleted {
            result: Err(failure()),
        },
    );

    let view = next.view();
    assert_eq!(view.name_input, "Alice");
    assert_eq!(view.email_input, "alice@example.com");
    assert_eq!(view.error_message, ERR_SUBMIT_FAILED);
    assert!(!view.submitting);
    assert!(effects.is_empty());
}

#[test]
fn submitting_is_scoped_to_the_in_flight_request() {
    init_logging();
    let state = fill_form(AppState::new(), "Alice", "alice@example.com");
    assert!(!state.view().submitting);

    let (state, _) = update(state, Msg::SubmitClicked);
    assert!(state.view().submitting);

    // Success path releases the flag.
    let (resolved, _) = update(state.clone(), Msg::SubmitCompleted { result: Ok(()) });
    assert!(!resolved.view().submitting);

    // Failure path releases it too.
    let (resolved, _) = update(
        state,
        Msg::SubmitCompleted {
            result: Err(failure()),
        },
    );
    assert!(!resolved.view().submitting);
}

#[test]
fn resubmit_while_in_flight_is_ignored() {
    init_logging();
    let state = fill_form(AppState::new(), "Alice", "alice@example.com");
    let (state, _) = update(state, Msg::SubmitClicked);

    let (next, effects) = update(state.clone(), Msg::SubmitClicked);

    assert_eq!(next, state);
    assert!(effects.is_empty());
}

#[test]
fn next_attempt_overwrites_previous_error() {
    init_logging();
    let state = fill_form(AppState::new(), "", "");
    let (state, _) = update(state, Msg::SubmitClicked);
    assert_eq!(state.view().error_message, ERR_FIELDS_REQUIRED);

    let state = fill_form(state, "Alice", "no-at-sign");
    let (state, _) = update(state, Msg::SubmitClicked);
    assert_eq!(state.view().error_message, ERR_INVALID_EMAIL);

    let state = fill_form(state, "Alice", "alice@example.com");
    let (state, _) = update(state, Msg::SubmitClicked);
    assert_eq!(state.view().error_message, "");
}
