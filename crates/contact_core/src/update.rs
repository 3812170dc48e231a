use crate::{AppState, Effect, Msg, ERR_FIELDS_REQUIRED, ERR_INVALID_EMAIL, ERR_SUBMIT_FAILED};

/// Pure update function: applies a message to state and returns any effects.
pub fn update(mut state: AppState, msg: Msg) -> (AppState, Vec<Effect>) {
    let effects = match msg {
        Msg::Started => vec![Effect::RefreshContacts],
        Msg::NameChanged(value) => {
            state.set_name(value);
            Vec::new()
        }
        Msg::EmailChanged(value) => {
            state.set_email(value);
            Vec::new()
        }
        Msg::SubmitClicked => {
            // The submitting flag blocks re-entrant adds only; deletes are
            // not gated by it.
            if state.form().submitting {
                return (state, Vec::new());
            }

            let name = state.form().name.clone();
            let email = state.form().email.clone();

            if name.trim().is_empty() || email.trim().is_empty() {
                state.set_error(ERR_FIELDS_REQUIRED);
                Vec::new()
            } else if !email.contains('@') {
                state.set_error(ERR_INVALID_EMAIL);
                Vec::new()
            } else {
                state.begin_submission();
                // Untrimmed on purpose: trimming is only an emptiness check,
                // the server receives the values as typed.
                vec![Effect::CreateContact { name, email }]
            }
        }
        Msg::SubmitCompleted { result } => match result {
            Ok(()) => {
                state.finish_submission_ok();
                vec![Effect::RefreshContacts]
            }
            Err(_) => {
                state.finish_submission_err(ERR_SUBMIT_FAILED);
                Vec::new()
            }
        },
        Msg::DeleteClicked { email } => vec![Effect::DeleteContact { email }],
        Msg::DeleteCompleted { result, .. } => match result {
            Ok(()) => vec![Effect::RefreshContacts],
            // Delete failures are a non-blocking background concern; the
            // glue layer has already logged them.
            Err(_) => Vec::new(),
        },
        Msg::RefreshCompleted { result } => {
            match result {
                Ok(snapshot) => state.replace_contacts(snapshot),
                // Failed refresh keeps the stale snapshot rather than
                // emptying the list.
                Err(_) => {}
            }
            Vec::new()
        }
        Msg::NoOp => Vec::new(),
    };

    (state, effects)
}
