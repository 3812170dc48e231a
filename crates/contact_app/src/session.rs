use std::time::{Duration, Instant};

use client_logging::{client_info, client_warn};
use contact_client::{ApiError, ApiEvent, ClientHandle, ClientSettings};
use contact_core::{update, AppState, Contact, ContactBookView, Effect, Msg, RequestFailure};

/// Owns the core state machine and the client runtime, bridging effects out
/// and completion events back in.
///
/// The session is single-threaded and cooperative: callers dispatch messages
/// and periodically `poll` for resolved remote calls. Remote calls never
/// block a dispatch.
pub struct ContactSession {
    state: AppState,
    client: ClientHandle,
}

impl ContactSession {
    pub fn new(settings: ClientSettings) -> Result<Self, ApiError> {
        let client = ClientHandle::new(settings)?;
        Ok(Self {
            state: AppState::new(),
            client,
        })
    }

    /// Kicks off the initial list fetch, mirroring the original page mount.
    pub fn start(&mut self) {
        self.dispatch(Msg::Started);
    }

    pub fn dispatch(&mut self, msg: Msg) {
        let state = std::mem::take(&mut self.state);
        let (state, effects) = update(state, msg);
        self.state = state;
        self.run_effects(effects);
    }

    /// Applies any completed remote calls. Returns true if at least one
    /// message was dispatched.
    pub fn poll(&mut self) -> bool {
        let mut applied = false;
        while let Some(event) = self.client.try_recv() {
            let msg = map_event(event);
            self.dispatch(msg);
            applied = true;
        }
        applied
    }

    /// Polls until no event has arrived for `quiet`, or until `deadline`
    /// elapses. Used by drivers without their own event loop.
    pub fn pump(&mut self, deadline: Duration, quiet: Duration) {
        let started = Instant::now();
        let mut last_event = Instant::now();
        while started.elapsed() < deadline {
            if self.poll() {
                last_event = Instant::now();
            } else if last_event.elapsed() >= quiet {
                return;
            }
            std::thread::sleep(Duration::from_millis(10));
        }
    }

    pub fn view(&self) -> ContactBookView {
        self.state.view()
    }

    /// See [`AppState::consume_dirty`].
    pub fn consume_dirty(&mut self) -> bool {
        self.state.consume_dirty()
    }

    fn run_effects(&self, effects: Vec<Effect>) {
        for effect in effects {
            match effect {
                Effect::RefreshContacts => {
                    client_info!("RefreshContacts");
                    self.client.refresh();
                }
                Effect::CreateContact { name, email } => {
                    client_info!("CreateContact email={}", email);
                    self.client.create(contact_client::Contact { name, email });
                }
                Effect::DeleteContact { email } => {
                    client_info!("DeleteContact email={}", email);
                    self.client.delete(email);
                }
            }
        }
    }
}

fn map_event(event: ApiEvent) -> Msg {
    match event {
        ApiEvent::RefreshCompleted { result } => Msg::RefreshCompleted {
            result: result
                .map(|snapshot| snapshot.into_iter().map(map_contact).collect())
                .map_err(|err| {
                    // Fetch errors are non-fatal; the list just doesn't update.
                    client_warn!("Fetch error: {}", err);
                    map_failure(err)
                }),
        },
        ApiEvent::CreateCompleted { result } => Msg::SubmitCompleted {
            result: result.map_err(|err| {
                client_warn!("Add error: {}", err);
                map_failure(err)
            }),
        },
        ApiEvent::DeleteCompleted { email, result } => Msg::DeleteCompleted {
            email,
            result: result.map_err(|err| {
                // No user-visible surface for delete failures; log only.
                client_warn!("Delete error: {}", err);
                map_failure(err)
            }),
        },
    }
}

fn map_contact(contact: contact_client::Contact) -> Contact {
    Contact {
        name: contact.name,
        email: contact.email,
    }
}

fn map_failure(err: ApiError) -> RequestFailure {
    RequestFailure {
        message: err.to_string(),
    }
}
