use std::sync::{mpsc, Arc};
use std::thread;

use crate::api::{ClientSettings, ContactsApi, ReqwestContactsApi};
use crate::{ApiEvent, Contact};

enum ApiCommand {
    Refresh,
    Create { contact: Contact },
    Delete { email: String },
}

/// Executes API commands on a background Tokio runtime.
///
/// Commands run independently: two in-flight refreshes are not coalesced and
/// the later-resolving one wins. Each command produces exactly one
/// `ApiEvent`, success or failure.
pub struct ClientHandle {
    cmd_tx: mpsc::Sender<ApiCommand>,
    event_rx: mpsc::Receiver<ApiEvent>,
}

impl ClientHandle {
    pub fn new(settings: ClientSettings) -> Result<Self, crate::ApiError> {
        let api = Arc::new(ReqwestContactsApi::new(settings)?);
        let (cmd_tx, cmd_rx) = mpsc::channel();
        let (event_tx, event_rx) = mpsc::channel();

        thread::spawn(move || {
            let runtime = tokio::runtime::Runtime::new().expect("tokio runtime");
            while let Ok(command) = cmd_rx.recv() {
                let api = api.clone();
                let event_tx = event_tx.clone();
                runtime.spawn(async move {
                    handle_command(api.as_ref(), command, event_tx).await;
                });
            }
        });

        Ok(Self { cmd_tx, event_rx })
    }

    pub fn refresh(&self) {
        let _ = self.cmd_tx.send(ApiCommand::Refresh);
    }

    pub fn create(&self, contact: Contact) {
        let _ = self.cmd_tx.send(ApiCommand::Create { contact });
    }

    pub fn delete(&self, email: impl Into<String>) {
        let _ = self.cmd_tx.send(ApiCommand::Delete {
            email: email.into(),
        });
    }

    pub fn try_recv(&self) -> Option<ApiEvent> {
        self.event_rx.try_recv().ok()
    }
}

async fn handle_command(
    api: &dyn ContactsApi,
    command: ApiCommand,
    event_tx: mpsc::Sender<ApiEvent>,
) {
    let event = match command {
        ApiCommand::Refresh => ApiEvent::RefreshCompleted {
            result: api.list(None).await,
        },
        ApiCommand::Create { contact } => ApiEvent::CreateCompleted {
            result: api.create(&contact).await,
        },
        ApiCommand::Delete { email } => {
            let result = api.delete(&email).await;
            ApiEvent::DeleteCompleted { email, result }
        }
    };
    let _ = event_tx.send(event);
}
