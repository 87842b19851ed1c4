use log::{debug, info};
use tokio::sync::mpsc;

use crate::{SessionEvent, SyncMessage, SyncSession};

/// Runs a [`SyncSession`] on a tokio task.
///
/// Each message received is processed to completion before the next one is
/// taken off the channel.
pub struct SyncDriver {
    session: SyncSession,
    inbound: mpsc::Receiver<SyncMessage>,
    outbound: mpsc::UnboundedSender<SessionEvent>,
}

impl SyncDriver {
    pub fn new(
        session: SyncSession,
        inbound: mpsc::Receiver<SyncMessage>,
        outbound: mpsc::UnboundedSender<SessionEvent>,
    ) -> Self {
        Self {
            session,
            inbound,
            outbound,
        }
    }

    /// Drives the session until either channel closes, then hands it back
    pub async fn run(mut self) -> SyncSession {
        while let Some(message) = self.inbound.recv().await {
            self.session.receive(message);
            self.session.process_messages();

            for event in self.session.take_events() {
                if self.outbound.send(event).is_err() {
                    info!("Event receiver dropped, stopping sync driver");
                    return self.session;
                }
            }
        }

        debug!("Inbound channel closed, stopping sync driver");
        self.session
    }
}
