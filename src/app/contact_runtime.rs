//! Background delivery of contact messages.
//!
//! The relay call runs on its own task so the frame loop keeps drawing the
//! "sending" spinner; the outcome comes back over a channel.

use tokio::sync::mpsc::UnboundedSender;

use crate::core::{
    contact::ContactPayload,
    relay::{Relay, RelayError},
};

pub type ContactOutcome = Result<(), RelayError>;

/// Send `payload` through `relay` and report the outcome on `tx`.
pub fn spawn_submit(tx: UnboundedSender<ContactOutcome>, relay: Relay, payload: ContactPayload) {
    tokio::spawn(async move {
        tracing::debug!(simulated = relay.is_simulated(), "submitting contact message");
        let outcome = relay.submit(&payload).await;
        if tx.send(outcome).is_err() {
            tracing::debug!("contact outcome dropped, app is shutting down");
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    fn payload() -> ContactPayload {
        ContactPayload {
            name: "Ada".into(),
            email: "ada@example.com".into(),
            message: "Hello from a test".into(),
        }
    }

    #[tokio::test]
    async fn outcome_arrives_on_channel() {
        let (tx, mut rx) = tokio::sync::mpsc::unbounded_channel();
        let relay = Relay::Simulated {
            delay: Duration::from_millis(5),
        };
        spawn_submit(tx, relay, payload());
        let outcome = rx.recv().await.expect("outcome sent");
        assert!(outcome.is_ok());
    }
}
