//! Notifier forwarding active-set changes over a tokio channel.

use tokio::sync::mpsc;

use crate::core::{Case, Notifier};
use crate::infra::notifier::Notification;
use crate::util::clock::now_ms;
use crate::util::serde::CaseId;

/// Sends every change to an unbounded channel, typically read by a UI task.
#[derive(Debug, Clone)]
pub struct ChannelNotifier {
    tx: mpsc::UnboundedSender<Notification>,
}

impl ChannelNotifier {
    /// Create a notifier and the receiving end of its channel.
    pub fn channel() -> (Self, mpsc::UnboundedReceiver<Notification>) {
        let (tx, rx) = mpsc::unbounded_channel();
        (Self { tx }, rx)
    }
}

impl Notifier for ChannelNotifier {
    fn on_active_set_changed(&mut self, cases: &[Case], selected: Option<CaseId>) {
        let change = Notification {
            cases: cases.to_vec(),
            selected,
            created_at_ms: now_ms(),
        };
        if self.tx.send(change).is_err() {
            tracing::debug!("notification receiver dropped");
        }
    }
}
