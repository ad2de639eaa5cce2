use serde::Serialize;
use tokio::sync::mpsc;
use tracing::warn;

/// Transient, non-blocking error notification for the host UI
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Toast {
    pub message: String,
}

impl Toast {
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

pub trait Notifier: Send + Sync {
    fn notify(&self, toast: Toast);
}

/// Forwards toasts to whoever owns the receiving end (usually the UI loop)
#[derive(Debug, Clone)]
pub struct ToastChannel {
    tx: mpsc::UnboundedSender<Toast>,
}

impl ToastChannel {
    pub fn new() -> (Self, mpsc::UnboundedReceiver<Toast>) {
        let (tx, rx) = mpsc::unbounded_channel();
        (Self { tx }, rx)
    }
}

impl Notifier for ToastChannel {
    fn notify(&self, toast: Toast) {
        if self.tx.send(toast).is_err() {
            warn!("Toast dropped, UI receiver is gone");
        }
    }
}
