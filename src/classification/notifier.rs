use crate::classification::result::ClassificationResult;
use std::sync::mpsc::{channel, Receiver, Sender};
use std::sync::{Mutex, MutexGuard, PoisonError};

/// Fire-and-forget fan-out of finished results to registered listeners.
#[derive(Default)]
pub struct Notifier {
    listeners: Mutex<Vec<Sender<ClassificationResult>>>,
}

impl Notifier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn subscribe(&self) -> Receiver<ClassificationResult> {
        let (sender, receiver) = channel();
        self.listeners().push(sender);
        receiver
    }

    /// Listeners whose receiver was dropped are forgotten. Returns how many were reached.
    pub fn broadcast(&self, result: &ClassificationResult) -> usize {
        let mut listeners = self.listeners();
        listeners.retain(|listener| listener.send(result.clone()).is_ok());
        listeners.len()
    }

    fn listeners(&self) -> MutexGuard<'_, Vec<Sender<ClassificationResult>>> {
        self.listeners.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
