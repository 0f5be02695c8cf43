use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// One-shot "capture the next frame" flag, settable from any thread.
#[derive(Clone, Default)]
pub struct SnapshotRequest {
    pending: Arc<AtomicBool>,
}

impl SnapshotRequest {
    pub fn request(&self) {
        self.pending.store(true, Ordering::Release);
    }

    /// Clears the flag, returning whether it was set.
    pub fn take(&self) -> bool {
        self.pending.swap(false, Ordering::AcqRel)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_is_consumed_once() {
        let req = SnapshotRequest::default();
        let writer = req.clone();
        assert!(!req.take());

        writer.request();
        writer.request();
        assert!(req.take());
        assert!(!req.take());
    }
}
