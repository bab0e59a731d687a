//! Shutdown settings shared between configuration and the shutdown sequencer

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

/// Shared handle to the shutdown wait of one application.
///
/// Clones share the same value. Writes are last-writer-wins; a zero wait
/// means nothing was recorded.
#[derive(Clone, Debug, Default)]
pub struct ShutdownSettings {
    wait_millis: Arc<AtomicU64>,
}

impl ShutdownSettings {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the wait before stopping, in milliseconds
    pub fn set_wait_millis(&self, millis: u64) {
        self.wait_millis.store(millis, Ordering::Relaxed);
    }

    /// The recorded wait, if any
    pub fn wait(&self) -> Option<Duration> {
        match self.wait_millis.load(Ordering::Relaxed) {
            0 => None,
            millis => Some(Duration::from_millis(millis)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_has_no_wait() {
        let settings = ShutdownSettings::new();
        assert_eq!(settings.wait(), None);
    }

    #[test]
    fn test_clones_share_state() {
        let settings = ShutdownSettings::new();
        let sequencer_view = settings.clone();
        settings.set_wait_millis(1500);
        assert_eq!(sequencer_view.wait(), Some(Duration::from_millis(1500)));
    }

    #[test]
    fn test_last_writer_wins() {
        let settings = ShutdownSettings::new();
        settings.set_wait_millis(100);
        settings.set_wait_millis(200);
        assert_eq!(settings.wait(), Some(Duration::from_millis(200)));
    }

    #[test]
    fn test_independent_settings() {
        let a = ShutdownSettings::new();
        let b = ShutdownSettings::new();
        a.set_wait_millis(300);
        assert_eq!(b.wait(), None);
    }
}
