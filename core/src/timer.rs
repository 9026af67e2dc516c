// SPDX-FileCopyrightText: 2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::sync::mpsc::{self, RecvTimeoutError};
use std::thread;
use std::time::{Duration, Instant};

/// How long a press must be held before it counts as a long press.
pub const LONG_PRESS_DELAY: Duration = Duration::from_millis(500);

/// A scheduled action that can still be called off.
///
/// Backs the long-press recognizer: the action is scheduled on press
/// start and canceled when the press ends early. It fires exactly once
/// unless [`cancel`](Deferred::cancel) is called first; merely dropping
/// the handle does not cancel it.
#[derive(Debug)]
pub struct Deferred {
    cancel: mpsc::Sender<()>,
}

impl Deferred {
    /// Runs `action` after `delay` unless canceled in the meantime.
    pub fn schedule<F>(delay: Duration, action: F) -> Self
    where
        F: FnOnce() + Send + 'static,
    {
        let (cancel, canceled) = mpsc::channel();
        let deadline = Instant::now() + delay;
        thread::spawn(move || match canceled.recv_timeout(delay) {
            Ok(()) => {}
            Err(RecvTimeoutError::Timeout) => action(),
            Err(RecvTimeoutError::Disconnected) => {
                // Handle dropped without cancel: wait out the rest of the
                // delay, then fire as scheduled.
                thread::sleep(deadline.saturating_duration_since(Instant::now()));
                action();
            }
        });
        Self { cancel }
    }

    /// Calls the scheduled action off. Canceling after the action already
    /// ran has no effect.
    pub fn cancel(self) {
        let _ = self.cancel.send(());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};

    fn counter() -> (Arc<AtomicUsize>, impl FnOnce() + Send + 'static) {
        let fired = Arc::new(AtomicUsize::new(0));
        let handle = fired.clone();
        (fired, move || {
            handle.fetch_add(1, Ordering::SeqCst);
        })
    }

    #[test]
    fn fires_exactly_once_after_the_delay() {
        let (fired, action) = counter();
        let _press = Deferred::schedule(Duration::from_millis(20), action);

        assert_eq!(fired.load(Ordering::SeqCst), 0, "fired before the delay");
        thread::sleep(Duration::from_millis(120));
        assert_eq!(fired.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn canceled_action_never_fires() {
        let (fired, action) = counter();
        let press = Deferred::schedule(Duration::from_millis(50), action);
        press.cancel();

        thread::sleep(Duration::from_millis(150));
        assert_eq!(fired.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn dropping_the_handle_does_not_cancel() {
        let (fired, action) = counter();
        drop(Deferred::schedule(Duration::from_millis(20), action));

        thread::sleep(Duration::from_millis(120));
        assert_eq!(fired.load(Ordering::SeqCst), 1);
    }
}
