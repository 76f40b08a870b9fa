use std::sync::Arc;

use parking_lot::Mutex;
use web_time::{Duration, Instant};

/// Monotonic time source used by the press debounce.
pub trait Clock: Send + Sync + 'static {
    fn now(&self) -> Instant;
}

pub struct SystemClock;
impl Clock for SystemClock {
    fn now(&self) -> Instant {
        Instant::now()
    }
}

/// A test clock you can drive deterministically.
///
/// Clones share the same instant, so a test can keep one handle and hand
/// another to the synchronizer.
#[derive(Clone)]
pub struct TestClock {
    t: Arc<Mutex<Instant>>,
}

impl Default for TestClock {
    fn default() -> Self {
        Self::new(Instant::now())
    }
}

impl TestClock {
    pub fn new(t: Instant) -> Self {
        Self {
            t: Arc::new(Mutex::new(t)),
        }
    }

    pub fn set(&self, t: Instant) {
        *self.t.lock() = t;
    }

    pub fn advance(&self, by: Duration) {
        let mut t = self.t.lock();
        *t += by;
    }
}

impl Clock for TestClock {
    fn now(&self) -> Instant {
        *self.t.lock()
    }
}
