use std::time::{Duration, Instant};

/// Logs how long a scope took when dropped.
///
/// ```
/// use jenkins_brute::timing::ScopeTimer;
///
/// {
///     let _timer = ScopeTimer::new("Load words");
///     // ... work ...
/// } // "Load words finished in 0ms"
/// ```
#[must_use = "the timer reports when dropped; bind it to a named variable"]
pub struct ScopeTimer {
    scope: &'static str,
    started: Instant,
}

impl ScopeTimer {
    pub fn new(scope: &'static str) -> Self {
        Self { scope, started: Instant::now() }
    }

    pub fn elapsed(&self) -> Duration {
        self.started.elapsed()
    }
}

impl Drop for ScopeTimer {
    fn drop(&mut self) {
        tracing::info!("{} finished in {}ms", self.scope, self.started.elapsed().as_millis());
    }
}

/// Renders the `[<ms>ms]` prefix used on match lines.
#[inline]
pub fn elapsed_prefix(elapsed: Duration) -> String {
    format!("[{}ms]", elapsed.as_millis())
}
