// src/progress.rs
/// Progress reporting for remote loads and writes.
/// Frontends (GUI/CLI) implement this to surface status to users.
pub trait Progress {
    /// Called at the start with the number of fetches planned.
    fn begin(&mut self, _total: usize) {}

    /// Free-form status line for human eyes.
    fn log(&mut self, _msg: &str) {}

    /// One fetch finished (e.g. "tasks", "entries").
    fn item_done(&mut self, _what: &str) {}

    /// Called at the end, successful or not.
    fn finish(&mut self) {}
}

/// A no-op progress sink.
pub struct NullProgress;
impl Progress for NullProgress {}

/// Prints to stderr; the CLI uses this.
pub struct StderrProgress {
    done: usize,
    total: usize,
}

impl StderrProgress {
    pub fn new() -> Self {
        Self { done: 0, total: 0 }
    }
}

impl Default for StderrProgress {
    fn default() -> Self { Self::new() }
}

impl Progress for StderrProgress {
    fn begin(&mut self, total: usize) {
        self.total = total;
    }
    fn log(&mut self, msg: &str) {
        eprintln!("{msg}");
    }
    fn item_done(&mut self, what: &str) {
        self.done += 1;
        eprintln!("Loaded {} ({}/{})", what, self.done, self.total);
    }
}
