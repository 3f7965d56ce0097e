//! Progress reporting for streaming downloads.
//!
//! The downloader pushes every chunk it writes through a [`ByteCounter`],
//! which keeps a running total and notifies a [`ProgressObserver`]. The
//! observer is a pure side channel: it never gates or delays the copy,
//! and functional behavior does not depend on which observer is plugged
//! in. The CLI uses [`ConsoleProgress`]; tests capture the events
//! instead of parsing terminal output.

use std::io::{self, Write};

use indicatif::HumanBytes;

/// Width of the status line to blank out when rewriting it in place.
const STATUS_LINE_WIDTH: usize = 35;

/// Consumer of byte-count updates during a streaming copy.
pub trait ProgressObserver {
    /// Called synchronously after every chunk with the running total.
    fn on_progress(&mut self, total_bytes: u64);

    /// Called once when the copy has finished.
    fn on_complete(&mut self, total_bytes: u64);
}

impl<O: ProgressObserver + ?Sized> ProgressObserver for &mut O {
    fn on_progress(&mut self, total_bytes: u64) {
        (**self).on_progress(total_bytes);
    }

    fn on_complete(&mut self, total_bytes: u64) {
        (**self).on_complete(total_bytes);
    }
}

/// Counts the bytes flowing through one download and reports each
/// increment to the observer.
///
/// The total is monotonically non-decreasing and owned by exactly one
/// in-flight download; nothing is persisted once the counter is
/// consumed by [`finish`](ByteCounter::finish).
#[derive(Debug)]
pub struct ByteCounter<O> {
    total: u64,
    observer: O,
}

impl<O: ProgressObserver> ByteCounter<O> {
    pub fn new(observer: O) -> Self {
        Self { total: 0, observer }
    }

    /// Record one written chunk and notify the observer.
    pub fn record(&mut self, len: usize) {
        self.total += len as u64;
        self.observer.on_progress(self.total);
    }

    pub fn total(&self) -> u64 {
        self.total
    }

    /// Emit the completion notice and return the final total.
    pub fn finish(mut self) -> u64 {
        self.observer.on_complete(self.total);
        self.total
    }
}

/// Observer that rewrites the current terminal line with a humanized
/// running total, e.g. `Downloading... 1.2 MiB complete`.
///
/// Output goes to stderr so it never mixes with lookup results on
/// stdout. Write errors are ignored; progress is cosmetic.
#[derive(Debug, Default)]
pub struct ConsoleProgress;

impl ProgressObserver for ConsoleProgress {
    fn on_progress(&mut self, total_bytes: u64) {
        let mut err = io::stderr();
        let _ = write!(err, "\r{}", " ".repeat(STATUS_LINE_WIDTH));
        let _ = write!(err, "\rDownloading... {} complete", HumanBytes(total_bytes));
        let _ = err.flush();
    }

    fn on_complete(&mut self, total_bytes: u64) {
        let _ = writeln!(
            io::stderr(),
            "\rDownloading... {} complete",
            HumanBytes(total_bytes)
        );
    }
}

/// Observer that discards every event.
#[derive(Debug, Default)]
pub struct NoProgress;

impl ProgressObserver for NoProgress {
    fn on_progress(&mut self, _total_bytes: u64) {}

    fn on_complete(&mut self, _total_bytes: u64) {}
}
