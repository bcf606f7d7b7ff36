use std::time::Duration;
use std::time::Instant;

use log::debug;

/// Keeps track of the time spent in named phases of a tool.
#[derive(Default)]
pub struct Timing {
    results: Vec<(String, Duration)>,
}

/// A running measurement, which is recorded by [Timer::finish].
pub struct Timer<'a> {
    timing: &'a mut Timing,
    name: String,
    start: Instant,
}

impl Timing {
    pub fn new() -> Timing {
        Timing::default()
    }

    /// Starts measuring the phase with the given name.
    pub fn start(&mut self, name: &str) -> Timer<'_> {
        Timer {
            timing: self,
            name: name.to_string(),
            start: Instant::now(),
        }
    }

    /// Runs the given function as the phase with the given name.
    pub fn measure<T>(&mut self, name: &str, function: impl FnOnce() -> T) -> T {
        let timer = self.start(name);
        let result = function();
        timer.finish();
        result
    }

    /// Returns the recorded phases in the order that they finished.
    pub fn results(&self) -> &[(String, Duration)] {
        &self.results
    }

    /// Prints all the recorded phases to stderr.
    pub fn print(&self) {
        for (name, duration) in &self.results {
            eprintln!("Time {}: {:.3}s", name, duration.as_secs_f64());
        }
    }
}

impl Timer<'_> {
    /// Stops the measurement and records it.
    pub fn finish(self) {
        let duration = self.start.elapsed();
        debug!("Time {}: {:.3}s", self.name, duration.as_secs_f64());
        self.timing.results.push((self.name, duration));
    }
}
