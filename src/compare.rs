//! `Comparator` structure for easy wall-clock comparisons of different
//! algorithms running on one pool.
use crate::ThreadPool;
use itertools::izip;
use std::io::{Error, Write};
use std::iter::repeat_with;
use std::time::Duration;

/// Convert a duration to a human readable string.
pub(crate) fn time_string(duration: Duration) -> String {
    let nano = duration.as_nanos() as u64;
    match nano {
        n if n < 1_000 => format!("{}ns", n),
        n if n < 1_000_000 => format!("{:.2}us", (n as f64 / 1_000.0)),
        n if n < 1_000_000_000 => format!("{:.2}ms", (n as f64 / 1_000_000.0)),
        n if n < 60_000_000_000 => format!("{:.2}s", (n as f64 / 1_000_000_000.0)),
        n => format!("{}m{}s", n / 60_000_000_000, (n % 60_000_000_000) / 1_000_000_000),
    }
}

/// This struct implements a pseudo builder pattern for multi-way
/// comparisons written out as a single plain-text table.
pub struct Comparator<'a> {
    labels: Vec<String>,
    timings: Vec<Vec<Duration>>,
    pool: &'a ThreadPool,
    runs_number: usize,
}

impl<'a> Comparator<'a> {
    pub(crate) fn new(pool: &'a ThreadPool) -> Self {
        Comparator {
            labels: Vec::new(),
            timings: Vec::new(),
            pool,
            runs_number: 100,
        }
    }

    /// PRECONDITION: call that BEFORE attaching algorithms
    pub fn runs_number(self, runs_wanted: usize) -> Self {
        Comparator {
            labels: self.labels,
            timings: self.timings,
            pool: self.pool,
            runs_number: runs_wanted,
        }
    }

    fn record_experiments<F: FnMut() -> Duration>(&self, run_function: F) -> Vec<Duration> {
        let mut experiments: Vec<_> = repeat_with(run_function).take(self.runs_number).collect();
        experiments.sort_unstable();
        experiments
    }

    /// Use this method for attaching an algorithm to the comparator. The
    /// algorithm will be taken as a closure and run as is.
    pub fn attach_algorithm<A, STR>(mut self, label: STR, algorithm: A) -> Self
    where
        A: Fn() + Send + Sync,
        STR: Into<String>,
    {
        let timings = self.record_experiments(|| self.pool.timed_install(&algorithm).1);
        self.timings.push(timings);
        self.labels.push(label.into());
        self
    }

    /// This method lets you attach an algorithm with a setup function
    /// that will be run before each timed run, outside the timing. The
    /// output of the setup function is given to the algorithm as input.
    pub fn attach_algorithm_with_setup<A, I, S, T, STR>(
        mut self,
        label: STR,
        mut setup_function: S,
        algorithm: A,
    ) -> Self
    where
        S: FnMut() -> I,
        I: Send,
        A: Fn(I) -> T + Send + Sync,
        T: Send + Sync,
        STR: Into<String>,
    {
        let timings = self.record_experiments(|| {
            let input = setup_function();
            self.pool.timed_install(|| algorithm(input)).1
        });
        self.timings.push(timings);
        self.labels.push(label.into());
        self
    }

    /// This method should be called in the end to write the comparison
    /// table to the desired sink.
    pub fn write_summary<W: Write>(self, out: &mut W) -> Result<(), Error> {
        let (last_label, first_labels) = self.labels.split_last().expect("not enough experiments");
        writeln!(
            out,
            "comparing {} and {} over {} runs",
            first_labels.join(", "),
            last_label,
            self.runs_number
        )?;
        writeln!(
            out,
            "{:<24} {:>12} {:>12} {:>12}",
            "algorithm", "best", "median", "mean"
        )?;
        for (label, timings) in izip!(self.labels.iter(), self.timings.iter()) {
            let mean = timings.iter().sum::<Duration>() / timings.len() as u32;
            writeln!(
                out,
                "{:<24} {:>12} {:>12} {:>12}",
                label,
                time_string(timings[0]),
                time_string(timings[timings.len() / 2]),
                time_string(mean)
            )?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ThreadPoolBuilder;

    #[test]
    fn summary_lists_every_algorithm() {
        let pool = ThreadPoolBuilder::new()
            .num_threads(2)
            .build()
            .expect("building pool failed");
        let mut out = Vec::new();
        pool.compare()
            .runs_number(3)
            .attach_algorithm("noop", || {})
            .attach_algorithm_with_setup(
                "sum",
                || (0..1_000u64).collect::<Vec<u64>>(),
                |v| v.iter().sum::<u64>(),
            )
            .write_summary(&mut out)
            .expect("writing summary failed");
        let text = String::from_utf8(out).expect("summary is utf8");
        assert!(text.contains("noop"));
        assert!(text.contains("sum"));
        assert_eq!(text.lines().count(), 4);
    }

    #[test]
    fn time_strings_pick_sensible_units() {
        assert_eq!(time_string(Duration::from_nanos(999)), "999ns");
        assert_eq!(time_string(Duration::from_micros(2)), "2.00us");
        assert_eq!(time_string(Duration::from_millis(3)), "3.00ms");
        assert_eq!(time_string(Duration::from_secs(4)), "4.00s");
        assert_eq!(time_string(Duration::from_secs(61)), "1m1s");
    }
}
