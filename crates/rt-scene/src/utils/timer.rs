//! Wall clock timing of the compile and submit phases.

use std::{
    fmt::Display,
    time::{Duration, Instant},
};

/// Logged under this target so timings can be filtered out with `RUST_LOG`
pub const TARGET: &str = "phase timer";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Running the script and resolving its configuration
    Compile,
    /// Handing the resolved scene to the engine
    Submit,
}

impl Display for Phase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Phase::Compile => write!(f, "compile"),
            Phase::Submit => write!(f, "submit"),
        }
    }
}

pub struct Timed<T> {
    pub value: T,
    pub elapsed: Duration,
}

pub fn timed<T>(f: impl FnOnce() -> T) -> Timed<T> {
    let begin = Instant::now();
    let value = f();
    Timed {
        value,
        elapsed: begin.elapsed(),
    }
}

/// Runs a fallible phase and logs its duration, at `warn` when it failed.
/// The result is passed through untouched.
pub fn time_phase<T, E>(phase: Phase, f: impl FnOnce() -> Result<T, E>) -> Result<T, E> {
    let Timed { value, elapsed } = timed(f);
    match &value {
        Ok(_) => log::info!(target: TARGET, "{phase} took {}", format_elapsed(elapsed)),
        Err(_) => log::warn!(target: TARGET, "{phase} failed after {}", format_elapsed(elapsed)),
    }
    value
}

pub fn format_elapsed(elapsed: Duration) -> String {
    let secs = elapsed.as_secs_f64();
    if elapsed < Duration::from_millis(1) {
        format!("{:.3}µs", secs * 1e6)
    } else if elapsed < Duration::from_secs(1) {
        format!("{:.3}ms", secs * 1e3)
    } else {
        format!("{secs:.3}s")
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::{format_elapsed, time_phase, timed, Phase};

    #[test]
    fn units() {
        assert_eq!(format_elapsed(Duration::from_micros(250)), "250.000µs");
        assert_eq!(format_elapsed(Duration::from_millis(12)), "12.000ms");
        assert_eq!(format_elapsed(Duration::from_millis(2500)), "2.500s");
    }

    #[test]
    fn phases_pass_results_through() {
        assert_eq!(timed(|| 21 * 2).value, 42);
        assert_eq!(time_phase::<_, String>(Phase::Compile, || Ok(3)), Ok(3));
        assert_eq!(
            time_phase::<u32, _>(Phase::Submit, || Err("engine gone")),
            Err("engine gone")
        );
        assert_eq!(Phase::Submit.to_string(), "submit");
    }
}
