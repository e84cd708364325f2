//! Collects the latest elapsed time per algorithm and turns it into a speed
//! ranking.

use std::sync::Mutex;
use std::time::Duration;

/// Latest observed elapsed time per algorithm.
///
/// One table is shared by every probe in a race; each report upserts the
/// algorithm's entry, so across repeated runs only the most recent time
/// survives. Ranking is recomputed on every query from whatever is recorded,
/// so identical tables always rank identically.
///
/// # Example
///
/// ```
/// use std::time::Duration;
/// use sortrace_core::race::RaceTimes;
///
/// let times = RaceTimes::new();
/// times.record("A", Duration::from_millis(50));
/// times.record("B", Duration::from_millis(10));
/// times.record("C", Duration::from_millis(30));
///
/// assert_eq!(times.rank(), vec!["B", "C", "A"]);
/// ```
#[derive(Debug, Default)]
pub struct RaceTimes {
    entries: Mutex<Vec<(&'static str, Duration)>>,
}

impl RaceTimes {
    pub fn new() -> Self {
        Self::default()
    }

    /// Upserts the latest elapsed time for an algorithm. First-recorded
    /// order is preserved and breaks ranking ties.
    pub fn record(&self, algorithm: &'static str, elapsed: Duration) {
        let mut entries = self.entries.lock().unwrap();
        match entries.iter_mut().find(|(name, _)| *name == algorithm) {
            Some(entry) => entry.1 = elapsed,
            None => entries.push((algorithm, elapsed)),
        }
    }

    /// Latest recorded time for an algorithm, if any.
    pub fn elapsed(&self, algorithm: &str) -> Option<Duration> {
        self.entries
            .lock()
            .unwrap()
            .iter()
            .find(|(name, _)| *name == algorithm)
            .map(|(_, elapsed)| *elapsed)
    }

    /// Algorithm names ordered fastest first. Algorithms with no recorded
    /// time are excluded; ties keep the order they were first recorded in.
    pub fn rank(&self) -> Vec<&'static str> {
        self.standings()
            .into_iter()
            .map(|(name, _)| name)
            .collect()
    }

    /// Like [`rank`](Self::rank), with the recorded times attached.
    pub fn standings(&self) -> Vec<(&'static str, Duration)> {
        let mut standings = self.entries.lock().unwrap().clone();
        standings.sort_by_key(|&(_, elapsed)| elapsed);
        standings
    }

    pub fn len(&self) -> usize {
        self.entries.lock().unwrap().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.lock().unwrap().is_empty()
    }
}

/// English ordinal label for a 1-based place: `1st`, `2nd`, `3rd`, `4th`...
pub fn ordinal(place: usize) -> String {
    let suffix = match place % 100 {
        11..=13 => "th",
        _ => match place % 10 {
            1 => "st",
            2 => "nd",
            3 => "rd",
            _ => "th",
        },
    };
    format!("{place}{suffix}")
}
