//! Terminal presentation of a race: one live line per algorithm showing the
//! working sequence as bar glyphs, and a standings table once the dust
//! settles.
//!
//! Everything here is a collaborator layered on [`RaceObserver`]; the race
//! itself neither knows nor cares how it is drawn.

use std::collections::HashMap;
use std::sync::Mutex;
use std::time::Duration;

use colored::Colorize;
use indicatif::{MultiProgress, ProgressBar, ProgressStyle};
use prettytable::{row, Table};

use crate::race::{ordinal, RaceObserver, RaceTimes, Snapshot, HIGHEST_VALUE, LOWEST_VALUE};

const GLYPHS: [char; 8] = ['▁', '▂', '▃', '▄', '▅', '▆', '▇', '█'];

/// Renders a race live in the terminal, one [`indicatif`] line per
/// algorithm.
pub struct RaceDisplay {
    lanes: HashMap<&'static str, ProgressBar>,
    latest: Mutex<HashMap<&'static str, Duration>>,
    _screen: MultiProgress,
}

impl RaceDisplay {
    /// One line per algorithm, primed with the unsorted source field.
    pub fn new(algorithms: &[&'static str], source: &[u32]) -> Self {
        let screen = MultiProgress::new();
        let style = ProgressStyle::with_template("{prefix:>15} {msg}").unwrap();

        let opening = render_bars(&Snapshot::in_progress(source, &[]));
        let mut lanes = HashMap::new();
        for &algorithm in algorithms {
            let lane = screen.add(ProgressBar::new_spinner());
            lane.set_style(style.clone());
            lane.set_prefix(algorithm);
            lane.set_message(opening.clone());
            lanes.insert(algorithm, lane);
        }

        Self {
            lanes,
            latest: Mutex::new(HashMap::new()),
            _screen: screen,
        }
    }

    fn lane_message(&self, algorithm: &'static str, snapshot: &Snapshot) -> String {
        match self.latest.lock().unwrap().get(algorithm) {
            Some(elapsed) => format!("{}  {}", render_bars(snapshot), format_elapsed(*elapsed)),
            None => render_bars(snapshot),
        }
    }
}

impl RaceObserver for RaceDisplay {
    fn on_snapshot(&self, algorithm: &'static str, snapshot: &Snapshot) {
        let Some(lane) = self.lanes.get(algorithm) else {
            return;
        };

        let message = self.lane_message(algorithm, snapshot);
        if snapshot.is_complete() {
            lane.finish_with_message(message);
        } else {
            lane.set_message(message);
        }
    }

    fn on_time_report(&self, algorithm: &'static str, elapsed: Duration) {
        self.latest.lock().unwrap().insert(algorithm, elapsed);
    }
}

/// Renders a snapshot as one bar glyph per element: active indices red,
/// settled ones green, the rest cyan.
pub fn render_bars(snapshot: &Snapshot) -> String {
    let mut bars = String::new();
    for (at, &value) in snapshot.values().iter().enumerate() {
        let glyph = glyph_for(value).to_string();
        let bar = if snapshot.active().contains(&at) {
            glyph.red().bold()
        } else if snapshot.settled().contains(&at) {
            glyph.green()
        } else {
            glyph.cyan()
        };
        bars.push_str(&bar.to_string());
    }
    bars
}

fn glyph_for(value: u32) -> char {
    let span = (HIGHEST_VALUE - LOWEST_VALUE) as usize;
    let clamped = (value.clamp(LOWEST_VALUE, HIGHEST_VALUE) - LOWEST_VALUE) as usize;
    GLYPHS[clamped * (GLYPHS.len() - 1) / span]
}

/// Milliseconds up to a second, fractional seconds beyond.
pub fn format_elapsed(elapsed: Duration) -> String {
    let millis = elapsed.as_millis();
    if millis > 1000 {
        format!("{:.2}s", elapsed.as_secs_f64())
    } else {
        format!("{millis}ms")
    }
}

/// Prints the final standings as a table, fastest first.
pub fn print_standings(times: &RaceTimes, total: Duration) {
    let mut table = Table::new();
    table.add_row(row!["Place".bold(), "Algorithm".bold(), "Time".bold()]);

    for (place, (algorithm, elapsed)) in times.standings().into_iter().enumerate() {
        table.add_row(row![
            format!("{} fastest", ordinal(place + 1)),
            algorithm,
            format_elapsed(elapsed)
        ]);
    }

    table.printstd();
    println!(
        "{} {}",
        "Field finished in".bold().blue(),
        format_elapsed(total).bold()
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn glyphs_scale_with_value() {
        assert_eq!(glyph_for(LOWEST_VALUE), '▁');
        assert_eq!(glyph_for(HIGHEST_VALUE), '█');
        // Out-of-range values clamp rather than panic.
        assert_eq!(glyph_for(0), '▁');
        assert_eq!(glyph_for(1000), '█');
    }

    #[test]
    fn one_bar_per_element() {
        let snapshot = Snapshot::in_progress(&[10, 50, 99], &[1]);
        let bars = render_bars(&snapshot);
        let glyphs = bars.chars().filter(|c| GLYPHS.contains(c)).count();
        assert_eq!(glyphs, 3);
    }

    #[test]
    fn elapsed_formatting_switches_units() {
        assert_eq!(format_elapsed(Duration::from_millis(250)), "250ms");
        assert_eq!(format_elapsed(Duration::from_millis(1000)), "1000ms");
        assert_eq!(format_elapsed(Duration::from_millis(2500)), "2.50s");
    }
}
