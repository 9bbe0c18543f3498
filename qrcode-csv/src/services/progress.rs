//! Progress reporting for label generation.
//!
//! The generator calls an injected [`ProgressObserver`] once per finished
//! label; no global state is involved, so several runs can report
//! independently.

use std::io::Write;
use std::time::Instant;

/// Number of steps the console bar is divided into.
const RANKS: usize = 20;

/// Receives progress notifications from a generation run.
pub trait ProgressObserver {
    /// Called once before the first label with the number of labels.
    fn start(&mut self, _total: usize) {}

    /// Called after each label has been written.
    fn advance(&mut self, label: &str);

    /// Called once after the last label.
    fn finish(&mut self) {}
}

/// Observer that ignores every notification.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoProgress;

impl ProgressObserver for NoProgress {
    fn advance(&mut self, _label: &str) {}
}

/// Console bar printing a dot every 5% and a percentage every 10%,
/// followed by elapsed time and throughput.
///
/// ```text
/// Generation QR Codes: 0% . 10% . 20% ... 100% [1.52s | 13.16 qrcode/s]
/// ```
pub struct ConsoleProgress<W: Write> {
    name: String,
    unit: String,
    total: usize,
    progress: usize,
    rank: usize,
    started: Instant,
    out: W,
}

impl ConsoleProgress<std::io::Stdout> {
    pub fn stdout(name: &str, unit: &str) -> Self {
        Self::with_writer(name, unit, std::io::stdout())
    }
}

impl<W: Write> ConsoleProgress<W> {
    pub fn with_writer(name: &str, unit: &str, out: W) -> Self {
        Self {
            name: name.to_string(),
            unit: if unit.is_empty() { "it".to_string() } else { unit.to_string() },
            total: 0,
            progress: 0,
            rank: 0,
            started: Instant::now(),
            out,
        }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn print(&mut self, text: &str) {
        let _ = self.out.write_all(text.as_bytes());
        let _ = self.out.flush();
    }
}

impl<W: Write> ProgressObserver for ConsoleProgress<W> {
    fn start(&mut self, total: usize) {
        self.total = total;
        self.progress = 0;
        self.rank = 0;
        self.started = Instant::now();
        if total == 0 {
            return;
        }
        if !self.name.is_empty() {
            let header = format!("{}:", self.name);
            self.print(&header);
        }
        self.print(" 0%");
    }

    fn advance(&mut self, _label: &str) {
        if self.total == 0 {
            return;
        }
        self.progress += 1;
        let new_rank = rank_for(self.progress, self.total);
        if new_rank > self.rank {
            let mut marks = String::new();
            for i in self.rank + 1..=new_rank {
                marks.push_str(&rank_mark(i));
            }
            self.print(&marks);
            self.rank = new_rank;
        }
    }

    fn finish(&mut self) {
        if self.total == 0 {
            return;
        }
        let seconds = self.started.elapsed().as_secs_f64();
        let line = summary(self.progress, seconds, &self.unit);
        self.print(&line);
    }
}

/// Rank reached after `progress` of `total` items, rounding half to even.
fn rank_for(progress: usize, total: usize) -> usize {
    let exact = (RANKS * progress) as f64 / total as f64;
    (exact.round_ties_even() as usize).min(RANKS)
}

/// Even ranks print a percentage, odd ranks a dot.
fn rank_mark(rank: usize) -> String {
    if rank % 2 == 0 {
        format!(" {}%", 5 * rank)
    } else {
        " .".to_string()
    }
}

/// Scale a rate to a metric prefix: `M` above a million, `k` above a thousand.
pub fn speed_prefix(speed: f64) -> (&'static str, f64) {
    for (prefix, value) in [("M", 1e6), ("k", 1e3)] {
        if speed > value {
            return (prefix, speed / value);
        }
    }
    ("", speed)
}

fn summary(progress: usize, seconds: f64, unit: &str) -> String {
    let speed = if seconds > 0.0 { progress as f64 / seconds } else { 0.0 };
    let (prefix, speed) = speed_prefix(speed);
    format!(" [{seconds:.2}s | {speed:.2} {prefix}{unit}/s]\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run_bar(total: usize, steps: usize) -> String {
        let mut bar = ConsoleProgress::with_writer("Generation QR Codes", "qrcode", Vec::new());
        bar.start(total);
        for _ in 0..steps {
            bar.advance("x");
        }
        String::from_utf8(bar.into_inner()).unwrap()
    }

    #[test]
    fn full_bar_for_twenty_items() {
        let out = run_bar(20, 20);
        assert_eq!(
            out,
            "Generation QR Codes: 0% . 10% . 20% . 30% . 40% . 50% . 60% . 70% . 80% . 90% . 100%"
        );
    }

    #[test]
    fn single_item_jumps_to_done() {
        let out = run_bar(1, 1);
        assert!(out.starts_with("Generation QR Codes: 0% . 10%"));
        assert!(out.ends_with(" . 100%"));
    }

    #[test]
    fn partial_progress_stops_at_current_rank() {
        // 3/10 -> rank 6 -> 30%
        assert_eq!(run_bar(10, 3), "Generation QR Codes: 0% . 10% . 20% . 30%");
    }

    #[test]
    fn many_items_print_each_mark_once() {
        let out = run_bar(1000, 1000);
        assert_eq!(out.matches(" .").count(), 10);
        assert_eq!(out.matches("100%").count(), 1);
    }

    #[test]
    fn zero_total_prints_nothing() {
        let mut bar = ConsoleProgress::with_writer("Name", "qrcode", Vec::new());
        bar.start(0);
        bar.advance("x");
        bar.finish();
        assert!(bar.into_inner().is_empty());
    }

    #[test]
    fn finish_prints_rate_summary() {
        let mut bar = ConsoleProgress::with_writer("", "qrcode", Vec::new());
        bar.start(2);
        bar.advance("a");
        bar.advance("b");
        bar.finish();
        let out = String::from_utf8(bar.into_inner()).unwrap();
        assert!(out.starts_with(" 0%"), "{out}");
        assert!(out.contains(" 100% ["), "{out}");
        assert!(out.trim_end().ends_with("qrcode/s]"), "{out}");
    }

    #[test]
    fn rank_rounds_half_to_even() {
        // 20 * 1 / 8 = 2.5 -> 2
        assert_eq!(rank_for(1, 8), 2);
        // 20 * 3 / 8 = 7.5 -> 8
        assert_eq!(rank_for(3, 8), 8);
        assert_eq!(rank_for(8, 8), 20);
    }

    #[test]
    fn speed_prefixes() {
        assert_eq!(speed_prefix(12.0), ("", 12.0));
        assert_eq!(speed_prefix(2500.0), ("k", 2.5));
        assert_eq!(speed_prefix(3e6), ("M", 3.0));
        assert_eq!(speed_prefix(1000.0), ("", 1000.0));
    }

    #[test]
    fn summary_format() {
        assert_eq!(summary(5, 2.0, "qrcode"), " [2.00s | 2.50 qrcode/s]\n");
        assert_eq!(summary(5000, 2.0, "it"), " [2.00s | 2.50 kit/s]\n");
    }

    #[test]
    fn empty_unit_defaults_to_it() {
        let bar = ConsoleProgress::with_writer("", "", Vec::new());
        assert_eq!(bar.unit, "it");
    }
}
