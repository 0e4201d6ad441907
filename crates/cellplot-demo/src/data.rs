#![forbid(unsafe_code)]

//! Sample sources and the background worker that feeds the plots.
//!
//! The worker owns a [`SlidingWindow`], appends one sample per interval, and
//! sends a full snapshot over an mpsc channel. The UI thread never touches
//! the window directly.

use std::collections::VecDeque;
use std::fs;
use std::io;
use std::path::Path;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::mpsc::Sender;
use std::thread::{self, JoinHandle};
use std::time::{Duration, SystemTime, UNIX_EPOCH};

use cellplot::Point2D;

/// Where samples come from.
#[derive(Debug, Clone)]
pub enum Feed {
    /// Values read from a file, replayed in a loop. `x` is the sample index.
    Recorded { values: Vec<f64>, next: usize },
    /// A synthetic load curve. `x` is Unix seconds.
    Wave {
        start_secs: f64,
        step_secs: f64,
        tick: u64,
    },
}

impl Feed {
    /// Replay `values`; fails when there is nothing to replay.
    pub fn recorded(values: Vec<f64>) -> io::Result<Self> {
        if values.is_empty() {
            return Err(io::Error::new(
                io::ErrorKind::InvalidData,
                "data file has no samples",
            ));
        }
        Ok(Self::Recorded { values, next: 0 })
    }

    /// Synthetic wave starting at `start_secs`, one sample every `step`.
    pub fn wave(start_secs: f64, step: Duration) -> Self {
        Self::Wave {
            start_secs,
            step_secs: step.as_secs_f64(),
            tick: 0,
        }
    }

    /// Synthetic wave that ends "now", so the window starts filled with the
    /// recent past.
    pub fn wave_ending_now(window: usize, step: Duration) -> Self {
        let now = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map_or(0.0, |d| d.as_secs_f64());
        let back = step.as_secs_f64() * window as f64;
        Self::wave((now - back).max(0.0), step)
    }

    /// True when `x` should be shown as wall-clock time.
    pub fn is_clock(&self) -> bool {
        matches!(self, Self::Wave { .. })
    }

    /// Produce the next sample.
    pub fn next_point(&mut self) -> Point2D {
        match self {
            Self::Recorded { values, next } => {
                let y = values
                    .get(*next % values.len().max(1))
                    .copied()
                    .unwrap_or_default();
                let point = Point2D::new(*next as f64, y);
                *next += 1;
                point
            }
            Self::Wave {
                start_secs,
                step_secs,
                tick,
            } => {
                let t = *tick as f64;
                let point = Point2D::new(*start_secs + t * *step_secs, wave_value(*tick));
                *tick += 1;
                point
            }
        }
    }
}

/// A CPU-like load in `[0, 100]`: two slow sines plus deterministic jitter.
fn wave_value(tick: u64) -> f64 {
    let t = tick as f64;
    let base = 50.0 + 30.0 * (t / 17.0).sin() + 12.0 * (t / 5.3).sin();
    // splitmix-style hash for repeatable jitter
    let mut z = tick.wrapping_add(0x9E37_79B9_7F4A_7C15);
    z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
    z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
    z ^= z >> 31;
    let jitter = (z % 1000) as f64 / 1000.0 * 8.0 - 4.0;
    (base + jitter).clamp(0.0, 100.0)
}

/// Parse one number per line; blank lines are skipped.
pub fn parse_samples(text: &str) -> io::Result<Vec<f64>> {
    text.lines()
        .enumerate()
        .filter(|(_, line)| !line.trim().is_empty())
        .map(|(n, line)| {
            let line = line.trim();
            match line.parse::<f64>() {
                Ok(v) if v.is_finite() => Ok(v),
                _ => Err(io::Error::new(
                    io::ErrorKind::InvalidData,
                    format!("line {}: not a finite number: {line:?}", n + 1),
                )),
            }
        })
        .collect()
}

/// Read and parse a sample file.
pub fn load_samples(path: &Path) -> io::Result<Vec<f64>> {
    let text = fs::read_to_string(path)?;
    parse_samples(&text)
}

/// The most recent `capacity` samples, oldest first.
#[derive(Debug, Clone)]
pub struct SlidingWindow {
    points: VecDeque<Point2D>,
    capacity: usize,
}

impl SlidingWindow {
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            points: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    /// Append a sample, dropping the oldest when full.
    pub fn push(&mut self, point: Point2D) {
        if self.points.len() == self.capacity {
            self.points.pop_front();
        }
        self.points.push_back(point);
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Copy of the current contents.
    pub fn snapshot(&self) -> Vec<Point2D> {
        self.points.iter().copied().collect()
    }
}

/// Handle to the running sampler thread. Dropping it stops the thread.
#[derive(Debug)]
pub struct Worker {
    stop: Arc<AtomicBool>,
    handle: Option<JoinHandle<()>>,
}

impl Worker {
    /// Fill a window from `feed`, send it, then append and send one sample
    /// every `interval` until stopped or the receiver hangs up.
    pub fn spawn(
        mut feed: Feed,
        capacity: usize,
        interval: Duration,
        tx: Sender<Vec<Point2D>>,
    ) -> io::Result<Self> {
        let stop = Arc::new(AtomicBool::new(false));
        let flag = Arc::clone(&stop);
        let handle = thread::Builder::new()
            .name("cellplot-sampler".into())
            .spawn(move || {
                let mut window = SlidingWindow::new(capacity);
                for _ in 0..window.capacity() {
                    window.push(feed.next_point());
                }
                tracing::info!(samples = window.len(), "sampler started");
                while !flag.load(Ordering::Acquire) {
                    if tx.send(window.snapshot()).is_err() {
                        tracing::debug!("receiver gone, sampler exiting");
                        return;
                    }
                    thread::park_timeout(interval);
                    window.push(feed.next_point());
                }
                tracing::info!("sampler stopped");
            })?;
        Ok(Self {
            stop,
            handle: Some(handle),
        })
    }

    /// Signal the thread and wait for it.
    pub fn stop(&mut self) {
        self.stop.store(true, Ordering::Release);
        if let Some(handle) = self.handle.take() {
            handle.thread().unpark();
            if handle.join().is_err() {
                tracing::warn!("sampler thread panicked");
            }
        }
    }
}

impl Drop for Worker {
    fn drop(&mut self) {
        self.stop();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use std::sync::mpsc;

    #[test]
    fn parses_numbers_and_skips_blanks() {
        let values = parse_samples("1\n\n 2.5 \n-3\n").unwrap();
        assert_eq!(values, vec![1.0, 2.5, -3.0]);
    }

    #[test]
    fn bad_line_is_reported_with_its_number() {
        let err = parse_samples("1\nabc\n").unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::InvalidData);
        assert!(err.to_string().contains("line 2"));
        assert!(parse_samples("NaN").is_err());
    }

    #[test]
    fn recorded_feed_cycles_with_growing_x() {
        let mut feed = Feed::recorded(vec![5.0, 7.0]).unwrap();
        let pts: Vec<_> = (0..3).map(|_| feed.next_point()).collect();
        assert_eq!(
            pts,
            vec![
                Point2D::new(0.0, 5.0),
                Point2D::new(1.0, 7.0),
                Point2D::new(2.0, 5.0)
            ]
        );
        assert!(!feed.is_clock());
    }

    #[test]
    fn empty_recording_is_rejected() {
        assert!(Feed::recorded(Vec::new()).is_err());
    }

    #[test]
    fn wave_steps_in_time() {
        let mut feed = Feed::wave(1000.0, Duration::from_millis(500));
        let a = feed.next_point();
        let b = feed.next_point();
        assert_eq!(a.x, 1000.0);
        assert_eq!(b.x, 1000.5);
        assert!(feed.is_clock());
    }

    #[test]
    fn window_drops_oldest() {
        let mut window = SlidingWindow::new(2);
        for i in 0..3 {
            window.push(Point2D::new(i as f64, 0.0));
        }
        assert_eq!(window.len(), 2);
        assert_eq!(window.snapshot()[0].x, 1.0);
    }

    #[test]
    fn worker_sends_full_window_first() {
        let (tx, rx) = mpsc::channel();
        let feed = Feed::recorded(vec![1.0, 2.0, 3.0]).unwrap();
        let mut worker = Worker::spawn(feed, 4, Duration::from_millis(5), tx).unwrap();
        let first = rx.recv_timeout(Duration::from_secs(5)).unwrap();
        assert_eq!(first.len(), 4);
        let second = rx.recv_timeout(Duration::from_secs(5)).unwrap();
        assert_eq!(second.len(), 4);
        assert_eq!(second[0].x, 1.0);
        worker.stop();
    }

    #[test]
    fn worker_exits_when_receiver_dropped() {
        let (tx, rx) = mpsc::channel();
        let feed = Feed::wave(0.0, Duration::from_secs(1));
        let worker = Worker::spawn(feed, 3, Duration::from_millis(1), tx).unwrap();
        drop(rx);
        drop(worker);
    }

    proptest! {
        #[test]
        fn wave_stays_in_percent_range(tick in 0u64..1_000_000) {
            let v = wave_value(tick);
            prop_assert!((0.0..=100.0).contains(&v));
        }

        #[test]
        fn window_never_exceeds_capacity(cap in 1usize..50, n in 0usize..200) {
            let mut window = SlidingWindow::new(cap);
            for i in 0..n {
                window.push(Point2D::new(i as f64, 0.0));
            }
            prop_assert_eq!(window.len(), n.min(cap));
        }
    }
}
