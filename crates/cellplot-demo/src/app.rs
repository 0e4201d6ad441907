#![forbid(unsafe_code)]

//! Demo application: stacked plots, the event loop, and terminal setup.

use std::io::{self, Write};
use std::sync::OnceLock;
use std::sync::mpsc;
use std::time::{Duration, Instant};

use cellplot::prelude::*;
use cellplot::{InvalidSeries, KeyCode, KeyEventKind, write_buffer};

use crate::cli::{MarkerMode, Opts};
use crate::data::{Feed, Worker, load_samples};

const EVENT_POLL: Duration = Duration::from_millis(50);

/// Load bands: green while idle, through yellow, red when saturated.
fn load_style() -> cellplot::chart::StyleFn {
    style_fn::threshold_style(
        vec![
            (50.0, Style::new().fg(palette::GREEN)),
            (60.0, Style::new().fg(palette::DARK_GREEN)),
            (70.0, Style::new().fg(palette::GREEN_YELLOW)),
            (80.0, Style::new().fg(palette::LIGHT_YELLOW)),
            (90.0, Style::new().fg(palette::YELLOW)),
        ],
        Style::new().fg(palette::RED),
    )
}

fn build_plot(marker: Marker, title: &str, clock: bool) -> Plot {
    let mut plot = Plot::new();
    let x_fmt = if clock {
        label::clock_hh_mm()
    } else {
        label::integer()
    };
    plot.set_marker(marker)
        .set_title(title)
        .set_border(true)
        .set_axis_label_formatters(x_fmt, label::percent(0))
        .set_x_axis_text(if clock { "Time" } else { "Sample" }, Alignment::Center)
        .set_y_axis_text("% of CPU", Alignment::Left)
        .set_axis_style(Style::new().fg(palette::SILVER));
    let style = load_style();
    plot.set_point_style(move |p| style(p));
    plot
}

/// What the loop should do after an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Control {
    Continue,
    Redraw,
    Quit,
}

/// The plots and which one has focus.
#[derive(Debug)]
pub struct App {
    plots: Vec<Plot>,
    areas: Vec<Rect>,
    focused: usize,
}

impl App {
    pub fn new(mode: MarkerMode, clock: bool) -> Self {
        let mut plots = Vec::new();
        if matches!(mode, MarkerMode::Glyph | MarkerMode::Both) {
            plots.push(build_plot(Marker::default(), "CPU load", clock));
        }
        if matches!(mode, MarkerMode::Braille | MarkerMode::Both) {
            plots.push(build_plot(Marker::Braille, "CPU load (braille)", clock));
        }
        let mut app = Self {
            areas: vec![Rect::default(); plots.len()],
            plots,
            focused: 0,
        };
        app.set_focus(0);
        app
    }

    pub fn plots(&self) -> &[Plot] {
        &self.plots
    }

    pub fn focused(&self) -> usize {
        self.focused
    }

    fn set_focus(&mut self, index: usize) {
        self.focused = index;
        for (i, plot) in self.plots.iter_mut().enumerate() {
            if i == index {
                plot.focus();
            } else {
                plot.blur();
            }
        }
    }

    /// Hand a new snapshot to every plot.
    pub fn apply(&mut self, points: Vec<Point2D>) -> std::result::Result<(), InvalidSeries> {
        let series = cellplot::DataSeries::new(points)?;
        for plot in &mut self.plots {
            plot.set_series(series.clone());
        }
        Ok(())
    }

    /// Apply every snapshot waiting on `rx`. True when at least one was
    /// accepted; rejected ones are logged and the previous data stays.
    pub fn drain(&mut self, rx: &mpsc::Receiver<Vec<Point2D>>) -> bool {
        let mut accepted = false;
        while let Ok(points) = rx.try_recv() {
            match self.apply(points) {
                Ok(()) => accepted = true,
                Err(err) => {
                    tracing::warn!(error = %err, "snapshot rejected, keeping previous data");
                }
            }
        }
        accepted
    }

    /// Split `area` into equal horizontal bands, one per plot; the last band
    /// takes the remainder.
    pub fn layout(&mut self, area: Rect) {
        let n = self.plots.len() as u16;
        if n == 0 {
            return;
        }
        let band = area.height / n;
        for (i, slot) in self.areas.iter_mut().enumerate() {
            let i = i as u16;
            let y = area.y + i * band;
            let height = if i + 1 == n {
                area.height - i * band
            } else {
                band
            };
            *slot = Rect::new(area.x, y, area.width, height);
        }
    }

    pub fn areas(&self) -> &[Rect] {
        &self.areas
    }

    /// Lay out to the whole buffer and draw every plot.
    pub fn render(&mut self, buf: &mut Buffer) {
        self.layout(buf.bounds());
        for (plot, area) in self.plots.iter().zip(&self.areas) {
            plot.render(*area, buf);
        }
    }

    pub fn handle_event(&mut self, event: &Event) -> Control {
        match event {
            Event::Key(key) if key.kind != KeyEventKind::Release => {
                if key.is_char('q')
                    || key.code == KeyCode::Escape
                    || (key.ctrl() && key.is_char('c'))
                {
                    return Control::Quit;
                }
                let n = self.plots.len();
                match key.code {
                    KeyCode::Tab if n > 0 => {
                        self.set_focus((self.focused + 1) % n);
                        Control::Redraw
                    }
                    KeyCode::BackTab if n > 0 => {
                        self.set_focus((self.focused + n - 1) % n);
                        Control::Redraw
                    }
                    _ => Control::Continue,
                }
            }
            Event::Mouse(mouse) => {
                for i in 0..self.plots.len() {
                    match self.plots[i].handle_mouse(mouse, self.areas[i]) {
                        MouseOutcome::Ignored => continue,
                        MouseOutcome::Consumed => return Control::Continue,
                        MouseOutcome::FocusRequested => {
                            tracing::debug!(plot = i, "focus requested by mouse");
                            self.set_focus(i);
                            return Control::Redraw;
                        }
                    }
                }
                Control::Continue
            }
            Event::Resize { .. } | Event::Focus(true) => Control::Redraw,
            _ => Control::Continue,
        }
    }
}

/// Raw mode + alternate screen for the lifetime of the value.
#[derive(Debug)]
pub struct TerminalGuard {
    mouse: bool,
}

impl TerminalGuard {
    pub fn enter(mouse: bool) -> io::Result<Self> {
        install_panic_hook();

        crossterm::terminal::enable_raw_mode()?;
        let guard = Self { mouse };
        let mut stdout = io::stdout();
        crossterm::execute!(stdout, crossterm::terminal::EnterAlternateScreen)?;
        crossterm::execute!(stdout, crossterm::cursor::Hide)?;
        if mouse {
            crossterm::execute!(stdout, crossterm::event::EnableMouseCapture)?;
        }
        tracing::info!(mouse, "terminal session started");
        Ok(guard)
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let mut stdout = io::stdout();
        if self.mouse {
            let _ = crossterm::execute!(stdout, crossterm::event::DisableMouseCapture);
        }
        let _ = crossterm::execute!(stdout, crossterm::cursor::Show);
        let _ = crossterm::execute!(stdout, crossterm::terminal::LeaveAlternateScreen);
        let _ = crossterm::terminal::disable_raw_mode();
        let _ = stdout.flush();
        tracing::info!("terminal session restored");
    }
}

fn install_panic_hook() {
    static HOOK: OnceLock<()> = OnceLock::new();
    HOOK.get_or_init(|| {
        let previous = std::panic::take_hook();
        std::panic::set_hook(Box::new(move |info| {
            let mut stdout = io::stdout();
            let _ = crossterm::execute!(stdout, crossterm::event::DisableMouseCapture);
            let _ = crossterm::execute!(stdout, crossterm::cursor::Show);
            let _ = crossterm::execute!(stdout, crossterm::terminal::LeaveAlternateScreen);
            let _ = crossterm::terminal::disable_raw_mode();
            previous(info);
        }));
    });
}

/// Run the demo until the user quits or `exit_after_ms` elapses.
pub fn run(opts: &Opts) -> Result<()> {
    let interval = Duration::from_millis(opts.interval_ms);
    let feed = match &opts.data {
        Some(path) => Feed::recorded(load_samples(path)?)?,
        None => Feed::wave_ending_now(opts.window, interval),
    };
    tracing::info!(
        window = opts.window,
        interval_ms = opts.interval_ms,
        marker = ?opts.marker,
        recorded = opts.data.is_some(),
        "starting demo"
    );

    let mut app = App::new(opts.marker, feed.is_clock());
    let (tx, rx) = mpsc::channel();
    let mut worker = Worker::spawn(feed, opts.window, interval, tx)?;

    let guard = TerminalGuard::enter(opts.mouse)?;
    let (width, height) = crossterm::terminal::size()?;
    let mut buf = Buffer::new(width.max(1), height.max(1));
    let started = Instant::now();
    let exit_after = (opts.exit_after_ms > 0).then(|| Duration::from_millis(opts.exit_after_ms));
    let mut dirty = true;

    loop {
        dirty |= app.drain(&rx);

        if dirty {
            buf.clear();
            app.render(&mut buf);
            write_buffer(&mut io::stdout().lock(), &buf)?;
            dirty = false;
        }

        if exit_after.is_some_and(|limit| started.elapsed() >= limit) {
            tracing::info!("exit timer elapsed");
            break;
        }

        if !crossterm::event::poll(EVENT_POLL)? {
            continue;
        }
        let Some(event) = Event::from_crossterm(crossterm::event::read()?) else {
            continue;
        };
        if let Event::Resize { width, height } = event {
            tracing::debug!(width, height, "resize");
            buf = Buffer::new(width.max(1), height.max(1));
        }
        match app.handle_event(&event) {
            Control::Quit => break,
            Control::Redraw => dirty = true,
            Control::Continue => {}
        }
    }

    worker.stop();
    drop(guard);
    Ok(())
}
