#![forbid(unsafe_code)]

//! Axis label formatters.
//!
//! A formatter turns one axis value into display text. Label widths are
//! measured in terminal cells, so formatters are free to emit any Unicode.

/// Boxed label formatter.
pub type LabelFn = Box<dyn Fn(f64) -> String + Send + Sync>;

/// Left-aligned, six cells wide, two decimals: `"3.14  "`.
pub fn default_label(value: f64) -> String {
    format!("{value:<6.2}")
}

/// The formatter a new plot starts with.
pub fn default_formatter() -> LabelFn {
    Box::new(default_label)
}

/// Fixed decimals, no padding.
pub fn decimal(precision: usize) -> LabelFn {
    Box::new(move |v| format!("{v:.precision$}"))
}

/// Fixed decimals, left-aligned in `width` cells.
pub fn padded_decimal(width: usize, precision: usize) -> LabelFn {
    Box::new(move |v| format!("{v:<width$.precision$}"))
}

/// Fixed decimals with a trailing percent sign.
pub fn percent(precision: usize) -> LabelFn {
    Box::new(move |v| format!("{v:.precision$}%"))
}

/// Rounded to the nearest integer.
pub fn integer() -> LabelFn {
    Box::new(|v| format!("{}", v.round() as i64))
}

const SECONDS_PER_DAY: i64 = 86_400;

/// Unix seconds rendered as `HH:MM` (UTC).
pub fn clock_hh_mm() -> LabelFn {
    Box::new(|v| {
        let of_day = (v.floor() as i64).rem_euclid(SECONDS_PER_DAY);
        format!("{:02}:{:02}", of_day / 3600, (of_day % 3600) / 60)
    })
}
