#![forbid(unsafe_code)]

//! Per-point style callbacks.

use cellplot_style::Style;

use crate::series::Point2D;

/// Boxed per-point style callback.
pub type StyleFn = Box<dyn Fn(&Point2D) -> Style + Send + Sync>;

/// Same style for every point.
pub fn uniform(style: Style) -> StyleFn {
    Box::new(move |_| style)
}

/// Style by y value: the first band whose upper bound is greater than the
/// point's y wins, otherwise `fallback`.
///
/// Bands are checked in the order given, so list them by ascending bound.
///
/// ```
/// use cellplot_chart::{Point2D, style_fn::threshold_style};
/// use cellplot_style::{Style, palette};
///
/// let load = threshold_style(
///     vec![(50.0, Style::new().bg(palette::GREEN)), (90.0, Style::new().bg(palette::YELLOW))],
///     Style::new().bg(palette::RED),
/// );
/// assert_eq!(load(&Point2D::new(0.0, 95.0)).bg, Some(palette::RED));
/// ```
pub fn threshold_style(bands: Vec<(f64, Style)>, fallback: Style) -> StyleFn {
    Box::new(move |p| {
        bands
            .iter()
            .find(|(upper, _)| p.y < *upper)
            .map_or(fallback, |(_, style)| *style)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use cellplot_style::palette;

    #[test]
    fn uniform_ignores_point() {
        let f = uniform(Style::new().fg(palette::TEAL));
        assert_eq!(f(&Point2D::new(1.0, 2.0)).fg, Some(palette::TEAL));
        assert_eq!(f(&Point2D::new(-9.0, 1e9)).fg, Some(palette::TEAL));
    }

    #[test]
    fn threshold_picks_first_band() {
        let f = threshold_style(
            vec![
                (50.0, Style::new().bg(palette::GREEN)),
                (60.0, Style::new().bg(palette::DARK_GREEN)),
                (90.0, Style::new().bg(palette::YELLOW)),
            ],
            Style::new().bg(palette::RED),
        );
        assert_eq!(f(&Point2D::new(0.0, 10.0)).bg, Some(palette::GREEN));
        assert_eq!(f(&Point2D::new(0.0, 50.0)).bg, Some(palette::DARK_GREEN));
        assert_eq!(f(&Point2D::new(0.0, 89.9)).bg, Some(palette::YELLOW));
        assert_eq!(f(&Point2D::new(0.0, 90.0)).bg, Some(palette::RED));
    }

    #[test]
    fn threshold_without_bands_is_fallback() {
        let f = threshold_style(Vec::new(), Style::new().bold());
        assert_eq!(f(&Point2D::default()), Style::new().bold());
    }
}
