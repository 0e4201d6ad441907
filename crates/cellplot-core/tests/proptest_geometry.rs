//! Property tests for `Rect` invariants the plot layout relies on.

use cellplot_core::geometry::{Rect, Sides};
use proptest::prelude::*;

fn small_rect() -> impl Strategy<Value = Rect> {
    (0u16..=500, 0u16..=500, 0u16..=500, 0u16..=500).prop_map(|(x, y, w, h)| Rect::new(x, y, w, h))
}

proptest! {
    #[test]
    fn intersection_commutative(a in small_rect(), b in small_rect()) {
        prop_assert_eq!(a.intersection(&b), b.intersection(&a));
    }

    #[test]
    fn intersection_fits_within_both(a in small_rect(), b in small_rect()) {
        let i = a.intersection(&b);
        if !i.is_empty() {
            prop_assert!(i.x >= a.x && i.right() <= a.right());
            prop_assert!(i.y >= b.y && i.bottom() <= b.bottom());
        }
    }

    #[test]
    fn contains_agrees_with_intersection(a in small_rect(), b in small_rect(), px in 0u16..1000, py in 0u16..1000) {
        let i = a.intersection(&b);
        prop_assert_eq!(i.contains(px, py), a.contains(px, py) && b.contains(px, py));
    }

    #[test]
    fn inner_never_grows(r in small_rect(), m in 0u16..50) {
        let inner = r.inner(Sides::all(m));
        prop_assert!(inner.width <= r.width);
        prop_assert!(inner.height <= r.height);
    }

    #[test]
    fn extreme_values_do_not_panic(x in any::<u16>(), y in any::<u16>(), w in any::<u16>(), h in any::<u16>()) {
        let r = Rect::new(x, y, w, h);
        let _ = r.right();
        let _ = r.bottom();
        let _ = r.area();
        let _ = r.inner(Sides::all(1));
        let _ = r.row(h / 2);
    }
}
