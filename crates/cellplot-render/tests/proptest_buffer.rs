//! Property-based invariants for `Buffer` writes and clipping.

use cellplot_core::geometry::Rect;
use cellplot_render::buffer::Buffer;
use cellplot_render::cell::Cell;
use cellplot_render::present::buffer_to_text;
use proptest::prelude::*;

proptest! {
    #[test]
    fn writes_never_change_dimensions(
        w in 1u16..60,
        h in 1u16..40,
        writes in prop::collection::vec((0u16..120, 0u16..80), 0..64),
    ) {
        let mut buf = Buffer::new(w, h);
        for (x, y) in writes {
            buf.set(x, y, Cell::from_char('*'));
        }
        prop_assert_eq!(buf.len(), w as usize * h as usize);
        prop_assert_eq!(buffer_to_text(&buf).lines().count(), h as usize);
    }

    #[test]
    fn scissor_blocks_outside_writes(
        sx in 0u16..20, sy in 0u16..20, sw in 0u16..20, sh in 0u16..20,
        x in 0u16..40, y in 0u16..40,
    ) {
        let mut buf = Buffer::new(40, 40);
        let clip = Rect::new(sx, sy, sw, sh);
        buf.push_scissor(clip);
        buf.set(x, y, Cell::from_char('#'));
        let written = !buf.get(x, y).map_or(true, Cell::is_empty);
        prop_assert_eq!(written, clip.contains(x, y));
    }

    #[test]
    fn scissor_depth_balances(pushes in 0usize..10) {
        let mut buf = Buffer::new(10, 10);
        for i in 0..pushes {
            buf.push_scissor(Rect::new(i as u16, 0, 10, 10));
        }
        prop_assert_eq!(buf.scissor_depth(), pushes + 1);
        for _ in 0..pushes + 3 {
            buf.pop_scissor();
        }
        prop_assert_eq!(buf.scissor_depth(), 1);
        prop_assert_eq!(buf.current_scissor(), buf.bounds());
    }
}
