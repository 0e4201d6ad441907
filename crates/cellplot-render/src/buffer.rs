#![forbid(unsafe_code)]

//! Buffer grid storage.
//!
//! The [`Buffer`] is the drawable surface every widget renders into: a 2D
//! grid of [`Cell`]s with cell-level set/get and a scissor stack for
//! clipping.
//!
//! # Invariants
//!
//! 1. `cells.len() == width * height`
//! 2. Width and height never change after creation
//! 3. Pushing a scissor never enlarges the clip region
//! 4. The scissor stack always holds at least the full-buffer rect

use crate::cell::Cell;
use cellplot_core::geometry::Rect;

/// A 2D grid of terminal cells.
///
/// # Example
///
/// ```
/// use cellplot_render::buffer::Buffer;
/// use cellplot_render::cell::Cell;
///
/// let mut buffer = Buffer::new(80, 24);
/// buffer.set(0, 0, Cell::from_char('H'));
/// buffer.set(1, 0, Cell::from_char('i'));
/// assert_eq!(buffer.get(1, 0).and_then(|c| c.symbol()), Some('i'));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Buffer {
    width: u16,
    height: u16,
    cells: Vec<Cell>,
    scissor_stack: Vec<Rect>,
}

impl Buffer {
    /// Create a new buffer filled with default cells.
    ///
    /// # Panics
    ///
    /// Panics if width or height is 0.
    pub fn new(width: u16, height: u16) -> Self {
        assert!(width > 0, "buffer width must be > 0");
        assert!(height > 0, "buffer height must be > 0");

        let size = width as usize * height as usize;
        Self {
            width,
            height,
            cells: vec![Cell::default(); size],
            scissor_stack: vec![Rect::from_size(width, height)],
        }
    }

    /// Buffer width in cells.
    #[inline]
    pub const fn width(&self) -> u16 {
        self.width
    }

    /// Buffer height in cells.
    #[inline]
    pub const fn height(&self) -> u16 {
        self.height
    }

    /// Total number of cells.
    #[inline]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Always false for a constructed buffer.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Bounding rect of the entire buffer.
    #[inline]
    pub const fn bounds(&self) -> Rect {
        Rect::from_size(self.width, self.height)
    }

    #[inline]
    fn index(&self, x: u16, y: u16) -> Option<usize> {
        if x < self.width && y < self.height {
            Some(y as usize * self.width as usize + x as usize)
        } else {
            None
        }
    }

    /// Cell at (x, y), or `None` out of bounds.
    #[inline]
    pub fn get(&self, x: u16, y: u16) -> Option<&Cell> {
        self.index(x, y).map(|i| &self.cells[i])
    }

    /// Mutable cell at (x, y), or `None` out of bounds.
    #[inline]
    pub fn get_mut(&mut self, x: u16, y: u16) -> Option<&mut Cell> {
        self.index(x, y).map(|i| &mut self.cells[i])
    }

    /// Clear the other half of any wide glyph that (x, y) belongs to.
    fn release_wide(&mut self, x: u16, y: u16) {
        let Some(idx) = self.index(x, y) else { return };
        let current = self.cells[idx];

        if current.content.width() > 1 {
            for i in 1..current.content.width() as u16 {
                if let Some(tail) = self.index(x.saturating_add(i), y)
                    && self.cells[tail].is_continuation()
                {
                    self.cells[tail] = Cell::default();
                }
            }
        } else if current.is_continuation() && x > 0 {
            let mut head_x = x;
            while head_x > 0 {
                head_x -= 1;
                let Some(h) = self.index(head_x, y) else { break };
                if !self.cells[h].is_continuation() {
                    let width = self.cells[h].content.width() as u16;
                    if head_x + width > x {
                        self.cells[h] = Cell::default();
                        for i in 1..width {
                            if let Some(t) = self.index(head_x + i, y)
                                && self.cells[t].is_continuation()
                            {
                                self.cells[t] = Cell::default();
                            }
                        }
                    }
                    break;
                }
            }
        }
    }

    /// Set the cell at (x, y).
    ///
    /// - Does nothing outside the buffer or the current scissor rect
    /// - Composites the new background over the existing one, so a
    ///   transparent background keeps whatever was drawn below
    /// - Wide glyphs are written atomically: if the tail does not fit,
    ///   nothing is written
    #[inline]
    pub fn set(&mut self, x: u16, y: u16, cell: Cell) {
        let width = cell.content.width().max(1) as u16;
        let scissor = self.current_scissor();

        for i in 0..width {
            let cx = x.saturating_add(i);
            if self.index(cx, y).is_none() || !scissor.contains(cx, y) {
                return;
            }
        }

        for i in 0..width {
            self.release_wide(x + i, y);
        }

        let idx = y as usize * self.width as usize + x as usize;
        let existing_bg = self.cells[idx].bg;
        self.cells[idx] = Cell {
            bg: cell.bg.over(existing_bg),
            ..cell
        };
        for i in 1..width {
            let tail = y as usize * self.width as usize + (x + i) as usize;
            self.cells[tail] = Cell::CONTINUATION;
        }
    }

    /// Fill a rectangular region with the given cell, respecting the scissor.
    pub fn fill(&mut self, rect: Rect, cell: Cell) {
        let clipped = self.current_scissor().intersection(&rect);
        for y in clipped.y..clipped.bottom() {
            for x in clipped.x..clipped.right() {
                self.set(x, y, cell);
            }
        }
    }

    /// Reset every cell to the default.
    pub fn clear(&mut self) {
        self.cells.fill(Cell::default());
    }

    /// Raw access to the cells, row-major.
    #[inline]
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Cells of one row. Empty slice when `y` is out of bounds.
    pub fn row_cells(&self, y: u16) -> &[Cell] {
        if y >= self.height {
            return &[];
        }
        let start = y as usize * self.width as usize;
        &self.cells[start..start + self.width as usize]
    }

    /// Restrict subsequent writes to `rect` (intersected with the current clip).
    pub fn push_scissor(&mut self, rect: Rect) {
        let clipped = self.current_scissor().intersection(&rect);
        self.scissor_stack.push(clipped);
    }

    /// Undo the last [`push_scissor`](Self::push_scissor). The base clip is never popped.
    pub fn pop_scissor(&mut self) {
        if self.scissor_stack.len() > 1 {
            self.scissor_stack.pop();
        }
    }

    /// The active clip rectangle.
    #[inline]
    pub fn current_scissor(&self) -> Rect {
        self.scissor_stack
            .last()
            .copied()
            .unwrap_or_else(|| self.bounds())
    }

    /// Number of scissor rects on the stack (1 = no clipping beyond bounds).
    #[inline]
    pub fn scissor_depth(&self) -> usize {
        self.scissor_stack.len()
    }
}
