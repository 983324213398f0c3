//! Direction offsets and edge predicates for a row-major grid.
//!
//! A flat index scan that steps by `-1` from column 0 lands on the previous
//! row's last column. The edge predicates here are what stop every scan
//! before it crosses a row or column boundary.

use serde::{Deserialize, Serialize};

/// Predicate telling whether a scan at `index` already sits on a boundary.
pub type EdgeGuard = fn(&Geometry, usize) -> bool;

/// Which pair of edge predicates guards the vertical axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VerticalGuard {
    /// Up is guarded by the top edge, down by the bottom edge.
    #[default]
    Corrected,
    /// Up is guarded by the right edge, down by the bottom edge. Upward
    /// vertical runs through the rightmost column never extend past the
    /// placed cell.
    Legacy,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Geometry {
    width: usize,
    height: usize,
}

impl Geometry {
    pub fn new(width: usize, height: usize) -> Self {
        Geometry { width, height }
    }

    pub fn len(&self) -> usize {
        self.width * self.height
    }

    pub fn left(&self) -> isize {
        -1
    }

    pub fn right(&self) -> isize {
        1
    }

    pub fn up(&self) -> isize {
        -(self.width as isize)
    }

    pub fn down(&self) -> isize {
        self.width as isize
    }

    pub fn touches_left(&self, index: usize) -> bool {
        index % self.width == 0
    }

    pub fn touches_right(&self, index: usize) -> bool {
        (index + 1) % self.width == 0
    }

    pub fn touches_top(&self, index: usize) -> bool {
        index < self.width
    }

    pub fn touches_bottom(&self, index: usize) -> bool {
        index >= self.len() - self.width
    }

    pub fn touches_top_left(&self, index: usize) -> bool {
        self.touches_top(index) || self.touches_left(index)
    }

    pub fn touches_top_right(&self, index: usize) -> bool {
        self.touches_top(index) || self.touches_right(index)
    }

    pub fn touches_bottom_left(&self, index: usize) -> bool {
        self.touches_bottom(index) || self.touches_left(index)
    }

    pub fn touches_bottom_right(&self, index: usize) -> bool {
        self.touches_bottom(index) || self.touches_right(index)
    }

    /// Offset `index` by `delta`, yielding `None` outside `0..len`.
    ///
    /// This only rejects indices past either end of the board. It does not
    /// detect row wrap; callers pair it with an [`EdgeGuard`].
    pub fn step(&self, index: usize, delta: isize) -> Option<usize> {
        let next = index.checked_add_signed(delta)?;
        (next < self.len()).then_some(next)
    }

    /// Neighbor of `index` in direction `delta`, unless `guard` says `index`
    /// is already on the boundary that direction would cross.
    pub fn neighbor(&self, index: usize, delta: isize, guard: EdgeGuard) -> Option<usize> {
        if guard(self, index) {
            return None;
        }
        self.step(index, delta)
    }

    /// The four orthogonal directions, each paired with its edge guard.
    pub fn orthogonal(&self) -> [(isize, EdgeGuard); 4] {
        [
            (self.left(), Geometry::touches_left as EdgeGuard),
            (self.right(), Geometry::touches_right as EdgeGuard),
            (self.up(), Geometry::touches_top as EdgeGuard),
            (self.down(), Geometry::touches_bottom as EdgeGuard),
        ]
    }

    /// The four scan axes in fixed order: horizontal, vertical, `\`, `/`.
    pub fn axes(&self, vertical_guard: VerticalGuard) -> [Axis; 4] {
        let (l, r, u, d) = (self.left(), self.right(), self.up(), self.down());
        let up_guard: EdgeGuard = match vertical_guard {
            VerticalGuard::Corrected => Geometry::touches_top,
            VerticalGuard::Legacy => Geometry::touches_right,
        };
        [
            Axis::new(l, r, Geometry::touches_left, Geometry::touches_right),
            Axis::new(u, d, up_guard, Geometry::touches_bottom),
            Axis::new(
                l + u,
                r + d,
                Geometry::touches_top_left,
                Geometry::touches_bottom_right,
            ),
            Axis::new(
                l + d,
                r + u,
                Geometry::touches_bottom_left,
                Geometry::touches_top_right,
            ),
        ]
    }
}

/// A line through a cell: two opposite offsets, each with its edge guard.
#[derive(Clone, Copy)]
pub struct Axis {
    pub dir1: isize,
    pub dir2: isize,
    pub guard1: EdgeGuard,
    pub guard2: EdgeGuard,
}

impl Axis {
    pub fn new(dir1: isize, dir2: isize, guard1: EdgeGuard, guard2: EdgeGuard) -> Self {
        Axis {
            dir1,
            dir2,
            guard1,
            guard2,
        }
    }

    /// Both directions of the axis, each with its guard
    pub fn directions(&self) -> [(isize, EdgeGuard); 2] {
        [(self.dir1, self.guard1), (self.dir2, self.guard2)]
    }
}

impl std::fmt::Debug for Axis {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Axis")
            .field("dir1", &self.dir1)
            .field("dir2", &self.dir2)
            .finish_non_exhaustive()
    }
}
