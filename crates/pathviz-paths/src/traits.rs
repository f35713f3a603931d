use pathviz_core::Grid;

/// Receives the grid after every expansion and reconstruction step.
///
/// The grid is lent read-only; observers render it and may raise a
/// [`Cancel`](crate::Cancel) flag, but never edit nodes.
pub trait Observer {
    fn step(&mut self, grid: &Grid);
}

impl<F: FnMut(&Grid)> Observer for F {
    #[inline]
    fn step(&mut self, grid: &Grid) {
        self(grid)
    }
}

/// An observer that ignores every step.
#[derive(Clone, Copy, Debug, Default)]
pub struct Silent;

impl Observer for Silent {
    #[inline]
    fn step(&mut self, _grid: &Grid) {}
}
