//! Fixed viewport dimensions.

use crate::Cell;

/// Height and width of the rendering viewport.
///
/// Bounds only shape snapshots and the initial centering; they never constrain
/// which cells may be alive.
#[derive(Copy, Clone, Hash, Eq, PartialEq, Debug)]
pub struct Bounds {
    pub height: usize,
    pub width: usize,
}

impl Bounds {
    pub const fn new(height: usize, width: usize) -> Self {
        Self { height, width }
    }

    /// Whether `cell` falls inside `[0, height) x [0, width)`.
    #[must_use]
    pub fn contains(self, cell: Cell) -> bool {
        usize::try_from(cell.row).is_ok_and(|row| row < self.height)
            && usize::try_from(cell.col).is_ok_and(|col| col < self.width)
    }

    #[must_use]
    pub const fn area(self) -> usize {
        self.height * self.width
    }
}

impl Default for Bounds {
    fn default() -> Self {
        Self::new(100, 100)
    }
}

impl From<(usize, usize)> for Bounds {
    fn from((height, width): (usize, usize)) -> Self {
        Self::new(height, width)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contains() {
        let bounds = Bounds::new(4, 6);

        assert!(bounds.contains(Cell::new(0, 0)));
        assert!(bounds.contains(Cell::new(3, 5)));

        // Out of bounds
        assert!(!bounds.contains(Cell::new(-1, 0)));
        assert!(!bounds.contains(Cell::new(0, -1)));
        assert!(!bounds.contains(Cell::new(4, 0)));
        assert!(!bounds.contains(Cell::new(0, 6)));
    }

    #[test]
    fn test_from_tuple_is_height_then_width() {
        let bounds = Bounds::from((3, 8));
        assert_eq!(bounds, Bounds::new(3, 8));
        assert!(bounds.contains(Cell::new(2, 7)));
        assert!(!bounds.contains(Cell::new(7, 2)));
    }

    #[test]
    fn test_zero_sized_contains_nothing() {
        let bounds = Bounds::new(0, 0);
        assert!(!bounds.contains(Cell::new(0, 0)));
        assert_eq!(bounds.area(), 0);
    }
}
