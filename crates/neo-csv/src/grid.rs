//! In-memory container for a windowed raster extract.

/// A windowed raster extract in row-major order.
///
/// `None` marks cells where the archive had no retrieval, either because the
/// source row carried the no-data sentinel or because the row was too short.
#[derive(Debug, Clone, PartialEq)]
pub struct RegionGrid {
    pub data: Vec<Option<f64>>,
    pub width: usize,
    pub height: usize,
}

impl RegionGrid {
    /// Create a grid from row-major data.
    pub fn new(width: usize, height: usize, data: Vec<Option<f64>>) -> Self {
        debug_assert_eq!(data.len(), width * height);
        Self {
            data,
            width,
            height,
        }
    }

    /// Value at (row, col), if present and in range.
    pub fn get(&self, row: usize, col: usize) -> Option<f64> {
        if row >= self.height || col >= self.width {
            return None;
        }
        self.data[row * self.width + col]
    }

    /// Number of cells with a present value.
    pub fn present_count(&self) -> usize {
        self.data.iter().filter(|value| value.is_some()).count()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}
