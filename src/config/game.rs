/// Shared game configuration constants.
///
/// This module defines the parameters common to both puzzle boards,
/// such as the default grid dimension.

/// Number of rows (and columns) of a freshly generated grid.
pub const GRID_SIZE: usize = 8;

/// Points awarded per scoring unit (one explosion, or one matched tile).
pub const POINTS_PER_UNIT: u32 = 10;
