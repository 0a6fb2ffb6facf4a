//! Geometry bridge between discrete grid coordinates and rendered pixels.
//!
//! The same functions serve the root grid and every nested sub-grid: each
//! level resolves its own [`GridMetrics`] from its own tracks and container
//! size, then converts pointer positions into grid lines and back.
//!
//! # Architecture
//!
//! 1. **Track resolution**: live tracks + container size -> per-track pixel sizes
//! 2. **Metrics**: cumulative offsets, pointer -> line, pixel size -> span
//! 3. **Sessions**: the drag/resize state machine that turns pointer events
//!    into a single layout patch on commit
//!
//! # Example
//!
//! ```
//! use gridkit_core::GridSetting;
//! use gridkit_layout::{GridCoord, GridMetrics, GridSpan};
//!
//! let metrics = GridMetrics::resolve(&GridSetting::new(4, 2, 4), 448.0, 216.0);
//! let rect = metrics.indicator_rectangle(GridCoord::new(2, 1), GridSpan::new(2, 1));
//! assert_eq!(metrics.coordinate_from_pixel(rect.position(), GridSpan::new(2, 1)), GridCoord::new(2, 1));
//! ```

mod bounds;
mod metrics;
mod resolve;
mod session;

pub use bounds::Bounds;
pub use metrics::{track_position, AxisMetrics, GridCoord, GridMetrics, GridSpan};
pub use resolve::{gap_px, resolve_track_sizes, REM_PX, SPACING_UNIT_PX};
pub use session::{ActiveDrag, DragCommit, DragMode, DragSession, DragStart, GridLevel};
