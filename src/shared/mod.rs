//! Editor-weite Optionen und Konstanten.

pub mod options;

pub use options::{EditorOptions, GRID_SPACING, SNAP_TOLERANCE};
