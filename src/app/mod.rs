//! Interaktive Werkzeug-Schicht: Gesten-Zustandsautomat, Werkzeuge,
//! Commit-Grenze.

pub mod apply;
pub mod gesture;
pub mod tools;

pub use apply::apply_edit;
pub use gesture::{EditorGesture, GestureOutcome, GesturePreview};
pub use tools::curve_arc::{CurvatureMode, CurveArcTool};
pub use tools::measure::{MeasureReading, MeasureTool};
pub use tools::outline::OutlineEditTool;
pub use tools::{snap_to_feature, EditProposal, SnapAnchor};
