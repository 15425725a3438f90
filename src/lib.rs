//! Chip Layout Editor Library.
//! Geometrie-Kern als Library exportiert für Tests und Wiederverwendung.

pub mod app;
pub mod core;
pub mod shared;

pub use app::{
    apply_edit, snap_to_feature, CurvatureMode, CurveArcTool, EditProposal, EditorGesture,
    GestureOutcome, GesturePreview, MeasureReading, MeasureTool, OutlineEditTool, SnapAnchor,
};
pub use core::{
    curvature_about_point, curvature_through_point, find_candidate_centers, snap, ArcFigure,
    Camera2D, CellLayout, CurvatureResult, DesignGrid, Figure, NodeFigure, Outline, PortFigure,
    Segment, SnapCandidateSet, SnapResult, SpatialIndex, SpatialMatch,
};
pub use shared::EditorOptions;
