//! Core-Domänentypen: Geometrie-Primitive, Krümmungs-Solver, Snapping,
//! Zellgeometrie, Kamera, Spatial-Index.

pub mod camera;
pub mod cell;
/// Krümmungs-Solver: signierter Radius aus Sehnen-Endpunkten + Referenzpunkt
///
/// Dieses Modul enthält die beiden Gesten-Semantiken:
/// - curvature_about_point: Zeiger bestimmt die Richtung der Kreismitte
/// - curvature_through_point: Arc verläuft durch die Zeiger-Position
pub mod curvature;
pub mod figure;
pub mod geometry;
pub mod grid;
pub mod snap;
pub mod spatial;

pub use camera::Camera2D;
pub use cell::CellLayout;
pub use curvature::{
    circle_through_points, curvature_about_point, curvature_through_point, find_candidate_centers,
    CurvatureResult,
};
pub use figure::{ArcFigure, Figure, NodeFigure, Outline, PortFigure};
pub use geometry::{manhattan_distance, Segment, GEOM_EPS};
pub use grid::DesignGrid;
pub use snap::{snap, SnapCandidateSet, SnapResult};
pub use spatial::{SpatialIndex, SpatialMatch};
