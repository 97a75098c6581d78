// File: crates/chart-core/src/lib.rs
// Summary: Core library entry point; exports public API for chart construction and rendering.

pub mod chart;
pub mod figure;
pub mod series;
pub mod axis;
pub mod grid;
pub mod types;
pub mod geometry;
pub mod scale;
pub mod view;
pub mod theme;
pub mod text;
pub mod overlay;

pub use chart::{Chart, RenderOptions};
pub use figure::{Figure, PanelLayout, RenderError};
pub use series::{Marker, Series, SeriesType, YAxisSide};
pub use axis::{Axis, TickFormat, TickSpec};
pub use view::ViewState;
pub use theme::{hex, Theme};
pub use text::TextShaper;
pub use overlay::{Annotation, BoxAnchor, Legend, LegendPosition, RefLine, TextBox};
pub use skia_safe::Color;
