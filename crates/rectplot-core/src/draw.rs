//! Drawable components for plot rendering.
//!
//! Every visual element of a plot implements the [`Drawable`] trait, which
//! renders it into a [`LayeredOutput`] at a given canvas position. Layers are
//! ordered during final SVG generation, see [`RenderLayer`].
mod layer;
mod marker;
mod shape;
mod stroke;
mod text;

pub use layer::{LayeredOutput, RenderLayer, SvgNode};
pub use marker::{Marker, MarkerStyle};
pub use shape::{BoxShape, Segment};
pub use stroke::{StrokeDefinition, StrokeStyle};
pub use text::{Text, TextAnchor, TextDefinition};

use crate::geometry::{Point, Size};

/// Trait for plot elements that can be rendered to SVG layers.
pub trait Drawable: std::fmt::Debug {
    /// Renders this drawable to one or more layers.
    ///
    /// The meaning of `position` is up to the implementation; shapes and
    /// markers treat it as their center, text as its anchor point.
    fn render_to_layers(&self, position: Point) -> LayeredOutput;

    /// Returns the canvas footprint of this drawable.
    fn size(&self) -> Size;
}
