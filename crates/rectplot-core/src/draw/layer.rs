//! Layer-based rendering for SVG output.
//!
//! Drawables emit their SVG nodes into a [`LayeredOutput`], tagging each node
//! with the [`RenderLayer`] it belongs to. Rendering groups the nodes per
//! layer, bottom to top, so grid lines never cover a rectangle outline and
//! labels always stay readable.
//!
//! # Example
//!
//! ```
//! # use rectplot_core::draw::{RenderLayer, LayeredOutput};
//! # use svg::node::element::{Line, Rectangle, Text};
//! let mut output = LayeredOutput::new();
//!
//! output.add_to_layer(RenderLayer::Content, Box::new(Rectangle::new()));
//! output.add_to_layer(RenderLayer::Grid, Box::new(Line::new()));
//! output.add_to_layer(RenderLayer::Text, Box::new(Text::new("Box 1")));
//!
//! // One group per layer, grid first
//! let svg_nodes = output.render();
//! assert_eq!(svg_nodes.len(), 3);
//! ```

use svg::node::element as svg_element;

/// Type alias for boxed SVG nodes.
pub type SvgNode = Box<dyn svg::Node>;

/// Rendering layers of a plot.
///
/// The `Ord` derive follows declaration order: the first variant renders
/// first (bottom), the last renders on top.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum RenderLayer {
    /// Figure and axes background fills
    Background,
    /// Grid lines
    Grid,
    /// Axes frame, origin lines and tick marks
    Axes,
    /// Rectangle outlines and fills
    Content,
    /// Center markers
    Marker,
    /// Tick labels, axis labels and title
    Text,
    /// Legend box and entries
    Legend,
}

impl RenderLayer {
    /// Returns the value of the `data-layer` attribute for this layer.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Background => "background",
            Self::Grid => "grid",
            Self::Axes => "axes",
            Self::Content => "content",
            Self::Marker => "marker",
            Self::Text => "text",
            Self::Legend => "legend",
        }
    }
}

/// SVG nodes grouped by rendering layer.
#[derive(Debug, Default)]
pub struct LayeredOutput {
    items: Vec<(RenderLayer, SvgNode)>,
}

impl LayeredOutput {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a node to the given layer.
    pub fn add_to_layer(&mut self, layer: RenderLayer, node: SvgNode) {
        self.items.push((layer, node));
    }

    /// Moves all nodes of `other` into this output, keeping their layers.
    pub fn merge(&mut self, other: LayeredOutput) {
        self.items.extend(other.items);
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Moves every node onto `layer`, keeping their relative order.
    ///
    /// Composite elements such as the legend use this to stack their text
    /// above their own background.
    pub fn into_layer(mut self, layer: RenderLayer) -> LayeredOutput {
        for item in &mut self.items {
            item.0 = layer;
        }
        self
    }

    /// Returns the number of nodes on `layer`.
    pub fn layer_len(&self, layer: RenderLayer) -> usize {
        self.items.iter().filter(|(l, _)| *l == layer).count()
    }

    /// Renders all layers to SVG groups, consuming the output.
    ///
    /// Each non-empty layer becomes a `<g data-layer="...">` element. Nodes
    /// keep their insertion order within a layer.
    pub fn render(mut self) -> Vec<SvgNode> {
        if self.is_empty() {
            return Vec::new();
        }

        // Stable sort keeps insertion order inside a layer
        self.items.sort_by_key(|(layer, _)| *layer);

        let mut result = Vec::new();
        let mut current_layer = self.items[0].0;
        let mut current_group = svg_element::Group::new().set("data-layer", current_layer.name());

        for (layer, node) in self.items {
            if layer != current_layer {
                result.push(Box::new(current_group) as SvgNode);

                current_layer = layer;
                current_group = svg_element::Group::new().set("data-layer", layer.name());
            }

            current_group = current_group.add(node);
        }

        result.push(Box::new(current_group) as SvgNode);

        result
    }
}

#[cfg(test)]
mod tests {
    use svg::node::element::{Line, Rectangle};

    use super::*;

    #[test]
    fn test_layered_output_new_is_empty() {
        let output = LayeredOutput::new();
        assert!(output.is_empty());
        assert!(output.render().is_empty());
    }

    #[test]
    fn test_layered_output_merge() {
        let mut output1 = LayeredOutput::new();
        output1.add_to_layer(RenderLayer::Content, Box::new(Rectangle::new()));

        let mut output2 = LayeredOutput::new();
        output2.add_to_layer(RenderLayer::Marker, Box::new(Line::new()));
        output2.add_to_layer(RenderLayer::Marker, Box::new(Line::new()));

        output1.merge(output2);
        assert_eq!(output1.layer_len(RenderLayer::Marker), 2);
        assert_eq!(output1.render().len(), 2);
    }

    #[test]
    fn test_layered_output_same_layer_single_group() {
        let mut output = LayeredOutput::new();
        output.add_to_layer(RenderLayer::Content, Box::new(Rectangle::new()));
        output.add_to_layer(RenderLayer::Content, Box::new(Rectangle::new()));

        assert_eq!(output.render().len(), 1);
    }

    #[test]
    fn test_into_layer_retags_all_nodes() {
        let mut output = LayeredOutput::new();
        output.add_to_layer(RenderLayer::Background, Box::new(Rectangle::new()));
        output.add_to_layer(RenderLayer::Text, Box::new(Line::new()));

        let output = output.into_layer(RenderLayer::Legend);
        assert_eq!(output.layer_len(RenderLayer::Legend), 2);
        assert_eq!(output.layer_len(RenderLayer::Text), 0);

        let document = output
            .render()
            .into_iter()
            .fold(svg::Document::new(), |doc, node| doc.add(node))
            .to_string();
        assert!(document.find("<rect").unwrap() < document.find("<line").unwrap());
    }

    #[test]
    fn test_layers_render_bottom_to_top() {
        let mut output = LayeredOutput::new();
        output.add_to_layer(RenderLayer::Legend, Box::new(Rectangle::new()));
        output.add_to_layer(RenderLayer::Grid, Box::new(Line::new()));
        output.add_to_layer(RenderLayer::Content, Box::new(Rectangle::new()));

        let document = output
            .render()
            .into_iter()
            .fold(svg::Document::new(), |doc, node| doc.add(node))
            .to_string();

        let grid = document.find("data-layer=\"grid\"").unwrap();
        let content = document.find("data-layer=\"content\"").unwrap();
        let legend = document.find("data-layer=\"legend\"").unwrap();
        assert!(grid < content);
        assert!(content < legend);
    }
}
