//! Built-in demonstration plots.
//!
//! Each [`Demo`] builds a ready-to-render [`Session`] together with the plot
//! options and the file name it is written to.

use rectplot_core::{
    color::Color,
    rectangle::{Coords, RectangleStyle},
};

use crate::{PlotOptions, RectplotError, Session};

/// The available demonstrations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Demo {
    /// An outer and an inner bounding box.
    NestedBoxes,
    /// Seven overlapping rectangles, some partly negative.
    MultipleRectangles,
}

impl Demo {
    pub const ALL: [Demo; 2] = [Demo::NestedBoxes, Demo::MultipleRectangles];

    /// File name of the rendered demo, relative to the output directory.
    pub fn file_name(&self) -> &'static str {
        match self {
            Self::NestedBoxes => "boxes_plot.png",
            Self::MultipleRectangles => "multiple_rectangles.png",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Self::NestedBoxes => "Relative Position of Bounding Boxes",
            Self::MultipleRectangles => "Multiple Rectangles Example",
        }
    }

    /// Builds the session and options for this demo on top of `base` options.
    ///
    /// # Errors
    ///
    /// Only fails if the built-in data is invalid.
    pub fn build(&self, base: &PlotOptions) -> Result<(Session, PlotOptions), RectplotError> {
        let mut session = Session::new();
        match self {
            Self::NestedBoxes => {
                for (coords, color, label) in [
                    ((-0.70, 4.30, -0.01, 3.78), "blue", "Box 1 (Outer)"),
                    ((-0.38, 0.52, 1.46, 3.46), "red", "Box 2 (Inner)"),
                ] {
                    session.add_rectangle(
                        Coords::from(coords),
                        Some(RectangleStyle::new(parse_color(color)?)),
                        Some(label.to_string()),
                    )?;
                }
            }
            Self::MultipleRectangles => {
                let rects: Vec<Coords> = [
                    (1.0, 5.0, 2.0, 6.0),
                    (3.0, 8.0, 1.0, 4.0),
                    (6.0, 9.0, 3.0, 7.0),
                    (0.0, 2.0, 0.0, 3.0),
                    (-3.0, -1.0, -2.0, 1.0),
                    (4.0, 7.0, -1.0, 2.0),
                    (-2.0, 1.0, 4.0, 6.0),
                ]
                .into_iter()
                .map(Coords::from)
                .collect();
                let colors = ["red", "blue", "green", "orange", "purple", "brown", "pink"]
                    .into_iter()
                    .map(parse_color)
                    .collect::<Result<Vec<_>, _>>()?;
                let labels: Vec<String> = ('A'..='G')
                    .map(|letter| format!("Rectangle {letter}"))
                    .collect();
                session.add_rectangles_from_list(&rects, &colors, &labels)?;
            }
        }

        let options = base.clone().with_title(self.title());
        Ok((session, options))
    }
}

fn parse_color(name: &str) -> Result<Color, RectplotError> {
    Color::new(name).map_err(RectplotError::Color)
}
