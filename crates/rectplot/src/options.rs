//! Per-plot presentation options.

use serde::{Deserialize, Deserializer, de};

use rectplot_core::layout::DEFAULT_PAD_FACTOR;

/// What to draw and how to label it.
///
/// Deserializable so the `[plot]` section of a config file can change the
/// defaults; unspecified keys keep their default value.
///
/// ```
/// # use rectplot::PlotOptions;
/// let options = PlotOptions::default()
///     .with_title("Relative Position of Bounding Boxes")
///     .with_grid(false);
/// assert!(!options.show_grid());
/// assert!(options.equal_aspect());
/// ```
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PlotOptions {
    show_grid: bool,
    show_centers: bool,
    equal_aspect: bool,
    show_legend: bool,
    show_origin_axes: bool,
    title: String,
    xlabel: String,
    ylabel: String,
    #[serde(deserialize_with = "deserialize_pad_factor")]
    pad_factor: f64,
}

fn is_valid_pad_factor(factor: f64) -> bool {
    factor.is_finite() && factor >= 0.0
}

fn deserialize_pad_factor<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    let factor = f64::deserialize(deserializer)?;
    if is_valid_pad_factor(factor) {
        Ok(factor)
    } else {
        Err(de::Error::custom(format!(
            "pad_factor must be a finite number of at least 0, got {factor}"
        )))
    }
}

impl Default for PlotOptions {
    fn default() -> Self {
        Self {
            show_grid: true,
            show_centers: true,
            equal_aspect: true,
            show_legend: true,
            show_origin_axes: false,
            title: "Rectangle Plotter".to_string(),
            xlabel: "Left - Right Coordinates".to_string(),
            ylabel: "Back - Front Coordinates".to_string(),
            pad_factor: DEFAULT_PAD_FACTOR,
        }
    }
}

impl PlotOptions {
    pub fn show_grid(&self) -> bool {
        self.show_grid
    }

    pub fn show_centers(&self) -> bool {
        self.show_centers
    }

    pub fn equal_aspect(&self) -> bool {
        self.equal_aspect
    }

    pub fn show_legend(&self) -> bool {
        self.show_legend
    }

    /// Faint reference lines along x = 0 and y = 0.
    pub fn show_origin_axes(&self) -> bool {
        self.show_origin_axes
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn xlabel(&self) -> &str {
        &self.xlabel
    }

    pub fn ylabel(&self) -> &str {
        &self.ylabel
    }

    /// Fraction of the data range added on each side of an axis.
    pub fn pad_factor(&self) -> f64 {
        self.pad_factor
    }

    pub fn with_grid(mut self, show: bool) -> Self {
        self.show_grid = show;
        self
    }

    pub fn with_centers(mut self, show: bool) -> Self {
        self.show_centers = show;
        self
    }

    pub fn with_equal_aspect(mut self, equal: bool) -> Self {
        self.equal_aspect = equal;
        self
    }

    pub fn with_legend(mut self, show: bool) -> Self {
        self.show_legend = show;
        self
    }

    pub fn with_origin_axes(mut self, show: bool) -> Self {
        self.show_origin_axes = show;
        self
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn with_xlabel(mut self, xlabel: impl Into<String>) -> Self {
        self.xlabel = xlabel.into();
        self
    }

    pub fn with_ylabel(mut self, ylabel: impl Into<String>) -> Self {
        self.ylabel = ylabel.into();
        self
    }

    /// Sets the pad factor; negative or non-finite values fall back to the default.
    pub fn with_pad_factor(mut self, factor: f64) -> Self {
        self.pad_factor = if is_valid_pad_factor(factor) {
            factor
        } else {
            DEFAULT_PAD_FACTOR
        };
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let options = PlotOptions::default();
        assert!(options.show_grid());
        assert!(options.show_centers());
        assert!(options.equal_aspect());
        assert!(options.show_legend());
        assert!(!options.show_origin_axes());
        assert_eq!(options.title(), "Rectangle Plotter");
        assert_eq!(options.xlabel(), "Left - Right Coordinates");
        assert_eq!(options.ylabel(), "Back - Front Coordinates");
        assert_eq!(options.pad_factor(), 0.1);
    }

    #[test]
    fn test_builders() {
        let options = PlotOptions::default()
            .with_centers(false)
            .with_equal_aspect(false)
            .with_legend(false)
            .with_origin_axes(true)
            .with_xlabel("x")
            .with_ylabel("y")
            .with_pad_factor(0.25);

        assert!(!options.show_centers());
        assert!(!options.equal_aspect());
        assert!(!options.show_legend());
        assert!(options.show_origin_axes());
        assert_eq!(options.xlabel(), "x");
        assert_eq!(options.ylabel(), "y");
        assert_eq!(options.pad_factor(), 0.25);
    }

    #[test]
    fn test_invalid_pad_factor_falls_back() {
        assert_eq!(PlotOptions::default().with_pad_factor(-1.0).pad_factor(), 0.1);
        assert_eq!(PlotOptions::default().with_pad_factor(f64::NAN).pad_factor(), 0.1);
    }

    #[test]
    fn test_pad_factor_checked_when_deserialized() {
        let options: PlotOptions = toml::from_str("pad_factor = 0.25").unwrap();
        assert_eq!(options.pad_factor(), 0.25);

        let err = toml::from_str::<PlotOptions>("pad_factor = -0.6").unwrap_err();
        assert!(err.to_string().contains("pad_factor must be"));
        assert!(toml::from_str::<PlotOptions>("pad_factor = nan").is_err());
        assert!(toml::from_str::<PlotOptions>("pad_factor = inf").is_err());
    }
}
