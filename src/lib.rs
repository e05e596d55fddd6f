//! venn3
//!
//! Computes the seven regions of a three-set Venn diagram and renders the
//! diagram to an SVG or PNG file.
//!
//! # Features
//!
//! - **Region calculator**: deterministic partition of `A ∪ B ∪ C` into the
//!   seven membership regions (see [`sets`])
//! - **Renderer**: symmetric three-circle layout with labels, colors and
//!   region annotations, written as SVG or rasterized to PNG (`png` feature,
//!   on by default)
//! - **Driver**: the reference job and a single-call entry point (see
//!   [`driver`])
//!
//! # Example
//!
//! ```no_run
//! use venn3::{DisplayOptions, RenderConfig, Renderer, VennSets};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let sets = VennSets::from_lists(&["A", "B", "C"], &["B", "C", "D"], &["C", "E"]);
//! let options = DisplayOptions {
//!     labels: ["Left".into(), "Right".into(), "Bottom".into()],
//!     colors: ["#E41A1C".into(), "#377EB8".into(), "#FFAB52".into()],
//!     bold_labels: true,
//!     save_path: "venn.png".into(),
//! };
//!
//! let renderer = venn3::new_renderer(RenderConfig::default())?;
//! let written = renderer.plot_venn3(&sets, &options)?;
//! println!("wrote {}", written.display());
//! # Ok(())
//! # }
//! ```

use std::path::{Path, PathBuf};

use log::info;
use serde::{Deserialize, Serialize};

pub mod error;
pub use error::{Error, Result};

pub mod sets;
pub use sets::{Region, Regions, VennSets};

// Layout, paint commands and SVG/PNG output
pub mod rendering;

// Default backend
pub mod svg;
pub use svg::SvgRenderer;

// Reference job and the single-call driver
pub mod driver;
pub use driver::DiagramJob;

/// Canvas dimensions in pixels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Viewport {
    pub width: u32,
    pub height: u32,
}

impl Default for Viewport {
    fn default() -> Self {
        Self {
            width: 640,
            height: 480,
        }
    }
}

/// What to print inside each region
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RegionText {
    /// Number of elements in the region
    #[default]
    Count,
    /// The elements themselves, sorted and comma separated
    ///
    /// The circles are sized to the canvas and labels only, not to this
    /// text. Long element lists can run past the circle edges, especially on
    /// small canvases; lower `region_font_size` or enlarge the viewport.
    Elements,
}

/// Renderer defaults
///
/// Everything here is cosmetic and independent of the sets being drawn. The
/// defaults mirror a typical plotting canvas:
/// - 640x480 pixels
/// - translucent fills (`fill_opacity` 0.4) so overlaps stay visible
///
/// # Examples
///
/// ```
/// let cfg = venn3::RenderConfig::default();
/// assert_eq!(cfg.viewport.width, 640);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RenderConfig {
    /// Canvas size
    pub viewport: Viewport,
    /// Font family used for all text
    pub font_family: String,
    /// Opacity of circle fills, in `[0, 1]`
    pub fill_opacity: f32,
    /// Region annotation style
    pub region_text: RegionText,
    /// Font size of set labels in pixels
    pub label_font_size: f32,
    /// Font size of region annotations in pixels
    pub region_font_size: f32,
    /// Optional title drawn above the diagram
    pub title: Option<String>,
    /// Background color (hex)
    pub background: String,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            viewport: Viewport::default(),
            font_family: "sans-serif".to_string(),
            fill_opacity: 0.4,
            region_text: RegionText::default(),
            label_font_size: 16.0,
            region_font_size: 14.0,
            title: None,
            background: "#FFFFFF".to_string(),
        }
    }
}

/// Labels, colors and destination for one diagram
///
/// Index `i` of `labels` and `colors` always refers to the `i`-th set; the
/// fixed-size arrays make that correspondence part of the type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayOptions {
    pub labels: [String; 3],
    /// Hex colors: `#RGB`, `#RGBA`, `#RRGGBB` or `#RRGGBBAA`
    pub colors: [String; 3],
    pub bold_labels: bool,
    pub save_path: PathBuf,
}

impl DisplayOptions {
    /// Build options from runtime lists, requiring exactly one label and one
    /// color per set.
    pub fn from_lists(
        labels: Vec<String>,
        colors: Vec<String>,
        bold_labels: bool,
        save_path: impl Into<PathBuf>,
    ) -> Result<Self> {
        let labels: [String; 3] = labels.try_into().map_err(|v: Vec<String>| {
            Error::ConfigError(format!("expected 3 labels, got {}", v.len()))
        })?;
        let colors: [String; 3] = colors.try_into().map_err(|v: Vec<String>| {
            Error::ConfigError(format!("expected 3 colors, got {}", v.len()))
        })?;
        Ok(Self {
            labels,
            colors,
            bold_labels,
            save_path: save_path.into(),
        })
    }
}

/// Image formats the renderer can write
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Svg,
    Png,
}

impl OutputFormat {
    /// Pick the format from the file extension. A path without an extension
    /// gets PNG; an extension that is not valid UTF-8 is unsupported.
    pub fn from_path(path: &Path) -> Result<Self> {
        let Some(ext) = path.extension() else {
            return Ok(OutputFormat::Png);
        };
        match ext.to_str() {
            Some(ext) if ext.eq_ignore_ascii_case("png") => Ok(OutputFormat::Png),
            Some(ext) if ext.eq_ignore_ascii_case("svg") => Ok(OutputFormat::Svg),
            Some(ext) => Err(Error::UnsupportedFormat(format!(
                "'.{}' (supported: .png, .svg)",
                ext
            ))),
            None => Err(Error::UnsupportedFormat(format!(
                "non-UTF-8 extension '.{}' (supported: .png, .svg)",
                ext.to_string_lossy()
            ))),
        }
    }
}

/// Core trait for Venn diagram renderers
pub trait Renderer {
    /// Create a renderer with the given configuration
    fn new(config: RenderConfig) -> Result<Self>
    where
        Self: Sized;

    /// Render the diagram as an SVG document
    fn render_svg(&self, sets: &VennSets, options: &DisplayOptions) -> Result<String>;

    /// Render the diagram as PNG bytes
    fn render_png(&self, sets: &VennSets, options: &DisplayOptions) -> Result<Vec<u8>>;

    /// Render the diagram and write it to `options.save_path`.
    ///
    /// The format follows the path's extension (see [`OutputFormat::from_path`]).
    /// An existing file is overwritten. Returns the written path.
    fn plot_venn3(&self, sets: &VennSets, options: &DisplayOptions) -> Result<PathBuf> {
        let path = options.save_path.as_path();
        if path.as_os_str().is_empty() {
            return Err(Error::ConfigError("save path is empty".into()));
        }

        let bytes = match OutputFormat::from_path(path)? {
            OutputFormat::Svg => self.render_svg(sets, options)?.into_bytes(),
            OutputFormat::Png => self.render_png(sets, options)?,
        };
        std::fs::write(path, &bytes)?;
        info!("wrote Venn diagram to {} ({} bytes)", path.display(), bytes.len());
        Ok(path.to_path_buf())
    }
}

/// Create a renderer with the default backend
pub fn new_renderer(config: RenderConfig) -> Result<impl Renderer> {
    SvgRenderer::new(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = RenderConfig::default();
        assert_eq!(config.viewport.width, 640);
        assert_eq!(config.viewport.height, 480);
        assert_eq!(config.region_text, RegionText::Count);
        assert!(config.title.is_none());
    }

    #[test]
    fn test_options_from_lists() {
        let opts = DisplayOptions::from_lists(
            vec!["a".into(), "b".into(), "c".into()],
            vec!["#000".into(), "#111".into(), "#222".into()],
            false,
            "out.svg",
        )
        .unwrap();
        assert_eq!(opts.labels[2], "c");
        assert_eq!(opts.colors[0], "#000");

        let err = DisplayOptions::from_lists(
            vec!["a".into(), "b".into()],
            vec!["#000".into(), "#111".into(), "#222".into()],
            false,
            "out.svg",
        )
        .unwrap_err();
        assert!(matches!(err, Error::ConfigError(_)));

        let err = DisplayOptions::from_lists(
            vec!["a".into(), "b".into(), "c".into()],
            vec!["#000".into(); 4],
            false,
            "out.svg",
        )
        .unwrap_err();
        assert!(err.to_string().contains("3 colors"));
    }

    #[test]
    fn test_output_format_from_path() {
        assert_eq!(OutputFormat::from_path(Path::new("a.png")).unwrap(), OutputFormat::Png);
        assert_eq!(OutputFormat::from_path(Path::new("a.SVG")).unwrap(), OutputFormat::Svg);
        assert_eq!(OutputFormat::from_path(Path::new("venn")).unwrap(), OutputFormat::Png);
        assert!(matches!(
            OutputFormat::from_path(Path::new("a.jpg")),
            Err(Error::UnsupportedFormat(_))
        ));
    }

    #[cfg(unix)]
    #[test]
    fn test_output_format_rejects_non_utf8_extension() {
        use std::ffi::OsStr;
        use std::os::unix::ffi::OsStrExt;

        let path = Path::new(OsStr::from_bytes(b"venn.\xff"));
        assert!(path.extension().is_some());
        let err = OutputFormat::from_path(path).unwrap_err();
        assert!(matches!(err, Error::UnsupportedFormat(_)));
        assert!(err.to_string().contains("non-UTF-8"));
    }

    #[test]
    fn test_render_config_rejects_unknown_fields() {
        let err = serde_json::from_str::<RenderConfig>(r#"{"fill_opacty": 0.9}"#).unwrap_err();
        assert!(err.to_string().contains("fill_opacty"));
        assert!(serde_json::from_str::<Viewport>(r#"{"width": 10, "height": 10, "hieght": 5}"#).is_err());
    }

    #[test]
    fn test_render_config_from_partial_json() {
        let cfg: RenderConfig =
            serde_json::from_str(r#"{"viewport":{"width":300,"height":200},"region_text":"elements"}"#)
                .unwrap();
        assert_eq!(cfg.viewport, Viewport { width: 300, height: 200 });
        assert_eq!(cfg.region_text, RegionText::Elements);
        assert_eq!(cfg.font_family, "sans-serif");
    }
}
