//! Default renderer backend.
//!
//! Builds the diagram as SVG from the layout and paint stages, and produces
//! PNG by rasterizing that SVG (requires the `png` feature).

use log::debug;

use crate::rendering::layout::layout_venn3;
use crate::rendering::paint::{paint_venn3, PaintCommand};
use crate::rendering::raster;
use crate::{DisplayOptions, Error, RenderConfig, Renderer, Result, VennSets};

/// Pure-Rust Venn renderer
#[derive(Debug, Clone)]
pub struct SvgRenderer {
    config: RenderConfig,
}

impl SvgRenderer {
    pub fn config(&self) -> &RenderConfig {
        &self.config
    }

    /// Layout and paint the diagram without serializing it.
    pub fn paint(&self, sets: &VennSets, options: &DisplayOptions) -> Result<Vec<PaintCommand>> {
        let regions = sets.regions();
        debug!(
            "regions: {}",
            regions
                .iter()
                .map(|(r, e)| format!("{}={}", r.id(), e.len()))
                .collect::<Vec<_>>()
                .join(" ")
        );
        let layout = layout_venn3(
            self.config.viewport,
            self.config.label_font_size,
            self.config.title.is_some(),
        );
        paint_venn3(&layout, &regions, options, &self.config)
    }
}

impl Renderer for SvgRenderer {
    fn new(config: RenderConfig) -> Result<Self> {
        if config.viewport.width == 0 || config.viewport.height == 0 {
            return Err(Error::ConfigError(format!(
                "viewport must be non-empty, got {}x{}",
                config.viewport.width, config.viewport.height
            )));
        }
        if !(0.0..=1.0).contains(&config.fill_opacity) {
            return Err(Error::ConfigError(format!(
                "fill_opacity must be within [0, 1], got {}",
                config.fill_opacity
            )));
        }
        if config.label_font_size <= 0.0 || config.region_font_size <= 0.0 {
            return Err(Error::ConfigError("font sizes must be positive".into()));
        }
        Ok(Self { config })
    }

    fn render_svg(&self, sets: &VennSets, options: &DisplayOptions) -> Result<String> {
        let commands = self.paint(sets, options)?;
        Ok(raster::to_svg(&commands, self.config.viewport, &self.config.font_family))
    }

    #[cfg(feature = "png")]
    fn render_png(&self, sets: &VennSets, options: &DisplayOptions) -> Result<Vec<u8>> {
        let svg = self.render_svg(sets, options)?;
        let shot = raster::rasterize_png(&svg, self.config.viewport, &self.config.font_family)?;
        Ok(shot.png_data)
    }

    #[cfg(not(feature = "png"))]
    fn render_png(&self, _sets: &VennSets, _options: &DisplayOptions) -> Result<Vec<u8>> {
        Err(Error::UnsupportedFormat(
            "PNG output requires the `png` feature".into(),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Viewport;

    fn reference() -> (VennSets, DisplayOptions) {
        let sets = VennSets::from_lists(
            &["A", "B", "C", "D", "E"],
            &["C", "D", "F", "G"],
            &["B", "D", "G", "H", "I", "J"],
        );
        let options = DisplayOptions {
            labels: ["Set1".into(), "Set2".into(), "Set3".into()],
            colors: ["#E41A1C".into(), "#377EB8".into(), "#FFAB52".into()],
            bold_labels: true,
            save_path: "venn_final.png".into(),
        };
        (sets, options)
    }

    #[test]
    fn rejects_bad_config() {
        let empty = RenderConfig {
            viewport: Viewport { width: 0, height: 10 },
            ..Default::default()
        };
        assert!(matches!(SvgRenderer::new(empty), Err(Error::ConfigError(_))));

        let opaque = RenderConfig {
            fill_opacity: 1.5,
            ..Default::default()
        };
        assert!(matches!(SvgRenderer::new(opaque), Err(Error::ConfigError(_))));
    }

    #[test]
    fn svg_has_circles_in_set_colors() {
        let (sets, options) = reference();
        let r = SvgRenderer::new(RenderConfig::default()).unwrap();
        let svg = r.render_svg(&sets, &options).unwrap();
        assert_eq!(svg.matches("<circle").count(), 3);
        for c in ["#e41a1c", "#377eb8", "#ffab52"] {
            assert!(svg.contains(&format!("fill=\"{c}\"")), "missing {c}");
        }
        assert_eq!(svg.matches("font-weight=\"bold\"").count(), 3);
    }

    #[test]
    fn svg_output_is_deterministic() {
        let (sets, options) = reference();
        let r = SvgRenderer::new(RenderConfig::default()).unwrap();
        assert_eq!(r.render_svg(&sets, &options).unwrap(), r.render_svg(&sets, &options).unwrap());
    }

    #[cfg(feature = "png")]
    #[test]
    fn png_triple_region_is_colored() {
        let (sets, options) = reference();
        let r = SvgRenderer::new(RenderConfig::default()).unwrap();
        let png = r.render_png(&sets, &options).unwrap();
        let pixmap = resvg::tiny_skia::Pixmap::decode_png(&png).unwrap();
        assert_eq!((pixmap.width(), pixmap.height()), (640, 480));

        // Probe just beside the centroid annotation, inside all three circles.
        let cfg = r.config();
        let layout = layout_venn3(cfg.viewport, cfg.label_font_size, false);
        let at = layout.region_anchor(crate::Region::All);
        let px = pixmap.pixel(at.x as u32 + 20, at.y as u32).unwrap();
        assert!((px.red(), px.green(), px.blue()) != (255, 255, 255));
        let corner = pixmap.pixel(1, 1).unwrap();
        assert_eq!((corner.red(), corner.green(), corner.blue()), (255, 255, 255));
    }
}
