//! SVG serialization of paint commands, and PNG rasterization via resvg

use crate::rendering::paint::PaintCommand;
#[cfg(feature = "png")]
use crate::rendering::Screenshot;
#[cfg(feature = "png")]
use crate::{Error, Result};
use crate::Viewport;

/// Serialize paint commands into a standalone SVG document.
pub fn to_svg(commands: &[PaintCommand], viewport: Viewport, font_family: &str) -> String {
    let (w, h) = (viewport.width, viewport.height);
    let mut svg = String::new();
    svg.push_str(&format!(
        "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{w}\" height=\"{h}\" viewBox=\"0 0 {w} {h}\">\n"
    ));

    for cmd in commands {
        match cmd {
            PaintCommand::SolidRect { x, y, width, height, rgba } => {
                svg.push_str(&format!(
                    "<rect x=\"{x:.2}\" y=\"{y:.2}\" width=\"{width:.2}\" height=\"{height:.2}\" fill=\"{}\" fill-opacity=\"{:.3}\"/>\n",
                    rgba.to_hex(),
                    rgba.opacity()
                ));
            }
            PaintCommand::Circle { cx, cy, radius, fill, fill_opacity, stroke, stroke_width } => {
                svg.push_str(&format!(
                    "<circle cx=\"{cx:.2}\" cy=\"{cy:.2}\" r=\"{radius:.2}\" fill=\"{}\" fill-opacity=\"{fill_opacity:.3}\" stroke=\"{}\" stroke-opacity=\"{:.3}\" stroke-width=\"{stroke_width:.1}\"/>\n",
                    fill.to_hex(),
                    stroke.to_hex(),
                    stroke.opacity()
                ));
            }
            PaintCommand::Text { x, y, text, font_size, bold, fill } => {
                let weight = if *bold { "bold" } else { "normal" };
                svg.push_str(&format!(
                    "<text x=\"{x:.2}\" y=\"{y:.2}\" font-family=\"{}\" font-size=\"{font_size:.1}\" font-weight=\"{weight}\" fill=\"{}\" text-anchor=\"middle\" dominant-baseline=\"central\">{}</text>\n",
                    escape_xml(font_family),
                    fill.to_hex(),
                    escape_xml(text)
                ));
            }
        }
    }

    svg.push_str("</svg>\n");
    svg
}

/// Rasterize an SVG document to a PNG of exactly `viewport` size.
#[cfg(feature = "png")]
pub fn rasterize_png(svg: &str, viewport: Viewport, font_family: &str) -> Result<Screenshot> {
    use resvg::{tiny_skia, usvg};

    let mut opt = usvg::Options {
        font_family: font_family.to_string(),
        ..Default::default()
    };
    opt.fontdb_mut().load_system_fonts();

    let tree = usvg::Tree::from_str(svg, &opt)
        .map_err(|e| Error::RenderError(format!("invalid SVG: {}", e)))?;

    let mut pixmap = tiny_skia::Pixmap::new(viewport.width, viewport.height).ok_or_else(|| {
        Error::RenderError(format!(
            "cannot allocate a {}x{} pixmap",
            viewport.width, viewport.height
        ))
    })?;

    let size = tree.size();
    let transform = tiny_skia::Transform::from_scale(
        viewport.width as f32 / size.width(),
        viewport.height as f32 / size.height(),
    );
    resvg::render(&tree, transform, &mut pixmap.as_mut());

    let png_data = pixmap
        .encode_png()
        .map_err(|e| Error::RenderError(format!("PNG encoding failed: {}", e)))?;

    Ok(Screenshot {
        width: viewport.width,
        height: viewport.height,
        png_data,
    })
}

fn escape_xml(input: &str) -> String {
    input
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&apos;")
}
