//! Paint commands for a Venn diagram, and hex color parsing

use log::warn;

use crate::rendering::layout::VennLayout;
use crate::{DisplayOptions, Error, RegionText, Regions, RenderConfig, Result};

/// An sRGB color with alpha
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba {
    pub const BLACK: Rgba = Rgba { r: 0, g: 0, b: 0, a: 255 };

    /// Parse `#RGB`, `#RGBA`, `#RRGGBB` or `#RRGGBBAA`.
    pub fn from_hex(s: &str) -> Result<Rgba> {
        let invalid = || Error::InvalidColor(s.to_string());
        let digits = s.trim().strip_prefix('#').ok_or_else(invalid)?;
        if !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(invalid());
        }

        let nibble = |i: usize| u8::from_str_radix(&digits[i..i + 1], 16).map(|v| v * 17);
        let byte = |i: usize| u8::from_str_radix(&digits[i..i + 2], 16);

        let parsed = match digits.len() {
            3 => (nibble(0), nibble(1), nibble(2), Ok(255)),
            4 => (nibble(0), nibble(1), nibble(2), nibble(3)),
            6 => (byte(0), byte(2), byte(4), Ok(255)),
            8 => (byte(0), byte(2), byte(4), byte(6)),
            _ => return Err(invalid()),
        };
        match parsed {
            (Ok(r), Ok(g), Ok(b), Ok(a)) => Ok(Rgba { r, g, b, a }),
            _ => Err(invalid()),
        }
    }

    /// `#rrggbb`, alpha dropped
    pub fn to_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }

    pub fn opacity(self) -> f32 {
        self.a as f32 / 255.0
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum PaintCommand {
    SolidRect {
        x: f32,
        y: f32,
        width: f32,
        height: f32,
        rgba: Rgba,
    },
    Circle {
        cx: f32,
        cy: f32,
        radius: f32,
        fill: Rgba,
        fill_opacity: f32,
        stroke: Rgba,
        stroke_width: f32,
    },
    Text {
        x: f32,
        y: f32,
        text: String,
        font_size: f32,
        bold: bool,
        fill: Rgba,
    },
}

/// Build the paint list: background, circle fills, region annotations, labels.
///
/// Colors are parsed here, so an invalid color fails before anything is drawn.
pub fn paint_venn3(
    layout: &VennLayout,
    regions: &Regions,
    options: &DisplayOptions,
    config: &RenderConfig,
) -> Result<Vec<PaintCommand>> {
    let background = Rgba::from_hex(&config.background)?;
    let colors = [
        Rgba::from_hex(&options.colors[0])?,
        Rgba::from_hex(&options.colors[1])?,
        Rgba::from_hex(&options.colors[2])?,
    ];

    let mut cmds = vec![PaintCommand::SolidRect {
        x: 0.0,
        y: 0.0,
        width: config.viewport.width as f32,
        height: config.viewport.height as f32,
        rgba: background,
    }];

    for (circle, color) in layout.circles.iter().zip(colors) {
        cmds.push(PaintCommand::Circle {
            cx: circle.center.x,
            cy: circle.center.y,
            radius: circle.radius,
            fill: color,
            fill_opacity: config.fill_opacity * color.opacity(),
            stroke: color,
            stroke_width: 2.0,
        });
    }

    for (region, elements) in regions.iter() {
        let text = match config.region_text {
            RegionText::Count => elements.len().to_string(),
            RegionText::Elements => {
                if elements.is_empty() {
                    continue;
                }
                elements.iter().map(String::as_str).collect::<Vec<_>>().join(", ")
            }
        };
        let at = layout.region_anchor(region);
        cmds.push(PaintCommand::Text {
            x: at.x,
            y: at.y,
            text,
            font_size: config.region_font_size,
            bold: false,
            fill: Rgba::BLACK,
        });
    }

    for (i, (label, at)) in options.labels.iter().zip(layout.label_anchors).enumerate() {
        if label.trim().is_empty() {
            warn!("label for set {} is empty", i + 1);
            continue;
        }
        cmds.push(PaintCommand::Text {
            x: at.x,
            y: at.y,
            text: label.clone(),
            font_size: config.label_font_size,
            bold: options.bold_labels,
            fill: Rgba::BLACK,
        });
    }

    if let (Some(title), Some(at)) = (&config.title, layout.title_anchor) {
        cmds.push(PaintCommand::Text {
            x: at.x,
            y: at.y,
            text: title.clone(),
            font_size: config.label_font_size * 1.25,
            bold: true,
            fill: Rgba::BLACK,
        });
    }

    Ok(cmds)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rendering::layout::layout_venn3;
    use crate::VennSets;

    fn options(colors: [&str; 3], bold: bool) -> DisplayOptions {
        DisplayOptions {
            labels: ["Set1".into(), "Set2".into(), "Set3".into()],
            colors: colors.map(String::from),
            bold_labels: bold,
            save_path: "unused.svg".into(),
        }
    }

    fn texts(cmds: &[PaintCommand]) -> Vec<(String, bool)> {
        cmds.iter()
            .filter_map(|c| match c {
                PaintCommand::Text { text, bold, .. } => Some((text.clone(), *bold)),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn parses_hex_colors() {
        assert_eq!(Rgba::from_hex("#E41A1C").unwrap(), Rgba { r: 0xE4, g: 0x1A, b: 0x1C, a: 255 });
        assert_eq!(Rgba::from_hex("#fab").unwrap(), Rgba { r: 0xFF, g: 0xAA, b: 0xBB, a: 255 });
        assert_eq!(Rgba::from_hex("#00000080").unwrap().a, 0x80);
        assert_eq!(Rgba::from_hex("#377EB8").unwrap().to_hex(), "#377eb8");
    }

    #[test]
    fn rejects_bad_colors() {
        for bad in ["", "red", "#12", "#12345", "#GGGGGG", "E41A1C", "#é1A1C"] {
            assert!(matches!(Rgba::from_hex(bad), Err(Error::InvalidColor(_))), "{bad}");
        }
    }

    #[test]
    fn paints_counts_and_bold_labels() {
        let sets = VennSets::from_lists(&["A", "B"], &["B"], &["C"]);
        let cfg = RenderConfig::default();
        let layout = layout_venn3(cfg.viewport, cfg.label_font_size, false);
        let cmds = paint_venn3(&layout, &sets.regions(), &options(["#E41A1C", "#377EB8", "#FFAB52"], true), &cfg).unwrap();

        assert!(matches!(cmds[0], PaintCommand::SolidRect { .. }));
        let circles = cmds.iter().filter(|c| matches!(c, PaintCommand::Circle { .. })).count();
        assert_eq!(circles, 3);

        let t = texts(&cmds);
        // seven counts then three labels
        assert_eq!(t.len(), 10);
        assert_eq!(t[0], ("1".to_string(), false));
        assert_eq!(t[3], ("1".to_string(), false));
        assert_eq!(t[6], ("0".to_string(), false));
        assert_eq!(t[7], ("Set1".to_string(), true));
        assert_eq!(t[9], ("Set3".to_string(), true));
    }

    #[test]
    fn elements_mode_skips_empty_regions() {
        let sets = VennSets::from_lists(&["A", "E", "D"], &["D"], &["D"]);
        let cfg = RenderConfig {
            region_text: RegionText::Elements,
            title: Some("Title".into()),
            ..Default::default()
        };
        let layout = layout_venn3(cfg.viewport, cfg.label_font_size, true);
        let cmds = paint_venn3(&layout, &sets.regions(), &options(["#f00", "#0f0", "#00f"], false), &cfg).unwrap();
        let t: Vec<String> = texts(&cmds).into_iter().map(|(s, _)| s).collect();
        assert_eq!(t, vec!["A, E", "D", "Set1", "Set2", "Set3", "Title"]);
    }

    #[test]
    fn color_alpha_scales_fill_opacity() {
        let sets = VennSets::default();
        let cfg = RenderConfig::default();
        let layout = layout_venn3(cfg.viewport, cfg.label_font_size, false);
        let cmds = paint_venn3(&layout, &sets.regions(), &options(["#ff000000", "#0f0", "#00f"], false), &cfg).unwrap();
        match &cmds[1] {
            PaintCommand::Circle { fill_opacity, .. } => assert_eq!(*fill_opacity, 0.0),
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn invalid_color_fails_before_painting() {
        let sets = VennSets::default();
        let cfg = RenderConfig::default();
        let layout = layout_venn3(cfg.viewport, cfg.label_font_size, false);
        let err = paint_venn3(&layout, &sets.regions(), &options(["#E41A1C", "blue", "#FFAB52"], true), &cfg).unwrap_err();
        assert!(err.to_string().contains("blue"));
    }
}
