// run  := cargo run --
// dir  := .
// kid  :=

use std::fmt::Write as FmtWrite;

use colored::{Color, Colorize};

use super::{layout, Line, RenderContext, Renderer, Style};

const PADDING_BEFORE: usize = 2;
const PADDING_INDENT: usize = 3;

/// Indented terminal text, for reading the menu without a menu-bar host.
pub struct PlainTextRenderer;

fn to_color(name: &str) -> Color {
    if let Some(hex) = name.strip_prefix('#') {
        if hex.len() == 6 {
            if let Ok(rgb) = u32::from_str_radix(hex, 16) {
                return Color::TrueColor { r: (rgb >> 16) as u8, g: (rgb >> 8) as u8, b: rgb as u8 };
            }
        }
    }
    match name {
        "orange" => Color::TrueColor { r: 255, g: 165, b: 0 },
        "lightblue" => Color::TrueColor { r: 173, g: 216, b: 230 },
        other => Color::from(other)
    }
}

fn paint(body: &str, style: &Style) -> String {
    let body = match &style.href {
        Some(href) => format!("{}  {}", body, href),
        None => body.to_string()
    };
    let body = if style.font.is_some() { body.bold() } else { body.normal() };
    if style.color.is_empty() {
        body.to_string()
    }
    else {
        body.color(to_color(&style.color)).to_string()
    }
}

impl Renderer for PlainTextRenderer {
    fn render(&self, ctx: &RenderContext) -> String {
        let mut text = String::new();

        for line in layout(ctx) {
            match line {
                Line::Separator => writeln!(&mut text).unwrap(),
                Line::Item { depth, text: body, style } => {
                    writeln!(
                        &mut text,
                        "{:<padb$}{:<padi$}{}",
                        "",
                        "",
                        paint(&body, &style),
                        padb = PADDING_BEFORE,
                        padi = PADDING_INDENT * depth
                    )
                    .unwrap();
                }
            }
        }
        text
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::incident::fixtures::incident;
    use crate::render::test_support::context;

    #[test]
    fn test_color_names() {
        assert_eq!(to_color("#123def"), Color::TrueColor { r: 0x12, g: 0x3d, b: 0xef });
        assert_eq!(to_color("red"), Color::Red);
        assert_eq!(to_color("green"), Color::Green);
        assert_eq!(to_color("orange"), Color::TrueColor { r: 255, g: 165, b: 0 });
    }

    #[test]
    fn test_indented_text() {
        colored::control::set_override(false);
        let mut ctx = context(vec![incident("DB down", "monitoring", "major")], Vec::new(), Vec::new());
        ctx.config.icons.openincident = String::new();
        let out = PlainTextRenderer.render(&ctx);
        let lines: Vec<&str> = out.lines().collect();

        assert_eq!(lines[0], "  A:1");
        assert_eq!(lines[1], "");
        assert_eq!(lines[2], "  Active Incidents (1)");
        assert_eq!(lines[3], "  Incident: DB down");
        assert_eq!(lines[4], "     Created: 2024-03-01 10:15 +00:00");
        assert_eq!(lines[5], "     Open in StatusPage.io  https://stspg.io/db-down");
        assert_eq!(lines[9], "        None listed");
    }
}
