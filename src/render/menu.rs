// run  := cargo run --
// dir  := .
// kid  :=

use std::fmt::Write as FmtWrite;

use super::{layout, Line, RenderContext, Renderer, Style};

const SEPARATOR: &str = "---";
const NESTING: &str = "--";

/// xbar/BitBar plugin markup: `text | key=value ...`, one `--` per nesting level.
pub struct MenuRenderer;

// Leading dashes in a body would be read as extra nesting; swap them for U+2010.
fn escape_nesting(body: &str) -> String {
    let rest = body.trim_start_matches('-');
    let dashes = body.len() - rest.len();
    format!("{}{}", "\u{2010}".repeat(dashes), rest)
}

fn attributes(style: &Style) -> Vec<String> {
    let mut attrs = Vec::new();
    if !style.color.is_empty() {
        attrs.push(format!("color={}", style.color));
    }
    if let Some(href) = &style.href {
        attrs.push(format!("href={}", href));
    }
    if let Some(font) = style.font {
        attrs.push(format!("font={}", font));
    }
    if let Some(size) = style.size {
        attrs.push(format!("size={}", size));
    }
    if style.trim {
        attrs.push("trim=true".to_string());
    }
    if let Some(length) = style.length {
        attrs.push(format!("length={}", length));
    }
    if let Some(image) = &style.image {
        attrs.push(format!("image={}", image));
    }
    attrs
}

impl Renderer for MenuRenderer {
    fn render(&self, ctx: &RenderContext) -> String {
        let mut text = String::new();

        for line in layout(ctx) {
            match line {
                Line::Separator => writeln!(&mut text, "{}", SEPARATOR).unwrap(),
                Line::Item { depth, text: body, style } => {
                    let body = escape_nesting(&body);
                    let attrs = attributes(&style);
                    if attrs.is_empty() {
                        writeln!(&mut text, "{}{}", NESTING.repeat(depth), body).unwrap();
                    }
                    else {
                        writeln!(&mut text, "{}{} | {}", NESTING.repeat(depth), body, attrs.join(" ")).unwrap();
                    }
                }
            }
        }
        text
    }
}
