// run  := cargo run --
// dir  := .
// kid  :=

//! Menu layout shared by every output format.

mod menu;
mod plain_text;
mod timefmt;

pub use menu::MenuRenderer;
pub use plain_text::PlainTextRenderer;
pub use timefmt::TimeFormat;

use chrono::{DateTime, FixedOffset};

use crate::classify::{impact_color, status_color};
use crate::client::IncidentLists;
use crate::incident::Incident;
use crate::load_config::Config;

const LINK_TEXT: &str = "Open in StatusPage.io";

pub struct RenderContext {
    pub config:    Config,
    pub incidents: IncidentLists,
    pub time:      TimeFormat
}

pub trait Renderer {
    fn render(&self, ctx: &RenderContext) -> String;
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Style {
    pub color:  String,
    pub href:   Option<String>,
    pub font:   Option<&'static str>,
    pub size:   Option<u8>,
    pub trim:   bool,
    pub length: Option<usize>,
    pub image:  Option<String>
}

impl Style {
    pub fn color(color: &str) -> Self { Style { color: color.to_string(), ..Style::default() } }

    pub fn link(href: &str) -> Self { Style { href: Some(href.to_string()), ..Style::default() } }

    fn header(color: &str, font: &'static str, size: u8) -> Self {
        Style { color: color.to_string(), font: Some(font), size: Some(size), ..Style::default() }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Line {
    Separator,
    Item { depth: usize, text: String, style: Style }
}

#[derive(Debug, Clone, Copy, PartialEq)]
enum SectionKind {
    Active,
    Resolved,
    Scheduled
}

impl SectionKind {
    fn missing_components(self) -> &'static str {
        match self {
            SectionKind::Active => "None listed",
            _ => "None"
        }
    }
}

/// Builder over the layout, one method per line shape.
#[derive(Default)]
struct Menu {
    lines: Vec<Line>
}

impl Menu {
    fn line(&mut self, depth: usize, text: impl AsRef<str>, style: Style) {
        self.lines.push(Line::Item { depth, text: sanitize(text.as_ref()), style });
    }

    fn plain(&mut self, depth: usize, text: impl AsRef<str>) { self.line(depth, text, Style::default()) }

    fn separator(&mut self) { self.lines.push(Line::Separator); }
}

// A '|' would start the attribute segment of a menu-bar line.
fn sanitize(text: &str) -> String { text.replace('|', "/").replace(['\r', '\n'], " ").trim_end().to_string() }

pub fn layout(ctx: &RenderContext) -> Vec<Line> {
    let mut menu = Menu::default();

    title(&mut menu, ctx);
    menu.separator();
    active_section(&mut menu, ctx);

    if ctx.config.resolved.enabled {
        menu.separator();
        resolved_section(&mut menu, ctx);
    }
    if ctx.config.scheduled.enabled {
        menu.separator();
        scheduled_section(&mut menu, ctx);
    }

    menu.lines
}

fn title(menu: &mut Menu, ctx: &RenderContext) {
    let config = &ctx.config;
    let lists = &ctx.incidents;
    let has_active = !lists.active.is_empty();

    let mut parts: Vec<String> = Vec::new();
    let icon = if has_active { &config.icons.openincident } else { &config.icons.allclear };
    if !icon.is_empty() {
        parts.push(icon.clone());
    }
    if !config.main.title.is_empty() {
        parts.push(config.main.title.clone());
    }
    let mut counter = format!("A:{}", lists.active.len());
    if config.scheduled.enabled {
        counter.push_str(&format!(" S:{}", lists.scheduled.len()));
    }
    if config.resolved.enabled {
        counter.push_str(&format!(" R:{}", lists.resolved.len()));
    }
    parts.push(counter);

    let mut style = if has_active {
        Style { color: "red".to_string(), trim: true, length: Some(24), ..Style::default() }
    }
    else {
        Style::default()
    };
    if !config.main.baricon.is_empty() {
        style.image = Some(config.main.baricon.clone());
    }

    menu.line(0, parts.join(" "), style);
}

fn active_section(menu: &mut Menu, ctx: &RenderContext) {
    let active = &ctx.incidents.active;
    let color = if active.is_empty() { "" } else { "red" };
    menu.line(0, format!("Active Incidents ({})", active.len()), Style::header(color, "Avenir-Bold", 16));

    for incident in active {
        let name = format!("{} Incident: {}", ctx.config.icons.openincident, incident.name);
        menu.line(0, name.trim_start(), Style::color(impact_color(incident)));
        details(menu, ctx, incident, SectionKind::Active);
    }
}

fn resolved_section(menu: &mut Menu, ctx: &RenderContext) {
    let resolved = &ctx.incidents.resolved;
    menu.line(0, format!("Resolved Incidents ({})", resolved.len()), Style::header("green", "UbuntuMono-Bold", 18));

    for incident in resolved.iter().take(ctx.config.resolved.cap()) {
        menu.line(0, format!("Incident: {}", incident.name), Style::color(impact_color(incident)));
        details(menu, ctx, incident, SectionKind::Resolved);
    }
}

fn scheduled_section(menu: &mut Menu, ctx: &RenderContext) {
    let scheduled = &ctx.incidents.scheduled;
    menu.line(0, format!("Scheduled Incidents ({})", scheduled.len()), Style::header("orange", "UbuntuMono-Bold", 18));

    for incident in scheduled.iter().take(ctx.config.scheduled.cap()) {
        menu.line(0, format!("Incident: {}", incident.name), Style::color(impact_color(incident)));
        details(menu, ctx, incident, SectionKind::Scheduled);
    }
}

fn details(menu: &mut Menu, ctx: &RenderContext, incident: &Incident, kind: SectionKind) {
    let fmt = |t: &DateTime<FixedOffset>| ctx.time.format(t);

    if kind == SectionKind::Scheduled {
        if let Some(t) = &incident.scheduled_for {
            menu.plain(1, format!("Scheduled for: {}", fmt(t)));
        }
        if let Some(t) = &incident.scheduled_until {
            menu.plain(1, format!("Scheduled until: {}", fmt(t)));
        }
    }
    if let Some(t) = &incident.created_at {
        menu.plain(1, format!("Created: {}", fmt(t)));
    }
    if incident.shortlink.is_empty() {
        tracing::warn!(incident = %incident.name, "incident has no shortlink");
    }
    else {
        menu.line(1, LINK_TEXT, Style::link(&incident.shortlink));
    }
    menu.line(1, format!("Impact: {}", incident.impact), Style::color(impact_color(incident)));
    menu.line(1, format!("Status: {}", incident.status), Style::color(status_color(incident)));

    menu.plain(1, "Affected Components:");
    match &incident.components {
        Some(components) => {
            for component in components {
                menu.plain(2, &component.name);
            }
        }
        None => menu.plain(2, kind.missing_components())
    }

    if let Some(t) = &incident.updated_at {
        menu.plain(1, format!("Last Update: {}", fmt(t)));
    }

    if kind != SectionKind::Active && !incident.incident_updates.is_empty() {
        menu.plain(1, "Updates");
        for update in &incident.incident_updates {
            menu.plain(2, format!("Updated At: {}", fmt(&update.created_at)));
        }
    }
}
