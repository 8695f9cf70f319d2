// run  := cargo run --
// dir  := .
// kid  :=

mod classify;
mod client;
mod error;
mod incident;
mod load_config;
mod render;

use std::path::PathBuf;

use chrono::{Offset, Utc};
use clap::{Arg, ArgAction, Command};
use colored::Colorize;
use load_config::{LoadConfig, Overrides, DEFAULT_CONFIG};
use render::{MenuRenderer, PlainTextRenderer, RenderContext, Renderer, TimeFormat};

use crate::client::{load_incidents, StatusPageClient};
use crate::error::Result;

fn cli() -> Command {
    Command::new("spshow")
        .about("Statuspage.io incidents for the menu bar")
        .version(env!("CARGO_PKG_VERSION"))
        .arg(
            Arg::new("config")
                .short('c')
                .long("config")
                .value_name("FILE")
                .help("Config file to use")
                .default_value(DEFAULT_CONFIG)
                .num_args(1)
        )
        .arg(
            Arg::new("authToken")
                .short('a')
                .long("authToken")
                .value_name("TOKEN")
                .help("Statuspage.io auth token")
                .env("AUTHTOK")
                .hide_env_values(true)
                .num_args(1)
        )
        .arg(
            Arg::new("pageid")
                .short('p')
                .long("pageid")
                .value_name("ID")
                .help("Statuspage.io page id")
                .env("PAGEID")
                .num_args(1)
        )
        .arg(
            Arg::new("text")
                .short('t')
                .long("text")
                .help("Print plain text instead of menu-bar markup")
                .action(ArgAction::SetTrue)
        )
        .arg(
            Arg::new("utc")
                .long("utc")
                .help("Show timestamps in UTC instead of local time")
                .action(ArgAction::SetTrue)
        )
}

fn time_format(utc: bool) -> TimeFormat {
    if utc { TimeFormat::Fixed(Utc.fix()) } else { TimeFormat::Local }
}

fn run(config_path: PathBuf, overrides: Overrides, time: TimeFormat, renderer: &dyn Renderer) -> Result<String> {
    let config = LoadConfig::new(Some(config_path), overrides)?.into_config();
    let client = StatusPageClient::new(&config.main.api_url, &config.main.token, &config.main.page, config.timeout()?)?;
    let incidents = load_incidents(&client)?;

    let ctx = RenderContext { config, incidents, time };
    let output = renderer.render(&ctx);
    tracing::debug!(total = ctx.incidents.all.len(), bytes = output.len(), "rendered");
    Ok(output)
}

fn main() {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn"))
        )
        .init();

    let matches = cli().get_matches();

    let config_path = matches.get_one::<String>("config").map(PathBuf::from).unwrap_or_default();
    let overrides = Overrides {
        token: matches.get_one::<String>("authToken").cloned(),
        page:  matches.get_one::<String>("pageid").cloned()
    };
    let renderer: &dyn Renderer = if matches.get_flag("text") { &PlainTextRenderer } else { &MenuRenderer };

    let time = time_format(matches.get_flag("utc"));

    match run(config_path, overrides, time, renderer) {
        Ok(output) => print!("{}", output),
        Err(e) => {
            eprintln!("{} {}", "Error:".red().bold(), e);
            std::process::exit(1);
        }
    }
}
