//! # My Little Trip Desktop
//!
//! Desktop front end for the My Little Trip travel booking site.
//!
//! ## Modules
//!
//! - [`components`] - Navigation bar, profile menu and layout
//! - [`config`] - Settings persistence
//! - [`router`] - Application routes
//! - [`state`] - Global application state
//! - [`views`] - Page-level view components

use clap::Parser;
use dioxus::desktop::{Config as WindowConfig, LogicalSize, WindowBuilder};
use dioxus::prelude::*;
use mytrip_nav::{CategoryId, ThemeMode};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod components;
mod config;
mod router;
mod state;
mod views;

use config::{Config, LaunchOptions};
use router::Route;
use state::AppState;

/// My Little Trip - travel booking
#[derive(Parser, Debug)]
#[command(name = "mytrip")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Navigation bar palette (normal, transparent)
    #[arg(long)]
    theme: Option<ThemeMode>,

    /// Id of the category tab to highlight
    #[arg(long)]
    selected_category: Option<u32>,

    /// Persist the given options to the config file
    #[arg(long)]
    save: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let log_level = match cli.verbose {
        0 => "info",
        1 => "debug",
        _ => "trace",
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| format!("mytrip={log_level},mytrip_nav={log_level}").into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting My Little Trip");

    let config = Config::load().merge_cli(cli.theme, cli.selected_category.map(CategoryId));
    if cli.save {
        config.save()?;
    }

    let options = LaunchOptions {
        config,
        session_path: config::session_path(),
    };

    let window = WindowConfig::new().with_window(
        WindowBuilder::new()
            .with_title("My Little Trip")
            .with_inner_size(LogicalSize::new(1280.0, 800.0))
            .with_min_inner_size(LogicalSize::new(1000.0, 600.0)),
    );

    dioxus::LaunchBuilder::desktop()
        .with_cfg(window)
        .with_context(options)
        .launch(App);

    Ok(())
}

/// Root application component.
///
/// Initializes global state, loads the stylesheet, and renders the router.
#[component]
fn App() -> Element {
    let options = use_context::<LaunchOptions>();
    use_context_provider(move || AppState::new(&options));

    rsx! {
        document::Stylesheet { href: asset!("/assets/styles.css") }
        Router::<Route> {}
    }
}
