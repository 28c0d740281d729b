mod application;
mod config;
mod constants;
mod controllers;
mod error;
mod generator;
mod http;
mod loader;
mod models;
mod ordered_map;
mod populator;
mod prelude;
mod store;
mod ui;
mod widgets;

use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let config = config::Config::load();
    application::Application::new(config).run()
}
