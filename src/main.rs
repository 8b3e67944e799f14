mod action;
mod app;
mod cli;
mod components;
mod config;
mod dataset;
mod logging;
mod models;
mod panic;
mod tui;
mod utils;
mod widgets;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    panic::init()?;
    let args = cli::Args::parse_with_config_hint()?;
    let config = config::Config::new(args.config.clone())?;
    logging::init(&config)?;

    let data_file = args.data.as_deref().or(config.data_file.as_deref());
    let records = dataset::load(data_file)
        .inspect_err(|err| tracing::error!("Failed to load dataset: {err:?}"))?;
    let mut app = app::App::new(&config, &args, records);
    app.run().await
}
