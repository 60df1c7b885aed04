use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use crossbeam_channel::bounded;
use split_core::load_settings;
use tracing_subscriber::EnvFilter;

mod controller;
mod ui;

use controller::{events::UiAction, reducer::AppState};
use ui::SplitBillApp;

const APP_TITLE: &str = "Eat-'N-Split";

#[derive(Parser, Debug)]
#[command(about = "Split bills with friends and keep running balances")]
struct Args {
    /// Settings file; defaults to ./splitbill.toml when present.
    #[arg(long)]
    config: Option<PathBuf>,
    /// Default image URL offered by the add-friend form.
    #[arg(long)]
    avatar_base_url: Option<String>,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    let mut settings = load_settings(args.config.as_deref())?;
    if let Some(url) = args.avatar_base_url {
        settings.avatar_base_url = url;
    }

    let filter = EnvFilter::try_new(&settings.log_filter).unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let state = AppState::from_settings(&settings).context("invalid friends roster in settings")?;
    tracing::info!(friends = state.session.friends().len(), "starting desktop ui");

    let (action_tx, action_rx) = bounded::<UiAction>(256);

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(APP_TITLE)
            .with_inner_size([960.0, 640.0])
            .with_min_inner_size([760.0, 480.0]),
        ..Default::default()
    };
    eframe::run_native(
        APP_TITLE,
        options,
        Box::new(move |_cc| Ok(Box::new(SplitBillApp::new(action_tx, action_rx, state)))),
    )
    .map_err(|err| anyhow::anyhow!("desktop ui exited with an error: {err}"))
}
