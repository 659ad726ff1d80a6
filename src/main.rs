mod cli;
mod common;
mod controller;
mod driver;
mod entity;

use std::error::Error;
use clap::{CommandFactory, Parser};
use dotenv::dotenv;

use cli::args::Args;
use cli::commander::Commander;
use common::logger::init_logger;
use common::setting::{self, DeviceMode, Settings};
use controller::limit_dao::LimitDao;
use driver::dummy_fixture::DummyFixture;
use driver::http_fixture::HttpFixture;
use driver::traits::FixtureDevice;

const LOG_TAG: &str = "main";

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    // load .env if present
    dotenv().ok();

    let settings = match Settings::get() {
        Ok(settings) => settings,
        Err(e) => {
            init_logger(setting::Env::default().log_level.as_str());
            error!(LOG_TAG, "cannot load settings: {}", e);
            return Err(e.into());
        }
    };

    init_logger(settings.env.log_level.as_str());
    match &settings.config_file {
        Some(file_path) => info!(LOG_TAG, "config loaded from {}, env: {}", file_path, settings.env.env),
        None => warn!(LOG_TAG, "config file {} not found, use default settings", setting::config_file_path()),
    }
    debug!(LOG_TAG, "config: {:?}", settings);

    let args = Args::parse();
    let command = match args.command {
        Some(command) => command,
        None => {
            Args::command().print_help()?;
            println!();
            return Ok(());
        }
    };

    let device = make_device(&settings.device);
    let dao = LimitDao::new(&settings.store.path)?;
    let commander = Commander::new(device.as_ref(), &dao, &settings.calibration);

    if let Err(e) = commander.execute(&command).await {
        error!(LOG_TAG, "{:?} aborted: {}", command, e);
        return Err(e.into());
    }
    Ok(())
}

fn make_device(device: &setting::Device) -> Box<dyn FixtureDevice> {
    match device.mode {
        DeviceMode::Http => {
            info!(LOG_TAG, "fixture at {}", device.base_url);
            Box::new(HttpFixture::from_settings(device))
        }
        DeviceMode::Dummy => {
            warn!(LOG_TAG, "dummy fixture with thresholds {:?}", device.dummy_thresholds);
            Box::new(DummyFixture::new(device.dummy_thresholds))
        }
    }
}
