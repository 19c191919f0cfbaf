//! # HUD Replay
//!
//! Drives a `HudController` through a simulated session and logs what the
//! panel would show at the end of every day.
//!
//! Usage: `hud_replay [--config <path>] [--days <n>] [--screen-width <px>]`
//!
//! Set `RUST_LOG=debug` to see season and counter internals.

use std::path::PathBuf;

use almanac::economy::{ItemIdentity, ItemStack, SlotGroup};
use almanac::shared::constants::DAY_LENGTH;
use almanac::shared::{ConfigError, PanelConfig, SharedSettings};
use almanac::time::DailyFortune;
use almanac::ui::RecordingBackend;
use almanac::{EventBus, HudController, ScheduledFortunes, SimulatedHost};
use thiserror::Error;
use tracing_subscriber::EnvFilter;

/// Ticks the simulated host advances per frame.
const TICKS_PER_FRAME: u64 = 500;

#[derive(Debug, Error)]
enum ReplayError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("invalid value {value:?} for {flag}")]
    InvalidArgument { flag: &'static str, value: String },

    #[error("missing value for {0}")]
    MissingValue(&'static str),

    #[error("malformed item token {0}")]
    Item(String),
}

#[derive(Debug)]
struct Options {
    config: Option<PathBuf>,
    days: u64,
    screen_width: i32,
}

impl Options {
    fn parse(args: &[String]) -> Result<Self, ReplayError> {
        let mut options = Self {
            config: None,
            days: 3,
            screen_width: 854,
        };

        let mut iter = args.iter().skip(1);
        while let Some(flag) = iter.next() {
            match flag.as_str() {
                "--config" => {
                    let value = iter.next().ok_or(ReplayError::MissingValue("--config"))?;
                    options.config = Some(PathBuf::from(value));
                }
                "--days" => {
                    let value = iter.next().ok_or(ReplayError::MissingValue("--days"))?;
                    options.days = value.parse().map_err(|_| ReplayError::InvalidArgument {
                        flag: "--days",
                        value: value.clone(),
                    })?;
                }
                "--screen-width" => {
                    let value = iter.next().ok_or(ReplayError::MissingValue("--screen-width"))?;
                    options.screen_width = value.parse().map_err(|_| ReplayError::InvalidArgument {
                        flag: "--screen-width",
                        value: value.clone(),
                    })?;
                }
                other => {
                    return Err(ReplayError::InvalidArgument {
                        flag: "argument",
                        value: other.to_string(),
                    })
                }
            }
        }
        Ok(options)
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_target(false)
        .init();

    let args: Vec<String> = std::env::args().collect();
    if args.iter().any(|a| a == "--help" || a == "-h") {
        println!("Usage: hud_replay [--config <path>] [--days <n>] [--screen-width <px>]");
        return;
    }

    if let Err(err) = run(&args) {
        tracing::error!("Replay failed: {err}");
        std::process::exit(1);
    }
}

fn run(args: &[String]) -> Result<(), ReplayError> {
    let options = Options::parse(args)?;

    let config = match &options.config {
        Some(path) => PanelConfig::load_or_default(path)?,
        None => PanelConfig {
            counter_item_id: "coinage:copper_coin".to_string(),
            ..PanelConfig::default()
        },
    };
    tracing::info!(
        days = options.days,
        screen_width = options.screen_width,
        item = %config.counter_item_id,
        "Starting replay"
    );

    let mut host = build_host(options.screen_width)?;
    let settings = SharedSettings::new(config);
    let (sender, receiver) = EventBus::create_pair(64);
    let mut controller = HudController::new(settings.clone()).with_events(sender);
    let mut backend = RecordingBackend::new();

    let frames_per_day = DAY_LENGTH / TICKS_PER_FRAME;
    for day in 0..options.days {
        host.set_weather(day % 3 == 1, day % 5 == 4);

        for _ in 0..frames_per_day {
            host.next_frame();
            controller.update(&host);
            backend.begin_frame();
            controller.render(&host, &mut backend);
            host.advance(TICKS_PER_FRAME);
        }

        for event in receiver.drain() {
            tracing::info!(?event, "HUD event");
        }

        let time = controller.time_state();
        tracing::info!(
            "Day {} ({}) {} | {} | {:?} | count {:?} | {} draw calls | suppress host overlay: {}",
            time.day_index,
            time.weekday,
            time.time_label,
            controller.season(),
            controller.weather(),
            controller.count(),
            backend.command_count(),
            controller.should_suppress_status_effects(&host),
        );
    }

    host.set_session_active(false);
    controller.update(&host);
    for event in receiver.drain() {
        tracing::info!(?event, "HUD event");
    }
    Ok(())
}

/// A host with a coin purse: loose coins plus a pouch.
fn build_host(screen_width: i32) -> Result<SimulatedHost, ReplayError> {
    let id = |token: &str| ItemIdentity::parse(token).map_err(|_| ReplayError::Item(token.to_string()));

    let mut host = SimulatedHost::new(screen_width);
    for token in [
        "minecraft:diamond",
        "coinage:copper_coin",
        "coinage:silver_coin",
        "coinage:gold_coin",
        "coinage:coin_pouch",
    ] {
        host.registry.register(token);
    }

    let pouch = host.inventory.store_container(vec![
        ItemStack::new(id("coinage:copper_coin")?, 4),
        ItemStack::new(id("coinage:silver_coin")?, 1),
    ]);
    host.inventory
        .push(SlotGroup::Main, ItemStack::new(id("coinage:copper_coin")?, 5))
        .push(SlotGroup::Main, ItemStack::new(id("coinage:silver_coin")?, 2))
        .push(SlotGroup::Main, ItemStack::new(id("minecraft:diamond")?, 12))
        .push(SlotGroup::Offhand, ItemStack::new(id("coinage:gold_coin")?, 1))
        .push(SlotGroup::Main, ItemStack::new(id("coinage:coin_pouch")?, 1).with_payload(pouch));

    let mut fortunes = ScheduledFortunes::new();
    fortunes.insert(
        1,
        DailyFortune {
            positive: Some("minecraft:luck".to_string()),
            negative: Some("minecraft:slowness".to_string()),
        },
    );
    host.fortunes = Some(fortunes);

    Ok(host)
}
