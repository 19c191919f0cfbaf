//! Integration test: full HUD sessions against a recording backend.
//!
//! Run with: cargo test -p almanac --test session_test

use almanac::economy::{CountOutcome, ItemIdentity, ItemStack, SlotGroup};
use almanac::shared::{HudAnchor, SharedSettings};
use almanac::time::{Season, Weather, Weekday};
use almanac::ui::{DrawCommand, RecordingBackend};
use almanac::{EventBus, HudController, HudEvent, SimulatedHost};

const DAY: u64 = 24_000;

fn id(token: &str) -> ItemIdentity {
    ItemIdentity::parse(token).unwrap()
}

fn coin_host() -> SimulatedHost {
    let mut host = SimulatedHost::new(1280);
    for token in ["coinage:copper_coin", "coinage:silver_coin", "coinage:gold_coin", "coinage:coin_pouch"] {
        host.registry.register(token);
    }
    let pouch = host
        .inventory
        .store_container(vec![ItemStack::new(id("coinage:copper_coin"), 2)]);
    host.inventory
        .push(SlotGroup::Main, ItemStack::new(id("coinage:copper_coin"), 3))
        .push(SlotGroup::Main, ItemStack::new(id("coinage:silver_coin"), 1))
        .push(SlotGroup::Armor, ItemStack::new(id("coinage:gold_coin"), 1))
        .push(SlotGroup::Main, ItemStack::new(id("coinage:coin_pouch"), 1).with_payload(pouch));
    host
}

fn coin_settings() -> SharedSettings {
    let settings = SharedSettings::default();
    settings.edit(|c| c.counter_item_id = "coinage:copper_coin".to_string());
    settings
}

#[test]
fn test_full_frame_draw_order() {
    let mut host = coin_host();
    host.set_time(5 * DAY + 12_000);
    host.set_weather(true, true);
    host.next_frame();

    let mut controller = HudController::new(coin_settings());
    controller.update(&host);

    let mut backend = RecordingBackend::new();
    let geometry = controller.render(&host, &mut backend).unwrap();

    assert_eq!((geometry.origin_x, geometry.origin_y), (1280 - 120 - 10, 10));
    assert_eq!(backend.transform_depth(), 0);
    assert_eq!(
        backend.blitted_textures(),
        vec![
            "almanac:textures/gui/counter_bg.png",
            "almanac:textures/gui/clock_bg.png",
            "almanac:textures/gui/clock_hand.png",
            "almanac:textures/gui/info_bg.png",
            "almanac:textures/icons/weather/thunder.png",
            "almanac:textures/icons/season/spring.png",
        ]
    );
    // 3 + 9 + 81 + pouch of 2.
    assert_eq!(backend.texts(), vec!["95", "Fri. 5", "18:00"]);

    let commands = backend.commands();
    assert_eq!(commands[0], DrawCommand::PushTransform);
    assert_eq!(commands[1], DrawCommand::Translate { x: 1150.0, y: 10.0 });
    assert_eq!(commands[2], DrawCommand::Scale(1.0));
    assert_eq!(commands.last(), Some(&DrawCommand::PopTransform));
}

#[test]
fn test_day_skip_and_time_reversal() {
    let (sender, receiver) = EventBus::create_pair(32);
    let mut host = coin_host();
    let mut controller = HudController::new(coin_settings()).with_events(sender);

    host.set_time(3 * DAY);
    controller.update(&host);
    assert_eq!(controller.time_state().day_index, 3);
    assert_eq!(controller.time_state().weekday, Weekday::Wednesday);

    // A day-skip command jumps five raw days.
    host.set_time(8 * DAY + 100);
    controller.update(&host);
    assert_eq!(controller.time_state().day_index, 8);

    // Forcing the displayed day decouples it from raw days.
    controller.set_current_day(20);
    host.set_time(9 * DAY);
    controller.update(&host);
    assert_eq!(controller.time_state().day_index, 29);

    // Going back resets to the raw day, never below 1.
    host.set_time(100);
    controller.update(&host);
    assert_eq!(controller.time_state().day_index, 1);
    assert_eq!(controller.time_state().weekday, Weekday::Monday);

    let events = receiver.drain();
    assert_eq!(events[0], HudEvent::SessionStarted);
    assert!(events.contains(&HudEvent::DayAdvanced { day: 8, delta: 5 }));
    assert!(events.contains(&HudEvent::DayAdvanced { day: 29, delta: 9 }));
    assert_eq!(events.last(), Some(&HudEvent::TimeReversed { day: 1 }));
}

#[test]
fn test_season_follows_raw_days_and_config() {
    let (sender, receiver) = EventBus::create_pair(32);
    let mut host = coin_host();
    let settings = coin_settings();
    let mut controller = HudController::new(settings.clone()).with_events(sender);

    host.set_time(27 * DAY);
    controller.update(&host);
    assert_eq!(controller.season(), Season::Spring);

    // Day skip on the displayed counter does not move the season.
    controller.set_current_day(90);
    controller.update(&host);
    assert_eq!(controller.season(), Season::Spring);

    host.set_time(28 * DAY);
    controller.update(&host);
    assert_eq!(controller.season(), Season::Summer);

    // New length applies at the next day boundary only.
    settings.edit(|c| c.season_length_days = 7);
    controller.update(&host);
    assert_eq!(controller.season(), Season::Summer);
    host.set_time(29 * DAY);
    controller.update(&host);
    assert_eq!(controller.season(), Season::Spring);

    let seasons: Vec<_> = receiver
        .drain()
        .into_iter()
        .filter(|e| matches!(e, HudEvent::SeasonChanged { .. }))
        .collect();
    assert_eq!(
        seasons,
        vec![
            HudEvent::SeasonChanged {
                from: Season::Spring,
                to: Season::Summer,
                day: 28,
            },
            HudEvent::SeasonChanged {
                from: Season::Summer,
                to: Season::Spring,
                day: 29,
            },
        ]
    );
}

#[test]
fn test_counter_sampled_once_per_frame() {
    let mut host = coin_host();
    host.next_frame();
    let mut controller = HudController::new(coin_settings());

    controller.update(&host);
    assert_eq!(controller.count(), CountOutcome::Counted(95));

    host.inventory
        .push(SlotGroup::Main, ItemStack::new(id("coinage:copper_coin"), 10));
    controller.update(&host);
    assert_eq!(controller.count(), CountOutcome::Counted(95));

    host.next_frame();
    controller.update(&host);
    assert_eq!(controller.count(), CountOutcome::Counted(105));

    // Pouch integration missing: the pouch counts zero, nothing fails.
    host.inventory.set_unpack_enabled(false);
    controller.mark_inventory_changed();
    controller.update(&host);
    assert_eq!(controller.count(), CountOutcome::Counted(103));
}

#[test]
fn test_unresolved_item_shows_placeholder() {
    let mut host = coin_host();
    host.next_frame();
    let settings = coin_settings();
    settings.edit(|c| c.counter_item_id = "nosuchmod:gizmo".to_string());
    let mut controller = HudController::new(settings);

    controller.update(&host);
    assert_eq!(controller.count(), CountOutcome::Unresolved);

    let mut backend = RecordingBackend::new();
    controller.render(&host, &mut backend).unwrap();
    assert_eq!(backend.texts()[0], "?");
    assert!(!backend
        .commands()
        .iter()
        .any(|c| matches!(c, DrawCommand::Item { .. })));
}

#[test]
fn test_scaled_explicit_anchor_and_suppression() {
    let mut host = coin_host();
    host.set_weather(true, false);
    let settings = coin_settings();
    settings.edit(|c| {
        c.scale = 2.0;
        c.suppress_host_overlay = true;
    });
    let mut controller = HudController::new(settings.clone());
    controller.update(&host);
    assert_eq!(controller.weather(), Weather::Rainy);

    let mut backend = RecordingBackend::new();
    let geometry = controller.render(&host, &mut backend).unwrap();
    assert_eq!((geometry.width, geometry.height), (240, 190));
    assert_eq!(geometry.origin_x, 1280 - 240 - 10);
    assert!(controller.should_suppress_status_effects(&host));

    // Placed under the reserved region: touching its bottom edge is not overlap.
    settings.edit(|c| c.position = HudAnchor::new(300, 100));
    assert!(!controller.should_suppress_status_effects(&host));

    settings.edit(|c| c.position = HudAnchor::new(300, 99));
    assert!(controller.should_suppress_status_effects(&host));
}

#[test]
fn test_day_survives_world_reload() {
    let (sender, receiver) = EventBus::create_pair(32);
    let mut host = coin_host();
    let mut controller = HudController::new(coin_settings()).with_events(sender);

    host.set_time(0);
    controller.update(&host);
    host.set_time(5 * DAY);
    controller.update(&host);
    controller.set_fortune_for_testing(Some("minecraft:luck"), None);
    assert_eq!(controller.time_state().day_index, 6);

    host.set_session_active(false);
    controller.update(&host);
    let mut backend = RecordingBackend::new();
    assert!(controller.render(&host, &mut backend).is_none());
    assert!(!controller.should_suppress_status_effects(&host));
    assert!(!controller.fortune().has_data());
    assert_eq!(controller.count(), CountOutcome::Unresolved);

    // The reloaded world starts at tick 0: the day carries over.
    host.set_session_active(true);
    host.set_time(0);
    controller.update(&host);
    assert_eq!(controller.time_state().day_index, 6);
    assert_eq!(controller.time_state().weekday, Weekday::Saturday);

    host.set_time(DAY);
    controller.update(&host);
    assert_eq!(controller.time_state().day_index, 7);

    let events = receiver.drain();
    assert_eq!(
        events.iter().filter(|e| matches!(e, HudEvent::TimeReversed { .. })).count(),
        0
    );
    assert_eq!(events.last(), Some(&HudEvent::DayAdvanced { day: 7, delta: 1 }));
}
