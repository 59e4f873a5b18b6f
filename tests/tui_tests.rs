// Dashboard formatting, key mapping and frame rendering

mod common;

use common::{at, collect_error, cpu_snapshot, disk_snapshot, memory_snapshot, network_snapshot};
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use hostwatch::error::ErrorKind;
use hostwatch::models::{ResourceKind, Snapshot};
use hostwatch::state::{AggregateState, Direction, Event, Key, reduce};
use hostwatch::tui::format::{
    bar_width, format_bytes, format_percent, format_rate, truncate, usage_bar,
};
use hostwatch::tui::input::translate_key;
use hostwatch::tui::{panel_title, render};
use ratatui::Terminal;
use ratatui::backend::TestBackend;

#[test]
fn test_bytes_use_binary_units_with_one_decimal() {
    assert_eq!(format_bytes(0), "0B");
    assert_eq!(format_bytes(512), "512B");
    assert_eq!(format_bytes(1024), "1.0KB");
    assert_eq!(format_bytes(1536), "1.5KB");
    assert_eq!(format_bytes(1_048_576), "1.0MB");
    assert_eq!(format_bytes(1_073_741_824), "1.0GB");
    assert_eq!(format_bytes(1_099_511_627_776), "1.0TB");
    assert_eq!(format_bytes(1_536_000_000_000), "1.4TB");
}

#[test]
fn test_rates_show_per_second_suffix() {
    assert_eq!(format_rate(0.0), "0B/s");
    assert_eq!(format_rate(512.0), "512B/s");
    assert_eq!(format_rate(1536.0), "1.5KB/s");
    assert_eq!(format_rate(5.0 * 1024.0 * 1024.0), "5.0MB/s");
    assert_eq!(format_percent(42.345), "42.3%");
}

#[test]
fn test_usage_bar_fills_proportionally() {
    assert_eq!(usage_bar(50.0, 10), "█████░░░░░");
    assert_eq!(usage_bar(0.0, 4), "░░░░");
    assert_eq!(usage_bar(250.0, 4), "████");
    assert_eq!(usage_bar(50.0, 10).chars().count(), 10);
}

#[test]
fn test_bar_width_never_drops_below_ten() {
    assert_eq!(bar_width(60, 10), 40);
    assert_eq!(bar_width(20, 10), 10);
    assert_eq!(bar_width(5, 10), 10);
}

#[test]
fn test_truncate_marks_the_cut() {
    assert_eq!(truncate("eth0", 10), "eth0");
    assert_eq!(truncate("wlp3s0-long-name", 6), "wlp3s…");
    assert_eq!(truncate("abc", 0), "");
}

fn press(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::NONE)
}

#[test]
fn test_keys_map_to_reducer_actions() {
    assert_eq!(translate_key(press(KeyCode::Char('q'))), Some(Key::Quit));
    assert_eq!(
        translate_key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)),
        Some(Key::Quit)
    );
    assert_eq!(translate_key(press(KeyCode::Char('?'))), Some(Key::ToggleHelp));
    assert_eq!(translate_key(press(KeyCode::Char('h'))), Some(Key::ToggleHelp));
    assert_eq!(translate_key(press(KeyCode::Esc)), Some(Key::Escape));
    assert_eq!(translate_key(press(KeyCode::Char('r'))), Some(Key::Refresh));
    assert_eq!(
        translate_key(press(KeyCode::Tab)),
        Some(Key::Navigate(Direction::Forward))
    );
    assert_eq!(
        translate_key(KeyEvent::new(KeyCode::BackTab, KeyModifiers::SHIFT)),
        Some(Key::Navigate(Direction::Backward))
    );
    assert_eq!(
        translate_key(press(KeyCode::Char('j'))),
        Some(Key::Navigate(Direction::Down))
    );
    assert_eq!(
        translate_key(press(KeyCode::Up)),
        Some(Key::Navigate(Direction::Up))
    );
}

#[test]
fn test_unbound_and_released_keys_are_ignored() {
    assert_eq!(translate_key(press(KeyCode::Char('x'))), None);
    assert_eq!(
        translate_key(KeyEvent::new(KeyCode::Char('x'), KeyModifiers::CONTROL)),
        None
    );
    let mut release = press(KeyCode::Char('q'));
    release.kind = KeyEventKind::Release;
    assert_eq!(translate_key(release), None);
}

fn draw(state: &AggregateState) -> String {
    let backend = TestBackend::new(state.viewport.width, state.viewport.height);
    let mut terminal = Terminal::new(backend).unwrap();
    terminal.draw(|frame| render(frame, state)).unwrap();
    let buffer = terminal.backend().buffer();
    let width = buffer.area.width as usize;
    buffer
        .content()
        .chunks(width)
        .map(|row| row.iter().map(|cell| cell.symbol()).collect::<String>())
        .collect::<Vec<_>>()
        .join("\n")
}

fn feed(state: AggregateState, events: Vec<Event>) -> AggregateState {
    events
        .into_iter()
        .fold(state, |state, event| reduce(state, event).0)
}

#[test]
fn test_grid_shows_every_panel_while_loading() {
    let screen = draw(&AggregateState::new(120, 40, 10));
    for kind in ResourceKind::ALL {
        assert!(screen.contains(panel_title(kind)), "missing {kind}");
    }
    assert!(screen.contains("Loading CPU data..."));
    assert!(screen.contains("Loading network data..."));
}

#[test]
fn test_failed_panel_shows_error_while_others_show_data() {
    let err = collect_error(ErrorKind::Permission, ResourceKind::Disk, "statvfs denied", at(1));
    let state = feed(
        AggregateState::new(120, 40, 10),
        vec![
            Event::Tick { at: at(1) },
            Event::SampleSucceeded(Snapshot::Cpu(cpu_snapshot(at(1), &[10.0, 20.0]))),
            Event::SampleSucceeded(Snapshot::Memory(memory_snapshot(at(1), 1 << 30, 1 << 29))),
            Event::SampleFailed(ResourceKind::Disk, err),
            Event::SampleSucceeded(Snapshot::Network(network_snapshot(
                at(1),
                &[("eth0", 10, 20)],
            ))),
        ],
    );

    let screen = draw(&state);
    assert!(screen.contains("Error: statvfs denied"));
    assert!(screen.contains("Disk data unavailable"));
    assert!(screen.contains("Core 1:"));
    assert!(screen.contains("eth0"));
    assert!(screen.contains("Calculating rates..."));
}

#[test]
fn test_narrow_terminal_stacks_only_panels_with_content() {
    let state = feed(
        AggregateState::new(60, 30, 10),
        vec![Event::SampleSucceeded(Snapshot::Disk(disk_snapshot(
            at(0),
            &[("/", 100 << 30, 50 << 30)],
        )))],
    );
    let screen = draw(&state);
    assert!(screen.contains("Disk Usage"));
    assert!(!screen.contains("CPU Usage"));

    let empty = draw(&AggregateState::new(60, 30, 10));
    assert!(empty.contains("Collecting system information..."));
}

#[test]
fn test_help_overlay_is_drawn_on_top() {
    let state = reduce(
        AggregateState::new(120, 40, 10),
        Event::KeyPressed(Key::ToggleHelp),
    )
    .0;
    let screen = draw(&state);
    assert!(screen.contains("Help"));
    assert!(screen.contains("Toggle this help"));
}

#[test]
fn test_help_overlay_on_very_wide_terminal() {
    let state = reduce(
        AggregateState::new(1200, 900, 10),
        Event::KeyPressed(Key::ToggleHelp),
    )
    .0;
    let screen = draw(&state);
    assert!(screen.contains("Toggle this help"));

    let help_row = screen
        .lines()
        .find(|row| row.contains(" Help "))
        .expect("help title row");
    let border_cells = help_row.chars().filter(|c| *c == '─').count();
    assert!(border_cells < 80, "popup stays clamped, got {border_cells}");
}
