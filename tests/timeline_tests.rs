mod common;
use common::{ev, ts};
use scriptboard::core::Core;
use scriptboard::core::calculator::summary::summarize;
use scriptboard::core::calculator::timeline::{
    filter_by_status, generate_time_slots, map_events_to_slots,
};
use scriptboard::models::{EventDuration, SlotState};

#[test]
fn test_generate_time_slots_covers_day_in_order() {
    let slots = generate_time_slots();

    assert_eq!(slots.len(), 24);
    for (i, slot) in slots.iter().enumerate() {
        assert_eq!(slot.hour(), i as u32);
        assert_eq!(slot.label(), format!("{:02}:00", i));
        assert_eq!(slot.end.format("%H:%M").to_string(), format!("{:02}:59", i));
    }
}

#[test]
fn test_scenario_two_scripts_same_hour() {
    let events = vec![
        ev("10.0.0.1", "a.py", "2024-01-01 09:15:00", Some("2024-01-01 09:45:00")),
        ev("10.0.0.1", "b.py", "2024-01-01 09:50:00", None),
    ];

    let mapped = map_events_to_slots(&events, &generate_time_slots());
    assert_eq!(mapped.len(), 24);

    for slot in &mapped {
        if slot.label == "09:00" {
            assert_eq!(slot.status, SlotState::Running);
            assert_eq!(slot.scripts, vec!["a.py", "b.py"]);
        } else {
            assert_eq!(slot.status, SlotState::Free, "slot {}", slot.label);
            assert!(slot.scripts.is_empty());
        }
    }
}

#[test]
fn test_event_on_hour_boundary_goes_to_that_hour() {
    let events = vec![ev("h", "edge.py", "2024-01-01 10:00:00", None)];
    let mapped = map_events_to_slots(&events, &generate_time_slots());

    assert_eq!(mapped[9].status, SlotState::Free);
    assert_eq!(mapped[10].label, "10:00");
    assert_eq!(mapped[10].status, SlotState::Running);
    assert_eq!(mapped[10].scripts, vec!["edge.py"]);
}

#[test]
fn test_long_running_event_occupies_only_start_hour() {
    let events = vec![ev("h", "long.py", "2024-01-01 08:30:00", Some("2024-01-01 14:00:00"))];
    let mapped = map_events_to_slots(&events, &generate_time_slots());

    let running: Vec<&str> = mapped
        .iter()
        .filter(|s| s.status == SlotState::Running)
        .map(|s| s.label.as_str())
        .collect();
    assert_eq!(running, vec!["08:00"]);
}

#[test]
fn test_mapping_neither_drops_nor_duplicates() {
    let events = vec![
        ev("h", "a", "2024-01-01 00:00:01", None),
        ev("h", "b", "2024-01-01 05:10:00", None),
        ev("h", "c", "2024-01-01 05:20:00", None),
        ev("h", "a", "2024-01-01 05:30:00", None),
        ev("h", "d", "2024-01-01 23:59:59", None),
    ];

    let mapped = map_events_to_slots(&events, &generate_time_slots());
    let mut all: Vec<String> = mapped.into_iter().flat_map(|s| s.scripts).collect();
    all.sort();

    assert_eq!(all, vec!["a", "a", "b", "c", "d"]);
}

#[test]
fn test_mapping_with_partial_slot_set() {
    let events = vec![
        ev("h", "early", "2024-01-01 02:00:00", None),
        ev("h", "late", "2024-01-01 20:00:00", None),
    ];
    let slots: Vec<_> = generate_time_slots().into_iter().skip(12).collect();

    let mapped = map_events_to_slots(&events, &slots);
    assert_eq!(mapped.len(), 12);
    assert_eq!(mapped[0].label, "12:00");

    let all: Vec<String> = mapped.into_iter().flat_map(|s| s.scripts).collect();
    assert_eq!(all, vec!["late"]);
}

#[test]
fn test_mapping_is_idempotent() {
    let events = vec![
        ev("h", "x", "2024-01-01 03:00:00", None),
        ev("h", "y", "2024-01-01 03:30:00", Some("2024-01-01 04:00:00")),
    ];
    let slots = generate_time_slots();

    assert_eq!(
        map_events_to_slots(&events, &slots),
        map_events_to_slots(&events, &slots)
    );
}

#[test]
fn test_empty_events_all_free() {
    let mapped = map_events_to_slots(&[], &generate_time_slots());
    assert!(mapped.iter().all(|s| s.status == SlotState::Free));
    assert!(mapped.iter().all(|s| s.scripts_display() == "None"));
}

#[test]
fn test_filter_by_status_keeps_order() {
    let events = vec![
        ev("h", "a", "2024-01-01 01:00:00", None),
        ev("h", "b", "2024-01-01 07:00:00", None),
    ];
    let mapped = map_events_to_slots(&events, &generate_time_slots());

    let running = filter_by_status(mapped.clone(), &[SlotState::Running]);
    let labels: Vec<&str> = running.iter().map(|s| s.label.as_str()).collect();
    assert_eq!(labels, vec!["01:00", "07:00"]);

    let free = filter_by_status(mapped.clone(), &[SlotState::Free]);
    assert_eq!(free.len(), 22);

    assert_eq!(filter_by_status(mapped.clone(), &SlotState::ALL).len(), 24);
    assert!(filter_by_status(mapped, &[]).is_empty());
}

#[test]
fn test_build_calendar_filters_after_full_day_mapping() {
    let events = vec![ev("h", "a", "2024-01-01 13:45:00", None)];
    let slots = Core::build_calendar(&events, &[SlotState::Running]);

    assert_eq!(slots.len(), 1);
    assert_eq!(slots[0].label, "13:00");
    assert_eq!(slots[0].scripts_display(), "a");
}

#[test]
fn test_duration_finished_and_running() {
    let done = ev("h", "a", "2024-01-01 10:00:00", Some("2024-01-01 10:30:00"));
    assert_eq!(done.duration().to_string(), "0:30:00");

    let open = ev("h", "b", "2024-01-01 10:00:00", None);
    assert_eq!(open.duration(), EventDuration::Running);
    assert_eq!(open.duration().to_string(), "Running");
}

#[test]
fn test_duration_formatting_hours_and_days() {
    let e = ev("h", "a", "2024-01-01 10:00:00", Some("2024-01-01 22:05:09"));
    assert_eq!(e.duration().to_string(), "12:05:09");

    let e = ev("h", "a", "2024-01-01 10:00:00", Some("2024-01-02 12:00:00"));
    assert_eq!(e.duration().to_string(), "1 day, 2:00:00");

    let e = ev("h", "a", "2024-01-01 10:00:00", Some("2024-01-04 10:00:01"));
    assert_eq!(e.duration().to_string(), "3 days, 0:00:01");
}

#[test]
fn test_negative_duration_passes_through() {
    let e = ev("h", "a", "2024-01-01 10:30:00", Some("2024-01-01 10:00:00"));
    assert_eq!(
        e.duration(),
        EventDuration::Finished(ts("2024-01-01 10:00:00") - ts("2024-01-01 10:30:00"))
    );
    assert_eq!(e.duration().to_string(), "-0:30:00");
}

#[test]
fn test_summary_counts() {
    let events = vec![
        ev("h", "a", "2024-01-01 01:00:00", Some("2024-01-01 01:10:00")),
        ev("h", "b", "2024-01-01 02:00:00", None),
        ev("h", "c", "2024-01-01 03:00:00", None),
    ];
    let s = summarize(&events);

    assert_eq!(s.total, 3);
    assert_eq!(s.completed, 1);
    assert_eq!(s.running, 2);
    assert_eq!(summarize(&[]).total, 0);
}
