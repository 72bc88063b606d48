use partyplan_core::{
    compute_tick_marks, compute_vertical_position, find_overlapping, format_minutes, seeded_store,
    EventId, PartyRepository, TimeOfDay, TimelineEvent, TimelineLayout, TimelineService,
    TimelineServiceError, TimelineWindow, VerticalSpan,
};

fn t(text: &str) -> TimeOfDay {
    text.parse().unwrap()
}

fn event(id: &str, start: &str, end: &str) -> TimelineEvent {
    TimelineEvent::new(id, format!("event {id}"), t(start), t(end)).unwrap()
}

#[test]
fn default_window_ticks_match_reference_ruler() {
    let window = TimelineWindow::new(t("16:00"), t("18:00"), 30).unwrap();
    let ticks = compute_tick_marks(&window);

    let minutes: Vec<u16> = ticks.iter().map(|tick| tick.minutes()).collect();
    assert_eq!(minutes, vec![960, 990, 1020, 1050, 1080]);

    let labels: Vec<String> = ticks.iter().map(|tick| format_minutes(tick.minutes())).collect();
    assert_eq!(labels, vec!["16:00", "16:30", "17:00", "17:30", "18:00"]);
}

#[test]
fn tick_count_is_floor_of_span_over_interval_plus_one() {
    for (interval, expected) in [(1u16, 121usize), (7, 18), (45, 3), (120, 2), (500, 1)] {
        let window = TimelineWindow::new(t("16:00"), t("18:00"), interval).unwrap();
        assert_eq!(compute_tick_marks(&window).len(), expected, "interval {interval}");
    }
}

#[test]
fn touching_boundary_is_not_an_overlap() {
    let selected = event("s", "16:00", "17:00");
    let touching = event("e", "17:00", "18:00");
    let crossing = event("f", "16:59", "18:00");
    let all = vec![selected.clone(), touching, crossing];

    let ids: Vec<&str> = find_overlapping(&selected, &all)
        .iter()
        .map(|e| e.id.as_str())
        .collect();
    assert_eq!(ids, vec!["f"]);
}

#[test]
fn position_is_anchored_to_window_start() {
    let layout = TimelineLayout::new(TimelineWindow::default(), 2.0).unwrap();
    let span = compute_vertical_position(&event("a", "16:15", "17:15"), &layout);
    assert_eq!(
        span,
        VerticalSpan {
            top: 30.0,
            height: 120.0
        }
    );
}

#[test]
fn moving_the_window_moves_the_anchor() {
    let window = TimelineWindow::new(t("16:30"), t("18:00"), 30).unwrap();
    let layout = TimelineLayout::new(window, 2.0).unwrap();
    let span = compute_vertical_position(&event("a", "16:15", "17:15"), &layout);
    assert_eq!(span.top, -30.0);
    assert_eq!(span.height, 120.0);
}

#[test]
fn isolated_selection_has_empty_overlap_group() {
    let all = vec![
        event("a", "16:00", "16:30"),
        event("b", "16:30", "17:00"),
        event("c", "17:30", "18:00"),
    ];
    let layout = TimelineLayout::default();

    let view = layout.render(&all[1], &all);
    assert!(!view.has_overlaps());

    let single = vec![event("a", "16:00", "16:45"), event("b", "16:30", "17:00")];
    let view = layout.render(&single[1], &single);
    assert!(view.has_overlaps());
    assert_eq!(view.overlapping.len(), 1);
}

#[test]
fn seeded_selection_uses_literal_overlap_relation() {
    let mut store = seeded_store().unwrap();
    let service = TimelineService::new(&mut store, TimelineLayout::default());

    let selected = EventId::from("event-1");
    let overlapping = service.overlapping_events(&selected).unwrap();
    let ids: Vec<&str> = overlapping.iter().map(|e| e.id.as_str()).collect();
    // event-3 (17:00-18:00) starts before the 17:15 end of event-1.
    assert_eq!(ids, vec!["event-2", "event-3"]);

    let view = service.timeline_view(&selected).unwrap();
    assert_eq!(view.selected.event_id, selected);
    assert!(view.selected.highlighted);
    assert_eq!(view.selected.span.top, 30.0);
    assert_eq!(view.selected.span.height, 120.0);
    assert_eq!(view.overlapping.len(), 2);
    assert!(view.overlapping.iter().all(|p| !p.highlighted));
    assert_eq!(view.ticks.len(), 5);
}

#[test]
fn unknown_selection_is_reported_not_defaulted() {
    let mut store = seeded_store().unwrap();
    let service = TimelineService::new(&mut store, TimelineLayout::default());

    let err = service
        .timeline_view(&EventId::from("event-404"))
        .unwrap_err();
    assert_eq!(
        err,
        TimelineServiceError::EventNotFound(EventId::from("event-404"))
    );
}

#[test]
fn layout_never_mutates_store_events() {
    let store = seeded_store().unwrap();
    let before = store.list_timeline_events();
    let layout = TimelineLayout::default();
    for selected in &before {
        let _ = layout.render(selected, &before);
    }
    assert_eq!(store.list_timeline_events(), before);
    assert_eq!(store.revision(), 0);
}
