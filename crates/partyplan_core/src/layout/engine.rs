//! Timeline geometry and overlap detection.
//!
//! # Responsibility
//! - Generate ruler tick marks for a window.
//! - Map events to `{top, height}` pixel spans.
//! - Find the events whose time range intersects a selected event.
//!
//! # Invariants
//! - Every function here is pure; inputs are never mutated.
//! - Overlap is strict: touching endpoints do not overlap.
//! - Result order is the pass-through order of the input slice.

use super::window::{TimelineLayout, TimelineWindow};
use crate::model::ids::EventId;
use crate::model::time::TimeOfDay;
use crate::model::timeline_event::TimelineEvent;

/// Vertical pixel placement of one event.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VerticalSpan {
    pub top: f64,
    pub height: f64,
}

/// Ruler mark with its label and pixel offset.
#[derive(Debug, Clone, PartialEq)]
pub struct TickMark {
    pub time: TimeOfDay,
    pub top: f64,
    pub label: String,
}

/// Event placed on the timeline.
#[derive(Debug, Clone, PartialEq)]
pub struct PositionedEvent {
    pub event_id: EventId,
    pub span: VerticalSpan,
    /// `true` only for the selected event.
    pub highlighted: bool,
}

/// Full render model for one selection.
#[derive(Debug, Clone, PartialEq)]
pub struct TimelineView {
    pub ticks: Vec<TickMark>,
    pub selected: PositionedEvent,
    /// Overlapping events, in store order. Empty means "no overlaps".
    pub overlapping: Vec<PositionedEvent>,
}

impl TimelineView {
    pub fn has_overlaps(&self) -> bool {
        !self.overlapping.is_empty()
    }
}

/// Tick marks every `tick_interval_minutes` from `start` through `end`.
///
/// The end is included when it lands exactly on the interval, so the result
/// has `floor((end - start) / interval) + 1` entries.
pub fn compute_tick_marks(window: &TimelineWindow) -> Vec<TimeOfDay> {
    let start = u32::from(window.start().minutes());
    let end = u32::from(window.end().minutes());
    let step = usize::from(window.tick_interval_minutes());

    (start..=end)
        .step_by(step)
        .filter_map(|minutes| TimeOfDay::from_minutes(minutes).ok())
        .collect()
}

/// Pixel span of `event` under `layout`.
///
/// Events outside the window yield negative or past-the-end offsets; callers
/// clip.
pub fn compute_vertical_position(event: &TimelineEvent, layout: &TimelineLayout) -> VerticalSpan {
    VerticalSpan {
        top: layout.offset_of(event.start),
        height: f64::from(event.duration_minutes()) * layout.pixels_per_minute(),
    }
}

/// Returns whether `candidate` intersects `selected`, excluding itself.
pub fn overlaps(candidate: &TimelineEvent, selected: &TimelineEvent) -> bool {
    candidate.id != selected.id && candidate.end > selected.start && candidate.start < selected.end
}

/// Events from `all` that overlap `selected`, in input order.
pub fn find_overlapping<'a>(
    selected: &TimelineEvent,
    all: &'a [TimelineEvent],
) -> Vec<&'a TimelineEvent> {
    all.iter()
        .filter(|candidate| overlaps(candidate, selected))
        .collect()
}

impl TimelineLayout {
    /// Ruler marks with their pixel offset and `H:MM` label.
    pub fn tick_marks(&self) -> Vec<TickMark> {
        compute_tick_marks(self.window())
            .into_iter()
            .map(|time| TickMark {
                time,
                top: self.offset_of(time),
                label: time.to_string(),
            })
            .collect()
    }

    /// Places one event; `highlighted` marks the selection.
    pub fn position(&self, event: &TimelineEvent, highlighted: bool) -> PositionedEvent {
        PositionedEvent {
            event_id: event.id.clone(),
            span: compute_vertical_position(event, self),
            highlighted,
        }
    }

    /// Builds ticks, the highlighted selection and its overlap group.
    pub fn render(&self, selected: &TimelineEvent, all: &[TimelineEvent]) -> TimelineView {
        TimelineView {
            ticks: self.tick_marks(),
            selected: self.position(selected, true),
            overlapping: find_overlapping(selected, all)
                .into_iter()
                .map(|event| self.position(event, false))
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{
        compute_tick_marks, compute_vertical_position, find_overlapping, overlaps, VerticalSpan,
    };
    use crate::layout::window::{TimelineLayout, TimelineWindow};
    use crate::model::time::TimeOfDay;
    use crate::model::timeline_event::TimelineEvent;

    fn t(text: &str) -> TimeOfDay {
        text.parse().unwrap()
    }

    fn event(id: &str, start: &str, end: &str) -> TimelineEvent {
        TimelineEvent::new(id, format!("event {id}"), t(start), t(end)).unwrap()
    }

    #[test]
    fn default_window_ticks_every_half_hour_inclusive() {
        let ticks = compute_tick_marks(&TimelineWindow::default());
        let minutes: Vec<u16> = ticks.iter().map(|tick| tick.minutes()).collect();
        assert_eq!(minutes, vec![960, 990, 1020, 1050, 1080]);
        let labels: Vec<String> = ticks.iter().map(ToString::to_string).collect();
        assert_eq!(labels, vec!["16:00", "16:30", "17:00", "17:30", "18:00"]);
    }

    #[test]
    fn ticks_stop_before_end_when_interval_does_not_divide_span() {
        let window = TimelineWindow::new(t("16:00"), t("17:00"), 25).unwrap();
        let minutes: Vec<u16> = compute_tick_marks(&window)
            .iter()
            .map(|tick| tick.minutes())
            .collect();
        assert_eq!(minutes, vec![960, 985, 1010]);
    }

    #[test]
    fn ticks_reach_last_minute_of_day() {
        let window = TimelineWindow::new(t("23:00"), t("23:59"), 59).unwrap();
        let ticks = compute_tick_marks(&window);
        assert_eq!(ticks, vec![t("23:00"), t("23:59")]);
    }

    #[test]
    fn vertical_position_is_anchored_to_window_start() {
        let layout = TimelineLayout::default();
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
    fn events_before_window_get_negative_top() {
        let layout = TimelineLayout::default();
        let span = compute_vertical_position(&event("a", "15:30", "16:30"), &layout);
        assert_eq!(span.top, -60.0);
        assert_eq!(span.height, 120.0);
    }

    #[test]
    fn touching_endpoints_do_not_overlap() {
        let selected = event("s", "16:00", "17:00");
        assert!(!overlaps(&event("e", "17:00", "18:00"), &selected));
        assert!(!overlaps(&event("e", "15:00", "16:00"), &selected));
        assert!(overlaps(&event("e", "16:59", "18:00"), &selected));
    }

    #[test]
    fn selected_event_never_overlaps_itself() {
        let selected = event("s", "16:00", "17:00");
        let all = vec![selected.clone()];
        assert!(find_overlapping(&selected, &all).is_empty());
    }

    #[test]
    fn overlap_result_keeps_input_order() {
        let selected = event("s", "16:00", "18:00");
        let all = vec![
            event("c", "17:30", "18:30"),
            selected.clone(),
            event("a", "15:00", "16:30"),
            event("b", "18:00", "19:00"),
        ];
        let ids: Vec<&str> = find_overlapping(&selected, &all)
            .iter()
            .map(|e| e.id.as_str())
            .collect();
        assert_eq!(ids, vec!["c", "a"]);
    }

    #[test]
    fn render_marks_only_selection_as_highlighted() {
        let layout = TimelineLayout::default();
        let all = vec![event("a", "16:00", "17:00"), event("b", "16:30", "17:30")];
        let view = layout.render(&all[0], &all);

        assert_eq!(view.ticks.len(), 5);
        assert_eq!(view.ticks[0].top, 0.0);
        assert_eq!(view.ticks[4].top, 240.0);
        assert_eq!(view.ticks[1].label, "16:30");
        assert!(view.selected.highlighted);
        assert_eq!(view.selected.event_id.as_str(), "a");
        assert!(view.has_overlaps());
        assert_eq!(view.overlapping.len(), 1);
        assert!(!view.overlapping[0].highlighted);
        assert_eq!(view.overlapping[0].span.top, 60.0);
    }

    #[test]
    fn render_reports_empty_overlap_group() {
        let layout = TimelineLayout::default();
        let all = vec![event("a", "16:00", "16:30"), event("b", "17:00", "17:30")];
        let view = layout.render(&all[0], &all);
        assert!(!view.has_overlaps());
        assert!(view.overlapping.is_empty());
    }
}
