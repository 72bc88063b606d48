//! Plain-text rendering of core read models.

use partyplan_core::{
    compute_vertical_position, CompletionRate, Element, ElementCategory, MaterialProgress,
    NewElement, PartyOverview, TaskGroup, TimelineEvent, TimelineLayout, TimelineView,
};
use std::fmt::{Result, Write};

const SELECTED_MARK: char = '*';
const OVERLAP_MARK: char = '~';

/// Ruler plus every event in schedule order, selection and overlaps marked.
pub fn timeline(
    out: &mut impl Write,
    view: &TimelineView,
    layout: &TimelineLayout,
    events: &[TimelineEvent],
) -> Result {
    writeln!(
        out,
        "Timeline {}-{} ({} px/min)",
        layout.window().start(),
        layout.window().end(),
        layout.pixels_per_minute()
    )?;
    for tick in &view.ticks {
        writeln!(out, "  {:>6.1}px  {}", tick.top, tick.label)?;
    }

    writeln!(out)?;
    for event in events {
        let mark = if event.id == view.selected.event_id {
            SELECTED_MARK
        } else if view.overlapping.iter().any(|p| p.event_id == event.id) {
            OVERLAP_MARK
        } else {
            ' '
        };
        let span = compute_vertical_position(event, layout);
        writeln!(
            out,
            "{mark} {:>5}-{:<5} {:<24} top={:.1} height={:.1}",
            event.start.to_string(),
            event.end.to_string(),
            event.title,
            span.top,
            span.height,
        )?;
    }

    writeln!(out)?;
    if view.has_overlaps() {
        let ids: Vec<&str> = view
            .overlapping
            .iter()
            .map(|p| p.event_id.as_str())
            .collect();
        writeln!(out, "Overlaps with: {}", ids.join(", "))?;
    } else {
        writeln!(out, "No overlapping events")?;
    }

    if let Some(selected) = events.iter().find(|e| e.id == view.selected.event_id) {
        checklist(out, selected)?;
    }
    Ok(())
}

/// Inline checklist and reference links of one event card.
fn checklist(out: &mut impl Write, event: &TimelineEvent) -> Result {
    let (done, total) = event.checklist_progress();
    writeln!(out, "\n{} ({done}/{total} done)", event.title)?;
    if !event.description.is_empty() {
        writeln!(out, "  {}", event.description)?;
    }
    for item in &event.tasks {
        let check = if item.done { 'x' } else { ' ' };
        writeln!(out, "  [{check}] {}", item.text)?;
    }
    for link in &event.elements {
        writeln!(out, "  {} <{}>", link.label, link.url)?;
    }
    Ok(())
}

/// Tasks grouped under their category headings.
pub fn task_groups(out: &mut impl Write, groups: &[TaskGroup], rate: CompletionRate) -> Result {
    writeln!(
        out,
        "Tasks: {}/{} complete ({}%)",
        rate.completed,
        rate.total,
        rate.percentage()
    )?;
    if groups.is_empty() {
        writeln!(out, "\nNo tasks match the filter")?;
    }
    for group in groups {
        writeln!(out, "\n{}", group.category.label())?;
        for task in &group.tasks {
            let check = if task.completed { 'x' } else { ' ' };
            writeln!(
                out,
                "  [{check}] {:<28} due {}  {}",
                task.title, task.due_date, task.priority
            )?;
        }
    }
    Ok(())
}

pub fn elements(
    out: &mut impl Write,
    elements: &[Element],
    category: Option<ElementCategory>,
) -> Result {
    match category {
        Some(category) => {
            writeln!(out, "{} ({})", category.label(), elements.len())?;
        }
        None => {
            writeln!(out, "All elements ({})", elements.len())?;
        }
    }
    for element in elements {
        writeln!(
            out,
            "\n{} [{}] {}",
            element.title,
            element.category,
            materials_label(element.material_progress())
        )?;
        if !element.description.is_empty() {
            writeln!(out, "  {}", element.description)?;
        }
        for material in element.materials.as_deref().unwrap_or_default() {
            let check = if material.purchased { 'x' } else { ' ' };
            writeln!(out, "  [{check}] {} x{}", material.name, material.quantity)?;
        }
    }
    Ok(())
}

pub fn overview(out: &mut impl Write, overview: &PartyOverview) -> Result {
    let details = &overview.details;
    writeln!(out, "{}", details.title)?;
    writeln!(
        out,
        "{} at {}, {} ({} guests)",
        details.date, details.time, details.location, details.expected_guests
    )?;
    writeln!(out, "Days until party: {}", overview.days_until_party)?;
    writeln!(
        out,
        "Tasks: {}/{} ({}%)",
        overview.tasks.completed,
        overview.tasks.total,
        overview.tasks.percentage()
    )?;
    writeln!(out, "Materials: {}", materials_label(overview.materials))?;
    if let Some(event) = &overview.next_event {
        writeln!(out, "First event: {} at {}", event.title, event.start)?;
    }
    if !overview.upcoming_tasks.is_empty() {
        writeln!(out, "\nUpcoming")?;
        for task in &overview.upcoming_tasks {
            writeln!(out, "  {}  {}", task.due_date, task.title)?;
        }
    }
    Ok(())
}

/// Numbered preset catalog for `elements --suggestions`.
pub fn suggestions(out: &mut impl Write, presets: &[NewElement]) -> Result {
    writeln!(out, "Suggested elements ({})", presets.len())?;
    for (index, preset) in presets.iter().enumerate() {
        writeln!(out, "\n[{index}] {} [{}]", preset.title, preset.category)?;
        writeln!(out, "  {}", preset.description)?;
    }
    Ok(())
}

fn materials_label(progress: MaterialProgress) -> String {
    if progress.total == 0 {
        return "no materials".to_string();
    }
    format!("{}/{} purchased", progress.purchased, progress.total)
}
