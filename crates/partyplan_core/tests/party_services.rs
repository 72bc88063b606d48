use jiff::civil::date;
use partyplan_core::seed::suggested_elements;
use partyplan_core::{
    seeded_store, CompletionFilter, ElementCategory, ElementId, ElementPatch, ElementService,
    ElementServiceError, EventId, NewElement, PartyDetailsPatch, PartyRepository, PartyService,
    RepoError, TaskCategory, TaskFilter, TaskId, TaskPatch, TaskPriority, TaskService, TimeOfDay,
    TimelineEventPatch, TimelineLayout, TimelineService, TimelineServiceError,
};

fn ids<T: ToString>(values: impl IntoIterator<Item = T>) -> Vec<String> {
    values.into_iter().map(|value| value.to_string()).collect()
}

#[test]
fn task_filters_combine_and_preserve_store_order() {
    let mut store = seeded_store().unwrap();
    let service = TaskService::new(&mut store);

    let all = service.list_tasks(&TaskFilter::default());
    assert_eq!(all.len(), 7);

    let pending_prepare = service.list_tasks(&TaskFilter {
        category: Some(TaskCategory::ToPrepare),
        completion: CompletionFilter::Pending,
        priority: None,
    });
    assert_eq!(
        ids(pending_prepare.iter().map(|t| &t.id)),
        vec!["task-5", "task-6", "task-7"]
    );

    let completed_high = service.list_tasks(&TaskFilter {
        category: None,
        completion: CompletionFilter::Completed,
        priority: Some(TaskPriority::High),
    });
    assert_eq!(ids(completed_high.iter().map(|t| &t.id)), vec!["task-1"]);

    let groups = service.grouped_tasks(&TaskFilter::default());
    let order: Vec<TaskCategory> = groups.iter().map(|g| g.category).collect();
    assert_eq!(order, TaskCategory::ALL.to_vec());
}

#[test]
fn toggling_a_task_updates_completion_rate() {
    let mut store = seeded_store().unwrap();
    let mut service = TaskService::new(&mut store);

    let rate = service.completion_rate();
    assert_eq!((rate.completed, rate.total), (1, 7));
    assert_eq!(rate.percentage(), 14);

    let task = service.toggle_completion(&TaskId::from("task-3")).unwrap();
    assert!(task.completed);
    assert_eq!(service.completion_rate().completed, 2);

    let task = service.toggle_completion(&TaskId::from("task-3")).unwrap();
    assert!(!task.completed);
    assert!(service.toggle_completion(&TaskId::from("task-404")).is_err());
    assert_eq!(store.revision(), 2);
}

#[test]
fn past_due_tasks_exclude_completed_and_today() {
    let mut store = seeded_store().unwrap();
    let service = TaskService::new(&mut store);

    let overdue = service.past_due_tasks(date(2026, 6, 7));
    // task-1 is due earlier but already done; task-2 is due that day.
    assert_eq!(ids(overdue.iter().map(|t| &t.id)), vec!["task-3"]);
}

#[test]
fn task_relations_resolve_both_directions() {
    let mut store = seeded_store().unwrap();
    let service = TaskService::new(&mut store);

    let relations = service.relations(&TaskId::from("task-7")).unwrap();
    assert_eq!(ids(relations.elements.iter().map(|e| &e.id)), vec!["element-1"]);
    assert_eq!(
        ids(relations.timeline_events.iter().map(|e| &e.id)),
        vec!["event-4"]
    );
}

#[test]
fn material_purchases_roll_up_across_elements() {
    let mut store = seeded_store().unwrap();
    let mut service = ElementService::new(&mut store);

    let progress = service.overall_material_progress();
    assert_eq!((progress.purchased, progress.total), (2, 16));

    let element = service
        .toggle_material_purchased(&ElementId::from("element-1"), 2)
        .unwrap();
    assert!(element.material_progress().is_complete());
    assert_eq!(service.overall_material_progress().purchased, 3);

    let err = service
        .toggle_material_purchased(&ElementId::from("element-4"), 2)
        .unwrap_err();
    assert_eq!(
        err,
        ElementServiceError::MaterialIndexOutOfRange {
            element: ElementId::from("element-4"),
            index: 2,
            len: 2,
        }
    );

    let err = service
        .toggle_material_purchased(&ElementId::from("element-0"), 0)
        .unwrap_err();
    assert_eq!(
        err,
        ElementServiceError::ElementNotFound(ElementId::from("element-0"))
    );
}

#[test]
fn new_elements_get_generated_ids_and_no_materials() {
    let mut store = seeded_store().unwrap();
    let mut service = ElementService::new(&mut store);

    let created = service
        .add_element(NewElement {
            title: "Photo Booth".to_string(),
            description: "Props and a berry backdrop".to_string(),
            image: None,
            category: ElementCategory::Activity,
        })
        .unwrap();
    assert!(created.id.as_str().starts_with("element-"));
    assert_eq!(created.materials, None);

    let activities = service.list_elements(Some(ElementCategory::Activity));
    assert_eq!(activities, vec![created.clone()]);
    assert_eq!(service.list_elements(None).len(), 6);
    assert_eq!(store.get_element(&created.id), Some(created));
}

#[test]
fn element_relations_skip_dangling_ids() {
    let mut store = seeded_store().unwrap();
    let mut service = ElementService::new(&mut store);

    service
        .update_element(
            &ElementId::from("element-3"),
            &ElementPatch {
                related_tasks: Some(vec![TaskId::from("task-5"), TaskId::from("task-gone")]),
                ..Default::default()
            },
        )
        .unwrap();

    let relations = service.relations(&ElementId::from("element-3")).unwrap();
    assert_eq!(ids(relations.tasks.iter().map(|t| &t.id)), vec!["task-5"]);
    assert_eq!(
        ids(relations.timeline_events.iter().map(|e| &e.id)),
        vec!["event-1"]
    );
}

#[test]
fn timeline_orders_by_start_and_resolves_relations() {
    let mut store = seeded_store().unwrap();
    let service = TimelineService::new(&mut store, TimelineLayout::default());

    let order = service.sorted_events();
    assert_eq!(
        ids(order.iter().map(|e| &e.id)),
        vec!["event-2", "event-1", "event-3", "event-4"]
    );
    assert_eq!(service.next_event().unwrap().id, EventId::from("event-2"));

    let relations = service.relations(&EventId::from("event-1")).unwrap();
    assert_eq!(ids(relations.tasks.iter().map(|t| &t.id)), vec!["task-5"]);
    assert_eq!(
        ids(relations.elements.iter().map(|e| &e.id)),
        vec!["element-3", "element-4"]
    );
    assert_eq!(relations.len(), 3);
}

#[test]
fn overview_summarizes_the_party() {
    let mut store = seeded_store().unwrap();
    let service = PartyService::new(&mut store);

    let overview = service.overview(date(2026, 6, 4));
    assert_eq!(overview.days_until_party, 10);
    assert_eq!(overview.details.title, "Berry Sweet First Birthday");
    assert_eq!((overview.tasks.completed, overview.tasks.total), (1, 7));
    assert_eq!(
        (overview.materials.purchased, overview.materials.total),
        (2, 16)
    );
    assert_eq!(
        ids(overview.upcoming_tasks.iter().map(|t| &t.id)),
        vec!["task-3", "task-2", "task-4"]
    );
    assert_eq!(
        overview.next_event.map(|e| e.id),
        Some(EventId::from("event-2"))
    );
}

#[test]
fn days_until_party_clamps_after_the_date() {
    let mut store = seeded_store().unwrap();
    let mut service = PartyService::new(&mut store);

    assert_eq!(service.days_until_party(date(2026, 6, 14)), 0);
    assert_eq!(service.days_until_party(date(2026, 7, 1)), 0);

    service
        .update_details(&PartyDetailsPatch {
            date: Some(date(2026, 6, 20)),
            ..PartyDetailsPatch::default()
        })
        .unwrap();
    assert_eq!(service.days_until_party(date(2026, 6, 14)), 6);
}

#[test]
fn suggested_presets_are_added_as_fresh_unlinked_elements() {
    let mut store = seeded_store().unwrap();
    let mut service = ElementService::new(&mut store);

    let first = service.add_suggested(1).unwrap();
    let second = service.add_suggested(1).unwrap();
    assert_eq!(first.title, "Time Capsule Station");
    assert_eq!(first.category, ElementCategory::Activity);
    assert_eq!(first.image, suggested_elements()[1].image);
    assert!(first.related_tasks.is_empty());
    assert!(first.related_timeline_events.is_empty());
    assert_ne!(first.id, second.id);

    let err = service.add_suggested(2).unwrap_err();
    assert_eq!(
        err,
        ElementServiceError::SuggestionOutOfRange { index: 2, len: 2 }
    );
    assert_eq!(store.list_elements().len(), 7);
}

#[test]
fn rescheduled_event_moves_in_timeline_view() {
    let mut store = seeded_store().unwrap();
    let mut service = TimelineService::new(&mut store, TimelineLayout::default());
    let id = EventId::from("event-4");
    let start: TimeOfDay = "16:30".parse().unwrap();
    let end: TimeOfDay = "16:45".parse().unwrap();

    let event = service
        .update_event(&id, &TimelineEventPatch::reschedule(start, end))
        .unwrap();
    assert_eq!((event.start, event.end), (start, end));

    let view = service.timeline_view(&id).unwrap();
    assert_eq!(view.selected.span.top, 60.0);
    assert_eq!(view.selected.span.height, 30.0);
    let overlapping: Vec<&str> = view
        .overlapping
        .iter()
        .map(|p| p.event_id.as_str())
        .collect();
    assert_eq!(overlapping, vec!["event-1", "event-2"]);
}

#[test]
fn updating_unknown_event_reports_event_not_found() {
    let mut store = seeded_store().unwrap();
    let mut service = TimelineService::new(&mut store, TimelineLayout::default());

    let err = service
        .update_event(&EventId::from("nope"), &TimelineEventPatch::default())
        .unwrap_err();
    assert_eq!(err, TimelineServiceError::EventNotFound(EventId::from("nope")));

    let err = service
        .update_event(
            &EventId::from("event-1"),
            &TimelineEventPatch {
                title: Some(String::new()),
                ..TimelineEventPatch::default()
            },
        )
        .unwrap_err();
    assert!(matches!(err, TimelineServiceError::Repo(RepoError::Validation(_))));
}

#[test]
fn event_relations_report_emptiness() {
    let mut store = seeded_store().unwrap();
    let mut service = TimelineService::new(&mut store, TimelineLayout::default());
    let id = EventId::from("event-3");

    assert!(!service.relations(&id).unwrap().is_empty());
    service
        .update_event(
            &id,
            &TimelineEventPatch {
                related_tasks: Some(vec![TaskId::from("task-gone")]),
                ..TimelineEventPatch::default()
            },
        )
        .unwrap();
    let relations = service.relations(&id).unwrap();
    assert!(relations.is_empty());
    assert_eq!(relations.len(), 0);
}

#[test]
fn task_edits_go_through_the_service() {
    let mut store = seeded_store().unwrap();
    let mut service = TaskService::new(&mut store);
    let id = TaskId::from("task-6");

    let updated = service
        .update_task(
            &id,
            &TaskPatch {
                priority: Some(TaskPriority::High),
                due_date: Some(date(2026, 6, 2)),
                ..TaskPatch::default()
            },
        )
        .unwrap();
    assert_eq!(service.get_task(&id), Some(updated));
    assert_eq!(service.upcoming_tasks(1)[0].id, id);
    assert_eq!(service.get_task(&TaskId::from("task-404")), None);
}

#[test]
fn party_details_edits_are_visible_and_validated() {
    let mut store = seeded_store().unwrap();
    let mut service = PartyService::new(&mut store);

    assert_eq!(service.details().location, "Backyard Garden");
    service
        .update_details(&PartyDetailsPatch {
            location: Some("Community Hall".to_string()),
            ..PartyDetailsPatch::default()
        })
        .unwrap();
    assert_eq!(service.details().location, "Community Hall");

    let err = service
        .update_details(&PartyDetailsPatch {
            title: Some(" ".to_string()),
            ..PartyDetailsPatch::default()
        })
        .unwrap_err();
    assert!(matches!(err, RepoError::Validation(_)));
    assert_eq!(service.details().title, "Berry Sweet First Birthday");
}
