//! Static seed dataset for a berry-themed birthday party.
//!
//! The store starts from this object-of-collections dataset
//! (`party_details`, `tasks`, `timeline_events`, `elements`).

use crate::model::element::{Element, ElementCategory, Material};
use crate::model::ids::{ElementId, EventId, TaskId};
use crate::model::party::{PartyData, PartyDetails};
use crate::model::task::{Task, TaskCategory, TaskPriority};
use crate::model::time::{time_of_day, TimeOfDay};
use crate::model::timeline_event::{ChecklistItem, ElementLink, TimelineEvent};
use crate::service::element_service::NewElement;
use jiff::civil::{date, Date};

const ASSET_BASE_URL: &str = "https://confetti-styleguide-app.8track.workers.dev";

const PARTY_DATE: Date = date(2026, 6, 14);
const PARTY_START: TimeOfDay = time_of_day(16, 0);

/// Id of the event the timeline opens on.
pub const DEFAULT_SELECTED_EVENT: &str = "event-1";

/// Builds the canonical seed dataset.
pub fn party_data() -> PartyData {
    PartyData {
        party_details: PartyDetails {
            title: "Berry Sweet First Birthday".to_string(),
            date: PARTY_DATE,
            time: PARTY_START,
            location: "Backyard Garden".to_string(),
            expected_guests: 24,
        },
        tasks: tasks(),
        timeline_events: timeline_events(),
        elements: elements(),
    }
}

/// Preset catalog offered by the "add element" flow.
pub fn suggested_elements() -> Vec<NewElement> {
    vec![
        NewElement {
            title: "First Year Photo Display".to_string(),
            description: "A beautiful 12-month photo arrangement showcasing your baby's growth \
                          and milestones. Perfect for guests to celebrate your child's journey."
                .to_string(),
            image: Some("/images/first-year-photo.jpg".to_string()),
            category: ElementCategory::Decoration,
        },
        NewElement {
            title: "Time Capsule Station".to_string(),
            description: "A special area where guests can leave heartfelt messages and mementos \
                          for your child to discover in the future."
                .to_string(),
            image: Some("/images/time-capsule.jpg".to_string()),
            category: ElementCategory::Activity,
        },
    ]
}

fn ids<T: From<&'static str>>(values: &[&'static str]) -> Vec<T> {
    values.iter().copied().map(T::from).collect()
}

fn asset(path: &str) -> Option<String> {
    Some(format!("{ASSET_BASE_URL}/{path}"))
}

fn timeline_events() -> Vec<TimelineEvent> {
    vec![
        TimelineEvent {
            id: EventId::from("event-1"),
            title: "Appetizers Served".to_string(),
            start: time_of_day(16, 15),
            end: time_of_day(17, 15),
            description: "Light appetizers and drinks are served to guests".to_string(),
            tasks: vec![
                ChecklistItem::new("Prepare appetizer trays", true),
                ChecklistItem::new("Set up appetizer table", true),
                ChecklistItem::new("Refill drinks", false),
            ],
            elements: vec![ElementLink::new("Appetizer Menu", "#")],
            related_tasks: ids(&["task-5"]),
            related_elements: ids(&["element-3", "element-4"]),
        },
        TimelineEvent {
            id: EventId::from("event-2"),
            title: "Guest Arrival".to_string(),
            start: time_of_day(16, 0),
            end: time_of_day(17, 0),
            description: "Guests arrive and mingle.".to_string(),
            tasks: Vec::new(),
            elements: Vec::new(),
            related_tasks: ids(&["task-2", "task-4"]),
            related_elements: ids(&["element-2", "element-5"]),
        },
        TimelineEvent {
            id: EventId::from("event-3"),
            title: "Games & Activities".to_string(),
            start: time_of_day(17, 0),
            end: time_of_day(18, 0),
            description: "Fun games and activities for everyone.".to_string(),
            tasks: Vec::new(),
            elements: Vec::new(),
            related_tasks: ids(&["task-6"]),
            related_elements: Vec::new(),
        },
        TimelineEvent {
            id: EventId::from("event-4"),
            title: "Cake Cutting".to_string(),
            start: time_of_day(17, 30),
            end: time_of_day(17, 45),
            description: "Singing, candles and the berry cake.".to_string(),
            tasks: vec![
                ChecklistItem::new("Light the candles", false),
                ChecklistItem::new("Have the cake knife ready", false),
            ],
            elements: Vec::new(),
            related_tasks: ids(&["task-1", "task-7"]),
            related_elements: ids(&["element-1"]),
        },
    ]
}

fn tasks() -> Vec<Task> {
    vec![
        Task {
            id: TaskId::from("task-1"),
            title: "Order the berry cake".to_string(),
            description: "Two tiers, pink frosting, strawberry toppers.".to_string(),
            completed: true,
            due_date: date(2026, 6, 1),
            priority: TaskPriority::High,
            category: TaskCategory::ToPurchase,
            related_elements: ids(&["element-1"]),
            related_timeline_events: ids(&["event-4"]),
        },
        Task {
            id: TaskId::from("task-2"),
            title: "Buy balloons for the arch".to_string(),
            description: "Red, pink, white and green balloons plus strawberry foils.".to_string(),
            completed: false,
            due_date: date(2026, 6, 7),
            priority: TaskPriority::Medium,
            category: TaskCategory::ToPurchase,
            related_elements: ids(&["element-2"]),
            related_timeline_events: ids(&["event-2"]),
        },
        Task {
            id: TaskId::from("task-3"),
            title: "Confirm guest RSVPs".to_string(),
            description: "Follow up with families that have not answered.".to_string(),
            completed: false,
            due_date: date(2026, 6, 5),
            priority: TaskPriority::High,
            category: TaskCategory::ToConfirm,
            related_elements: Vec::new(),
            related_timeline_events: Vec::new(),
        },
        Task {
            id: TaskId::from("task-4"),
            title: "Confirm garden access".to_string(),
            description: "Check the gate code and parking with the neighbours.".to_string(),
            completed: false,
            due_date: date(2026, 6, 10),
            priority: TaskPriority::Low,
            category: TaskCategory::ToConfirm,
            related_elements: Vec::new(),
            related_timeline_events: ids(&["event-2"]),
        },
        Task {
            id: TaskId::from("task-5"),
            title: "Bake cookies".to_string(),
            description: "Two trays of strawberry shortbread.".to_string(),
            completed: false,
            due_date: date(2026, 6, 13),
            priority: TaskPriority::Medium,
            category: TaskCategory::ToPrepare,
            related_elements: ids(&["element-3"]),
            related_timeline_events: ids(&["event-1"]),
        },
        Task {
            id: TaskId::from("task-6"),
            title: "Prepare party games".to_string(),
            description: "Berry hunt clues and prizes.".to_string(),
            completed: false,
            due_date: date(2026, 6, 12),
            priority: TaskPriority::Low,
            category: TaskCategory::ToPrepare,
            related_elements: Vec::new(),
            related_timeline_events: ids(&["event-3"]),
        },
        Task {
            id: TaskId::from("task-7"),
            title: "Pick up the cake".to_string(),
            description: "Collect from the bakery on the morning of the party.".to_string(),
            completed: false,
            due_date: date(2026, 6, 14),
            priority: TaskPriority::High,
            category: TaskCategory::ToPrepare,
            related_elements: ids(&["element-1"]),
            related_timeline_events: ids(&["event-4"]),
        },
    ]
}

fn elements() -> Vec<Element> {
    vec![
        Element {
            id: ElementId::from("element-1"),
            title: "Berry-themed Cake".to_string(),
            description: "A two-tier cake with strawberry decorations and pink frosting"
                .to_string(),
            image: asset("Strawberry/Products/cake.png"),
            category: ElementCategory::Food,
            materials: Some(vec![
                Material::new("Two-tier cake", "1", true),
                Material::new("Strawberry toppers", "5", true),
                Material::new("Cake stand", "1", false),
            ]),
            related_tasks: ids(&["task-1", "task-7"]),
            related_timeline_events: ids(&["event-4"]),
        },
        Element {
            id: ElementId::from("element-2"),
            title: "Strawberry Balloon Arch".to_string(),
            description: "A 6-foot arch with red, pink, and white balloons plus strawberry foil balloons"
                .to_string(),
            image: asset("Strawberry/balloon.png"),
            category: ElementCategory::Decoration,
            materials: Some(vec![
                Material::new("Red balloons (11\")", "100", false),
                Material::new("Pink balloons (11\")", "100", false),
                Material::new("White balloons (11\")", "100", false),
                Material::new("Green balloons (5\")", "20", false),
                Material::new("Strawberry foil balloons", "5", false),
                Material::new("Balloon strip", "1", false),
                Material::new("Balloon pump", "1", false),
            ]),
            related_tasks: ids(&["task-2"]),
            related_timeline_events: ids(&["event-2"]),
        },
        Element {
            id: ElementId::from("element-3"),
            title: "Table and Cookies".to_string(),
            description: "A decorative table with assorted cookies".to_string(),
            image: asset("Wild%20one/AI%20Products/table_and_cookie.png"),
            category: ElementCategory::Food,
            materials: Some(vec![
                Material::new("Cookie trays", "2", false),
                Material::new("Decoration tablecloth", "1", false),
            ]),
            related_tasks: ids(&["task-5"]),
            related_timeline_events: ids(&["event-1"]),
        },
        Element {
            id: ElementId::from("element-4"),
            title: "Party Plates".to_string(),
            description: "Strawberry themed party plates for serving".to_string(),
            image: asset("Strawberry/Products/strawberry_plates.png"),
            category: ElementCategory::Food,
            materials: Some(vec![
                Material::new("Strawberry plates", "24", false),
                Material::new("Matching cups", "24", false),
            ]),
            related_tasks: Vec::new(),
            related_timeline_events: ids(&["event-1"]),
        },
        Element {
            id: ElementId::from("element-5"),
            title: "Strawberry Party Scene".to_string(),
            description: "Complete party scene setup with strawberry theme".to_string(),
            image: asset("Strawberry/scene.png"),
            category: ElementCategory::Decoration,
            materials: Some(vec![
                Material::new("Scene backdrop", "1", false),
                Material::new("Decorative elements", "1 set", false),
            ]),
            related_tasks: Vec::new(),
            related_timeline_events: ids(&["event-2"]),
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::{party_data, DEFAULT_SELECTED_EVENT};

    #[test]
    fn seed_dataset_is_valid() {
        party_data().validate().expect("seed data must validate");
    }

    #[test]
    fn default_selection_exists_in_seed() {
        let data = party_data();
        assert!(data
            .timeline_events
            .iter()
            .any(|event| event.id.as_str() == DEFAULT_SELECTED_EVENT));
    }

    #[test]
    fn seed_relations_point_at_existing_records() {
        let data = party_data();
        for event in &data.timeline_events {
            for task_id in &event.related_tasks {
                assert!(data.tasks.iter().any(|t| &t.id == task_id), "{task_id}");
            }
            for element_id in &event.related_elements {
                assert!(data.elements.iter().any(|e| &e.id == element_id), "{element_id}");
            }
        }
        for task in &data.tasks {
            for event_id in &task.related_timeline_events {
                assert!(
                    data.timeline_events.iter().any(|e| &e.id == event_id),
                    "{event_id}"
                );
            }
        }
    }
}
