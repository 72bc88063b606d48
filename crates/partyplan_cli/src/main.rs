//! Party planner command-line front end.
//!
//! # Responsibility
//! - Load configuration and the party dataset, then print one read model.
//! - Keep all domain decisions in `partyplan_core`.

mod config;
mod render;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use config::Config;
use jiff::Zoned;
use log::info;
use partyplan_core::seed::{self, DEFAULT_SELECTED_EVENT};
use partyplan_core::{
    default_log_level, init_logging, CompletionFilter, ElementCategory, ElementService, EventId,
    InMemoryPartyRepository, PartyData, PartyService, TaskCategory, TaskFilter, TaskPriority,
    TaskService, TimelineService,
};
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "partyplan")]
#[command(about = "Party planning dashboard: schedule, checklist and supplies")]
#[command(version)]
struct Cli {
    /// Configuration file (defaults to ./partyplan.toml)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// JSON dataset to load instead of the built-in party
    #[arg(long, global = true)]
    data: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the timeline with one event selected
    Timeline {
        /// Id of the selected event
        #[arg(long, default_value = DEFAULT_SELECTED_EVENT)]
        event: String,
    },

    /// List checklist tasks grouped by category
    Tasks {
        #[arg(long, value_enum)]
        category: Option<TaskCategoryArg>,

        #[arg(long, value_enum, default_value_t = StatusArg::All)]
        status: StatusArg,

        #[arg(long, value_enum)]
        priority: Option<PriorityArg>,
    },

    /// List decor, food and activity elements
    Elements {
        #[arg(long, value_enum)]
        category: Option<ElementCategoryArg>,

        /// Show the preset catalog offered when adding an element
        #[arg(long, conflicts_with = "category")]
        suggestions: bool,
    },

    /// Summarize countdown, progress and what comes next
    Overview,
}

#[derive(Clone, Copy, ValueEnum)]
enum TaskCategoryArg {
    ToPurchase,
    ToConfirm,
    ToPrepare,
}

impl From<TaskCategoryArg> for TaskCategory {
    fn from(value: TaskCategoryArg) -> Self {
        match value {
            TaskCategoryArg::ToPurchase => Self::ToPurchase,
            TaskCategoryArg::ToConfirm => Self::ToConfirm,
            TaskCategoryArg::ToPrepare => Self::ToPrepare,
        }
    }
}

#[derive(Clone, Copy, ValueEnum)]
enum StatusArg {
    All,
    Completed,
    Pending,
}

impl From<StatusArg> for CompletionFilter {
    fn from(value: StatusArg) -> Self {
        match value {
            StatusArg::All => Self::All,
            StatusArg::Completed => Self::Completed,
            StatusArg::Pending => Self::Pending,
        }
    }
}

#[derive(Clone, Copy, ValueEnum)]
enum PriorityArg {
    Low,
    Medium,
    High,
}

impl From<PriorityArg> for TaskPriority {
    fn from(value: PriorityArg) -> Self {
        match value {
            PriorityArg::Low => Self::Low,
            PriorityArg::Medium => Self::Medium,
            PriorityArg::High => Self::High,
        }
    }
}

#[derive(Clone, Copy, ValueEnum)]
enum ElementCategoryArg {
    Decoration,
    Food,
    Activity,
    Other,
}

impl From<ElementCategoryArg> for ElementCategory {
    fn from(value: ElementCategoryArg) -> Self {
        match value {
            ElementCategoryArg::Decoration => Self::Decoration,
            ElementCategoryArg::Food => Self::Food,
            ElementCategoryArg::Activity => Self::Activity,
            ElementCategoryArg::Other => Self::Other,
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = Config::load(cli.config.as_deref()).context("Failed to load configuration")?;
    start_logging(&config)?;

    let data = match cli.data.as_deref().or(config.data.as_deref()) {
        Some(path) => load_dataset(path)?,
        None => seed::party_data(),
    };
    let mut store = InMemoryPartyRepository::new(data).context("Dataset failed validation")?;

    let mut output = String::new();
    match cli.command {
        Commands::Timeline { event } => {
            let layout = config
                .timeline
                .layout()
                .context("Invalid timeline configuration")?;
            let service = TimelineService::new(&mut store, layout);
            let view = service
                .timeline_view(&EventId::from(event))
                .context("Cannot select timeline event")?;
            render::timeline(&mut output, &view, service.layout(), &service.sorted_events())?;
        }
        Commands::Tasks {
            category,
            status,
            priority,
        } => {
            let service = TaskService::new(&mut store);
            let filter = TaskFilter {
                category: category.map(TaskCategory::from),
                completion: status.into(),
                priority: priority.map(TaskPriority::from),
            };
            render::task_groups(
                &mut output,
                &service.grouped_tasks(&filter),
                service.completion_rate(),
            )?;
        }
        Commands::Elements {
            suggestions: true, ..
        } => render::suggestions(&mut output, &seed::suggested_elements())?,
        Commands::Elements { category, .. } => {
            let category = category.map(ElementCategory::from);
            let service = ElementService::new(&mut store);
            render::elements(&mut output, &service.list_elements(category), category)?;
        }
        Commands::Overview => {
            let today = Zoned::now().date();
            let overview = PartyService::new(&mut store).overview(today);
            render::overview(&mut output, &overview)?;
        }
    }

    print!("{output}");
    Ok(())
}

fn start_logging(config: &Config) -> Result<()> {
    let Some(dir) = &config.log_dir else {
        return Ok(());
    };
    let dir = if dir.is_absolute() {
        dir.clone()
    } else {
        std::env::current_dir()
            .context("Cannot resolve working directory")?
            .join(dir)
    };
    let level = config.log_level.as_deref().unwrap_or(default_log_level());
    init_logging(level, &dir).context("Failed to start logging")?;
    info!("event=cli_start module=cli status=ok");
    Ok(())
}

fn load_dataset(path: &Path) -> Result<PartyData> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read dataset {}", path.display()))?;
    let data: PartyData = serde_json::from_str(&text)
        .with_context(|| format!("Failed to parse dataset {}", path.display()))?;
    info!(
        "event=dataset_load module=cli status=ok path={}",
        path.display()
    );
    Ok(data)
}
