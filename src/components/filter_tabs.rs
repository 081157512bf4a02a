//! Filter Tabs Component
//!
//! Tab bar switching between the four task views, with live counts.

use leptos::prelude::*;

use crate::models::TaskStatus;
use crate::store::{use_app_store, AppStateStoreFields};

/// One of the four overlapping task views.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaskFilter {
    All,
    Status(TaskStatus),
}

impl TaskFilter {
    pub const TABS: [TaskFilter; 4] = [
        TaskFilter::All,
        TaskFilter::Status(TaskStatus::Todo),
        TaskFilter::Status(TaskStatus::InProgress),
        TaskFilter::Status(TaskStatus::Completed),
    ];

    pub fn label(self) -> &'static str {
        match self {
            TaskFilter::All => "Toutes",
            TaskFilter::Status(TaskStatus::Todo) => "À faire",
            TaskFilter::Status(TaskStatus::InProgress) => "En cours",
            TaskFilter::Status(TaskStatus::Completed) => "Terminées",
        }
    }

    pub fn empty_message(self) -> &'static str {
        match self {
            TaskFilter::All => "Aucune tâche",
            TaskFilter::Status(TaskStatus::Todo) => "Aucune tâche à faire",
            TaskFilter::Status(TaskStatus::InProgress) => "Aucune tâche en cours",
            TaskFilter::Status(TaskStatus::Completed) => "Aucune tâche terminée",
        }
    }
}

/// Filter tab bar component
#[component]
pub fn FilterTabs(
    active_filter: ReadSignal<TaskFilter>,
    set_active_filter: WriteSignal<TaskFilter>,
) -> impl IntoView {
    let store = use_app_store();

    let count_for = move |filter: TaskFilter| match filter {
        TaskFilter::All => store.tasks().read().len(),
        TaskFilter::Status(status) => store
            .tasks()
            .read()
            .iter()
            .filter(|t| t.resolved_status() == status)
            .count(),
    };

    view! {
        <div class="filter-tabs">
            {TaskFilter::TABS.iter().map(|filter| {
                let filter = *filter;
                let tab_class = move || {
                    if active_filter.get() == filter {
                        "filter-tab active"
                    } else {
                        "filter-tab"
                    }
                };
                view! {
                    <button class=tab_class on:click=move |_| set_active_filter.set(filter)>
                        {move || format!("{} ({})", filter.label(), count_for(filter))}
                    </button>
                }
            }).collect_view()}
        </div>
    }
}
