//! Taskmaster Frontend App
//!
//! Application shell: owns the task collection, drives the initial load, and
//! wires view intents to the task API. Local state changes only after the
//! server acknowledges a mutation.

use leptos::prelude::*;
use leptos::task::spawn_local;
use reactive_stores::Store;

use crate::api::{self, CreateTaskArgs};
use crate::components::{
    ErrorBanner, FilterTabs, Footer, Header, TaskDetailsDialog, TaskFilter, TaskListView,
};
use crate::context::{AppContext, OpError};
use crate::models::{normalized_title, tasks_with_status, Task, TaskPatch, TaskStatus};
use crate::store::{
    store_merge_task_patch, store_prepend_task, store_remove_task, AppState, AppStateStoreFields,
};

#[component]
pub fn App() -> impl IntoView {
    // State
    let store = Store::new(AppState::default());
    let (input_value, set_input_value) = signal(String::new());
    let (selected_task, set_selected_task) = signal::<Option<Task>>(None);
    let (active_filter, set_active_filter) = signal(TaskFilter::All);
    let (loading, set_loading) = signal(true);
    let (reload_trigger, set_reload_trigger) = signal(0u32);
    let (error, set_error) = signal::<Option<OpError>>(None);

    let ctx = AppContext::new((reload_trigger, set_reload_trigger), (error, set_error));

    // Provide context to all children
    provide_context(store);
    provide_context(ctx);

    // Initial load, re-run whenever a retry bumps the trigger
    Effect::new(move |_| {
        let _ = reload_trigger.get();
        set_loading.set(true);
        ctx.dismiss_error();
        spawn_local(async move {
            match api::list_tasks().await {
                Ok(loaded) => {
                    log::info!("{} tâches chargées", loaded.len());
                    *store.tasks().write() = loaded;
                }
                Err(err) => {
                    log::error!("chargement des tâches impossible: {err}");
                    ctx.report_error(OpError::Load);
                }
            }
            set_loading.set(false);
        });
    });

    // ========================
    // Intent Handlers
    // ========================

    let add_task = move || {
        let Some(title) = normalized_title(&input_value.get()) else {
            return;
        };
        spawn_local(async move {
            match api::create_task(&CreateTaskArgs::with_title(&title)).await {
                Ok(created) => {
                    store_prepend_task(&store, created);
                    // Input cleared only once the server confirmed
                    set_input_value.set(String::new());
                }
                Err(err) => {
                    log::warn!("création refusée: {err}");
                    ctx.report_error(OpError::Create);
                }
            }
        });
    };

    // Confirmed update: merge our own patch after acknowledgment, ignore the
    // server echo
    let update_task = move |id: u32, patch: TaskPatch| {
        spawn_local(async move {
            match api::update_task(id, &patch).await {
                Ok(_) => store_merge_task_patch(&store, id, &patch),
                Err(err) => {
                    log::warn!("mise à jour refusée pour #{id}: {err}");
                    ctx.report_error(OpError::Update);
                }
            }
        });
    };

    let delete_task = move |id: u32| {
        spawn_local(async move {
            match api::delete_task(id).await {
                Ok(()) => store_remove_task(&store, id),
                Err(err) => {
                    log::warn!("suppression refusée pour #{id}: {err}");
                    ctx.report_error(OpError::Delete);
                }
            }
        });
    };

    let rename_task = move |(id, title): (u32, String)| {
        update_task(id, TaskPatch::title(title));
    };

    let change_status = move |(id, status): (u32, TaskStatus)| {
        update_task(id, TaskPatch::for_status(status));
    };

    // Pure selection, no network call; the dialog edits a defensive copy
    let view_details = move |id: u32| {
        let task = store.tasks().read().iter().find(|t| t.id == id).cloned();
        if let Some(task) = task {
            set_selected_task.set(Some(task));
        }
    };

    let save_details = move |edited: Task| {
        let patch = TaskPatch {
            title: Some(edited.title.clone()),
            description: Some(edited.description.clone().unwrap_or_default()),
            completed: Some(edited.completed),
            status: Some(edited.resolved_status()),
        };
        update_task(edited.id, patch);
        // The dialog closes as soon as the save is issued; a failure still
        // surfaces through the banner
        set_selected_task.set(None);
    };

    // ========================
    // Derived Views
    // ========================

    let count_with = move |status: TaskStatus| {
        store
            .tasks()
            .read()
            .iter()
            .filter(|t| t.resolved_status() == status)
            .count()
    };

    let visible_tasks = Memo::new(move |_| {
        let tasks = store.tasks().get();
        match active_filter.get() {
            TaskFilter::All => tasks,
            TaskFilter::Status(status) => tasks_with_status(&tasks, status),
        }
    });

    let empty_message = Signal::derive(move || active_filter.get().empty_message());

    view! {
        <Show
            when=move || !loading.get()
            fallback=|| view! {
                <div class="loading-screen">
                    <div class="loading-spinner"></div>
                    <p class="loading-text">"Chargement..."</p>
                </div>
            }
        >
            <div class="app-layout">
                <Header/>

                <main class="main-content">
                    <ErrorBanner/>

                    <section class="add-task-card">
                        <h2 class="add-task-heading">"Ajouter une nouvelle tâche"</h2>
                        <div class="add-task-row">
                            <input
                                type="text"
                                class="add-task-input"
                                placeholder="Nouvelle tâche..."
                                prop:value=move || input_value.get()
                                on:input=move |ev| set_input_value.set(event_target_value(&ev))
                                on:keydown=move |ev| {
                                    if ev.key() == "Enter" {
                                        add_task();
                                    }
                                }
                            />
                            <button class="add-task-btn" on:click=move |_| add_task()>
                                "Ajouter"
                            </button>
                        </div>
                    </section>

                    <section class="stats-grid">
                        <div class="stat-card todo">
                            <div class="stat-label">"À faire"</div>
                            <div class="stat-value">{move || count_with(TaskStatus::Todo)}</div>
                        </div>
                        <div class="stat-card in-progress">
                            <div class="stat-label">"En cours"</div>
                            <div class="stat-value">{move || count_with(TaskStatus::InProgress)}</div>
                        </div>
                        <div class="stat-card completed">
                            <div class="stat-label">"Terminées"</div>
                            <div class="stat-value">{move || count_with(TaskStatus::Completed)}</div>
                        </div>
                    </section>

                    <FilterTabs active_filter=active_filter set_active_filter=set_active_filter/>

                    <TaskListView
                        tasks=visible_tasks
                        empty_message=empty_message
                        on_rename=rename_task
                        on_status_change=change_status
                        on_delete=delete_task
                        on_view_details=view_details
                    />
                </main>

                <Footer/>

                {move || selected_task.get().map(|task| view! {
                    <TaskDetailsDialog
                        task=task
                        on_save=save_details
                        on_close=move |_: ()| set_selected_task.set(None)
                    />
                })}
            </div>
        </Show>
    }
}
