//! Application Context
//!
//! Shared state provided via Leptos Context API.

use leptos::prelude::*;

use crate::api;

/// Which operation failed. The banner message is keyed on this alone; error
/// subkinds are not distinguished.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OpError {
    Load,
    Create,
    Update,
    Delete,
}

impl OpError {
    /// Banner message (French UI).
    pub fn message(self) -> String {
        match self {
            OpError::Load => format!(
                "Erreur: Vérifiez que le serveur fonctionne sur {}",
                api::api_base()
            ),
            OpError::Create => "Erreur lors de la création de la tâche".to_string(),
            OpError::Update => "Erreur lors de la mise à jour".to_string(),
            OpError::Delete => "Erreur lors de la suppression".to_string(),
        }
    }
}

/// App-wide signals provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Trigger to reload tasks from the server - read
    pub reload_trigger: ReadSignal<u32>,
    /// Trigger to reload tasks from the server - write
    set_reload_trigger: WriteSignal<u32>,
    /// Last failed operation, shown in the banner - read
    pub error: ReadSignal<Option<OpError>>,
    /// Last failed operation - write
    set_error: WriteSignal<Option<OpError>>,
}

impl AppContext {
    pub fn new(
        reload_trigger: (ReadSignal<u32>, WriteSignal<u32>),
        error: (ReadSignal<Option<OpError>>, WriteSignal<Option<OpError>>),
    ) -> Self {
        Self {
            reload_trigger: reload_trigger.0,
            set_reload_trigger: reload_trigger.1,
            error: error.0,
            set_error: error.1,
        }
    }

    /// Trigger a full reload of the task list
    pub fn reload(&self) {
        self.set_reload_trigger.update(|v| *v += 1);
    }

    /// Surface a failed operation in the banner
    pub fn report_error(&self, op: OpError) {
        self.set_error.set(Some(op));
    }

    /// Dismiss the banner
    pub fn dismiss_error(&self) {
        self.set_error.set(None);
    }
}
