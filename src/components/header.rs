//! Header Component
//!
//! Application chrome: brand block and navigation links.

use leptos::prelude::*;

/// Page header with brand and navigation
#[component]
pub fn Header() -> impl IntoView {
    view! {
        <header class="app-header">
            <div class="header-inner">
                <div class="header-brand">
                    <span class="header-logo">"✓"</span>
                    <div>
                        <h1 class="header-title">"TASKMASTER"</h1>
                        <p class="header-subtitle">"Gestionnaire de Tâches"</p>
                    </div>
                </div>

                <nav class="header-nav">
                    <a href="#" class="header-link">"Mes Tâches"</a>
                    <a href="#" class="header-link">"Paramètres"</a>
                </nav>
            </div>
        </header>
    }
}
