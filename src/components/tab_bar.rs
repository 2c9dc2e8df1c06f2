//! Tab Navigation
//!
//! Four-way panel selector. Any tab is reachable from any other; the
//! post-submit advance writes the same signal and never locks anything.

use leptos::*;

use crate::state::global::{use_app_state, Tab};

/// Tab bar component
#[component]
pub fn TabBar() -> impl IntoView {
    view! {
        <div class="sticky top-0 z-20 bg-white/90 backdrop-blur border-b">
            <div class="flex items-center justify-between px-4">
                {Tab::ALL.into_iter().map(|tab| {
                    view! { <TabButton tab=tab /> }
                }).collect_view()}
            </div>
        </div>
    }
}

/// Individual tab button
#[component]
fn TabButton(tab: Tab) -> impl IntoView {
    let state = use_app_state();

    view! {
        <button
            on:click=move |_| state.active_tab.set(tab)
            class=move || {
                let base = "flex-1 py-3 text-sm font-medium transition-colors";
                if state.active_tab.get() == tab {
                    format!("{} text-blue-600 border-b-2 border-blue-600", base)
                } else {
                    format!("{} text-gray-500 hover:text-gray-700", base)
                }
            }
        >
            {tab.label()}
        </button>
    }
}
