//! App Root Component
//!
//! Shell layout: hero banner, tab bar, the active panel, and a footer line
//! naming the backend the client talks to.

use leptos::*;

use crate::api;
use crate::components::{Hero, TabBar};
use crate::pages::{DataOverview, HealthLogForm, MarkerForm, ProfileForm};
use crate::state::global::{provide_app_state, use_app_state, Tab};

/// Root application component
#[component]
pub fn App() -> impl IntoView {
    provide_app_state();

    let state = use_app_state();

    let advance_from = move |tab: Tab| move || state.active_tab.set(tab.next_after_submit());

    view! {
        <div class="min-h-screen bg-gradient-to-b from-white to-blue-50">
            <Hero />
            <TabBar />

            <main class="px-4 py-6 max-w-xl mx-auto space-y-8">
                {move || match state.active_tab.get() {
                    Tab::Profile => view! {
                        <div class="card">
                            <h2 class="text-xl font-bold text-gray-900 mb-3">"Create your profile"</h2>
                            <ProfileForm on_saved=advance_from(Tab::Profile) />
                        </div>
                    }.into_view(),
                    Tab::Log => view! {
                        <div class="card">
                            <h2 class="text-xl font-bold text-gray-900 mb-3">"Daily health log"</h2>
                            <HealthLogForm on_logged=advance_from(Tab::Log) />
                        </div>
                    }.into_view(),
                    Tab::Markers => view! {
                        <div class="card">
                            <h2 class="text-xl font-bold text-gray-900 mb-3">"Add genetic marker"</h2>
                            <MarkerForm on_added=advance_from(Tab::Markers) />
                        </div>
                    }.into_view(),
                    Tab::Data => view! {
                        <div class="card">
                            <h2 class="text-xl font-bold text-gray-900 mb-3">"Overview"</h2>
                            <DataOverview />
                        </div>
                    }.into_view(),
                }}

                <div class="text-center text-xs text-gray-500">
                    "Connected to: " {api::api_base()}
                </div>
            </main>
        </div>
    }
}
