//! Data Overview Panel
//!
//! Fetches and renders the three stored collections. The three requests run
//! concurrently and each outcome is applied independently, so one failing
//! endpoint never blanks out the collections that did load.

use leptos::*;
use serde_json::Value;

use crate::api;
use crate::components::RecordList;

const EMPTY_USERS: &str = "No users yet.";
const EMPTY_LOGS: &str = "No logs yet.";
const EMPTY_MARKERS: &str = "No markers yet.";

/// Aggregated data view with an optional email filter
#[component]
pub fn DataOverview() -> impl IntoView {
    let (users, set_users) = create_signal(Vec::<Value>::new());
    let (logs, set_logs) = create_signal(Vec::<Value>::new());
    let (markers, set_markers) = create_signal(Vec::<Value>::new());
    let (email_filter, set_email_filter) = create_signal(String::new());
    let (loading, set_loading) = create_signal(false);
    let (fetch_error, set_fetch_error) = create_signal(None::<String>);

    let fetch_all = move || {
        set_loading.set(true);

        // Read outside the reactive graph: typing in the filter box must
        // not re-trigger the mount effect, only an explicit Refresh.
        let filter = email_filter.get_untracked();

        spawn_local(async move {
            // Filter narrows logs and markers only; users stay unfiltered.
            let filter = api::opt_text(&filter);
            let filter = filter.as_deref();

            let (users_result, logs_result, markers_result) = futures::join!(
                api::fetch_users(),
                api::fetch_logs(filter),
                api::fetch_markers(filter),
            );

            let mut failed = Vec::new();

            match users_result {
                Ok(records) => set_users.set(records),
                Err(e) => {
                    logging::error!("users fetch failed: {}", e);
                    failed.push("users");
                }
            }
            match logs_result {
                Ok(records) => set_logs.set(records),
                Err(e) => {
                    logging::error!("logs fetch failed: {}", e);
                    failed.push("logs");
                }
            }
            match markers_result {
                Ok(records) => set_markers.set(records),
                Err(e) => {
                    logging::error!("markers fetch failed: {}", e);
                    failed.push("markers");
                }
            }

            if failed.is_empty() {
                set_fetch_error.set(None);
            } else {
                set_fetch_error.set(Some(format!("Could not refresh: {}", failed.join(", "))));
            }

            set_loading.set(false);
        });
    };

    // Fetch once on mount
    create_effect(move |_| {
        fetch_all();
    });

    view! {
        <div class="space-y-6">
            <div class="flex gap-2">
                <input
                    type="text"
                    placeholder="Filter by user email (optional)"
                    prop:value=move || email_filter.get()
                    on:input=move |ev| set_email_filter.set(event_target_value(&ev))
                    class="input flex-1"
                />
                <button
                    on:click=move |_| fetch_all()
                    class="btn"
                >
                    "Refresh"
                </button>
            </div>

            {move || {
                if loading.get() {
                    view! {
                        <p class="text-sm text-gray-500">"Loading..."</p>
                    }.into_view()
                } else {
                    view! {}.into_view()
                }
            }}

            {move || {
                fetch_error.get().map(|msg| view! {
                    <p class="text-sm text-red-600">{msg}</p>
                })
            }}

            <div>
                <h3 class="section-title">"Users"</h3>
                <RecordList records=users empty=EMPTY_USERS />
            </div>
            <div>
                <h3 class="section-title">"Health Logs"</h3>
                <RecordList records=logs empty=EMPTY_LOGS />
            </div>
            <div>
                <h3 class="section-title">"Genetic Markers"</h3>
                <RecordList records=markers empty=EMPTY_MARKERS />
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_state_messages() {
        assert_eq!(EMPTY_USERS, "No users yet.");
        assert_eq!(EMPTY_LOGS, "No logs yet.");
        assert_eq!(EMPTY_MARKERS, "No markers yet.");
    }
}
