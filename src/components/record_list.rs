//! Record List
//!
//! Schema-agnostic list renderer. Records arrive as opaque JSON owned by
//! the backend, so each one is shown as its pretty-printed JSON body.

use leptos::*;
use serde_json::Value;

/// Generic JSON-dump list with a fixed empty-state message
#[component]
pub fn RecordList(
    #[prop(into)]
    records: Signal<Vec<Value>>,
    empty: &'static str,
) -> impl IntoView {
    move || {
        let items = records.get();
        if items.is_empty() {
            view! {
                <p class="text-sm text-gray-500">{empty}</p>
            }.into_view()
        } else {
            view! {
                <ul class="space-y-2">
                    {items.into_iter().map(|record| {
                        let dump = serde_json::to_string_pretty(&record)
                            .unwrap_or_else(|_| record.to_string());
                        view! {
                            <li class="rounded-lg border p-3 text-sm bg-white/60">
                                <pre class="whitespace-pre-wrap break-words text-gray-800">{dump}</pre>
                            </li>
                        }
                    }).collect_view()}
                </ul>
            }.into_view()
        }
    }
}
