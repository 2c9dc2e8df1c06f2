//! Genetic Marker Panel
//!
//! Form for recording a genetic marker (gene, SNP, risk level) for a user.

use leptos::*;

use crate::api;
use crate::pages::form::apply_submit_outcome;

/// Genetic marker form. `on_added` fires after a successful submit.
#[component]
pub fn MarkerForm(on_added: impl Fn() + 'static + Clone) -> impl IntoView {
    let (user_email, set_user_email) = create_signal(String::new());
    let (gene, set_gene) = create_signal(String::new());
    let (snp, set_snp) = create_signal(String::new());
    let (risk, set_risk) = create_signal(String::new());
    let (note, set_note) = create_signal(String::new());
    let (submitting, set_submitting) = create_signal(false);
    let (message, set_message) = create_signal(String::new());

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();

        set_message.set(String::new());
        set_submitting.set(true);

        let payload = api::NewMarker {
            user_email: user_email.get(),
            gene: gene.get(),
            snp: snp.get(),
            risk_level: risk.get(),
            note: api::opt_text(&note.get()),
        };

        let on_added = on_added.clone();
        spawn_local(async move {
            let result = api::create_marker(&payload).await;
            if apply_submit_outcome(
                result,
                set_message,
                "Marker added",
                &[set_user_email, set_gene, set_snp, set_risk, set_note],
            ) {
                on_added();
            }
            set_submitting.set(false);
        });
    };

    view! {
        <form on:submit=on_submit class="space-y-3">
            <input
                type="text"
                placeholder="User email"
                required=true
                prop:value=move || user_email.get()
                on:input=move |ev| set_user_email.set(event_target_value(&ev))
                class="input"
            />

            <div class="grid grid-cols-1 sm:grid-cols-2 gap-3">
                <input
                    type="text"
                    placeholder="Gene (e.g., MTHFR)"
                    required=true
                    prop:value=move || gene.get()
                    on:input=move |ev| set_gene.set(event_target_value(&ev))
                    class="input"
                />
                <input
                    type="text"
                    placeholder="SNP (e.g., rs1801133)"
                    required=true
                    prop:value=move || snp.get()
                    on:input=move |ev| set_snp.set(event_target_value(&ev))
                    class="input"
                />
                <select
                    required=true
                    prop:value=move || risk.get()
                    on:change=move |ev| set_risk.set(event_target_value(&ev))
                    class="input"
                >
                    <option value="">"Risk level"</option>
                    <option value="low">"low"</option>
                    <option value="moderate">"moderate"</option>
                    <option value="high">"high"</option>
                </select>
                <input
                    type="text"
                    placeholder="Note (optional)"
                    prop:value=move || note.get()
                    on:input=move |ev| set_note.set(event_target_value(&ev))
                    class="input"
                />
            </div>

            <button
                type="submit"
                disabled=move || submitting.get()
                class="btn-primary w-full"
            >
                {move || if submitting.get() { "Adding..." } else { "Add marker" }}
            </button>

            {move || {
                let msg = message.get();
                if msg.is_empty() {
                    view! {}.into_view()
                } else {
                    view! {
                        <p class="text-sm text-center text-gray-600">{msg}</p>
                    }.into_view()
                }
            }}
        </form>
    }
}
