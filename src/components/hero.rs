//! Hero Banner
//!
//! Static banner above the tab bar. Purely presentational.

use leptos::*;

/// Hero banner component
#[component]
pub fn Hero() -> impl IntoView {
    view! {
        <section class="relative h-[420px] w-full overflow-hidden bg-white">
            <div class="absolute inset-0 bg-gradient-to-b from-white/10 via-white/20 to-white pointer-events-none" />
            <div class="relative z-10 h-full flex flex-col items-center justify-center text-center px-6">
                <h1 class="text-3xl sm:text-4xl font-extrabold tracking-tight text-gray-900">
                    "DNA Health Tracker"
                </h1>
                <p class="mt-2 max-w-md text-sm sm:text-base text-gray-600">
                    "Track daily wellness, log habits, and connect genetic markers to personalized insights."
                </p>
            </div>
        </section>
    }
}
