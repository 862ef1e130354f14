// web_app/pages/not_found.rs - Fallback page for unknown paths

use std::time::Duration;

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::web_app::config::StoreConfig;
use crate::web_app::routes::HOME;
use crate::web_app::state::{Countdown, CountdownStep, ScheduledTask};

/// 404 page that counts down and then redirects home
///
/// One interval drives both the displayed seconds and the redirect; it is
/// cleared when the page is left, including when the user follows the
/// link home before the countdown ends.
#[component]
pub fn NotFound() -> impl IntoView {
    let config = use_context::<StoreConfig>().unwrap_or_default();
    let navigate = use_navigate();
    let countdown = RwSignal::new(Countdown::new(config.countdown_secs));

    Effect::new(move || {
        let navigate = navigate.clone();
        let tick = move || {
            if countdown.try_update(|c| c.tick()) == Some(CountdownStep::Expired) {
                navigate(HOME, Default::default());
            }
        };

        match set_interval_with_handle(tick, Duration::from_secs(1)) {
            Ok(handle) => {
                tracing::debug!("Redirecting home in {} seconds", config.countdown_secs);
                let task = ScheduledTask::new(handle);
                on_cleanup(move || drop(task));
            }
            Err(e) => tracing::error!("Could not start redirect countdown: {:?}", e),
        }
    });

    view! {
        <div class="min-h-[70vh] flex items-center justify-center px-4">
            <div class="text-center">
                <div class="text-7xl font-extrabold text-blue-600 mb-4">"404"</div>
                <h1 class="text-3xl font-bold text-gray-900 mb-2">"404 - Page Not Found"</h1>
                <p class="text-gray-600 mb-2">"Oops! The page you're looking for doesn't exist."</p>
                <p class="text-gray-500 mb-8">
                    "You will be redirected to the home page in "
                    {move || countdown.with(|c| c.message())}
                    "."
                </p>
                <a
                    href=HOME
                    class="inline-block px-6 py-3 bg-blue-600 text-white rounded-lg hover:bg-blue-700 transition-colors font-medium"
                >
                    "Go to Home Now"
                </a>
            </div>
        </div>
    }
}
