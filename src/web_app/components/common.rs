// web_app/components/common.rs - Reusable UI components
//
// These are small, composable components used throughout the storefront.
// Philosophy: Pure, stateless components that receive all data via props.

use leptos::ev;
use leptos::prelude::*;

/// Loading spinner component
///
/// Displays a centered indeterminate spinner with optional message.
#[component]
pub fn Loading(
    /// Optional message to display below the spinner
    #[prop(default = "Loading...")]
    message: &'static str,
) -> impl IntoView {
    view! {
        <div class="flex flex-col items-center justify-center p-12" role="progressbar">
            <div class="animate-spin rounded-full h-10 w-10 border-4 border-gray-200 border-t-blue-600"></div>
            <span class="mt-4 text-gray-500 font-medium animate-pulse">{message}</span>
        </div>
    }
}

/// Error display component
#[component]
pub fn ErrorDisplay(
    /// The error message to display
    error: String,
) -> impl IntoView {
    view! {
        <div class="bg-red-50 border border-red-200 rounded-xl p-4 flex items-start gap-4" role="alert">
            <div class="bg-red-100 p-2 rounded-full text-red-600">
                <span class="text-xl font-bold">"⚠"</span>
            </div>
            <p class="text-red-700 text-sm self-center">{error}</p>
        </div>
    }
}

/// Success acknowledgment
#[component]
pub fn SuccessDisplay(message: String) -> impl IntoView {
    view! {
        <div class="bg-green-50 border border-green-200 rounded-xl p-4 flex items-start gap-4" role="status">
            <div class="bg-green-100 p-2 rounded-full text-green-600">
                <span class="text-xl font-bold">"✓"</span>
            </div>
            <p class="text-green-700 text-sm self-center">{message}</p>
        </div>
    }
}

/// Primary button component
#[component]
pub fn Button(
    /// Button label
    children: Children,
    /// Click handler
    #[prop(optional)]
    on_click: Option<Callback<()>>,
    /// Whether the button is disabled
    #[prop(into, optional)]
    disabled: MaybeProp<bool>,
    /// Additional CSS classes
    #[prop(default = "bg-blue-600 hover:bg-blue-700")]
    color: &'static str,
) -> impl IntoView {
    let base_class = "px-4 py-2 text-white rounded-lg transition-colors \
                      disabled:bg-gray-400 disabled:cursor-not-allowed \
                      font-medium shadow-sm active:transform active:scale-95";

    view! {
        <button
            type="button"
            disabled=move || disabled.get().unwrap_or(false)
            class=format!("{} {}", base_class, color)
            on:click=move |_| {
                if let Some(handler) = on_click {
                    handler.run(());
                }
            }
        >
            {children()}
        </button>
    }
}

/// Secondary button component
///
/// A lighter styled button for secondary actions.
#[component]
pub fn SecondaryButton(
    children: Children,
    #[prop(optional)]
    on_click: Option<Callback<()>>,
    #[prop(into, optional)]
    disabled: MaybeProp<bool>,
) -> impl IntoView {
    let class = "px-4 py-2 bg-white text-gray-700 rounded-lg hover:bg-gray-50 \
                 transition-colors border border-gray-300 disabled:opacity-50 \
                 font-medium shadow-sm active:bg-gray-100";

    view! {
        <button
            type="button"
            disabled=move || disabled.get().unwrap_or(false)
            class=class
            on:click=move |_| {
                if let Some(handler) = on_click {
                    handler.run(());
                }
            }
        >
            {children()}
        </button>
    }
}

/// Modal wrapper component
///
/// Provides modal backdrop styling. The open/close logic is handled by the
/// parent; the wrapper only reports close requests (close button, backdrop
/// click, or Escape anywhere on the page).
#[component]
pub fn ModalWrapper(
    /// Modal content
    children: Children,
    /// Callback when modal should close
    on_close: Callback<()>,
    /// Modal title
    #[prop(default = "")]
    title: &'static str,
    /// Tailwind max-width class for the panel
    #[prop(default = "max-w-3xl")]
    width: &'static str,
) -> impl IntoView {
    // Escape is heard on the window: focus usually stays on whatever opened
    // the modal, which is outside this subtree
    Effect::new(move || {
        let listener = window_event_listener(ev::keydown, move |event| {
            if is_close_key(&event.key()) {
                on_close.run(());
            }
        });
        on_cleanup(move || listener.remove());
    });

    view! {
        <div class="fixed inset-0 z-50 flex items-center justify-center p-4 sm:p-6">
            // Backdrop with blur
            <div
                class="absolute inset-0 bg-gray-900/60 backdrop-blur-sm transition-opacity"
                on:click=move |_| on_close.run(())
            ></div>

            <div
                class=format!(
                    "relative bg-white rounded-2xl shadow-2xl w-full {} max-h-[90vh] flex flex-col overflow-hidden",
                    width,
                )
                role="dialog"
                on:click=|event| event.stop_propagation()
            >
                <div class="flex justify-between items-center px-6 py-4 border-b border-gray-100 bg-gray-50/50">
                    <h2 class="text-xl font-bold text-gray-800">{title}</h2>
                    <button
                        class="text-gray-400 hover:text-gray-600 hover:bg-gray-100 rounded-full p-2 transition-colors"
                        on:click=move |_| on_close.run(())
                        title="Close"
                    >
                        <svg class="w-6 h-6" fill="none" stroke="currentColor" viewBox="0 0 24 24">
                            <path stroke-linecap="round" stroke-linejoin="round" stroke-width="2" d="M6 18L18 6M6 6l12 12"></path>
                        </svg>
                    </button>
                </div>

                <div class="p-6 overflow-y-auto">
                    {children()}
                </div>
            </div>
        </div>
    }
}

/// Keys that dismiss a modal
pub fn is_close_key(key: &str) -> bool {
    key == "Escape" || key == "Esc"
}

/// Split a 0-5 rating into (full, half, empty) star counts
pub fn star_split(rating: f64) -> (usize, bool, usize) {
    let rating = if rating.is_finite() { rating.clamp(0.0, 5.0) } else { 0.0 };
    let full = rating.floor() as usize;
    let half = full < 5 && (rating - rating.floor()) >= 0.5;
    let empty = 5 - full - usize::from(half);
    (full, half, empty)
}

/// Star rating display component
///
/// Displays a star rating (0-5) with filled, half and empty stars.
#[component]
pub fn StarRating(
    /// The rating value (0.0 to 5.0)
    rating: f64,
) -> impl IntoView {
    let (full_stars, has_half, empty_stars) = star_split(rating);

    view! {
        <div class="flex items-center gap-0.5" title=format!("Rating: {:.1}", rating)>
            {(0..full_stars).map(|_| view! {
                <span class="text-yellow-400 text-lg">"★"</span>
            }).collect_view()}

            {has_half.then(|| view! {
                <div class="relative inline-block text-lg">
                    <span class="text-gray-200">"★"</span>
                    <span class="absolute top-0 left-0 overflow-hidden w-1/2 text-yellow-400">"★"</span>
                </div>
            })}

            {(0..empty_stars).map(|_| view! {
                <span class="text-gray-200 text-lg">"★"</span>
            }).collect_view()}
        </div>
    }
}

/// Badge component
///
/// A small chip for labels such as the product category.
#[component]
pub fn Badge(
    children: Children,
    /// Badge color variant
    #[prop(default = "gray")]
    variant: &'static str,
) -> impl IntoView {
    view! {
        <span class=badge_class(variant)>
            {children()}
        </span>
    }
}

fn badge_class(variant: &str) -> &'static str {
    match variant {
        "blue" => "px-2.5 py-0.5 text-xs font-medium rounded-full bg-blue-100 text-blue-800 border border-blue-200",
        _ => "px-2.5 py-0.5 text-xs font-medium rounded-full bg-gray-100 text-gray-800 border border-gray-200",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_star_split() {
        let cases = [
            (0.0, (0, false, 5)),
            (2.4, (2, false, 3)),
            (2.5, (2, true, 2)),
            (3.3, (3, false, 2)),
            (4.8, (4, true, 0)),
            (5.0, (5, false, 0)),
        ];
        for (rating, expected) in cases {
            assert_eq!(star_split(rating), expected, "rating {}", rating);
        }
    }

    #[test]
    fn test_star_split_out_of_range() {
        assert_eq!(star_split(7.5), (5, false, 0));
        assert_eq!(star_split(-1.0), (0, false, 5));
        assert_eq!(star_split(f64::NAN), (0, false, 5));
    }

    #[test]
    fn test_close_keys() {
        assert!(is_close_key("Escape"));
        assert!(is_close_key("Esc"));
        assert!(!is_close_key("Enter"));
        assert!(!is_close_key("e"));
    }

    #[test]
    fn test_badge_variants() {
        assert!(badge_class("blue").contains("bg-blue-100"));
        assert!(badge_class("unknown").contains("bg-gray-100"));
    }
}
