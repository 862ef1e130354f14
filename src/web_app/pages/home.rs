// web_app/pages/home.rs - Landing page

use leptos::prelude::*;

use crate::web_app::routes::LISTING;

/// (icon, title, description) for each feature tile
const FEATURES: [(&str, &str, &str); 4] = [
    ("⚡", "Fastest Gear", "Experience blazing fast performance with our cutting-edge hardware."),
    ("🔒", "Secure Shopping", "Shop with confidence knowing you will receive genuine fake products."),
    ("🎧", "24/7 Support", "Our support team is here to help you anytime, anywhere."),
    ("🏬", "Wide Selection", "Choose from a vast array of the latest and greatest in FakeTech."),
];

/// Landing page with the hero banner and feature highlights
#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <div class="bg-gray-50">
            <section class="bg-gradient-to-br from-blue-600 to-indigo-700 text-white">
                <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8 py-24 text-center">
                    <h1 class="text-4xl md:text-5xl font-extrabold tracking-tight mb-4">
                        "Welcome to FalseDisk"
                    </h1>
                    <p class="text-lg md:text-xl text-blue-100 mb-10 max-w-2xl mx-auto">
                        "An online computer store offering the latest & greatest in FakeTech"
                    </p>
                    <a
                        href=LISTING
                        class="inline-block px-8 py-3 bg-white text-blue-700 rounded-xl font-semibold \
                               shadow-md hover:shadow-lg hover:bg-blue-50 transition-all"
                    >
                        "Shop Now"
                    </a>
                </div>
            </section>

            <section class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8 py-16">
                <div class="grid grid-cols-1 sm:grid-cols-2 lg:grid-cols-4 gap-6">
                    {FEATURES
                        .into_iter()
                        .map(|(icon, title, description)| view! {
                            <div class="bg-white rounded-2xl p-6 shadow-sm border border-gray-100 text-center">
                                <div class="text-4xl mb-4">{icon}</div>
                                <h3 class="text-lg font-bold text-gray-900 mb-2">{title}</h3>
                                <p class="text-sm text-gray-600">{description}</p>
                            </div>
                        })
                        .collect_view()}
                </div>
            </section>
        </div>
    }
}
