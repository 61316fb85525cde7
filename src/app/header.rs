use leptos::prelude::*;

use crate::{
    content::{NAV_SECTIONS, PROFILE},
    view_state::ViewState,
};

use super::{use_palette, use_view_state};

#[component]
pub fn Header() -> impl IntoView {
    let view_state = use_view_state();
    let palette = use_palette();
    let theme = move || view_state.with(|s| s.theme());

    view! {
        <nav class=move || format!("sticky top-0 z-50 shadow-md {}", palette.get().nav)>
            <div class="max-w-6xl mx-auto px-4 py-4 flex justify-between items-center">
                <a
                    href="#about"
                    class=move || format!("text-xl font-bold {}", palette.get().accent)
                >
                    {PROFILE.name}
                </a>
                <div class="space-x-6 hidden md:flex">
                    {NAV_SECTIONS
                        .iter()
                        .map(|&section| {
                            view! {
                                <a
                                    href=format!("#{section}")
                                    class=move || format!("capitalize {}", palette.get().nav_link)
                                >
                                    {section}
                                </a>
                            }
                        })
                        .collect_view()}
                </div>
                <button
                    on:click=move |_| view_state.update(ViewState::toggle_theme)
                    class=move || {
                        format!(
                            "ml-4 px-3 py-1 rounded-full border-2 transition {}",
                            palette.get().toggle,
                        )
                    }
                    aria-label="Toggle Dark Mode"
                    aria-pressed=move || theme().is_dark().to_string()
                    title="Toggle Dark Mode"
                >
                    {move || theme().toggle_label()}
                </button>
            </div>
        </nav>
    }
}
