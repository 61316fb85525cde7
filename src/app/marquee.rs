use leptos::prelude::*;

use super::use_palette;

/// Endlessly scrolling banner. The text is rendered twice so the CSS
/// animation can loop without a gap; hovering pauses it.
#[component]
pub fn Marquee(text: &'static str) -> impl IntoView {
    let palette = use_palette();
    view! {
        <div class=move || {
            format!("marquee overflow-hidden whitespace-nowrap py-1 {}", palette.get().marquee)
        }>
            <div class="marquee-track">
                <span class="px-8">{text}</span>
                <span class="px-8" aria-hidden="true">
                    {text}
                </span>
            </div>
        </div>
    }
}
