use leptos::prelude::*;

use crate::content::PROFILE;

use super::use_palette;

#[component]
pub fn Footer() -> impl IntoView {
    let palette = use_palette();
    view! {
        <footer class=move || format!("text-center py-6 {}", palette.get().footer)>
            "© " {env!("BUILD_YEAR")} " " {PROFILE.name} ". All rights reserved."
        </footer>
    }
}
