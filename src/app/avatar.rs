use leptos::{ev, prelude::*};
use leptos_use::{use_document, use_event_listener};

use crate::{content::PROFILE, view_state::ViewState};

use super::{
    section::{Entrance, Section},
    typed::TypedRoles,
    use_palette, use_view_state,
};

#[component]
pub fn Hero() -> impl IntoView {
    let view_state = use_view_state();
    let palette = use_palette();

    view! {
        <Section id="about" entrance=Entrance::FadeUp layout="max-w-4xl mx-auto px-4 py-16 text-center">
            <div class="flex flex-col items-center gap-6">
                <img
                    src=PROFILE.photo_path
                    alt=PROFILE.name
                    class="w-36 h-36 rounded-full border-4 border-orange-300 object-cover cursor-pointer hover:scale-105 transition"
                    on:click=move |_| view_state.update(ViewState::open_image_preview)
                />
                <h1 class=move || format!("text-4xl font-bold {}", palette.get().accent)>
                    "Hi, I'm " {PROFILE.name} " 👋"
                </h1>
                <h2 class="text-2xl font-semibold text-orange-600">
                    "I am a " <TypedRoles words=PROFILE.headline_roles />
                </h2>
                <p class="text-lg max-w-2xl mt-4">{PROFILE.bio}</p>
                <a
                    href=PROFILE.resume_path
                    download=PROFILE.resume_file_name
                    class="mt-6 inline-block px-6 py-2 rounded-full transition bg-orange-600 text-white hover:bg-orange-700"
                >
                    "Download Resume"
                </a>
            </div>
        </Section>
        <ImageModal />
    }
}

/// Full-size profile photo over a dimmed overlay. Clicking anywhere on the
/// overlay or pressing Escape closes it.
#[component]
fn ImageModal() -> impl IntoView {
    let view_state = use_view_state();
    let close = move || view_state.update(ViewState::close_image_preview);

    let _ = use_event_listener(use_document(), ev::keydown, move |ev| {
        if ev.key() == "Escape" {
            close();
        }
    });

    view! {
        <Show when=move || view_state.with(|s| s.image_modal_open())>
            <div
                class="fixed inset-0 bg-black/80 flex justify-center items-center z-50 cursor-pointer"
                role="dialog"
                aria-modal="true"
                aria-label="Close profile image modal"
                on:click=move |_| close()
            >
                <img
                    src=PROFILE.photo_path
                    alt=format!("{} Full", PROFILE.name)
                    class="max-w-md rounded-lg border-4 border-white"
                />
            </div>
        </Show>
    }
}
