use leptos::prelude::*;

use crate::typewriter::Typewriter;

use super::use_palette;

/// Cycles through `words` with a typing animation. Server output is just
/// the cursor; the animation starts once the page is hydrated.
#[component]
pub fn TypedRoles(words: &'static [&'static str]) -> impl IntoView {
    let palette = use_palette();
    let (text, set_text) = signal(String::new());
    let typewriter = StoredValue::new(Typewriter::new(words.iter().copied()));

    Effect::new(move |_| step(typewriter, set_text));

    view! {
        <span class=move || palette.get().typed aria-label=words.join(", ")>
            {text}
            <span class="typed-cursor" aria-hidden="true">
                "|"
            </span>
        </span>
    }
}

fn step(typewriter: StoredValue<Typewriter>, set_text: WriteSignal<String>) {
    // None once the component is gone and the value disposed
    let Some((delay, text)) = typewriter.try_update_value(|tw| {
        let delay = tw.tick();
        (delay, tw.text().to_string())
    }) else {
        return;
    };
    set_text.set(text);
    if let Some(delay) = delay {
        set_timeout(move || step(typewriter, set_text), delay);
    }
}
