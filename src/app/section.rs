use leptos::{html, prelude::*};
use leptos_use::use_intersection_observer;

use super::use_palette;

const CARD_CLASSES: &str = "max-w-4xl mx-auto px-4 py-16 rounded-md shadow-md my-8";

/// Direction a section slides in from when it scrolls into view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Entrance {
    FadeUp,
    FadeLeft,
    FadeRight,
}

impl Entrance {
    pub fn class(self) -> &'static str {
        match self {
            Entrance::FadeUp => "reveal-fade-up",
            Entrance::FadeLeft => "reveal-fade-left",
            Entrance::FadeRight => "reveal-fade-right",
        }
    }
}

/// A page section with an anchor id that animates in while it is inside
/// the viewport.
///
/// `card` sections sit on the themed surface colour; `layout` classes are
/// appended as-is.
#[component]
pub fn Section(
    id: &'static str,
    entrance: Entrance,
    #[prop(optional)] card: bool,
    #[prop(optional)] layout: &'static str,
    children: Children,
) -> impl IntoView {
    let palette = use_palette();
    let target = NodeRef::<html::Section>::new();
    let (revealed, set_revealed) = signal(false);

    use_intersection_observer(target, move |entries, _| {
        if let Some(entry) = entries.first() {
            set_revealed.set(entry.is_intersecting());
        }
    });

    let classes = move || {
        let mut classes = vec!["reveal", entrance.class()];
        if revealed.get() {
            classes.push("revealed");
        }
        if card {
            classes.push(CARD_CLASSES);
            classes.push(palette.get().surface);
        }
        if !layout.is_empty() {
            classes.push(layout);
        }
        classes.join(" ")
    };

    view! {
        <section id=id node_ref=target class=classes>
            {children()}
        </section>
    }
}

#[component]
pub fn SectionHeading(text: &'static str) -> impl IntoView {
    let palette = use_palette();
    view! {
        <h2 class=move || {
            format!("text-3xl font-semibold mb-8 text-center {}", palette.get().accent)
        }>{text}</h2>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entrance_classes() {
        assert_eq!(Entrance::FadeUp.class(), "reveal-fade-up");
        assert_eq!(Entrance::FadeLeft.class(), "reveal-fade-left");
        assert_eq!(Entrance::FadeRight.class(), "reveal-fade-right");
    }
}
