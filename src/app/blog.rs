use leptos::prelude::*;

use crate::content::BLOGS;

use super::{
    section::{Entrance, Section, SectionHeading},
    use_palette,
};

#[component]
pub fn BlogList() -> impl IntoView {
    let palette = use_palette();
    view! {
        <Section id="blog" entrance=Entrance::FadeUp card=true>
            <SectionHeading text="Blog" />
            <ul class="list-disc list-inside space-y-4 max-w-xl mx-auto">
                {BLOGS
                    .iter()
                    .map(|entry| {
                        view! {
                            <li>
                                <a
                                    href=entry.link
                                    target="_blank"
                                    rel="noopener noreferrer"
                                    class=move || {
                                        format!("hover:underline font-semibold {}", palette.get().link)
                                    }
                                >
                                    {entry.title}
                                </a>
                                " "
                                <span class="text-sm text-gray-500">{entry.display_date()}</span>
                            </li>
                        }
                    })
                    .collect_view()}
            </ul>
            <p class="text-center text-sm mt-8">
                <a href="/rss.xml" target="_blank" class="text-orange-500 hover:underline">
                    "RSS feed"
                </a>
            </p>
        </Section>
    }
}
