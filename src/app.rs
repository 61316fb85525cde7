mod avatar;
mod blog;
mod contact;
mod footer;
mod header;
mod homepage;
mod marquee;
mod resume;
mod section;
mod typed;

use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::{components::*, path};

use crate::{
    content::{person_json_ld, PROFILE},
    theme::Palette,
    view_state::ViewState,
};
use footer::Footer;
use header::Header;
use homepage::HomePage;

pub fn shell(options: LeptosOptions) -> impl IntoView {
    let structured_data = person_json_ld().to_string();
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <meta name="description" content=PROFILE.tagline />
                <AutoReload options=options.clone() />
                <HydrationScripts options />
                <link rel="shortcut icon" type="image/ico" href="/favicon.ico" />
                <link rel="stylesheet" id="leptos" href="/pkg/portfolio-site.css" />
                <link
                    rel="alternate"
                    type="application/rss+xml"
                    title="Blog RSS Feed"
                    href="/rss.xml"
                />
                <script type="application/ld+json" inner_html=structured_data></script>
                <MetaTags />
            </head>
            <body class="font-sans">
                <App />
            </body>
        </html>
    }
}

/// The page's only mutable state; every component reads it from context.
pub(crate) fn use_view_state() -> RwSignal<ViewState> {
    expect_context::<RwSignal<ViewState>>()
}

pub(crate) fn use_palette() -> Signal<&'static Palette> {
    let view_state = use_view_state();
    Signal::derive(move || view_state.with(|s| s.theme().palette()))
}

#[component]
pub fn App() -> impl IntoView {
    // Provides context that manages stylesheets, titles, meta tags, etc.
    provide_meta_context();

    let view_state = RwSignal::new(ViewState::new());
    provide_context(view_state);
    let theme = Memo::new(move |_| view_state.with(|s| s.theme()));

    view! {
        // sets the document title
        <Title formatter=|title| format!("{} - {title}", PROFILE.name) />
        <Meta name="color-scheme" content=move || theme.get().color_scheme() />

        <Router>
            <div class=move || {
                format!("min-h-screen w-full transition-colors {}", theme.get().palette().page)
            }>
                <Header />
                <main class="w-full">
                    <Routes fallback=|| view! { <NotFound /> }>
                        <Route path=path!("/") view=HomePage />
                    </Routes>
                </main>
                <Footer />
            </div>
        </Router>
    }
}

#[component]
fn NotFound() -> impl IntoView {
    view! {
        <Title text="Not Found" />
        <div class="max-w-4xl mx-auto px-4 py-16 text-center">
            <h1 class="text-3xl font-semibold mb-4">"Page not found."</h1>
            <a href="/" class="text-orange-500 hover:underline">
                "Back to the portfolio"
            </a>
        </div>
    }
}
