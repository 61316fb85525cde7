use leptos::prelude::*;
use leptos_meta::Title;

use crate::content::PROFILE;

use super::{
    avatar::Hero,
    blog::BlogList,
    contact::Contact,
    marquee::Marquee,
    resume::{ExperienceTimeline, Projects, Skills},
};

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <Title text="Portfolio" />
        <Marquee text=PROFILE.tagline />
        <Hero />
        <Skills />
        <Projects />
        <ExperienceTimeline />
        <BlogList />
        <Contact />
    }
}
