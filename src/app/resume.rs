use leptos::prelude::*;

use crate::content::{Project, Skill, EXPERIENCE, PROJECTS, SKILLS};

use super::{
    section::{Entrance, Section, SectionHeading},
    use_palette,
};

#[component]
pub fn Skills() -> impl IntoView {
    view! {
        <Section id="skills" entrance=Entrance::FadeRight card=true>
            <SectionHeading text="Skills" />
            <ul class="flex flex-wrap justify-center gap-4">
                {SKILLS.iter().map(|skill| view! { <SkillBar skill /> }).collect_view()}
            </ul>
        </Section>
    }
}

#[component]
fn SkillBar(skill: &'static Skill) -> impl IntoView {
    let palette = use_palette();
    view! {
        <li class=move || format!("w-36 rounded-full p-3 {}", palette.get().skill_chip)>
            <div class=move || {
                format!("flex justify-between mb-1 font-semibold {}", palette.get().subheading)
            }>{skill.name}</div>
            <div
                class=move || {
                    format!("w-full rounded-full h-3 overflow-hidden {}", palette.get().skill_track)
                }
                role="progressbar"
                aria-label=skill.name
                aria-valuemin="0"
                aria-valuemax="100"
                aria-valuenow=skill.level.to_string()
            >
                <div
                    class="bg-orange-600 h-3 rounded-full transition-all duration-500"
                    style=format!("width: {}%", skill.level)
                />
            </div>
            <div class=move || {
                format!("text-right text-sm mt-1 {}", palette.get().skill_level)
            }>{skill.level} "%"</div>
        </li>
    }
}

#[component]
pub fn Projects() -> impl IntoView {
    view! {
        <Section id="projects" entrance=Entrance::FadeLeft card=true>
            <SectionHeading text="Projects" />
            <ul class="space-y-8">
                {PROJECTS
                    .iter()
                    .map(|project| view! { <ProjectCard project /> })
                    .collect_view()}
            </ul>
        </Section>
    }
}

#[component]
fn ProjectCard(project: &'static Project) -> impl IntoView {
    view! {
        <li class="space-y-2">
            <h3 class="text-xl font-semibold text-orange-600">{project.name}</h3>
            <p>{project.description}</p>
            <div class="flex gap-4">
                <a
                    href=project.live_url
                    target="_blank"
                    rel="noopener noreferrer"
                    class="text-orange-500 hover:underline"
                >
                    "Live Demo"
                </a>
                <a
                    href=project.code_url
                    target="_blank"
                    rel="noopener noreferrer"
                    class="text-orange-500 hover:underline"
                >
                    "View Code"
                </a>
            </div>
        </li>
    }
}

#[component]
pub fn ExperienceTimeline() -> impl IntoView {
    let palette = use_palette();
    view! {
        <Section id="experience" entrance=Entrance::FadeLeft card=true>
            <SectionHeading text="Experience" />
            <ul class="space-y-6 max-w-xl mx-auto">
                {EXPERIENCE
                    .iter()
                    .map(|item| {
                        view! {
                            <li class="border-l-4 border-orange-400 pl-4">
                                <h3 class=move || {
                                    format!("text-xl font-semibold {}", palette.get().subheading)
                                }>{item.role} " @ " {item.company}</h3>
                                <p class="italic text-sm text-gray-500">{item.duration}</p>
                                <p class="mt-2">{item.details}</p>
                            </li>
                        }
                    })
                    .collect_view()}
            </ul>
        </Section>
    }
}
