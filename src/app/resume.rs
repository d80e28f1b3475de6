use leptos::prelude::*;

use crate::compose::{ProjectCard, SkillBar, TimelineEntry};
use crate::view_state::Section;

#[component]
pub fn Skills(bars: Vec<SkillBar>) -> impl IntoView {
    view! {
        <section id=Section::Skills.id() class="skills py-16 section-content">
            <h2 class="text-xl font-bold my-8">"Technical Skills"</h2>
            <div class="skills-container grid gap-x-6 gap-y-4 grid-cols-1 md:grid-cols-2">
                {bars
                    .into_iter()
                    .map(|bar| {
                        view! {
                            <div class="skill-item space-y-2" data-category=bar.category.as_str()>
                                <div class="skill-header flex justify-between">
                                    <span class="skill-name">{bar.name}</span>
                                    <span class="skill-percentage text-muted">{bar.percentage}</span>
                                </div>
                                <div class="skill-bar h-2 w-full rounded-full bg-brightBlack/40">
                                    <div
                                        class="skill-progress h-2 rounded-full bg-cyan"
                                        style=format!("width: {}", bar.width)
                                    ></div>
                                </div>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
        </section>
    }
}

#[component]
pub fn Projects(cards: Vec<ProjectCard>) -> impl IntoView {
    view! {
        <section id=Section::Projects.id() class="projects py-16 section-content">
            <h2 class="text-xl font-bold my-8">"Featured Projects"</h2>
            <div class="projects-grid grid gap-6 grid-cols-1 md:grid-cols-2">
                {cards.into_iter().map(|card| view! { <Project card /> }).collect_view()}
            </div>
        </section>
    }
}

#[component]
fn Project(card: ProjectCard) -> impl IntoView {
    view! {
        <div class="project-card bg-brightBlack/30 p-6 rounded-lg border border-muted/30">
            <div class="project-header flex items-start justify-between gap-4 mb-2">
                <h3 class="font-bold text-lg">{card.title}</h3>
                <div class="project-links flex gap-3 text-sm">
                    {card
                        .links
                        .into_iter()
                        .map(|link| {
                            view! {
                                <a href=link.href class="text-blue hover:text-brightBlue">
                                    {link.label}
                                </a>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
            <p class="mb-4">{card.description}</p>
            <div class="technologies flex flex-wrap gap-2">
                {card
                    .technologies
                    .into_iter()
                    .map(|tech| {
                        view! {
                            <span class="tech-tag text-xs px-2 py-1 rounded bg-cyan/10 text-cyan">
                                {tech}
                            </span>
                        }
                    })
                    .collect_view()}
            </div>
        </div>
    }
}

#[component]
pub fn Timeline(entries: Vec<TimelineEntry>) -> impl IntoView {
    view! {
        <section id=Section::Experience.id() class="experience py-16 section-content">
            <h2 class="text-xl font-bold my-8">"Professional Experience"</h2>
            <div class="timeline grid gap-x-6 gap-y-6 border-l border-muted/40 pl-6">
                {entries
                    .into_iter()
                    .map(|entry| {
                        view! {
                            <div class="timeline-item relative space-y-2">
                                <div class="timeline-marker absolute -left-8 top-1 w-3 h-3 rounded-full bg-cyan"></div>
                                <div class="timeline-content">
                                    <h3 class="text-left font-bold">{entry.role}</h3>
                                    <h4 class="text-muted">{entry.heading}</h4>
                                    <ul class="list-disc pl-5 text-sm space-y-1">
                                        {entry
                                            .bullets
                                            .into_iter()
                                            .map(|item| view! { <li>{item}</li> })
                                            .collect_view()}
                                    </ul>
                                </div>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
        </section>
    }
}
