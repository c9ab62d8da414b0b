use leptos::prelude::*;

use crate::portfolio::{Project, PROJECTS};

use super::SectionHeader;

#[component]
pub fn Projects() -> impl IntoView {
    view! {
        <section id="projects" class="py-20 px-4">
            <div class="max-w-6xl mx-auto">
                <SectionHeader title="Projects" subtitle="Things I've built with my teams" />
                <div class="grid md:grid-cols-2 gap-8">
                    {PROJECTS.iter().map(|p| view! { <ProjectCard project=*p /> }).collect_view()}
                </div>
            </div>
        </section>
    }
}

#[component]
fn ProjectCard(project: Project) -> impl IntoView {
    let team = if project.team_size == 1 {
        "Solo project".to_string()
    } else {
        format!("👥 Team of {}", project.team_size)
    };
    view! {
        <article class="p-6 rounded-xl bg-white/80 dark:bg-charcoal-700/80 shadow-lg hover:shadow-xl transition-shadow flex flex-col">
            <h3 class="text-xl font-bold mb-3">{project.title}</h3>
            <p class="flex-grow mb-4 text-gray-700 dark:text-gray-300 leading-relaxed">
                {project.description}
            </p>
            <div class="flex flex-wrap gap-2 mb-4">
                {project
                    .technologies
                    .iter()
                    .map(|t| {
                        view! {
                            <span class="px-3 py-1 rounded-full text-xs font-medium bg-cyan-600/10 text-cyan-700 dark:text-cyan-300">
                                {*t}
                            </span>
                        }
                    })
                    .collect_view()}
            </div>
            <div class="flex items-center justify-between text-sm text-gray-500 dark:text-gray-400">
                <span>{team}</span>
                <div class="flex gap-3">
                    {project
                        .github_url
                        .map(|href| {
                            view! {
                                <a
                                    href=href
                                    target="_blank"
                                    rel="noopener noreferrer"
                                    aria-label="Source code"
                                    class="text-xl hover:text-teal-600"
                                >
                                    <i class="devicon-github-plain" />
                                </a>
                            }
                        })}
                    {project
                        .live_url
                        .map(|href| {
                            view! {
                                <a
                                    href=href
                                    target="_blank"
                                    rel="noopener noreferrer"
                                    class="hover:text-teal-600"
                                >
                                    "Live ↗"
                                </a>
                            }
                        })}
                </div>
            </div>
        </article>
    }
}
