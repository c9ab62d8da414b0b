use leptos::prelude::*;

use crate::portfolio::{ABOUT_PARAGRAPHS, OWNER_NAME, OWNER_TITLE, SKILL_CATEGORIES};

use super::SectionHeader;

#[component]
pub fn About() -> impl IntoView {
    view! {
        <section id="about" class="py-20 px-4 bg-white dark:bg-charcoal-800">
            <div class="max-w-6xl mx-auto">
                <SectionHeader title="About Me" subtitle="Get to know me and my expertise" />
                <div class="grid md:grid-cols-3 gap-10 items-center">
                    <div class="flex flex-col items-center text-center">
                        <img
                            src="/images/profile.jpg"
                            alt=OWNER_NAME
                            class="w-48 h-48 rounded-full object-cover shadow-xl ring-4 ring-teal-500/30"
                        />
                        <h3 class="mt-6 text-xl font-bold">{OWNER_NAME}</h3>
                        <p class="text-teal-600 dark:text-teal-400">{OWNER_TITLE}</p>
                    </div>
                    <div class="md:col-span-2 space-y-4 text-lg leading-relaxed text-gray-700 dark:text-gray-300">
                        {ABOUT_PARAGRAPHS.iter().map(|p| view! { <p>{*p}</p> }).collect_view()}
                    </div>
                </div>
            </div>
        </section>
    }
}

#[component]
pub fn Skills() -> impl IntoView {
    view! {
        <section id="skills" class="py-20 px-4">
            <div class="max-w-6xl mx-auto">
                <SectionHeader title="Skills" subtitle="Technologies and strengths I work with" />
                <div class="grid sm:grid-cols-2 lg:grid-cols-4 gap-6">
                    {SKILL_CATEGORIES
                        .iter()
                        .map(|category| {
                            view! {
                                <div class="p-6 rounded-xl bg-white/70 dark:bg-charcoal-700/70 shadow-md">
                                    <h3 class="mb-4 font-bold text-teal-600 dark:text-teal-400">
                                        {category.title}
                                    </h3>
                                    <div class="flex flex-wrap gap-2">
                                        {category
                                            .skills
                                            .iter()
                                            .map(|skill| {
                                                view! {
                                                    <span class="px-3 py-1 rounded-full text-sm bg-teal-600/10 text-teal-700 dark:text-teal-300">
                                                        {*skill}
                                                    </span>
                                                }
                                            })
                                            .collect_view()}
                                    </div>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}
