use leptos::prelude::*;

use crate::portfolio::{EducationItem, ExperienceItem, EDUCATION, EXPERIENCE};

use super::SectionHeader;

#[component]
pub fn Education() -> impl IntoView {
    view! {
        <section id="education" class="py-20 px-4 bg-white dark:bg-charcoal-800">
            <div class="max-w-4xl mx-auto">
                <SectionHeader title="Education" />
                <ol class="relative border-l-2 border-teal-500/40 ml-3 space-y-10">
                    {EDUCATION.iter().map(|item| view! { <EducationEntry item=*item /> }).collect_view()}
                </ol>
            </div>
        </section>
    }
}

#[component]
fn EducationEntry(item: EducationItem) -> impl IntoView {
    view! {
        <li class="ml-6">
            <span class="absolute -left-[9px] mt-1.5 h-4 w-4 rounded-full bg-teal-500 ring-4 ring-white dark:ring-charcoal-800"></span>
            <p class="text-sm font-semibold text-teal-600 dark:text-teal-400">{item.years}</p>
            <h3 class="text-lg font-bold">{item.title}</h3>
            <p class="text-gray-700 dark:text-gray-300">{item.institution}</p>
            <div class="flex gap-4 text-sm text-gray-500 dark:text-gray-400">
                <span>{format!("📍 {}", item.location)}</span>
                <span>{item.grade}</span>
            </div>
        </li>
    }
}

#[component]
pub fn Experience() -> impl IntoView {
    view! {
        <section id="experience" class="py-20 px-4 bg-white dark:bg-charcoal-800">
            <div class="max-w-6xl mx-auto">
                <SectionHeader title="Experience & Achievements" />
                <div class="grid sm:grid-cols-2 gap-6">
                    {EXPERIENCE
                        .iter()
                        .map(|item| view! { <ExperienceCard item=*item /> })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}

#[component]
fn ExperienceCard(item: ExperienceItem) -> impl IntoView {
    view! {
        <div class="p-6 rounded-xl bg-cream-50 dark:bg-charcoal-700 shadow-md flex gap-4">
            <div class="text-3xl">{item.icon}</div>
            <div>
                <h3 class="text-lg font-bold mb-1">{item.title}</h3>
                {(!item.description.is_empty())
                    .then(|| {
                        view! {
                            <p class="text-gray-700 dark:text-gray-300">{item.description}</p>
                        }
                    })}
                {(!item.items.is_empty())
                    .then(|| {
                        view! {
                            <ul class="list-disc list-inside text-gray-700 dark:text-gray-300 space-y-1">
                                {item.items.iter().map(|i| view! { <li>{*i}</li> }).collect_view()}
                            </ul>
                        }
                    })}
            </div>
        </div>
    }
}
