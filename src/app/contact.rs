use leptos::{either::Either, ev::SubmitEvent, html, prelude::*};

use crate::contact::{ContactForm, SUBMIT_DELAY, SUBMIT_SUCCESS};
use crate::portfolio::{ContactInfo, CONTACT_INFO};

use super::{NotificationKind, Notifications, SectionHeader};

const FIELD_CLASS: &str = "w-full px-4 py-3 rounded-lg border border-gray-300 dark:border-charcoal-600 bg-white dark:bg-charcoal-700 focus:outline-none focus:ring-2 focus:ring-teal-500";

#[component]
fn ContactItem(contact: ContactInfo) -> impl IntoView {
    let external = contact.is_external();
    let icon = if contact.icon.starts_with("devicon-") {
        Either::Left(view! { <i class=contact.icon /> })
    } else {
        Either::Right(view! { <span>{contact.icon}</span> })
    };
    view! {
        <a
            href=contact.href
            target=external.then_some("_blank")
            rel=external.then_some("noopener noreferrer")
            class="p-5 flex items-center gap-4 rounded-xl bg-white/70 dark:bg-charcoal-700/70 shadow-md hover:translate-x-2 transition-transform group"
        >
            <div class="w-12 h-12 rounded-xl bg-gradient-to-br from-teal-500 to-teal-600 text-white text-xl flex items-center justify-center">
                {icon}
            </div>
            <div class="flex-1 min-w-0">
                <h3 class="font-semibold text-sm">{contact.title}</h3>
                <p class="text-teal-600 dark:text-teal-400 text-sm truncate group-hover:underline">
                    {contact.value}
                </p>
            </div>
        </a>
    }
}

#[component]
pub fn Contact() -> impl IntoView {
    let notifications = expect_context::<Notifications>();
    let name_ref = NodeRef::<html::Input>::new();
    let email_ref = NodeRef::<html::Input>::new();
    let message_ref = NodeRef::<html::Textarea>::new();
    let (submitting, set_submitting) = signal(false);

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        if submitting.get_untracked() {
            return;
        }
        let (Some(name), Some(email), Some(message)) = (
            name_ref.get_untracked(),
            email_ref.get_untracked(),
            message_ref.get_untracked(),
        ) else {
            return;
        };
        let form = ContactForm::new(name.value(), email.value(), message.value());
        if let Err(e) = form.validate() {
            notifications.show(e.to_string(), NotificationKind::Error);
            return;
        }

        set_submitting.set(true);
        set_timeout(
            move || {
                notifications.show(SUBMIT_SUCCESS, NotificationKind::Success);
                name.set_value("");
                email.set_value("");
                message.set_value("");
                set_submitting.set(false);
            },
            SUBMIT_DELAY,
        );
    };

    view! {
        <section id="contact" class="py-20 px-4">
            <div class="max-w-6xl mx-auto">
                <SectionHeader title="Get In Touch" />
                <div class="grid lg:grid-cols-2 gap-12">
                    <div class="space-y-6">
                        {CONTACT_INFO
                            .iter()
                            .map(|c| view! { <ContactItem contact=*c /> })
                            .collect_view()}
                    </div>
                    <form
                        class="p-8 rounded-xl bg-white dark:bg-charcoal-700 shadow-lg space-y-6"
                        on:submit=on_submit
                    >
                        <label class="block">
                            <span class="block mb-2 font-medium">"Name"</span>
                            <input
                                node_ref=name_ref
                                type="text"
                                name="name"
                                placeholder="Your full name"
                                class=FIELD_CLASS
                            />
                        </label>
                        <label class="block">
                            <span class="block mb-2 font-medium">"Email"</span>
                            <input
                                node_ref=email_ref
                                type="email"
                                name="email"
                                placeholder="your.email@example.com"
                                class=FIELD_CLASS
                            />
                        </label>
                        <label class="block">
                            <span class="block mb-2 font-medium">"Message"</span>
                            <textarea
                                node_ref=message_ref
                                name="message"
                                rows="5"
                                placeholder="Tell me about your project or just say hello!"
                                class=FIELD_CLASS
                            ></textarea>
                        </label>
                        <button
                            type="submit"
                            disabled=move || submitting.get()
                            class="w-full py-3 rounded-lg bg-teal-600 text-white font-medium hover:bg-teal-700 disabled:opacity-60 disabled:cursor-wait transition-colors"
                        >
                            {move || if submitting.get() { "Sending..." } else { "Send Message" }}
                        </button>
                    </form>
                </div>
            </div>
        </section>
    }
}
