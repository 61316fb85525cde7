use leptos::{either::Either, html, prelude::*};

use crate::{
    contact::{ContactError, ContactForm},
    content::CONTACT,
};

use super::{
    section::{Entrance, Section, SectionHeading},
    use_palette,
};

const FIELD_CLASS: &str =
    "p-3 rounded border border-orange-400 focus:outline-none focus:ring-2 focus:ring-orange-600";

#[component]
pub fn Contact() -> impl IntoView {
    let palette = use_palette();
    view! {
        <Section id="contact" entrance=Entrance::FadeRight card=true>
            <SectionHeading text="Contact Me" />
            <div class=move || {
                format!("text-center mb-8 space-y-2 {}", palette.get().contact_text)
            }>
                <p>
                    "📧 Email: "
                    <a
                        href=format!("mailto:{}", CONTACT.email)
                        class="text-orange-500 hover:underline"
                    >
                        {CONTACT.email}
                    </a>
                </p>
                <p>
                    "📞 Phone: "
                    <a href=format!("tel:{}", CONTACT.phone) class="text-orange-500 hover:underline">
                        {CONTACT.phone}
                    </a>
                </p>
                <p>
                    "🔗 LinkedIn: "
                    <a
                        href=CONTACT.linkedin_url
                        target="_blank"
                        rel="noopener noreferrer"
                        class="text-orange-500 hover:underline"
                    >
                        {CONTACT.linkedin_label}
                    </a>
                </p>
            </div>
            <MessageForm />
        </Section>
    }
}

/// Collects a message and acknowledges it locally. Nothing leaves the page.
#[component]
fn MessageForm() -> impl IntoView {
    let name_ref = NodeRef::<html::Input>::new();
    let email_ref = NodeRef::<html::Input>::new();
    let message_ref = NodeRef::<html::Textarea>::new();
    let (status, set_status) = signal(None::<Result<&'static str, ContactError>>);

    view! {
        <form
            class="max-w-md mx-auto flex flex-col gap-4"
            on:submit=move |ev| {
                ev.prevent_default();
                let (Some(name), Some(email), Some(message)) = (
                    name_ref.get_untracked(),
                    email_ref.get_untracked(),
                    message_ref.get_untracked(),
                ) else {
                    return;
                };
                let form = ContactForm::new(name.value(), email.value(), message.value());
                let res = form.submit();
                if res.is_ok() {
                    name.set_value("");
                    email.set_value("");
                    message.set_value("");
                }
                set_status.set(Some(res));
            }
        >
            <input
                node_ref=name_ref
                type="text"
                name="name"
                placeholder="Your Name"
                required
                class=FIELD_CLASS
            />
            <input
                node_ref=email_ref
                type="email"
                name="email"
                placeholder="Your Email"
                required
                class=FIELD_CLASS
            />
            <textarea
                node_ref=message_ref
                name="message"
                placeholder="Your Message"
                required
                rows="5"
                class=FIELD_CLASS
            ></textarea>
            <button
                type="submit"
                class="bg-orange-600 text-white py-3 rounded hover:bg-orange-700 transition"
            >
                "Send Message"
            </button>
            {move || {
                status
                    .get()
                    .map(|res| match res {
                        Ok(ack) => {
                            Either::Left(
                                view! {
                                    <p role="status" class="text-center text-green-600">
                                        {ack}
                                    </p>
                                },
                            )
                        }
                        Err(e) => {
                            Either::Right(
                                view! {
                                    <p role="alert" class="text-center text-red-600">
                                        {e.to_string()}
                                    </p>
                                },
                            )
                        }
                    })
            }}
        </form>
    }
}
