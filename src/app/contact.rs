use leptos::{ev::SubmitEvent, html, prelude::*};

use crate::contact::{ContactError, ContactForm, ContactMessage};

const INPUT_CLASS: &str = "w-full px-3 py-2 rounded-md border border-muted bg-background focus:outline-none focus:ring-2 focus:ring-primary";

#[component]
pub fn ContactSection() -> impl IntoView {
    let name_ref = NodeRef::<html::Input>::new();
    let email_ref = NodeRef::<html::Input>::new();
    let message_ref = NodeRef::<html::Textarea>::new();
    let (errors, set_errors) = signal(Vec::<ContactError>::new());
    let (accepted, set_accepted) = signal(false);

    let field_error = move |field: &'static str| {
        errors.with(|errs| {
            errs.iter()
                .find(|e| e.field() == field)
                .map(|e| view! { <p class="text-sm text-red-500">{e.to_string()}</p> })
        })
    };

    // no delivery backend is wired up: a valid message is logged and the form is reset
    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        let (Some(name), Some(email), Some(message)) = (
            name_ref.get_untracked(),
            email_ref.get_untracked(),
            message_ref.get_untracked(),
        ) else {
            return;
        };
        let form = ContactForm {
            name: name.value(),
            email: email.value(),
            message: message.value(),
        };
        match ContactMessage::try_from(form) {
            Ok(msg) => {
                match msg.to_json() {
                    Ok(payload) => log::debug!("contact message ready for handoff: {payload}"),
                    Err(e) => log::error!("couldn't serialize contact message: {e}"),
                }
                set_errors.set(Vec::new());
                set_accepted.set(true);
                name.set_value("");
                email.set_value("");
                message.set_value("");
            }
            Err(errs) => {
                set_accepted.set(false);
                set_errors.set(errs);
            }
        }
    };

    view! {
        <section class="mt-12">
            <h2 class="text-2xl font-semibold mb-4">"Get in Touch"</h2>
            <div class="rounded-lg border border-muted p-6">
                <form class="space-y-4" novalidate=true on:submit=on_submit>
                    <div class="grid grid-cols-2 gap-4">
                        <div class="space-y-2">
                            <label for="name" class="text-sm font-medium">
                                "Name"
                            </label>
                            <input
                                id="name"
                                node_ref=name_ref
                                placeholder="Your name"
                                class=INPUT_CLASS
                            />
                            {move || field_error("name")}
                        </div>
                        <div class="space-y-2">
                            <label for="email" class="text-sm font-medium">
                                "Email"
                            </label>
                            <input
                                id="email"
                                type="email"
                                node_ref=email_ref
                                placeholder="Your email"
                                class=INPUT_CLASS
                            />
                            {move || field_error("email")}
                        </div>
                    </div>
                    <div class="space-y-2">
                        <label for="message" class="text-sm font-medium">
                            "Message"
                        </label>
                        <textarea
                            id="message"
                            node_ref=message_ref
                            placeholder="Your message"
                            rows=4
                            class=INPUT_CLASS
                        ></textarea>
                        {move || field_error("message")}
                    </div>
                    <button
                        type="submit"
                        class="w-full inline-flex items-center justify-center rounded-md bg-primary px-4 py-2 text-primary-foreground hover:bg-primary/90"
                    >
                        "Send Message"
                        <span class="ml-2" aria-hidden="true">"➤"</span>
                    </button>
                    <Show when=move || accepted.get()>
                        <p class="text-sm text-green-500">"Thanks! Your message is ready to go."</p>
                    </Show>
                </form>
            </div>
        </section>
    }
}
