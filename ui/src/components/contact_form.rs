use dioxus::prelude::*;

use crate::core::contact::{self, ContactSubmission};
use crate::core::lang::Lang;
use crate::core::platform;
use crate::t;

#[derive(Clone, Copy, Debug, PartialEq)]
enum FormStatus {
    Idle,
    Sending,
    Sent,
    Failed,
}

/// Contact form posting a three-field JSON payload to the fixed endpoint.
///
/// While a submit is pending the button is disabled and further submits are
/// ignored; there is no timeout, so a hung request keeps the "sending"
/// status until the promise settles. Success clears the fields; any failure
/// (non-2xx or transport) keeps them and shows the same localized failure
/// message. Status text follows the active language at render time.
#[component]
pub fn ContactForm() -> Element {
    // Subscribe to the language signal so labels re-render on switch.
    let _lang = try_use_context::<Signal<Lang>>().map(|signal| signal());

    let mut name = use_signal(String::new);
    let mut email = use_signal(String::new);
    let mut message = use_signal(String::new);
    let status = use_signal(|| FormStatus::Idle);

    let on_submit = {
        let mut status_signal = status;
        let mut name_signal = name;
        let mut email_signal = email;
        let mut message_signal = message;
        move |evt: FormEvent| {
            evt.prevent_default();
            if status_signal() == FormStatus::Sending {
                return;
            }

            let submission = ContactSubmission::from_fields(
                &name_signal(),
                &email_signal(),
                &message_signal(),
            );
            status_signal.set(FormStatus::Sending);

            platform::spawn_future(async move {
                let client = reqwest::Client::new();
                match contact::submit(&client, contact::CONTACT_API_URL, &submission).await {
                    Ok(()) => {
                        name_signal.set(String::new());
                        email_signal.set(String::new());
                        message_signal.set(String::new());
                        status_signal.set(FormStatus::Sent);
                    }
                    // Both failure modes render the same message.
                    Err(_) => status_signal.set(FormStatus::Failed),
                }
            });
        }
    };

    let feedback = match status() {
        FormStatus::Idle => None,
        FormStatus::Sending => Some(("form-status sending", t!("contact-status-sending"))),
        FormStatus::Sent => Some(("form-status success", t!("contact-status-success"))),
        FormStatus::Failed => Some(("form-status error", t!("contact-status-error"))),
    };

    rsx! {
        form { id: "contact-form", class: "contact-form", onsubmit: on_submit,
            div { class: "contact-form__field",
                label { r#for: "contact-name", {t!("contact-name-label")} }
                input {
                    id: "contact-name",
                    name: "name",
                    r#type: "text",
                    required: true,
                    value: "{name}",
                    placeholder: t!("contact-name-placeholder"),
                    oninput: move |evt| name.set(evt.value()),
                }
            }
            div { class: "contact-form__field",
                label { r#for: "contact-email", {t!("contact-email-label")} }
                input {
                    id: "contact-email",
                    name: "email",
                    r#type: "email",
                    required: true,
                    value: "{email}",
                    placeholder: t!("contact-email-placeholder"),
                    oninput: move |evt| email.set(evt.value()),
                }
            }
            div { class: "contact-form__field",
                label { r#for: "contact-message", {t!("contact-message-label")} }
                textarea {
                    id: "contact-message",
                    name: "message",
                    rows: "6",
                    required: true,
                    value: "{message}",
                    placeholder: t!("contact-message-placeholder"),
                    oninput: move |evt| message.set(evt.value()),
                }
            }

            button {
                id: "contact-submit",
                class: "button button--primary",
                r#type: "submit",
                disabled: status() == FormStatus::Sending,
                {t!("contact-submit")}
            }

            if let Some((class, text)) = feedback {
                p { id: "form-status", class: "{class}", "{text}" }
            }
        }
    }
}
