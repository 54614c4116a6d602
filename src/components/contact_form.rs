//! Contact Form Component
//!
//! Validates on blur, re-validates while a field is invalid, drops honeypot
//! submissions silently and posts valid ones to the contact endpoint.

use leptos::prelude::*;
use leptos::task::spawn_local;
use storefront_core::contact::field_status;
use storefront_core::{ContactDraft, ContactField, FieldStatus, NotificationKind};

use crate::commands;
use crate::context::use_app_context;

const SUCCESS_MESSAGE: &str = "Message sent successfully! We will get back to you soon.";
const FAILURE_MESSAGE: &str = "Failed to send message. Please try again later.";
const INVALID_MESSAGE: &str = "Please fill in all required fields correctly";

type Statuses = [FieldStatus; ContactField::ALL.len()];

const PRISTINE: Statuses = [FieldStatus::Pristine; ContactField::ALL.len()];

/// One labelled input bound to the draft
#[component]
fn FormField(
    field: ContactField,
    #[prop(into)] label: String,
    #[prop(default = "text")] input_type: &'static str,
    #[prop(optional)] multiline: bool,
    draft: RwSignal<ContactDraft>,
    statuses: RwSignal<Statuses>,
) -> impl IntoView {
    let validate = move || {
        let status = draft.with_untracked(|d| field_status(field, d.value(field)));
        statuses.update(|s| s[field.index()] = status);
    };
    let on_input = move |value: String| {
        draft.update(|d| d.set(field, value));
        if statuses.with_untracked(|s| s[field.index()]) == FieldStatus::Invalid {
            validate();
        }
    };
    let class = move || statuses.with(|s| s[field.index()].css_class());
    let value = move || draft.with(|d| d.value(field).to_string());
    let label = if field.required() { format!("{} *", label) } else { label };

    view! {
        <label class="form-group">
            <span>{label}</span>
            {if multiline {
                view! {
                    <textarea
                        name=field.name()
                        rows="5"
                        required=field.required()
                        class=class
                        prop:value=value
                        on:input=move |ev| on_input(event_target_value(&ev))
                        on:blur=move |_| validate()
                    ></textarea>
                }.into_any()
            } else {
                view! {
                    <input
                        type=input_type
                        name=field.name()
                        required=field.required()
                        class=class
                        prop:value=value
                        on:input=move |ev| on_input(event_target_value(&ev))
                        on:blur=move |_| validate()
                    />
                }.into_any()
            }}
        </label>
    }
}

#[component]
pub fn ContactForm() -> impl IntoView {
    let ctx = use_app_context();
    let draft = RwSignal::new(ContactDraft::default());
    let statuses = RwSignal::new(PRISTINE);
    let (submitting, set_submitting) = signal(false);

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        if submitting.get_untracked() {
            return;
        }
        let current = draft.get_untracked();

        if current.is_spam() {
            tracing::warn!("spam detected, submission dropped");
            return;
        }

        statuses.set(current.statuses());
        if current.validate().is_err() {
            ctx.notify(INVALID_MESSAGE, NotificationKind::Error);
            return;
        }

        let submission = current.to_submission();
        let config = ctx.config();
        set_submitting.set(true);
        spawn_local(async move {
            match commands::submit_contact_form(&config, &submission).await {
                Ok(_) => {
                    tracing::info!("contact form submitted");
                    ctx.notify(SUCCESS_MESSAGE, NotificationKind::Success);
                    draft.set(ContactDraft::default());
                    statuses.set(PRISTINE);
                }
                Err(e) => {
                    tracing::error!(error = %e, "form submission error");
                    ctx.notify(FAILURE_MESSAGE, NotificationKind::Error);
                }
            }
            set_submitting.set(false);
        });
    };

    view! {
        <form id="contactForm" class="contact-form" novalidate=true on:submit=on_submit>
            <FormField field=ContactField::Name label="Name" draft=draft statuses=statuses />
            <FormField field=ContactField::Company label="Company" draft=draft statuses=statuses />
            <FormField field=ContactField::Email label="Email" input_type="email" draft=draft statuses=statuses />
            <FormField field=ContactField::Phone label="Phone" input_type="tel" draft=draft statuses=statuses />
            <FormField field=ContactField::Message label="Message" multiline=true draft=draft statuses=statuses />

            // Honeypot: hidden from people, filled by bots
            <input
                type="text"
                name="website"
                class="honeypot"
                tabindex="-1"
                autocomplete="off"
                aria-hidden="true"
                style="position: absolute; left: -9999px;"
                prop:value=move || draft.with(|d| d.website.clone())
                on:input=move |ev| draft.update(|d| d.website = event_target_value(&ev))
            />

            <button type="submit" class="btn btn-primary" disabled=move || submitting.get()>
                {move || if submitting.get() { "Sending..." } else { "Send Message" }}
            </button>
        </form>
    }
}
