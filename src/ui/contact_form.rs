//! Contact form
//!
//! Field values, inline errors and the submit button all render from one
//! [`ContactFormState`]. Delivery is delegated to a [`ContactGateway`]; the
//! page uses a gateway that only simulates the round trip.

use leptos::prelude::*;

use crate::core::validation::ContactField;
use crate::core::{ContactFormState, ProductKind};
use crate::ui::common::{CheckboxField, FormField, SelectField, TextAreaField};
use crate::ui::notifications::use_notification_context;

#[cfg(not(feature = "ssr"))]
mod gateway {
    use std::pin::pin;

    use futures::future::{Either, select};
    use gloo_timers::future::TimeoutFuture;
    use leptos::logging::log;

    use crate::core::submission::{SIMULATED_SUBMIT_DELAY_MS, SUBMIT_TIMEOUT_MS};
    use crate::core::{ContactGateway, ContactRequest, SubmitError};

    /// Waits as long as a real request would take and reports success
    pub struct SimulatedGateway;

    impl ContactGateway for SimulatedGateway {
        async fn submit(&self, request: ContactRequest) -> Result<(), SubmitError> {
            match serde_json::to_string(&request) {
                Ok(body) => log!("contact request: {}", body),
                Err(err) => return Err(SubmitError::Transport(err.to_string())),
            }
            TimeoutFuture::new(SIMULATED_SUBMIT_DELAY_MS).await;
            Ok(())
        }
    }

    /// Deliver `request`, giving up after [`SUBMIT_TIMEOUT_MS`]
    pub async fn submit_with_timeout<G: ContactGateway>(
        gateway: &G,
        request: ContactRequest,
    ) -> Result<(), SubmitError> {
        let submit = pin!(gateway.submit(request));
        let timeout = pin!(TimeoutFuture::new(SUBMIT_TIMEOUT_MS));

        match select(submit, timeout).await {
            Either::Left((result, _)) => result,
            Either::Right(_) => Err(SubmitError::Timeout(SUBMIT_TIMEOUT_MS)),
        }
    }
}

/// The contact form with validation and simulated delivery
#[component]
pub fn ContactForm() -> impl IntoView {
    let notifications = use_notification_context();
    let state = RwSignal::new(ContactFormState::new());

    let error_for = move |field: ContactField| {
        Signal::derive(move || state.with(|s| s.errors.message(field)))
    };

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();

        let Some(request) = state.try_update(|s| s.begin_submit()).flatten() else {
            return;
        };

        #[cfg(not(feature = "ssr"))]
        {
            use leptos::logging::warn;

            wasm_bindgen_futures::spawn_local(async move {
                let result =
                    gateway::submit_with_timeout(&gateway::SimulatedGateway, request).await;
                if let Err(err) = &result {
                    warn!("contact submission failed: {}", err);
                }
                if let Some(outcome) = state.try_update(|s| s.finish_submit(result)) {
                    notifications.show(outcome.kind, outcome.message);
                }
            });
        }
        #[cfg(feature = "ssr")]
        {
            let _ = (request, notifications);
        }
    };

    let product_options = ProductKind::ALL
        .iter()
        .map(|kind| (kind.as_str(), kind.display_name()))
        .collect::<Vec<_>>();

    view! {
        <form id="contactForm" class="contact-form" novalidate=true on:submit=on_submit>
            <FormField
                id=ContactField::Name.input_id()
                label="Imię i nazwisko"
                required=true
                placeholder="Jan Kowalski"
                value=Signal::derive(move || state.with(|s| s.form.name.clone()))
                on_input=Callback::new(move |v| state.update(|s| s.set_name(v)))
                error=error_for(ContactField::Name)
            />
            <div class="form-row">
                <FormField
                    id=ContactField::Email.input_id()
                    label="Email"
                    required=true
                    input_type="email"
                    placeholder="jan@email.pl"
                    value=Signal::derive(move || state.with(|s| s.form.email.clone()))
                    on_input=Callback::new(move |v| state.update(|s| s.set_email(v)))
                    error=error_for(ContactField::Email)
                />
                <FormField
                    id=ContactField::Phone.input_id()
                    label="Telefon"
                    required=true
                    input_type="tel"
                    placeholder="+48 123 456 789"
                    value=Signal::derive(move || state.with(|s| s.form.phone.clone()))
                    on_input=Callback::new(move |v| state.update(|s| s.set_phone(v)))
                    error=error_for(ContactField::Phone)
                />
            </div>
            <SelectField
                id="product"
                label="Interesuje mnie"
                value=Signal::derive(move || state.with(|s| s.form.product.as_str().to_string()))
                on_change=Callback::new(move |v: String| {
                    state.update(|s| s.set_product(ProductKind::from_str(&v)))
                })
                options=product_options
            />
            <TextAreaField
                id="message"
                label="Wiadomość"
                placeholder="Opisz swoje potrzeby: wymiary, miejsce montażu, dodatkowe wyposażenie..."
                value=Signal::derive(move || state.with(|s| s.form.message.clone()))
                on_input=Callback::new(move |v| state.update(|s| s.set_message(v)))
            />
            <CheckboxField
                id=ContactField::Consent.input_id()
                label="Wyrażam zgodę na przetwarzanie moich danych osobowych w celu odpowiedzi na zapytanie."
                checked=Signal::derive(move || state.with(|s| s.form.consent))
                on_change=Callback::new(move |v| state.update(|s| s.set_consent(v)))
                error=error_for(ContactField::Consent)
            />
            <button
                type="submit"
                class="btn btn-primary btn-full"
                disabled=move || state.with(|s| s.phase.is_disabled())
            >
                {move || state.with(|s| s.phase.label())}
            </button>
        </form>
    }
}
