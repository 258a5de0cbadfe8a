//! FAQ accordion: at most one answer expanded

use leptos::prelude::*;

use crate::core::{Accordion, FAQS, Faq};
use crate::ui::icon::{Icon, icons};
use crate::ui::reveal::FadeIn;

/// FAQ section component
#[component]
pub fn FaqSection() -> impl IntoView {
    let accordion = RwSignal::new(Accordion::new());

    view! {
        <section id="faq" class="section faq">
            <div class="container">
                <div class="section-header">
                    <span class="section-tag">"FAQ"</span>
                    <h2 class="section-title">"Najczęściej zadawane pytania"</h2>
                    <p class="section-subtitle">
                        "Odpowiedzi na pytania, które słyszymy najczęściej"
                    </p>
                </div>

                <div class="faq-list">
                    {FAQS
                        .iter()
                        .enumerate()
                        .map(|(index, faq)| view! { <FaqItem index=index faq=*faq accordion=accordion/> })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}

/// FAQ accordion item component
#[component]
fn FaqItem(index: usize, faq: Faq, accordion: RwSignal<Accordion>) -> impl IntoView {
    let is_open = move || accordion.with(|a| a.is_open(index));

    view! {
        <FadeIn>
            <div class="faq-item" class:active=is_open>
                <button
                    class="faq-question"
                    on:click=move |_| accordion.update(|a| a.toggle(index))
                    aria-expanded=move || is_open().to_string()
                >
                    <span>{faq.question}</span>
                    <Icon name=icons::CHEVRON_DOWN class="faq-icon"/>
                </button>
                <div class="faq-answer">
                    <p>{faq.answer}</p>
                </div>
            </div>
        </FadeIn>
    }
}
