//! Not found page component
//!
//! Shown for every path other than `/`.

use leptos::prelude::*;
use leptos_meta::Title;
use leptos_router::components::A;

use crate::core::company;
use crate::ui::icon::{Icon, icons};

/// Not found (404) page component
#[component]
pub fn NotFoundPage() -> impl IntoView {
    // Tell the server to answer with 404 instead of 200
    #[cfg(feature = "ssr")]
    {
        if let Some(response) = use_context::<leptos_axum::ResponseOptions>() {
            response.set_status(axum::http::StatusCode::NOT_FOUND);
        }
    }

    view! {
        <Title text=format!("Nie znaleziono strony - {}", company::NAME) />

        <div class="not-found">
            <div class="not-found-content">
                <Icon name=icons::ALERT_CIRCLE class="icon-xl"/>

                <h1>"404"</h1>
                <h2>"Nie znaleziono strony"</h2>
                <p>"Strona, której szukasz, nie istnieje lub została przeniesiona."</p>

                <A href="/" attr:class="btn btn-primary">
                    "Wróć na stronę główną"
                </A>
            </div>

            <p class="not-found-footer">{format!("© 2025 {}", company::NAME)}</p>
        </div>
    }
}
