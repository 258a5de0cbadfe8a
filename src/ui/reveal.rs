use leptos::prelude::*;

/// Block that fades in the first time a tenth of it scrolls into view
#[component]
pub fn FadeIn(
    /// Extra classes of the wrapping element
    #[prop(default = "")]
    class: &'static str,
    children: Children,
) -> impl IntoView {
    let visible = RwSignal::new(false);
    let block_ref = NodeRef::<leptos::html::Div>::new();

    #[cfg(not(feature = "ssr"))]
    {
        use crate::core::RevealOptions;
        use crate::ui::dom::use_reveal_once;

        let target = move || block_ref.get().map(web_sys::Element::from);
        use_reveal_once(target, RevealOptions::FADE, move |_| visible.set(true));
    }

    view! {
        <div
            class=format!("fade-in {}", class)
            class:visible=move || visible.get()
            node_ref=block_ref
        >
            {children()}
        </div>
    }
}
