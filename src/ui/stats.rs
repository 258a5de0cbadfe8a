use leptos::prelude::*;

use crate::core::{STATS, Stat};

/// Hero statistics, each counting up from zero the first time it is seen
#[component]
pub fn HeroStats() -> impl IntoView {
    view! {
        <div class="hero-stats">
            {STATS.iter().map(|stat| view! { <StatCounter stat=*stat/> }).collect_view()}
        </div>
    }
}

#[component]
fn StatCounter(stat: Stat) -> impl IntoView {
    let shown = RwSignal::new(0u32);
    let number_ref = NodeRef::<leptos::html::Span>::new();

    #[cfg(not(feature = "ssr"))]
    {
        use crate::core::{CounterAnimation, RevealOptions, parse_target};
        use crate::ui::dom::use_reveal_once;

        let target = move || number_ref.get().map(web_sys::Element::from);
        use_reveal_once(target, RevealOptions::COUNTER, move |element| {
            let target = element
                .get_attribute("data-target")
                .map(|raw| parse_target(&raw))
                .unwrap_or(stat.target);
            animate(CounterAnimation::new(target), shown);
        });
    }

    view! {
        <div class="stat">
            <span class="stat-number" data-target=stat.target.to_string() node_ref=number_ref>
                {move || shown.get()}
            </span>
            <span class="stat-suffix">{stat.suffix}</span>
            <span class="stat-label">{stat.label}</span>
        </div>
    }
}

/// One frame per animation frame until the counter reaches its target
#[cfg(not(feature = "ssr"))]
fn animate(mut counter: crate::core::CounterAnimation, shown: RwSignal<u32>) {
    shown.set(counter.tick());
    if !counter.is_finished() {
        request_animation_frame(move || animate(counter, shown));
    }
}
