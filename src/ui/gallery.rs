//! Gallery grid and its lightbox
//!
//! Clicking an entry shows it enlarged in a full-screen overlay. The overlay
//! closes on its close button, on a click outside the content, or on Escape.
//! Page scrolling is locked while it is open.

use leptos::prelude::*;

#[cfg(not(feature = "ssr"))]
use leptos::wasm_bindgen::JsCast;

use crate::core::{GALLERY, GalleryArt, GalleryEntry, Lightbox};
use crate::ui::reveal::FadeIn;

/// Backdrop class; clicks landing on it close the lightbox
const BACKDROP_CLASS: &str = "lightbox";

/// Gallery section component
#[component]
pub fn GallerySection() -> impl IntoView {
    let lightbox = RwSignal::new(Lightbox::new());

    #[cfg(not(feature = "ssr"))]
    {
        use leptos::ev::keydown;

        use crate::core::lightbox::SCROLL_RESTORED;
        use crate::ui::dom::set_body_overflow;

        Effect::new(move |_| set_body_overflow(lightbox.with(|l| l.body_overflow())));

        let handle_keydown = window_event_listener(keydown, move |ev| {
            let mut next = lightbox.get_untracked();
            if next.handle_key(&ev.key()) {
                lightbox.set(next);
            }
        });

        on_cleanup(move || {
            handle_keydown.remove();
            set_body_overflow(SCROLL_RESTORED);
        });
    }

    view! {
        <section id="gallery" class="section gallery">
            <div class="container">
                <div class="section-header">
                    <span class="section-tag">"Realizacje"</span>
                    <h2 class="section-title">"Nasze projekty"</h2>
                    <p class="section-subtitle">
                        "Zobacz, jak nasze pergole zmieniają przestrzenie naszych klientów"
                    </p>
                </div>

                <div class="gallery-grid">
                    {GALLERY
                        .iter()
                        .enumerate()
                        .map(|(index, entry)| {
                            view! { <GalleryItem entry=*entry on_open=Callback::new(move |_| lightbox.update(|l| l.open(index)))/> }
                        })
                        .collect_view()}
                </div>
            </div>

            <LightboxOverlay lightbox=lightbox/>
        </section>
    }
}

#[component]
fn GalleryItem(entry: GalleryEntry, on_open: Callback<()>) -> impl IntoView {
    let cell_class = if entry.large {
        "gallery-cell gallery-cell-large"
    } else {
        "gallery-cell"
    };

    view! {
        <FadeIn class=cell_class>
            <div
                class="gallery-item"
                class:large=entry.large
                role="button"
                tabindex="0"
                aria-label=format!("Powiększ: {}", entry.title)
                on:click=move |_| on_open.run(())
            >
                <GalleryArtwork art=entry.art/>
                <div class="gallery-overlay">
                    <h4>{entry.title}</h4>
                    <p>{entry.description}</p>
                </div>
            </div>
        </FadeIn>
    }
}

/// Full-screen view of the open entry
#[component]
fn LightboxOverlay(lightbox: RwSignal<Lightbox>) -> impl IntoView {
    let close = move || lightbox.update(|l| l.close());
    let current = move || lightbox.with(|l| l.current()).and_then(|index| GALLERY.get(index));

    view! {
        {move || {
            current().map(|entry| {
                view! {
                    <div
                        class=BACKDROP_CLASS
                        role="dialog"
                        aria-modal="true"
                        aria-label=entry.title
                        on:click=move |e| {
                            #[cfg(not(feature = "ssr"))]
                            {
                                if let Some(target) = e.target() {
                                    if let Some(element) = target.dyn_ref::<web_sys::Element>() {
                                        if element.class_list().contains(BACKDROP_CLASS) {
                                            close();
                                        }
                                    }
                                }
                            }
                            #[cfg(feature = "ssr")]
                            {
                                let _ = e;
                            }
                        }
                    >
                        <div class="lightbox-content">
                            <button
                                class="lightbox-close"
                                aria-label="Zamknij"
                                on:click=move |_| close()
                            >
                                "×"
                            </button>
                            <GalleryArtwork art=entry.art enlarged=true/>
                            <h3>{entry.title}</h3>
                            <p>{entry.description}</p>
                        </div>
                    </div>
                }
            })
        }}
    }
}

/// Pergola illustration drawn for a gallery entry
#[component]
fn GalleryArtwork(
    art: GalleryArt,
    #[prop(default = false)]
    enlarged: bool,
) -> impl IntoView {
    let (width, height) = (f64::from(art.width), f64::from(art.height));
    let scale = if enlarged { 2.0 } else { 1.0 };
    let post_height = height * 0.55;
    let roof_y = height * 0.25;
    let slats = (1..8)
        .map(|i| width * 0.1 + f64::from(i) * width * 0.1)
        .collect::<Vec<_>>();

    view! {
        <svg
            class="gallery-art"
            viewBox=format!("0 0 {} {}", width, height)
            width=(width * scale).to_string()
            height=(height * scale).to_string()
            role="img"
            aria-label=art.caption
        >
            <rect width=width.to_string() height=height.to_string() fill=art.background/>
            <rect
                x=(width * 0.1).to_string()
                y=roof_y.to_string()
                width=(width * 0.8).to_string()
                height=(height * 0.04).to_string()
                fill=art.frame
            />
            {slats
                .into_iter()
                .map(|x| view! {
                    <rect
                        x=x.to_string()
                        y=roof_y.to_string()
                        width=(width * 0.02).to_string()
                        height=(height * 0.06).to_string()
                        fill=art.frame
                        opacity="0.6"
                    />
                })
                .collect_view()}
            <rect x=(width * 0.12).to_string() y=roof_y.to_string() width=(width * 0.03).to_string() height=post_height.to_string() fill=art.frame/>
            <rect x=(width * 0.85).to_string() y=roof_y.to_string() width=(width * 0.03).to_string() height=post_height.to_string() fill=art.frame/>
            <text
                x=(width / 2.0).to_string()
                y=(height * 0.92).to_string()
                text-anchor="middle"
                font-family="Montserrat, sans-serif"
                font-size=(height * 0.05).to_string()
                fill=art.frame
            >
                {art.caption}
            </text>
        </svg>
    }
}
