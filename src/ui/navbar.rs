//! Fixed navigation bar
//!
//! Tracks the scroll offset to switch into its compact "scrolled" look and to
//! highlight the link of the section currently on screen. On narrow screens
//! the links collapse behind a toggle button.

use leptos::prelude::*;

use crate::core::{MenuState, NAV_LINKS, NavHighlight, NavLink, company};
use crate::ui::icon::{Icon, icons};

/// Navigation bar with scroll tracking and the collapsible menu
#[component]
pub fn Navbar() -> impl IntoView {
    let scrolled = RwSignal::new(false);
    let highlight = RwSignal::new(NavHighlight::new());
    let menu = RwSignal::new(MenuState::new());
    let nav_ref = NodeRef::<leptos::html::Nav>::new();

    #[cfg(not(feature = "ssr"))]
    {
        use leptos::ev::{click, scroll};
        use leptos::wasm_bindgen::JsCast;

        use crate::core::{is_scrolled, section_ids};
        use crate::ui::dom;

        let refresh = move || {
            let offset = dom::scroll_offset();
            let now_scrolled = is_scrolled(offset);
            if scrolled.get_untracked() != now_scrolled {
                scrolled.set(now_scrolled);
            }

            let sections = dom::measure_sections(section_ids());
            let mut next = highlight.get_untracked();
            if next.update(offset, &sections) {
                highlight.set(next);
            }
        };

        // Initial check once the sections are in the document
        Effect::new(move |_| refresh());

        let scroll_handle = window_event_listener(scroll, move |_| refresh());

        let click_handle = window_event_listener(click, move |ev| {
            if !menu.with_untracked(|m| m.is_open()) {
                return;
            }
            let inside_nav = match (ev.target(), nav_ref.get_untracked()) {
                (Some(target), Some(nav)) => target
                    .dyn_ref::<web_sys::Node>()
                    .is_some_and(|node| nav.contains(Some(node))),
                _ => false,
            };
            menu.update(|m| {
                m.handle_document_click(inside_nav);
            });
        });

        on_cleanup(move || {
            scroll_handle.remove();
            click_handle.remove();
        });
    }

    let links_len = NAV_LINKS.len();

    view! {
        <nav id="navbar" class="navbar" class:scrolled=move || scrolled.get() node_ref=nav_ref>
            <div class="container nav-container">
                <a href="#home" class="logo" on:click=move |ev| follow_link(ev, "home", menu)>
                    <span class="logo-mark">"P"</span>
                    <span class="logo-text">{company::NAME}</span>
                </a>

                <ul id="navMenu" class="nav-menu" class:active=move || menu.with(|m| m.is_open())>
                    {NAV_LINKS
                        .iter()
                        .enumerate()
                        .map(|(index, link)| {
                            let is_last = index + 1 == links_len;
                            view! {
                                <NavItem link=*link highlight=highlight menu=menu as_button=is_last/>
                            }
                        })
                        .collect_view()}
                </ul>

                <button
                    id="navToggle"
                    class="nav-toggle"
                    class:active=move || menu.with(|m| m.is_open())
                    aria-label="Przełącz menu"
                    aria-controls="navMenu"
                    aria-expanded=move || menu.with(|m| m.is_open()).to_string()
                    on:click=move |_| menu.update(|m| m.toggle())
                >
                    {move || {
                        if menu.with(|m| m.is_open()) {
                            view! { <Icon name=icons::X class="icon-lg"/> }.into_any()
                        } else {
                            view! { <Icon name=icons::MENU class="icon-lg"/> }.into_any()
                        }
                    }}
                </button>
            </div>
        </nav>
    }
}

#[component]
fn NavItem(
    link: NavLink,
    highlight: RwSignal<NavHighlight>,
    menu: RwSignal<MenuState>,
    /// Render as the call-to-action button at the end of the menu
    as_button: bool,
) -> impl IntoView {
    view! {
        <li>
            <a
                href=link.href()
                class="nav-link"
                class:nav-cta=as_button
                class:active=move || highlight.with(|h| h.is_active(link.section_id))
                on:click=move |ev| follow_link(ev, link.section_id, menu)
            >
                {link.label}
            </a>
        </li>
    }
}

/// In-page anchor clicked: close the menu and scroll smoothly to the section
fn follow_link(ev: leptos::ev::MouseEvent, section_id: &'static str, menu: RwSignal<MenuState>) {
    menu.update(|m| m.close());

    #[cfg(not(feature = "ssr"))]
    {
        ev.prevent_default();
        crate::ui::dom::scroll_to_section(section_id);
    }
    #[cfg(feature = "ssr")]
    {
        let _ = (ev, section_id);
    }
}
