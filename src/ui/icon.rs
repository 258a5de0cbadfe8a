use leptos::prelude::*;

/// Icon served from `public/icons`
#[component]
pub fn Icon(
    /// Icon file name without the `.svg` extension
    name: &'static str,
    /// CSS classes for sizing and placement
    #[prop(default = "icon")]
    class: &'static str,
) -> impl IntoView {
    let icon_path = format!("/icons/{}.svg", name);

    view! {
        <img
            src=icon_path
            class=class
            alt=""
            aria-hidden="true"
            draggable="false"
        />
    }
}

/// Icons shipped in `public/icons`
pub mod icons {
    use crate::core::AboutIcon;

    pub const MENU: &str = "menu";
    pub const X: &str = "x";
    pub const CHEVRON_DOWN: &str = "chevron-down";
    pub const ALERT_CIRCLE: &str = "alert-circle";
    pub const CHECK: &str = "check";
    pub const STAR: &str = "star";
    pub const PHONE: &str = "phone";
    pub const MAIL: &str = "mail";
    pub const MAP_PIN: &str = "map-pin";
    pub const CLOCK: &str = "clock";
    pub const LAYERS: &str = "layers";
    pub const DOCUMENT: &str = "document";
    pub const SHIELD: &str = "shield";

    /// Icon drawn on an "about" card
    pub fn about(icon: AboutIcon) -> &'static str {
        match icon {
            AboutIcon::Layers => LAYERS,
            AboutIcon::Document => DOCUMENT,
            AboutIcon::Clock => CLOCK,
            AboutIcon::Shield => SHIELD,
        }
    }
}
