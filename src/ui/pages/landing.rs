//! Landing page component
//!
//! The one-page PergoMet site:
//! - SEO meta tags and LocalBusiness structured data
//! - Hero with parallax background and animated statistics
//! - About, products, gallery, benefits and testimonials
//! - FAQ accordion
//! - Call-to-action, contact details with the inquiry form, and footer

use leptos::prelude::*;
use leptos_meta::{Link, Meta, Title};

use crate::core::{
    ABOUT_CARDS, AboutCard, BENEFITS, Benefit, HoverFocus, NAV_LINKS, PRODUCTS, Product,
    TESTIMONIALS, Testimonial, company,
};
use crate::ui::contact_form::ContactForm;
use crate::ui::faq::FaqSection;
use crate::ui::gallery::GallerySection;
use crate::ui::icon::{Icon, icons};
use crate::ui::navbar::Navbar;
use crate::ui::notifications::NotificationBanner;
use crate::ui::reveal::FadeIn;
use crate::ui::stats::HeroStats;

/// Canonical address of the site, provided by the server
#[derive(Clone, Debug)]
pub struct SiteUrl(pub String);

/// Landing page component
#[component]
pub fn LandingPage() -> impl IntoView {
    view! {
        <SeoMeta />

        <Navbar />
        <main>
            <HeroSection />
            <AboutSection />
            <ProductsSection />
            <GallerySection />
            <BenefitsSection />
            <TestimonialsSection />
            <FaqSection />
            <CtaSection />
            <ContactSection />
        </main>
        <Footer />

        <NotificationBanner />
    }
}

/// Hero with a background that scrolls slower than the page
#[component]
fn HeroSection() -> impl IntoView {
    let parallax = RwSignal::new(0.0_f64);

    #[cfg(not(feature = "ssr"))]
    {
        use leptos::ev::scroll;

        use crate::core::hero_parallax;
        use crate::ui::dom;

        let handle = window_event_listener(scroll, move |_| {
            if let Some(offset) = hero_parallax(dom::scroll_offset(), dom::viewport_height()) {
                parallax.set(offset);
            }
        });
        on_cleanup(move || handle.remove());
    }

    view! {
        <section id="home" class="hero">
            <div
                class="hero-bg"
                aria-hidden="true"
                style:transform=move || format!("translateY({}px)", parallax.get())
            ></div>
            <div class="container hero-content">
                <span class="hero-tag">{company::TAGLINE}</span>
                <h1 class="hero-title">
                    "Pergole, które zmieniają "
                    <span class="text-accent">"Twoją przestrzeń"</span>
                </h1>
                <p class="hero-subtitle">
                    "Projektujemy i montujemy aluminiowe pergole na wymiar. Ochrona przed słońcem i deszczem, elegancki design i 10 lat gwarancji."
                </p>
                <div class="hero-buttons">
                    <a href="#contact" class="btn btn-primary">"Bezpłatna wycena"</a>
                    <a href="#products" class="btn btn-outline">"Zobacz ofertę"</a>
                </div>
                <HeroStats />
            </div>
            <a href="#about" class="scroll-indicator" aria-label="Przewiń w dół">
                <Icon name=icons::CHEVRON_DOWN class="icon-lg"/>
            </a>
        </section>
    }
}

/// About section component
#[component]
fn AboutSection() -> impl IntoView {
    view! {
        <section id="about" class="section about">
            <div class="container">
                <div class="section-header">
                    <span class="section-tag">"O nas"</span>
                    <h2 class="section-title">"Dlaczego PergoMet?"</h2>
                    <p class="section-subtitle">
                        {format!(
                            "Od {} roku tworzymy pergole, które łączą funkcjonalność z nowoczesnym designem",
                            company::FOUNDED
                        )}
                    </p>
                </div>
                <div class="about-grid">
                    {ABOUT_CARDS.iter().map(|card| view! { <AboutCardView card=*card/> }).collect_view()}
                </div>
            </div>
        </section>
    }
}

#[component]
fn AboutCardView(card: AboutCard) -> impl IntoView {
    view! {
        <FadeIn class="about-card">
            <div class="about-icon">
                <Icon name=icons::about(card.icon) class="icon-xl"/>
            </div>
            <h3>{card.title}</h3>
            <p>{card.text}</p>
        </FadeIn>
    }
}

/// Products section; hovering a card dims the others
#[component]
fn ProductsSection() -> impl IntoView {
    let focus = RwSignal::new(HoverFocus::new());

    view! {
        <section id="products" class="section products">
            <div class="container">
                <div class="section-header">
                    <span class="section-tag">"Oferta"</span>
                    <h2 class="section-title">"Nasze pergole"</h2>
                    <p class="section-subtitle">
                        "Wybierz model dopasowany do Twojego tarasu i stylu życia"
                    </p>
                </div>
                <div class="products-grid">
                    {PRODUCTS
                        .iter()
                        .enumerate()
                        .map(|(index, product)| {
                            view! { <ProductCard index=index product=*product focus=focus/> }
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}

#[component]
fn ProductCard(index: usize, product: Product, focus: RwSignal<HoverFocus>) -> impl IntoView {
    view! {
        <FadeIn class="product-cell">
            <div
                class="product-card"
                class:featured=product.featured
                style:opacity=move || focus.with(|f| f.opacity(index)).to_string()
                on:mouseenter=move |_| focus.update(|f| f.enter(index))
                on:mouseleave=move |_| focus.update(|f| f.leave())
            >
                {product.badge.map(|badge| view! { <span class="product-badge">{badge.label()}</span> })}
                <div class="product-content">
                    <h3>{product.name}</h3>
                    <p>{product.description}</p>
                    <ul class="product-features">
                        {product
                            .features
                            .iter()
                            .map(|feature| view! {
                                <li>
                                    <Icon name=icons::CHECK class="icon-text"/>
                                    {*feature}
                                </li>
                            })
                            .collect_view()}
                    </ul>
                    <div class="product-price">
                        <span class="price-label">"od"</span>
                        <span class="price-value">{product.price}</span>
                    </div>
                    <a href="#contact" class="btn btn-primary btn-full">"Zapytaj o wycenę"</a>
                </div>
            </div>
        </FadeIn>
    }
}

/// Benefits section component
#[component]
fn BenefitsSection() -> impl IntoView {
    view! {
        <section id="benefits" class="section benefits">
            <div class="container">
                <div class="section-header">
                    <span class="section-tag">"Korzyści"</span>
                    <h2 class="section-title">"Co zyskujesz z pergolą?"</h2>
                </div>
                <div class="benefits-grid">
                    {BENEFITS.iter().map(|benefit| view! { <BenefitItem benefit=*benefit/> }).collect_view()}
                </div>
            </div>
        </section>
    }
}

#[component]
fn BenefitItem(benefit: Benefit) -> impl IntoView {
    view! {
        <FadeIn class="benefit-item">
            <span class="benefit-number">{benefit.number}</span>
            <h3>{benefit.title}</h3>
            <p>{benefit.text}</p>
        </FadeIn>
    }
}

/// Testimonials section component
#[component]
fn TestimonialsSection() -> impl IntoView {
    view! {
        <section id="testimonials" class="section testimonials">
            <div class="container">
                <div class="section-header">
                    <span class="section-tag">"Opinie"</span>
                    <h2 class="section-title">"Co mówią nasi klienci"</h2>
                </div>
                <div class="testimonials-grid">
                    {TESTIMONIALS
                        .iter()
                        .map(|testimonial| view! { <TestimonialCard testimonial=*testimonial/> })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}

#[component]
fn TestimonialCard(testimonial: Testimonial) -> impl IntoView {
    view! {
        <FadeIn class="testimonial-card">
            <div class="testimonial-stars" aria-label="5 na 5 gwiazdek">
                {(0..5).map(|_| view! { <Icon name=icons::STAR class="icon-text"/> }).collect_view()}
            </div>
            <p class="testimonial-text">{format!("\u{201e}{}\u{201d}", testimonial.text)}</p>
            <div class="testimonial-author">
                <span class="author-avatar">{testimonial.initials()}</span>
                <div>
                    <strong>{testimonial.name}</strong>
                    <span>{testimonial.location}</span>
                </div>
            </div>
        </FadeIn>
    }
}

#[component]
fn CtaSection() -> impl IntoView {
    view! {
        <section class="cta">
            <div class="container cta-content">
                <h2>"Gotowy na nową przestrzeń?"</h2>
                <p>"Umów się na bezpłatny pomiar i wycenę. Doradzimy najlepsze rozwiązanie dla Twojego domu."</p>
                <div class="cta-buttons">
                    <a href="#contact" class="btn btn-white">"Umów pomiar"</a>
                    <a href=company::PHONE_HREF class="btn btn-outline-white">{company::PHONE}</a>
                </div>
            </div>
        </section>
    }
}

/// Contact details next to the inquiry form
#[component]
fn ContactSection() -> impl IntoView {
    view! {
        <section id="contact" class="section contact">
            <div class="container contact-wrapper">
                <div class="contact-info">
                    <span class="section-tag">"Kontakt"</span>
                    <h2 class="section-title">"Porozmawiajmy o Twojej pergoli"</h2>
                    <p>"Wypełnij formularz, a nasz doradca skontaktuje się z Tobą w ciągu 24 godzin."</p>

                    <ul class="contact-details">
                        <li>
                            <Icon name=icons::PHONE class="icon-lg"/>
                            <div>
                                <strong>"Telefon"</strong>
                                <a href=company::PHONE_HREF>{company::PHONE}</a>
                            </div>
                        </li>
                        <li>
                            <Icon name=icons::MAIL class="icon-lg"/>
                            <div>
                                <strong>"Email"</strong>
                                <a href=format!("mailto:{}", company::EMAIL)>{company::EMAIL}</a>
                            </div>
                        </li>
                        <li>
                            <Icon name=icons::MAP_PIN class="icon-lg"/>
                            <div>
                                <strong>"Adres"</strong>
                                <span>{company::STREET}</span>
                                <span>{company::CITY}</span>
                            </div>
                        </li>
                        <li>
                            <Icon name=icons::CLOCK class="icon-lg"/>
                            <div>
                                <strong>"Godziny otwarcia"</strong>
                                <span>{company::HOURS_WEEKDAYS}</span>
                                <span>{company::HOURS_SATURDAY}</span>
                            </div>
                        </li>
                    </ul>
                </div>

                <div class="contact-form-wrapper">
                    <ContactForm />
                </div>
            </div>
        </section>
    }
}

/// Footer component
#[component]
fn Footer() -> impl IntoView {
    view! {
        <footer class="footer">
            <div class="container">
                <div class="footer-grid">
                    <div class="footer-brand">
                        <span class="logo-text">{company::NAME}</span>
                        <p>{company::TAGLINE}</p>
                    </div>
                    <div>
                        <h4>"Nawigacja"</h4>
                        <ul>
                            {NAV_LINKS
                                .iter()
                                .map(|link| view! { <li><a href=link.href()>{link.label}</a></li> })
                                .collect_view()}
                        </ul>
                    </div>
                    <div>
                        <h4>"Kontakt"</h4>
                        <ul>
                            <li><a href=company::PHONE_HREF>{company::PHONE}</a></li>
                            <li><a href=format!("mailto:{}", company::EMAIL)>{company::EMAIL}</a></li>
                            <li>{company::CITY}</li>
                        </ul>
                    </div>
                </div>
                <div class="footer-bottom">
                    <span>{format!("© 2025 {}. Wszelkie prawa zastrzeżone.", company::NAME)}</span>
                </div>
            </div>
        </footer>
    }
}

/// SEO Meta tags component using leptos_meta
#[component]
fn SeoMeta() -> impl IntoView {
    let site_url = use_context::<SiteUrl>()
        .map(|url| url.0)
        .unwrap_or_else(|| company::SITE_URL.to_string());
    let title = format!("{} - {}", company::NAME, company::TAGLINE);
    let description = "Pergole aluminiowe na wymiar: klasyczne, bioklimatyczne i wolnostojące. Projekt, montaż i 10 lat gwarancji. Bezpłatna wycena.";

    view! {
        <Title text=title.clone() />

        <Meta name="description" content=description />
        <Meta name="keywords" content="pergola, pergola aluminiowa, pergola bioklimatyczna, zadaszenie tarasu, pergola Warszawa" />

        // Open Graph
        <Meta property="og:type" content="website" />
        <Meta property="og:url" content=site_url.clone() />
        <Meta property="og:title" content=title />
        <Meta property="og:description" content=description />
        <Meta property="og:locale" content="pl_PL" />

        <Link rel="canonical" href=site_url.clone() />

        <script type="application/ld+json" inner_html=local_business_json(&site_url)></script>
    }
}

/// schema.org LocalBusiness record for search engines
fn local_business_json(site_url: &str) -> String {
    serde_json::json!({
        "@context": "https://schema.org",
        "@type": "LocalBusiness",
        "name": company::NAME,
        "description": company::TAGLINE,
        "url": site_url,
        "telephone": company::PHONE,
        "email": company::EMAIL,
        "foundingDate": company::FOUNDED.to_string(),
        "address": {
            "@type": "PostalAddress",
            "streetAddress": company::STREET,
            "addressLocality": company::CITY,
            "addressCountry": "PL"
        },
        "makesOffer": PRODUCTS
            .iter()
            .map(|product| serde_json::json!({
                "@type": "Offer",
                "name": product.name,
                "description": product.description
            }))
            .collect::<Vec<_>>()
    })
    .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_structured_data_is_valid_json() {
        let json = local_business_json("https://pergomet.pl/");
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value["@type"], "LocalBusiness");
        assert_eq!(value["url"], "https://pergomet.pl/");
        assert_eq!(value["makesOffer"].as_array().map(Vec::len), Some(PRODUCTS.len()));
    }
}
