//! Static page copy
//!
//! Everything the landing page says lives here as plain data so the sections
//! only decide how it looks. The text is Polish and hard-coded.

use serde::{Deserialize, Serialize};

/// Anchor in the navigation menu and the `id` of the section it points to
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavLink {
    pub section_id: &'static str,
    pub label: &'static str,
}

impl NavLink {
    pub fn href(&self) -> String {
        format!("#{}", self.section_id)
    }
}

/// Navigation entries in document order. The last one is rendered as a button.
pub const NAV_LINKS: &[NavLink] = &[
    NavLink { section_id: "home", label: "Start" },
    NavLink { section_id: "about", label: "O nas" },
    NavLink { section_id: "products", label: "Oferta" },
    NavLink { section_id: "gallery", label: "Realizacje" },
    NavLink { section_id: "benefits", label: "Korzyści" },
    NavLink { section_id: "testimonials", label: "Opinie" },
    NavLink { section_id: "faq", label: "FAQ" },
    NavLink { section_id: "contact", label: "Kontakt" },
];

/// Section ids tracked by the active-link highlighter, in document order
pub fn section_ids() -> impl Iterator<Item = &'static str> {
    NAV_LINKS.iter().map(|link| link.section_id)
}

/// Hero statistic animated from zero when it scrolls into view
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Stat {
    pub target: u32,
    pub suffix: &'static str,
    pub label: &'static str,
}

pub const STATS: &[Stat] = &[
    Stat { target: 500, suffix: "+", label: "Realizacji" },
    Stat { target: 12, suffix: "", label: "Lat doświadczenia" },
    Stat { target: 98, suffix: "%", label: "Zadowolonych klientów" },
];

/// Icon shown on an "about" card
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AboutIcon {
    Layers,
    Document,
    Clock,
    Shield,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AboutCard {
    pub icon: AboutIcon,
    pub title: &'static str,
    pub text: &'static str,
}

pub const ABOUT_CARDS: &[AboutCard] = &[
    AboutCard {
        icon: AboutIcon::Layers,
        title: "Premium Materiały",
        text: "Używamy wyłącznie najwyższej jakości aluminium i stali nierdzewnej z certyfikatami jakości.",
    },
    AboutCard {
        icon: AboutIcon::Document,
        title: "Indywidualny Projekt",
        text: "Każda pergola jest projektowana indywidualnie, dostosowana do architektury Twojego domu.",
    },
    AboutCard {
        icon: AboutIcon::Clock,
        title: "Szybka Realizacja",
        text: "Od projektu do montażu w zaledwie 2-3 tygodnie. Terminowość to nasz priorytet.",
    },
    AboutCard {
        icon: AboutIcon::Shield,
        title: "10 Lat Gwarancji",
        text: "Dajemy 10-letnią gwarancję na konstrukcję i 5-letnią na powłokę lakierniczą.",
    },
];

/// Product categories a visitor can ask about in the contact form
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProductKind {
    #[default]
    Unspecified,
    Klasyczna,
    Bioklimatyczna,
    Wolnostojaca,
    Inne,
}

impl ProductKind {
    pub const ALL: [ProductKind; 5] = [
        ProductKind::Unspecified,
        ProductKind::Klasyczna,
        ProductKind::Bioklimatyczna,
        ProductKind::Wolnostojaca,
        ProductKind::Inne,
    ];

    /// Value of the `<option>` element
    pub fn as_str(&self) -> &'static str {
        match self {
            ProductKind::Unspecified => "",
            ProductKind::Klasyczna => "klasyczna",
            ProductKind::Bioklimatyczna => "bioklimatyczna",
            ProductKind::Wolnostojaca => "wolnostojaca",
            ProductKind::Inne => "inne",
        }
    }

    pub fn from_str(s: &str) -> Self {
        match s {
            "klasyczna" => ProductKind::Klasyczna,
            "bioklimatyczna" => ProductKind::Bioklimatyczna,
            "wolnostojaca" => ProductKind::Wolnostojaca,
            "inne" => ProductKind::Inne,
            _ => ProductKind::Unspecified,
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            ProductKind::Unspecified => "Wybierz produkt...",
            ProductKind::Klasyczna => "Pergola Klasyczna",
            ProductKind::Bioklimatyczna => "Pergola Bioklimatyczna",
            ProductKind::Wolnostojaca => "Pergola Wolnostojąca",
            ProductKind::Inne => "Inne / Nie wiem jeszcze",
        }
    }
}

/// Badge in the corner of a product illustration
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ProductBadge {
    Bestseller,
    Premium,
}

impl ProductBadge {
    pub fn label(&self) -> &'static str {
        match self {
            ProductBadge::Bestseller => "Bestseller",
            ProductBadge::Premium => "Premium",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Product {
    pub kind: ProductKind,
    pub name: &'static str,
    pub description: &'static str,
    pub features: &'static [&'static str],
    pub price: &'static str,
    pub badge: Option<ProductBadge>,
    pub featured: bool,
}

pub const PRODUCTS: &[Product] = &[
    Product {
        kind: ProductKind::Klasyczna,
        name: "Pergola Klasyczna",
        description: "Elegancka konstrukcja z regulowanymi lamelami. Idealna na średniej wielkości tarasy.",
        features: &[
            "Regulowane lamele aluminiowe",
            "Odprowadzanie wody deszczowej",
            "Możliwość montażu oświetlenia LED",
        ],
        price: "12 900 zł",
        badge: Some(ProductBadge::Bestseller),
        featured: false,
    },
    Product {
        kind: ProductKind::Bioklimatyczna,
        name: "Pergola Bioklimatyczna",
        description: "Zaawansowana technologicznie pergola z automatycznym sterowaniem lamelami.",
        features: &[
            "Automatyczne sterowanie pilotem",
            "Czujnik deszczu i wiatru",
            "Zintegrowane oświetlenie LED RGB",
            "System grzewczy (opcja)",
        ],
        price: "24 900 zł",
        badge: Some(ProductBadge::Premium),
        featured: true,
    },
    Product {
        kind: ProductKind::Wolnostojaca,
        name: "Pergola Wolnostojąca",
        description: "Samodzielna konstrukcja idealna do ogrodu, przy basenie lub jako altana.",
        features: &[
            "Niezależna od budynku",
            "Wzmocniona konstrukcja",
            "Opcja zabudowy bokami",
        ],
        price: "18 500 zł",
        badge: None,
        featured: false,
    },
];

/// Placeholder illustration drawn for a gallery entry
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GalleryArt {
    pub width: u32,
    pub height: u32,
    pub background: &'static str,
    pub frame: &'static str,
    pub caption: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GalleryEntry {
    pub title: &'static str,
    pub description: &'static str,
    pub large: bool,
    pub art: GalleryArt,
}

pub const GALLERY: &[GalleryEntry] = &[
    GalleryEntry {
        title: "Villa Nowoczesna",
        description: "Pergola bioklimatyczna 6x4m",
        large: true,
        art: GalleryArt {
            width: 600,
            height: 400,
            background: "#f1f3f4",
            frame: "#495057",
            caption: "Realizacja Premium",
        },
    },
    GalleryEntry {
        title: "Dom Jednorodzinny",
        description: "Pergola klasyczna 4x3m",
        large: false,
        art: GalleryArt {
            width: 300,
            height: 300,
            background: "#f8f9fa",
            frame: "#adb5bd",
            caption: "Taras klasyczny",
        },
    },
    GalleryEntry {
        title: "Strefa Relaksu",
        description: "Pergola wolnostojąca 5x5m",
        large: false,
        art: GalleryArt {
            width: 300,
            height: 300,
            background: "#f1f3f4",
            frame: "#495057",
            caption: "Ogród z basenem",
        },
    },
    GalleryEntry {
        title: "Restauracja Green",
        description: "Pergola bioklimatyczna 8x6m",
        large: false,
        art: GalleryArt {
            width: 300,
            height: 300,
            background: "#f8f9fa",
            frame: "#6c757d",
            caption: "Restauracja",
        },
    },
    GalleryEntry {
        title: "Apartament Premium",
        description: "Pergola na tarasie 3x4m",
        large: false,
        art: GalleryArt {
            width: 300,
            height: 300,
            background: "#f1f3f4",
            frame: "#adb5bd",
            caption: "Penthouse",
        },
    },
];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Benefit {
    pub number: &'static str,
    pub title: &'static str,
    pub text: &'static str,
}

pub const BENEFITS: &[Benefit] = &[
    Benefit {
        number: "01",
        title: "Ochrona przed słońcem",
        text: "Regulowane lamele pozwalają kontrolować ilość światła słonecznego, chroniąc przed przegrzewaniem.",
    },
    Benefit {
        number: "02",
        title: "Ochrona przed deszczem",
        text: "Szczelnie zamknięte lamele chronią przed opadami, umożliwiając korzystanie z tarasu w każdą pogodę.",
    },
    Benefit {
        number: "03",
        title: "Wzrost wartości nieruchomości",
        text: "Profesjonalnie wykonana pergola zwiększa wartość domu nawet o 10-15%.",
    },
    Benefit {
        number: "04",
        title: "Dodatkowa przestrzeń",
        text: "Zyskujesz funkcjonalną przestrzeń do wypoczynku, spotkań z rodziną i przyjaciółmi.",
    },
    Benefit {
        number: "05",
        title: "Niskie koszty utrzymania",
        text: "Konstrukcje aluminiowe nie wymagają malowania ani konserwacji przez wiele lat.",
    },
    Benefit {
        number: "06",
        title: "Estetyka i elegancja",
        text: "Nowoczesny design podkreśla architekturę domu i nadaje przestrzeni wyjątkowy charakter.",
    },
];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Testimonial {
    pub text: &'static str,
    pub name: &'static str,
    pub location: &'static str,
}

impl Testimonial {
    /// Initials shown in the avatar circle, e.g. "Anna Nowak" -> "AN"
    pub fn initials(&self) -> String {
        self.name
            .split_whitespace()
            .filter_map(|word| word.chars().next())
            .flat_map(char::to_uppercase)
            .collect()
    }
}

pub const TESTIMONIALS: &[Testimonial] = &[
    Testimonial {
        text: "Pergola bioklimatyczna to najlepsza inwestycja jaką zrobiliśmy w nasz dom. Teraz spędzamy na tarasie czas niezależnie od pogody. Montaż przebiegł sprawnie i profesjonalnie.",
        name: "Marek Kowalski",
        location: "Właściciel domu, Warszawa",
    },
    Testimonial {
        text: "Profesjonalne podejście od pierwszego kontaktu. Projekt został dopasowany idealnie do naszego domu. Polecam każdemu, kto szuka solidnej firmy.",
        name: "Anna Nowak",
        location: "Właścicielka domu, Kraków",
    },
    Testimonial {
        text: "Nasza pergola wolnostojąca przy basenie to teraz ulubione miejsce całej rodziny. Jakość wykonania na najwyższym poziomie. Zdecydowanie warto!",
        name: "Piotr Wiśniewski",
        location: "Właściciel domu, Poznań",
    },
];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Faq {
    pub question: &'static str,
    pub answer: &'static str,
}

pub const FAQS: &[Faq] = &[
    Faq {
        question: "Ile trwa realizacja zamówienia?",
        answer: "Standardowy czas realizacji to 2-3 tygodnie od podpisania umowy. Na czas realizacji składa się: projekt indywidualny (2-3 dni), produkcja (7-10 dni) oraz montaż (1-2 dni). W przypadku większych lub bardziej skomplikowanych projektów czas może się wydłużyć.",
    },
    Faq {
        question: "Czy pergola wymaga pozwolenia na budowę?",
        answer: "W większości przypadków pergola o powierzchni do 35m² nie wymaga pozwolenia na budowę ani zgłoszenia. Jednak przepisy mogą się różnić w zależności od gminy. Pomagamy naszym klientom w weryfikacji wymagań formalnych.",
    },
    Faq {
        question: "Jakie kolory są dostępne?",
        answer: "Oferujemy szeroką paletę kolorów RAL. Najpopularniejsze to: biały (RAL 9016), antracyt (RAL 7016), szary (RAL 9006) oraz brąz. Możliwe jest również lakierowanie w niestandardowych kolorach oraz wykończenie imitujące drewno.",
    },
    Faq {
        question: "Czy montaż jest wliczony w cenę?",
        answer: "Tak, w cenie zawsze uwzględniamy profesjonalny montaż przez nasz wykwalifikowany zespół. Montaż obejmuje: przygotowanie podłoża, instalację konstrukcji, podłączenie elektryki (w przypadku pergol z napędem) oraz szkolenie z obsługi.",
    },
    Faq {
        question: "Jak wygląda serwis i gwarancja?",
        answer: "Oferujemy 10 lat gwarancji na konstrukcję oraz 5 lat na powłokę lakierniczą i komponenty elektryczne. Zapewniamy również serwis pogwarancyjny. W ramach gwarancji reagujemy na zgłoszenia w ciągu 48 godzin.",
    },
];

/// Company contact details shown next to the form
pub mod company {
    pub const NAME: &str = "PergoMet";
    pub const TAGLINE: &str = "Nowoczesne pergole aluminiowe";
    /// Canonical address when the server does not override it
    pub const SITE_URL: &str = "https://pergomet.pl/";
    pub const PHONE: &str = "+48 123 456 789";
    pub const PHONE_HREF: &str = "tel:+48123456789";
    pub const EMAIL: &str = "kontakt@pergomet.pl";
    pub const STREET: &str = "ul. Słoneczna 15";
    pub const CITY: &str = "00-001 Warszawa";
    pub const HOURS_WEEKDAYS: &str = "Pon-Pt: 8:00 - 18:00";
    pub const HOURS_SATURDAY: &str = "Sob: 9:00 - 14:00";
    pub const FOUNDED: u32 = 2012;
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_nav_links_are_unique_and_ordered() {
        let ids: Vec<_> = section_ids().collect();
        let unique: HashSet<_> = ids.iter().collect();
        assert_eq!(ids.len(), unique.len());
        assert_eq!(ids.first(), Some(&"home"));
        assert_eq!(ids.last(), Some(&"contact"));
        assert_eq!(NAV_LINKS[6].href(), "#faq");
    }

    #[test]
    fn test_product_kind_round_trips_through_option_value() {
        for kind in ProductKind::ALL {
            assert_eq!(ProductKind::from_str(kind.as_str()), kind);
        }
        assert_eq!(ProductKind::from_str("garbage"), ProductKind::Unspecified);
    }

    #[test]
    fn test_product_kind_serializes_lowercase() {
        let json = serde_json::to_string(&ProductKind::Bioklimatyczna).unwrap();
        assert_eq!(json, "\"bioklimatyczna\"");
    }

    #[test]
    fn test_exactly_one_featured_product() {
        assert_eq!(PRODUCTS.iter().filter(|p| p.featured).count(), 1);
    }

    #[test]
    fn test_testimonial_initials() {
        assert_eq!(TESTIMONIALS[0].initials(), "MK");
        assert_eq!(TESTIMONIALS[2].initials(), "PW");
    }

    #[test]
    fn test_only_first_gallery_entry_is_large() {
        assert!(GALLERY[0].large);
        assert!(GALLERY.iter().skip(1).all(|entry| !entry.large));
    }
}
