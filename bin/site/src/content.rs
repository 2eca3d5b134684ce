//! Static copy and imagery for the site.

use std::time::Duration;
use transblue_core::Slide;

/// Company name shown in the header and footer.
pub const COMPANY: &str = "TransBlue Logistics";

/// Tagline under the company name.
pub const TAGLINE: &str = "Доставляем быстро и надёжно";

/// A carousel's slides and its auto-advance interval.
#[derive(Debug, Clone, Copy)]
pub struct Gallery {
    pub slides: &'static [Slide],
    pub interval: Duration,
}

pub const HOME_GALLERY: Gallery = Gallery {
    slides: &[
        Slide {
            src: "https://images.unsplash.com/photo-1543364195-bfe6e4932397?q=80&w=1600&auto=format&fit=crop",
            alt: "Грузовики на трассе",
        },
        Slide {
            src: "https://images.unsplash.com/photo-1517957754645-708b5e65a120?q=80&w=1600&auto=format&fit=crop",
            alt: "Погрузка контейнеров",
        },
        Slide {
            src: "https://images.unsplash.com/photo-1516542076529-1ea3854896e1?q=80&w=1600&auto=format&fit=crop",
            alt: "Грузовой самолёт",
        },
    ],
    interval: Duration::from_millis(4500),
};

pub const ORDER_GALLERY: Gallery = Gallery {
    slides: &[
        Slide {
            src: "https://images.unsplash.com/photo-1500043381545-43926d6f7ef2?q=80&w=1600&auto=format&fit=crop",
            alt: "Склад с паллетами",
        },
        Slide {
            src: "https://images.unsplash.com/photo-1556740758-90de374c12ad?q=80&w=1600&auto=format&fit=crop",
            alt: "Сотрудники оформляют документы",
        },
    ],
    interval: Duration::from_millis(5000),
};

pub const ABOUT_GALLERY: Gallery = Gallery {
    slides: &[
        Slide {
            src: "https://images.unsplash.com/photo-1547347298-4074fc3086f0?q=80&w=1600&auto=format&fit=crop",
            alt: "Контейнерный терминал на закате",
        },
        Slide {
            src: "https://images.unsplash.com/photo-1500530855697-b586d89ba3ee?q=80&w=1600&auto=format&fit=crop",
            alt: "Команда на складе",
        },
    ],
    interval: Duration::from_millis(4200),
};

/// Selling points listed under the hero.
pub const FEATURES: [&str; 4] = [
    "24/7 поддержка",
    "Страхование грузов",
    "Отслеживание в реальном времени",
    "Сеть партнёров в 40+ странах",
];

/// A transport service card.
#[derive(Debug, Clone, Copy)]
pub struct Service {
    pub icon: &'static str,
    pub title: &'static str,
    pub text: &'static str,
}

pub const SERVICES: [Service; 3] = [
    Service {
        icon: "🚚",
        title: "Автоперевозки",
        text: "Еврофуры, FT/LTL, экспресс-доставка",
    },
    Service {
        icon: "🚢",
        title: "Морские",
        text: "FCL/LCL, фидерные линии",
    },
    Service {
        icon: "✈️",
        title: "Авиа",
        text: "Срочные поставки и чартеры",
    },
];

/// Certifications and capabilities on the about page.
pub const CREDENTIALS: [&str; 3] = [
    "ISO 9001, TAPA TSR",
    "Собственный автопарк и сеть 3PL-складов",
    "EDI/интеграции с ERP, API-отслеживание",
];

/// Contact channels shown in the drawer.
pub mod contacts {
    pub const PHONE_DISPLAY: &str = "+7 (000) 000-00-00";
    pub const PHONE_HREF: &str = "tel:+70000000000";
    pub const EMAIL: &str = "sales@transblue.example";
    pub const OFFICE: &str = "Россия, Москва, Примерная ул., 1";
    pub const MESSENGERS: [&str; 3] = ["WhatsApp", "Telegram", "Viber"];
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn galleries_match_page_intervals() {
        assert_eq!(HOME_GALLERY.slides.len(), 3);
        assert_eq!(HOME_GALLERY.interval, Duration::from_millis(4500));
        assert_eq!(ORDER_GALLERY.interval, Duration::from_millis(5000));
        assert_eq!(ABOUT_GALLERY.interval, Duration::from_millis(4200));
    }

    #[test]
    fn every_slide_has_alt_text() {
        for gallery in [HOME_GALLERY, ORDER_GALLERY, ABOUT_GALLERY] {
            for slide in gallery.slides {
                assert!(slide.src.starts_with("https://"));
                assert!(!slide.alt.is_empty());
            }
        }
    }
}
