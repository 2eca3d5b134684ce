//! Home page: hero, gallery, and services.

use crate::components::Carousel;
use crate::content::{FEATURES, HOME_GALLERY, SERVICES};
use leptos::prelude::*;

/// The landing page.
#[component]
pub fn HomePage(on_order: Callback<()>, on_about: Callback<()>) -> impl IntoView {
    view! {
        <section class="home-page">
            <div class="hero">
                <div class="hero-copy">
                    <h1>
                        "Логистика без задержек — "
                        <span class="accent">"по всему миру"</span>
                    </h1>
                    <p class="muted">
                        "Морские, авиа- и автоперевозки, складская логистика, таможенное оформление. "
                        "Мы делаем поставки прозрачными и предсказуемыми."
                    </p>

                    <div class="hero-actions">
                        <button class="primary-button" on:click=move |_| on_order.run(())>
                            "Оформить заказ"
                        </button>
                        <button class="secondary-button" on:click=move |_| on_about.run(())>
                            "О компании"
                        </button>
                    </div>

                    <ul class="feature-list">
                        {FEATURES
                            .into_iter()
                            .map(|feature| view! { <li class="feature-chip">{feature}</li> })
                            .collect_view()}
                    </ul>
                </div>

                <div class="gallery-card">
                    <Carousel slides=HOME_GALLERY.slides interval=HOME_GALLERY.interval/>
                </div>
            </div>

            <div class="service-grid">
                {SERVICES
                    .into_iter()
                    .map(|service| view! {
                        <div class="service-card">
                            <div class="service-icon">{service.icon}</div>
                            <div class="service-title">{service.title}</div>
                            <div class="muted">{service.text}</div>
                        </div>
                    })
                    .collect_view()}
            </div>
        </section>
    }
}
