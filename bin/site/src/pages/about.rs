//! About page.

use crate::components::Carousel;
use crate::content::{ABOUT_GALLERY, CREDENTIALS};
use leptos::prelude::*;

#[component]
pub fn AboutPage() -> impl IntoView {
    view! {
        <section class="split-page">
            <div class="page-copy">
                <h2>"О компании"</h2>
                <p class="muted">
                    "Мы — команда профессионалов в области международной логистики с 2012 года. "
                    "Наши решения охватывают весь цикл: от забора груза до доставки получателю, "
                    "включая склад, страхование и таможню."
                </p>
                <ul class="credential-list">
                    {CREDENTIALS
                        .into_iter()
                        .map(|item| view! { <li>{item}</li> })
                        .collect_view()}
                </ul>
            </div>
            <div class="gallery-card">
                <Carousel slides=ABOUT_GALLERY.slides interval=ABOUT_GALLERY.interval/>
            </div>
        </section>
    }
}
