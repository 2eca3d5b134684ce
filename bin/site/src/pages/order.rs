//! Order page.

use crate::components::{Carousel, OrderForm};
use crate::content::ORDER_GALLERY;
use leptos::prelude::*;

/// Lead-capture page with the order form.
#[component]
pub fn OrderPage() -> impl IntoView {
    view! {
        <section class="split-page">
            <div class="page-copy">
                <h2>"Оформление заказа"</h2>
                <p class="muted">
                    "Заполните форму — мы свяжемся в течение 15 минут в рабочее время."
                </p>
                <OrderForm/>
            </div>
            <div class="gallery-card">
                <Carousel slides=ORDER_GALLERY.slides interval=ORDER_GALLERY.interval/>
            </div>
        </section>
    }
}
