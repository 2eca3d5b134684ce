//! Slide-in contacts drawer.

use crate::content::contacts;
use leptos::prelude::*;
use std::time::Duration;

/// Matches the exit animation length in `style/main.css`.
const EXIT_DURATION: Duration = Duration::from_millis(300);

/// Contacts panel sliding in from the right over a dimmed backdrop.
///
/// Clicking the backdrop or the close button reports `on_close`. On close
/// the panel stays mounted until its exit animation has finished.
#[component]
pub fn ContactsDrawer(open: Signal<bool>, on_close: Callback<()>) -> impl IntoView {
    view! {
        <AnimatedShow
            when=open
            show_class="drawer drawer-enter"
            hide_class="drawer drawer-exit"
            hide_delay=EXIT_DURATION
        >
            <div class="drawer-backdrop" on:click=move |_| on_close.run(())></div>
            <aside class="drawer-panel" role="dialog" aria-label="Контакты">
                <div class="drawer-head">
                    <div>
                        <h3>"Связаться с нами"</h3>
                        <p class="muted">"Мы ответим в ближайшее время"</p>
                    </div>
                    <button class="drawer-close" on:click=move |_| on_close.run(())>
                        "Закрыть"
                    </button>
                </div>

                <div class="drawer-body">
                    <div class="contact-card">
                        <div class="contact-title">"Телефон"</div>
                        <a href=contacts::PHONE_HREF>{contacts::PHONE_DISPLAY}</a>
                    </div>
                    <div class="contact-card">
                        <div class="contact-title">"Email"</div>
                        <a href=format!("mailto:{}", contacts::EMAIL)>{contacts::EMAIL}</a>
                    </div>
                    <div class="contact-card">
                        <div class="contact-title">"Офис"</div>
                        <div>{contacts::OFFICE}</div>
                    </div>
                    <div class="contact-card">
                        <div class="contact-title">"Мессенджеры"</div>
                        <div class="messengers">
                            {contacts::MESSENGERS
                                .into_iter()
                                .map(|name| view! { <a class="messenger-link" href="#">{name}</a> })
                                .collect_view()}
                        </div>
                    </div>
                    <div class="contact-card notice">
                        "Нажимая «Отправить заявку» на странице Заказ, вы соглашаетесь с условиями обработки персональных данных."
                    </div>
                </div>
            </aside>
        </AnimatedShow>
    }
}
