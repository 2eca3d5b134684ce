//! Sticky site header with navigation.

use crate::content::{COMPANY, TAGLINE};
use leptos::prelude::*;
use transblue_core::Route;

fn nav_link_class(active: bool) -> &'static str {
    if active { "nav-link active" } else { "nav-link" }
}

/// Brand block, one link per route, and the desktop contacts button.
#[component]
pub fn Header(
    route: Signal<Route>,
    on_nav: Callback<Route>,
    on_open_contacts: Callback<()>,
) -> impl IntoView {
    view! {
        <header class="site-header">
            <div class="header-inner">
                <div class="brand">
                    <div class="brand-mark">"T"</div>
                    <div class="brand-text">
                        <div class="brand-name">{COMPANY}</div>
                        <div class="brand-tagline">{TAGLINE}</div>
                    </div>
                </div>

                <nav class="header-nav">
                    {Route::ALL
                        .into_iter()
                        .map(|target| view! {
                            <button
                                class=move || nav_link_class(route.get() == target)
                                on:click=move |_| on_nav.run(target)
                            >
                                {target.label()}
                            </button>
                        })
                        .collect_view()}
                    <button class="contacts-button" on:click=move |_| on_open_contacts.run(())>
                        "Контакты"
                    </button>
                </nav>
            </div>
        </header>
    }
}
