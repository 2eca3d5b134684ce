//! Site footer.

use crate::content::COMPANY;
use chrono::{Datelike, Utc};
use leptos::prelude::*;
use transblue_core::Route;

/// Order of the footer shortcuts.
const LINKS: [Route; 3] = [Route::About, Route::Order, Route::Home];

fn copyright(year: i32) -> String {
    format!("© {year} {COMPANY}. Все права защищены.")
}

/// Copyright line and shortcuts to every page.
#[component]
pub fn Footer(on_nav: Callback<Route>) -> impl IntoView {
    let links = LINKS
        .into_iter()
        .enumerate()
        .map(|(i, target)| {
            view! {
                {(i > 0).then(|| view! { <span class="footer-sep">"•"</span> })}
                <a
                    href=format!("#{target}")
                    on:click=move |ev: leptos::ev::MouseEvent| {
                        ev.prevent_default();
                        on_nav.run(target);
                    }
                >
                    {target.label()}
                </a>
            }
        })
        .collect_view();

    view! {
        <footer class="site-footer">
            <div class="footer-inner">
                <div>{copyright(Utc::now().year())}</div>
                <div class="footer-links">{links}</div>
            </div>
        </footer>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn copyright_names_year_and_company() {
        assert_eq!(
            copyright(2026),
            "© 2026 TransBlue Logistics. Все права защищены."
        );
    }
}
