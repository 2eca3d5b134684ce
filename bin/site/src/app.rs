//! Main Leptos application component and page shell.

use crate::browser::BrowserLocation;
use crate::components::{ContactsDrawer, Footer, Header};
use crate::pages::{AboutPage, HomePage, OrderPage};
use crate::submission::SharedSubmitter;
use leptos::prelude::*;
use leptos_meta::{Meta, Title, provide_meta_context};
use leptos_router::{
    components::{Route as PathRoute, Router, Routes},
    path,
};
use transblue_core::{Drawer, HashRouter, Location, Route, fragment_of};

/// The main application component.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    view! {
        <Title text="TransBlue Logistics"/>
        <Meta
            name="description"
            content="Морские, авиа- и автоперевозки, складская логистика и таможенное оформление."
        />
        <Router>
            <Routes fallback=|| "Страница не найдена.".into_view()>
                <PathRoute path=path!("/") view=SiteShell/>
            </Routes>
        </Router>
    }
}

/// Session-wide UI state owned by the page shell.
///
/// Created when the shell mounts and handed to children only as read
/// signals and callbacks.
pub struct SiteState<L: Send + Sync + 'static = BrowserLocation> {
    router: RwSignal<HashRouter<L>>,
    drawer: RwSignal<Drawer>,
}

impl<L: Send + Sync + 'static> Clone for SiteState<L> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<L: Send + Sync + 'static> Copy for SiteState<L> {}

impl<L: Location + Send + Sync + 'static> SiteState<L> {
    fn new(location: L) -> Self {
        Self {
            router: RwSignal::new(HashRouter::new(location)),
            drawer: RwSignal::new(Drawer::default()),
        }
    }

    /// Returns the displayed route (tracked).
    pub fn route(&self) -> Route {
        self.router.with(HashRouter::route)
    }

    /// Returns whether the contacts drawer is open (tracked).
    pub fn contacts_open(&self) -> bool {
        self.drawer.with(|drawer| drawer.is_open())
    }

    /// Applies the fragment present when the page loaded.
    pub fn start(&self) {
        self.router.maybe_update(HashRouter::start);
    }

    /// Applies a fragment from a hash-change notification.
    ///
    /// Returns whether the displayed route changed.
    pub fn apply_fragment(&self, fragment: &str) -> bool {
        if Route::from_fragment(fragment).is_none() {
            tracing::debug!(fragment, "Ignoring unknown fragment");
            return false;
        }
        let before = self.router.with_untracked(HashRouter::route);
        self.router
            .maybe_update(|router| router.apply_fragment(fragment));
        self.router.with_untracked(HashRouter::route) != before
    }

    /// Navigates to `route`, updating the location fragment.
    ///
    /// Returns whether the displayed route changed.
    pub fn navigate(&self, route: Route) -> bool {
        let changed = self.router.with_untracked(HashRouter::route) != route;
        self.router.maybe_update(|router| router.navigate(route));
        if changed {
            tracing::debug!(%route, "Navigated");
        }
        changed
    }

    pub fn show_contacts(&self) {
        self.drawer.maybe_update(Drawer::show);
    }

    pub fn hide_contacts(&self) {
        self.drawer.maybe_update(Drawer::hide);
    }
}

/// Selects the page body for `route`.
fn page_view(route: Route, on_nav: Callback<Route>) -> AnyView {
    match route {
        Route::Home => view! {
            <HomePage
                on_order=Callback::new(move |()| on_nav.run(Route::Order))
                on_about=Callback::new(move |()| on_nav.run(Route::About))
            />
        }
        .into_any(),
        Route::Order => view! { <OrderPage/> }.into_any(),
        Route::About => view! { <AboutPage/> }.into_any(),
    }
}

/// Header, routed page body, footer, and contacts drawer.
#[component]
fn SiteShell() -> impl IntoView {
    let state = SiteState::new(BrowserLocation);
    provide_context(SharedSubmitter::default());

    // The fragment only exists in the browser, so routing starts on mount.
    Effect::new(move || {
        state.start();
        let handle = window_event_listener(leptos::ev::hashchange, move |ev| {
            state.apply_fragment(fragment_of(&ev.new_url()));
        });
        on_cleanup(move || handle.remove());
    });

    let route = Memo::new(move |_| state.route());
    let contacts_open = Memo::new(move |_| state.contacts_open());

    let on_nav = Callback::new(move |route: Route| {
        state.navigate(route);
    });
    let open_contacts = Callback::new(move |()| state.show_contacts());
    let close_contacts = Callback::new(move |()| state.hide_contacts());

    view! {
        <div class="site">
            <Header route=route.into() on_nav on_open_contacts=open_contacts/>

            <main class="site-main">
                {move || page_view(route.get(), on_nav)}
            </main>

            <Footer on_nav/>

            <ContactsDrawer open=contacts_open.into() on_close=close_contacts/>

            // Mobile-only trigger; the header button covers wider screens.
            <button class="contacts-fab" on:click=move |_| open_contacts.run(())>
                "Контакты"
            </button>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Default)]
    struct FakeLocation {
        fragment: String,
    }

    impl Location for FakeLocation {
        fn fragment(&self) -> String {
            self.fragment.clone()
        }

        fn set_fragment(&mut self, fragment: &str) {
            self.fragment = fragment.to_string();
        }
    }

    fn state_at(fragment: &str) -> (Owner, SiteState<FakeLocation>) {
        let owner = Owner::new();
        owner.set();
        let state = SiteState::new(FakeLocation {
            fragment: fragment.to_string(),
        });
        (owner, state)
    }

    fn fragment(state: &SiteState<FakeLocation>) -> String {
        state.router.with_untracked(|router| router.location().fragment())
    }

    #[test]
    fn navigate_updates_route_and_fragment() {
        let (_owner, state) = state_at("");

        for route in Route::ALL {
            state.navigate(route);
            assert_eq!(state.route(), route);
            assert_eq!(fragment(&state), route.as_str());
        }
    }

    #[test]
    fn navigate_reports_only_real_changes() {
        let (_owner, state) = state_at("");

        assert!(!state.navigate(Route::Home));
        assert!(state.navigate(Route::Order));
        assert!(!state.navigate(Route::Order));
    }

    #[test]
    fn navigate_to_current_route_repairs_fragment() {
        let (_owner, state) = state_at("#junk");
        state.start();
        assert_eq!(state.route(), Route::Home);

        assert!(!state.navigate(Route::Home));
        assert_eq!(state.route(), Route::Home);
        assert_eq!(fragment(&state), Route::Home.as_str());
    }

    #[test]
    fn unknown_fragment_leaves_route_alone() {
        let (_owner, state) = state_at("");
        state.navigate(Route::About);

        assert!(!state.apply_fragment("junk"));
        assert!(!state.apply_fragment(""));
        assert_eq!(state.route(), Route::About);

        assert!(state.apply_fragment("#order"));
        assert_eq!(state.route(), Route::Order);
    }

    #[test]
    fn start_reads_initial_fragment() {
        let (_owner, state) = state_at("#about");
        state.start();
        assert_eq!(state.route(), Route::About);

        let (_owner, state) = state_at("#nowhere");
        state.start();
        assert_eq!(state.route(), Route::Home);
    }

    #[test]
    fn drawer_triggers_share_one_flag() {
        let (_owner, state) = state_at("");

        state.show_contacts();
        state.show_contacts();
        assert!(state.contacts_open());

        state.navigate(Route::Order);
        assert!(state.contacts_open());

        state.hide_contacts();
        assert!(!state.contacts_open());
        assert_eq!(state.route(), Route::Order);
    }

    #[cfg(feature = "ssr")]
    #[test]
    fn displayed_page_matches_route() {
        let (_owner, state) = state_at("");
        let on_nav = Callback::new(move |route: Route| {
            state.navigate(route);
        });
        let markers = [
            (Route::Home, "Оформить заказ"),
            (Route::Order, "Оформление заказа"),
            (Route::About, "с 2012 года"),
        ];

        for (route, marker) in markers {
            state.navigate(route);
            let html = page_view(state.route(), on_nav).to_html();
            assert!(html.contains(marker), "{route} page should contain {marker:?}");
            for (other, other_marker) in markers {
                if other != route {
                    assert!(!html.contains(other_marker), "{route} page shows {other} content");
                }
            }
        }
    }
}
