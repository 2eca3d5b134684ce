//! Auto-advancing image carousel.

use crate::browser::BrowserScheduler;
use leptos::prelude::*;
use std::time::Duration;
use transblue_core::Slide;
use transblue_core::carousel::{self, DEFAULT_INTERVAL};

type Deck = carousel::Carousel<BrowserScheduler>;

/// Runs `action` on the mounted deck and publishes the resulting index.
///
/// Does nothing once the component has been torn down.
fn drive(deck: StoredValue<Option<Deck>>, index: RwSignal<usize>, action: impl FnOnce(&mut Deck)) {
    let current = deck.try_update_value(|slot| {
        slot.as_mut().map(|deck| {
            action(deck);
            deck.index()
        })
    });
    if let Some(Some(current)) = current {
        if index.get_untracked() != current {
            index.set(current);
        }
    }
}

fn dot_class(active: bool) -> &'static str {
    if active {
        "carousel-dot active"
    } else {
        "carousel-dot"
    }
}

/// Image carousel that advances every `interval`.
///
/// Renders nothing for an empty slide list. Arrows and dots restart the
/// countdown. Only the current slide is in the tree. Slides are keyed by
/// index, so a change unmounts the outgoing `<img>` and mounts a fresh one,
/// which replays its enter animation.
#[component]
pub fn Carousel(
    slides: &'static [Slide],
    #[prop(optional)] interval: Option<Duration>,
) -> impl IntoView {
    if slides.is_empty() {
        return ().into_any();
    }

    let index = RwSignal::new(0usize);
    let deck = StoredValue::new(None::<Deck>);
    let scheduler = BrowserScheduler::new(move || {
        drive(deck, index, |deck| {
            deck.fire();
        })
    });
    deck.set_value(Some(Deck::new(
        slides.to_vec(),
        interval.unwrap_or(DEFAULT_INTERVAL),
        scheduler,
    )));

    // Timers are browser-only, so arming waits for mount.
    Effect::new(move || drive(deck, index, Deck::start));
    on_cleanup(move || {
        deck.try_update_value(|slot| slot.take());
    });

    let dots = (0..slides.len())
        .map(|i| {
            view! {
                <button
                    class=move || dot_class(index.get() == i)
                    aria-label=format!("Перейти к слайду {}", i + 1)
                    on:click=move |_| drive(deck, index, move |deck| {
                        deck.jump_to(i);
                    })
                />
            }
        })
        .collect_view();

    view! {
        <div class="carousel">
            <div class="carousel-badge">"Галерея"</div>

            <div class="carousel-frame">
                <For
                    each=move || std::iter::once(index.get())
                    key=|i| *i
                    children=move |i| {
                        slides.get(i).map(|slide| view! {
                            <img class="carousel-slide" src=slide.src alt=slide.alt loading="eager"/>
                        })
                    }
                />
            </div>

            <button
                class="carousel-arrow prev"
                aria-label="Предыдущее"
                on:click=move |_| drive(deck, index, Deck::prev)
            >
                "‹"
            </button>
            <button
                class="carousel-arrow next"
                aria-label="Следующее"
                on:click=move |_| drive(deck, index, Deck::next)
            >
                "›"
            </button>

            <div class="carousel-dots">{dots}</div>
        </div>
    }
    .into_any()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[cfg(feature = "ssr")]
    #[test]
    fn renders_exactly_one_slide() {
        use crate::content::HOME_GALLERY;

        let owner = Owner::new();
        owner.set();

        let html = view! { <Carousel slides=HOME_GALLERY.slides/> }.to_html();

        assert_eq!(html.matches("<img").count(), 1);
        assert!(html.contains(HOME_GALLERY.slides[0].alt));
        assert_eq!(
            html.matches("Перейти к слайду").count(),
            HOME_GALLERY.slides.len()
        );
    }

    #[cfg(feature = "ssr")]
    #[test]
    fn empty_carousel_renders_nothing() {
        let owner = Owner::new();
        owner.set();

        let html = view! { <Carousel slides=&[]/> }.to_html();

        assert!(!html.contains("carousel"));
    }

    #[test]
    fn only_current_dot_is_highlighted() {
        assert_eq!(dot_class(true), "carousel-dot active");
        assert_eq!(dot_class(false), "carousel-dot");
    }
}
