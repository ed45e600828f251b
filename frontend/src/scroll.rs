use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use yew::prelude::*;

use crate::config::SCROLL_THRESHOLD;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ScrollState {
    pub scrolled_past_threshold: bool,
}

impl ScrollState {
    pub fn from_offset(offset: f64) -> Self {
        Self {
            scrolled_past_threshold: offset > SCROLL_THRESHOLD,
        }
    }

    /// Recomputes from a fresh offset, returning whether the flag flipped.
    pub fn observe(&mut self, offset: f64) -> bool {
        let next = Self::from_offset(offset);
        let changed = next != *self;
        *self = next;
        changed
    }
}

fn current_offset(window: &web_sys::Window) -> f64 {
    window.scroll_y().unwrap_or(0.0)
}

/// Tracks the window scroll offset for the lifetime of the calling component.
#[hook]
pub fn use_scroll_state() -> ScrollState {
    let state = use_state_eq(ScrollState::default);

    {
        let state = state.clone();
        use_effect_with_deps(
            move |_| {
                let listener = web_sys::window().map(|window| {
                    // Initial check, the page may load already scrolled
                    let mut tracked = ScrollState::from_offset(current_offset(&window));
                    state.set(tracked);

                    let scroll_callback = {
                        let window = window.clone();
                        let state = state.clone();
                        Closure::wrap(Box::new(move || {
                            if tracked.observe(current_offset(&window)) {
                                state.set(tracked);
                            }
                        }) as Box<dyn FnMut()>)
                    };

                    if let Err(err) = window.add_event_listener_with_callback(
                        "scroll",
                        scroll_callback.as_ref().unchecked_ref(),
                    ) {
                        log::warn!("Could not listen for scroll events: {:?}", err);
                    }

                    (window, scroll_callback)
                });

                move || {
                    if let Some((window, scroll_callback)) = listener {
                        let _ = window.remove_event_listener_with_callback(
                            "scroll",
                            scroll_callback.as_ref().unchecked_ref(),
                        );
                    }
                }
            },
            (),
        );
    }

    *state
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_below_threshold() {
        assert!(!ScrollState::default().scrolled_past_threshold);
        assert!(!ScrollState::from_offset(0.0).scrolled_past_threshold);
    }

    #[test]
    fn threshold_is_strict() {
        assert!(!ScrollState::from_offset(50.0).scrolled_past_threshold);
        assert!(ScrollState::from_offset(50.5).scrolled_past_threshold);
    }

    #[test]
    fn scrolling_to_120_flips_exactly_once() {
        let mut state = ScrollState::default();
        let flips = (0..=12)
            .map(|step| step as f64 * 10.0)
            .filter(|offset| state.observe(*offset))
            .count();
        assert_eq!(flips, 1);
        assert!(state.scrolled_past_threshold);
    }

    #[test]
    fn scrolling_back_up_clears_flag() {
        let mut state = ScrollState::from_offset(400.0);
        assert!(state.observe(10.0));
        assert!(!state.scrolled_past_threshold);
        assert!(!state.observe(0.0));
    }
}
