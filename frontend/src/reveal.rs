//! Scroll-triggered reveal.
//!
//! [`VisibilityObserver`] wraps a browser `IntersectionObserver` around a
//! single element and fires once, the first time enough of the element is on
//! screen. [`Reveal`] uses it to fade and lift its children into place.

use std::cell::RefCell;
use std::rc::Rc;

use log::warn;
use thiserror::Error;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::js_sys::Array;
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};
use yew::prelude::*;

use crate::config::{DEFAULT_REVEAL_THRESHOLD, REVEAL_DURATION_MS, REVEAL_OFFSET_REM};

#[derive(Debug, Error)]
pub enum ObserveError {
    #[error("element is not mounted")]
    Detached,
    #[error("intersection observer unavailable: {0}")]
    Unsupported(String),
}

/// Visible fraction of an element, clamped to `0.0..=1.0`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Threshold(f64);

impl Threshold {
    pub fn new(fraction: f64) -> Self {
        if fraction.is_nan() {
            return Self::default();
        }
        Self(fraction.clamp(0.0, 1.0))
    }

    pub fn get(self) -> f64 {
        self.0
    }
}

impl Default for Threshold {
    fn default() -> Self {
        Self(DEFAULT_REVEAL_THRESHOLD)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum WatchPhase {
    Watching,
    Fired,
    Cancelled,
}

/// The at-most-once part of a visibility watch, kept apart from the DOM.
#[derive(Debug)]
pub struct OneShotWatch {
    threshold: Threshold,
    phase: WatchPhase,
}

impl OneShotWatch {
    pub fn new(threshold: Threshold) -> Self {
        Self {
            threshold,
            phase: WatchPhase::Watching,
        }
    }

    /// Feeds one intersection sample. Returns true only for the sample that
    /// first meets the threshold.
    pub fn on_intersection(&mut self, visible_ratio: f64) -> bool {
        if self.phase == WatchPhase::Watching && visible_ratio >= self.threshold.get() {
            self.phase = WatchPhase::Fired;
            return true;
        }
        false
    }

    pub fn cancel(&mut self) {
        self.phase = WatchPhase::Cancelled;
    }
}

/// Live watch on one element. Dropping it disconnects the browser observer,
/// so no notification can arrive after the owner is gone.
pub struct VisibilityObserver {
    observer: IntersectionObserver,
    watch: Rc<RefCell<OneShotWatch>>,
    _callback: Closure<dyn FnMut(Array, IntersectionObserver)>,
}

impl VisibilityObserver {
    pub fn observe(
        element: &Element,
        threshold: Threshold,
        on_visible: Callback<()>,
    ) -> Result<Self, ObserveError> {
        let watch = Rc::new(RefCell::new(OneShotWatch::new(threshold)));

        let callback = {
            let watch = watch.clone();
            Closure::wrap(Box::new(move |entries: Array, observer: IntersectionObserver| {
                for entry in entries.iter() {
                    let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
                        continue;
                    };
                    if !entry.is_intersecting() {
                        continue;
                    }
                    let fired = watch.borrow_mut().on_intersection(entry.intersection_ratio());
                    if fired {
                        observer.unobserve(&entry.target());
                        on_visible.emit(());
                    }
                }
            }) as Box<dyn FnMut(Array, IntersectionObserver)>)
        };

        let options = IntersectionObserverInit::new();
        options.set_threshold(&JsValue::from_f64(threshold.get()));

        let observer =
            IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)
                .map_err(|err| ObserveError::Unsupported(format!("{:?}", err)))?;
        observer.observe(element);

        Ok(Self {
            observer,
            watch,
            _callback: callback,
        })
    }
}

/// Browser half of a watch, as far as teardown is concerned.
trait ObserverHandle {
    fn discard_pending(&self);
    fn stop(&self);
}

impl ObserverHandle for IntersectionObserver {
    fn discard_pending(&self) {
        // Entries already queued would otherwise reach a freed closure.
        self.take_records();
    }

    fn stop(&self) {
        self.disconnect();
    }
}

fn release(watch: &RefCell<OneShotWatch>, observer: &impl ObserverHandle) {
    watch.borrow_mut().cancel();
    observer.discard_pending();
    observer.stop();
}

impl Drop for VisibilityObserver {
    fn drop(&mut self) {
        release(&self.watch, &self.observer);
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RevealState {
    pub visible: bool,
}

impl RevealState {
    /// One-way: a revealed element stays revealed.
    pub fn reveal(self) -> Self {
        Self { visible: true }
    }
}

/// Initial reveal state for a watch attempt. A failed setup shows the content
/// immediately instead of leaving it hidden.
fn settle<T>(watch: Result<T, ObserveError>) -> (Option<T>, RevealState) {
    match watch {
        Ok(watch) => (Some(watch), RevealState::default()),
        Err(err) => {
            warn!("Reveal falling back to visible: {}", err);
            (None, RevealState::default().reveal())
        }
    }
}

/// Returns true once the referenced element has scrolled into view. If the
/// browser cannot observe the element, the content is shown straight away.
#[hook]
pub fn use_reveal(node: NodeRef, threshold: Threshold) -> bool {
    let state = use_state_eq(RevealState::default);

    {
        let state = state.clone();
        use_effect_with_deps(
            move |node: &NodeRef| {
                let on_visible = {
                    let state = state.clone();
                    Callback::from(move |_| state.set(RevealState::default().reveal()))
                };
                let watch = match node.cast::<Element>() {
                    Some(element) => VisibilityObserver::observe(&element, threshold, on_visible),
                    None => Err(ObserveError::Detached),
                };
                let (watch, initial) = settle(watch);
                if initial.visible {
                    state.set(initial);
                }
                move || drop(watch)
            },
            node,
        );
    }

    state.visible
}

/// Inline style for a reveal wrapper in the given state.
pub fn reveal_style(visible: bool, delay_ms: u32) -> String {
    let mut style = if visible {
        "opacity: 1; transform: none;".to_string()
    } else {
        format!("opacity: 0; transform: translateY({}rem);", REVEAL_OFFSET_REM)
    };
    style.push_str(&format!(
        " transition: opacity {d}ms ease-out, transform {d}ms ease-out;",
        d = REVEAL_DURATION_MS
    ));
    if delay_ms > 0 {
        style.push_str(&format!(" transition-delay: {}ms;", delay_ms));
    }
    style
}

#[derive(Properties, PartialEq)]
pub struct RevealProps {
    #[prop_or_default]
    pub children: Children,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub delay_ms: u32,
    #[prop_or_default]
    pub threshold: Threshold,
}

#[function_component(Reveal)]
pub fn reveal(props: &RevealProps) -> Html {
    let node = use_node_ref();
    let visible = use_reveal(node.clone(), props.threshold);

    html! {
        <div
            ref={node}
            class={classes!("reveal", props.class.clone(), visible.then(|| "revealed"))}
            style={reveal_style(visible, props.delay_ms)}
        >
            { for props.children.iter() }
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn threshold_defaults_and_clamps() {
        assert_eq!(Threshold::default().get(), 0.1);
        assert_eq!(Threshold::new(1.5).get(), 1.0);
        assert_eq!(Threshold::new(-0.2).get(), 0.0);
        assert_eq!(Threshold::new(f64::NAN), Threshold::default());
    }

    #[test]
    fn watch_ignores_samples_below_threshold() {
        let mut watch = OneShotWatch::new(Threshold::new(0.15));
        assert!(!watch.on_intersection(0.0));
        assert!(!watch.on_intersection(0.14));
        assert_eq!(watch.phase, WatchPhase::Watching);
    }

    #[test]
    fn watch_fires_at_threshold_exactly_once() {
        let mut watch = OneShotWatch::new(Threshold::default());
        assert!(watch.on_intersection(0.1));
        assert!(!watch.on_intersection(0.5));
        assert!(!watch.on_intersection(1.0));
        assert_eq!(watch.phase, WatchPhase::Fired);
    }

    #[test]
    fn cancelled_watch_never_fires() {
        let mut watch = OneShotWatch::new(Threshold::default());
        watch.cancel();
        assert!(!watch.on_intersection(1.0));
        assert_eq!(watch.phase, WatchPhase::Cancelled);
    }

    #[test]
    fn cancelling_after_fire_blocks_further_notifications() {
        let mut watch = OneShotWatch::new(Threshold::default());
        assert!(watch.on_intersection(0.9));
        watch.cancel();
        assert!(!watch.on_intersection(0.9));
    }

    #[derive(Default)]
    struct RecordingObserver {
        calls: RefCell<Vec<&'static str>>,
    }

    impl ObserverHandle for RecordingObserver {
        fn discard_pending(&self) {
            self.calls.borrow_mut().push("discard_pending");
        }

        fn stop(&self) {
            self.calls.borrow_mut().push("stop");
        }
    }

    #[test]
    fn release_drops_queued_entries_before_disconnecting() {
        let watch = RefCell::new(OneShotWatch::new(Threshold::default()));
        let observer = RecordingObserver::default();

        release(&watch, &observer);

        assert_eq!(*observer.calls.borrow(), vec!["discard_pending", "stop"]);
        assert_eq!(watch.borrow().phase, WatchPhase::Cancelled);
        assert!(!watch.borrow_mut().on_intersection(1.0));
    }

    #[test]
    fn detached_element_is_shown_immediately() {
        let (watch, state) = settle::<()>(Err(ObserveError::Detached));
        assert!(watch.is_none());
        assert!(state.visible);
    }

    #[test]
    fn unsupported_observer_is_shown_immediately() {
        let (watch, state) =
            settle::<()>(Err(ObserveError::Unsupported("IntersectionObserver is not defined".into())));
        assert!(watch.is_none());
        assert!(state.visible);
    }

    #[test]
    fn live_watch_starts_hidden() {
        let (watch, state) = settle(Ok(7u8));
        assert_eq!(watch, Some(7));
        assert!(!state.visible);
    }

    #[test]
    fn reveal_state_is_monotonic() {
        let state = RevealState::default();
        assert!(!state.visible);
        let shown = state.reveal();
        assert!(shown.visible);
        assert!(shown.reveal().visible);
    }

    #[test]
    fn hidden_style_is_offset_and_transparent() {
        let style = reveal_style(false, 0);
        assert!(style.starts_with("opacity: 0; transform: translateY(3rem);"));
        assert!(style.contains("transition: opacity 1000ms ease-out"));
        assert!(!style.contains("transition-delay"));
    }

    #[test]
    fn visible_style_carries_stagger_delay() {
        let style = reveal_style(true, 300);
        assert!(style.starts_with("opacity: 1; transform: none;"));
        assert!(style.ends_with("transition-delay: 300ms;"));
    }
}
