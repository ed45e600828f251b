use std::fmt;
use std::rc::Rc;

use log::debug;
use web_sys::{ScrollBehavior, ScrollToOptions};
use yew::prelude::*;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PageId {
    Home,
    About,
    HealthCoaching,
    Psychosocial,
    Packages,
    Retreats,
    Testimonials,
    Blog,
    Contact,
}

impl PageId {
    /// Navigation order, as shown in the nav bar.
    pub const ALL: [PageId; 9] = [
        PageId::Home,
        PageId::About,
        PageId::HealthCoaching,
        PageId::Psychosocial,
        PageId::Packages,
        PageId::Retreats,
        PageId::Testimonials,
        PageId::Blog,
        PageId::Contact,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            PageId::Home => "home",
            PageId::About => "about",
            PageId::HealthCoaching => "health-coaching",
            PageId::Psychosocial => "psychosocial",
            PageId::Packages => "packages",
            PageId::Retreats => "retreats",
            PageId::Testimonials => "testimonials",
            PageId::Blog => "blog",
            PageId::Contact => "contact",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            PageId::Home => "Home",
            PageId::About => "About Me",
            PageId::HealthCoaching => "Health Coaching",
            PageId::Psychosocial => "Psychosocial Services",
            PageId::Packages => "Packages",
            PageId::Retreats => "Retreats",
            PageId::Testimonials => "Testimonials",
            PageId::Blog => "Blog",
            PageId::Contact => "Contact",
        }
    }
}

impl fmt::Display for PageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Site-wide navigation state. Only `App` holds the reducer handle; everything
/// else reads copies through props.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NavigationState {
    pub current: PageId,
    pub menu_open: bool,
    /// Bumped once per navigation; the scroll-to-top effect keys on it.
    pub epoch: u64,
}

impl Default for NavigationState {
    fn default() -> Self {
        Self {
            current: PageId::Home,
            menu_open: false,
            epoch: 0,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NavAction {
    NavigateTo(PageId),
    ToggleMenu,
    CloseMenu,
}

impl Reducible for NavigationState {
    type Action = NavAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        match action {
            NavAction::NavigateTo(page) => {
                debug!("Navigating from {} to {}", self.current, page);
                Rc::new(Self {
                    current: page,
                    menu_open: false,
                    epoch: self.epoch.wrapping_add(1),
                })
            }
            NavAction::ToggleMenu => Rc::new(Self {
                menu_open: !self.menu_open,
                ..(*self).clone()
            }),
            NavAction::CloseMenu if self.menu_open => Rc::new(Self {
                menu_open: false,
                ..(*self).clone()
            }),
            NavAction::CloseMenu => self,
        }
    }
}

pub fn scroll_to_top() {
    if let Some(window) = web_sys::window() {
        let options = ScrollToOptions::new();
        options.set_top(0.0);
        options.set_behavior(ScrollBehavior::Smooth);
        window.scroll_with_scroll_to_options(&options);
    }
}

/// Smoothly scrolls to the top whenever `epoch` changes after mount.
#[hook]
pub fn use_scroll_to_top_on(epoch: u64) {
    use_effect_with_deps(
        move |epoch| {
            if *epoch > 0 {
                scroll_to_top();
            }
            || ()
        },
        epoch,
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    fn apply(state: NavigationState, action: NavAction) -> NavigationState {
        (*Rc::new(state).reduce(action)).clone()
    }

    #[test]
    fn starts_on_home_with_menu_closed() {
        let state = NavigationState::default();
        assert_eq!(state.current, PageId::Home);
        assert!(!state.menu_open);
        assert_eq!(state.epoch, 0);
    }

    #[test]
    fn navigate_sets_page_and_requests_one_scroll() {
        let state = apply(NavigationState::default(), NavAction::NavigateTo(PageId::Contact));
        assert_eq!(state.current, PageId::Contact);
        assert_eq!(state.epoch, 1);
    }

    #[test]
    fn navigate_to_same_page_is_idempotent_but_still_scrolls() {
        let once = apply(NavigationState::default(), NavAction::NavigateTo(PageId::Blog));
        let twice = apply(once.clone(), NavAction::NavigateTo(PageId::Blog));
        assert_eq!(twice.current, once.current);
        assert_eq!(twice.epoch, once.epoch + 1);
    }

    #[test]
    fn navigate_closes_mobile_menu() {
        let open = apply(NavigationState::default(), NavAction::ToggleMenu);
        assert!(open.menu_open);
        let state = apply(open, NavAction::NavigateTo(PageId::Contact));
        assert!(!state.menu_open);
        assert_eq!(state.current, PageId::Contact);
    }

    #[test]
    fn menu_actions_do_not_touch_page_or_epoch() {
        let start = apply(NavigationState::default(), NavAction::NavigateTo(PageId::Packages));
        let toggled = apply(start.clone(), NavAction::ToggleMenu);
        let closed = apply(toggled, NavAction::CloseMenu);
        assert_eq!(closed, start);
    }

    #[test]
    fn close_menu_when_closed_keeps_same_state() {
        let state = Rc::new(NavigationState::default());
        let next = state.clone().reduce(NavAction::CloseMenu);
        assert!(Rc::ptr_eq(&state, &next));
    }

    #[test]
    fn page_ids_have_distinct_names() {
        let names: std::collections::HashSet<_> = PageId::ALL.iter().map(|p| p.as_str()).collect();
        assert_eq!(names.len(), PageId::ALL.len());
        assert_eq!(PageId::HealthCoaching.to_string(), "health-coaching");
    }
}
