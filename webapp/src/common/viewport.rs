use std::cell::RefCell;
use std::rc::Rc;

use dioxus::prelude::*;

use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;

// widths strictly below this many logical pixels get the collapsible
// overlay menu; everything else gets the inline links
pub const NARROW_MAX_WIDTH: f64 = 768.0;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ViewportClass {
    Narrow,
    Wide,
}

impl ViewportClass {
    pub fn from_width(width: f64) -> ViewportClass {
        if width < NARROW_MAX_WIDTH {
            ViewportClass::Narrow
        } else {
            ViewportClass::Wide
        }
    }
}

// navigation affordance state
//
// the open/closed flag only exists while the viewport is narrow, so a wide
// viewport with an open menu cannot be expressed at all.  the default is the
// narrow/closed pair: before the first measurement (and anywhere without a
// window to measure) the site renders mobile-first.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum NavState {
    #[default]
    NarrowClosed,
    NarrowOpen,
    Wide,
}

impl NavState {
    pub fn viewport(self) -> ViewportClass {
        match self {
            NavState::NarrowClosed | NavState::NarrowOpen => ViewportClass::Narrow,
            NavState::Wide => ViewportClass::Wide,
        }
    }

    // apply a viewport measurement
    //
    // crossing from narrow to wide discards the menu flag, so dropping back
    // to narrow always starts from the closed state
    pub fn measure(self, viewport: ViewportClass) -> NavState {
        match viewport {
            ViewportClass::Wide => NavState::Wide,
            ViewportClass::Narrow => match self {
                NavState::Wide => NavState::NarrowClosed,
                state => state,
            },
        }
    }

    // flip the overlay menu, triggered by the menu button or the dismiss
    // overlay; neither is rendered while wide, so this is a no-op there
    pub fn toggle_menu(self) -> NavState {
        match self {
            NavState::NarrowClosed => NavState::NarrowOpen,
            NavState::NarrowOpen => NavState::NarrowClosed,
            NavState::Wide => NavState::Wide,
        }
    }

    pub fn menu_open(self) -> bool {
        self == NavState::NarrowOpen
    }
}

// a live window resize subscription; dropping the handle removes the
// underlying dom listener, so the callback cannot fire after release
pub struct ResizeSubscription {
    window: web_sys::Window,
    callback: Closure<dyn FnMut()>,
}

impl ResizeSubscription {
    pub fn subscribe(
        window: web_sys::Window,
        mut on_resize: impl FnMut() + 'static,
    ) -> Option<ResizeSubscription> {
        let callback = Closure::<dyn FnMut()>::new(move || on_resize());

        window
            .add_event_listener_with_callback("resize", callback.as_ref().unchecked_ref())
            .ok()?;

        Some(ResizeSubscription { window, callback })
    }
}

impl Drop for ResizeSubscription {
    fn drop(&mut self) {
        let _ = self
            .window
            .remove_event_listener_with_callback("resize", self.callback.as_ref().unchecked_ref());
    }
}

// navigation state hook
//
// measures the viewport once after mount and again on every resize while
// mounted, then drops the subscription on unmount.  outside a browser there
// is no window to measure and the state stays at the narrow/closed default.
pub fn use_nav_state() -> Signal<NavState> {
    let mut state = use_signal(NavState::default);

    let subscription: Rc<RefCell<Option<ResizeSubscription>>> =
        use_hook(|| Rc::new(RefCell::new(None)));

    use_effect({
        let subscription = Rc::clone(&subscription);
        move || {
            let Some(window) = web_sys::window() else {
                return;
            };

            // a window without a usable width leaves the current state alone
            let mut measure = move |window: &web_sys::Window| {
                let Some(width) = window.inner_width().ok().and_then(|w| w.as_f64()) else {
                    return;
                };

                let next = state.peek().measure(ViewportClass::from_width(width));

                if next != *state.peek() {
                    state.set(next);
                }
            };

            measure(&window);

            let target = window.clone();
            *subscription.borrow_mut() =
                ResizeSubscription::subscribe(window, move || measure(&target));
        }
    });

    use_drop(move || drop(subscription.borrow_mut().take()));

    state
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn breakpoint_is_strict_less_than() {
        assert_eq!(ViewportClass::from_width(0.0), ViewportClass::Narrow);
        assert_eq!(ViewportClass::from_width(375.0), ViewportClass::Narrow);
        assert_eq!(ViewportClass::from_width(767.0), ViewportClass::Narrow);
        assert_eq!(ViewportClass::from_width(768.0), ViewportClass::Wide);
        assert_eq!(ViewportClass::from_width(1024.0), ViewportClass::Wide);
    }

    #[test]
    fn initial_state_is_narrow_closed() {
        assert_eq!(NavState::default(), NavState::NarrowClosed);
        assert_eq!(NavState::default().viewport(), ViewportClass::Narrow);
        assert!(!NavState::default().menu_open());
    }

    #[test]
    fn mount_at_desktop_width_is_wide() {
        let state = NavState::default().measure(ViewportClass::from_width(1024.0));

        assert_eq!(state, NavState::Wide);
        assert!(!state.menu_open());
    }

    #[test]
    fn menu_toggles_while_narrow() {
        let state = NavState::default().measure(ViewportClass::from_width(375.0));
        assert_eq!(state, NavState::NarrowClosed);

        let state = state.toggle_menu();
        assert_eq!(state, NavState::NarrowOpen);
        assert!(state.menu_open());

        // the dismiss overlay runs the same transition
        let state = state.toggle_menu();
        assert_eq!(state, NavState::NarrowClosed);
    }

    #[test]
    fn toggle_is_noop_while_wide() {
        assert_eq!(NavState::Wide.toggle_menu(), NavState::Wide);
    }

    #[test]
    fn widening_discards_the_open_menu() {
        let state = NavState::NarrowOpen.measure(ViewportClass::Wide);
        assert_eq!(state, NavState::Wide);

        // and coming back down starts closed
        assert_eq!(state.measure(ViewportClass::Narrow), NavState::NarrowClosed);
    }

    #[test]
    fn remeasuring_narrow_keeps_the_menu() {
        assert_eq!(
            NavState::NarrowOpen.measure(ViewportClass::Narrow),
            NavState::NarrowOpen
        );
        assert_eq!(
            NavState::NarrowClosed.measure(ViewportClass::Narrow),
            NavState::NarrowClosed
        );
    }
}
