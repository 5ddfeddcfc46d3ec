//! Header chrome: class sets derived from scroll offset and menu state.
//!
//! Everything here is a pure function of its inputs. The header recomputes
//! on every change, so there is no hysteresis.

use crate::nav::MenuState;

/// Default offset (px) at which the header turns opaque.
pub const DEFAULT_SCROLL_THRESHOLD: i32 = 20;

const HEADER_BASE: &str = "flex items-center h-20 lg:h-[5.5rem] fixed top-0 w-full left-0 z-50 \
     transition-all ease-linear duration-300 border-b";

const HEADER_SCROLLED: &str = "shadow-lg shadow-gray-200/50 dark:shadow-darkCard/50 bg-white \
     border-b-transparent dark:bg-darkBg dark:border-b dark:border-b-gray-700";

const HEADER_TRANSPARENT: &str = "border-b-transparent";

const BACKDROP_BASE: &str = "fixed h-screen z-50 backdrop-filter backdrop-blur-md bg-white \
     dark:bg-darkBg !bg-opacity-40 inset-x-0 top-0";

const PANEL_BASE: &str = "absolute h-max py-5 px-5 sm:px-10 lg:px-0 lg:py-0 w-full \
     top-[calc(100%+20px)] border-b-2 border-b-gray-200 dark:border-b-gray-700 lg:!border-b-0 \
     lg:top-0 max-w-xs lg:transition-all ease-linear lg:max-w-none lg:-left-0 lg:w-auto \
     bg-white dark:bg-darkBg lg:bg-transparent lg:dark:bg-transparent lg:h-max lg:visible \
     lg:relative lg:flex";

const BAR_BASE: &str = "w-6 h-0.5 rounded-full bg-gray-500 dark:bg-gray-200 transition-all \
     duration-300 ease-linear";

/// Scroll-threshold rule for the header.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HeaderChrome {
    /// Offset at or above which the header is drawn opaque with a shadow.
    pub scroll_threshold: i32,
}

impl Default for HeaderChrome {
    fn default() -> Self {
        Self {
            scroll_threshold: DEFAULT_SCROLL_THRESHOLD,
        }
    }
}

impl HeaderChrome {
    /// Rule with a custom threshold.
    pub fn new(scroll_threshold: i32) -> Self {
        Self { scroll_threshold }
    }

    /// Exactly the threshold counts as scrolled.
    pub fn is_scrolled(&self, scroll_y: i32) -> bool {
        scroll_y >= self.scroll_threshold
    }

    /// Full class attribute for `<header>`.
    pub fn header_class(&self, scroll_y: i32) -> String {
        let treatment = if self.is_scrolled(scroll_y) {
            HEADER_SCROLLED
        } else {
            HEADER_TRANSPARENT
        };
        format!("{HEADER_BASE} {treatment}")
    }
}

/// Full-screen backdrop behind the open menu.
pub fn backdrop_class(state: MenuState) -> String {
    let display = if state.is_open() { "flex" } else { "hidden" };
    format!("{BACKDROP_BASE} {display}")
}

/// Slide-in navigation panel (always visible on large screens).
pub fn panel_class(state: MenuState) -> String {
    let position = if state.is_open() {
        "!-left-0 transition-all"
    } else {
        "-left-full lg:-left-0"
    };
    format!("{PANEL_BASE} {position}")
}

/// Classes for the three toggle bars; `Open` folds them into an X.
pub fn toggle_bar_classes(state: MenuState) -> [String; 3] {
    let open = state.is_open();
    let top = if open {
        "translate-y-1.5 rotate-[40deg] scale-x-100"
    } else {
        "scale-x-50 origin-left"
    };
    let middle = if open {
        "mt-1 scale-75 origin-left scale-x-0 opacity-0"
    } else {
        "mt-1 scale-75 origin-left"
    };
    let bottom = if open {
        "mt-1 -translate-y-1.5 -rotate-[40deg] scale-x-100"
    } else {
        "mt-1 scale-x-75 origin-left"
    };
    [
        format!("{BAR_BASE} {top}"),
        format!("{BAR_BASE} {middle}"),
        format!("{BAR_BASE} {bottom}"),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn threshold_boundary_counts_as_scrolled() {
        let chrome = HeaderChrome::default();
        assert!(!chrome.is_scrolled(19));
        assert!(chrome.is_scrolled(20));
        assert!(chrome.is_scrolled(21));
    }

    #[test]
    fn no_hysteresis_when_scrolling_back() {
        let chrome = HeaderChrome::default();
        let classes: Vec<bool> = [19, 20, 0]
            .into_iter()
            .map(|y| chrome.header_class(y).contains("shadow-lg"))
            .collect();
        assert_eq!(classes, vec![false, true, false]);
    }

    #[test]
    fn transparent_header_has_no_background() {
        let class = HeaderChrome::default().header_class(0);
        assert!(class.ends_with("border-b-transparent"));
        assert!(!class.contains("bg-white"));
    }

    #[test]
    fn custom_threshold_is_respected() {
        let chrome = HeaderChrome::new(64);
        assert!(!chrome.is_scrolled(63));
        assert!(chrome.is_scrolled(64));
    }

    #[test]
    fn backdrop_and_panel_follow_menu_state() {
        assert!(backdrop_class(MenuState::Closed).ends_with("hidden"));
        assert!(backdrop_class(MenuState::Open).ends_with("flex"));
        assert!(panel_class(MenuState::Closed).contains("-left-full"));
        assert!(panel_class(MenuState::Open).contains("!-left-0"));
    }

    #[test]
    fn open_toggle_draws_an_x() {
        let [top, middle, bottom] = toggle_bar_classes(MenuState::Open);
        assert!(top.contains("rotate-[40deg]"));
        assert!(middle.contains("opacity-0"));
        assert!(bottom.contains("-rotate-[40deg]"));

        let closed = toggle_bar_classes(MenuState::Closed);
        assert!(closed.iter().all(|bar| !bar.contains("rotate")));
    }
}
