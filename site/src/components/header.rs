//! Site header - scroll-aware chrome plus the collapsible mobile menu.
//!
//! The header owns one [`ScrollObserver`] subscription and one
//! [`NavController`]. Backdrop, panel and toggle all read the same controller
//! signal, so they switch in the same reactive update. Clicking the backdrop or
//! any link (the click bubbles to the `<ul>`) closes the menu while the browser
//! follows the link.

use leptos::prelude::*;

use super::{AppContainer, DiscordIcon, GithubIcon, NavItem};
use crate::chrome::{HeaderChrome, backdrop_class, panel_class, toggle_bar_classes};
use crate::config::SiteConfig;
use crate::content::HeaderContent;
use crate::nav::{MenuState, NavController};
use crate::scroll::{ScrollObserver, Subscription};
use crate::surface::SharedSurface;

const SOCIAL_LINK_CLASS: &str = "outline-none rounded-md p-1.5 sm:p-2.5 hover:bg-gray-100 \
     dark:hover:bg-darkCard text-gray-500 dark:text-gray-200";

/// Keeps the observer alive for as long as the header is mounted.
struct ScrollBinding {
    _subscription: Subscription,
    _observer: ScrollObserver,
}

/// Reactive state behind [`AppHeader`]: the observed scroll offset and the
/// menu controller, plus the handlers the header's click targets call.
///
/// Create it inside a reactive owner. The scroll subscription is released
/// when that owner is cleaned up.
#[derive(Clone, Copy)]
pub struct HeaderState {
    chrome: HeaderChrome,
    scroll_y: RwSignal<i32>,
    controller: RwSignal<NavController, LocalStorage>,
}

impl HeaderState {
    /// Subscribe to scroll updates and start with the menu closed.
    pub fn new(chrome: HeaderChrome, surface: SharedSurface) -> Self {
        let observer = ScrollObserver::new(surface.clone());
        let scroll_y = RwSignal::new(observer.current_scroll_y());
        let subscription = observer.subscribe(move |y| {
            // None once the signal is disposed during teardown.
            scroll_y.try_set(y);
        });
        let binding = StoredValue::new_local(Some(ScrollBinding {
            _subscription: subscription,
            _observer: observer,
        }));
        on_cleanup(move || {
            binding.try_update_value(|binding| binding.take());
        });

        Self {
            chrome,
            scroll_y,
            controller: RwSignal::new_local(NavController::new(surface)),
        }
    }

    /// Latest scroll offset seen by the header.
    pub fn scroll_y(&self) -> i32 {
        self.scroll_y.get()
    }

    /// Class attribute for `<header>` at the current offset.
    pub fn header_class(&self) -> String {
        self.chrome.header_class(self.scroll_y())
    }

    /// Current menu state.
    pub fn menu(&self) -> MenuState {
        self.controller.with(NavController::state)
    }

    /// Whether the document scroll lock is held.
    pub fn lock_held(&self) -> bool {
        self.controller.with(NavController::lock_held)
    }

    /// Menu toggle button.
    pub fn on_toggle(&self) {
        self.controller.update(|nav| {
            nav.toggle();
        });
    }

    /// Click on the backdrop.
    pub fn on_backdrop(&self) {
        self.close();
    }

    /// Click on a navigation link. The browser follows the link.
    pub fn on_link(&self) {
        self.close();
    }

    fn close(&self) {
        self.controller.update(|nav| {
            nav.close();
        });
    }
}

/// The fixed site header.
#[component]
pub fn AppHeader(
    /// Logos and navigation links from the CMS
    content: HeaderContent,
    /// Site configuration (threshold, CMS base URL, social links)
    config: SiteConfig,
    /// Host document capability
    surface: SharedSurface,
) -> impl IntoView {
    let state = HeaderState::new(config.chrome(), surface);
    let menu = move || state.menu();
    let on_toggle = Callback::new(move |_: ()| state.on_toggle());

    let logo = |src: Option<String>, class: &'static str| {
        src.map(|src| {
            view! {
                <img width="80" height="40" alt="Strapi" src=config.asset_url(&src) class=class />
            }
        })
    };
    let logo_light = logo(content.logo_light, "w-auto h-8 hidden xs:flex dark:hidden");
    let logo_dark = logo(content.logo_dark, "w-auto h-8 hidden xs:dark:flex");
    let logo_mono = logo(content.logo_mono, "w-auto h-8 xs:hidden");

    let links = content
        .links
        .into_iter()
        .map(|link| view! { <NavItem link=link /> })
        .collect_view();

    view! {
        <div class=move || backdrop_class(menu()) data-role="nav-backdrop" on:click=move |_| state.on_backdrop()></div>

        <header class=move || state.header_class()>
            <AppContainer class="relative lg:!px-6 xl:!px-4">
                <nav class="flex items-center justify-between">
                    // site logo
                    <div>
                        <a href="/">{logo_light} {logo_dark} {logo_mono}</a>
                    </div>

                    // site navigation
                    <div class=move || panel_class(menu()) data-role="nav-panel">
                        <ul
                            class="flex flex-col lg:flex-row lg:items-center gap-y-3 lg:gap-x-4 text-title dark:text-gray-100"
                            on:click=move |_| state.on_link()
                        >
                            {links}
                        </ul>
                    </div>

                    // action links
                    <div class="flex items-center gap-3 min-w-max">
                        <div class="flex gap-2">
                            <a href=config.social.github_url.clone() target="_blank" rel="noreferrer" class=SOCIAL_LINK_CLASS>
                                <span class="sr-only">"Github"</span>
                                <GithubIcon />
                            </a>
                            <a href=config.social.discord_url.clone() target="_blank" rel="noreferrer" class=SOCIAL_LINK_CLASS>
                                <span class="sr-only">"Discord"</span>
                                <DiscordIcon />
                            </a>
                        </div>
                        <div class="lg:hidden pl-2 border-l border-l-gray-200 relative">
                            <MenuToggle state=Signal::derive(menu) on_toggle=on_toggle />
                        </div>
                    </div>
                </nav>
            </AppContainer>
        </header>
    }
}

/// Three-bar menu button; folds into an X while the menu is open.
#[component]
pub fn MenuToggle(
    /// Current menu state
    state: Signal<MenuState>,
    /// Invoked on every click
    on_toggle: Callback<()>,
) -> impl IntoView {
    let bar = move |idx: usize| move || toggle_bar_classes(state.get())[idx].clone();

    view! {
        <button
            class="outline-none w-7 h-auto flex flex-col relative"
            data-role="nav-toggle"
            aria-expanded=move || state.get().is_open().to_string()
            on:click=move |_| on_toggle.run(())
        >
            <span class="sr-only">"toggle navbar"</span>
            <span class=bar(0)></span>
            <span class=bar(1)></span>
            <span class=bar(2)></span>
        </button>
    }
}
