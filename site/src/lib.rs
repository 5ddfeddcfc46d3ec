//! # community-site
//!
//! Leptos components for the community site header and its call-to-action
//! sections.
//!
//! The header is the only stateful piece:
//!
//! - **Scroll observer** ([`scroll`]) - reports the viewport's vertical offset;
//!   the header turns opaque at [`chrome::DEFAULT_SCROLL_THRESHOLD`] pixels.
//! - **Navigation controller** ([`nav`]) - open/closed mobile menu whose state
//!   is mirrored by a document scroll lock.
//! - **Display surface** ([`surface`]) - the capability both of them are built
//!   on; headless while pre-rendering, web-sys backed in the browser.
//!
//! ## Quick Start
//!
//! ```rust
//! use community_site::{render_page, config::SiteConfig, content::{HeaderContent, NavLinkDescriptor}};
//!
//! let content = HeaderContent {
//!     links: vec![NavLinkDescriptor::internal("About", "/about-community")],
//!     ..Default::default()
//! };
//!
//! let html = render_page(&content, &SiteConfig::default());
//! assert!(html.starts_with("<!DOCTYPE html>"));
//! assert!(html.contains("About"));
//! ```
//!
//! In the browser (feature `csr`) use `mount_page`, which binds the header to
//! the live window.

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod chrome;
pub mod components;
pub mod config;
pub mod content;
pub mod error;
pub mod nav;
pub mod scroll;
pub mod surface;

use components::SiteDocument;
use config::SiteConfig;
use content::HeaderContent;
use leptos::prelude::*;
use leptos::reactive::owner::Owner;
use leptos::tachys::view::RenderHtml;
use surface::HeadlessSurface;

/// Pre-render the full page to an HTML string.
///
/// Rendering happens without a display surface: the menu is closed, the
/// header chrome is transparent and no listeners are registered.
///
/// # Example
///
/// ```rust
/// use community_site::{render_page, config::SiteConfig, content::HeaderContent};
///
/// let html = render_page(&HeaderContent::default(), &SiteConfig::default());
/// assert!(html.contains("<header"));
/// ```
pub fn render_page(content: &HeaderContent, config: &SiteConfig) -> String {
    let owner = Owner::new();
    let html = owner.with(|| {
        let doc = view! {
            <SiteDocument
                content=content.clone()
                config=config.clone()
                surface=HeadlessSurface::shared()
            />
        };
        doc.to_html()
    });
    owner.cleanup();

    // Leptos doesn't include DOCTYPE, so we add it
    format!("<!DOCTYPE html>\n{}", html)
}

/// Mount the page into the live document body.
///
/// Falls back to a headless surface when no window is reachable, in which
/// case the page still renders but scroll tracking and locking are inert.
#[cfg(feature = "csr")]
pub fn mount_page(content: HeaderContent, config: SiteConfig) {
    use components::SitePage;
    use std::rc::Rc;
    use surface::{BrowserSurface, SharedSurface};

    let surface: SharedSurface = match BrowserSurface::detect(config.header.scroll_lock_class.clone()) {
        Some(browser) => Rc::new(browser),
        None => {
            tracing::debug!("no window; mounting with headless surface");
            HeadlessSurface::shared()
        }
    };

    leptos::mount::mount_to_body(move || {
        view! { <SitePage content=content config=config surface=surface /> }
    });
}
