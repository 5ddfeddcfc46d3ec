//! Leptos UI components for the community site.
//!
//! # Component Hierarchy
//!
//! ```text
//! SiteDocument (pre-render only)
//! └── SitePage
//!     ├── AppHeader
//!     │   ├── backdrop (visible while the menu is open)
//!     │   ├── AppContainer
//!     │   │   ├── logo link
//!     │   │   ├── nav panel → NavItem*
//!     │   │   ├── GithubIcon / DiscordIcon
//!     │   │   └── MenuToggle
//!     └── main
//!         └── CtaBounty
//!             ├── Paragraph
//!             └── BtnLink
//! ```
//!
//! # Usage
//!
//! Components are typically used via [`crate::render_page`] or
//! `crate::mount_page`, but can be composed directly:
//!
//! ```rust,ignore
//! use leptos::prelude::*;
//! use community_site::components::AppHeader;
//! use community_site::surface::HeadlessSurface;
//!
//! view! {
//!     <AppHeader content=content config=config surface=HeadlessSurface::shared() />
//! }
//! ```

mod atoms;
mod cta_bounty;
mod document;
mod header;
mod icons;
mod nav_item;

pub use atoms::{AppContainer, BtnKind, BtnLink, BtnVariant, Paragraph};
pub use cta_bounty::CtaBounty;
pub use document::{SiteDocument, SitePage};
pub use header::{AppHeader, HeaderState, MenuToggle};
pub use icons::*;
pub use nav_item::NavItem;
