//! Page shell: header plus the call-to-action body.

use leptos::prelude::*;

use super::{AppHeader, CtaBounty};
use crate::config::SiteConfig;
use crate::content::HeaderContent;
use crate::surface::SharedSurface;

/// Page body - mounted directly in the browser, wrapped by [`SiteDocument`]
/// when pre-rendering.
#[component]
pub fn SitePage(
    /// Header content from the CMS
    content: HeaderContent,
    /// Site configuration
    config: SiteConfig,
    /// Host document capability
    surface: SharedSurface,
) -> impl IntoView {
    view! {
        <AppHeader content=content config=config surface=surface />
        <main class="pt-24 lg:pt-28">
            <CtaBounty />
        </main>
    }
}

/// The complete HTML document
#[component]
pub fn SiteDocument(
    /// Header content from the CMS
    content: HeaderContent,
    /// Site configuration
    config: SiteConfig,
    /// Host document capability
    surface: SharedSurface,
) -> impl IntoView {
    let stylesheet = config
        .stylesheet_href
        .clone()
        .map(|href| view! { <link rel="stylesheet" href=href /> });

    view! {
        <html lang="en">
            <head>
                <meta charset="UTF-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <title>"Strapi Community"</title>
                {stylesheet}
            </head>
            <body>
                <SitePage content=content config=config surface=surface />
            </body>
        </html>
    }
}
