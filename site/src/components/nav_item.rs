//! Single navigation entry

use leptos::prelude::*;

use crate::content::NavLinkDescriptor;

const LINK_CLASS: &str = "block py-2 lg:py-0 font-medium transition-colors \
     hover:text-primary dark:hover:text-primary";

/// One `<li>` of the header navigation.
///
/// External links open in a new tab without leaking the referrer.
#[component]
pub fn NavItem(link: NavLinkDescriptor) -> impl IntoView {
    let target = link.external_link.then_some("_blank");
    let rel = link.external_link.then_some("noreferrer");

    view! {
        <li>
            <a href=link.href class=LINK_CLASS target=target rel=rel>
                {link.text}
            </a>
        </li>
    }
}
