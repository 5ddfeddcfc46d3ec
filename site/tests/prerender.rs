//! Static rendering of the page with CMS content.

use community_site::chrome::{HeaderChrome, backdrop_class, panel_class};
use community_site::config::SiteConfig;
use community_site::content::{HeaderContent, NavLinkDescriptor};
use community_site::nav::MenuState;
use community_site::render_page;

fn community_links() -> Vec<NavLinkDescriptor> {
    vec![
        NavLinkDescriptor::internal("About", "/about-community"),
        NavLinkDescriptor::internal("Showcases", "/showcases"),
        NavLinkDescriptor::internal("Articles", "/articles"),
        NavLinkDescriptor::internal("Bounty", "/bounty"),
        NavLinkDescriptor::external("Forum", "https://forum.strapi.io/"),
    ]
}

fn render_with_links() -> String {
    let content = HeaderContent {
        links: community_links(),
        ..Default::default()
    };
    render_page(&content, &SiteConfig::default())
}

/// The opening tag that carries `attr`, from `<` to `>`.
fn tag_containing<'a>(html: &'a str, attr: &str) -> &'a str {
    let at = html.find(attr).unwrap_or_else(|| panic!("{attr} not rendered"));
    let start = html[..=at].rfind('<').expect("tag start");
    let end = at + html[at..].find('>').expect("tag end");
    &html[start..=end]
}

#[test]
fn links_render_in_input_order() {
    let html = render_with_links();
    let positions: Vec<usize> = community_links()
        .iter()
        .map(|link| {
            html.find(&format!(r#"href="{}""#, link.href))
                .unwrap_or_else(|| panic!("{} missing", link.href))
        })
        .collect();

    assert!(positions.windows(2).all(|pair| pair[0] < pair[1]));
}

#[test]
fn external_links_open_in_new_tab() {
    let html = render_with_links();

    let forum = tag_containing(&html, r#"href="https://forum.strapi.io/""#);
    assert!(forum.contains(r#"target="_blank""#));
    assert!(forum.contains(r#"rel="noreferrer""#));

    let about = tag_containing(&html, r#"href="/about-community""#);
    assert!(!about.contains("target="));
    assert!(!about.contains("rel="));
}

#[test]
fn prerendered_menu_is_closed() {
    let html = render_with_links();

    let backdrop = tag_containing(&html, r#"data-role="nav-backdrop""#);
    assert!(backdrop.contains(&backdrop_class(MenuState::Closed)));

    let panel = tag_containing(&html, r#"data-role="nav-panel""#);
    assert!(panel.contains(&panel_class(MenuState::Closed)));

    let toggle = tag_containing(&html, r#"data-role="nav-toggle""#);
    assert!(toggle.contains(r#"aria-expanded="false""#));
}

#[test]
fn prerendered_chrome_is_transparent() {
    let html = render_with_links();
    let header = tag_containing(&html, "<header");

    assert!(header.contains(&HeaderChrome::default().header_class(0)));
    assert!(!header.contains("shadow-lg"));
}

#[test]
fn custom_social_links_are_used() {
    let mut config = SiteConfig::default();
    config.social.github_url = "https://github.com/example/".into();
    let html = render_page(&HeaderContent::default(), &config);

    assert!(html.contains(r#"href="https://github.com/example/""#));
}
