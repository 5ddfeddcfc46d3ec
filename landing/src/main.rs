// Community landing page - Leptos 0.8 CSR entry point

mod logging;

use community_site::config::SiteConfig;
use community_site::content::HeaderContent;

// Header content snapshot exported from the CMS at build time.
const HEADER_JSON: &str = include_str!("../content/header.json");
const SITE_TOML: &str = include_str!("../site.toml");

fn main() {
    console_error_panic_hook::set_once();
    logging::init();

    let config = SiteConfig::from_toml_str(SITE_TOML).unwrap_or_else(|e| {
        tracing::warn!("site.toml invalid, using defaults: {e}");
        SiteConfig::default()
    });

    let content = match HeaderContent::from_cms_json(HEADER_JSON) {
        Ok(content) => content,
        Err(e) => {
            tracing::error!("header content unusable: {e}");
            HeaderContent::default()
        }
    };

    tracing::info!(links = content.links.len(), "mounting community page");
    community_site::mount_page(content, config);
}
