//! Basic page pre-render example.
//!
//! Run with: `cargo run --example basic_page`

use community_site::{
    config::SiteConfig,
    content::{HeaderContent, NavLinkDescriptor},
    render_page,
};

fn main() {
    // Header content as the CMS would supply it
    let content = HeaderContent {
        logo_light: Some("/uploads/logo_light.svg".into()),
        links: vec![
            NavLinkDescriptor::internal("About", "/about-community"),
            NavLinkDescriptor::internal("Articles", "/articles"),
            NavLinkDescriptor::external("Forum", "https://forum.strapi.io/"),
        ],
        ..Default::default()
    };

    // Render to HTML
    let html = render_page(&content, &SiteConfig::default());

    // Write to file
    let output_path = "basic_page.html";
    std::fs::write(output_path, &html).expect("Failed to write page");

    println!("Page written to: {}", output_path);
    println!("HTML size: {} bytes", html.len());
}
