//! Header content supplied by the CMS.
//!
//! The CMS wraps every record in `data.attributes`, including nested media
//! relations. [`HeaderContent::from_cms_json`] unwraps that envelope into a
//! flat, clone-friendly value that components can render directly.
//!
//! ```rust
//! use community_site::content::HeaderContent;
//!
//! let json = r#"{
//!   "data": { "attributes": {
//!     "logoLight": { "data": { "attributes": { "url": "/uploads/light.svg" } } },
//!     "links": [ { "text": "About", "href": "/about-community", "externalLink": false } ]
//!   } }
//! }"#;
//!
//! let content = HeaderContent::from_cms_json(json).unwrap();
//! assert_eq!(content.logo_light.as_deref(), Some("/uploads/light.svg"));
//! assert_eq!(content.links[0].text, "About");
//! ```

use serde::Deserialize;

use crate::error::ContentError;

/// One entry of the navigation list. Rendered in input order.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NavLinkDescriptor {
    /// Visible label
    pub text: String,
    /// Target URL or site path
    pub href: String,
    /// Opens in a new tab when `true`
    #[serde(default)]
    pub external_link: bool,
}

impl NavLinkDescriptor {
    /// Site-internal link.
    pub fn internal(text: impl Into<String>, href: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            href: href.into(),
            external_link: false,
        }
    }

    /// Link leaving the site.
    pub fn external(text: impl Into<String>, href: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            href: href.into(),
            external_link: true,
        }
    }
}

/// Everything the header renders that comes from the CMS.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct HeaderContent {
    /// Logo for light theme (hidden below the `xs` breakpoint)
    pub logo_light: Option<String>,
    /// Logo for dark theme
    pub logo_dark: Option<String>,
    /// Monochrome logo for narrow screens
    pub logo_mono: Option<String>,
    /// Navigation entries, in display order
    pub links: Vec<NavLinkDescriptor>,
}

#[derive(Deserialize)]
struct Envelope<T> {
    data: Option<Record<T>>,
}

#[derive(Deserialize)]
struct Record<T> {
    attributes: T,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct HeaderAttributes {
    logo_light: Option<Envelope<MediaAttributes>>,
    logo_dark: Option<Envelope<MediaAttributes>>,
    logo_mono: Option<Envelope<MediaAttributes>>,
    #[serde(default)]
    links: Vec<NavLinkDescriptor>,
}

#[derive(Deserialize)]
struct MediaAttributes {
    url: String,
}

fn media_url(media: Option<Envelope<MediaAttributes>>) -> Option<String> {
    media?.data.map(|record| record.attributes.url)
}

impl HeaderContent {
    /// Decode the CMS single-type response for the header.
    pub fn from_cms_json(json: &str) -> Result<Self, ContentError> {
        let envelope: Envelope<HeaderAttributes> = serde_json::from_str(json)?;
        let attributes = envelope
            .data
            .ok_or(ContentError::MissingField("data"))?
            .attributes;

        Ok(Self {
            logo_light: media_url(attributes.logo_light),
            logo_dark: media_url(attributes.logo_dark),
            logo_mono: media_url(attributes.logo_mono),
            links: attributes.links,
        })
    }
}
