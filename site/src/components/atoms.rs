//! Small layout and typography building blocks.

use leptos::prelude::*;

/// Centered, padded page-width wrapper.
#[component]
pub fn AppContainer(
    /// Extra classes appended to the container
    #[prop(optional, into)]
    class: String,
    children: Children,
) -> impl IntoView {
    let class = format!("mx-auto w-full max-w-7xl px-5 sm:px-10 md:px-12 lg:px-5 {class}");
    view! { <div class=class>{children()}</div> }
}

/// Body copy paragraph.
#[component]
pub fn Paragraph(
    /// Extra classes
    #[prop(optional, into)]
    class: String,
    children: Children,
) -> impl IntoView {
    let class = format!("text-gray-700 dark:text-gray-300 {class}");
    view! { <p class=class>{children()}</p> }
}

/// Colour scheme of a [`BtnLink`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum BtnVariant {
    /// Brand colour
    #[default]
    Primary,
    /// Neutral
    Secondary,
}

/// Fill style of a [`BtnLink`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum BtnKind {
    /// Solid background
    #[default]
    Fill,
    /// Border only
    Outline,
}

fn btn_class(variant: BtnVariant, kind: BtnKind) -> &'static str {
    match (variant, kind) {
        (BtnVariant::Primary, BtnKind::Fill) => "bg-primary text-white hover:bg-primary/90",
        (BtnVariant::Primary, BtnKind::Outline) => {
            "border border-primary text-primary hover:bg-primary hover:text-white"
        }
        (BtnVariant::Secondary, BtnKind::Fill) => "bg-title1 text-white dark:bg-white dark:text-title1",
        (BtnVariant::Secondary, BtnKind::Outline) => {
            "border border-gray-300 text-title1 dark:border-gray-600 dark:text-white"
        }
    }
}

/// Anchor styled as a button.
#[component]
pub fn BtnLink(
    /// Label
    #[prop(into)]
    text: String,
    /// Target
    #[prop(into)]
    href: String,
    #[prop(optional)] variant: BtnVariant,
    #[prop(optional)] kind: BtnKind,
) -> impl IntoView {
    let class = format!(
        "inline-flex items-center justify-center px-6 py-3 rounded-md font-semibold transition-colors {}",
        btn_class(variant, kind)
    );
    view! { <a href=href class=class>{text}</a> }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn button_styles_differ_per_combination() {
        let styles = [
            btn_class(BtnVariant::Primary, BtnKind::Fill),
            btn_class(BtnVariant::Primary, BtnKind::Outline),
            btn_class(BtnVariant::Secondary, BtnKind::Fill),
            btn_class(BtnVariant::Secondary, BtnKind::Outline),
        ];
        for (i, a) in styles.iter().enumerate() {
            for b in &styles[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }
}
