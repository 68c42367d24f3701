use crate::decor::{date_animation, BUTTON_TRANSITION};
use crate::settings::{Section, SectionLink};
use dioxus::prelude::*;

pub const SECTION_CLASS: &str = "section";

/// Text block that fades in the first time it scrolls into view.
#[component]
pub fn PageSection(section: Section) -> Element {
    let date_style = section
        .date
        .as_deref()
        .and_then(date_animation)
        .map(|animation| format!("animation: {animation};"))
        .unwrap_or_default();

    rsx! {
        section { class: SECTION_CLASS,
            h2 { class: "section-title", "{section.heading}" }
            if let Some(date) = section.date.as_ref() {
                p { class: "date-info", style: date_style, "{date}" }
            }
            if !section.body.is_empty() {
                p { class: "section-body", "{section.body}" }
            }
            if let Some(link) = section.link.clone() {
                PageButton { link }
            }
        }
    }
}

#[component]
fn PageButton(link: SectionLink) -> Element {
    let mut hovered = use_signal(|| false);
    let style = if hovered() {
        format!("transition: {BUTTON_TRANSITION};")
    } else {
        String::new()
    };

    rsx! {
        a {
            class: "button",
            href: "{link.href}",
            target: "_blank",
            rel: "noopener",
            style,
            onmouseenter: move |_| {
                if !hovered() {
                    hovered.set(true);
                }
            },
            "{link.label}"
        }
    }
}
