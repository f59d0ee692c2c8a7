use dioxus::prelude::*;

use crate::components::icons::ExternalLinkIcon;
use crate::config::AppConfig;

#[component]
fn LinkButton(href: String, label: String, class: String) -> Element {
    rsx! {
        a {
            href: "{href}",
            target: "_blank",
            rel: "noopener noreferrer",
            class: "flex items-center justify-center gap-2 px-3 py-2 border rounded-md text-sm font-medium truncate transition {class}",
            "{label}"
            ExternalLinkIcon {}
        }
    }
}

/// Help, API and Status Bot links
#[component]
pub fn ExternalLinks() -> Element {
    let config = use_context::<AppConfig>();

    rsx! {
        div {
            class: "flex flex-col gap-2 w-full",
            div {
                class: "grid grid-cols-2 gap-1.5",
                LinkButton {
                    href: config.help_url.clone(),
                    label: "Help".to_string(),
                    class: "border-red-300 text-red-300 hover:bg-red-300/10".to_string(),
                }
                LinkButton {
                    href: config.catalog_url.clone(),
                    label: "API".to_string(),
                    class: "border-green-300 text-green-300 hover:bg-green-300/10".to_string(),
                }
            }
            LinkButton {
                href: config.status_bot_url.clone(),
                label: "Status Bot".to_string(),
                class: "border-blue-300 text-blue-300 hover:bg-blue-300/10".to_string(),
            }
        }
    }
}
