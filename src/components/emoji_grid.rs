use dioxus::prelude::*;

use crate::config::AppConfig;
use crate::services::emoji_api::{EmojiCategory, EmojiEntry};
use crate::utils::format::{category_grid_max_width, category_label};

#[derive(Props, Clone, PartialEq)]
pub struct CategorySectionProps {
    pub category: EmojiCategory,
    pub on_select: EventHandler<EmojiEntry>,
}

/// Heading plus thumbnail grid for one category
#[component]
pub fn CategorySection(props: CategorySectionProps) -> Element {
    let config = use_context::<AppConfig>();
    let label = category_label(&props.category.name);
    let max_width = category_grid_max_width(props.category.len());

    rsx! {
        section {
            class: "p-2 text-center font-bold",

            div {
                class: "flex items-center justify-center",
                div { class: "flex-1 h-px bg-white/30" }
                h2 {
                    class: "mx-2 text-2xl",
                    "{label}"
                }
                div { class: "flex-1 h-px bg-white/30" }
            }

            div {
                class: "grid gap-2 mx-2 mt-2 -mb-2 grid-cols-[repeat(auto-fill,minmax(100px,1fr))]",
                style: "max-width: {max_width}px",
                for (index, entry) in props.category.entries.values().enumerate() {
                    EmojiTile {
                        key: "{entry.key}",
                        entry: entry.clone(),
                        lazy: config.is_lazy_image(index),
                        on_select: props.on_select,
                    }
                }
            }
        }
    }
}

#[derive(Props, Clone, PartialEq)]
pub struct EmojiTileProps {
    pub entry: EmojiEntry,
    /// Defer the image load until scrolled into view
    #[props(default = false)]
    pub lazy: bool,
    pub on_select: EventHandler<EmojiEntry>,
}

#[component]
pub fn EmojiTile(props: EmojiTileProps) -> Element {
    let entry = props.entry.clone();
    let on_select = props.on_select;
    let loading = if props.lazy { "lazy" } else { "eager" };

    rsx! {
        button {
            class: "flex h-20 aspect-square p-1 rounded-xl cursor-pointer hover:bg-white/10 transition-all duration-200",
            title: ":{props.entry.name}:",
            onclick: move |_| on_select.call(entry.clone()),
            img {
                src: "{props.entry.url}",
                alt: "{props.entry.key}",
                class: "w-full h-full object-contain select-none",
                draggable: "false",
                "loading": loading,
            }
        }
    }
}
