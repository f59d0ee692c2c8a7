use dioxus::prelude::*;
use dioxus_primitives::toast::{consume_toast, ToastOptions};

use crate::components::{
    CategorySection, ChatPreview, CopyModeToggle, ExternalLinks, LiveClock, PreviewTheme,
    ReferenceInput,
};
use crate::config::AppConfig;
use crate::services::emoji_api::{fetch_catalog, EmojiEntry};
use crate::stores::preview::{CopyMode, InputOutcome, PreviewState};
use crate::utils::clipboard::copy_to_clipboard;

/// The emoji browser: previews and controls on the side, catalog grid in the main pane
#[component]
pub fn Home() -> Element {
    let config = use_context::<AppConfig>();
    let mut preview = use_signal(PreviewState::default);
    let mut copy_mode = use_signal(CopyMode::default);
    let toast = consume_toast();

    // The page renders nothing until the catalog request settles
    let catalog_url = config.catalog_url.clone();
    let catalog_resource = use_resource(move || {
        let url = catalog_url.clone();
        async move { fetch_catalog(&url).await }
    });

    let toast_duration = config.toast_duration;
    let on_select = use_callback(move |entry: EmojiEntry| {
        preview.write().select(entry.url.clone());

        let text = copy_mode().clipboard_text(&entry).to_string();
        let toast_api = toast.clone();
        spawn(async move {
            match copy_to_clipboard(&text).await {
                Ok(()) => {
                    toast_api.success(
                        format!("Emoji {} copied to clipboard", text),
                        ToastOptions::new()
                            .duration(toast_duration)
                            .permanent(false),
                    );
                }
                Err(e) => {
                    log::warn!("Failed to copy {} to clipboard: {}", text, e);
                    toast_api.error(
                        "Copy failed".to_string(),
                        ToastOptions::new()
                            .description(e.as_str())
                            .duration(toast_duration)
                            .permanent(false),
                    );
                }
            }
        });
    });

    let on_input = move |value: String| {
        let outcome = preview.write().apply_input(&value);
        if let InputOutcome::Recognized(reference) = outcome {
            log::debug!("Previewing custom emoji {}", reference.id);
        }
    };

    let loaded = catalog_resource.read_unchecked();
    let catalog = match loaded.as_ref() {
        None => {
            return rsx! {
                div { class: "min-h-screen bg-[#4b4f56]" }
            }
        }
        // A failed fetch renders as an empty catalog
        Some(catalog) => catalog.as_ref(),
    };

    let (image_url, invalid) = {
        let state = preview.read();
        (
            state.display_url(&config.fallback_preview_url).to_string(),
            state.is_invalid(),
        )
    };

    rsx! {
        div {
            class: "flex flex-col md:flex-row min-h-screen bg-[#4b4f56] text-white overflow-hidden",

            // Side pane
            aside {
                class: "z-10 w-full md:w-1/4 min-w-[340px] h-[50vh] md:h-screen p-4 bg-[#36393f] rounded-2xl md:rounded-none overflow-auto [scrollbar-width:none]",

                LiveClock {}
                div { class: "h-px bg-white/30 mt-1 mb-3" }

                div {
                    class: "flex flex-col gap-2 w-full",
                    ChatPreview { image_url: image_url.clone(), avatar_url: config.avatar_url.clone(), theme: PreviewTheme::Light }
                    ChatPreview { image_url: image_url.clone(), avatar_url: config.avatar_url.clone(), theme: PreviewTheme::Light, jumbo: true }
                    ChatPreview { image_url: image_url.clone(), avatar_url: config.avatar_url.clone(), theme: PreviewTheme::Dark }
                    ChatPreview { image_url: image_url.clone(), avatar_url: config.avatar_url.clone(), theme: PreviewTheme::Dark, jumbo: true }
                }
                div { class: "h-px bg-white/30 my-3" }

                ReferenceInput { invalid, on_input }
                div { class: "h-px bg-white/30 my-3" }

                CopyModeToggle {
                    mode: copy_mode(),
                    on_change: move |mode| copy_mode.set(mode),
                }
                div { class: "h-px bg-white/30 my-3" }

                ExternalLinks {}
            }

            // Catalog grid
            main {
                class: "flex flex-col w-auto p-4 h-[45vh] md:h-screen overflow-auto [scrollbar-width:none]",
                for category in catalog.into_iter().flat_map(|catalog| catalog.visible_categories()) {
                    CategorySection {
                        key: "{category.name}",
                        category: category.clone(),
                        on_select,
                    }
                }
            }
        }
    }
}
