use dioxus::prelude::*;

use crate::components::icons::CopyIcon;
use crate::stores::preview::CopyMode;

#[derive(Props, Clone, PartialEq)]
pub struct CopyModeToggleProps {
    pub mode: CopyMode,
    pub on_change: EventHandler<CopyMode>,
}

/// Segmented toggle choosing whether a click copies the key or the markup
#[component]
pub fn CopyModeToggle(props: CopyModeToggleProps) -> Element {
    let on_change = props.on_change;

    rsx! {
        div {
            class: "flex items-center gap-2 w-full",
            CopyIcon { class: "w-4 h-4 opacity-70 flex-shrink-0" }
            div {
                class: "flex w-full rounded-md overflow-hidden border border-white/20",
                for mode in CopyMode::ALL {
                    button {
                        key: "{mode.as_str()}",
                        class: if mode == props.mode {
                            "flex-1 px-3 py-1.5 text-sm font-medium bg-[#5961ec] text-white"
                        } else {
                            "flex-1 px-3 py-1.5 text-sm hover:bg-white/10 transition"
                        },
                        onclick: move |_| on_change.call(mode),
                        "{mode.label()}"
                    }
                }
            }
        }
    }
}
