use dioxus::prelude::*;

/// Chat client color scheme a preview is drawn in
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PreviewTheme {
    Light,
    Dark,
}

impl PreviewTheme {
    fn container_class(&self) -> &'static str {
        match self {
            PreviewTheme::Light => "bg-white hover:bg-[#f7f7f7]",
            PreviewTheme::Dark => "bg-[#313338] hover:bg-[#2e3035]",
        }
    }

    fn text_class(&self) -> &'static str {
        match self {
            PreviewTheme::Light => "text-black",
            PreviewTheme::Dark => "text-white",
        }
    }
}

#[derive(Props, Clone, PartialEq)]
pub struct ChatPreviewProps {
    /// Emoji image to show in the message
    pub image_url: String,
    pub avatar_url: String,
    pub theme: PreviewTheme,
    /// Emoji-only message, rendered at jumbo size
    #[props(default = false)]
    pub jumbo: bool,
}

/// A fake chat message showing the emoji the way a chat client renders it
#[component]
pub fn ChatPreview(props: ChatPreviewProps) -> Element {
    let container_class = props.theme.container_class();
    let text_class = props.theme.text_class();

    rsx! {
        div {
            class: "flex w-full p-4 rounded-md overflow-hidden cursor-pointer transition-all duration-300 {container_class}",

            img {
                src: "{props.avatar_url}",
                alt: "avatar",
                class: "w-10 h-10 rounded-full mr-2 flex-shrink-0",
                draggable: "false",
            }

            div {
                class: "flex flex-col",
                span {
                    class: "font-medium tracking-wide -mt-1 {text_class}",
                    "Discord"
                }

                if props.jumbo {
                    div {
                        class: "inline-block",
                        img {
                            src: "{props.image_url}",
                            alt: "emoji",
                            class: "inline-block w-10 h-10 object-cover -mb-1",
                            draggable: "false",
                        }
                        img {
                            src: "{props.image_url}",
                            alt: "emoji",
                            class: "inline-block w-10 h-10 object-cover -mb-1 ml-1",
                            draggable: "false",
                        }
                    }
                } else {
                    p {
                        class: "text-sm {text_class}",
                        "Never gonna give you up."
                        img {
                            src: "{props.image_url}",
                            alt: "emoji",
                            class: "inline-block w-5 h-5 object-cover ml-1 -mb-1",
                            draggable: "false",
                        }
                        img {
                            src: "{props.image_url}",
                            alt: "emoji",
                            class: "inline-block w-5 h-5 object-cover ml-1 -mb-1",
                            draggable: "false",
                        }
                    }
                }
            }
        }
    }
}
