use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct ReferenceInputProps {
    /// Show the invalid-input border
    pub invalid: bool,
    /// Called with the raw text on every change
    pub on_input: EventHandler<String>,
}

/// Free-form field accepting an emoji URL, ID or markup
#[component]
pub fn ReferenceInput(props: ReferenceInputProps) -> Element {
    let border_class = if props.invalid {
        "border-red-400 focus:border-red-400"
    } else {
        "border-white/20 focus:border-blue-400"
    };

    let on_input = props.on_input;

    rsx! {
        input {
            r#type: "text",
            placeholder: "Custom Emoji (Url, Id, Syntax)",
            "aria-invalid": "{props.invalid}",
            class: "w-full px-4 py-2 bg-transparent border-2 rounded-md text-sm outline-none transition {border_class}",
            oninput: move |evt| on_input.call(evt.value()),
        }
    }
}
