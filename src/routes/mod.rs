use dioxus::prelude::*;

pub mod home;

use home::Home;

/// App routes
#[derive(Clone, Routable, Debug, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[route("/")]
    Home {},

    #[route("/:..segments")]
    NotFound { segments: Vec<String> },
}

#[component]
fn NotFound(segments: Vec<String>) -> Element {
    let path = segments.join("/");

    rsx! {
        div {
            class: "min-h-screen flex flex-col items-center justify-center gap-4 bg-[#4b4f56] text-white",
            h1 {
                class: "text-2xl font-bold",
                "Page not found"
            }
            p {
                class: "text-sm opacity-70",
                "Nothing lives at /{path}"
            }
            Link {
                to: Route::Home {},
                class: "px-4 py-2 rounded-md bg-[#5961ec] hover:bg-[#4a52d9] transition",
                "Back to emojis"
            }
        }
    }
}
