use dioxus::prelude::*;
use gloo_timers::future::TimeoutFuture;

use crate::config::AppConfig;
use crate::utils::clock::current_clock;

/// Local date and time, refreshed every tick
///
/// The ticking task belongs to this component and stops when it unmounts.
#[component]
pub fn LiveClock() -> Element {
    let config = use_context::<AppConfig>();
    let tick_ms = config.clock_tick_ms;
    let mut now = use_signal(current_clock);

    use_future(move || async move {
        loop {
            TimeoutFuture::new(tick_ms).await;
            now.set(current_clock());
        }
    });

    rsx! {
        div {
            class: "flex items-center justify-between",
            span {
                class: "text-base cursor-default",
                title: "{config.clock_tooltip}",
                "{now}"
            }
        }
    }
}
