//! Decorative background blobs, animated by the mount sequence.

use dioxus::prelude::*;
use portfolio_core::types::Target;

pub fn Backdrop() -> Element {
    rsx! {
        div { class: "absolute inset-0 overflow-hidden pointer-events-none",
            div {
                id: Target::BackgroundPulse(0).dom_id(),
                class: "absolute -top-40 -right-40 w-80 h-80 bg-red-500/10 rounded-full blur-3xl",
            }
            div {
                id: Target::BackgroundPulse(1).dom_id(),
                class: "absolute -bottom-40 -left-40 w-80 h-80 bg-blue-500/10 rounded-full blur-3xl",
            }
        }
    }
}
