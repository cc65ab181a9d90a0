//! Page header — name and tagline.

use dioxus::prelude::*;
use portfolio_core::types::Target;
use portfolio_core::view::Header;

#[derive(Clone, PartialEq, Props)]
pub struct HeroProps {
    header: Header,
}

pub fn Hero(props: HeroProps) -> Element {
    rsx! {
        header { class: "relative z-10 bg-gradient-to-r from-red-600 to-red-700 shadow-2xl",
            div { class: "container mx-auto px-3 py-6",
                div { id: Target::Hero.dom_id(), class: "text-center",
                    h1 { class: "text-5xl md:text-7xl font-bold bg-gradient-to-r from-white to-gray-200 bg-clip-text text-transparent mb-4",
                        "{props.header.name}"
                    }
                    p { class: "text-xl md:text-2xl text-red-100 font-light",
                        "{props.header.tagline}"
                    }
                }
            }
        }
    }
}
