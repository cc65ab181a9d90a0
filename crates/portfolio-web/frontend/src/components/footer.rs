use dioxus::prelude::*;
use portfolio_core::view::Footer;

#[derive(Clone, PartialEq, Props)]
pub struct PageFooterProps {
    footer: Footer,
}

pub fn PageFooter(props: PageFooterProps) -> Element {
    rsx! {
        footer { class: "relative z-10 bg-gradient-to-r from-red-600 to-red-700 mt-20",
            div { class: "container mx-auto px-6 py-8",
                div { class: "text-center",
                    p { class: "text-red-100 text-lg", "{props.footer.line}" }
                    p { class: "text-red-200 text-sm mt-2", "{props.footer.credits}" }
                }
            }
        }
    }
}
