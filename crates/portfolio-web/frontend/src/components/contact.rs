//! Contact card — one outbound link per social profile.

use dioxus::prelude::*;
use portfolio_core::types::{Glyph, Target};
use portfolio_core::view::ContactCard;

use super::icon::Icon;
use super::ui;

#[derive(Clone, PartialEq, Props)]
pub struct ContactProps {
    contact: ContactCard,
}

pub fn Contact(props: ContactProps) -> Element {
    let contact = &props.contact;

    rsx! {
        div { id: Target::ContactCard.dom_id(), class: ui::CARD,
            div { class: ui::CARD_HEADER,
                h3 { class: ui::CARD_TITLE,
                    Icon { glyph: Glyph::Mail, class: ui::TITLE_ICON }
                    "{contact.title}"
                }
                p { class: ui::CARD_DESCRIPTION, "{contact.description}" }
            }
            div { class: ui::CARD_CONTENT,
                div { class: "grid grid-cols-1 md:grid-cols-2 gap-6",
                    for link in contact.links.iter() {
                        a {
                            key: "{link.title}",
                            href: "{link.href}",
                            target: link.target,
                            rel: link.rel,
                            class: "group",
                            div { class: "flex items-center gap-4 p-6 bg-gray-700/50 rounded-xl border border-gray-600 hover:border-red-500 transition-all duration-300 hover:shadow-lg hover:shadow-red-500/20 hover:scale-105",
                                Icon {
                                    glyph: link.glyph,
                                    class: format!(
                                        "w-8 h-8 text-gray-400 group-hover:text-red-500 transition-colors duration-300 {}",
                                        link.hover_style
                                    ),
                                }
                                div { class: "flex-1",
                                    h3 { class: "text-lg font-semibold text-white group-hover:text-red-400 transition-colors duration-300",
                                        "{link.title}"
                                    }
                                    p { class: "text-gray-400 text-sm group-hover:text-gray-300 transition-colors duration-300",
                                        "{link.subtitle}"
                                    }
                                }
                                Icon {
                                    glyph: Glyph::ExternalLink,
                                    class: "w-5 h-5 text-gray-500 group-hover:text-red-500 transition-colors duration-300",
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
