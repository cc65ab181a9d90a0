//! About card — photo, bio, badges and the skills toggle.

use dioxus::prelude::*;
use portfolio_core::types::{Glyph, Target};
use portfolio_core::view::AboutCard;

use super::icon::Icon;
use super::ui;

#[derive(Clone, PartialEq, Props)]
pub struct AboutProps {
    about: AboutCard,
    on_toggle: EventHandler<()>,
}

pub fn About(props: AboutProps) -> Element {
    let about = &props.about;
    let on_toggle = props.on_toggle;

    rsx! {
        div { id: Target::AboutCard.dom_id(), class: ui::CARD,
            div { class: ui::CARD_HEADER,
                h3 { class: ui::CARD_TITLE,
                    Icon { glyph: Glyph::User, class: ui::TITLE_ICON }
                    "{about.title}"
                }
            }
            div { class: format_args!("{} space-y-6", ui::CARD_CONTENT),
                div { class: "flex flex-col lg:flex-row gap-8 items-start",
                    div { class: "flex-shrink-0",
                        div { class: "w-64 h-78 bg-gradient-to-br from-red-500 to-red-700 rounded-2xl flex items-center justify-center shadow-2xl",
                            img {
                                src: "{about.photo}",
                                alt: "profile",
                                class: "w-full h-full object-cover rounded-2xl shadow-lg",
                            }
                        }
                    }
                    div { class: "flex-1 space-y-6",
                        div { class: "prose prose-invert max-w-none",
                            p { class: "text-lg leading-relaxed text-gray-300",
                                "Hi! I'm "
                                strong { class: "text-white", "{about.name}" }
                                ", {about.intro} "
                                span { class: format_args!("{} mx-2 border-transparent bg-red-600 text-white hover:bg-red-700", ui::BADGE),
                                    "{about.school}"
                                }
                            }
                            p { class: "text-lg leading-relaxed text-gray-300",
                                "I've already participated in "
                                strong { class: "text-red-400", "{about.hackathons}" }
                                " {about.outro}"
                            }
                        }

                        div { class: "flex flex-wrap gap-3",
                            for badge in about.badges.iter() {
                                span {
                                    key: "{badge.text}",
                                    class: format_args!("{} border-transparent {} text-white px-4 py-2 text-sm", ui::BADGE, badge.style),
                                    Icon { glyph: badge.glyph, class: "w-4 h-4 mr-2" }
                                    "{badge.text}"
                                }
                            }
                        }

                        button {
                            class: ui::BUTTON,
                            onclick: move |_| on_toggle.call(()),
                            "{about.toggle_label}"
                        }
                    }
                }
            }
        }
    }
}
