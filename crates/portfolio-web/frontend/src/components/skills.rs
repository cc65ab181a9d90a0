//! Skills card — mounted only while revealed, so every reveal starts from a
//! fresh subtree for the reveal sequence to animate.

use dioxus::prelude::*;
use portfolio_core::types::{Glyph, Target};
use portfolio_core::view::SkillsCard;

use super::icon::Icon;
use super::ui;

#[derive(Clone, PartialEq, Props)]
pub struct SkillsProps {
    card: SkillsCard,
}

pub fn Skills(props: SkillsProps) -> Element {
    let card = &props.card;

    rsx! {
        div { id: Target::SkillsCard.dom_id(), class: ui::CARD,
            div { class: ui::CARD_HEADER,
                h3 { class: ui::CARD_TITLE,
                    Icon { glyph: Glyph::Code, class: ui::TITLE_ICON }
                    "{card.title}"
                }
                p { class: ui::CARD_DESCRIPTION, "{card.description}" }
            }
            div { class: format_args!("{} space-y-8", ui::CARD_CONTENT),
                for row in card.rows.iter() {
                    div { key: "{row.name}", class: "space-y-3",
                        div {
                            id: Target::SkillLabel(row.index).dom_id(),
                            class: "flex justify-between items-center",
                            span { class: "text-lg font-semibold text-white", "{row.name}" }
                            span { class: format_args!("{} text-gray-300 border-gray-600", ui::BADGE), "{row.badge}" }
                        }
                        div { class: "relative",
                            div { class: "w-full bg-gray-700 rounded-full h-3 shadow-inner",
                                div {
                                    id: Target::SkillBar(row.index).dom_id(),
                                    class: "h-3 rounded-full {row.style} shadow-lg",
                                    style: "width: {row.fill_width};",
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
