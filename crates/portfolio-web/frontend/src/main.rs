//! Portfolio WASM frontend — Dioxus app root.

mod components;
mod motion;

use std::rc::Rc;

use dioxus::prelude::*;

use portfolio_core::profile::Profile;
use portfolio_core::view::{self, PageView, ViewState};

use motion::PageMotion;

fn main() {
    dioxus::launch(App);
}

fn load_profile() -> Profile {
    match Profile::bundled() {
        Ok(profile) => profile,
        Err(e) => {
            tracing::error!("{:#}; falling back to built-in profile", e);
            Profile::default()
        }
    }
}

fn App() -> Element {
    let profile = use_hook(|| Rc::new(load_profile()));
    let mut view_state = use_signal(ViewState::default);
    let page_motion = use_hook(|| Rc::new(PageMotion::default()));

    // Entrance animations, once per page lifetime
    use_effect({
        let page_motion = Rc::clone(&page_motion);
        move || motion::mount(&page_motion)
    });

    // Reveal animations whenever the skills card comes back
    use_effect({
        let page_motion = Rc::clone(&page_motion);
        let skill_count = profile.skills.len();
        move || {
            let visible = view_state().skills_visible;
            motion::set_skills_visible(&page_motion, visible, skill_count);
        }
    });

    use_drop({
        let page_motion = Rc::clone(&page_motion);
        move || page_motion.teardown()
    });

    let PageView {
        header,
        about,
        skills,
        contact,
        footer,
    } = view::render(&profile, &view_state());

    rsx! {
        div { class: "min-h-screen bg-gradient-to-br from-gray-900 via-gray-800 to-gray-900 text-white",
            components::backdrop::Backdrop {}

            components::hero::Hero { header: header }

            main { class: "relative z-10 container mx-auto px-6 py-12 space-y-12",
                components::about::About {
                    about: about,
                    on_toggle: move |_| {
                        view_state.write().toggle();
                    },
                }

                {skills.map(|card| rsx! {
                    components::skills::Skills { card: card }
                })}

                components::contact::Contact { contact: contact }
            }

            components::footer::PageFooter { footer: footer }
        }
    }
}
