//! Browser side of the effect runner: inline-style host and frame loop.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use dioxus::prelude::*;
use gloo_timers::future::TimeoutFuture;
use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlElement};

use portfolio_core::effects::EffectRunner;
use portfolio_core::motion::{Frame, StyleHost};
use portfolio_core::types::Target;

const FRAME_MS: u32 = 16;
const STYLE_PROPS: [&str; 3] = ["transform", "opacity", "transform-origin"];

/// Seconds on a monotonic clock.
pub fn now() -> f64 {
    web_sys::window()
        .and_then(|w| w.performance())
        .map(|p| p.now())
        .unwrap_or_else(js_sys::Date::now)
        / 1000.0
}

/// Resolves targets by element id and writes inline styles.
pub struct DomHost {
    document: Option<Document>,
}

impl DomHost {
    pub fn new() -> Self {
        Self {
            document: web_sys::window().and_then(|w| w.document()),
        }
    }

    fn element(&self, target: Target) -> Option<HtmlElement> {
        self.document
            .as_ref()?
            .get_element_by_id(&target.dom_id())?
            .dyn_into::<HtmlElement>()
            .ok()
    }
}

impl StyleHost for DomHost {
    fn apply(&mut self, target: Target, frame: &Frame<'_>) -> bool {
        let Some(el) = self.element(target) else {
            return false;
        };
        let style = el.style();
        if let Some(transform) = frame.transform() {
            let _ = style.set_property("transform", &transform);
        }
        if let Some(opacity) = frame.opacity() {
            let _ = style.set_property("opacity", &opacity);
        }
        if let Some(origin) = frame.origin {
            let _ = style.set_property("transform-origin", origin);
        }
        true
    }

    fn clear(&mut self, target: Target) {
        if let Some(el) = self.element(target) {
            let style = el.style();
            for prop in STYLE_PROPS {
                let _ = style.remove_property(prop);
            }
        }
    }
}

/// Effect runner shared by the root component's hooks.
#[derive(Default)]
pub struct PageMotion {
    runner: RefCell<EffectRunner>,
    ticking: Cell<bool>,
}

impl PageMotion {
    pub fn teardown(&self) {
        self.runner.borrow_mut().teardown(&mut DomHost::new());
    }
}

/// Register the entrance sequence. Its first frame is written before this
/// returns, so regions never paint in their final place first.
pub fn mount(motion: &Rc<PageMotion>) {
    let registered = motion.runner.borrow_mut().mount(now(), &mut DomHost::new());
    if registered {
        drive(Rc::clone(motion));
    }
}

pub fn set_skills_visible(motion: &Rc<PageMotion>, visible: bool, skill_count: usize) {
    let registered = motion.runner.borrow_mut().set_skills_visible(
        visible,
        skill_count,
        now(),
        &mut DomHost::new(),
    );
    if registered {
        drive(Rc::clone(motion));
    }
}

/// Tick the runner every frame until nothing is moving. At most one loop runs.
fn drive(motion: Rc<PageMotion>) {
    if motion.ticking.replace(true) {
        return;
    }
    spawn(async move {
        let mut host = DomHost::new();
        loop {
            let running = motion.runner.borrow_mut().tick(now(), &mut host);
            if !running {
                break;
            }
            TimeoutFuture::new(FRAME_MS).await;
        }
        motion.ticking.set(false);
    });
}
