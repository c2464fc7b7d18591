//! In-memory page and engine used by the unit tests.

use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use std::rc::Rc;
use std::sync::Once;

use log::{Level, LevelFilter, Metadata, Record};

use crate::animation::{
    AnimationEngine, Direction, ScrollTriggerSpec, Timeline, Tween, TweenTarget, TweenVars,
};
use crate::error::InteractionError;
use crate::host::Host;

pub type FakeElement = usize;

#[derive(Default)]
struct FakeDom {
    next_element: FakeElement,
    ids: HashMap<String, FakeElement>,
    selectors: HashMap<String, Vec<FakeElement>>,
    styles: HashMap<(FakeElement, String), String>,
    body_styles: HashMap<String, String>,
    texts: HashMap<FakeElement, String>,
    click_handlers: HashMap<FakeElement, Vec<Box<dyn FnMut()>>>,
    scroll_handlers: Vec<Box<dyn FnMut()>>,
    scroll_y: f64,
    scroll_to_top_requests: usize,
}

/// Records every style write and lets tests fire clicks and scrolls.
#[derive(Clone, Default)]
pub struct FakeHost {
    dom: Rc<RefCell<FakeDom>>,
}

impl FakeHost {
    fn new_element(&self) -> FakeElement {
        let mut dom = self.dom.borrow_mut();
        dom.next_element += 1;
        dom.next_element
    }

    /// Adds an element reachable both by id and by `#id`.
    pub fn add_element(&self, id: &str) -> FakeElement {
        let element = self.new_element();
        let mut dom = self.dom.borrow_mut();
        dom.ids.insert(id.to_string(), element);
        dom.selectors.entry(format!("#{id}")).or_default().push(element);
        element
    }

    /// Adds an element that `selector` matches.
    pub fn add_matching(&self, selector: &str) -> FakeElement {
        let element = self.new_element();
        self.dom
            .borrow_mut()
            .selectors
            .entry(selector.to_string())
            .or_default()
            .push(element);
        element
    }

    pub fn id(&self, id: &str) -> FakeElement {
        *self.dom.borrow().ids.get(id).expect("no element with that id")
    }

    pub fn matching(&self, selector: &str) -> Vec<FakeElement> {
        self.dom.borrow().selectors.get(selector).cloned().unwrap_or_default()
    }

    pub fn style(&self, element: &FakeElement, property: &str) -> Option<String> {
        self.dom.borrow().styles.get(&(*element, property.to_string())).cloned()
    }

    pub fn body_style(&self, property: &str) -> Option<String> {
        self.dom.borrow().body_styles.get(property).cloned()
    }

    pub fn text(&self, element: &FakeElement) -> Option<String> {
        self.dom.borrow().texts.get(element).cloned()
    }

    pub fn set_scroll_y(&self, offset: f64) {
        self.dom.borrow_mut().scroll_y = offset;
    }

    pub fn scroll_to_top_requests(&self) -> usize {
        self.dom.borrow().scroll_to_top_requests
    }

    pub fn click_listener_count(&self) -> usize {
        self.dom.borrow().click_handlers.values().map(Vec::len).sum()
    }

    pub fn scroll_listener_count(&self) -> usize {
        self.dom.borrow().scroll_handlers.len()
    }

    pub fn click(&self, element: &FakeElement) {
        // Handlers write back into the dom, so they run without the borrow held.
        let mut handlers = self
            .dom
            .borrow_mut()
            .click_handlers
            .remove(element)
            .unwrap_or_default();
        for handler in handlers.iter_mut() {
            handler();
        }
        let mut dom = self.dom.borrow_mut();
        let slot = dom.click_handlers.entry(*element).or_default();
        handlers.append(slot);
        *slot = handlers;
    }

    pub fn scroll_to(&self, offset: f64) {
        let mut handlers = {
            let mut dom = self.dom.borrow_mut();
            dom.scroll_y = offset;
            std::mem::take(&mut dom.scroll_handlers)
        };
        for handler in handlers.iter_mut() {
            handler();
        }
        let mut dom = self.dom.borrow_mut();
        handlers.append(&mut dom.scroll_handlers);
        dom.scroll_handlers = handlers;
    }
}

impl Host for FakeHost {
    type Element = FakeElement;

    fn element_by_id(&self, id: &str) -> Option<FakeElement> {
        self.dom.borrow().ids.get(id).copied()
    }

    fn query_selector(&self, selector: &str) -> Option<FakeElement> {
        self.matching(selector).first().copied()
    }

    fn query_selector_all(&self, selector: &str) -> Vec<FakeElement> {
        self.matching(selector)
    }

    fn set_style(&self, element: &FakeElement, property: &str, value: &str) {
        self.dom
            .borrow_mut()
            .styles
            .insert((*element, property.to_string()), value.to_string());
    }

    fn set_body_style(&self, property: &str, value: &str) {
        let mut dom = self.dom.borrow_mut();
        if value.is_empty() {
            dom.body_styles.remove(property);
        } else {
            dom.body_styles.insert(property.to_string(), value.to_string());
        }
    }

    fn text_of(&self, element: &FakeElement) -> Option<String> {
        self.text(element)
    }

    fn set_text(&self, element: &FakeElement, text: &str) {
        self.dom.borrow_mut().texts.insert(*element, text.to_string());
    }

    fn scroll_y(&self) -> f64 {
        self.dom.borrow().scroll_y
    }

    fn scroll_to_top(&self) {
        self.dom.borrow_mut().scroll_to_top_requests += 1;
    }

    fn on_click(&self, element: &FakeElement, handler: Box<dyn FnMut()>) {
        self.dom
            .borrow_mut()
            .click_handlers
            .entry(*element)
            .or_default()
            .push(handler);
    }

    fn on_scroll(&self, handler: Box<dyn FnMut()>) {
        self.dom.borrow_mut().scroll_handlers.push(handler);
    }
}

type PendingTrigger = (ScrollTriggerSpec, Option<Box<dyn FnOnce()>>);

/// Records submissions and plays value tweens and triggers on demand.
#[derive(Default)]
pub struct FakeEngine {
    timelines: RefCell<Vec<Timeline<FakeElement>>>,
    tweens: RefCell<Vec<Tween<FakeElement>>>,
    triggers: RefCell<Vec<PendingTrigger>>,
    reject_timelines: Cell<bool>,
}

impl FakeEngine {
    pub fn fail_timelines(&self) {
        self.reject_timelines.set(true);
    }

    pub fn timeline_count(&self) -> usize {
        self.timelines.borrow().len()
    }

    pub fn timeline_step_count(&self, index: usize) -> usize {
        self.timelines.borrow()[index].steps.len()
    }

    pub fn tween_count(&self) -> usize {
        self.tweens.borrow().len()
    }

    pub fn tween_vars(&self, index: usize) -> TweenVars {
        self.tweens.borrow()[index].vars.clone()
    }

    pub fn tween_direction(&self, index: usize) -> Direction {
        self.tweens.borrow()[index].direction
    }

    pub fn tween_elements(&self, index: usize) -> Vec<FakeElement> {
        match &self.tweens.borrow()[index].target {
            TweenTarget::Elements(elements) => elements.clone(),
            TweenTarget::Value { .. } => Vec::new(),
        }
    }

    pub fn tween_element_count(&self, index: usize) -> usize {
        self.tween_elements(index).len()
    }

    pub fn triggers(&self) -> Vec<ScrollTriggerSpec> {
        self.triggers
            .borrow()
            .iter()
            .map(|(spec, _)| spec.clone())
            .collect()
    }

    /// Scrolls the trigger for `selector` into view, firing whatever has not
    /// fired yet.
    pub fn scroll_past(&self, selector: &str) {
        let ready: Vec<Box<dyn FnOnce()>> = self
            .triggers
            .borrow_mut()
            .iter_mut()
            .filter(|(spec, _)| spec.trigger == selector)
            .filter_map(|(_, callback)| callback.take())
            .collect();
        for callback in ready {
            callback();
        }
    }

    /// Advances every value tween to `progress` (0.0..=1.0) and runs its
    /// update callback, rounding like the engine does when `roundProps` is set.
    pub fn tick_value_tweens(&self, progress: f64) {
        for tween in self.tweens.borrow_mut().iter_mut() {
            let TweenTarget::Value { from, .. } = tween.target else {
                continue;
            };
            let end = tween.vars.count.unwrap_or(from);
            let mut value = from + (end - from) * progress;
            if tween.vars.round_props.is_some() {
                value = value.round();
            }
            if let Some(on_update) = tween.on_update.as_mut() {
                on_update(value);
            }
        }
    }

    pub fn finish_value_tweens(&self) {
        self.tick_value_tweens(1.0);
    }
}

impl AnimationEngine<FakeElement> for FakeEngine {
    fn submit_timeline(&self, timeline: Timeline<FakeElement>) -> Result<(), InteractionError> {
        if self.reject_timelines.get() {
            return Err(InteractionError::Engine("timeline rejected".to_string()));
        }
        self.timelines.borrow_mut().push(timeline);
        Ok(())
    }

    fn submit_tween(&self, tween: Tween<FakeElement>) -> Result<(), InteractionError> {
        self.tweens.borrow_mut().push(tween);
        Ok(())
    }

    fn once_visible(
        &self,
        trigger: ScrollTriggerSpec,
        callback: Box<dyn FnOnce()>,
    ) -> Result<(), InteractionError> {
        self.triggers.borrow_mut().push((trigger, Some(callback)));
        Ok(())
    }
}

struct CaptureLogger;

thread_local! {
    static CAPTURED: RefCell<Vec<(Level, String)>> = const { RefCell::new(Vec::new()) };
}

impl log::Log for CaptureLogger {
    fn enabled(&self, _metadata: &Metadata) -> bool {
        true
    }

    fn log(&self, record: &Record) {
        CAPTURED.with(|captured| {
            captured
                .borrow_mut()
                .push((record.level(), record.args().to_string()))
        });
    }

    fn flush(&self) {}
}

static LOGGER: CaptureLogger = CaptureLogger;
static INIT: Once = Once::new();

/// Starts capturing log records for the current test thread.
pub fn capture_logs() {
    INIT.call_once(|| {
        let _ = log::set_logger(&LOGGER);
        log::set_max_level(LevelFilter::Debug);
    });
    CAPTURED.with(|captured| captured.borrow_mut().clear());
}

fn captured_at(level: Level) -> Vec<String> {
    CAPTURED.with(|captured| {
        captured
            .borrow()
            .iter()
            .filter(|(l, _)| *l == level)
            .map(|(_, message)| message.clone())
            .collect()
    })
}

pub fn warnings() -> Vec<String> {
    captured_at(Level::Warn)
}

pub fn errors() -> Vec<String> {
    captured_at(Level::Error)
}
