//! [`AnimationEngine`] over the GSAP and ScrollTrigger globals loaded by the page.

use log::info;
use serde::Serialize;
use wasm_bindgen::prelude::*;
use web_sys::js_sys::{global, Array, Object, Reflect};
use web_sys::HtmlElement;

use crate::animation::{AnimationEngine, Direction, ScrollTriggerSpec, Timeline, Tween, TweenTarget};
use crate::error::InteractionError;

#[wasm_bindgen]
extern "C" {
    pub type Gsap;

    #[wasm_bindgen(method, catch, js_name = registerPlugin)]
    fn register_plugin(this: &Gsap, plugin: &JsValue) -> Result<(), JsValue>;

    #[wasm_bindgen(method, catch)]
    fn timeline(this: &Gsap) -> Result<GsapTimeline, JsValue>;

    #[wasm_bindgen(method, catch, js_name = from)]
    fn tween_from(this: &Gsap, targets: &JsValue, vars: &JsValue) -> Result<JsValue, JsValue>;

    #[wasm_bindgen(method, catch, js_name = to)]
    fn tween_to(this: &Gsap, targets: &JsValue, vars: &JsValue) -> Result<JsValue, JsValue>;

    pub type GsapTimeline;

    #[wasm_bindgen(method, catch, js_name = from)]
    fn step_from(
        this: &GsapTimeline,
        targets: &JsValue,
        vars: &JsValue,
        position: &JsValue,
    ) -> Result<JsValue, JsValue>;

    pub type ScrollTrigger;

    #[wasm_bindgen(method, catch)]
    fn create(this: &ScrollTrigger, vars: &JsValue) -> Result<JsValue, JsValue>;
}

fn lookup_global(name: &'static str) -> Result<JsValue, InteractionError> {
    let value =
        Reflect::get(&global(), &JsValue::from_str(name)).map_err(InteractionError::from_js)?;
    if value.is_undefined() || value.is_null() {
        return Err(InteractionError::EngineUnavailable { missing: name });
    }
    Ok(value)
}

fn to_js<T: Serialize>(value: &T) -> Result<JsValue, InteractionError> {
    Ok(serde_wasm_bindgen::to_value(value)?)
}

fn elements_to_js(elements: &[HtmlElement]) -> JsValue {
    elements.iter().collect::<Array>().into()
}

pub struct GsapEngine {
    gsap: Gsap,
    scroll_trigger: ScrollTrigger,
}

impl GsapEngine {
    /// Finds `window.gsap` and `window.ScrollTrigger` and registers the plugin.
    pub fn detect() -> Result<Self, InteractionError> {
        let gsap: Gsap = lookup_global("gsap")?.unchecked_into();
        let plugin = lookup_global("ScrollTrigger")?;
        gsap.register_plugin(&plugin).map_err(InteractionError::from_js)?;
        info!("GSAP with ScrollTrigger detected");

        Ok(Self {
            gsap,
            scroll_trigger: plugin.unchecked_into(),
        })
    }
}

impl AnimationEngine<HtmlElement> for GsapEngine {
    fn submit_timeline(&self, timeline: Timeline<HtmlElement>) -> Result<(), InteractionError> {
        let tl = self.gsap.timeline().map_err(InteractionError::from_js)?;
        for step in &timeline.steps {
            let position = match &step.position {
                Some(position) => JsValue::from_str(position),
                None => JsValue::UNDEFINED,
            };
            tl.step_from(&elements_to_js(&step.targets), &to_js(&step.vars)?, &position)
                .map_err(InteractionError::from_js)?;
        }
        Ok(())
    }

    fn submit_tween(&self, tween: Tween<HtmlElement>) -> Result<(), InteractionError> {
        let vars = to_js(&tween.vars)?;

        let targets: JsValue = match tween.target {
            TweenTarget::Elements(elements) => elements_to_js(&elements),
            TweenTarget::Value { property, from } => {
                let proxy = Object::new();
                Reflect::set(&proxy, &JsValue::from_str(property), &JsValue::from_f64(from))
                    .map_err(InteractionError::from_js)?;

                if let Some(mut on_update) = tween.on_update {
                    let proxy_for_update = proxy.clone();
                    let callback = Closure::<dyn FnMut()>::new(move || {
                        let current = Reflect::get(&proxy_for_update, &JsValue::from_str(property))
                            .ok()
                            .and_then(|value| value.as_f64());
                        if let Some(current) = current {
                            on_update(current);
                        }
                    });
                    Reflect::set(&vars, &JsValue::from_str("onUpdate"), callback.as_ref())
                        .map_err(InteractionError::from_js)?;
                    // GSAP holds the callback until the tween completes; it is never released.
                    callback.forget();
                }
                proxy.into()
            }
        };

        let submitted = match tween.direction {
            Direction::From => self.gsap.tween_from(&targets, &vars),
            Direction::To => self.gsap.tween_to(&targets, &vars),
        };
        submitted.map_err(InteractionError::from_js)?;
        Ok(())
    }

    fn once_visible(
        &self,
        trigger: ScrollTriggerSpec,
        callback: Box<dyn FnOnce()>,
    ) -> Result<(), InteractionError> {
        let spec = ScrollTriggerSpec {
            once: true,
            ..trigger
        };
        let vars = to_js(&spec)?;
        let on_enter = Closure::once_into_js(move || callback());
        Reflect::set(&vars, &JsValue::from_str("onEnter"), &on_enter)
            .map_err(InteractionError::from_js)?;

        self.scroll_trigger.create(&vars).map_err(InteractionError::from_js)?;
        Ok(())
    }
}
