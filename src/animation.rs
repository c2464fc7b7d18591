//! Declarative animation descriptors and the engine they are handed to.
//!
//! The controller never drives frames itself. It builds a [`Timeline`],
//! [`Tween`] or [`ScrollTriggerSpec`] and submits it to an
//! [`AnimationEngine`]; the engine owns playback and scheduling. Vars
//! serialize to the camelCase object shape GSAP expects.

use std::rc::Rc;

use serde::Serialize;

use crate::error::InteractionError;

#[derive(Debug, Clone, PartialEq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TweenVars {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub y: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub opacity: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scale: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub count: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub delay: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ease: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stagger: Option<f64>,
    /// `-1` repeats forever.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub repeat: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub yoyo: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub round_props: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scroll_trigger: Option<ScrollTriggerSpec>,
}

/// Where a scroll-linked animation starts, e.g. `"top 80%"`: the trigger's
/// top edge meets the point 80% down the viewport.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScrollTriggerSpec {
    pub trigger: String,
    pub start: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub toggle_actions: Option<String>,
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub once: bool,
}

impl ScrollTriggerSpec {
    pub fn new(trigger: &str, start: &str) -> Self {
        Self {
            trigger: trigger.to_string(),
            start: start.to_string(),
            toggle_actions: None,
            once: false,
        }
    }

    /// Fires on first entry and never again.
    pub fn once(trigger: &str, start: &str) -> Self {
        Self {
            once: true,
            ..Self::new(trigger, start)
        }
    }

    /// Plays on first entry; leaving or re-entering does nothing.
    pub fn play_once(trigger: &str, start: &str) -> Self {
        Self {
            toggle_actions: Some("play none none none".to_string()),
            ..Self::new(trigger, start)
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Animate from the given vars to the element's current state.
    From,
    /// Animate from the current state to the given vars.
    To,
}

pub enum TweenTarget<E> {
    Elements(Vec<E>),
    /// A plain numeric accumulator `{ property: from }` with no element behind it.
    Value { property: &'static str, from: f64 },
}

pub struct Tween<E> {
    pub direction: Direction,
    pub target: TweenTarget<E>,
    pub vars: TweenVars,
    /// Called on every engine tick with the current value of a
    /// [`TweenTarget::Value`] property.
    pub on_update: Option<Box<dyn FnMut(f64)>>,
}

impl<E> Tween<E> {
    pub fn from_vars(elements: Vec<E>, vars: TweenVars) -> Self {
        Self {
            direction: Direction::From,
            target: TweenTarget::Elements(elements),
            vars,
            on_update: None,
        }
    }

    pub fn to_vars(elements: Vec<E>, vars: TweenVars) -> Self {
        Self {
            direction: Direction::To,
            ..Self::from_vars(elements, vars)
        }
    }
}

/// One `from` step of a timeline. `position` is GSAP's relative position
/// parameter, e.g. `"-=0.3"` to overlap the previous step by 0.3s.
#[derive(Debug, Clone, PartialEq)]
pub struct TimelineStep<E> {
    pub targets: Vec<E>,
    pub vars: TweenVars,
    pub position: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Timeline<E> {
    pub steps: Vec<TimelineStep<E>>,
}

impl<E> Default for Timeline<E> {
    fn default() -> Self {
        Self { steps: Vec::new() }
    }
}

impl<E> Timeline<E> {
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }
}

/// External tweening and scroll-trigger capability.
pub trait AnimationEngine<E> {
    fn submit_timeline(&self, timeline: Timeline<E>) -> Result<(), InteractionError>;

    fn submit_tween(&self, tween: Tween<E>) -> Result<(), InteractionError>;

    /// Runs `callback` the first time `trigger` scrolls into its start
    /// position. Never runs it again.
    fn once_visible(
        &self,
        trigger: ScrollTriggerSpec,
        callback: Box<dyn FnOnce()>,
    ) -> Result<(), InteractionError>;
}

impl<E, T: AnimationEngine<E> + ?Sized> AnimationEngine<E> for Rc<T> {
    fn submit_timeline(&self, timeline: Timeline<E>) -> Result<(), InteractionError> {
        (**self).submit_timeline(timeline)
    }

    fn submit_tween(&self, tween: Tween<E>) -> Result<(), InteractionError> {
        (**self).submit_tween(tween)
    }

    fn once_visible(
        &self,
        trigger: ScrollTriggerSpec,
        callback: Box<dyn FnOnce()>,
    ) -> Result<(), InteractionError> {
        (**self).once_visible(trigger, callback)
    }
}
