use std::rc::Rc;

use log::{debug, error};

use crate::animation::{
    AnimationEngine, Direction, ScrollTriggerSpec, Timeline, TimelineStep, Tween, TweenTarget,
    TweenVars,
};
use crate::config::{CounterTarget, InteractionConfig};
use crate::error::InteractionError;
use crate::host::Host;

pub const DEFAULT_COUNT_DURATION: f64 = 3.0;

fn report(what: &str, result: Result<(), InteractionError>) {
    if let Err(e) = result {
        error!("Failed to start {}: {}", what, e);
    }
}

/// Registers every page animation. A failed submission is logged and does
/// not stop the others.
pub fn register_all<H, A>(host: &H, engine: &Rc<A>, config: &InteractionConfig)
where
    H: Host,
    A: AnimationEngine<H::Element> + 'static,
{
    let hero = hero_timeline(host);
    if hero.is_empty() {
        debug!("No hero elements, skipping entrance timeline");
    } else {
        report("hero timeline", engine.submit_timeline(hero));
    }

    report("stats counters", register_counters(host, engine, config));
    report("service cards", register_card_reveal(host, engine.as_ref(), config));
    report("contact pulse", register_pulse(host, engine.as_ref(), config));
}

fn rise_in(y: f64, duration: f64) -> TweenVars {
    TweenVars {
        y: Some(y),
        opacity: Some(0.0),
        duration: Some(duration),
        ..TweenVars::default()
    }
}

/// Header drops in, then the hero lines rise in with short overlaps.
///
/// Steps whose element is missing are dropped; the next step keeps its own
/// `-=` offset, so the overlap then applies against the step before the gap.
pub fn hero_timeline<H: Host>(host: &H) -> Timeline<H::Element> {
    let steps = [
        ("header", rise_in(-100.0, 0.8), None),
        ("#hero-kicker", rise_in(20.0, 0.5), Some("-=0.2")),
        ("#hero-title", rise_in(20.0, 0.6), Some("-=0.3")),
        ("#hero-tagline", rise_in(20.0, 0.5), Some("-=0.3")),
        (
            "#hero-cta",
            TweenVars {
                scale: Some(0.8),
                opacity: Some(0.0),
                duration: Some(0.5),
                ease: Some("back.out(1.7)".to_string()),
                ..TweenVars::default()
            },
            Some("-=0.3"),
        ),
    ];

    let steps = steps
        .into_iter()
        .filter_map(|(selector, vars, position)| {
            let targets = host.query_selector_all(selector);
            if targets.is_empty() {
                debug!("Hero element {} missing, leaving it out", selector);
                return None;
            }
            Some(TimelineStep {
                targets,
                vars,
                position: position.map(str::to_string),
            })
        })
        .collect();

    Timeline { steps }
}

pub fn format_count(value: f64) -> String {
    format!("{}", value.round() as i64)
}

/// Counts the text of `#target_id` up from 0 to `end_value` over `duration`
/// seconds. A missing element is a no-op.
pub fn animate_count<H, A>(
    host: &H,
    engine: &A,
    target_id: &str,
    end_value: f64,
    duration: f64,
) -> Result<(), InteractionError>
where
    H: Host,
    A: AnimationEngine<H::Element> + ?Sized,
{
    let Some(target) = host.element_by_id(target_id) else {
        debug!("Counter #{} missing, skipping", target_id);
        return Ok(());
    };

    let host = host.clone();
    engine.submit_tween(Tween {
        direction: Direction::To,
        target: TweenTarget::Value {
            property: "count",
            from: 0.0,
        },
        vars: TweenVars {
            count: Some(end_value),
            duration: Some(duration),
            round_props: Some("count".to_string()),
            ..TweenVars::default()
        },
        on_update: Some(Box::new(move |value| {
            host.set_text(&target, &format_count(value));
        })),
    })
}

/// Starts all counters the first time the stats section scrolls into view.
pub fn register_counters<H, A>(
    host: &H,
    engine: &Rc<A>,
    config: &InteractionConfig,
) -> Result<(), InteractionError>
where
    H: Host,
    A: AnimationEngine<H::Element> + 'static,
{
    if host.query_selector(&config.stats_selector).is_none() {
        debug!("No {} section, skipping counters", config.stats_selector);
        return Ok(());
    }

    let host = host.clone();
    let counters: Vec<CounterTarget> = config.counters.clone();
    let duration = config.counter_duration;
    let engine_for_counters = engine.clone();

    engine.once_visible(
        ScrollTriggerSpec::once(&config.stats_selector, &config.stats_start),
        Box::new(move || {
            for counter in &counters {
                report(
                    "counter",
                    animate_count(
                        &host,
                        engine_for_counters.as_ref(),
                        &counter.id,
                        counter.end_value,
                        duration,
                    ),
                );
            }
        }),
    )
}

/// Cards rise and fade in one after another when the grid scrolls into view.
pub fn register_card_reveal<H, A>(
    host: &H,
    engine: &A,
    config: &InteractionConfig,
) -> Result<(), InteractionError>
where
    H: Host,
    A: AnimationEngine<H::Element> + ?Sized,
{
    if host.query_selector(&config.services_grid_selector).is_none() {
        debug!("No {} section, skipping card reveal", config.services_grid_selector);
        return Ok(());
    }
    let cards = host.query_selector_all(&config.card_selector);
    if cards.is_empty() {
        debug!("No {} elements, skipping card reveal", config.card_selector);
        return Ok(());
    }

    engine.submit_tween(Tween::from_vars(
        cards,
        TweenVars {
            y: Some(50.0),
            opacity: Some(0.0),
            stagger: Some(0.15),
            duration: Some(0.6),
            ease: Some("power1.out".to_string()),
            scroll_trigger: Some(ScrollTriggerSpec::play_once(
                &config.services_grid_selector,
                &config.cards_start,
            )),
            ..TweenVars::default()
        },
    ))
}

/// Endless gentle pulse on the primary contact link. The delay keeps it
/// clear of the hero entrance.
pub fn register_pulse<H, A>(
    host: &H,
    engine: &A,
    config: &InteractionConfig,
) -> Result<(), InteractionError>
where
    H: Host,
    A: AnimationEngine<H::Element> + ?Sized,
{
    let Some(link) = host.query_selector(&config.pulse_selector) else {
        debug!("No element for {}, skipping pulse", config.pulse_selector);
        return Ok(());
    };

    engine.submit_tween(Tween::to_vars(
        vec![link],
        TweenVars {
            scale: Some(1.15),
            duration: Some(0.8),
            ease: Some("power1.inOut".to_string()),
            repeat: Some(-1),
            yoyo: Some(true),
            delay: Some(config.pulse_delay),
            ..TweenVars::default()
        },
    ))
}
