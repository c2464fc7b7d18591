use log::{debug, warn};
use serde::Deserialize;

use crate::effects::DEFAULT_COUNT_DURATION;
use crate::error::InteractionError;
use crate::host::Host;

/// Id of the optional `<script type="application/json">` block that overrides defaults.
pub const CONFIG_ELEMENT_ID: &str = "interactions-config";

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct CounterTarget {
    pub id: String,
    pub end_value: f64,
}

impl CounterTarget {
    fn new(id: &str, end_value: f64) -> Self {
        Self {
            id: id.to_string(),
            end_value,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct InteractionConfig {
    pub menu_button_id: String,
    pub close_menu_id: String,
    pub mobile_menu_id: String,
    pub menu_link_selector: String,
    pub scroll_top_id: String,
    pub scroll_threshold: f64,
    pub stats_selector: String,
    pub stats_start: String,
    pub counters: Vec<CounterTarget>,
    pub counter_duration: f64,
    pub services_grid_selector: String,
    pub card_selector: String,
    pub cards_start: String,
    // Structural position inside the contact block; override with a stable id
    // when the markup has one.
    pub pulse_selector: String,
    pub pulse_delay: f64,
}

impl Default for InteractionConfig {
    fn default() -> Self {
        Self {
            menu_button_id: "menu-button".to_string(),
            close_menu_id: "close-menu".to_string(),
            mobile_menu_id: "mobile-menu".to_string(),
            menu_link_selector: ".menu-link".to_string(),
            scroll_top_id: "scroll-to-top".to_string(),
            scroll_threshold: 400.0,
            stats_selector: "#stats".to_string(),
            stats_start: "top 80%".to_string(),
            counters: vec![
                CounterTarget::new("stat1-value", 15.0), // projects completed
                CounterTarget::new("stat2-value", 2.0), // years of expertise
                CounterTarget::new("stat3-value", 500.0), // tonnes of concrete cut
                CounterTarget::new("stat4-value", 15.0), // satisfied clients
            ],
            counter_duration: DEFAULT_COUNT_DURATION,
            services_grid_selector: "#services-grid".to_string(),
            card_selector: ".service-card".to_string(),
            cards_start: "top 85%".to_string(),
            pulse_selector: "#contact .space-x-6 a:first-child".to_string(),
            pulse_delay: 3.0,
        }
    }
}

impl InteractionConfig {
    pub fn from_json(raw: &str) -> Result<Self, InteractionError> {
        Ok(serde_json::from_str(raw)?)
    }

    /// Reads the in-page override block, falling back to defaults when it is
    /// absent, empty, or malformed.
    pub fn load<H: Host>(host: &H) -> Self {
        let raw = host
            .element_by_id(CONFIG_ELEMENT_ID)
            .and_then(|element| host.text_of(&element))
            .filter(|raw| !raw.trim().is_empty());

        let Some(raw) = raw else {
            debug!("No interactions config block, using defaults");
            return Self::default();
        };

        match Self::from_json(&raw) {
            Ok(config) => config,
            Err(e) => {
                warn!("Ignoring config block: {}", e);
                Self::default()
            }
        }
    }
}
