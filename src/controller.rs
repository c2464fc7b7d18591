use std::rc::Rc;

use log::{info, warn};

use crate::animation::AnimationEngine;
use crate::config::InteractionConfig;
use crate::effects;
use crate::error::InteractionError;
use crate::host::Host;
use crate::menu::{self, MobileMenu};
use crate::scroll_top;
use crate::ui_state::UiContext;

/// Owns the page UI state and registers every interaction once.
pub struct InteractionController<H: Host> {
    ui: Rc<UiContext<H>>,
    menu: Rc<MobileMenu<H>>,
    animations_enabled: bool,
}

impl<H: Host> InteractionController<H> {
    /// Binds the menu and scroll-to-top button, then hands the animations to
    /// `engine`. An unavailable engine only costs the animations; the rest of
    /// the page keeps working.
    pub fn start<A>(host: H, config: InteractionConfig, engine: Result<A, InteractionError>) -> Self
    where
        A: AnimationEngine<H::Element> + 'static,
    {
        let ui = Rc::new(UiContext::new(host.clone()));
        let menu = menu::bind(&ui, &config);
        scroll_top::bind(&host, &config);

        let animations_enabled = match engine {
            Ok(engine) => {
                effects::register_all(&host, &Rc::new(engine), &config);
                true
            }
            Err(e) => {
                warn!("{}", e);
                false
            }
        };

        info!(
            "Page interactions ready (animations {})",
            if animations_enabled { "on" } else { "off" }
        );

        Self {
            ui,
            menu,
            animations_enabled,
        }
    }

    pub fn ui(&self) -> &UiContext<H> {
        &self.ui
    }

    pub fn menu(&self) -> &MobileMenu<H> {
        &self.menu
    }

    pub fn animations_enabled(&self) -> bool {
        self.animations_enabled
    }
}
