//! Interactivity for the marketing site: mobile menu, back-to-top button and
//! GSAP-driven entrance and scroll animations.
//!
//! The crate is loaded as a wasm module by the static page. On start it waits
//! for the document to be parsed, reads the optional config block and wires
//! everything through [`controller::InteractionController`].

pub mod animation;
pub mod config;
pub mod controller;
pub mod dom;
pub mod effects;
pub mod error;
pub mod gsap;
pub mod host;
pub mod menu;
pub mod scroll_top;
pub mod ui_state;

#[cfg(test)]
mod testing;

pub use config::InteractionConfig;
pub use controller::InteractionController;
pub use error::InteractionError;

#[cfg(target_arch = "wasm32")]
mod entry {
    use log::{info, Level};
    use wasm_bindgen::prelude::*;

    use crate::config::InteractionConfig;
    use crate::controller::InteractionController;
    use crate::dom::DomHost;
    use crate::gsap::GsapEngine;

    fn run(host: DomHost) {
        let config = InteractionConfig::load(&host);
        InteractionController::start(host, config, GsapEngine::detect());
    }

    #[wasm_bindgen(start)]
    pub fn start() {
        console_error_panic_hook::set_once();
        // A second init (module loaded twice) keeps the first logger.
        let _ = console_log::init_with_level(Level::Info);

        info!("Starting page interactions");
        let Some(host) = DomHost::from_window() else {
            return;
        };

        if host.is_loading() {
            let deferred = host.clone();
            host.on_dom_content_loaded(Box::new(move || run(deferred)));
        } else {
            run(host);
        }
    }
}
