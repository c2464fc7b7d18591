use std::rc::Rc;

use log::debug;

use crate::config::InteractionConfig;
use crate::host::Host;
use crate::ui_state::{MenuEvent, MenuState, UiContext};

/// Slide-in navigation panel for small screens.
pub struct MobileMenu<H: Host> {
    ui: Rc<UiContext<H>>,
    panel: Option<H::Element>,
}

impl<H: Host> MobileMenu<H> {
    pub fn new(ui: Rc<UiContext<H>>, panel: Option<H::Element>) -> Self {
        Self { ui, panel }
    }

    pub fn dispatch(&self, event: MenuEvent) {
        let state = self.ui.menu_state().next(event);
        self.ui.set_menu_state(state);

        if let Some(panel) = &self.panel {
            self.ui
                .host()
                .set_style(panel, "transform", state.panel_transform());
        }
        match state {
            MenuState::Open => self.ui.lock_scroll(),
            MenuState::Closed => self.ui.unlock_scroll(),
        }
    }

    pub fn open(&self) {
        self.dispatch(MenuEvent::OpenRequested);
    }

    pub fn close(&self) {
        self.dispatch(MenuEvent::CloseRequested);
    }
}

/// Wires the open/close controls and the in-menu links. Absent elements are
/// skipped.
pub fn bind<H: Host>(ui: &Rc<UiContext<H>>, config: &InteractionConfig) -> Rc<MobileMenu<H>> {
    let host = ui.host().clone();
    let panel = host.element_by_id(&config.mobile_menu_id);
    if panel.is_none() {
        debug!("No #{} panel, menu toggles scroll lock only", config.mobile_menu_id);
    }
    let menu = Rc::new(MobileMenu::new(ui.clone(), panel));

    match host.element_by_id(&config.menu_button_id) {
        Some(button) => {
            let menu = menu.clone();
            host.on_click(&button, Box::new(move || menu.open()));
        }
        None => debug!("No #{} control, skipping open binding", config.menu_button_id),
    }

    match host.element_by_id(&config.close_menu_id) {
        Some(button) => {
            let menu = menu.clone();
            host.on_click(&button, Box::new(move || menu.close()));
        }
        None => debug!("No #{} control, skipping close binding", config.close_menu_id),
    }

    // Following a link closes the panel so the target section is visible.
    for link in host.query_selector_all(&config.menu_link_selector) {
        let menu = menu.clone();
        host.on_click(&link, Box::new(move || menu.close()));
    }

    menu
}
