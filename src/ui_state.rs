use std::cell::Cell;

use crate::host::Host;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MenuState {
    #[default]
    Closed,
    Open,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuEvent {
    OpenRequested,
    CloseRequested,
}

impl MenuState {
    /// The next state depends only on the event: close is idempotent, and
    /// opening an open menu keeps it open.
    pub fn next(self, event: MenuEvent) -> MenuState {
        match event {
            MenuEvent::OpenRequested => MenuState::Open,
            MenuEvent::CloseRequested => MenuState::Closed,
        }
    }

    pub fn panel_transform(self) -> &'static str {
        match self {
            MenuState::Open => "translateX(0)",
            MenuState::Closed => "translateX(-100%)",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ButtonVisibility {
    Visible,
    Hidden,
}

impl ButtonVisibility {
    pub fn for_offset(offset: f64, threshold: f64) -> Self {
        if offset > threshold {
            ButtonVisibility::Visible
        } else {
            ButtonVisibility::Hidden
        }
    }

    pub fn opacity(self) -> &'static str {
        match self {
            ButtonVisibility::Visible => "1",
            ButtonVisibility::Hidden => "0",
        }
    }

    /// A hidden button must not catch clicks while it fades out.
    pub fn pointer_events(self) -> &'static str {
        match self {
            ButtonVisibility::Visible => "auto",
            ButtonVisibility::Hidden => "none",
        }
    }
}

/// Page-wide UI state owned by the controller.
///
/// `lock_scroll`/`unlock_scroll` are the only writers of the page scroll
/// setting.
pub struct UiContext<H: Host> {
    host: H,
    menu: Cell<MenuState>,
    scroll_locked: Cell<bool>,
}

impl<H: Host> UiContext<H> {
    pub fn new(host: H) -> Self {
        Self {
            host,
            menu: Cell::new(MenuState::Closed),
            scroll_locked: Cell::new(false),
        }
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    pub fn menu_state(&self) -> MenuState {
        self.menu.get()
    }

    pub(crate) fn set_menu_state(&self, state: MenuState) {
        self.menu.set(state);
    }

    pub fn is_scroll_locked(&self) -> bool {
        self.scroll_locked.get()
    }

    pub fn lock_scroll(&self) {
        self.host.set_body_style("overflow", "hidden");
        self.scroll_locked.set(true);
    }

    pub fn unlock_scroll(&self) {
        self.host.set_body_style("overflow", "");
        self.scroll_locked.set(false);
    }
}
