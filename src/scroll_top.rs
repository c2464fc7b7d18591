use log::debug;

use crate::config::InteractionConfig;
use crate::host::Host;
use crate::ui_state::ButtonVisibility;

pub fn apply_visibility<H: Host>(host: &H, button: &H::Element, visibility: ButtonVisibility) {
    host.set_style(button, "opacity", visibility.opacity());
    host.set_style(button, "pointer-events", visibility.pointer_events());
}

/// Binds the back-to-top button: visibility follows the scroll offset, and a
/// click requests a smooth scroll to the top.
///
/// Nothing is bound when the button is missing, including the scroll
/// listener, which would otherwise have nothing to update.
pub fn bind<H: Host>(host: &H, config: &InteractionConfig) {
    let Some(button) = host.element_by_id(&config.scroll_top_id) else {
        debug!("No #{} button, skipping scroll-to-top", config.scroll_top_id);
        return;
    };
    let threshold = config.scroll_threshold;

    apply_visibility(host, &button, ButtonVisibility::for_offset(host.scroll_y(), threshold));

    {
        let host_for_scroll = host.clone();
        let button = button.clone();
        host.on_scroll(Box::new(move || {
            let visibility = ButtonVisibility::for_offset(host_for_scroll.scroll_y(), threshold);
            apply_visibility(&host_for_scroll, &button, visibility);
        }));
    }

    let host_for_click = host.clone();
    host.on_click(&button, Box::new(move || host_for_click.scroll_to_top()));
}
