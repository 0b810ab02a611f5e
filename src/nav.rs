//! Programmatic navigation and the deferred-scroll handoff.

/// The one sessionStorage key used by the site: a pending scroll-target id
/// consumed on the next home render.
const SCROLL_KEY: &str = "scrollTo";

/// Change the location fragment without reloading the page. `to` may be
/// given with or without the leading `#`.
pub fn navigate(to: &str) {
    let target = if to.starts_with('#') {
        to.to_string()
    } else {
        format!("#{}", to)
    };
    if let Some(window) = web_sys::window() {
        let _ = window.location().set_hash(&target);
    }
}

/// Remember a section id to scroll to after the next navigation home.
/// Last write wins.
pub fn arm_scroll_target(id: &str) {
    if let Some(storage) = session_storage() {
        let _ = storage.set_item(SCROLL_KEY, id);
    }
}

/// Take the pending scroll target, clearing it unconditionally so re-renders
/// never replay the scroll.
pub fn take_scroll_target() -> Option<String> {
    let storage = session_storage()?;
    let target = storage.get_item(SCROLL_KEY).ok().flatten();
    if target.is_some() {
        let _ = storage.remove_item(SCROLL_KEY);
    }
    target
}

fn session_storage() -> Option<web_sys::Storage> {
    web_sys::window().and_then(|w| w.session_storage().ok()).flatten()
}
