use wasm_bindgen::JsValue;

#[cfg(debug_assertions)]
pub fn get_functions_url() -> &'static str {
    "http://localhost:8888/.netlify/functions"  // Netlify dev server when running locally
}

#[cfg(not(debug_assertions))]
pub fn get_functions_url() -> &'static str {
    "/.netlify/functions"
}

/// Where form submissions (contact + briefs) are posted. Netlify ingests
/// them from the site root.
pub fn get_forms_url() -> &'static str {
    "/"
}

pub const SUPPORT_EMAIL: &str = "contact@citeks.net";

/// Publishable key for the embedded checkout widget. Baked in at compile
/// time when STRIPE_PUBLISHABLE_KEY is set, otherwise read from the
/// `window.STRIPE_PUBLISHABLE_KEY` global set by the host page.
pub fn stripe_publishable_key() -> Option<String> {
    if let Some(key) = option_env!("STRIPE_PUBLISHABLE_KEY") {
        return Some(key.to_string());
    }
    let window = web_sys::window()?;
    js_sys::Reflect::get(&window, &JsValue::from_str("STRIPE_PUBLISHABLE_KEY"))
        .ok()
        .and_then(|v| v.as_string())
        .filter(|s| !s.is_empty())
}
