//! Bindings for the hosted embedded-checkout widget (stripe.js is loaded by
//! index.html). The widget is wrapped in an explicit handle so there is one
//! teardown path: whoever mounted it destroys it when the client secret
//! changes or the page goes away.

use serde::Serialize;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

use crate::config;

#[wasm_bindgen]
extern "C" {
    type Stripe;

    #[wasm_bindgen(js_name = Stripe, catch)]
    fn stripe_js(publishable_key: &str) -> Result<Stripe, JsValue>;

    #[wasm_bindgen(method, js_name = initEmbeddedCheckout)]
    fn init_embedded_checkout(this: &Stripe, options: &JsValue) -> js_sys::Promise;

    type EmbeddedCheckout;

    #[wasm_bindgen(method)]
    fn mount(this: &EmbeddedCheckout, container: &web_sys::Element);

    #[wasm_bindgen(method)]
    fn destroy(this: &EmbeddedCheckout);
}

#[derive(Serialize)]
struct CheckoutOptions<'a> {
    #[serde(rename = "clientSecret")]
    client_secret: &'a str,
}

pub struct CheckoutWidget {
    checkout: EmbeddedCheckout,
}

impl CheckoutWidget {
    /// Initialize a checkout for one session token and mount it into
    /// `container`. At most one widget may be mounted at a time; the caller
    /// must [`destroy`](Self::destroy) this handle before mounting another.
    pub async fn mount(client_secret: &str, container: &web_sys::Element) -> Result<Self, String> {
        let key = config::stripe_publishable_key()
            .ok_or_else(|| "Stripe not available.".to_string())?;
        let stripe = stripe_js(&key).map_err(|_| "Stripe not available.".to_string())?;

        let options = serde_wasm_bindgen::to_value(&CheckoutOptions { client_secret })
            .map_err(|e| e.to_string())?;
        let promise = stripe.init_embedded_checkout(&options);
        let checkout = wasm_bindgen_futures::JsFuture::from(promise)
            .await
            .map_err(|_| "Could not start checkout.".to_string())?;

        let checkout: EmbeddedCheckout = checkout.unchecked_into();
        checkout.mount(container);
        Ok(Self { checkout })
    }

    pub fn destroy(self) {
        self.checkout.destroy();
    }
}
