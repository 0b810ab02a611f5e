use std::cell::{Cell, RefCell};
use std::rc::Rc;

use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::api::{self, RequestSeq};
use crate::catalog;
use crate::config;
use crate::pages::not_found::NotFound;
use crate::stripe::CheckoutWidget;

#[derive(Properties, PartialEq)]
pub struct PayProps {
    pub slug: AttrValue,
    /// Seeded from the `rush` query parameter written by the brief page.
    #[prop_or_default]
    pub initial_rush: bool,
}

/// Key for the session-creation effect. A checkout session belongs to one
/// package at one rush setting; re-entering the page with either changed
/// must request a fresh session, even when the component itself is reused
/// across a pay→pay navigation.
fn session_inputs(pkg: &catalog::Package, rush: bool) -> (&'static str, bool) {
    (pkg.slug, rush)
}

#[function_component(Pay)]
pub fn pay(props: &PayProps) -> Html {
    let pkg = match catalog::lookup(&props.slug) {
        Some(pkg) => pkg,
        None => return html! { <NotFound/> },
    };

    let rush = use_state(|| props.initial_rush);
    let client_secret = use_state(|| None::<String>);
    let error = use_state(|| None::<String>);
    // Sequence tags for session creation; a stale completion must never
    // overwrite the result of a newer request.
    let seq = use_mut_ref(RequestSeq::default);
    let container = use_node_ref();

    {
        let client_secret = client_secret.clone();
        let error = error.clone();
        let seq = seq.clone();
        use_effect_with_deps(
            move |deps: &(&'static str, bool)| {
                let (slug, rush) = *deps;
                let tag = seq.borrow_mut().issue();
                client_secret.set(None);
                spawn_local(async move {
                    let result = api::create_checkout_session(slug, rush).await;
                    if !seq.borrow().is_current(tag) {
                        return;
                    }
                    match result {
                        Ok(secret) => {
                            error.set(None);
                            client_secret.set(Some(secret));
                        }
                        Err(err) => {
                            client_secret.set(None);
                            error.set(Some(err.user_message(&format!(
                                "Could not start checkout. Email {}.",
                                config::SUPPORT_EMAIL
                            ))));
                        }
                    }
                });
                || ()
            },
            session_inputs(pkg, *rush),
        );
    }

    // Widget lifecycle: one mount per client secret, destroyed when the
    // secret changes or the page unmounts.
    {
        let container = container.clone();
        let error = error.clone();
        use_effect_with_deps(
            move |secret: &Option<String>| {
                let widget: Rc<RefCell<Option<CheckoutWidget>>> = Rc::new(RefCell::new(None));
                let alive = Rc::new(Cell::new(true));

                if let (Some(secret), Some(target)) =
                    (secret.clone(), container.cast::<web_sys::Element>())
                {
                    let widget = widget.clone();
                    let alive = alive.clone();
                    spawn_local(async move {
                        match CheckoutWidget::mount(&secret, &target).await {
                            Ok(handle) => {
                                if alive.get() {
                                    *widget.borrow_mut() = Some(handle);
                                } else {
                                    // unmounted while initializing
                                    handle.destroy();
                                }
                            }
                            Err(msg) => {
                                if alive.get() {
                                    error.set(Some(msg));
                                }
                            }
                        }
                    });
                }

                move || {
                    alive.set(false);
                    if let Some(handle) = widget.borrow_mut().take() {
                        handle.destroy();
                    }
                }
            },
            (*client_secret).clone(),
        );
    }

    let toggle_rush = {
        let rush = rush.clone();
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            rush.set(input.checked());
        })
    };

    let total = pkg.total(*rush);

    html! {
        <section class="container section">
            <h1>{"Payment"}</h1>
            <div class="surface pad">
                <div class="plan-name">{pkg.name}</div>
                <div class="muted">
                    {format!("Base price {}. Typical timeline {} days.", pkg.display_price, pkg.days)}
                </div>
                <div class="form-foot rule">
                    <label class="check">
                        <input type="checkbox" checked={*rush} onchange={toggle_rush}/>
                        {format!(" Rush delivery: finish in {} days (+${})", pkg.rush_days, pkg.rush_fee)}
                    </label>
                    <div class="total accent">{format!("Total: ${}", total)}</div>
                </div>
                {
                    if let Some(msg) = (*error).as_ref() {
                        html! { <div class="field-error">{msg.clone()}</div> }
                    } else {
                        html! {}
                    }
                }
                <div ref={container} id="checkout" class="checkout-container"></div>
                <div class="muted">{"Secure payment powered by Stripe."}</div>
            </div>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn session_is_keyed_by_package_and_rush() {
        let scale = catalog::lookup("scale").unwrap();
        let starter = catalog::lookup("starter").unwrap();

        // landing on a different package must look like a new session input,
        // even at the same rush setting
        assert_ne!(session_inputs(scale, false), session_inputs(starter, false));
        assert_ne!(session_inputs(scale, true), session_inputs(starter, true));

        // and toggling rush on one package changes the key too
        assert_ne!(session_inputs(scale, false), session_inputs(scale, true));
        assert_eq!(session_inputs(scale, true), ("scale", true));
    }
}
