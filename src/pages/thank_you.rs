use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::api::{self, PurchaseSummary};
use crate::config;
use crate::nav;

#[derive(Properties, PartialEq)]
pub struct ThankYouProps {
    /// Appended to the redirect URL by the payment provider. Without it the
    /// page stays a generic acknowledgement and nothing is fetched.
    #[prop_or_default]
    pub session_id: Option<AttrValue>,
}

#[function_component(ThankYou)]
pub fn thank_you(props: &ThankYouProps) -> Html {
    let summary = use_state(|| None::<PurchaseSummary>);
    let error = use_state(|| None::<String>);

    {
        let summary = summary.clone();
        let error = error.clone();
        use_effect_with_deps(
            move |session_id: &Option<AttrValue>| {
                if let Some(session_id) = session_id.clone() {
                    spawn_local(async move {
                        match api::fetch_purchase_summary(&session_id).await {
                            Ok(details) => summary.set(Some(details)),
                            // Payment itself is presumed fine; only the
                            // detail display degrades.
                            Err(_) => error.set(Some(
                                "We received your payment, but couldn’t load the details. \
                                 We’ll email you shortly."
                                    .to_string(),
                            )),
                        }
                    });
                }
                || ()
            },
            props.session_id.clone(),
        );
    }

    let contact_link = Callback::from(|e: MouseEvent| {
        e.prevent_default();
        nav::arm_scroll_target("contact");
        nav::navigate("/");
    });

    html! {
        <section class="container section">
            <h1>{"Thank you!"}</h1>
            <p class="muted">
                {"We’ll email you shortly from "}<b>{config::SUPPORT_EMAIL}</b>{" with next steps."}
            </p>
            {
                if let Some(summary) = (*summary).as_ref() {
                    html! {
                        <div class="surface pad">
                            <div class="plan-name">{"Purchase summary"}</div>
                            <div class="summary">
                                <div><b>{"Status: "}</b>{summary.payment_status.clone().unwrap_or_else(|| "—".to_string())}</div>
                                <div><b>{"Transaction ID: "}</b>{summary.payment_intent_id.clone().unwrap_or_else(|| "—".to_string())}</div>
                                <div><b>{"Package: "}</b>{summary.metadata.package.clone().unwrap_or_else(|| "—".to_string())}</div>
                                <div><b>{"Rush: "}</b>{ if summary.rush() { "Yes" } else { "No" } }</div>
                                <div><b>{"Total: "}</b>{summary.nice_total()}</div>
                            </div>
                            <div class="muted">
                                {"Forgot something? Use the "}
                                <a href="#/" onclick={contact_link} class="underline">{"contact form"}</a>
                                {" and include your Transaction ID."}
                            </div>
                        </div>
                    }
                } else {
                    html! {}
                }
            }
            {
                if let Some(msg) = (*error).as_ref() {
                    html! { <div class="field-error">{msg.clone()}</div> }
                } else {
                    html! {}
                }
            }
            <a href="#/" class="btn btn-acc">{"Back to home"}</a>
        </section>
    }
}
