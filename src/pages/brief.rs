use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::api;
use crate::catalog;
use crate::config;
use crate::forms::{BriefForm, FieldErrors};
use crate::nav;
use crate::pages::fields::{TextArea, TextInput};
use crate::pages::not_found::NotFound;

#[derive(Properties, PartialEq)]
pub struct BriefProps {
    pub slug: AttrValue,
}

#[function_component(Brief)]
pub fn brief(props: &BriefProps) -> Html {
    let pkg = match catalog::lookup(&props.slug) {
        Some(pkg) => pkg,
        None => return html! { <NotFound/> },
    };

    let form = use_state(BriefForm::default);
    let errors = use_state(FieldErrors::new);
    let rush = use_state(|| false);
    let submitting = use_state(|| false);
    let error = use_state(|| None::<String>);
    let file_input = use_node_ref();

    let total = pkg.total(*rush);

    let set_field = |apply: fn(&mut BriefForm, String)| {
        let form = form.clone();
        Callback::from(move |value: String| {
            let mut next = (*form).clone();
            apply(&mut next, value);
            form.set(next);
        })
    };

    let toggle_rush = {
        let rush = rush.clone();
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            rush.set(input.checked());
        })
    };

    let onsubmit = {
        let form = form.clone();
        let errors = errors.clone();
        let rush = rush.clone();
        let submitting = submitting.clone();
        let error = error.clone();
        let file_input = file_input.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if *submitting {
                return;
            }

            // Attachments are read once here; nothing is retained after
            // the attempt either way.
            let files: Vec<web_sys::File> = file_input
                .cast::<HtmlInputElement>()
                .and_then(|input| input.files())
                .map(|list| (0..list.length()).filter_map(|i| list.item(i)).collect())
                .unwrap_or_default();

            let field_errors = form.validate(files.len());
            let blocked = !field_errors.is_empty();
            errors.set(field_errors);
            if blocked {
                return;
            }

            submitting.set(true);
            let snapshot = (*form).clone();
            let rush_requested = *rush;
            let submitting = submitting.clone();
            let error = error.clone();
            spawn_local(async move {
                match api::submit_brief(pkg, &snapshot, &files, rush_requested).await {
                    Ok(()) => nav::navigate(&format!(
                        "/pay/{}?rush={}",
                        pkg.slug,
                        if rush_requested { "1" } else { "0" }
                    )),
                    Err(err) => {
                        error.set(Some(err.user_message(&format!(
                            "Submission failed. Please email {}",
                            config::SUPPORT_EMAIL
                        ))));
                        submitting.set(false);
                    }
                }
            });
        })
    };

    let err = |field: &str| errors.get(field).map(|m| AttrValue::from(*m));

    html! {
        <section class="container section">
            <h1>{format!("{} brief", pkg.name)}</h1>
            <p class="muted">
                {format!(
                    "{} · Typical timeline: {} days (rush {} days +${})",
                    pkg.display_price, pkg.days, pkg.rush_days, pkg.rush_fee
                )}
            </p>
            <form
                name={format!("brief-{}", pkg.slug)}
                data-netlify="true"
                netlify-honeypot="bot-field"
                enctype="multipart/form-data"
                class="surface pad form-grid"
                {onsubmit}
            >
                <input type="hidden" name="form-name" value={format!("brief-{}", pkg.slug)}/>
                <input type="hidden" name="bot-field"/>
                <TextInput
                    label="Company / brand"
                    value={form.company.clone()}
                    onchange={set_field(|f, v| f.company = v)}
                    error={err("company")}
                />
                <TextInput
                    label="Contact name"
                    value={form.contact.clone()}
                    onchange={set_field(|f, v| f.contact = v)}
                    error={err("contact")}
                />
                <TextInput
                    label="Email"
                    kind="email"
                    value={form.email.clone()}
                    onchange={set_field(|f, v| f.email = v)}
                    error={err("email")}
                />
                <TextInput
                    label="Phone"
                    value={form.phone.clone()}
                    onchange={set_field(|f, v| f.phone = v)}
                    error={err("phone")}
                />
                <TextArea
                    label="Goal of the site"
                    value={form.goal.clone()}
                    onchange={set_field(|f, v| f.goal = v)}
                    error={err("goal")}
                />
                <TextInput
                    label="Estimated pages"
                    value={form.pages.clone()}
                    onchange={set_field(|f, v| f.pages = v)}
                    error={err("pages")}
                />
                <TextArea
                    label="Available assets — notes"
                    value={form.assets_note.clone()}
                    onchange={set_field(|f, v| f.assets_note = v)}
                    error={err("assets_note")}
                />
                <div class="field">
                    <label>{"Upload assets (images, logos, docs)"}</label>
                    <input ref={file_input} type="file" multiple=true class="control"/>
                    <div class="muted">{"Attach multiple files if needed."}</div>
                </div>
                <TextArea
                    label="SEO targets (keywords/locations)"
                    value={form.seo.clone()}
                    onchange={set_field(|f, v| f.seo = v)}
                />
                <TextInput
                    label="Integrations (maps, booking, payments)"
                    value={form.integrations.clone()}
                    onchange={set_field(|f, v| f.integrations = v)}
                />
                <TextInput
                    label="E-commerce (if needed)"
                    value={form.ecommerce.clone()}
                    onchange={set_field(|f, v| f.ecommerce = v)}
                />
                <TextInput
                    label="CRM (if needed)"
                    value={form.crm.clone()}
                    onchange={set_field(|f, v| f.crm = v)}
                />
                <TextArea
                    label="Reference sites (what you like)"
                    value={form.references.clone()}
                    onchange={set_field(|f, v| f.references = v)}
                />
                <TextInput
                    label="Competitors"
                    value={form.competitors.clone()}
                    onchange={set_field(|f, v| f.competitors = v)}
                />
                <TextArea
                    label="Notes / constraints"
                    value={form.notes.clone()}
                    onchange={set_field(|f, v| f.notes = v)}
                />
                <div class="span-2 form-foot rule">
                    <label class="check">
                        <input type="checkbox" checked={*rush} onchange={toggle_rush}/>
                        {format!(" Rush delivery: finish in {} days (+${})", pkg.rush_days, pkg.rush_fee)}
                    </label>
                    <div class="total accent">{format!("Total: ${}", total)}</div>
                </div>
                {
                    if let Some(msg) = (*error).as_ref() {
                        html! { <div class="span-2 field-error">{msg.clone()}</div> }
                    } else {
                        html! {}
                    }
                }
                <div class="span-2 form-foot">
                    <span/>
                    <button class="btn btn-acc" type="submit" disabled={*submitting}>
                        { if *submitting { "Sending…" } else { "Continue" } }
                    </button>
                </div>
            </form>
        </section>
    }
}
