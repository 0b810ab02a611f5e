use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::api;
use crate::catalog::PACKAGES;
use crate::config;
use crate::forms::{ContactForm as ContactFormData, FieldErrors};
use crate::nav;
use crate::pages::fields::{SelectField, TextArea, TextInput};
use crate::showcase::SHOWCASE;

const SCROLL_SETTLE_MS: u32 = 60;

#[function_component(Home)]
pub fn home() -> Html {
    // Rail links arm a section id before navigating here; consume it once
    // and scroll after layout has settled.
    use_effect_with_deps(
        |_| {
            if let Some(target) = nav::take_scroll_target() {
                spawn_local(async move {
                    gloo_timers::future::TimeoutFuture::new(SCROLL_SETTLE_MS).await;
                    let element = web_sys::window()
                        .and_then(|w| w.document())
                        .and_then(|d| d.get_element_by_id(&target));
                    if let Some(element) = element {
                        let mut options = web_sys::ScrollIntoViewOptions::new();
                        options.behavior(web_sys::ScrollBehavior::Smooth);
                        element.scroll_into_view_with_scroll_into_view_options(&options);
                    }
                });
            }
            || ()
        },
        (),
    );

    html! {
        <>
            <Hero/>
            <RowShowcase/>
            <Method/>
            <Plans/>
            <ContactBlock/>
        </>
    }
}

#[function_component(Hero)]
fn hero() -> Html {
    let see_packages = Callback::from(|e: MouseEvent| {
        e.prevent_default();
        nav::arm_scroll_target("packages");
        nav::navigate("/");
    });

    html! {
        <section class="hero">
            <div class="container">
                <h1>{"Websites that "}<span class="accent">{"convert"}</span>{"— engineered with restraint."}</h1>
                <p class="lede">
                    {"We ship calm, fast, premium interfaces that push one decision per page. \
                      Editorial structure. Motion with purpose. SEO-ready. Easy to run."}
                </p>
                <div class="hero-actions">
                    <a href="#/projects" class="text-link">{"View projects →"}</a>
                    <a href="#/" onclick={see_packages} class="btn btn-acc">{"See packages"}</a>
                </div>
            </div>
        </section>
    }
}

#[function_component(RowShowcase)]
fn row_showcase() -> Html {
    html! {
        <section class="container section">
            <div class="section-head">
                <h2>{"Selected work"}</h2>
                <a href="#/projects" class="text-link">{"All projects"}</a>
            </div>
            <div class="snap-row">
                {
                    for SHOWCASE.iter().map(|item| html! {
                        <figure key={item.key} class="surface card">
                            <img src={item.src} alt={item.title} loading="lazy"/>
                            <figcaption>
                                <div class="card-title">{item.title}</div>
                                <div class="muted">{item.blurb}</div>
                            </figcaption>
                        </figure>
                    })
                }
            </div>
        </section>
    }
}

#[function_component(Method)]
fn method() -> Html {
    let items = [
        ("Clarity first", "One goal per page. Labels, not slogans."),
        ("Trust quickly", "Proof, pricing, and guarantees up-front."),
        ("Motion with intent", "Micro-feedback that guides—not performs."),
        ("Friction down", "Fast loads, short forms, clear paths."),
    ];
    html! {
        <section class="container section">
            <div class="surface pad">
                <h2>{"Method"}</h2>
                <div class="grid-2">
                    {
                        for items.iter().map(|(title, detail)| html! {
                            <div key={*title} class="cell">
                                <div class="cell-title">{*title}</div>
                                <div class="muted">{*detail}</div>
                            </div>
                        })
                    }
                </div>
            </div>
        </section>
    }
}

#[function_component(Plans)]
fn plans() -> Html {
    html! {
        <section id="packages" class="container section">
            <h2>{"Packages"}</h2>
            <div class="plans">
                {
                    for PACKAGES.iter().map(|pkg| html! {
                        <div key={pkg.slug} class={classes!("surface", "plan", pkg.highlight.then(|| "highlight"))}>
                            <div class="plan-head">
                                <div class="plan-name">{pkg.name}</div>
                                <div class="plan-price accent">{pkg.display_price}</div>
                                <div class="muted">{pkg.blurb}</div>
                                <div class="muted">{format!("Perfect for: {}", pkg.perfect_for)}</div>
                                <a href={format!("#/brief/{}", pkg.slug)} class="btn btn-acc">{pkg.cta}</a>
                            </div>
                            <ul class="plan-features">
                                { for pkg.features.iter().map(|f| html! { <li key={*f}>{*f}</li> }) }
                                <li class="muted timeline">
                                    {format!("Typical timeline: {} days (rush {} days +${})", pkg.days, pkg.rush_days, pkg.rush_fee)}
                                </li>
                            </ul>
                        </div>
                    })
                }
            </div>
        </section>
    }
}

#[function_component(ContactBlock)]
fn contact_block() -> Html {
    html! {
        <section id="contact" class="container section">
            <div class="contact-grid">
                <div class="surface pad">
                    <h2>{"Let’s build ROI"}</h2>
                    <p class="muted">{"Tell us about your goals. We’ll reply quickly."}</p>
                    <div class="muted">{"Oslo · New York · Amsterdam"}</div>
                    <a href={format!("mailto:{}", config::SUPPORT_EMAIL)} class="accent underline">
                        {config::SUPPORT_EMAIL}
                    </a>
                </div>
                <ContactFormView/>
            </div>
        </section>
    }
}

#[function_component(ContactFormView)]
fn contact_form_view() -> Html {
    let form = use_state(ContactFormData::new);
    let errors = use_state(FieldErrors::new);
    let sent = use_state(|| false);
    let error = use_state(|| None::<String>);

    let set_field = |apply: fn(&mut ContactFormData, String)| {
        let form = form.clone();
        Callback::from(move |value: String| {
            let mut next = (*form).clone();
            apply(&mut next, value);
            form.set(next);
        })
    };

    let onsubmit = {
        let form = form.clone();
        let errors = errors.clone();
        let sent = sent.clone();
        let error = error.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let field_errors = form.validate();
            let blocked = !field_errors.is_empty();
            errors.set(field_errors);
            if blocked {
                return;
            }
            let snapshot = (*form).clone();
            let sent = sent.clone();
            let error = error.clone();
            spawn_local(async move {
                match api::submit_contact(&snapshot).await {
                    Ok(()) => {
                        error.set(None);
                        sent.set(true);
                    }
                    Err(err) => error.set(Some(err.user_message(&format!(
                        "Submission failed. Please email {}",
                        config::SUPPORT_EMAIL
                    )))),
                }
            });
        })
    };

    let err = |field: &str| errors.get(field).map(|m| AttrValue::from(*m));

    let titles: Vec<(AttrValue, AttrValue)> = ["Mr", "Ms", "Mx", "Dr", "Prof", "Other"]
        .into_iter()
        .map(|t| (AttrValue::Static(t), AttrValue::Static(t)))
        .collect();
    let budgets: Vec<(AttrValue, AttrValue)> = vec![
        (AttrValue::Static(""), AttrValue::Static("Select…")),
        (AttrValue::Static("Up to $1,000"), AttrValue::Static("Up to $1,000")),
        (AttrValue::Static("$1,000 – $2,500"), AttrValue::Static("$1,000 – $2,500")),
        (AttrValue::Static("$2,500 – $7,000"), AttrValue::Static("$2,500 – $7,000")),
        (AttrValue::Static("$7,000+"), AttrValue::Static("$7,000+")),
    ];

    html! {
        <form name="contact" data-netlify="true" netlify-honeypot="bot-field" class="surface pad form-grid" {onsubmit}>
            <input type="hidden" name="form-name" value="contact"/>
            <input type="hidden" name="bot-field"/>
            <SelectField
                label="Title"
                value={form.title.clone()}
                options={titles}
                onchange={set_field(|f, v| f.title = v)}
            />
            <TextInput
                label="First name"
                value={form.first.clone()}
                onchange={set_field(|f, v| f.first = v)}
                error={err("first")}
            />
            <TextInput
                label="Surname"
                value={form.last.clone()}
                onchange={set_field(|f, v| f.last = v)}
                error={err("last")}
            />
            <TextInput
                label="Email"
                kind="email"
                value={form.email.clone()}
                onchange={set_field(|f, v| f.email = v)}
                error={err("email")}
            />
            <TextInput
                label="Project type"
                value={form.project.clone()}
                onchange={set_field(|f, v| f.project = v)}
                error={err("project")}
            />
            <SelectField
                label="Budget"
                value={form.budget.clone()}
                options={budgets}
                onchange={set_field(|f, v| f.budget = v)}
                error={err("budget")}
            />
            <TextArea
                label="Message"
                rows={5}
                value={form.message.clone()}
                onchange={set_field(|f, v| f.message = v)}
            />
            <div class="span-2 form-foot">
                <div class="muted">{"No spam. We reply within 24h."}</div>
                <button class="btn btn-acc" type="submit">{"Send"}</button>
            </div>
            {
                if *sent {
                    html! { <div class="span-2 success">{"Thanks! Your message is in."}</div> }
                } else if let Some(msg) = (*error).as_ref() {
                    html! { <div class="span-2 field-error">{msg.clone()}</div> }
                } else {
                    html! {}
                }
            }
        </form>
    }
}
