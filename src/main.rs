use chrono::{Datelike, Utc};
use log::{info, Level};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::MouseEvent;
use yew::prelude::*;

mod api;
mod catalog;
mod config;
mod forms;
mod nav;
mod routing;
mod showcase;
mod stripe;

mod pages {
    pub mod brief;
    pub mod fields;
    pub mod home;
    pub mod not_found;
    pub mod pay;
    pub mod projects;
    pub mod termsprivacy;
    pub mod thank_you;
    pub mod why_us;
}

use pages::{
    brief::Brief,
    home::Home,
    not_found::NotFound,
    pay::Pay,
    projects::Projects,
    termsprivacy::{PrivacyPolicy, TechTerms},
    thank_you::ThankYou,
    why_us::WhyUs,
};
use routing::{dispatch, use_hash_route, Page};

fn switch(page: Page) -> Html {
    match page {
        Page::Home => {
            info!("Rendering Home page");
            html! { <Home /> }
        }
        Page::WhyUs => {
            info!("Rendering Why-us page");
            html! { <WhyUs /> }
        }
        Page::Projects => {
            info!("Rendering Projects page");
            html! { <Projects /> }
        }
        Page::Brief { slug } => {
            info!("Rendering Brief page for {}", slug);
            html! { <Brief slug={slug} /> }
        }
        Page::Pay { slug, rush } => {
            info!("Rendering Pay page for {}", slug);
            html! { <Pay slug={slug} initial_rush={rush} /> }
        }
        Page::ThankYou { session_id } => {
            info!("Rendering Thank-you page");
            html! { <ThankYou session_id={session_id.map(AttrValue::from)} /> }
        }
        Page::Privacy => {
            info!("Rendering Privacy page");
            html! { <PrivacyPolicy /> }
        }
        Page::TechTerms => {
            info!("Rendering Technical-terms page");
            html! { <TechTerms /> }
        }
        Page::NotFound => {
            info!("Rendering Not-found page");
            html! { <NotFound /> }
        }
    }
}

#[function_component(Rail)]
fn rail() -> Html {
    let menu_open = use_state(|| false);

    // Collapse the mobile menu whenever the viewport is resized.
    {
        let menu_open = menu_open.clone();
        use_effect_with_deps(
            move |_| {
                let window = web_sys::window().unwrap();
                let on_resize = Closure::wrap(Box::new(move || {
                    menu_open.set(false);
                }) as Box<dyn FnMut()>);

                window
                    .add_event_listener_with_callback("resize", on_resize.as_ref().unchecked_ref())
                    .unwrap();

                move || {
                    let _ = window.remove_event_listener_with_callback(
                        "resize",
                        on_resize.as_ref().unchecked_ref(),
                    );
                }
            },
            (),
        );
    }

    let go = |id: &'static str| {
        let menu_open = menu_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            nav::arm_scroll_target(id);
            nav::navigate("/");
            menu_open.set(false);
        })
    };

    let close_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |_: MouseEvent| {
            menu_open.set(false);
        })
    };

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            menu_open.set(!*menu_open);
        })
    };

    html! {
        <>
            <aside class="rail">
                <div>
                    <a href="#/" class="logo">{"CITEKS"}</a>
                    <div class="muted">{"Oslo · New York · Amsterdam"}</div>
                    <nav class="rail-nav">
                        <a href="#/">{"Home"}</a>
                        <a href="#/why-us">{"Why us"}</a>
                        <a href="#/projects">{"Projects"}</a>
                        <a href="#/" onclick={go("packages")}>{"Packages"}</a>
                        <a href="#/" onclick={go("contact")} class="btn btn-acc">{"Contact"}</a>
                    </nav>
                </div>
                <div class="muted rail-foot">
                    <div>{"English-first"}</div>
                    <div>{"Registered in NO/US/NL"}</div>
                    <div>{"Conversion-led"}</div>
                </div>
            </aside>

            <div class="topbar">
                <a href="#/" class="logo">{"CITEKS"}</a>
                <button class="burger" onclick={toggle_menu} aria-label="Toggle menu">
                    { if *menu_open { "✕" } else { "☰" } }
                </button>
            </div>
            {
                if *menu_open {
                    html! {
                        <div class="mobile-menu">
                            <nav>
                                <a href="#/" onclick={close_menu.clone()}>{"Home"}</a>
                                <a href="#/why-us" onclick={close_menu.clone()}>{"Why us"}</a>
                                <a href="#/projects" onclick={close_menu}>{"Projects"}</a>
                                <a href="#/" onclick={go("packages")}>{"Packages"}</a>
                                <a href="#/" onclick={go("contact")} class="btn btn-acc">{"Contact"}</a>
                            </nav>
                        </div>
                    }
                } else {
                    html! {}
                }
            }
        </>
    }
}

#[function_component(Footer)]
fn footer() -> Html {
    html! {
        <footer class="footer">
            <div class="container footer-row">
                <div class="muted">{format!("© {} CITEKS — Oslo · New York · Amsterdam", Utc::now().year())}</div>
                <div>
                    <a href="#/privacy" class="footer-link">{"Privacy"}</a>
                    <a href="#/tech-terms" class="footer-link">{"Technical terms"}</a>
                </div>
            </div>
        </footer>
    }
}

#[function_component]
fn App() -> Html {
    let route = use_hash_route();
    let page = dispatch(&route);

    html! {
        <div class="site">
            <Rail />
            <main class="main">
                { switch(page) }
                <Footer />
            </main>
            <style>{GLOBAL_CSS}</style>
        </div>
    }
}

const GLOBAL_CSS: &str = r#"
:root {
    --bg: #0f131a;
    --panel: #131823;
    --hair: rgba(255, 255, 255, 0.12);
    --accent: #e8b465;
    --text: #f3f4f6;
    --muted: rgba(255, 255, 255, 0.62);
}
* { box-sizing: border-box; }
body {
    margin: 0;
    background: var(--bg);
    color: var(--text);
    font-family: "Inter", "Helvetica Neue", Arial, sans-serif;
    line-height: 1.5;
}
a { color: inherit; text-decoration: none; }
.underline { text-decoration: underline; }
.accent { color: var(--accent); }
.muted { color: var(--muted); }
.success { color: #6ee7b7; }
.container { max-width: 1100px; margin: 0 auto; padding: 0 1.5rem; }
.section { padding: 3rem 1.5rem; }
.section-head { display: flex; align-items: center; justify-content: space-between; margin-bottom: 1rem; }
.surface { background: var(--panel); border: 1px solid var(--hair); border-radius: 12px; }
.pad { padding: 1.5rem; }
.btn {
    display: inline-block;
    padding: 0.6rem 1.1rem;
    border-radius: 10px;
    border: 1px solid var(--hair);
    cursor: pointer;
    font: inherit;
}
.btn-acc { background: var(--accent); border-color: var(--accent); color: #14100a; font-weight: 600; }
.btn:disabled { opacity: 0.6; cursor: default; }
.text-link:hover { opacity: 0.8; }

.site { min-height: 100vh; }
.rail {
    position: fixed;
    inset: 0 auto 0 0;
    width: 220px;
    display: none;
    flex-direction: column;
    justify-content: space-between;
    padding: 1.5rem;
    border-right: 1px solid var(--hair);
}
.rail-nav { display: flex; flex-direction: column; gap: 0.75rem; margin-top: 2rem; }
.rail-foot div { margin-top: 0.4rem; }
.logo { font-weight: 700; letter-spacing: 0.08em; }
.topbar {
    position: sticky;
    top: 0;
    z-index: 50;
    display: flex;
    align-items: center;
    justify-content: space-between;
    padding: 0.75rem 1rem;
    background: rgba(15, 19, 26, 0.9);
    backdrop-filter: blur(8px);
    border-bottom: 1px solid var(--hair);
}
.burger { background: none; border: none; color: var(--text); font-size: 1.3rem; cursor: pointer; }
.mobile-menu { border-bottom: 1px solid var(--hair); padding: 0.75rem 1rem; }
.mobile-menu nav { display: flex; flex-direction: column; gap: 0.5rem; }
@media (min-width: 1024px) {
    .rail { display: flex; }
    .topbar, .mobile-menu { display: none; }
    .main { margin-left: 220px; }
}

.hero { padding: 4rem 0 3rem; border-bottom: 1px solid var(--hair); }
.hero h1 { font-size: clamp(2rem, 5vw, 3.4rem); margin: 0; }
.lede { color: var(--muted); max-width: 44rem; }
.hero-actions { display: flex; align-items: center; gap: 1rem; margin-top: 1.5rem; }

.snap-row {
    display: grid;
    grid-auto-flow: column;
    grid-auto-columns: minmax(280px, 1fr);
    gap: 1rem;
    overflow-x: auto;
    scroll-snap-type: x mandatory;
}
.card { overflow: hidden; scroll-snap-align: start; }
.card img { width: 100%; aspect-ratio: 2 / 1; object-fit: contain; background: #0b0f15; }
.card figcaption { padding: 1rem; }
.card-title { font-weight: 600; }

.grid-2 { display: grid; grid-template-columns: repeat(auto-fit, minmax(260px, 1fr)); gap: 1rem; margin-top: 1rem; }
.cell { border: 1px solid var(--hair); border-radius: 10px; padding: 1rem; }
.cell-title { font-weight: 600; }

.plans { display: flex; flex-direction: column; gap: 1rem; }
.plan { display: grid; grid-template-columns: 1fr; }
.plan.highlight { outline: 1px solid var(--accent); }
.plan-head { padding: 1.5rem; border-bottom: 1px solid var(--hair); }
.plan-name { font-size: 1.2rem; font-weight: 600; }
.plan-price { font-size: 1.6rem; font-weight: 700; }
.plan-head .btn { margin-top: 1rem; }
.plan-features { padding: 1.5rem; margin: 0; list-style: none; display: grid; gap: 0.5rem; }
.plan-features .timeline { border-top: 1px solid var(--hair); padding-top: 0.75rem; }
@media (min-width: 768px) {
    .plan { grid-template-columns: 1fr 2fr; }
    .plan-head { border-bottom: none; border-right: 1px solid var(--hair); }
    .plan-features { grid-template-columns: 1fr 1fr; }
    .plan-features .timeline { grid-column: span 2; }
}

.contact-grid { display: grid; gap: 1.5rem; }
@media (min-width: 1024px) { .contact-grid { grid-template-columns: 2fr 3fr; } }
.form-grid { display: grid; grid-template-columns: 1fr; gap: 1rem; margin-top: 1.5rem; }
@media (min-width: 768px) {
    .form-grid { grid-template-columns: 1fr 1fr; }
    .span-2 { grid-column: span 2; }
}
.field label { display: block; margin-bottom: 0.3rem; font-size: 0.9rem; }
.control {
    width: 100%;
    padding: 0.7rem;
    background: transparent;
    color: var(--text);
    border: 1px solid var(--hair);
    border-radius: 10px;
    font: inherit;
}
.control.invalid { border-color: #f87171; }
.field-error { color: #f87171; margin-top: 0.5rem; font-size: 0.9rem; white-space: pre-wrap; }
.form-foot { display: flex; align-items: center; justify-content: space-between; gap: 1rem; }
.form-foot.rule { border-top: 1px solid var(--hair); padding-top: 1rem; }
.check { display: flex; align-items: center; gap: 0.5rem; }
.total { font-size: 1.15rem; font-weight: 600; }
.checkout-container { margin-top: 1.5rem; }

.projects { display: flex; flex-direction: column; gap: 2rem; }
.project img { width: 100%; aspect-ratio: 2 / 1; object-fit: contain; background: #0b0f15; margin-top: 1rem; }
.project-head { display: flex; align-items: center; justify-content: space-between; padding: 1.5rem 1.5rem 0; }

.summary div { margin-top: 0.35rem; }
.legal p, .legal li { margin: 0.5rem 0; color: rgba(255, 255, 255, 0.82); }
.legal { list-style: none; padding-left: 0; }

.footer { border-top: 1px solid var(--hair); margin-top: 3rem; }
.footer-row { display: flex; flex-wrap: wrap; gap: 1rem; align-items: center; justify-content: space-between; padding: 2rem 1.5rem; }
.footer-link { margin-left: 1rem; }
.footer-link:hover { opacity: 0.8; }
"#;

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    console_log::init_with_level(Level::Info).expect("error initializing log");

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}
