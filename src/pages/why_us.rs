use yew::prelude::*;

#[function_component(WhyUs)]
pub fn why_us() -> Html {
    let bullets = [
        (
            "Editorial bones",
            "Swiss grid with generous breathing room; clear proximity and alignment.",
        ),
        (
            "Conversion core",
            "Single goal per page; form flow and messaging designed for action.",
        ),
        (
            "Search honest",
            "SEO baked into structure, not bolted on. Schema, IA, and speed.",
        ),
        (
            "Run-light",
            "Fast stack, simple deploys, and ownership of content.",
        ),
    ];
    html! {
        <section class="container section">
            <h1>{"Why choose CITEKS"}</h1>
            <div class="grid-2">
                {
                    for bullets.iter().map(|(title, detail)| html! {
                        <div key={*title} class="surface pad">
                            <div class="plan-name">{*title}</div>
                            <div class="muted">{*detail}</div>
                        </div>
                    })
                }
            </div>
        </section>
    }
}
