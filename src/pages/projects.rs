use yew::prelude::*;

use crate::showcase::SHOWCASE;

#[function_component(Projects)]
pub fn projects() -> Html {
    html! {
        <section class="container section">
            <h1>{"Projects"}</h1>
            <div class="projects">
                {
                    for SHOWCASE.iter().enumerate().map(|(i, item)| html! {
                        <article key={item.key} class="surface project">
                            <div class="project-head">
                                <div class="card-title">{item.title}</div>
                                <div class="muted">{format!("#{:02}", i + 1)}</div>
                            </div>
                            <img src={item.src} alt={item.title} loading="lazy"/>
                            <p class="muted pad">{item.blurb}</p>
                        </article>
                    })
                }
            </div>
        </section>
    }
}
