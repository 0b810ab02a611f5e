use yew::prelude::*;

#[function_component(NotFound)]
pub fn not_found() -> Html {
    html! {
        <section class="container section">
            <h1>{"Page not found"}</h1>
            <a href="#/" class="btn btn-acc">{"Go home"}</a>
        </section>
    }
}
