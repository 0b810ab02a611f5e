use yew::prelude::*;

use crate::config;

#[function_component(PrivacyPolicy)]
pub fn privacy_policy() -> Html {
    html! {
        <section class="container section">
            <h1>{"Privacy Policy"}</h1>
            <div class="surface pad legal">
                <p><b>{"Who we are. "}</b>{format!("CITEKS builds fast, modern websites that convert. Contact: {}.", config::SUPPORT_EMAIL)}</p>
                <p><b>{"What we collect. "}</b>{"Form/brief submissions (including uploads). No cookies."}</p>
                <p><b>{"Use of data. "}</b>{"Replies, proposals, service delivery, payments (Stripe), compliance."}</p>
                <p><b>{"Sharing. "}</b>{"Only with providers we use (Netlify, Stripe). No selling of personal data."}</p>
                <p><b>{"Retention. "}</b>{"Kept as needed for services and legal duties, then deleted/anonymized."}</p>
                <p><b>{"Your rights. "}</b>{format!("Email {} for access/correction/deletion.", config::SUPPORT_EMAIL)}</p>
            </div>
            <a href="#/" class="btn btn-acc">{"Back to home"}</a>
        </section>
    }
}

#[function_component(TechTerms)]
pub fn tech_terms() -> Html {
    let rows = [
        ("CTA", "Primary action (call, book, buy)."),
        ("CVR", "Share of visitors who convert."),
        ("IA", "How content is structured and labeled."),
        ("Responsive", "Layouts adapt to screen sizes."),
        ("SEO", "Structure & content for discoverability."),
        ("Schema", "Structured data for search engines."),
        ("CRM", "Where leads are captured and routed."),
        ("Analytics", "Behavior & performance tracking."),
        ("Accessibility", "Usable for people of all abilities."),
        ("Performance", "How quickly a page loads/responds."),
    ];
    html! {
        <section class="container section">
            <h1>{"Technical terms"}</h1>
            <div class="surface pad">
                <ul class="legal">
                    {
                        for rows.iter().map(|(term, detail)| html! {
                            <li key={*term}><b>{format!("{}: ", term)}</b>{*detail}</li>
                        })
                    }
                </ul>
            </div>
            <a href="#/" class="btn btn-acc">{"Back to home"}</a>
        </section>
    }
}
