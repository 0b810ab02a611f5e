//! Small labelled form controls shared by the contact and brief forms.

use web_sys::{HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct TextInputProps {
    pub label: AttrValue,
    pub value: AttrValue,
    pub onchange: Callback<String>,
    #[prop_or_default]
    pub error: Option<AttrValue>,
    #[prop_or(AttrValue::Static("text"))]
    pub kind: AttrValue,
}

#[function_component(TextInput)]
pub fn text_input(props: &TextInputProps) -> Html {
    let oninput = {
        let onchange = props.onchange.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            onchange.emit(input.value());
        })
    };
    html! {
        <div class="field">
            <label>{props.label.clone()}</label>
            <input
                type={props.kind.clone()}
                value={props.value.clone()}
                {oninput}
                class={classes!("control", props.error.is_some().then(|| "invalid"))}
            />
            {
                if let Some(err) = &props.error {
                    html! { <div class="field-error">{err.clone()}</div> }
                } else {
                    html! {}
                }
            }
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct TextAreaProps {
    pub label: AttrValue,
    pub value: AttrValue,
    pub onchange: Callback<String>,
    #[prop_or_default]
    pub error: Option<AttrValue>,
    #[prop_or(4)]
    pub rows: u32,
}

#[function_component(TextArea)]
pub fn text_area(props: &TextAreaProps) -> Html {
    let oninput = {
        let onchange = props.onchange.clone();
        Callback::from(move |e: InputEvent| {
            let area: HtmlTextAreaElement = e.target_unchecked_into();
            onchange.emit(area.value());
        })
    };
    html! {
        <div class="field span-2">
            <label>{props.label.clone()}</label>
            <textarea
                rows={props.rows.to_string()}
                value={props.value.clone()}
                {oninput}
                class={classes!("control", props.error.is_some().then(|| "invalid"))}
            />
            {
                if let Some(err) = &props.error {
                    html! { <div class="field-error">{err.clone()}</div> }
                } else {
                    html! {}
                }
            }
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct SelectFieldProps {
    pub label: AttrValue,
    pub value: AttrValue,
    pub options: Vec<(AttrValue, AttrValue)>,
    pub onchange: Callback<String>,
    #[prop_or_default]
    pub error: Option<AttrValue>,
}

#[function_component(SelectField)]
pub fn select_field(props: &SelectFieldProps) -> Html {
    let onchange = {
        let onchange = props.onchange.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            onchange.emit(select.value());
        })
    };
    html! {
        <div class="field">
            <label>{props.label.clone()}</label>
            <select
                {onchange}
                class={classes!("control", props.error.is_some().then(|| "invalid"))}
            >
                {
                    for props.options.iter().map(|(value, label)| html! {
                        <option value={value.clone()} selected={*value == props.value}>
                            {label.clone()}
                        </option>
                    })
                }
            </select>
            {
                if let Some(err) = &props.error {
                    html! { <div class="field-error">{err.clone()}</div> }
                } else {
                    html! {}
                }
            }
        </div>
    }
}
