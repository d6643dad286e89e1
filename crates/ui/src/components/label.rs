use dioxus::prelude::*;

#[component]
pub fn Label(
    html_for: String,
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    rsx! {
        label { class: "label", r#for: "{html_for}", ..attributes, {children} }
    }
}
