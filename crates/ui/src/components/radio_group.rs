use dioxus::prelude::*;

#[component]
pub fn RadioGroup(
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    rsx! {
        div { class: "radio-group", role: "radiogroup", ..attributes, {children} }
    }
}

/// A native radio input. The parent owns which item is checked.
#[component]
pub fn RadioGroupItem(
    value: String,
    checked: bool,
    #[props(default)] disabled: bool,
    on_select: EventHandler<String>,
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
) -> Element {
    let selected_value = value.clone();
    rsx! {
        input {
            class: "radio-item",
            r#type: "radio",
            value: "{value}",
            checked,
            disabled,
            onchange: move |_| on_select.call(selected_value.clone()),
            ..attributes,
        }
    }
}
