use dioxus::prelude::*;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum AlertVariant {
    #[default]
    Default,
    Destructive,
}

#[component]
pub fn Alert(
    #[props(default)] variant: AlertVariant,
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    let class = match variant {
        AlertVariant::Default => "alert",
        AlertVariant::Destructive => "alert alert--destructive",
    };
    rsx! {
        div { class, role: "alert", ..attributes, {children} }
    }
}

#[component]
pub fn AlertDescription(
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    rsx! {
        div { class: "alert-description", ..attributes, {children} }
    }
}
