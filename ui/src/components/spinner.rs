use dioxus::prelude::*;

/// Indeterminate loading indicator.
#[component]
pub fn Spinner(#[props(default = 24)] size: u32) -> Element {
    rsx! {
        div {
            class: "spinner",
            style: "width: {size}px; height: {size}px;",
        }
    }
}
