use dioxus::prelude::*;

/// Centered dialog over a dimmed backdrop. Clicking the backdrop or the
/// close button dismisses it; clicks inside the card do not bubble out.
#[component]
pub fn Modal(title: String, on_close: EventHandler<()>, children: Element) -> Element {
    rsx! {
        div {
            class: "modal-backdrop",
            onclick: move |_| on_close.call(()),
            div {
                class: "modal-card",
                onclick: move |evt| evt.stop_propagation(),
                div {
                    class: "modal-header",
                    h3 { class: "modal-title", "{title}" }
                    button {
                        class: "modal-close",
                        r#type: "button",
                        onclick: move |_| on_close.call(()),
                        "\u{00d7}"
                    }
                }
                {children}
            }
        }
    }
}
