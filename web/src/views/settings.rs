use dioxus::prelude::*;
use ui::icons::*;
use ui::{use_auth, Icon};

use crate::Route;

/// Read-only profile card for the signed-in user.
#[component]
pub fn Settings() -> Element {
    let auth = use_auth();
    let nav = use_navigator();
    let state = auth.state();

    let Some(user) = state.user else {
        return rsx! {};
    };
    let role = user.role.label();
    let phone = if user.phone.is_empty() { "-".to_string() } else { user.phone.clone() };

    rsx! {
        div { class: "page-header",
            h2 { "Settings" }
        }

        div { class: "card profile-card",
            h3 { "Profile" }
            dl { class: "profile-fields",
                dt { "Name" }
                dd { "{user.full_name}" }
                dt { "Email" }
                dd { "{user.email}" }
                dt { "Role" }
                dd { {role} }
                dt { "Phone" }
                dd { "{phone}" }
            }
            button {
                class: "btn danger",
                onclick: move |_| {
                    auth.logout();
                    nav.replace(Route::Login {});
                },
                Icon { icon: FaRightFromBracket, width: 16, height: 16 }
                "Sign Out"
            }
        }
    }
}
