//! Auth-gated application chrome: sidebar navigation around the page outlet.

use dioxus::prelude::*;
use ui::components::Spinner;
use ui::icons::*;
use ui::{use_auth, Icon};

use crate::Route;

/// Route guard plus layout. Every protected page renders inside this.
///
/// Order matters: while resolution is still in flight we render only a
/// spinner — neither the redirect nor the protected subtree — so a slow
/// `users/me/` never flashes the login page at an authenticated user.
#[component]
pub fn Layout() -> Element {
    let auth = use_auth();
    let nav = use_navigator();
    let state = auth.state();

    if state.loading {
        return rsx! {
            div { class: "flex-center h-screen",
                Spinner { size: 40 }
            }
        };
    }

    if state.token.is_none() {
        nav.replace(Route::Login {});
        return rsx! {};
    }

    let (user_name, user_role) = state
        .user
        .as_ref()
        .map(|u| (u.full_name.clone(), u.role.label()))
        .unwrap_or_default();

    rsx! {
        div { class: "app-shell",
            aside { class: "sidebar",
                div { class: "sidebar-brand",
                    Icon { icon: FaSeedling, width: 22, height: 22 }
                    span { "Bondeni Farm" }
                }
                nav { class: "sidebar-nav",
                    NavLink { to: Route::Dashboard {}, label: "Dashboard", icon: rsx! { Icon { icon: FaChartLine, width: 16, height: 16 } } }
                    NavLink { to: Route::Livestock {}, label: "Livestock", icon: rsx! { Icon { icon: FaCow, width: 16, height: 16 } } }
                    NavLink { to: Route::Produce {}, label: "Produce", icon: rsx! { Icon { icon: FaWheatAwn, width: 16, height: 16 } } }
                    NavLink { to: Route::Inventory {}, label: "Inventory", icon: rsx! { Icon { icon: FaBoxesStacked, width: 16, height: 16 } } }
                    NavLink { to: Route::Workforce {}, label: "Workforce", icon: rsx! { Icon { icon: FaUsers, width: 16, height: 16 } } }
                    NavLink { to: Route::Commerce {}, label: "Commerce", icon: rsx! { Icon { icon: FaMoneyBillWave, width: 16, height: 16 } } }
                    NavLink { to: Route::Settings {}, label: "Settings", icon: rsx! { Icon { icon: FaGear, width: 16, height: 16 } } }
                }
                div { class: "sidebar-footer",
                    div { class: "sidebar-user",
                        div { class: "sidebar-user-name", "{user_name}" }
                        div { class: "sidebar-user-role", "{user_role}" }
                    }
                    button {
                        class: "btn sidebar-logout",
                        onclick: move |_| {
                            auth.logout();
                            nav.replace(Route::Login {});
                        },
                        Icon { icon: FaRightFromBracket, width: 16, height: 16 }
                        "Log out"
                    }
                }
            }
            main { class: "content",
                Outlet::<Route> {}
            }
        }
    }
}

#[component]
fn NavLink(to: Route, label: String, icon: Element) -> Element {
    rsx! {
        Link { class: "nav-link", active_class: "nav-link-active", to,
            {icon}
            span { "{label}" }
        }
    }
}
