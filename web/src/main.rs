use dioxus::prelude::*;
use views::{Commerce, Dashboard, Inventory, Layout, Livestock, Login, Produce, Settings, Workforce};

mod views;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[route("/login")]
    Login {},
    #[layout(Layout)]
        #[route("/")]
        Dashboard {},
        #[route("/livestock")]
        Livestock {},
        #[route("/produce")]
        Produce {},
        #[route("/inventory")]
        Inventory {},
        #[route("/workforce")]
        Workforce {},
        #[route("/commerce")]
        Commerce {},
        #[route("/settings")]
        Settings {},
}

const MAIN_CSS: Asset = asset!("/assets/main.css");

fn main() {
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: MAIN_CSS }
        ui::AuthProvider {
            Router::<Route> {}
        }
    }
}
