use dioxus::prelude::*;
use dioxus_router::{Link, Outlet, Routable};

use crate::toast::Toaster;
use crate::views::{MathTutorView, ProgressView};

#[derive(Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Layout)]
        #[route("/", MathTutorView)] Tutor {},
        #[route("/progress", ProgressView)] Progress {},
}

#[component]
fn Layout() -> Element {
    rsx! {
        div { class: "app",
            Sidebar {}
            main { class: "content",
                Outlet::<Route> {}
            }
            Toaster {}
        }
    }
}

#[component]
fn Sidebar() -> Element {
    rsx! {
        nav { class: "sidebar",
            h1 { "Math Tutor" }
            ul {
                li { Link { to: Route::Tutor {}, "Practice" } }
                li { Link { to: Route::Progress {}, "Progress" } }
            }
        }
    }
}
