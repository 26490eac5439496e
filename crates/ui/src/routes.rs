use dioxus::prelude::*;
use dioxus_router::{Outlet, Routable};

use quiz_core::Screen;

use crate::views::{EntryView, QuizView, ResultsView};

#[derive(Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Layout)]
        #[route("/", EntryView)] Entry {},
        #[route("/quiz", QuizView)] Quiz {},
        #[route("/results", ResultsView)] Results {},
}

impl From<Screen> for Route {
    fn from(screen: Screen) -> Self {
        match screen {
            Screen::Entry => Route::Entry {},
            Screen::Quiz => Route::Quiz {},
            Screen::Results => Route::Results {},
        }
    }
}

#[component]
fn Layout() -> Element {
    rsx! {
        div { class: "app",
            main { class: "content",
                Outlet::<Route> {}
            }
        }
    }
}
