use dioxus::prelude::*;
use dioxus_router::{Outlet, Routable};

use crate::views::QuizFlowView;

#[derive(Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Shell)]
        #[route("/", QuizFlowView)] Home {},
}

#[component]
fn Shell() -> Element {
    rsx! {
        div { class: "shell",
            header { class: "shell-header",
                span { class: "shell-badge", "PDF → Quiz Generator" }
                h1 { class: "shell-title", "DocQuiz" }
                p { class: "shell-tagline", "Upload a PDF once, generate unlimited quizzes from it." }
            }
            main { class: "shell-card",
                Outlet::<Route> {}
            }
        }
    }
}
