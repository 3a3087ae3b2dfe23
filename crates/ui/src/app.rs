use dioxus::prelude::*;

use crate::context::AppContext;
use crate::views::StudyView;

#[component]
pub fn App() -> Element {
    let title = use_context::<AppContext>().title();

    rsx! {
        document::Stylesheet { href: asset!("/assets/style.css") }

        // Same text as the window builder's title, so mounting does not reset it.
        document::Title { "{title}" }

        div { class: "app-root",
            ErrorBoundary {
                handle_error: |errors: ErrorContext| rsx! {
                    div { class: "fatal",
                        h1 { "Something went wrong" }
                        pre { "{errors:?}" }
                    }
                },
                StudyView {}
            }
        }
    }
}
