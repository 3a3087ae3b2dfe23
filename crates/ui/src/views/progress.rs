use dioxus::prelude::*;

#[component]
pub fn ProgressBar(label: String, fill_style: String) -> Element {
    rsx! {
        div { class: "study-progress",
            div { class: "study-progress-label", "{label}" }
            div { class: "study-progress-track",
                div { class: "study-progress-fill", style: "{fill_style}" }
            }
        }
    }
}
