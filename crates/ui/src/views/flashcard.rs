use dioxus::prelude::*;
use study_core::model::Side;

/// A two-faced card. Clicking anywhere on it asks the parent to flip.
#[component]
pub fn FlashcardView(
    question: String,
    answer: String,
    flipped: bool,
    on_flip: EventHandler<()>,
) -> Element {
    let inner_class = if flipped {
        "flashcard-inner is-flipped"
    } else {
        "flashcard-inner"
    };
    let question_label = Side::Question.label();
    let answer_label = Side::Answer.label();

    rsx! {
        div { class: "flashcard",
            div {
                class: "{inner_class}",
                id: "study-card",
                onclick: move |_| on_flip.call(()),
                div { class: "flashcard-face flashcard-front",
                    div { class: "flashcard-face-body",
                        div { class: "flashcard-label", "{question_label}" }
                        div { class: "flashcard-text flashcard-question", "{question}" }
                    }
                }
                div { class: "flashcard-face flashcard-back",
                    div { class: "flashcard-face-body",
                        div { class: "flashcard-label", "{answer_label}" }
                        div { class: "flashcard-text flashcard-answer", "{answer}" }
                    }
                }
            }
        }
    }
}
