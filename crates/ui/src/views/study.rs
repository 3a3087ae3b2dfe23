use dioxus::document::eval;
use dioxus::prelude::*;
use study_core::study::StudyIntent;

use crate::context::AppContext;
use crate::views::{FlashcardView, ProgressBar};
use crate::vm::{StudyVm, intent_for_key};

#[cfg(test)]
use std::cell::RefCell;
#[cfg(test)]
use std::rc::Rc;

#[component]
pub fn StudyView() -> Element {
    let ctx = use_context::<AppContext>();
    let title = ctx.title();
    let mut vm = use_signal(|| {
        StudyVm::starting_at(ctx.deck(), ctx.start_index()).unwrap_or_else(|err| {
            log::warn!("{err}; starting on the first card");
            StudyVm::new(ctx.deck())
        })
    });

    let dispatch_intent = use_callback(move |intent: StudyIntent| {
        vm.write().dispatch(intent);
    });

    #[cfg(test)]
    {
        let mut registered = use_signal(|| false);
        if !registered() {
            registered.set(true);
            if let Some(handles) = try_consume_context::<StudyTestHandles>() {
                handles.register(dispatch_intent);
            }
        }
    }

    // Arrow keys should work without clicking into the page first.
    use_effect(move || {
        let _ = eval("document.getElementById('study-root')?.focus();");
    });

    let on_key = use_callback(move |evt: KeyboardEvent| {
        if let Some(intent) = intent_for_key(&evt.data.key()) {
            evt.prevent_default();
            dispatch_intent.call(intent);
        }
    });

    let vm_guard = vm.read();
    let question = vm_guard.question().to_string();
    let answer = vm_guard.answer().to_string();
    let flipped = vm_guard.is_flipped();
    let position = vm_guard.position_label();
    let progress_label = vm_guard.progress_label();
    let progress_style = vm_guard.progress_style();
    drop(vm_guard);

    rsx! {
        div { class: "page study-page", id: "study-root", tabindex: "0", onkeydown: on_key,
            header { class: "study-header",
                h1 { class: "study-title", "{title}" }
                p { class: "study-hint", "Click the card to reveal the answer" }
            }

            div { class: "study-card-slot",
                FlashcardView {
                    question,
                    answer,
                    flipped,
                    on_flip: move |()| dispatch_intent.call(StudyIntent::Flip),
                }
            }

            div { class: "study-nav",
                button {
                    id: "study-prev",
                    class: "btn btn-secondary",
                    r#type: "button",
                    onclick: move |_| dispatch_intent.call(StudyIntent::Prev),
                    "← Previous"
                }
                div { class: "study-position", "{position}" }
                button {
                    id: "study-next",
                    class: "btn btn-primary",
                    r#type: "button",
                    onclick: move |_| dispatch_intent.call(StudyIntent::Next),
                    "Next →"
                }
            }

            ProgressBar { label: progress_label, fill_style: progress_style }

            p { class: "study-tip", "💡 Tip: Use ← → arrow keys to navigate" }
        }
    }
}

#[cfg(test)]
#[derive(Clone, Default)]
pub(crate) struct StudyTestHandles {
    dispatch: Rc<RefCell<Option<Callback<StudyIntent>>>>,
}

#[cfg(test)]
impl StudyTestHandles {
    pub(crate) fn register(&self, dispatch: Callback<StudyIntent>) {
        *self.dispatch.borrow_mut() = Some(dispatch);
    }

    pub(crate) fn dispatch(&self) -> Callback<StudyIntent> {
        (*self.dispatch.borrow()).expect("study dispatch registered")
    }
}
