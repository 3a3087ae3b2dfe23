use std::sync::Arc;

use dioxus::core::NoOpMutations;
use dioxus::prelude::*;
use study_core::model::Deck;
use study_core::study::StudyIntent;

use crate::context::{AppContext, UiApp, build_app_context};
use crate::views::StudyView;
use crate::views::study::StudyTestHandles;

pub const DEFAULT_TEST_TITLE: &str = "Flashcard Study App";

struct TestApp {
    deck: Arc<Deck>,
    start_index: usize,
    title: String,
}

impl UiApp for TestApp {
    fn deck(&self) -> Arc<Deck> {
        Arc::clone(&self.deck)
    }

    fn start_index(&self) -> usize {
        self.start_index
    }

    fn title(&self) -> String {
        self.title.clone()
    }
}

#[derive(Props, Clone)]
struct StudyHarnessProps {
    ctx: AppContext,
    handles: StudyTestHandles,
}

impl PartialEq for StudyHarnessProps {
    fn eq(&self, _other: &Self) -> bool {
        true
    }
}

#[component]
fn StudyHarness(props: StudyHarnessProps) -> Element {
    use_context_provider(|| props.ctx.clone());
    use_context_provider(|| props.handles.clone());
    rsx! { StudyView {} }
}

pub struct StudyViewHarness {
    pub dom: VirtualDom,
    pub ctx: AppContext,
    handles: StudyTestHandles,
}

impl StudyViewHarness {
    pub fn rebuild(&mut self) {
        self.dom.rebuild_in_place();
        drive_dom(&mut self.dom);
    }

    pub fn dispatch(&mut self, intent: StudyIntent) {
        let dispatch = self.handles.dispatch();
        self.dom.in_runtime(|| dispatch.call(intent));
        drive_dom(&mut self.dom);
    }

    pub fn render(&self) -> String {
        dioxus_ssr::render(&self.dom)
    }
}

pub fn drive_dom(dom: &mut VirtualDom) {
    dom.process_events();
    dom.render_immediate(&mut NoOpMutations);
    dom.process_events();
}

pub fn setup_study_harness(deck: Deck, start_index: usize) -> StudyViewHarness {
    setup_study_harness_with_title(deck, start_index, DEFAULT_TEST_TITLE)
}

pub fn setup_study_harness_with_title(
    deck: Deck,
    start_index: usize,
    title: &str,
) -> StudyViewHarness {
    let handles = StudyTestHandles::default();
    let app = TestApp {
        deck: Arc::new(deck),
        start_index,
        title: title.to_string(),
    };
    let ctx = build_app_context(&app);

    let dom = VirtualDom::new_with_props(
        StudyHarness,
        StudyHarnessProps {
            ctx: ctx.clone(),
            handles: handles.clone(),
        },
    );

    StudyViewHarness { dom, ctx, handles }
}
