use study_core::model::Deck;
use study_core::study::StudyIntent;

use super::test_harness::{setup_study_harness, setup_study_harness_with_title};

fn three_cards() -> Deck {
    Deck::from_pairs([
        ("What is the capital of France?", "Paris"),
        ("Who invented the telephone?", "Alexander Graham Bell"),
        ("What is the tallest mountain in the world?", "Mount Everest"),
    ])
    .unwrap()
}

#[test]
fn study_view_smoke_renders_first_card() {
    let mut harness = setup_study_harness(Deck::builtin().clone(), 0);
    harness.rebuild();
    let html = harness.render();

    assert!(html.contains("Flashcard Study App"), "missing title in {html}");
    assert!(html.contains("Click the card to reveal the answer"), "missing hint in {html}");
    assert!(html.contains("What is the capital of France?"), "missing question in {html}");
    assert!(html.contains("QUESTION"), "missing front label in {html}");
    assert!(html.contains("ANSWER"), "missing back label in {html}");
    assert!(html.contains("Card 1 of 20"), "missing progress in {html}");
    assert!(html.contains("width: 5.00%;"), "missing progress width in {html}");
    assert!(html.contains("← Previous"), "missing previous button in {html}");
    assert!(html.contains("Next →"), "missing next button in {html}");
    assert!(html.contains("Use ← → arrow keys to navigate"), "missing tip in {html}");
    assert!(!html.contains("is-flipped"), "card should start unflipped in {html}");
}

#[test]
fn study_view_smoke_honors_start_index() {
    let mut harness = setup_study_harness(three_cards(), 2);
    harness.rebuild();
    let html = harness.render();
    assert!(html.contains("What is the tallest mountain in the world?"), "missing card in {html}");
    assert!(html.contains("Card 3 of 3"), "missing progress in {html}");
}

#[test]
fn study_view_smoke_falls_back_to_first_card_on_bad_start() {
    let mut harness = setup_study_harness(three_cards(), 9);
    harness.rebuild();
    let html = harness.render();
    assert!(html.contains("Card 1 of 3"), "missing progress in {html}");
}

#[test]
fn study_view_smoke_flip_marks_card_flipped() {
    let mut harness = setup_study_harness(three_cards(), 0);
    harness.rebuild();

    harness.dispatch(StudyIntent::Flip);
    let html = harness.render();
    assert!(html.contains("is-flipped"), "card should be flipped in {html}");

    harness.dispatch(StudyIntent::Flip);
    let html = harness.render();
    assert!(!html.contains("is-flipped"), "card should be unflipped in {html}");
}

#[test]
fn study_view_smoke_navigation_wraps_and_unflips() {
    let mut harness = setup_study_harness(three_cards(), 0);
    harness.rebuild();

    harness.dispatch(StudyIntent::Flip);
    harness.dispatch(StudyIntent::Prev);
    let html = harness.render();
    assert!(html.contains("Card 3 of 3"), "prev should wrap to last in {html}");
    assert!(html.contains("Mount Everest"), "missing last answer in {html}");
    assert!(!html.contains("is-flipped"), "navigation should unflip in {html}");

    harness.dispatch(StudyIntent::Next);
    let html = harness.render();
    assert!(html.contains("Card 1 of 3"), "next should wrap to first in {html}");
    assert!(html.contains("What is the capital of France?"), "missing first card in {html}");
}

#[test]
fn study_view_smoke_uses_configured_title() {
    let mut harness = setup_study_harness_with_title(three_cards(), 0, "European Capitals");
    harness.rebuild();
    assert_eq!(harness.ctx.title(), "European Capitals");

    let html = harness.render();
    assert!(html.contains("European Capitals"), "missing configured title in {html}");
    assert!(!html.contains("Flashcard Study App"), "default title leaked into {html}");
}
