//! End-to-end tests for the extraction pipeline

use exq_core::{extract_questions, ExtractorConfig, QuestionExtractor};

const FORTY_PLUS: &str = "this filler clause pads the block well past forty characters";

#[test]
fn no_markers_yields_empty_list() {
    let questions = extract_questions("A page of prose with no numbered markers at all.").unwrap();
    assert!(questions.is_empty());
}

#[test]
fn two_questions_in_order() {
    let text = "(1) Question one text that is definitely over forty characters long. \
                (2) Question two text also over forty characters.";
    let questions = extract_questions(text).unwrap();
    assert_eq!(questions.len(), 2);
    assert_eq!(questions[0].id, "q-1");
    assert_eq!(questions[0].raw_number, "(1)");
    assert_eq!(questions[1].id, "q-2");
    assert_eq!(questions[1].raw_number, "(2)");
}

#[test]
fn duplicate_numbers_resolve_to_longest_occurrence() {
    let long_sentence = "w".repeat(60);
    let text = format!("(5) short (1) {FORTY_PLUS} (5) {long_sentence}");
    let questions = extract_questions(&text).unwrap();

    let q5: Vec<_> = questions
        .iter()
        .filter(|q| q.raw_number == "(5)")
        .collect();
    assert_eq!(q5.len(), 1);
    assert_eq!(q5[0].full_text, format!("(5) {long_sentence}"));
}

#[test]
fn answer_sheet_rows_never_become_records() {
    let text = format!(
        "(1) {FORTY_PLUS} (2) ( ) 1 2 3 4 5 6 7 8 9 10 11 12 13 14 15 16 17 18 \
         (3) 1 2 3 4 5 6 7 8 9 10 11 12 13 14 15 16 17 18 19 20 21 \
         (4) {FORTY_PLUS}"
    );
    let questions = extract_questions(&text).unwrap();
    let raw: Vec<_> = questions.iter().map(|q| q.raw_number.as_str()).collect();
    assert_eq!(raw, vec!["(1)", "(4)"]);
}

#[test]
fn snippet_truncates_past_seventy_characters() {
    let content = "z".repeat(100);
    let text = format!("(1) {content}");
    let questions = extract_questions(&text).unwrap();
    assert_eq!(questions.len(), 1);
    assert_eq!(questions[0].snippet, format!("{}...", "z".repeat(70)));
    // The full text is untouched by truncation.
    assert_eq!(questions[0].full_text, format!("(1) {content}"));
}

#[test]
fn snippet_keeps_short_content_unmodified() {
    let text = format!("(1) Girl 2: {FORTY_PLUS}");
    let questions = extract_questions(&text).unwrap();
    assert_eq!(questions.len(), 1);
    assert_eq!(questions[0].snippet, FORTY_PLUS);
}

#[test]
fn header_noise_is_stripped_before_scanning() {
    let text = format!("Grade Pre-2 ! 6 ! (1) {FORTY_PLUS} Grade 3 ! 7 ! (2) {FORTY_PLUS}!");
    let questions = extract_questions(&text).unwrap();
    assert_eq!(questions.len(), 2);
    assert_eq!(questions[0].full_text, format!("(1) {FORTY_PLUS}"));
}

#[test]
fn marker_raw_text_is_preserved_verbatim() {
    let text = format!("( 9 ) {FORTY_PLUS}");
    let questions = extract_questions(&text).unwrap();
    assert_eq!(questions.len(), 1);
    assert_eq!(questions[0].raw_number, "( 9 )");
    assert!(questions[0].full_text.starts_with("( 9 ) "));
}

#[test]
fn ordering_ignores_scan_order() {
    let text = format!("(30) {FORTY_PLUS} (3) {FORTY_PLUS} (12) {FORTY_PLUS}");
    let questions = extract_questions(&text).unwrap();
    let raw: Vec<_> = questions.iter().map(|q| q.raw_number.as_str()).collect();
    assert_eq!(raw, vec!["(3)", "(12)", "(30)"]);
    let ids: Vec<_> = questions.iter().map(|q| q.id.as_str()).collect();
    assert_eq!(ids, vec!["q-1", "q-2", "q-3"]);
}

#[test]
fn shared_extractor_is_reusable_across_documents() {
    let extractor = QuestionExtractor::new().unwrap();
    let text = format!("(1) {FORTY_PLUS}");
    let first = extractor.extract(&text);
    let second = extractor.extract(&text);
    assert_eq!(first, second);
    assert_eq!(first.len(), 1);
}

#[test]
fn tuned_thresholds_change_the_cut() {
    let extractor = QuestionExtractor::with_config(
        ExtractorConfig::builder()
            .min_content_len(4)
            .snippet_len(10)
            .build(),
    )
    .unwrap();
    let questions = extractor.extract("(1) a tiny question body");
    assert_eq!(questions.len(), 1);
    assert_eq!(questions[0].snippet, "a tiny que...");
}
