#![cfg(not(feature = "hydrate"))]

use super::*;

fn staged(name: &str) -> StagedFile {
    StagedFile { name: name.to_owned() }
}

// =============================================================
// Media type acceptance
// =============================================================

#[test]
fn pdf_media_type_is_accepted() {
    assert!(is_pdf_media_type("application/pdf"));
}

#[test]
fn pdf_media_type_check_is_case_insensitive() {
    assert!(is_pdf_media_type("Application/PDF"));
}

#[test]
fn pdf_media_type_check_ignores_parameters() {
    assert!(is_pdf_media_type("application/pdf;charset=binary"));
    assert!(is_pdf_media_type(" application/pdf "));
}

#[test]
fn non_pdf_media_types_are_rejected() {
    assert!(!is_pdf_media_type("image/png"));
    assert!(!is_pdf_media_type("application/pdfx"));
    assert!(!is_pdf_media_type("text/plain"));
    assert!(!is_pdf_media_type(""));
}

// =============================================================
// Staging
// =============================================================

#[test]
fn stage_accepts_pdf_selection() {
    let mut composer = ComposerState::default();

    assert!(composer.stage("application/pdf", staged("rx.pdf")));
    assert_eq!(composer.staged.as_ref().map(|f| f.name.as_str()), Some("rx.pdf"));
}

#[test]
fn stage_ignores_non_pdf_and_keeps_previous_file() {
    let mut composer = ComposerState::default();
    composer.stage("application/pdf", staged("rx.pdf"));

    assert!(!composer.stage("image/png", staged("photo.png")));
    assert_eq!(composer.staged.as_ref().map(|f| f.name.as_str()), Some("rx.pdf"));
}

#[test]
fn stage_replaces_previously_staged_pdf() {
    let mut composer = ComposerState::default();
    composer.stage("application/pdf", staged("first.pdf"));
    composer.stage("application/pdf", staged("second.pdf"));

    assert_eq!(composer.staged.as_ref().map(|f| f.name.as_str()), Some("second.pdf"));
}

#[test]
fn clear_staged_drops_the_file() {
    let mut composer = ComposerState::default();
    composer.stage("application/pdf", staged("rx.pdf"));

    composer.clear_staged();

    assert!(composer.staged.is_none());
}

// =============================================================
// Draft dispatch
// =============================================================

#[test]
fn take_draft_rejects_empty_draft_without_state_change() {
    let mut composer = ComposerState::default();
    composer.text = "   ".to_owned();

    assert!(composer.take_draft().is_none());
    assert_eq!(composer.text, "   ");
    assert!(composer.staged.is_none());
}

#[test]
fn take_draft_with_text_only_trims_and_clears() {
    let mut composer = ComposerState::default();
    composer.text = "  What is the dosage?  ".to_owned();

    let draft = composer.take_draft().unwrap();

    assert_eq!(draft.text, "What is the dosage?");
    assert!(draft.staged.is_none());
    assert!(composer.text.is_empty());
}

#[test]
fn take_draft_with_file_only_is_accepted() {
    let mut composer = ComposerState::default();
    composer.stage("application/pdf", staged("rx.pdf"));

    let draft = composer.take_draft().unwrap();

    assert!(draft.text.is_empty());
    assert_eq!(draft.staged.map(|f| f.name), Some("rx.pdf".to_owned()));
    assert!(composer.staged.is_none());
}

#[test]
fn take_draft_clears_text_and_file_together() {
    let mut composer = ComposerState::default();
    composer.text = "summarize".to_owned();
    composer.stage("application/pdf", staged("rx.pdf"));

    let draft = composer.take_draft().unwrap();

    assert_eq!(draft.text, "summarize");
    assert!(draft.staged.is_some());
    assert!(composer.text.is_empty());
    assert!(composer.staged.is_none());
    assert!(!composer.has_content());
}
