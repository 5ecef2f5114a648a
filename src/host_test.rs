use super::*;

// =============================================================
// Tutorial detection
// =============================================================

#[test]
fn in_tutorial_requires_a_tutorial_path() {
    let mut state = HostState::default();
    assert!(!state.in_tutorial());

    state.tutorial_options = Some(TutorialOptions { tutorial: None, tutorial_name: Some("Blink".into()) });
    assert!(!state.in_tutorial());

    state.tutorial_options = Some(TutorialOptions {
        tutorial: Some("/tutorials/blink".into()),
        tutorial_name: Some("Blink".into()),
    });
    assert!(state.in_tutorial());
    assert_eq!(state.tutorial_name(), Some("Blink"));
}

// =============================================================
// Patch merge
// =============================================================

#[test]
fn apply_only_touches_present_fields() {
    let mut state = HostState {
        running: true,
        side_docs_load_url: Some("/--docs#doc:/a:js:en".into()),
        side_docs_collapsed: Some(false),
        ..HostState::default()
    };

    state.apply(HostStatePatch { side_docs_collapsed: Some(true), ..HostStatePatch::default() });

    assert!(state.running);
    assert_eq!(state.side_docs_collapsed, Some(true));
    assert_eq!(state.side_docs_load_url.as_deref(), Some("/--docs#doc:/a:js:en"));
}

#[test]
fn apply_can_clear_nullable_fields() {
    let mut state = HostState {
        header: Some(ProjectHeader { id: "p1".into(), name: "Untitled".into() }),
        ..HostState::default()
    };

    state.apply(HostStatePatch { header: Some(None), ..HostStatePatch::default() });
    assert_eq!(state.header, None);
}

#[test]
fn empty_patch_is_a_noop() {
    let mut state = HostState { home: true, sandbox: true, ..HostState::default() };
    let before = state.clone();
    state.apply(HostStatePatch::default());
    assert_eq!(state, before);
}
