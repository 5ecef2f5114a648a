use std::sync::atomic::Ordering;

use super::*;
use crate::test_support::{HostCall, RecordingHost, RecordingSurface};

fn controller() -> SideDocsController {
    SideDocsController::new(&ChromeConfig::default())
}

fn opened(host: &RecordingHost) -> SideDocsController {
    let mut docs = controller();
    docs.open_path(host, "/reference/foo", true);
    docs
}

// =============================================================
// URL scheme
// =============================================================

#[test]
fn open_path_builds_doc_url() {
    let host = RecordingHost::default();
    let docs = opened(&host);
    assert_eq!(docs.state().current_url.as_deref(), Some("/--docs#doc:/reference/foo:blocks:en"));
    assert_eq!(docs.phase(), SideDocsPhase::Expanded);
    assert!(docs.is_opening());
}

#[test]
fn open_path_in_text_mode_uses_js() {
    assert_eq!(doc_url("/--docs", "/a", DocsMode::from_blocks(false), "de"), "/--docs#doc:/a:js:de");
}

#[test]
fn open_markdown_encodes_and_follows_host_editor() {
    let host = RecordingHost::default();
    let mut docs = controller();

    docs.open_markdown(&host, "# Hi");
    assert_eq!(docs.state().current_url.as_deref(), Some("/--docs#md:%23%20Hi:js:en"));
    assert!(!docs.is_opening());

    host.blocks_editor.store(true, Ordering::SeqCst);
    docs.open_markdown(&host, "# Hi");
    assert_eq!(docs.state().current_url.as_deref(), Some("/--docs#md:%23%20Hi:blocks:en"));
}

#[test]
fn configured_docs_base_and_locale_are_used() {
    let mut config = ChromeConfig::default();
    config.docs_url = Some("https://docs.example.com".into());
    config.locale = "pt-BR".into();
    let host = RecordingHost::default();

    let mut docs = SideDocsController::new(&config);
    docs.open_path(&host, "/blocks", false);
    assert_eq!(docs.state().current_url.as_deref(), Some("https://docs.example.com#doc:/blocks:js:pt-BR"));
}

#[test]
fn opening_writes_url_back_to_host() {
    let host = RecordingHost::default();
    opened(&host);
    assert_eq!(
        host.calls(),
        vec![HostCall::SetState(HostStatePatch {
            side_docs_load_url: Some("/--docs#doc:/reference/foo:blocks:en".into()),
            side_docs_collapsed: Some(false),
            ..HostStatePatch::default()
        })]
    );
}

// =============================================================
// Phases
// =============================================================

#[test]
fn panel_is_hidden_without_url() {
    let mut docs = controller();
    assert_eq!(docs.phase(), SideDocsPhase::Hidden);

    docs.receive(&SideDocsProps { url: None, collapsed: Some(true) });
    assert_eq!(docs.phase(), SideDocsPhase::Hidden);
}

#[test]
fn open_forces_expanded_after_collapse() {
    let host = RecordingHost::default();
    let mut docs = opened(&host);
    docs.collapse(&host);
    assert_eq!(docs.phase(), SideDocsPhase::Collapsed);

    docs.open_path(&host, "/reference/bar", true);
    assert_eq!(docs.phase(), SideDocsPhase::Expanded);
}

#[test]
fn toggle_twice_restores_collapsed_value() {
    let host = RecordingHost::default();
    let surface = RecordingSurface::default();
    let mut docs = opened(&host);

    for start in [false, true] {
        if docs.state().collapsed != start {
            docs.toggle(&host, &surface);
        }
        assert!(docs.toggle(&host, &surface));
        assert_eq!(docs.state().collapsed, !start);
        assert!(docs.toggle(&host, &surface));
        assert_eq!(docs.state().collapsed, start);
    }
}

#[test]
fn toggle_refocuses_the_toggle_control() {
    let host = RecordingHost::default();
    let surface = RecordingSurface::default();
    let mut docs = opened(&host);

    docs.toggle(&host, &surface);
    assert_eq!(surface.focus_calls(), 1);
}

// =============================================================
// Host pushes
// =============================================================

#[test]
fn pushed_collapse_keeps_existing_url() {
    let host = RecordingHost::default();
    let mut docs = opened(&host);

    assert!(docs.receive(&SideDocsProps { url: None, collapsed: Some(true) }));
    assert_eq!(docs.state().current_url.as_deref(), Some("/--docs#doc:/reference/foo:blocks:en"));
    assert!(docs.state().collapsed);
}

#[test]
fn pushed_empty_url_is_ignored() {
    let host = RecordingHost::default();
    let mut docs = opened(&host);

    assert!(!docs.receive(&SideDocsProps { url: Some(String::new()), collapsed: None }));
    assert_eq!(docs.state().current_url.as_deref(), Some("/--docs#doc:/reference/foo:blocks:en"));
}

#[test]
fn pushed_values_overwrite_local_state() {
    let host = RecordingHost::default();
    let mut docs = opened(&host);

    let props = SideDocsProps { url: Some("/--docs#doc:/other:js:en".into()), collapsed: Some(true) };
    assert!(docs.receive(&props));
    assert_eq!(
        *docs.state(),
        SideDocsState { current_url: Some("/--docs#doc:/other:js:en".into()), collapsed: true }
    );
}

#[test]
fn unchanged_push_skips_render() {
    let host = RecordingHost::default();
    let mut docs = opened(&host);
    let props = SideDocsProps::from_host(&HostState {
        side_docs_load_url: docs.state().current_url.clone(),
        side_docs_collapsed: Some(false),
        ..HostState::default()
    });
    assert!(!docs.receive(&props));
}

// =============================================================
// Pop out
// =============================================================

#[test]
fn pop_out_sends_one_message_and_keeps_state() {
    let host = RecordingHost::default();
    let surface = RecordingSurface::default();

    let mut collapsed = opened(&host);
    collapsed.collapse(&host);

    for docs in [controller(), opened(&host), collapsed] {
        let phase = docs.phase();
        let before = docs.state().clone();
        let calls_before = host.calls().len();
        let sent_before = surface.sent().len();

        docs.pop_out(&surface);

        assert_eq!(surface.sent().len(), sent_before + 1, "phase={phase:?}");
        assert_eq!(surface.sent().last(), Some(&FrameMessage::Popout));
        assert_eq!(*docs.state(), before);
        assert_eq!(host.calls().len(), calls_before);
    }
}

#[test]
fn pop_out_covers_every_phase() {
    let host = RecordingHost::default();
    let mut collapsed = opened(&host);
    collapsed.collapse(&host);
    let phases: Vec<_> = [controller(), opened(&host), collapsed].iter().map(SideDocsController::phase).collect();
    assert_eq!(phases, [SideDocsPhase::Hidden, SideDocsPhase::Expanded, SideDocsPhase::Collapsed]);
}

// =============================================================
// After render
// =============================================================

#[test]
fn after_render_resizes_and_consumes_opening_focus() {
    let host = RecordingHost::default();
    let surface = RecordingSurface::default();
    let mut docs = opened(&host);

    docs.after_render(&host, &surface);
    assert_eq!(host.count(&HostCall::ResizeEditor), 1);
    assert_eq!(surface.focus_calls(), 1);
    assert!(!docs.is_opening());

    docs.after_render(&host, &surface);
    assert_eq!(host.count(&HostCall::ResizeEditor), 2);
    assert_eq!(surface.focus_calls(), 1);
}

#[test]
fn opening_focus_waits_for_toggle_to_mount() {
    let host = RecordingHost::default();
    let surface = RecordingSurface::default();
    surface.toggle_mounted.store(false, Ordering::SeqCst);
    let mut docs = opened(&host);

    docs.after_render(&host, &surface);
    assert!(docs.is_opening());

    surface.toggle_mounted.store(true, Ordering::SeqCst);
    docs.after_render(&host, &surface);
    assert!(!docs.is_opening());
}
