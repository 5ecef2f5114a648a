#![cfg(not(feature = "csr"))]

use super::*;

#[test]
fn popout_message_uses_type_tag() {
    let payload = FrameMessage::Popout.to_json();
    assert_eq!(payload["type"], "popout");
    assert_eq!(payload.to_string(), r#"{"type":"popout"}"#);
}

#[test]
fn browser_frame_is_noop_outside_the_browser() {
    BrowserDocsFrame.send(FrameMessage::Popout);
    assert!(!BrowserDocsFrame.focus_toggle());
}

#[test]
fn focus_element_reports_missing_targets() {
    assert!(!focus_element(DOCS_TOGGLE_ID));
}
