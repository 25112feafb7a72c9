use super::*;

#[test]
fn toast_push_assigns_increasing_ids() {
    let mut state = ToastState::default();
    let a = state.push(ToastKind::Success, "Meeting created successfully");
    let b = state.push(ToastKind::Error, "Failed to load meetings");
    assert!(b > a);
    assert_eq!(state.items.len(), 2);
    assert_eq!(state.items[1].message, "Failed to load meetings");
}

#[test]
fn toast_dismiss_removes_only_matching() {
    let mut state = ToastState::default();
    let a = state.push(ToastKind::Success, "one");
    let b = state.push(ToastKind::Success, "two");
    state.dismiss(a);
    assert_eq!(state.items.iter().map(|t| t.id).collect::<Vec<_>>(), vec![b]);
}

#[test]
fn toast_dismiss_unknown_id_is_noop() {
    let mut state = ToastState::default();
    state.push(ToastKind::Error, "x");
    state.dismiss(99);
    assert_eq!(state.items.len(), 1);
}

#[test]
fn toast_kind_class_is_distinct() {
    assert_ne!(ToastKind::Success.class(), ToastKind::Error.class());
}
