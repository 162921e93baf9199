// SPDX-License-Identifier: MPL-2.0
use iced_toasts::config::{self, Config};
use iced_toasts::i18n::fluent::I18n;
use iced_toasts::ui::notifications::{
    Change, Manager, ManualClock, NotificationMessage, Position, RemovalReason, ToastId,
    ToastKind, ToastOptions, ToastUpdate,
};
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tempfile::tempdir;

fn manager() -> (Manager, ManualClock) {
    let clock = ManualClock::new();
    (Manager::with_clock(clock.clone()), clock)
}

#[test]
fn saved_toast_uses_defaults_and_expires_after_three_seconds() {
    let (mut manager, clock) = manager();
    manager.add("a", "Saved", ToastKind::Success, ToastOptions::default());

    let groups = manager.groups();
    assert_eq!(groups.len(), 1);
    assert_eq!(groups[0].position, Position::TopRight);
    let toast = groups[0].toasts[0];
    assert_eq!(toast.message(), "Saved");
    assert!(toast.auto_close());
    assert_eq!(toast.close_in(), Duration::from_secs(3));

    clock.advance(Duration::from_millis(2900));
    manager.tick();
    assert_eq!(manager.len(), 1);

    clock.advance(Duration::from_millis(200));
    manager.tick();
    assert!(manager.is_empty());
}

#[test]
fn loading_toast_persists_until_removed() {
    let (mut manager, clock) = manager();
    let id = manager.add(
        "b",
        "Uploading",
        ToastKind::Loading,
        ToastOptions::default().auto_close(false),
    );

    clock.advance(Duration::from_secs(60));
    manager.tick();
    let toast = manager.get(&id).expect("loading toast stays");
    assert!(toast.deadline().is_none());
    assert!(!toast.kind().has_close_button());

    assert!(manager.remove(&id));
    assert!(manager.is_empty());
}

#[test]
fn loading_toast_ignores_auto_close() {
    let (mut manager, clock) = manager();
    let id = manager.add("c", "Working", ToastKind::Loading, ToastOptions::default());

    clock.advance(Duration::from_secs(10));
    manager.tick();
    assert!(manager.get(&id).is_some());
}

#[test]
fn distinct_adds_are_grouped_in_insertion_order() {
    let (mut manager, _clock) = manager();
    let bottom = ToastOptions::default().position(Position::BottomLeft);
    manager.add("1", "one", ToastKind::Info, ToastOptions::default());
    manager.add("2", "two", ToastKind::Info, bottom);
    manager.add("3", "three", ToastKind::Info, ToastOptions::default());
    manager.add("4", "four", ToastKind::Info, bottom);

    assert_eq!(manager.len(), 4);
    let groups = manager.groups();
    let summary: Vec<(Position, Vec<&str>)> = groups
        .iter()
        .map(|group| {
            (
                group.position,
                group.toasts.iter().map(|t| t.id().as_str()).collect(),
            )
        })
        .collect();

    assert_eq!(
        summary,
        vec![
            (Position::TopRight, vec!["1", "3"]),
            (Position::BottomLeft, vec!["2", "4"]),
        ]
    );
}

#[test]
fn update_unknown_id_leaves_state_unchanged() {
    let (mut manager, _clock) = manager();
    manager.add("a", "Saved", ToastKind::Success, ToastOptions::default());

    manager.update(&"zzz".into(), ToastUpdate::new("nope", ToastKind::Error));

    assert_eq!(manager.len(), 1);
    let toast = manager.get(&"a".into()).expect("toast still present");
    assert_eq!(toast.message(), "Saved");
    assert_eq!(toast.kind(), ToastKind::Success);
}

#[test]
fn update_turns_loading_into_success_and_reschedules() {
    let (mut manager, clock) = manager();
    let options = ToastOptions::default().position(Position::BottomCenter);
    let id = manager.add("upload", "Uploading", ToastKind::Loading, options);

    clock.advance(Duration::from_secs(5));
    manager.update(
        &id,
        ToastUpdate::new("Done", ToastKind::Success).close_in(Duration::from_secs(2)),
    );

    let toast = manager.get(&id).expect("updated toast");
    assert_eq!(toast.message(), "Done");
    assert_eq!(toast.kind(), ToastKind::Success);
    assert_eq!(toast.position(), Position::BottomCenter);

    clock.advance(Duration::from_millis(1900));
    manager.tick();
    assert!(manager.get(&id).is_some());

    clock.advance(Duration::from_millis(200));
    manager.tick();
    assert!(manager.get(&id).is_none());
}

#[test]
fn older_deadline_never_removes_updated_toast_early() {
    let (mut manager, clock) = manager();
    let id = manager.add("a", "first", ToastKind::Info, ToastOptions::default());

    clock.advance(Duration::from_secs(2));
    manager.update(&id, ToastUpdate::new("second", ToastKind::Info));

    // The first deadline (3s after add) passes here.
    clock.advance(Duration::from_millis(1500));
    manager.tick();
    assert_eq!(
        manager.get(&id).map(|toast| toast.message()),
        Some("second")
    );
}

#[test]
fn remove_is_idempotent() {
    let (mut manager, _clock) = manager();
    let id = manager.add("a", "Saved", ToastKind::Success, ToastOptions::default());

    assert!(manager.remove(&id));
    assert!(!manager.remove(&id));
    assert!(!manager.remove(&"never-added".into()));
    assert!(manager.is_empty());
}

#[test]
fn duplicate_id_replaces_previous_toast() {
    let (mut manager, _clock) = manager();
    manager.add("dup", "old", ToastKind::Info, ToastOptions::default());
    manager.add("other", "x", ToastKind::Info, ToastOptions::default());
    manager.add(
        "dup",
        "new",
        ToastKind::Error,
        ToastOptions::default().position(Position::TopLeft),
    );

    assert_eq!(manager.len(), 2);
    let ids: Vec<&str> = manager.toasts().map(|t| t.id().as_str()).collect();
    assert_eq!(ids, vec!["other", "dup"]);
    let toast = manager.get(&"dup".into()).expect("replacement present");
    assert_eq!(toast.message(), "new");
    assert_eq!(toast.position(), Position::TopLeft);
}

#[test]
fn listeners_observe_every_change() {
    let (mut manager, clock) = manager();
    let seen: Arc<Mutex<Vec<Change>>> = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&seen);
    manager.subscribe(move |change| sink.lock().unwrap().push(change.clone()));

    manager.add("a", "hello", ToastKind::Info, ToastOptions::default());
    manager.update(&"a".into(), ToastUpdate::new("hi", ToastKind::Info));
    clock.advance(Duration::from_secs(4));
    manager.tick();
    manager.add("b", "bye", ToastKind::Error, ToastOptions::default());
    manager.handle_message(&NotificationMessage::Dismiss("b".into()));

    let a = ToastId::new("a");
    let b = ToastId::new("b");
    assert_eq!(
        *seen.lock().unwrap(),
        vec![
            Change::Added(a.clone()),
            Change::Updated(a.clone()),
            Change::Removed {
                id: a,
                reason: RemovalReason::Expired,
            },
            Change::Added(b.clone()),
            Change::Removed {
                id: b,
                reason: RemovalReason::Dismissed,
            },
        ]
    );
}

#[test]
fn handle_requests_from_other_threads_apply_in_order() {
    let (mut manager, _clock) = manager();
    let handle = manager.handle();

    std::thread::spawn(move || {
        let id = handle.loading("job", "Working");
        handle.update(id, ToastUpdate::new("Finished", ToastKind::Success));
        handle.info("note", "FYI");
    })
    .join()
    .expect("worker thread");

    assert_eq!(manager.process_commands(), 3);
    let job = manager.get(&"job".into()).expect("job toast");
    assert_eq!(job.kind(), ToastKind::Success);
    assert_eq!(job.message(), "Finished");
    assert_eq!(manager.len(), 2);
}

#[test]
fn shutdown_disconnects_handles() {
    let (mut manager, _clock) = manager();
    let handle = manager.handle();
    handle.success("a", "queued");
    manager.process_commands();
    assert!(handle.is_connected());

    manager.shutdown();
    assert!(manager.is_empty());
    assert!(!handle.is_connected());

    handle.success("b", "dropped");
    assert_eq!(manager.process_commands(), 0);
    assert!(manager.is_empty());
}

#[test]
fn kinds_and_positions_parse_from_strings() {
    assert_eq!("success".parse::<ToastKind>(), Ok(ToastKind::Success));
    assert_eq!("Bottom-Right".parse::<Position>(), Ok(Position::BottomRight));
    assert!("sideways".parse::<Position>().is_err());
    assert!("fatal".parse::<ToastKind>().is_err());
}

#[test]
fn language_change_via_config() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let path = dir.path().join("settings.toml");

    let mut settings = Config::default();
    settings.general.language = Some("fr".to_string());
    settings.notifications.position = Position::BottomCenter;
    config::save_to_path(&settings, &path).expect("Failed to write config file");

    let loaded = config::load_from_path(&path).expect("Failed to load config");
    assert_eq!(loaded.notifications.position, Position::BottomCenter);

    let i18n = I18n::new(None, &loaded);
    assert_eq!(i18n.current_locale().to_string(), "fr");
    assert_eq!(i18n.tr("toast-close"), "Fermer");
}
