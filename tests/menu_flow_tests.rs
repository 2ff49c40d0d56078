//! End-to-end copy/restore flows through the library API
//!
//! These run the same controller the menu uses, against the in-memory
//! clipboard and a pinned clock, so every byte is observable.

use chrono::{DateTime, FixedOffset, TimeZone};
use stampbar::application::ports::ClipboardAccess;
use stampbar::application::{ActionOutcome, MenuController};
use stampbar::domain::menu::MenuAction;
use stampbar::domain::snapshot::{ClipboardSnapshot, Representation};
use stampbar::domain::stamp::{StampFormatter, StampKind};
use stampbar::infrastructure::{FixedClock, InMemoryClipboard, NoOpNotifier};

/// 2023-04-16 14:05:09 at UTC-5, a Sunday in ISO week 15
fn pinned_now() -> DateTime<FixedOffset> {
    FixedOffset::west_opt(5 * 3600)
        .unwrap()
        .with_ymd_and_hms(2023, 4, 16, 14, 5, 9)
        .unwrap()
}

fn controller(
    clipboard: InMemoryClipboard,
) -> MenuController<InMemoryClipboard, FixedClock, NoOpNotifier> {
    MenuController::new(
        clipboard,
        FixedClock::new(pinned_now()),
        NoOpNotifier,
        StampFormatter::default(),
        false,
    )
}

#[tokio::test]
async fn copy_then_restore_round_trips_text() {
    let clipboard = InMemoryClipboard::with_text("hello");
    let mut controller = controller(clipboard.clone());

    controller
        .handle(MenuAction::Copy(StampKind::DatePrefix))
        .await
        .unwrap();
    assert_eq!(
        clipboard.read_all().await.unwrap().text(),
        Some("2023-04-16")
    );

    let outcome = controller.handle(MenuAction::Restore).await.unwrap();
    assert_eq!(outcome, ActionOutcome::Restored);
    assert_eq!(clipboard.read_all().await.unwrap().text(), Some("hello"));
    assert!(!controller.can_restore());
}

#[tokio::test]
async fn restore_preserves_every_representation_byte_for_byte() {
    let original = ClipboardSnapshot::from_representations(vec![
        Representation::image(2, 2, vec![7u8; 16]),
        Representation::text("a 2x2 image"),
    ])
    .unwrap();

    let clipboard = InMemoryClipboard::new();
    clipboard.write_representations(&original).await.unwrap();

    let mut controller = controller(clipboard.clone());
    controller
        .handle(MenuAction::Copy(StampKind::Iso8601))
        .await
        .unwrap();
    assert!(clipboard
        .read_all()
        .await
        .unwrap()
        .is_single_text("2023-04-16T14:05:09-05:00"));

    controller.handle(MenuAction::Restore).await.unwrap();
    assert_eq!(clipboard.read_all().await.unwrap(), original);
}

#[tokio::test]
async fn consecutive_copies_keep_the_original_snapshot() {
    // The second copy only overwrites our own first stamp, so the
    // snapshot from before the first copy stays held.
    let clipboard = InMemoryClipboard::with_text("hello");
    let mut controller = controller(clipboard.clone());

    controller
        .handle(MenuAction::Copy(StampKind::DatePrefix))
        .await
        .unwrap();
    controller
        .handle(MenuAction::Copy(StampKind::TimeSuffix))
        .await
        .unwrap();
    assert_eq!(
        clipboard.read_all().await.unwrap().text(),
        Some("2023_04_16__14_05_09")
    );

    controller.handle(MenuAction::Restore).await.unwrap();
    assert_eq!(clipboard.read_all().await.unwrap().text(), Some("hello"));
}

#[tokio::test]
async fn external_copy_between_stamps_becomes_the_snapshot() {
    let clipboard = InMemoryClipboard::with_text("hello");
    let mut controller = controller(clipboard.clone());

    controller
        .handle(MenuAction::Copy(StampKind::DatePrefix))
        .await
        .unwrap();

    // Another application replaces the clipboard between our copies.
    clipboard.write_text("pasted elsewhere").await.unwrap();

    controller
        .handle(MenuAction::Copy(StampKind::YearWeek))
        .await
        .unwrap();

    controller.handle(MenuAction::Restore).await.unwrap();
    assert_eq!(
        clipboard.read_all().await.unwrap().text(),
        Some("pasted elsewhere")
    );
}

#[tokio::test]
async fn restore_consumes_the_snapshot() {
    let clipboard = InMemoryClipboard::with_text("hello");
    let mut controller = controller(clipboard.clone());

    controller
        .handle(MenuAction::Copy(StampKind::JournalPrefix))
        .await
        .unwrap();

    let first = controller.handle(MenuAction::Restore).await.unwrap();
    assert_eq!(first, ActionOutcome::Restored);

    let second = controller.handle(MenuAction::Restore).await.unwrap();
    assert_eq!(second, ActionOutcome::NothingToRestore);
    assert_eq!(clipboard.read_all().await.unwrap().text(), Some("hello"));
}

#[tokio::test]
async fn copy_over_an_empty_clipboard_leaves_nothing_to_restore() {
    let clipboard = InMemoryClipboard::new();
    let mut controller = controller(clipboard.clone());

    controller
        .handle(MenuAction::Copy(StampKind::DatePrefix))
        .await
        .unwrap();
    assert!(!controller.can_restore());

    let outcome = controller.handle(MenuAction::Restore).await.unwrap();
    assert_eq!(outcome, ActionOutcome::NothingToRestore);
    assert_eq!(
        clipboard.read_all().await.unwrap().text(),
        Some("2023-04-16")
    );
}

#[tokio::test]
async fn front_matter_copy_renders_the_current_timestamp() {
    let clipboard = InMemoryClipboard::new();
    let mut controller = controller(clipboard.clone());

    controller
        .handle(MenuAction::Copy(StampKind::FrontMatter))
        .await
        .unwrap();

    assert!(clipboard
        .read_all()
        .await
        .unwrap()
        .is_single_text("---\ntitle:\ndate: 2023-04-16T14:05:09-05:00\ntags:\n---\n"));
}
