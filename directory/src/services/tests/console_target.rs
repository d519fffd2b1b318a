//! Tests for ConsoleRenderTarget

use shared::Employee;

use crate::core::renderer::render_profile;
use crate::services::console_target::ConsoleRenderTarget;
use crate::traits::RenderTarget;
use crate::types::{DirectoryEntryView, DirectoryListView, Status, StatusChannel};

fn output(target: ConsoleRenderTarget<Vec<u8>>) -> String {
    String::from_utf8(target.into_inner()).unwrap()
}

#[test]
fn test_profile_sections_are_written() {
    let employee = Employee {
        slug: "amy".to_string(),
        name: "Amy Pond".to_string(),
        role: "Lead".to_string(),
        ..Employee::default()
    };

    let mut target = ConsoleRenderTarget::new(Vec::new());
    for section in &render_profile(&employee, &[]).sections {
        target.render_section(section);
    }
    target.set_profile_visible(true);
    assert!(target.profile_visible());

    let text = output(target);
    assert!(text.contains("=== Amy Pond | Quoralinex People ==="));
    assert!(text.contains("No highlights yet"));
    assert!(text.contains("No posts yet."));
}

#[test]
fn test_directory_marks_active_entry() {
    let view = DirectoryListView {
        entries: vec![
            DirectoryEntryView { slug: "amy".into(), name: "Amy".into(), role: String::new(), active: false },
            DirectoryEntryView { slug: "bo".into(), name: "Bo".into(), role: String::new(), active: true },
        ],
    };

    let mut target = ConsoleRenderTarget::new(Vec::new());
    target.render_directory(&view);

    let text = output(target);
    assert!(text.lines().any(|line| line.starts_with(" * bo")));
    assert!(text.lines().any(|line| line.starts_with("   amy")));
}

#[test]
fn test_status_and_not_found_lines() {
    let mut target = ConsoleRenderTarget::new(Vec::new());
    target.set_status(StatusChannel::Directory, Some(&Status::info("Loading staff directory…")));
    target.set_status(StatusChannel::Profile, Some(&Status::error("Profile not found.")));
    target.set_status(StatusChannel::Profile, None);
    target.set_not_found(Some("Profile not found for \"zz\"."));
    target.set_not_found(None);

    let text = output(target);
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(
        lines,
        vec![
            "(directory) Loading staff directory…",
            "(profile) error: Profile not found.",
            "!! Profile not found for \"zz\".",
        ]
    );
}
