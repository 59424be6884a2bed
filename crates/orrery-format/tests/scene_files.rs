//! On-disk load/save integration tests.
//!
//! Each test writes scene text to a temporary file, drives `load` or
//! `save`, and checks the resulting scene or file contents.

use orrery_core::{BodyField, BodyKind, Scene};
use orrery_format::{load, save, FormatError, SceneReader};
use orrery_test_utils::{scene_file, solar_system, SOLAR_SYSTEM_TEXT};

// ── Loading ─────────────────────────────────────────────────────

#[test]
fn load_skips_comments_and_blank_lines() {
    let file = scene_file(SOLAR_SYSTEM_TEXT);
    let scene = load(file.path()).unwrap();

    assert_eq!(scene.len(), 3);
    let names: Vec<_> = scene.iter().map(|b| b.name.as_str()).collect();
    assert_eq!(names, ["Sun", "Earth", "Mars"]);
}

#[test]
fn load_matches_fixture_values() {
    let file = scene_file(SOLAR_SYSTEM_TEXT);
    let loaded = load(file.path()).unwrap();
    let expected = solar_system();

    for (got, want) in loaded.iter().zip(expected.iter()) {
        assert_eq!(got.kind, want.kind);
        assert_eq!(got.radius, want.radius);
        assert_eq!(got.color, want.color);
        assert_eq!(got.mass, want.mass);
        assert_eq!(got.position(), want.position());
        assert_eq!((got.vx, got.vy), (want.vx, want.vy));
        assert_eq!(got.name, want.name);
        // Attractors and time come from the physics side, never the file.
        assert!(got.attractor.is_none());
        assert!(got.time.is_none());
    }
}

#[test]
fn load_n_records_with_interleaved_noise() {
    let mut text = String::new();
    for i in 0..25 {
        text.push_str("# comment\n\n   \n");
        let keyword = if i % 2 == 0 { "Star" } else { "Planet" };
        text.push_str(&format!("{keyword} {i} c{i} {} {i} {i} 0 0 body{i}\n", i + 1));
    }
    let file = scene_file(&text);
    let scene = load(file.path()).unwrap();

    assert_eq!(scene.len(), 25);
    for (i, body) in scene.iter().enumerate() {
        assert_eq!(body.name, format!("body{i}"));
        assert_eq!(body.radius, i as f64);
    }
}

#[test]
fn unknown_record_is_skipped_not_fatal() {
    let file = scene_file(
        "Star 10 red 1000 1 2 3 4 Sun\n\
         Moon 1 red 1 1 1 1 1 x\n\
         Planet 1 blue 1 5 6 7 8 Earth\n",
    );
    let scene = load(file.path()).unwrap();

    assert_eq!(scene.len(), 2);
    assert_eq!(scene.bodies()[0].kind, BodyKind::Star);
    assert_eq!(scene.bodies()[1].kind, BodyKind::Planet);
}

#[test]
fn keyword_dispatch_ignores_case_but_parser_does_not() {
    let file = scene_file("Star 10 red 1000 1 2 3 4 Sun\nSTAR 10 red 1000 1 2 3 4 Sol\n");
    let err = load(file.path()).unwrap_err();
    match err {
        FormatError::TypeMismatch {
            expected, found, ..
        } => {
            assert_eq!(expected, BodyKind::Star);
            assert_eq!(found, "STAR");
        }
        other => panic!("expected TypeMismatch, got {other:?}"),
    }
}

#[test]
fn short_star_line_aborts_the_whole_load() {
    let file = scene_file(
        "Planet 1 blue 1 5 6 7 8 Earth\n\
         Star 10 red 1000 1 2\n\
         Planet 1 blue 1 5 6 7 8 Mars\n",
    );
    let err = load(file.path()).unwrap_err();
    assert!(err.is_line_error());
    match err {
        FormatError::Malformed { field, line, .. } => {
            assert_eq!(field, BodyField::Vx);
            assert_eq!(line, "Star 10 red 1000 1 2");
        }
        other => panic!("expected Malformed, got {other:?}"),
    }
}

#[test]
fn missing_file_reports_path() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("absent.txt");
    let err = load(&path).unwrap_err();
    assert!(!err.is_line_error());
    assert!(err.to_string().contains("absent.txt"));
}

#[test]
fn invalid_utf8_is_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("binary.txt");
    std::fs::write(&path, [b'S', b't', 0xFF, 0xFE, b'\n']).unwrap();
    assert!(matches!(load(&path), Err(FormatError::Io(_))));
}

// ── Saving ──────────────────────────────────────────────────────

#[test]
fn save_writes_eight_fields_per_line() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("out.txt");
    save(&path, &solar_system()).unwrap();

    let text = std::fs::read_to_string(&path).unwrap();
    let lines: Vec<_> = text.lines().collect();
    assert_eq!(lines.len(), 3);
    assert_eq!(lines[0], "Star 30.0 yellow 1.98892e30 0.0 0.0 0.0 0.0");
    assert!(lines[1].starts_with("Planet "));
    assert!(lines.iter().all(|l| l.split(' ').count() == 8));
    assert!(!text.contains("Earth"));
}

#[test]
fn save_truncates_existing_file() {
    let file = scene_file(&"# old content\n".repeat(100));
    let scene: Scene = [orrery_test_utils::sun()].into_iter().collect();
    save(file.path(), &scene).unwrap();

    let text = std::fs::read_to_string(file.path()).unwrap();
    assert_eq!(text.lines().count(), 1);
    assert!(!text.contains("old content"));
}

#[test]
fn saved_scene_reads_back_once_names_are_restored() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("round.txt");
    let original = solar_system();
    save(&path, &original).unwrap();

    let text = std::fs::read_to_string(&path).unwrap();
    let named: String = text
        .lines()
        .zip(original.iter())
        .map(|(line, body)| format!("{line} {}\n", body.name))
        .collect();
    let reread = SceneReader::new(named.as_bytes()).read_scene().unwrap();

    assert_eq!(reread.len(), original.len());
    for (got, want) in reread.iter().zip(original.iter()) {
        assert_eq!(got.kind, want.kind);
        assert_eq!(got.mass, want.mass);
        assert_eq!(got.position(), want.position());
        assert_eq!((got.vx, got.vy), (want.vx, want.vy));
    }
}

#[test]
fn saved_scene_without_names_fails_to_load() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("lossy.txt");
    save(&path, &solar_system()).unwrap();

    assert!(matches!(
        load(&path),
        Err(FormatError::Malformed {
            field: BodyField::Name,
            ..
        })
    ));
}

#[test]
fn save_into_missing_directory_fails() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("no").join("such").join("dir.txt");
    assert!(matches!(
        save(&path, &solar_system()),
        Err(FormatError::FileAccess { .. })
    ));
}
