//! End-to-end extraction through the library API

use std::fs;
use std::path::Path;

use dmpextract::{
    ExtractConfig, ExtractError, Extractor, FsObjectWriter, WriteFailurePolicy,
};

use crate::helpers::{fixture, list_files, read_object, temp_dir, write_dump};

fn extract_into(dump: &Path, dest: &Path) -> dmpextract::ExtractionStats {
    let mut writer = FsObjectWriter::new(dest);
    Extractor::default()
        .run(dump, &mut writer)
        .expect("extraction should succeed")
}

/// Every extracted file with a header line, in path order
fn report(root: &Path) -> String {
    list_files(root)
        .into_iter()
        .map(|file| format!("== {} ==\n{}", file, read_object(root, &file)))
        .collect()
}

// ============================================================================
// Nesting and naming
// ============================================================================

#[test]
fn plant_fixture_produces_one_file_per_program() {
    let dest = temp_dir();
    let stats = extract_into(&fixture("plant.dmp"), dest.path());

    assert_eq!(
        list_files(dest.path()),
        vec!["Plant/AHU1/ReadCompressors.pe", "Plant/Scheduler.pe"]
    );
    assert_eq!(stats.written, 2);
    assert_eq!(stats.objects, 5);
    assert_eq!(stats.without_byte_code, 3);
    assert_eq!(stats.lines_read, 31);
}

#[test]
fn plant_fixture_contents() {
    let dest = temp_dir();
    extract_into(&fixture("plant.dmp"), dest.path());

    insta::assert_snapshot!(report(dest.path()), @r"
    == Plant/AHU1/ReadCompressors.pe ==
    Numeric Temp

    Line 10
      Temp = AI1


      Goto 10
    == Plant/Scheduler.pe ==
    Line Start
      Goto Start
    ");
}

#[test]
fn nested_object_lands_below_its_controller() {
    let dir = temp_dir();
    let dump = write_dump(
        dir.path(),
        "site.dmp",
        &[
            "BeginController : A",
            "Object : B",
            "ByteCode",
            "X",
            "",
            "",
            "Y",
            "EndByteCode",
            "EndObject",
            "EndController",
        ],
    );
    let dest = dir.path().join("out");

    extract_into(&dump, &dest);

    assert_eq!(list_files(&dest), vec!["A/B.pe"]);
    assert_eq!(read_object(&dest, "A/B.pe"), "X\n\nY\n");
    assert!(!dest.join("A.pe").exists());
}

#[test]
fn object_without_byte_code_writes_nothing() {
    let dir = temp_dir();
    let dump = write_dump(
        dir.path(),
        "site.dmp",
        &["Object : Input1", "Type : InfinityInput", "EndObject"],
    );
    let dest = dir.path().join("out");

    let stats = extract_into(&dump, &dest);

    assert_eq!(stats.written, 0);
    assert_eq!(stats.without_byte_code, 1);
    assert!(!dest.exists());
}

// ============================================================================
// Grouping and block boundaries
// ============================================================================

#[test]
fn revisited_path_merges_into_one_file() {
    let dest = temp_dir();
    extract_into(&fixture("revisited.dmp"), dest.path());

    assert_eq!(list_files(dest.path()), vec!["A/B.pe", "A/C.pe"]);
    assert_eq!(
        read_object(dest.path(), "A/B.pe"),
        "first\nEndObject\nObject : B\nsecond\n"
    );
    assert_eq!(read_object(dest.path(), "A/C.pe"), "other\n");
}

#[test]
fn terminated_siblings_sharing_a_path_keep_the_first_block() {
    let dest = temp_dir();
    extract_into(&fixture("siblings.dmp"), dest.path());

    assert_eq!(list_files(dest.path()), vec!["A/B.pe", "A/C.pe"]);
    assert_eq!(read_object(dest.path(), "A/B.pe"), "b1\n");
    assert_eq!(read_object(dest.path(), "A/C.pe"), "c1\n");
}

#[test]
fn unterminated_block_runs_to_end_of_input() {
    let dir = temp_dir();
    let dump = write_dump(
        dir.path(),
        "cut.dmp",
        &["Object : Truncated", "ByteCode", "Line 1", "", "", "  Goto 1"],
    );
    let dest = dir.path().join("out");

    extract_into(&dump, &dest);

    assert_eq!(read_object(&dest, "Truncated.pe"), "Line 1\n\n  Goto 1\n");
}

#[test]
fn crlf_dump_matches_lf_dump() {
    let dir = temp_dir();
    let lf = fs::read_to_string(fixture("plant.dmp")).unwrap();
    let crlf_path = dir.path().join("plant-crlf.dmp");
    fs::write(&crlf_path, lf.replace('\n', "\r\n")).unwrap();

    let from_lf = dir.path().join("lf");
    let from_crlf = dir.path().join("crlf");
    extract_into(&fixture("plant.dmp"), &from_lf);
    extract_into(&crlf_path, &from_crlf);

    assert_eq!(report(&from_lf), report(&from_crlf));
}

#[test]
fn keeping_blank_runs_writes_them_verbatim() {
    let dest = temp_dir();
    let extractor = Extractor::new(ExtractConfig {
        collapse_blank_runs: false,
        ..Default::default()
    });
    let mut writer = FsObjectWriter::new(dest.path());

    extractor
        .run(fixture("plant.dmp"), &mut writer)
        .unwrap();

    assert_eq!(
        read_object(dest.path(), "Plant/AHU1/ReadCompressors.pe"),
        "Numeric Temp\n\n\nLine 10\n  Temp = AI1\n\n\n\n\n  Goto 10\n"
    );
}

// ============================================================================
// Re-runs and failures
// ============================================================================

#[test]
fn second_run_is_byte_identical() {
    let dest = temp_dir();
    extract_into(&fixture("plant.dmp"), dest.path());
    let first = report(dest.path());

    // stale, longer content must be fully replaced
    fs::write(
        dest.path().join("Plant/Scheduler.pe"),
        "stale\nstale\nstale\nstale\n",
    )
    .unwrap();
    extract_into(&fixture("plant.dmp"), dest.path());

    assert_eq!(report(dest.path()), first);
}

#[test]
fn abort_policy_stops_on_blocked_directory() {
    let dest = temp_dir();
    fs::create_dir_all(dest.path().join("Plant")).unwrap();
    fs::write(dest.path().join("Plant/AHU1"), "in the way").unwrap();

    let mut writer = FsObjectWriter::new(dest.path());
    let err = Extractor::default()
        .run(fixture("plant.dmp"), &mut writer)
        .unwrap_err();

    assert!(matches!(err, ExtractError::CreateDir { .. }));
    // ReadCompressors comes first, so nothing after it was written
    assert!(!dest.path().join("Plant/Scheduler.pe").exists());
}

#[test]
fn skip_policy_writes_remaining_objects() {
    let dest = temp_dir();
    fs::create_dir_all(dest.path().join("Plant")).unwrap();
    fs::write(dest.path().join("Plant/AHU1"), "in the way").unwrap();

    let extractor = Extractor::new(ExtractConfig {
        on_write_error: WriteFailurePolicy::Skip,
        ..Default::default()
    });
    let mut writer = FsObjectWriter::new(dest.path());
    let stats = extractor.run(fixture("plant.dmp"), &mut writer).unwrap();

    assert_eq!(stats.written, 1);
    assert_eq!(stats.failed.len(), 1);
    assert!(stats.failed[0].ends_with("ReadCompressors.pe"));
    assert_eq!(
        read_object(dest.path(), "Plant/Scheduler.pe"),
        "Line Start\n  Goto Start\n"
    );
}

#[test]
fn missing_dump_is_reported() {
    let dest = temp_dir();
    let mut writer = FsObjectWriter::new(dest.path());
    let err = Extractor::default()
        .run(dest.path().join("absent.dmp"), &mut writer)
        .unwrap_err();

    assert!(matches!(err, ExtractError::DumpNotFound { .. }));
    assert!(err.to_string().contains("absent.dmp"));
}
