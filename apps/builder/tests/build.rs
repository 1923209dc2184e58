//! End-to-end tests for a full build run.

mod common;

use common::fixtures::*;
use common::{fixed_now, TestContext};
use fsi_grammar_builder::error::{EXIT_OK, EXIT_WARNINGS};
use fsi_grammar_builder::execute;
use fsi_grammar_core::{TextMode, Warning, COLUMNS};
use pretty_assertions::assert_eq;

const BLANK: &str = "&nbsp;&nbsp;&nbsp;&nbsp;&nbsp";

fn sample_context() -> TestContext {
    let (notes, model, prefixes) = sample_course();
    TestContext::with_tables(&notes, &model, &prefixes)
}

#[test]
fn test_build_writes_notes_in_input_order() {
    let ctx = sample_context();

    let outcome = execute(&ctx.config(), fixed_now()).expect("build failed");

    let expected = [
        format!(
            "FSIDE000A\t<u>{}</u> ist kalt.\td- Bier\t<u>das Bier</u> ist kalt.\t1\tA\t\t1\t\t0\t0\tU01 A Q1.0 Art-1",
            BLANK
        ),
        format!(
            "FSIDE000B\t<u>{}</u> ist kalt.\td- Wein\t<u>der Wein</u> ist kalt.\t1\tA\t\t1\t\t1\t1\tU01 A Q1.1 Art-1",
            BLANK
        ),
        format!(
            "FSIDE000C\t<u>{}</u>\t\tIch komme.<br>Du gehst.\t1\tB\t\t2\t\t0\t2\tU01 B Q2 Satz-2",
            BLANK
        ),
        format!(
            "FSIDE00FF\t<u>Sie</u> {0} {0}.\theute\t<u>Er</u> <u>kommt</u> <u>morgen</u>.\t2\tC\t\t3\ta\t0\t3\tU02 C Q3a Verb-3",
            BLANK
        ),
    ];
    let mut expected_file = expected.join("\n");
    expected_file.push('\n');
    assert_eq!(ctx.read_output("German-FSI-Grammar.txt"), expected_file);

    assert_eq!(outcome.report.rows_written, 4);
    assert_eq!(outcome.report.rules, vec!["Art-1", "Satz-2", "Verb-3"]);
    assert!(outcome.report.warnings.is_empty());
    assert_eq!(outcome.exit_status(false), EXIT_OK);
}

#[test]
fn test_fields_manifest_is_header_only() {
    let ctx = sample_context();

    execute(&ctx.config(), fixed_now()).expect("build failed");

    let mut expected = COLUMNS.join("\t");
    expected.push('\n');
    assert_eq!(ctx.read_output("German-FSI-Grammar_fields.txt"), expected);
}

#[test]
fn test_every_row_has_twelve_fields() {
    let ctx = sample_context();

    execute(&ctx.config(), fixed_now()).expect("build failed");

    for row in ctx.output_rows() {
        assert_eq!(row.len(), 12, "row {:?}", row);
        assert!(!row[1].contains("{F"));
        assert!(!row[3].contains("{F"));
    }
}

#[test]
fn test_report_is_written_next_to_outputs() {
    let ctx = sample_context();

    execute(&ctx.config(), fixed_now()).expect("build failed");

    let report: serde_json::Value =
        serde_json::from_str(&ctx.read_output("German-FSI-Grammar_report.json")).unwrap();
    assert_eq!(report["generated_at"], "2025-02-07T09:30:00Z");
    assert_eq!(report["text_mode"], "corrected");
    assert_eq!(report["notes_loaded"], 4);
    assert_eq!(report["models_loaded"], 3);
    assert_eq!(report["prefixes_loaded"], 2);
    assert_eq!(report["rows_written"], 4);
    assert_eq!(report["warnings"].as_array().unwrap().len(), 0);
}

#[test]
fn test_orphan_note_is_dropped_with_warning() {
    let (_, model, prefixes) = sample_course();
    let notes = table(
        NOTES_HEADER,
        &[
            note(10, 1, "A", "1", "", "Bier", "das"),
            note(11, 1, "A", "1", "", "Wein", "der"),
            note(20, 9, "Z", "1", "", "x", "y"),
        ],
    );
    let ctx = TestContext::with_tables(&notes, &model, &prefixes);

    let outcome = execute(&ctx.config(), fixed_now()).expect("build failed");

    assert_eq!(ctx.output_rows().len(), 2);
    assert!(outcome.report.warnings.contains(&Warning::NoteWithoutModel {
        id: 20,
        line: 4,
        key: "Unit=9 Qtype=Z Qpart= Qnum=1".to_string(),
    }));
    // the two unused models are reported too
    assert_eq!(outcome.report.warnings.len(), 3);
    assert_eq!(outcome.exit_status(false), EXIT_WARNINGS);
    assert_eq!(outcome.exit_status(true), EXIT_OK);
}

#[test]
fn test_missing_prefix_for_pattern_one_keeps_row() {
    let (notes, model, _) = sample_course();
    let prefixes = table(PREFIX_HEADER, &[prefix("das", "d-", "")]);
    let ctx = TestContext::with_tables(&notes, &model, &prefixes);

    let outcome = execute(&ctx.config(), fixed_now()).expect("build failed");

    let rows = ctx.output_rows();
    assert_eq!(rows.len(), 4);
    assert_eq!(rows[1][2], "Wein");
    assert_eq!(
        outcome.report.warnings,
        vec![Warning::NoteWithoutPrefix {
            id: 11,
            line: 3,
            r1: "der".to_string(),
        }]
    );
}

#[test]
fn test_corrected_rows_are_tagged_modified() {
    let (notes, model, _) = sample_course();
    let prefixes = table(
        PREFIX_HEADER,
        &[prefix("das", "d-", "D-"), prefix("der", "d-", "")],
    );
    let ctx = TestContext::with_tables(&notes, &model, &prefixes);

    execute(&ctx.config(), fixed_now()).expect("build failed");

    let rows = ctx.output_rows();
    assert_eq!(rows[0][2], "d- Bier");
    assert_eq!(rows[0][11], "U01 A Q1.0 Modified Art-1");
    assert_eq!(rows[1][11], "U01 A Q1.1 Art-1");
}

#[test]
fn test_keep_original_text_uses_original_columns() {
    let (notes, model, _) = sample_course();
    let prefixes = table(
        PREFIX_HEADER,
        &[prefix("das", "d-", "D-"), prefix("der", "d-", "")],
    );
    let ctx = TestContext::with_tables(&notes, &model, &prefixes);
    let config = ctx.config().with_text_mode(TextMode::Original);

    let outcome = execute(&config, fixed_now()).expect("build failed");

    let rows = ctx.output_rows();
    assert_eq!(rows[0][2], "D- Bier");
    assert_eq!(rows[0][11], "U01 A Q1.0 Art-1");
    assert_eq!(outcome.report.text_mode, TextMode::Original);
}

#[test]
fn test_output_directory_is_created() {
    let ctx = sample_context();
    assert!(!ctx.output_dir.exists());

    execute(&ctx.config(), fixed_now()).expect("build failed");

    assert!(ctx.output_exists("German-FSI-Grammar.txt"));
    assert!(ctx.output_exists("German-FSI-Grammar_fields.txt"));
}

#[test]
fn test_header_only_inputs_write_empty_note_file() {
    let ctx = TestContext::with_tables(
        &table(NOTES_HEADER, &[]),
        &table(MODEL_HEADER, &[]),
        &table(PREFIX_HEADER, &[]),
    );

    let outcome = execute(&ctx.config(), fixed_now()).expect("build failed");

    assert_eq!(ctx.read_output("German-FSI-Grammar.txt"), "");
    assert!(ctx.output_exists("German-FSI-Grammar_fields.txt"));
    assert_eq!(outcome.exit_status(false), EXIT_OK);
}
