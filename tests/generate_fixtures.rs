//! Full catalog runs against a temporary output root.

use std::{fs, path::Path};

use taxcredit_fixtures::{
    entities::{CaseGroupKind, GeneratorConfig},
    ext::standard_catalog::{CORPORATE_CASES, INDIVIDUAL_CASES},
    util::TestCaseGenerator,
};

fn files_with_extension(dir: &Path, ext: &str) -> Vec<String> {
    let mut names: Vec<String> = fs::read_dir(dir)
        .unwrap()
        .map(|entry| entry.unwrap().file_name().to_string_lossy().into_owned())
        .filter(|name| name.ends_with(ext))
        .collect();
    names.sort();
    names
}

fn generator_at(root: &Path) -> TestCaseGenerator {
    TestCaseGenerator::new(GeneratorConfig::default().with_output_root(root))
}

#[test]
fn writes_twenty_json_and_twenty_workbooks() {
    let root = tempfile::tempdir().unwrap();
    let generator = generator_at(root.path());

    let report = generator.generate().unwrap();

    assert_eq!(report.total(), 20);
    assert_eq!(report.count(CaseGroupKind::Corporate), 10);
    assert_eq!(report.count(CaseGroupKind::Individual), 10);

    let corp = root.path().join("corp");
    let individual = root.path().join("individual");
    assert_eq!(files_with_extension(&corp, ".json").len(), 10);
    assert_eq!(files_with_extension(&corp, ".xlsx").len(), 10);
    assert_eq!(files_with_extension(&individual, ".json").len(), 10);
    assert_eq!(files_with_extension(&individual, ".xlsx").len(), 10);
    assert_eq!(files_with_extension(&corp, ".json")[0], "TC-CORP-01.json");
    assert_eq!(files_with_extension(&individual, ".xlsx")[9], "TC-INC-10.xlsx");
}

#[test]
fn written_files_match_rendered_documents() {
    let root = tempfile::tempdir().unwrap();
    let generator = generator_at(root.path());
    let report = generator.generate().unwrap();

    for fixture in &report.fixtures {
        let json = fs::read_to_string(&fixture.json_path).unwrap();
        let doc: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(doc["request"]["req_id"], fixture.case_id.replace('-', ""));

        let xlsx = fs::read(&fixture.xlsx_path).unwrap();
        assert!(xlsx.starts_with(b"PK"));
    }

    let case = &INDIVIDUAL_CASES[9];
    let on_disk =
        fs::read_to_string(root.path().join("individual").join("TC-INC-10.json")).unwrap();
    assert_eq!(on_disk, generator.render_json(case).unwrap());
}

#[test]
fn rerun_overwrites_existing_fixtures() {
    let root = tempfile::tempdir().unwrap();
    let generator = generator_at(root.path());

    generator.generate().unwrap();
    let first = fs::read(root.path().join("corp").join("TC-CORP-01.json")).unwrap();
    generator.generate().unwrap();
    let second = fs::read(root.path().join("corp").join("TC-CORP-01.json")).unwrap();

    assert_eq!(first, second);
    assert_eq!(files_with_extension(&root.path().join("corp"), ".json").len(), 10);
}

#[test]
fn rendering_is_deterministic() {
    let generator = TestCaseGenerator::default();
    for case in CORPORATE_CASES.iter().chain(INDIVIDUAL_CASES.iter()) {
        assert_eq!(
            generator.render_json(case).unwrap(),
            generator.render_json(case).unwrap()
        );
        assert_eq!(generator.workbook_layout(case).unwrap().len(), 5);
    }
}

#[test]
fn unwritable_output_root_fails() {
    let root = tempfile::tempdir().unwrap();
    let blocker = root.path().join("blocker");
    fs::write(&blocker, b"not a directory").unwrap();
    let generator = generator_at(&blocker);

    assert!(generator.generate().is_err());
}

#[test]
fn request_date_is_stamped_on_envelope_and_basic_info() {
    let date = chrono::NaiveDate::from_ymd_opt(2025, 3, 31).unwrap();
    let generator = TestCaseGenerator::new(GeneratorConfig::default().with_request_date(date));

    let json = generator.render_json(&CORPORATE_CASES[0]).unwrap();
    let doc: serde_json::Value = serde_json::from_str(&json).unwrap();

    assert_eq!(doc["request"]["request_date"], "2025-03-31");
    assert_eq!(doc["basic"]["request_date"], "2025-03-31");
}
