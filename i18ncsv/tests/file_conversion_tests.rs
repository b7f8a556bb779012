use i18ncsv::traits::Parser;
use i18ncsv::{Codec, CollisionPolicy, Error, LanguageCode, TranslationTree, WriteOutcome};
use indoc::indoc;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

fn lang(code: &str) -> LanguageCode {
    LanguageCode::new(code).unwrap()
}

fn write(path: &Path, content: &str) {
    fs::write(path, content).unwrap();
}

fn read_tree(path: &Path) -> serde_json::Value {
    serde_json::from_str(&fs::read_to_string(path).unwrap()).unwrap()
}

#[test]
fn test_merge_two_languages_matches_expected_csv() {
    let temp_dir = TempDir::new().unwrap();
    let lang_dir = temp_dir.path().join("lang");
    fs::create_dir(&lang_dir).unwrap();
    write(&lang_dir.join("en-US.json"), r#"{"common":{"ok":"OK"}}"#);
    write(&lang_dir.join("zh-TW.json"), r#"{"common":{"ok":"確定"}}"#);
    let csv_file = temp_dir.path().join("i18n.csv");

    let codec = Codec::new();
    let report = codec
        .merge_dir_to_csv(&lang_dir, &csv_file, &[lang("zh-TW"), lang("en-US")])
        .unwrap();

    assert_eq!(report.rows, 1);
    assert_eq!(report.merged, vec![lang("zh-TW"), lang("en-US")]);
    assert!(report.missing.is_empty());
    assert_eq!(
        fs::read_to_string(&csv_file).unwrap(),
        indoc! {r#"
            "Category","Section","Item","zh-TW","zh-CN","en-US"
            "common","ok","","確定","","OK"
        "#}
    );
}

#[test]
fn test_csv_back_to_json_skips_empty_language() {
    let temp_dir = TempDir::new().unwrap();
    let csv_file = temp_dir.path().join("i18n.csv");
    write(
        &csv_file,
        indoc! {r#"
            "Category","Section","Item","zh-TW","zh-CN","en-US"
            "common","ok","","確定","","OK"
        "#},
    );
    let out_dir = temp_dir.path().join("out");

    let codec = Codec::new();
    let outcomes = codec
        .csv_to_json_dir(
            &csv_file,
            &out_dir,
            &[lang("zh-TW"), lang("zh-CN"), lang("en-US")],
        )
        .unwrap();

    assert_eq!(outcomes.len(), 3);
    assert!(matches!(&outcomes[1], WriteOutcome::Skipped { language } if language.as_str() == "zh-CN"));
    assert!(!out_dir.join("zh-CN.json").exists());

    assert_eq!(
        read_tree(&out_dir.join("zh-TW.json")),
        serde_json::json!({"common": {"ok": "確定"}})
    );
    let en_text = fs::read_to_string(out_dir.join("en-US.json")).unwrap();
    assert_eq!(en_text, "{\n  \"common\": {\n    \"ok\": \"OK\"\n  }\n}");
}

#[test]
fn test_csv_to_json_only_selected_targets() {
    let temp_dir = TempDir::new().unwrap();
    let csv_file = temp_dir.path().join("i18n.csv");
    write(
        &csv_file,
        "Category,Section,Item,zh-TW,zh-CN,en-US\ncommon,ok,,確定,确定,OK\n",
    );

    let outcomes = Codec::new()
        .csv_to_json_dir(&csv_file, temp_dir.path(), &[lang("en-US"), lang("zh-TW")])
        .unwrap();

    let written: Vec<&str> = outcomes.iter().map(|o| o.language().as_str()).collect();
    assert_eq!(written, vec!["zh-TW", "en-US"]);
    assert!(!temp_dir.path().join("zh-CN.json").exists());
}

#[test]
fn test_merge_with_missing_language_file() {
    let temp_dir = TempDir::new().unwrap();
    write(
        &temp_dir.path().join("en-US.json"),
        r#"{"nav":{"home":"Home","about":"About"}}"#,
    );
    let csv_file = temp_dir.path().join("merged.csv");

    let codec = Codec::new();
    let report = codec
        .merge_dir_to_csv(
            temp_dir.path(),
            &csv_file,
            &[lang("zh-TW"), lang("zh-CN"), lang("en-US")],
        )
        .unwrap();

    assert_eq!(report.rows, 2);
    assert_eq!(report.missing, vec![lang("zh-TW"), lang("zh-CN")]);
    let content = fs::read_to_string(&csv_file).unwrap();
    assert!(content.contains(r#""nav","about","","","","About""#));
    assert!(content.contains(r#""nav","home","","","","Home""#));
    assert!(content.find("about").unwrap() < content.find("home").unwrap());
}

#[test]
fn test_merge_is_byte_identical_across_runs() {
    let temp_dir = TempDir::new().unwrap();
    write(
        &temp_dir.path().join("en-US.json"),
        r#"{"z":{"a":"Z"},"b":{"c":"B","a":"A"},"m":"M"}"#,
    );
    write(
        &temp_dir.path().join("zh-CN.json"),
        r#"{"m":"中","b":{"a":"甲"}}"#,
    );
    let first = temp_dir.path().join("first.csv");
    let second = temp_dir.path().join("second.csv");
    let targets = [lang("zh-CN"), lang("en-US")];

    let codec = Codec::new();
    codec.merge_dir_to_csv(temp_dir.path(), &first, &targets).unwrap();
    codec.merge_dir_to_csv(temp_dir.path(), &second, &targets).unwrap();

    assert_eq!(fs::read(&first).unwrap(), fs::read(&second).unwrap());
}

#[test]
fn test_merge_malformed_json_aborts_with_path() {
    let temp_dir = TempDir::new().unwrap();
    write(&temp_dir.path().join("en-US.json"), "{ \"oops\": ");
    let csv_file = temp_dir.path().join("out.csv");

    let err = Codec::new()
        .merge_dir_to_csv(temp_dir.path(), &csv_file, &[lang("en-US")])
        .unwrap_err();

    assert!(err.to_string().contains("en-US.json"));
    assert!(matches!(err.root(), Error::Parse(_)));
    assert!(!csv_file.exists());
}

#[test]
fn test_single_file_export() {
    let temp_dir = TempDir::new().unwrap();
    let json_file = temp_dir.path().join("zh-TW.json");
    write(
        &json_file,
        r#"{"common":{"buttons":{"ok":"確定","cancel":"取消"}},"title":"標題"}"#,
    );
    let csv_file = temp_dir.path().join("nested/dir/out.csv");

    let rows = Codec::new()
        .json_file_to_csv(&json_file, &csv_file, "zh-TW")
        .unwrap();

    assert_eq!(rows, 3);
    assert_eq!(
        fs::read_to_string(&csv_file).unwrap(),
        indoc! {r#"
            "Category","Section","Item","zh-TW","zh-CN","en-US"
            "common","buttons","ok","確定","",""
            "common","buttons","cancel","取消","",""
            "title","","","標題","",""
        "#}
    );
}

#[test]
fn test_single_file_export_missing_input() {
    let temp_dir = TempDir::new().unwrap();
    let err = Codec::new()
        .json_file_to_csv(
            temp_dir.path().join("absent.json"),
            temp_dir.path().join("out.csv"),
            "en-US",
        )
        .unwrap_err();
    assert!(err.to_string().contains("absent.json"));
    assert!(matches!(err.root(), Error::Io(_)));
}

#[test]
fn test_single_file_export_rejects_deep_keys() {
    let temp_dir = TempDir::new().unwrap();
    let json_file = temp_dir.path().join("en-US.json");
    write(&json_file, r#"{"a":{"b":{"c":{"d":"too deep"}}}}"#);

    let err = Codec::new()
        .json_file_to_csv(&json_file, temp_dir.path().join("out.csv"), "en-US")
        .unwrap_err();
    assert!(matches!(err.root(), Error::KeyTooDeep { depth: 4, .. }));
}

#[test]
fn test_csv_without_header_is_parse_error() {
    let temp_dir = TempDir::new().unwrap();
    let csv_file = temp_dir.path().join("empty.csv");
    write(&csv_file, "");

    let err = Codec::new()
        .csv_to_json_dir(&csv_file, temp_dir.path(), &[lang("en-US")])
        .unwrap_err();
    assert!(matches!(err.root(), Error::MissingHeader));
    assert!(err.to_string().contains("empty.csv"));
}

#[test]
fn test_trailing_blank_line_and_crlf() {
    let temp_dir = TempDir::new().unwrap();
    let plain = temp_dir.path().join("plain.csv");
    let messy = temp_dir.path().join("messy.csv");
    write(&plain, "Category,Section,Item,en-US\na,b,c,Value\n");
    write(&messy, "Category,Section,Item,en-US\r\na,b,c,Value\r\n\r\n   \r\n");

    let codec = Codec::new();
    let plain_out = temp_dir.path().join("plain_out");
    let messy_out = temp_dir.path().join("messy_out");
    codec.csv_to_json_dir(&plain, &plain_out, &[lang("en-US")]).unwrap();
    codec.csv_to_json_dir(&messy, &messy_out, &[lang("en-US")]).unwrap();

    assert_eq!(
        fs::read(plain_out.join("en-US.json")).unwrap(),
        fs::read(messy_out.join("en-US.json")).unwrap()
    );
}

#[test]
fn test_collision_policy_controls_conflicts() {
    let temp_dir = TempDir::new().unwrap();
    let csv_file = temp_dir.path().join("conflict.csv");
    write(
        &csv_file,
        "Category,Section,Item,en-US\ncommon,ok,,OK\ncommon,ok,label,Label\n",
    );

    let err = Codec::new()
        .csv_to_json_dir(&csv_file, temp_dir.path(), &[lang("en-US")])
        .unwrap_err();
    assert!(matches!(err.root(), Error::StructuralConflict { .. }));
    assert!(!temp_dir.path().join("en-US.json").exists());

    let codec = Codec::builder()
        .collision_policy(CollisionPolicy::Overwrite)
        .build();
    codec
        .csv_to_json_dir(&csv_file, temp_dir.path(), &[lang("en-US")])
        .unwrap();
    let tree = TranslationTree::read_from(temp_dir.path().join("en-US.json")).unwrap();
    assert_eq!(tree.get("common.ok.label"), Some("Label"));
}

#[test]
fn test_custom_language_configuration() {
    let temp_dir = TempDir::new().unwrap();
    write(&temp_dir.path().join("ja-JP.json"), r#"{"app":{"name":"アプリ"}}"#);
    write(&temp_dir.path().join("en-US.json"), r#"{"app":{"name":"App"}}"#);
    let csv_file = temp_dir.path().join("out.csv");

    let codec = Codec::builder().languages(["en-US", "ja-JP"]).unwrap().build();
    let targets = codec.languages().codes().to_vec();
    codec.merge_dir_to_csv(temp_dir.path(), &csv_file, &targets).unwrap();

    let content = fs::read_to_string(&csv_file).unwrap();
    assert!(content.starts_with("\"Category\",\"Section\",\"Item\",\"en-US\",\"ja-JP\"\n"));
    assert!(content.contains(r#""app","name","","App","アプリ""#));

    let err = Codec::new()
        .merge_dir_to_csv(temp_dir.path(), &csv_file, &[lang("ja-JP")])
        .unwrap_err();
    assert!(matches!(err, Error::InvalidLanguage(_)));
}

#[test]
fn test_full_round_trip_through_files() {
    let temp_dir = TempDir::new().unwrap();
    let src = temp_dir.path().join("src");
    let dst = temp_dir.path().join("dst");
    fs::create_dir(&src).unwrap();
    let en = r#"{"common":{"buttons":{"ok":"OK, \"sure\""},"title":"Home"},"brand":"Acme"}"#;
    let cn = r#"{"common":{"buttons":{"ok":"好的"}}}"#;
    write(&src.join("en-US.json"), en);
    write(&src.join("zh-CN.json"), cn);
    let csv_file = temp_dir.path().join("all.csv");

    let codec = Codec::new();
    let targets = codec.languages().codes().to_vec();
    codec.merge_dir_to_csv(&src, &csv_file, &targets).unwrap();
    let outcomes = codec.csv_to_json_dir(&csv_file, &dst, &targets).unwrap();

    assert!(matches!(outcomes[0], WriteOutcome::Skipped { .. }));
    assert!(matches!(outcomes[2], WriteOutcome::Written { entries: 3, .. }));
    assert_eq!(
        read_tree(&dst.join("en-US.json")),
        serde_json::from_str::<serde_json::Value>(en).unwrap()
    );
    assert_eq!(
        read_tree(&dst.join("zh-CN.json")),
        serde_json::from_str::<serde_json::Value>(cn).unwrap()
    );
}
