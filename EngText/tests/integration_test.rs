use engtext::converter;
use engtext::prelude::*;
use pretty_assertions::assert_eq;
use std::fs;
use tempfile::tempdir;

fn sample() -> TextResource {
    let mut resource = TextResource::with_name("c3_eng");
    resource.set_index_with_counts(false);
    resource.add_group(TextGroup::with_strings(0, ["Caesar III", "Rome"]));
    resource.add_group(TextGroup::new(3));
    resource.add_group(TextGroup::with_strings(
        28,
        ["Plebs need food & water", "<none>", "", "  spaced  "],
    ));
    resource
}

#[test]
fn test_file_round_trip() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("strings.xml");

    let resource = sample();
    write_text_xml(&path, &resource).unwrap();
    let read_back = read_text_xml(&path).unwrap();

    assert_eq!(read_back, resource);
}

#[test]
fn test_concrete_document_writes_back_equivalent() {
    let resource = parse_text_xml_str(
        r#"<strings><group id="1"><string id="0">A</string><string id="1">B</string></group></strings>"#,
    )
    .unwrap();

    let xml = to_xml_string(&resource).unwrap();
    assert!(xml.contains(r#"indexWithCounts="true""#));

    let again = parse_text_xml_str(&xml).unwrap();
    assert_eq!(again.groups(), [TextGroup::with_strings(1, ["A", "B"])]);
    assert!(again.index_with_counts());
    assert_eq!(again.name(), "");
}

#[test]
fn test_read_missing_file() {
    let dir = tempdir().unwrap();
    let mut resource = sample();

    let err = read_text_xml_into(dir.path().join("missing.xml"), &mut resource).unwrap_err();

    assert!(matches!(err, Error::OpenFailed { .. }));
    assert_eq!(resource, sample());
}

#[test]
fn test_write_into_missing_directory() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("no_such_dir").join("out.xml");

    let err = write_text_xml(&path, &sample()).unwrap_err();
    assert!(matches!(err, Error::OpenFailed { .. }));
}

#[test]
fn test_read_into_appends_after_existing_groups() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("extra.xml");
    fs::write(
        &path,
        r#"<strings name="extra"><group id="99"><string id="0">late</string></group></strings>"#,
    )
    .unwrap();

    let mut resource = sample();
    read_text_xml_into(&path, &mut resource).unwrap();

    assert_eq!(resource.name(), "extra");
    assert_eq!(resource.len(), 4);
    assert_eq!(resource.groups()[3].id(), 99);
    assert_eq!(resource.get(28, 1), Some("<none>"));
}

#[test]
fn test_normalize_rewrites_hand_edited_file() {
    let dir = tempdir().unwrap();
    let source = dir.path().join("hand.xml");
    let dest = dir.path().join("clean.xml");
    fs::write(
        &source,
        "<!-- edited by hand -->\n<strings name=\"hand\"><group id=\"7\"><string id=\"0\">One</string>\n\n<string id=\"1\">Two</string></group><group id=\"8\"/></strings>",
    )
    .unwrap();

    converter::normalize_xml(&source, &dest).unwrap();

    let written = fs::read_to_string(&dest).unwrap();
    assert_eq!(
        written,
        r#"<?xml version="1.0" encoding="UTF-8"?>
<strings name="hand" indexWithCounts="true">
    <group id="7">
        <string id="0">One</string>
        <string id="1">Two</string>
    </group>
    <group id="8">
    </group>
</strings>
"#
    );
    assert_eq!(read_text_xml(&dest).unwrap(), read_text_xml(&source).unwrap());
}

#[test]
fn test_normalize_refuses_invalid_source() {
    let dir = tempdir().unwrap();
    let source = dir.path().join("bad.xml");
    let dest = dir.path().join("out.xml");
    fs::write(
        &source,
        r#"<strings><group id="1"><string id="0">A</string><string id="2">B</string></group></strings>"#,
    )
    .unwrap();

    let err = converter::normalize_xml(&source, &dest).unwrap_err();

    assert!(matches!(err, Error::StringsNotOrdered { group: 1, .. }));
    assert!(!dest.exists());
}

#[test]
fn test_json_export() {
    let dir = tempdir().unwrap();
    let source = dir.path().join("strings.xml");
    let dest = dir.path().join("strings.json");
    write_text_xml(&source, &sample()).unwrap();

    let phases = std::cell::RefCell::new(Vec::new());
    converter::convert_xml_to_json_with_progress(&source, &dest, &|p| {
        phases.borrow_mut().push(p.phase);
    })
    .unwrap();

    let json: serde_json::Value = serde_json::from_str(&fs::read_to_string(&dest).unwrap()).unwrap();
    assert_eq!(json["name"], "c3_eng");
    assert_eq!(json["indexWithCounts"], false);
    assert_eq!(json["groups"][2]["id"], 28);
    assert_eq!(json["groups"][2]["strings"][1], "<none>");
    assert_eq!(
        phases.into_inner().last().copied(),
        Some(converter::ConvertPhase::Complete)
    );
}
