use clap::Parser;
use qr_card::card::{build, write_card, CardOptions};
use qr_card::Args;
use std::fs;
use tempfile::tempdir;

fn contains(haystack: &[u8], needle: &str) -> bool {
    haystack
        .windows(needle.len())
        .any(|window| window == needle.as_bytes())
}

#[test]
fn writes_a_pdf_and_returns_its_absolute_path() {
    let dir = tempdir().unwrap();
    let options = CardOptions {
        url: "https://example.com/game?name=Theresa".to_string(),
        recipient: "Theresa".to_string(),
        output: dir.path().join("card.pdf"),
    };

    let path = write_card(&options).unwrap();
    assert!(path.is_absolute());
    assert_eq!(path, fs::canonicalize(dir.path().join("card.pdf")).unwrap());

    let bytes = fs::read(&path).unwrap();
    assert!(bytes.starts_with(b"%PDF-"));
    assert!(contains(&bytes, "/BaseFont /Helvetica"));
    assert!(contains(&bytes, "/BaseFont /Helvetica-Bold"));
    assert!(contains(&bytes, "/BaseFont /Helvetica-Oblique"));
    assert!(contains(&bytes, "/BaseFont /Symbol"));
    assert!(contains(&bytes, "/Title (Frohe Weihnachten!)"));
    assert!(contains(&bytes, "/Subtype /Image"));
    assert!(contains(&bytes, "/ExtGState"));
}

#[test]
fn run_uses_the_command_line_output_path() {
    let dir = tempdir().unwrap();
    let out = dir.path().join("anna.pdf");
    let args = Args::try_parse_from([
        "qr-card",
        "--url",
        "https://example.com/game?name=Anna",
        "--to",
        "Anna",
        "--out",
        out.to_str().unwrap(),
    ])
    .unwrap();

    let path = qr_card::run(&args).unwrap();
    assert!(path.ends_with("anna.pdf"));
    assert!(fs::metadata(&path).unwrap().len() > 0);
}

#[test]
fn unwritable_output_is_an_io_error() {
    let dir = tempdir().unwrap();
    let options = CardOptions {
        url: "https://example.com".to_string(),
        recipient: "Theresa".to_string(),
        output: dir.path().join("missing").join("card.pdf"),
    };
    assert!(matches!(
        write_card(&options),
        Err(qr_card::CardError::Io(_))
    ));
}

#[test]
fn documents_can_be_written_to_memory() {
    let doc = build(&CardOptions {
        url: "https://example.com".to_string(),
        recipient: "Theresa".to_string(),
        output: "unused.pdf".into(),
    })
    .unwrap();

    let mut out = Vec::new();
    doc.write(&mut out).unwrap();
    assert!(out.starts_with(b"%PDF-"));
    assert!(contains(&out, "/Type /Page"));
}
