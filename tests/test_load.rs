use std::fs;
use std::path::PathBuf;

use xmllex::{Error, Stat, XmlDoc};

fn temp_file(name: &str, content: &[u8]) -> PathBuf {
    let path = std::env::temp_dir().join(format!("xmllex-{}-{}", std::process::id(), name));
    fs::write(&path, content).unwrap();
    path
}

#[test]
fn test_from_file() {
    let path = temp_file("plain.xml", b"<?xml version=\"1.0\"?>\n<doc><a x='1'/></doc>\n");
    let doc = XmlDoc::from_file(&path);
    fs::remove_file(&path).unwrap();
    assert!(doc.is_ok());
    assert_eq!(
        doc.stat(),
        Stat {
            attributes: 1,
            elements: 2,
            unknown: 0
        }
    );
}

#[test]
fn test_from_file_utf16() {
    let mut content = vec![0xFE, 0xFF];
    for unit in "<doc>größe</doc>".encode_utf16() {
        content.extend_from_slice(&unit.to_be_bytes());
    }
    let path = temp_file("utf16.xml", &content);
    let doc = XmlDoc::from_file(&path);
    fs::remove_file(&path).unwrap();
    assert!(doc.is_ok());
    assert_eq!(doc.body(doc.root().unwrap()), "größe");
}

#[test]
fn test_from_missing_file() {
    let doc = XmlDoc::from_file(std::env::temp_dir().join("xmllex-does-not-exist.xml"));
    assert!(!doc.is_ok());
    assert!(matches!(doc.error(), Some(Error::CannotAccessFile(_))));
    assert_eq!(doc.err_desc().as_deref(), Some("cannot access file"));
}

#[test]
fn test_load_from_keeps_going() {
    let good = temp_file("good.xml", b"<good/>");
    let bad = temp_file("bad.xml", b"<bad>");
    let mut doc = XmlDoc::new();
    assert!(doc.load_from(&good));
    assert_eq!(doc.to_xml(), "<good/>\n");
    assert!(!doc.load_from(&bad));
    assert_eq!(doc.err_desc().as_deref(), Some("some element not properly terminated"));
    assert!(doc.load_from_xml(b"<again/>"));
    assert!(doc.is_ok());
    fs::remove_file(&good).unwrap();
    fs::remove_file(&bad).unwrap();
}

#[test]
fn test_from_reader() {
    let path = temp_file("stream.xml", b"<s><t/></s>");
    let doc = XmlDoc::from_reader(fs::File::open(&path).unwrap());
    fs::remove_file(&path).unwrap();
    assert!(doc.is_ok());
    assert_eq!(doc.find("t").map(|t| doc.name(t).to_string()), Some("t".to_string()));
}

#[test]
fn test_stat_counts_unknown() {
    let doc = XmlDoc::parse("<a><!x><?y?><b c='d'>e</b></a>");
    assert_eq!(
        doc.stat(),
        Stat {
            attributes: 1,
            elements: 5,
            unknown: 2
        }
    );
}
