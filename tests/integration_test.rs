//! Integration tests for the NRRD module

use std::fs;
use std::path::{Path, PathBuf};

use nrrdkit::nrrd::{DataType, Encoding, NamedSpace};
use nrrdkit::{parse_header, NrrdError, RawHeader};

/// Writes a header description into `dir` and returns its path
fn write_description(dir: &Path, name: &str, content: &str) -> String {
    let path = dir.join(name);
    fs::write(&path, content).unwrap();
    path.to_string_lossy().into_owned()
}

fn touch(dir: &Path, name: &str, len: usize) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, vec![0u8; len]).unwrap();
    path
}

#[test]
fn test_pattern_data_files_on_disk() {
    let dir = tempfile::tempdir().unwrap();
    let expected: Vec<PathBuf> = (0..3)
        .map(|i| touch(dir.path(), &format!("slice{:03}.raw", i), 16))
        .collect();

    let description = write_description(
        dir.path(),
        "volume.toml",
        r#"
filename = "volume.nhdr"
detached = true

[fields]
type = "uchar"
encoding = "raw"
dimension = 3
sizes = [4, 4, 3]
"data file" = ["slice%03d.raw", 0, 2, 1]
space = "lps"
"space directions" = ["(1,0,0)", "(0,1,0)", "(0,0,2.5)"]
"#,
    );

    let header = RawHeader::load(&description).unwrap();
    let parsed = parse_header(&header).unwrap();

    std::assert_eq!(parsed.data_type, DataType::UInt8);
    std::assert_eq!(parsed.directory, dir.path());
    std::assert_eq!(parsed.data_files, expected);
    std::assert_eq!(parsed.data_file_subdim, Some(2));
    std::assert_eq!(parsed.slab_byte_count, Some(16));
    std::assert_eq!(parsed.space.unwrap().name, Some(NamedSpace::LeftPosteriorSuperior));
}

#[test]
fn test_missing_data_file_on_disk() {
    let dir = tempfile::tempdir().unwrap();
    touch(dir.path(), "part0.raw", 32);

    let description = write_description(
        dir.path(),
        "volume.toml",
        r#"
filename = "volume.nhdr"
detached = true
data_files = ["part0.raw", "part1.raw"]

[fields]
type = "short"
encoding = "gzip"
dimension = 3
sizes = [4, 4, 2]
endian = "little"
"data file" = "LIST"
"#,
    );

    let header = RawHeader::load(&description).unwrap();
    match parse_header(&header) {
        Err(NrrdError::DataFileNotFound(path)) => std::assert_eq!(path, dir.path().join("part1.raw")),
        other => panic!("expected DataFileNotFound, got {:?}", other),
    }
}

#[test]
fn test_list_data_files_on_disk() {
    let dir = tempfile::tempdir().unwrap();
    touch(dir.path(), "part0.raw", 32);
    touch(dir.path(), "part1.raw", 32);

    let description = write_description(
        dir.path(),
        "volume.toml",
        r#"
filename = "volume.nhdr"
detached = true
data_files = ["part0.raw", "part1.raw"]

[fields]
type = "short"
encoding = "gzip"
dimension = 3
sizes = [4, 4, 2]
endian = "little"
"data file" = "LIST"
"#,
    );

    let parsed = parse_header(&RawHeader::load(&description).unwrap()).unwrap();

    std::assert_eq!(parsed.encoding, Encoding::Gzip);
    std::assert_eq!(parsed.data_files.len(), 2);
    std::assert_eq!(parsed.data_file_subdim, Some(2));
    std::assert_eq!(parsed.slab_byte_count, Some(32));
}

#[test]
fn test_attached_header_is_its_own_data_file() {
    let dir = tempfile::tempdir().unwrap();
    let description = write_description(
        dir.path(),
        "scan.toml",
        r#"
filename = "scan.nrrd"

[fields]
type = "float"
encoding = "raw"
dimension = 2
sizes = [8, 8]
endian = "big"
spacings = [0.5, nan]
"#,
    );

    let parsed = parse_header(&RawHeader::load(&description).unwrap()).unwrap();

    std::assert!(!parsed.is_detached());
    std::assert_eq!(parsed.data_files, vec![dir.path().join("scan.nrrd")]);
    std::assert_eq!(parsed.byte_count, 256);
    std::assert_eq!(parsed.axis(0).unwrap().spacing(), Some(0.5));
    std::assert_eq!(parsed.axis(1).unwrap().spacing(), None);
}

#[test]
fn test_unreadable_description() {
    let dir = tempfile::tempdir().unwrap();

    let missing = dir.path().join("absent.toml");
    std::assert!(matches!(
        RawHeader::load(&missing.to_string_lossy()),
        Err(NrrdError::IoError(_))
    ));

    let broken = write_description(dir.path(), "broken.toml", "[fields\ntype = ");
    std::assert!(matches!(RawHeader::load(&broken), Err(NrrdError::InvalidConfig(_))));
}
