use std::fs;
use std::io::{Cursor, Write};
use std::path::Path;

use zip::{write::SimpleFileOptions, CompressionMethod, ZipWriter};

use crate::common::QRResult;

/// Bundles `(entry name, file)` pairs, in order, into an in-memory zip archive.
///
/// Entries are stored uncompressed since PNG data is already deflated.
pub fn zip_files<'a, I>(entries: I) -> QRResult<Vec<u8>>
where
    I: IntoIterator<Item = (&'a str, &'a Path)>,
{
    let mut zip = ZipWriter::new(Cursor::new(Vec::new()));
    let opts = SimpleFileOptions::default().compression_method(CompressionMethod::Stored);

    for (name, path) in entries {
        zip.start_file(name, opts)?;
        zip.write_all(&fs::read(path)?)?;
    }

    Ok(zip.finish()?.into_inner())
}

#[cfg(test)]
mod archive_tests {
    use std::io::{Cursor, Read};

    use zip::ZipArchive;

    use super::zip_files;

    #[test]
    fn test_zip_files() {
        let dir = tempfile::tempdir().unwrap();
        let a = dir.path().join("a.txt");
        let b = dir.path().join("b.txt");
        std::fs::write(&a, b"first").unwrap();
        std::fs::write(&b, b"second").unwrap();

        let bytes = zip_files([("qr_0.png", a.as_path()), ("qr_1.png", b.as_path())]).unwrap();

        let mut zip = ZipArchive::new(Cursor::new(bytes)).unwrap();
        assert_eq!(zip.len(), 2);

        let mut content = String::new();
        let mut entry = zip.by_index(1).unwrap();
        assert_eq!(entry.name(), "qr_1.png");
        entry.read_to_string(&mut content).unwrap();
        assert_eq!(content, "second");
    }

    #[test]
    fn test_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("missing.png");
        assert!(zip_files([("qr_0.png", missing.as_path())]).is_err());
    }

    #[test]
    fn test_empty_archive() {
        let bytes = zip_files(std::iter::empty()).unwrap();
        let zip = ZipArchive::new(Cursor::new(bytes)).unwrap();
        assert_eq!(zip.len(), 0);
    }
}
