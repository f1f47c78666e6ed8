use super::*;
use crate::config::{LexitrieConfig, OutputConfig};
use crate::error::LexitrieError;
use crate::kernels::bloom::BloomFilter;
use crate::test_support::read_code_table;
use crate::types::Entry;
use std::fs;
use std::io::Write;
use std::path::Path;

fn sample_entries() -> Vec<Entry> {
    vec![
        Entry::new("cat", 5, None),
        Entry::new("cats", 2, Some("n")),
        Entry::new("dogmatic", 1, None),
        Entry::new("rare", 0, None),
    ]
}

fn config_with_base(base: &Path) -> LexitrieConfig {
    LexitrieConfig {
        output: OutputConfig {
            base_path: Some(base.to_path_buf()),
        },
        ..LexitrieConfig::default()
    }
}

#[test]
fn test_compile_entries_in_memory() {
    // Arrange
    let config = LexitrieConfig::default();

    // Act
    let compiled = compile_entries(sample_entries(), &config).unwrap();

    // Assert
    assert_eq!(compiled.vocabulary_dump, "cat 5 \ncats 2 n\ndogmatic 1 \n");
    assert_eq!(
        compiled.index_dump,
        "{\n\"cat\": \"/5:s/2\",\n\"dogmat\": \"ic/1\",\n}\n"
    );
    assert_eq!(compiled.bloom.len(), format::BLOOM_FILTER_BYTES);
    assert_eq!(compiled.stats.retained_entries, 3);
    assert_eq!(compiled.stats.dropped_entries, 1);
    assert_eq!(compiled.stats.total_bytes, compiled.blob.len());

    let table = read_code_table(&compiled.blob);
    assert_eq!(table.end, compiled.stats.code_table_bytes);
}

#[test]
fn test_bloom_bytes_match_prefixes() {
    let compiled = compile_entries(sample_entries(), &LexitrieConfig::default()).unwrap();

    let mut expected = BloomFilter::new();
    expected.set("cat");
    expected.set("dogmat");
    assert_eq!(compiled.bloom.as_slice(), expected.as_bytes());
}

#[test]
fn test_compile_to_disk_writes_all_artifacts() {
    // Arrange
    let dir = tempfile::tempdir().unwrap();
    let base = dir.path().join("en_us");
    let config = config_with_base(&base);

    // Act
    let stats = compile_to_disk(sample_entries(), &config).unwrap();

    // Assert
    let writer = ArtifactWriter::new(&base);
    let blob = fs::read(writer.path_for("dict")).unwrap();
    assert_eq!(blob.len(), stats.total_bytes);
    assert_eq!(
        fs::read_to_string(writer.path_for("vocab")).unwrap(),
        "cat 5 \ncats 2 n\ndogmatic 1 \n"
    );
    assert!(fs::read_to_string(writer.path_for("i"))
        .unwrap()
        .contains("\"cat\": \"/5:s/2\","));
    assert_eq!(
        fs::read(writer.path_for("bf")).unwrap().len(),
        format::BLOOM_FILTER_BYTES
    );

    let leftovers: Vec<_> = fs::read_dir(dir.path())
        .unwrap()
        .filter_map(|e| e.ok())
        .filter(|e| e.file_name().to_string_lossy().ends_with(".tmp"))
        .collect();
    assert!(leftovers.is_empty(), "temporary files left behind");
}

#[test]
fn test_compile_to_disk_requires_output_base() {
    let result = compile_to_disk(sample_entries(), &LexitrieConfig::default());
    assert!(matches!(result, Err(LexitrieError::InputError(_))));
}

#[test]
fn test_failed_run_leaves_no_artifacts() {
    let dir = tempfile::tempdir().unwrap();
    let base = dir.path().join("broken");
    let config = config_with_base(&base);

    // A word containing the end-of-word sentinel aborts the run.
    let result = compile_to_disk(vec![Entry::new("a*b", 3, None)], &config);

    assert!(matches!(result, Err(LexitrieError::InputError(_))));
    assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 0);
}

#[test]
fn test_path_for_appends_extension() {
    let writer = ArtifactWriter::new("/data/en_us.v2");
    assert_eq!(writer.path_for("dict"), Path::new("/data/en_us.v2.dict"));
    assert_eq!(writer.path_for("i"), Path::new("/data/en_us.v2.i"));
}

#[test]
fn test_compile_file_from_word_list() {
    let dir = tempfile::tempdir().unwrap();
    let list = dir.path().join("words.txt");
    {
        let mut file = fs::File::create(&list).unwrap();
        writeln!(file, "cat 5").unwrap();
        writeln!(file).unwrap();
        writeln!(file, "cats 2 n").unwrap();
    }
    let base = dir.path().join("out");

    let stats = compile_file(&list, &config_with_base(&base)).unwrap();

    assert_eq!(stats.retained_entries, 2);
    assert_eq!(stats.prefixes, 1);
    assert!(ArtifactWriter::new(&base).path_for("dict").exists());
}

#[test]
fn test_compile_file_reports_bad_line() {
    let dir = tempfile::tempdir().unwrap();
    let list = dir.path().join("words.txt");
    fs::write(&list, "cat 5\ncats many\n").unwrap();

    match compile_file(&list, &config_with_base(&dir.path().join("out"))) {
        Err(LexitrieError::InputError(msg)) => assert!(msg.contains("line 2")),
        other => panic!("Expected InputError, got {:?}", other.map(|_| ())),
    }
}
