use std::fs;

use proptest::prelude::*;
use review_bundle_engine::filesystem::{CandidateFile, collect_files};
use review_bundle_engine::loader::load_file;
use review_bundle_engine::RuleSet;
use tempfile::TempDir;

fn load(bytes: &[u8], cap: u64) -> review_bundle_engine::FileRecord {
    let dir = TempDir::new().unwrap();
    let source_path = dir.path().join("f.md");
    fs::write(&source_path, bytes).unwrap();
    let candidate = CandidateFile {
        display_path: "f.md".to_string(),
        source_path,
    };
    load_file(&candidate, cap).unwrap()
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn loaded_content_is_a_prefix_of_the_file(
        bytes in proptest::collection::vec(any::<u8>(), 0..4096),
        cap in 0u64..4096,
    ) {
        let record = load(&bytes, cap);
        let expected_len = bytes.len().min(usize::try_from(cap).unwrap());
        prop_assert_eq!(record.truncated, bytes.len() as u64 > cap);
        prop_assert_eq!(record.size, bytes.len() as u64);
        prop_assert_eq!(&record.content[..], &bytes[..expected_len]);
    }

    #[test]
    fn text_matches_source_modulo_crlf(lines in proptest::collection::vec("[a-z ]{0,20}", 0..20)) {
        let crlf = lines.join("\r\n");
        let record = load(crlf.as_bytes(), 1 << 20);
        prop_assert_eq!(record.text(), lines.join("\n"));
    }

    #[test]
    fn walk_is_sorted_and_excludes_pruned_dirs(
        names in proptest::collection::btree_set("[a-c]{1,3}", 1..12),
    ) {
        let project = TempDir::new().unwrap();
        for (i, name) in names.iter().enumerate() {
            let dir = if i % 3 == 0 { "src/node_modules" } else { "src" };
            let path = project.path().join(dir).join(format!("{name}.js"));
            fs::create_dir_all(path.parent().unwrap()).unwrap();
            fs::write(path, name).unwrap();
        }

        let files = collect_files(project.path(), &RuleSet::default()).unwrap();
        let paths: Vec<_> = files.iter().map(|f| f.display_path.clone()).collect();
        let mut sorted = paths.clone();
        sorted.sort();
        sorted.dedup();
        prop_assert_eq!(&paths, &sorted);
        prop_assert!(paths.iter().all(|p| !p.contains("node_modules")));
        prop_assert!(paths.iter().all(|p| p.starts_with("src/")));
    }
}
