use std::collections::HashMap;
use std::path::{Path, PathBuf};

use pede_core::lang::keywords;
use pede_core::lang::operators;
use pede_core::lang::punctuation;

#[test]
fn keywords_spellings_unique_and_resolvable() {
    let mut seen: HashMap<&'static str, keywords::KeywordId> = HashMap::new();

    for info in keywords::KEYWORDS {
        assert_eq!(
            keywords::from_str(info.canonical),
            Some(info.id),
            "keyword canonical spelling not resolvable: {}",
            info.canonical
        );
        assert_eq!(
            keywords::as_str(info.id),
            info.canonical,
            "keyword as_str mismatch for {:?}",
            info.id
        );

        if let Some(prev) = seen.insert(info.canonical, info.id) {
            panic!(
                "duplicate keyword spelling {:?}: {:?} and {:?}",
                info.canonical, prev, info.id
            );
        }
    }
}

#[test]
fn operators_spellings_unique_and_resolvable() {
    let mut seen: HashMap<&'static str, operators::OperatorId> = HashMap::new();

    for info in operators::OPERATORS {
        for &sp in info.spellings {
            assert_eq!(
                operators::from_str(sp),
                Some(info.id),
                "operator spelling not resolvable: {}",
                sp
            );
            if let Some(prev) = seen.insert(sp, info.id) {
                panic!("duplicate operator spelling {:?}: {:?} and {:?}", sp, prev, info.id);
            }
        }
    }
}

#[test]
fn punctuation_spellings_unique_and_resolvable() {
    let mut seen: HashMap<&'static str, punctuation::PunctuationId> = HashMap::new();

    for info in punctuation::PUNCTUATION {
        assert_eq!(
            punctuation::from_str(info.canonical),
            Some(info.id),
            "punctuation canonical spelling not resolvable: {}",
            info.canonical
        );
        assert_eq!(
            punctuation::as_str(info.id),
            info.canonical,
            "punctuation as_str mismatch for {:?}",
            info.id
        );

        if let Some(prev) = seen.insert(info.canonical, info.id) {
            panic!(
                "duplicate punctuation spelling {:?}: {:?} and {:?}",
                info.canonical, prev, info.id
            );
        }
    }
}

#[test]
fn single_character_spellings_do_not_overlap_across_registries() {
    for op in operators::OPERATORS {
        for &sp in op.spellings {
            assert_eq!(
                punctuation::from_str(sp),
                None,
                "{sp:?} is both an operator and punctuation"
            );
            assert_eq!(keywords::from_str(sp), None, "{sp:?} is both an operator and a keyword");
        }
    }
}

// -------------------------------------------------------------------------------------------------
// Drift guardrails for closed-set vocabulary (string literals).
// -------------------------------------------------------------------------------------------------

fn repo_root() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .parent()
        .and_then(|p| p.parent())
        .expect("repo root missing")
        .to_path_buf()
}

fn collect_rs_files(root: &Path) -> Vec<PathBuf> {
    let mut files = Vec::new();
    let mut stack = vec![root.to_path_buf()];
    while let Some(dir) = stack.pop() {
        let Ok(entries) = std::fs::read_dir(&dir) else {
            continue;
        };
        for entry in entries.flatten() {
            let path = entry.path();
            if path.is_dir() {
                stack.push(path);
            } else if path.extension().and_then(|e| e.to_str()) == Some("rs") {
                files.push(path);
            }
        }
    }
    files
}

fn find_string_literals(paths: &[PathBuf], literals: &[&str]) -> Vec<String> {
    fn is_comment_line(line: &str) -> bool {
        line.trim_start().starts_with("//")
    }

    let mut hits: Vec<String> = Vec::new();
    for path in paths {
        // Test modules spell source snippets freely.
        if path.components().any(|c| c.as_os_str() == "tests")
            || path.file_name().and_then(|n| n.to_str()) == Some("tests.rs")
        {
            continue;
        }
        let Ok(content) = std::fs::read_to_string(path) else {
            continue;
        };
        for (idx, line) in content.lines().enumerate() {
            if is_comment_line(line) {
                continue;
            }
            for &literal in literals {
                let needle = format!("\"{literal}\"");
                if line.contains(&needle) {
                    hits.push(format!("{}:{}: {}", path.display(), idx + 1, line.trim()));
                }
            }
        }
    }
    hits
}

#[test]
fn no_keyword_string_literals_in_lexer_or_parser() {
    let root = repo_root();
    let files = [
        root.join("crates/pede_syntax/src/lexer"),
        root.join("crates/pede_syntax/src/parser"),
    ]
    .iter()
    .flat_map(|dir| collect_rs_files(dir))
    .collect::<Vec<_>>();

    let spellings: Vec<&str> = keywords::KEYWORDS.iter().map(|k| k.canonical).collect();
    let hits = find_string_literals(&files, &spellings);
    assert!(
        hits.is_empty(),
        "keyword spellings must come from pede_core::lang::keywords; found:\n{}",
        hits.join("\n")
    );
}
