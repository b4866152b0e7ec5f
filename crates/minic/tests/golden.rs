//! Golden-file tests: every `tests/lexer/{valid,invalid}/*.src` is scanned and
//! its rendered token listing compared with the sibling `.expected` file.

use std::fs;
use std::path::{Path, PathBuf};

use minic::driver::LexOutput;
use minic::lexer::tokenize;
use pretty_assertions::assert_eq;

fn fixtures(kind: &str) -> Vec<PathBuf> {
    let dir = Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("lexer")
        .join(kind);
    let mut sources: Vec<PathBuf> = fs::read_dir(&dir)
        .unwrap_or_else(|e| panic!("cannot read {}: {e}", dir.display()))
        .map(|entry| entry.unwrap().path())
        .filter(|path| path.extension().is_some_and(|ext| ext == "src"))
        .collect();
    sources.sort();
    sources
}

fn load_expected(path: &Path) -> String {
    let text = fs::read_to_string(path)
        .unwrap_or_else(|e| panic!("missing expected file {}: {e}", path.display()));
    text.trim_start_matches('\u{feff}').trim().to_string()
}

/// Returns the number of diagnostics produced across all fixtures
fn check_fixtures(kind: &str) -> usize {
    let sources = fixtures(kind);
    assert!(!sources.is_empty(), "no fixtures under {kind}");

    let mut diagnostics = 0;
    for source_path in sources {
        let source = fs::read_to_string(&source_path).unwrap();
        let expected = load_expected(&source_path.with_extension("expected"));

        let lexed = tokenize(&source);
        let output = LexOutput::from_tokens(&lexed.tokens);
        assert_eq!(
            output.render().trim(),
            expected,
            "mismatch for {}",
            source_path.display()
        );
        assert_eq!(output.error_count, lexed.diagnostics.len());
        diagnostics += lexed.diagnostics.len();
    }
    diagnostics
}

#[test]
fn test_valid_fixtures() {
    assert_eq!(check_fixtures("valid"), 0);
}

#[test]
fn test_invalid_fixtures() {
    assert!(check_fixtures("invalid") > 0);
}
