use crate::ast::Node;
use std::fs;
use std::path::Path;

/// Load a pre-parsed stylesheet tree from a JSON file produced by an
/// upstream parser.
pub fn load_tree(path: &Path) -> Result<Vec<Node>, String> {
    let data = fs::read_to_string(path)
        .map_err(|e| format!("Failed to read {}: {}", path.display(), e))?;

    tree_from_json(&data).map_err(|e| format!("Invalid tree in {}: {}", path.display(), e))
}

pub fn tree_from_json(src: &str) -> Result<Vec<Node>, String> {
    serde_json::from_str(src).map_err(|e| e.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::RuleKind;
    use std::path::PathBuf;

    fn fixture_dir() -> PathBuf {
        PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures/trees")
    }

    #[test]
    fn load_basic_tree() {
        let tree = load_tree(&fixture_dir().join("basic.json")).expect("load tree");
        assert_eq!(tree.len(), 3);
        match &tree[0] {
            Node::Rule(rule) => {
                assert_eq!(rule.kind, RuleKind::Style);
                assert_eq!(rule.selectors, vec!["a::selection"]);
                assert_eq!(rule.declarations[0].property, "box-shadow");
            }
            Node::Raw(_) => panic!("expected a rule"),
        }
        match &tree[2] {
            Node::Raw(text) => assert_eq!(text, "/* generated upstream */"),
            Node::Rule(_) => panic!("expected a raw block"),
        }
    }

    #[test]
    fn missing_file_error() {
        let err = load_tree(&fixture_dir().join("missing.json")).unwrap_err();
        assert!(err.contains("Failed to read"));
    }

    #[test]
    fn malformed_json_error() {
        let err = tree_from_json("[{\"rule\":").unwrap_err();
        assert!(!err.is_empty());
    }
}
