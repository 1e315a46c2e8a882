use crate::ast::{Declaration, Node, Rule};

/// Serialize a node tree back to CSS text, preserving node and declaration
/// order exactly as the tree holds it.
pub fn emit_css(nodes: &[Node]) -> String {
    let mut out = String::new();

    for node in nodes {
        emit_node(node, 0, &mut out);
    }
    out
}

fn emit_node(node: &Node, depth: usize, out: &mut String) {
    match node {
        Node::Raw(text) => {
            indent(depth, out);
            out.push_str(text);
            out.push('\n');
        }
        Node::Rule(rule) => emit_rule(rule, depth, out),
    }
}

fn emit_rule(rule: &Rule, depth: usize, out: &mut String) {
    indent(depth, out);
    out.push_str(&rule.selectors.join(", "));
    out.push_str(" {\n");

    for decl in &rule.declarations {
        emit_declaration(decl, depth + 1, out);
    }
    for child in &rule.children {
        emit_node(child, depth + 1, out);
    }

    indent(depth, out);
    out.push_str("}\n");
}

fn emit_declaration(decl: &Declaration, depth: usize, out: &mut String) {
    indent(depth, out);
    out.push_str(&decl.property);
    out.push_str(": ");
    out.push_str(&decl.values.join(" "));
    out.push_str(";\n");
}

fn indent(depth: usize, out: &mut String) {
    for _ in 0..depth {
        out.push_str("    ");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::RuleKind;

    #[test]
    fn emits_nested_rules_and_raw_blocks() {
        let tree = vec![
            Node::Raw("/* banner */".to_string()),
            Node::Rule(Rule {
                kind: RuleKind::AtRule,
                selectors: vec!["@media screen".to_string()],
                declarations: Vec::new(),
                children: vec![Node::Rule(Rule {
                    kind: RuleKind::Style,
                    selectors: vec!["a".to_string(), "b".to_string()],
                    declarations: vec![Declaration::new("color", &["red"])],
                    children: Vec::new(),
                })],
            }),
        ];

        let css = emit_css(&tree);
        assert_eq!(
            css,
            "/* banner */\n@media screen {\n    a, b {\n        color: red;\n    }\n}\n"
        );
    }
}
