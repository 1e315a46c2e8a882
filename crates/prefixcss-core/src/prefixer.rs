use crate::ast::{Declaration, Node, Rule, RuleKind};
use crate::generators;
use crate::tables::PrefixTables;

/// Expand vendor prefixes across a parsed stylesheet tree.
///
/// Pure tree-to-tree rewrite: the input is never mutated, declaration and
/// sibling order encodes cascade precedence and is preserved exactly. Run
/// once per tree — a second run re-expands the unprefixed originals that are
/// still present.
pub fn expand(nodes: &[Node], tables: &PrefixTables) -> Vec<Node> {
    let mut out = Vec::new();

    for node in nodes {
        let rule = match node {
            Node::Raw(_) => {
                out.push(node.clone());
                continue;
            }
            Node::Rule(rule) => rule,
        };

        let expanded = expand_rule(rule, tables);
        let siblings = selector_siblings(&expanded, tables);
        out.push(Node::Rule(expanded));
        out.extend(siblings);
    }

    out
}

fn expand_rule(rule: &Rule, tables: &PrefixTables) -> Rule {
    let mut declarations = Vec::new();

    for decl in &rule.declarations {
        // The original always survives; prefixed copies follow it directly.
        declarations.push(decl.clone());

        if let Some(generator) = tables.property_generators.get(&decl.property) {
            declarations.extend(generators::run(*generator, &decl.property, &decl.values));
        }

        if let Some(vendors) = tables.property_prefixes.get(&decl.property) {
            for vendor in vendors {
                declarations.push(Declaration {
                    property: format!("-{}-{}", vendor.as_str(), decl.property),
                    values: decl.values.clone(),
                });
            }
        }

        let joined = decl.joined_values();

        if let Some(entries) = tables.value_generators.get(&decl.property) {
            for entry in entries {
                if contains_token(&joined, &entry.pattern) {
                    declarations.extend(generators::run(
                        entry.generator,
                        &decl.property,
                        &decl.values,
                    ));
                }
            }
        }

        if let Some(entries) = tables.value_prefixes.get(&decl.property) {
            for entry in entries {
                if !contains_token(&joined, &entry.pattern) {
                    continue;
                }
                for vendor in &entry.vendors {
                    let prefixed = format!("-{}-{}", vendor.as_str(), entry.pattern);
                    let values = decl
                        .values
                        .iter()
                        .map(|value| value.replace(&entry.pattern, &prefixed))
                        .collect();
                    declarations.push(Declaration {
                        property: decl.property.clone(),
                        values,
                    });
                }
            }
        }
    }

    Rule {
        kind: rule.kind,
        selectors: rule.selectors.clone(),
        declarations,
        children: expand(&rule.children, tables),
    }
}

/// Sibling rules for legacy selector spellings. The duplicate carries the
/// already-expanded declarations and children of `rule`, so the prefixed
/// copies appear in both. At-rules are exempt; their preludes are not
/// selectors.
fn selector_siblings(rule: &Rule, tables: &PrefixTables) -> Vec<Node> {
    if rule.kind != RuleKind::Style {
        return Vec::new();
    }

    let mut siblings = Vec::new();
    for selector in &rule.selectors {
        for entry in &tables.selector_prefixes {
            if !selector.contains(&entry.pattern) {
                continue;
            }
            for replacement in &entry.replacements {
                siblings.push(Node::Rule(Rule {
                    kind: rule.kind,
                    selectors: vec![selector.replace(&entry.pattern, replacement)],
                    declarations: rule.declarations.clone(),
                    children: rule.children.clone(),
                }));
            }
        }
    }
    siblings
}

/// Whole-token occurrence test: the character before a match must not be a
/// word character or `-`, the character after must not be a word character.
/// The `-` guard keeps already-prefixed spellings (`-moz-linear-gradient`)
/// and longhand names (`repeating-linear-gradient`) from re-matching.
fn contains_token(haystack: &str, pattern: &str) -> bool {
    if pattern.is_empty() {
        return false;
    }

    let mut from = 0;
    while let Some(offset) = haystack[from..].find(pattern) {
        let at = from + offset;
        let before_ok = haystack[..at]
            .chars()
            .next_back()
            .map_or(true, |c| !is_word_char(c) && c != '-');
        let after_ok = haystack[at + pattern.len()..]
            .chars()
            .next()
            .map_or(true, |c| !is_word_char(c));
        if before_ok && after_ok {
            return true;
        }
        from = at + pattern.len();
    }
    false
}

fn is_word_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}
