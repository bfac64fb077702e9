use ast_grep_core::Node;

use crate::types::{AccessorKind, Span};

const PARAMETER_MODIFIERS: &[&str] = &["this", "ref", "out", "in", "params", "scoped", "readonly"];

/// Remove every whitespace character.
pub(super) fn compact(text: &str) -> String {
    text.chars().filter(|c| !c.is_whitespace()).collect()
}

/// Identifier text without whitespace or verbatim `@` prefixes, so that
/// `@class` and `NS . @event` read as `class` and `NS.event`.
pub(super) fn identifier(text: &str) -> String {
    text.chars()
        .filter(|c| !c.is_whitespace() && *c != '@')
        .collect()
}

/// Declared identifier of a namespace, type or member.
///
/// Falls back to the last identifier before the parameter/body part when the
/// grammar exposes no `name` field.
pub(super) fn declared_name<D: ast_grep_core::Doc>(node: &Node<D>) -> Option<String> {
    if let Some(name) = node.field("name") {
        return Some(identifier(&name.text()));
    }
    node.children()
        .take_while(|child| {
            !matches!(
                child.kind().as_ref(),
                "parameter_list"
                    | "type_parameter_list"
                    | "bracketed_parameter_list"
                    | "accessor_list"
                    | "declaration_list"
                    | "base_list"
            )
        })
        .filter(|child| child.kind().as_ref() == "identifier")
        .last()
        .map(|ident| identifier(&ident.text()))
}

/// Number of type parameters declared on a type, method or delegate.
pub(super) fn generic_arity<D: ast_grep_core::Doc>(node: &Node<D>) -> usize {
    node.field("type_parameters")
        .or_else(|| {
            node.children()
                .find(|child| child.kind().as_ref() == "type_parameter_list")
        })
        .map_or(0, |list| {
            list.children()
                .filter(|child| child.kind().as_ref() == "type_parameter")
                .count()
        })
}

/// Whitespace-free parameter types from a `parameter_list` or
/// `bracketed_parameter_list`.
///
/// A `params` array may surface as a bare `params` token followed by its type
/// and name as siblings; the first named node after the token is the type.
pub(super) fn parameter_types<D: ast_grep_core::Doc>(node: &Node<D>) -> Vec<String> {
    let Some(params) = node.field("parameters").or_else(|| {
        node.children().find(|child| {
            matches!(
                child.kind().as_ref(),
                "parameter_list" | "bracketed_parameter_list"
            )
        })
    }) else {
        return Vec::new();
    };

    let mut types = Vec::new();
    let mut after_params = false;
    for child in params.children() {
        match child.kind().as_ref() {
            "parameter" | "parameter_array" => types.push(parameter_type(&child)),
            "params" => after_params = true,
            "attribute_list" => {}
            _ if after_params && child.is_named() => {
                types.push(compact(&child.text()));
                after_params = false;
            }
            _ => {}
        }
    }
    types
}

fn parameter_type<D: ast_grep_core::Doc>(param: &Node<D>) -> String {
    if let Some(ty) = param.field("type") {
        return compact(&ty.text());
    }

    let text = param.text();
    let declared = text.split('=').next().unwrap_or_default().trim();
    let without_name = declared
        .rsplit_once(char::is_whitespace)
        .map_or(declared, |(ty, _name)| ty);
    without_name
        .split_whitespace()
        .filter(|word| !PARAMETER_MODIFIERS.contains(word))
        .collect()
}

/// Accessor keyword of an `accessor_declaration`.
pub(super) fn accessor_kind<D: ast_grep_core::Doc>(node: &Node<D>) -> Option<AccessorKind> {
    if let Some(kind) = node
        .field("name")
        .and_then(|name| AccessorKind::from_keyword(name.text().trim()))
    {
        return Some(kind);
    }
    node.children()
        .find_map(|child| AccessorKind::from_keyword(child.text().trim()))
}

/// Names declared by an `event_field_declaration` (`event Handler A, B;`).
pub(super) fn variable_names<D: ast_grep_core::Doc>(node: &Node<D>) -> Vec<String> {
    let Some(var_decl) = node
        .children()
        .find(|child| child.kind().as_ref() == "variable_declaration")
    else {
        return Vec::new();
    };

    var_decl
        .children()
        .filter(|child| child.kind().as_ref() == "variable_declarator")
        .filter_map(|declarator| {
            declarator
                .field("name")
                .map(|name| identifier(&name.text()))
                .or_else(|| {
                    declarator
                        .children()
                        .find(|c| c.kind().as_ref() == "identifier")
                        .map(|ident| identifier(&ident.text()))
                })
        })
        .collect()
}

/// First `ERROR` node in the subtree, if any.
///
/// Iterative, so deeply nested expressions cannot exhaust the stack.
pub(super) fn first_syntax_error<'r, D: ast_grep_core::Doc>(
    node: &Node<'r, D>,
) -> Option<Node<'r, D>> {
    node.dfs().find(|n| n.kind().as_ref() == "ERROR")
}

/// Source span of a declaration as a reader would cut it out of the file.
///
/// Comment lines stacked directly above the node are included, and the span is
/// widened to whole lines when only whitespace surrounds the node.
pub(super) fn declaration_span<D: ast_grep_core::Doc>(node: &Node<D>, source: &str) -> Span {
    let range = node.range();
    let start = leading_comment_start(node, source, range.start);
    Span::new(
        line_start_if_blank(source, start),
        line_end_if_blank(source, range.end),
    )
}

fn leading_comment_start<D: ast_grep_core::Doc>(
    node: &Node<D>,
    source: &str,
    node_start: usize,
) -> usize {
    let mut start = node_start;
    let mut current = node.prev();
    while let Some(prev) = current {
        if prev.kind().as_ref() != "comment" {
            break;
        }
        let comment = prev.range();
        let gap = &source[comment.end..start];
        if gap.matches('\n').count() > 1 || !starts_own_line(source, comment.start) {
            break;
        }
        start = comment.start;
        current = prev.prev();
    }
    start
}

fn starts_own_line(source: &str, offset: usize) -> bool {
    let line_start = source[..offset].rfind('\n').map_or(0, |i| i + 1);
    source[line_start..offset].chars().all(char::is_whitespace)
}

pub(super) fn line_start_if_blank(source: &str, offset: usize) -> usize {
    let line_start = source[..offset].rfind('\n').map_or(0, |i| i + 1);
    if source[line_start..offset].chars().all(char::is_whitespace) {
        line_start
    } else {
        offset
    }
}

pub(super) fn line_end_if_blank(source: &str, offset: usize) -> usize {
    let mut line_end = source[offset..].find('\n').map_or(source.len(), |i| offset + i);
    if line_end > offset && source[..line_end].ends_with('\r') {
        line_end -= 1;
    }
    if source[offset..line_end].chars().all(char::is_whitespace) {
        line_end
    } else {
        offset
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn compact_drops_all_whitespace() {
        assert_eq!(compact(" Dictionary<string, int> "), "Dictionary<string,int>");
        assert_eq!(compact("NS2 . NS3"), "NS2.NS3");
    }

    #[test]
    fn identifier_drops_verbatim_prefixes() {
        assert_eq!(identifier("@class"), "class");
        assert_eq!(identifier("NS . @event"), "NS.event");
        assert_eq!(identifier("Plain"), "Plain");
    }

    #[test]
    fn line_start_widens_over_indentation_only() {
        let source = "a\n    b c";
        assert_eq!(line_start_if_blank(source, 6), 2);
        assert_eq!(line_start_if_blank(source, 8), 8);
        assert_eq!(line_start_if_blank("x", 0), 0);
    }

    #[test]
    fn line_end_widens_over_trailing_whitespace() {
        let source = "b   \r\nc";
        assert_eq!(line_end_if_blank(source, 1), 4);
        let source = "b; c";
        assert_eq!(line_end_if_blank(source, 2), 2);
        assert_eq!(line_end_if_blank("end", 3), 3);
    }

    #[test]
    fn own_line_detection() {
        let source = "int x; // trailing\n    // own\n";
        assert!(!starts_own_line(source, 7));
        assert!(starts_own_line(source, 23));
    }
}
