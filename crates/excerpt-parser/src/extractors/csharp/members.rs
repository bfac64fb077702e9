use ast_grep_core::Node;

use crate::types::{DeclId, DeclarationKind, DeclarationNode};

use super::Walker;
use super::helpers;

pub(super) fn process_member<D: ast_grep_core::Doc>(
    walker: &mut Walker<'_>,
    node: &Node<D>,
    parent: Option<DeclId>,
) {
    let span = helpers::declaration_span(node, walker.source);
    match node.kind().as_ref() {
        "method_declaration" => {
            let Some(name) = helpers::declared_name(node) else {
                return;
            };
            let decl = DeclarationNode::new(DeclarationKind::Method, name, span)
                .with_generic_arity(helpers::generic_arity(node))
                .with_parameters(helpers::parameter_types(node));
            walker.push_span(parent, decl);
        }
        "constructor_declaration" => {
            let decl = DeclarationNode::new(DeclarationKind::Constructor, "", span)
                .with_parameters(helpers::parameter_types(node));
            walker.push_span(parent, decl);
        }
        "destructor_declaration" => {
            walker.push_span(
                parent,
                DeclarationNode::new(DeclarationKind::Destructor, "", span),
            );
        }
        "property_declaration" | "event_declaration" => {
            let Some(name) = helpers::declared_name(node) else {
                return;
            };
            let kind = if node.kind().as_ref() == "property_declaration" {
                DeclarationKind::Property
            } else {
                DeclarationKind::Event
            };
            let id = walker.push_span(parent, DeclarationNode::new(kind, name, span));
            process_accessors(walker, node, id);
        }
        "indexer_declaration" => {
            let decl = DeclarationNode::new(DeclarationKind::Indexer, "", span)
                .with_parameters(helpers::parameter_types(node));
            let id = walker.push_span(parent, decl);
            process_accessors(walker, node, id);
        }
        "event_field_declaration" => {
            for name in helpers::variable_names(node) {
                walker.push_span(
                    parent,
                    DeclarationNode::new(DeclarationKind::Event, name, span),
                );
            }
        }
        _ => {}
    }
}

fn process_accessors<D: ast_grep_core::Doc>(walker: &mut Walker<'_>, node: &Node<D>, owner: DeclId) {
    let Some(accessors) = node
        .field("accessors")
        .or_else(|| node.children().find(|child| child.kind().as_ref() == "accessor_list"))
    else {
        return;
    };

    for accessor in accessors
        .children()
        .filter(|child| child.kind().as_ref() == "accessor_declaration")
    {
        let Some(kind) = helpers::accessor_kind(&accessor) else {
            continue;
        };
        walker.push(&accessor, Some(owner), DeclarationKind::Accessor(kind), String::new());
    }
}
