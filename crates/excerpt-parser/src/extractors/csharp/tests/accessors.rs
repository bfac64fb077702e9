use pretty_assertions::assert_eq;

use super::*;

#[test]
fn property_accessors_are_children() {
    let tree = fixture_tree();
    let title = find_qualified(&tree, "Widgets.Widget{T1}.Title");
    let kinds: Vec<_> = tree
        .get(title)
        .children
        .iter()
        .map(|id| tree.get(*id).kind)
        .collect();
    assert_eq!(
        kinds,
        vec![
            DeclarationKind::Accessor(AccessorKind::Get),
            DeclarationKind::Accessor(AccessorKind::Init),
        ]
    );
}

#[test]
fn event_accessors_are_children() {
    let tree = fixture_tree();
    let add = find_qualified(&tree, "Widgets.Widget{T1}.Changed.add");
    assert_eq!(tree.get(add).accessor(), Some(AccessorKind::Add));
    assert_eq!(tree.text(add), "            add { changed += value; }");
}

#[test]
fn expression_bodied_property_has_no_accessors() {
    let tree = parse("class A { int P => 1; }");
    let property = find_qualified(&tree, "A.P");
    assert!(tree.get(property).children.is_empty());
}

#[test]
fn accessor_span_covers_only_the_accessor() {
    let tree = fixture_tree();
    let get = find_qualified(&tree, "Widgets.Widget{T1}.Title.get");
    assert_eq!(tree.text(get), "get;");
}
