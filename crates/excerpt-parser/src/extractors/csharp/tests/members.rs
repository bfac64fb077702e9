use pretty_assertions::assert_eq;

use super::*;

#[test]
fn methods_record_parameter_types_and_arity() {
    let tree = fixture_tree();
    let convert = tree.get(find_qualified(
        &tree,
        "Widgets.Widget{T1}.Convert{T1,T2}(T,U)",
    ));
    assert_eq!(convert.kind, DeclarationKind::Method);
    assert_eq!(convert.name, "Convert");
    assert_eq!(convert.generic_arity, 2);
    assert_eq!(convert.parameter_types, vec!["T", "U"]);
}

#[test]
fn parameter_types_drop_whitespace_and_modifiers() {
    let tree = fixture_tree();
    let render = tree.get(find_qualified(
        &tree,
        "Widgets.Widget{T1}.Render(Dictionary<string,int>,object[])",
    ));
    assert_eq!(
        render.parameter_types,
        vec!["Dictionary<string,int>".to_string(), "object[]".to_string()]
    );
}

#[test]
fn constructors_and_destructors_are_unnamed() {
    let tree = fixture_tree();
    let ctor = tree.get(find_qualified(&tree, "Widgets.Widget{T1}.<Constructor>(string)"));
    assert_eq!(ctor.kind, DeclarationKind::Constructor);
    assert_eq!(ctor.name, "");
    assert_eq!(ctor.parameter_types, vec!["string"]);

    let dtor = tree.get(find_qualified(&tree, "Widgets.Widget{T1}.<Destructor>"));
    assert_eq!(dtor.kind, DeclarationKind::Destructor);
    assert_eq!(dtor.name, "");
}

#[test]
fn indexers_record_bracketed_parameters() {
    let tree = fixture_tree();
    let indexer = tree.get(find_qualified(&tree, "Widgets.Widget{T1}.[int,string]"));
    assert_eq!(indexer.kind, DeclarationKind::Indexer);
    assert_eq!(indexer.parameter_types, vec!["int", "string"]);
}

#[test]
fn event_fields_declare_one_event_per_name() {
    let tree = fixture_tree();
    let opened = find_qualified(&tree, "Widgets.Widget{T1}.Opened");
    let closed = find_qualified(&tree, "Widgets.Widget{T1}.Closed");
    assert_eq!(tree.get(opened).kind, DeclarationKind::Event);
    assert_eq!(tree.get(closed).kind, DeclarationKind::Event);
    assert_eq!(tree.text(opened), tree.text(closed));
}

#[test]
fn fields_are_not_declarations() {
    let tree = fixture_tree();
    assert!(tree.iter().all(|(_, node)| node.name != "changed"));
}

#[test]
fn method_bodies_are_not_entered() {
    let tree = parse("class A { void M() { int Local() { return 1; } } }");
    assert_eq!(qualified_names(&tree), vec!["A", "A.M()"]);
}

#[test]
fn parameter_modifiers_and_params_arrays() {
    let tree = parse(
        "class F\n{\n    void Q<T>(ref int a, out T b, in long c, params string[] d) { }\n    public void Write(string format, params object[] args) { }\n}\n",
    );
    let q = tree.get(find_qualified(&tree, "F.Q{T1}(int,T,long,string[])"));
    assert_eq!(q.parameter_types, vec!["int", "T", "long", "string[]"]);

    let write = tree.get(find_qualified(&tree, "F.Write(string,object[])"));
    assert_eq!(write.parameter_types, vec!["string", "object[]"]);
}

#[test]
fn params_array_with_attributes() {
    let tree = parse("class F\n{\n    void M([Obsolete] params int[] values) { }\n}\n");
    let m = tree.get(find_qualified(&tree, "F.M(int[])"));
    assert_eq!(m.parameter_types, vec!["int[]"]);
}

#[test]
fn verbatim_names_are_recorded_without_prefix() {
    let tree = parse("class @class\n{\n    void @event(int @int) { }\n    event System.Action @add, Plain;\n}\n");
    assert_eq!(
        qualified_names(&tree),
        vec!["class", "class.event(int)", "class.add", "class.Plain"]
    );
}
