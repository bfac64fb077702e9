use pretty_assertions::assert_eq;

use super::*;
pub(super) use crate::types::AccessorKind;

mod accessors;
mod members;

fn parse(source: &str) -> DeclarationTree {
    CSharpParser.parse(source).expect("source should parse")
}

fn fixture_tree() -> DeclarationTree {
    let source = include_str!("../../../../tests/fixtures/sample.cs");
    parse(source)
}

fn find_qualified(tree: &DeclarationTree, qualified: &str) -> DeclId {
    tree.iter()
        .map(|(id, _)| id)
        .find(|id| tree.qualified_name(*id) == qualified)
        .unwrap_or_else(|| panic!("should find declaration '{qualified}'"))
}

fn qualified_names(tree: &DeclarationTree) -> Vec<String> {
    tree.iter().map(|(id, _)| tree.qualified_name(id)).collect()
}

#[test]
fn fixture_declarations_in_source_order() {
    let tree = fixture_tree();
    assert_eq!(
        qualified_names(&tree),
        vec![
            "Widgets",
            "Widgets.Widget{T1}",
            "Widgets.Widget{T1}.<Constructor>(string)",
            "Widgets.Widget{T1}.<Constructor>()",
            "Widgets.Widget{T1}.<Destructor>",
            "Widgets.Widget{T1}.Title",
            "Widgets.Widget{T1}.Title.get",
            "Widgets.Widget{T1}.Title.init",
            "Widgets.Widget{T1}.Count",
            "Widgets.Widget{T1}.Count.get",
            "Widgets.Widget{T1}.Count.set",
            "Widgets.Widget{T1}.Render(Dictionary<string,int>,object[])",
            "Widgets.Widget{T1}.Convert{T1,T2}(T,U)",
            "Widgets.Widget{T1}.[int,string]",
            "Widgets.Widget{T1}.[int,string].get",
            "Widgets.Widget{T1}.Changed",
            "Widgets.Widget{T1}.Changed.add",
            "Widgets.Widget{T1}.Changed.remove",
            "Widgets.Widget{T1}.Opened",
            "Widgets.Widget{T1}.Closed",
            "Widgets.IRenderer",
            "Widgets.IRenderer.Draw(int,int)",
            "Widgets.Callback{T1}",
            "Widgets.Extras",
            "Widgets.Extras.Point",
            "Widgets.Extras.Point.X",
            "Widgets.Extras.Point.X.get",
            "Widgets.Extras.Point.X.set",
            "Widgets.Extras.Shade",
        ]
    );
}

#[test]
fn parser_reports_language() {
    assert_eq!(CSharpParser.language(), "csharp");
}

#[test]
fn empty_source_has_no_declarations() {
    let tree = parse("");
    assert!(tree.is_empty());
    assert!(tree.roots().is_empty());
}
