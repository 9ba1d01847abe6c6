//! Snapshot tests for generated Java classes.
//!
//! Run `cargo insta review` to update snapshots when making intentional changes.

use std::str::FromStr;

use foamj_codegen::Generator;
use foamj_model::Manifest;

fn render(manifest_toml: &str, class: &str) -> String {
    let manifest = Manifest::from_str(manifest_toml).expect("Failed to parse manifest");
    Generator::new(&manifest)
        .render_class(class)
        .expect("Failed to render class")
}

#[test]
fn test_person_class() {
    let java = render(
        r#"
        [project]
        name = "demo"
        package = "com.example"
        header = "Generated by foamj. Do not edit."

        [[classes]]
        name = "Person"
        implements = ["java.io.Serializable"]
        constructors = ["default", "all"]

        [[classes.properties]]
        name = "firstName"
        type = "String"

        [[classes.properties]]
        name = "lastName"
        type = "String"

        [[classes.methods]]
        name = "describe"
        type = "String"
        args = [{ name = "prefix", type = "String" }]
        body = "return prefix + getFirstName();"
        "#,
        "Person",
    );

    insta::assert_snapshot!("person_class", java);
}

#[test]
fn test_abstract_class_without_properties() {
    let java = render(
        r#"
        [project]
        name = "demo"
        package = "com.example.shapes"
        indent = 4

        [[classes]]
        name = "Shape"
        abstract = true
        imports = ["java.util.List"]
        "#,
        "Shape",
    );

    insta::assert_snapshot!("abstract_shape", java);
}
