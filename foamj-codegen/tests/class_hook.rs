//! Behavioural tests for model-to-Java translation.

use foamj_codegen::{
    ast::{Class, Code, Field, Method, Node},
    builder::{OutputJava, Outputter},
    hooks::{ClassHook, build_property},
};
use foamj_model::{ClassModel, PropertyModel};

fn model(src: &str) -> ClassModel {
    toml::from_str(src).expect("Failed to parse class model")
}

#[test]
fn test_fields_render_before_methods() {
    let mut class = Class::try_new("Counter").unwrap();
    class
        .method(Method::try_new("reset", "void").unwrap())
        .field(Field::try_new("count_", "int").unwrap())
        .method(Method::try_new("increment", "void").unwrap())
        .field(Field::try_new("step_", "int").unwrap());

    let mut out = Outputter::java();
    out.increase_indent();
    class.output_java(&mut out);
    assert_eq!(out.level(), 1);

    let text = out.build();
    let last_field = text.rfind("step_;").unwrap();
    let first_method = text.find("reset()").unwrap();
    assert!(last_field < first_method);
    assert_eq!(text.matches(';').count(), 2);
}

#[test]
fn test_code_lines_survive_indentation() {
    let body = "int total = 0;\nfor (int i = 0; i < n; i++) {\n  total += i;\n}\nreturn total;";

    let mut out = Outputter::java();
    out.increase_indent().increase_indent();
    out.out(&Code::from(body));
    assert_eq!(out.level(), 2);

    let restored: Vec<_> = out
        .as_str()
        .lines()
        .map(|line| line.strip_prefix("    ").unwrap())
        .collect();
    assert_eq!(restored.join("\n"), body);
}

#[test]
fn test_anonymous_class_without_members() {
    let node = Node::from(Class::anonymous("Base").unwrap());
    assert_eq!(node.to_java(), "new Base()");
}

#[test]
fn test_age_property() {
    let mut class = Class::try_new("Person").unwrap();
    let mut registry = Default::default();
    build_property(&PropertyModel::new("age", "int"), &mut class, &mut registry).unwrap();

    assert_eq!(class.get_field("age_").unwrap().ty(), "int");
    assert_eq!(class.get_method("getAge").unwrap().return_type(), Some("int"));

    let setter = class.get_method("setAge").unwrap();
    assert_eq!(setter.return_type(), Some("Person"));
    assert_eq!(setter.arguments()[0].to_java(), "int val");

    let constant = class.get_field("AGE").unwrap();
    assert_eq!(constant.ty(), "foam.core.PropertyInfo");
    assert!(constant.is_static() && constant.is_final());
}

#[test]
fn test_properties_register_in_order() {
    let class = ClassHook::new()
        .build_java_class(&model(
            r#"
            name = "Person"

            [[properties]]
            name = "firstName"
            type = "String"

            [[properties]]
            name = "lastName"
            type = "String"
            "#,
        ))
        .unwrap();

    let info = class.get_field("classInfo_").unwrap().to_java();
    let first = info.find("Person.FIRST_NAME").unwrap();
    let last = info.find("Person.LAST_NAME").unwrap();
    assert!(first < last);
}

#[test]
fn test_build_is_idempotent() {
    let model = model(
        r#"
        name = "Person"
        package = "com.example"
        constructors = ["all"]

        [[properties]]
        name = "age"
        type = "Int"
        "#,
    );
    let hook = ClassHook::new();

    let first = hook.build_java_class(&model).unwrap();
    let second = hook.build_java_class(&model).unwrap();
    assert_eq!(first, second);
    assert_eq!(first.to_java(), second.to_java());
}

#[test]
fn test_missing_type_is_rejected() {
    let mut class = Class::try_new("Person").unwrap();
    let mut registry = Default::default();
    let err = build_property(&PropertyModel::new("age", ""), &mut class, &mut registry);
    assert!(err.is_err());
    assert!(class.fields().is_empty());
}
