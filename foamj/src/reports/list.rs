//! List command report data structures.

use foamj_model::Manifest;

use super::output::{Output, Report};

/// Classes and their properties, in manifest order.
#[derive(Debug)]
pub struct ListReport {
    pub classes: Vec<ClassEntry>,
}

#[derive(Debug)]
pub struct ClassEntry {
    pub qualified_name: String,
    pub extends: String,
    pub is_abstract: bool,
    /// `name: type` pairs
    pub properties: Vec<(String, String)>,
    pub method_count: usize,
}

impl ListReport {
    pub fn new(manifest: &Manifest) -> Self {
        let classes = manifest
            .classes
            .iter()
            .map(|cls| ClassEntry {
                qualified_name: cls.qualified_name(),
                extends: cls.extends.clone(),
                is_abstract: cls.is_abstract,
                properties: cls
                    .properties
                    .iter()
                    .map(|p| (p.name.clone(), p.type_name.clone()))
                    .collect(),
                method_count: cls.methods.len(),
            })
            .collect();
        Self { classes }
    }
}

impl Report for ListReport {
    fn render(&self, out: &mut dyn Output) {
        if self.classes.is_empty() {
            out.preformatted("No classes defined");
            return;
        }

        for (i, cls) in self.classes.iter().enumerate() {
            if i > 0 {
                out.newline();
            }
            let modifier = if cls.is_abstract { "abstract " } else { "" };
            out.section(&format!(
                "{}{} extends {}",
                modifier, cls.qualified_name, cls.extends
            ));
            for (name, ty) in &cls.properties {
                out.list_item(&format!("{}: {}", name, ty));
            }
            if cls.method_count > 0 {
                out.key_value("  methods", &cls.method_count.to_string());
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reports::output::BufferOutput;

    #[test]
    fn test_list_report() {
        let manifest: Manifest = r#"
            [project]
            name = "demo"
            package = "com.example"

            [[classes]]
            name = "Shape"
            abstract = true

            [[classes.methods]]
            name = "area"
            type = "double"
            body = "return 0;"

            [[classes]]
            name = "Circle"
            extends = "Shape"

            [[classes.properties]]
            name = "radius"
            type = "Double"
        "#
        .parse()
        .unwrap();

        let mut out = BufferOutput::default();
        ListReport::new(&manifest).render(&mut out);
        assert_eq!(
            out.lines,
            [
                "abstract com.example.Shape extends FObject:",
                "  methods: 1",
                "",
                "com.example.Circle extends Shape:",
                "  - radius: Double",
            ]
        );
    }
}
