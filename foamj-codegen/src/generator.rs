//! Java source generation for a whole manifest.

use std::path::{Path, PathBuf};

use eyre::{Result, eyre};
use foamj_core::{File, Overwrite, WriteResult, package_path};
use foamj_model::{ClassModel, Manifest};
use tracing::{debug, info};

use crate::{
    builder::{Indent, OutputJava, Outputter},
    hooks::ClassHook,
};

/// A generated source file, relative to the output directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedFile {
    /// Qualified name of the generated class
    pub class: String,
    /// e.g. "com/example/Person.java"
    pub path: PathBuf,
    pub content: String,
}

/// Files touched by [`Generator::generate`].
#[derive(Debug, Default)]
pub struct GenerationResult {
    pub written: Vec<PathBuf>,
    /// Existing files left alone under [`Overwrite::IfMissing`]
    pub skipped: Vec<PathBuf>,
}

/// Generates one `.java` file per manifest class.
///
/// # Example
///
/// ```ignore
/// let generator = Generator::new(&manifest);
/// let java = generator.render_class("Person")?;
/// generator.generate(Path::new("src/main/java"))?;
/// ```
pub struct Generator<'a> {
    manifest: &'a Manifest,
    hook: ClassHook,
    indent: Indent,
    overwrite: Overwrite,
}

impl<'a> Generator<'a> {
    /// Create a generator with the built-in extensions and the project's indent.
    pub fn new(manifest: &'a Manifest) -> Self {
        Self {
            manifest,
            hook: ClassHook::new().with_known_classes(&manifest.classes),
            indent: manifest.project.indent.into(),
            overwrite: Overwrite::Always,
        }
    }

    /// Replace the class hook, e.g. to add extensions.
    pub fn with_hook(mut self, hook: ClassHook) -> Self {
        self.hook = hook.with_known_classes(&self.manifest.classes);
        self
    }

    pub fn with_indent(mut self, indent: Indent) -> Self {
        self.indent = indent;
        self
    }

    /// Set how existing files are handled by [`generate`](Self::generate).
    pub fn with_overwrite(mut self, overwrite: Overwrite) -> Self {
        self.overwrite = overwrite;
        self
    }

    /// Render the full file content for one class model.
    pub fn render(&self, model: &ClassModel) -> crate::Result<String> {
        let class = self.hook.build_java_class(model)?;

        let mut out = Outputter::new(self.indent);
        if let Some(header) = &self.manifest.project.header {
            for line in header.lines() {
                out.raw("// ").raw(line).raw("\n");
            }
        }
        class.output_java(&mut out);
        out.raw("\n");
        Ok(out.build())
    }

    /// Render a single class by simple or qualified name.
    pub fn render_class(&self, name: &str) -> Result<String> {
        let model = self
            .manifest
            .class(name)
            .ok_or_else(|| eyre!("class '{}' not found in manifest", name))?;
        Ok(self.render(model)?)
    }

    /// Render every class without writing to disk.
    #[tracing::instrument(skip_all, fields(project = %self.manifest.project.name))]
    pub fn preview(&self) -> Result<Vec<GeneratedFile>> {
        self.manifest
            .classes
            .iter()
            .map(|model| -> Result<GeneratedFile> {
                debug!(class = %model.name, "rendering class");
                Ok(GeneratedFile {
                    class: model.qualified_name(),
                    path: relative_path(model),
                    content: self.render(model)?,
                })
            })
            .collect()
    }

    /// Write every class below `output_dir`.
    pub fn generate(&self, output_dir: &Path) -> Result<GenerationResult> {
        self.write(self.preview()?, output_dir)
    }

    /// Write previously rendered files below `output_dir`.
    #[tracing::instrument(skip_all, fields(output = %output_dir.display()))]
    pub fn write(
        &self,
        files: impl IntoIterator<Item = GeneratedFile>,
        output_dir: &Path,
    ) -> Result<GenerationResult> {
        let mut result = GenerationResult::default();

        for generated in files {
            let path = output_dir.join(&generated.path);
            let file = File::new(&path, generated.content).with_overwrite(self.overwrite);
            match file.write()? {
                WriteResult::Written => {
                    info!(path = %path.display(), "wrote class");
                    result.written.push(path);
                }
                WriteResult::Skipped => {
                    debug!(path = %path.display(), "kept existing file");
                    result.skipped.push(path);
                }
            }
        }

        Ok(result)
    }
}

/// `<package path>/<Name>.java`
fn relative_path(model: &ClassModel) -> PathBuf {
    let mut path = model
        .package
        .as_deref()
        .map(package_path)
        .unwrap_or_default();
    path.push(format!("{}.java", model.name));
    path
}
