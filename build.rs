use std::path::{Path, PathBuf};
use anyhow::{bail, Context, Result};
use regex::Regex;
use std::collections::BTreeMap;

const RESOURCES_FILE_NAME: &str = "compiled.gresources";
const UI_XML: &str = include_str!("resources/ui.xml");
const MANIFEST_TOML: &str = include_str!("Cargo.toml");
const RESOURCES_XML: &str = include_str!("resources/resources.gresource.xml.in");

// ===== TRAITS =====

trait StringExtensions {
    fn replace_exactly(&self, from: &str, to: &str, count: usize) -> Result<String>;
}

impl<T> StringExtensions for T
where
    T: AsRef<str>,
{
    fn replace_exactly(&self, from: &str, to: &str, count: usize) -> Result<String> {
        let text = self.as_ref();
        let parts: Vec<&str> = text.split(from).collect();
        let actual_count = parts.len() - 1;

        if actual_count != count {
            bail!(
                "Expected to replace exactly {count} occurrence(s) of '{from}', but found {actual_count}."
            );
        }

        Ok(parts.join(to))
    }
}

// ===== BUILD CONFIGURATION =====

struct BuildConfiguration {
    output_dir: PathBuf,
    resources_dir: PathBuf,
    icons_dir: PathBuf,
    resources_ui_file: PathBuf,
    templates_xml_file: PathBuf,
    resources_xml_file: PathBuf,
    compiled_resources_file: PathBuf,
}

impl BuildConfiguration {
    fn new() -> Result<Self> {
        let root = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
        let resources_dir = root.join("resources");
        let icons_dir = resources_dir.join("icons");
        let resources_ui_file = resources_dir.join("ui.xml");
        let output_dir = PathBuf::from(
            std::env::var("OUT_DIR").context("OUT_DIR is not set")?
        );
        let templates_xml_file = output_dir.join("templates.xml");
        let resources_xml_file = output_dir.join("resources.xml");
        let compiled_resources_file = output_dir.join(RESOURCES_FILE_NAME);

        Ok(Self {
            output_dir,
            resources_dir,
            icons_dir,
            resources_ui_file,
            templates_xml_file,
            resources_xml_file,
            compiled_resources_file,
        })
    }
}

// ===== APPLICATION METADATA =====

struct ApplicationMetadata {
    name: &'static str,
    description: &'static str,
    version: &'static str,
    id: String,
    prefix: String,
    title: String,
    author: String,
}

impl ApplicationMetadata {
    fn extract_from_cargo() -> Result<Self> {
        let manifest: toml::Value = toml::from_str(MANIFEST_TOML)
            .context("Failed to parse Cargo.toml")?;

        let metadata = manifest.get("package")
            .context("Missing [package] section in Cargo.toml")?
            .get("metadata")
            .context("Missing [package.metadata] section in Cargo.toml")?;

        Ok(Self {
            name: env!("CARGO_PKG_NAME"),
            description: env!("CARGO_PKG_DESCRIPTION"),
            version: env!("CARGO_PKG_VERSION"),
            id: Self::extract_string(metadata, "id")?,
            prefix: Self::extract_string(metadata, "prefix")?,
            title: Self::extract_string(metadata, "title")?,
            author: Self::extract_string(metadata, "author")?,
        })
    }

    fn extract_string(value: &toml::Value, key: &str) -> Result<String> {
        value.get(key)
            .and_then(|v| v.as_str())
            .map(ToString::to_string)
            .context(format!("Key '{key}' is missing or not a string"))
    }
}

// ===== FILE SYSTEM HELPERS =====

struct FileSystemHelper;

impl FileSystemHelper {
    fn target_is_up_to_date(source: &Path, target: &Path) -> Result<bool> {
        if !target.exists() {
            return Ok(false);
        }

        let source_time = source.metadata()?.modified()?;
        let target_time = target.metadata()?.modified()?;

        Ok(source_time < target_time)
    }
}

// ===== ICON COLLECTOR =====

struct IconCollector<'a> {
    config: &'a BuildConfiguration,
}

impl<'a> IconCollector<'a> {
    fn new(config: &'a BuildConfiguration) -> Self {
        Self { config }
    }

    fn collect_icon_filenames(&self) -> Result<Vec<String>> {
        let entries = std::fs::read_dir(&self.config.icons_dir)
            .context("Failed to read icons directory")?;

        let mut filenames = Vec::new();
        for entry in entries {
            let path = entry?.path();
            if path.extension().is_some_and(|extension| extension == "svg")
                && let Some(filename) = path.file_name().and_then(|name| name.to_str())
            {
                filenames.push(filename.to_string());
            }
        }

        filenames.sort();
        Ok(filenames)
    }

    fn build_icons_resources_xml(&self) -> Result<String> {
        let xml = self.collect_icon_filenames()?
            .iter()
            .map(|filename| {
                format!(
                    "<file compressed=\"true\" alias=\"{filename}\">{filename}</file>"
                )
            })
            .collect::<Vec<_>>()
            .join("\n");

        Ok(xml)
    }
}

// ===== TEMPLATE EXTRACTOR =====

struct TemplateExtractor {
    template_regex: Regex,
    extracted_templates: BTreeMap<String, String>,
}

impl TemplateExtractor {
    fn new() -> Result<Self> {
        let template_regex = Regex::new(r#"(?s)<template\s+class="([^"]+)"[^>]*>.*?</template>"#)?;
        let extracted_templates = BTreeMap::new();
        Ok(Self { template_regex, extracted_templates })
    }

    fn extract_all_templates(&mut self) -> &mut Self {
        for capture in self.template_regex.captures_iter(UI_XML) {
            if let Some(class_match) = capture.get(1) {
                let class_name = heck::AsSnakeCase(class_match.as_str()).to_string();
                let full_template = capture.get(0).map(|m| m.as_str().to_string()).unwrap_or_default();
                self.extracted_templates.insert(class_name, full_template);
            }
        }
        self
    }

    fn save_template_files_to_directory(&self, output_path: &Path) -> Result<&Self> {
        for (class_name, template_content) in &self.extracted_templates {
            let file_path = output_path.join(format!("{class_name}.ui"));
            let formatted_template = format!(
                "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n<interface>\n<requires lib=\"gtk\" version=\"4.10\"/>\n{template_content}\n</interface>"
            );
            std::fs::write(file_path, formatted_template)?;
        }
        Ok(self)
    }

    fn build_templates_resources_xml(&self) -> String {
        self.extracted_templates
            .keys()
            .map(|class_name| format!("<file compressed=\"true\" alias=\"{class_name}.ui\">{class_name}.ui</file>"))
            .collect::<Vec<_>>()
            .join("\n")
    }

    fn save_templates_resources_xml_to_file(&self, path: &Path) -> Result<String> {
        let xml_content = self.build_templates_resources_xml();
        std::fs::write(path, &xml_content)?;
        Ok(xml_content)
    }
}

// ===== TEMPLATE PROCESSOR =====

struct TemplateProcessor<'a> {
    config: &'a BuildConfiguration,
}

impl<'a> TemplateProcessor<'a> {
    fn new(config: &'a BuildConfiguration) -> Self {
        Self { config }
    }

    fn process_templates(&self) -> Result<String> {
        let templates_cached = FileSystemHelper::target_is_up_to_date(
            &self.config.resources_ui_file,
            &self.config.templates_xml_file
        )?;

        if templates_cached {
            Ok(std::fs::read_to_string(&self.config.templates_xml_file)?)
        } else {
            TemplateExtractor::new()?
                .extract_all_templates()
                .save_template_files_to_directory(&self.config.output_dir)?
                .save_templates_resources_xml_to_file(&self.config.templates_xml_file)
        }
    }
}

// ===== RESOURCE COMPILER =====

struct ResourceCompiler<'a> {
    config: &'a BuildConfiguration,
    app_prefix: &'a str,
    source_directories: Vec<&'a Path>,
    template_replacements: Vec<(&'a str, &'a str)>,
}

impl<'a> ResourceCompiler<'a> {
    fn new(config: &'a BuildConfiguration, app_prefix: &'a str) -> Self {
        Self {
            config,
            app_prefix,
            source_directories: Vec::new(),
            template_replacements: Vec::new(),
        }
    }

    fn add_template_replacement(mut self, placeholder: &'a str, value: &'a str) -> Self {
        self.template_replacements.push((placeholder, value));
        self
    }

    fn add_source_directory(mut self, directory: &'a Path) -> Self {
        self.source_directories.push(directory);
        self
    }

    fn compile_resources(self) -> Result<()> {
        let final_xml = self.build_final_resources_xml()?;
        std::fs::write(&self.config.resources_xml_file, &final_xml)?;

        glib_build_tools::compile_resources(
            &self.source_directories,
            self.config.resources_xml_file.to_str().context("Invalid XML path")?,
            self.config.compiled_resources_file.to_str().context("Invalid compiled file path")?,
        );

        Ok(())
    }

    fn build_final_resources_xml(&self) -> Result<String> {
        let mut final_xml = String::from(RESOURCES_XML);
        for (placeholder, value) in &self.template_replacements {
            final_xml = final_xml.replace_exactly(&format!("@{placeholder}@"), value, 1)?;
        }
        final_xml.replace_exactly("@APP_PREFIX@", self.app_prefix, 2)
    }
}

// ===== CARGO ENVIRONMENT =====

struct CargoEnvironment;

impl CargoEnvironment {
    fn emit_rerun_triggers() {
        println!("cargo:rerun-if-changed=build.rs");
        println!("cargo:rerun-if-changed=resources");
    }

    fn emit_application_metadata(metadata: &ApplicationMetadata, resources_path: &Path) {
        println!("cargo:rustc-env=APP_NAME={}", metadata.name);
        println!("cargo:rustc-env=APP_DESCRIPTION={}", metadata.description);
        println!("cargo:rustc-env=APP_VERSION={}", metadata.version);
        println!("cargo:rustc-env=APP_ID={}", metadata.id);
        println!("cargo:rustc-env=APP_PREFIX={}", metadata.prefix);
        println!("cargo:rustc-env=APP_TITLE={}", metadata.title);
        println!("cargo:rustc-env=APP_AUTHOR={}", metadata.author);
        println!("cargo:rustc-env=APP_RESOURCES={}", resources_path.display());
    }
}

// ===== BUILD PIPELINE =====

struct BuildPipeline {
    config: BuildConfiguration,
    app_metadata: ApplicationMetadata,
}

impl BuildPipeline {
    fn new() -> Result<Self> {
        Ok(Self {
            config: BuildConfiguration::new()?,
            app_metadata: ApplicationMetadata::extract_from_cargo()?,
        })
    }

    fn execute_complete_build(&self) -> Result<()> {
        CargoEnvironment::emit_rerun_triggers();

        let icons_xml = IconCollector::new(&self.config).build_icons_resources_xml()?;
        let templates_xml = TemplateProcessor::new(&self.config).process_templates()?;

        ResourceCompiler::new(&self.config, &self.app_metadata.prefix)
            .add_template_replacement("APP_ICONS", &icons_xml)
            .add_template_replacement("APP_TEMPLATES", &templates_xml)
            .add_source_directory(&self.config.output_dir)
            .add_source_directory(&self.config.resources_dir)
            .add_source_directory(&self.config.icons_dir)
            .compile_resources()?;

        CargoEnvironment::emit_application_metadata(&self.app_metadata, &self.config.compiled_resources_file);
        Ok(())
    }
}

// ===== MAIN =====

fn main() -> Result<()> {
    BuildPipeline::new()?.execute_complete_build()
}
