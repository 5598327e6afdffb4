use std::path::{Path, PathBuf};
use anyhow::{bail, Context, Result};
use phf_codegen::Map;
use regex::Regex;
use std::collections::{HashMap, HashSet};

include!("src/models/mod.rs");

const RESOURCES_FILE_NAME: &str = "compiled.gresources";
const UI_XML: &str = include_str!("resources/ui.xml");
const COURSES_TOML: &str = include_str!("resources/courses.toml");
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
                "Expected to replace exactly {count} occurrence(s) of '{from}' with '{to}', but found {actual_count}."
            );
        }

        Ok(parts.join(to))
    }
}

// ===== BUILD CONFIGURATION =====

struct BuildConfiguration {
    output_dir: PathBuf,
    resources_dir: PathBuf,
    resources_ui_file: PathBuf,
    catalog_file: PathBuf,
    templates_xml_file: PathBuf,
    resources_xml_file: PathBuf,
    compiled_resources_file: PathBuf,
}

impl BuildConfiguration {
    fn new() -> Result<Self> {
        let root = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
        let resources_dir = root.join("resources");
        let resources_ui_file = resources_dir.join("ui.xml");
        let output_dir = PathBuf::from(std::env::var("OUT_DIR")?);
        let catalog_file = output_dir.join("catalog.rs");
        let resources_xml_file = output_dir.join("resources.xml");
        let templates_xml_file = output_dir.join("templates.xml");
        let compiled_resources_file = output_dir.join(RESOURCES_FILE_NAME);

        Ok(Self {
            output_dir,
            resources_dir,
            resources_ui_file,
            catalog_file,
            templates_xml_file,
            resources_xml_file,
            compiled_resources_file,
        })
    }
}

// ===== APPLICATION METADATA =====

#[allow(dead_code)]
struct ApplicationMetadata {
    name: &'static str,
    description: &'static str,
    version: &'static str,
    id: String,
    prefix: String,
    title: String,
    authors: Vec<String>,
    categories: Vec<String>,
    keywords: Vec<String>,
}

impl ApplicationMetadata {
    fn extract_from_cargo() -> Result<Self> {
        let name = env!("CARGO_PKG_NAME");
        let description = env!("CARGO_PKG_DESCRIPTION");
        let version = env!("CARGO_PKG_VERSION");
        let authors = env!("CARGO_PKG_AUTHORS")
            .split(':')
            .map(|s| s.to_string())
            .collect();

        let manifest: toml::Value = toml::from_str(MANIFEST_TOML)
            .context("Failed to parse Cargo.toml")?;

        let package = manifest.get("package")
            .context("Missing [package] section in Cargo.toml")?;

        let metadata = package.get("metadata")
            .context("Missing [package.metadata] section in Cargo.toml")?;

        let categories = Self::extract_string_array(package, "categories")?;
        let keywords = Self::extract_string_array(package, "keywords")?;
        let id = Self::extract_string(metadata, "id")?;
        let prefix = Self::extract_string(metadata, "prefix")?;
        let title = Self::extract_string(metadata, "title")?;

        Ok(Self {
            name,
            description,
            version,
            id,
            prefix,
            title,
            authors,
            categories,
            keywords,
        })
    }

    fn extract_string(value: &toml::Value, key: &str) -> Result<String> {
        value.get(key)
            .and_then(|v| v.as_str())
            .map(|s| s.to_string())
            .context(format!("Key '{key}' is missing or not a string"))
    }

    fn extract_string_array(value: &toml::Value, key: &str) -> Result<Vec<String>> {
        let array = value
            .get(key)
            .context(format!("Missing key '{key}' in Cargo.toml"))?
            .as_array()
            .context(format!("Key '{key}' is not an array"))?;

        array.iter()
            .enumerate()
            .map(|(i, v)| {
                v.as_str()
                    .map(|s| s.to_string())
                    .context(format!("Element at index {i} in key '{key}' is not a string"))
            })
            .collect()
    }
}

// ===== FILE SYSTEM HELPERS =====

struct FileSystemHelper;

impl FileSystemHelper {
    fn is_source_newer_than_target(source: &Path, target: &Path) -> Result<bool> {
        if !target.exists() {
            return Ok(false);
        }

        let source_time = source.metadata()?.modified()?;
        let target_time = target.metadata()?.modified()?;

        Ok(source_time < target_time)
    }

    fn target_exists_and_is_newer(source: &Path, target: &Path) -> Result<bool> {
        Ok(target.exists() && Self::is_source_newer_than_target(source, target)?)
    }
}

// ===== CATALOG PARSER =====

struct CatalogParser;

impl CatalogParser {
    fn parse_courses() -> Result<Vec<Course>> {
        let document: toml::Value = toml::from_str(COURSES_TOML)
            .context("Failed to parse resources/courses.toml")?;

        let entries = document.get("course")
            .context("Missing [[course]] entries in courses.toml")?
            .as_array()
            .context("Key 'course' is not an array of tables")?;

        entries.iter()
            .enumerate()
            .map(|(index, entry)| Self::parse_course_entry(index, entry))
            .collect()
    }

    fn parse_course_entry(index: usize, entry: &toml::Value) -> Result<Course> {
        let title = Self::extract_string(index, entry, "title")?;
        let slug = Self::extract_string(index, entry, "slug")?;
        let page = Self::extract_string(index, entry, "page")?;
        let keywords = Self::extract_keywords(index, entry)?;

        Ok(Course {
            title,
            slug,
            keywords,
            page,
        })
    }

    fn extract_string(index: usize, entry: &toml::Value, key: &str) -> Result<String> {
        entry.get(key)
            .and_then(|value| value.as_str())
            .map(|s| s.to_string())
            .context(format!("Course at index {index}: key '{key}' is missing or not a string"))
    }

    fn extract_keywords(index: usize, entry: &toml::Value) -> Result<Vec<String>> {
        let array = entry.get("keywords")
            .context(format!("Course at index {index}: missing key 'keywords'"))?
            .as_array()
            .context(format!("Course at index {index}: key 'keywords' is not an array"))?;

        array.iter()
            .enumerate()
            .map(|(keyword_index, value)| {
                value.as_str()
                    .map(|s| s.to_string())
                    .context(format!("Course at index {index}: keyword at index {keyword_index} is not a string"))
            })
            .collect()
    }
}

// ===== CATALOG VALIDATOR =====

struct CatalogValidator;

impl CatalogValidator {
    fn validate(courses: &[Course]) -> Result<()> {
        if courses.is_empty() {
            bail!("courses.toml defines no courses");
        }

        let mut seen_slugs = HashSet::new();

        for course in courses {
            Self::validate_course(course)?;

            if !seen_slugs.insert(course.slug.as_str()) {
                bail!("Duplicate course slug '{slug}'", slug = course.slug);
            }
        }

        Ok(())
    }

    fn validate_course(course: &Course) -> Result<()> {
        if course.title.trim().is_empty() {
            bail!("Course '{slug}' has an empty title", slug = course.slug);
        }

        if course.slug.trim().is_empty() {
            bail!("Course '{title}' has an empty slug", title = course.title);
        }

        if course.page.trim().is_empty() {
            bail!("Course '{slug}' has an empty page path", slug = course.slug);
        }

        if course.keywords.is_empty() {
            bail!("Course '{slug}' has no keywords and is unreachable by keyword search", slug = course.slug);
        }

        if course.keywords.iter().any(|keyword| keyword.trim().is_empty()) {
            bail!("Course '{slug}' has an empty keyword", slug = course.slug);
        }

        Ok(())
    }
}

// ===== CATALOG CODE BUILDER =====

struct CatalogCodeBuilder;

impl CatalogCodeBuilder {
    fn build_slug_index(courses: &[Course]) -> HashMap<String, usize> {
        courses
            .iter()
            .enumerate()
            .map(|(index, course)| (course.slug.clone(), index))
            .collect()
    }

    fn format_phf_hash_map<K: AsRef<str>>(map: &HashMap<K, usize>) -> String {
        let mut phf_builder = Map::new();
        for (key, value) in map {
            phf_builder.entry(key.as_ref(), value.to_string());
        }

        phf_builder.build().to_string()
    }

    fn format_keywords_list(keywords: &[String]) -> String {
        keywords
            .iter()
            .map(|keyword| format!("{keyword:?}"))
            .collect::<Vec<_>>()
            .join(", ")
    }

    fn format_course_struct(course: &Course) -> String {
        format!(
            "Course {{
                title: {title:?},
                slug: {slug:?},
                keywords: &[{keywords}],
                page: {page:?}
            }}",
            title = course.title,
            slug = course.slug,
            keywords = Self::format_keywords_list(&course.keywords),
            page = course.page
        )
    }

    fn format_courses_array(courses: &[Course]) -> String {
        courses.iter()
            .map(Self::format_course_struct)
            .collect::<Vec<_>>()
            .join(", ")
    }

    fn build_catalog_struct_code(courses: &[Course]) -> String {
        let slug_map = Self::format_phf_hash_map(&Self::build_slug_index(courses));
        let courses_array = Self::format_courses_array(courses);

        format!(
            "Catalog {{
                courses: &[{courses_array}],
                slug_map: {slug_map}
            }}"
        )
    }
}

// ===== CATALOG PROCESSOR =====

struct CatalogProcessor<'a> {
    config: &'a BuildConfiguration,
}

impl<'a> CatalogProcessor<'a> {
    fn new(config: &'a BuildConfiguration) -> Self {
        Self { config }
    }

    fn process_catalog_data(&self) -> Result<()> {
        let courses = CatalogParser::parse_courses()?;
        CatalogValidator::validate(&courses)?;
        self.write_catalog_code_to_file(&courses)
    }

    fn write_catalog_code_to_file(&self, courses: &[Course]) -> Result<()> {
        let catalog_code = CatalogCodeBuilder::build_catalog_struct_code(courses);

        std::fs::write(&self.config.catalog_file, catalog_code)
            .context("Failed to write catalog file")
    }
}

// ===== TEMPLATE EXTRACTOR =====

struct TemplateExtractor {
    template_regex: Regex,
    extracted_templates: HashMap<String, String>,
}

impl TemplateExtractor {
    fn new() -> Result<Self> {
        let template_regex = Regex::new(r#"(?s)<template\s+class="([^"]+)"[^>]*>.*?</template>"#)?;
        let extracted_templates = HashMap::new();
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
            let filename = format!("{class_name}.ui");
            let file_path = output_path.join(filename);
            let formatted_template = format!("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n<interface>{template_content}</interface>");
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

    fn process_templates(&self) -> Result<(String, bool)> {
        if self.should_use_cached_templates()? {
            self.load_cached_templates_xml()
        } else {
            self.regenerate_template_resources()
        }
    }

    fn should_use_cached_templates(&self) -> Result<bool> {
        FileSystemHelper::target_exists_and_is_newer(
            &self.config.resources_ui_file,
            &self.config.templates_xml_file
        )
    }

    fn load_cached_templates_xml(&self) -> Result<(String, bool)> {
        let xml_content = std::fs::read_to_string(&self.config.templates_xml_file)?;
        Ok((xml_content, false))
    }

    fn regenerate_template_resources(&self) -> Result<(String, bool)> {
        let xml_content = TemplateExtractor::new()?
            .extract_all_templates()
            .save_template_files_to_directory(&self.config.output_dir)?
            .save_templates_resources_xml_to_file(&self.config.templates_xml_file)?;

        Ok((xml_content, true))
    }
}

// ===== RESOURCE COMPILER =====

struct ResourceCompiler<'a> {
    config: &'a BuildConfiguration,
    app_prefix: &'a str,
    source_directories: Vec<&'a Path>,
    templates_xml: &'a str,
}

impl<'a> ResourceCompiler<'a> {
    fn new(config: &'a BuildConfiguration, app_prefix: &'a str, templates_xml: &'a str) -> Self {
        Self {
            config,
            app_prefix,
            source_directories: Vec::new(),
            templates_xml,
        }
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
        RESOURCES_XML
            .replace_exactly("@APP_TEMPLATES@", self.templates_xml, 1)?
            .replace_exactly("@APP_PREFIX@", self.app_prefix, 1)
    }
}

// ===== CARGO ENVIRONMENT VARIABLES =====

struct CargoEnvironmentVariables;

impl CargoEnvironmentVariables {
    fn emit_build_configuration_flags() {
        println!("cargo:rustc-cfg=runtime");
    }

    fn emit_application_metadata(metadata: &ApplicationMetadata, resources_path: &Path) {
        println!("cargo:rustc-env=APP_NAME={}", metadata.name);
        println!("cargo:rustc-env=APP_DESCRIPTION={}", metadata.description);
        println!("cargo:rustc-env=APP_VERSION={}", metadata.version);
        println!("cargo:rustc-env=APP_ID={}", metadata.id);
        println!("cargo:rustc-env=APP_PREFIX={}", metadata.prefix);
        println!("cargo:rustc-env=APP_TITLE={}", metadata.title);
        println!("cargo:rustc-env=APP_AUTHORS={}", metadata.authors.join(","));
        println!("cargo:rustc-env=APP_RESOURCES={}", resources_path.display());
    }

    fn emit_all_environment_variables(metadata: &ApplicationMetadata, resources_path: &Path) {
        Self::emit_build_configuration_flags();
        Self::emit_application_metadata(metadata, resources_path);
    }
}

// ===== BUILD ENVIRONMENT =====

struct BuildEnvironment;

impl BuildEnvironment {
    fn setup_cargo_configuration() {
        println!("cargo:rustc-check-cfg=cfg(runtime)");
        println!("cargo:rerun-if-changed=build.rs");
        println!("cargo:rerun-if-changed=resources");
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
        BuildEnvironment::setup_cargo_configuration();

        self.process_catalog_data()?;
        let (templates_xml, templates_regenerated) = self.process_template_resources()?;

        if templates_regenerated {
            self.compile_final_resources(&templates_xml)?;
        }

        self.emit_cargo_environment_variables();

        Ok(())
    }

    fn process_catalog_data(&self) -> Result<()> {
        let processor = CatalogProcessor::new(&self.config);
        processor.process_catalog_data()
    }

    fn process_template_resources(&self) -> Result<(String, bool)> {
        let processor = TemplateProcessor::new(&self.config);
        processor.process_templates()
    }

    fn compile_final_resources(&self, templates_xml: &str) -> Result<()> {
        ResourceCompiler::new(&self.config, &self.app_metadata.prefix, templates_xml)
            .add_source_directory(&self.config.output_dir)
            .add_source_directory(&self.config.resources_dir)
            .compile_resources()
    }

    fn emit_cargo_environment_variables(&self) {
        CargoEnvironmentVariables::emit_all_environment_variables(&self.app_metadata, &self.config.compiled_resources_file);
    }
}

// ===== MAIN =====

fn main() -> Result<()> {
    BuildPipeline::new()?.execute_complete_build()
}
