//! Java source rendering.
//!
//! [`JavaRenderer`] turns either the grouped hierarchy or the flat category
//! map into a single `public final class` source file. Both layouts share
//! the header, the `TAILWIND_VERSION` constant and the `Responsive` and
//! `State` helper classes.

use std::path::{Path, PathBuf};

use serde::Serialize;
use twconst_classify::{
    emission_order, CategorizedUtilities, GroupedUtilities, Metadata, TargetGrammar,
    CATEGORY_ORDER,
};

use crate::engine::{MiniJinjaEngine, TemplateEngine};
use crate::error::RenderError;

/// Name of the class template, built in or looked up in a template directory.
pub const CLASS_TEMPLATE: &str = "class.java.j2";

const BUILTIN_CLASS_TEMPLATE: &str = include_str!("../templates/class.java.j2");

/// State variants offered by the `State` helper class.
const STATES: &[(&str, &str)] = &[
    ("hover", "Hover state"),
    ("focus", "Focus state"),
    ("active", "Active state"),
    ("dark", "Dark mode"),
    ("disabled", "Disabled state"),
];

/// Nested helper classes every generated class declares next to its groups.
const HELPER_CLASSES: &[&str] = &["Responsive", "State"];

/// Output options for the generated class.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JavaOptions {
    /// Java package, dot separated.
    pub package: String,
    /// Simple name of the generated class.
    pub class_name: String,
    /// Value of the `@since` tag, omitted when `None`.
    pub since_version: Option<String>,
    /// Breakpoint prefix and width, in declaration order.
    pub breakpoints: Vec<(String, String)>,
}

impl Default for JavaOptions {
    fn default() -> Self {
        Self {
            package: "com.vaadin.flow.component.tailwind".to_string(),
            class_name: "TW".to_string(),
            since_version: None,
            breakpoints: default_breakpoints(),
        }
    }
}

/// Tailwind's default breakpoints.
pub fn default_breakpoints() -> Vec<(String, String)> {
    [
        ("sm", "640px"),
        ("md", "768px"),
        ("lg", "1024px"),
        ("xl", "1280px"),
        ("2xl", "1536px"),
    ]
    .iter()
    .map(|(k, v)| (k.to_string(), v.to_string()))
    .collect()
}

impl JavaOptions {
    /// Path of the source file relative to the output directory:
    /// `com/example/TW.java` with the package structure, `TW.java` without.
    pub fn relative_path(&self, package_structure: bool) -> PathBuf {
        let mut path = PathBuf::new();
        if package_structure {
            for segment in self.package.split('.').filter(|s| !s.is_empty()) {
                path.push(segment);
            }
        }
        path.push(format!("{}.java", self.class_name));
        path
    }

    fn validate(&self) -> Result<(), RenderError> {
        if !self.package.split('.').all(is_java_identifier) {
            return Err(invalid("package", &self.package));
        }
        if !is_java_identifier(&self.class_name) {
            return Err(invalid("class name", &self.class_name));
        }
        Ok(())
    }
}

/// Renders classified utilities as Java source.
pub struct JavaRenderer {
    engine: MiniJinjaEngine,
    grammar: TargetGrammar,
}

impl JavaRenderer {
    /// A renderer using the built-in class template.
    pub fn new() -> Result<Self, RenderError> {
        let mut engine = MiniJinjaEngine::new();
        engine.add_template(CLASS_TEMPLATE, BUILTIN_CLASS_TEMPLATE)?;
        Ok(Self {
            engine,
            grammar: TargetGrammar::JAVA,
        })
    }

    /// A renderer that reads `class.java.j2` from `dir`.
    pub fn with_template_dir(dir: impl AsRef<Path>) -> Result<Self, RenderError> {
        let dir = dir.as_ref();
        let engine = MiniJinjaEngine::with_template_dir(dir);
        if !engine.has_template(CLASS_TEMPLATE) {
            return Err(RenderError::MissingTemplate(format!(
                "{} in {}",
                CLASS_TEMPLATE,
                dir.display()
            )));
        }
        Ok(Self {
            engine,
            grammar: TargetGrammar::JAVA,
        })
    }

    /// Renders the grouped layout: one nested class per top-level group and
    /// per subgroup.
    pub fn render_grouped(
        &self,
        grouped: &GroupedUtilities,
        options: &JavaOptions,
        metadata: &Metadata,
    ) -> Result<String, RenderError> {
        options.validate()?;

        let mut groups = Vec::with_capacity(grouped.groups.len());
        let mut siblings = vec![options.class_name.as_str()];
        siblings.extend_from_slice(HELPER_CLASSES);
        for group in &grouped.groups {
            check_nested_name(&group.name, &siblings)?;
            let mut subgroups = Vec::with_capacity(group.subgroups.len());
            for sub in &group.subgroups {
                check_nested_name(&sub.name, &[options.class_name.as_str(), group.name.as_str()])?;
                subgroups.push(SubGroupView {
                    name: &sub.name,
                    constants: sub.constants.iter().map(ConstantView::from).collect(),
                });
            }
            groups.push(GroupView {
                name: &group.name,
                header: group.name.to_uppercase(),
                constants: group.constants.iter().map(ConstantView::from).collect(),
                subgroups,
            });
        }

        let usage = usage_grouped(grouped, &options.class_name);
        let view = ClassView {
            grouped: true,
            groups,
            sections: Vec::new(),
            ..ClassView::new(options, metadata, usage)?
        };
        tracing::debug!(
            groups = grouped.groups.len(),
            constants = grouped.total(),
            "rendering grouped Java class"
        );
        self.render(&view)
    }

    /// Renders the flat layout: one commented section per category, in
    /// [`CATEGORY_ORDER`], constants named by the sanitizer.
    pub fn render_flat(
        &self,
        utilities: &CategorizedUtilities,
        options: &JavaOptions,
        metadata: &Metadata,
    ) -> Result<String, RenderError> {
        options.validate()?;

        let sections: Vec<SectionView> = emission_order(utilities.categories(), CATEGORY_ORDER)
            .into_iter()
            .filter_map(|category| {
                let names = utilities.get(category)?;
                Some(SectionView {
                    header: category.as_str().to_uppercase().replace('-', " "),
                    constants: names
                        .iter()
                        .map(|class_name| OwnedConstantView {
                            name: self.grammar.sanitize(class_name),
                            class_name: class_name.clone(),
                        })
                        .collect(),
                })
            })
            .collect();

        let usage = usage_flat(&sections, &options.class_name);
        let view = ClassView {
            grouped: false,
            groups: Vec::new(),
            sections,
            ..ClassView::new(options, metadata, usage)?
        };
        tracing::debug!(
            categories = utilities.len(),
            constants = utilities.total(),
            "rendering flat Java class"
        );
        self.render(&view)
    }

    fn render(&self, view: &ClassView<'_>) -> Result<String, RenderError> {
        let data = serde_json::to_value(view)?;
        self.engine.render_named(CLASS_TEMPLATE, &data)
    }
}

#[derive(Serialize)]
struct ClassView<'a> {
    package: &'a str,
    class_name: &'a str,
    tailwind_version: &'a str,
    since: Option<&'a str>,
    grouped: bool,
    usage: Vec<String>,
    groups: Vec<GroupView<'a>>,
    sections: Vec<SectionView>,
    breakpoints: Vec<BreakpointView<'a>>,
    states: Vec<StateView>,
}

impl<'a> ClassView<'a> {
    fn new(
        options: &'a JavaOptions,
        metadata: &'a Metadata,
        usage: Vec<String>,
    ) -> Result<Self, RenderError> {
        let breakpoints = options
            .breakpoints
            .iter()
            .map(|(prefix, width)| {
                let method = breakpoint_method(prefix);
                if !is_java_identifier(&method) {
                    return Err(invalid("breakpoint method", prefix));
                }
                Ok(BreakpointView {
                    method,
                    label: capitalize(prefix),
                    width,
                    prefix,
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(ClassView {
            package: &options.package,
            class_name: &options.class_name,
            tailwind_version: &metadata.tailwind_version,
            since: options.since_version.as_deref().filter(|s| !s.is_empty()),
            grouped: false,
            usage,
            groups: Vec::new(),
            sections: Vec::new(),
            breakpoints,
            states: STATES
                .iter()
                .map(|&(prefix, label)| StateView { prefix, label })
                .collect(),
        })
    }
}

#[derive(Serialize)]
struct GroupView<'a> {
    name: &'a str,
    header: String,
    constants: Vec<ConstantView<'a>>,
    subgroups: Vec<SubGroupView<'a>>,
}

#[derive(Serialize)]
struct SubGroupView<'a> {
    name: &'a str,
    constants: Vec<ConstantView<'a>>,
}

#[derive(Serialize)]
struct ConstantView<'a> {
    name: &'a str,
    class_name: &'a str,
}

impl<'a> From<&'a twconst_classify::Constant> for ConstantView<'a> {
    fn from(c: &'a twconst_classify::Constant) -> Self {
        ConstantView {
            name: &c.name,
            class_name: &c.class_name,
        }
    }
}

#[derive(Serialize)]
struct SectionView {
    header: String,
    constants: Vec<OwnedConstantView>,
}

#[derive(Serialize)]
struct OwnedConstantView {
    name: String,
    class_name: String,
}

#[derive(Serialize)]
struct BreakpointView<'a> {
    method: String,
    label: String,
    width: &'a str,
    prefix: &'a str,
}

#[derive(Serialize)]
struct StateView {
    prefix: &'static str,
    label: &'static str,
}

/// Java method name for a breakpoint prefix: `2xl` becomes `xxl`,
/// `3xl` becomes `xxxl`, dashes become underscores.
pub fn breakpoint_method(prefix: &str) -> String {
    let digits = prefix.chars().take_while(char::is_ascii_digit).count();
    let rest = &prefix[digits..];
    let method = match prefix[..digits].parse::<usize>() {
        Ok(n) if n > 0 && rest.starts_with('x') => format!("{}{}", "x".repeat(n - 1), rest),
        Ok(_) => format!("bp{prefix}"),
        Err(_) => prefix.to_string(),
    };
    method.replace('-', "_")
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Up to three qualified constant references for the usage example.
fn usage_grouped(grouped: &GroupedUtilities, class_name: &str) -> Vec<String> {
    let mut usage = Vec::new();
    for group in &grouped.groups {
        if let Some(c) = group.constants.first() {
            usage.push(format!("{class_name}.{}.{}", group.name, c.name));
        } else if let Some(sub) = group.subgroups.iter().find(|s| !s.constants.is_empty()) {
            usage.push(format!(
                "{class_name}.{}.{}.{}",
                group.name, sub.name, sub.constants[0].name
            ));
        }
        if usage.len() == 3 {
            break;
        }
    }
    if usage.is_empty() {
        usage.push("\"flex\"".to_string());
    }
    usage
}

fn usage_flat(sections: &[SectionView], class_name: &str) -> Vec<String> {
    let mut usage: Vec<String> = sections
        .iter()
        .filter_map(|s| s.constants.first())
        .take(3)
        .map(|c| format!("{class_name}.{}", c.name))
        .collect();
    if usage.is_empty() {
        usage.push("\"flex\"".to_string());
    }
    usage
}

/// A nested class may not share its name with an enclosing class.
/// A nested class may not reuse the name of an enclosing class or of a
/// class already declared beside it.
fn check_nested_name(name: &str, taken: &[&str]) -> Result<(), RenderError> {
    if !is_java_identifier(name) || taken.contains(&name) {
        return Err(invalid("nested class name", name));
    }
    Ok(())
}

fn is_java_identifier(s: &str) -> bool {
    let mut chars = s.chars();
    let starts_ok = matches!(chars.next(), Some(c) if c.is_ascii_alphabetic() || c == '_' || c == '$');
    starts_ok
        && chars.all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '$')
        && !is_java_keyword(s)
}

/// Keywords and literals; Java keywords are all lower case.
fn is_java_keyword(s: &str) -> bool {
    matches!(s, "true" | "false" | "null")
        || (s.bytes().all(|b| b.is_ascii_lowercase())
            && TargetGrammar::JAVA.is_reserved(&s.to_ascii_uppercase()))
}

fn invalid(kind: &'static str, name: &str) -> RenderError {
    RenderError::InvalidIdentifier {
        kind,
        name: name.to_string(),
    }
}
