//! Import graph of the generated app, starting at its entry component.
//!
//! `@/x` resolves to `/x`, `./` and `../` resolve against the importing file, anything
//! else is a library import.

use crate::kernel::prompts::IMPORT_ALIAS;
use crate::kernel::services::adapters::normalize_path;
use crate::kernel::services::ports::FileSystemProvider;
use regex::Regex;
use std::collections::BTreeSet;
use std::sync::OnceLock;

/// Entry candidates, in priority order.
pub const ENTRY_CANDIDATES: &[&str] = &[
    "/App.jsx",
    "/App.tsx",
    "/index.jsx",
    "/index.tsx",
    "/src/App.jsx",
    "/src/App.tsx",
];

const PROBE_SUFFIXES: &[&str] = &["", ".jsx", ".tsx", ".js", ".ts"];
const SCRIPT_EXTENSIONS: &[&str] = &["jsx", "tsx", "js", "ts", "mjs"];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModuleNode {
    pub path: String,
    pub depth: usize,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnresolvedImport {
    pub importer: String,
    pub specifier: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ModuleGraph {
    pub entry: Option<String>,
    /// Depth-first discovery order; every module appears once.
    pub modules: Vec<ModuleNode>,
    pub libraries: BTreeSet<String>,
    pub unresolved: Vec<UnresolvedImport>,
}

impl ModuleGraph {
    pub fn build(fs: &dyn FileSystemProvider) -> Self {
        let mut graph = ModuleGraph::default();
        let Some(entry) = find_entry(fs) else {
            return graph;
        };
        graph.entry = Some(entry.to_string());

        let mut visited = BTreeSet::new();
        graph.visit(fs, entry, 0, &mut visited);
        graph
    }

    pub fn has_entry(&self) -> bool {
        self.entry.is_some()
    }

    fn visit(
        &mut self,
        fs: &dyn FileSystemProvider,
        path: &str,
        depth: usize,
        visited: &mut BTreeSet<String>,
    ) {
        if !visited.insert(path.to_string()) {
            return;
        }
        self.modules.push(ModuleNode {
            path: path.to_string(),
            depth,
        });

        if !is_script(path) {
            return;
        }
        let Ok(source) = fs.read_file(path) else {
            return;
        };

        for specifier in import_specifiers(source) {
            match resolve_import(fs, path, &specifier) {
                Resolution::Module(target) => self.visit(fs, &target, depth + 1, visited),
                Resolution::Library(name) => {
                    self.libraries.insert(name);
                }
                Resolution::Unresolved => self.unresolved.push(UnresolvedImport {
                    importer: path.to_string(),
                    specifier,
                }),
            }
        }
    }
}

pub fn find_entry(fs: &dyn FileSystemProvider) -> Option<&'static str> {
    ENTRY_CANDIDATES
        .iter()
        .copied()
        .find(|p| fs.exists(p) && !fs.is_dir(p))
}

fn import_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r#"(?m)(?:^|;)\s*(?:import|export)\s+(?:[^'";]*?\s+from\s+)?["']([^"']+)["']"#)
            .expect("import pattern is valid")
    })
}

/// Static `import`/`export ... from` specifiers, in source order. Statements may share a
/// line when separated by `;`.
pub fn import_specifiers(source: &str) -> Vec<String> {
    import_regex()
        .captures_iter(source)
        .filter_map(|c| c.get(1))
        .map(|m| m.as_str().to_string())
        .collect()
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    Module(String),
    Library(String),
    Unresolved,
}

pub fn resolve_import(fs: &dyn FileSystemProvider, importer: &str, specifier: &str) -> Resolution {
    let base = if let Some(rest) = specifier.strip_prefix(IMPORT_ALIAS) {
        format!("/{}", rest)
    } else if specifier.starts_with("./") || specifier.starts_with("../") {
        let dir = importer.rsplit_once('/').map(|(dir, _)| dir).unwrap_or("");
        format!("{}/{}", dir, specifier)
    } else if specifier.starts_with('/') {
        specifier.to_string()
    } else {
        return Resolution::Library(package_name(specifier).to_string());
    };

    let Ok(base) = normalize_path(&base) else {
        return Resolution::Unresolved;
    };
    PROBE_SUFFIXES
        .iter()
        .map(|suffix| format!("{}{}", base, suffix))
        .find(|candidate| fs.exists(candidate) && !fs.is_dir(candidate))
        .map(Resolution::Module)
        .unwrap_or(Resolution::Unresolved)
}

/// `@scope/pkg/sub` -> `@scope/pkg`, `pkg/sub` -> `pkg`.
fn package_name(specifier: &str) -> &str {
    let mut slashes = specifier.match_indices('/');
    let cut = if specifier.starts_with('@') {
        slashes.nth(1)
    } else {
        slashes.next()
    };
    match cut {
        Some((idx, _)) => &specifier[..idx],
        None => specifier,
    }
}

fn is_script(path: &str) -> bool {
    path.rsplit_once('.')
        .is_some_and(|(_, ext)| SCRIPT_EXTENSIONS.contains(&ext))
}

#[cfg(test)]
#[path = "../../tests/unit/models/module_graph.rs"]
mod tests;
