use std::collections::BTreeMap;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::{PoisonError, RwLock};
use std::time::SystemTime;

use proc_macro2::Span;
use toml_edit::{Document, Item, Table};

/// The parsed `Cargo.toml` of the crate invoking a macro.
///
/// Used to find the path under which generated code can name a workspace
/// crate, since the caller may depend on it directly or only through the
/// `tc_core` facade.
///
/// # Resolution rules
///
/// For `get_crate_path("tc_decode")`:
///
/// 1. `tc_decode` is a dependency: `::tc_decode`.
/// 2. `tc_core` is a dependency: `::tc_core::decode`.
/// 3. Repeat 1-2 in `dev-dependencies`.
/// 4. Otherwise `::tc_decode`.
///
/// A crate naming itself through the absolute path needs
/// `extern crate self as tc_decode;` at its root.
///
/// ```
/// # use tc_macro_utils::Manifest;
/// let path: syn::Path = Manifest::shared(|m| m.get_crate_path("tc_decode"));
/// ```
#[derive(Debug)]
pub struct Manifest {
    document: Option<Document<Box<str>>>,
    modified_time: Option<SystemTime>,
}

const FACADE_NAME: &str = "tc_core";
const WORKSPACE_PREFIX: &str = "tc_";

fn manifest_path() -> Option<PathBuf> {
    let mut path = PathBuf::from(env::var_os("CARGO_MANIFEST_DIR")?);
    path.push("Cargo.toml");
    Some(path)
}

fn modified_time(path: &Path) -> Option<SystemTime> {
    fs::metadata(path).and_then(|meta| meta.modified()).ok()
}

fn absolute(segments: &[&str]) -> syn::Path {
    let mut path = syn::Path {
        leading_colon: Some(Default::default()),
        segments: Default::default(),
    };
    for segment in segments {
        path.segments
            .push(syn::Ident::new(segment, Span::call_site()).into());
    }
    path
}

impl Manifest {
    fn load(path: Option<&PathBuf>) -> Self {
        let document = path
            .and_then(|path| fs::read_to_string(path).ok())
            .and_then(|text| Document::parse(text.into_boxed_str()).ok());
        Self {
            document,
            modified_time: path.and_then(|path| modified_time(path)),
        }
    }

    fn find_in(deps: &Table, name: &str) -> Option<syn::Path> {
        if deps.contains_key(name) {
            return Some(absolute(&[name]));
        }
        let module = name.strip_prefix(WORKSPACE_PREFIX)?;
        deps.contains_key(FACADE_NAME)
            .then(|| absolute(&[FACADE_NAME, module]))
    }

    /// The path under which the caller can name the crate `name`.
    pub fn get_crate_path(&self, name: &str) -> syn::Path {
        let Some(document) = &self.document else {
            return absolute(&[name]);
        };
        ["dependencies", "dev-dependencies"]
            .into_iter()
            .find_map(|section| match document.get(section) {
                Some(Item::Table(deps)) => Self::find_in(deps, name),
                _ => None,
            })
            .unwrap_or_else(|| absolute(&[name]))
    }

    /// Runs `func` on the caller's manifest.
    ///
    /// Manifests are cached per path and re-read when the file changes.
    /// A missing or unreadable manifest resolves every name to itself.
    pub fn shared<R>(func: impl FnOnce(&Self) -> R) -> R {
        static MANIFESTS: RwLock<BTreeMap<PathBuf, Manifest>> = RwLock::new(BTreeMap::new());

        let Some(path) = manifest_path() else {
            return func(&Self::load(None));
        };
        let current = modified_time(&path);

        let manifests = MANIFESTS.read().unwrap_or_else(PoisonError::into_inner);
        if let Some(manifest) = manifests.get(&path)
            && current.is_some()
            && manifest.modified_time == current
        {
            return func(manifest);
        }
        drop(manifests);

        let manifest = Self::load(Some(&path));
        let result = func(&manifest);
        MANIFESTS
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(path, manifest);
        result
    }
}

// -----------------------------------------------------------------------------
// Tests

#[cfg(test)]
mod tests {
    use super::Manifest;
    use toml_edit::Document;

    fn manifest(text: &str) -> Manifest {
        Manifest {
            document: Document::parse(text.into()).ok(),
            modified_time: None,
        }
    }

    fn render(path: &syn::Path) -> String {
        path.segments
            .iter()
            .map(|segment| segment.ident.to_string())
            .collect::<Vec<_>>()
            .join("::")
    }

    #[test]
    fn direct_dependency_wins() {
        let m = manifest("[dependencies]\ntc_decode = \"0.1\"\ntc_core = \"0.1\"\n");
        assert_eq!(render(&m.get_crate_path("tc_decode")), "tc_decode");
    }

    #[test]
    fn facade_dependency_is_used() {
        let m = manifest("[dev-dependencies]\ntc_core = \"0.1\"\n");
        assert_eq!(render(&m.get_crate_path("tc_decode")), "tc_core::decode");
    }

    #[test]
    fn unknown_falls_back() {
        let m = manifest("[package]\nname = \"x\"\n");
        let path = m.get_crate_path("tc_decode");
        assert!(path.leading_colon.is_some());
        assert_eq!(render(&path), "tc_decode");
    }
}
