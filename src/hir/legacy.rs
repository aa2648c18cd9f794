//! Legacy class name resolution.
//!
//! Older framework code loaded classes by a directory-like location
//! (`App::uses('PaginatorComponent', 'Controller/Component')`). That
//! location later became the namespace. [`PseudoNamespaceResolver`] maps a
//! location plus a short class name to a fully-qualified name.
//!
//! # Resolution order
//!
//! Each step returns immediately when it matches:
//!
//! 1. Normalize `/` and `.` in the location to `\`
//! 2. Short names in the rename table map to their modern name
//! 3. An interior `Lib` segment is dropped (`Lib` moved to the top level)
//! 4. `<framework>\<namespace>\<class>` if the host knows that type
//! 5. `<app>\<namespace>\<class>` for nested, non-plugin, non-lib locations
//! 6. `<namespace>\<class>` otherwise

use indexmap::IndexMap;
use rustc_hash::FxHashMap;
use smol_str::SmolStr;
use tracing::trace;

use crate::base::NAMESPACE_SEPARATOR;

use super::types::KnownTypes;

/// Legacy short names whose modern location is not derivable from the path.
pub const RENAMED_CLASSES: &[(&str, &str)] = &[
    ("App", r"Cake\Core\App"),
    ("AppController", r"App\Controller\AppController"),
    ("AppHelper", r"App\View\Helper\AppHelper"),
    ("AppModel", r"App\Model\AppModel"),
    ("Cache", r"Cake\Cache\Cache"),
    ("CakeEventListener", r"Cake\Event\EventListener"),
    ("CakeLog", r"Cake\Log\Log"),
    ("CakePlugin", r"Cake\Core\Plugin"),
    ("CakeTestCase", r"Cake\TestSuite\TestCase"),
    ("CakeTestFixture", r"Cake\TestSuite\Fixture\TestFixture"),
    ("Component", r"Cake\Controller\Component"),
    ("ComponentRegistry", r"Cake\Controller\ComponentRegistry"),
    ("Configure", r"Cake\Core\Configure"),
    ("ConnectionManager", r"Cake\Database\ConnectionManager"),
    ("Controller", r"Cake\Controller\Controller"),
    ("Debugger", r"Cake\Error\Debugger"),
    ("ExceptionRenderer", r"Cake\Error\ExceptionRenderer"),
    ("Helper", r"Cake\View\Helper"),
    ("HelperRegistry", r"Cake\View\HelperRegistry"),
    ("Inflector", r"Cake\Utility\Inflector"),
    ("Model", r"Cake\Model\Model"),
    ("ModelBehavior", r"Cake\Model\Behavior"),
    ("Object", r"Cake\Core\Object"),
    ("Router", r"Cake\Routing\Router"),
    ("Shell", r"Cake\Console\Shell"),
    ("View", r"Cake\View\View"),
    // Names that were already renamed once
    ("Log", r"Cake\Log\Log"),
    ("Plugin", r"Cake\Core\Plugin"),
    ("TestCase", r"Cake\TestSuite\TestCase"),
    ("TestFixture", r"Cake\TestSuite\Fixture\TestFixture"),
];

const LIB_SEGMENT: &str = "Lib";
const PLUGIN_MARKER: &str = "Plugin";

// ============================================================================
// OPTIONS
// ============================================================================

/// Configuration of [`PseudoNamespaceResolver`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LegacyResolverOptions {
    /// Root namespace of the framework's own classes.
    pub framework_namespace: SmolStr,
    /// Root namespace of application classes.
    pub app_namespace: SmolStr,
    /// Renames added to (or overriding) [`RENAMED_CLASSES`].
    pub extra_renames: IndexMap<SmolStr, SmolStr>,
}

impl Default for LegacyResolverOptions {
    fn default() -> Self {
        Self {
            framework_namespace: SmolStr::new_static("Cake"),
            app_namespace: SmolStr::new_static("App"),
            extra_renames: IndexMap::new(),
        }
    }
}

impl LegacyResolverOptions {
    pub fn with_framework_namespace(mut self, namespace: impl Into<SmolStr>) -> Self {
        self.framework_namespace = namespace.into();
        self
    }

    pub fn with_app_namespace(mut self, namespace: impl Into<SmolStr>) -> Self {
        self.app_namespace = namespace.into();
        self
    }

    pub fn with_rename(mut self, short_class: impl Into<SmolStr>, fqn: impl Into<SmolStr>) -> Self {
        self.extra_renames.insert(short_class.into(), fqn.into());
        self
    }
}

// ============================================================================
// RESOLUTION
// ============================================================================

/// Which step produced a legacy resolution.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LegacyResolution {
    /// Found in the rename table.
    Renamed(SmolStr),
    /// A known framework class or interface.
    Framework(SmolStr),
    /// Assumed to be an application class.
    Application(SmolStr),
    /// The namespace taken as is.
    Unchanged(SmolStr),
}

impl LegacyResolution {
    pub fn name(&self) -> &str {
        match self {
            LegacyResolution::Renamed(name)
            | LegacyResolution::Framework(name)
            | LegacyResolution::Application(name)
            | LegacyResolution::Unchanged(name) => name,
        }
    }

    pub fn into_name(self) -> SmolStr {
        match self {
            LegacyResolution::Renamed(name)
            | LegacyResolution::Framework(name)
            | LegacyResolution::Application(name)
            | LegacyResolution::Unchanged(name) => name,
        }
    }
}

/// Resolves legacy `(location, short class)` pairs to fully-qualified names.
pub struct PseudoNamespaceResolver<'a, K: ?Sized> {
    types: &'a K,
    renames: FxHashMap<SmolStr, SmolStr>,
    framework_namespace: SmolStr,
    app_namespace: SmolStr,
}

impl<'a, K: KnownTypes + ?Sized> PseudoNamespaceResolver<'a, K> {
    /// Create a resolver with the default options.
    pub fn new(types: &'a K) -> Self {
        Self::with_options(types, LegacyResolverOptions::default())
    }

    pub fn with_options(types: &'a K, options: LegacyResolverOptions) -> Self {
        let mut renames: FxHashMap<SmolStr, SmolStr> = RENAMED_CLASSES
            .iter()
            .map(|&(short, fqn)| (SmolStr::new_static(short), SmolStr::new_static(fqn)))
            .collect();
        renames.extend(options.extra_renames);

        Self {
            types,
            renames,
            framework_namespace: options.framework_namespace,
            app_namespace: options.app_namespace,
        }
    }

    /// Resolve `short_class` located at `pseudo_namespace`.
    pub fn resolve(&self, pseudo_namespace: &str, short_class: &str) -> SmolStr {
        self.resolve_detailed(pseudo_namespace, short_class).into_name()
    }

    /// Resolve and report which step matched.
    pub fn resolve_detailed(&self, pseudo_namespace: &str, short_class: &str) -> LegacyResolution {
        let namespace = normalize_separators(pseudo_namespace);

        if let Some(renamed) = self.renames.get(short_class) {
            trace!(short_class, renamed = %renamed, "legacy class renamed");
            return LegacyResolution::Renamed(renamed.clone());
        }

        let namespace = drop_interior_lib(&namespace);

        let framework_class = join(&[
            self.framework_namespace.as_str(),
            namespace.as_str(),
            short_class,
        ]);
        if self.types.is_known(&framework_class) {
            trace!(fqn = %framework_class, "legacy class is a framework class");
            return LegacyResolution::Framework(framework_class);
        }

        if namespace.contains(NAMESPACE_SEPARATOR)
            && !namespace.contains(PLUGIN_MARKER)
            && !namespace.contains(LIB_SEGMENT)
        {
            let app_class = join(&[self.app_namespace.as_str(), namespace.as_str(), short_class]);
            trace!(fqn = %app_class, "legacy class assumed to be an application class");
            return LegacyResolution::Application(app_class);
        }

        let fqn = join(&[namespace.as_str(), short_class]);
        trace!(fqn = %fqn, "legacy class kept in its namespace");
        LegacyResolution::Unchanged(fqn)
    }
}

/// Turn a path-like location into a namespace.
fn normalize_separators(pseudo_namespace: &str) -> String {
    pseudo_namespace.replace(['/', '.'], "\\")
}

/// Drop non-leading `Lib` segments once an interior `Lib` is present.
///
/// A namespace whose only `Lib` is its first or last segment is kept as is.
fn drop_interior_lib(namespace: &str) -> String {
    let segments: Vec<&str> = namespace.split(NAMESPACE_SEPARATOR).collect();
    let last = segments.len().saturating_sub(1);

    let has_interior_lib = segments
        .iter()
        .enumerate()
        .any(|(index, &segment)| segment == LIB_SEGMENT && index > 0 && index < last);
    if !has_interior_lib {
        return namespace.to_owned();
    }

    segments
        .iter()
        .enumerate()
        .filter(|&(index, &segment)| index == 0 || segment != LIB_SEGMENT)
        .map(|(_, &segment)| segment)
        .collect::<Vec<_>>()
        .join("\\")
}

fn join(parts: &[&str]) -> SmolStr {
    SmolStr::new(parts.join("\\"))
}
