// glcaps/src/extensions.rs
//
//! The set of extension strings a driver reports as supported.

use fnv::FnvHashSet;

/// The extension name strings the active driver context reports as supported.
///
/// On most drivers this is built from the space-separated blob returned by
/// `glGetString(GL_EXTENSIONS)`; core-profile contexts deprecate that query,
/// so the backend enumerates `glGetStringi(GL_EXTENSIONS, i)` instead and
/// collects the tokens. Either way, only membership is ever queried.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ExtensionSet {
    extensions: FnvHashSet<String>,
}

impl ExtensionSet {
    /// Creates an empty extension set.
    #[inline]
    pub fn new() -> ExtensionSet {
        ExtensionSet {
            extensions: FnvHashSet::default(),
        }
    }

    /// Builds an extension set from a `glGetString(GL_EXTENSIONS)` blob.
    pub fn from_extension_string(extension_string: &str) -> ExtensionSet {
        ExtensionSet {
            extensions: extension_string
                .split_whitespace()
                .map(str::to_owned)
                .collect(),
        }
    }

    /// Adds a single extension name (the `glGetStringi` path).
    pub fn insert(&mut self, extension_name: &str) {
        self.extensions.insert(extension_name.to_owned());
    }

    /// Returns whether the driver reported the named extension.
    #[inline]
    pub fn contains(&self, extension_name: &str) -> bool {
        self.extensions.contains(extension_name)
    }

    /// Removes every extension named in the comma-separated `disabled` list.
    ///
    /// This backs the `GLCAPS_DISABLE_GL_EXTENSIONS` environment variable, which
    /// simulates drivers that lack the listed extensions.
    pub fn remove_disabled(&mut self, disabled: &str) {
        for name in disabled.split(',') {
            let name = name.trim();
            if !name.is_empty() {
                self.extensions.remove(name);
            }
        }
    }

    /// The number of distinct extensions reported.
    #[inline]
    pub fn len(&self) -> usize {
        self.extensions.len()
    }

    /// Returns whether the driver reported no extensions at all.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.extensions.is_empty()
    }
}

impl<S> FromIterator<S> for ExtensionSet
where
    S: AsRef<str>,
{
    fn from_iter<I>(iter: I) -> ExtensionSet
    where
        I: IntoIterator<Item = S>,
    {
        ExtensionSet {
            extensions: iter
                .into_iter()
                .map(|name| name.as_ref().to_owned())
                .collect(),
        }
    }
}
