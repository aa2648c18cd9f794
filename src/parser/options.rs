//! Tag name recognition options.

use smol_str::SmolStr;

use crate::ast::TagKind;
use crate::base::NAMESPACE_SEPARATOR;

/// Configuration of [`OrmTagParser`](super::OrmTagParser).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TagParserOptions {
    /// Namespace aliases under which ORM annotations are written
    /// (`ORM` in `@ORM\Column`).
    pub aliases: Vec<SmolStr>,
}

impl Default for TagParserOptions {
    fn default() -> Self {
        Self {
            aliases: vec![
                SmolStr::new_static("ORM"),
                SmolStr::new_static(r"Doctrine\ORM\Mapping"),
            ],
        }
    }
}

impl TagParserOptions {
    /// Recognize annotations written under `alias` as well.
    pub fn with_alias(mut self, alias: impl Into<SmolStr>) -> Self {
        let alias = alias.into();
        if !self.aliases.contains(&alias) {
            self.aliases.push(alias);
        }
        self
    }

    /// Map a tag name such as `@ORM\Column` to its kind.
    ///
    /// Returns `None` for unknown aliases and unknown annotation names.
    pub fn tag_kind(&self, tag_name: &str) -> Option<TagKind> {
        let name = tag_name
            .strip_prefix('@')
            .unwrap_or(tag_name)
            .trim_start_matches(NAMESPACE_SEPARATOR);

        self.aliases.iter().find_map(|alias| {
            let short_name = name
                .strip_prefix(alias.as_str())?
                .strip_prefix(NAMESPACE_SEPARATOR)?;
            TagKind::from_short_name(short_name)
        })
    }
}
