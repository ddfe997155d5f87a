//! Supported source languages

/// Answers whether a language type can be scanned.
///
/// Names passed in are already lower-cased.
pub trait LanguageSupport {
    fn is_supported(&self, lang: &str) -> bool;

    /// Extensions scanned when the config lists none.
    fn default_exts(&self, _lang: &str) -> &[&'static str] {
        &[]
    }
}

/// (name, default extensions)
const LANGUAGES: &[(&str, &[&str])] = &[
    ("c", &[".h", ".c"]),
    ("cpp", &[".h", ".c", ".cpp", ".cxx", ".hpp"]),
    ("csharp", &[".cs"]),
    ("go", &[".go"]),
    ("java", &[".java"]),
    ("javascript", &[".js"]),
    ("perl", &[".perl", ".prl", ".pl", ".pm"]),
    ("php", &[".php"]),
    ("python", &[".py"]),
    ("ruby", &[".rb"]),
    ("rust", &[".rs"]),
    ("swift", &[".swift"]),
];

/// The languages apidoc ships a scanner for.
#[derive(Debug, Default, Clone, Copy)]
pub struct BuiltinLanguages;

impl LanguageSupport for BuiltinLanguages {
    fn is_supported(&self, lang: &str) -> bool {
        LANGUAGES.iter().any(|(name, _)| *name == lang)
    }

    fn default_exts(&self, lang: &str) -> &[&'static str] {
        match LANGUAGES.iter().find(|(name, _)| *name == lang) {
            Some((_, exts)) => *exts,
            None => &[],
        }
    }
}

/// Names of all built-in languages, in alphabetical order.
pub fn supported_languages() -> impl Iterator<Item = &'static str> {
    LANGUAGES.iter().map(|(name, _)| *name)
}
