use astmill_core::function::FunctionInfoExtractor;
use clap::ValueEnum;
use std::path::Path;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum SourceLanguage {
    Java,
    Python,
    Php,
}

impl SourceLanguage {
    pub const ALL: [SourceLanguage; 3] = [
        SourceLanguage::Java,
        SourceLanguage::Python,
        SourceLanguage::Php,
    ];

    pub fn extensions(self) -> &'static [&'static str] {
        match self {
            SourceLanguage::Java => astmill_java::EXTENSIONS,
            SourceLanguage::Python => astmill_python::EXTENSIONS,
            SourceLanguage::Php => astmill_php::EXTENSIONS,
        }
    }

    pub fn from_path(path: &Path) -> Option<Self> {
        let ext = path.extension()?.to_str()?;
        Self::ALL
            .into_iter()
            .find(|lang| lang.extensions().contains(&ext))
    }

    pub fn tree_sitter_language(self) -> tree_sitter::Language {
        match self {
            SourceLanguage::Java => astmill_java::tree_sitter_language(),
            SourceLanguage::Python => astmill_python::tree_sitter_language(),
            SourceLanguage::Php => astmill_php::tree_sitter_language(),
        }
    }

    pub fn extractor(self) -> Box<dyn FunctionInfoExtractor> {
        match self {
            SourceLanguage::Java => Box::new(astmill_java::JavaFunctionInfoExtractor::new()),
            SourceLanguage::Python => Box::new(astmill_python::PythonFunctionInfoExtractor::new()),
            SourceLanguage::Php => Box::new(astmill_php::PhpFunctionInfoExtractor::new()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn language_follows_extension() {
        assert_eq!(
            SourceLanguage::from_path(Path::new("src/A.java")),
            Some(SourceLanguage::Java)
        );
        assert_eq!(
            SourceLanguage::from_path(Path::new("pkg/mod.py")),
            Some(SourceLanguage::Python)
        );
        assert_eq!(
            SourceLanguage::from_path(Path::new("index.php")),
            Some(SourceLanguage::Php)
        );
        assert_eq!(SourceLanguage::from_path(Path::new("README.md")), None);
        assert_eq!(SourceLanguage::from_path(Path::new("Makefile")), None);
    }

    #[test]
    fn extractor_matches_language() {
        for lang in SourceLanguage::ALL {
            let name = lang.extractor().language();
            assert_eq!(name, format!("{:?}", lang).to_lowercase());
        }
    }
}
