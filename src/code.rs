use std::fmt;

use crate::paragraph::LINE_BREAK;

/// Languages recognized for fenced code block annotations.
///
/// [`identifier`](Self::identifier) maps each variant to the identifier
/// commonly understood by syntax highlighters; variants without a special
/// spelling use their lower-cased name.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum BlockLanguage {
    /// No language annotation.
    None,
    /// Bash.
    Bash,
    /// C.
    C,
    /// C++.
    Cpp,
    /// C#.
    CSharp,
    /// Cisco IOS configuration.
    CiscoIos,
    /// Common Lisp.
    CommonLisp,
    /// Generic configuration files.
    ConfigFile,
    /// CSS.
    Css,
    /// CSV Schema.
    CsvSchema,
    /// Unified diffs.
    Diff,
    /// Dockerfiles.
    Dockerfile,
    /// F#.
    FSharp,
    /// GHC C--.
    GhcCmm,
    /// GHC Core.
    GhcCore,
    /// Go.
    Go,
    /// GraphQL.
    GraphQl,
    /// Haskell.
    Haskell,
    /// HTML.
    Html,
    /// Hy.
    HyLang,
    /// IDL.
    Idl,
    /// INI files.
    Ini,
    /// Java.
    Java,
    /// JavaScript.
    JavaScript,
    /// JSON.
    Json,
    /// JSON with documentation comments.
    JsonDoc,
    /// Kotlin.
    Kotlin,
    /// LaTeX.
    Latex,
    /// Literate CoffeeScript.
    LiterateCoffeeScript,
    /// Literate Haskell.
    LiterateHaskell,
    /// Lua.
    Lua,
    /// Markdown.
    Markdown,
    /// Objective-C.
    ObjectiveC,
    /// Objective-C++.
    ObjectiveCpp,
    /// Perl.
    Perl,
    /// PHP.
    Php,
    /// Python.
    Python,
    /// R.
    R,
    /// Robot Framework.
    RobotFramework,
    /// Ruby.
    Ruby,
    /// Rust.
    Rust,
    /// Scala.
    Scala,
    /// Shell sessions.
    Shell,
    /// SPARQL.
    Sparql,
    /// SQL.
    Sql,
    /// OpenSSH configuration.
    SshConfigFile,
    /// Swift.
    Swift,
    /// TOML.
    Toml,
    /// Turtle.
    Turtle,
    /// TypeScript.
    TypeScript,
    /// VHDL.
    Vhdl,
    /// Visual Basic.
    VisualBasic,
    /// XML.
    Xml,
    /// YAML.
    Yaml,
}

impl BlockLanguage {
    /// The fenced-code-block identifier for this language.
    ///
    /// ```rust
    /// # use markdown_builder::BlockLanguage;
    /// assert_eq!(BlockLanguage::CSharp.identifier(), "csharp");
    /// assert_eq!(BlockLanguage::CiscoIos.identifier(), "cisco_ios");
    /// assert_eq!(BlockLanguage::Python.identifier(), "python");
    /// ```
    pub fn identifier(&self) -> &'static str {
        match self {
            BlockLanguage::None => "",
            BlockLanguage::Bash => "bash",
            BlockLanguage::C => "c",
            BlockLanguage::Cpp => "cpp",
            BlockLanguage::CSharp => "csharp",
            BlockLanguage::CiscoIos => "cisco_ios",
            BlockLanguage::CommonLisp => "common_lisp",
            BlockLanguage::ConfigFile => "conf",
            BlockLanguage::Css => "css",
            BlockLanguage::CsvSchema => "csvs",
            BlockLanguage::Diff => "diff",
            BlockLanguage::Dockerfile => "dockerfile",
            BlockLanguage::FSharp => "fsharp",
            BlockLanguage::GhcCmm => "ghc-cmm",
            BlockLanguage::GhcCore => "ghc-core",
            BlockLanguage::Go => "go",
            BlockLanguage::GraphQl => "graphql",
            BlockLanguage::Haskell => "haskell",
            BlockLanguage::Html => "html",
            BlockLanguage::HyLang => "hylang",
            BlockLanguage::Idl => "idlang",
            BlockLanguage::Ini => "ini",
            BlockLanguage::Java => "java",
            BlockLanguage::JavaScript => "javascript",
            BlockLanguage::Json => "json",
            BlockLanguage::JsonDoc => "json-doc",
            BlockLanguage::Kotlin => "kotlin",
            BlockLanguage::Latex => "latex",
            BlockLanguage::LiterateCoffeeScript => "literate_coffeescript",
            BlockLanguage::LiterateHaskell => "literate_haskell",
            BlockLanguage::Lua => "lua",
            BlockLanguage::Markdown => "markdown",
            BlockLanguage::ObjectiveC => "objective_c",
            BlockLanguage::ObjectiveCpp => "objective_cpp",
            BlockLanguage::Perl => "perl",
            BlockLanguage::Php => "php",
            BlockLanguage::Python => "python",
            BlockLanguage::R => "r",
            BlockLanguage::RobotFramework => "robot_framework",
            BlockLanguage::Ruby => "ruby",
            BlockLanguage::Rust => "rust",
            BlockLanguage::Scala => "scala",
            BlockLanguage::Shell => "shell",
            BlockLanguage::Sparql => "sparql",
            BlockLanguage::Sql => "sql",
            BlockLanguage::SshConfigFile => "ssh",
            BlockLanguage::Swift => "swift",
            BlockLanguage::Toml => "toml",
            BlockLanguage::Turtle => "turtle",
            BlockLanguage::TypeScript => "typescript",
            BlockLanguage::Vhdl => "vhdl",
            BlockLanguage::VisualBasic => "vb",
            BlockLanguage::Xml => "xml",
            BlockLanguage::Yaml => "yaml",
        }
    }
}

impl fmt::Display for BlockLanguage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.identifier())
    }
}

impl From<BlockLanguage> for &'static str {
    fn from(language: BlockLanguage) -> Self {
        language.identifier()
    }
}

/// Builds the body of a fenced code block.
///
/// Content passes through without any escaping; [`line`](Self::line)
/// unconditionally suffixes the terminator.
#[derive(Debug, Default)]
pub struct CodeBlockBuilder {
    out: String,
}

impl CodeBlockBuilder {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Append code verbatim.
    pub fn add(&mut self, code: &str) -> &mut Self {
        self.out.push_str(code);
        self
    }

    /// Append one line of code followed by the line terminator.
    pub fn line(&mut self, line: &str) -> &mut Self {
        self.out.push_str(line);
        self.out.push_str(LINE_BREAK);
        self
    }

    /// The body built so far.
    pub fn as_str(&self) -> &str {
        &self.out
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn special_identifiers_override_the_lowercase_fallback() {
        assert_eq!(BlockLanguage::ObjectiveCpp.identifier(), "objective_cpp");
        assert_eq!(BlockLanguage::VisualBasic.identifier(), "vb");
        assert_eq!(BlockLanguage::None.identifier(), "");
    }

    #[test]
    fn lines_are_terminated_without_escaping() {
        let mut code = CodeBlockBuilder::new();
        code.line("fn main() {").line("    <&'a str>::default();").line("}");
        assert_eq!(
            code.as_str(),
            "fn main() {\n    <&'a str>::default();\n}\n"
        );
    }
}
