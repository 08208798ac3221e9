use log::trace;
use regex::Regex;

// Keywords are matched for every supported language, not per extension.
const DECLARATION_PATTERN: &str =
    r"(func|function|class|type|struct|interface|abstract)\s+([a-zA-Z0-9_]+)";

/// A declaration header found in a source file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Declaration {
    /// Keyword, whitespace and identifier exactly as they appear in the source.
    pub header: String,
    pub keyword: String,
    pub name: String,
    pub offset: usize,
}

// Seam for swapping the regex matcher with a real parser.
pub trait DeclarationExtractor {
    /// Returns declarations in order of appearance.
    fn extract_declarations(&self, content: &str) -> Vec<Declaration>;
}

pub struct RegexDeclarationExtractor {
    pattern: Regex,
}

impl RegexDeclarationExtractor {
    pub fn new() -> Self {
        RegexDeclarationExtractor {
            pattern: Regex::new(DECLARATION_PATTERN).expect("declaration pattern is valid"),
        }
    }
}

impl Default for RegexDeclarationExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl DeclarationExtractor for RegexDeclarationExtractor {
    fn extract_declarations(&self, content: &str) -> Vec<Declaration> {
        let declarations: Vec<Declaration> = self
            .pattern
            .captures_iter(content)
            .filter_map(|caps| {
                let whole = caps.get(0)?;
                Some(Declaration {
                    header: whole.as_str().to_string(),
                    keyword: caps.get(1)?.as_str().to_string(),
                    name: caps.get(2)?.as_str().to_string(),
                    offset: whole.start(),
                })
            })
            .collect();

        trace!("Matched {} declaration headers", declarations.len());
        declarations
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn headers(content: &str) -> Vec<String> {
        RegexDeclarationExtractor::new()
            .extract_declarations(content)
            .into_iter()
            .map(|d| d.header)
            .collect()
    }

    #[test]
    fn extracts_single_go_function() {
        let found = RegexDeclarationExtractor::new()
            .extract_declarations("func Foo(x int) int { return x }");
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].header, "func Foo");
        assert_eq!(found[0].keyword, "func");
        assert_eq!(found[0].name, "Foo");
        assert_eq!(found[0].offset, 0);
    }

    #[test]
    fn extracts_multiple_matches_on_one_line() {
        assert_eq!(
            headers("type A struct{}; type B struct{}"),
            vec!["type A", "type B"]
        );
    }

    #[test]
    fn prefers_longer_keyword_when_shorter_cannot_match() {
        assert_eq!(headers("function greet --description 'hi'"), vec!["function greet"]);
    }

    #[test]
    fn keeps_whitespace_verbatim() {
        assert_eq!(headers("public abstract\tclass   Shape {}"), vec!["abstract\tclass"]);
        assert_eq!(headers("class\n  Widget"), vec!["class\n  Widget"]);
    }

    #[test]
    fn csharp_members_in_order() {
        let source =
            "public interface IShape {}\npublic class Circle : IShape {}\nstruct Point {}\n";
        assert_eq!(
            headers(source),
            vec!["interface IShape", "class Circle", "struct Point"]
        );
    }

    #[test]
    fn no_keyword_boundary_is_enforced() {
        // "myfunc run" still matches, as does a keyword inside a comment
        assert_eq!(headers("myfunc run"), vec!["func run"]);
        assert_eq!(headers("// func helper"), vec!["func helper"]);
    }

    #[test]
    fn empty_content_yields_nothing() {
        assert!(headers("").is_empty());
        assert!(headers("package main\n\nimport \"fmt\"\n").is_empty());
    }
}
