use crate::ast::Document;
use thiserror::Error;

/// Configuration for parsing GraphQL source text into an arena [`Document`]
#[derive(Debug, Clone, Default)]
pub struct Parser {
    recursion_limit: Option<usize>,
    token_limit: Option<usize>,
}

/// Syntax errors reported by the parser, in source order.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("{} syntax error(s), first: {}", .errors.len(), first_message(.errors))]
pub struct ParseError {
    pub errors: Vec<SyntaxError>,
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("{message} at byte {index}")]
pub struct SyntaxError {
    pub message: String,
    /// Byte offset in the source text
    pub index: usize,
}

fn first_message(errors: &[SyntaxError]) -> String {
    errors
        .first()
        .map(ToString::to_string)
        .unwrap_or_default()
}

impl Parser {
    pub fn new() -> Self {
        Self::default()
    }

    /// Configure the recursion to use while parsing.
    pub fn recursion_limit(&mut self, value: usize) -> &mut Self {
        self.recursion_limit = Some(value);
        self
    }

    /// Configure the limit on the number of tokens to parse.
    /// If an input document is too big, parsing will be aborted.
    /// By default, there is no limit.
    pub fn token_limit(&mut self, value: usize) -> &mut Self {
        self.token_limit = Some(value);
        self
    }

    /// Parses an operation document.
    pub fn parse_executable(&self, source: &str) -> Result<Document, ParseError> {
        self.parse(source)
    }

    /// Parses a schema document and adds the built-in scalars, directives
    /// and meta fields every schema has.
    pub fn parse_schema(&self, source: &str) -> Result<Document, ParseError> {
        let mut document = self.parse(source)?;
        document.add_schema_builtins();
        Ok(document)
    }

    fn parse(&self, source: &str) -> Result<Document, ParseError> {
        let mut parser = apollo_parser::Parser::new(source);
        if let Some(value) = self.recursion_limit {
            parser = parser.recursion_limit(value)
        }
        if let Some(value) = self.token_limit {
            parser = parser.token_limit(value)
        }
        let tree = parser.parse();
        let errors: Vec<SyntaxError> = tree
            .errors()
            .map(|error| SyntaxError {
                message: error.message().to_owned(),
                index: error.index(),
            })
            .collect();
        if !errors.is_empty() {
            tracing::debug!(errors = errors.len(), "syntax errors while parsing");
            return Err(ParseError { errors });
        }
        Ok(Document::from_cst(source, tree.document()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reports_syntax_errors() {
        let err = Parser::new().parse_executable("query {").unwrap_err();
        assert!(!err.errors.is_empty());
    }

    #[test]
    fn token_limit_is_forwarded() {
        let result = Parser::new()
            .token_limit(3)
            .parse_executable("query { a b c d e }");
        assert!(result.is_err());
    }
}
