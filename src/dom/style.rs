// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! Inline style declarations
//!
//! Parses the contents of a `style` attribute into `(property, value)` pairs
//! using cssparser's rule-body tokenizer, so quoted strings, `url(...)` and
//! nested blocks are delimited correctly instead of split on raw `;`.
//!
//! Values are rebuilt from tokens rather than sliced from the source: strings
//! and blocks left open at the end of a declaration come back closed, comments
//! are dropped and whitespace runs collapse to one space. A rebuilt value
//! parses back to itself.

use cssparser::{
    AtRuleParser, CowRcStr, DeclarationParser, ParseError, Parser, ParserInput,
    QualifiedRuleParser, RuleBodyItemParser, RuleBodyParser, ToCss, Token,
    TokenSerializationType,
};

type Declaration = (String, String);

struct StyleAttributeParser;

impl<'i> DeclarationParser<'i> for StyleAttributeParser {
    type Declaration = Declaration;
    type Error = ();

    fn parse_value<'t>(
        &mut self,
        name: CowRcStr<'i>,
        input: &mut Parser<'i, 't>,
    ) -> Result<Self::Declaration, ParseError<'i, Self::Error>> {
        let mut value = String::new();
        write_tokens(input, &mut value)?;
        if value.is_empty() {
            return Err(input.new_custom_error(()));
        }
        Ok((name.to_ascii_lowercase(), value))
    }
}

/// Re-serialize the remaining tokens of `input` into `out`.
///
/// Bad strings, bad urls and stray backslashes have no stable serialization,
/// so they reject the whole declaration.
fn write_tokens<'i, 't>(
    input: &mut Parser<'i, 't>,
    out: &mut String,
) -> Result<(), ParseError<'i, ()>> {
    let mut previous = TokenSerializationType::nothing();
    let mut pending_space = false;

    while let Ok(token) = input.next_including_whitespace() {
        let token = token.clone();
        let closing = match token {
            Token::WhiteSpace(_) => {
                pending_space = !out.is_empty();
                continue;
            }
            Token::BadString(_) | Token::BadUrl(_) | Token::Delim('\\') => {
                return Err(input.new_custom_error(()));
            }
            Token::Function(_) | Token::ParenthesisBlock => Some(')'),
            Token::SquareBracketBlock => Some(']'),
            Token::CurlyBracketBlock => Some('}'),
            _ => None,
        };

        if pending_space {
            out.push(' ');
            pending_space = false;
        } else if previous.needs_separator_when_before(token.serialization_type()) {
            // Two tokens that would merge if written back to back.
            out.push_str("/**/");
        }
        token
            .to_css(out)
            .map_err(|_| input.new_custom_error(()))?;
        previous = token.serialization_type();

        if let Some(closing) = closing {
            input.parse_nested_block(|nested| {
                let mut inner = String::new();
                write_tokens(nested, &mut inner).map(|()| out.push_str(&inner))
            })?;
            out.push(closing);
            previous = TokenSerializationType::nothing();
        }
    }
    Ok(())
}

// Rules are not valid inside a style attribute; the defaults reject them.
impl<'i> AtRuleParser<'i> for StyleAttributeParser {
    type Prelude = ();
    type AtRule = Declaration;
    type Error = ();
}

impl<'i> QualifiedRuleParser<'i> for StyleAttributeParser {
    type Prelude = ();
    type QualifiedRule = Declaration;
    type Error = ();
}

impl<'i> RuleBodyItemParser<'i, Declaration, ()> for StyleAttributeParser {
    fn parse_declarations(&self) -> bool {
        true
    }

    fn parse_qualified(&self) -> bool {
        false
    }
}

/// Parse a `style` attribute value into declarations, in source order.
///
/// Property names are lowercased; values are normalized token text.
/// Malformed declarations are skipped.
pub fn parse_declarations(css: &str) -> Vec<(String, String)> {
    let mut input = ParserInput::new(css);
    let mut parser = Parser::new(&mut input);
    let mut decls = StyleAttributeParser;

    RuleBodyParser::new(&mut parser, &mut decls)
        .filter_map(|item| item.ok())
        .collect()
}

/// Serialize declarations back into `style` attribute text
pub fn serialize_declarations(decls: &[(String, String)]) -> String {
    decls
        .iter()
        .map(|(name, value)| format!("{}: {};", name, value))
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn decl(name: &str, value: &str) -> (String, String) {
        (name.to_string(), value.to_string())
    }

    #[test]
    fn test_parse_simple() {
        let decls = parse_declarations("color: red; BORDER: 1px solid black");
        assert_eq!(decls, vec![decl("color", "red"), decl("border", "1px solid black")]);
    }

    #[test]
    fn test_parse_quoted_semicolon() {
        let decls = parse_declarations("background: url(\"a;b.png\"); margin: 0");
        assert_eq!(decls.len(), 2);
        assert_eq!(decls[0], decl("background", "url(\"a;b.png\")"));
        assert_eq!(decls[1], decl("margin", "0"));
    }

    #[test]
    fn test_parse_skips_malformed() {
        let decls = parse_declarations("margin; padding:; border: 0; @media x {}");
        assert_eq!(decls, vec![decl("border", "0")]);
    }

    #[test]
    fn test_parse_keeps_duplicates() {
        let decls = parse_declarations("margin: 1px; margin: 2px");
        assert_eq!(decls, vec![decl("margin", "1px"), decl("margin", "2px")]);
    }

    #[test]
    fn test_parse_normalizes_value() {
        let decls = parse_declarations("border:  1px /* thin */  solid\n red");
        assert_eq!(decls, vec![decl("border", "1px solid red")]);
    }

    #[test]
    fn test_parse_closes_unterminated_value() {
        assert_eq!(parse_declarations("border: 'abc"), vec![decl("border", "\"abc\"")]);
        assert_eq!(parse_declarations("border: url(x"), vec![decl("border", "url(x)")]);
        assert_eq!(parse_declarations("border: 1px /* c"), vec![decl("border", "1px")]);
        assert_eq!(parse_declarations("border: calc(1px + (2px"), vec![decl("border", "calc(1px + (2px))")]);
    }

    #[test]
    fn test_parse_rejects_unserializable_value() {
        assert_eq!(parse_declarations("border: 'a\nb; margin: 0"), vec![decl("margin", "0")]);
        assert_eq!(parse_declarations("border: url(a b); margin: 0"), vec![decl("margin", "0")]);
    }

    #[test]
    fn test_serialized_declarations_are_stable() {
        for css in [
            "border: 'x",
            "margin: 2px; border: 'x",
            "border: url(x",
            "border: 1px /* c",
            "padding: 1px/**/solid",
            "margin: 0 !important",
        ] {
            let once = serialize_declarations(&parse_declarations(css));
            let twice = serialize_declarations(&parse_declarations(&once));
            assert_eq!(once, twice, "unstable for {:?}", css);
        }
    }

    #[test]
    fn test_serialize() {
        let text = serialize_declarations(&[decl("border", "0"), decl("margin", "1px 2px")]);
        assert_eq!(text, "border: 0; margin: 1px 2px;");
        assert_eq!(parse_declarations(&text), vec![decl("border", "0"), decl("margin", "1px 2px")]);
    }
}
