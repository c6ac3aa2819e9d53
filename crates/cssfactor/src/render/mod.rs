//! Stylesheet rendering.
//!
//! Every AST node implements [`fmt::Display`] with its canonical CSS text;
//! [`render`] is the stylesheet's `Display` output. Rendering is total and
//! performs no validation: whatever the tree holds is written out, including
//! empty declaration blocks (`a {  }`).
//!
//! The transformation passes compare nodes by this rendered text, so the
//! format here is also the grouping key for `factor`.

use std::fmt::{self, Write as _};

use crate::ast::{
    Combinator, Declaration, Detail, Import, Media, Page, Ruleset, Selector, SimpleSelector,
    Statement, Stylesheet, Value,
};

/// Render a stylesheet to CSS text.
///
/// Emits `@charset`, then each `@import`, then each statement, one per line.
pub fn render(stylesheet: &Stylesheet) -> String {
    stylesheet.to_string()
}

impl fmt::Display for Stylesheet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        let mut line = |f: &mut fmt::Formatter<'_>| {
            if !std::mem::take(&mut first) {
                f.write_char('\n')?;
            }
            Ok::<_, fmt::Error>(())
        };

        if let Some(charset) = &self.charset {
            line(f)?;
            write!(f, "@charset \"{}\";", escape_quotes(charset))?;
        }
        for import in &self.imports {
            line(f)?;
            write!(f, "{}", import)?;
        }
        for statement in &self.statements {
            line(f)?;
            write!(f, "{}", statement)?;
        }
        Ok(())
    }
}

impl fmt::Display for Import {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "@import {}", self.url)?;
        if !self.media.is_empty() {
            write!(f, " {}", self.media.join(", "))?;
        }
        f.write_char(';')
    }
}

impl fmt::Display for Statement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Statement::Ruleset(ruleset) => fmt::Display::fmt(ruleset, f),
            Statement::Media(media) => fmt::Display::fmt(media, f),
            Statement::Page(page) => fmt::Display::fmt(page, f),
        }
    }
}

impl fmt::Display for Ruleset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_joined(f, &self.selectors, ", ")?;
        f.write_str(" { ")?;
        write_joined(f, &self.declarations, "; ")?;
        f.write_str(" }")
    }
}

impl fmt::Display for Media {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "@media {} {{ ", self.media.join(", "))?;
        write_joined(f, &self.statements, " ")?;
        f.write_str(" }")
    }
}

impl fmt::Display for Page {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("@page")?;
        if let Some(pseudo) = &self.pseudo_page {
            write!(f, ":{}", pseudo)?;
        }
        f.write_str(" { ")?;
        write_joined(f, &self.declarations, "; ")?;
        f.write_str(" }")
    }
}

impl fmt::Display for Selector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (part, combinator) in &self.parts {
            write!(f, "{}{}", part, combinator)?;
        }
        Ok(())
    }
}

impl fmt::Display for Combinator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for SimpleSelector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(name) = &self.element_name {
            f.write_str(name)?;
        }
        for detail in &self.details {
            write!(f, "{}", detail)?;
        }
        Ok(())
    }
}

impl fmt::Display for Detail {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Detail::Id(id) => write!(f, "#{}", id),
            Detail::Class(class) => write!(f, ".{}", class),
            Detail::Attrib(attr) => write!(f, "[{}]", attr),
            Detail::AttribEq(attr, value) => write!(f, "[{}=\"{}\"]", attr, escape_quotes(value)),
            Detail::AttribInc(attr, value) => {
                write!(f, "[{}~=\"{}\"]", attr, escape_quotes(value))
            }
            Detail::AttribDM(attr, value) => write!(f, "[{}|=\"{}\"]", attr, escape_quotes(value)),
            Detail::Pseudo(name) => write!(f, ":{}", name),
            Detail::PseudoElement(name) => write!(f, "::{}", name),
            Detail::PseudoFunc(name, argument) => write!(f, ":{}({})", name, argument),
        }
    }
}

impl fmt::Display for Declaration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: ", self.property)?;
        write_values(f, &self.values)?;
        if self.important {
            f.write_str(" !important")?;
        }
        Ok(())
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Number(text)
            | Value::Percentage(text)
            | Value::Length(text)
            | Value::Ems(text)
            | Value::Exs(text)
            | Value::Angle(text)
            | Value::Time(text)
            | Value::Freq(text)
            | Value::StringV(text)
            | Value::Ident(text)
            | Value::Uri(text)
            | Value::HexColour(text)
            | Value::Operator(text) => f.write_str(text),
            Value::Slash => f.write_char('/'),
            Value::Comma => f.write_char(','),
            Value::Function { name, values } => {
                write!(f, "{}(", name)?;
                write_values(f, values)?;
                f.write_char(')')
            }
        }
    }
}

/// Space-separated values, except that commas hug the value before them and
/// slashes hug both neighbours.
fn write_values(f: &mut fmt::Formatter<'_>, values: &[Value]) -> fmt::Result {
    let mut previous: Option<&Value> = None;
    for value in values {
        let tight = value.is_separator() || matches!(previous, Some(Value::Slash));
        if previous.is_some() && !tight {
            f.write_char(' ')?;
        }
        write!(f, "{}", value)?;
        previous = Some(value);
    }
    Ok(())
}

fn write_joined<T: fmt::Display>(
    f: &mut fmt::Formatter<'_>,
    items: &[T],
    separator: &str,
) -> fmt::Result {
    for (i, item) in items.iter().enumerate() {
        if i > 0 {
            f.write_str(separator)?;
        }
        write!(f, "{}", item)?;
    }
    Ok(())
}

/// Escape the bare `"` characters of an unquoted value. Backslash escapes
/// already in the value are copied through unchanged.
fn escape_quotes(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    let mut chars = value.chars();
    while let Some(c) = chars.next() {
        match c {
            '\\' => {
                out.push(c);
                if let Some(escaped) = chars.next() {
                    out.push(escaped);
                }
            }
            '"' => out.push_str("\\\""),
            _ => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn decl(property: &str, values: Vec<Value>) -> Declaration {
        Declaration::new(property, values)
    }

    #[test]
    fn ruleset_layout() {
        let ruleset = Ruleset::new(
            vec![Selector::element("a"), Selector::element("b")],
            vec![
                decl("color", vec![Value::ident("red")]),
                decl("margin", vec![Value::Length("1px".into()), Value::Number("0".into())])
                    .important(),
            ],
        );
        assert_eq!(
            ruleset.to_string(),
            "a, b { color: red; margin: 1px 0 !important }"
        );
    }

    #[test]
    fn empty_declarations_still_render() {
        let ruleset = Ruleset::new(vec![Selector::element("a")], vec![]);
        assert_eq!(ruleset.to_string(), "a {  }");
    }

    #[test]
    fn selector_chain_and_details() {
        let selector = Selector::simple(
            SimpleSelector::element("input")
                .with(Detail::AttribEq("type".into(), "text".into()))
                .with(Detail::Pseudo("focus".into())),
        )
        .then(
            Combinator::Adjacent,
            SimpleSelector::new().with(Detail::Class("hint".into())),
        )
        .then(
            Combinator::Child,
            SimpleSelector::universal().with(Detail::PseudoFunc("not".into(), ".x".into())),
        );

        assert_eq!(
            selector.to_string(),
            "input[type=\"text\"]:focus + .hint > *:not(.x)"
        );
    }

    #[test]
    fn attribute_details() {
        let part = SimpleSelector::new()
            .with(Detail::Attrib("href".into()))
            .with(Detail::AttribInc("rel".into(), "a\"b".into()))
            .with(Detail::AttribDM("lang".into(), "en".into()))
            .with(Detail::Id("main".into()))
            .with(Detail::PseudoElement("after".into()));
        assert_eq!(
            part.to_string(),
            "[href][rel~=\"a\\\"b\"][lang|=\"en\"]#main::after"
        );
    }

    #[test]
    fn values_and_separators() {
        let rgba = Value::Function {
            name: "rgba".into(),
            values: vec![
                Value::Number("0".into()),
                Value::Comma,
                Value::Number("0".into()),
                Value::Comma,
                Value::Number(".5".into()),
            ],
        };
        let font = decl(
            "font",
            vec![
                Value::Length("12px".into()),
                Value::Slash,
                Value::Number("1.5".into()),
                Value::StringV("'Open Sans'".into()),
                Value::Comma,
                Value::ident("serif"),
            ],
        );

        assert_eq!(rgba.to_string(), "rgba(0, 0, .5)");
        assert_eq!(font.to_string(), "font: 12px/1.5 'Open Sans', serif");
    }

    #[test]
    fn stylesheet_lines() {
        let sheet = Stylesheet {
            charset: Some("UTF-8".into()),
            imports: vec![
                Import {
                    url: "\"base.css\"".into(),
                    media: vec![],
                },
                Import {
                    url: "url(print.css)".into(),
                    media: vec!["print".into(), "tv".into()],
                },
            ],
            statements: vec![
                Statement::Media(Media {
                    media: vec!["screen".into()],
                    statements: vec![
                        Statement::Ruleset(Ruleset::new(
                            vec![Selector::element("a")],
                            vec![decl("color", vec![Value::ident("red")])],
                        )),
                        Statement::Ruleset(Ruleset::new(
                            vec![Selector::element("b")],
                            vec![decl("color", vec![Value::ident("blue")])],
                        )),
                    ],
                }),
                Statement::Page(Page {
                    pseudo_page: Some("first".into()),
                    declarations: vec![decl("margin", vec![Value::Length("1in".into())])],
                }),
            ],
        };

        assert_eq!(
            render(&sheet),
            "@charset \"UTF-8\";\n\
             @import \"base.css\";\n\
             @import url(print.css) print, tv;\n\
             @media screen { a { color: red } b { color: blue } }\n\
             @page:first { margin: 1in }"
        );
    }

    #[test]
    fn quoted_text_keeps_existing_escapes() {
        let sheet = Stylesheet {
            charset: Some("a\"b".into()),
            ..Stylesheet::new()
        };
        assert_eq!(render(&sheet), "@charset \"a\\\"b\";");

        let part = SimpleSelector::new().with(Detail::AttribEq("x".into(), "a\\\"b\\\\".into()));
        assert_eq!(part.to_string(), "[x=\"a\\\"b\\\\\"]");
    }

    #[test]
    fn operators_inside_functions() {
        let calc = Value::Function {
            name: "calc".into(),
            values: vec![
                Value::Percentage("100%".into()),
                Value::Operator("-".into()),
                Value::Length("10px".into()),
            ],
        };
        assert_eq!(calc.to_string(), "calc(100% - 10px)");
    }

    #[test]
    fn empty_stylesheet_renders_nothing() {
        assert_eq!(render(&Stylesheet::new()), "");
    }
}
