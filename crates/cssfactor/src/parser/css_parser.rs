//! Recursive-descent stylesheet parser.
//!
//! The parser consumes the token stream produced by
//! [`tokenize`](crate::tokenizer::tokenize) and builds a [`Stylesheet`].
//! It never gives up on malformed input. Instead it:
//! 1. Records a [`ParseError`] (and logs it via `tracing::warn!`)
//! 2. Synchronizes: discards tokens up to the next `;` (consumed) or `}`
//!    (not consumed), skipping any nested `{ ... }` block on the way
//! 3. Continues with the next declaration or statement
//!
//! Every statement and declaration loop checks that its body advanced the
//! cursor. A body that did not is an internal bug; it is reported as a fatal
//! error and [`Parser::parse`] returns an empty stylesheet.
//!
//! `@media` blocks and function values nest at most [`MAX_DEPTH`] levels.
//! Anything deeper is reported and skipped like any other syntax error.

use crate::ast::{
    Combinator, Declaration, Detail, Import, Media, Page, Ruleset, Selector, SimpleSelector,
    Statement, Stylesheet, Value,
};
use crate::logging::targets;
use crate::progress::ProgressReporter;
use crate::tokenizer::{Token, TokenKind, tokenize};

use super::{Diagnostic, DiagnosticSink, ParseError};

type PResult<T> = std::result::Result<T, ParseError>;

/// Deepest accepted nesting of `@media` blocks, and of functions in a value.
pub const MAX_DEPTH: usize = 64;

/// Parse CSS text, returning the stylesheet and every recorded error.
///
/// # Example
///
/// ```ignore
/// let (sheet, errors) = parse_css("a { color: red } b { color: }");
/// assert_eq!(sheet.statements.len(), 2);
/// assert_eq!(errors.len(), 1);
/// ```
pub fn parse_css(css: &str) -> (Stylesheet, Vec<ParseError>) {
    let mut parser = Parser::new(tokenize(css));
    let sheet = parser.parse();
    (sheet, parser.into_errors())
}

/// Stylesheet parser over a token sequence.
///
/// A parser holds its cursor, error list and observers privately. Build a
/// fresh one per input; calling [`parse`](Self::parse) again restarts from
/// the first token.
pub struct Parser<'a> {
    tokens: Vec<Token>,
    pos: usize,
    errors: Vec<ParseError>,
    progress: ProgressReporter<'a>,
    diagnostics: Option<&'a mut dyn DiagnosticSink>,
}

impl<'a> Parser<'a> {
    /// Create a parser over `tokens`.
    pub fn new(tokens: Vec<Token>) -> Self {
        Self {
            tokens,
            pos: 0,
            errors: vec![],
            progress: ProgressReporter::silent(),
            diagnostics: None,
        }
    }

    /// Tokenize `css` and create a parser over the result.
    pub fn from_css(css: &str) -> Self {
        Self::new(tokenize(css))
    }

    /// Observe parse progress, reported after each top-level statement.
    pub fn set_progress_callback(&mut self, callback: impl FnMut(u8) + 'a) {
        self.progress = ProgressReporter::new(callback);
    }

    /// Deliver errors, recoveries and parsed statements to `sink`.
    pub fn with_diagnostics(mut self, sink: &'a mut dyn DiagnosticSink) -> Self {
        self.diagnostics = Some(sink);
        self
    }

    /// Errors recorded by the last [`parse`](Self::parse), in order.
    pub fn errors(&self) -> &[ParseError] {
        &self.errors
    }

    /// The recorded errors as display strings.
    pub fn error_messages(&self) -> Vec<String> {
        self.errors.iter().map(ToString::to_string).collect()
    }

    /// Consume the parser, keeping its errors.
    pub fn into_errors(self) -> Vec<ParseError> {
        self.errors
    }

    /// Parse the whole token sequence.
    ///
    /// Always returns a stylesheet. Recoverable syntax errors leave holes in
    /// it; a fatal error yields an empty one. Either way the problems are
    /// available from [`errors`](Self::errors).
    pub fn parse(&mut self) -> Stylesheet {
        self.parse_with(Self::parse_stylesheet)
    }

    /// Run `grammar` from the first token, turning a fatal error into an
    /// empty stylesheet.
    fn parse_with(
        &mut self,
        grammar: impl FnOnce(&mut Self) -> PResult<Stylesheet>,
    ) -> Stylesheet {
        self.pos = 0;
        self.errors.clear();

        let sheet = match grammar(self) {
            Ok(sheet) => sheet,
            Err(err) => {
                tracing::error!(target: targets::PARSER, "aborting parse: {}", err);
                self.record(err);
                Stylesheet::default()
            }
        };

        self.progress.finish();
        tracing::debug!(
            target: targets::PARSER,
            statements = sheet.statements.len(),
            errors = self.errors.len(),
            "parsed stylesheet"
        );
        sheet
    }

    // === Grammar ===

    /// `charset? import* statement*`
    fn parse_stylesheet(&mut self) -> PResult<Stylesheet> {
        let mut sheet = Stylesheet::default();

        self.skip_whitespace();
        if self.at_keyword("@charset") {
            let start = self.pos;
            match self.parse_charset() {
                Ok(charset) => sheet.charset = Some(charset),
                Err(err) => self.recover(err)?,
            }
            self.ensure_progress(start)?;
        }

        loop {
            self.skip_whitespace();
            if !self.at_keyword("@import") {
                break;
            }
            let start = self.pos;
            match self.parse_import() {
                Ok(import) => sheet.imports.push(import),
                Err(err) => self.recover(err)?,
            }
            self.ensure_progress(start)?;
            self.progress.report(self.pos, self.tokens.len());
        }

        sheet.statements = self.parse_statements(0)?;
        Ok(sheet)
    }

    /// `@charset S string ;`
    fn parse_charset(&mut self) -> PResult<String> {
        self.bump();
        self.skip_whitespace();
        let value = self.expect(TokenKind::String, "expected string after @charset")?;
        self.skip_whitespace();
        self.expect(TokenKind::Semicolon, "expected ';' after @charset")?;
        Ok(unquote(&value.lexeme))
    }

    /// `@import S (string | uri) media-list? ;`
    fn parse_import(&mut self) -> PResult<Import> {
        self.bump();
        self.skip_whitespace();
        let url = match self.peek_kind() {
            Some(TokenKind::String | TokenKind::Uri) => self.next_token(),
            _ => None,
        };
        let Some(url) = url else {
            return Err(self.error_here("expected string or url() after @import"));
        };
        self.skip_whitespace();
        let media = self.parse_medium_list(TokenKind::Semicolon)?;
        self.expect(TokenKind::Semicolon, "expected ';' after @import")?;
        Ok(Import {
            url: url.lexeme,
            media,
        })
    }

    /// Statements up to end of input, or up to (not including) the `}` that
    /// closes the enclosing block when `depth > 0`.
    fn parse_statements(&mut self, depth: usize) -> PResult<Vec<Statement>> {
        let mut statements = vec![];

        loop {
            self.skip_whitespace();
            let Some(token) = self.peek() else {
                break;
            };
            let kind = token.kind;
            let keyword = token.lexeme.to_ascii_lowercase();
            let start = self.pos;

            if kind == TokenKind::RightBrace {
                if depth > 0 {
                    break;
                }
                let err = self.error_here("unexpected '}'");
                self.record(err);
                self.bump();
                continue;
            }

            let result = match (kind, keyword.as_str()) {
                (TokenKind::AtKeyword, "@media") if depth >= MAX_DEPTH => Err(self.error_here(
                    format!("@media nested deeper than {} levels", MAX_DEPTH),
                )),
                (TokenKind::AtKeyword, "@media") => self.parse_media(depth).map(Statement::Media),
                (TokenKind::AtKeyword, "@page") => self.parse_page().map(Statement::Page),
                (TokenKind::AtKeyword, _) => {
                    Err(self.error_here(format!("unsupported at-rule '{}'", keyword)))
                }
                _ => self.parse_ruleset().map(Statement::Ruleset),
            };

            match result {
                Ok(statement) => {
                    let kind = statement_kind(&statement);
                    tracing::trace!(target: targets::PARSER, kind, depth, "parsed statement");
                    self.emit(Diagnostic::Statement { kind, depth });
                    statements.push(statement);
                }
                Err(err) => self.recover(err)?,
            }

            self.ensure_progress(start)?;
            if depth == 0 {
                self.progress.report(self.pos, self.tokens.len());
            }
        }

        Ok(statements)
    }

    /// `@media S medium (, S medium)* { statement* }`
    fn parse_media(&mut self, depth: usize) -> PResult<Media> {
        self.bump();
        self.skip_whitespace();
        let media = self.parse_medium_list(TokenKind::LeftBrace)?;
        if media.is_empty() {
            return Err(self.error_here("expected media type after @media"));
        }
        self.expect(TokenKind::LeftBrace, "expected '{' after media list")?;
        let statements = self.parse_statements(depth + 1)?;
        self.expect(TokenKind::RightBrace, "expected '}' to close @media block")?;
        Ok(Media { media, statements })
    }

    /// Comma-separated media entries up to (not including) `terminator`.
    ///
    /// Entries are kept as source text with whitespace collapsed, so both
    /// plain media types and queries like `screen and (max-width: 600px)`
    /// survive.
    fn parse_medium_list(&mut self, terminator: TokenKind) -> PResult<Vec<String>> {
        let mut media = vec![];
        let mut current = String::new();

        while let Some(token) = self.peek() {
            match token.kind {
                kind if kind == terminator => break,
                TokenKind::LeftBrace | TokenKind::RightBrace | TokenKind::Semicolon => break,
                TokenKind::Comma => {
                    let medium = current.trim_end();
                    if medium.is_empty() {
                        return Err(self.error_here("expected media type before ','"));
                    }
                    media.push(medium.to_string());
                    current.clear();
                    self.bump();
                    self.skip_whitespace();
                }
                TokenKind::Whitespace => {
                    if !current.is_empty() {
                        current.push(' ');
                    }
                    self.bump();
                }
                _ => {
                    current.push_str(&token.lexeme);
                    self.bump();
                }
            }
        }

        let medium = current.trim_end();
        if !medium.is_empty() {
            media.push(medium.to_string());
        } else if !media.is_empty() {
            return Err(self.error_here("expected media type after ','"));
        }
        Ok(media)
    }

    /// `@page (: ident)? { declaration* }`
    fn parse_page(&mut self) -> PResult<Page> {
        self.bump();
        self.skip_whitespace();
        let pseudo_page = if self.check(TokenKind::Colon) {
            self.bump();
            let name = self.expect(TokenKind::Ident, "expected page name after ':'")?;
            self.skip_whitespace();
            Some(name.lexeme)
        } else {
            None
        };
        let declarations = self.parse_declaration_block()?;
        Ok(Page {
            pseudo_page,
            declarations,
        })
    }

    /// `selector-list { declaration* }`
    fn parse_ruleset(&mut self) -> PResult<Ruleset> {
        let selectors = self.parse_selector_list()?;
        let declarations = self.parse_declaration_block()?;
        Ok(Ruleset::new(selectors, declarations))
    }

    fn parse_selector_list(&mut self) -> PResult<Vec<Selector>> {
        let mut selectors = vec![self.parse_selector()?];
        while self.check(TokenKind::Comma) {
            self.bump();
            self.skip_whitespace();
            selectors.push(self.parse_selector()?);
        }
        Ok(selectors)
    }

    /// One selector. Stops before the `,` or `{` that follows it.
    fn parse_selector(&mut self) -> PResult<Selector> {
        let mut parts = vec![];

        loop {
            let simple = self.parse_simple_selector()?;
            let had_space = self.skip_whitespace();

            let combinator = match self.peek_kind() {
                Some(TokenKind::Plus) => Combinator::Adjacent,
                Some(TokenKind::Greater) => Combinator::Child,
                Some(TokenKind::Tilde) => Combinator::Sibling,
                Some(TokenKind::Comma | TokenKind::LeftBrace) | None => {
                    parts.push((simple, Combinator::None));
                    return Ok(Selector { parts });
                }
                _ if had_space => Combinator::Descendant,
                _ => return Err(self.error_here("unexpected token in selector")),
            };

            if combinator != Combinator::Descendant {
                self.bump();
                self.skip_whitespace();
            }
            parts.push((simple, combinator));
        }
    }

    /// `(ident | '*')? detail*`, at least one of the two.
    fn parse_simple_selector(&mut self) -> PResult<SimpleSelector> {
        let mut simple = SimpleSelector::new();

        match self.peek_kind() {
            Some(TokenKind::Ident) | Some(TokenKind::Star) => {
                simple.element_name = self.next_token().map(|t| t.lexeme);
            }
            _ => {}
        }

        loop {
            let detail = match self.peek_kind() {
                Some(TokenKind::Hash) => {
                    let hash = self.next_token().map(|t| t.lexeme).unwrap_or_default();
                    Detail::Id(hash.trim_start_matches('#').to_string())
                }
                Some(TokenKind::Dot) => {
                    self.bump();
                    let class = self.expect(TokenKind::Ident, "expected class name after '.'")?;
                    Detail::Class(class.lexeme)
                }
                Some(TokenKind::LeftBracket) => self.parse_attrib()?,
                Some(TokenKind::Colon) => self.parse_pseudo()?,
                _ => break,
            };
            simple.details.push(detail);
        }

        if simple.is_empty() {
            return Err(self.error_here("expected selector"));
        }
        Ok(simple)
    }

    /// `[ ident ( ('=' | '~=' | '|=') (ident | string) )? ]`
    fn parse_attrib(&mut self) -> PResult<Detail> {
        self.bump();
        self.skip_whitespace();
        let name = self
            .expect(TokenKind::Ident, "expected attribute name after '['")?
            .lexeme;
        self.skip_whitespace();

        let operator = match self.peek_kind() {
            Some(TokenKind::RightBracket) => {
                self.bump();
                return Ok(Detail::Attrib(name));
            }
            Some(kind @ (TokenKind::Equals | TokenKind::Includes | TokenKind::DashMatch)) => kind,
            _ => return Err(self.error_here("expected ']' or attribute operator")),
        };
        self.bump();
        self.skip_whitespace();

        let value = match self.peek_kind() {
            Some(TokenKind::Ident) => self.next_token().map(|t| t.lexeme),
            Some(TokenKind::String) => self.next_token().map(|t| unquote(&t.lexeme)),
            _ => None,
        };
        let Some(value) = value else {
            return Err(self.error_here("expected attribute value"));
        };
        self.skip_whitespace();
        self.expect(TokenKind::RightBracket, "expected ']' to close attribute selector")?;

        Ok(match operator {
            TokenKind::Includes => Detail::AttribInc(name, value),
            TokenKind::DashMatch => Detail::AttribDM(name, value),
            _ => Detail::AttribEq(name, value),
        })
    }

    /// `':' ident`, `'::' ident` or `':' function argument ')'`
    fn parse_pseudo(&mut self) -> PResult<Detail> {
        self.bump();

        if self.check(TokenKind::Colon) {
            self.bump();
            let name = self.expect(TokenKind::Ident, "expected pseudo-element name after '::'")?;
            return Ok(Detail::PseudoElement(name.lexeme));
        }

        match self.peek_kind() {
            Some(TokenKind::Ident) => {
                let name = self.next_token().map(|t| t.lexeme).unwrap_or_default();
                Ok(Detail::Pseudo(name))
            }
            Some(TokenKind::Function) => {
                let function = self.next_token().map(|t| t.lexeme).unwrap_or_default();
                let name = function.trim_end_matches('(').to_string();
                let argument = self.parse_pseudo_argument(&name)?;
                Ok(Detail::PseudoFunc(name, argument))
            }
            _ => Err(self.error_here("expected pseudo-class name after ':'")),
        }
    }

    /// Source text up to the matching `)`, which is consumed.
    fn parse_pseudo_argument(&mut self, name: &str) -> PResult<String> {
        let mut argument = String::new();
        let mut depth = 0usize;

        loop {
            let Some(token) = self.peek() else {
                return Err(self.error_here(format!("expected ')' to close ':{}('", name)));
            };
            match token.kind {
                TokenKind::RightParen if depth == 0 => {
                    self.bump();
                    break;
                }
                TokenKind::RightParen => {
                    depth -= 1;
                    argument.push(')');
                }
                TokenKind::LeftParen | TokenKind::Function => {
                    depth += 1;
                    argument.push_str(&token.lexeme);
                }
                TokenKind::LeftBrace | TokenKind::RightBrace | TokenKind::Semicolon => {
                    return Err(self.error_here(format!("expected ')' to close ':{}('", name)));
                }
                TokenKind::Whitespace => {
                    if !argument.is_empty() && !argument.ends_with(['(', ' ']) {
                        argument.push(' ');
                    }
                }
                _ => argument.push_str(&token.lexeme),
            }
            self.bump();
        }

        let argument = argument.trim_end().to_string();
        if argument.is_empty() {
            return Err(self.error_here(format!("expected argument for ':{}()'", name)));
        }
        Ok(argument)
    }

    /// `{ declaration* }`
    fn parse_declaration_block(&mut self) -> PResult<Vec<Declaration>> {
        self.expect(TokenKind::LeftBrace, "expected '{'")?;
        let declarations = self.parse_declarations()?;
        self.expect(TokenKind::RightBrace, "expected '}' to close declaration block")?;
        Ok(declarations)
    }

    /// Declarations up to (not including) `}` or end of input.
    fn parse_declarations(&mut self) -> PResult<Vec<Declaration>> {
        let mut declarations = vec![];

        loop {
            self.skip_whitespace();
            match self.peek_kind() {
                None | Some(TokenKind::RightBrace) => break,
                Some(TokenKind::Semicolon) => {
                    self.bump();
                    continue;
                }
                _ => {}
            }

            let start = self.pos;
            match self.parse_declaration() {
                Ok(declaration) => declarations.push(declaration),
                Err(err) => self.recover(err)?,
            }
            self.ensure_progress(start)?;
        }

        Ok(declarations)
    }

    /// `ident : value+ !important? ;?`
    ///
    /// The `;` may only be left out before `}` or end of input.
    fn parse_declaration(&mut self) -> PResult<Declaration> {
        let property = self
            .expect(TokenKind::Ident, "expected property name")?
            .lexeme;
        self.skip_whitespace();
        self.expect(TokenKind::Colon, "expected ':' after property name")?;

        let values = self.parse_values(0)?;
        if values.is_empty() {
            return Err(self.error_here(format!("expected value for '{}'", property)));
        }

        let important = self.check(TokenKind::Important);
        if important {
            self.bump();
        }
        self.skip_whitespace();

        match self.peek_kind() {
            Some(TokenKind::Semicolon) => self.bump(),
            Some(TokenKind::RightBrace) | None => {}
            _ => return Err(self.error_here("expected ';' after declaration")),
        }

        Ok(Declaration {
            property,
            values,
            important,
        })
    }

    /// Values up to `;`, `}`, `!important`, or the `)` closing a function.
    ///
    /// `depth` counts the enclosing functions; `0` is the declaration level.
    fn parse_values(&mut self, depth: usize) -> PResult<Vec<Value>> {
        let in_function = depth > 0;
        let mut values = vec![];

        loop {
            self.skip_whitespace();
            let Some(token) = self.peek() else {
                break;
            };
            let text = token.lexeme.clone();

            let value = match token.kind {
                TokenKind::Number => Value::Number(text),
                TokenKind::Percentage => Value::Percentage(text),
                TokenKind::Length => Value::Length(text),
                TokenKind::Ems => Value::Ems(text),
                TokenKind::Exs => Value::Exs(text),
                TokenKind::Angle => Value::Angle(text),
                TokenKind::Time => Value::Time(text),
                TokenKind::Freq => Value::Freq(text),
                TokenKind::String => Value::StringV(text),
                TokenKind::Ident => Value::Ident(text),
                TokenKind::Uri => Value::Uri(text),
                TokenKind::Hash => Value::HexColour(text),
                TokenKind::Slash => Value::Slash,
                TokenKind::Comma => Value::Comma,
                TokenKind::Plus | TokenKind::Star if in_function => Value::Operator(text),
                TokenKind::Delim if in_function && text == "-" => Value::Operator(text),
                TokenKind::Function if depth >= MAX_DEPTH => {
                    return Err(self.error_here(format!(
                        "functions nested deeper than {} levels",
                        MAX_DEPTH
                    )));
                }
                TokenKind::Function => {
                    self.bump();
                    let name = text.trim_end_matches('(').to_string();
                    let inner = self.parse_values(depth + 1)?;
                    self.expect(
                        TokenKind::RightParen,
                        format!("expected ')' to close '{}('", name),
                    )?;
                    values.push(Value::Function {
                        name,
                        values: inner,
                    });
                    continue;
                }
                TokenKind::RightParen if in_function => break,
                TokenKind::Semicolon | TokenKind::RightBrace | TokenKind::Important => break,
                _ => return Err(self.error_here("unexpected token in value")),
            };

            self.bump();
            values.push(value);
        }

        Ok(values)
    }

    // === Recovery ===

    /// Record `err` and synchronize, unless it is fatal.
    fn recover(&mut self, err: ParseError) -> PResult<()> {
        if err.fatal {
            return Err(err);
        }
        self.record(err);
        self.synchronize();
        Ok(())
    }

    /// Discard tokens until a `;` has been consumed or a `}` is next.
    ///
    /// A `{` met on the way opens a block that is discarded through its
    /// matching `}`, which also ends synchronization.
    fn synchronize(&mut self) {
        let start = self.pos;
        let mut depth = 0usize;

        while let Some(kind) = self.peek_kind() {
            match kind {
                TokenKind::Semicolon if depth == 0 => {
                    self.bump();
                    break;
                }
                TokenKind::RightBrace if depth == 0 => break,
                TokenKind::LeftBrace => depth += 1,
                TokenKind::RightBrace => {
                    depth -= 1;
                    if depth == 0 {
                        self.bump();
                        break;
                    }
                }
                _ => {}
            }
            self.bump();
        }

        let skipped = self.pos - start;
        tracing::debug!(
            target: targets::PARSER,
            skipped,
            resumed_at = self.pos,
            "synchronized after error"
        );
        self.emit(Diagnostic::Recovered {
            skipped,
            resumed_at: self.pos,
        });
    }

    /// Fail fatally if a loop body left the cursor where it started.
    fn ensure_progress(&self, start: usize) -> PResult<()> {
        if self.pos > start || self.pos >= self.tokens.len() {
            return Ok(());
        }
        Err(self
            .error_here("internal error: parser made no progress")
            .into_fatal())
    }

    fn record(&mut self, err: ParseError) {
        tracing::warn!(
            target: targets::PARSER,
            line = err.line,
            column = err.column,
            "{}",
            err.message
        );
        self.emit(Diagnostic::Error(err.clone()));
        self.errors.push(err);
    }

    fn emit(&mut self, diagnostic: Diagnostic) {
        if let Some(sink) = self.diagnostics.as_mut() {
            sink.diagnostic(&diagnostic);
        }
    }

    // === Token access ===

    fn peek(&self) -> Option<&Token> {
        self.tokens.get(self.pos)
    }

    fn peek_kind(&self) -> Option<TokenKind> {
        self.peek().map(|t| t.kind)
    }

    fn check(&self, kind: TokenKind) -> bool {
        self.peek_kind() == Some(kind)
    }

    fn at_keyword(&self, keyword: &str) -> bool {
        self.peek()
            .is_some_and(|t| t.is(TokenKind::AtKeyword) && t.lexeme_eq(keyword))
    }

    fn bump(&mut self) {
        if self.pos < self.tokens.len() {
            self.pos += 1;
        }
    }

    fn next_token(&mut self) -> Option<Token> {
        let token = self.tokens.get(self.pos).cloned();
        self.bump();
        token
    }

    fn expect(&mut self, kind: TokenKind, message: impl Into<String>) -> PResult<Token> {
        if self.check(kind) {
            if let Some(token) = self.next_token() {
                return Ok(token);
            }
        }
        Err(self.error_here(message))
    }

    /// Skip whitespace tokens, returning whether any were skipped.
    fn skip_whitespace(&mut self) -> bool {
        let start = self.pos;
        while self.check(TokenKind::Whitespace) {
            self.bump();
        }
        self.pos > start
    }

    /// An error at the current token, naming what was found there.
    fn error_here(&self, message: impl Into<String>) -> ParseError {
        let message = message.into();
        match self.peek() {
            Some(token) => ParseError::at(format!("{}, found {}", message, token), token),
            None => {
                let (line, column) = self
                    .tokens
                    .last()
                    .map(|t| (t.line, t.column))
                    .unwrap_or((1, 1));
                ParseError::new(format!("{}, found end of input", message), line, column)
            }
        }
    }
}

fn statement_kind(statement: &Statement) -> &'static str {
    match statement {
        Statement::Ruleset(_) => "ruleset",
        Statement::Media(_) => "media",
        Statement::Page(_) => "page",
    }
}

/// Strip the quotes of a string token. Escapes inside are kept as written.
fn unquote(lexeme: &str) -> String {
    let mut chars = lexeme.chars();
    let quote = chars.next();
    let inner = chars.as_str();
    inner
        .strip_suffix(|c: char| Some(c) == quote)
        .unwrap_or(inner)
        .to_string()
}
