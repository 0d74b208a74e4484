//! Declaration parser for function directives
//!
//! Grammar, over the token stream of the text following the marker:
//!
//! ```text
//! decl   := type IDENT '(' params ')' rest*
//! params := ε | 'void' | param (',' param)*
//! param  := type IDENT
//! type   := ('const' | IDENT | '::' | '*' | '&')+
//! ```
//!
//! `(`, `)` and `,` only separate. Whatever follows the closing parenthesis
//! (`;`, `{`, an inline body) is ignored so the same directive can sit on a
//! prototype or on a definition.

use crate::diagnostics::DirectiveError;
use crate::ir::{Declaration, Param, ParamType, ReturnType, TypeExpr};
use crate::parse::token::{tokenize, Token, TokenKind};

/// Parse the text following a function marker into a declaration.
///
/// Parameter types are checked before the return type, so a line with both
/// kinds of problem reports `UnknownParameterType`.
pub fn parse_declaration(body: &str) -> Result<Declaration, DirectiveError> {
    let tokens = tokenize(body);

    let open = tokens
        .iter()
        .position(|t| t.kind == TokenKind::LParen)
        .ok_or_else(|| malformed("missing `(` after function name"))?;

    let (name_tok, ret_tokens) = tokens[..open]
        .split_last()
        .ok_or_else(|| malformed("missing return type and function name"))?;
    if !is_identifier(name_tok) {
        return Err(malformed(format!(
            "expected function name before `(`, found `{}`",
            name_tok.lexeme
        )));
    }
    if ret_tokens.is_empty() {
        return Err(malformed(format!(
            "missing return type for `{}`",
            name_tok.lexeme
        )));
    }
    let ret_expr = parse_type_expr(ret_tokens)?;

    let close = tokens[open + 1..]
        .iter()
        .position(|t| t.kind == TokenKind::RParen)
        .map(|i| open + 1 + i)
        .ok_or_else(|| malformed(format!("missing `)` in `{}`", name_tok.lexeme)))?;

    let params = parse_params(&tokens[open + 1..close])?;

    let return_type = ReturnType::resolve(&ret_expr)
        .ok_or_else(|| DirectiveError::UnknownReturnType(ret_expr.canonical()))?;

    Ok(Declaration {
        return_type,
        name: name_tok.lexeme.to_string(),
        params,
    })
}

fn parse_params(tokens: &[Token<'_>]) -> Result<Vec<Param>, DirectiveError> {
    if tokens.is_empty() || (tokens.len() == 1 && tokens[0].is_ident("void")) {
        return Ok(Vec::new());
    }

    let mut params = Vec::new();
    for (index, segment) in tokens.split(|t| t.kind == TokenKind::Comma).enumerate() {
        let position = index + 1;
        let (name_tok, ty_tokens) = segment
            .split_last()
            .ok_or_else(|| malformed(format!("parameter {} is empty", position)))?;
        if !is_identifier(name_tok) || ty_tokens.is_empty() {
            return Err(malformed(format!(
                "parameter {} needs a type and a name",
                position
            )));
        }

        let expr = parse_type_expr(ty_tokens)?;
        let ty = ParamType::resolve(&expr).ok_or_else(|| DirectiveError::UnknownParameterType {
            ty: expr.canonical(),
            param: name_tok.lexeme.to_string(),
        })?;
        params.push(Param::new(ty, name_tok.lexeme));
    }

    Ok(params)
}

/// Parse a type expression from the tokens that precede a name.
pub fn parse_type_expr(tokens: &[Token<'_>]) -> Result<TypeExpr, DirectiveError> {
    let mut expr = TypeExpr::default();
    let mut prev: Option<TokenKind> = None;

    for token in tokens {
        match token.kind {
            TokenKind::Const => expr.is_const = true,
            TokenKind::Ident => {
                if !expr.indirection.is_empty() {
                    return Err(malformed(format!(
                        "unexpected `{}` after `{}`",
                        token.lexeme, expr.indirection
                    )));
                }
                match expr.base.last_mut() {
                    Some(word) if prev == Some(TokenKind::PathSep) => word.push_str(token.lexeme),
                    _ => expr.base.push(token.lexeme.to_string()),
                }
            }
            TokenKind::PathSep => match expr.base.last_mut() {
                Some(word) if prev == Some(TokenKind::Ident) => word.push_str("::"),
                _ => expr.base.push("::".to_string()),
            },
            TokenKind::Star => expr.indirection.push('*'),
            TokenKind::Amp => expr.indirection.push('&'),
            _ => {
                return Err(malformed(format!(
                    "unexpected `{}` in type",
                    token.lexeme
                )))
            }
        }
        prev = Some(token.kind);
    }

    if expr.base.is_empty() {
        return Err(malformed("missing type name"));
    }

    Ok(expr)
}

/// A C identifier: an `Ident` token that does not start with a digit.
fn is_identifier(token: &Token<'_>) -> bool {
    token.kind == TokenKind::Ident
        && token
            .lexeme
            .chars()
            .next()
            .is_some_and(|c| c.is_ascii_alphabetic() || c == '_')
}

fn malformed(reason: impl Into<String>) -> DirectiveError {
    DirectiveError::MalformedDeclaration(reason.into())
}
