/// Parse `source` into a validated [`File`].
///
/// This is the main public entrypoint for parsing.
///
/// ## Parameters
/// - `source`: the whole document.
/// - `config`: grammar, data-only mode and `${CURDIR}` replacement.
/// - `source_path`: recorded on the file as its default save target.
#[tracing::instrument(skip_all, fields(len = source.len(), kind = ?config.kind, data_only = config.data_only))]
pub fn parse(source: &str, config: &ParseConfig, source_path: Option<PathBuf>) -> File {
    parse_statements(lexer::lex_statements(source, config), config.kind, source_path)
}

/// Build a validated [`File`] from already lexed statements.
pub fn parse_statements<I>(statements: I, kind: FileKind, source_path: Option<PathBuf>) -> File
where
    I: IntoIterator<Item = Vec<Token>>,
{
    let mut parser = Parser::new();
    for tokens in statements {
        parser.push(Statement::from_tokens(tokens));
    }
    let file = File {
        source: source_path,
        kind,
        root: parser.finish(),
    };
    validation::validate_model(file)
}

/// Build a validated [`File`] from a flat token stream where `EOS` tokens end statements.
///
/// ## Notes
/// - `EOS` tokens are dropped; a trailing statement without `EOS` is still parsed.
pub fn parse_tokens<I>(tokens: I, kind: FileKind, source_path: Option<PathBuf>) -> File
where
    I: IntoIterator<Item = Token>,
{
    let mut statements = Vec::new();
    let mut current = Vec::new();
    for token in tokens {
        if token.kind != TokenKind::Eos {
            current.push(token);
        } else if !current.is_empty() {
            statements.push(std::mem::take(&mut current));
        }
    }
    if !current.is_empty() {
        statements.push(current);
    }
    parse_statements(statements, kind, source_path)
}
