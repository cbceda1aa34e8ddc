//! Model shape tests: exact tokens, positions, nesting and errors for every construct.

use std::fs;
use std::path::PathBuf;

use robotparse::{
    Block, BlockKind, File, FileKind, ModelError, Node, Source, Statement, StatementKind, Token, TokenKind as K,
    Transformer, get_model, get_resource_model, save,
};

const DATA: &str = "
*** Test Cases ***

Example
  # Comment
    Keyword    arg
    ...\targh

\t\t
*** Keywords ***
# Comment    continues
Keyword
    [Arguments]    ${arg1}    ${arg2}
    Log    Got ${arg1} and ${arg}!
    RETURN    x
";

// --- helpers ---

fn tok(kind: K, value: &str, line: usize, column: usize) -> Token {
    Token::new(kind, value, line, column)
}

fn stmt(tokens: Vec<Token>) -> Statement {
    Statement::from_tokens(tokens)
}

fn block(kind: BlockKind, header: Vec<Token>) -> Block {
    Block::new(kind, Some(stmt(header)))
}

fn data_only(source: &str) -> File {
    get_model(source, true, None).expect("text sources never fail")
}

/// `sections[0].body[0].body`
fn first_body(file: &File) -> &[Node] {
    let section = file.section(0).expect("section");
    &section.body[0].as_block().expect("test or keyword").body
}

fn first_node(file: &File) -> &Block {
    first_body(file)[0].as_block().expect("block")
}

fn temp_path(name: &str) -> PathBuf {
    std::env::temp_dir().join(format!("robotparse_{}_{name}", std::process::id()))
}

fn expected_data(source: Option<PathBuf>) -> File {
    File::new(
        source,
        FileKind::Suite,
        vec![
            Block::new(BlockKind::CommentSection, None)
                .with_body(vec![stmt(vec![tok(K::Eol, "\n", 1, 0)]).into()])
                .into(),
            block(
                BlockKind::TestCaseSection,
                vec![tok(K::TestCaseHeader, "*** Test Cases ***", 2, 0), tok(K::Eol, "\n", 2, 18)],
            )
            .with_body(vec![
                stmt(vec![tok(K::Eol, "\n", 3, 0)]).into(),
                block(
                    BlockKind::TestCase,
                    vec![tok(K::TestCaseName, "Example", 4, 0), tok(K::Eol, "\n", 4, 7)],
                )
                .with_body(vec![
                    stmt(vec![
                        tok(K::Separator, "  ", 5, 0),
                        tok(K::Comment, "# Comment", 5, 2),
                        tok(K::Eol, "\n", 5, 11),
                    ])
                    .into(),
                    stmt(vec![
                        tok(K::Separator, "    ", 6, 0),
                        tok(K::Keyword, "Keyword", 6, 4),
                        tok(K::Separator, "    ", 6, 11),
                        tok(K::Argument, "arg", 6, 15),
                        tok(K::Eol, "\n", 6, 18),
                        tok(K::Separator, "    ", 7, 0),
                        tok(K::Continuation, "...", 7, 4),
                        tok(K::Separator, "\t", 7, 7),
                        tok(K::Argument, "argh", 7, 8),
                        tok(K::Eol, "\n", 7, 12),
                    ])
                    .into(),
                    stmt(vec![tok(K::Eol, "\n", 8, 0)]).into(),
                    stmt(vec![tok(K::Eol, "\t\t\n", 9, 0)]).into(),
                ])
                .into(),
            ])
            .into(),
            block(
                BlockKind::KeywordSection,
                vec![tok(K::KeywordHeader, "*** Keywords ***", 10, 0), tok(K::Eol, "\n", 10, 16)],
            )
            .with_body(vec![
                stmt(vec![
                    tok(K::Comment, "# Comment", 11, 0),
                    tok(K::Separator, "    ", 11, 9),
                    tok(K::Comment, "continues", 11, 13),
                    tok(K::Eol, "\n", 11, 22),
                ])
                .into(),
                block(
                    BlockKind::Keyword,
                    vec![tok(K::KeywordName, "Keyword", 12, 0), tok(K::Eol, "\n", 12, 7)],
                )
                .with_body(vec![
                    stmt(vec![
                        tok(K::Separator, "    ", 13, 0),
                        tok(K::Arguments, "[Arguments]", 13, 4),
                        tok(K::Separator, "    ", 13, 15),
                        tok(K::Argument, "${arg1}", 13, 19),
                        tok(K::Separator, "    ", 13, 26),
                        tok(K::Argument, "${arg2}", 13, 30),
                        tok(K::Eol, "\n", 13, 37),
                    ])
                    .into(),
                    stmt(vec![
                        tok(K::Separator, "    ", 14, 0),
                        tok(K::Keyword, "Log", 14, 4),
                        tok(K::Separator, "    ", 14, 7),
                        tok(K::Argument, "Got ${arg1} and ${arg}!", 14, 11),
                        tok(K::Eol, "\n", 14, 34),
                    ])
                    .into(),
                    stmt(vec![
                        tok(K::Separator, "    ", 15, 0),
                        tok(K::ReturnStatement, "RETURN", 15, 4),
                        tok(K::Separator, "    ", 15, 10),
                        tok(K::Argument, "x", 15, 14),
                        tok(K::Eol, "\n", 15, 15),
                    ])
                    .into(),
                ])
                .into(),
            ])
            .into(),
        ],
    )
}

// ============================================================================
// Loading and saving
// ============================================================================

#[test]
fn test_model_from_text() {
    let file = get_model(DATA, false, None).unwrap();
    assert_eq!(file, expected_data(None));
    let kinds: Vec<StatementKind> = first_body(&file)
        .iter()
        .filter_map(Node::as_statement)
        .map(Statement::kind)
        .collect();
    assert_eq!(
        kinds,
        vec![
            StatementKind::Comment,
            StatementKind::KeywordCall,
            StatementKind::EmptyLine,
            StatementKind::EmptyLine
        ]
    );
}

#[test]
fn test_model_from_path() {
    let path = temp_path("from_path.robot");
    fs::write(&path, DATA).unwrap();
    let file = get_model(&path, false, None).unwrap();
    assert_eq!(file, expected_data(Some(path.clone())));
    fs::remove_file(&path).unwrap();
}

#[test]
fn test_model_from_reader() {
    let path = temp_path("from_reader.robot");
    fs::write(&path, DATA).unwrap();
    let mut reader = fs::File::open(&path).unwrap();
    let file = get_model(Source::Reader(&mut reader), false, None).unwrap();
    assert_eq!(file, expected_data(None));
    fs::remove_file(&path).unwrap();
}

#[test]
fn test_model_from_path_with_bom() {
    let path = temp_path("bom.robot");
    fs::write(&path, format!("\u{feff}{DATA}")).unwrap();
    let file = get_model(&path, false, None).unwrap();
    assert_eq!(file, expected_data(Some(path.clone())));
    fs::remove_file(&path).unwrap();
}

#[test]
fn test_save_to_original_path() {
    let path = temp_path("save_original.robot");
    fs::write(&path, DATA).unwrap();
    let file = get_model(&path, false, None).unwrap();
    fs::remove_file(&path).unwrap();
    assert_eq!(save(&file, None).unwrap(), path);
    assert_eq!(get_model(&path, false, None).unwrap(), expected_data(Some(path.clone())));
    fs::remove_file(&path).unwrap();
}

#[test]
fn test_save_to_different_path() {
    let path = temp_path("save_source.robot");
    let different = temp_path("save_different.robot");
    fs::write(&path, DATA).unwrap();
    let file = get_model(&path, false, None).unwrap();
    save(&file, Some(&different)).unwrap();
    assert_eq!(
        get_model(&different, false, None).unwrap(),
        expected_data(Some(different.clone()))
    );
    assert_eq!(fs::read_to_string(&different).unwrap(), DATA);
    fs::remove_file(&path).unwrap();
    fs::remove_file(&different).unwrap();
}

#[test]
fn test_save_without_path_source_fails() {
    let message = "Saving model requires explicit output when original source is not path.";
    let err = save(&get_model(DATA, false, None).unwrap(), None).unwrap_err();
    assert!(matches!(err, ModelError::SaveTargetRequired));
    assert_eq!(err.to_string(), message);

    let mut reader = DATA.as_bytes();
    let file = get_model(Source::Reader(&mut reader), false, None).unwrap();
    assert_eq!(save(&file, None).unwrap_err().to_string(), message);
}

#[test]
fn test_save_to_missing_directory_fails() {
    let file = get_model(DATA, false, None).unwrap();
    let target = temp_path("no_such_dir").join("x.robot");
    let err = save(&file, Some(&target)).unwrap_err();
    assert!(matches!(err, ModelError::Write { ref path, .. } if *path == target));
}

#[test]
fn test_curdir_is_replaced() {
    let file = get_model("*** Test Cases ***\nT\n    Log    ${CURDIR}/x\n", true, Some("/data")).unwrap();
    let call = first_body(&file)[0].as_statement().unwrap();
    assert_eq!(call.args(), vec!["/data/x"]);
}

// ============================================================================
// FOR
// ============================================================================

#[test]
fn test_for_valid() {
    let file = data_only(
        "*** Test Cases ***\nExample\n    FOR    ${x}    IN    a    b    c\n        Log    ${x}\n    END\n",
    );
    let expected = block(
        BlockKind::For,
        vec![
            tok(K::For, "FOR", 3, 4),
            tok(K::Variable, "${x}", 3, 11),
            tok(K::ForSeparator, "IN", 3, 19),
            tok(K::Argument, "a", 3, 25),
            tok(K::Argument, "b", 3, 30),
            tok(K::Argument, "c", 3, 35),
        ],
    )
    .with_body(vec![
        stmt(vec![tok(K::Keyword, "Log", 4, 8), tok(K::Argument, "${x}", 4, 15)]).into(),
    ])
    .with_end(stmt(vec![tok(K::End, "END", 5, 4)]));
    assert_eq!(first_node(&file), &expected);
    let header = expected.header.as_ref().unwrap();
    assert_eq!(header.variables(), vec!["${x}"]);
    assert_eq!(header.values(), vec!["a", "b", "c"]);
    assert_eq!(header.flavor().as_deref(), Some("IN"));
}

#[test]
fn test_for_nested() {
    let file = data_only(
        "*** Test Cases ***\nExample\n    FOR    ${x}    IN    1    2\n        FOR    ${y}    IN RANGE    ${x}\n            Log    ${y}\n        END\n    END\n",
    );
    let inner = block(
        BlockKind::For,
        vec![
            tok(K::For, "FOR", 4, 8),
            tok(K::Variable, "${y}", 4, 15),
            tok(K::ForSeparator, "IN RANGE", 4, 23),
            tok(K::Argument, "${x}", 4, 35),
        ],
    )
    .with_body(vec![
        stmt(vec![tok(K::Keyword, "Log", 5, 12), tok(K::Argument, "${y}", 5, 19)]).into(),
    ])
    .with_end(stmt(vec![tok(K::End, "END", 6, 8)]));
    let expected = block(
        BlockKind::For,
        vec![
            tok(K::For, "FOR", 3, 4),
            tok(K::Variable, "${x}", 3, 11),
            tok(K::ForSeparator, "IN", 3, 19),
            tok(K::Argument, "1", 3, 25),
            tok(K::Argument, "2", 3, 30),
        ],
    )
    .with_body(vec![inner.into()])
    .with_end(stmt(vec![tok(K::End, "END", 7, 4)]));
    assert_eq!(first_node(&file), &expected);
}

#[test]
fn test_for_invalid() {
    let file = data_only("*** Test Cases ***\nExample\n    FOR\n    END    ooops\n\n    FOR    wrong    IN\n");
    let body = first_body(&file);
    assert_eq!(body.len(), 2);
    let expected1 = block(BlockKind::For, vec![tok(K::For, "FOR", 3, 4)])
        .with_end(stmt(vec![tok(K::End, "END", 4, 4), tok(K::Argument, "ooops", 4, 11)]))
        .with_errors(vec!["FOR loop has empty body.".to_string()]);
    let expected2 = block(
        BlockKind::For,
        vec![
            tok(K::For, "FOR", 6, 4),
            tok(K::Variable, "wrong", 6, 11),
            tok(K::ForSeparator, "IN", 6, 20),
        ],
    )
    .with_errors(vec![
        "FOR loop has empty body.".to_string(),
        "FOR loop has no closing END.".to_string(),
    ]);
    assert_eq!(body[0].as_block().unwrap(), &expected1);
    assert_eq!(body[1].as_block().unwrap(), &expected2);
    assert_eq!(
        expected1.collect_errors(),
        vec![
            "FOR loop has no loop variables.",
            "FOR loop has no 'IN' or other valid separator.",
            "FOR loop has empty body.",
            "END does not accept arguments, got 'ooops'.",
        ]
    );
    assert_eq!(
        expected2.collect_errors(),
        vec![
            "FOR loop has invalid loop variable 'wrong'.",
            "FOR loop has no loop values.",
            "FOR loop has empty body.",
            "FOR loop has no closing END.",
        ]
    );
}

// ============================================================================
// IF
// ============================================================================

#[test]
fn test_if() {
    let file = data_only("*** Test Cases ***\nExample\n    IF    True\n        Keyword\n        Another    argument\n    END\n    ");
    let expected = block(BlockKind::If, vec![tok(K::If, "IF", 3, 4), tok(K::Argument, "True", 3, 10)])
        .with_body(vec![
            stmt(vec![tok(K::Keyword, "Keyword", 4, 8)]).into(),
            stmt(vec![tok(K::Keyword, "Another", 5, 8), tok(K::Argument, "argument", 5, 19)]).into(),
        ])
        .with_end(stmt(vec![tok(K::End, "END", 6, 4)]));
    assert_eq!(first_node(&file), &expected);
}

#[test]
fn test_if_else_if_else() {
    let file = data_only(
        "*** Test Cases ***\nExample\n    IF    True\n        K1\n    ELSE IF    False\n        K2\n    ELSE\n        K3\n    END\n    ",
    );
    let orelse = block(BlockKind::If, vec![tok(K::Else, "ELSE", 7, 4)])
        .with_body(vec![stmt(vec![tok(K::Keyword, "K3", 8, 8)]).into()]);
    let else_if = block(
        BlockKind::If,
        vec![tok(K::ElseIf, "ELSE IF", 5, 4), tok(K::Argument, "False", 5, 15)],
    )
    .with_body(vec![stmt(vec![tok(K::Keyword, "K2", 6, 8)]).into()])
    .with_branch(orelse);
    let expected = block(BlockKind::If, vec![tok(K::If, "IF", 3, 4), tok(K::Argument, "True", 3, 10)])
        .with_body(vec![stmt(vec![tok(K::Keyword, "K1", 4, 8)]).into()])
        .with_branch(else_if)
        .with_end(stmt(vec![tok(K::End, "END", 9, 4)]));
    let node = first_node(&file);
    assert_eq!(node, &expected);
    assert_eq!(node.branches().count(), 3);
    assert!(node.orelse().and_then(Block::orelse).and_then(Block::orelse).is_none());
}

#[test]
fn test_if_nested() {
    let file = data_only(
        "*** Test Cases ***\nExample\n    IF    ${x}\n        Log    ${x}\n        IF    ${y}\n            Log    ${y}\n        ELSE\n            Log    ${z}\n        END\n    END\n",
    );
    let inner = block(BlockKind::If, vec![tok(K::If, "IF", 5, 8), tok(K::Argument, "${y}", 5, 14)])
        .with_body(vec![
            stmt(vec![tok(K::Keyword, "Log", 6, 12), tok(K::Argument, "${y}", 6, 19)]).into(),
        ])
        .with_branch(
            block(BlockKind::If, vec![tok(K::Else, "ELSE", 7, 8)]).with_body(vec![
                stmt(vec![tok(K::Keyword, "Log", 8, 12), tok(K::Argument, "${z}", 8, 19)]).into(),
            ]),
        )
        .with_end(stmt(vec![tok(K::End, "END", 9, 8)]));
    let expected = block(BlockKind::If, vec![tok(K::If, "IF", 3, 4), tok(K::Argument, "${x}", 3, 10)])
        .with_body(vec![
            stmt(vec![tok(K::Keyword, "Log", 4, 8), tok(K::Argument, "${x}", 4, 15)]).into(),
            inner.into(),
        ])
        .with_end(stmt(vec![tok(K::End, "END", 10, 4)]));
    assert_eq!(first_node(&file), &expected);
}

#[test]
fn test_if_invalid() {
    let file = data_only("*** Test Cases ***\nExample\n    IF\n    ELSE    ooops\n    ELSE IF\n    END    ooops\n\n    IF\n");
    let body = first_body(&file);
    let else_if = block(BlockKind::If, vec![tok(K::ElseIf, "ELSE IF", 5, 4)])
        .with_errors(vec!["ELSE IF branch cannot be empty.".to_string()]);
    let orelse = block(BlockKind::If, vec![tok(K::Else, "ELSE", 4, 4), tok(K::Argument, "ooops", 4, 12)])
        .with_branch(else_if)
        .with_errors(vec!["ELSE branch cannot be empty.".to_string()]);
    let expected1 = block(BlockKind::If, vec![tok(K::If, "IF", 3, 4)])
        .with_branch(orelse)
        .with_end(stmt(vec![tok(K::End, "END", 6, 4), tok(K::Argument, "ooops", 6, 11)]))
        .with_errors(vec!["IF branch cannot be empty.".to_string(), "ELSE IF after ELSE.".to_string()]);
    let expected2 = block(BlockKind::If, vec![tok(K::If, "IF", 8, 4)])
        .with_errors(vec!["IF branch cannot be empty.".to_string(), "IF has no closing END.".to_string()]);
    assert_eq!(body[0].as_block().unwrap(), &expected1);
    assert_eq!(body[1].as_block().unwrap(), &expected2);
    assert_eq!(
        expected1.collect_errors(),
        vec![
            "IF must have a condition.",
            "IF branch cannot be empty.",
            "ELSE IF after ELSE.",
            "ELSE does not accept arguments, got 'ooops'.",
            "ELSE branch cannot be empty.",
            "ELSE IF must have a condition.",
            "ELSE IF branch cannot be empty.",
            "END does not accept arguments, got 'ooops'.",
        ]
    );
}

// ============================================================================
// Inline IF
// ============================================================================

#[test]
fn test_inline_if() {
    let file = data_only("*** Test Cases ***\nExample\n    IF    True    Keyword\n");
    let expected = block(
        BlockKind::If,
        vec![tok(K::InlineIf, "IF", 3, 4), tok(K::Argument, "True", 3, 10)],
    )
    .with_body(vec![stmt(vec![tok(K::Keyword, "Keyword", 3, 18)]).into()])
    .with_end(stmt(vec![tok(K::End, "", 3, 25)]));
    let node = first_node(&file);
    assert_eq!(node, &expected);
    assert!(node.is_inline_if());
}

#[test]
fn test_inline_if_else_if_else() {
    let file = data_only("*** Test Cases ***\nExample\n    IF    True    K1    ELSE IF    False    K2    ELSE    K3\n");
    let expected = block(
        BlockKind::If,
        vec![tok(K::InlineIf, "IF", 3, 4), tok(K::Argument, "True", 3, 10)],
    )
    .with_body(vec![stmt(vec![tok(K::Keyword, "K1", 3, 18)]).into()])
    .with_branch(
        block(
            BlockKind::If,
            vec![tok(K::ElseIf, "ELSE IF", 3, 24), tok(K::Argument, "False", 3, 35)],
        )
        .with_body(vec![stmt(vec![tok(K::Keyword, "K2", 3, 44)]).into()])
        .with_branch(
            block(BlockKind::If, vec![tok(K::Else, "ELSE", 3, 50)])
                .with_body(vec![stmt(vec![tok(K::Keyword, "K3", 3, 58)]).into()]),
        ),
    )
    .with_end(stmt(vec![tok(K::End, "", 3, 60)]));
    assert_eq!(first_node(&file), &expected);
}

#[test]
fn test_inline_if_nested() {
    let file = data_only("*** Test Cases ***\nExample\n    IF    ${x}    IF    ${y}    K1    ELSE    IF    ${z}    K2\n");
    let nested = "Inline IF cannot be nested.".to_string();
    let innermost = block(
        BlockKind::If,
        vec![tok(K::InlineIf, "IF", 3, 46), tok(K::Argument, "${z}", 3, 52)],
    )
    .with_body(vec![stmt(vec![tok(K::Keyword, "K2", 3, 60)]).into()])
    .with_end(stmt(vec![tok(K::End, "", 3, 62)]));
    let middle = block(
        BlockKind::If,
        vec![tok(K::InlineIf, "IF", 3, 18), tok(K::Argument, "${y}", 3, 24)],
    )
    .with_body(vec![stmt(vec![tok(K::Keyword, "K1", 3, 32)]).into()])
    .with_branch(block(BlockKind::If, vec![tok(K::Else, "ELSE", 3, 38)]).with_body(vec![innermost.into()]))
    .with_errors(vec![nested.clone()]);
    let expected = block(
        BlockKind::If,
        vec![tok(K::InlineIf, "IF", 3, 4), tok(K::Argument, "${x}", 3, 10)],
    )
    .with_body(vec![middle.into()])
    .with_errors(vec![nested]);
    assert_eq!(first_node(&file), &expected);
}

#[test]
fn test_inline_if_assign() {
    let file = data_only("*** Test Cases ***\nExample\n    ${x} =    IF    True    K1    ELSE    K2\n");
    let expected = block(
        BlockKind::If,
        vec![
            tok(K::Assign, "${x} =", 3, 4),
            tok(K::InlineIf, "IF", 3, 14),
            tok(K::Argument, "True", 3, 20),
        ],
    )
    .with_body(vec![stmt(vec![tok(K::Keyword, "K1", 3, 28)]).into()])
    .with_branch(
        block(BlockKind::If, vec![tok(K::Else, "ELSE", 3, 34)])
            .with_body(vec![stmt(vec![tok(K::Keyword, "K2", 3, 42)]).into()]),
    )
    .with_end(stmt(vec![tok(K::End, "", 3, 44)]));
    let node = first_node(&file);
    assert_eq!(node, &expected);
    assert_eq!(node.assign(), vec!["${x} ="]);
}

#[test]
fn test_inline_if_invalid() {
    let file = data_only("*** Test Cases ***\nExample\n    ${x} =    ${y}    IF    ELSE    ooops    ELSE IF\n");
    let expected = block(
        BlockKind::If,
        vec![
            tok(K::Assign, "${x} =", 3, 4),
            tok(K::Assign, "${y}", 3, 14),
            tok(K::InlineIf, "IF", 3, 22),
            tok(K::Argument, "ELSE", 3, 28),
        ],
    )
    .with_body(vec![stmt(vec![tok(K::Keyword, "ooops", 3, 36)]).into()])
    .with_branch(
        block(BlockKind::If, vec![tok(K::ElseIf, "ELSE IF", 3, 45)])
            .with_errors(vec!["ELSE IF branch cannot be empty.".to_string()]),
    )
    .with_end(stmt(vec![tok(K::End, "", 3, 52)]));
    let node = first_node(&file);
    assert_eq!(node, &expected);
    assert_eq!(
        node.collect_errors(),
        vec!["ELSE IF must have a condition.", "ELSE IF branch cannot be empty."]
    );
}

// ============================================================================
// TRY
// ============================================================================

/// Keeps only data tokens in every statement.
struct RemoveNonDataTokens;

impl Transformer for RemoveNonDataTokens {
    fn visit_statement(&mut self, statement: Statement) -> Option<Node> {
        let kind = statement.kind();
        let tokens = statement.into_tokens().into_iter().filter(Token::is_data).collect();
        Some(Statement::with_kind(kind, tokens).into())
    }
}

#[test]
fn test_try_except_else_finally() {
    let source = "*** Test Cases ***\nExample\n    TRY\n        Fail    Oh no!\n    EXCEPT   does not match\n        No operation\n    EXCEPT    AS    ${exp}\n        Log    Catch\n    ELSE\n        No operation\n    FINALLY\n        Log    finally here!\n    END\n        ";
    let finally = block(BlockKind::Try, vec![tok(K::Finally, "FINALLY", 11, 4)]).with_body(vec![
        stmt(vec![tok(K::Keyword, "Log", 12, 8), tok(K::Argument, "finally here!", 12, 15)]).into(),
    ]);
    let orelse = block(BlockKind::Try, vec![tok(K::Else, "ELSE", 9, 4)])
        .with_body(vec![stmt(vec![tok(K::Keyword, "No operation", 10, 8)]).into()])
        .with_branch(finally);
    let except_as = block(
        BlockKind::Try,
        vec![tok(K::Except, "EXCEPT", 7, 4), tok(K::As, "AS", 7, 14), tok(K::Variable, "${exp}", 7, 20)],
    )
    .with_body(vec![
        stmt(vec![tok(K::Keyword, "Log", 8, 8), tok(K::Argument, "Catch", 8, 15)]).into(),
    ])
    .with_branch(orelse);
    let except = block(
        BlockKind::Try,
        vec![tok(K::Except, "EXCEPT", 5, 4), tok(K::Argument, "does not match", 5, 13)],
    )
    .with_body(vec![stmt(vec![tok(K::Keyword, "No operation", 6, 8)]).into()])
    .with_branch(except_as);
    let expected = block(BlockKind::Try, vec![tok(K::Try, "TRY", 3, 4)])
        .with_body(vec![
            stmt(vec![tok(K::Keyword, "Fail", 4, 8), tok(K::Argument, "Oh no!", 4, 16)]).into(),
        ])
        .with_branch(except)
        .with_end(stmt(vec![tok(K::End, "END", 13, 4)]));

    assert_eq!(first_node(&data_only(source)), &expected);

    let file = RemoveNonDataTokens.visit_model(get_model(source, false, None).unwrap());
    let node = first_node(&file);
    assert_eq!(node, &expected);
    let handlers: Vec<Option<StatementKind>> = node.branches().map(Block::header_kind).collect();
    assert_eq!(
        handlers,
        vec![
            Some(StatementKind::TryHeader),
            Some(StatementKind::ExceptHeader),
            Some(StatementKind::ExceptHeader),
            Some(StatementKind::ElseHeader),
            Some(StatementKind::FinallyHeader),
        ]
    );
    let except_as = node.next().and_then(Block::next).unwrap();
    assert_eq!(except_as.header.as_ref().and_then(Statement::variable), Some("${exp}"));
}

// ============================================================================
// Variables and keywords
// ============================================================================

#[test]
fn test_variables_valid() {
    let file = data_only("*** Variables ***\n${x}      value\n@{y}=     two    values\n&{z} =    one=item\n");
    let expected = block(
        BlockKind::VariableSection,
        vec![tok(K::VariableHeader, "*** Variables ***", 1, 0)],
    )
    .with_body(vec![
        stmt(vec![tok(K::Variable, "${x}", 2, 0), tok(K::Argument, "value", 2, 10)]).into(),
        stmt(vec![
            tok(K::Variable, "@{y}=", 3, 0),
            tok(K::Argument, "two", 3, 10),
            tok(K::Argument, "values", 3, 17),
        ])
        .into(),
        stmt(vec![tok(K::Variable, "&{z} =", 4, 0), tok(K::Argument, "one=item", 4, 10)]).into(),
    ]);
    let section = file.section(0).unwrap();
    assert_eq!(section, &expected);
    assert!(file.collect_errors().is_empty());
}

#[test]
fn test_variables_invalid() {
    let file = data_only(
        "*** Variables ***\nOoops     I did it again\n${}       invalid\n${x}==    invalid\n${not     closed\n          invalid\n&{dict}   invalid    ${invalid}\n",
    );
    let section = file.section(0).unwrap();
    let rows: Vec<(Vec<&str>, Vec<String>)> = section
        .body
        .iter()
        .filter_map(Node::as_statement)
        .map(|statement| {
            let values = statement.data_tokens().map(|token| token.value.as_str()).collect();
            (values, statement.errors())
        })
        .collect();
    let dict_item = |item: &str| {
        format!(
            "Invalid dictionary variable item '{item}'. Items must use 'name=value' syntax or be dictionary variables themselves."
        )
    };
    assert_eq!(
        rows,
        vec![
            (vec!["Ooops", "I did it again"], vec!["Invalid variable name 'Ooops'.".to_string()]),
            (vec!["${}", "invalid"], vec!["Invalid variable name '${}'.".to_string()]),
            (vec!["${x}==", "invalid"], vec!["Invalid variable name '${x}=='.".to_string()]),
            (vec!["${not", "closed"], vec!["Invalid variable name '${not'.".to_string()]),
            (vec!["", "invalid"], vec!["Invalid variable name ''.".to_string()]),
            (
                vec!["&{dict}", "invalid", "${invalid}"],
                vec![dict_item("invalid"), dict_item("${invalid}")]
            ),
        ]
    );
    let empty_name = section.body[5].as_statement().unwrap();
    assert_eq!(empty_name.tokens()[0], tok(K::Variable, "", 6, 0));
}

#[test]
fn test_keyword_invalid_arg_spec() {
    let file = data_only(
        "*** Keywords ***\nInvalid\n    [Arguments]    ooops    ${optional}=default    ${required}\n    ...    @{too}    @{many}    &{notlast}    ${x}\n",
    );
    let expected = block(BlockKind::KeywordSection, vec![tok(K::KeywordHeader, "*** Keywords ***", 1, 0)])
        .with_body(vec![
            block(BlockKind::Keyword, vec![tok(K::KeywordName, "Invalid", 2, 0)])
                .with_body(vec![
                    stmt(vec![
                        tok(K::Arguments, "[Arguments]", 3, 4),
                        tok(K::Argument, "ooops", 3, 19),
                        tok(K::Argument, "${optional}=default", 3, 28),
                        tok(K::Argument, "${required}", 3, 51),
                        tok(K::Argument, "@{too}", 4, 11),
                        tok(K::Argument, "@{many}", 4, 21),
                        tok(K::Argument, "&{notlast}", 4, 32),
                        tok(K::Argument, "${x}", 4, 46),
                    ])
                    .into(),
                ])
                .into(),
        ]);
    assert_eq!(file.section(0).unwrap(), &expected);
    assert_eq!(
        file.collect_errors(),
        vec![
            "Invalid argument syntax 'ooops'.",
            "Non-default argument after default arguments.",
            "Cannot have multiple varargs.",
            "Only last argument can be kwargs.",
        ]
    );
}

#[test]
fn test_keyword_arg_spec_errors_follow_rule_order() {
    let file = data_only(
        "*** Keywords ***\nKwargs First\n    [Arguments]    &{d}    ooops\nDefault First\n    [Arguments]    ${a}=1    &{d}    ${b}\n",
    );
    assert_eq!(
        file.collect_errors(),
        vec![
            "Invalid argument syntax 'ooops'.",
            "Only last argument can be kwargs.",
            "Non-default argument after default arguments.",
            "Only last argument can be kwargs.",
        ]
    );
}

// ============================================================================
// RETURN / BREAK / CONTINUE
// ============================================================================

#[test]
fn test_return() {
    let file = data_only("*** Keywords ***\nName\n    Return    RETURN\n    RETURN    RETURN\n");
    let keyword = file.section(0).unwrap().body[0].as_block().unwrap();
    let expected: Vec<Node> = vec![
        stmt(vec![tok(K::Keyword, "Return", 3, 4), tok(K::Argument, "RETURN", 3, 14)]).into(),
        stmt(vec![tok(K::ReturnStatement, "RETURN", 4, 4), tok(K::Argument, "RETURN", 4, 14)]).into(),
    ];
    assert_eq!(keyword.body, expected);
    assert!(file.collect_errors().is_empty());
}

#[test]
fn test_break() {
    let file = data_only("*** Keywords ***\nName\n    WHILE    True\n        Break    BREAK\n        BREAK\n    END\n");
    let expected = block(
        BlockKind::While,
        vec![tok(K::While, "WHILE", 3, 4), tok(K::Argument, "True", 3, 13)],
    )
    .with_body(vec![
        stmt(vec![tok(K::Keyword, "Break", 4, 8), tok(K::Argument, "BREAK", 4, 17)]).into(),
        stmt(vec![tok(K::Break, "BREAK", 5, 8)]).into(),
    ])
    .with_end(stmt(vec![tok(K::End, "END", 6, 4)]));
    assert_eq!(first_node(&file), &expected);
    assert!(file.collect_errors().is_empty());
}

#[test]
fn test_continue() {
    let file = data_only(
        "*** Keywords ***\nName\n    FOR    ${x}    IN    @{stuff}\n        Continue    CONTINUE\n        CONTINUE\n    END\n",
    );
    let expected = block(
        BlockKind::For,
        vec![
            tok(K::For, "FOR", 3, 4),
            tok(K::Variable, "${x}", 3, 11),
            tok(K::ForSeparator, "IN", 3, 19),
            tok(K::Argument, "@{stuff}", 3, 25),
        ],
    )
    .with_body(vec![
        stmt(vec![tok(K::Keyword, "Continue", 4, 8), tok(K::Argument, "CONTINUE", 4, 20)]).into(),
        stmt(vec![tok(K::Continue, "CONTINUE", 5, 8)]).into(),
    ])
    .with_end(stmt(vec![tok(K::End, "END", 6, 4)]));
    assert_eq!(first_node(&file), &expected);
}

#[test]
fn test_control_statements_outside_their_blocks() {
    let file = data_only(
        "*** Test Cases ***\nT\n    RETURN\n    BREAK\n*** Keywords ***\nK\n    WHILE    True\n        TRY\n            K\n        FINALLY\n            CONTINUE\n            RETURN\n        END\n    END\n",
    );
    assert_eq!(
        file.collect_errors(),
        vec![
            "RETURN can only be used inside a user keyword.",
            "BREAK can only be used inside a loop.",
            "CONTINUE cannot be used in FINALLY branch.",
            "RETURN cannot be used in FINALLY branch.",
        ]
    );
}

// ============================================================================
// Errors
// ============================================================================

#[test]
fn test_errors_from_tokens() {
    let error = |kind: K, message: &str| Token::detached(kind, "").with_error(message);
    let statement = Statement::with_kind(
        StatementKind::Error,
        vec![error(K::Error, "xxx"), Token::detached(K::Argument, ""), error(K::Error, "yyy")],
    );
    assert_eq!(statement.errors(), vec!["xxx", "yyy"]);

    let digits: Vec<Token> = "0123456789"
        .chars()
        .map(|digit| error(K::FatalError, &digit.to_string()))
        .collect();
    let statement = Statement::with_kind(StatementKind::Error, digits);
    assert_eq!(statement.errors().concat(), "0123456789");

    let statement = Statement::with_kind(
        StatementKind::Error,
        vec![
            error(K::Error, "error"),
            Token::detached(K::Argument, ""),
            error(K::FatalError, "fatal error"),
        ],
    );
    assert_eq!(statement.errors(), vec!["error", "fatal error"]);
}

#[test]
fn test_set_errors_explicitly() {
    let mut statement = Statement::with_kind(StatementKind::Error, Vec::new());
    statement.set_errors(vec!["explicitly set".to_string(), "errors".to_string()]);
    assert_eq!(statement.errors(), vec!["explicitly set", "errors"]);
    *statement.tokens_mut() = vec![
        Token::detached(K::Error, "").with_error("normal error"),
        Token::detached(K::FatalError, "").with_error("fatal error"),
    ];
    assert_eq!(
        statement.errors(),
        vec!["normal error", "fatal error", "explicitly set", "errors"]
    );
    statement.set_errors(vec!["errors".to_string(), "as".to_string(), "list".to_string()]);
    assert_eq!(
        statement.errors(),
        vec!["normal error", "fatal error", "errors", "as", "list"]
    );
}

#[test]
fn test_model_error() {
    let file = data_only("*** Invalid ***\n*** Settings ***\nInvalid\nDocumentation\n");
    let invalid_header = "Unrecognized section header '*** Invalid ***'. Valid sections: \
                          'Settings', 'Variables', 'Test Cases', 'Tasks', 'Keywords' and 'Comments'.";
    let expected = File::new(
        None,
        FileKind::Suite,
        vec![
            Block::new(BlockKind::CommentSection, None)
                .with_body(vec![
                    stmt(vec![tok(K::Error, "*** Invalid ***", 1, 0).with_error(invalid_header)]).into(),
                ])
                .into(),
            block(BlockKind::SettingSection, vec![tok(K::SettingHeader, "*** Settings ***", 2, 0)])
                .with_body(vec![
                    stmt(vec![tok(K::Error, "Invalid", 3, 0).with_error("Non-existing setting 'Invalid'.")]).into(),
                    stmt(vec![tok(K::Documentation, "Documentation", 4, 0)]).into(),
                ])
                .into(),
        ],
    );
    assert_eq!(file, expected);
}

#[test]
fn test_model_error_with_fatal_error() {
    let file = get_resource_model("*** Test Cases ***\n", true, None).unwrap();
    let expected = File::new(
        None,
        FileKind::Resource,
        vec![
            Block::new(BlockKind::CommentSection, None)
                .with_body(vec![
                    stmt(vec![
                        tok(K::FatalError, "*** Test Cases ***", 1, 0)
                            .with_error("Resource file with 'Test Cases' section is invalid."),
                    ])
                    .into(),
                ])
                .into(),
        ],
    );
    assert_eq!(file, expected);
}

#[test]
fn test_model_error_with_error_and_fatal_error() {
    let file = get_resource_model(
        "*** Invalid ***\n*** Settings ***\nInvalid\nDocumentation\n*** Test Cases ***\n",
        true,
        None,
    )
    .unwrap();
    let invalid_header = "Unrecognized section header '*** Invalid ***'. Valid sections: \
                          'Settings', 'Variables', 'Keywords' and 'Comments'.";
    let expected = File::new(
        None,
        FileKind::Resource,
        vec![
            Block::new(BlockKind::CommentSection, None)
                .with_body(vec![
                    stmt(vec![tok(K::Error, "*** Invalid ***", 1, 0).with_error(invalid_header)]).into(),
                ])
                .into(),
            block(BlockKind::SettingSection, vec![tok(K::SettingHeader, "*** Settings ***", 2, 0)])
                .with_body(vec![
                    stmt(vec![tok(K::Error, "Invalid", 3, 0).with_error("Non-existing setting 'Invalid'.")]).into(),
                    stmt(vec![tok(K::Documentation, "Documentation", 4, 0)]).into(),
                    stmt(vec![
                        tok(K::FatalError, "*** Test Cases ***", 5, 0)
                            .with_error("Resource file with 'Test Cases' section is invalid."),
                    ])
                    .into(),
                ])
                .into(),
        ],
    );
    assert_eq!(file, expected);
}

#[test]
fn test_positions_of_blocks() {
    let file = data_only("*** Test Cases ***\nExample\n    FOR    ${x}    IN    a\n        Log    ${x}\n    END\n");
    let node = first_node(&file);
    assert_eq!((node.lineno(), node.col_offset()), (3, 4));
    assert_eq!((node.end_lineno(), node.end_col_offset()), (5, 7));
}
