/// Frame rules: which statements each kind of open block takes, and what they do to it.
///
/// ## Notes
/// - This file is `include!`'d into `crate::parser`.
/// - `handles` only decides; `accept` places the statement and may open a child frame.

impl Frame {
    fn new(block: Block, attach: Attach) -> Self {
        Self {
            block,
            attach,
            handle_end: true,
            inline: false,
            closed: false,
        }
    }

    /// Return `true` if this frame takes `statement`; otherwise the frame is closed and its parent asked.
    fn handles(&self, statement: &Statement) -> bool {
        match self.block.kind {
            BlockKind::File => true,
            kind if kind.is_section() => !is_section_start(statement),
            BlockKind::TestCase | BlockKind::Keyword => !ends_body(statement),
            _ => {
                if self.closed || self.block.end.is_some() || ends_body(statement) {
                    return false;
                }
                statement.kind() != StatementKind::End || self.handle_end
            }
        }
    }

    fn accept(&mut self, statement: Statement) -> Step {
        match self.block.kind {
            BlockKind::File => Step::Open(section_frame(statement)),
            BlockKind::TestCaseSection if statement.kind() == StatementKind::TestCaseName => {
                Step::Open(Frame::new(Block::new(BlockKind::TestCase, Some(statement)), Attach::Body))
            }
            BlockKind::KeywordSection if statement.kind() == StatementKind::KeywordName => {
                Step::Open(Frame::new(Block::new(BlockKind::Keyword, Some(statement)), Attach::Body))
            }
            kind if kind.is_section() => self.stay(statement),
            BlockKind::TestCase | BlockKind::Keyword => self.open_or_stay(statement),
            kind => match (kind, statement.kind()) {
                (_, StatementKind::End) => {
                    self.block.end = Some(statement);
                    Step::Ended { inline: self.inline }
                }
                (BlockKind::If, StatementKind::ElseIfHeader | StatementKind::ElseHeader)
                | (
                    BlockKind::Try,
                    StatementKind::ExceptHeader | StatementKind::ElseHeader | StatementKind::FinallyHeader,
                ) => Step::Open(Frame {
                    handle_end: false,
                    inline: self.inline,
                    ..Frame::new(Block::new(kind, Some(statement)), Attach::Branch)
                }),
                _ => self.open_or_stay(statement),
            },
        }
    }

    /// Control structure headers open a nested block, everything else joins the body.
    fn open_or_stay(&mut self, statement: Statement) -> Step {
        let kind = match statement.kind() {
            StatementKind::ForHeader => BlockKind::For,
            StatementKind::IfHeader | StatementKind::InlineIfHeader => BlockKind::If,
            StatementKind::TryHeader => BlockKind::Try,
            StatementKind::WhileHeader => BlockKind::While,
            _ => return self.stay(statement),
        };
        let inline = self.inline || statement.kind() == StatementKind::InlineIfHeader;
        Step::Open(Frame {
            inline,
            ..Frame::new(Block::new(kind, Some(statement)), Attach::Body)
        })
    }

    fn stay(&mut self, statement: Statement) -> Step {
        self.block.body.push(Node::Statement(statement));
        Step::Stay
    }
}

/// Open the section a statement at file level belongs to.
///
/// A header opens its section. Anything else (content before the first header, an unrecognized header, a fatal
/// error) opens a comment section without header that holds the statement.
fn section_frame(statement: Statement) -> Frame {
    let kind = match statement.section() {
        Some(SectionId::Settings) => BlockKind::SettingSection,
        Some(SectionId::Variables) => BlockKind::VariableSection,
        Some(SectionId::TestCases | SectionId::Tasks) => BlockKind::TestCaseSection,
        Some(SectionId::Keywords) => BlockKind::KeywordSection,
        Some(SectionId::Comments) => BlockKind::CommentSection,
        None => {
            tracing::debug!(statement = statement.kind().name(), "implicit comment section");
            let block = Block::new(BlockKind::CommentSection, None).with_body(vec![Node::Statement(statement)]);
            return Frame::new(block, Attach::Body);
        }
    };
    tracing::debug!(section = kind.name(), "open section");
    Frame::new(Block::new(kind, Some(statement)), Attach::Body)
}

// --- helpers ---

/// A section header, or the non-fatal error an unusable header turns into.
fn is_section_start(statement: &Statement) -> bool {
    match statement.kind() {
        StatementKind::SectionHeader => true,
        StatementKind::Error => statement
            .tokens()
            .iter()
            .find(|token| token.kind.is_error())
            .is_some_and(|token| token.kind == TokenKind::Error && sections::is_header_marker(&token.value)),
        _ => false,
    }
}

fn is_fatal(statement: &Statement) -> bool {
    statement.tokens().iter().any(|token| token.kind == TokenKind::FatalError)
}

/// Statements that end a test case or keyword and everything open inside it.
fn ends_body(statement: &Statement) -> bool {
    is_section_start(statement)
        || is_fatal(statement)
        || matches!(statement.kind(), StatementKind::TestCaseName | StatementKind::KeywordName)
}
