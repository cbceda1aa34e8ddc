//! Tree traversal: read-only [`Visitor`] and rewriting [`Transformer`].
//!
//! Both traits have one method per node kind (`visit_for`, `visit_keyword_call`, ...). A kind method that is not
//! overridden falls back to the category method, [`Visitor::visit_block`] or [`Visitor::visit_statement`]. Dispatch is
//! an exhaustive `match` over [`BlockKind`] and [`StatementKind`], so adding a node kind without a visit method does
//! not compile.
//!
//! ## Notes
//! - `visit_block` recurses through [`Visitor::generic_visit`] by default. An overriding method decides itself
//!   whether to call `generic_visit`.
//! - Transformer methods take nodes by value and return `Some(node)` to keep or replace them, `None` to remove them.
//!
//! ## Examples
//! ```rust
//! use robotparse_syntax::ast::Statement;
//! use robotparse_syntax::config::ParseConfig;
//! use robotparse_syntax::parser;
//! use robotparse_syntax::visitor::Visitor;
//!
//! #[derive(Default)]
//! struct Keywords(Vec<String>);
//!
//! impl Visitor for Keywords {
//!     fn visit_keyword_call(&mut self, statement: &Statement) {
//!         self.0.extend(statement.keyword().map(str::to_string));
//!     }
//! }
//!
//! let file = parser::parse("*** Test Cases ***\nT\n    Log    x\n", &ParseConfig::default(), None);
//! let mut keywords = Keywords::default();
//! keywords.visit_model(&file);
//! assert_eq!(keywords.0, vec!["Log"]);
//! ```

use crate::ast::{Block, BlockKind, File, Node, Statement, StatementKind};

macro_rules! define_traversal {
    (
        blocks { $($block:ident => $visit_block:ident,)* }
        statements { $($statement:ident => $visit_statement:ident,)* }
    ) => {
        /// Read-only traversal.
        pub trait Visitor {
            /// Visit a whole file, starting from its root block.
            fn visit_model(&mut self, file: &File) {
                self.dispatch_block(&file.root);
            }

            fn visit(&mut self, node: &Node) {
                match node {
                    Node::Block(block) => self.dispatch_block(block),
                    Node::Statement(statement) => self.dispatch_statement(statement),
                }
            }

            /// Route a block to its kind method.
            fn dispatch_block(&mut self, block: &Block) {
                match block.kind {
                    $(BlockKind::$block => self.$visit_block(block),)*
                }
            }

            /// Route a statement to its kind method.
            fn dispatch_statement(&mut self, statement: &Statement) {
                match statement.kind() {
                    $(StatementKind::$statement => self.$visit_statement(statement),)*
                }
            }

            /// Fallback for every block kind without its own override.
            fn visit_block(&mut self, block: &Block) {
                self.generic_visit(block);
            }

            /// Fallback for every statement kind without its own override.
            fn visit_statement(&mut self, _statement: &Statement) {}

            /// Visit the header, body, branch and `END` of `block`, in that order.
            fn generic_visit(&mut self, block: &Block) {
                if let Some(header) = &block.header {
                    self.dispatch_statement(header);
                }
                for node in &block.body {
                    self.visit(node);
                }
                if let Some(branch) = &block.branch {
                    self.dispatch_block(branch);
                }
                if let Some(end) = &block.end {
                    self.dispatch_statement(end);
                }
            }

            $(
                #[doc = concat!("Visit a `", stringify!($block), "` block.")]
                fn $visit_block(&mut self, block: &Block) {
                    self.visit_block(block);
                }
            )*

            $(
                #[doc = concat!("Visit a `", stringify!($statement), "` statement.")]
                fn $visit_statement(&mut self, statement: &Statement) {
                    self.visit_statement(statement);
                }
            )*
        }

        /// Rewriting traversal over owned nodes.
        pub trait Transformer {
            /// Transform a whole file. A root replaced by something other than a block leaves an empty file.
            fn visit_model(&mut self, file: File) -> File {
                let File { source, kind, root } = file;
                let root = match self.dispatch_block(root) {
                    Some(Node::Block(block)) => block,
                    other => {
                        tracing::warn!(replacement = ?other.as_ref().map(Node::type_name), "file root must stay a block");
                        Block::new(BlockKind::File, None)
                    }
                };
                File { source, kind, root }
            }

            fn visit(&mut self, node: Node) -> Option<Node> {
                match node {
                    Node::Block(block) => self.dispatch_block(block),
                    Node::Statement(statement) => self.dispatch_statement(statement),
                }
            }

            /// Route a block to its kind method.
            fn dispatch_block(&mut self, block: Block) -> Option<Node> {
                match block.kind {
                    $(BlockKind::$block => self.$visit_block(block),)*
                }
            }

            /// Route a statement to its kind method.
            fn dispatch_statement(&mut self, statement: Statement) -> Option<Node> {
                match statement.kind() {
                    $(StatementKind::$statement => self.$visit_statement(statement),)*
                }
            }

            /// Fallback for every block kind without its own override: transform the children, keep the block.
            fn visit_block(&mut self, block: Block) -> Option<Node> {
                Some(Node::Block(self.generic_visit(block)))
            }

            /// Fallback for every statement kind without its own override: keep the statement.
            fn visit_statement(&mut self, statement: Statement) -> Option<Node> {
                Some(Node::Statement(statement))
            }

            /// Transform the header, body, branch and `END` of `block`.
            ///
            /// ## Notes
            /// - Removed body nodes disappear from the body.
            /// - The header and `END` slots only take statements and the branch slot only takes a block. A
            ///   replacement of the other category is dropped with a warning.
            fn generic_visit(&mut self, block: Block) -> Block {
                let Block { kind, header, body, branch, end, errors } = block;
                let header = header.and_then(|header| statement_slot(self.dispatch_statement(header), "header"));
                let body = body.into_iter().filter_map(|node| self.visit(node)).collect();
                let branch = branch.and_then(|branch| match self.dispatch_block(*branch) {
                    Some(Node::Block(block)) => Some(Box::new(block)),
                    Some(Node::Statement(statement)) => {
                        tracing::warn!(replacement = statement.kind().name(), "branch slot needs a block, dropping");
                        None
                    }
                    None => None,
                });
                let end = end.and_then(|end| statement_slot(self.dispatch_statement(end), "end"));
                Block { kind, header, body, branch, end, errors }
            }

            $(
                #[doc = concat!("Transform a `", stringify!($block), "` block.")]
                fn $visit_block(&mut self, block: Block) -> Option<Node> {
                    self.visit_block(block)
                }
            )*

            $(
                #[doc = concat!("Transform a `", stringify!($statement), "` statement.")]
                fn $visit_statement(&mut self, statement: Statement) -> Option<Node> {
                    self.visit_statement(statement)
                }
            )*
        }
    };
}

define_traversal! {
    blocks {
        File => visit_file,
        CommentSection => visit_comment_section,
        SettingSection => visit_setting_section,
        VariableSection => visit_variable_section,
        TestCaseSection => visit_test_case_section,
        KeywordSection => visit_keyword_section,
        TestCase => visit_test_case,
        Keyword => visit_keyword,
        For => visit_for,
        If => visit_if,
        Try => visit_try,
        While => visit_while,
    }
    statements {
        SectionHeader => visit_section_header,
        TestCaseName => visit_test_case_name,
        KeywordName => visit_keyword_name,
        Documentation => visit_documentation,
        Metadata => visit_metadata,
        SuiteSetup => visit_suite_setup,
        SuiteTeardown => visit_suite_teardown,
        TestSetup => visit_test_setup,
        TestTeardown => visit_test_teardown,
        TestTemplate => visit_test_template,
        TestTimeout => visit_test_timeout,
        ForceTags => visit_force_tags,
        DefaultTags => visit_default_tags,
        LibraryImport => visit_library_import,
        ResourceImport => visit_resource_import,
        VariablesImport => visit_variables_import,
        Setup => visit_setup,
        Teardown => visit_teardown,
        Template => visit_template,
        Timeout => visit_timeout,
        Tags => visit_tags,
        Arguments => visit_arguments,
        Return => visit_return,
        Variable => visit_variable,
        KeywordCall => visit_keyword_call,
        TemplateArguments => visit_template_arguments,
        ForHeader => visit_for_header,
        IfHeader => visit_if_header,
        InlineIfHeader => visit_inline_if_header,
        ElseIfHeader => visit_else_if_header,
        ElseHeader => visit_else_header,
        TryHeader => visit_try_header,
        ExceptHeader => visit_except_header,
        FinallyHeader => visit_finally_header,
        WhileHeader => visit_while_header,
        End => visit_end,
        ReturnStatement => visit_return_statement,
        Break => visit_break,
        Continue => visit_continue,
        Comment => visit_comment,
        Error => visit_error,
        EmptyLine => visit_empty_line,
    }
}

// --- helpers ---

fn statement_slot(node: Option<Node>, slot: &str) -> Option<Statement> {
    match node {
        Some(Node::Statement(statement)) => Some(statement),
        Some(Node::Block(block)) => {
            tracing::warn!(slot, replacement = block.kind.name(), "statement slot needs a statement, dropping");
            None
        }
        None => None,
    }
}
