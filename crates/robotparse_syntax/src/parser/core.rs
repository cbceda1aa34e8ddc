/// Parser core types and the stack driver.
///
/// This chunk defines the [`Parser`] type: the stack of open [`Frame`]s and the loop that closes frames until one
/// takes the next statement.
///
/// ## Notes
/// - This file is `include!`'d into `crate::parser`.
/// - The file frame sits outside the stack so there is always a frame to hand statements to.

/// Where a finished block goes in its parent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Attach {
    Body,
    Branch,
}

/// An open block and how it takes statements.
#[derive(Debug)]
struct Frame {
    block: Block,
    attach: Attach,
    /// `END` closes this block. Branch frames leave the `END` to the block that opened the structure.
    handle_end: bool,
    /// Part of an inline `IF`.
    inline: bool,
    /// Inline frame whose line is done; it takes nothing more.
    closed: bool,
}

/// What accepting a statement did to the frame.
enum Step {
    /// The statement went into the frame's block.
    Stay,
    /// The statement opened a new block.
    Open(Frame),
    /// The statement was the `END` of the frame's block.
    Ended { inline: bool },
}

/// Block-stack parser state.
///
/// ## Notes
/// - Single pass: every statement is placed exactly once, in source order.
/// - Frames still open when input ends are closed as they are, without `END`; validation reports them.
pub struct Parser {
    root: Frame,
    stack: Vec<Frame>,
}

impl Default for Parser {
    fn default() -> Self {
        Self::new()
    }
}

impl Parser {
    pub fn new() -> Self {
        Self {
            root: Frame::new(Block::new(BlockKind::File, None), Attach::Body),
            stack: Vec::new(),
        }
    }

    /// Place one statement in the tree.
    pub fn push(&mut self, statement: Statement) {
        while !self.stack.is_empty() && !self.top().handles(&statement) {
            self.close_top();
        }
        match self.top_mut().accept(statement) {
            Step::Stay => {}
            Step::Open(frame) => {
                tracing::trace!(block = frame.block.kind.name(), inline = frame.inline, "open block");
                self.stack.push(frame);
            }
            Step::Ended { inline: true } => {
                for frame in self.stack.iter_mut().filter(|frame| frame.inline) {
                    frame.closed = true;
                }
            }
            Step::Ended { inline: false } => {}
        }
    }

    /// Close every open block and return the file's root block.
    pub fn finish(mut self) -> Block {
        while !self.stack.is_empty() {
            self.close_top();
        }
        self.root.block
    }

    fn top(&self) -> &Frame {
        self.stack.last().unwrap_or(&self.root)
    }

    fn top_mut(&mut self) -> &mut Frame {
        match self.stack.last_mut() {
            Some(frame) => frame,
            None => &mut self.root,
        }
    }

    fn close_top(&mut self) {
        let Some(frame) = self.stack.pop() else {
            return;
        };
        tracing::trace!(block = frame.block.kind.name(), "close block");
        let parent = &mut self.top_mut().block;
        match frame.attach {
            Attach::Body => parent.body.push(Node::Block(frame.block)),
            Attach::Branch => parent.branch = Some(Box::new(frame.block)),
        }
    }
}
