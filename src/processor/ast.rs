//! Statement AST, produced by the dispatcher and lowered by `codegen`.

use crate::model::Variable;

#[derive(Debug, Clone, PartialEq)]
pub enum PrintItem {
    /// Text printed as-is; quoted on output.
    Literal(String),
    /// Already-mapped Python expression (`AS`, `X+1`).
    Expr(String),
}

/// How an `INPUT` prompt reaches the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PromptStyle {
    /// `INPUT "Name", N$` – prompt passed to the read call.
    Inline,
    /// `INPUT "Name"; N$` – prompt printed by its own statement first.
    Separate,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Stmt {
    /// `CLS`
    Cls,

    /// `PRINT a; b; c` – `newline` is false when items were `;`-joined.
    Print { items: Vec<PrintItem>, newline: bool },

    /// `INPUT ["prompt"(,|;)] VAR`
    Input {
        prompt: Option<(String, PromptStyle)>,
        var: Variable,
    },

    /// `[LET] X = expr`, sigils already mapped.
    Assign { text: String },
}
