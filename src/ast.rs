//! The abstract syntax tree.
//!
//! `Expr` and `Stmt` are each a single closed enum, dispatched via
//! exhaustive pattern matching in the parser and interpreter — not a
//! base-class-per-category with one subclass per variant. This makes
//! an unrecognized node kind unrepresentable at compile time.

use crate::token::Token;
use crate::value::Value;

#[derive(Debug, Clone)]
pub enum Expr {
    Literal(Value),
    Variable(Token),
    Assign(Token, Box<Expr>),
    Grouping(Box<Expr>),
    Unary(Token, Box<Expr>),
    Binary(Box<Expr>, Token, Box<Expr>),
}

#[derive(Debug, Clone)]
pub enum Stmt {
    Expr(Expr),
    Print(Expr),
    Let(Token, Expr),
    Block(Vec<Stmt>),
    If(Expr, Box<Stmt>, Option<Box<Stmt>>),
    While(Expr, Box<Stmt>),
}

/// A full program: a finite ordered sequence of top-level statements.
/// There is no enclosing function.
#[derive(Debug, Default)]
pub struct Program {
    pub stmts: Vec<Stmt>,
}
