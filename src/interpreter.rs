//! The tree-walking evaluator.
//!
//! [`Interpreter`] walks the `Program`/`Stmt`/`Expr` tree directly,
//! dispatching per node variant and maintaining a chain of lexically
//! scoped environment frames.
//!
//! # See Also
//!
//! * [`crate::ast`] - the tree this module walks
//! * [`crate::error::RuntimeError`] - the error type raised on failure

use crate::ast::{Expr, Program, Stmt};
use crate::error::RuntimeError;
use crate::token::{Token, TokenKind};
use crate::value::Value;
use std::collections::HashMap;

/// One lexical scope frame: a name-to-value mapping plus an optional
/// parent. A chain of these forms a stack of scopes; the root has no
/// parent.
struct Scope {
    values: HashMap<String, Value>,
}

impl Scope {
    fn new() -> Self {
        Scope {
            values: HashMap::new(),
        }
    }
}

/// Executes a statement list against a long-lived environment chain
/// rooted at construction. `print` is the sole visible side effect
/// besides environment mutation.
pub struct Interpreter {
    /// Innermost scope is last. Block entry pushes, block exit pops —
    /// on every exit path, including a raised `RuntimeError`, so a
    /// scope never leaks past the block that created it.
    scopes: Vec<Scope>,
}

impl Default for Interpreter {
    fn default() -> Self {
        Self::new()
    }
}

impl Interpreter {
    pub fn new() -> Self {
        Interpreter {
            scopes: vec![Scope::new()],
        }
    }

    /// Executes a program's statements in source order against the
    /// interpreter's persistent environment chain.
    pub fn interpret(&mut self, program: &Program) -> Result<(), RuntimeError> {
        for stmt in &program.stmts {
            self.execute(stmt)?;
        }
        Ok(())
    }

    // ---------- statements ----------

    fn execute(&mut self, stmt: &Stmt) -> Result<(), RuntimeError> {
        match stmt {
            Stmt::Expr(expr) => {
                self.eval(expr)?;
                Ok(())
            }
            Stmt::Print(expr) => {
                let value = self.eval(expr)?;
                println!("{value}");
                Ok(())
            }
            Stmt::Let(name, initializer) => {
                let value = self.eval(initializer)?;
                // Redeclaration in the same scope is permitted and
                // replaces the binding.
                self.define(&name.lexeme, value);
                Ok(())
            }
            Stmt::Block(stmts) => self.execute_block(stmts),
            Stmt::If(condition, then_branch, else_branch) => {
                if self.eval(condition)?.is_truthy() {
                    self.execute(then_branch)
                } else if let Some(else_branch) = else_branch {
                    self.execute(else_branch)
                } else {
                    Ok(())
                }
            }
            Stmt::While(condition, body) => {
                while self.eval(condition)?.is_truthy() {
                    self.execute(body)?;
                }
                Ok(())
            }
        }
    }

    fn execute_block(&mut self, stmts: &[Stmt]) -> Result<(), RuntimeError> {
        self.scopes.push(Scope::new());

        let result = (|| {
            for stmt in stmts {
                self.execute(stmt)?;
            }
            Ok(())
        })();

        self.scopes.pop();
        result
    }

    // ---------- environment ----------

    fn define(&mut self, name: &str, value: Value) {
        self.scopes
            .last_mut()
            .expect("at least the root scope always exists")
            .values
            .insert(name.to_string(), value);
    }

    fn lookup(&self, name: &Token) -> Result<Value, RuntimeError> {
        for scope in self.scopes.iter().rev() {
            if let Some(value) = scope.values.get(&name.lexeme) {
                return Ok(value.clone());
            }
        }
        Err(undefined_variable(name))
    }

    fn assign(&mut self, name: &Token, value: Value) -> Result<Value, RuntimeError> {
        for scope in self.scopes.iter_mut().rev() {
            if let Some(slot) = scope.values.get_mut(&name.lexeme) {
                *slot = value.clone();
                return Ok(value);
            }
        }
        Err(undefined_variable(name))
    }

    // ---------- expressions ----------

    fn eval(&mut self, expr: &Expr) -> Result<Value, RuntimeError> {
        match expr {
            Expr::Literal(value) => Ok(value.clone()),
            Expr::Variable(name) => self.lookup(name),
            Expr::Assign(name, value_expr) => {
                let value = self.eval(value_expr)?;
                self.assign(name, value)
            }
            Expr::Grouping(inner) => self.eval(inner),
            Expr::Unary(op, right) => self.eval_unary(op, right),
            Expr::Binary(left, op, right) => {
                let left = self.eval(left)?;
                let right = self.eval(right)?;
                self.apply_binary(op, left, right)
            }
        }
    }

    fn eval_unary(&mut self, op: &Token, right: &Expr) -> Result<Value, RuntimeError> {
        let right = self.eval(right)?;
        match op.kind {
            TokenKind::Minus => match right {
                Value::Int(i) => Ok(Value::Int(-i)),
                Value::Float(f) => Ok(Value::Float(-f)),
                _ => Err(runtime_error(op, "Operand must be a number.")),
            },
            TokenKind::Bang => Ok(Value::Bool(!right.is_truthy())),
            _ => unreachable!("parser only produces Unary with '!' or '-'"),
        }
    }

    fn apply_binary(&self, op: &Token, left: Value, right: Value) -> Result<Value, RuntimeError> {
        match op.kind {
            // `+` is defined for number+number and string+string; any
            // other pairing is a type error.
            TokenKind::Plus => match (left, right) {
                (Value::Int(a), Value::Int(b)) => Ok(Value::Int(a + b)),
                (Value::Str(a), Value::Str(b)) => Ok(Value::Str(a + &b)),
                (a, b) if a.is_number() && b.is_number() => {
                    Ok(Value::Float(a.as_f64().unwrap() + b.as_f64().unwrap()))
                }
                _ => Err(runtime_error(op, "Operands must be two numbers or two strings.")),
            },
            TokenKind::Minus => {
                let (a, b) = self.numeric_operands(op, &left, &right)?;
                Ok(numeric_result(left, right, a - b, |x, y| x - y))
            }
            TokenKind::Star => {
                let (a, b) = self.numeric_operands(op, &left, &right)?;
                Ok(numeric_result(left, right, a * b, |x, y| x * y))
            }
            TokenKind::Slash => {
                let (a, b) = self.numeric_operands(op, &left, &right)?;
                if b == 0.0 {
                    return Err(runtime_error(op, "Division by zero."));
                }
                // True division always yields a float, even for two ints.
                Ok(Value::Float(a / b))
            }
            TokenKind::Less => {
                let (a, b) = self.numeric_operands(op, &left, &right)?;
                Ok(Value::Bool(a < b))
            }
            TokenKind::LessEqual => {
                let (a, b) = self.numeric_operands(op, &left, &right)?;
                Ok(Value::Bool(a <= b))
            }
            TokenKind::Greater => {
                let (a, b) = self.numeric_operands(op, &left, &right)?;
                Ok(Value::Bool(a > b))
            }
            TokenKind::GreaterEqual => {
                let (a, b) = self.numeric_operands(op, &left, &right)?;
                Ok(Value::Bool(a >= b))
            }
            TokenKind::EqualEqual => Ok(Value::Bool(Value::values_equal(&left, &right))),
            TokenKind::BangEqual => Ok(Value::Bool(!Value::values_equal(&left, &right))),
            _ => unreachable!("parser only produces Binary with a binary operator token"),
        }
    }

    fn numeric_operands(&self, op: &Token, left: &Value, right: &Value) -> Result<(f64, f64), RuntimeError> {
        match (left.as_f64(), right.as_f64()) {
            (Some(a), Some(b)) => Ok((a, b)),
            _ => Err(runtime_error(op, "Operands must be numbers.")),
        }
    }
}

/// Keeps `Int op Int` results as `Int` (matching the host numeric
/// promotion MiniLang inherits: two integers stay integers for
/// `-`/`*`, only `/` always promotes to float) while any float operand
/// promotes the result to `Float`.
fn numeric_result(left: Value, right: Value, computed: f64, int_op: fn(i64, i64) -> i64) -> Value {
    match (left, right) {
        (Value::Int(a), Value::Int(b)) => Value::Int(int_op(a, b)),
        _ => Value::Float(computed),
    }
}

fn undefined_variable(name: &Token) -> RuntimeError {
    RuntimeError {
        message: format!("Undefined variable '{}'.", name.lexeme),
        line: name.line,
        column: name.column,
    }
}

fn runtime_error(op: &Token, message: &str) -> RuntimeError {
    RuntimeError {
        message: message.to_string(),
        line: op.line,
        column: op.column,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexer::Lexer;
    use crate::parser::Parser;

    fn run(source: &str) -> Result<(), RuntimeError> {
        let tokens = Lexer::new(source).tokenize().unwrap();
        let program = Parser::new(tokens).parse().unwrap();
        Interpreter::new().interpret(&program)
    }

    #[test]
    fn division_always_yields_float() {
        // Exercised indirectly through eval since there's no public
        // value-returning entry point; construct directly instead.
        let tokens = Lexer::new("3 / 2;").tokenize().unwrap();
        let program = Parser::new(tokens).parse().unwrap();
        let mut interp = Interpreter::new();
        let Stmt::Expr(expr) = &program.stmts[0] else {
            panic!("expected expression statement");
        };
        assert_eq!(interp.eval(expr).unwrap(), Value::Float(1.5));
    }

    #[test]
    fn multiplication_of_two_ints_stays_int() {
        let tokens = Lexer::new("4 * 2;").tokenize().unwrap();
        let program = Parser::new(tokens).parse().unwrap();
        let mut interp = Interpreter::new();
        let Stmt::Expr(expr) = &program.stmts[0] else {
            panic!("expected expression statement");
        };
        assert_eq!(interp.eval(expr).unwrap(), Value::Int(8));
    }

    #[test]
    fn division_by_zero_is_a_runtime_error() {
        let tokens = Lexer::new("1 / 0;").tokenize().unwrap();
        let program = Parser::new(tokens).parse().unwrap();
        let mut interp = Interpreter::new();
        let Stmt::Expr(expr) = &program.stmts[0] else {
            panic!("expected expression statement");
        };
        let err = interp.eval(expr).unwrap_err();
        assert!(err.message.contains("Division by zero"));
    }

    #[test]
    fn undefined_variable_is_a_runtime_error() {
        let err = run("print y;").unwrap_err();
        assert!(err.to_string().contains("Undefined variable 'y'"));
    }

    #[test]
    fn block_scoping_does_not_leak_shadowed_binding() {
        // Re-run against the same interpreter instance to observe the
        // outer binding survive the inner shadow.
        let tokens = Lexer::new("let x = 1; { let x = 2; } ").tokenize().unwrap();
        let program = Parser::new(tokens).parse().unwrap();
        let mut interp = Interpreter::new();
        interp.interpret(&program).unwrap();
        assert_eq!(interp.scopes.len(), 1);
        assert_eq!(interp.scopes[0].values.get("x"), Some(&Value::Int(1)));
    }

    #[test]
    fn assignment_walks_outward_to_nearest_binding() {
        let tokens = Lexer::new("let x = 1; { x = 9; }").tokenize().unwrap();
        let program = Parser::new(tokens).parse().unwrap();
        let mut interp = Interpreter::new();
        interp.interpret(&program).unwrap();
        assert_eq!(interp.scopes[0].values.get("x"), Some(&Value::Int(9)));
    }

    #[test]
    fn assign_expression_returns_assigned_value() {
        let tokens = Lexer::new("let x = 0; x = 5;").tokenize().unwrap();
        let program = Parser::new(tokens).parse().unwrap();
        let mut interp = Interpreter::new();
        let Stmt::Expr(expr) = &program.stmts[1] else {
            panic!("expected expression statement");
        };
        assert_eq!(interp.eval(expr).unwrap(), Value::Int(5));
    }

    #[test]
    fn unary_minus_requires_a_number() {
        let tokens = Lexer::new(r#"-"x";"#).tokenize().unwrap();
        let program = Parser::new(tokens).parse().unwrap();
        let mut interp = Interpreter::new();
        let Stmt::Expr(expr) = &program.stmts[0] else {
            panic!("expected expression statement");
        };
        let err = interp.eval(expr).unwrap_err();
        assert!(err.message.contains("Operand must be a number"));
    }

    #[test]
    fn string_concatenation_via_plus() {
        let tokens = Lexer::new(r#""a" + "b";"#).tokenize().unwrap();
        let program = Parser::new(tokens).parse().unwrap();
        let mut interp = Interpreter::new();
        let Stmt::Expr(expr) = &program.stmts[0] else {
            panic!("expected expression statement");
        };
        assert_eq!(interp.eval(expr).unwrap(), Value::Str("ab".to_string()));
    }

    #[test]
    fn while_loop_runs_until_condition_is_falsy() {
        // No direct output capture here; just assert it terminates and
        // leaves the expected final binding.
        let tokens = Lexer::new("let i = 0; while (i < 3) { i = i + 1; }")
            .tokenize()
            .unwrap();
        let program = Parser::new(tokens).parse().unwrap();
        let mut interp = Interpreter::new();
        interp.interpret(&program).unwrap();
        assert_eq!(interp.scopes[0].values.get("i"), Some(&Value::Int(3)));
    }
}
