//! Immutable AST visitor infrastructure.

use std::marker::PhantomData;
use std::ops::ControlFlow;

use crate::ast::expression::Expr;
use crate::ast::statement::{Field, Measurement, Query, SelectStatement, Source, Statement};

use super::visit_macros::define_visit_api;

/// Shared type alias for visitor traversal methods.
pub type VisitResult<B> = ControlFlow<B>;

define_visit_api!(Visit, [&]);

/// Calls `f` on `expr` and every expression nested below it, pre-order.
///
/// Traversal stops at the first `Break`, which is returned.
pub fn inspect_exprs<B, F>(expr: &Expr, f: F) -> ControlFlow<B>
where
    F: FnMut(&Expr) -> ControlFlow<B>,
{
    struct Inspector<F, B> {
        f: F,
        _break: PhantomData<fn() -> B>,
    }

    impl<B, F> Visit for Inspector<F, B>
    where
        F: FnMut(&Expr) -> ControlFlow<B>,
    {
        type Break = B;

        fn visit_expr(&mut self, expr: &Expr) -> ControlFlow<B> {
            if let ControlFlow::Break(b) = (self.f)(expr) {
                return ControlFlow::Break(b);
            }
            walk_expr(self, expr)
        }
    }

    Inspector {
        f,
        _break: PhantomData,
    }
    .visit_expr(expr)
}
