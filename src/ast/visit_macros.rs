macro_rules! define_visit_api {
    ($trait_name:ident, [$($ref:tt)+]) => {
        macro_rules! try_visit {
            ($expr:expr) => {
                match $expr {
                    ControlFlow::Continue(()) => {}
                    ControlFlow::Break(b) => return ControlFlow::Break(b),
                }
            };
        }

pub trait $trait_name {
    /// Early-exit payload produced when traversal stops.
    type Break;

    fn visit_query(&mut self, query: $($ref)+ Query) -> VisitResult<Self::Break> {
        walk_query(self, query)
    }

    fn visit_statement(&mut self, statement: $($ref)+ Statement) -> VisitResult<Self::Break> {
        walk_statement(self, statement)
    }

    fn visit_select_statement(&mut self, statement: $($ref)+ SelectStatement) -> VisitResult<Self::Break> {
        walk_select_statement(self, statement)
    }

    fn visit_field(&mut self, field: $($ref)+ Field) -> VisitResult<Self::Break> {
        walk_field(self, field)
    }

    fn visit_source(&mut self, source: $($ref)+ Source) -> VisitResult<Self::Break> {
        walk_source(self, source)
    }

    fn visit_measurement(&mut self, _measurement: $($ref)+ Measurement) -> VisitResult<Self::Break> {
        ControlFlow::Continue(())
    }

    fn visit_expr(&mut self, expr: $($ref)+ Expr) -> VisitResult<Self::Break> {
        walk_expr(self, expr)
    }
}

/// Walks every statement of a query.
pub fn walk_query<V: $trait_name + ?Sized>(
    visitor: &mut V,
    query: $($ref)+ Query,
) -> VisitResult<V::Break> {
    for statement in $($ref)+ query.statements {
        try_visit!(visitor.visit_statement(statement));
    }
    ControlFlow::Continue(())
}

/// Walks a statement.
pub fn walk_statement<V: $trait_name + ?Sized>(
    visitor: &mut V,
    statement: $($ref)+ Statement,
) -> VisitResult<V::Break> {
    match statement {
        Statement::Select(select) => visitor.visit_select_statement(select),
    }
}

/// Walks fields, then sources, then the condition.
pub fn walk_select_statement<V: $trait_name + ?Sized>(
    visitor: &mut V,
    statement: $($ref)+ SelectStatement,
) -> VisitResult<V::Break> {
    for field in $($ref)+ statement.fields {
        try_visit!(visitor.visit_field(field));
    }
    for source in $($ref)+ statement.sources {
        try_visit!(visitor.visit_source(source));
    }
    if let Some(condition) = $($ref)+ statement.condition {
        try_visit!(visitor.visit_expr(condition));
    }
    ControlFlow::Continue(())
}

pub fn walk_field<V: $trait_name + ?Sized>(
    visitor: &mut V,
    field: $($ref)+ Field,
) -> VisitResult<V::Break> {
    visitor.visit_expr($($ref)+ field.expr)
}

pub fn walk_source<V: $trait_name + ?Sized>(
    visitor: &mut V,
    source: $($ref)+ Source,
) -> VisitResult<V::Break> {
    match source {
        Source::Measurement(measurement) => visitor.visit_measurement(measurement),
    }
}

/// Walks the children of an expression, left to right.
pub fn walk_expr<V: $trait_name + ?Sized>(
    visitor: &mut V,
    expr: $($ref)+ Expr,
) -> VisitResult<V::Break> {
    match expr {
        Expr::VarRef(_)
        | Expr::StringLiteral(_)
        | Expr::NumberLiteral(_)
        | Expr::IntegerLiteral(_)
        | Expr::BooleanLiteral(_)
        | Expr::RegexLiteral(_) => ControlFlow::Continue(()),
        Expr::Call(call) => {
            for arg in $($ref)+ call.args {
                try_visit!(visitor.visit_expr(arg));
            }
            ControlFlow::Continue(())
        }
        Expr::Binary(binary) => {
            try_visit!(visitor.visit_expr($($ref)+ binary.lhs));
            visitor.visit_expr($($ref)+ binary.rhs)
        }
        Expr::Paren(inner) => visitor.visit_expr(inner),
    }
}

    };
}

pub(crate) use define_visit_api;
