//! Mutable AST visitor infrastructure.

use std::ops::ControlFlow;

use crate::ast::expression::Expr;
use crate::ast::statement::{Field, Measurement, Query, SelectStatement, Source, Statement};

use super::visit::VisitResult;
use super::visit_macros::define_visit_api;

define_visit_api!(VisitMut, [&mut]);
