//! Translation of [`SearchQuery`] into SQL conditions
//!
//! Text comparisons for the contains modes run on `LOWER(column)` so they
//! behave the same on SQLite and PostgreSQL.

use crate::core::search::{MatchMode, SearchCondition, SearchQuery, SearchValue};
use sea_orm::sea_query::{Expr, Func, LikeExpr, SimpleExpr};
use sea_orm::{ColumnTrait, Condition};
use tracing::warn;

const LIKE_ESCAPE: char = '\\';

/// Build a conjunction of the query's conditions, resolving field names to columns
pub(super) fn build_condition<C, F>(query: &SearchQuery, resolve: F) -> Condition
where
    C: ColumnTrait,
    F: Fn(&str) -> Option<C>,
{
    query
        .conditions()
        .iter()
        .fold(Condition::all(), |all, condition| {
            match resolve(condition.field) {
                Some(column) => all.add(column_condition(column, condition)),
                None => {
                    warn!("Ignoring filter on unknown field '{}'", condition.field);
                    all
                }
            }
        })
}

fn column_condition<C: ColumnTrait>(column: C, condition: &SearchCondition) -> Condition {
    match (&condition.value, condition.mode) {
        (SearchValue::Number(value), _) => {
            // stored values are rounded to cents
            let cents = (value * 100.0).round() / 100.0;
            Condition::all().add(column.between(cents - 0.005, cents + 0.005))
        }
        (SearchValue::Text(value), MatchMode::Exact) => {
            Condition::all().add(column.eq(value.clone()))
        }
        (SearchValue::Text(value), MatchMode::ContainsFull) => Condition::all().add(
            lowered(column).like(like(format!("%{}%", escape_like(&value.to_lowercase())))),
        ),
        (SearchValue::Text(_), MatchMode::ContainsWords) => condition
            .words()
            .iter()
            .fold(Condition::all(), |all, word| all.add(whole_word(column, word))),
    }
}

/// The value has `word` as one of its space separated words
fn whole_word<C: ColumnTrait>(column: C, word: &str) -> Condition {
    let escaped = escape_like(word);
    Condition::any()
        .add(lowered(column).eq(word.to_string()))
        .add(lowered(column).like(like(format!("{} %", escaped))))
        .add(lowered(column).like(like(format!("% {}", escaped))))
        .add(lowered(column).like(like(format!("% {} %", escaped))))
}

fn lowered<C: ColumnTrait>(column: C) -> Expr {
    Expr::expr(SimpleExpr::from(Func::lower(Expr::col(column))))
}

fn like(pattern: String) -> LikeExpr {
    LikeExpr::new(pattern).escape(LIKE_ESCAPE)
}

fn escape_like(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for c in value.chars() {
        if matches!(c, '%' | '_') || c == LIKE_ESCAPE {
            escaped.push(LIKE_ESCAPE);
        }
        escaped.push(c);
    }
    escaped
}
