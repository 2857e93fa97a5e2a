//! Listing query builder.
//!
//! Turns raw listing parameters (all optional, all strings on the wire) into
//! a normalized [`ContentQuery`] and renders it as a SQL predicate with
//! positional binds. The same rendered predicate drives both the page fetch
//! and the total count, so the two reads always agree on criteria.

use serde::Deserialize;

pub const DEFAULT_PAGE: i64 = 1;
pub const DEFAULT_LIMIT: i64 = 10;
pub const MAX_LIMIT: i64 = 50;

/// Raw listing parameters as they arrive on the query string.
///
/// `page` and `limit` are accepted as strings: malformed numeric input falls
/// back to the defaults instead of rejecting the request.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ListParams {
    #[serde(default)]
    pub query: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub platform: Option<String>,
    #[serde(default)]
    pub published: Option<String>,
    #[serde(default)]
    pub active: Option<String>,
    #[serde(default)]
    pub page: Option<String>,
    #[serde(default)]
    pub limit: Option<String>,
}

/// Normalized listing query: filters plus the pagination window.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContentQuery {
    /// Publication/active flag filter (exact equality when present).
    pub flag: Option<bool>,
    pub category: Option<String>,
    pub platform: Option<String>,
    /// Trimmed free-text query; `None` when absent or blank.
    pub text: Option<String>,
    pub page: i64,
    pub limit: i64,
}

impl ContentQuery {
    /// Normalize raw parameters. Never fails: malformed numbers fall back to
    /// defaults, page is coerced to >= 1 and limit clamped to [1, 50].
    pub fn from_params(params: &ListParams) -> Self {
        let page = params
            .page
            .as_deref()
            .and_then(|p| p.parse::<i64>().ok())
            .unwrap_or(DEFAULT_PAGE)
            .max(1);
        let limit = params
            .limit
            .as_deref()
            .and_then(|l| l.parse::<i64>().ok())
            .unwrap_or(DEFAULT_LIMIT)
            .clamp(1, MAX_LIMIT);

        let flag = params
            .published
            .as_deref()
            .or(params.active.as_deref())
            .and_then(parse_flag);

        ContentQuery {
            flag,
            category: non_blank(params.category.as_deref()),
            platform: non_blank(params.platform.as_deref()),
            text: non_blank(params.query.as_deref()),
            page,
            limit,
        }
    }

    pub fn offset(&self) -> i64 {
        (self.page - 1) * self.limit
    }

    /// ILIKE pattern for the free-text query, with `\`, `%` and `_` escaped
    /// so user input cannot alter match semantics.
    pub fn like_pattern(&self) -> Option<String> {
        self.text.as_deref().map(|t| format!("%{}%", escape_like(t)))
    }
}

fn non_blank(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_string)
}

/// Accepts "true"/"false" (any case); anything else counts as absent.
fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_lowercase().as_str() {
        "true" => Some(true),
        "false" => Some(false),
        _ => None,
    }
}

/// Escape LIKE metacharacters so a pattern matches them literally.
pub fn escape_like(input: &str) -> String {
    input
        .replace('\\', "\\\\")
        .replace('%', "\\%")
        .replace('_', "\\_")
}

/// A bind value collected while rendering the predicate.
#[derive(Debug, Clone, PartialEq)]
pub enum BindValue {
    Bool(bool),
    Text(String),
}

/// A rendered WHERE clause plus its binds, shared between the page fetch and
/// the count query.
#[derive(Debug, Clone)]
pub struct SqlPredicate {
    where_sql: String,
    binds: Vec<BindValue>,
    next_param: usize,
}

impl SqlPredicate {
    /// `""` when unconditional, otherwise `"WHERE ..."` with `$n` placeholders.
    pub fn where_sql(&self) -> &str {
        &self.where_sql
    }

    /// First free `$n` index after the filter binds (for LIMIT/OFFSET).
    pub fn next_param(&self) -> usize {
        self.next_param
    }

    pub fn binds(&self) -> &[BindValue] {
        &self.binds
    }
}

/// Accumulates filter conditions in a fixed order with positional binds.
#[derive(Debug, Default)]
pub struct PredicateBuilder {
    parts: Vec<String>,
    binds: Vec<BindValue>,
}

impl PredicateBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    fn next_param(&self) -> usize {
        self.binds.len() + 1
    }

    /// Exact equality on a boolean column, when the flag is present.
    pub fn eq_bool(&mut self, column: &str, value: Option<bool>) -> &mut Self {
        if let Some(v) = value {
            let param = self.next_param();
            self.parts.push(format!("{} = ${}", column, param));
            self.binds.push(BindValue::Bool(v));
        }
        self
    }

    /// Exact equality on a text column, when the filter is present.
    pub fn eq_text(&mut self, column: &str, value: Option<&str>) -> &mut Self {
        if let Some(v) = value {
            let param = self.next_param();
            self.parts.push(format!("{} = ${}", column, param));
            self.binds.push(BindValue::Text(v.to_string()));
        }
        self
    }

    /// Case-insensitive substring containment over a fixed set of column
    /// expressions: at least one must match the (already escaped) pattern.
    /// The pattern is bound once and referenced by every branch.
    pub fn contains_any(&mut self, exprs: &[&str], pattern: Option<&str>) -> &mut Self {
        if let Some(p) = pattern {
            let param = self.next_param();
            let ors: Vec<String> = exprs
                .iter()
                .map(|e| format!("{} ILIKE ${}", e, param))
                .collect();
            self.parts.push(format!("({})", ors.join(" OR ")));
            self.binds.push(BindValue::Text(p.to_string()));
        }
        self
    }

    pub fn build(self) -> SqlPredicate {
        let next_param = self.binds.len() + 1;
        let where_sql = if self.parts.is_empty() {
            String::new()
        } else {
            format!("WHERE {}", self.parts.join(" AND "))
        };
        SqlPredicate {
            where_sql,
            binds: self.binds,
            next_param,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params(pairs: &[(&str, &str)]) -> ListParams {
        let mut p = ListParams::default();
        for (k, v) in pairs {
            let v = Some(v.to_string());
            match *k {
                "query" => p.query = v,
                "category" => p.category = v,
                "platform" => p.platform = v,
                "published" => p.published = v,
                "active" => p.active = v,
                "page" => p.page = v,
                "limit" => p.limit = v,
                other => panic!("unknown param {}", other),
            }
        }
        p
    }

    #[test]
    fn defaults_when_nothing_given() {
        let q = ContentQuery::from_params(&ListParams::default());
        assert_eq!(q.page, 1);
        assert_eq!(q.limit, 10);
        assert_eq!(q.offset(), 0);
        assert!(q.flag.is_none());
        assert!(q.text.is_none());
    }

    #[test]
    fn malformed_numbers_fall_back_to_defaults() {
        let q = ContentQuery::from_params(&params(&[("page", "abc"), ("limit", "1e3")]));
        assert_eq!(q.page, 1);
        assert_eq!(q.limit, 10);
    }

    #[test]
    fn page_coerced_to_at_least_one_and_limit_clamped() {
        let q = ContentQuery::from_params(&params(&[("page", "0"), ("limit", "500")]));
        assert_eq!(q.page, 1);
        assert_eq!(q.limit, 50);

        let q = ContentQuery::from_params(&params(&[("page", "-3"), ("limit", "0")]));
        assert_eq!(q.page, 1);
        assert_eq!(q.limit, 1);
    }

    #[test]
    fn blank_text_means_no_text_constraint() {
        let q = ContentQuery::from_params(&params(&[("query", "   ")]));
        assert!(q.text.is_none());
        assert!(q.like_pattern().is_none());
    }

    #[test]
    fn flag_parses_true_false_and_ignores_garbage() {
        assert_eq!(
            ContentQuery::from_params(&params(&[("published", "true")])).flag,
            Some(true)
        );
        assert_eq!(
            ContentQuery::from_params(&params(&[("active", "FALSE")])).flag,
            Some(false)
        );
        assert_eq!(
            ContentQuery::from_params(&params(&[("published", "yes")])).flag,
            None
        );
    }

    #[test]
    fn like_metacharacters_are_escaped() {
        assert_eq!(escape_like("100%"), "100\\%");
        assert_eq!(escape_like("a_b"), "a\\_b");
        assert_eq!(escape_like("back\\slash"), "back\\\\slash");

        let q = ContentQuery::from_params(&params(&[("query", "50%_off")]));
        assert_eq!(q.like_pattern().unwrap(), "%50\\%\\_off%");
    }

    #[test]
    fn unconditional_predicate_renders_empty_where() {
        let pred = PredicateBuilder::new().build();
        assert_eq!(pred.where_sql(), "");
        assert_eq!(pred.next_param(), 1);
        assert!(pred.binds().is_empty());
    }

    #[test]
    fn predicate_renders_filters_in_order() {
        let q = ContentQuery::from_params(&params(&[
            ("published", "true"),
            ("category", "General"),
            ("query", "rust"),
        ]));
        let mut b = PredicateBuilder::new();
        b.eq_bool("published", q.flag);
        b.eq_text("category", q.category.as_deref());
        b.contains_any(
            &["title", "description"],
            q.like_pattern().as_deref(),
        );
        let pred = b.build();

        assert_eq!(
            pred.where_sql(),
            "WHERE published = $1 AND category = $2 AND (title ILIKE $3 OR description ILIKE $3)"
        );
        assert_eq!(
            pred.binds(),
            &[
                BindValue::Bool(true),
                BindValue::Text("General".to_string()),
                BindValue::Text("%rust%".to_string()),
            ]
        );
        assert_eq!(pred.next_param(), 4);
    }

    #[test]
    fn video_listing_example_builds_expected_window() {
        // platform=youtube&query=ab&page=2&limit=5 -> offset 5, limit 5
        let q = ContentQuery::from_params(&params(&[
            ("platform", "youtube"),
            ("query", "ab"),
            ("page", "2"),
            ("limit", "5"),
        ]));
        assert_eq!(q.limit, 5);
        assert_eq!(q.offset(), 5);

        let mut b = PredicateBuilder::new();
        b.eq_text("platform", q.platform.as_deref());
        b.contains_any(
            &["title", "description", "category", "array_to_string(tags, ' ')"],
            q.like_pattern().as_deref(),
        );
        let pred = b.build();
        assert_eq!(
            pred.where_sql(),
            "WHERE platform = $1 AND (title ILIKE $2 OR description ILIKE $2 OR category ILIKE $2 OR array_to_string(tags, ' ') ILIKE $2)"
        );
    }
}
