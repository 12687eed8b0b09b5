//! Builds parameterized list and count SELECTs from a per-entity list spec.
//! Identifiers come from the static specs only; search text and filter ids are always bound.

use super::params::BindValue;

/// API sort name mapped to the SQL expression it orders by.
#[derive(Clone, Copy, Debug)]
pub struct SortField {
    pub name: &'static str,
    pub expr: &'static str,
}

/// Everything the builder needs to know about one listable entity.
#[derive(Debug)]
pub struct ListSpec {
    /// FROM target including any joins needed by columns, search or sort.
    pub from: &'static str,
    pub columns: &'static str,
    /// Qualified id column; default order and tie-break.
    pub id: &'static str,
    /// Columns OR-ed together for `search`.
    pub search: &'static [&'static str],
    pub sort_fields: &'static [SortField],
}

/// One entity-specific predicate. `clause` holds exactly one `?` placeholder.
#[derive(Clone, Debug)]
pub struct Filter {
    pub clause: &'static str,
    pub value: BindValue,
}

impl Filter {
    pub fn new(clause: &'static str, value: impl Into<BindValue>) -> Self {
        Filter {
            clause,
            value: value.into(),
        }
    }
}

/// Parsed `$sort` value: name with prefixes stripped, and direction.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Sort<'a> {
    pub field: &'a str,
    pub descending: bool,
}

impl<'a> Sort<'a> {
    /// `-name` is descending, `name` and `+name` ascending. Blank input is no sort.
    pub fn parse(raw: &'a str) -> Option<Self> {
        let descending = raw.starts_with('-');
        let field = raw.trim_start_matches(['-', '+']);
        if field.is_empty() {
            return None;
        }
        Some(Sort { field, descending })
    }
}

/// Paging and ordering inputs shared by every list endpoint.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Page {
    pub offset: Option<u32>,
    pub limit: Option<u32>,
    pub sort: Option<String>,
    pub search: Option<String>,
}

impl Page {
    /// Search term, or None when absent or blank.
    pub fn search_text(&self) -> Option<&str> {
        self.search.as_deref().filter(|s| !s.trim().is_empty())
    }
}

pub struct QueryBuf {
    pub sql: String,
    pub params: Vec<BindValue>,
}

impl QueryBuf {
    fn new() -> Self {
        QueryBuf {
            sql: String::new(),
            params: Vec::new(),
        }
    }
}

fn where_clause(spec: &ListSpec, search: Option<&str>, filters: &[Filter], q: &mut QueryBuf) -> String {
    let mut parts = Vec::new();
    if let Some(text) = search {
        if !spec.search.is_empty() {
            let ors: Vec<String> = spec
                .search
                .iter()
                .map(|col| {
                    q.params.push(BindValue::Text(text.to_string()));
                    format!("instr({}, ?) > 0", col)
                })
                .collect();
            parts.push(format!("({})", ors.join(" OR ")));
        }
    }
    for f in filters {
        q.params.push(f.value.clone());
        parts.push(f.clause.to_string());
    }
    if parts.is_empty() {
        String::new()
    } else {
        format!(" WHERE {}", parts.join(" AND "))
    }
}

/// ORDER BY for a raw `$sort` value. Unknown or missing fields order by id descending.
pub fn order_clause(spec: &ListSpec, sort: Option<&str>) -> String {
    let known = sort
        .and_then(Sort::parse)
        .and_then(|s| {
            spec.sort_fields
                .iter()
                .find(|f| f.name == s.field)
                .map(|f| (f.expr, s.descending))
        });
    match known {
        Some((expr, descending)) => format!(
            " ORDER BY {} {}, {} DESC",
            expr,
            if descending { "DESC" } else { "ASC" },
            spec.id
        ),
        None => format!(" ORDER BY {} DESC", spec.id),
    }
}

/// SELECT COUNT(*) with search and filters, ignoring paging.
pub fn select_count(spec: &ListSpec, page: &Page, filters: &[Filter]) -> QueryBuf {
    let mut q = QueryBuf::new();
    let where_sql = where_clause(spec, page.search_text(), filters, &mut q);
    q.sql = format!("SELECT COUNT(*) FROM {}{}", spec.from, where_sql);
    q
}

/// SELECT one page: search and filters, ORDER BY, then OFFSET/LIMIT.
pub fn select_page(spec: &ListSpec, page: &Page, filters: &[Filter]) -> QueryBuf {
    let mut q = QueryBuf::new();
    let where_sql = where_clause(spec, page.search_text(), filters, &mut q);
    let order_sql = order_clause(spec, page.sort.as_deref());
    let paging_sql = match (page.limit, page.offset) {
        (None, None) => String::new(),
        (Some(limit), None) => format!(" LIMIT {}", limit),
        (limit, Some(offset)) => format!(
            " LIMIT {} OFFSET {}",
            limit.map(i64::from).unwrap_or(-1),
            offset
        ),
    };
    q.sql = format!(
        "SELECT {} FROM {}{}{}{}",
        spec.columns, spec.from, where_sql, order_sql, paging_sql
    );
    q
}
