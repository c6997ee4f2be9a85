use std::fmt::Display;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Order {
    Asc,
    Desc,
}

impl Order {
    fn as_str(self) -> &'static str {
        match self {
            Order::Asc => "asc",
            Order::Desc => "desc",
        }
    }
}

/// A read or update addressed to one table, rendered as PostgREST query
/// parameters (`select=*`, `status=eq.active`, `order=name.asc`).
#[derive(Debug, Clone, PartialEq)]
pub struct TableQuery {
    table: &'static str,
    select: String,
    filters: Vec<(String, String)>,
    order: Option<(String, Order)>,
}

impl TableQuery {
    pub fn table(table: &'static str) -> Self {
        Self {
            table,
            select: "*".to_string(),
            filters: Vec::new(),
            order: None,
        }
    }

    pub fn select(mut self, columns: &str) -> Self {
        // Embedded selects are written multi-line at call sites.
        self.select = columns.split_whitespace().collect::<String>();
        self
    }

    pub fn eq(mut self, column: &str, value: impl Display) -> Self {
        self.filters
            .push((column.to_string(), format!("eq.{}", value)));
        self
    }

    pub fn gt(mut self, column: &str, value: impl Display) -> Self {
        self.filters
            .push((column.to_string(), format!("gt.{}", value)));
        self
    }

    pub fn order(mut self, column: &str, order: Order) -> Self {
        self.order = Some((column.to_string(), order));
        self
    }

    pub fn table_name(&self) -> &'static str {
        self.table
    }

    /// Parameters for a read: selection, filters, then ordering.
    pub fn params(&self) -> Vec<(String, String)> {
        let mut params = Vec::with_capacity(self.filters.len() + 2);
        params.push(("select".to_string(), self.select.clone()));
        params.extend(self.filters.iter().cloned());
        if let Some((column, order)) = &self.order {
            params.push(("order".to_string(), format!("{}.{}", column, order.as_str())));
        }
        params
    }

    /// Parameters for a write, which only honours row filters.
    pub fn filter_params(&self) -> Vec<(String, String)> {
        self.filters.clone()
    }
}
