//! Backend list query construction.

use super::filters::ListFilters;

/// Parameters of one list request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TicketQuery {
    pub page: u32,
    pub limit: u32,
    pub status: Option<String>,
    pub priority: Option<String>,
}

impl TicketQuery {
    /// Unfiltered query for a page.
    pub fn new(page: u32, limit: u32) -> Self {
        Self {
            page,
            limit,
            status: None,
            priority: None,
        }
    }

    /// Attach the non-empty filter values.
    pub fn with_filters(mut self, filters: &ListFilters) -> Self {
        self.status = non_empty(filters.status.as_deref());
        self.priority = non_empty(filters.priority.as_deref());
        self
    }

    /// Render as `_page=..&_limit=..[&status=..][&priority=..]`.
    ///
    /// Filter values are not checked against any allowed set.
    pub fn to_query_string(&self) -> String {
        let mut query = format!("_page={}&_limit={}", self.page, self.limit);
        if let Some(status) = non_empty(self.status.as_deref()) {
            query.push_str("&status=");
            query.push_str(&urlencoding::encode(&status));
        }
        if let Some(priority) = non_empty(self.priority.as_deref()) {
            query.push_str("&priority=");
            query.push_str(&urlencoding::encode(&priority));
        }
        query
    }
}

fn non_empty(value: Option<&str>) -> Option<String> {
    value.filter(|v| !v.is_empty()).map(str::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unfiltered() {
        assert_eq!(TicketQuery::new(1, 5).to_query_string(), "_page=1&_limit=5");
    }

    #[test]
    fn test_empty_values_are_dropped() {
        let query = TicketQuery {
            page: 2,
            limit: 5,
            status: Some(String::new()),
            priority: None,
        };
        assert_eq!(query.to_query_string(), "_page=2&_limit=5");
    }

    #[test]
    fn test_values_are_encoded() {
        let filters = ListFilters {
            status: Some("in progress".to_string()),
            priority: Some("High".to_string()),
        };
        let query = TicketQuery::new(3, 10).with_filters(&filters);
        assert_eq!(
            query.to_query_string(),
            "_page=3&_limit=10&status=in%20progress&priority=High"
        );
    }
}
