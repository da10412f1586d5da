use std::collections::HashMap;

pub const DEFAULT_LIMIT: i64 = 20;
pub const MAX_LIMIT: i64 = 100;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    Asc,
    Desc,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SortSpec {
    pub field: String,
    pub direction: SortDirection,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SortParams {
    pub sorts: Vec<SortSpec>,
}

impl SortParams {
    /// Parse sort string like "pet_name,-created_at"
    pub fn from_string(s: &str) -> Self {
        let sorts = s
            .split(',')
            .map(str::trim)
            .filter(|part| !part.is_empty())
            .map(|part| match part.strip_prefix('-') {
                Some(field) => SortSpec {
                    field: field.to_string(),
                    direction: SortDirection::Desc,
                },
                None => SortSpec {
                    field: part.to_string(),
                    direction: SortDirection::Asc,
                },
            })
            .collect();

        Self { sorts }
    }

    pub fn is_empty(&self) -> bool {
        self.sorts.is_empty()
    }

    /// Renders the sorts back into the repository format, dropping fields
    /// outside `allowed`. `None` when nothing usable remains.
    pub fn restricted_to(&self, allowed: &[&str]) -> Option<String> {
        let parts: Vec<String> = self
            .sorts
            .iter()
            .filter(|s| allowed.contains(&s.field.as_str()))
            .map(|s| match s.direction {
                SortDirection::Asc => s.field.clone(),
                SortDirection::Desc => format!("-{}", s.field),
            })
            .collect();

        if parts.is_empty() {
            None
        } else {
            Some(parts.join(","))
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaginationParams {
    pub offset: i64,
    pub limit: i64,
}

impl Default for PaginationParams {
    fn default() -> Self {
        Self::new(None, None)
    }
}

impl PaginationParams {
    pub fn new(offset: Option<i64>, limit: Option<i64>) -> Self {
        Self {
            offset: offset.unwrap_or(0).max(0),
            limit: limit.unwrap_or(DEFAULT_LIMIT).clamp(1, MAX_LIMIT),
        }
    }

    pub fn offset_u32(&self) -> u32 {
        u32::try_from(self.offset).unwrap_or(u32::MAX)
    }

    pub fn limit_u32(&self) -> u32 {
        // clamped to 1..=MAX_LIMIT in `new`
        self.limit as u32
    }
}

/// List query: equality filters, sort and pagination.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryParams {
    pub filters: HashMap<String, String>,
    pub sort: SortParams,
    pub pagination: PaginationParams,
}

impl QueryParams {
    /// Accepts `filter[field]=value` or a bare `field=value`, plus
    /// `sort`, `offset` and `limit`. Unparsable numbers fall back to defaults.
    pub fn from_query_map(query_map: &HashMap<String, String>) -> Self {
        let mut filters = HashMap::new();
        let mut sort = SortParams::default();
        let mut offset = None;
        let mut limit = None;

        for (key, value) in query_map {
            match key.as_str() {
                "sort" => sort = SortParams::from_string(value),
                "offset" => offset = value.trim().parse::<i64>().ok(),
                "limit" => limit = value.trim().parse::<i64>().ok(),
                _ => {
                    let field = key
                        .strip_prefix("filter[")
                        .and_then(|rest| rest.strip_suffix(']'))
                        .unwrap_or(key.as_str());
                    if !field.is_empty() && !value.is_empty() {
                        filters.insert(field.to_string(), value.clone());
                    }
                }
            }
        }

        Self {
            filters,
            sort,
            pagination: PaginationParams::new(offset, limit),
        }
    }

    pub fn filter(&self, field: &str) -> Option<&str> {
        self.filters.get(field).map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params(pairs: &[(&str, &str)]) -> QueryParams {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        QueryParams::from_query_map(&map)
    }

    #[test]
    fn test_filter_bracket_and_bare_forms() {
        let query = params(&[("filter[status]", "Available"), ("kind", "Cat")]);
        assert_eq!(query.filter("status"), Some("Available"));
        assert_eq!(query.filter("kind"), Some("Cat"));
        assert_eq!(query.filter("breed"), None);
    }

    #[test]
    fn test_sort_parse() {
        let query = params(&[("sort", "-created_at, pet_name")]);
        assert_eq!(query.sort.sorts.len(), 2);
        assert_eq!(query.sort.sorts[0].field, "created_at");
        assert_eq!(query.sort.sorts[0].direction, SortDirection::Desc);
        assert_eq!(query.sort.sorts[1].field, "pet_name");
        assert_eq!(query.sort.sorts[1].direction, SortDirection::Asc);
    }

    #[test]
    fn test_sort_restricted_to_known_fields() {
        let sort = SortParams::from_string("-password,name,-created_at");
        assert_eq!(
            sort.restricted_to(&["name", "created_at"]),
            Some("name,-created_at".to_string())
        );
        assert_eq!(sort.restricted_to(&["kind"]), None);
    }

    #[test]
    fn test_pagination_defaults_and_clamping() {
        assert_eq!(params(&[]).pagination, PaginationParams { offset: 0, limit: 20 });

        let query = params(&[("offset", "-5"), ("limit", "500")]);
        assert_eq!(query.pagination.offset, 0);
        assert_eq!(query.pagination.limit, 100);

        let query = params(&[("limit", "0")]);
        assert_eq!(query.pagination.limit, 1);

        let query = params(&[("offset", "ten"), ("limit", "7")]);
        assert_eq!(query.pagination.offset, 0);
        assert_eq!(query.pagination.limit_u32(), 7);
    }
}
