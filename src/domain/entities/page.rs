use serde::Deserialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SortDirection {
    Asc,
    Desc,
}

impl SortDirection {
    pub fn flipped(self) -> Self {
        match self {
            SortDirection::Asc => SortDirection::Desc,
            SortDirection::Desc => SortDirection::Asc,
        }
    }

    pub fn as_query_value(self) -> &'static str {
        match self {
            SortDirection::Asc => "ASC",
            SortDirection::Desc => "DESC",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SortSpec {
    pub sort_by: String,
    pub direction: SortDirection,
}

/// Server-side list request: `?page=&size=&sortBy=&sortDirection=` plus any
/// resource specific filters (approval status, keyword).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageRequest {
    pub page: u32,
    pub size: u32,
    pub sort: Option<SortSpec>,
    pub filters: Vec<(String, String)>,
}

impl PageRequest {
    pub fn new(page: u32, size: u32) -> Self {
        Self {
            page,
            size,
            sort: None,
            filters: Vec::new(),
        }
    }

    pub fn sorted(mut self, sort_by: &str, direction: SortDirection) -> Self {
        self.sort = Some(SortSpec {
            sort_by: sort_by.to_string(),
            direction,
        });
        self
    }

    /// Adds a filter parameter. Blank values are dropped so an empty search box
    /// does not send `keyword=`.
    pub fn filter(mut self, key: &str, value: &str) -> Self {
        let value = value.trim();
        if !value.is_empty() {
            self.filters.push((key.to_string(), value.to_string()));
        }
        self
    }

    pub fn to_query(&self) -> Vec<(String, String)> {
        let mut query = vec![
            ("page".to_string(), self.page.to_string()),
            ("size".to_string(), self.size.to_string()),
        ];
        if let Some(sort) = &self.sort {
            query.push(("sortBy".to_string(), sort.sort_by.clone()));
            query.push((
                "sortDirection".to_string(),
                sort.direction.as_query_value().to_string(),
            ));
        }
        query.extend(self.filters.iter().cloned());
        query
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PageMeta {
    pub page: u32,
    pub size: u32,
    pub total_elements: u64,
    pub total_pages: u32,
    pub first: bool,
    pub last: bool,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Page<T> {
    #[serde(default = "Vec::new")]
    pub content: Vec<T>,
    #[serde(default, alias = "page")]
    pub number: u32,
    #[serde(default)]
    pub size: u32,
    #[serde(default)]
    pub total_elements: u64,
    #[serde(default)]
    pub total_pages: u32,
    #[serde(default = "default_true")]
    pub first: bool,
    #[serde(default = "default_true")]
    pub last: bool,
}

fn default_true() -> bool {
    true
}

impl<T> Page<T> {
    pub fn empty() -> Self {
        Self {
            content: Vec::new(),
            number: 0,
            size: 0,
            total_elements: 0,
            total_pages: 0,
            first: true,
            last: true,
        }
    }

    pub fn meta(&self) -> PageMeta {
        PageMeta {
            page: self.number,
            size: self.size,
            total_elements: self.total_elements,
            total_pages: self.total_pages,
            first: self.first,
            last: self.last,
        }
    }
}
