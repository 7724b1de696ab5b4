use crate::domain::entities::page::PageMeta;

pub const PAGE_WINDOW: u32 = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageButton {
    /// Zero-based index handed to the page-change callback.
    pub index: u32,
    pub current: bool,
}

impl PageButton {
    pub fn label(&self) -> String {
        (self.index + 1).to_string()
    }
}

pub fn prev_target(meta: &PageMeta) -> Option<u32> {
    (!meta.first && meta.page > 0).then(|| meta.page - 1)
}

pub fn next_target(meta: &PageMeta) -> Option<u32> {
    (!meta.last && meta.page + 1 < meta.total_pages).then(|| meta.page + 1)
}

/// Up to [`PAGE_WINDOW`] numbered buttons centred on the current page.
pub fn page_buttons(meta: &PageMeta) -> Vec<PageButton> {
    if meta.total_pages == 0 {
        return Vec::new();
    }
    let window = PAGE_WINDOW.min(meta.total_pages);
    let current = meta.page.min(meta.total_pages - 1);
    let start = current
        .saturating_sub(window / 2)
        .min(meta.total_pages - window);
    (start..start + window)
        .map(|index| PageButton {
            index,
            current: index == current,
        })
        .collect()
}
