use crate::errors::{AppError, AppResult};

/// Allowed page sizes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PageSize {
    Five,
    #[default]
    Ten,
    TwentyFive,
}

impl PageSize {
    pub const ALL: [PageSize; 3] = [PageSize::Five, PageSize::Ten, PageSize::TwentyFive];

    pub fn get(&self) -> usize {
        match self {
            PageSize::Five => 5,
            PageSize::Ten => 10,
            PageSize::TwentyFive => 25,
        }
    }
}

impl TryFrom<usize> for PageSize {
    type Error = AppError;

    fn try_from(n: usize) -> AppResult<Self> {
        PageSize::ALL
            .into_iter()
            .find(|p| p.get() == n)
            .ok_or(AppError::InvalidPageSize(n))
    }
}

/// `ceil(total / size)`; zero for an empty set.
pub fn page_count(total: usize, size: PageSize) -> usize {
    total.div_ceil(size.get())
}

/// Slice one 1-based page out of `items`. Out-of-range pages are empty.
pub fn paginate<T>(items: &[T], page: usize, size: PageSize) -> &[T] {
    if page == 0 {
        return &[];
    }
    let start = (page - 1).saturating_mul(size.get());
    if start >= items.len() {
        return &[];
    }
    let end = (start + size.get()).min(items.len());
    &items[start..end]
}

/// Current page index and size.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pager {
    page: usize,
    size: PageSize,
}

impl Pager {
    pub fn new(size: PageSize) -> Self {
        Self { page: 1, size }
    }

    pub fn page(&self) -> usize {
        self.page
    }

    pub fn size(&self) -> PageSize {
        self.size
    }

    /// Changing the page size always goes back to the first page.
    pub fn set_size(&mut self, size: PageSize) {
        self.size = size;
        self.page = 1;
    }

    pub fn reset(&mut self) {
        self.page = 1;
    }

    /// Move to `page`, clamped to `1..=page_count(total)`.
    pub fn go_to(&mut self, page: usize, total: usize) {
        let last = page_count(total, self.size).max(1);
        self.page = page.clamp(1, last);
    }
}

/// One rendered page of a larger set.
#[derive(Debug, Clone, PartialEq)]
pub struct Page<'a, T> {
    pub items: &'a [T],
    pub number: usize,
    pub count: usize,
    pub total: usize,
}
