/// 首页文章分页
///
/// 对按主键升序排列的完整文章列表做窗口切分，并给出上一页/下一页的
/// 导航目标。页码参数来自查询串，可能缺失或不是数字。
#[derive(Debug)]
pub struct PageView<'a, T> {
    items: &'a [T],
    page: usize,
    last_page: usize,
}

/// 解析并裁剪页码参数
///
/// - 缺失、非数字或为 0 的参数按第 1 页处理
/// - 超出末页的页码裁剪到末页，不报错
pub fn resolve_page(token: Option<&str>, last_page: usize) -> usize {
    token
        .and_then(|t| t.trim().parse::<usize>().ok())
        .filter(|p| *p >= 1)
        .unwrap_or(1)
        .min(last_page)
}

/// 对 `items` 做分页
///
/// `per_page` 必须大于 0。空列表视作只有一页（空窗口），
/// 避免 `last_page` 为 0 的退化区间。
pub fn paginate<'a, T>(items: &'a [T], token: Option<&str>, per_page: usize) -> PageView<'a, T> {
    assert!(per_page > 0, "per_page must be positive");

    let last_page = items.len().div_ceil(per_page).max(1);
    let page = resolve_page(token, last_page);

    let start = (page - 1) * per_page;
    let end = usize::min(start + per_page, items.len());
    let window = items.get(start..end).unwrap_or(&[]);

    PageView {
        items: window,
        page,
        last_page,
    }
}

impl<'a, T> PageView<'a, T> {
    /// 当前页的文章窗口，至多 `per_page` 条
    pub fn items(&self) -> &'a [T] {
        self.items
    }

    pub fn page(&self) -> usize {
        self.page
    }

    pub fn last_page(&self) -> usize {
        self.last_page
    }

    /// 上一页页码，第一页时为 `None`
    pub fn prev(&self) -> Option<usize> {
        (self.page > 1).then(|| self.page - 1)
    }

    /// 下一页页码，末页时为 `None`
    pub fn next(&self) -> Option<usize> {
        (self.page < self.last_page).then(|| self.page + 1)
    }

    pub fn prev_href(&self) -> Option<String> {
        self.prev().map(|p| format!("/?page={p}"))
    }

    pub fn next_href(&self) -> Option<String> {
        self.next().map(|p| format!("/?page={p}"))
    }
}
