//! 页面状态定义

/// 页面枚举
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Page {
    /// 用户列表
    #[default]
    Users,
    /// 商品列表
    Products,
}

impl Page {
    /// 页面对应的数据集 id
    pub fn dataset_id(self) -> &'static str {
        match self {
            Page::Users => "users",
            Page::Products => "products",
        }
    }
}
