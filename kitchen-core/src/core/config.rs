/// 店面配置 - storage keys, navigation target and display settings
///
/// # 环境变量
///
/// 所有配置项都可以通过环境变量覆盖（仅 CLI；浏览器中使用默认值）：
///
/// | 环境变量 | 默认值 | 说明 |
/// |----------|--------|------|
/// | WORK_DIR | ./.moms-kitchen | CLI 本地存储目录 |
/// | LOG_LEVEL | info | 日志级别 |
/// | LOG_DIR | (unset) | 日志文件目录 |
/// | CART_KEY | moms_cart | 购物车存储键 |
/// | ORDERS_KEY | moms_orders | 历史订单存储键 |
/// | RESERVATIONS_KEY | moms_reservations | 预订存储键 |
/// | ORDER_PAGE | order.html | 结账跳转页面 |
/// | CURRENCY_SYMBOL | ₹ | 货币符号 |
///
/// # 示例
///
/// ```ignore
/// WORK_DIR=/tmp/kitchen CART_KEY=test_cart moms-kitchen cart
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// 工作目录，CLI 在此存放模拟的 localStorage 文件
    pub work_dir: String,
    pub log_level: String,
    pub log_dir: Option<String>,
    /// 购物车 JSON 对象的存储键
    pub cart_key: String,
    /// 历史订单列表的存储键（由订单页写入，这里只读取数量）
    pub orders_key: String,
    /// 预订列表的存储键
    pub reservations_key: String,
    /// Checkout / quick order 跳转目标（相对路径）
    pub order_page: String,
    pub currency_symbol: String,
}

impl Config {
    /// 从环境变量加载配置
    ///
    /// 如果环境变量未设置，使用默认值
    pub fn from_env() -> Self {
        let defaults = Self::defaults();
        Self {
            work_dir: std::env::var("WORK_DIR").unwrap_or(defaults.work_dir),
            log_level: std::env::var("LOG_LEVEL").unwrap_or(defaults.log_level),
            log_dir: std::env::var("LOG_DIR").ok().filter(|d| !d.trim().is_empty()),
            cart_key: std::env::var("CART_KEY").unwrap_or(defaults.cart_key),
            orders_key: std::env::var("ORDERS_KEY").unwrap_or(defaults.orders_key),
            reservations_key: std::env::var("RESERVATIONS_KEY")
                .unwrap_or(defaults.reservations_key),
            order_page: std::env::var("ORDER_PAGE").unwrap_or(defaults.order_page),
            currency_symbol: std::env::var("CURRENCY_SYMBOL")
                .unwrap_or(defaults.currency_symbol),
        }
    }

    /// Built-in values, no environment lookup (browser builds use these)
    pub fn defaults() -> Self {
        Self {
            work_dir: "./.moms-kitchen".into(),
            log_level: "info".into(),
            log_dir: None,
            cart_key: "moms_cart".into(),
            orders_key: "moms_orders".into(),
            reservations_key: "moms_reservations".into(),
            order_page: "order.html".into(),
            currency_symbol: "₹".into(),
        }
    }

    /// 使用自定义工作目录覆盖配置
    ///
    /// 常用于测试场景
    pub fn with_work_dir(work_dir: impl Into<String>) -> Self {
        let mut config = Self::defaults();
        config.work_dir = work_dir.into();
        config
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::defaults()
    }
}
