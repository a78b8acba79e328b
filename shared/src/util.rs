/// 获取当前 UTC 时间戳（毫秒）
pub fn now_millis() -> i64 {
    chrono::Utc::now().timestamp_millis()
}

/// Format a price the way the page shows it (`₹220`)
pub fn format_price(symbol: &str, amount: crate::types::Price) -> String {
    format!("{symbol}{amount}")
}
