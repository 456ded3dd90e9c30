// capture 模块 - 代理流量抓包
// 观察宿主拦截的请求/响应，脱敏后输出到控制台

pub mod flow;
pub mod logger;
pub mod middleware;
pub mod observer;
pub mod redact;
pub mod summary;

pub use flow::{Flow, RequestRecord, ResponseRecord};
pub use logger::CaptureLogger;
pub use middleware::capture_flow;
pub use observer::{FlowObserver, ObserverRegistry};
pub use summary::{summarize_body, BodySummary, SummaryError};

/// 目标 API 端点（子串匹配，初始化后只读）
pub const TARGET_HOSTS: &[&str] = &[
    "cloudcode-pa.googleapis.com",
    "daily-cloudcode-pa.sandbox.googleapis.com",
];
