//! Antigravity IDE 请求抓包库
//!
//! 观察代理宿主拦截到的 cloudcode-pa 流量，
//! 对 Authorization 脱敏、对请求体做摘要后输出到控制台。
//! 代理引擎本身由宿主提供，这里只实现观察者一侧。

pub mod capture;

pub use capture::{
    capture_flow, summarize_body, BodySummary, CaptureLogger, Flow, FlowObserver,
    ObserverRegistry, RequestRecord, ResponseRecord, SummaryError, TARGET_HOSTS,
};
