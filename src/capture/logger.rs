// 流量抓包输出
// 对命中目标主机的请求/响应打印脱敏视图，其余流量静默忽略

use std::io::{self, Write};
use std::sync::Mutex;

use serde_json::Value;

use super::flow::{Flow, ResponseRecord};
use super::observer::FlowObserver;
use super::redact::redact_header_value;
use super::summary::summarize_body;
use super::TARGET_HOSTS;

/// 错误响应体最多展示的原始字节数
const ERROR_BODY_PREVIEW_BYTES: usize = 500;

/// 控制台抓包输出
/// 回调本身无状态，目标主机列表在构造后只读
pub struct CaptureLogger {
    targets: Vec<String>,
    sink: Mutex<Box<dyn Write + Send>>,
}

impl CaptureLogger {
    /// 输出到 stdout，监听内置目标主机
    pub fn new() -> Self {
        Self::with_sink(Box::new(io::stdout()))
    }

    pub fn with_sink(sink: Box<dyn Write + Send>) -> Self {
        Self {
            targets: TARGET_HOSTS.iter().map(|s| s.to_string()).collect(),
            sink: Mutex::new(sink),
        }
    }

    /// 替换目标主机列表
    pub fn with_targets(mut self, targets: Vec<String>) -> Self {
        self.targets = targets;
        self
    }

    /// 子串匹配，大小写敏感
    fn is_target(&self, host: &str) -> bool {
        self.targets.iter().any(|target| host.contains(target))
    }

    /// 整块一次写入，避免并发交换的输出互相穿插到行中间
    fn emit(&self, block: &str) {
        let mut sink = match self.sink.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        };
        if let Err(e) = sink
            .write_all(block.as_bytes())
            .and_then(|_| sink.flush())
        {
            tracing::warn!("抓包输出写入失败: {}", e);
        }
    }

    /// 请求侧回调入口
    pub fn log_request(&self, flow: &Flow) {
        if !self.is_target(&flow.request.host) {
            return;
        }
        let ts = chrono::Local::now().format("%H:%M:%S").to_string();
        self.emit(&render_request(flow, &ts));
    }

    /// 响应侧回调入口
    pub fn log_response(&self, flow: &Flow) {
        if !self.is_target(&flow.request.host) {
            return;
        }
        let Some(response) = &flow.response else {
            tracing::debug!("响应回调缺少响应记录: {}", flow.request.url);
            return;
        };
        let ts = chrono::Local::now().format("%H:%M:%S").to_string();
        self.emit(&render_response(response, &ts));
    }
}

impl Default for CaptureLogger {
    fn default() -> Self {
        Self::new()
    }
}

impl FlowObserver for CaptureLogger {
    fn on_request(&self, flow: &Flow) {
        self.log_request(flow);
    }

    fn on_response(&self, flow: &Flow) {
        self.log_response(flow);
    }
}

/// 渲染请求块，时间戳由调用方注入
fn render_request(flow: &Flow, ts: &str) -> String {
    let rule = "=".repeat(80);
    let sep = "-".repeat(40);
    let mut out = String::new();

    out.push('\n');
    out.push_str(&rule);
    out.push('\n');
    out.push_str(&format!(
        "[{}] 捕获请求: {} {}\n",
        ts, flow.request.method, flow.request.url
    ));
    out.push_str(&rule);
    out.push('\n');

    out.push_str("\n📋 请求 Headers:\n");
    out.push_str(&sep);
    out.push('\n');
    for (key, value) in &flow.request.headers {
        out.push_str(&format!("  {}: {}\n", key, redact_header_value(key, value)));
    }

    if !flow.request.content.is_empty() {
        out.push_str("\n📦 请求 Body:\n");
        out.push_str(&sep);
        out.push('\n');
        match summarize_body(&flow.request.content) {
            Ok(summary) => {
                let pretty = serde_json::to_string_pretty(&summary).unwrap_or_default();
                out.push_str(&pretty);
                out.push('\n');
            }
            Err(_) => {
                out.push_str(&format!(
                    "  (binary data, {} bytes)\n",
                    flow.request.content.len()
                ));
            }
        }
    }

    out.push('\n');
    out
}

/// 渲染响应块；>= 400 时附带错误详情
fn render_response(response: &ResponseRecord, ts: &str) -> String {
    let mut out = String::new();
    out.push_str(&format!("[{}] 响应状态: {}\n", ts, response.status_code));

    if response.status_code >= 400 {
        out.push_str("❌ 错误响应:\n");
        match serde_json::from_slice::<Value>(&response.content) {
            Ok(error) => {
                let pretty = serde_json::to_string_pretty(&error).unwrap_or_default();
                out.push_str(&pretty);
                out.push('\n');
            }
            Err(_) => {
                let end = response.content.len().min(ERROR_BODY_PREVIEW_BYTES);
                out.push_str(&String::from_utf8_lossy(&response.content[..end]));
                out.push('\n');
            }
        }
    }

    out.push('\n');
    out
}
