// 拦截流量记录
// 记录由代理宿主持有，抓包侧只读、不修改

use bytes::Bytes;

/// 拦截到的请求
#[derive(Debug, Clone)]
pub struct RequestRecord {
    pub method: String,
    /// 完整 URL
    pub url: String,
    pub host: String,
    /// Header 键值对，保持接收顺序
    pub headers: Vec<(String, String)>,
    /// 原始请求体（空 = 无请求体）
    pub content: Bytes,
}

impl RequestRecord {
    pub fn new(
        method: impl Into<String>,
        url: impl Into<String>,
        host: impl Into<String>,
    ) -> Self {
        Self {
            method: method.into(),
            url: url.into(),
            host: host.into(),
            headers: Vec::new(),
            content: Bytes::new(),
        }
    }

    pub fn header(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((key.into(), value.into()));
        self
    }

    pub fn body(mut self, content: impl Into<Bytes>) -> Self {
        self.content = content.into();
        self
    }
}

/// 拦截到的响应
#[derive(Debug, Clone)]
pub struct ResponseRecord {
    pub status_code: u16,
    pub headers: Vec<(String, String)>,
    pub content: Bytes,
}

impl ResponseRecord {
    pub fn new(status_code: u16) -> Self {
        Self {
            status_code,
            headers: Vec::new(),
            content: Bytes::new(),
        }
    }

    pub fn header(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((key.into(), value.into()));
        self
    }

    pub fn body(mut self, content: impl Into<Bytes>) -> Self {
        self.content = content.into();
        self
    }
}

/// 一次完整的拦截交换：请求 + （可选）响应
/// 响应侧回调通过 request.host 做目标过滤
#[derive(Debug, Clone)]
pub struct Flow {
    pub request: RequestRecord,
    pub response: Option<ResponseRecord>,
}

impl Flow {
    pub fn new(request: RequestRecord) -> Self {
        Self {
            request,
            response: None,
        }
    }

    pub fn with_response(mut self, response: ResponseRecord) -> Self {
        self.response = Some(response);
        self
    }
}
