// 抓包中间件 - axum 宿主接入点
// 宿主通过 axum::middleware::from_fn_with_state 挂载；只观察不改写

use std::sync::Arc;

use axum::{
    body::Body,
    extract::{Request, State},
    middleware::Next,
    response::Response,
};
use bytes::Bytes;

use super::flow::{Flow, RequestRecord, ResponseRecord};
use super::observer::ObserverRegistry;

/// 抓取一次完整交换并通知注册表
/// 请求体和响应体都会被完整缓冲后再转发，只适合调试场景；
/// 读取失败时降级为空体继续转发，不中断交换本身
pub async fn capture_flow(
    State(observers): State<Arc<ObserverRegistry>>,
    request: Request,
    next: Next,
) -> Response {
    let (parts, body) = request.into_parts();
    let content = match axum::body::to_bytes(body, usize::MAX).await {
        Ok(bytes) => bytes,
        Err(e) => {
            tracing::warn!("读取请求体失败: {}", e);
            Bytes::new()
        }
    };

    let record = RequestRecord {
        method: parts.method.to_string(),
        url: parts.uri.to_string(),
        host: request_host(&parts),
        headers: header_pairs(&parts.headers),
        content: content.clone(),
    };
    let mut flow = Flow::new(record);
    observers.notify_request(&flow);

    let request = Request::from_parts(parts, Body::from(content));
    let response = next.run(request).await;

    let (parts, body) = response.into_parts();
    let content = match axum::body::to_bytes(body, usize::MAX).await {
        Ok(bytes) => bytes,
        Err(e) => {
            tracing::warn!("读取响应体失败: {}", e);
            Bytes::new()
        }
    };

    flow.response = Some(ResponseRecord {
        status_code: parts.status.as_u16(),
        headers: header_pairs(&parts.headers),
        content: content.clone(),
    });
    observers.notify_response(&flow);

    Response::from_parts(parts, Body::from(content))
}

/// 绝对 URI 优先，其次 Host 头（去端口）
fn request_host(parts: &axum::http::request::Parts) -> String {
    if let Some(host) = parts.uri.host() {
        return host.to_string();
    }
    parts
        .headers
        .get(axum::http::header::HOST)
        .and_then(|value| value.to_str().ok())
        .map(|host| host.split(':').next().unwrap_or(host).to_string())
        .unwrap_or_default()
}

fn header_pairs(headers: &axum::http::HeaderMap) -> Vec<(String, String)> {
    headers
        .iter()
        .map(|(name, value)| {
            (
                name.as_str().to_string(),
                String::from_utf8_lossy(value.as_bytes()).into_owned(),
            )
        })
        .collect()
}
