// 观察者接口 - 宿主回调契约
// 宿主对每个拦截到的请求/响应各调用一次，返回值不被消费

use std::sync::Arc;

use super::flow::Flow;

/// 流量观察者
/// 两个回调都有默认空实现，观察者可以只关心一侧
pub trait FlowObserver: Send + Sync {
    fn on_request(&self, _flow: &Flow) {}

    fn on_response(&self, _flow: &Flow) {}
}

/// 观察者注册表 - 显式注册点
/// 注册完成后只读，可在宿主的任意工作线程间共享
#[derive(Default)]
pub struct ObserverRegistry {
    observers: Vec<Arc<dyn FlowObserver>>,
}

impl ObserverRegistry {
    pub fn new() -> Self {
        Self {
            observers: Vec::new(),
        }
    }

    /// 注册观察者，按注册顺序通知
    pub fn register<O: FlowObserver + 'static>(&mut self, observer: O) {
        self.observers.push(Arc::new(observer));
    }

    pub fn notify_request(&self, flow: &Flow) {
        for observer in &self.observers {
            observer.on_request(flow);
        }
    }

    pub fn notify_response(&self, flow: &Flow) {
        for observer in &self.observers {
            observer.on_response(flow);
        }
    }

    pub fn len(&self) -> usize {
        self.observers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.observers.is_empty()
    }
}
