//!
//! app.rs
//! 应用主循环
//!
//! 主循环大约每 100 ms 执行一次（取决于有无事件）：
//!
//! loop {
//!     terminal.draw(|f| view::render(&app, f))       // 渲染 UI
//!     if app.should_quit { break }                    // 检查是否应该退出
//!     while let Ok(msg) = rx.try_recv() { ... }       // 消费已完成的后台请求
//!     if let Some(event) = poll_event() { ... }       // 等待按键，最多 100ms
//! }
//!
//! 后台结果与按键都交给同一个 `update::update()`，
//! 其返回的 FetchRequest 交给 Backend 在 tokio 运行时上执行。
//! 请求在途时主循环照常响应按键，因此加载中也可以随时按 q 退出。

use std::time::Duration;

use anyhow::Result;
use tokio::sync::mpsc::UnboundedReceiver;

use crate::backend::Backend;
use crate::event;
use crate::message::AppMessage;
use crate::model::App;
use crate::update;
use crate::util::Term;
use crate::view;

const POLL_INTERVAL: Duration = Duration::from_millis(100);

/// 运行应用主循环
pub fn run(
    terminal: &mut Term,
    app: &mut App,
    backend: &Backend,
    rx: &mut UnboundedReceiver<AppMessage>,
) -> Result<()> {
    backend.dispatch(app.begin());

    loop {
        // 1. 渲染 UI
        terminal.draw(|frame| {
            view::render(app, frame);
        })?;

        // 2. 检查是否应该退出
        if app.should_quit {
            break;
        }

        // 3. 消费后台结果，按到达顺序
        while let Ok(msg) = rx.try_recv() {
            apply(app, backend, msg);
        }

        // 4. 轮询事件（100ms 超时）
        if let Some(event) = event::poll_event(POLL_INTERVAL)? {
            let msg = event::handle_event(event);
            apply(app, backend, msg);
        }
    }

    Ok(())
}

/// 更新状态，并执行产生的请求
fn apply(app: &mut App, backend: &Backend, msg: AppMessage) {
    if let Some(request) = update::update(app, msg) {
        backend.dispatch(request);
    }
}
