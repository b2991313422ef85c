//！┌─────────────────────────────────────────────────────────────────────────────┐
//！│                              主循环 (app.rs)                               │
//！│                                                                            │
//！│  ┌────────────────────────────── UI 层 ───────────────────────────────┐   │
//！│  │                                                                     │   │
//！│  │   ┌─────────┐          ┌───────────┐          ┌──────────┐         │   │
//！│  │   │  Event  │ ───────▶ │  Message  │ ───────▶ │  Update  │         │   │
//！│  │   │   层    │   翻译    │    层     │   消费    │    层    │         │   │
//！│  │   └─────────┘          │           │          └────┬─────┘         │   │
//！│  │        ▲               │ AppMessage│               │ 修改          │   │
//！│  │        │               │ ModalMsg  │               ▼               │   │
//！│  │   ┌─────────┐          │ ContentMsg│          ┌──────────┐         │   │
//！│  │   │  View   │          │ NavMsg    │   ┌───── │  Model   │         │   │
//！│  │   │   层    │          └───────────┘   │      │    层    │         │   │
//！│  │   └────┬────┘ ◀──────── 读取 ──────────┘      └────┬─────┘         │   │
//！│  │        │                                           │               │   │
//！│  └────────│───────────────────────────────────────────│───────────────┘   │
//！│           │                                           │ 异步调用          │
//！│           ▼                                           ▼                   │
//！│      ┌─────────┐                                ┌──────────┐              │
//！│      │  终端   │                                │ Backend  │              │
//！│      │ (Util)  │                                │    层    │              │
//！│      └─────────┘                                └────┬─────┘              │
//！│                                                      │                    │
//！│                                                      ▼                    │
//！│                                           ┌───────────────────┐           │
//！│                                           │  data-browser-    │           │
//！│                                           │      core         │           │
//！│                                           └───────────────────┘           │
//！└─────────────────────────────────────────────────────────────────────────────┘


//!
//! src/model/mod.rs
//! Model 层：应用状态定义
//!
//! Model 层是应用状态的 “唯一真相来源”。
//! 这一层只包含数据结构和简单的读写辅助方法，不发起请求。
//! 所有状态变更都通过 Update 层来触发。
//!
//!
//! 有模块结构：
//!     src/model/mod.rs
//!         mod app;            // 主应用状态
//!         mod focus;          // 焦点状态（Navigation / Content）
//!         mod navigation;     // 导航栏状态（Users / Products）
//!         mod page;           // 页面路由状态
//!
//!         pub mod state;      // 页面数据状态（数据集浏览状态、弹窗）
//!
//!     page.rs 与 state/ 的区别：
//!         - Page 是一个简单的枚举，表示当前显示哪个数据集，只负责标识位置；
//!         - BrowserState 存储该数据集的会话（页大小、页码、标签、过滤条件、
//!             已加载的记录、请求序号），以及选中行和过滤栏的显示状态。
//!
//!
//! ═══════════════════════════════════════════════════════════════════════════
//! 一、主应用状态（App）
//! ═══════════════════════════════════════════════════════════════════════════
//!
//!     App {
//!         should_quit: false,
//!         focus: FocusPanel::Content,
//!         navigation: NavigationState { items: [Users, Products], selected: 0 },
//!         current_page: Page::Users,
//!         status_message: None,
//!         browsers: [BrowserState(users), BrowserState(products)],
//!         modal: ModalState { active: None },
//!         backend: Arc<dyn FetchDispatcher>,
//!     }
//!
//!     每个数据集的 BrowserState 在切换页面后保留，
//!     回到该页面时看到的是离开前的页码、过滤条件和数据。
//!
//!
//! ═══════════════════════════════════════════════════════════════════════════
//! 二、请求与响应
//! ═══════════════════════════════════════════════════════════════════════════
//!
//!     BrowserSession 的每个状态迁移可能返回一个 FetchTicket（带递增序号），
//!     Update 层把它交给 backend 执行。响应回来时只有序号等于最新序号的才会生效，
//!     所以快速翻页时慢的旧响应不会覆盖新数据。
//!

mod app;
mod focus;
mod navigation;
mod page;
pub mod state;

pub use app::App;
pub use focus::FocusPanel;
pub use navigation::{NavItemId, NavigationState};
pub use page::Page;
pub use state::{BrowserState, Modal, ModalState};
