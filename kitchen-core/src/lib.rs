//! Mom's Kitchen - 菜单、购物车与预订
//!
//! # 架构概述
//!
//! 单线程、事件驱动的店面核心，浏览器绑定 (`kitchen-web`) 与命令行工具
//! (`moms-kitchen`) 共用：
//!
//! - **购物车** (`cart`): 持久化的行项目 + 变更通知
//! - **存储** (`storage`): `KeyValueStore` 抽象 (memory / file / localStorage)
//! - **视图** (`view`): 纯投影，菜单卡片、购物车面板、徽标
//! - **命令** (`command`): UI 意图 → `Effect`
//! - **表单** (`forms`): 预订与联系表单校验
//!
//! # 模块结构
//!
//! ```text
//! kitchen-core/src/
//! ├── core/          # 配置
//! ├── cart/          # CartStore、CartChange、RedrawPlan
//! ├── storage/       # KeyValueStore 及实现
//! ├── view/          # 视图模型
//! ├── forms/         # 表单处理
//! ├── utils/         # 日志、校验
//! ├── catalog.rs     # 内置菜单与特色菜
//! ├── history.rs     # 预订记录、历史订单
//! ├── placeholder.rs # SVG 占位图
//! ├── storefront.rs  # 命令分发
//! └── cli.rs         # 命令行驱动 (feature `cli`)
//! ```

pub mod cart;
pub mod catalog;
#[cfg(feature = "cli")]
pub mod cli;
pub mod command;
pub mod core;
pub mod forms;
pub mod history;
pub mod placeholder;
pub mod storage;
pub mod storefront;
pub mod utils;
pub mod view;

// Re-export 公共类型
pub use cart::{CartChange, CartStore, CartSummary, ChangeKind, MenuRedraw, RedrawPlan};
pub use catalog::Catalog;
pub use command::{Effect, UiCommand};
pub use crate::core::Config;
pub use forms::{FormOutcome, FormStatus};
pub use storage::{FileStorage, KeyValueStore, MemoryStorage, StorageError};
pub use storefront::Storefront;
pub use utils::{AppError, AppResult, ErrorCategory, ErrorCode};

// Re-export logger functions
#[cfg(feature = "cli")]
pub use utils::logger::{init_logger, init_logger_with_file};
