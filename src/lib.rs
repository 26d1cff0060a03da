//! Terminal Monster Arena
//!
//! 回合制对决模拟器的会话层。核心逻辑分布在 workspace 子 crate 中：
//! `combat`（角色模型与对决状态机）、`roster`（名册）、`shell`（I/O 外壳）、
//! `error`（错误分类）。本 crate 只提供把它们串起来的会话控制器。

pub mod game;

pub use crate::game::{Game, MAIN_MENU, MenuChoice};
