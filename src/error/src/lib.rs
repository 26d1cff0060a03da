//! 竞技场错误处理模块
//!
//! 处理会话过程中可能出现的各种错误：名册索引、数值解析、IO等。
//! 除 IO 错误外，所有错误都在会话控制器内就地恢复。

use thiserror::Error;

/// 会话过程中可能出现的错误类型
#[derive(Debug, Error)]
pub enum ArenaError {
    /// 试图将非英雄加入名册
    #[error("Only a hero can join the roster, got: {0}")]
    NotAHero(String),

    /// 1-based 索引越界（选择或删除）
    #[error("Index {index} is out of range (1..={len})")]
    OutOfRange { index: usize, len: usize },

    /// 需要整数的地方收到了无法解析的文本
    #[error("Expected a base-10 integer, got {0:?}")]
    InvalidNumber(String),

    /// IO操作错误（外壳读写失败）
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// 把错误转换为面向用户的警告文案
///
/// 控制器用它生成提示消息；IO 错误不在此处美化，直接向上传播。
pub fn user_message(error: &ArenaError) -> String {
    match error {
        ArenaError::NotAHero(name) => {
            format!("You can only add a hero to the roster. {name} is not one.")
        }
        ArenaError::OutOfRange { .. } => "Invalid index".to_string(),
        ArenaError::InvalidNumber(_) => "Please enter a valid number".to_string(),
        ArenaError::Io(e) => format!("IO error: {e}"),
    }
}

/// 解析用户输入的十进制整数
///
/// 统一入口，保证所有数字输入走同一套 `InvalidNumber` 恢复路径。
pub fn parse_number(text: &str) -> Result<u32, ArenaError> {
    text.trim()
        .parse::<u32>()
        .map_err(|_| ArenaError::InvalidNumber(text.to_string()))
}
