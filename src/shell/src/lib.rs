//! I/O shell abstractions for the arena.
//!
//! The core never touches the terminal directly; it asks a [`Shell`] for
//! discrete user choices and hands it display messages. This keeps the
//! combat engine and the session controller runnable against scripted,
//! non-interactive input in tests.

use std::collections::VecDeque;
use std::io::{self, BufRead};

use crossterm::{
    execute,
    style::{Color, Print, ResetColor, SetForegroundColor},
};
use error::ArenaError;

/// The two capabilities the core requires from its environment.
pub trait Shell {
    /// Block until the user supplies a line of text for the given prompt.
    /// The returned string may be empty or malformed; callers validate.
    fn request_choice(&mut self, prompt: &str) -> Result<String, ArenaError>;

    /// Fire-and-forget display of a message. No acknowledgment.
    fn notify(&mut self, message: &str);
}

/// Console implementation over stdin/stdout.
///
/// 逐行对话式交互，不进入 raw mode，也不占用备用屏幕。
pub struct ConsoleShell;

impl ConsoleShell {
    pub fn new() -> Self {
        Self
    }
}

impl Default for ConsoleShell {
    fn default() -> Self {
        Self::new()
    }
}

impl Shell for ConsoleShell {
    fn request_choice(&mut self, prompt: &str) -> Result<String, ArenaError> {
        let mut stdout = io::stdout();
        execute!(
            stdout,
            SetForegroundColor(Color::Cyan),
            Print(prompt),
            Print("\n> "),
            ResetColor,
        )?;

        let mut line = String::new();
        io::stdin().lock().read_line(&mut line)?;
        Ok(line.trim().to_string())
    }

    fn notify(&mut self, message: &str) {
        // 显示失败无处上报，按 fire-and-forget 约定静默丢弃
        let _ = execute!(
            io::stdout(),
            SetForegroundColor(Color::Yellow),
            Print(message),
            Print("\n"),
            ResetColor,
        );
    }
}

/// Scripted shell for tests: feeds queued answers, captures every notice.
///
/// 测试路径中没有真实终端；耗尽脚本视为输入流关闭。
#[derive(Debug, Default)]
pub struct ScriptedShell {
    inputs: VecDeque<String>,
    pub prompts: Vec<String>,
    pub notices: Vec<String>,
}

impl ScriptedShell {
    pub fn new<I, S>(inputs: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            inputs: inputs.into_iter().map(Into::into).collect(),
            prompts: Vec::new(),
            notices: Vec::new(),
        }
    }

    /// True if some captured notice contains the given fragment.
    pub fn saw(&self, fragment: &str) -> bool {
        self.notices.iter().any(|n| n.contains(fragment))
    }
}

impl Shell for ScriptedShell {
    fn request_choice(&mut self, prompt: &str) -> Result<String, ArenaError> {
        self.prompts.push(prompt.to_string());
        self.inputs.pop_front().ok_or_else(|| {
            ArenaError::Io(io::Error::new(
                io::ErrorKind::UnexpectedEof,
                "scripted input exhausted",
            ))
        })
    }

    fn notify(&mut self, message: &str) {
        self.notices.push(message.to_string());
    }
}
