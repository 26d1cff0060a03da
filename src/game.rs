//! 会话控制器：主菜单循环
//!
//! 读取菜单令牌并分派到名册操作或对决；名册在进程启动时注入，
//! 控制器自身不持有任何终端细节。

use combat::{Bout, Hero};
use error::{ArenaError, parse_number, user_message};
use roster::{Candidate, Roster};
use shell::Shell;

/// 主菜单文案；令牌 `"0"`..`"4"` 的含义是对外契约，不可改动
pub const MAIN_MENU: &str = "\
0) Exit
1) Choose a hero
2) Add a new hero
3) Delete a hero
4) Display all heroes";

/// 主菜单令牌解析结果
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Exit,
    StartBout,
    AddHero,
    DeleteHero,
    ListHeroes,
}

impl MenuChoice {
    pub fn from_token(token: &str) -> Option<Self> {
        match token.trim() {
            "0" => Some(MenuChoice::Exit),
            "1" => Some(MenuChoice::StartBout),
            "2" => Some(MenuChoice::AddHero),
            "3" => Some(MenuChoice::DeleteHero),
            "4" => Some(MenuChoice::ListHeroes),
            _ => None,
        }
    }
}

/// One interactive session: owns the roster, borrows a shell per run.
pub struct Game {
    roster: Roster,
}

impl Game {
    pub fn new(roster: Roster) -> Self {
        Self { roster }
    }

    pub fn roster(&self) -> &Roster {
        &self.roster
    }

    /// Drive the menu loop until the exit token arrives. Everything except
    /// shell IO failures is recovered locally with a notification.
    pub fn run<S: Shell>(&mut self, shell: &mut S) -> Result<(), ArenaError> {
        loop {
            let token = shell.request_choice(MAIN_MENU)?;
            match MenuChoice::from_token(&token) {
                Some(MenuChoice::Exit) => break,
                Some(MenuChoice::StartBout) => self.start_bout(shell)?,
                Some(MenuChoice::AddHero) => self.add_hero(shell)?,
                Some(MenuChoice::DeleteHero) => self.delete_hero(shell)?,
                Some(MenuChoice::ListHeroes) => shell.notify(&self.hero_listing()),
                None => shell.notify("Invalid selection. Please try again."),
            }
        }
        shell.notify("Have a nice day!");
        Ok(())
    }

    /// 英雄、对手都由用户显式挑选，随后把对决跑到终局
    fn start_bout<S: Shell>(&mut self, shell: &mut S) -> Result<(), ArenaError> {
        let hero_prompt = format!("Choose a hero by number:\n{}", self.hero_listing());
        let hero_index = Self::choose_index(
            shell,
            &hero_prompt,
            self.roster.heroes().len(),
            "Invalid hero selection. Choosing the first hero by default.",
        )?;

        let adversary_prompt = format!("Choose a monster by number:\n{}", self.adversary_listing());
        let adversary_index = Self::choose_index(
            shell,
            &adversary_prompt,
            self.roster.adversaries().len(),
            "Invalid monster selection. Choosing the first monster by default.",
        )?;

        // 名册可能被删空，此时连回退的 1 号也不存在，就地告警放弃
        let (hero, adversary) = match self.roster.bout_pair(hero_index, adversary_index) {
            Ok(pair) => pair,
            Err(e) => {
                shell.notify(&user_message(&e));
                return Ok(());
            }
        };

        shell.notify(&format!(
            "A wild {} appears! What will you do?!",
            adversary.name
        ));
        Bout::new(hero, adversary).run(shell)?;
        Ok(())
    }

    /// 四项输入全部读完再解析；任何一个数值无效都放弃整个添加
    fn add_hero<S: Shell>(&mut self, shell: &mut S) -> Result<(), ArenaError> {
        let name = shell.request_choice("Enter the name of the new hero:")?;
        let health = shell.request_choice("Enter the health of the new hero:")?;
        let attack_power = shell.request_choice("Enter the attack power of the new hero:")?;
        let defend_amount = shell.request_choice("Enter the defend amount of the new hero:")?;

        let (Ok(health), Ok(attack_power), Ok(defend_amount)) = (
            parse_number(&health),
            parse_number(&attack_power),
            parse_number(&defend_amount),
        ) else {
            shell.notify(
                "Invalid input. Please enter valid numbers for health, attack power, and defend amount.",
            );
            return Ok(());
        };

        // 控制器只会构造英雄候选；NotAHero 按名册契约向上传播
        self.roster.add(Candidate::Hero(Hero::new(
            name,
            health,
            attack_power,
            defend_amount,
        )))
    }

    fn delete_hero<S: Shell>(&mut self, shell: &mut S) -> Result<(), ArenaError> {
        shell.notify(&self.hero_listing());
        let text =
            shell.request_choice("Enter the index of the hero that you wish to delete:")?;

        let removed = parse_number(&text)
            .and_then(|index1| self.roster.remove_hero_at(index1 as usize));
        if removed.is_err() {
            // 解析失败与越界走同一句告警，名册保持原样
            shell.notify("Invalid index");
        }
        Ok(())
    }

    fn hero_listing(&self) -> String {
        Self::numbered(self.roster.list_heroes())
    }

    fn adversary_listing(&self) -> String {
        Self::numbered(self.roster.list_adversaries())
    }

    fn numbered(entries: Vec<(usize, &str)>) -> String {
        entries
            .iter()
            .map(|(index1, name)| format!("{index1}) {name}"))
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// 1-based 选择：解析失败或越界时告警并回退到 1 号
    fn choose_index<S: Shell>(
        shell: &mut S,
        prompt: &str,
        len: usize,
        warning: &str,
    ) -> Result<usize, ArenaError> {
        let text = shell.request_choice(prompt)?;
        match parse_number(&text) {
            Ok(n) if n >= 1 && (n as usize) <= len => Ok(n as usize),
            _ => {
                shell.notify(warning);
                Ok(1)
            }
        }
    }
}
