//! Bout state machine: alternating player and adversary turns until one
//! side's health reaches zero.

use std::str::FromStr;

use error::ArenaError;
use shell::Shell;
use strum::EnumString;

use crate::combatant::{Adversary, Combatant, Hero};
use crate::{Combat, TurnReport};

/// Prompt shown every time the engine awaits a player action.
pub const ACTION_PROMPT: &str = "Choose an action: 1) Attack 2) Defend 3) Heal";

/// 玩家可选的动作；`serialize` 表就是对外的动作令牌契约
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumString)]
pub enum Action {
    #[strum(serialize = "1")]
    Attack,
    #[strum(serialize = "2")]
    Defend,
    #[strum(serialize = "3")]
    Heal,
}

impl Action {
    /// Recognized tokens are exactly "1", "2", "3"; anything else is
    /// unrecognized and the caller re-prompts.
    pub fn from_token(token: &str) -> Option<Self> {
        Self::from_str(token.trim()).ok()
    }
}

/// 对决的最终结果
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// 对手生命值归零
    AdversaryDefeated,
    /// 英雄生命值归零
    HeroDefeated,
}

/// 对决状态机的状态
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoutState {
    AwaitingAction,
    ResolvingPlayerAction(Action),
    ResolvingAdversaryAction,
    Terminal(Outcome),
}

/// One bout between a hero and an adversary.
///
/// Borrows both participants from the roster for the bout's duration;
/// outcomes are never written back anywhere, a hero keeps whatever health
/// the bout left it with.
pub struct Bout<'a> {
    hero: &'a mut Hero,
    adversary: &'a mut Adversary,
    state: BoutState,
}

impl<'a> Bout<'a> {
    pub fn new(hero: &'a mut Hero, adversary: &'a mut Adversary) -> Self {
        // 参战者入场时就可能已无生命值（双方都跨对决保留伤势），
        // 此时不再请求任何动作，直接进入终局。
        let state = if !hero.is_alive() {
            BoutState::Terminal(Outcome::HeroDefeated)
        } else if !adversary.is_alive() {
            BoutState::Terminal(Outcome::AdversaryDefeated)
        } else {
            BoutState::AwaitingAction
        };
        Self {
            hero,
            adversary,
            state,
        }
    }

    pub fn state(&self) -> BoutState {
        self.state
    }

    /// Drive the bout to its terminal state, reading action tokens from the
    /// shell and forwarding every turn message to it.
    pub fn run<S: Shell>(&mut self, shell: &mut S) -> Result<Outcome, ArenaError> {
        loop {
            match self.state {
                BoutState::AwaitingAction => {
                    let token = shell.request_choice(ACTION_PROMPT)?;
                    match Action::from_token(&token) {
                        Some(action) => {
                            self.state = BoutState::ResolvingPlayerAction(action);
                        }
                        // 未识别的令牌不改变状态，阻塞式重试
                        None => shell.notify("Please make a valid selection"),
                    }
                }
                BoutState::ResolvingPlayerAction(action) => {
                    let report = self.resolve_player_action(action);
                    for line in &report.logs {
                        shell.notify(line);
                    }
                    self.state = if report.defeated {
                        BoutState::Terminal(Outcome::AdversaryDefeated)
                    } else {
                        BoutState::ResolvingAdversaryAction
                    };
                }
                BoutState::ResolvingAdversaryAction => {
                    let report = self.resolve_adversary_action();
                    for line in &report.logs {
                        shell.notify(line);
                    }
                    self.state = if report.defeated {
                        BoutState::Terminal(Outcome::HeroDefeated)
                    } else {
                        BoutState::AwaitingAction
                    };
                }
                BoutState::Terminal(outcome) => {
                    shell.notify(&self.outcome_message(outcome));
                    return Ok(outcome);
                }
            }
        }
    }

    /// 玩家动作结算；`defeated` 仅在攻击击倒对手时为真
    pub fn resolve_player_action(&mut self, action: Action) -> TurnReport {
        match action {
            Action::Attack => {
                let mut report = Combat::attack(&*self.hero, self.adversary);
                // 击杀的那一回合同样播报剩余生命值（0）
                report.log(format!(
                    "You have hurt the enemy! The monster's health: {}",
                    self.adversary.health()
                ));
                report
            }
            Action::Defend => self.hero.defend(),
            Action::Heal => self.hero.heal(),
        }
    }

    /// 对手回合：无条件攻击，没有任何决策逻辑
    pub fn resolve_adversary_action(&mut self) -> TurnReport {
        let mut report = Combat::attack(&*self.adversary, self.hero);
        report.log(format!("Player's health: {}", self.hero.health()));
        report
    }

    fn outcome_message(&self, outcome: Outcome) -> String {
        match outcome {
            Outcome::AdversaryDefeated => {
                format!("You have defeated the {}!", self.adversary.name())
            }
            Outcome::HeroDefeated => {
                format!("You have been defeated by the {}...", self.adversary.name())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shell::ScriptedShell;

    #[test]
    fn unrecognized_tokens_reprompt_without_state_change() {
        let mut hero = Hero::new("Harry Potter", 100, 200, 5);
        let mut adversary = Adversary::new("Goblin", 80, 10, 3);
        let mut bout = Bout::new(&mut hero, &mut adversary);

        // 两个无效令牌之后才给出有效令牌；一击必杀结束对决
        let mut shell = ScriptedShell::new(["5", "abc", "1"]);
        let outcome = bout.run(&mut shell).unwrap();

        assert_eq!(outcome, Outcome::AdversaryDefeated);
        assert_eq!(shell.prompts.len(), 3);
        assert_eq!(
            shell
                .notices
                .iter()
                .filter(|n| n.contains("valid selection"))
                .count(),
            2
        );
    }

    #[test]
    fn attack_reports_adversary_health() {
        let mut hero = Hero::new("Aragorn", 120, 15, 10);
        let mut adversary = Adversary::new("Orc", 80, 15, 5);
        let mut bout = Bout::new(&mut hero, &mut adversary);

        let report = bout.resolve_player_action(Action::Attack);
        assert!(!report.defeated);
        assert!(
            report
                .logs
                .iter()
                .any(|l| l.contains("The monster's health: 65"))
        );
        drop(bout);
        assert_eq!(adversary.health, 65);
        // 攻击者自身不变
        assert_eq!(hero.health, 120);
        assert_eq!(hero.attack_power, 15);
    }

    #[test]
    fn killing_blow_terminates_with_victory() {
        let mut hero = Hero::new("Deadpool", 150, 80, 12);
        let mut adversary = Adversary::new("Goblin", 80, 10, 3);
        let mut bout = Bout::new(&mut hero, &mut adversary);

        let mut shell = ScriptedShell::new(["1"]);
        let outcome = bout.run(&mut shell).unwrap();

        assert_eq!(outcome, Outcome::AdversaryDefeated);
        assert!(shell.saw("Deadpool attacks Goblin for 80 damage!"));
        assert!(shell.saw("The monster's health: 0"));
        assert!(shell.saw("You have defeated the Goblin!"));
        // 对手没有机会反击
        assert!(!shell.saw("Player's health"));
    }

    #[test]
    fn adversary_strikes_back_after_non_lethal_action() {
        let mut hero = Hero::new("Legolas", 110, 18, 8);
        let mut adversary = Adversary::new("Werewolf", 120, 18, 8);
        let mut bout = Bout::new(&mut hero, &mut adversary);

        // Heal 之后对手必定攻击一次，然后退出对决脚本耗尽
        let mut shell = ScriptedShell::new(["3"]);
        let err = bout.run(&mut shell);
        assert!(err.is_err()); // script exhausted at the next prompt

        assert_eq!(hero.health, 110 + 10 - 18);
        assert!(shell.saw("Legolas heals for 10 points"));
        assert!(shell.saw("Werewolf attacks Legolas for 18 damage!"));
        assert!(shell.saw("Player's health: 102"));
    }

    #[test]
    fn hero_defeat_is_clamped_and_terminal() {
        let mut hero = Hero::new("Harry Potter", 5, 1, 5);
        let mut adversary = Adversary::new("Chupacabra", 90, 10, 4);
        let mut bout = Bout::new(&mut hero, &mut adversary);

        let mut shell = ScriptedShell::new(["2"]);
        let outcome = bout.run(&mut shell).unwrap();

        assert_eq!(outcome, Outcome::HeroDefeated);
        assert_eq!(hero.health, 0); // 5 + 5 - 10, not negative
        assert!(shell.saw("You have been defeated by the Chupacabra..."));
    }

    #[test]
    fn dead_hero_enters_bout_already_terminal() {
        let mut hero = Hero::new("Harry Potter", 0, 15, 5);
        let mut adversary = Adversary::new("Goblin", 80, 10, 3);
        let mut bout = Bout::new(&mut hero, &mut adversary);
        assert_eq!(bout.state(), BoutState::Terminal(Outcome::HeroDefeated));

        // 终局状态不再请求任何输入
        let mut shell = ScriptedShell::new(Vec::<String>::new());
        let outcome = bout.run(&mut shell).unwrap();
        assert_eq!(outcome, Outcome::HeroDefeated);
        assert!(shell.prompts.is_empty());
    }

    #[test]
    fn action_tokens_match_contract() {
        assert_eq!(Action::from_token("1"), Some(Action::Attack));
        assert_eq!(Action::from_token("2"), Some(Action::Defend));
        assert_eq!(Action::from_token("3"), Some(Action::Heal));
        assert_eq!(Action::from_token("4"), None);
        assert_eq!(Action::from_token(""), None);
        // serialize 表替换了变体名，名字本身不是合法令牌
        assert_eq!(Action::from_token("attack"), None);
        assert_eq!(Action::from_token("Attack"), None);
        assert_eq!(Action::from_token("Heal"), None);
    }
}
