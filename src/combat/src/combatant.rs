// src/combat/src/combatant.rs

use crate::TurnReport;

/// 表示可以参加对决的活体
pub trait Combatant {
    /// 获取名称（展示用，不要求唯一）
    fn name(&self) -> &str;

    /// 获取当前生命值
    fn health(&self) -> u32;

    /// 获取基础攻击力
    fn attack_power(&self) -> u32;

    /// 获取防御数值（仅用于展示文案）
    fn defend_amount(&self) -> u32;

    /// 是否存活
    fn is_alive(&self) -> bool {
        self.health() > 0
    }

    /// 造成伤害；生命值饱和到 0，返回是否仍存活
    fn take_damage(&mut self, amount: u32) -> bool;

    /// 恢复生命；没有最大生命值的约束，仅在数值类型的边界处饱和
    fn restore(&mut self, amount: u32);
}

/// Fixed amount restored by [`Hero::heal`].
pub const HEAL_AMOUNT: u32 = 10;

/// Fixed amount restored by [`Hero::defend`].
///
/// Defend is a flat self-heal, not damage reduction: the message it emits
/// quotes the hero's `defend_amount`, but the recovery is always this
/// constant. That mismatch is deliberate observable behavior; don't "fix"
/// it by wiring `defend_amount` into the effect.
pub const DEFEND_RECOVERY: u32 = 5;

/// 玩家可操纵的英雄
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Hero {
    pub name: String,
    pub health: u32,
    pub attack_power: u32,
    pub defend_amount: u32,
}

impl Hero {
    pub fn new(name: impl Into<String>, health: u32, attack_power: u32, defend_amount: u32) -> Self {
        Self {
            name: name.into(),
            health,
            attack_power,
            defend_amount,
        }
    }

    /// Restore a fixed 10 health. Uncapped: health may exceed any starting
    /// value, and it carries over between bouts.
    pub fn heal(&mut self) -> TurnReport {
        let mut report = TurnReport::new();
        self.restore(HEAL_AMOUNT);
        report.log(format!(
            "{} heals for {} points. Health is now {}.",
            self.name, HEAL_AMOUNT, self.health
        ));
        report
    }

    /// Restore a fixed 5 health; see [`DEFEND_RECOVERY`] for why the
    /// message text and the effect disagree.
    pub fn defend(&mut self) -> TurnReport {
        let mut report = TurnReport::new();
        self.restore(DEFEND_RECOVERY);
        report.log(format!(
            "{} defends and reduces damage by {} points.",
            self.name, self.defend_amount
        ));
        report
    }
}

impl Combatant for Hero {
    fn name(&self) -> &str {
        &self.name
    }

    fn health(&self) -> u32 {
        self.health
    }

    fn attack_power(&self) -> u32 {
        self.attack_power
    }

    fn defend_amount(&self) -> u32 {
        self.defend_amount
    }

    fn take_damage(&mut self, amount: u32) -> bool {
        self.health = self.health.saturating_sub(amount);
        self.is_alive()
    }

    fn restore(&mut self, amount: u32) {
        self.health = self.health.saturating_add(amount);
    }
}

/// 自动行动的对手，除攻击外没有其它能力
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Adversary {
    pub name: String,
    pub health: u32,
    pub attack_power: u32,
    pub defend_amount: u32,
}

impl Adversary {
    pub fn new(name: impl Into<String>, health: u32, attack_power: u32, defend_amount: u32) -> Self {
        Self {
            name: name.into(),
            health,
            attack_power,
            defend_amount,
        }
    }
}

impl Combatant for Adversary {
    fn name(&self) -> &str {
        &self.name
    }

    fn health(&self) -> u32 {
        self.health
    }

    fn attack_power(&self) -> u32 {
        self.attack_power
    }

    fn defend_amount(&self) -> u32 {
        self.defend_amount
    }

    fn take_damage(&mut self, amount: u32) -> bool {
        self.health = self.health.saturating_sub(amount);
        self.is_alive()
    }

    fn restore(&mut self, amount: u32) {
        self.health = self.health.saturating_add(amount);
    }
}
