//! 名册模块：持有可供选择的英雄和对手
//!
//! 名册独占拥有所有参战者实例，在进程启动时构造一次并注入会话控制器。
//! 所有对外索引都是 1-based，先校验再换算成 0-based 存储下标。

pub mod defaults;

use combat::{Adversary, Hero};
use error::ArenaError;

/// 候选参战者：`add` 以此表达"只有英雄才能入册"的契约
#[derive(Debug, Clone)]
pub enum Candidate {
    Hero(Hero),
    Adversary(Adversary),
}

/// 英雄名册与对手图鉴
///
/// 英雄序列可变，插入顺序决定展示编号；对手序列在本设计中是只读图鉴。
#[derive(Debug, Clone, Default)]
pub struct Roster {
    heroes: Vec<Hero>,
    adversaries: Vec<Adversary>,
}

impl Roster {
    pub fn new(heroes: Vec<Hero>, adversaries: Vec<Adversary>) -> Self {
        Self {
            heroes,
            adversaries,
        }
    }

    /// 出厂自带的英雄与对手
    pub fn defaults() -> Self {
        Self::new(defaults::heroes(), defaults::adversaries())
    }

    pub fn heroes(&self) -> &[Hero] {
        &self.heroes
    }

    pub fn adversaries(&self) -> &[Adversary] {
        &self.adversaries
    }

    /// 按存储顺序给出 (1-based 编号, 名称)；每次调用重新物化
    pub fn list_heroes(&self) -> Vec<(usize, &str)> {
        self.heroes
            .iter()
            .enumerate()
            .map(|(i, hero)| (i + 1, hero.name.as_str()))
            .collect()
    }

    pub fn list_adversaries(&self) -> Vec<(usize, &str)> {
        self.adversaries
            .iter()
            .enumerate()
            .map(|(i, adversary)| (i + 1, adversary.name.as_str()))
            .collect()
    }

    /// Append a hero candidate to the end of the roster. A non-hero
    /// candidate is rejected with [`ArenaError::NotAHero`] and the roster
    /// is left untouched; this branch is part of the store's contract even
    /// though the session controller never builds it.
    pub fn add(&mut self, candidate: Candidate) -> Result<(), ArenaError> {
        match candidate {
            Candidate::Hero(hero) => {
                self.heroes.push(hero);
                Ok(())
            }
            Candidate::Adversary(adversary) => Err(ArenaError::NotAHero(adversary.name)),
        }
    }

    /// Remove exactly one hero at a 1-based position, shifting later
    /// entries down. Out-of-range indices leave the roster unchanged.
    pub fn remove_hero_at(&mut self, index1: usize) -> Result<Hero, ArenaError> {
        let idx = self.check_index(index1, self.heroes.len())?;
        Ok(self.heroes.remove(idx))
    }

    /// 按 1-based 编号取英雄；越界报 `OutOfRange`，回退策略由调用方决定
    pub fn hero_at(&self, index1: usize) -> Result<&Hero, ArenaError> {
        let idx = self.check_index(index1, self.heroes.len())?;
        Ok(&self.heroes[idx])
    }

    pub fn adversary_at(&self, index1: usize) -> Result<&Adversary, ArenaError> {
        let idx = self.check_index(index1, self.adversaries.len())?;
        Ok(&self.adversaries[idx])
    }

    /// Simultaneous mutable borrow of one hero and one adversary for the
    /// duration of a bout. Both indices are validated first.
    pub fn bout_pair(
        &mut self,
        hero_index1: usize,
        adversary_index1: usize,
    ) -> Result<(&mut Hero, &mut Adversary), ArenaError> {
        let hero_idx = self.check_index(hero_index1, self.heroes.len())?;
        let adversary_idx = self.check_index(adversary_index1, self.adversaries.len())?;
        Ok((
            &mut self.heroes[hero_idx],
            &mut self.adversaries[adversary_idx],
        ))
    }

    /// 1-based 校验并换算为 0-based
    fn check_index(&self, index1: usize, len: usize) -> Result<usize, ArenaError> {
        if index1 >= 1 && index1 <= len {
            Ok(index1 - 1)
        } else {
            Err(ArenaError::OutOfRange { index: index1, len })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(roster: &Roster) -> Vec<String> {
        roster
            .heroes()
            .iter()
            .map(|h| h.name.clone())
            .collect()
    }

    #[test]
    fn listing_is_one_based_and_ordered() {
        let roster = Roster::defaults();
        let listing = roster.list_heroes();
        assert_eq!(listing[0], (1, "Harry Potter"));
        assert_eq!(listing[1], (2, "Aragorn"));
        assert_eq!(listing[2], (3, "Legolas"));
        assert_eq!(listing[3], (4, "Deadpool"));
    }

    #[test]
    fn listing_is_idempotent_without_mutation() {
        let roster = Roster::defaults();
        assert_eq!(roster.list_heroes(), roster.list_heroes());
        assert_eq!(roster.list_adversaries(), roster.list_adversaries());
    }

    #[test]
    fn add_appends_hero_at_the_end() {
        let mut roster = Roster::defaults();
        roster
            .add(Candidate::Hero(Hero::new("Gandalf", 200, 30, 20)))
            .unwrap();
        assert_eq!(roster.heroes().len(), 5);
        assert_eq!(roster.heroes()[4].name, "Gandalf");
        // 先前的顺序不变
        assert_eq!(roster.heroes()[0].name, "Harry Potter");
    }

    #[test]
    fn add_rejects_non_hero_and_leaves_roster_unchanged() {
        let mut roster = Roster::defaults();
        let before = names(&roster);

        let err = roster
            .add(Candidate::Adversary(Adversary::new("Dragon", 300, 40, 20)))
            .unwrap_err();

        assert!(matches!(err, ArenaError::NotAHero(ref n) if n == "Dragon"));
        assert_eq!(names(&roster), before);
        assert_eq!(roster.adversaries().len(), 4);
    }

    #[test]
    fn remove_shifts_subsequent_entries() {
        // 默认 4 人，删除 2 号后 3、4 号前移
        let mut roster = Roster::defaults();
        let removed = roster.remove_hero_at(2).unwrap();
        assert_eq!(removed.name, "Aragorn");
        assert_eq!(
            names(&roster),
            vec!["Harry Potter", "Legolas", "Deadpool"]
        );
        assert_eq!(roster.list_heroes()[1], (2, "Legolas"));
        assert_eq!(roster.list_heroes()[2], (3, "Deadpool"));
    }

    #[test]
    fn remove_out_of_range_is_a_checked_no_op() {
        let mut roster = Roster::defaults();
        let before = names(&roster);

        assert!(matches!(
            roster.remove_hero_at(0),
            Err(ArenaError::OutOfRange { index: 0, len: 4 })
        ));
        assert!(matches!(
            roster.remove_hero_at(5),
            Err(ArenaError::OutOfRange { index: 5, len: 4 })
        ));
        assert_eq!(names(&roster), before);
    }

    #[test]
    fn selection_is_one_based() {
        let roster = Roster::defaults();
        assert_eq!(roster.hero_at(1).unwrap().name, "Harry Potter");
        assert_eq!(roster.adversary_at(4).unwrap().name, "Werewolf");
        assert!(roster.hero_at(5).is_err());
        assert!(roster.adversary_at(0).is_err());
    }

    #[test]
    fn bout_pair_borrows_both_participants() {
        let mut roster = Roster::defaults();
        {
            let (hero, adversary) = roster.bout_pair(1, 2).unwrap();
            assert_eq!(hero.name, "Harry Potter");
            assert_eq!(adversary.name, "Orc");
            hero.health = 42;
        }
        // 对决留下的生命值保存在名册里
        assert_eq!(roster.heroes()[0].health, 42);
    }

    #[test]
    fn bout_pair_validates_both_indices() {
        let mut roster = Roster::defaults();
        assert!(roster.bout_pair(5, 1).is_err());
        assert!(roster.bout_pair(1, 9).is_err());
    }
}
