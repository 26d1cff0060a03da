//! 出厂名册：默认的英雄与对手数值

use combat::{Adversary, Hero};

pub fn heroes() -> Vec<Hero> {
    vec![
        Hero::new("Harry Potter", 100, 15, 5),
        Hero::new("Aragorn", 120, 20, 10),
        Hero::new("Legolas", 110, 18, 8),
        Hero::new("Deadpool", 150, 25, 12),
    ]
}

pub fn adversaries() -> Vec<Adversary> {
    vec![
        Adversary::new("Goblin", 80, 10, 3),
        Adversary::new("Orc", 100, 15, 5),
        Adversary::new("Chupacabra", 90, 12, 4),
        Adversary::new("Werewolf", 120, 18, 8),
    ]
}
