// src/combat/src/lib.rs

pub mod combatant;
pub mod engine;

pub use crate::combatant::{Adversary, Combatant, DEFEND_RECOVERY, HEAL_AMOUNT, Hero};
pub use crate::engine::{ACTION_PROMPT, Action, Bout, BoutState, Outcome};

/// Handles combat interactions between combatants
pub struct Combat;

impl Combat {
    /// Resolve a single attack: fixed damage equal to the attacker's attack
    /// power, target health saturating at zero. The attacker is never
    /// modified.
    pub fn attack<A: Combatant, D: Combatant>(attacker: &A, target: &mut D) -> TurnReport {
        let mut report = TurnReport::new();
        let damage = attacker.attack_power();

        report.log(format!(
            "{} attacks {} for {} damage!",
            attacker.name(),
            target.name(),
            damage
        ));

        if !target.take_damage(damage) {
            report.defeated = true;
        }

        report
    }
}

/// Turn result with display messages
#[derive(Debug, Clone, Default)]
pub struct TurnReport {
    pub logs: Vec<String>, // Messages for the shell to display
    pub defeated: bool,    // Whether the target went down this turn
}

impl TurnReport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn log(&mut self, message: String) {
        self.logs.push(message);
    }
}
