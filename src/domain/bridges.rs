//! Bridge numbers: raw distances between pairs of core numbers. Never reduced.

use crate::domain::core_numbers::CoreNumbers;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct BridgeNumbers {
    pub life_path_expression: u32,
    pub soul_personality: u32,
    pub life_path_soul: u32,
    pub expression_personality: u32,
}

impl BridgeNumbers {
    pub fn from_core(core: &CoreNumbers) -> Self {
        Self {
            life_path_expression: core.life_path.abs_diff(core.expression),
            soul_personality: core.soul_urge.abs_diff(core.personality),
            life_path_soul: core.life_path.abs_diff(core.soul_urge),
            expression_personality: core.expression.abs_diff(core.personality),
        }
    }

    /// (label, value) pairs in their fixed order.
    pub fn labelled(&self) -> [(&'static str, u32); 4] {
        [
            ("Life Path - Expression", self.life_path_expression),
            ("Soul Urge - Personality", self.soul_personality),
            ("Life Path - Soul Urge", self.life_path_soul),
            ("Expression - Personality", self.expression_personality),
        ]
    }
}
