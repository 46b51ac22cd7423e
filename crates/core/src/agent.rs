// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Agents contending for the runway
//!
//! An agent is one aircraft: its class (helicopter or airplane), its mode
//! (normal or emergency) and an id used only for reporting.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Aircraft class; selects the waiting counter and condition used
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AgentKind {
    Helicopter,
    Airplane,
}

impl AgentKind {
    pub fn name(&self) -> &'static str {
        match self {
            AgentKind::Helicopter => "helicopter",
            AgentKind::Airplane => "airplane",
        }
    }
}

impl fmt::Display for AgentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Request mode; selects the admission predicate
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AgentMode {
    #[default]
    Normal,
    Emergency,
}

impl AgentMode {
    pub fn is_emergency(&self) -> bool {
        matches!(self, AgentMode::Emergency)
    }
}

/// Reporting identifier for an agent
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AgentId(pub u32);

impl fmt::Display for AgentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One aircraft requesting the runway
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Agent {
    pub id: AgentId,
    pub kind: AgentKind,
    pub mode: AgentMode,
}

impl Agent {
    pub fn new(id: u32, kind: AgentKind, mode: AgentMode) -> Self {
        Self {
            id: AgentId(id),
            kind,
            mode,
        }
    }

    pub fn helicopter(id: u32) -> Self {
        Self::new(id, AgentKind::Helicopter, AgentMode::Normal)
    }

    pub fn airplane(id: u32) -> Self {
        Self::new(id, AgentKind::Airplane, AgentMode::Normal)
    }

    /// Same agent, requesting in emergency mode
    pub fn in_emergency(mut self) -> Self {
        self.mode = AgentMode::Emergency;
        self
    }

    pub fn is_emergency(&self) -> bool {
        self.mode.is_emergency()
    }
}

impl fmt::Display for Agent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}[{}]", self.kind, self.id)?;
        if self.is_emergency() {
            f.write_str(" (emergency)")?;
        }
        Ok(())
    }
}

/// Which launch positions of a fleet request in emergency mode
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EmergencyPattern {
    #[default]
    Never,
    Always,
    OddPositions,
    EvenPositions,
}

impl EmergencyPattern {
    /// Mode for the agent launched at `position`
    pub fn mode_at(&self, position: u32) -> AgentMode {
        let emergency = match self {
            EmergencyPattern::Never => false,
            EmergencyPattern::Always => true,
            EmergencyPattern::OddPositions => position % 2 == 1,
            EmergencyPattern::EvenPositions => position % 2 == 0,
        };
        if emergency {
            AgentMode::Emergency
        } else {
            AgentMode::Normal
        }
    }
}

#[cfg(test)]
#[path = "agent_tests.rs"]
mod tests;
