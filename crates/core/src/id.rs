// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Agent id generation

use crate::agent::AgentId;
use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::Arc;

/// Hands out agent ids in launch order
pub trait AgentIdGen: Clone + Send + Sync {
    fn next(&self) -> AgentId;
}

/// Sequential id generator; ids double as launch positions
#[derive(Clone)]
pub struct SequentialAgentIds {
    counter: Arc<AtomicU32>,
}

impl SequentialAgentIds {
    pub fn starting_at(first: u32) -> Self {
        Self {
            counter: Arc::new(AtomicU32::new(first)),
        }
    }
}

impl Default for SequentialAgentIds {
    fn default() -> Self {
        Self::starting_at(0)
    }
}

impl AgentIdGen for SequentialAgentIds {
    fn next(&self) -> AgentId {
        AgentId(self.counter.fetch_add(1, Ordering::SeqCst))
    }
}
