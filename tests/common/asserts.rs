#![allow(dead_code)]

use pankh_gatekeeper::{GateDecision, Headers};

pub fn assert_continue(decision: GateDecision) -> Headers {
    match decision {
        GateDecision::Continue { headers } => headers,
        other => panic!("expected continue decision, got {:?}", other),
    }
}

pub fn assert_preflight(decision: GateDecision) -> (Headers, u16) {
    match decision {
        GateDecision::Preflight(result) => (result.headers, result.status),
        other => panic!("expected preflight decision, got {:?}", other),
    }
}
