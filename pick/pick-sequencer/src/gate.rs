//! Operator authorization between steps.

use std::sync::mpsc::{self, Receiver, Sender};

use tracing::{info, warn};

/// The operator's answer to "may I run the next step?".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GateDecision {
    /// Run the step.
    Proceed,
    /// Abort the run. Equivalent to a fatal step failure.
    Cancelled,
}

/// A command sent to a [`ChannelGate`] by the operator's console.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GateCommand {
    /// Authorize the pending step.
    Proceed,
    /// Cancel the pending run.
    Cancel,
}

/// The authorization point between steps.
///
/// In supervised mode the gate blocks cooperatively until a human
/// authorizes the next step or cancels the run; in autonomous mode it
/// returns [`GateDecision::Proceed`] immediately. This is the run's
/// sole cancellable suspension point.
pub trait OperatorGate {
    /// Block until the operator decides about the step named `label`.
    fn await_next_step(&mut self, label: &str) -> GateDecision;
}

/// Gate for autonomous mode: every step is pre-authorized.
#[derive(Debug, Clone, Copy, Default)]
pub struct AutonomousGate;

impl OperatorGate for AutonomousGate {
    fn await_next_step(&mut self, _label: &str) -> GateDecision {
        GateDecision::Proceed
    }
}

/// Gate driven by an operator console over a channel.
///
/// [`await_next_step`](OperatorGate::await_next_step) blocks on the
/// receiver - a cooperative wait, not a spin. Dropping the sender side
/// counts as cancellation: a run must never hang forever on a console
/// that went away.
#[derive(Debug)]
pub struct ChannelGate {
    commands: Receiver<GateCommand>,
}

impl ChannelGate {
    /// Create a gate and the sender half the operator console keeps.
    #[must_use]
    pub fn new() -> (Self, Sender<GateCommand>) {
        let (tx, rx) = mpsc::channel();
        (Self { commands: rx }, tx)
    }
}

impl OperatorGate for ChannelGate {
    fn await_next_step(&mut self, label: &str) -> GateDecision {
        info!(step = label, "waiting for operator authorization");
        match self.commands.recv() {
            Ok(GateCommand::Proceed) => GateDecision::Proceed,
            Ok(GateCommand::Cancel) => {
                warn!(step = label, "operator cancelled run");
                GateDecision::Cancelled
            }
            Err(_) => {
                warn!(step = label, "operator console disconnected");
                GateDecision::Cancelled
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread;

    #[test]
    fn test_autonomous_gate_proceeds() {
        let mut gate = AutonomousGate;
        assert_eq!(gate.await_next_step("approach"), GateDecision::Proceed);
    }

    #[test]
    fn test_channel_gate_proceed_and_cancel() {
        let (mut gate, tx) = ChannelGate::new();
        tx.send(GateCommand::Proceed).ok();
        assert_eq!(gate.await_next_step("approach"), GateDecision::Proceed);

        tx.send(GateCommand::Cancel).ok();
        assert_eq!(gate.await_next_step("grasp"), GateDecision::Cancelled);
    }

    #[test]
    fn test_channel_gate_disconnect_is_cancel() {
        let (mut gate, tx) = ChannelGate::new();
        drop(tx);
        assert_eq!(gate.await_next_step("lift"), GateDecision::Cancelled);
    }

    #[test]
    fn test_channel_gate_blocks_until_sent() {
        let (mut gate, tx) = ChannelGate::new();
        let sender = thread::spawn(move || {
            tx.send(GateCommand::Proceed).ok();
        });
        assert_eq!(gate.await_next_step("place"), GateDecision::Proceed);
        sender.join().ok();
    }
}
