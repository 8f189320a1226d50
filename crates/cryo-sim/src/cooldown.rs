//! The cool-down run loop.

use cryo_core::NodeId;
use cryo_net::ThermalNetwork;
use cryo_ptc::PtcModel;

use crate::error::{SimError, SimResult};
use crate::flow::conductive_flow;

/// Options for a cool-down run.
#[derive(Clone, Debug)]
pub struct SimOptions {
    /// Fixed iteration budget; there is no convergence stopping rule.
    pub iterations: usize,
    /// Initial time step (seconds); only ever shrinks during a run.
    pub dt_initial_s: f64,
    /// Record every N-th step (decimation). The initial state is always
    /// recorded, as is the final one.
    pub record_every: usize,
}

impl Default for SimOptions {
    fn default() -> Self {
        Self {
            iterations: 200_000,
            dt_initial_s: 20.0,
            record_every: 1,
        }
    }
}

/// Progress report emitted once per iteration.
#[derive(Clone, Copy, Debug)]
pub struct Progress {
    pub step: usize,
    pub total_steps: usize,
    pub sim_time_s: f64,
    pub dt_s: f64,
}

/// Recorded trajectory of a run.
#[derive(Clone, Debug)]
pub struct SimRecord {
    /// Node names in column order.
    pub node_names: Vec<String>,
    /// Time points (seconds); row 0 is t = 0.
    pub times_s: Vec<f64>,
    /// Per-node temperature vectors, one per time point.
    pub temperatures_k: Vec<Vec<f64>>,
}

/// A configured cool-down simulation: the thermal network, the cooler model,
/// and the two designated stage nodes it acts on.
pub struct Cooldown {
    net: ThermalNetwork,
    ptc: PtcModel,
    stage1: NodeId,
    stage2: NodeId,
    opts: SimOptions,
}

impl Cooldown {
    pub fn new(
        net: ThermalNetwork,
        ptc: PtcModel,
        stage1_node: &str,
        stage2_node: &str,
        opts: SimOptions,
    ) -> SimResult<Self> {
        if opts.iterations == 0 {
            return Err(SimError::InvalidArg {
                what: "iterations must be positive",
            });
        }
        if opts.dt_initial_s <= 0.0 {
            return Err(SimError::InvalidArg {
                what: "dt_initial_s must be positive",
            });
        }
        if opts.record_every == 0 {
            return Err(SimError::InvalidArg {
                what: "record_every must be positive",
            });
        }
        let stage1 = net
            .node_id(stage1_node)
            .ok_or_else(|| SimError::UnknownStageNode {
                name: stage1_node.to_string(),
            })?;
        let stage2 = net
            .node_id(stage2_node)
            .ok_or_else(|| SimError::UnknownStageNode {
                name: stage2_node.to_string(),
            })?;
        Ok(Self {
            net,
            ptc,
            stage1,
            stage2,
            opts,
        })
    }

    pub fn network(&self) -> &ThermalNetwork {
        &self.net
    }

    /// Run the fixed iteration budget and return the recorded trajectory.
    ///
    /// Each iteration: conductive flow from the pre-update temperature
    /// snapshot, PTC injection at the stage nodes, simultaneous clamped heat
    /// application, time advance, and the one-way step halving check. The
    /// halving is monotone: once the pending flow at either stage node is
    /// non-negative, every later iteration uses the smaller step.
    pub fn run(
        &mut self,
        mut progress: Option<&mut dyn FnMut(Progress)>,
    ) -> SimResult<SimRecord> {
        let node_names: Vec<String> =
            self.net.nodes().iter().map(|n| n.name.clone()).collect();
        let mut times_s = vec![0.0];
        let mut temperatures_k = vec![self.net.temperatures()];

        let min_temp_k = self.ptc.t2_min();
        let s1 = self.stage1.index() as usize;
        let s2 = self.stage2.index() as usize;

        let mut t = 0.0;
        let mut dt = self.opts.dt_initial_s;

        tracing::info!(
            iterations = self.opts.iterations,
            dt_s = dt,
            nodes = self.net.node_count(),
            "starting cool-down run"
        );

        for step in 1..=self.opts.iterations {
            let mut q = conductive_flow(&self.net, dt)?;

            let t1 = self.net.nodes()[s1].temperature_k;
            let t2 = self.net.nodes()[s2].temperature_k;
            q[s1] += self.ptc.power_stage1(t1, t2)? * dt;
            q[s2] += self.ptc.power_stage2(t1, t2)? * dt;

            // All pending flows were computed from the pre-update snapshot;
            // application order does not matter.
            for i in 0..q.len() {
                self.net
                    .put_heat(NodeId::from_index(i as u32), q[i], min_temp_k, true)?;
            }

            t += dt;
            if step % self.opts.record_every == 0 {
                times_s.push(t);
                temperatures_k.push(self.net.temperatures());
            }

            if q[s1] >= 0.0 || q[s2] >= 0.0 {
                dt /= 2.0;
                tracing::debug!(step, dt_s = dt, "stage flow non-negative, halving step");
            }

            if let Some(cb) = progress.as_deref_mut() {
                cb(Progress {
                    step,
                    total_steps: self.opts.iterations,
                    sim_time_s: t,
                    dt_s: dt,
                });
            }
        }

        // Always record the final state.
        if self.opts.iterations % self.opts.record_every != 0 {
            times_s.push(t);
            temperatures_k.push(self.net.temperatures());
        }

        tracing::info!(sim_time_s = t, final_dt_s = dt, "cool-down run complete");

        Ok(SimRecord {
            node_names,
            times_s,
            temperatures_k,
        })
    }
}
