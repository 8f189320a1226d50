//! Conductive heat flow over the network.

use cryo_net::{NetError, ThermalNetwork};

use crate::error::SimResult;

/// Pending conductive heat per node for one step of length `dt_s`, indexed by
/// node insertion order.
///
/// For every edge (u, v): `q = conductance(min(Tu, Tv)) * (Tv - Tu) * dt`,
/// accumulated `+q` at u and `-q` at v. With no external injection the
/// pending flows sum to zero.
pub fn conductive_flow(net: &ThermalNetwork, dt_s: f64) -> SimResult<Vec<f64>> {
    let mut q = vec![0.0; net.node_count()];

    for edge in net.edges() {
        let src = net
            .node(edge.source)
            .ok_or(NetError::InvalidNodeId { id: edge.source })?;
        let dst = net
            .node(edge.target)
            .ok_or(NetError::InvalidNodeId { id: edge.target })?;

        let t_low = src.temperature_k.min(dst.temperature_k);
        let dq = net.conductance(edge, t_low)? * (dst.temperature_k - src.temperature_k) * dt_s;

        q[edge.source.index() as usize] += dq;
        q[edge.target.index() as usize] -= dq;
    }

    Ok(q)
}
