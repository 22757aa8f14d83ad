/*
 * SPDX-FileCopyrightText: 2026 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

use crate::traits::RandomAccessGraph;
use dsi_progress_logger::ProgressLog;

/// Strongly connected components.
///
/// An instance of this structure stores the [index of the
/// component](Sccs::components) of each node. Components are numbered from 0 to
/// [`num_components`](Sccs::num_components).
///
/// When computed by [`tarjan`], components are numbered in reverse
/// topological order: if there is an arc from a node of component *i* to a
/// node of a different component *j*, then *i* > *j*. In particular,
/// component 0 is a sink of the component graph.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sccs {
    num_components: usize,
    components: Box<[usize]>,
}

impl Sccs {
    pub fn new(num_components: usize, components: Box<[usize]>) -> Self {
        Sccs {
            num_components,
            components,
        }
    }

    /// Returns the number of strongly connected components.
    pub fn num_components(&self) -> usize {
        self.num_components
    }

    /// Returns a slice containing, for each node, the index of the component
    /// it belongs to.
    #[inline(always)]
    pub fn components(&self) -> &[usize] {
        &self.components
    }

    /// Returns the sizes of all components.
    pub fn compute_sizes(&self) -> Box<[usize]> {
        let mut sizes = vec![0; self.num_components()];
        for &node_component in self.components() {
            sizes[node_component] += 1;
        }
        sizes.into_boxed_slice()
    }
}

/// Tarjan's algorithm for strongly connected components.
///
/// The visit is iterative, so the depth of the graph is limited only by the
/// available memory. Components are emitted, and thus numbered, in reverse
/// topological order.
pub fn tarjan(graph: impl RandomAccessGraph, pl: &mut impl ProgressLog) -> Sccs {
    const UNVISITED: usize = usize::MAX;

    let num_nodes = graph.num_nodes();
    pl.item_name("node");
    pl.expected_updates(Some(num_nodes));
    pl.start("Computing strongly connected components...");

    let mut index = vec![UNVISITED; num_nodes].into_boxed_slice();
    let mut low_link = vec![0; num_nodes].into_boxed_slice();
    let mut on_stack = vec![false; num_nodes].into_boxed_slice();
    let mut components = vec![0; num_nodes].into_boxed_slice();
    let mut component_stack = Vec::with_capacity(16);
    // Each frame is a node and the position of the next successor to scan
    let mut visit_stack: Vec<(usize, usize)> = Vec::with_capacity(16);
    let mut timestamp = 0;
    let mut number_of_components = 0;

    for root in 0..num_nodes {
        if index[root] != UNVISITED {
            continue;
        }

        index[root] = timestamp;
        low_link[root] = timestamp;
        timestamp += 1;
        on_stack[root] = true;
        component_stack.push(root);
        visit_stack.push((root, 0));
        pl.light_update();

        while let Some(frame) = visit_stack.last_mut() {
            let node = frame.0;
            let succ = graph.successors(node);
            if frame.1 < succ.len() {
                let next = succ[frame.1];
                frame.1 += 1;
                if index[next] == UNVISITED {
                    index[next] = timestamp;
                    low_link[next] = timestamp;
                    timestamp += 1;
                    on_stack[next] = true;
                    component_stack.push(next);
                    visit_stack.push((next, 0));
                    pl.light_update();
                } else if on_stack[next] {
                    low_link[node] = low_link[node].min(index[next]);
                }
                continue;
            }

            visit_stack.pop();
            if let Some(&(parent, _)) = visit_stack.last() {
                low_link[parent] = low_link[parent].min(low_link[node]);
            }

            if low_link[node] == index[node] {
                // node is the root of a component: everything above it on
                // the component stack belongs to the same component
                while let Some(comp_node) = component_stack.pop() {
                    on_stack[comp_node] = false;
                    components[comp_node] = number_of_components;
                    if comp_node == node {
                        break;
                    }
                }
                number_of_components += 1;
            }
        }
    }

    pl.done();
    log::info!("{} strongly connected components", number_of_components);
    Sccs::new(number_of_components, components)
}
