//! Per-position candidate matches forming the segmentation search space.
use crate::dictionary::WordIdx;

/// Edge from a position to `end`, inclusive.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Candidate {
    end: usize,
    word_idx: Option<WordIdx>,
}

impl Candidate {
    #[inline(always)]
    pub(crate) const fn new(end: usize, word_idx: Option<WordIdx>) -> Self {
        Self { end, word_idx }
    }

    /// Gets the last position covered by the edge.
    #[inline(always)]
    pub const fn end(&self) -> usize {
        self.end
    }

    /// Gets the matched entry, or `None` for an unknown single codepoint.
    #[inline(always)]
    pub const fn word_idx(&self) -> Option<WordIdx> {
        self.word_idx
    }
}

/// Node of a [`Dag`].
///
/// The first candidate always ends at the node's own position, and the following ones
/// have strictly increasing ends. So the last candidate is the longest match.
#[derive(Clone, Debug)]
pub struct DagNode {
    codepoint: u32,
    candidates: Vec<Candidate>,
    chosen: Candidate,
    weight: f64,
}

impl DagNode {
    pub(crate) fn new(codepoint: u32, single: Candidate) -> Self {
        Self {
            codepoint,
            candidates: vec![single],
            chosen: single,
            weight: 0.0,
        }
    }

    #[inline(always)]
    pub(crate) fn push(&mut self, candidate: Candidate) {
        debug_assert!(self.longest().end < candidate.end);
        self.candidates.push(candidate);
    }

    /// Gets the codepoint at this position.
    #[inline(always)]
    pub const fn codepoint(&self) -> u32 {
        self.codepoint
    }

    /// Gets the candidates in ascending order of their ends.
    #[inline(always)]
    pub fn candidates(&self) -> &[Candidate] {
        &self.candidates
    }

    /// Gets the candidate with the furthest end.
    #[inline(always)]
    pub fn longest(&self) -> Candidate {
        self.candidates[self.candidates.len() - 1]
    }

    /// Gets the candidate chosen by the last resolution.
    #[inline(always)]
    pub const fn chosen(&self) -> Candidate {
        self.chosen
    }

    /// Gets the route weight computed by the last resolution.
    #[inline(always)]
    pub const fn weight(&self) -> f64 {
        self.weight
    }

    #[inline(always)]
    pub(crate) fn choose(&mut self, candidate: Candidate, weight: f64) {
        self.chosen = candidate;
        self.weight = weight;
    }
}

/// Directed acyclic graph of dictionary matches over a span.
///
/// Positions are relative to the span, and an edge `i -> j` exists iff
/// node `i` has a candidate ending at `j`.
#[derive(Clone, Debug, Default)]
pub struct Dag {
    nodes: Vec<DagNode>,
}

impl Dag {
    pub(crate) fn with_capacity(capacity: usize) -> Self {
        Self {
            nodes: Vec::with_capacity(capacity),
        }
    }

    #[inline(always)]
    pub(crate) fn push(&mut self, node: DagNode) {
        self.nodes.push(node);
    }

    /// Gets the number of positions.
    #[inline(always)]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Checks if the DAG has no positions.
    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Gets the node at position `i`.
    #[inline(always)]
    pub fn node(&self, i: usize) -> &DagNode {
        &self.nodes[i]
    }

    /// Gets all nodes.
    #[inline(always)]
    pub fn nodes(&self) -> &[DagNode] {
        &self.nodes
    }

    #[inline(always)]
    pub(crate) fn node_mut(&mut self, i: usize) -> &mut DagNode {
        &mut self.nodes[i]
    }

    /// Chooses the longest candidate at every position.
    pub(crate) fn choose_longest(&mut self) {
        for node in &mut self.nodes {
            let longest = node.longest();
            node.choose(longest, 0.0);
        }
    }

    /// Walks the chosen candidates from the head, returning `(start, end)` spans with
    /// exclusive ends.
    pub fn chosen_spans(&self) -> Vec<(usize, usize)> {
        let mut spans = vec![];
        let mut i = 0;
        while i < self.nodes.len() {
            let end = self.nodes[i].chosen().end() + 1;
            debug_assert!(i < end);
            spans.push((i, end));
            i = end;
        }
        spans
    }
}
