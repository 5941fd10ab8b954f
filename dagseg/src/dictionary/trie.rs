use bincode::{
    de::Decoder,
    enc::Encoder,
    error::{DecodeError, EncodeError},
    Decode, Encode,
};
use hashbrown::HashMap;

use crate::dag::{Candidate, Dag, DagNode};
use crate::dictionary::WordIdx;
use crate::unicode::Rune;

const ROOT: usize = 0;

#[derive(Default, Clone, Debug)]
struct Node {
    children: HashMap<u32, u32>,
    value: Option<WordIdx>,
}

/// Prefix tree over codepoint sequences.
///
/// All nodes are stored in a single vector and children are referred to by index.
#[derive(Clone, Debug)]
pub struct Trie {
    nodes: Vec<Node>,
}

impl Default for Trie {
    fn default() -> Self {
        Self::new()
    }
}

impl Trie {
    pub fn new() -> Self {
        Self {
            nodes: vec![Node::default()],
        }
    }

    /// Inserts `key`. An existing value for the same key is overwritten,
    /// and an empty key is ignored.
    pub fn insert(&mut self, key: &[u32], value: WordIdx) {
        if key.is_empty() {
            return;
        }
        let mut node_id = ROOT;
        for &c in key {
            node_id = match self.nodes[node_id].children.get(&c) {
                Some(&child) => child as usize,
                None => {
                    let child = self.nodes.len();
                    self.nodes.push(Node::default());
                    // The node count never exceeds the total length of the keys.
                    self.nodes[node_id].children.insert(c, child as u32);
                    child
                }
            };
        }
        self.nodes[node_id].value = Some(value);
    }

    #[inline(always)]
    fn child(&self, node_id: usize, c: u32) -> Option<usize> {
        self.nodes[node_id]
            .children
            .get(&c)
            .map(|&child| child as usize)
    }

    /// Looks up the whole `key`.
    pub fn find_exact<I>(&self, key: I) -> Option<WordIdx>
    where
        I: IntoIterator<Item = u32>,
    {
        let mut node_id = ROOT;
        let mut is_empty = true;
        for c in key {
            node_id = self.child(node_id, c)?;
            is_empty = false;
        }
        if is_empty {
            None
        } else {
            self.nodes[node_id].value
        }
    }

    /// Builds the DAG of all matches starting at each position of `span`,
    /// each at most `max_len` codepoints long.
    ///
    /// Every node gets a candidate ending at its own position even if the codepoint is not
    /// a key, so that no position is left without an edge.
    pub fn find_dag(&self, span: &[Rune], max_len: usize) -> Dag {
        let mut dag = Dag::with_capacity(span.len());
        for (i, rune) in span.iter().enumerate() {
            let mut node_id = self.child(ROOT, rune.codepoint());
            let single = node_id.and_then(|n| self.nodes[n].value);
            let mut dag_node = DagNode::new(rune.codepoint(), Candidate::new(i, single));

            let mut j = i + 1;
            while let Some(n) = node_id {
                if j >= span.len() || j - i + 1 > max_len {
                    break;
                }
                node_id = self.child(n, span[j].codepoint());
                if let Some(value) = node_id.and_then(|n| self.nodes[n].value) {
                    dag_node.push(Candidate::new(j, Some(value)));
                }
                j += 1;
            }
            dag.push(dag_node);
        }
        dag
    }

    /// Gets the number of nodes, including the root.
    #[inline(always)]
    pub fn num_nodes(&self) -> usize {
        self.nodes.len()
    }

    /// Checks if every stored value is less than `num_values`.
    pub fn verify(&self, num_values: usize) -> bool {
        self.nodes
            .iter()
            .filter_map(|node| node.value)
            .all(|v| (v.word_id() as usize) < num_values)
    }
}

type RawNode = (Vec<(u32, u32)>, Option<u32>);

impl Encode for Trie {
    fn encode<E: Encoder>(&self, encoder: &mut E) -> Result<(), EncodeError> {
        let raw: Vec<RawNode> = self
            .nodes
            .iter()
            .map(|node| {
                let mut children: Vec<(u32, u32)> =
                    node.children.iter().map(|(&c, &n)| (c, n)).collect();
                children.sort_unstable();
                (children, node.value.map(WordIdx::word_id))
            })
            .collect();
        Encode::encode(&raw, encoder)?;
        Ok(())
    }
}

impl Decode for Trie {
    fn decode<D: Decoder>(decoder: &mut D) -> Result<Self, DecodeError> {
        let raw: Vec<RawNode> = Decode::decode(decoder)?;
        if raw.is_empty() {
            return Err(DecodeError::Other("trie has no root node"));
        }
        let num_nodes = raw.len();
        let mut nodes = Vec::with_capacity(num_nodes);
        for (children, value) in raw {
            if children.iter().any(|&(_, n)| n as usize >= num_nodes || n == 0) {
                return Err(DecodeError::Other("trie has an invalid child index"));
            }
            nodes.push(Node {
                children: children.into_iter().collect(),
                value: value.map(WordIdx::new),
            });
        }
        Ok(Self { nodes })
    }
}

bincode::impl_borrow_decode!(Trie);
