use std::sync::Arc;

use crate::config::SegmentConfig;
use crate::dag::Dag;
use crate::normalizer::Normalizer;
use crate::registry::Registry;
use crate::segmenter::{Pipeline, Spans};
use crate::word::Word;

/// Variant of maximum matching.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Hash)]
pub enum MmMode {
    /// Longest match from left to right.
    Forward,
    /// Longest match from right to left.
    Backward,
    /// Forward matching verified by backward matching.
    ///
    /// If the two disagree anywhere on the forward path, the whole chunk becomes one word.
    #[default]
    Bidirectional,
}

/// Segmenter based on greedy longest matching.
pub struct MmSegmenter {
    pipeline: Pipeline,
}

impl MmSegmenter {
    /// Creates a new instance.
    ///
    /// # Arguments
    ///
    ///  - `config`: Settings of segmentation.
    ///  - `registry`: Dictionaries of the supported languages.
    ///  - `normalizer`: Normalizer applied before matching, if any.
    pub fn new(
        config: SegmentConfig,
        registry: Arc<Registry>,
        normalizer: Option<Arc<Normalizer>>,
    ) -> Self {
        Self {
            pipeline: Pipeline::new(config, registry, normalizer),
        }
    }

    /// Segments `text` in the mode of [`SegmentConfig::mm_mode()`].
    pub fn cut(&self, text: &str, lang: &str) -> Vec<Word> {
        self.cut_with_mode(text, lang, self.pipeline.config().mm_mode)
    }

    /// Segments `text` in `mode`.
    pub fn cut_with_mode(&self, text: &str, lang: &str, mode: MmMode) -> Vec<Word> {
        self.pipeline
            .cut(text, lang, |_, dag| resolve_mm(dag, mode))
    }
}

fn resolve_mm(mut dag: Dag, mode: MmMode) -> Spans {
    match mode {
        MmMode::Forward => calc_mm(&mut dag),
        MmMode::Backward => calc_rmm(&mut dag),
        MmMode::Bidirectional => {
            if !calc_bmm(&mut dag) {
                return if dag.is_empty() {
                    vec![]
                } else {
                    vec![(0, dag.len())]
                };
            }
        }
    }
    dag.chosen_spans()
}

fn calc_mm(dag: &mut Dag) {
    dag.choose_longest();
}

/// Resolves positions from right to left. A position keeps its longest candidate unless
/// that candidate crosses the boundary of a word already chosen to its right, in which case
/// the longest candidate ending before that boundary is taken.
fn calc_rmm(dag: &mut Dag) {
    let len = dag.len();
    for i in (0..len).rev() {
        let longest = dag.node(i).longest();
        dag.node_mut(i).choose(longest, 0.0);
        if i == len - 1 || longest.end() == i {
            continue;
        }
        for j in (i + 1..len).rev() {
            let end = dag.node(i).chosen().end();
            if end < j || end >= dag.node(j).chosen().end() {
                continue;
            }
            // The first candidate ends at `i`, so one is always found.
            let shorter = dag
                .node(i)
                .candidates()
                .iter()
                .rev()
                .find(|c| c.end() < j)
                .copied();
            if let Some(c) = shorter {
                dag.node_mut(i).choose(c, 0.0);
            }
        }
    }
}

/// Returns `false` if backward matching disagrees with forward matching.
fn calc_bmm(dag: &mut Dag) -> bool {
    calc_mm(dag);
    let mm_ends: Vec<usize> = dag.nodes().iter().map(|n| n.chosen().end()).collect();
    calc_rmm(dag);
    if dag.len() != mm_ends.len() {
        return false;
    }
    let mut i = 0;
    while i < mm_ends.len() {
        if dag.node(i).chosen().end() != mm_ends[i] {
            return false;
        }
        i = mm_ends[i] + 1;
    }
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::dictionary::Dictionary;
    use crate::sentence::Sentence;

    fn dag(words: &[&str], text: &str) -> Dag {
        let dict = Dictionary::from_frequencies(words.iter().map(|&w| (w, 1.0))).unwrap();
        let sent = Sentence::new(text).unwrap();
        dict.build_dag(&sent.full_range(), 50)
    }

    #[test]
    fn test_forward() {
        let spans = resolve_mm(dag(&["a", "ab", "bc", "c"], "abc"), MmMode::Forward);
        assert_eq!(spans, vec![(0, 2), (2, 3)]);
    }

    #[test]
    fn test_backward() {
        let spans = resolve_mm(dag(&["a", "ab", "bc", "c"], "abc"), MmMode::Backward);
        assert_eq!(spans, vec![(0, 1), (1, 3)]);
    }

    #[test]
    fn test_backward_unknown() {
        let spans = resolve_mm(dag(&["ab", "bcd"], "xabcd"), MmMode::Backward);
        assert_eq!(spans, vec![(0, 1), (1, 2), (2, 5)]);
    }

    #[test]
    fn test_bidirectional_agree() {
        let spans = resolve_mm(dag(&["a", "ab", "b", "c"], "abc"), MmMode::Bidirectional);
        assert_eq!(spans, vec![(0, 2), (2, 3)]);
    }

    #[test]
    fn test_bidirectional_collapse() {
        let spans = resolve_mm(dag(&["a", "ab", "bc", "c"], "abc"), MmMode::Bidirectional);
        assert_eq!(spans, vec![(0, 3)]);
    }

    #[test]
    fn test_empty() {
        for mode in [MmMode::Forward, MmMode::Backward, MmMode::Bidirectional] {
            assert!(resolve_mm(Dag::default(), mode).is_empty());
        }
    }
}
