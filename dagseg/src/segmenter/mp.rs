use std::sync::Arc;

use crate::common::MIN_ROUTE_WEIGHT;
use crate::config::SegmentConfig;
use crate::dag::Dag;
use crate::dictionary::Dictionary;
use crate::normalizer::Normalizer;
use crate::registry::Registry;
use crate::segmenter::Pipeline;
use crate::word::Word;

/// Segmenter choosing the path of the maximum log-probability.
pub struct MpSegmenter {
    pipeline: Pipeline,
}

impl MpSegmenter {
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

    /// Segments `text`.
    pub fn cut(&self, text: &str, lang: &str) -> Vec<Word> {
        self.pipeline.cut(text, lang, |dict, mut dag| {
            calc_dp(dict, &mut dag);
            dag.chosen_spans()
        })
    }
}

/// Computes the best route weight of each position from right to left.
///
/// Among candidates with the same score, the one ending first is kept.
fn calc_dp(dict: &Dictionary, dag: &mut Dag) {
    let len = dag.len();
    for i in (0..len).rev() {
        let node = dag.node(i);
        let mut best = node.candidates()[0];
        let mut best_weight = MIN_ROUTE_WEIGHT;
        for c in node.candidates() {
            let mut weight = dict.edge_score(c);
            if c.end() + 1 < len {
                weight += dag.node(c.end() + 1).weight();
            }
            if weight > best_weight {
                best = *c;
                best_weight = weight;
            }
        }
        dag.node_mut(i).choose(best, best_weight);
    }
}
