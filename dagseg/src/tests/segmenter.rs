use std::sync::Arc;

use crate::config::SegmentConfig;
use crate::dictionary::Dictionary;
use crate::normalizer::Normalizer;
use crate::registry::Registry;
use crate::segmenter::{MmMode, MmSegmenter, MpSegmenter};
use crate::word::Word;

const CN_DICT: &str = include_str!("./resources/cn.dict");
const EN_DICT: &str = include_str!("./resources/en.dict");
const STOP_WORDS: &str = include_str!("./resources/stop_words.txt");

fn registry() -> Arc<Registry> {
    let mut registry = Registry::new();
    registry.insert(
        "cn",
        Arc::new(Dictionary::from_reader(CN_DICT.as_bytes()).unwrap()),
    );
    registry.insert(
        "en",
        Arc::new(Dictionary::from_reader(EN_DICT.as_bytes()).unwrap()),
    );
    Arc::new(registry)
}

fn normalizer() -> Option<Arc<Normalizer>> {
    let dict = Dictionary::stop_words_from_reader(STOP_WORDS.as_bytes()).unwrap();
    Some(Arc::new(Normalizer::with_dictionary(dict)))
}

fn surfaces(words: &[Word]) -> Vec<&str> {
    words.iter().map(|w| w.text()).collect()
}

#[test]
fn test_mm_modes() {
    let mm = MmSegmenter::new(SegmentConfig::default(), registry(), normalizer());

    let words = mm.cut_with_mode("我是北京大学学生", "cn", MmMode::Forward);
    assert_eq!(surfaces(&words), vec!["我", "是", "北京大学", "学生"]);
    let words = mm.cut_with_mode("我是北京大学学生", "cn", MmMode::Backward);
    assert_eq!(surfaces(&words), vec!["我", "是", "北京大学", "学生"]);
    let words = mm.cut("我是北京大学学生", "cn");
    assert_eq!(surfaces(&words), vec!["我", "是", "北京大学", "学生"]);
}

#[test]
fn test_bmm_collapses_on_disagreement() {
    let mm = MmSegmenter::new(SegmentConfig::default(), registry(), normalizer());

    let words = mm.cut_with_mode("大学生活", "cn", MmMode::Forward);
    assert_eq!(surfaces(&words), vec!["大学生", "活"]);
    let words = mm.cut_with_mode("大学生活", "cn", MmMode::Backward);
    assert_eq!(surfaces(&words), vec!["大学", "生活"]);
    let words = mm.cut_with_mode("大学生活", "cn", MmMode::Bidirectional);
    assert_eq!(surfaces(&words), vec!["大学生活"]);

    // Only the disagreeing chunk collapses.
    let words = mm.cut("大学生活 我是学生", "cn");
    assert_eq!(surfaces(&words), vec!["大学生活", "我", "是", "学生"]);
}

#[test]
fn test_normalized_ranges_split_at_separators() {
    // The space is not a stop word here, yet it never reaches the DAG.
    let stop_words = Dictionary::from_stop_words([vec!['的' as u32]]);
    let normalizer = Some(Arc::new(Normalizer::with_dictionary(stop_words)));
    let mm = MmSegmenter::new(SegmentConfig::default(), registry(), normalizer.clone());

    let words = mm.cut("大学生活 我是学生", "cn");
    assert_eq!(surfaces(&words), vec!["大学生活", "我", "是", "学生"]);
    assert_eq!(words[1].range_char(), 5..6);

    let words = mm.cut_with_mode("大学生活 我的学生", "cn", MmMode::Forward);
    assert_eq!(surfaces(&words), vec!["大学生", "活", "我", "学生"]);

    let mp = MpSegmenter::new(SegmentConfig::default(), registry(), normalizer);
    let words = mp.cut("大学 生活", "cn");
    assert_eq!(surfaces(&words), vec!["大学", "生活"]);
}

#[test]
fn test_bmm_worked_example() {
    let dict =
        Dictionary::from_frequencies([("a", 100.0), ("ab", 50.0), ("b", 10.0), ("c", 10.0)])
            .unwrap();
    let mut registry = Registry::new();
    registry.insert("x", Arc::new(dict));
    let mm = MmSegmenter::new(SegmentConfig::default(), Arc::new(registry), None);
    assert_eq!(surfaces(&mm.cut_with_mode("abc", "x", MmMode::Forward)), vec!["ab", "c"]);
    assert_eq!(surfaces(&mm.cut_with_mode("abc", "x", MmMode::Backward)), vec!["ab", "c"]);
    assert_eq!(surfaces(&mm.cut("abc", "x")), vec!["ab", "c"]);
}

#[test]
fn test_mp() {
    let mp = MpSegmenter::new(SegmentConfig::default(), registry(), normalizer());
    let words = mp.cut("NewYork", "en");
    assert_eq!(surfaces(&words), vec!["new", "york"]);
    let words = mp.cut("大学生活", "cn");
    assert_eq!(surfaces(&words), vec!["大学", "生活"]);
    let words = mp.cut("我是中国人", "cn");
    assert_eq!(surfaces(&words), vec!["我", "是", "中国人"]);
}

#[test]
fn test_mp_unknown_codepoints() {
    let mp = MpSegmenter::new(SegmentConfig::default(), registry(), normalizer());
    let words = mp.cut("我是XY", "cn");
    assert_eq!(surfaces(&words), vec!["我", "是", "x", "y"]);
}

#[test]
fn test_digits_pass_through() {
    let mm = MmSegmenter::new(SegmentConfig::default(), registry(), normalizer());
    let words = mm.cut("北京2022", "cn");
    assert_eq!(surfaces(&words), vec!["北京", "2022"]);

    let mm = MmSegmenter::new(SegmentConfig::default(), registry(), None);
    let words = mm.cut("北京2022", "cn");
    assert_eq!(surfaces(&words), vec!["北京", "2", "0", "2", "2"]);
}

#[test]
fn test_without_normalizer() {
    let mp = MpSegmenter::new(SegmentConfig::default(), registry(), None);
    let words = mp.cut("New York-City的", "en");
    assert_eq!(surfaces(&words), vec!["new", "york", "city", "的"]);
    assert_eq!(words[2].range_byte(), 9..13);
}

#[test]
fn test_non_ascii_passthrough() {
    let config = SegmentConfig::new().non_ascii_passthrough("cn");
    let mm = MmSegmenter::new(config, registry(), normalizer());
    assert_eq!(surfaces(&mm.cut("我是学生", "cn")), vec!["我是学生"]);
    assert_eq!(surfaces(&mm.cut("NewYork", "cn")), vec!["n", "e", "w", "y", "o", "r", "k"]);

    let mm = MmSegmenter::new(SegmentConfig::default(), registry(), normalizer());
    assert_eq!(surfaces(&mm.cut("我是学生", "cn")), vec!["我", "是", "学生"]);
}

#[test]
fn test_custom_separators() {
    let config = SegmentConfig::new().separators("/").unwrap();
    let mp = MpSegmenter::new(config, registry(), None);
    let words = mp.cut("new/york city", "en");
    assert_eq!(surfaces(&words), vec!["new", "york", " ", "city"]);
}

#[test]
fn test_max_word_len_one() {
    let config = SegmentConfig::new().max_word_len(1);
    let mm = MmSegmenter::new(config.clone(), registry(), normalizer());
    let mp = MpSegmenter::new(config, registry(), normalizer());
    let text = "我是北京大学学生";
    for words in [
        mm.cut_with_mode(text, "cn", MmMode::Forward),
        mm.cut_with_mode(text, "cn", MmMode::Backward),
        mm.cut_with_mode(text, "cn", MmMode::Bidirectional),
        mp.cut(text, "cn"),
    ] {
        assert_eq!(words.len(), 8);
        assert!(words.iter().all(|w| w.char_len() == 1));
    }
}

#[test]
fn test_byte_spans_reconstruct_chunk() {
    let mm = MmSegmenter::new(SegmentConfig::default(), registry(), None);
    let mp = MpSegmenter::new(SegmentConfig::default(), registry(), None);
    for text in ["我是北京大学学生", "大学生活动", "清华大学中国人abc", "newyorkcity"] {
        for words in [
            mm.cut_with_mode(text, "cn", MmMode::Forward),
            mm.cut_with_mode(text, "cn", MmMode::Backward),
            mm.cut_with_mode(text, "cn", MmMode::Bidirectional),
            mp.cut(text, "cn"),
            mp.cut(text, "en"),
        ] {
            let mut offset = 0;
            for w in &words {
                assert_eq!(w.byte_offset(), offset);
                assert_eq!(&text[w.range_byte()], w.text());
                offset = w.range_byte().end;
            }
            assert_eq!(offset, text.len());
            assert_eq!(words.iter().map(|w| w.text()).collect::<String>(), text);
        }
    }
}

#[test]
fn test_unregistered_language() {
    let mm = MmSegmenter::new(SegmentConfig::default(), registry(), normalizer());
    let mp = MpSegmenter::new(SegmentConfig::default(), registry(), normalizer());
    for words in [mm.cut("Hello World", "fr"), mp.cut("Hello World", "fr")] {
        assert_eq!(surfaces(&words), vec!["hello world"]);
        assert_eq!(words[0].range_char(), 0..11);
    }
    assert_eq!(surfaces(&mm.cut("", "fr")), vec![""]);
}

#[test]
fn test_empty_text() {
    let mm = MmSegmenter::new(SegmentConfig::default(), registry(), normalizer());
    let mp = MpSegmenter::new(SegmentConfig::default(), registry(), None);
    assert!(mm.cut("", "cn").is_empty());
    assert!(mp.cut("", "cn").is_empty());
    assert!(mm.cut("的 了", "cn").is_empty());
    assert!(mp.cut(" - ", "cn").is_empty());
}
