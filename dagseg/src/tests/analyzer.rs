use crate::analyzer::Analyzer;
use crate::config::SegmentConfig;
use crate::dictionary::Dictionary;
use crate::segmenter::MmMode;
use crate::word::Word;

const CN_DICT_PATH: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/src/tests/resources/cn.dict");
const EN_DICT_PATH: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/src/tests/resources/en.dict");
const STOP_WORDS_PATH: &str = concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/src/tests/resources/stop_words.txt"
);

fn analyzer() -> Analyzer {
    let mut analyzer = Analyzer::default();
    analyzer.add_dictionary("cn", CN_DICT_PATH).unwrap();
    analyzer.add_dictionary("en", EN_DICT_PATH).unwrap();
    analyzer.add_stop_words(STOP_WORDS_PATH).unwrap();
    analyzer.init();
    analyzer
}

fn surfaces(words: &[Word]) -> Vec<&str> {
    words.iter().map(|w| w.text()).collect()
}

#[test]
fn test_needs_segmentation() {
    let analyzer = analyzer();
    assert!(analyzer.needs_segmentation("cn"));
    assert!(analyzer.needs_segmentation("en"));
    assert!(!analyzer.needs_segmentation("id"));
    let mut languages: Vec<_> = analyzer.registry().languages().collect();
    languages.sort_unstable();
    assert_eq!(languages, vec!["cn", "en"]);
}

#[test]
fn test_normalize() {
    let analyzer = analyzer();
    let words = analyzer.normalize("我的北京，2022年!");
    assert_eq!(surfaces(&words), vec!["我", "北京", "2022", "年"]);
    assert_eq!(analyzer.normalize_to_string("New York..."), "new york");
}

#[test]
fn test_cut() {
    let analyzer = analyzer();
    let words = analyzer.cut("我是北京大学的学生。", "cn");
    assert_eq!(surfaces(&words), vec!["我", "是", "北京大学", "学生"]);
    assert_eq!(words[2].range_char(), 2..6);
    assert_eq!(words[3].range_char(), 7..9);

    let words = analyzer.cut("大学生活，我是学生", "cn");
    assert_eq!(surfaces(&words), vec!["大学生活", "我", "是", "学生"]);

    let words = analyzer.cut_with_mode("大学生活", "cn", MmMode::Forward);
    assert_eq!(surfaces(&words), vec!["大学生", "活"]);
}

#[test]
fn test_cut_mp() {
    let analyzer = analyzer();
    let words = analyzer.cut_mp("NewYork City!", "en");
    assert_eq!(surfaces(&words), vec!["new", "york", "city"]);

    let words = analyzer.cut_mp("大学生活，2022", "cn");
    assert_eq!(surfaces(&words), vec!["大学", "生活", "2022"]);
}

#[test]
fn test_unregistered_language() {
    let analyzer = analyzer();
    assert_eq!(surfaces(&analyzer.cut("Selamat Pagi", "id")), vec!["selamat pagi"]);
    assert_eq!(surfaces(&analyzer.cut_mp("Selamat Pagi", "id")), vec!["selamat pagi"]);
}

#[test]
fn test_mm_mode_config() {
    let mut analyzer = Analyzer::new(SegmentConfig::new().mm_mode(MmMode::Backward));
    analyzer.add_dictionary("cn", CN_DICT_PATH).unwrap();
    analyzer.init();
    assert_eq!(surfaces(&analyzer.cut("大学生活", "cn")), vec!["大学", "生活"]);
}

#[test]
fn test_before_init() {
    let mut analyzer = Analyzer::default();
    analyzer.add_dictionary("cn", CN_DICT_PATH).unwrap();
    assert!(!analyzer.is_initialized());
    assert!(analyzer.needs_segmentation("cn"));
    assert_eq!(surfaces(&analyzer.cut("我是学生", "cn")), vec!["我是学生"]);
    assert_eq!(surfaces(&analyzer.normalize("A B")), vec!["a b"]);
    assert_eq!(analyzer.normalize_to_string("A B"), "a b");

    analyzer.init();
    assert!(analyzer.is_initialized());
    assert_eq!(surfaces(&analyzer.cut("我是学生", "cn")), vec!["我", "是", "学生"]);
}

#[test]
fn test_changes_require_init() {
    let mut analyzer = analyzer();
    let dict = Dictionary::from_frequencies([("selamat", 1.0), ("pagi", 1.0)]).unwrap();
    analyzer.insert_dictionary("id", dict);
    assert!(!analyzer.is_initialized());
    analyzer.init();
    assert_eq!(surfaces(&analyzer.cut_mp("selamatpagi", "id")), vec!["selamat", "pagi"]);
}

#[test]
fn test_first_dictionary_is_kept() {
    let mut analyzer = analyzer();
    let dict = Dictionary::from_frequencies([("大学生活", 1.0)]).unwrap();
    analyzer.insert_dictionary("cn", dict);
    assert!(analyzer.is_initialized());
    assert_eq!(analyzer.registry().get("cn").unwrap().len(), 14);
}

#[test]
fn test_without_stop_words() {
    let mut analyzer = Analyzer::default();
    analyzer.add_dictionary("en", EN_DICT_PATH).unwrap();
    analyzer.init();
    assert_eq!(analyzer.normalize_to_string("New York!"), "new york!");
    assert_eq!(surfaces(&analyzer.cut_mp("New York!", "en")), vec!["new", "york", "!"]);
}

#[test]
fn test_set_stop_words() {
    let mut analyzer = analyzer();
    let stop_words = Dictionary::from_stop_words([vec!['学' as u32]]);
    analyzer.set_stop_words(stop_words);
    analyzer.init();
    assert_eq!(analyzer.normalize_to_string("大学生"), "大 生");
}

#[test]
fn test_missing_files() {
    let mut analyzer = Analyzer::default();
    assert!(analyzer.add_dictionary("cn", "/nonexistent/cn.dict").is_err());
    assert!(analyzer.add_stop_words("/nonexistent/stop_words.txt").is_err());
    assert!(!analyzer.needs_segmentation("cn"));
}
