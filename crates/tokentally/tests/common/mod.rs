use tokentally_settings::Settings;

pub const ENGLISH: &str = "The quick brown fox jumps over the lazy dog.";
pub const CHINESE: &str = "你好，世界！今天天气很好。";
pub const MIXED: &str = "Release 2024 版本 adds 新功能 (fast) and fixes 3 bugs!";
pub const CODE: &str = "fn add(a: i32) -> i32 { a + 1 }";

pub fn sample_settings(estimator: &str, warning: usize, danger: usize) -> Settings {
    Settings {
        tokenizer_type: estimator.to_string(),
        warning_threshold: warning,
        danger_threshold: danger,
        ..Settings::default()
    }
}

/// Roughly `kb` kilobytes of mixed English, Chinese, numbers and code
#[allow(dead_code)]
pub fn large_document(kb: usize) -> String {
    let block = format!("{ENGLISH}\n{CHINESE}\n{MIXED}\n{CODE}\n");
    let mut doc = String::with_capacity(kb * 1024 + block.len());
    while doc.len() < kb * 1024 {
        doc.push_str(&block);
    }
    doc
}
