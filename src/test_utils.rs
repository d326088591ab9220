//! テスト用ユーティリティ関数
//!
//! 複数のテストモジュールで使用される共通のヘルパー関数を提供します。
#![cfg(test)]

use std::cell::RefCell;

use serde_json::{
    Value,
    json,
};

use crate::dictionary::Dictionary;
use crate::resolver::DiagnosticSink;

/// 受け取ったメッセージをすべて記録する Sink
#[derive(Debug, Default)]
pub(crate) struct RecordingSink {
    /// Messages in arrival order
    messages: RefCell<Vec<String>>,
}

impl RecordingSink {
    pub(crate) fn messages(&self) -> Vec<String> {
        self.messages.borrow().clone()
    }
}

impl DiagnosticSink for RecordingSink {
    fn warn(&self, message: &str) {
        self.messages.borrow_mut().push(message.to_string());
    }
}

/// `en` と `ja` の辞書（テキスト以外の値を含む）と、辞書でない `sn`
pub(crate) fn sample_dictionaries() -> Value {
    json!({
        "en": {
            "common.greet": "Hello",
            "common.greet.phrase": "Hello, {name}!",
            "common.count": 42,
            "common.nested": {"greet": "Hello"},
            "common.empty": null
        },
        "ja": {
            "common.greet": "こんにちは",
            "common.greet.phrase": "こんにちは、{name}さん！"
        },
        "sn": null
    })
}

/// [`sample_dictionaries`] の `en` 辞書
pub(crate) fn en_dictionary() -> Dictionary {
    let dictionaries = sample_dictionaries();
    dictionaries.get("en").map_or_else(Dictionary::new, |en| {
        Dictionary::from_value(en).unwrap_or_default()
    })
}
