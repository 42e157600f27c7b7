//! Types Module
//!
//! パイプライン各段で受け渡す共通データ型を定義するモジュール。
//! 各段は前段の値から新しい値を生成する線形パイプラインであり、
//! 構築後に変更される型はありません。

/// 1行分のセル列（欠損セルは空文字列で補完済み）
pub(crate) type Row = Vec<String>;

/// 正規化済みテキスト
///
/// 行を改行で、行内のセルをタブで結合した正規形の文字列。
/// 元入力に現れた行の順序をそのまま保持します。
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct CanonicalText(String);

impl CanonicalText {
    /// 既に行指向となっている内容をそのまま包む
    pub fn new(content: String) -> Self {
        Self(content)
    }

    /// セル行の列から正規形テキストを構築する
    ///
    /// 各行のセルをタブ1文字で結合し、行同士を改行で結合します。
    pub fn from_rows(rows: Vec<Row>) -> Self {
        let joined = rows
            .iter()
            .map(|row| row.join("\t"))
            .collect::<Vec<_>>()
            .join("\n");
        Self(joined)
    }

    /// 内容への参照を取得
    #[allow(dead_code)]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// 行単位のイテレータを取得
    pub fn lines(&self) -> std::str::Lines<'_> {
        self.0.lines()
    }
}

/// 抽出された識別子の順序付きリスト
///
/// 順序は正規形テキスト中の出現順。抽出が成功した場合、長さは必ず1以上です
/// （空リストは`NoValuesFound`として抽出段で弾かれます）。
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct ValueList(Vec<String>);

impl ValueList {
    pub fn new(values: Vec<String>) -> Self {
        Self(values)
    }

    #[allow(dead_code)]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[allow(dead_code)]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }
}
