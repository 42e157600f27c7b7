//! Public API Types
//!
//! 公開APIで使用する列挙型を定義するモジュール。

use std::path::Path;

/// 入力ファイルの形式
///
/// 正規化処理の入力として受け付ける表形式ファイルの種類を指定します。
/// 拡張子からの推論には[`InputFormat::from_path`]を使用します。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum InputFormat {
    /// プレーンテキスト（`.txt`）
    ///
    /// 内容は既に行指向の正規形とみなし、そのまま通過させます。
    PlainText,

    /// 区切りテキスト（`.csv`）
    ///
    /// csvクレートでレコードに分解した後、セルをタブで再結合します。
    Delimited,

    /// スプレッドシート（`.xlsx` / `.xls`）
    ///
    /// calamineでワークブックを開き、先頭シートのセルをタブで再結合します。
    Spreadsheet,
}

impl InputFormat {
    /// ファイルパスの拡張子から入力形式を推論する
    ///
    /// 拡張子は大文字小文字を区別せずに判定します。
    ///
    /// # 引数
    ///
    /// * `path` - 入力ファイルのパス
    ///
    /// # 戻り値
    ///
    /// * `Some(InputFormat)` - 対応する形式が判定できた場合
    /// * `None` - 拡張子がない、または対応外の拡張子の場合
    ///
    /// # 使用例
    ///
    /// ```rust
    /// use std::path::Path;
    /// use uxtidfmt::InputFormat;
    ///
    /// assert_eq!(
    ///     InputFormat::from_path(Path::new("export.txt")),
    ///     Some(InputFormat::PlainText)
    /// );
    /// assert_eq!(
    ///     InputFormat::from_path(Path::new("Refunds.XLSX")),
    ///     Some(InputFormat::Spreadsheet)
    /// );
    /// assert_eq!(InputFormat::from_path(Path::new("report.pdf")), None);
    /// ```
    pub fn from_path(path: &Path) -> Option<Self> {
        let extension = path.extension()?.to_str()?;
        Self::from_extension(extension)
    }

    /// 拡張子文字列から入力形式を推論する
    ///
    /// # 引数
    ///
    /// * `extension` - 先頭のドットを含まない拡張子（例: `"csv"`）
    ///
    /// # 戻り値
    ///
    /// * `Some(InputFormat)` - 対応する形式が判定できた場合
    /// * `None` - 対応外の拡張子の場合
    pub fn from_extension(extension: &str) -> Option<Self> {
        match extension.to_ascii_lowercase().as_str() {
            "txt" => Some(InputFormat::PlainText),
            "csv" => Some(InputFormat::Delimited),
            "xlsx" | "xls" => Some(InputFormat::Spreadsheet),
            _ => None,
        }
    }
}
