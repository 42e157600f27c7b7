//! Error Types Module
//!
//! クレート全体で使用する構造化エラー型を定義するモジュール。
//! `thiserror`を使用して、エラーの自動変換とメッセージフォーマットを実現する。

use thiserror::Error;

/// uxtidfmtクレート全体で使用するエラー型
///
/// このエラー型は、表形式ファイルの読み込み、正規化、値抽出、整形処理中に
/// 発生するすべてのエラーを統一的に扱うために使用されます。
///
/// # エラーの種類
///
/// - `Io`: I/O操作中に発生したエラー（ファイル読み込み失敗など）
/// - `Spreadsheet`: スプレッドシートの解析中に発生したエラー（calamine由来）
/// - `Delimited`: 区切りテキストの解析中に発生したエラー（csv由来）
/// - `UnsupportedFormat`: 対応していない入力形式が指定されたエラー
/// - `HeadingNotFound`: 見出しキーワードが入力のどの行にも含まれないエラー
/// - `NoValuesFound`: 見出しは見つかったが、有効な値が1件もないエラー
/// - `SizeExceeded`: 入力サイズが上限を超えたエラー
/// - `Config`: 設定の検証に失敗したエラー
///
/// # 使用例
///
/// ```rust,no_run
/// use uxtidfmt::UxtidFmtError;
/// use std::fs::File;
///
/// fn open_export(path: &str) -> Result<(), UxtidFmtError> {
///     let file = File::open(path)?;  // Ioエラーが自動的に変換される
///     // ... 処理 ...
///     Ok(())
/// }
/// ```
#[derive(Error, Debug)]
pub enum UxtidFmtError {
    /// I/O操作中に発生したエラー
    ///
    /// ファイルの読み込み失敗、書き込み失敗など、標準ライブラリの
    /// `std::io::Error`が発生した場合に使用されます。
    ///
    /// `#[from]`属性により、`std::io::Error`から自動的に変換されます。
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// スプレッドシートの解析中に発生したエラー
    ///
    /// calamineクレートがワークブックを解析する際に発生したエラーです。
    /// ファイル形式が不正、破損したファイル、シートが存在しないなどが
    /// 原因となります。
    ///
    /// `#[from]`属性により、`calamine::Error`から自動的に変換されます。
    #[error("Failed to parse spreadsheet file: {0}")]
    Spreadsheet(#[from] calamine::Error),

    /// 区切りテキストの解析中に発生したエラー
    ///
    /// csvクレートがレコードを解析する際に発生したエラーです。
    ///
    /// `#[from]`属性により、`csv::Error`から自動的に変換されます。
    #[error("Failed to parse delimited file: {0}")]
    Delimited(#[from] csv::Error),

    /// 対応していない入力形式が指定されたエラー
    ///
    /// 入力ファイルの拡張子が `.txt` / `.csv` / `.xlsx` / `.xls` の
    /// いずれでもない場合に発生します。
    #[error("Unsupported input format: {0}")]
    UnsupportedFormat(String),

    /// 見出しキーワードが見つからないエラー
    ///
    /// 入力のどの行にも見出しキーワード（大文字小文字を区別しない部分一致）が
    /// 含まれない場合に発生します。値には検索したキーワードが格納されます。
    #[error("Heading '{0}' not found in input")]
    HeadingNotFound(String),

    /// 有効な値が1件も見つからないエラー
    ///
    /// 見出し行は検出されたものの、後続の行から識別子として採用できる
    /// トークンが1つも選択されなかった場合に発生します。
    #[error("No identifier values found after heading '{0}'")]
    NoValuesFound(String),

    /// 入力サイズが上限を超えたエラー
    ///
    /// 入力ファイルのバイト数が`SecurityConfig`の上限を超えた場合に、
    /// 解析を開始する前に発生します。
    #[error("Input size {size} bytes exceeds maximum allowed {max} bytes")]
    SizeExceeded {
        /// 実際の入力サイズ（バイト）
        size: u64,
        /// 許容される最大サイズ（バイト）
        max: u64,
    },

    /// 設定の検証に失敗したエラー
    ///
    /// `FormatterBuilder::build()`時に設定を検証し、無効な設定が検出された
    /// 場合に発生します。例えば、見出しキーワードが空文字列の場合や、
    /// テンプレートにプレースホルダが含まれない場合などです。
    #[error("Configuration error: {0}")]
    Config(String),
}
