//! Builder Module
//!
//! Fluent Builder APIを提供し、`Formatter`インスタンスを段階的に構築する。

use std::fs::File;
use std::io::{Read, Write};
use std::path::Path;

use crate::api::InputFormat;
use crate::error::UxtidFmtError;
use crate::render::{DEFAULT_TEMPLATE, VALUES_PLACEHOLDER};
use crate::security::SecurityConfig;
use crate::{extract, normalize, render};

/// 整形処理の設定を保持する内部構造体
#[derive(Debug, Clone)]
pub(crate) struct FormatterConfig {
    /// 対象列を示す見出しキーワード（大文字小文字を区別しない部分一致）
    pub heading_keyword: String,

    /// 識別子と判定するマーカー部分文字列
    pub id_marker: String,

    /// 末尾列フォールバックで要求する接頭辞
    pub id_prefix: String,

    /// トークンとして採用する最小文字数（この値を超える長さが必要）
    pub min_token_chars: usize,

    /// 出力テンプレート（プレースホルダを1つ含む）
    pub template: String,

    /// 入力サイズ制限
    pub security: SecurityConfig,
}

impl Default for FormatterConfig {
    fn default() -> Self {
        Self {
            heading_keyword: "UXTID".to_string(),
            id_marker: "COB1F".to_string(),
            id_prefix: "COB".to_string(),
            min_token_chars: 20,
            template: DEFAULT_TEMPLATE.to_string(),
            security: SecurityConfig::default(),
        }
    }
}

/// Fluent Builder APIを提供する構造体
///
/// `Formatter`インスタンスを段階的に構築するためのビルダーです。
/// すべての設定項目にデフォルト値が設定されており、必要な設定のみを
/// オーバーライドできます。
///
/// # 使用例
///
/// ```rust,no_run
/// use uxtidfmt::FormatterBuilder;
///
/// # fn main() -> Result<(), uxtidfmt::UxtidFmtError> {
/// let formatter = FormatterBuilder::new()
///     .with_heading_keyword("UTXID")
///     .build()?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct FormatterBuilder {
    /// 内部設定（構築中）
    config: FormatterConfig,
}

impl Default for FormatterBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl FormatterBuilder {
    /// デフォルト設定を持つビルダーインスタンスを生成する
    ///
    /// # デフォルト設定
    ///
    /// - 見出しキーワード: `UXTID`
    /// - 識別子マーカー: `COB1F`
    /// - 末尾列フォールバックの接頭辞: `COB`
    /// - 最小トークン文字数: 20（これを超える長さが必要）
    /// - テンプレート: 返金確定クエリの承認依頼メッセージ
    /// - 入力サイズ上限: 10MiB
    ///
    /// # 使用例
    ///
    /// ```rust,no_run
    /// use uxtidfmt::FormatterBuilder;
    ///
    /// let builder = FormatterBuilder::new();
    /// ```
    pub fn new() -> Self {
        Self {
            config: FormatterConfig::default(),
        }
    }

    /// 対象列を示す見出しキーワードを指定する
    ///
    /// キーワードは行全体に対する大文字小文字を区別しない部分一致で
    /// 検索されます。運用元のエクスポートによって `UXTID` と `UTXID` の
    /// 2通りの綴りが存在するため、ビルド時にどちらかを選択します。
    ///
    /// # 引数
    ///
    /// * `keyword` - 見出しキーワード
    ///
    /// # 使用例
    ///
    /// ```rust,no_run
    /// use uxtidfmt::FormatterBuilder;
    ///
    /// let builder = FormatterBuilder::new()
    ///     .with_heading_keyword("UTXID");
    /// ```
    pub fn with_heading_keyword(mut self, keyword: impl Into<String>) -> Self {
        self.config.heading_keyword = keyword.into();
        self
    }

    /// 識別子と判定するマーカー部分文字列を指定する
    ///
    /// データ行の列のうち、このマーカーを含みかつ最小文字数を超える
    /// 最初の列が識別子として採用されます。
    ///
    /// # 引数
    ///
    /// * `marker` - マーカー部分文字列（既定: `COB1F`）
    pub fn with_id_marker(mut self, marker: impl Into<String>) -> Self {
        self.config.id_marker = marker.into();
        self
    }

    /// 末尾列フォールバックで要求する接頭辞を指定する
    ///
    /// マーカーを含む列が見つからない行では、末尾の列のみを検査し、
    /// この接頭辞で始まる場合に採用します。
    ///
    /// # 引数
    ///
    /// * `prefix` - 接頭辞（既定: `COB`）
    pub fn with_id_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.config.id_prefix = prefix.into();
        self
    }

    /// トークンとして採用する最小文字数を指定する
    ///
    /// マーカー列・末尾列のどちらの規則でも、この文字数を超える長さの列
    /// だけが識別子として採用されます。
    ///
    /// # 引数
    ///
    /// * `chars` - 最小文字数（既定: 20）
    pub fn with_min_token_chars(mut self, chars: usize) -> Self {
        self.config.min_token_chars = chars;
        self
    }

    /// 出力テンプレートを指定する
    ///
    /// テンプレートは `{values}` プレースホルダをちょうど1つ含む必要が
    /// あります。プレースホルダは抽出された識別子の `'<値>',` 形式の行列に
    /// 置き換えられます。
    ///
    /// # 引数
    ///
    /// * `template` - テンプレート文字列
    ///
    /// # 制約
    ///
    /// * プレースホルダが存在しない、または複数ある場合、`build()`時に
    ///   `UxtidFmtError::Config`を返す
    ///
    /// # 使用例
    ///
    /// ```rust,no_run
    /// use uxtidfmt::FormatterBuilder;
    ///
    /// let builder = FormatterBuilder::new()
    ///     .with_template("SELECT * FROM txns WHERE id IN (\n{values}\n);");
    /// ```
    pub fn with_template(mut self, template: impl Into<String>) -> Self {
        self.config.template = template.into();
        self
    }

    /// 入力ファイルの最大サイズを指定する
    ///
    /// 上限を超える入力は解析を開始する前に`UxtidFmtError::SizeExceeded`で
    /// 拒否されます。
    ///
    /// # 引数
    ///
    /// * `bytes` - 最大サイズ（バイト、既定: 10MiB）
    pub fn with_max_input_size(mut self, bytes: u64) -> Self {
        self.config.security.max_input_file_size = bytes;
        self
    }

    /// 設定を検証し、`Formatter`インスタンスを生成する
    ///
    /// # 戻り値
    ///
    /// * `Ok(Formatter)` - 設定が有効な場合
    /// * `Err(UxtidFmtError::Config)` - 設定が無効な場合
    ///
    /// # 発生し得るエラー
    ///
    /// * `UxtidFmtError::Config(String)` - 設定の検証に失敗した場合
    ///   * 見出しキーワード・マーカー・接頭辞のいずれかが空
    ///   * テンプレートのプレースホルダが欠落、または複数存在する
    pub fn build(self) -> Result<Formatter, UxtidFmtError> {
        // 1. キーワード・マーカー・接頭辞の検証
        if self.config.heading_keyword.trim().is_empty() {
            return Err(UxtidFmtError::Config(
                "Heading keyword must not be empty".to_string(),
            ));
        }

        if self.config.id_marker.is_empty() {
            return Err(UxtidFmtError::Config(
                "Identifier marker must not be empty".to_string(),
            ));
        }

        if self.config.id_prefix.is_empty() {
            return Err(UxtidFmtError::Config(
                "Identifier prefix must not be empty".to_string(),
            ));
        }

        // 2. テンプレートの検証
        let placeholder_count = self.config.template.matches(VALUES_PLACEHOLDER).count();
        if placeholder_count != 1 {
            return Err(UxtidFmtError::Config(format!(
                "Template must contain the '{}' placeholder exactly once (found {})",
                VALUES_PLACEHOLDER, placeholder_count
            )));
        }

        // 3. Formatterインスタンス生成
        Ok(Formatter::new(self.config))
    }
}

/// 整形処理のファサード
///
/// 表形式ファイルからUXTID値を抽出し、SQLクエリメッセージに整形するための
/// メインエントリーポイントです。`FormatterBuilder`を使用して構築された
/// 設定に基づき、サイズ検査 → 正規化 → 抽出 → 整形の順に処理を実行します。
///
/// 1回の呼び出しは入力バイト列から出力文字列への純粋な変換であり、
/// 呼び出し間で共有される状態はありません。
///
/// # 使用例
///
/// ```rust,no_run
/// use uxtidfmt::{FormatterBuilder, InputFormat};
/// use std::fs::File;
///
/// # fn main() -> Result<(), uxtidfmt::UxtidFmtError> {
/// let formatter = FormatterBuilder::new().build()?;
/// let input = File::open("refunds.txt")?;
/// let query = formatter.format_to_string(input, InputFormat::PlainText)?;
/// println!("{}", query);
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct Formatter {
    /// 整形設定
    config: FormatterConfig,
}

impl Formatter {
    pub(crate) fn new(config: FormatterConfig) -> Self {
        Self { config }
    }

    /// 入力を処理し、整形結果をライターへ書き込む
    ///
    /// # 引数
    ///
    /// * `input` - 入力を読み込むためのリーダー（Readトレイトを実装）
    /// * `format` - 入力形式
    /// * `output` - 整形結果の出力先ライター（Writeトレイトを実装）
    ///
    /// # 戻り値
    ///
    /// * `Ok(())` - 整形に成功した場合
    /// * `Err(UxtidFmtError)` - エラーが発生した場合
    ///
    /// # 処理フロー
    ///
    /// 1. 入力をメモリへ読み込み、サイズ上限を検査
    /// 2. 入力形式に応じた正規化（行・タブ区切りの正規形へ）
    /// 3. 見出しセクションから識別子を抽出
    /// 4. テンプレートへ埋め込み、出力へ書き込み
    ///
    /// 途中のどの段階で失敗しても出力には何も書き込まれません。
    /// 部分的な結果が出力されることはありません。
    ///
    /// # 使用例
    ///
    /// ```rust,no_run
    /// use uxtidfmt::{FormatterBuilder, InputFormat};
    /// use std::fs::File;
    ///
    /// # fn main() -> Result<(), uxtidfmt::UxtidFmtError> {
    /// let formatter = FormatterBuilder::new().build()?;
    /// let input = File::open("refunds.csv")?;
    /// let output = File::create("query.txt")?;
    /// formatter.format(input, InputFormat::Delimited, output)?;
    /// # Ok(())
    /// # }
    /// ```
    pub fn format<R: Read, W: Write>(
        &self,
        input: R,
        format: InputFormat,
        mut output: W,
    ) -> Result<(), UxtidFmtError> {
        let rendered = self.format_to_string(input, format)?;
        output.write_all(rendered.as_bytes())?;
        output.flush()?;
        Ok(())
    }

    /// 入力を処理し、整形結果を文字列として返す
    ///
    /// # 引数
    ///
    /// * `input` - 入力を読み込むためのリーダー（Readトレイトを実装）
    /// * `format` - 入力形式
    ///
    /// # 戻り値
    ///
    /// * `Ok(String)` - 整形されたクエリメッセージ
    /// * `Err(UxtidFmtError)` - エラーが発生した場合
    ///
    /// # 使用例
    ///
    /// ```rust,no_run
    /// use uxtidfmt::{FormatterBuilder, InputFormat};
    /// use std::io::Cursor;
    ///
    /// # fn main() -> Result<(), uxtidfmt::UxtidFmtError> {
    /// let formatter = FormatterBuilder::new().build()?;
    /// let content = "UXTID\nABCCOB1Fxxxxxxxxxxxxxxxxxxxx11\n";
    /// let query = formatter.format_to_string(
    ///     Cursor::new(content.as_bytes()),
    ///     InputFormat::PlainText,
    /// )?;
    /// # Ok(())
    /// # }
    /// ```
    pub fn format_to_string<R: Read>(
        &self,
        mut input: R,
        format: InputFormat,
    ) -> Result<String, UxtidFmtError> {
        // 1. 入力をメモリへ読み込み、サイズ上限を検査
        let mut buffer = Vec::new();
        let bytes_read = input.read_to_end(&mut buffer)?;
        self.config
            .security
            .check_input_size(bytes_read as u64)
            .map_err(|(size, max)| UxtidFmtError::SizeExceeded { size, max })?;

        // 2. 正規化
        let canonical = normalize::normalize(&buffer, format)?;

        // 3. 抽出
        let values = extract::extract(&canonical, &self.config)?;

        // 4. テンプレートへ整形
        Ok(render::render(&values, &self.config.template))
    }

    /// パスで指定されたファイルを処理し、整形結果を文字列として返す
    ///
    /// 入力形式は拡張子から推論されます。対応外の拡張子は
    /// `UxtidFmtError::UnsupportedFormat`になります。
    ///
    /// # 引数
    ///
    /// * `path` - 入力ファイルのパス
    ///
    /// # 戻り値
    ///
    /// * `Ok(String)` - 整形されたクエリメッセージ
    /// * `Err(UxtidFmtError)` - エラーが発生した場合
    ///
    /// # 使用例
    ///
    /// ```rust,no_run
    /// use uxtidfmt::FormatterBuilder;
    ///
    /// # fn main() -> Result<(), uxtidfmt::UxtidFmtError> {
    /// let formatter = FormatterBuilder::new().build()?;
    /// let query = formatter.format_path("exports/refunds.xlsx")?;
    /// # Ok(())
    /// # }
    /// ```
    pub fn format_path<P: AsRef<Path>>(&self, path: P) -> Result<String, UxtidFmtError> {
        let path = path.as_ref();
        let format = InputFormat::from_path(path).ok_or_else(|| {
            let shown = match path.extension().and_then(|ext| ext.to_str()) {
                Some(ext) => format!(".{}", ext),
                None => "(no extension)".to_string(),
            };
            UxtidFmtError::UnsupportedFormat(shown)
        })?;

        let file = File::open(path)?;
        self.format_to_string(file, format)
    }
}
