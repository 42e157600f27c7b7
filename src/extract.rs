//! Extract Module
//!
//! 正規形テキストから識別子の列を抽出するモジュール。
//! 見出しキーワードの探索、セクション終端の判定、行内トークンの選択を担います。
//!
//! 走査は明示的な2状態の状態機械として実装されています。
//!
//! - `Scanning`: 見出し行をまだ見つけていない状態
//! - `InSection`: 見出し行の直後からセクション終端までの状態
//!
//! セクション内の行は、ヘッダ判定に一致した時点で走査を打ち切ります。
//! トークンが選択できない行はエラーにせず読み飛ばします（終端とは区別される）。

use crate::builder::FormatterConfig;
use crate::error::UxtidFmtError;
use crate::types::{CanonicalText, ValueList};

/// 新しいヘッダとみなす接尾辞（大文字化した行と比較）
const HEADER_SUFFIXES: [&str; 5] = ["ID", "NAME", "DATE", "STATUS", "TYPE"];

/// ヘッダ判定の対象とする最小の行長（これ未満はデータではなくヘッダ扱い）
const MIN_DATA_LINE_CHARS: usize = 3;

/// 走査状態
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ScanState {
    /// 見出しキーワードを探索中
    Scanning,
    /// 見出し検出後、データ行を収集中
    InSection,
}

/// 正規形テキストから識別子リストを抽出する
///
/// テキストを先頭から1回だけ走査します。見出しキーワードを含む行（大文字小文字を
/// 区別しない部分一致）を見つけたらセクションに入り、以降の非空行からトークンを
/// 収集します。ヘッダ判定に一致する行が現れた時点でセクションは終了します。
///
/// # 引数
///
/// * `text` - 正規化済みテキスト
/// * `config` - 見出しキーワードとトークン選択規則を含む設定
///
/// # 戻り値
///
/// * `Ok(ValueList)` - 出現順の識別子リスト（長さ1以上）
/// * `Err(UxtidFmtError::HeadingNotFound)` - キーワードがどの行にも含まれない場合
/// * `Err(UxtidFmtError::NoValuesFound)` - 見出しはあるが有効な値が0件の場合
pub(crate) fn extract(
    text: &CanonicalText,
    config: &FormatterConfig,
) -> Result<ValueList, UxtidFmtError> {
    let keyword_upper = config.heading_keyword.to_uppercase();
    let mut state = ScanState::Scanning;
    let mut values: Vec<String> = Vec::new();

    for line in text.lines() {
        let trimmed = line.trim();

        match state {
            ScanState::Scanning => {
                // 見出し行自体はデータ候補にならない
                if trimmed.to_uppercase().contains(&keyword_upper) {
                    state = ScanState::InSection;
                }
            }
            ScanState::InSection => {
                // セクション内の空行は終端ではない
                if trimmed.is_empty() {
                    continue;
                }

                // 新しいヘッダの出現でセクション終了（この行は消費しない）
                if is_header_line(trimmed) {
                    break;
                }

                // トークンが選択できない行は読み飛ばす
                if let Some(token) = select_token(trimmed, config) {
                    values.push(token.to_string());
                }
            }
        }
    }

    match state {
        ScanState::Scanning => Err(UxtidFmtError::HeadingNotFound(
            config.heading_keyword.clone(),
        )),
        ScanState::InSection if values.is_empty() => Err(UxtidFmtError::NoValuesFound(
            config.heading_keyword.clone(),
        )),
        ScanState::InSection => Ok(ValueList::new(values)),
    }
}

/// 行が新しいヘッダに見えるかを判定する
///
/// 以下のいずれかに一致した行はヘッダとみなします（論理OR）。
///
/// 1. 行長が3文字未満
/// 2. 大文字化した行がASCII大文字と空白のみで構成される
/// 3. 大文字化した行が`ID` / `NAME` / `DATE` / `STATUS` / `TYPE`で終わる
/// 4. 大文字化した行が2文字以上の裸の大文字語
pub(crate) fn is_header_line(line: &str) -> bool {
    // 1. データとして短すぎる行
    if line.chars().count() < MIN_DATA_LINE_CHARS {
        return true;
    }

    let upper = line.to_uppercase();

    // 2. 英字と空白のみの行（数字・記号を含まない）
    if upper
        .chars()
        .all(|c| c.is_ascii_uppercase() || c.is_whitespace())
    {
        return true;
    }

    // 3. ヘッダに典型的な接尾辞で終わる行
    if HEADER_SUFFIXES
        .iter()
        .any(|suffix| upper.ends_with(suffix))
    {
        return true;
    }

    // 4. 短い大文字語のみの行
    if upper.chars().count() >= 2 && upper.chars().all(|c| c.is_ascii_uppercase()) {
        return true;
    }

    false
}

/// データ行から識別子トークンを選択する
///
/// 行を空白の並びで列に分割し、2段階の規則で1つだけ選びます。
///
/// 1. マーカー部分文字列（既定: `COB1F`）を含み、かつ最小文字数を超える
///    最初の列
/// 2. 該当がなければ末尾の列のみを検査し、接頭辞（既定: `COB`）で始まり
///    かつ最小文字数を超える場合に採用
///
/// どちらにも当てはまらない場合は`None`（呼び出し側で行ごと読み飛ばし）。
///
/// 末尾列のフォールバックは、整形の崩れた行で識別子以外の列を拾う可能性が
/// ある既知のヒューリスティックです。
pub(crate) fn select_token<'a>(line: &'a str, config: &FormatterConfig) -> Option<&'a str> {
    let columns: Vec<&str> = line.split_whitespace().collect();

    // 1. マーカーを含む列を優先
    for &column in &columns {
        if column.contains(&config.id_marker) && column.chars().count() > config.min_token_chars {
            return Some(column);
        }
    }

    // 2. 末尾列のフォールバック
    let last = *columns.last()?;
    if last.starts_with(&config.id_prefix) && last.chars().count() > config.min_token_chars {
        return Some(last);
    }

    None
}
